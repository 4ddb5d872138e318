/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : Nodes carry a numeric value, edges a numeric weight — optional via the [`Plain`] flavor
- keyed : Nodes are addressed by unique string names and carry opaque payloads
- directed : Every edge has an orientation; the undirected view is a projection

# Representation

Nodes and edges live in slot arenas indexed by stable `u32` handles ([`NodeId`] / [`EdgeId`]);
freed slots are recycled. Edges reference their endpoints by handle, never by pointer, so the
mutual node/edge bookkeeping forms no reference cycles. Per node, adjacency is kept as
insertion-ordered `(neighbor, edge)` lists in both directions, which makes traversal orders
deterministic.

### Flavors

One container, [`Graph`], serves both layers through the [`GraphFlavor`] seam:

- [`DiGraph`] (= [`Plain`] flavor): plain nodes and edges — the unweighted algorithm layer.
- [`Network`] (= [`Weighted`] flavor): numeric node values and edge weights (default `1.0`)
  — the weighted layer, with every algorithm reading weights through a single pluggable
  [`WeightFn`](network::WeightFn) seam. Deriving a weight ≤ 0 soft-excludes an edge without
  structural mutation.

# Design

Algorithms are provided directly as methods on the graph types; configurable machinery
(traversal walks, generators) follows the *Builder* / *Setter* pattern: configure the struct,
then run it. Traversals come in two forms — lazy iterators ([`algo::Walk`]) the caller drives
at its own pace, and callback drivers whose per-node failures are contained and routed to an
error callback while the traversal continues.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes the graph types, handle types, operation traits and common results,
- [`algo`] includes traversal, connectivity, bridges, cycles, Hamiltonian search, topological
  order, bipartite testing, shortest paths, spanning trees and scheduling,
- [`gens`] includes a suite of random & structured network generators (Erdős–Rényi, ring
  lattice, Watts–Strogatz, Barabási–Albert, pseudofractal, Apollonian, stochastic block
  model, latent space) plus substructure wiring, all drawing from a caller-seeded generator,
- [`classify`] includes network statistics and the heuristic model classifiers.

Serialization goes through the [`Snapshot`](snapshot::Snapshot) form (serde); see [`snapshot`].

In most use-cases, `use wgraphs::prelude::*;` suffices for your needs.
*/

pub mod algo;
pub mod classify;
pub mod edge;
pub mod error;
pub mod flavor;
pub mod gens;
pub mod graph;
pub mod network;
pub mod node;
pub mod ops;
pub mod snapshot;
pub(crate) mod testing;
pub mod utils;

/// Numeric type of node values, edge weights and derived weights
pub type Weight = f64;

pub use edge::{EdgeId, EdgeRef, Endpoints, NumEdges};
pub use error::GraphError;
pub use flavor::{GraphFlavor, Plain, Weighted};
pub use graph::Graph;
pub use network::{DiGraph, Network};
pub use node::{INVALID_NODE, NodeId, NodeRef, NumNodes};

/// `wgraphs::prelude` includes the graph types, handle and record types, all
/// operation traits as well as the common algorithm results.
pub mod prelude {
    pub use super::{
        EdgeId, EdgeRef, Endpoints, Graph, GraphError, GraphFlavor, INVALID_NODE, NodeId, NodeRef,
        NumEdges, NumNodes, Plain, Weight, Weighted,
        algo::{BfsWalk, CriticalPath, DfsWalk, Flow, Frontier, RoutedPath, SpanningTree, Walk},
        gens::Substructures,
        network::{AdjacencyMatrix, DiGraph, Network, WeightFn, stored_weight},
        ops::{Adjacency, AdjacencyTest, GraphOrder},
        snapshot::Snapshot,
    };
}
