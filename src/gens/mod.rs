/*!
# Network Generators

This module provides a suite of builder-style generators for random and
structured networks.

Each generator allows parameterized control over the structural properties
of the network (number of nodes, wiring probability, neighborhood size) and
produces a fresh [`Network`] on demand. The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using the builder methods (e.g., `.nodes(n).prob(p)`).
3. Generate via `generate(&mut rng)`.

Every generator draws from a caller-supplied [`Rng`], never from an ambient
random source, so seeded generators make density and degree-distribution
properties reproducible. Deterministic constructions (ring lattice,
pseudofractal, Apollonian) take the generator for interface uniformity and
ignore it.

Generated nodes are named by their decimal index `"0" .. "n-1"`; undirected
wiring is materialized as two opposite directed edges of weight `1.0`.
*/

use rand::Rng;

use crate::{NodeId, Network, NumNodes};

mod blockmodel;
mod gnp;
mod lattice;
mod preferential;
mod recursive;
mod substructures;

pub use blockmodel::*;
pub use gnp::*;
pub use lattice::*;
pub use preferential::*;
pub use recursive::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting a wiring probability.
pub trait ProbabilityGen {
    /// Sets the wiring probability of the generator.
    fn prob(self, p: f64) -> Self;
}

/// General trait for a configurable network generator.
pub trait NetworkGenerator {
    /// Generates a fresh network from the configured parameters.
    fn generate<R>(&self, rng: &mut R) -> Network
    where
        R: Rng;
}

/// Creates a network of `n` isolated nodes named by their decimal index.
///
/// In a fresh arena the handle of node `"i"` is exactly `i`, which the
/// generators below rely on.
pub(crate) fn indexed_nodes(n: NumNodes) -> Network {
    let mut net = Network::new();
    for i in 0..n {
        net.add_node(i.to_string(), ())
            .expect("indices are unique names");
    }
    net
}

/// Wires an undirected pair as two opposite directed edges of weight `1.0`,
/// skipping directions that already exist.
pub(crate) fn wire_pair(net: &mut Network, u: NodeId, v: NodeId) {
    let _ = net.insert_edge(u, v, (), 1.0);
    let _ = net.insert_edge(v, u, (), 1.0);
}
