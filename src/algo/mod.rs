/*!
# Graph Algorithms

This module provides the algorithm layers built on top of the keyed graph
container. The plain variants live directly on every [`Graph`](crate::Graph);
weight-aware `*_with` overrides live on [`Network`](crate::Network), all of
them interpreting edge weights through the single
[`WeightFn`](crate::network::WeightFn) seam.

All public types are re-exported at the top level of this module:
```rust
use wgraphs::algo::*;
```
*/

mod bipartite;
mod bridges;
mod connectivity;
mod cycles;
mod mst;
mod scheduling;
mod shortest_path;
mod toposort;
mod traversal;

pub use mst::SpanningTree;
pub use scheduling::CriticalPath;
pub use shortest_path::RoutedPath;
pub use traversal::{BfsWalk, DfsWalk, Flow, Frontier, Walk};
