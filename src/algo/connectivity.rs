/*!
Connectivity queries: weak connectivity over the undirected projection,
reachability, and directed bridges.

A *directed bridge* `(u, v)` is a directed edge without which `v` is no
longer reachable from `u`. Finding all of them probes one reachability
search per edge, i.e. O(E·(V+E)) — fine for library-scale graphs, not tuned
for hot paths.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;
use tracing::debug;

use crate::{
    EdgeId, Endpoints, Graph, GraphFlavor, NodeId,
    network::{Network, WeightFn},
    ops::GraphOrder,
};

impl<D, E, F: GraphFlavor, S> Graph<D, E, F, S> {
    /// Returns *true* if the graph is connected when edge direction is
    /// ignored. The zero-node graph counts as connected.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.vertices().next() else {
            return true;
        };
        self.bfs(start).undirected().count() == self.len()
    }

    /// Returns *true* if there is a directed path from `from` to `to`.
    /// Every node reaches itself.
    pub fn is_reachable(&self, from: NodeId, to: NodeId) -> bool {
        self.bfs(from).visits(to)
    }

    /// Returns every directed bridge as a `(source, target)` name pair,
    /// in edge-arena order.
    pub fn directed_bridges(&self) -> Vec<(String, String)> {
        self.directed_bridges_masked(&|eid| self.edge_live(eid))
    }

    pub(crate) fn directed_bridges_masked(
        &self,
        live: &dyn Fn(EdgeId) -> bool,
    ) -> Vec<(String, String)> {
        let bridges: Vec<_> = self
            .edge_handles()
            .filter(|&eid| live(eid))
            .filter(|&eid| {
                let Endpoints(u, v) = self.edge_endpoints(eid).unwrap();
                !reaches_without(self, u, v, eid, live)
            })
            .map(|eid| {
                let Endpoints(u, v) = self.edge_endpoints(eid).unwrap();
                (
                    self.node_name(u).unwrap().to_owned(),
                    self.node_name(v).unwrap().to_owned(),
                )
            })
            .collect();

        debug!(count = bridges.len(), "directed bridges");
        bridges
    }
}

impl<D, E, S> Network<D, E, S> {
    /// [`Graph::is_connected`] under a custom weight function: edges whose
    /// derived weight is ≤ 0 are treated as absent
    pub fn is_connected_with(&self, wf: impl WeightFn<D, E, S>) -> bool {
        let live = |eid: EdgeId| self.derived_weight(eid, &wf) > 0.0;
        let Some(start) = self.vertices().next() else {
            return true;
        };

        let mut visited = FxHashSet::default();
        visited.insert(start);
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for v in self.masked_neighbors_of(u, &live) {
                if visited.insert(v) {
                    queue.push_back(v);
                }
            }
        }
        visited.len() == self.len()
    }

    /// [`Graph::directed_bridges`] under a custom weight function
    pub fn directed_bridges_with(
        &self,
        wf: impl WeightFn<D, E, S>,
    ) -> Vec<(String, String)> {
        self.directed_bridges_masked(&|eid| self.derived_weight(eid, &wf) > 0.0)
    }
}

/// Breadth-first reachability of `to` from `from` with one edge excluded
fn reaches_without<D, E, F: GraphFlavor, S>(
    graph: &Graph<D, E, F, S>,
    from: NodeId,
    to: NodeId,
    excluded: EdgeId,
    live: &dyn Fn(EdgeId) -> bool,
) -> bool {
    if from == to {
        return true;
    }
    let mut visited = FxHashSet::default();
    visited.insert(from);
    let mut queue = VecDeque::from([from]);
    while let Some(u) = queue.pop_front() {
        for (v, eid) in graph.masked_out_edges_of(u, live) {
            if eid == excluded || !visited.insert(v) {
                continue;
            }
            if v == to {
                return true;
            }
            queue.push_back(v);
        }
    }
    false
}
