/*!
Single-pair shortest paths on weighted networks.

This is the O(V²) rendition of Dijkstra's algorithm: a linear minimum scan
over the unsettled nodes instead of a priority queue. For the small and
medium networks this library targets, the scan beats the bookkeeping of a
heap and keeps the tie-break rule trivial: the first minimum in scan order
wins. Weights are assumed non-negative; edges deriving a weight ≤ 0 are
treated as absent.
*/

use tracing::debug;

use crate::{
    INVALID_NODE, NodeId, Weight,
    network::{Network, WeightFn, stored_weight},
    ops::{Adjacency, GraphOrder},
};

/// A routed path through a network: the node names from start to end and the
/// summed derived weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedPath {
    /// Visited node names, starting at the start node and ending at the end
    /// node
    pub nodes: Vec<String>,
    /// Total derived weight along the path
    pub distance: Weight,
}

impl<D, E, S> Network<D, E, S> {
    /// Computes the lightest directed path between two named nodes.
    ///
    /// Returns `None` if the end is unreachable or either name is unknown —
    /// a defined no-result outcome, not an error.
    pub fn shortest_path(&self, start: &str, end: &str) -> Option<RoutedPath> {
        self.shortest_path_with(start, end, stored_weight)
    }

    /// [`Network::shortest_path`] under a custom weight function
    pub fn shortest_path_with(
        &self,
        start: &str,
        end: &str,
        wf: impl WeightFn<D, E, S>,
    ) -> Option<RoutedPath> {
        let s = self.node_id(start)?;
        let t = self.node_id(end)?;

        let bound = self.slot_bound();
        let mut dist = vec![Weight::INFINITY; bound];
        let mut prev = vec![INVALID_NODE; bound];
        let mut settled = vec![false; bound];
        dist[s as usize] = 0.0;

        loop {
            // linear scan: the first minimum in arena order wins ties
            let mut next: Option<NodeId> = None;
            for u in self.vertices() {
                if settled[u as usize] || dist[u as usize].is_infinite() {
                    continue;
                }
                if next.is_none_or(|b| dist[u as usize] < dist[b as usize]) {
                    next = Some(u);
                }
            }
            let Some(u) = next else { break };
            settled[u as usize] = true;

            for (v, eid) in self.out_edges_of(u) {
                let w = self.derived_weight(eid, &wf);
                if w <= 0.0 {
                    continue;
                }
                if dist[u as usize] + w < dist[v as usize] {
                    dist[v as usize] = dist[u as usize] + w;
                    prev[v as usize] = u;
                }
            }
        }

        if dist[t as usize].is_infinite() {
            debug!(start, end, "unreachable");
            return None;
        }

        let mut ids = vec![t];
        let mut u = t;
        while u != s {
            u = prev[u as usize];
            ids.push(u);
        }
        ids.reverse();

        Some(RoutedPath {
            nodes: ids
                .into_iter()
                .map(|u| self.node_name(u).unwrap().to_owned())
                .collect(),
            distance: dist[t as usize],
        })
    }
}
