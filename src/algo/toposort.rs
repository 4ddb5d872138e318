//! Topological ordering of directed acyclic graphs via iterative in-degree
//! zeroing (Kahn's algorithm) through the FIFO frontier.

use std::collections::VecDeque;

use tracing::debug;

use crate::{
    EdgeId, Graph, GraphFlavor, NodeId,
    algo::traversal::Frontier,
    network::{Network, WeightFn},
    ops::GraphOrder,
};

impl<D, E, F: GraphFlavor, S> Graph<D, E, F, S> {
    /// Returns the node names in a topological order, or `None` if the
    /// graph contains a directed cycle.
    ///
    /// A cyclic input is a defined no-result outcome, not an error.
    pub fn topological_order(&self) -> Option<Vec<String>> {
        self.topo_ids(&|eid| self.edge_live(eid)).map(|ids| {
            ids.into_iter()
                .map(|u| self.node_name(u).unwrap().to_owned())
                .collect()
        })
    }

    /// Kahn's algorithm over the masked edge set, by handle
    pub(crate) fn topo_ids(&self, live: &dyn Fn(EdgeId) -> bool) -> Option<Vec<NodeId>> {
        let mut in_degs = vec![0u32; self.slot_bound()];
        for u in self.vertices() {
            for (v, _) in self.masked_out_edges_of(u, live) {
                in_degs[v as usize] += 1;
            }
        }

        let mut queue: VecDeque<NodeId> = VecDeque::default();
        for u in self.vertices().filter(|&u| in_degs[u as usize] == 0) {
            Frontier::push(&mut queue, u);
        }

        let mut order = Vec::with_capacity(self.len());
        while let Some(u) = Frontier::pop(&mut queue) {
            order.push(u);
            for (v, _) in self.masked_out_edges_of(u, live) {
                in_degs[v as usize] -= 1;
                if in_degs[v as usize] == 0 {
                    Frontier::push(&mut queue, v);
                }
            }
        }

        if order.len() != self.len() {
            debug!(
                processed = order.len(),
                total = self.len(),
                "cycle detected during topological sort"
            );
            return None;
        }
        Some(order)
    }
}

impl<D, E, S> Network<D, E, S> {
    /// [`Graph::topological_order`] under a custom weight function: edges
    /// whose derived weight is ≤ 0 are treated as absent
    pub fn topological_order_with(&self, wf: impl WeightFn<D, E, S>) -> Option<Vec<String>> {
        self.topo_ids(&|eid| self.derived_weight(eid, &wf) > 0.0)
            .map(|ids| {
                ids.into_iter()
                    .map(|u| self.node_name(u).unwrap().to_owned())
                    .collect()
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn every_edge_respects_the_order() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c", "d", "e"] {
            g.add_node(name, ()).unwrap();
        }
        for (u, v) in [("c", "a"), ("b", "a"), ("a", "d"), ("a", "e"), ("d", "e")] {
            g.add_edge(u, v, ()).unwrap();
        }

        let order = g.topological_order().unwrap();
        assert_eq!(order.len(), 5);
        let pos = |name: &str| order.iter().position(|n| n == name).unwrap();
        for (u, v) in [("c", "a"), ("b", "a"), ("a", "d"), ("a", "e"), ("d", "e")] {
            assert!(pos(u) < pos(v));
        }
    }

    #[test]
    fn cyclic_graph_has_no_order() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c"] {
            g.add_node(name, ()).unwrap();
        }
        g.add_edge("a", "b", ()).unwrap();
        g.add_edge("b", "c", ()).unwrap();
        g.add_edge("c", "a", ()).unwrap();

        assert!(g.topological_order().is_none());
    }

    #[test]
    fn sources_surface_in_arena_order() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c"] {
            g.add_node(name, ()).unwrap();
        }
        g.add_edge("b", "c", ()).unwrap();

        assert_eq!(g.topological_order().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn soft_exclusion_can_break_a_cycle() {
        let mut net: Network<(), &str> = Network::new();
        for name in ["a", "b", "c"] {
            net.add_node(name, ()).unwrap();
        }
        net.add_edge("a", "b", "ab").unwrap();
        net.add_edge("b", "c", "bc").unwrap();
        net.add_edge("c", "a", "ca").unwrap();

        assert!(net.topological_order().is_none());
        let order = net
            .topological_order_with(|w, &tag, _| if tag == "ca" { -1.0 } else { w })
            .unwrap();
        assert_eq!(order, vec!["a", "b", "c"]);
    }
}
