/*!
# Bipartite Test

Two-coloring of the undirected projection through a breadth-first sweep over
every component. The first same-color adjacency conflict decides the answer.
*/

use std::collections::VecDeque;

use tracing::debug;

use crate::{
    EdgeId, Graph, GraphFlavor,
    network::{Network, WeightFn},
    ops::GraphOrder,
};

impl<D, E, F: GraphFlavor, S> Graph<D, E, F, S> {
    /// Computes a valid bipartition of the undirected projection, if one
    /// exists: the two sides as name lists. Returns `None` if the graph is
    /// not bipartite.
    pub fn bipartition(&self) -> Option<(Vec<String>, Vec<String>)> {
        self.bipartition_masked(&|eid| self.edge_live(eid))
    }

    /// Tests whether the undirected projection is bipartite
    pub fn is_bipartite(&self) -> bool {
        self.bipartition().is_some()
    }

    pub(crate) fn bipartition_masked(
        &self,
        live: &dyn Fn(EdgeId) -> bool,
    ) -> Option<(Vec<String>, Vec<String>)> {
        const UNCOLORED: i8 = -1;
        let mut colors = vec![UNCOLORED; self.slot_bound()];

        for start in self.vertices() {
            if colors[start as usize] != UNCOLORED {
                continue;
            }
            colors[start as usize] = 0;
            let mut queue = VecDeque::from([start]);

            while let Some(u) = queue.pop_front() {
                let expected = 1 - colors[u as usize];
                for v in self.masked_neighbors_of(u, live) {
                    match colors[v as usize] {
                        UNCOLORED => {
                            colors[v as usize] = expected;
                            queue.push_back(v);
                        }
                        c if c == expected => {}
                        _ => {
                            debug!("same-color adjacency, not bipartite");
                            return None;
                        }
                    }
                }
            }
        }

        let mut left = Vec::new();
        let mut right = Vec::new();
        for u in self.vertices() {
            let name = self.node_name(u).unwrap().to_owned();
            if colors[u as usize] == 0 {
                left.push(name);
            } else {
                right.push(name);
            }
        }
        Some((left, right))
    }
}

impl<D, E, S> Network<D, E, S> {
    /// [`Graph::is_bipartite`] under a custom weight function: edges whose
    /// derived weight is ≤ 0 are treated as absent
    pub fn is_bipartite_with(&self, wf: impl WeightFn<D, E, S>) -> bool {
        self.bipartition_masked(&|eid| self.derived_weight(eid, &wf) > 0.0)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn path(names: &[&str]) -> DiGraph<(), ()> {
        let mut g = DiGraph::new();
        for name in names {
            g.add_node(*name, ()).unwrap();
        }
        for pair in names.windows(2) {
            g.add_edge(pair[0], pair[1], ()).unwrap();
        }
        g
    }

    #[test]
    fn paths_are_bipartite() {
        let g = path(&["a", "b", "c", "d"]);
        let (left, right) = g.bipartition().unwrap();
        assert_eq!(left, vec!["a", "c"]);
        assert_eq!(right, vec!["b", "d"]);
    }

    #[test]
    fn odd_cycle_is_not_bipartite() {
        let mut g = path(&["a", "b", "c"]);
        g.add_edge("c", "a", ()).unwrap();
        assert!(!g.is_bipartite());
    }

    #[test]
    fn even_cycle_is_bipartite() {
        let mut g = path(&["a", "b", "c", "d"]);
        g.add_edge("d", "a", ()).unwrap();
        assert!(g.is_bipartite());
    }

    #[test]
    fn conflict_through_incoming_edges_is_seen() {
        // a -> b and c -> b with a -> c: the projection is a triangle
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c"] {
            g.add_node(name, ()).unwrap();
        }
        g.add_edge("a", "b", ()).unwrap();
        g.add_edge("c", "b", ()).unwrap();
        g.add_edge("a", "c", ()).unwrap();

        assert!(!g.is_bipartite());
    }

    #[test]
    fn soft_exclusion_restores_bipartiteness() {
        let mut net: Network<(), &str> = Network::new();
        for name in ["a", "b", "c"] {
            net.add_node(name, ()).unwrap();
        }
        net.add_edge("a", "b", "ab").unwrap();
        net.add_edge("b", "c", "bc").unwrap();
        net.add_edge("c", "a", "ca").unwrap();

        assert!(!net.is_bipartite());
        assert!(net.is_bipartite_with(|w, &tag, _| if tag == "ca" { 0.0 } else { w }));
    }
}
