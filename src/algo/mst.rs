/*!
Minimum spanning trees over the undirected projection of a weighted network.

Two classical constructions are provided:

- [`Network::minimum_spanning_tree`]: Kruskal's algorithm — deduplicate the
  directed edge set into canonical undirected candidates, sort ascending by
  weight, reject cycles through a union-find forest.
- [`Network::prim`]: Prim's algorithm — grow the tree from a start node,
  re-sorting the candidate edge list each round instead of maintaining a
  heap. Asymptotically worse, trivially correct, fine at library scale.

On connected inputs with distinct weights both produce the same tree; on
ties the edge sets may differ while the total weight agrees. Edges deriving
a weight ≤ 0 are treated as absent.
*/

use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::debug;

use crate::{
    Endpoints, NodeId, Weight,
    network::{Network, WeightFn, stored_weight},
    ops::{Adjacency, GraphOrder},
    utils::UnionFind,
};

/// A spanning forest of a network: the chosen edges and their summed weight.
///
/// Edges are reported as `(source, target, weight)` name triples in the
/// direction they exist in the underlying network.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    /// Chosen edges in construction order
    pub edges: Vec<(String, String, Weight)>,
    /// Summed derived weight over the chosen edges
    pub total: Weight,
}

impl SpanningTree {
    fn new() -> Self {
        Self {
            edges: Vec::new(),
            total: 0.0,
        }
    }

    fn push(&mut self, source: String, target: String, weight: Weight) {
        self.edges.push((source, target, weight));
        self.total += weight;
    }
}

impl<D, E, S> Network<D, E, S> {
    /// Kruskal's minimum spanning tree (a forest on disconnected inputs)
    pub fn minimum_spanning_tree(&self) -> SpanningTree {
        self.minimum_spanning_tree_with(stored_weight)
    }

    /// [`Network::minimum_spanning_tree`] under a custom weight function
    pub fn minimum_spanning_tree_with(&self, wf: impl WeightFn<D, E, S>) -> SpanningTree {
        // canonical undirected candidates: one entry per endpoint pair, the
        // first-seen weight (edge-arena order) wins on duplicates
        let mut taken: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
        let mut candidates: Vec<(NodeId, NodeId, Weight)> = Vec::new();
        for eid in self.edge_handles() {
            let w = self.derived_weight(eid, &wf);
            if w <= 0.0 {
                continue;
            }
            let Endpoints(u, v) = self.edge_endpoints(eid).unwrap();
            if taken.insert((u.min(v), u.max(v))) {
                candidates.push((u, v, w));
            }
        }

        // stable sort keeps first-seen order among equal weights
        candidates.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

        let mut forest = UnionFind::new(self.slot_bound());
        let mut tree = SpanningTree::new();
        for (u, v, w) in candidates {
            if forest.union(u, v) {
                tree.push(
                    self.node_name(u).unwrap().to_owned(),
                    self.node_name(v).unwrap().to_owned(),
                    w,
                );
            }
        }

        debug!(edges = tree.edges.len(), total = tree.total, "kruskal");
        tree
    }

    /// Prim's minimum spanning tree, grown from an arbitrary node.
    ///
    /// Spans only the start node's component; the empty network yields an
    /// empty tree.
    pub fn prim(&self) -> SpanningTree {
        self.prim_with(None, stored_weight)
    }

    /// [`Network::prim`] with an explicit start node and weight function.
    ///
    /// `start: None` picks an arbitrary node; an unknown start name yields
    /// an empty tree.
    pub fn prim_with(&self, start: Option<&str>, wf: impl WeightFn<D, E, S>) -> SpanningTree {
        let start = match start {
            Some(name) => self.node_id(name),
            None => self.vertices().next(),
        };
        let Some(start) = start else {
            return SpanningTree::new();
        };

        let mut in_tree = vec![false; self.slot_bound()];
        in_tree[start as usize] = true;

        // crossing candidates as (weight, outside node, directed instance)
        let mut candidates: Vec<(Weight, NodeId, NodeId, NodeId)> = Vec::new();
        let absorb = |u: NodeId, candidates: &mut Vec<(Weight, NodeId, NodeId, NodeId)>| {
            for (v, eid) in self.out_edges_of(u) {
                let w = self.derived_weight(eid, &wf);
                if w > 0.0 {
                    candidates.push((w, v, u, v));
                }
            }
            for (v, eid) in self.in_edges_of(u) {
                let w = self.derived_weight(eid, &wf);
                if w > 0.0 {
                    candidates.push((w, v, v, u));
                }
            }
        };
        absorb(start, &mut candidates);

        let mut tree = SpanningTree::new();
        loop {
            // the candidate list is re-sorted every round; no heap involved
            candidates
                .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

            let Some(pos) = candidates.iter().position(|c| !in_tree[c.1 as usize]) else {
                break;
            };
            let (w, next, a, b) = candidates.remove(pos);
            in_tree[next as usize] = true;
            tree.push(
                self.node_name(a).unwrap().to_owned(),
                self.node_name(b).unwrap().to_owned(),
                w,
            );
            absorb(next, &mut candidates);
        }

        debug!(edges = tree.edges.len(), total = tree.total, "prim");
        tree
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::SpanningTree;
    use crate::prelude::*;

    fn weighted_net(edges: &[(&str, &str, f64)]) -> Network<(), ()> {
        let mut net = Network::new();
        for &(u, v, _) in edges {
            for name in [u, v] {
                if !net.contains_node(name) {
                    net.add_node(name, ()).unwrap();
                }
            }
        }
        for &(u, v, w) in edges {
            net.add_edge_weighted(u, v, (), w).unwrap();
        }
        net
    }

    fn tree_nodes(tree: &SpanningTree) -> usize {
        tree.edges
            .iter()
            .flat_map(|(a, b, _)| [a, b])
            .unique()
            .count()
    }

    #[test]
    fn kruskal_picks_the_light_edges() {
        let net = weighted_net(&[
            ("a", "b", 1.0),
            ("b", "c", 2.0),
            ("c", "a", 3.0),
            ("c", "d", 1.0),
        ]);

        let tree = net.minimum_spanning_tree();
        assert_eq!(tree.edges.len(), 3);
        assert_eq!(tree.total, 4.0);
        assert!(!tree
            .edges
            .iter()
            .any(|(a, b, _)| (a == "c" && b == "a") || (a == "a" && b == "c")));
    }

    #[test]
    fn duplicate_pairs_keep_the_first_seen_weight() {
        let mut net = weighted_net(&[("a", "b", 2.0)]);
        net.add_edge_weighted("b", "a", (), 50.0).unwrap();

        let tree = net.minimum_spanning_tree();
        assert_eq!(tree.edges.len(), 1);
        assert_eq!(tree.total, 2.0);
    }

    #[test]
    fn prim_spans_the_start_component() {
        let net = weighted_net(&[("a", "b", 1.0), ("b", "c", 2.0), ("x", "y", 1.0)]);

        let from_a = net.prim_with(Some("a"), stored_weight);
        assert_eq!(from_a.edges.len(), 2);
        assert_eq!(from_a.total, 3.0);

        let from_x = net.prim_with(Some("x"), stored_weight);
        assert_eq!(from_x.edges.len(), 1);
        assert_eq!(from_x.total, 1.0);
    }

    #[test]
    fn empty_network_yields_an_empty_tree() {
        let net: Network<(), ()> = Network::new();
        assert_eq!(net.prim().edges.len(), 0);
        assert_eq!(net.minimum_spanning_tree().edges.len(), 0);
    }

    #[test]
    fn unknown_start_yields_an_empty_tree() {
        let net = weighted_net(&[("a", "b", 1.0)]);
        assert!(net.prim_with(Some("zz"), stored_weight).edges.is_empty());
    }

    #[test]
    fn kruskal_and_prim_agree_on_total_weight() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..10 {
            let n = 12u32;
            let mut net: Network<(), ()> = Network::new();
            for i in 0..n {
                net.add_node(i.to_string(), ()).unwrap();
            }
            // random connected network: a ring plus chords
            for i in 0..n {
                let w = rng.random_range(1..100) as f64;
                net.add_edge_weighted(&i.to_string(), &((i + 1) % n).to_string(), (), w)
                    .unwrap();
            }
            for _ in 0..n {
                let u = rng.random_range(0..n).to_string();
                let v = rng.random_range(0..n).to_string();
                let w = rng.random_range(1..100) as f64;
                let _ = net.add_edge_weighted(&u, &v, (), w);
            }

            let kruskal = net.minimum_spanning_tree();
            let prim = net.prim();
            assert_eq!(kruskal.edges.len(), (n - 1) as usize);
            assert_eq!(prim.edges.len(), (n - 1) as usize);
            assert_eq!(kruskal.total, prim.total);
            assert_eq!(tree_nodes(&kruskal), n as usize);
        }
    }
}
