/*!
Cycle enumeration and Hamiltonian search.

Both are exhaustive backtracking searches with exponential worst cases and
are meant as best-effort utilities for small and medium graphs, not as
production hot paths.
*/

use fxhash::FxHashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    EdgeId, Graph, GraphFlavor, NodeId,
    network::{Network, WeightFn},
    ops::GraphOrder,
};

/// Scratch path of the backtracking searches; stays inline for the common
/// short cycles.
type Path = SmallVec<[NodeId; 8]>;

impl<D, E, F: GraphFlavor, S> Graph<D, E, F, S> {
    /// Enumerates every elementary directed cycle, each reported once as its
    /// node-name sequence (the start node is not repeated at the end).
    ///
    /// Rotations of the same cycle are deduplicated through a canonical
    /// path signature. Exponential worst case.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        self.cycles_masked(&|eid| self.edge_live(eid))
    }

    pub(crate) fn cycles_masked(&self, live: &dyn Fn(EdgeId) -> bool) -> Vec<Vec<String>> {
        let mut search = CycleSearch {
            graph: self,
            live,
            on_path: FxHashSet::default(),
            seen: FxHashSet::default(),
            found: Vec::new(),
        };

        let mut path = Path::new();
        for s in self.vertices() {
            path.push(s);
            search.on_path.insert(s);
            search.explore(s, s, &mut path);
            search.on_path.remove(&s);
            path.pop();
        }

        debug!(count = search.found.len(), "cycles");
        search.found
    }

    /// Searches for a Hamiltonian cycle: a cycle visiting every node exactly
    /// once. Returns the name sequence including the closing return to the
    /// start (`n + 1` entries), or `None`.
    ///
    /// Exhaustive backtracking bounded by the graph order; exponential
    /// worst case.
    pub fn hamiltonian_cycle(&self) -> Option<Vec<String>> {
        self.hamiltonian_masked(&|eid| self.edge_live(eid))
    }

    pub(crate) fn hamiltonian_masked(&self, live: &dyn Fn(EdgeId) -> bool) -> Option<Vec<String>> {
        let start = self.vertices().next()?;
        let mut path = Path::new();
        path.push(start);
        let mut visited = FxHashSet::default();
        visited.insert(start);

        if !self.extend_tour(start, start, &mut path, &mut visited, live) {
            return None;
        }

        let mut names: Vec<String> = path
            .iter()
            .map(|&u| self.node_name(u).unwrap().to_owned())
            .collect();
        names.push(self.node_name(start).unwrap().to_owned());
        Some(names)
    }

    fn extend_tour(
        &self,
        start: NodeId,
        u: NodeId,
        path: &mut Path,
        visited: &mut FxHashSet<NodeId>,
        live: &dyn Fn(EdgeId) -> bool,
    ) -> bool {
        if path.len() == self.len() {
            return self.has_masked_edge(u, start, live);
        }

        let candidates: Vec<NodeId> = self
            .masked_out_edges_of(u, live)
            .map(|(v, _)| v)
            .filter(|v| !visited.contains(v))
            .collect();
        for v in candidates {
            path.push(v);
            visited.insert(v);
            if self.extend_tour(start, v, path, visited, live) {
                return true;
            }
            visited.remove(&v);
            path.pop();
        }
        false
    }
}

impl<D, E, S> Network<D, E, S> {
    /// [`Graph::cycles`] under a custom weight function: edges whose derived
    /// weight is ≤ 0 are treated as absent
    pub fn cycles_with(&self, wf: impl WeightFn<D, E, S>) -> Vec<Vec<String>> {
        self.cycles_masked(&|eid| self.derived_weight(eid, &wf) > 0.0)
    }

    /// [`Graph::hamiltonian_cycle`] under a custom weight function
    pub fn hamiltonian_cycle_with(&self, wf: impl WeightFn<D, E, S>) -> Option<Vec<String>> {
        self.hamiltonian_masked(&|eid| self.derived_weight(eid, &wf) > 0.0)
    }
}

struct CycleSearch<'a, D, E, F: GraphFlavor, S> {
    graph: &'a Graph<D, E, F, S>,
    live: &'a dyn Fn(EdgeId) -> bool,
    /// recursion-stack marker set
    on_path: FxHashSet<NodeId>,
    /// canonical signatures of already reported cycles
    seen: FxHashSet<String>,
    found: Vec<Vec<String>>,
}

impl<D, E, F: GraphFlavor, S> CycleSearch<'_, D, E, F, S> {
    fn explore(&mut self, start: NodeId, u: NodeId, path: &mut Path) {
        let successors: Vec<NodeId> = self
            .graph
            .masked_out_edges_of(u, self.live)
            .map(|(v, _)| v)
            .collect();

        for v in successors {
            if v == start {
                self.record(path);
            } else if !self.on_path.contains(&v) {
                path.push(v);
                self.on_path.insert(v);
                self.explore(start, v, path);
                self.on_path.remove(&v);
                path.pop();
            }
        }
    }

    /// Deduplicates rotations: the signature starts the cycle at its
    /// smallest node handle
    fn record(&mut self, path: &Path) {
        let pivot = path
            .iter()
            .enumerate()
            .min_by_key(|&(_, &u)| u)
            .map(|(i, _)| i)
            .unwrap();
        let signature = path[pivot..]
            .iter()
            .chain(path[..pivot].iter())
            .map(|u| u.to_string())
            .collect::<Vec<_>>()
            .join(">");

        if self.seen.insert(signature) {
            self.found.push(
                path.iter()
                    .map(|&u| self.graph.node_name(u).unwrap().to_owned())
                    .collect(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn rotations_are_reported_once() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c"] {
            g.add_node(name, ()).unwrap();
        }
        g.add_edge("a", "b", ()).unwrap();
        g.add_edge("b", "c", ()).unwrap();
        g.add_edge("c", "a", ()).unwrap();

        let cycles = g.cycles();
        assert_eq!(cycles, vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn overlapping_cycles_are_distinct() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c"] {
            g.add_node(name, ()).unwrap();
        }
        g.add_edge("a", "b", ()).unwrap();
        g.add_edge("b", "a", ()).unwrap();
        g.add_edge("b", "c", ()).unwrap();
        g.add_edge("c", "a", ()).unwrap();

        let mut cycles = g.cycles();
        cycles.sort();
        assert_eq!(cycles, vec![vec!["a", "b"], vec!["a", "b", "c"]]);
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        g.add_node("a", ()).unwrap();
        g.add_edge("a", "a", ()).unwrap();
        assert_eq!(g.cycles(), vec![vec!["a"]]);
    }

    #[test]
    fn dag_has_no_cycles() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c"] {
            g.add_node(name, ()).unwrap();
        }
        g.add_edge("a", "b", ()).unwrap();
        g.add_edge("a", "c", ()).unwrap();
        g.add_edge("b", "c", ()).unwrap();
        assert!(g.cycles().is_empty());
    }

    #[test]
    fn hamiltonian_tour_on_a_ring() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c", "d"] {
            g.add_node(name, ()).unwrap();
        }
        g.add_edge("a", "b", ()).unwrap();
        g.add_edge("b", "c", ()).unwrap();
        g.add_edge("c", "d", ()).unwrap();
        g.add_edge("d", "a", ()).unwrap();

        let tour = g.hamiltonian_cycle().unwrap();
        assert_eq!(tour.len(), 5);
        assert_eq!(tour, vec!["a", "b", "c", "d", "a"]);
    }

    #[test]
    fn no_tour_without_closing_edge() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c"] {
            g.add_node(name, ()).unwrap();
        }
        g.add_edge("a", "b", ()).unwrap();
        g.add_edge("b", "c", ()).unwrap();

        assert!(g.hamiltonian_cycle().is_none());
    }

    #[test]
    fn soft_exclusion_breaks_the_tour() {
        let mut net: Network<(), &str> = Network::new();
        for name in ["a", "b", "c"] {
            net.add_node(name, ()).unwrap();
        }
        net.add_edge("a", "b", "ab").unwrap();
        net.add_edge("b", "c", "bc").unwrap();
        net.add_edge("c", "a", "ca").unwrap();

        assert!(net.hamiltonian_cycle().is_some());
        assert!(net
            .hamiltonian_cycle_with(|w, &tag, _| if tag == "bc" { 0.0 } else { w })
            .is_none());
    }
}
