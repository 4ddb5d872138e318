/*!
Graph traversal: iterator-driven walks and callback-driven drivers.

This module provides:
- The [`Frontier`] seam: any FIFO container yields breadth-first order, any
  LIFO container yields depth-first order. `VecDeque` and `Vec` are the two
  standard implementations; anything conforming can be substituted.
- [`Walk`], a lazy traversal iterator (single-source or whole-graph with
  per-component restarts), with node/edge exclusion and an early-stop node.
- Callback drivers (`bfs_each` & friends) that visit each discovered node
  exactly once: a visit callback may end the traversal via [`Flow::Stop`],
  and a *failing* callback does not end it — the error is routed to the
  error callback and the driver continues with the next discovered node.

The iterator form is the suspension-capable variant: the caller decides when
the next node is produced and may do arbitrary (including asynchronously
suspending) work in between. No two walks over the same container observe
each other, but mutating the container while a walk is alive is prevented by
the borrow it holds.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;

use crate::{EdgeId, Graph, GraphFlavor, NodeId, ops::GraphOrder};

/// Abstraction for the traversal frontier data structure.
///
/// The frontier stores the discovered-but-unvisited nodes and determines the
/// traversal order:
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait Frontier: Default {
    /// Pushes a node into the frontier
    fn push(&mut self, u: NodeId);

    /// Removes and returns the next node from the frontier
    fn pop(&mut self) -> Option<NodeId>;

    /// Returns *true* if no nodes are pending
    fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }

    /// Returns the number of pending nodes
    fn cardinality(&self) -> usize;
}

impl Frontier for VecDeque<NodeId> {
    fn push(&mut self, u: NodeId) {
        self.push_back(u)
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.pop_front()
    }

    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl Frontier for Vec<NodeId> {
    fn push(&mut self, u: NodeId) {
        self.push(u)
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.pop()
    }

    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Verdict of a visit callback: keep going or end the traversal early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// Proceed with the next discovered node
    #[default]
    Continue,
    /// End the traversal after this node
    Stop,
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack — no recursion), a set of
/// visited nodes, and optional exclusions. Each node is marked visited at
/// first discovery and yielded exactly once.
pub struct Walk<'a, D, E, F: GraphFlavor, S, Q: Frontier> {
    graph: &'a Graph<D, E, F, S>,
    frontier: Q,
    visited: FxHashSet<NodeId>,
    stop_at: Option<NodeId>,
    excluded_edge: Option<EdgeId>,
    undirected: bool,
    restart: bool,
}

/// A walk visiting nodes in **breadth-first** order
pub type BfsWalk<'a, D, E, F, S> = Walk<'a, D, E, F, S, VecDeque<NodeId>>;

/// A walk visiting nodes in **depth-first** order
pub type DfsWalk<'a, D, E, F, S> = Walk<'a, D, E, F, S, Vec<NodeId>>;

impl<'a, D, E, F: GraphFlavor, S, Q: Frontier> Walk<'a, D, E, F, S, Q> {
    /// Creates a traversal starting (and staying) at the component of `start`
    pub fn new(graph: &'a Graph<D, E, F, S>, start: NodeId) -> Self {
        let mut frontier = Q::default();
        frontier.push(start);
        let mut visited = FxHashSet::default();
        visited.insert(start);
        Self {
            graph,
            frontier,
            visited,
            stop_at: None,
            excluded_edge: None,
            undirected: false,
            restart: false,
        }
    }

    /// Creates a whole-graph traversal: once a component is exhausted, the
    /// walk restarts at the first unvisited node in arena order.
    pub fn full(graph: &'a Graph<D, E, F, S>) -> Self {
        let mut walk = Self {
            graph,
            frontier: Q::default(),
            visited: FxHashSet::default(),
            stop_at: None,
            excluded_edge: None,
            undirected: false,
            restart: true,
        };
        if let Some(first) = graph.vertices().next() {
            walk.visited.insert(first);
            walk.frontier.push(first);
        }
        walk
    }

    /// Follows incoming edges as well, traversing the undirected projection
    pub fn undirected(mut self) -> Self {
        self.undirected = true;
        self
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it
    /// and afterwards only `None`.
    pub fn stop_at(mut self, stopper: NodeId) -> Self {
        self.stop_at = Some(stopper);
        self
    }

    /// Excludes a node from the search, as if it was already visited.
    ///
    /// # Warning
    /// Has no effect if the node is already on the frontier; call directly
    /// after the constructor.
    pub fn with_node_excluded(mut self, u: NodeId) -> Self {
        self.visited.insert(u);
        self
    }

    /// Excludes a single edge from the search; neither direction of the walk
    /// will cross it. Used for bridge probing.
    pub fn with_edge_excluded(mut self, eid: EdgeId) -> Self {
        self.excluded_edge = Some(eid);
        self
    }

    /// Consumes the walk and returns *true* iff it reaches `target`.
    ///
    /// The start node counts as reached.
    pub fn visits(mut self, target: NodeId) -> bool {
        self.any(|u| u == target)
    }

    fn expand(&mut self, u: NodeId) {
        let graph = self.graph;
        for (v, eid) in graph.live_out_edges_of(u) {
            if Some(eid) != self.excluded_edge && self.visited.insert(v) {
                self.frontier.push(v);
            }
        }
        if self.undirected {
            for (v, eid) in graph.live_in_edges_of(u) {
                if Some(eid) != self.excluded_edge && self.visited.insert(v) {
                    self.frontier.push(v);
                }
            }
        }
    }
}

impl<D, E, F: GraphFlavor, S, Q: Frontier> Iterator for Walk<'_, D, E, F, S, Q> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            if let Some(u) = self.frontier.pop() {
                if self.stop_at == Some(u) {
                    while self.frontier.pop().is_some() {} // drop all
                    self.restart = false;
                } else {
                    self.expand(u);
                }
                return Some(u);
            }

            if !self.restart {
                return None;
            }
            let unvisited = self.graph.vertices().find(|u| !self.visited.contains(u))?;
            self.visited.insert(unvisited);
            self.frontier.push(unvisited);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.frontier.cardinality(), Some(self.graph.len()))
    }
}

impl<D, E, F: GraphFlavor, S> Graph<D, E, F, S> {
    /// Returns an iterator over the nodes reachable from `start` in
    /// breadth-first order
    pub fn bfs(&self, start: NodeId) -> BfsWalk<'_, D, E, F, S> {
        BfsWalk::new(self, start)
    }

    /// Returns an iterator over the nodes reachable from `start` in
    /// depth-first order
    pub fn dfs(&self, start: NodeId) -> DfsWalk<'_, D, E, F, S> {
        DfsWalk::new(self, start)
    }

    /// Returns a breadth-first iterator over the whole graph, restarting
    /// once per connected component
    pub fn bfs_full(&self) -> BfsWalk<'_, D, E, F, S> {
        BfsWalk::full(self)
    }

    /// Returns a depth-first iterator over the whole graph, restarting once
    /// per connected component
    pub fn dfs_full(&self) -> DfsWalk<'_, D, E, F, S> {
        DfsWalk::full(self)
    }

    /// Drives a breadth-first traversal from `start` through callbacks.
    ///
    /// `visit` runs once per discovered node; returning [`Flow::Stop`] ends
    /// the traversal. A failing callback does **not** end it: the error goes
    /// to `on_error` together with the node, and the driver proceeds to the
    /// remaining discovered nodes.
    pub fn bfs_each<CE>(
        &self,
        start: NodeId,
        visit: impl FnMut(NodeId, &Self) -> Result<Flow, CE>,
        on_error: impl FnMut(NodeId, CE, &Self),
    ) {
        drive(self.bfs(start), self, visit, on_error)
    }

    /// Depth-first counterpart of [`Graph::bfs_each`]
    pub fn dfs_each<CE>(
        &self,
        start: NodeId,
        visit: impl FnMut(NodeId, &Self) -> Result<Flow, CE>,
        on_error: impl FnMut(NodeId, CE, &Self),
    ) {
        drive(self.dfs(start), self, visit, on_error)
    }

    /// Whole-graph variant of [`Graph::bfs_each`], restarting per component
    pub fn bfs_each_full<CE>(
        &self,
        visit: impl FnMut(NodeId, &Self) -> Result<Flow, CE>,
        on_error: impl FnMut(NodeId, CE, &Self),
    ) {
        drive(self.bfs_full(), self, visit, on_error)
    }

    /// Whole-graph variant of [`Graph::dfs_each`], restarting per component
    pub fn dfs_each_full<CE>(
        &self,
        visit: impl FnMut(NodeId, &Self) -> Result<Flow, CE>,
        on_error: impl FnMut(NodeId, CE, &Self),
    ) {
        drive(self.dfs_full(), self, visit, on_error)
    }
}

fn drive<D, E, F: GraphFlavor, S, Q: Frontier, CE>(
    walk: Walk<'_, D, E, F, S, Q>,
    graph: &Graph<D, E, F, S>,
    mut visit: impl FnMut(NodeId, &Graph<D, E, F, S>) -> Result<Flow, CE>,
    mut on_error: impl FnMut(NodeId, CE, &Graph<D, E, F, S>),
) {
    for u in walk {
        match visit(u, graph) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => break,
            // contained per node: the traversal itself carries on
            Err(e) => on_error(u, e, graph),
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::prelude::*;

    /// a -> b, b -> c, c -> d, b -> d
    fn diamond() -> DiGraph<(), ()> {
        let mut g = DiGraph::new();
        for name in ["a", "b", "c", "d"] {
            g.add_node(name, ()).unwrap();
        }
        g.add_edge("a", "b", ()).unwrap();
        g.add_edge("b", "c", ()).unwrap();
        g.add_edge("c", "d", ()).unwrap();
        g.add_edge("b", "d", ()).unwrap();
        g
    }

    fn names<'a, D, E, F: GraphFlavor, S>(
        g: &'a Graph<D, E, F, S>,
        order: impl IntoIterator<Item = NodeId> + 'a,
    ) -> Vec<&'a str> {
        order
            .into_iter()
            .map(|u| g.node_name(u).unwrap())
            .collect_vec()
    }

    #[test]
    fn bfs_order() {
        let g = diamond();
        let order = g.bfs(g.node_id("a").unwrap()).collect_vec();
        assert_eq!(names(&g, order), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn dfs_order() {
        let g = diamond();
        let order = g.dfs(g.node_id("a").unwrap()).collect_vec();
        assert_eq!(names(&g, order), vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn full_walk_restarts_per_component() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "x", "y"] {
            g.add_node(name, ()).unwrap();
        }
        g.add_edge("a", "b", ()).unwrap();
        g.add_edge("x", "y", ()).unwrap();

        let order = g.bfs_full().collect_vec();
        assert_eq!(names(&g, order), vec!["a", "b", "x", "y"]);
    }

    #[test]
    fn stopper_ends_walk() {
        let g = diamond();
        let a = g.node_id("a").unwrap();
        let b = g.node_id("b").unwrap();
        let order = g.bfs(a).stop_at(b).collect_vec();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn undirected_walk_follows_incoming_edges() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c"] {
            g.add_node(name, ()).unwrap();
        }
        g.add_edge("b", "a", ()).unwrap();
        g.add_edge("b", "c", ()).unwrap();

        let a = g.node_id("a").unwrap();
        assert_eq!(g.bfs(a).count(), 1);
        assert_eq!(g.bfs(a).undirected().count(), 3);
    }

    #[test]
    fn callback_failure_is_contained_per_node() {
        let g = diamond();
        let mut visited = Vec::new();
        let mut failed = Vec::new();

        g.bfs_each(
            g.node_id("a").unwrap(),
            |u, g| {
                if g.node_name(u) == Some("b") {
                    Err("brittle node")
                } else {
                    visited.push(u);
                    Ok(Flow::Continue)
                }
            },
            |u, e, _| failed.push((u, e)),
        );

        // b failed, yet c and d (discovered through b) were still visited
        assert_eq!(visited.len(), 3);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].1, "brittle node");
    }

    #[test]
    fn stop_sentinel_ends_driver_early() {
        let g = diamond();
        let mut seen = 0;
        g.bfs_each(
            g.node_id("a").unwrap(),
            |_, _| -> Result<Flow, ()> {
                seen += 1;
                Ok(if seen == 2 { Flow::Stop } else { Flow::Continue })
            },
            |_, _, _| unreachable!(),
        );
        assert_eq!(seen, 2);
    }

    #[test]
    fn excluded_edge_is_not_crossed() {
        let g = diamond();
        let a = g.node_id("a").unwrap();
        let eid = g.edge_between("a", "b").unwrap();
        assert_eq!(g.bfs(a).with_edge_excluded(eid).count(), 1);
    }
}
