/*!
# Graph Operation Traits

The read-only surface of the container, split the same way the storage side
splits: order getters, adjacency getters and structure tests. Algorithms in
[`algo`](crate::algo) are written against these traits plus the flavor seam,
never against the container internals.
*/

use itertools::Itertools;

use crate::{EdgeId, Graph, GraphFlavor, NodeId, NumEdges, NumNodes};

/// Provides getters pertaining to the node- and edge-size of a graph
pub trait GraphOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of directed edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all live node handles, in arena order.
    ///
    /// Arena order is deterministic: insertion order, except that recycled
    /// slots surface where their predecessor used to live.
    fn vertices(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Returns an iterator over all live edge handles, in arena order
    fn edge_handles(&self) -> impl Iterator<Item = EdgeId> + '_;
}

/// Traits pertaining getters for neighborhoods & incident edges
pub trait Adjacency: GraphOrder + Sized {
    /// Returns an iterator over the targets of all outgoing edges of `u`,
    /// in insertion order.
    /// ** Panics if `u` is not a live handle **
    fn out_neighbors_of(&self, u: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Returns an iterator over the sources of all incoming edges of `u`,
    /// in insertion order.
    /// ** Panics if `u` is not a live handle **
    fn in_neighbors_of(&self, u: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Returns `(target, edge)` pairs of all outgoing edges of `u`
    /// ** Panics if `u` is not a live handle **
    fn out_edges_of(&self, u: NodeId) -> impl Iterator<Item = (NodeId, EdgeId)> + '_;

    /// Returns `(source, edge)` pairs of all incoming edges of `u`
    /// ** Panics if `u` is not a live handle **
    fn in_edges_of(&self, u: NodeId) -> impl Iterator<Item = (NodeId, EdgeId)> + '_;

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u` is not a live handle **
    fn out_degree_of(&self, u: NodeId) -> NumNodes;

    /// Returns the number of incoming edges of `u`
    /// ** Panics if `u` is not a live handle **
    fn in_degree_of(&self, u: NodeId) -> NumNodes;

    /// Returns the out-degree and in-degree of a given vertex combined
    #[inline]
    fn total_degree_of(&self, u: NodeId) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }

    /// Returns an iterator over all out-degrees, in arena order
    fn out_degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.out_degree_of(u))
    }

    /// Returns a distribution `(degree, count)` sorted by out-degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .out_degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.out_degrees().max().unwrap_or(0)
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest {
    /// Returns *true* if the directed edge (u,v) exists in the graph.
    /// ** Panics if `u` or `v` is not a live handle **
    fn has_edge(&self, u: NodeId, v: NodeId) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    fn has_self_loop(&self, u: NodeId) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u).
    fn has_bidirected_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

impl<D, E, F: GraphFlavor, S> GraphOrder for Graph<D, E, F, S> {
    fn number_of_nodes(&self) -> NumNodes {
        self.node_count() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges()
    }

    fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|_| i as NodeId))
    }

    fn edge_handles(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|_| i as EdgeId))
    }
}

impl<D, E, F: GraphFlavor, S> Adjacency for Graph<D, E, F, S> {
    fn out_neighbors_of(&self, u: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.slot(u).out.iter().map(|&(v, _)| v)
    }

    fn in_neighbors_of(&self, u: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.slot(u).inc.iter().map(|&(v, _)| v)
    }

    fn out_edges_of(&self, u: NodeId) -> impl Iterator<Item = (NodeId, EdgeId)> + '_ {
        self.slot(u).out.iter().copied()
    }

    fn in_edges_of(&self, u: NodeId) -> impl Iterator<Item = (NodeId, EdgeId)> + '_ {
        self.slot(u).inc.iter().copied()
    }

    fn out_degree_of(&self, u: NodeId) -> NumNodes {
        self.slot(u).out.len() as NumNodes
    }

    fn in_degree_of(&self, u: NodeId) -> NumNodes {
        self.slot(u).inc.len() as NumNodes
    }
}

impl<D, E, F: GraphFlavor, S> AdjacencyTest for Graph<D, E, F, S> {
    fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edge_between_ids(u, v).is_some()
    }
}

/// Liveness-aware adjacency used by the algorithm layers: edges the flavor
/// considers absent (weighted edges with weight ≤ 0) are skipped here.
impl<D, E, F: GraphFlavor, S> Graph<D, E, F, S> {
    pub(crate) fn live_out_edges_of(
        &self,
        u: NodeId,
    ) -> impl Iterator<Item = (NodeId, EdgeId)> + '_ {
        self.slot(u)
            .out
            .iter()
            .copied()
            .filter(|&(_, eid)| self.edge_live(eid))
    }

    pub(crate) fn live_in_edges_of(
        &self,
        u: NodeId,
    ) -> impl Iterator<Item = (NodeId, EdgeId)> + '_ {
        self.slot(u)
            .inc
            .iter()
            .copied()
            .filter(|&(_, eid)| self.edge_live(eid))
    }

    /// Neighbors of `u` in the undirected projection, deduplicated: every
    /// live outgoing target, then every live incoming source that is not
    /// already an outgoing target.
    pub(crate) fn projected_neighbors_of(
        &self,
        u: NodeId,
    ) -> impl Iterator<Item = NodeId> + '_ {
        self.live_out_edges_of(u).map(|(v, _)| v).chain(
            self.live_in_edges_of(u)
                .map(|(v, _)| v)
                .filter(move |&v| !self.has_live_edge(u, v)),
        )
    }

    // The masked variants below power the `*_with` algorithm overrides: a
    // caller-supplied weight function replaces the flavor's liveness rule,
    // so the mask decides which edges exist for one algorithm run.

    pub(crate) fn masked_out_edges_of<'a>(
        &'a self,
        u: NodeId,
        live: &'a dyn Fn(EdgeId) -> bool,
    ) -> impl Iterator<Item = (NodeId, EdgeId)> + 'a {
        self.slot(u)
            .out
            .iter()
            .copied()
            .filter(move |&(_, eid)| live(eid))
    }

    pub(crate) fn masked_in_edges_of<'a>(
        &'a self,
        u: NodeId,
        live: &'a dyn Fn(EdgeId) -> bool,
    ) -> impl Iterator<Item = (NodeId, EdgeId)> + 'a {
        self.slot(u)
            .inc
            .iter()
            .copied()
            .filter(move |&(_, eid)| live(eid))
    }

    pub(crate) fn has_masked_edge(
        &self,
        u: NodeId,
        v: NodeId,
        live: &dyn Fn(EdgeId) -> bool,
    ) -> bool {
        self.edge_between_ids(u, v).is_some_and(live)
    }

    /// Undirected, deduplicated projection under a mask
    pub(crate) fn masked_neighbors_of<'a>(
        &'a self,
        u: NodeId,
        live: &'a dyn Fn(EdgeId) -> bool,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.masked_out_edges_of(u, live).map(|(v, _)| v).chain(
            self.masked_in_edges_of(u, live)
                .map(|(v, _)| v)
                .filter(move |&v| !self.has_masked_edge(u, v, live)),
        )
    }
}
