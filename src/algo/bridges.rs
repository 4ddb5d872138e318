//! Bridge finding over the undirected projection, via discovery-time /
//! low-link values computed in one depth-first pass.

use tracing::debug;

use crate::{
    EdgeId, Graph, GraphFlavor, INVALID_NODE, NodeId,
    network::{Network, WeightFn},
    ops::GraphOrder,
};

impl<D, E, F: GraphFlavor, S> Graph<D, E, F, S> {
    /// Returns every bridge of the undirected projection: an edge whose
    /// removal increases the number of connected components.
    ///
    /// Each bridge is reported exactly once, as the directed instance that
    /// actually exists (source → target checked first, then the reverse).
    pub fn bridges(&self) -> Vec<(String, String)> {
        self.bridges_masked(&|eid| self.edge_live(eid))
    }

    pub(crate) fn bridges_masked(&self, live: &dyn Fn(EdgeId) -> bool) -> Vec<(String, String)> {
        let bridges = BridgeSearch::new(self, live).compute();
        debug!(count = bridges.len(), "bridges");
        bridges
    }
}

impl<D, E, S> Network<D, E, S> {
    /// [`Graph::bridges`] under a custom weight function: edges whose
    /// derived weight is ≤ 0 are treated as absent
    pub fn bridges_with(&self, wf: impl WeightFn<D, E, S>) -> Vec<(String, String)> {
        self.bridges_masked(&|eid| self.derived_weight(eid, &wf) > 0.0)
    }
}

struct BridgeSearch<'a, D, E, F: GraphFlavor, S> {
    graph: &'a Graph<D, E, F, S>,
    live: &'a dyn Fn(EdgeId) -> bool,
    visited: Vec<bool>,
    nodes_info: Vec<NodeInfo>,
    time: u32,
    bridges: Vec<(String, String)>,
}

impl<'a, D, E, F: GraphFlavor, S> BridgeSearch<'a, D, E, F, S> {
    fn new(graph: &'a Graph<D, E, F, S>, live: &'a dyn Fn(EdgeId) -> bool) -> Self {
        let bound = graph.slot_bound();
        Self {
            graph,
            live,
            visited: vec![false; bound],
            nodes_info: vec![NodeInfo::default(); bound],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<(String, String)> {
        for u in self.graph.vertices() {
            if self.visited[u as usize] {
                continue;
            }
            self.visited[u as usize] = true;
            self.compute_node(u, u);
        }

        self.bridges
    }

    fn compute_node(&mut self, parent: NodeId, u: NodeId) -> NodeInfo {
        self.time += 1;

        self.nodes_info[u as usize] = NodeInfo {
            parent,
            discovery: self.time,
            low: self.time,
        };

        let neighbors: Vec<NodeId> = self
            .graph
            .masked_neighbors_of(u, self.live)
            .filter(|&v| v != u)
            .collect();
        for v in neighbors {
            if !self.visited[v as usize] {
                self.visited[v as usize] = true;
                let info_v = self.compute_node(u, v);

                self.nodes_info[u as usize].update_low(info_v.low);

                if info_v.low > self.nodes_info[u as usize].discovery {
                    self.report(u, v);
                }
            } else if v != self.nodes_info[u as usize].parent {
                let v_disc = self.nodes_info[v as usize].discovery;
                self.nodes_info[u as usize].update_low(v_disc);
            }
        }

        self.nodes_info[u as usize]
    }

    /// Resolves the undirected bridge {u, v} to its existing directed
    /// instance before reporting it
    fn report(&mut self, u: NodeId, v: NodeId) {
        let (s, t) = if self.graph.has_masked_edge(u, v, self.live) {
            (u, v)
        } else {
            (v, u)
        };
        self.bridges.push((
            self.graph.node_name(s).unwrap().to_owned(),
            self.graph.node_name(t).unwrap().to_owned(),
        ));
    }
}

#[derive(Clone, Copy)]
struct NodeInfo {
    low: u32,
    discovery: u32,
    parent: NodeId,
}

impl Default for NodeInfo {
    fn default() -> Self {
        Self {
            low: 0,
            discovery: 0,
            parent: INVALID_NODE,
        }
    }
}

impl NodeInfo {
    fn update_low(&mut self, value: u32) {
        self.low = self.low.min(value);
    }
}
