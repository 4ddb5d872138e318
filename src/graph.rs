/*!
# The Graph Container

One generic, keyed store of nodes and edges. Nodes are addressed by unique
string names; internally both nodes and edges live in slot arenas indexed by
stable `u32` handles ([`NodeId`](crate::NodeId) / [`EdgeId`](crate::EdgeId)),
with freed slots recycled. Edges reference their endpoints by handle, so the
mutual node/edge bookkeeping cannot form reference cycles.

The container is agnostic to what nodes and edges carry beyond their payload:
the [`GraphFlavor`] parameter instantiates either the plain or the weighted
kind through the same CRUD engine. See [`DiGraph`](crate::DiGraph) and
[`Network`](crate::Network) for the two aliases.

Adjacency is stored per node as insertion-ordered `(neighbor, edge)` lists in
both directions. The two directions are always updated together: an edge is
present in its source's outgoing list exactly if it is present in its
target's incoming list.
*/

use fxhash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::{Endpoints, EdgeId, EdgeRef, GraphError, GraphFlavor, NodeId, NodeRef, NumEdges, Plain};

/// Insertion-ordered adjacency list of a single node.
///
/// Most nodes in practice have few neighbors; four entries live inline
/// before the list spills to the heap.
pub(crate) type AdjList = SmallVec<[(NodeId, EdgeId); 4]>;

#[derive(Debug, Clone)]
pub(crate) struct NodeSlot<D, A> {
    pub(crate) name: String,
    pub(crate) data: D,
    pub(crate) attr: A,
    /// `(target, edge)` per outgoing edge, in insertion order
    pub(crate) out: AdjList,
    /// `(source, edge)` per incoming edge, in insertion order
    pub(crate) inc: AdjList,
}

#[derive(Debug, Clone)]
pub(crate) struct EdgeSlot<E, A> {
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) data: E,
    pub(crate) attr: A,
}

/// A keyed directed graph with payloads of type `D` on nodes and `E` on
/// edges, flavor `F` and an optional container-wide state `S`.
///
/// Nodes and edges are created exclusively through this container; there is
/// no external construction path. Removing a node transitively removes every
/// incident edge.
#[derive(Debug)]
pub struct Graph<D, E, F: GraphFlavor = Plain, S = ()> {
    pub(crate) nodes: Vec<Option<NodeSlot<D, F::NodeAttr>>>,
    pub(crate) edges: Vec<Option<EdgeSlot<E, F::EdgeAttr>>>,
    free_nodes: Vec<NodeId>,
    free_edges: Vec<EdgeId>,
    names: FxHashMap<String, NodeId>,
    num_edges: NumEdges,
    state: Option<S>,
}

impl<D, E, F: GraphFlavor, S> Default for Graph<D, E, F, S> {
    fn default() -> Self {
        Self::new()
    }
}

// written out because the derive would demand `F: Clone` for the marker type
impl<D: Clone, E: Clone, F: GraphFlavor, S: Clone> Clone for Graph<D, E, F, S> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            free_nodes: self.free_nodes.clone(),
            free_edges: self.free_edges.clone(),
            names: self.names.clone(),
            num_edges: self.num_edges,
            state: self.state.clone(),
        }
    }
}

impl<D, E, F: GraphFlavor, S> Graph<D, E, F, S> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            free_nodes: Vec::new(),
            free_edges: Vec::new(),
            names: FxHashMap::default(),
            num_edges: 0,
            state: None,
        }
    }

    /// Removes every node, edge and the container state
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.free_nodes.clear();
        self.free_edges.clear();
        self.names.clear();
        self.num_edges = 0;
        self.state = None;
    }

    //////////////////////////////////////////////////////////////////
    // Node CRUD

    /// Adds a node with the flavor's default attribute.
    ///
    /// # Errors
    /// [`GraphError::NameRequired`] on an empty name,
    /// [`GraphError::DuplicateNode`] if the name is already taken.
    pub fn add_node(&mut self, name: impl Into<String>, data: D) -> Result<NodeId, GraphError> {
        self.insert_node(name.into(), data, F::default_node_attr())
    }

    pub(crate) fn insert_node(
        &mut self,
        name: String,
        data: D,
        attr: F::NodeAttr,
    ) -> Result<NodeId, GraphError> {
        if name.is_empty() {
            return Err(GraphError::NameRequired);
        }
        if self.names.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }

        let slot = NodeSlot {
            name: name.clone(),
            data,
            attr,
            out: AdjList::new(),
            inc: AdjList::new(),
        };

        let id = match self.free_nodes.pop() {
            Some(id) => {
                self.nodes[id as usize] = Some(slot);
                id
            }
            None => {
                self.nodes.push(Some(slot));
                (self.nodes.len() - 1) as NodeId
            }
        };

        trace!(node = %name, id, "added node");
        self.names.insert(name, id);
        Ok(id)
    }

    /// Removes the named node and every edge incident to it, in time
    /// proportional to its total degree. Returns the payload, or `None` if
    /// no such node exists.
    pub fn remove_node(&mut self, name: &str) -> Option<D> {
        let id = self.names.remove(name)?;
        let slot = self.nodes[id as usize].take()?;

        for &(v, eid) in &slot.out {
            self.edges[eid as usize] = None;
            self.free_edges.push(eid);
            self.num_edges -= 1;
            if v != id {
                if let Some(other) = self.nodes[v as usize].as_mut() {
                    other.inc.retain(|&mut (_, e)| e != eid);
                }
            }
        }
        for &(u, eid) in &slot.inc {
            // self-loops were already freed through the outgoing list
            if u == id {
                continue;
            }
            self.edges[eid as usize] = None;
            self.free_edges.push(eid);
            self.num_edges -= 1;
            if let Some(other) = self.nodes[u as usize].as_mut() {
                other.out.retain(|&mut (_, e)| e != eid);
            }
        }

        self.free_nodes.push(id);
        trace!(node = %name, id, "removed node");
        Some(slot.data)
    }

    //////////////////////////////////////////////////////////////////
    // Edge CRUD

    /// Adds a directed edge between two named nodes with the flavor's
    /// default attribute.
    ///
    /// # Errors
    /// [`GraphError::MissingNode`] if either endpoint does not exist,
    /// [`GraphError::DuplicateEdge`] if the ordered pair is already wired.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        data: E,
    ) -> Result<EdgeId, GraphError> {
        let u = self.require_node(source)?;
        let v = self.require_node(target)?;
        self.insert_edge(u, v, data, F::default_edge_attr())
    }

    pub(crate) fn insert_edge(
        &mut self,
        u: NodeId,
        v: NodeId,
        data: E,
        attr: F::EdgeAttr,
    ) -> Result<EdgeId, GraphError> {
        if self.edge_between_ids(u, v).is_some() {
            return Err(GraphError::DuplicateEdge(
                self.node_name(u).unwrap_or_default().to_owned(),
                self.node_name(v).unwrap_or_default().to_owned(),
            ));
        }

        let slot = EdgeSlot {
            source: u,
            target: v,
            data,
            attr,
        };
        let eid = match self.free_edges.pop() {
            Some(eid) => {
                self.edges[eid as usize] = Some(slot);
                eid
            }
            None => {
                self.edges.push(Some(slot));
                (self.edges.len() - 1) as EdgeId
            }
        };

        // both endpoint lists are updated together, never independently
        self.nodes[u as usize].as_mut().unwrap().out.push((v, eid));
        self.nodes[v as usize].as_mut().unwrap().inc.push((u, eid));
        self.num_edges += 1;

        trace!(source = u, target = v, eid, "added edge");
        Ok(eid)
    }

    /// Removes the directed edge between two named nodes and returns its
    /// payload.
    ///
    /// # Errors
    /// [`GraphError::MissingNode`] if either endpoint does not exist,
    /// [`GraphError::MissingEdge`] if the pair is not wired.
    pub fn remove_edge(&mut self, source: &str, target: &str) -> Result<E, GraphError> {
        let u = self.require_node(source)?;
        let v = self.require_node(target)?;
        self.remove_edge_ids(u, v)
            .ok_or_else(|| GraphError::MissingEdge(source.to_owned(), target.to_owned()))
    }

    pub(crate) fn remove_edge_ids(&mut self, u: NodeId, v: NodeId) -> Option<E> {
        let eid = self.edge_between_ids(u, v)?;
        let slot = self.edges[eid as usize].take()?;

        self.nodes[u as usize]
            .as_mut()
            .unwrap()
            .out
            .retain(|&mut (_, e)| e != eid);
        self.nodes[v as usize]
            .as_mut()
            .unwrap()
            .inc
            .retain(|&mut (_, e)| e != eid);

        self.free_edges.push(eid);
        self.num_edges -= 1;
        trace!(source = u, target = v, eid, "removed edge");
        Some(slot.data)
    }

    //////////////////////////////////////////////////////////////////
    // Lookups

    /// Resolves a node name to its handle
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// Returns *true* if a node with this name exists
    pub fn contains_node(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub(crate) fn require_node(&self, name: &str) -> Result<NodeId, GraphError> {
        self.node_id(name).ok_or_else(|| GraphError::missing(name))
    }

    pub(crate) fn slot(&self, u: NodeId) -> &NodeSlot<D, F::NodeAttr> {
        self.nodes[u as usize].as_ref().expect("live node handle")
    }

    pub(crate) fn edge_slot(&self, eid: EdgeId) -> &EdgeSlot<E, F::EdgeAttr> {
        self.edges[eid as usize].as_ref().expect("live edge handle")
    }

    /// Name of the node behind a handle
    pub fn node_name(&self, u: NodeId) -> Option<&str> {
        self.nodes.get(u as usize)?.as_ref().map(|s| s.name.as_str())
    }

    /// Borrow of the named node's payload
    pub fn node_data(&self, name: &str) -> Option<&D> {
        let id = self.node_id(name)?;
        Some(&self.slot(id).data)
    }

    /// Mutable borrow of the named node's payload
    pub fn node_data_mut(&mut self, name: &str) -> Option<&mut D> {
        let id = self.node_id(name)?;
        self.nodes[id as usize].as_mut().map(|s| &mut s.data)
    }

    /// Handle of the edge between two named nodes
    pub fn edge_between(&self, source: &str, target: &str) -> Option<EdgeId> {
        let u = self.node_id(source)?;
        let v = self.node_id(target)?;
        self.edge_between_ids(u, v)
    }

    /// Handle of the edge between two node handles
    pub fn edge_between_ids(&self, u: NodeId, v: NodeId) -> Option<EdgeId> {
        let slot = self.nodes.get(u as usize)?.as_ref()?;
        slot.out.iter().find(|&&(t, _)| t == v).map(|&(_, e)| e)
    }

    /// Borrow of an edge's payload
    pub fn edge_data(&self, eid: EdgeId) -> Option<&E> {
        self.edges.get(eid as usize)?.as_ref().map(|s| &s.data)
    }

    /// Mutable borrow of an edge's payload
    pub fn edge_data_mut(&mut self, eid: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(eid as usize)?.as_mut().map(|s| &mut s.data)
    }

    /// Source and target handles of an edge
    pub fn edge_endpoints(&self, eid: EdgeId) -> Option<Endpoints> {
        self.edges
            .get(eid as usize)?
            .as_ref()
            .map(|s| Endpoints(s.source, s.target))
    }

    /// Handles of all outgoing edges of `source` whose target name and
    /// payload satisfy the predicate
    pub fn find_edges_from(
        &self,
        source: &str,
        mut predicate: impl FnMut(&str, &E) -> bool,
    ) -> Vec<EdgeId> {
        let Some(u) = self.node_id(source) else {
            return Vec::new();
        };
        self.slot(u)
            .out
            .iter()
            .filter(|&&(v, eid)| {
                let name = self.slot(v).name.as_str();
                predicate(name, &self.edge_slot(eid).data)
            })
            .map(|&(_, eid)| eid)
            .collect()
    }

    //////////////////////////////////////////////////////////////////
    // Container state

    /// Borrow of the opaque container-wide state
    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    /// Attaches (or replaces) the container-wide state
    pub fn set_state(&mut self, state: S) {
        self.state = Some(state);
    }

    /// Removes and returns the container-wide state
    pub fn take_state(&mut self) -> Option<S> {
        self.state.take()
    }

    //////////////////////////////////////////////////////////////////
    // Detached snapshot getters

    /// Materializes a detached copy of every node.
    ///
    /// The copies hold no handles into the container; later mutations do not
    /// affect them.
    pub fn node_list(&self) -> Vec<NodeRef<D>>
    where
        D: Clone,
    {
        self.nodes
            .iter()
            .flatten()
            .map(|s| NodeRef::new(s.name.clone(), s.data.clone(), F::node_value(&s.attr)))
            .collect()
    }

    /// Materializes a detached copy of every edge as a
    /// `(source, target, data)` record
    pub fn edge_list(&self) -> Vec<EdgeRef<E>>
    where
        E: Clone,
    {
        self.edges
            .iter()
            .flatten()
            .map(|s| {
                EdgeRef::new(
                    self.slot(s.source).name.clone(),
                    self.slot(s.target).name.clone(),
                    s.data.clone(),
                    F::edge_weight(&s.attr),
                )
            })
            .collect()
    }

    /// Detached copy of the named node
    pub fn get_node(&self, name: &str) -> Option<NodeRef<D>>
    where
        D: Clone,
    {
        let id = self.node_id(name)?;
        let s = self.slot(id);
        Some(NodeRef::new(
            s.name.clone(),
            s.data.clone(),
            F::node_value(&s.attr),
        ))
    }

    //////////////////////////////////////////////////////////////////
    // Flavor plumbing used by the algorithm layers

    /// Upper bound (exclusive) of all live node handles; vacant slots below
    /// it are skipped by [`vertices`](crate::ops::GraphOrder::vertices).
    pub(crate) fn slot_bound(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn num_edges(&self) -> NumEdges {
        self.num_edges
    }

    pub(crate) fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Whether the edge takes part in algorithms under the flavor's default
    /// weight interpretation
    pub(crate) fn edge_live(&self, eid: EdgeId) -> bool {
        F::edge_is_live(&self.edge_slot(eid).attr)
    }

    pub(crate) fn has_live_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edge_between_ids(u, v)
            .is_some_and(|eid| self.edge_live(eid))
    }
}
