/*!
# Node Representation

Nodes live in a slot arena and are addressed by a stable `NodeId = u32` handle.
Handles stay valid until the node is removed; freed slots may be recycled for
later insertions. All public lookups go through the unique node *name*, the
handle is the cheap internal currency that algorithms pass around.

Choosing `u32` over `usize` saves space in the per-node adjacency lists and is
plenty: a graph with more than `2^32 - 1` nodes is out of scope here.
*/

use serde::{Deserialize, Serialize};

use crate::Weight;

/// Stable handle of a node slot inside a graph arena.
pub type NodeId = u32;

/// Node-handle value that is considered invalid
pub const INVALID_NODE: NodeId = NodeId::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = u32;

/// A detached copy of a node as handed out by snapshot getters.
///
/// Holds no handle into the owning graph: mutating the graph after obtaining
/// a `NodeRef` cannot invalidate it, and mutating the `NodeRef` does not
/// write through to the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRef<D> {
    /// Unique name of the node within its graph
    pub name: String,
    /// Opaque payload
    pub data: D,
    /// Numeric value of the node; `None` for plain (unweighted) graphs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Weight>,
}

impl<D> NodeRef<D> {
    pub(crate) fn new(name: String, data: D, value: Option<Weight>) -> Self {
        Self { name, data, value }
    }
}
