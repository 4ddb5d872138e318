use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::{NodeId, Weight};

/// Stable handle of an edge slot inside a graph arena.
///
/// Edges reference their endpoints by [`NodeId`] rather than by pointer, so
/// the node → edge → node bookkeeping forms no reference cycles.
pub type EdgeId = u32;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An ordered pair of node handles, the internal identity of a directed edge.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Endpoints(pub NodeId, pub NodeId);

impl Display for Endpoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Endpoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Endpoints {
    /// Normalizes the pair such that the endpoint with the smaller handle comes first
    pub fn normalized(&self) -> Self {
        Endpoints(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with the smaller handle comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the pair by switching the endpoints
    pub fn reverse(&self) -> Self {
        Endpoints(self.1, self.0)
    }
}

impl From<(NodeId, NodeId)> for Endpoints {
    fn from(value: (NodeId, NodeId)) -> Self {
        Endpoints(value.0, value.1)
    }
}

/// A detached copy of an edge as handed out by snapshot getters.
///
/// Endpoints are reported by node name; no live handle into the owning graph
/// escapes through this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRef<E> {
    /// Name of the source node
    pub source: String,
    /// Name of the target node
    pub target: String,
    /// Opaque payload
    pub data: E,
    /// Weight of the edge; `None` for plain (unweighted) graphs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

impl<E> EdgeRef<E> {
    pub(crate) fn new(source: String, target: String, data: E, weight: Option<Weight>) -> Self {
        Self {
            source,
            target,
            data,
            weight,
        }
    }
}
