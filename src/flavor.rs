/*!
# Graph Flavors

A [`Graph`](crate::graph::Graph) is generic over its *flavor*: the extra
attribute every node and every edge carries beyond name and payload. The two
flavors are

- [`Plain`]: no attributes — the unweighted layer,
- [`Weighted`]: a numeric `value` per node and a numeric `weight` per edge
  (default `1.0`) — the network layer.

The flavor is the single seam through which one CRUD engine instantiates
several node/edge kinds. It is a type parameter, not a runtime dispatch: the
compiler monomorphizes the container per flavor.
*/

use std::fmt::Debug;

use crate::Weight;

/// Determines the per-node and per-edge attribute of a graph.
///
/// Implementors are uninhabited marker types; all methods are associated
/// functions. The `value`/`weight` conversions feed the snapshot form, where
/// the attributes appear as optional numeric fields.
pub trait GraphFlavor {
    /// Extra attribute stored on every node
    type NodeAttr: Clone + Debug;
    /// Extra attribute stored on every edge
    type EdgeAttr: Clone + Debug;

    /// Attribute of a node created without an explicit value
    fn default_node_attr() -> Self::NodeAttr;

    /// Attribute of an edge created without an explicit weight
    fn default_edge_attr() -> Self::EdgeAttr;

    /// Numeric view of a node attribute, if the flavor has one
    fn node_value(attr: &Self::NodeAttr) -> Option<Weight>;

    /// Numeric view of an edge attribute, if the flavor has one
    fn edge_weight(attr: &Self::EdgeAttr) -> Option<Weight>;

    /// Reconstructs a node attribute from its numeric view
    fn node_attr_from(value: Option<Weight>) -> Self::NodeAttr;

    /// Reconstructs an edge attribute from its numeric view
    fn edge_attr_from(weight: Option<Weight>) -> Self::EdgeAttr;

    /// Whether an edge with the given attribute takes part in algorithms.
    ///
    /// [`Plain`] edges always do; [`Weighted`] edges only while their stored
    /// weight is positive, which lets callers soft-exclude edges without
    /// removing them.
    fn edge_is_live(attr: &Self::EdgeAttr) -> bool;
}

/// The unweighted flavor: nodes and edges carry nothing beyond their payload.
#[derive(Debug, Clone, Copy)]
pub enum Plain {}

impl GraphFlavor for Plain {
    type NodeAttr = ();
    type EdgeAttr = ();

    fn default_node_attr() -> Self::NodeAttr {}

    fn default_edge_attr() -> Self::EdgeAttr {}

    fn node_value(_: &Self::NodeAttr) -> Option<Weight> {
        None
    }

    fn edge_weight(_: &Self::EdgeAttr) -> Option<Weight> {
        None
    }

    fn node_attr_from(_: Option<Weight>) -> Self::NodeAttr {}

    fn edge_attr_from(_: Option<Weight>) -> Self::EdgeAttr {}

    fn edge_is_live(_: &Self::EdgeAttr) -> bool {
        true
    }
}

/// The weighted flavor: every node has a `value`, every edge a `weight`.
///
/// A fresh edge weighs `1.0`, a fresh node is valued `0.0`.
#[derive(Debug, Clone, Copy)]
pub enum Weighted {}

impl GraphFlavor for Weighted {
    type NodeAttr = Weight;
    type EdgeAttr = Weight;

    fn default_node_attr() -> Self::NodeAttr {
        0.0
    }

    fn default_edge_attr() -> Self::EdgeAttr {
        1.0
    }

    fn node_value(attr: &Self::NodeAttr) -> Option<Weight> {
        Some(*attr)
    }

    fn edge_weight(attr: &Self::EdgeAttr) -> Option<Weight> {
        Some(*attr)
    }

    fn node_attr_from(value: Option<Weight>) -> Self::NodeAttr {
        value.unwrap_or_else(Self::default_node_attr)
    }

    fn edge_attr_from(weight: Option<Weight>) -> Self::EdgeAttr {
        weight.unwrap_or_else(Self::default_edge_attr)
    }

    fn edge_is_live(attr: &Self::EdgeAttr) -> bool {
        *attr > 0.0
    }
}
