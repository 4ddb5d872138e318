/*!
# The Weighted Network Layer

[`Network`] is the [`Weighted`](crate::flavor::Weighted) instantiation of the
container: every node carries a numeric `value`, every edge a numeric
`weight` (default `1.0`).

All weighted algorithms interpret edge weight through one seam, the *weight
function* `(stored, &data, &network) -> f64`. The default,
[`stored_weight`], returns the stored weight unchanged. Callers may pass
their own function to any `*_with` algorithm variant; deriving a weight ≤ 0
soft-excludes the edge from that algorithm run without touching the
structure.

This module also hosts the structural algebra: deep copies come from
`Clone`, induced subgraphs, unions, differences and the Kronecker (tensor)
product are below.
*/

use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    EdgeId, Graph, GraphError, GraphFlavor, NodeId, Weight, Weighted,
    ops::{Adjacency, GraphOrder},
};

/// A keyed directed graph in the plain (unweighted) flavor
pub type DiGraph<D = (), E = (), S = ()> = Graph<D, E, crate::Plain, S>;

/// A keyed directed graph in the weighted flavor
pub type Network<D = (), E = (), S = ()> = Graph<D, E, Weighted, S>;

/// The seam through which every weighted algorithm reads edge weights.
///
/// Implemented for every `Fn(Weight, &E, &Network<D, E, S>) -> Weight`
/// closure; the arguments are the stored weight, the edge payload and the
/// network itself.
pub trait WeightFn<D, E, S>: Fn(Weight, &E, &Network<D, E, S>) -> Weight {}

impl<T, D, E, S> WeightFn<D, E, S> for T where T: Fn(Weight, &E, &Network<D, E, S>) -> Weight {}

/// The default weight function: the stored weight, unchanged
pub fn stored_weight<D, E, S>(weight: Weight, _data: &E, _net: &Network<D, E, S>) -> Weight {
    weight
}

impl<D, E, S> Network<D, E, S> {
    /// Adds a node with an explicit value
    pub fn add_node_valued(
        &mut self,
        name: impl Into<String>,
        data: D,
        value: Weight,
    ) -> Result<NodeId, GraphError> {
        self.insert_node(name.into(), data, value)
    }

    /// Adds an edge with an explicit weight
    pub fn add_edge_weighted(
        &mut self,
        source: &str,
        target: &str,
        data: E,
        weight: Weight,
    ) -> Result<EdgeId, GraphError> {
        let u = self.require_node(source)?;
        let v = self.require_node(target)?;
        self.insert_edge(u, v, data, weight)
    }

    /// Value of the named node
    pub fn node_value(&self, name: &str) -> Option<Weight> {
        let id = self.node_id(name)?;
        Some(self.slot(id).attr)
    }

    /// Overwrites the value of the named node
    pub fn set_node_value(&mut self, name: &str, value: Weight) -> Result<(), GraphError> {
        let id = self.require_node(name)?;
        self.nodes[id as usize].as_mut().unwrap().attr = value;
        Ok(())
    }

    /// Stored weight of an edge handle
    pub fn edge_weight(&self, eid: EdgeId) -> Option<Weight> {
        self.edges.get(eid as usize)?.as_ref().map(|s| s.attr)
    }

    /// Stored weight of the edge between two named nodes
    pub fn weight_between(&self, source: &str, target: &str) -> Option<Weight> {
        self.edge_weight(self.edge_between(source, target)?)
    }

    /// Overwrites the stored weight of the edge between two named nodes
    pub fn set_edge_weight(
        &mut self,
        source: &str,
        target: &str,
        weight: Weight,
    ) -> Result<(), GraphError> {
        let eid = self
            .edge_between(source, target)
            .ok_or_else(|| GraphError::MissingEdge(source.to_owned(), target.to_owned()))?;
        self.edges[eid as usize].as_mut().unwrap().attr = weight;
        Ok(())
    }

    /// Weight of an edge as seen by the given weight function
    pub(crate) fn derived_weight<W>(&self, eid: EdgeId, wf: &W) -> Weight
    where
        W: WeightFn<D, E, S>,
    {
        let slot = self.edge_slot(eid);
        wf(slot.attr, &slot.data, self)
    }

    /// Dense V×V matrix of derived weights; `0.0` where no edge exists.
    ///
    /// Rows and columns follow arena order, see [`AdjacencyMatrix::names`].
    /// O(V²) memory, intended for small and medium networks.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        self.adjacency_matrix_with(stored_weight)
    }

    /// [`Network::adjacency_matrix`] under a custom weight function
    pub fn adjacency_matrix_with(&self, wf: impl WeightFn<D, E, S>) -> AdjacencyMatrix {
        let ids: Vec<NodeId> = self.vertices().collect();
        let index: FxHashMap<NodeId, usize> =
            ids.iter().enumerate().map(|(i, &u)| (u, i)).collect();

        let mut values = vec![vec![0.0; ids.len()]; ids.len()];
        for (row, &u) in ids.iter().enumerate() {
            for (v, eid) in self.out_edges_of(u) {
                values[row][index[&v]] = self.derived_weight(eid, &wf);
            }
        }

        AdjacencyMatrix {
            names: ids
                .iter()
                .map(|&u| self.node_name(u).unwrap().to_owned())
                .collect(),
            values,
        }
    }
}

/// Dense adjacency matrix of a network, with the node name per row/column
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    /// Node names in row (and column) order
    pub names: Vec<String>,
    /// `values[i][j]` is the derived weight of the edge `names[i] -> names[j]`,
    /// or `0.0` if there is none
    pub values: Vec<Vec<Weight>>,
}

impl AdjacencyMatrix {
    /// Entry for a pair of node names
    pub fn get(&self, source: &str, target: &str) -> Option<Weight> {
        let i = self.names.iter().position(|n| n == source)?;
        let j = self.names.iter().position(|n| n == target)?;
        Some(self.values[i][j])
    }
}

//////////////////////////////////////////////////////////////////
// Structural algebra

impl<D, E, F, S> Graph<D, E, F, S>
where
    D: Clone,
    E: Clone,
    F: GraphFlavor,
    S: Clone,
{
    /// The subgraph induced by the nodes satisfying `predicate`: passing
    /// nodes are kept, and exactly the edges whose both endpoints survive.
    /// The container state is carried over.
    pub fn subgraph(&self, mut predicate: impl FnMut(&str, &D) -> bool) -> Self {
        let mut result = Self::new();
        if let Some(state) = self.state() {
            result.set_state(state.clone());
        }

        for u in self.vertices() {
            let slot = self.slot(u);
            if predicate(&slot.name, &slot.data) {
                result
                    .insert_node(slot.name.clone(), slot.data.clone(), slot.attr.clone())
                    .expect("names are unique in the source graph");
            }
        }
        for eid in self.edge_handles() {
            let slot = self.edge_slot(eid);
            let source = &self.slot(slot.source).name;
            let target = &self.slot(slot.target).name;
            if let (Some(u), Some(v)) = (result.node_id(source), result.node_id(target)) {
                result
                    .insert_edge(u, v, slot.data.clone(), slot.attr.clone())
                    .expect("edges are unique in the source graph");
            }
        }

        debug!(
            kept_nodes = result.len(),
            kept_edges = result.number_of_edges(),
            "induced subgraph"
        );
        result
    }

    /// Merges `other` into a copy of `self`: nodes and edges already present
    /// (by name / by name pair) are skipped, everything else is added.
    pub fn union_with(&self, other: &Self) -> Self {
        let mut result = self.clone();

        for u in other.vertices() {
            let slot = other.slot(u);
            if !result.contains_node(&slot.name) {
                result
                    .insert_node(slot.name.clone(), slot.data.clone(), slot.attr.clone())
                    .expect("checked for absence above");
            }
        }
        for eid in other.edge_handles() {
            let slot = other.edge_slot(eid);
            let u = result.node_id(&other.slot(slot.source).name).unwrap();
            let v = result.node_id(&other.slot(slot.target).name).unwrap();
            if result.edge_between_ids(u, v).is_none() {
                result
                    .insert_edge(u, v, slot.data.clone(), slot.attr.clone())
                    .expect("checked for absence above");
            }
        }

        result
    }

    /// Removes `other`'s nodes (with their incident edges) and `other`'s
    /// remaining edges from a copy of `self`
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();

        for u in other.vertices() {
            result.remove_node(&other.slot(u).name);
        }
        for eid in other.edge_handles() {
            let slot = other.edge_slot(eid);
            let source = &other.slot(slot.source).name;
            let target = &other.slot(slot.target).name;
            if let (Some(u), Some(v)) = (result.node_id(source), result.node_id(target)) {
                result.remove_edge_ids(u, v);
            }
        }

        result
    }
}

impl<D, E, S> Network<D, E, S> {
    /// The Kronecker (tensor) product of two networks.
    ///
    /// Every pair of factor nodes becomes one product node named by the
    /// concatenated factor names, valued by the product of the factor
    /// values. A product edge `(a1 a2) -> (b1 b2)` exists exactly where both
    /// factor edges `a1 -> b1` and `a2 -> b2` exist; its weight is the
    /// product of the factor weights.
    ///
    /// Name pairs are expected to concatenate without collision; colliding
    /// pairs are skipped.
    pub fn kronecker<D2, E2, S2>(&self, other: &Network<D2, E2, S2>) -> Network {
        let mut product = Network::new();

        for u in self.vertices() {
            for x in other.vertices() {
                let name = format!("{}{}", self.slot(u).name, other.slot(x).name);
                let value = self.slot(u).attr * other.slot(x).attr;
                let _ = product.insert_node(name, (), value);
            }
        }

        for e1 in self.edge_handles() {
            let s1 = self.edge_slot(e1);
            for e2 in other.edge_handles() {
                let s2 = other.edge_slot(e2);
                let source = format!(
                    "{}{}",
                    self.slot(s1.source).name,
                    other.slot(s2.source).name
                );
                let target = format!(
                    "{}{}",
                    self.slot(s1.target).name,
                    other.slot(s2.target).name
                );
                let _ = product.add_edge_weighted(&source, &target, (), s1.attr * s2.attr);
            }
        }

        debug!(
            nodes = product.len(),
            edges = product.number_of_edges(),
            "kronecker product"
        );
        product
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn triangle() -> Network<(), ()> {
        let mut net = Network::new();
        for name in ["a", "b", "c"] {
            net.add_node(name, ()).unwrap();
        }
        net.add_edge_weighted("a", "b", (), 2.0).unwrap();
        net.add_edge_weighted("b", "c", (), 3.0).unwrap();
        net.add_edge_weighted("c", "a", (), 4.0).unwrap();
        net
    }

    #[test]
    fn default_weight_is_one() {
        let mut net: Network<(), ()> = Network::new();
        net.add_node("a", ()).unwrap();
        net.add_node("b", ()).unwrap();
        net.add_edge("a", "b", ()).unwrap();
        assert_eq!(net.weight_between("a", "b"), Some(1.0));
    }

    #[test]
    fn adjacency_matrix_entries() {
        let net = triangle();
        let m = net.adjacency_matrix();
        assert_eq!(m.names, vec!["a", "b", "c"]);
        assert_eq!(m.get("a", "b"), Some(2.0));
        assert_eq!(m.get("b", "a"), Some(0.0));

        let doubled = net.adjacency_matrix_with(|w, _, _| w * 2.0);
        assert_eq!(doubled.get("c", "a"), Some(8.0));
    }

    #[test]
    fn subgraph_keeps_only_surviving_edges() {
        let net = triangle();
        let sub = net.subgraph(|name, _| name != "c");
        assert_eq!(sub.number_of_nodes(), 2);
        assert_eq!(sub.number_of_edges(), 1);
        assert_eq!(sub.weight_between("a", "b"), Some(2.0));
    }

    #[test]
    fn union_skips_existing() {
        let net = triangle();
        let mut other: Network<(), ()> = Network::new();
        for name in ["a", "c", "d"] {
            other.add_node(name, ()).unwrap();
        }
        other.add_edge_weighted("c", "d", (), 9.0).unwrap();
        other.add_edge_weighted("c", "a", (), 99.0).unwrap();

        let merged = net.union_with(&other);
        assert_eq!(merged.number_of_nodes(), 4);
        assert_eq!(merged.number_of_edges(), 4);
        // the pre-existing edge keeps its weight
        assert_eq!(merged.weight_between("c", "a"), Some(4.0));
    }

    #[test]
    fn difference_removes_nodes_and_edges() {
        let net = triangle();
        let mut other: Network<(), ()> = Network::new();
        other.add_node("c", ()).unwrap();

        let rest = net.difference(&other);
        assert_eq!(rest.number_of_nodes(), 2);
        assert_eq!(rest.number_of_edges(), 1);
        assert!(rest.contains_node("a"));
        assert!(!rest.contains_node("c"));
    }

    #[test]
    fn kronecker_order_and_size_multiply() {
        let mut g1: Network<(), ()> = Network::new();
        g1.add_node("a", ()).unwrap();
        g1.add_node("b", ()).unwrap();
        g1.add_edge_weighted("a", "b", (), 2.0).unwrap();

        let mut g2: Network<(), ()> = Network::new();
        for name in ["x", "y", "z"] {
            g2.add_node(name, ()).unwrap();
        }
        g2.add_edge_weighted("x", "y", (), 3.0).unwrap();
        g2.add_edge_weighted("y", "z", (), 5.0).unwrap();

        let prod = g1.kronecker(&g2);
        assert_eq!(prod.number_of_nodes(), 6);
        assert_eq!(prod.number_of_edges(), 2);
        assert_eq!(prod.weight_between("ax", "by"), Some(6.0));
        assert_eq!(prod.weight_between("ay", "bz"), Some(10.0));
    }
}
