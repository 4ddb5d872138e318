/*!
# Snapshot Serialization

The single persisted representation of a graph:

```json
{ "nodes": [{"name", "data", "value"?}],
  "edges": [{"source", "target", "data", "weight"?}],
  "state": ... }
```

[`Graph::snapshot`] materializes it, [`Graph::from_snapshot`] rebuilds a
graph from it; a serialize → reconstruct → serialize round trip reproduces
equivalent node/edge/state content. The optional numeric fields only appear
for the weighted flavor. Any serde format works; the tests use JSON.

For visual inspection there is additionally a GraphViz DOT writer,
[`Graph::write_dot`] — node names become DOT labels, weighted edges are
annotated with their stored weight.
*/

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{EdgeRef, Graph, GraphError, GraphFlavor, NodeRef};

/// The detached, serializable form of a whole container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<D, E, S = ()> {
    /// Every node as a detached record
    pub nodes: Vec<NodeRef<D>>,
    /// Every edge as a detached record
    pub edges: Vec<EdgeRef<E>>,
    /// The container-wide state, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<S>,
}

impl<D, E, F, S> Graph<D, E, F, S>
where
    D: Clone,
    E: Clone,
    F: GraphFlavor,
    S: Clone,
{
    /// Materializes the detached snapshot form of this graph
    pub fn snapshot(&self) -> Snapshot<D, E, S> {
        Snapshot {
            nodes: self.node_list(),
            edges: self.edge_list(),
            state: self.state().cloned(),
        }
    }
}

impl<D, E, F: GraphFlavor, S> Graph<D, E, F, S> {
    /// Rebuilds a graph from its snapshot form.
    ///
    /// # Errors
    /// The structural rules apply unchanged: duplicate node names, duplicate
    /// edges and edges naming unknown endpoints reject the snapshot.
    pub fn from_snapshot(snapshot: Snapshot<D, E, S>) -> Result<Self, GraphError> {
        let mut graph = Self::new();

        for node in snapshot.nodes {
            graph.insert_node(node.name, node.data, F::node_attr_from(node.value))?;
        }
        for edge in snapshot.edges {
            let u = graph.require_node(&edge.source)?;
            let v = graph.require_node(&edge.target)?;
            graph.insert_edge(u, v, edge.data, F::edge_attr_from(edge.weight))?;
        }
        if let Some(state) = snapshot.state {
            graph.set_state(state);
        }

        Ok(graph)
    }

    /// Writes the graph in GraphViz DOT form
    pub fn write_dot<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {{")?;
        for slot in self.nodes.iter().flatten() {
            writeln!(writer, "    \"{}\";", slot.name)?;
        }
        for slot in self.edges.iter().flatten() {
            let source = &self.slot(slot.source).name;
            let target = &self.slot(slot.target).name;
            match F::edge_weight(&slot.attr) {
                Some(w) => {
                    writeln!(writer, "    \"{source}\" -> \"{target}\" [label=\"{w}\"];")?
                }
                None => writeln!(writer, "    \"{source}\" -> \"{target}\";")?,
            }
        }
        writeln!(writer, "}}")
    }

    /// [`Graph::write_dot`] into a fresh string
    pub fn to_dot(&self) -> String {
        let mut buf = Vec::new();
        self.write_dot(&mut buf).expect("infallible vec writer");
        String::from_utf8(buf).expect("dot output is utf-8")
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn sample() -> Network<String, i32, String> {
        let mut net = Network::new();
        net.add_node_valued("a", "alpha".to_owned(), 1.5).unwrap();
        net.add_node_valued("b", "beta".to_owned(), 0.0).unwrap();
        net.add_node("c", "gamma".to_owned()).unwrap();
        net.add_edge_weighted("a", "b", 10, 2.5).unwrap();
        net.add_edge("b", "c", 20).unwrap();
        net.set_state("tagged".to_owned());
        net
    }

    #[test]
    fn snapshot_round_trip_is_lossless() {
        let net = sample();
        let first = net.snapshot();

        let rebuilt = Network::from_snapshot(first.clone()).unwrap();
        let second = rebuilt.snapshot();

        assert_eq!(first, second);
        assert_eq!(rebuilt.node_value("a"), Some(1.5));
        assert_eq!(rebuilt.weight_between("a", "b"), Some(2.5));
        assert_eq!(rebuilt.weight_between("b", "c"), Some(1.0));
        assert_eq!(rebuilt.state().map(String::as_str), Some("tagged"));
    }

    #[test]
    fn json_round_trip() {
        let net = sample();
        let json = serde_json::to_string(&net.snapshot()).unwrap();
        let parsed: Snapshot<String, i32, String> = serde_json::from_str(&json).unwrap();
        let rebuilt = Network::from_snapshot(parsed).unwrap();
        assert_eq!(rebuilt.snapshot(), net.snapshot());
    }

    #[test]
    fn plain_snapshots_omit_numeric_fields() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        g.add_node("a", ()).unwrap();
        g.add_node("b", ()).unwrap();
        g.add_edge("a", "b", ()).unwrap();

        let json = serde_json::to_string(&g.snapshot()).unwrap();
        assert!(!json.contains("value"));
        assert!(!json.contains("weight"));
        assert!(!json.contains("state"));
    }

    #[test]
    fn snapshot_with_unknown_endpoint_is_rejected() {
        let mut snapshot = sample().snapshot();
        snapshot.edges[0].target = "ghost".to_owned();
        assert_eq!(
            Network::from_snapshot(snapshot).unwrap_err(),
            GraphError::MissingNode("ghost".to_owned())
        );
    }

    #[test]
    fn dot_output_lists_nodes_and_labeled_edges() {
        let net = sample();
        let dot = net.to_dot();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("\"a\";"));
        assert!(dot.contains("\"a\" -> \"b\" [label=\"2.5\"];"));

        let mut g: DiGraph<(), ()> = DiGraph::new();
        g.add_node("x", ()).unwrap();
        g.add_node("y", ()).unwrap();
        g.add_edge("x", "y", ()).unwrap();
        assert!(g.to_dot().contains("\"x\" -> \"y\";"));
    }
}
