/*!
# Substructure Generators

Utility methods to wire additional **substructures** into an already
existing graph:

- **paths** and **cycles** along a sequence of named nodes,
- **cliques** over a set of named nodes,
- the **rich club**: clique-ification of the highest-degree nodes.

Already wired pairs are left untouched, so these methods compose with any
prior structure. All named nodes must exist; payload-carrying edge types are
wired with their default payload.
*/

use itertools::Itertools;

use crate::{
    Graph, GraphError, GraphFlavor, NodeId, NumNodes,
    ops::{Adjacency, GraphOrder},
};

/// Trait for wiring additional substructures into an existing graph.
pub trait Substructures {
    /// Connects the given nodes in order with a directed path.
    ///
    /// # Errors
    /// Fails without modification if any name is unknown.
    fn connect_path<I, T>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>;

    /// Connects the given nodes with a directed cycle: consecutive nodes
    /// plus the closing edge from the last back to the first.
    ///
    /// # Errors
    /// Fails without modification if any name is unknown.
    fn connect_cycle<I, T>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>;

    /// Wires every ordered pair of the given nodes (no self-loops).
    ///
    /// # Errors
    /// Fails without modification if any name is unknown.
    fn connect_clique<I, T>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>;

    /// Clique-ifies the `members` highest-degree nodes (by total degree)
    /// and returns their names.
    fn connect_rich_club(&mut self, members: NumNodes) -> Vec<String>;
}

impl<D, E, F, S> Substructures for Graph<D, E, F, S>
where
    E: Default,
    F: GraphFlavor,
{
    fn connect_path<I, T>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let ids = self.resolve(nodes)?;
        for (u, v) in ids.into_iter().tuple_windows() {
            self.wire(u, v);
        }
        Ok(())
    }

    fn connect_cycle<I, T>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let ids = self.resolve(nodes)?;
        if let (Some(&first), Some(&last)) = (ids.first(), ids.last()) {
            for (u, v) in ids.iter().copied().tuple_windows() {
                self.wire(u, v);
            }
            self.wire(last, first);
        }
        Ok(())
    }

    fn connect_clique<I, T>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let ids = self.resolve(nodes)?;
        for &u in &ids {
            for &v in &ids {
                if u != v {
                    self.wire(u, v);
                }
            }
        }
        Ok(())
    }

    fn connect_rich_club(&mut self, members: NumNodes) -> Vec<String> {
        let club: Vec<NodeId> = self
            .vertices()
            .sorted_by_key(|&u| std::cmp::Reverse(self.total_degree_of(u)))
            .take(members as usize)
            .collect();

        for &u in &club {
            for &v in &club {
                if u != v {
                    self.wire(u, v);
                }
            }
        }

        club.into_iter()
            .map(|u| self.node_name(u).unwrap().to_owned())
            .collect()
    }
}

impl<D, E, F, S> Graph<D, E, F, S>
where
    E: Default,
    F: GraphFlavor,
{
    fn resolve<I, T>(&self, nodes: I) -> Result<Vec<NodeId>, GraphError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        nodes
            .into_iter()
            .map(|name| self.require_node(name.as_ref()))
            .collect()
    }

    /// Adds the edge with default payload and attribute unless it exists
    fn wire(&mut self, u: NodeId, v: NodeId) {
        let _ = self.insert_edge(u, v, E::default(), F::default_edge_attr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn blank(names: &[&str]) -> DiGraph<(), ()> {
        let mut g = DiGraph::new();
        for name in names {
            g.add_node(*name, ()).unwrap();
        }
        g
    }

    #[test]
    fn path_wires_consecutive_pairs() {
        let mut g = blank(&["a", "b", "c"]);
        g.connect_path(["a", "b", "c"]).unwrap();

        assert_eq!(g.number_of_edges(), 2);
        assert!(g.edge_between("a", "b").is_some());
        assert!(g.edge_between("b", "c").is_some());
    }

    #[test]
    fn cycle_adds_the_closing_edge() {
        let mut g = blank(&["a", "b", "c"]);
        g.connect_cycle(["a", "b", "c"]).unwrap();
        assert_eq!(g.number_of_edges(), 3);
        assert!(g.edge_between("c", "a").is_some());
    }

    #[test]
    fn clique_wires_all_ordered_pairs() {
        let mut g = blank(&["a", "b", "c"]);
        g.connect_clique(["a", "b", "c"]).unwrap();
        assert_eq!(g.number_of_edges(), 6);
    }

    #[test]
    fn existing_edges_are_kept() {
        let mut g = blank(&["a", "b"]);
        g.add_edge("a", "b", ()).unwrap();
        g.connect_path(["a", "b"]).unwrap();
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let mut g = blank(&["a"]);
        assert_eq!(
            g.connect_path(["a", "ghost"]),
            Err(GraphError::MissingNode("ghost".to_owned()))
        );
        assert_eq!(g.number_of_edges(), 0);
    }

    #[test]
    fn rich_club_wires_the_hubs() {
        let mut g = blank(&["hub1", "hub2", "leaf1", "leaf2", "leaf3"]);
        for leaf in ["leaf1", "leaf2", "leaf3"] {
            g.add_edge("hub1", leaf, ()).unwrap();
            g.add_edge("hub2", leaf, ()).unwrap();
        }

        let mut club = g.connect_rich_club(2);
        club.sort();
        assert_eq!(club, vec!["hub1", "hub2"]);
        assert!(g.edge_between("hub1", "hub2").is_some());
        assert!(g.edge_between("hub2", "hub1").is_some());
    }
}
