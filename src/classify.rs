/*!
# Network Statistics & Heuristic Classifiers

Statistical summaries of a graph (density, mean degree, clustering) and a
family of `is_*` classifiers that guess whether a network plausibly came
from one of the [`gens`](crate::gens) models.

Every classifier is an explicit **heuristic**: a cheap statistical check
over degree distribution, density and clustering coefficient with a
caller-tunable tolerance — never an exact proof of provenance. All
statistics read the undirected projection, matching the symmetric output of
the generators.
*/

use itertools::Itertools;

use crate::{Graph, GraphFlavor, NodeId, NumNodes, ops::GraphOrder};

impl<D, E, F: GraphFlavor, S> Graph<D, E, F, S> {
    /// Degree of `u` in the undirected projection (self-loops ignored)
    pub fn undirected_degree_of(&self, u: NodeId) -> NumNodes {
        self.projected_neighbors_of(u).filter(|&v| v != u).count() as NumNodes
    }

    /// Number of edges of the undirected projection
    pub fn undirected_edge_count(&self) -> usize {
        let total: usize = self
            .vertices()
            .map(|u| self.undirected_degree_of(u) as usize)
            .sum();
        total / 2
    }

    /// Density of the undirected projection: realized fraction of all
    /// `n·(n−1)/2` node pairs. `0.0` for graphs with fewer than two nodes.
    pub fn density(&self) -> f64 {
        let n = self.len();
        if n < 2 {
            return 0.0;
        }
        2.0 * self.undirected_edge_count() as f64 / (n as f64 * (n - 1) as f64)
    }

    /// Mean degree of the undirected projection
    pub fn average_degree(&self) -> f64 {
        let n = self.len();
        if n == 0 {
            return 0.0;
        }
        2.0 * self.undirected_edge_count() as f64 / n as f64
    }

    /// Local clustering coefficient of `u`: the realized fraction of links
    /// among its undirected neighbors. `0.0` below two neighbors.
    pub fn local_clustering_of(&self, u: NodeId) -> f64 {
        let neighbors: Vec<NodeId> = self
            .projected_neighbors_of(u)
            .filter(|&v| v != u)
            .collect();
        let k = neighbors.len();
        if k < 2 {
            return 0.0;
        }

        let mut links = 0usize;
        for (i, &a) in neighbors.iter().enumerate() {
            for &b in &neighbors[(i + 1)..] {
                if self.has_live_edge(a, b) || self.has_live_edge(b, a) {
                    links += 1;
                }
            }
        }
        2.0 * links as f64 / (k * (k - 1)) as f64
    }

    /// Global clustering coefficient: the mean local coefficient over all
    /// nodes with at least two undirected neighbors, `0.0` if there is none.
    pub fn clustering_coefficient(&self) -> f64 {
        let eligible: Vec<NodeId> = self
            .vertices()
            .filter(|&u| self.undirected_degree_of(u) >= 2)
            .collect();
        if eligible.is_empty() {
            return 0.0;
        }
        eligible
            .iter()
            .map(|&u| self.local_clustering_of(u))
            .sum::<f64>()
            / eligible.len() as f64
    }

    //////////////////////////////////////////////////////////////////
    // Heuristic classifiers

    /// Guesses whether the network looks like a `G(n,p)` draw with the given
    /// `p`: density within `tolerance` of `p` and clustering near the
    /// density (the hallmark of independent wiring).
    pub fn is_gnp_like(&self, p: f64, tolerance: f64) -> bool {
        let density = self.density();
        (density - p).abs() <= tolerance
            && (self.clustering_coefficient() - p).abs() <= 3.0 * tolerance
    }

    /// Guesses whether the network is a ring lattice with `k` neighbors per
    /// side: every node has undirected degree exactly `2k`
    pub fn is_ring_lattice(&self, k: NumNodes) -> bool {
        self.len() as NumNodes > 2 * k
            && self
                .vertices()
                .all(|u| self.undirected_degree_of(u) == 2 * k)
    }

    /// Guesses whether the network looks Watts–Strogatz-like: mean degree
    /// within `tolerance` of the lattice value `2k`, with clustering still
    /// above the density of an equally dense random network
    pub fn is_watts_strogatz_like(&self, k: NumNodes, tolerance: f64) -> bool {
        (self.average_degree() - (2 * k) as f64).abs() <= tolerance
            && self.clustering_coefficient() > self.density()
    }

    /// Guesses whether the degree distribution is preferential-attachment
    /// shaped: a dominant hub well above the mean degree and a majority of
    /// nodes below it
    pub fn is_barabasi_albert_like(&self, tolerance: f64) -> bool {
        let n = self.len();
        if n < 4 {
            return false;
        }
        let mean = self.average_degree();
        if mean == 0.0 {
            return false;
        }

        let degrees: Vec<f64> = self
            .vertices()
            .map(|u| self.undirected_degree_of(u) as f64)
            .collect();
        let max = degrees.iter().copied().fold(0.0, f64::max);
        let below = degrees.iter().filter(|&&d| d < mean).count() as f64 / n as f64;

        max >= (2.0 - tolerance) * mean && below >= 0.6 - tolerance
    }

    /// Tests whether the `members` highest-degree nodes form a club at least
    /// `min_density` dense among themselves
    pub fn has_rich_club(&self, members: NumNodes, min_density: f64) -> bool {
        if members < 2 || (members as usize) > self.len() {
            return false;
        }
        let club: Vec<NodeId> = self
            .vertices()
            .sorted_by_key(|&u| std::cmp::Reverse(self.undirected_degree_of(u)))
            .take(members as usize)
            .collect();

        let mut links = 0usize;
        for (i, &a) in club.iter().enumerate() {
            for &b in &club[(i + 1)..] {
                if self.has_live_edge(a, b) || self.has_live_edge(b, a) {
                    links += 1;
                }
            }
        }
        let possible = (members as usize * (members as usize - 1)) / 2;
        links as f64 / possible as f64 >= min_density
    }

    /// Guesses whether the network is hierarchically organized: local
    /// clustering falls with degree (correlation ≤ `-tolerance`)
    pub fn is_hierarchical_like(&self, tolerance: f64) -> bool {
        let points: Vec<(f64, f64)> = self
            .vertices()
            .filter(|&u| self.undirected_degree_of(u) >= 2)
            .map(|u| {
                (
                    self.undirected_degree_of(u) as f64,
                    self.local_clustering_of(u),
                )
            })
            .collect();

        match pearson(&points) {
            Some(corr) => corr <= -tolerance,
            None => false,
        }
    }

    /// Guesses whether the network is an Apollonian subdivision: the
    /// maximal-planar edge relation `m = 3n − 6` within a relative
    /// `tolerance`, with substantial clustering
    pub fn is_apollonian_like(&self, tolerance: f64) -> bool {
        let n = self.len();
        if n < 3 {
            return false;
        }
        let expected = (3 * n - 6) as f64;
        let m = self.undirected_edge_count() as f64;
        (m - expected).abs() <= tolerance * expected && self.clustering_coefficient() > 0.5
    }

    /// Tests whether the given community assignment explains the wiring: the
    /// intra-community density within `tolerance` of `p_in` and the
    /// inter-community density within `tolerance` of `p_out`.
    ///
    /// Unknown names or empty blocks fail the test.
    pub fn is_stochastic_block_model(
        &self,
        blocks: &[Vec<String>],
        p_in: f64,
        p_out: f64,
        tolerance: f64,
    ) -> bool {
        let mut assignment: Vec<(NodeId, usize)> = Vec::new();
        for (b, names) in blocks.iter().enumerate() {
            if names.is_empty() {
                return false;
            }
            for name in names {
                match self.node_id(name) {
                    Some(u) => assignment.push((u, b)),
                    None => return false,
                }
            }
        }

        let (mut intra_links, mut intra_pairs) = (0usize, 0usize);
        let (mut inter_links, mut inter_pairs) = (0usize, 0usize);
        for (i, &(a, ba)) in assignment.iter().enumerate() {
            for &(b, bb) in &assignment[(i + 1)..] {
                let linked = self.has_live_edge(a, b) || self.has_live_edge(b, a);
                if ba == bb {
                    intra_pairs += 1;
                    intra_links += linked as usize;
                } else {
                    inter_pairs += 1;
                    inter_links += linked as usize;
                }
            }
        }

        let intra = if intra_pairs == 0 {
            p_in
        } else {
            intra_links as f64 / intra_pairs as f64
        };
        let inter = if inter_pairs == 0 {
            p_out
        } else {
            inter_links as f64 / inter_pairs as f64
        };
        (intra - p_in).abs() <= tolerance && (inter - p_out).abs() <= tolerance
    }

    /// Guesses whether the wiring has latent-space geometry: clustering
    /// exceeding the density by at least `tolerance` (independent wiring
    /// cannot sustain that excess)
    pub fn is_latent_space_like(&self, tolerance: f64) -> bool {
        self.clustering_coefficient() - self.density() >= tolerance
    }
}

/// Pearson correlation over `(x, y)` points; `None` when either coordinate
/// has no variance
fn pearson(points: &[(f64, f64)]) -> Option<f64> {
    let n = points.len() as f64;
    if points.len() < 2 {
        return None;
    }

    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for &(x, y) in points {
        cov += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x).powi(2);
        var_y += (y - mean_y).powi(2);
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use crate::{gens::*, prelude::*};

    #[test]
    fn clustering_of_a_clique_is_one() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c", "d"] {
            g.add_node(name, ()).unwrap();
        }
        g.connect_clique(["a", "b", "c", "d"]).unwrap();

        assert_eq!(g.density(), 1.0);
        assert_eq!(g.clustering_coefficient(), 1.0);
    }

    #[test]
    fn complete_network_is_gnp_like_with_p_one() {
        let net = Gnp::new()
            .nodes(8)
            .prob(1.0)
            .generate(&mut Pcg64Mcg::seed_from_u64(1));
        assert!(net.is_gnp_like(1.0, 0.05));
        assert!(!net.is_gnp_like(0.2, 0.05));
    }

    #[test]
    fn lattice_classification() {
        let net = RingLattice::new()
            .nodes(12)
            .neighbors(2)
            .generate(&mut Pcg64Mcg::seed_from_u64(1));
        assert!(net.is_ring_lattice(2));
        assert!(!net.is_ring_lattice(3));
    }

    #[test]
    fn star_looks_preferential_and_lattice_does_not() {
        let mut star: DiGraph<(), ()> = DiGraph::new();
        star.add_node("hub", ()).unwrap();
        for i in 0..9 {
            let leaf = format!("leaf{i}");
            star.add_node(leaf.as_str(), ()).unwrap();
            star.add_edge("hub", &leaf, ()).unwrap();
        }
        assert!(star.is_barabasi_albert_like(0.2));

        let lattice = RingLattice::new()
            .nodes(12)
            .neighbors(2)
            .generate(&mut Pcg64Mcg::seed_from_u64(1));
        assert!(!lattice.is_barabasi_albert_like(0.2));
    }

    #[test]
    fn preferential_attachment_classifies_as_such() {
        let net = BarabasiAlbert::new()
            .nodes(100)
            .attachments(1)
            .generate(&mut Pcg64Mcg::seed_from_u64(11));
        assert!(net.is_barabasi_albert_like(0.2));
    }

    #[test]
    fn rich_club_detection() {
        let mut net = BarabasiAlbert::new()
            .nodes(40)
            .attachments(2)
            .generate(&mut Pcg64Mcg::seed_from_u64(4));

        net.connect_rich_club(5);
        assert!(net.has_rich_club(5, 1.0));

        let sparse = Gnp::new()
            .nodes(40)
            .prob(0.0)
            .generate(&mut Pcg64Mcg::seed_from_u64(4));
        assert!(!sparse.has_rich_club(5, 0.5));
    }

    #[test]
    fn pseudofractal_is_hierarchical() {
        let net = Hierarchical::new()
            .levels(1)
            .generate(&mut Pcg64Mcg::seed_from_u64(1));
        // hubs of the pseudofractal cluster less than its leaves
        assert!(net.is_hierarchical_like(0.5));

        let lattice = RingLattice::new()
            .nodes(12)
            .neighbors(2)
            .generate(&mut Pcg64Mcg::seed_from_u64(1));
        assert!(!lattice.is_hierarchical_like(0.5));
    }

    #[test]
    fn apollonian_matches_its_relation() {
        let net = Apollonian::new()
            .depth(2)
            .generate(&mut Pcg64Mcg::seed_from_u64(1));
        assert!(net.is_apollonian_like(0.05));

        let lattice = RingLattice::new()
            .nodes(10)
            .neighbors(2)
            .generate(&mut Pcg64Mcg::seed_from_u64(1));
        assert!(!lattice.is_apollonian_like(0.05));
    }

    #[test]
    fn block_model_against_its_own_partition() {
        let net = StochasticBlockModel::new()
            .communities(&[3, 3])
            .intra(1.0)
            .inter(0.0)
            .generate(&mut Pcg64Mcg::seed_from_u64(1));

        let blocks = vec![
            vec!["0".to_owned(), "1".to_owned(), "2".to_owned()],
            vec!["3".to_owned(), "4".to_owned(), "5".to_owned()],
        ];
        assert!(net.is_stochastic_block_model(&blocks, 1.0, 0.0, 0.01));
        assert!(!net.is_stochastic_block_model(&blocks, 0.5, 0.5, 0.1));

        let wrong = vec![vec!["0".to_owned(), "ghost".to_owned()]];
        assert!(!net.is_stochastic_block_model(&wrong, 1.0, 0.0, 0.5));
    }

    #[test]
    fn shared_triangles_look_latent() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        for name in ["a", "b", "c", "d", "e"] {
            g.add_node(name, ()).unwrap();
        }
        g.connect_cycle(["a", "b", "c"]).unwrap();
        g.connect_cycle(["a", "d", "e"]).unwrap();
        assert!(g.is_latent_space_like(0.2));

        let mut star: DiGraph<(), ()> = DiGraph::new();
        star.add_node("hub", ()).unwrap();
        for i in 0..4 {
            let leaf = format!("leaf{i}");
            star.add_node(leaf.as_str(), ()).unwrap();
            star.add_edge("hub", &leaf, ()).unwrap();
        }
        assert!(!star.is_latent_space_like(0.2));
    }
}
