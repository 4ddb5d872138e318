use fxhash::FxHashSet;

use crate::gens::*;

/// Barabási–Albert preferential attachment: a seed clique of `m` nodes,
/// then one node at a time, each wiring `m` edges to existing nodes picked
/// proportionally to their current degree.
///
/// The degree-proportional pick draws from the endpoint pool: every wired
/// pair contributes both endpoints, so a node's multiplicity in the pool is
/// exactly its undirected degree.
#[derive(Debug, Copy, Clone, Default)]
pub struct BarabasiAlbert {
    n: NumNodes,
    m: NumNodes,
}

impl BarabasiAlbert {
    /// Creates a new empty preferential-attachment generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of edges every attached node brings (also the size
    /// of the seed clique)
    pub fn attachments(mut self, m: NumNodes) -> Self {
        self.m = m;
        self
    }
}

impl NumNodesGen for BarabasiAlbert {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NetworkGenerator for BarabasiAlbert {
    fn generate<R>(&self, rng: &mut R) -> Network
    where
        R: Rng,
    {
        let seed = self.m.clamp(1, self.n);
        let mut net = indexed_nodes(self.n);
        let mut pool: Vec<NodeId> = Vec::new();

        for u in 0..seed {
            for v in (u + 1)..seed {
                wire_pair(&mut net, u, v);
                pool.push(u);
                pool.push(v);
            }
        }

        for u in seed..self.n {
            let mut targets = FxHashSet::default();
            // u existing nodes cap the number of distinct targets
            let wanted = (self.m).min(u) as usize;
            while targets.len() < wanted {
                let v = if pool.is_empty() {
                    rng.random_range(0..u)
                } else {
                    pool[rng.random_range(0..pool.len())]
                };
                targets.insert(v);
            }

            for &v in &targets {
                wire_pair(&mut net, u, v);
                pool.push(u);
                pool.push(v);
            }
        }
        net
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn edge_count_matches_the_model() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let (n, m) = (30u32, 2u32);
        let net = BarabasiAlbert::new().nodes(n).attachments(m).generate(rng);

        let undirected = m * (m - 1) / 2 + (n - m) * m;
        assert_eq!(net.number_of_edges(), 2 * undirected);
    }

    #[test]
    fn attached_nodes_bring_distinct_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);
        let net = BarabasiAlbert::new().nodes(25).attachments(3).generate(rng);

        for u in net.vertices().skip(3) {
            assert!(net.out_degree_of(u) >= 3);
        }
    }

    #[test]
    fn single_attachment_grows_a_tree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let n = 16u32;
        let net = BarabasiAlbert::new().nodes(n).attachments(1).generate(rng);

        assert_eq!(net.number_of_edges(), 2 * (n - 1));
        assert!(net.is_connected());
    }
}
