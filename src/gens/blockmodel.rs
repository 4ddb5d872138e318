use rand_distr::{Distribution, Normal};

use crate::{gens::*, utils::Probability};

/// The stochastic block model: nodes fall into communities of the given
/// sizes; every unordered pair is wired independently with the
/// intra-community probability when both nodes share a block and with the
/// inter-community probability otherwise.
#[derive(Debug, Clone, Default)]
pub struct StochasticBlockModel {
    sizes: Vec<NumNodes>,
    p_in: f64,
    p_out: f64,
}

impl StochasticBlockModel {
    /// Creates a new empty block-model generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the community sizes
    pub fn communities(mut self, sizes: &[NumNodes]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    /// Sets the intra-community wiring probability
    pub fn intra(mut self, p_in: f64) -> Self {
        assert!(p_in.is_valid_probility());
        self.p_in = p_in;
        self
    }

    /// Sets the inter-community wiring probability
    pub fn inter(mut self, p_out: f64) -> Self {
        assert!(p_out.is_valid_probility());
        self.p_out = p_out;
        self
    }
}

impl NetworkGenerator for StochasticBlockModel {
    fn generate<R>(&self, rng: &mut R) -> Network
    where
        R: Rng,
    {
        let n: NumNodes = self.sizes.iter().sum();
        let mut block = Vec::with_capacity(n as usize);
        for (b, &size) in self.sizes.iter().enumerate() {
            block.extend(std::iter::repeat_n(b, size as usize));
        }

        let mut net = indexed_nodes(n);
        for u in 0..n {
            for v in (u + 1)..n {
                let p = if block[u as usize] == block[v as usize] {
                    self.p_in
                } else {
                    self.p_out
                };
                if p == 1.0 || (p > 0.0 && rng.random_bool(p)) {
                    wire_pair(&mut net, u, v);
                }
            }
        }
        net
    }
}

/// A latent-space (random dot product) graph: every node receives a random
/// position in `dim`-dimensional space; an unordered pair is wired exactly
/// if the dot product of its positions exceeds the threshold.
///
/// Positions are standard-normal per coordinate, scaled by `1/sqrt(dim)`.
#[derive(Debug, Copy, Clone)]
pub struct LatentSpace {
    n: NumNodes,
    dim: usize,
    threshold: f64,
}

impl Default for LatentSpace {
    fn default() -> Self {
        Self {
            n: 0,
            dim: 2,
            threshold: 0.0,
        }
    }
}

impl LatentSpace {
    /// Creates a new latent-space generator (2 dimensions, threshold `0`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dimension of the latent space
    pub fn dimensions(mut self, dim: usize) -> Self {
        assert!(dim > 0);
        self.dim = dim;
        self
    }

    /// Sets the dot-product threshold above which a pair is wired
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

impl NumNodesGen for LatentSpace {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NetworkGenerator for LatentSpace {
    fn generate<R>(&self, rng: &mut R) -> Network
    where
        R: Rng,
    {
        let normal = Normal::new(0.0, 1.0).expect("valid standard normal");
        let scale = 1.0 / (self.dim as f64).sqrt();
        let positions: Vec<Vec<f64>> = (0..self.n)
            .map(|_| (0..self.dim).map(|_| normal.sample(rng) * scale).collect())
            .collect();

        let mut net = indexed_nodes(self.n);
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                let dot: f64 = positions[u as usize]
                    .iter()
                    .zip(&positions[v as usize])
                    .map(|(a, b)| a * b)
                    .sum();
                if dot > self.threshold {
                    wire_pair(&mut net, u, v);
                }
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
    fn disjoint_cliques_from_extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let net = StochasticBlockModel::new()
            .communities(&[3, 4])
            .intra(1.0)
            .inter(0.0)
            .generate(rng);

        assert_eq!(net.number_of_nodes(), 7);
        // two cliques: C(3,2) + C(4,2) undirected pairs
        assert_eq!(net.number_of_edges(), 2 * (3 + 6));
        assert!(!net.is_connected());
    }

    #[test]
    fn inter_community_edges_connect_blocks() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let net = StochasticBlockModel::new()
            .communities(&[4, 4])
            .intra(1.0)
            .inter(1.0)
            .generate(rng);
        let n = net.number_of_nodes();
        assert_eq!(net.number_of_edges(), n * (n - 1));
    }

    #[test]
    fn latent_space_threshold_extremes() {
        let all = LatentSpace::new()
            .nodes(10)
            .dimensions(3)
            .threshold(-100.0)
            .generate(&mut Pcg64Mcg::seed_from_u64(3));
        assert_eq!(all.number_of_edges(), 10 * 9);

        let none = LatentSpace::new()
            .nodes(10)
            .dimensions(3)
            .threshold(100.0)
            .generate(&mut Pcg64Mcg::seed_from_u64(3));
        assert_eq!(none.number_of_edges(), 0);
    }
}
