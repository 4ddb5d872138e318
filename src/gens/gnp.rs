use crate::{gens::*, utils::Probability};

/// `G(n,p)` networks wire every unordered node pair independently with
/// probability `p`; a wired pair becomes two opposite directed edges.
///
/// The edge cases are handled without consulting the random source:
/// `p = 0` yields the empty network, `p = 1` the complete symmetric one
/// with `n·(n−1)` directed edges.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl ProbabilityGen for Gnp {
    fn prob(mut self, p: f64) -> Self {
        assert!(p.is_valid_probility());
        self.p = Some(p);
        self
    }
}

impl NetworkGenerator for Gnp {
    fn generate<R>(&self, rng: &mut R) -> Network
    where
        R: Rng,
    {
        let p = self.p.expect("probability of Gnp was not set");
        let mut net = indexed_nodes(self.n);

        // distinguish the easy cases to skip the random source entirely
        if p == 0.0 {
            return net;
        }
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if p == 1.0 || rng.random_bool(p) {
                    wire_pair(&mut net, u, v);
                }
            }
        }
        net
    }
}
