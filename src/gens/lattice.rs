use fxhash::FxHashSet;

use crate::{gens::*, utils::Probability};

/// A ring lattice: `n` nodes on a circle, each wired to its `k` nearest
/// neighbors per side (modulo `n`).
#[derive(Debug, Copy, Clone, Default)]
pub struct RingLattice {
    n: NumNodes,
    k: NumNodes,
}

impl RingLattice {
    /// Creates a new empty ring-lattice generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of neighbors per side
    pub fn neighbors(mut self, k: NumNodes) -> Self {
        self.k = k;
        self
    }
}

impl NumNodesGen for RingLattice {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NetworkGenerator for RingLattice {
    /// Deterministic construction; the random source is unused
    fn generate<R>(&self, _rng: &mut R) -> Network
    where
        R: Rng,
    {
        let mut net = indexed_nodes(self.n);
        for u in 0..self.n {
            for d in 1..=self.k {
                let v = (u + d) % self.n;
                if u != v {
                    wire_pair(&mut net, u, v);
                }
            }
        }
        net
    }
}

/// A Watts–Strogatz small world: a ring lattice whose far endpoints are
/// probabilistically rewired to uniformly random targets.
///
/// Rewiring preserves the edge count: each lattice pair `(u, (u+d) mod n)`
/// is replaced with probability `beta` by `(u, m)` for a random `m` that is
/// neither `u` nor already a neighbor of `u`. If no such target exists the
/// pair stays on the lattice.
#[derive(Debug, Copy, Clone, Default)]
pub struct WattsStrogatz {
    n: NumNodes,
    k: NumNodes,
    beta: f64,
}

impl WattsStrogatz {
    /// Creates a new empty Watts–Strogatz generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of lattice neighbors per side
    pub fn neighbors(mut self, k: NumNodes) -> Self {
        self.k = k;
        self
    }

    /// Sets the rewiring probability
    pub fn rewiring(mut self, beta: f64) -> Self {
        assert!(beta.is_valid_probility());
        self.beta = beta;
        self
    }
}

impl NumNodesGen for WattsStrogatz {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NetworkGenerator for WattsStrogatz {
    fn generate<R>(&self, rng: &mut R) -> Network
    where
        R: Rng,
    {
        let mut net = indexed_nodes(self.n);
        if self.n < 2 {
            return net;
        }

        // undirected neighborhood bookkeeping for duplicate avoidance
        let mut wired: Vec<FxHashSet<NodeId>> = vec![FxHashSet::default(); self.n as usize];
        let wire = |net: &mut Network, wired: &mut Vec<FxHashSet<NodeId>>, u: NodeId, v| {
            wire_pair(net, u, v);
            wired[u as usize].insert(v);
            wired[v as usize].insert(u);
        };

        for u in 0..self.n {
            for d in 1..=self.k {
                let v = (u + d) % self.n;
                if u == v {
                    continue;
                }

                // a lattice pair that is already taken (by an earlier rewire)
                // must move elsewhere to preserve the edge count
                let lattice_taken = wired[u as usize].contains(&v);
                if lattice_taken || (self.beta > 0.0 && rng.random_bool(self.beta)) {
                    match fresh_target(rng, &wired, self.n, u) {
                        Some(m) => wire(&mut net, &mut wired, u, m),
                        // u is saturated; keep the lattice edge if possible
                        None if !lattice_taken => wire(&mut net, &mut wired, u, v),
                        None => {}
                    }
                } else {
                    wire(&mut net, &mut wired, u, v);
                }
            }
        }
        net
    }
}

/// Samples a node that is neither `u` nor already wired to it; falls back to
/// a deterministic scan before giving up on a saturated node.
fn fresh_target<R: Rng>(
    rng: &mut R,
    wired: &[FxHashSet<NodeId>],
    n: NumNodes,
    u: NodeId,
) -> Option<NodeId> {
    for _ in 0..(4 * n) {
        let m = rng.random_range(0..n);
        if m != u && !wired[u as usize].contains(&m) {
            return Some(m);
        }
    }
    (0..n).find(|&m| m != u && !wired[u as usize].contains(&m))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn lattice_degrees_are_uniform() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let net = RingLattice::new().nodes(10).neighbors(2).generate(rng);

        assert_eq!(net.number_of_edges(), 10 * 4);
        for u in net.vertices() {
            assert_eq!(net.out_degree_of(u), 4);
            assert_eq!(net.in_degree_of(u), 4);
        }
    }

    #[test]
    fn tiny_rings_do_not_duplicate_pairs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        // k exceeds what 3 nodes can host; the lattice saturates to a triangle
        let net = RingLattice::new().nodes(3).neighbors(5).generate(rng);
        assert_eq!(net.number_of_edges(), 6);
    }

    #[test]
    fn unwired_small_world_is_the_lattice() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let ws = WattsStrogatz::new()
            .nodes(12)
            .neighbors(2)
            .rewiring(0.0)
            .generate(rng);
        let lattice = RingLattice::new()
            .nodes(12)
            .neighbors(2)
            .generate(&mut Pcg64Mcg::seed_from_u64(3));

        assert_eq!(ws.snapshot(), lattice.snapshot());
    }

    #[test]
    fn rewiring_preserves_the_edge_count() {
        for seed in 0..5 {
            let rng = &mut Pcg64Mcg::seed_from_u64(seed);
            let net = WattsStrogatz::new()
                .nodes(20)
                .neighbors(3)
                .rewiring(0.5)
                .generate(rng);
            assert_eq!(net.number_of_edges(), 2 * 20 * 3);
        }
    }
}
