use crate::gens::*;

/// The pseudofractal scale-free construction: start from a wired triangle;
/// at every level, each existing undirected pair spawns a fresh node wired
/// to both of its endpoints.
///
/// Deterministic — the random source is unused. Node and edge counts grow
/// geometrically with the level count, so keep `levels` small.
#[derive(Debug, Copy, Clone, Default)]
pub struct Hierarchical {
    levels: u32,
}

impl Hierarchical {
    /// Creates a new pseudofractal generator of level `0` (a triangle)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of replication levels
    pub fn levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }
}

impl NetworkGenerator for Hierarchical {
    fn generate<R>(&self, _rng: &mut R) -> Network
    where
        R: Rng,
    {
        let mut net = indexed_nodes(3);
        let mut pairs = vec![(0, 1), (0, 2), (1, 2)];
        for &(u, v) in &pairs {
            wire_pair(&mut net, u, v);
        }

        let mut next_id = 3u32;
        for _ in 0..self.levels {
            let snapshot = pairs.clone();
            for (u, v) in snapshot {
                let fresh = next_id;
                next_id += 1;
                net.add_node(fresh.to_string(), ())
                    .expect("indices are unique names");
                wire_pair(&mut net, fresh, u);
                wire_pair(&mut net, fresh, v);
                pairs.push((fresh, u));
                pairs.push((fresh, v));
            }
        }
        net
    }
}

/// The Apollonian construction: recursive subdivision of a triangle, each
/// face receiving a center node wired to its three corners.
///
/// Deterministic — the random source is unused. Satisfies the maximal
/// planar relation `m = 3·n − 6` at every depth.
#[derive(Debug, Copy, Clone, Default)]
pub struct Apollonian {
    depth: u32,
}

impl Apollonian {
    /// Creates a new Apollonian generator of depth `0` (a triangle)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subdivision depth
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

impl NetworkGenerator for Apollonian {
    fn generate<R>(&self, _rng: &mut R) -> Network
    where
        R: Rng,
    {
        let mut net = indexed_nodes(3);
        for (u, v) in [(0, 1), (0, 2), (1, 2)] {
            wire_pair(&mut net, u, v);
        }

        let mut next_id = 3u32;
        let mut faces = vec![((0, 1, 2), self.depth)];
        while let Some(((a, b, c), depth_left)) = faces.pop() {
            if depth_left == 0 {
                continue;
            }
            let center = next_id;
            next_id += 1;
            net.add_node(center.to_string(), ())
                .expect("indices are unique names");
            for corner in [a, b, c] {
                wire_pair(&mut net, center, corner);
            }
            faces.push(((a, b, center), depth_left - 1));
            faces.push(((a, c, center), depth_left - 1));
            faces.push(((b, c, center), depth_left - 1));
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
    fn pseudofractal_counts() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        let level0 = Hierarchical::new().generate(rng);
        assert_eq!(level0.number_of_nodes(), 3);
        assert_eq!(level0.number_of_edges(), 6);

        // each level triples the pair count
        let level1 = Hierarchical::new().levels(1).generate(rng);
        assert_eq!(level1.number_of_nodes(), 6);
        assert_eq!(level1.number_of_edges(), 18);

        let level2 = Hierarchical::new().levels(2).generate(rng);
        assert_eq!(level2.number_of_nodes(), 15);
        assert_eq!(level2.number_of_edges(), 54);
    }

    #[test]
    fn apollonian_is_maximal_planar() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        for depth in 0..4 {
            let net = Apollonian::new().depth(depth).generate(rng);
            let n = net.number_of_nodes();
            let undirected = net.number_of_edges() / 2;
            assert_eq!(undirected, 3 * n - 6);
        }
    }

    #[test]
    fn apollonian_depth_one_is_the_tetrahedron() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let net = Apollonian::new().depth(1).generate(rng);
        assert_eq!(net.number_of_nodes(), 4);
        assert_eq!(net.number_of_edges(), 12);
        for u in net.vertices() {
            assert_eq!(net.out_degree_of(u), 3);
        }
    }
}
