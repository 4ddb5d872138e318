//! Disjoint-set forest over node handles with path compression and union by
//! rank; `find`/`union` run in near-constant amortized time.

use crate::NodeId;

/// A union-find structure over the handle range `0..n`
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<NodeId>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as NodeId).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the representative of the set containing `u`, compressing the
    /// path along the way
    pub fn find(&mut self, u: NodeId) -> NodeId {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut cur = u;
        while cur != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Merges the sets of `u` and `v`. Returns *true* exactly if they were
    /// distinct before, i.e. if the union changed anything.
    pub fn union(&mut self, u: NodeId, v: NodeId) -> bool {
        let (ru, rv) = (self.find(u), self.find(v));
        if ru == rv {
            return false;
        }

        match self.rank[ru as usize].cmp(&self.rank[rv as usize]) {
            std::cmp::Ordering::Less => self.parent[ru as usize] = rv,
            std::cmp::Ordering::Greater => self.parent[rv as usize] = ru,
            std::cmp::Ordering::Equal => {
                self.parent[rv as usize] = ru;
                self.rank[ru as usize] += 1;
            }
        }
        true
    }

    /// Returns *true* if `u` and `v` are in the same set
    pub fn same_set(&mut self, u: NodeId, v: NodeId) -> bool {
        self.find(u) == self.find(v)
    }
}
