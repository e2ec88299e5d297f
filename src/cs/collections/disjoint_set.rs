use crate::error::{GraphError, Result};
use crate::graph::Vertex;

/// Disjoint-set forest (union-find) over vertices `1..=n`.
///
/// `find` uses path compression and `union` links by rank, which keeps every
/// operation at O(α(n)) amortized. Neither is needed for correctness; they only
/// bound the height of the trees.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Vertex>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..=n).collect(),
            rank: vec![0; n + 1],
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the representative of the set containing `v`.
    pub fn find(&mut self, v: Vertex) -> Result<Vertex> {
        self.check_vertex(v)?;

        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = v;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Returns `true` if `u` and `v` belong to the same set.
    pub fn same_set(&mut self, u: Vertex, v: Vertex) -> Result<bool> {
        Ok(self.find(u)? == self.find(v)?)
    }

    /// Merges the sets rooted at `a` and `b`.
    ///
    /// Both arguments must be representatives, i.e. values returned by
    /// [`find`](Self::find). On equal ranks `a` becomes the root.
    ///
    /// Returns `Ok(false)` without changing anything when `a == b`.
    ///
    /// # Errors
    /// * `InvalidVertex` if either vertex is out of range
    /// * `NotRepresentative` if either vertex is not the root of its set
    pub fn union(&mut self, a: Vertex, b: Vertex) -> Result<bool> {
        for v in [a, b] {
            self.check_vertex(v)?;
            if self.parent[v] != v {
                return Err(GraphError::NotRepresentative(v));
            }
        }
        if a == b {
            return Ok(false);
        }

        if self.rank[a] < self.rank[b] {
            self.parent[a] = b;
        } else {
            self.parent[b] = a;
            if self.rank[a] == self.rank[b] {
                self.rank[a] = self.rank[a].saturating_add(1);
            }
        }
        Ok(true)
    }

    /// Raw parent pointers, indexed by vertex (slot `0` unused).
    pub fn parents(&self) -> &[Vertex] {
        &self.parent
    }

    /// Groups every vertex by its representative.
    ///
    /// Sets are ordered by their smallest member, members in ascending order.
    pub fn sets(&mut self) -> Vec<Vec<Vertex>> {
        let mut index_of_root = vec![usize::MAX; self.parent.len()];
        let mut sets: Vec<Vec<Vertex>> = Vec::new();

        for v in 1..=self.len() {
            let mut root = v;
            while self.parent[root] != root {
                root = self.parent[root];
            }
            if index_of_root[root] == usize::MAX {
                index_of_root[root] = sets.len();
                sets.push(Vec::new());
            }
            sets[index_of_root[root]].push(v);
        }
        sets
    }

    fn check_vertex(&self, v: Vertex) -> Result<()> {
        if v == 0 || v > self.len() {
            return Err(GraphError::InvalidVertex {
                vertex: v,
                vertex_count: self.len(),
            });
        }
        Ok(())
    }
}
