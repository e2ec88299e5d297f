//! Weighted undirected graphs and the tree algorithms that run on them.

pub mod dijkstra;
pub mod format;
pub mod kruskal;
pub mod parse;
pub mod prim;
pub mod traversal;
pub mod tree;

use num_traits::{PrimInt, Zero};

use crate::error::{GraphError, Result};

/// Vertex identifier in `1..=vertex_count`. `0` never names a vertex.
pub type Vertex = usize;

/// Undirected, weighted edge. `(u, v, w)` and `(v, u, w)` describe the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub u: Vertex,
    pub v: Vertex,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(u: Vertex, v: Vertex, weight: W) -> Self {
        Self { u, v, weight }
    }
}

/// Undirected graph over vertices `1..=vertex_count`.
///
/// Keeps both an adjacency list (for Prim, Dijkstra and the traversals) and the
/// edge list in insertion order (for Kruskal). Neighbours are listed in the
/// order their edges were added.
///
/// # Examples
/// ```
/// use graphtrees::graph::Graph;
///
/// let graph = Graph::from_edges(3, [(1, 2, 4), (2, 3, 1)]).unwrap();
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbors(2).unwrap(), &[(1, 4), (3, 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<W> {
    adjacency: Vec<Vec<(Vertex, W)>>,
    edges: Vec<Edge<W>>,
}

impl<W: Copy> Graph<W> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Panics
    /// Panics if `vertex_count` is `usize::MAX` or the adjacency table cannot be
    /// allocated. Use [`try_new`](Self::try_new) for untrusted sizes.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count + 1],
            edges: Vec::new(),
        }
    }

    /// Fallible [`new`](Self::new).
    ///
    /// # Errors
    /// * `InvalidInput` if `vertex_count` is `usize::MAX` or the table cannot be allocated
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        let slots = vertex_count
            .checked_add(1)
            .ok_or_else(|| GraphError::invalid_input("vertex count overflows usize"))?;

        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(slots).map_err(|_| {
            GraphError::invalid_input(format!("cannot allocate {} vertices", vertex_count))
        })?;
        adjacency.resize_with(slots, Vec::new);

        Ok(Self {
            adjacency,
            edges: Vec::new(),
        })
    }

    /// Builds a graph from `(u, v, weight)` triples.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex, W)>,
    {
        let mut graph = Self::try_new(vertex_count)?;
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Adds the undirected edge `u -- v`.
    ///
    /// Parallel edges and self-loops are stored as given.
    ///
    /// # Errors
    /// * `InvalidVertex` if either endpoint is outside `1..=vertex_count`
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, weight: W) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.adjacency[u].push((v, weight));
        if u != v {
            self.adjacency[v].push((u, weight));
        }
        self.edges.push(Edge::new(u, v, weight));
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        1..=self.vertex_count()
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Neighbours of `v` with the connecting edge weight.
    pub fn neighbors(&self, v: Vertex) -> Result<&[(Vertex, W)]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    pub fn has_vertex(&self, v: Vertex) -> bool {
        v != 0 && v <= self.vertex_count()
    }

    pub fn check_vertex(&self, v: Vertex) -> Result<()> {
        if !self.has_vertex(v) {
            return Err(GraphError::InvalidVertex {
                vertex: v,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }
}

impl<W: Copy + PartialOrd + Zero> Graph<W> {
    /// Returns `true` if any edge weight is below zero.
    ///
    /// Dijkstra does not check this itself; run it first when the input is untrusted.
    pub fn has_negative_weights(&self) -> bool {
        self.edges.iter().any(|e| e.weight < W::zero())
    }
}

/// Sums tree edge weights, failing only if the final total does not fit in `W`.
///
/// Negative and positive weights are interleaved so the running sum never leaves
/// the range spanned by a single weight and the final total.
pub(crate) fn checked_total<W, I>(weights: I) -> Result<W>
where
    W: PrimInt,
    I: IntoIterator<Item = W>,
{
    let (mut negatives, mut positives): (Vec<W>, Vec<W>) =
        weights.into_iter().partition(|&w| w < W::zero());
    let mut total = W::zero();

    loop {
        let next = if total < W::zero() {
            positives.pop().or_else(|| negatives.pop())
        } else {
            negatives.pop().or_else(|| positives.pop())
        };
        match next {
            Some(w) => {
                total = total
                    .checked_add(&w)
                    .ok_or_else(|| GraphError::invalid_input("tree weight overflows the weight type"))?;
            }
            None => return Ok(total),
        }
    }
}
