use log::debug;
use num_traits::PrimInt;
use std::fmt::Debug;

use crate::collections::{DisjointSet, EdgeHeap};
use crate::error::Result;
use crate::graph::{checked_total, Edge, Graph, Vertex};

/// Edges accepted by Kruskal's algorithm.
///
/// One tree per connected component: a connected graph with `V` vertices yields
/// exactly `V - 1` edges, anything less is a spanning forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest<W> {
    edges: Vec<Edge<W>>,
    total_weight: W,
    vertex_count: usize,
    components: Vec<Vec<Vertex>>,
}

impl<W: Copy> SpanningForest<W> {
    /// Accepted edges, in the order they were accepted (non-decreasing weight).
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// `true` if the edges form a single tree over all vertices.
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    /// Number of trees in the forest, counting isolated vertices.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Vertex sets of the trees, each ascending, ordered by smallest member.
    pub fn components(&self) -> &[Vec<Vertex>] {
        &self.components
    }
}

/// Kruskal's algorithm to compute the MST for an undirected, weighted graph.
///
/// Edges come out of an [`EdgeHeap`] lightest first; an edge is kept only when
/// its endpoints lie in different [`DisjointSet`] components. The loop stops once
/// `V - 1` edges are accepted or the edges run out.
///
/// If the graph is disconnected, this returns a spanning forest of all connected
/// components; check [`SpanningForest::is_spanning`]. Any weight sign is fine.
///
/// # Examples
/// ```
/// use graphtrees::graph::{kruskal, Graph};
///
/// let graph = Graph::from_edges(4, [(1, 2, 10), (1, 3, 6), (1, 4, 5), (2, 4, 15), (3, 4, 4)]).unwrap();
/// let forest = kruskal::minimum_spanning_forest(&graph).unwrap();
/// assert_eq!(forest.total_weight(), 19);
/// assert!(forest.is_spanning());
/// ```
///
/// # Complexity
/// * Time: O(E log E)
/// * Space: O(V + E)
///
/// # Errors
/// * `InvalidInput` if the total weight overflows `W`
pub fn minimum_spanning_forest<W>(graph: &Graph<W>) -> Result<SpanningForest<W>>
where
    W: PrimInt + Debug,
{
    let n = graph.vertex_count();
    let target = n.saturating_sub(1);

    let mut heap = EdgeHeap::new(graph.edges());
    let mut partition = DisjointSet::new(n);
    let mut accepted = Vec::with_capacity(target);

    while accepted.len() < target && !heap.is_empty() {
        let edge = heap.remove();
        let u_set = partition.find(edge.u)?;
        let v_set = partition.find(edge.v)?;

        if u_set != v_set {
            partition.union(u_set, v_set)?;
            debug!("kruskal: accepted edge ({}, {}) = {:?}", edge.u, edge.v, edge.weight);
            accepted.push(*edge);
        } else {
            debug!(
                "kruskal: skipping edge ({}, {}) = {:?}, already in component {}",
                edge.u, edge.v, edge.weight, u_set
            );
        }
    }

    if accepted.len() < target {
        debug!(
            "kruskal: graph is disconnected, {} of {} edges accepted",
            accepted.len(),
            target
        );
    }

    debug!("kruskal: partition forest {:?}", partition.parents());
    let components = partition.sets();
    let total_weight = checked_total(accepted.iter().map(|e| e.weight))?;

    Ok(SpanningForest {
        edges: accepted,
        total_weight,
        vertex_count: n,
        components,
    })
}
