use log::{debug, trace};
use num_traits::PrimInt;
use std::fmt::Debug;

use crate::collections::IndexedMinHeap;
use crate::error::Result;
use crate::graph::tree::ParentTree;
use crate::graph::{checked_total, Graph, Vertex};

/// Computes a minimum spanning tree of the source's component using Prim's algorithm.
///
/// The frontier lives in an [`IndexedMinHeap`] keyed by the cheapest known edge
/// into the tree; a cheaper edge lowers the key in place instead of queueing a
/// second entry. Each vertex moves through three states: unseen (not queued),
/// frontier (queued), settled (extracted, edge to its parent final).
///
/// # Arguments
/// * `graph` - The undirected graph to find the MST in
/// * `source` - The vertex the tree grows from
///
/// # Returns
/// * `Ok((total_weight, tree))` - The MST weight and the parent-pointer tree, where
///   `tree.distance(v)` is the weight of the edge joining `v` to its parent
/// * `Err(GraphError)` - If the source vertex does not exist
///
/// Vertices outside the source's component are left unreached; check
/// [`ParentTree::is_spanning`] before treating the result as a spanning tree.
/// Negative weights are fine.
///
/// # Examples
/// ```
/// use graphtrees::graph::{prim, Graph};
///
/// let graph = Graph::from_edges(3, [(1, 2, 4), (1, 3, 2), (2, 3, 1)]).unwrap();
/// let (weight, tree) = prim::minimum_spanning_tree(&graph, 1).unwrap();
/// assert_eq!(weight, 3);
/// assert_eq!(tree.parent(2), Some(3));
/// assert!(tree.is_spanning());
/// ```
///
/// # Complexity
/// * Time: O((V + E) log V) where V is the number of vertices and E is the number of edges
/// * Space: O(V)
///
/// # Errors
/// * `InvalidVertex` if the source vertex doesn't exist
/// * `InvalidInput` if the total weight overflows `W`
pub fn minimum_spanning_tree<W>(graph: &Graph<W>, source: Vertex) -> Result<(W, ParentTree<W>)>
where
    W: PrimInt + Debug,
{
    graph.check_vertex(source)?;

    let n = graph.vertex_count();
    let mut heap = IndexedMinHeap::new(n, W::max_value());
    let mut parent: Vec<Option<Vertex>> = vec![None; n + 1];
    let mut in_tree = vec![false; n + 1];
    heap.insert(source, W::zero())?;

    while !heap.is_empty() {
        let v = heap.extract_min();
        in_tree[v] = true;

        let weight = heap.priority(v)?;
        debug!("prim: adding vertex {} to MST (parent {:?}, weight {:?})", v, parent[v], weight);

        for &(u, w) in graph.neighbors(v)? {
            if in_tree[u] {
                continue;
            }
            if !heap.contains(u) {
                trace!("prim: discovered {} from {} with weight {:?}", u, v, w);
                parent[u] = Some(v);
                heap.insert(u, w)?;
            } else if w < heap.priority(u)? {
                trace!("prim: cheaper edge to {} from {} with weight {:?}", u, v, w);
                parent[u] = Some(v);
                heap.notify_decreased(u, w)?;
            }
        }
    }

    let priorities = heap.into_priorities();
    let distance: Vec<Option<W>> = (0..=n)
        .map(|v| if in_tree[v] { Some(priorities[v]) } else { None })
        .collect();
    let total_weight = checked_total(distance.iter().flatten().copied())?;

    Ok((total_weight, ParentTree::new(source, parent, distance)))
}
