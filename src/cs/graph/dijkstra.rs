use log::{debug, trace};
use num_traits::PrimInt;
use std::fmt::Debug;

use crate::collections::IndexedMinHeap;
use crate::error::Result;
use crate::graph::tree::ParentTree;
use crate::graph::{Graph, Vertex};

/// Computes the shortest path tree from `source` using Dijkstra's algorithm.
///
/// Same frontier handling as [`prim`](super::prim), but a vertex is keyed by the
/// length of the best known path from the source rather than by a single edge.
///
/// # Arguments
/// * `graph` - The undirected graph to search
/// * `source` - The vertex all paths start from
///
/// # Returns
/// * `Ok(tree)` - Parent pointers along shortest paths; `tree.distance(v)` is the
///   path length from `source` to `v`, `None` when `v` is unreachable
/// * `Err(GraphError)` - If the source vertex does not exist
///
/// Weights must be non-negative. This is not checked: negative weights silently
/// produce wrong distances because settled vertices are never revisited. Use
/// [`Graph::has_negative_weights`] to validate untrusted input. Path sums that
/// overflow `W` are treated as no improvement.
///
/// # Examples
/// ```
/// use graphtrees::graph::{dijkstra, Graph};
///
/// let graph = Graph::from_edges(3, [(1, 2, 4), (1, 3, 1), (3, 2, 1)]).unwrap();
/// let tree = dijkstra::shortest_path_tree(&graph, 1).unwrap();
/// assert_eq!(tree.distance(2), Some(2));
/// assert_eq!(tree.path_to(2), Some(vec![1, 3, 2]));
/// ```
///
/// # Complexity
/// * Time: O((V + E) log V)
/// * Space: O(V)
///
/// # Errors
/// * `InvalidVertex` if the source vertex doesn't exist
pub fn shortest_path_tree<W>(graph: &Graph<W>, source: Vertex) -> Result<ParentTree<W>>
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

        let dist_v = heap.priority(v)?;
        debug!("dijkstra: adding vertex {} to SPT (parent {:?}, distance {:?})", v, parent[v], dist_v);

        for &(u, w) in graph.neighbors(v)? {
            if in_tree[u] {
                continue;
            }
            let Some(candidate) = dist_v.checked_add(&w) else {
                continue;
            };

            if !heap.contains(u) {
                trace!("dijkstra: reached {} via {} at {:?}", u, v, candidate);
                parent[u] = Some(v);
                heap.insert(u, candidate)?;
            } else if candidate < heap.priority(u)? {
                trace!("dijkstra: shorter path to {} via {} at {:?}", u, v, candidate);
                parent[u] = Some(v);
                heap.notify_decreased(u, candidate)?;
            }
        }
    }

    let priorities = heap.into_priorities();
    let distance = (0..=n)
        .map(|v| if in_tree[v] { Some(priorities[v]) } else { None })
        .collect();

    Ok(ParentTree::new(source, parent, distance))
}
