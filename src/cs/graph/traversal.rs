use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::{Graph, Vertex};

/// Depth-first preorder from `start`.
///
/// Produces the same order as the recursive formulation (neighbours taken in
/// adjacency order) but keeps its own stack, so deep graphs cannot overflow the
/// call stack.
///
/// # Errors
/// * `InvalidVertex` if `start` doesn't exist
pub fn depth_first<W: Copy>(graph: &Graph<W>, start: Vertex) -> Result<Vec<Vertex>> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count() + 1];
    let mut order = vec![start];
    // (vertex, index of the next neighbour to look at)
    let mut stack = vec![(start, 0)];
    visited[start] = true;

    while let Some((v, next)) = stack.last_mut() {
        let neighbors = graph.neighbors(*v)?;
        match neighbors.get(*next) {
            Some(&(u, _)) => {
                *next += 1;
                if !visited[u] {
                    visited[u] = true;
                    order.push(u);
                    stack.push((u, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    Ok(order)
}

/// Breadth-first order from `start`, neighbours queued in adjacency order.
///
/// # Errors
/// * `InvalidVertex` if `start` doesn't exist
pub fn breadth_first<W: Copy>(graph: &Graph<W>, start: Vertex) -> Result<Vec<Vertex>> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count() + 1];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        for &(u, _) in graph.neighbors(v)? {
            if !visited[u] {
                visited[u] = true;
                queue.push_back(u);
            }
        }
    }
    Ok(order)
}
