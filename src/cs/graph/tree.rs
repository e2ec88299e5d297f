use crate::graph::Vertex;

/// Parent-pointer tree rooted at a source vertex, as built by Prim and Dijkstra.
///
/// Vertices the algorithm never reached have neither a parent nor a distance.
/// What `distance` means depends on the producer: Prim stores the weight of the
/// edge to the parent, Dijkstra the length of the path from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentTree<W> {
    source: Vertex,
    parent: Vec<Option<Vertex>>,
    distance: Vec<Option<W>>,
}

impl<W: Copy> ParentTree<W> {
    /// Both vectors are indexed by vertex; slot `0` is ignored.
    pub(crate) fn new(source: Vertex, parent: Vec<Option<Vertex>>, distance: Vec<Option<W>>) -> Self {
        debug_assert_eq!(parent.len(), distance.len());
        Self {
            source,
            parent,
            distance,
        }
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.parent.len().saturating_sub(1)
    }

    /// Parent of `v` in the tree. `None` for the source and for unreached vertices.
    pub fn parent(&self, v: Vertex) -> Option<Vertex> {
        self.parent.get(v).copied().flatten()
    }

    pub fn distance(&self, v: Vertex) -> Option<W> {
        if v == 0 {
            return None;
        }
        self.distance.get(v).copied().flatten()
    }

    pub fn is_reached(&self, v: Vertex) -> bool {
        self.distance(v).is_some()
    }

    /// Vertices outside the source's component, in ascending order.
    pub fn unreached(&self) -> Vec<Vertex> {
        (1..=self.vertex_count())
            .filter(|&v| !self.is_reached(v))
            .collect()
    }

    /// `true` when every vertex was reached, i.e. the tree spans the graph.
    pub fn is_spanning(&self) -> bool {
        (1..=self.vertex_count()).all(|v| self.is_reached(v))
    }

    /// Tree edges as `(parent, child)` pairs, ordered by child.
    pub fn edges(&self) -> Vec<(Vertex, Vertex)> {
        (1..=self.vertex_count())
            .filter_map(|v| self.parent(v).map(|p| (p, v)))
            .collect()
    }

    /// Vertices on the tree path from the source to `target`, both ends included.
    pub fn path_to(&self, target: Vertex) -> Option<Vec<Vertex>> {
        if !self.is_reached(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(p) = self.parent(current) {
            path.push(p);
            current = p;
            if path.len() > self.vertex_count() {
                // Parent pointers always end at the source.
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParentTree<i32> {
        // 1 is the source, 2 and 3 hang off it, 4 hangs off 3, 5 is unreached.
        ParentTree::new(
            1,
            vec![None, None, Some(1), Some(1), Some(3), None],
            vec![None, Some(0), Some(2), Some(1), Some(4), None],
        )
    }

    #[test]
    fn test_accessors() {
        let tree = sample();
        assert_eq!(tree.source(), 1);
        assert_eq!(tree.vertex_count(), 5);
        assert_eq!(tree.parent(1), None);
        assert_eq!(tree.parent(4), Some(3));
        assert_eq!(tree.distance(1), Some(0));
        assert_eq!(tree.distance(5), None);
        assert_eq!(tree.distance(0), None);
        assert_eq!(tree.parent(42), None);
    }

    #[test]
    fn test_unreached_and_spanning() {
        let tree = sample();
        assert_eq!(tree.unreached(), vec![5]);
        assert!(!tree.is_spanning());
        assert!(tree.is_reached(4));
    }

    #[test]
    fn test_edges() {
        assert_eq!(sample().edges(), vec![(1, 2), (1, 3), (3, 4)]);
    }

    #[test]
    fn test_path_to() {
        let tree = sample();
        assert_eq!(tree.path_to(4), Some(vec![1, 3, 4]));
        assert_eq!(tree.path_to(1), Some(vec![1]));
        assert_eq!(tree.path_to(5), None);
    }
}
