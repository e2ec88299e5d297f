use crate::graph::Edge;

/// Min-heap over a borrowed edge slice, ordered by weight.
///
/// Built bottom-up in O(E) and drained in O(log E) per edge. Edge weights never
/// change, so no position map is kept. The heap also iterates, yielding edges in
/// ascending weight order.
#[derive(Debug, Clone)]
pub struct EdgeHeap<'a, W> {
    edges: &'a [Edge<W>],
    heap: Vec<usize>,
}

impl<'a, W: Ord + Copy> EdgeHeap<'a, W> {
    pub fn new(edges: &'a [Edge<W>]) -> Self {
        let mut heap = EdgeHeap {
            edges,
            heap: (0..edges.len()).collect(),
        };
        for k in (0..heap.heap.len() / 2).rev() {
            heap.sift_down(k);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn peek(&self) -> Option<&'a Edge<W>> {
        let edges = self.edges;
        self.heap.first().map(|&i| &edges[i])
    }

    /// Removes and returns the lightest remaining edge.
    ///
    /// # Panics
    /// Panics if the heap is empty.
    pub fn remove(&mut self) -> &'a Edge<W> {
        assert!(!self.is_empty(), "remove called on an empty edge heap");
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        let edges = self.edges;
        &edges[min]
    }

    fn weight(&self, slot: usize) -> W {
        self.edges[self.heap[slot]].weight
    }

    fn sift_down(&mut self, mut k: usize) {
        let n = self.heap.len();
        let e = self.heap[k];
        let w = self.edges[e].weight;
        loop {
            let mut j = 2 * k + 1;
            if j >= n {
                break;
            }
            if j + 1 < n && self.weight(j + 1) < self.weight(j) {
                j += 1;
            }
            if w <= self.weight(j) {
                break;
            }
            self.heap[k] = self.heap[j];
            k = j;
        }
        self.heap[k] = e;
    }
}

impl<'a, W: Ord + Copy> Iterator for EdgeHeap<'a, W> {
    type Item = &'a Edge<W>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, W: Ord + Copy> ExactSizeIterator for EdgeHeap<'a, W> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(u: usize, v: usize, weight: i32) -> Edge<i32> {
        Edge { u, v, weight }
    }

    #[test]
    fn test_empty() {
        let edges: Vec<Edge<i32>> = vec![];
        let mut heap = EdgeHeap::new(&edges);
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.next(), None);
    }

    #[test]
    fn test_drains_in_weight_order() {
        let edges = vec![
            edge(1, 2, 7),
            edge(2, 3, 3),
            edge(3, 4, 9),
            edge(4, 1, -2),
            edge(1, 3, 3),
            edge(2, 4, 0),
        ];
        let heap = EdgeHeap::new(&edges);
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.peek(), Some(&edges[3]));

        let weights: Vec<i32> = heap.map(|e| e.weight).collect();
        assert_eq!(weights, vec![-2, 0, 3, 3, 7, 9]);
    }

    #[test]
    fn test_remove_single() {
        let edges = vec![edge(1, 2, 4)];
        let mut heap = EdgeHeap::new(&edges);
        assert_eq!(heap.remove(), &edges[0]);
        assert!(heap.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty edge heap")]
    fn test_remove_from_empty_panics() {
        let edges: Vec<Edge<i32>> = vec![];
        let mut heap = EdgeHeap::new(&edges);
        heap.remove();
    }

    #[test]
    fn test_matches_sorted_order_on_larger_input() {
        let edges: Vec<Edge<i32>> = (0..200)
            .map(|i| edge(1, 2, (i * 37 % 101) - 50))
            .collect();
        let mut expected: Vec<i32> = edges.iter().map(|e| e.weight).collect();
        expected.sort();

        let drained: Vec<i32> = EdgeHeap::new(&edges).map(|e| e.weight).collect();
        assert_eq!(drained, expected);
    }
}
