use crate::error::{GraphError, Result};
use crate::graph::Vertex;

/// Binary min-heap over vertex identifiers `1..=capacity` with in-place decrease-key.
///
/// The heap owns the priority of every vertex, including vertices that are not
/// currently queued. Slot `0` of the heap array is never used, so a recorded
/// position of `0` means "not in the heap".
///
/// # Examples
/// ```
/// use graphtrees::collections::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::new(3, i64::MAX);
/// heap.insert(1, 5).unwrap();
/// heap.insert(2, 2).unwrap();
/// heap.insert(3, 8).unwrap();
/// heap.notify_decreased(3, 1).unwrap();
///
/// assert_eq!(heap.extract_min(), 3);
/// assert_eq!(heap.extract_min(), 2);
/// assert_eq!(heap.extract_min(), 1);
/// assert!(heap.is_empty());
/// ```
///
/// # Complexity
/// * `insert`, `extract_min`, `notify_decreased`: O(log V)
/// * `position`, `contains`, `priority`: O(1)
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P> {
    slots: Vec<Vertex>,
    positions: Vec<usize>,
    priority: Vec<P>,
    len: usize,
}

impl<P: Ord + Copy> IndexedMinHeap<P> {
    /// Creates an empty heap for vertices `1..=capacity`, every priority set to `initial`.
    pub fn new(capacity: usize, initial: P) -> Self {
        Self {
            slots: vec![0; capacity + 1],
            positions: vec![0; capacity + 1],
            priority: vec![initial; capacity + 1],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the heap slot holding `v`, or `0` if `v` is not queued.
    pub fn position(&self, v: Vertex) -> usize {
        self.positions.get(v).copied().unwrap_or(0)
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.position(v) != 0
    }

    /// Current priority of `v`, whether queued or not.
    pub fn priority(&self, v: Vertex) -> Result<P> {
        self.check_vertex(v)?;
        Ok(self.priority[v])
    }

    /// Vertex with the smallest priority, without removing it.
    pub fn peek_min(&self) -> Option<Vertex> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[1])
        }
    }

    /// Queues `v` with the given priority.
    ///
    /// # Errors
    /// * `InvalidVertex` if `v` is outside `1..=capacity`
    /// * `DuplicateInsert` if `v` is already queued
    pub fn insert(&mut self, v: Vertex, priority: P) -> Result<()> {
        self.check_vertex(v)?;
        if self.contains(v) {
            return Err(GraphError::DuplicateInsert(v));
        }

        self.priority[v] = priority;
        self.len += 1;
        self.slots[self.len] = v;
        self.positions[v] = self.len;
        self.sift_up(self.len);
        Ok(())
    }

    /// Removes and returns the vertex with the smallest priority.
    ///
    /// Ties are resolved by heap layout, not by insertion order.
    ///
    /// # Panics
    /// Panics if the heap is empty. Check [`is_empty`](Self::is_empty) first.
    pub fn extract_min(&mut self) -> Vertex {
        assert!(!self.is_empty(), "extract_min called on an empty heap");

        let min = self.slots[1];
        self.positions[min] = 0;

        let last = self.slots[self.len];
        self.slots[self.len] = 0;
        self.len -= 1;

        if self.len > 0 {
            self.slots[1] = last;
            self.positions[last] = 1;
            self.sift_down(1);
        }
        min
    }

    /// Lowers the priority of a queued vertex and restores heap order.
    ///
    /// # Errors
    /// * `InvalidVertex` if `v` is outside `1..=capacity`
    /// * `NotInHeap` if `v` is not queued
    /// * `PriorityIncreased` if `priority` is larger than the current one
    pub fn notify_decreased(&mut self, v: Vertex, priority: P) -> Result<()> {
        self.check_vertex(v)?;
        let pos = self.positions[v];
        if pos == 0 {
            return Err(GraphError::NotInHeap(v));
        }
        if priority > self.priority[v] {
            return Err(GraphError::PriorityIncreased(v));
        }

        self.priority[v] = priority;
        self.sift_up(pos);
        Ok(())
    }

    /// Hands back the priority array, indexed by vertex (slot `0` unused).
    pub fn into_priorities(self) -> Vec<P> {
        self.priority
    }

    fn check_vertex(&self, v: Vertex) -> Result<()> {
        if v == 0 || v > self.capacity() {
            return Err(GraphError::InvalidVertex {
                vertex: v,
                vertex_count: self.capacity(),
            });
        }
        Ok(())
    }

    fn sift_up(&mut self, mut k: usize) {
        let v = self.slots[k];
        while k > 1 && self.priority[v] < self.priority[self.slots[k / 2]] {
            self.slots[k] = self.slots[k / 2];
            self.positions[self.slots[k]] = k;
            k /= 2;
        }
        self.slots[k] = v;
        self.positions[v] = k;
    }

    fn sift_down(&mut self, mut k: usize) {
        let v = self.slots[k];
        let mut j = 2 * k;
        while j <= self.len {
            // Equal children: stay with the left one.
            if j < self.len && self.priority[self.slots[j + 1]] < self.priority[self.slots[j]] {
                j += 1;
            }
            if self.priority[v] <= self.priority[self.slots[j]] {
                break;
            }
            self.slots[k] = self.slots[j];
            self.positions[self.slots[k]] = k;
            k = j;
            j = 2 * k;
        }
        self.slots[k] = v;
        self.positions[v] = k;
    }
}
