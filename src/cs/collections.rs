//! Priority queues and disjoint sets shared by the spanning and shortest path tree algorithms.

pub mod disjoint_set;
pub mod edge_heap;
pub mod indexed_min_heap;

pub use disjoint_set::DisjointSet;
pub use edge_heap::EdgeHeap;
pub use indexed_min_heap::IndexedMinHeap;
