pub mod collections;
pub mod error;
pub mod graph;

// Re-export all modules
pub use collections::*;
pub use graph::*;
