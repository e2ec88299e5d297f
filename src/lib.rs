pub mod cs;

pub use cs::{collections, error, graph};
pub use error::{GraphError, Result};
