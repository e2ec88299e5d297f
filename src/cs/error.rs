use thiserror::Error;

use crate::graph::Vertex;

/// Errors raised by the graph containers and the tree algorithms.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex identifier outside `1..=vertex_count`.
    #[error("vertex {vertex} is out of range 1..={vertex_count}")]
    InvalidVertex { vertex: Vertex, vertex_count: usize },

    #[error("vertex {0} is already in the heap")]
    DuplicateInsert(Vertex),

    #[error("vertex {0} is not in the heap")]
    NotInHeap(Vertex),

    #[error("new priority of vertex {0} is larger than its current priority")]
    PriorityIncreased(Vertex),

    /// `union` was handed a vertex that is not the root of its set.
    #[error("vertex {0} is not a set representative")]
    NotRepresentative(Vertex),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GraphError::InvalidInput(msg.into())
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
