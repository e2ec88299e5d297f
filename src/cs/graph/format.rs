use std::fmt::Display;

use crate::graph::{Edge, Vertex};

/// Display name of a vertex: `A`..`Z` for 1..=26, the number itself beyond that.
pub fn vertex_label(v: Vertex) -> String {
    match v {
        1..=26 => char::from(b'A' + (v - 1) as u8).to_string(),
        _ => v.to_string(),
    }
}

/// Renders an edge as `A--(w)--B`.
pub fn edge_label<W: Display>(edge: &Edge<W>) -> String {
    format!(
        "{}--({})--{}",
        vertex_label(edge.u),
        edge.weight,
        vertex_label(edge.v)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_label() {
        assert_eq!(vertex_label(1), "A");
        assert_eq!(vertex_label(26), "Z");
        assert_eq!(vertex_label(27), "27");
        assert_eq!(vertex_label(0), "0");
    }

    #[test]
    fn test_edge_label() {
        assert_eq!(edge_label(&Edge::new(1, 3, -7)), "A--(-7)--C");
    }
}
