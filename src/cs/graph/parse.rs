//! Line-oriented graph text format.
//!
//! ```text
//! 4 5        <- vertex count, edge count
//! 1 2 10     <- u v weight, one edge per line
//! 1 3 6
//! ...
//! ```
//!
//! Fields are separated by any amount of whitespace and blank lines are skipped.
//! Anything after the last declared edge is ignored.

use log::debug;
use num_traits::PrimInt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Parses a graph from its text form.
///
/// # Errors
/// * `Parse` for a missing header, malformed fields, or too few edge lines
/// * `InvalidVertex` for an edge endpoint outside `1..=V`
pub fn parse_graph<W>(text: &str) -> Result<Graph<W>>
where
    W: PrimInt + FromStr,
{
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| GraphError::parse(1, "missing `V E` header"))?;
    let fields = split_fields(header_no, header, 2)?;
    let vertex_count: usize = parse_field(header_no, fields[0], "vertex count")?;
    let edge_count: usize = parse_field(header_no, fields[1], "edge count")?;

    let mut graph =
        Graph::try_new(vertex_count).map_err(|e| GraphError::parse(header_no, e.to_string()))?;
    let mut last_line = header_no;
    for found in 0..edge_count {
        let (line_no, line) = lines.next().ok_or_else(|| {
            GraphError::parse(
                last_line + 1,
                format!("expected {} edges, found {}", edge_count, found),
            )
        })?;
        last_line = line_no;

        let fields = split_fields(line_no, line, 3)?;
        let u = parse_field(line_no, fields[0], "vertex")?;
        let v = parse_field(line_no, fields[1], "vertex")?;
        let weight: W = parse_field(line_no, fields[2], "weight")?;
        graph.add_edge(u, v, weight)?;
    }

    debug!(
        "parsed graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads and parses a graph file.
pub fn load_graph<W, P>(path: P) -> Result<Graph<W>>
where
    W: PrimInt + FromStr,
    P: AsRef<Path>,
{
    let text = fs::read_to_string(path.as_ref())?;
    debug!("loading graph from {}", path.as_ref().display());
    parse_graph(&text)
}

fn split_fields(line_no: usize, line: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != expected {
        return Err(GraphError::parse(
            line_no,
            format!("expected {} fields, found {}", expected, fields.len()),
        ));
    }
    Ok(fields)
}

fn parse_field<T: FromStr>(line_no: usize, token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| GraphError::parse(line_no, format!("invalid {} `{}`", what, token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use std::io::Write;

    const SAMPLE: &str = "4 5\n1 2 10\n1  3 6\n\n1 4 5\n2 4 15\n3 4   4\n";

    #[test]
    fn test_parse_sample() {
        let graph: Graph<i32> = parse_graph(SAMPLE).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.edges()[1], Edge::new(1, 3, 6));
        assert_eq!(graph.neighbors(4).unwrap(), &[(1, 5), (2, 15), (3, 4)]);
    }

    #[test]
    fn test_trailing_lines_ignored() {
        let graph: Graph<i64> = parse_graph("2 1\n1 2 -3\nnot an edge\n").unwrap();
        assert_eq!(graph.edges(), &[Edge::new(1, 2, -3)]);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            parse_graph::<i32>("  \n\n"),
            Err(GraphError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_malformed_fields() {
        assert!(matches!(
            parse_graph::<i32>("3\n"),
            Err(GraphError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_graph::<i32>("3 1\n1 2\n"),
            Err(GraphError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_graph::<i32>("3 1\n1 x 4\n"),
            Err(GraphError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_graph::<u32>("3 1\n1 2 -4\n"),
            Err(GraphError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_oversized_vertex_count() {
        assert!(matches!(
            parse_graph::<i32>("18446744073709551615 0\n"),
            Err(GraphError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_graph::<i32>("\n18446744073709551614 0\n"),
            Err(GraphError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_too_few_edges() {
        let err = parse_graph::<i32>("3 3\n1 2 1\n\n2 3 1\n").unwrap_err();
        match err {
            GraphError::Parse { line, message } => {
                assert_eq!(line, 5);
                assert_eq!(message, "expected 3 edges, found 2");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_vertex() {
        assert!(matches!(
            parse_graph::<i32>("2 1\n1 3 1\n"),
            Err(GraphError::InvalidVertex { vertex: 3, .. })
        ));
    }

    #[test]
    fn test_load_graph_from_file() {
        let path = std::env::temp_dir().join(format!("graphtrees-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            file.write_all(SAMPLE.as_bytes()).unwrap();
        }
        let graph: Graph<i32> = load_graph(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_graph::<i32, _>("/definitely/not/here.txt");
        assert!(matches!(result, Err(GraphError::Io(_))));
    }
}
