use clap::{Parser, ValueEnum};
use log::{debug, error, info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

use graphtrees::graph::format::{edge_label, vertex_label};
use graphtrees::graph::tree::ParentTree;
use graphtrees::graph::{dijkstra, kruskal, parse, prim, traversal, Graph, Vertex};
use graphtrees::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    All,
    Traverse,
    Prim,
    Dijkstra,
    Kruskal,
}

#[derive(Parser)]
#[command(name = "graphtrees", version, about = "Spanning trees and shortest paths of a weighted graph")]
struct CliOptions {
    /// Graph file: a `V E` header line followed by E lines of `u v weight`.
    graph: PathBuf,

    /// Vertex the traversals, Prim and Dijkstra start from.
    #[arg(short, long, default_value_t = 1)]
    source: Vertex,

    #[arg(short, long, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,

    #[arg(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    log_level: LevelFilter,
}

fn main() {
    let options = CliOptions::parse();
    if let Err(e) = initialise_logging(options.log_level) {
        eprintln!("could not initialise logging: {}", e);
    }

    std::process::exit(match run(&options) {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) -> std::result::Result<(), log::SetLoggerError> {
    TermLogger::init(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
}

fn run(options: &CliOptions) -> Result<()> {
    let graph: Graph<i64> = parse::load_graph(&options.graph)?;
    info!(
        "Loaded {} with {} vertices and {} edges",
        options.graph.display(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let wants = |algorithm: Algorithm| options.algorithm == Algorithm::All || options.algorithm == algorithm;

    if wants(Algorithm::Traverse) {
        show_adjacency(&graph)?;
        let depth = traversal::depth_first(&graph, options.source)?;
        println!("\nDepth-first traversal:\n{}", join_labels(&depth));
        let breadth = traversal::breadth_first(&graph, options.source)?;
        println!("\nBreadth-first traversal:\n{}", join_labels(&breadth));
    }

    if wants(Algorithm::Prim) {
        let (weight, tree) = prim::minimum_spanning_tree(&graph, options.source)?;
        println!("\nPrim's MST from {}:", vertex_label(options.source));
        show_tree(&tree, "edge weight");
        println!("Weight of MST = {}", weight);
        warn_unreached(&tree, "Prim");
    }

    if wants(Algorithm::Dijkstra) {
        let tree = dijkstra::shortest_path_tree(&graph, options.source)?;
        if graph.has_negative_weights() {
            warn!("Graph has negative edge weights, shortest paths may be wrong");
        }
        println!("\nShortest path tree from {}:", vertex_label(options.source));
        show_tree(&tree, "distance");
        warn_unreached(&tree, "Dijkstra");
    }

    if wants(Algorithm::Kruskal) {
        let forest = kruskal::minimum_spanning_forest(&graph)?;
        println!("\nKruskal's MST edges:");
        for edge in forest.edges() {
            println!("  {}", edge_label(edge));
        }
        println!("Weight of MST = {}", forest.total_weight());
        for (i, component) in forest.components().iter().enumerate() {
            debug!("Kruskal: set {}: {}", i + 1, join_labels(component));
        }
        if !forest.is_spanning() {
            warn!(
                "Kruskal: graph is disconnected, result is a forest of {} trees",
                forest.component_count()
            );
        }
    }

    Ok(())
}

fn show_adjacency(graph: &Graph<i64>) -> Result<()> {
    println!("Adjacency lists:");
    for v in graph.vertices() {
        let entries: Vec<String> = graph
            .neighbors(v)?
            .iter()
            .map(|&(u, w)| format!("{}({})", vertex_label(u), w))
            .collect();
        println!("  {} -> {}", vertex_label(v), entries.join(" "));
    }
    Ok(())
}

fn show_tree(tree: &ParentTree<i64>, distance_name: &str) {
    for (parent, child) in tree.edges() {
        if let Some(distance) = tree.distance(child) {
            println!(
                "  {} -> {}, {}: {}",
                vertex_label(child),
                vertex_label(parent),
                distance_name,
                distance
            );
        }
    }
}

fn warn_unreached(tree: &ParentTree<i64>, algorithm: &str) {
    let unreached = tree.unreached();
    if !unreached.is_empty() {
        warn!(
            "{}: vertices not reachable from {}: {}",
            algorithm,
            vertex_label(tree.source()),
            join_labels(&unreached)
        );
    }
}

fn join_labels(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(|&v| vertex_label(v))
        .collect::<Vec<_>>()
        .join(" ")
}
