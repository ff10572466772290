//! CLI entry point for the `costgraph` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use costgraph::cli::commands;
use costgraph::graph::{Strategy, Traversal};
use costgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "costgraph",
    about = "Weighted directed graphs: traversal and shortest paths"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// The graph to operate on.
#[derive(Args)]
struct GraphArgs {
    /// Vertex as NAME or NAME=DATA (repeatable)
    #[arg(long = "vertex", short = 'v')]
    vertices: Vec<String>,

    /// Directed edge as FROM:TO:COST (repeatable)
    #[arg(long = "edge", short = 'e')]
    edges: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every vertex and its outgoing edges
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Depth-first traversal from a vertex
    Dfs {
        /// Starting vertex
        start: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Starting vertex
        start: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Cheapest path between two vertices
    Path {
        /// Starting vertex
        start: String,
        /// Target vertex
        end: String,
        /// Minimum selection: linear or heap
        #[arg(long, default_value = "linear")]
        strategy: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Distance and predecessor of every vertex from a start vertex
    Labels {
        /// Starting vertex
        start: String,
        /// Minimum selection: linear or heap
        #[arg(long, default_value = "linear")]
        strategy: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
}

fn parse_strategy(name: &str) -> Strategy {
    match Strategy::from_name(name) {
        Some(strategy) => strategy,
        None => {
            eprintln!("Invalid strategy: {}", name);
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Show { graph } => commands::build_graph(&graph.vertices, &graph.edges)
            .and_then(|g| commands::cmd_show(&g, json)),
        Commands::Dfs { start, graph } => commands::build_graph(&graph.vertices, &graph.edges)
            .and_then(|g| commands::cmd_traverse(&g, &start, Traversal::DepthFirst, json)),
        Commands::Bfs { start, graph } => commands::build_graph(&graph.vertices, &graph.edges)
            .and_then(|g| commands::cmd_traverse(&g, &start, Traversal::BreadthFirst, json)),
        Commands::Path {
            start,
            end,
            strategy,
            graph,
        } => {
            let strategy = parse_strategy(&strategy);
            commands::build_graph(&graph.vertices, &graph.edges)
                .and_then(|g| commands::cmd_path(&g, &start, &end, strategy, json))
        }
        Commands::Labels {
            start,
            strategy,
            graph,
        } => {
            let strategy = parse_strategy(&strategy);
            commands::build_graph(&graph.vertices, &graph.edges)
                .and_then(|g| commands::cmd_labels(&g, &start, strategy, json))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::DuplicateVertex(_) | GraphError::InvalidArgument(_) => 3,
            GraphError::UnknownVertex(_) | GraphError::UnknownEdge { .. } => 4,
        };
        process::exit(code);
    }
}
