//! CLI entry point for the `graphwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use graph_walk::cli::{commands, GraphSource};
use graph_walk::{GraphError, TraversalOrder};

#[derive(Parser)]
#[command(
    name = "graphwalk",
    about = "graphwalk — build an adjacency-list graph and walk it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Graph input shared by every subcommand.
#[derive(Args)]
struct SourceArgs {
    /// JSON edge-list file
    #[arg(long)]
    file: Option<PathBuf>,
    /// Inline edge: A-B (undirected), A>B (directed), optional :weight suffix
    #[arg(long = "edge")]
    edges: Vec<String>,
    /// Treat every inline A-B edge as directed
    #[arg(long)]
    directed: bool,
}

impl From<SourceArgs> for GraphSource {
    fn from(args: SourceArgs) -> Self {
        Self {
            file: args.file,
            edges: args.edges,
            directed: args.directed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency list
    Show {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Breadth-first traversal from a start vertex
    Bfs {
        /// Start vertex
        start: String,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Depth-first traversal from a start vertex
    Dfs {
        /// Start vertex
        start: String,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Weighted shortest distances from a start vertex
    Shortest {
        /// Start vertex
        start: String,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Summary statistics about the graph
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Show { source } => commands::cmd_show(&source.into(), json),
        Commands::Bfs { start, source } => {
            commands::cmd_traverse(&source.into(), &start, TraversalOrder::BreadthFirst, json)
        }
        Commands::Dfs { start, source } => {
            commands::cmd_traverse(&source.into(), &start, TraversalOrder::DepthFirst, json)
        }
        Commands::Shortest { start, source } => {
            commands::cmd_shortest(&source.into(), &start, json)
        }
        Commands::Stats { source } => commands::cmd_stats(&source.into(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::InvalidEdge(_) => 2,
            GraphError::VertexNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
