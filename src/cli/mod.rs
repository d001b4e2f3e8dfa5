//! Command-line front end over snapshot files.

pub mod commands;
mod label;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use graph_theory::algorithms::{ShortestPathMethod, TraversalMethod};

pub use self::label::CliLabel;

/// Inspect, traverse and search graphs stored as JSON snapshots
#[derive(Debug, Parser)]
#[command(name = "graph-theory", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarise a graph: kind, counts, degrees and components
    Info {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// List the vertices reachable from a start vertex in visiting order
    Traverse {
        #[arg(value_name = "FILE")]
        path: PathBuf,

        #[arg(short, long)]
        start: String,

        /// bfs, dfs-iterative or dfs (recursive)
        #[arg(short, long, default_value = "dfs")]
        method: TraversalMethod,

        /// Visit neighbours in ascending label order instead of insertion order
        #[arg(long)]
        sorted: bool,
    },

    /// Cheapest paths from a start vertex
    ShortestPath {
        #[arg(value_name = "FILE")]
        path: PathBuf,

        #[arg(short, long)]
        start: String,

        /// Report a single target instead of every vertex
        #[arg(short, long)]
        target: Option<String>,

        /// dijkstra, bellman-ford or auto
        #[arg(short, long, default_value = "auto")]
        method: ShortestPathMethod,
    },

    /// Generate a random G(n, p) graph snapshot
    Generate {
        #[arg(short = 'n', long, default_value_t = 10)]
        vertices: usize,

        #[arg(short, long, default_value_t = 0.3)]
        probability: f64,

        #[arg(short, long)]
        directed: bool,

        /// Costs are drawn from 1..=MAX_COST
        #[arg(long, default_value_t = 1)]
        max_cost: u32,

        #[arg(long)]
        self_loops: bool,

        #[arg(long)]
        seed: Option<u64>,

        /// Output JSON file path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the cost (or 0/1 adjacency) matrix in vertex order
    Matrix {
        #[arg(value_name = "FILE")]
        path: PathBuf,

        #[arg(short, long)]
        adjacency: bool,
    },

    /// Write the complement of an undirected graph
    Complement {
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Output JSON file path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
