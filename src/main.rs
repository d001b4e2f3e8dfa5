mod cli;

use clap::Parser;

use crate::cli::{Cli, Command, commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Library info+ on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("graph_theory", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    match cli.command {
        Command::Info { path } => commands::info(&path),
        Command::Traverse {
            path,
            start,
            method,
            sorted,
        } => commands::traverse(&path, &start, method, sorted),
        Command::ShortestPath {
            path,
            start,
            target,
            method,
        } => commands::shortest_path(&path, &start, target.as_deref(), method),
        Command::Generate {
            vertices,
            probability,
            directed,
            max_cost,
            self_loops,
            seed,
            output,
        } => {
            let config = graph_theory::random::RandomGraphConfig {
                vertices,
                edge_probability: probability,
                max_cost,
                self_loops,
            };
            commands::generate(&config, directed, seed, output.as_deref())
        }
        Command::Matrix { path, adjacency } => commands::matrix(&path, adjacency),
        Command::Complement { path, output } => commands::complement(&path, output.as_deref()),
    }
}
