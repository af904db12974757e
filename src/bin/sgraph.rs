//! CLI entry point for the `sgraph` debugging tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use stratagraph::cli::commands;
use stratagraph::ErrorKind;

#[derive(Parser)]
#[command(
    name = "sgraph",
    about = "Stratagraph CLI: inspect edge-list graphs and search paths"
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

#[derive(Subcommand)]
enum Commands {
    /// Display vertex and edge counts
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Print the adjacency listing
    Dump {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Show the first edge connecting two vertices
    Between {
        /// Path to the edge-list file
        file: PathBuf,
        /// First vertex label
        a: String,
        /// Second vertex label
        b: String,
    },
    /// Find a fewest-hops path between two vertices
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex label
        from: String,
        /// Target vertex label
        to: String,
        /// Only traverse edges with at least this weight
        #[arg(long)]
        min_weight: Option<f64>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Dump { file } => commands::cmd_dump(&file, json),
        Commands::Between { file, a, b } => commands::cmd_between(&file, &a, &b, json),
        Commands::Path {
            file,
            from,
            to,
            min_weight,
        } => commands::cmd_path(&file, &from, &to, min_weight, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match e.kind() {
            ErrorKind::Io => 1,
            ErrorKind::Parse => 2,
            ErrorKind::NoPathFound => 3,
            ErrorKind::NotFound => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
