//! specter command-line interface.

mod display;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use specter_core::config::SpecterConfig;
use specter_core::discovery::TestExplorer;
use specter_core::walker::{EventSink, RunWalker};
use specter_core::workspace;

#[derive(Parser)]
#[command(name = "specter", version, about = "Test explorer backend for RSpec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover examples and print the test tree
    Discover {
        /// Workspace directory (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a discovered selection as run events
    Run {
        /// Workspace directory (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Node id to run (repeatable)
        #[arg(long = "id", value_name = "ID", required = true)]
        ids: Vec<String>,

        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Discover { dir, json } => discover(dir, json).await,
        Commands::Run { dir, ids, json } => run(dir, ids, json).await,
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn discover(dir: Option<PathBuf>, json: bool) -> Result<()> {
    let workdir = workspace::resolve(dir.as_deref())?;
    debug!(workspace = %workdir.display(), "resolved workspace");
    let config = SpecterConfig::load(&workdir)?;
    let explorer = TestExplorer::new(config);
    let discovery = explorer.discover(Some(&workdir)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&discovery.tree)?);
    } else {
        print!("{}", display::render_tree(&discovery.tree));
        println!();
        println!("{}", display::render_summary(&discovery));
    }
    Ok(())
}

async fn run(dir: Option<PathBuf>, ids: Vec<String>, json: bool) -> Result<()> {
    let workdir = workspace::resolve(dir.as_deref())?;
    debug!(workspace = %workdir.display(), "resolved workspace");
    let config = SpecterConfig::load(&workdir)?;
    let explorer = TestExplorer::new(config);
    let discovery = explorer.discover(Some(&workdir)).await?;

    let sink: EventSink = if json {
        Box::new(|event| {
            let line = serde_json::to_string(&event).expect("event serializes");
            println!("{line}");
        })
    } else {
        Box::new(|event| println!("{}", display::event_line(&event)))
    };

    let walker = RunWalker::new(sink);
    walker.run(&discovery.tree, &ids).await;
    Ok(())
}
