//! Bucketing CLI - splits labeled points into equal-size buckets.

use clap::{Parser, Subcommand};

mod commands;

use commands::{PlanCommand, RunCommand};

/// Bucketing CLI - splits labeled points into equal-size buckets.
///
/// Reads a request (elements, keys, cluster size) from a YAML or JSON file or
/// from stdin, groups nearby elements into buckets of near-equal size, and
/// writes the assignment as YAML or JSON.
#[derive(Parser)]
#[command(name = "bucketing")]
#[command(about = "Equal-size bucketing of labeled points")]
#[command(version)]
pub struct Cli {
    /// Input request file (YAML or JSON, "-" for stdin)
    #[arg(short = 'f', long = "file", global = true)]
    pub input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Output as JSON (default: YAML)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cluster the elements of a request into buckets
    Run(RunCommand),
    /// Print the bucket sizes for an element count
    Plan(PlanCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Run(cmd) => cmd.run(&cli),
        Commands::Plan(cmd) => cmd.run(&cli),
    }
}
