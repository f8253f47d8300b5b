//! Shiritori command-line entry point

use clap::Parser;
use shiritori_cli::commands::Commands;

/// Find the longest chain of words where each word starts with the letter
/// the previous one ended with
#[derive(Debug, Parser)]
#[command(name = "shiritori", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
