use anyhow::Result;
use clap::Parser;
use lexpace_cli::commands::Commands;

/// Part-of-speech display categories and punctuation merging for RSVP readers
#[derive(Debug, Parser)]
#[command(name = "lexpace", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
