mod commands;
mod data_args;
mod disk_cache;
mod logging;

use clap::Parser;
use commands::Commands;

/// tagprep: prepare POS-tagged corpora for sequence models.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
