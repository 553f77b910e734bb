//! linkdigest CLI — newsletter link aggregation and categorization.
//!
//! Ingests a newsletter feed, classifies every linked page against a
//! keyword taxonomy, and publishes the result as CSV and (optionally)
//! a spreadsheet.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
