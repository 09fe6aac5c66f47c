//! Marquee CLI - Command-line interface
//!
//! Provides command-line access to catalog search and discovery.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Movie catalog search and discovery")]
struct Cli {
    /// Use canned demo data instead of the live catalog
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    commands::handle_command(cli.command, cli.demo).await?;

    Ok(())
}
