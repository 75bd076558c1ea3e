//! Exhibit CLI - example site engine.
//!
//! Provides commands for:
//! - `menu`: Print the navigation menu
//! - `route`: Resolve a requested path to its section
//! - `gallery`: Print the demo gallery
//! - `page`: Print the full view of a requested path

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GalleryArgs, GlobalArgs, MenuArgs, PageArgs, RouteArgs};
use output::Output;

/// Exhibit - example site engine.
#[derive(Parser)]
#[command(name = "exhibit", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the navigation menu as JSON.
    Menu(MenuArgs),
    /// Resolve a requested path to its record and section.
    Route(RouteArgs),
    /// Print the demo gallery as JSON.
    Gallery(GalleryArgs),
    /// Print the full page view of a requested path as JSON.
    Page(PageArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Menu(args) => args.execute(&cli.global),
        Commands::Route(args) => args.execute(&cli.global),
        Commands::Gallery(args) => args.execute(&cli.global),
        Commands::Page(args) => args.execute(&cli.global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
