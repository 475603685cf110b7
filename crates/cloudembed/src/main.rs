//! cloudembed CLI - SoundCloud embeds for forum bbcode.
//!
//! Provides commands for:
//! - `render`: Turn SoundCloud links into embed HTML
//! - `buttons`: Add the SoundCloud button to an editor toolbar definition
//! - `codes`: List the registered bbcode tags

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ButtonsArgs, CodesArgs, RenderArgs};
use output::Output;

/// cloudembed - SoundCloud embed tags for forum bbcode.
#[derive(Parser)]
#[command(name = "cloudembed", version, about)]
struct Cli {
    /// Enable verbose output (show info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render tag content into embed HTML.
    Render(RenderArgs),
    /// Insert the SoundCloud button into a toolbar definition (JSON).
    Buttons(ButtonsArgs),
    /// List registered bbcode tags.
    Codes(CodesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Buttons(args) => args.execute(),
        Commands::Codes(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
