//! Helpgen CLI - Help-Text Lookup Table Generator
//!
//! This binary wraps the helpgen library with a command-line interface:
//! generating the C artifact, scanning a tree without writing, and
//! managing the optional YAML configuration.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute command
    match cli.command {
        Commands::Generate(args) => {
            cli::generate_command(args)?;
        }
        Commands::Scan(args) => {
            cli::scan_command(args)?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config()?;
        }
        Commands::InitConfig(args) => {
            cli::init_config(args)?;
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args)?;
        }
    }

    Ok(())
}
