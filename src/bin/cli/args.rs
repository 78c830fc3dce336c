//! CLI Argument Structures
//!
//! All CLI argument definitions and command structures used by the
//! helpgen binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Help-Text Lookup Table Generator
#[derive(Parser)]
#[command(name = "helpgen")]
#[command(version = VERSION)]
#[command(about = "Generate C lookup tables from INI-style help text files")]
#[command(long_about = "
Scan a source tree for help text files, parse their sections, and emit a C
source file with static lookup tables plus one accessor function.

Common Usage:

  # Generate the C artifact from a source tree
  helpgen generate --root ./src --out ./generated/help_content.c

  # See what would be generated without writing anything
  helpgen scan --root ./src

  # Write a configuration file with the defaults
  helpgen init-config

The output file is rewritten only when its content actually changes, so
repeated invocations never trigger spurious downstream rebuilds.
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (per-file discovery and parse progress)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the C lookup table source file
    Generate(GenerateArgs),

    /// Discover and parse help files without writing output
    Scan(ScanArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a helpgen configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// Discovery options shared by `generate` and `scan`
#[derive(Args)]
pub struct DiscoveryArgs {
    /// Root directory to search for help text files
    #[arg(long, value_name = "DIR")]
    pub root: PathBuf,

    /// Path to a helpgen configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the help file name prefix (default: help-)
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Override the help file extension (default: .txt)
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Directory name to skip during traversal (repeatable; replaces the
    /// configured list when given)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,
}

/// Arguments for the `generate` command
#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub discovery: DiscoveryArgs,

    /// Output C file
    #[arg(long, value_name = "FILE")]
    pub out: PathBuf,

    /// Override the generated lookup function name
    #[arg(long, value_name = "NAME")]
    pub lookup_function: Option<String>,
}

/// Arguments for the `scan` command
#[derive(Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub discovery: DiscoveryArgs,

    /// Emit the scan summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init-config` command
#[derive(Args)]
pub struct InitConfigArgs {
    /// Where to write the configuration file
    #[arg(long, value_name = "FILE", default_value = "helpgen.yml")]
    pub output: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `validate-config` command
#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Configuration file to validate
    #[arg(value_name = "FILE")]
    pub config: PathBuf,
}
