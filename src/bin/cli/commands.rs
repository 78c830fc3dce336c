//! CLI Command Implementations
//!
//! Command bodies for the helpgen CLI: the generate/scan pipeline entry
//! points and the configuration management trio.

use owo_colors::OwoColorize;
use serde::Serialize;

use helpgen::{HelpGenerator, HelpgenConfig, WriteOutcome};

use crate::cli::args::{
    DiscoveryArgs, GenerateArgs, InitConfigArgs, ScanArgs, ValidateConfigArgs,
};
use crate::cli::output::{display_config_summary, display_scan_table};

/// Load the configuration file (if any) and layer CLI overrides on top.
fn resolve_config(
    discovery: &DiscoveryArgs,
    lookup_function: Option<&str>,
) -> anyhow::Result<HelpgenConfig> {
    let mut config = match &discovery.config {
        Some(path) => HelpgenConfig::from_yaml_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?,
        None => HelpgenConfig::default(),
    };

    if let Some(prefix) = &discovery.prefix {
        config.discovery.prefix = prefix.clone();
    }
    if let Some(extension) = &discovery.extension {
        config.discovery.extension = extension.clone();
    }
    if !discovery.exclude_dirs.is_empty() {
        config.discovery.exclude_dirs = discovery.exclude_dirs.clone();
    }
    if let Some(name) = lookup_function {
        config.output.lookup_function = name.to_string();
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;
    Ok(config)
}

/// Run the full pipeline and report the write outcome.
pub fn generate_command(args: GenerateArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.discovery, args.lookup_function.as_deref())?;
    let generator = HelpGenerator::new(config);

    let outcome = generator.generate(&args.discovery.root, &args.out)?;

    match outcome.write_outcome {
        WriteOutcome::Written => {
            println!(
                "{} {} ({} files, {} sections)",
                "✅ Generated:".bright_green().bold(),
                outcome.output_path.display().to_string().cyan(),
                outcome.file_count,
                outcome.section_count
            );
        }
        WriteOutcome::Unchanged => {
            println!(
                "{} {} is up to date; not re-writing",
                "📄 Output unchanged:".bright_blue().bold(),
                outcome.output_path.display().to_string().cyan()
            );
        }
    }

    Ok(())
}

/// JSON shape of the scan summary.
#[derive(Serialize)]
struct ScanSummary {
    root: String,
    file_count: usize,
    section_count: usize,
    files: Vec<ScanFileSummary>,
}

#[derive(Serialize)]
struct ScanFileSummary {
    file: String,
    sections: Vec<String>,
}

/// Discover and parse without writing anything.
pub fn scan_command(args: ScanArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.discovery, None)?;
    let generator = HelpGenerator::new(config);

    let corpus = generator.scan(&args.discovery.root)?;

    if args.json {
        let summary = ScanSummary {
            root: args.discovery.root.display().to_string(),
            file_count: corpus.file_count(),
            section_count: corpus.section_count(),
            files: corpus
                .files()
                .map(|(file, sections)| ScanFileSummary {
                    file: file.to_string(),
                    sections: sections.keys().cloned().collect(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        display_scan_table(&corpus);
    }

    Ok(())
}

/// Print default configuration in YAML format
pub fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default helpgen configuration".dimmed());
    println!(
        "{}",
        "# Save this to a file and customize as needed".dimmed()
    );
    println!(
        "{}",
        "# Usage: helpgen generate --config your-config.yml ...".dimmed()
    );
    println!();

    let config = HelpgenConfig::default();
    let yaml_output = serde_yaml::to_string(&config)?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    // Check if file exists and force not specified
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    let config = HelpgenConfig::default();
    config.to_yaml_file(&args.output)?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Edit the configuration file to customize discovery and output settings");
    println!(
        "   2. Generate with: {}",
        format!(
            "helpgen generate --config {} --root <dir> --out <file>",
            args.output.display()
        )
        .cyan()
    );

    Ok(())
}

/// Validate a helpgen configuration file
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let config = match HelpgenConfig::from_yaml_file(&args.config) {
        Ok(config) => {
            println!(
                "{}",
                "✅ Configuration file is valid!".bright_green().bold()
            );
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • Ensure the extension starts with a dot");
            println!("   • Ensure the lookup function name is a valid C identifier");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'helpgen print-default-config' to see the valid format".dimmed()
            );
            return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
        }
    };

    display_config_summary(&config);

    Ok(())
}
