//! Console display helpers for the helpgen CLI.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use helpgen::io::emit::sanitize_identifier;
use helpgen::{HelpgenConfig, ParsedCorpus};

/// Row type for the scan result table.
#[derive(Tabled)]
pub struct ScanRow {
    /// Help file base name
    pub file: String,
    /// Number of sections parsed from the file
    pub sections: usize,
    /// Generated array symbol for the file
    pub symbol: String,
}

/// Build scan table rows from a parsed corpus.
pub fn scan_rows(corpus: &ParsedCorpus) -> Vec<ScanRow> {
    corpus
        .files()
        .map(|(file, sections)| ScanRow {
            file: file.to_string(),
            sections: sections.len(),
            symbol: format!("ini_entries_{}", sanitize_identifier(file)),
        })
        .collect()
}

/// Print the scan result as a table plus a summary line.
pub fn display_scan_table(corpus: &ParsedCorpus) {
    if corpus.is_empty() {
        println!("{}", "No help files found.".yellow());
        return;
    }

    let mut table = Table::new(scan_rows(corpus));
    table.with(TableStyle::rounded());
    println!("{}", table);
    println!();
    println!(
        "{} {} files, {} sections",
        "📄 Scanned:".bright_blue().bold(),
        corpus.file_count(),
        corpus.section_count()
    );
}

/// Print a short summary of the effective configuration.
pub fn display_config_summary(config: &HelpgenConfig) {
    /// Row used when printing configuration settings.
    #[derive(Tabled)]
    struct SettingRow {
        setting: String,
        value: String,
    }

    let rows = vec![
        SettingRow {
            setting: "File prefix".to_string(),
            value: config.discovery.prefix.clone(),
        },
        SettingRow {
            setting: "File extension".to_string(),
            value: config.discovery.extension.clone(),
        },
        SettingRow {
            setting: "Excluded directories".to_string(),
            value: config.discovery.exclude_dirs.join(", "),
        },
        SettingRow {
            setting: "Lookup function".to_string(),
            value: config.output.lookup_function.clone(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
}
