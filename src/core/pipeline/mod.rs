//! Generator pipeline: discover → parse → render → write.
//!
//! The pipeline is a strict linear sequence with no shared mutable state
//! between stages; each stage consumes the previous stage's return value.
//! The whole run completes in one bounded pass proportional to input size.

pub mod discovery;
pub mod parser;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::config::HelpgenConfig;
use crate::core::corpus::ParsedCorpus;
use crate::core::errors::Result;
use crate::io::emit::{CEmitter, Emitter};
use crate::io::writer::{write_if_changed, WriteOutcome};

pub use discovery::discover_help_files;
pub use parser::parse_help_files;

/// Outcome of one full generator run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Number of help files in the corpus
    pub file_count: usize,
    /// Total number of sections across all files
    pub section_count: usize,
    /// Whether the output file was written or left untouched
    pub write_outcome: WriteOutcome,
    /// The output path
    pub output_path: PathBuf,
}

/// High-level entry point owning the pipeline configuration.
#[derive(Debug, Clone)]
pub struct HelpGenerator {
    config: HelpgenConfig,
}

impl HelpGenerator {
    /// Create a generator from a validated configuration.
    pub fn new(config: HelpgenConfig) -> Self {
        Self { config }
    }

    /// Access the generator's configuration.
    pub fn config(&self) -> &HelpgenConfig {
        &self.config
    }

    /// Run discovery and parsing only, without rendering or writing.
    pub fn scan(&self, root: &Path) -> Result<ParsedCorpus> {
        let files = discover_help_files(root, &self.config.discovery)?;
        parse_help_files(&files)
    }

    /// Run the full pipeline and write the generated C source to `out`.
    ///
    /// The output file is left untouched when the newly rendered bytes are
    /// identical to what is already on disk.
    pub fn generate(&self, root: &Path, out: &Path) -> Result<GenerateOutcome> {
        let corpus = self.scan(root)?;

        let emitter = CEmitter::new(&self.config.output);
        let rendered = emitter.emit(&corpus)?;

        let write_outcome = write_if_changed(out, rendered.as_bytes())?;
        match write_outcome {
            WriteOutcome::Written => {
                info!("Generated C code written to {}", out.display());
            }
            WriteOutcome::Unchanged => {
                info!(
                    "Help string content has not changed; not re-writing {}",
                    out.display()
                );
            }
        }

        Ok(GenerateOutcome {
            file_count: corpus.file_count(),
            section_count: corpus.section_count(),
            write_outcome,
            output_path: out.to_path_buf(),
        })
    }
}
