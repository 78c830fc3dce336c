//! # Helpgen: Help-Text Lookup Table Generator
//!
//! A build-time code generator that scans a source tree for `help-*.txt`
//! files written in a restricted INI dialect and emits a C source file
//! containing static lookup tables plus one accessor function:
//!
//! - **Discovery**: recursive walk with excluded directory names pruned
//!   before descent
//! - **Parsing**: sections-only INI dialect, comments and blank lines
//!   ignored, content lines accumulated per section
//! - **Emission**: deterministic C tables with injective string escaping
//! - **Writing**: byte-compare before write, so unchanged output never
//!   triggers downstream rebuilds
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use helpgen::{HelpGenerator, HelpgenConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = HelpGenerator::new(HelpgenConfig::default());
//!     let outcome = generator.generate("./src".as_ref(), "./help_content.c".as_ref())?;
//!
//!     println!("{} files, {} sections", outcome.file_count, outcome.section_count);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// Core pipeline modules
pub mod core {
    //! Core configuration, data model, and pipeline stages.

    pub mod config;
    pub mod corpus;
    pub mod errors;
    pub mod pipeline;
}

// Code emission and output writing
pub mod io {
    //! Code emission and idempotent output writing.

    pub mod emit;
    pub mod writer;
}

// Re-export primary types for convenience
pub use crate::core::config::{DiscoveryConfig, HelpgenConfig, OutputConfig};
pub use crate::core::corpus::ParsedCorpus;
pub use crate::core::errors::{HelpgenError, Result, ResultExt};
pub use crate::core::pipeline::{GenerateOutcome, HelpGenerator};
pub use crate::io::writer::WriteOutcome;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
