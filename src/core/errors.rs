//! Error types for the helpgen library.
//!
//! Structured error types that preserve context and enable proper error
//! propagation through the generator pipeline. An input file that cannot
//! be opened is fatal and aborts the run before any output is written.

use std::io;

use thiserror::Error;

/// Main result type for helpgen operations.
pub type Result<T> = std::result::Result<T, HelpgenError>;

/// Comprehensive error type for all helpgen operations.
#[derive(Error, Debug)]
pub enum HelpgenError {
    /// I/O related errors (file operations, directory traversal)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Help file parsing errors
    #[error("Parse error: {message}")]
    Parse {
        /// Error description
        message: String,
        /// File path where the error occurred
        file_path: Option<String>,
        /// Line number (if available)
        line: Option<usize>,
    },

    /// Code emission errors
    #[error("Emit error: {message}")]
    Emit {
        /// Error description
        message: String,
        /// Generated symbol involved in the error
        symbol: Option<String>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
        /// Additional context
        context: Option<String>,
    },
}

impl HelpgenError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            file_path: None,
            line: None,
        }
    }

    /// Create a new parse error with file context
    pub fn parse_in_file(
        message: impl Into<String>,
        file_path: impl Into<String>,
        line: Option<usize>,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            file_path: Some(file_path.into()),
            line,
        }
    }

    /// Create a new emit error
    pub fn emit(message: impl Into<String>) -> Self {
        Self::Emit {
            message: message.into(),
            symbol: None,
        }
    }

    /// Create a new emit error naming the generated symbol
    pub fn emit_symbol(message: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::Emit {
            message: message.into(),
            symbol: Some(symbol.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: None,
        }
    }

    /// Add context to an existing error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        if let Self::Internal { context: ctx, .. } = &mut self {
            *ctx = Some(context.into());
        }
        self
    }
}

// Implement From traits for common error types
impl From<io::Error> for HelpgenError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_yaml::Error> for HelpgenError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for HelpgenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<HelpgenError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = HelpgenError::config("Invalid configuration");
        assert!(matches!(err, HelpgenError::Config { .. }));

        let err = HelpgenError::parse("Unterminated section header");
        assert!(matches!(err, HelpgenError::Parse { .. }));
    }

    #[test]
    fn test_io_error_creation() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let err = HelpgenError::io("Failed to open help file", io_err);

        if let HelpgenError::Io { message, source } = &err {
            assert_eq!(message, "Failed to open help file");
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_parse_in_file() {
        let err = HelpgenError::parse_in_file("Stray content", "help-mpi.txt", Some(3));

        if let HelpgenError::Parse {
            message,
            file_path,
            line,
        } = err
        {
            assert_eq!(message, "Stray content");
            assert_eq!(file_path, Some("help-mpi.txt".to_string()));
            assert_eq!(line, Some(3));
        } else {
            panic!("Expected Parse error");
        }
    }

    #[test]
    fn test_emit_symbol_error() {
        let err = HelpgenError::emit_symbol("Symbol collision", "ini_entries_help_a_txt");

        if let HelpgenError::Emit { message, symbol } = err {
            assert_eq!(message, "Symbol collision");
            assert_eq!(symbol, Some("ini_entries_help_a_txt".to_string()));
        } else {
            panic!("Expected Emit error");
        }
    }

    #[test]
    fn test_error_with_context() {
        let err = HelpgenError::internal("Something went wrong").with_context("During emission");

        if let HelpgenError::Internal { context, .. } = err {
            assert_eq!(context, Some("During emission".to_string()));
        } else {
            panic!("Expected Internal error");
        }
    }

    #[test]
    fn test_result_extension() {
        let result: std::result::Result<i32, io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "File not found"));

        let helpgen_result = result.context("Failed to read help file");
        assert!(helpgen_result.is_err());
        assert!(matches!(
            helpgen_result.unwrap_err(),
            HelpgenError::Io { .. }
        ));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<i32>("invalid: yaml: content").unwrap_err();
        let helpgen_err: HelpgenError = yaml_err.into();

        assert!(matches!(helpgen_err, HelpgenError::Serialization { .. }));
    }

    #[test]
    fn test_error_display_formatting() {
        let err = HelpgenError::parse_in_file("Bad header", "help-x.txt", Some(7));
        let display = format!("{}", err);
        assert!(display.contains("Parse error"));
        assert!(display.contains("Bad header"));
    }
}
