//! Configuration types for the helpgen generator.
//!
//! The configuration has two sections: discovery (what counts as a help
//! file, which directories to skip) and output (the shape of the generated
//! artifact). Every field has a default so an empty YAML file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{HelpgenError, Result};

/// Main configuration for the helpgen pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HelpgenConfig {
    /// File discovery configuration
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Generated output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for locating help files under the search root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Base-name prefix a help file must carry
    #[serde(default = "DiscoveryConfig::default_prefix")]
    pub prefix: String,

    /// File extension a help file must carry (including the dot)
    #[serde(default = "DiscoveryConfig::default_extension")]
    pub extension: String,

    /// Directory names pruned from the walk before descent
    #[serde(default = "DiscoveryConfig::default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

/// Default implementation for [`DiscoveryConfig`].
impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            prefix: Self::default_prefix(),
            extension: Self::default_extension(),
            exclude_dirs: Self::default_exclude_dirs(),
        }
    }
}

/// Default value providers for [`DiscoveryConfig`].
impl DiscoveryConfig {
    /// Default help file prefix.
    fn default_prefix() -> String {
        "help-".to_string()
    }

    /// Default help file extension.
    fn default_extension() -> String {
        ".txt".to_string()
    }

    /// Default excluded directory names.
    fn default_exclude_dirs() -> Vec<String> {
        vec![".git".to_string(), "3rd-party".to_string()]
    }
}

/// Configuration for the generated C artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Name of the generated lookup function
    #[serde(default = "OutputConfig::default_lookup_function")]
    pub lookup_function: String,
}

/// Default implementation for [`OutputConfig`].
impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            lookup_function: Self::default_lookup_function(),
        }
    }
}

/// Default value providers for [`OutputConfig`].
impl OutputConfig {
    /// Default lookup function name.
    fn default_lookup_function() -> String {
        "help_get_content".to_string()
    }
}

/// Configuration construction and I/O methods for [`HelpgenConfig`].
impl HelpgenConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            HelpgenError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            HelpgenError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.discovery.prefix.is_empty() {
            return Err(HelpgenError::config_field(
                "help file prefix must not be empty",
                "discovery.prefix",
            ));
        }

        if !self.discovery.extension.starts_with('.') {
            return Err(HelpgenError::config_field(
                format!(
                    "extension must start with a dot, got '{}'",
                    self.discovery.extension
                ),
                "discovery.extension",
            ));
        }

        if !is_valid_c_identifier(&self.output.lookup_function) {
            return Err(HelpgenError::config_field(
                format!(
                    "lookup function name '{}' is not a valid C identifier",
                    self.output.lookup_function
                ),
                "output.lookup_function",
            ));
        }

        Ok(())
    }
}

/// Check whether a string is usable as a C identifier.
fn is_valid_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HelpgenConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.discovery.prefix, "help-");
        assert_eq!(config.discovery.extension, ".txt");
        assert_eq!(config.discovery.exclude_dirs, vec![".git", "3rd-party"]);
        assert_eq!(config.output.lookup_function, "help_get_content");
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        let config: HelpgenConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.discovery.prefix, "help-");
        assert_eq!(config.output.lookup_function, "help_get_content");
    }

    #[test]
    fn partial_yaml_overrides_one_section() {
        let config: HelpgenConfig = serde_yaml::from_str(
            r#"
discovery:
  prefix: "doc-"
  extension: ".ini"
"#,
        )
        .unwrap();
        assert_eq!(config.discovery.prefix, "doc-");
        assert_eq!(config.discovery.extension, ".ini");
        // Untouched sections keep their defaults
        assert_eq!(config.output.lookup_function, "help_get_content");
    }

    #[test]
    fn validate_rejects_empty_prefix() {
        let mut config = HelpgenConfig::default();
        config.discovery.prefix = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, HelpgenError::Config { .. }));
    }

    #[test]
    fn validate_rejects_extension_without_dot() {
        let mut config = HelpgenConfig::default();
        config.discovery.extension = "txt".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_function_name() {
        let mut config = HelpgenConfig::default();
        config.output.lookup_function = "1bad-name".to_string();
        assert!(config.validate().is_err());

        config.output.lookup_function = "_ok_name2".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn yaml_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("helpgen.yml");

        let mut config = HelpgenConfig::default();
        config.discovery.exclude_dirs.push("vendor".to_string());
        config.to_yaml_file(&path).unwrap();

        let loaded = HelpgenConfig::from_yaml_file(&path).unwrap();
        assert_eq!(loaded.discovery.exclude_dirs, config.discovery.exclude_dirs);
    }

    #[test]
    fn from_yaml_file_missing_path_is_io_error() {
        let err = HelpgenConfig::from_yaml_file("/nonexistent/helpgen.yml").unwrap_err();
        assert!(matches!(err, HelpgenError::Io { .. }));
    }
}
