//! Configuration module

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Dataset configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Dataset-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct DataConfig {
    /// Directory of `<code>.json` / `<code>.toml` datasets (default: bundled data)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    /// Pretty print JSON output
    #[serde(default = "default_true")]
    pub pretty_json: bool,

    /// Include singleton entries by default
    #[serde(default)]
    pub include_singletons: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            include_singletons: false,
        }
    }
}

fn default_true() -> bool {
    true
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(config.data.directory.is_none());
        assert!(config.output.pretty_json);
        assert!(!config.output.include_singletons);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ninclude_singletons = true\n").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert!(config.output.include_singletons);
        assert!(config.output.pretty_json);
        assert!(config.data.directory.is_none());
    }

    #[test]
    fn test_full_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[data]
directory = "/srv/tokens"

[output]
pretty_json = false
include_singletons = false
"#
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data.directory, Some(PathBuf::from("/srv/tokens")));
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output\npretty_json = ").unwrap();

        match CliConfig::from_file(file.path()) {
            Err(CliError::ConfigError(_)) => (),
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }
}
