//! Driver configuration.
//!
//! Loaded from a JSON file via `--config`; every field has a default, so
//! `{}` is a valid file. Command-line flags are applied on top.
//!
//! ```json
//! {
//!   "density": 7.93,
//!   "outputs": { "surface_area": false },
//!   "max_rows": 200,
//!   "format": "json"
//! }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use steel_core::{Density, OutputSelection, SectionError};
use thiserror::Error;

/// Default row cap for one batch
pub const DEFAULT_MAX_ROWS: usize = 5000;

/// Errors raised while building the driver configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {option}: {reason}")]
    InvalidOption { option: String, reason: String },

    #[error(transparent)]
    Section(#[from] SectionError),
}

impl ConfigError {
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

/// Report format written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `designation<TAB>value<TAB>...`, one row per line
    #[default]
    Tsv,
    /// A single JSON report
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::invalid_option(
                "--format",
                format!("expected 'tsv' or 'json', got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Settings for one batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Material density (t/m³)
    pub density: Density,
    /// Which quantities to report
    pub outputs: OutputSelection,
    /// Rows processed before the batch stops
    pub max_rows: usize,
    pub format: OutputFormat,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            density: Density::default(),
            outputs: OutputSelection::default(),
            max_rows: DEFAULT_MAX_ROWS,
            format: OutputFormat::default(),
        }
    }
}

impl DriverConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let config: DriverConfig =
            serde_json::from_str(text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text)
    }

    /// Override the density from a command-line value
    pub fn set_density(&mut self, value: f64) -> Result<(), ConfigError> {
        self.density = Density::new(value)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rows == 0 {
            return Err(ConfigError::invalid_option(
                "max_rows",
                "must be at least 1",
            ));
        }
        if self.outputs.count() == 0 {
            return Err(ConfigError::invalid_option(
                "outputs",
                "at least one quantity must be enabled",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<DriverConfig, ConfigError> {
        DriverConfig::from_json(Path::new("test.json"), text)
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = parse("{}").unwrap();
        assert_eq!(config, DriverConfig::default());
        assert_eq!(config.density.value(), 7.85);
        assert_eq!(config.max_rows, 5000);
        assert_eq!(config.format, OutputFormat::Tsv);
        assert_eq!(config.outputs.count(), 3);
    }

    #[test]
    fn test_partial_file() {
        let config = parse(
            r#"{"density": 7.93, "outputs": {"surface_area": false}, "format": "json"}"#,
        )
        .unwrap();
        assert_eq!(config.density.value(), 7.93);
        assert!(config.outputs.sectional_area);
        assert!(!config.outputs.surface_area);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.max_rows, DEFAULT_MAX_ROWS);
    }

    #[test]
    fn test_rejects_bad_density() {
        assert!(matches!(parse(r#"{"density": 0}"#), Err(ConfigError::Parse { .. })));
        assert!(matches!(parse(r#"{"density": -2.5}"#), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_rejects_zero_rows_and_no_outputs() {
        assert!(matches!(
            parse(r#"{"max_rows": 0}"#),
            Err(ConfigError::InvalidOption { .. })
        ));
        assert!(matches!(
            parse(
                r#"{"outputs": {"sectional_area": false, "theoretical_weight": false, "surface_area": false}}"#
            ),
            Err(ConfigError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_unknown_format() {
        assert!(matches!(parse(r#"{"format": "xml"}"#), Err(ConfigError::Parse { .. })));
        assert!("XML".parse::<OutputFormat>().is_err());
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_set_density() {
        let mut config = DriverConfig::default();
        config.set_density(7.93).unwrap();
        assert_eq!(config.density.value(), 7.93);

        let err = config.set_density(0.0).unwrap_err();
        assert!(matches!(err, ConfigError::Section(SectionError::InvalidDensity { .. })));
        assert_eq!(config.density.value(), 7.93);
    }

    #[test]
    fn test_missing_file() {
        let err = DriverConfig::load(Path::new("/nonexistent/steel.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
