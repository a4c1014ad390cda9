//! Benchmark suite configuration.
//!
//! Load suite settings from TOML or YAML files to control replication
//! counts, quantile levels, and report output without code changes.
//!
//! # Examples
//!
//! ```
//! use optbench::BenchmarkSuiteConfig;
//!
//! let config = BenchmarkSuiteConfig::from_toml_str(r#"
//!     name = "branin-suite"
//!     replications = 10
//!     seed = 42
//!     quantile_levels = [0.1, 0.5, 0.9]
//!     csv_output_path = "results.csv"
//! "#).unwrap();
//!
//! assert_eq!(config.replications(), 10);
//! assert_eq!(config.csv_output_path(), Some("results.csv"));
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use optbench::BenchmarkSuiteConfig;
//!
//! let config = BenchmarkSuiteConfig::load("suite.toml").unwrap_or_default();
//! assert_eq!(config.replications(), 3);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::result::DEFAULT_QUANTILE_LEVELS;

/// Suite configuration error
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn default_name() -> String {
    "benchmark".to_string()
}

fn default_replications() -> usize {
    3
}

fn default_quantile_levels() -> Vec<f64> {
    DEFAULT_QUANTILE_LEVELS.to_vec()
}

/// Settings for a full benchmark suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BenchmarkSuiteConfig {
    /// Suite name, used in reports.
    #[serde(default = "default_name")]
    name: String,

    /// Number of independent replications per (problem, method) pair.
    #[serde(default = "default_replications")]
    replications: usize,

    /// Base seed for deterministic engines.
    #[serde(default)]
    seed: u64,

    /// Quantile levels reported by aggregation.
    #[serde(default = "default_quantile_levels")]
    quantile_levels: Vec<f64>,

    /// Run replications in parallel.
    #[serde(default)]
    parallel: bool,

    /// Output path for CSV export.
    #[serde(default)]
    csv_output_path: Option<String>,

    /// Output path for the Markdown report.
    #[serde(default)]
    markdown_output_path: Option<String>,
}

impl BenchmarkSuiteConfig {
    /// Creates a configuration with defaults and the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, contains invalid TOML,
    /// or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigFileError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigFileError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigFileError> {
        if self.replications == 0 {
            return Err(ConfigFileError::Invalid(
                "replications must be at least 1".to_string(),
            ));
        }
        for &level in &self.quantile_levels {
            if !(0.0..=1.0).contains(&level) {
                return Err(ConfigFileError::Invalid(format!(
                    "quantile level {level} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Sets the replication count.
    pub fn with_replications(mut self, replications: usize) -> Self {
        self.replications = replications;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the quantile levels.
    pub fn with_quantile_levels(mut self, levels: Vec<f64>) -> Self {
        self.quantile_levels = levels;
        self
    }

    /// Sets the CSV output path.
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the Markdown output path.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Returns the suite name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the replication count.
    pub fn replications(&self) -> usize {
        self.replications
    }

    /// Returns the base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the quantile levels.
    pub fn quantile_levels(&self) -> &[f64] {
        &self.quantile_levels
    }

    /// Returns whether replications run in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }
}

impl Default for BenchmarkSuiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            replications: default_replications(),
            seed: 0,
            quantile_levels: default_quantile_levels(),
            parallel: false,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            name = "suite"
            replications = 20
            seed = 7
            parallel = true
            quantile_levels = [0.5]
        "#;

        let config = BenchmarkSuiteConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.name(), "suite");
        assert_eq!(config.replications(), 20);
        assert_eq!(config.seed(), 7);
        assert!(config.parallel());
        assert_eq!(config.quantile_levels(), &[0.5]);
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
            name: suite
            replications: 5
            markdown_output_path: report.md
        "#;

        let config = BenchmarkSuiteConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.replications(), 5);
        assert_eq!(config.markdown_output_path(), Some("report.md"));
    }

    #[test]
    fn test_defaults_apply_for_missing_fields() {
        let config = BenchmarkSuiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.name(), "benchmark");
        assert_eq!(config.replications(), 3);
        assert_eq!(config.quantile_levels(), &DEFAULT_QUANTILE_LEVELS);
        assert!(!config.parallel());
    }

    #[test]
    fn test_zero_replications_rejected() {
        let err = BenchmarkSuiteConfig::from_toml_str("replications = 0").unwrap_err();
        assert!(matches!(err, ConfigFileError::Invalid(_)));
    }

    #[test]
    fn test_out_of_range_quantile_rejected() {
        let err =
            BenchmarkSuiteConfig::from_toml_str("quantile_levels = [0.5, 1.5]").unwrap_err();
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_builder() {
        let config = BenchmarkSuiteConfig::new("suite")
            .with_replications(8)
            .with_seed(99)
            .with_csv_output("out.csv");

        assert_eq!(config.replications(), 8);
        assert_eq!(config.seed(), 99);
        assert_eq!(config.csv_output_path(), Some("out.csv"));
    }
}
