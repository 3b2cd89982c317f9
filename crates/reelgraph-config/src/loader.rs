//! Configuration loading utilities

use crate::Config;
use reelgraph_common::{LogFormat, ReelGraphError, Result as ReelGraphResult};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "REELGRAPH_CONFIG_PATH";

/// Files looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["reelgraph.yaml", "reelgraph.yml", "reelgraph.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Name of the offending variable.
        var: String,
        /// Underlying parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for ReelGraphError {
    fn from(err: ConfigError) -> Self {
        ReelGraphError::config_with_source("Configuration loading failed", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration: explicit path from `REELGRAPH_CONFIG_PATH`, then
    /// the default file names, then built-in defaults. Environment overrides
    /// apply on top and the result is validated.
    pub fn load() -> ReelGraphResult<Config> {
        let mut config = match Self::discover(env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from)) {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration file");
                Self::parse_file(&path)?
            }
            None => {
                debug!("no configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a specific file, without
    /// environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ReelGraphResult<Config> {
        let config = Self::parse_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Picks the configuration file to read, if any.
    pub fn discover(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| {
            DEFAULT_CONFIG_FILES
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
        })
    }

    /// Parse a YAML or TOML file, chosen by extension (YAML otherwise).
    pub fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Ok(toml::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_with(config, |key| env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, so callers can supply a
    /// snapshot instead of the process environment.
    pub fn apply_overrides_with<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("REELGRAPH_DATA_PATH") {
            config.data.path = PathBuf::from(path);
        }

        if let Some(dir) = lookup("REELGRAPH_OUTPUT_DIR") {
            config.output.directory = PathBuf::from(dir);
        }

        if let Some(width) = lookup("REELGRAPH_GRAPH_WIDTH") {
            config.output.width = parse_var("REELGRAPH_GRAPH_WIDTH", &width)?;
        }

        if let Some(height) = lookup("REELGRAPH_GRAPH_HEIGHT") {
            config.output.height = parse_var("REELGRAPH_GRAPH_HEIGHT", &height)?;
        }

        if let Some(color) = lookup("REELGRAPH_BACKGROUND_COLOR") {
            config.graphs.styling.colors.background = color;
        }

        if let Some(level) = lookup("REELGRAPH_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("REELGRAPH_LOG_FORMAT") {
            config.logging.format = match format.to_ascii_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "compact" => LogFormat::Compact,
                "json" => LogFormat::Json,
                other => {
                    return Err(ConfigError::EnvParseError {
                        var: "REELGRAPH_LOG_FORMAT".to_string(),
                        source: format!("unknown log format '{other}'").into(),
                    })
                }
            };
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParseError {
        var: var.to_string(),
        source: Box::new(e),
    })
}
