//! Runtime validation of loaded configuration.

use crate::schema::{ColorsConfig, Config};
use once_cell::sync::Lazy;
use regex::Regex;
use reelgraph_common::{ReelGraphError, Result};

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern"));

const MIN_DIMENSION: u32 = 200;
const MAX_DIMENSION: u32 = 8000;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first violation found.
    pub fn validate(config: &Config) -> Result<()> {
        Self::check(config).map_err(|violation| {
            ReelGraphError::config_with_source("Configuration validation failed", violation)
        })
    }

    fn check(config: &Config) -> Result<()> {
        if config.data.path.as_os_str().is_empty() {
            return Err(ReelGraphError::validation_field(
                "input path cannot be empty",
                "data.path",
            ));
        }
        if !config.data.delimiter.is_ascii() {
            return Err(ReelGraphError::validation_field(
                "delimiter must be a single ASCII character",
                "data.delimiter",
            ));
        }
        if config.output.directory.as_os_str().is_empty() {
            return Err(ReelGraphError::validation_field(
                "output directory cannot be empty",
                "output.directory",
            ));
        }
        validate_dimension(config.output.width, "output.width")?;
        validate_dimension(config.output.height, "output.height")?;

        let limits = &config.graphs.limits;
        for (value, field) in [
            (limits.top_countries, "graphs.limits.top_countries"),
            (limits.top_genres, "graphs.limits.top_genres"),
            (limits.top_cast, "graphs.limits.top_cast"),
        ] {
            if value == 0 {
                return Err(ReelGraphError::validation_field(
                    "limit must be at least 1",
                    field,
                ));
            }
        }

        let styling = &config.graphs.styling;
        if styling.font_family.trim().is_empty() {
            return Err(ReelGraphError::validation_field(
                "font family cannot be empty",
                "graphs.styling.font_family",
            ));
        }
        for (size, field) in [
            (styling.title_font_size, "graphs.styling.title_font_size"),
            (styling.label_font_size, "graphs.styling.label_font_size"),
        ] {
            if !(8..=72).contains(&size) {
                return Err(ReelGraphError::validation_field(
                    "font size must be between 8 and 72",
                    field,
                ));
            }
        }

        validate_colors(&styling.colors)
    }
}

fn validate_dimension(value: u32, field: &str) -> Result<()> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(ReelGraphError::validation_field(
            format!("must be between {MIN_DIMENSION} and {MAX_DIMENSION} pixels, got {value}"),
            field,
        ))
    }
}

fn validate_colors(colors: &ColorsConfig) -> Result<()> {
    for (value, field) in [
        (&colors.movie, "graphs.styling.colors.movie"),
        (&colors.tv_show, "graphs.styling.colors.tv_show"),
        (&colors.background, "graphs.styling.colors.background"),
        (&colors.bar_outline, "graphs.styling.colors.bar_outline"),
    ] {
        if !is_hex_color(value) {
            return Err(ReelGraphError::validation_field(
                format!("'{value}' is not a #RRGGBB color"),
                field,
            ));
        }
    }
    Ok(())
}

/// Whether the string is a `#RRGGBB` hex color.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_hex_color_regex() {
        assert!(is_hex_color("#FFFFFF"));
        assert!(is_hex_color("#0000cd"));
        assert!(!is_hex_color("FFFFFF"));
        assert!(!is_hex_color("#FFF"));
        assert!(!is_hex_color("#GGGGGG"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = Config::default();
        config.graphs.limits.top_genres = 0;

        let error = ConfigValidator::validate(&config).unwrap_err();
        assert!(error.to_string().contains("Configuration error"));
        let source = error.source().expect("violation attached as source");
        assert!(source.to_string().contains("limit must be at least 1"));
    }

    #[test]
    fn test_bad_color_rejected() {
        let mut config = Config::default();
        config.graphs.styling.colors.background = "white".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_dimension_bounds() {
        let mut config = Config::default();
        config.output.width = 50;
        assert!(ConfigValidator::validate(&config).is_err());

        config.output.width = 1200;
        config.output.height = 9000;
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
