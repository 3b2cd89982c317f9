//! Configuration schema definitions.

use reelgraph_common::{GraphKind, LoggingConfig, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for reelgraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input table configuration.
    pub data: DataConfig,
    /// Where and how large charts are written.
    pub output: OutputConfig,
    /// Per-graph switches, limits, and styling.
    pub graphs: GraphsConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Input table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path of the delimited catalog export.
    pub path: PathBuf,
    /// Field delimiter, a single ASCII character.
    pub delimiter: char,
}

/// Chart output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the PNG files. Created when missing.
    pub directory: PathBuf,
    /// Chart width in pixels.
    pub width: u32,
    /// Chart height in pixels.
    pub height: u32,
}

/// Graph configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphsConfig {
    /// Enabled graphs configuration.
    pub enabled: EnabledGraphsConfig,
    /// Top-K cut-offs.
    pub limits: LimitsConfig,
    /// Styling configuration.
    pub styling: StylingConfig,
    /// Captions drawn on individual charts.
    pub annotations: AnnotationsConfig,
}

/// Enabled graphs configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnabledGraphsConfig {
    /// Titles added per year.
    pub content_trend: bool,
    /// Top producing countries.
    pub country_ranking: bool,
    /// Audience rating buckets.
    pub rating_distribution: bool,
    /// Top genres over the years.
    pub genre_evolution: bool,
    /// Cast word cloud.
    pub collaborators: bool,
    /// Year by type heatmap.
    pub freshness_heatmap: bool,
}

impl EnabledGraphsConfig {
    /// Whether the given graph should be rendered.
    pub const fn is_enabled(&self, kind: GraphKind) -> bool {
        match kind {
            GraphKind::ContentTrend => self.content_trend,
            GraphKind::CountryRanking => self.country_ranking,
            GraphKind::RatingDistribution => self.rating_distribution,
            GraphKind::GenreEvolution => self.genre_evolution,
            GraphKind::Collaborators => self.collaborators,
            GraphKind::FreshnessHeatmap => self.freshness_heatmap,
        }
    }

    /// Enabled graphs in pipeline order.
    pub fn enabled_kinds(&self) -> Vec<GraphKind> {
        GraphKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }
}

/// Top-K cut-offs applied by the ranking analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Countries shown in the ranking.
    pub top_countries: usize,
    /// Genres kept as their own layer; the rest fold into "Others".
    pub top_genres: usize,
    /// Cast members placed in the word cloud.
    pub top_cast: usize,
}

/// Insight captions. `null` or an empty string leaves the caption out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationsConfig {
    /// Boxed text inside the trend chart.
    pub content_trend: Option<String>,
    /// Footnote under the rating donut.
    pub rating_distribution: Option<String>,
}

impl AnnotationsConfig {
    fn non_blank(text: Option<&String>) -> Option<&str> {
        text.map(String::as_str).filter(|text| !text.trim().is_empty())
    }

    /// Caption for the trend chart, if any.
    pub fn trend_caption(&self) -> Option<&str> {
        Self::non_blank(self.content_trend.as_ref())
    }

    /// Caption for the rating chart, if any.
    pub fn rating_caption(&self) -> Option<&str> {
        Self::non_blank(self.rating_distribution.as_ref())
    }
}

/// Styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Font family for all text.
    pub font_family: String,
    /// Title font size in points.
    pub title_font_size: u32,
    /// Axis caption and label font size in points.
    pub label_font_size: u32,
    /// Whether to draw grid lines.
    pub enable_grid: bool,
    /// Color configuration.
    pub colors: ColorsConfig,
}

/// Color configuration, hex `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Movie series color.
    pub movie: String,
    /// TV show series color.
    pub tv_show: String,
    /// Canvas background color.
    pub background: String,
    /// Outline drawn around bars.
    pub bar_outline: String,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::validator::ConfigValidator::validate(self)
    }
}
