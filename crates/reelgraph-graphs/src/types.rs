//! Rendering style shared by all charts.

use crate::palette::parse_color;
use plotters::style::RGBColor;
use reelgraph_config::Config;

/// Margin configuration in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginConfig {
    /// Space around the chart.
    pub outer: u32,
    /// Height reserved for x-axis labels.
    pub x_label_area: u32,
    /// Width reserved for y-axis labels.
    pub y_label_area: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            outer: 20,
            x_label_area: 60,
            y_label_area: 80,
        }
    }
}

/// Resolved styling, with colors already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStyle {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Font family for all text.
    pub font_family: String,
    /// Title size in points.
    pub title_font_size: u32,
    /// Axis caption and label size in points.
    pub label_font_size: u32,
    /// Whether grid lines are drawn.
    pub enable_grid: bool,
    /// Canvas background.
    pub background: RGBColor,
    /// Movie series color.
    pub movie: RGBColor,
    /// TV show series color.
    pub tv_show: RGBColor,
    /// Outline around bars.
    pub bar_outline: RGBColor,
    /// Chart margins.
    pub margins: MarginConfig,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl GraphStyle {
    /// Builds the style from validated configuration.
    pub fn from_config(config: &Config) -> Self {
        let styling = &config.graphs.styling;
        Self {
            width: config.output.width,
            height: config.output.height,
            font_family: styling.font_family.clone(),
            title_font_size: styling.title_font_size,
            label_font_size: styling.label_font_size,
            enable_grid: styling.enable_grid,
            background: parse_color(&styling.colors.background),
            movie: parse_color(&styling.colors.movie),
            tv_show: parse_color(&styling.colors.tv_show),
            bar_outline: parse_color(&styling.colors.bar_outline),
            margins: MarginConfig::default(),
        }
    }

    /// Font used for titles.
    pub fn title_font(&self) -> (&str, u32) {
        (self.font_family.as_str(), self.title_font_size)
    }

    /// Font used for axis captions and labels.
    pub fn label_font(&self) -> (&str, u32) {
        (self.font_family.as_str(), self.label_font_size)
    }

    /// Font for small in-chart annotations.
    pub fn annotation_font(&self) -> (&str, u32) {
        (
            self.font_family.as_str(),
            self.label_font_size.saturating_sub(4).max(8),
        )
    }
}
