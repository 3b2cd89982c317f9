//! Default values. Every default reproduces the reference analysis exactly.

use crate::schema::*;
use reelgraph_common::LoggingConfig;
use std::path::PathBuf;

/// Default location of the catalog export, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/netflix_data.csv";

/// Default chart output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "charts";

/// Default caption of the trend chart.
pub const DEFAULT_TREND_CAPTION: &str = "There was a very notable spike starting from the year 2015\n\
showing Netflix expansion however there was a dip notable from year 2019";

/// Default footnote of the rating chart.
pub const DEFAULT_RATING_CAPTION: &str = "Netflix generally contains content which is Mature(17+).\n\
There is also an interesting insight that Kids Content is slightly more than the content targeted to General Audience";

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            output: OutputConfig::default(),
            graphs: GraphsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
            delimiter: ',',
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            width: 1000,
            height: 800,
        }
    }
}

impl Default for GraphsConfig {
    fn default() -> Self {
        Self {
            enabled: EnabledGraphsConfig::default(),
            limits: LimitsConfig::default(),
            styling: StylingConfig::default(),
            annotations: AnnotationsConfig::default(),
        }
    }
}

impl Default for EnabledGraphsConfig {
    fn default() -> Self {
        Self {
            content_trend: true,
            country_ranking: true,
            rating_distribution: true,
            genre_evolution: true,
            collaborators: true,
            freshness_heatmap: true,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            top_countries: 10,
            top_genres: 7,
            top_cast: 50,
        }
    }
}

impl Default for AnnotationsConfig {
    fn default() -> Self {
        Self {
            content_trend: Some(DEFAULT_TREND_CAPTION.to_string()),
            rating_distribution: Some(DEFAULT_RATING_CAPTION.to_string()),
        }
    }
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            title_font_size: 24,
            label_font_size: 16,
            enable_grid: true,
            colors: ColorsConfig::default(),
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            movie: "#0000CD".to_string(),
            tv_show: "#DC143C".to_string(),
            background: "#FFFFFF".to_string(),
            bar_outline: "#1A1F16".to_string(),
        }
    }
}
