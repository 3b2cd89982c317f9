//! Catalog domain types shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of title in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentType {
    /// A feature film, spelled "Movie" in the source table.
    Movie,
    /// A series, spelled "TV Show" in the source table.
    TvShow,
    /// Any other value found in the `type` column.
    Other(String),
}

impl ContentType {
    /// Parses the raw `type` cell. Matching is exact, like the source data.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Movie" => Self::Movie,
            "TV Show" => Self::TvShow,
            other => Self::Other(other.to_string()),
        }
    }

    /// Label as it appears in the source table.
    pub fn label(&self) -> &str {
        match self {
            Self::Movie => "Movie",
            Self::TvShow => "TV Show",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the content catalog.
///
/// Optional fields are `None` when the cell was empty. Multi-valued fields
/// keep their raw comma-delimited text; each analysis splits them itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Title of the movie or show.
    pub title: String,
    /// Movie, TV show, or an unrecognised type.
    pub kind: ContentType,
    /// Free-text date the title was added, e.g. "September 9, 2021".
    pub date_added: Option<String>,
    /// Comma-delimited production countries.
    pub country: Option<String>,
    /// Audience rating code such as "TV-MA".
    pub rating: Option<String>,
    /// Comma-delimited genre listing.
    pub listed_in: Option<String>,
    /// Comma-delimited cast members.
    pub cast: Option<String>,
}

/// The six charts, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// Titles added per year, movies vs shows.
    ContentTrend,
    /// Top producing countries.
    CountryRanking,
    /// Audience rating buckets.
    RatingDistribution,
    /// Top genres per year.
    GenreEvolution,
    /// Most frequent cast members.
    Collaborators,
    /// Titles per year and type.
    FreshnessHeatmap,
}

impl GraphKind {
    /// Every graph in the order the pipeline renders them.
    pub const ALL: [Self; 6] = [
        Self::ContentTrend,
        Self::CountryRanking,
        Self::RatingDistribution,
        Self::GenreEvolution,
        Self::Collaborators,
        Self::FreshnessHeatmap,
    ];

    /// Stable snake_case identifier, used in file names and config keys.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ContentTrend => "content_trend",
            Self::CountryRanking => "country_ranking",
            Self::RatingDistribution => "rating_distribution",
            Self::GenreEvolution => "genre_evolution",
            Self::Collaborators => "collaborators",
            Self::FreshnessHeatmap => "freshness_heatmap",
        }
    }

    /// One-based position in the pipeline.
    pub fn position(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).map_or(0, |i| i + 1)
    }

    /// Output file name, e.g. `01_content_trend.png`.
    pub fn file_name(self) -> String {
        format!("{:02}_{}.png", self.position(), self.key())
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
