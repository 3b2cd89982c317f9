//! # reelgraph graphs
//!
//! Loads the catalog export, reshapes it, and renders the six exploratory
//! charts.
//!
//! Every analysis works the same way: it borrows the shared rows, derives
//! its own aggregate (exploding comma-delimited fields, counting, picking
//! the top entries, pivoting), and implements [`ContentGraph`] to draw
//! itself. [`GraphManager`] runs the enabled analyses in a fixed order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod annotation;
pub mod axis;
pub mod catalog;
pub mod collaborators;
pub mod content_trend;
pub mod country_ranking;
pub mod dates;
pub mod freshness_heatmap;
pub mod genre_evolution;
pub mod manager;
pub mod palette;
pub mod rating;
pub mod rating_distribution;
pub mod reshape;
pub mod traits;
pub mod types;
pub mod wordcloud;

pub use catalog::{Catalog, REQUIRED_COLUMNS};
pub use collaborators::{CastCount, Collaborators};
pub use content_trend::{ContentTrend, YearCount};
pub use country_ranking::{CountryCount, CountryRanking};
pub use freshness_heatmap::FreshnessHeatmap;
pub use genre_evolution::GenreEvolution;
pub use manager::{GraphManager, RunSummary};
pub use rating::RatingBucket;
pub use rating_distribution::{BucketCount, RatingDistribution};
pub use reshape::{CountMatrix, MultiValueField};
pub use traits::ContentGraph;
pub use types::{GraphStyle, MarginConfig};
