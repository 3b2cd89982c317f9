//! Test utilities and shared fixtures for the reelgraph workspace.
//!
//! Enabled with the `testing` feature so integration tests in other crates
//! can build catalog rows without repeating boilerplate.

use crate::types::{ContentRecord, ContentType};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Fluent builder for catalog rows.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: ContentRecord,
}

impl RecordBuilder {
    /// A movie with every optional field empty.
    pub fn movie(title: &str) -> Self {
        Self::of_kind(title, ContentType::Movie)
    }

    /// A TV show with every optional field empty.
    pub fn show(title: &str) -> Self {
        Self::of_kind(title, ContentType::TvShow)
    }

    /// A row of an arbitrary kind.
    pub fn of_kind(title: &str, kind: ContentType) -> Self {
        Self {
            record: ContentRecord {
                title: title.to_string(),
                kind,
                date_added: None,
                country: None,
                rating: None,
                listed_in: None,
                cast: None,
            },
        }
    }

    /// Sets the free-text date added.
    pub fn added(mut self, date: &str) -> Self {
        self.record.date_added = Some(date.to_string());
        self
    }

    /// Sets the country listing.
    pub fn country(mut self, country: &str) -> Self {
        self.record.country = Some(country.to_string());
        self
    }

    /// Sets the rating code.
    pub fn rating(mut self, rating: &str) -> Self {
        self.record.rating = Some(rating.to_string());
        self
    }

    /// Sets the genre listing.
    pub fn genres(mut self, genres: &str) -> Self {
        self.record.listed_in = Some(genres.to_string());
        self
    }

    /// Sets the cast listing.
    pub fn cast(mut self, cast: &str) -> Self {
        self.record.cast = Some(cast.to_string());
        self
    }

    /// Finishes the row.
    pub fn build(self) -> ContentRecord {
        self.record
    }
}

/// Sample catalog rows covering every cleaning rule.
pub mod catalog_fixtures {
    use super::RecordBuilder;
    use crate::types::ContentRecord;

    /// Header line matching the upstream export.
    pub const CSV_HEADER: &str =
        "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description";

    /// The two-row end-to-end example: both movies added in 2021.
    pub fn two_movie_rows() -> Vec<ContentRecord> {
        vec![
            RecordBuilder::movie("First")
                .added("September 9, 2021")
                .country("United States, India")
                .build(),
            RecordBuilder::movie("Second")
                .added("September 9, 2021")
                .country("United States")
                .build(),
        ]
    }

    /// A small mixed catalog with malformed values sprinkled in.
    pub fn mixed_catalog() -> Vec<ContentRecord> {
        vec![
            RecordBuilder::movie("Dick Johnson Is Dead")
                .added("September 25, 2021")
                .country("United States")
                .rating("PG-13")
                .genres("Documentaries")
                .build(),
            RecordBuilder::show("Blood & Water")
                .added("September 24, 2021")
                .country("South Africa")
                .rating("TV-MA")
                .genres("International TV Shows, TV Dramas, TV Mysteries")
                .cast("Ama Qamata, Khosi Ngema, Gail Mabalane")
                .build(),
            RecordBuilder::show("Ganglands")
                .added("September 24, 2021")
                .rating("TV-MA")
                .genres("Crime TV Shows, International TV Shows, TV Action & Adventure")
                .cast("Sami Bouajila, Tracy Gotoas")
                .build(),
            RecordBuilder::movie("Louis C.K. 2017")
                .added("April 4, 2017")
                .country("United States")
                .rating("74 min")
                .genres("Movies")
                .cast("Louis C.K.")
                .build(),
            RecordBuilder::movie("Sankofa")
                .added("September 24, 2021")
                .country("United States, Ghana, Burkina Faso, United Kingdom, Germany, Ethiopia")
                .rating("TV-MA")
                .genres("Dramas, Independent Movies, International Movies")
                .cast("Kofi Ghanaba, Oyafunmike Ogunlano")
                .build(),
            RecordBuilder::show("Untitled Upload")
                .added("unknown")
                .rating("NR")
                .genres("Kids' TV")
                .build(),
            RecordBuilder::movie("Bad Date")
                .added(" 2019-03-01 ")
                .rating("G")
                .genres("Children & Family Movies, Comedies")
                .build(),
        ]
    }
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write CSV text into a fresh temporary file and return its handle.
#[cfg(feature = "tempfile")]
pub fn write_temp_csv(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temporary CSV file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary CSV file");
    file.flush().expect("Failed to flush temporary CSV file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = RecordBuilder::show("Kingdom")
            .added("March 13, 2020")
            .country("South Korea")
            .rating("TV-MA")
            .build();

        assert_eq!(record.kind, ContentType::TvShow);
        assert_eq!(record.date_added.as_deref(), Some("March 13, 2020"));
        assert!(record.cast.is_none());
    }

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(catalog_fixtures::two_movie_rows().len(), 2);
        assert!(catalog_fixtures::CSV_HEADER.contains("listed_in"));
        assert_approx_eq(0.1 + 0.2, 0.3, 1e-9);
    }
}
