//! Loads the catalog export into an immutable in-memory table.

use csv::{ReaderBuilder, StringRecord, Trim};
use reelgraph_common::{ContentRecord, ContentType, ReelGraphError, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Columns every analysis relies on. A missing one aborts the run.
pub const REQUIRED_COLUMNS: [&str; 6] = ["type", "date_added", "country", "rating", "listed_in", "cast"];

/// Column holding the title; optional because no analysis reads it.
pub const TITLE_COLUMN: &str = "title";

/// Positions of the used columns in the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    title: Option<usize>,
    kind: usize,
    date_added: usize,
    country: usize,
    rating: usize,
    listed_in: usize,
    cast: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| find(name).ok_or_else(|| ReelGraphError::missing_column(name));

        Ok(Self {
            title: find(TITLE_COLUMN),
            kind: require("type")?,
            date_added: require("date_added")?,
            country: require("country")?,
            rating: require("rating")?,
            listed_in: require("listed_in")?,
            cast: require("cast")?,
        })
    }

    fn record(&self, row: &StringRecord) -> ContentRecord {
        let cell = |idx: usize| {
            row.get(idx)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        ContentRecord {
            title: self.title.and_then(cell).unwrap_or_default(),
            kind: ContentType::parse(row.get(self.kind).unwrap_or_default()),
            date_added: cell(self.date_added),
            country: cell(self.country),
            rating: cell(self.rating),
            listed_in: cell(self.listed_in),
            cast: cell(self.cast),
        }
    }
}

/// The loaded catalog. Read-only once built; analyses borrow its rows.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ContentRecord>,
}

impl Catalog {
    /// Wraps already-built rows.
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }

    /// Reads a delimited file with a header row.
    pub fn from_path(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading catalog");

        let file = std::fs::File::open(path).map_err(|e| {
            ReelGraphError::with_source(format!("cannot open catalog {}", path.display()), e)
        })?;
        let catalog = Self::from_reader(file, delimiter)?;

        info!(rows = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Reads delimited text with a header row from any reader.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?;
        if headers.is_empty() {
            return Err(ReelGraphError::dataset("catalog has no header row"));
        }
        let columns = ColumnIndex::from_headers(headers)?;
        debug!(?columns, "resolved catalog columns");

        let records = reader
            .records()
            .map(|row| row.map(|row| columns.record(&row)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    /// All rows, in file order.
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<ContentRecord>> for Catalog {
    fn from(records: Vec<ContentRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,A doc
s2,TV Show,Blood & Water,,\"Ama Qamata, Khosi Ngema\",South Africa,\"September 24, 2021\",2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas\",A show
s3,TV Show,Ganglands,Julien Leclercq,Sami Bouajila,,\" September 24, 2021\",2021,TV-MA,1 Season,Crime TV Shows,Heist
";

    #[test]
    fn test_loads_rows_and_blank_cells() {
        let catalog = Catalog::from_reader(SAMPLE.as_bytes(), b',').unwrap();
        assert_eq!(catalog.len(), 3);

        let first = &catalog.records()[0];
        assert_eq!(first.title, "Dick Johnson Is Dead");
        assert_eq!(first.kind, ContentType::Movie);
        assert!(first.cast.is_none());
        assert_eq!(first.date_added.as_deref(), Some("September 25, 2021"));

        let second = &catalog.records()[1];
        assert_eq!(second.kind, ContentType::TvShow);
        assert_eq!(second.cast.as_deref(), Some("Ama Qamata, Khosi Ngema"));

        let third = &catalog.records()[2];
        assert!(third.country.is_none());
        assert_eq!(third.date_added.as_deref(), Some("September 24, 2021"));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let input = "type,date_added,country,rating,cast\nMovie,\"May 1, 2020\",India,R,Someone\n";
        let error = Catalog::from_reader(input.as_bytes(), b',').unwrap_err();

        assert!(error.is_fatal_input());
        assert!(error.to_string().contains("listed_in"));
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let error = Catalog::from_reader("".as_bytes(), b',').unwrap_err();

        assert!(error.is_fatal_input());
        assert!(error.to_string().contains("no header row"));
    }

    #[test]
    fn test_title_column_optional() {
        let input = "type;date_added;country;rating;listed_in;cast\nMovie;2020-05-01;India;R;Dramas;\n";
        let catalog = Catalog::from_reader(input.as_bytes(), b';').unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].title, "");
        assert_eq!(catalog.records()[0].listed_in.as_deref(), Some("Dramas"));
    }

    #[test]
    fn test_short_rows_load_as_missing() {
        let input = "type,date_added,country,rating,listed_in,cast\nTV Show,\"July 1, 2019\"\n";
        let catalog = Catalog::from_reader(input.as_bytes(), b',').unwrap();

        let record = &catalog.records()[0];
        assert_eq!(record.kind, ContentType::TvShow);
        assert!(record.country.is_none());
        assert!(record.cast.is_none());
    }
}
