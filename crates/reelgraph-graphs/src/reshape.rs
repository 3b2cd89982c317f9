//! Split-trim-expand, counting, top-K selection, and pivoting.
//!
//! These are the building blocks every analysis is assembled from. They never
//! touch the shared rows: exploded rows borrow the record and a slice of its
//! multi-valued field.

use reelgraph_common::ContentRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Comma-delimited columns that can be exploded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiValueField {
    /// The `country` column.
    Country,
    /// The `listed_in` column.
    Genres,
    /// The `cast` column.
    Cast,
}

impl MultiValueField {
    /// Source column name.
    pub const fn column(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Genres => "listed_in",
            Self::Cast => "cast",
        }
    }

    /// Raw cell text for this field, if present.
    pub fn value(self, record: &ContentRecord) -> Option<&str> {
        match self {
            Self::Country => record.country.as_deref(),
            Self::Genres => record.listed_in.as_deref(),
            Self::Cast => record.cast.as_deref(),
        }
    }
}

/// One element of an exploded multi-valued field, next to the row it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplodedRow<'a> {
    /// The untouched source row.
    pub record: &'a ContentRecord,
    /// One trimmed element of the field.
    pub value: &'a str,
}

/// Splits comma-delimited text into trimmed, non-empty elements.
pub fn split_multi_value(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|value| !value.is_empty())
}

/// Expands each row into one row per element of `field`.
///
/// Rows where the field is missing produce nothing, as do empty elements left
/// by stray commas.
pub fn explode<'a, I>(records: I, field: MultiValueField) -> Vec<ExplodedRow<'a>>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    records
        .into_iter()
        .flat_map(|record| {
            field
                .value(record)
                .into_iter()
                .flat_map(split_multi_value)
                .map(move |value| ExplodedRow { record, value })
        })
        .collect()
}

/// Counts occurrences of each key.
pub fn count_values<K, I>(values: I) -> BTreeMap<K, u32>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    values.into_iter().fold(BTreeMap::new(), |mut counts, key| {
        *counts.entry(key).or_insert(0) += 1;
        counts
    })
}

/// The `k` most frequent keys, count descending, ties broken by key ascending.
///
/// The tie-break makes the result independent of input order.
pub fn top_k<K: Ord + Clone>(counts: &BTreeMap<K, u32>, k: usize) -> Vec<(K, u32)> {
    let mut ranked: Vec<(K, u32)> = counts.iter().map(|(key, n)| (key.clone(), *n)).collect();
    // Stable sort over key-ordered input keeps ties in key order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(k);
    ranked
}

/// Dense count matrix keyed by two categorical dimensions.
///
/// Rows and columns are sorted ascending on construction. Every cell exists;
/// combinations never observed hold 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix<R, C> {
    rows: Vec<R>,
    columns: Vec<C>,
    cells: Vec<Vec<u32>>,
}

impl<R: Ord + Clone, C: Ord + Clone> CountMatrix<R, C> {
    /// Builds the matrix by counting `(row, column)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, C)>,
    {
        let counts = count_values(pairs);
        let rows: Vec<R> = counts
            .keys()
            .map(|(r, _)| r.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let columns: Vec<C> = counts
            .keys()
            .map(|(_, c)| c.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut cells = vec![vec![0; columns.len()]; rows.len()];
        for ((row, column), count) in counts {
            if let (Ok(i), Ok(j)) = (rows.binary_search(&row), columns.binary_search(&column)) {
                cells[i][j] = count;
            }
        }

        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Row keys.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Column keys, in their current order.
    pub fn columns(&self) -> &[C] {
        &self.columns
    }

    /// Cell counts of one row, aligned with [`Self::columns`].
    pub fn row_values(&self, row: usize) -> &[u32] {
        &self.cells[row]
    }

    /// Cell counts of one column, aligned with [`Self::rows`].
    pub fn column_values(&self, column: usize) -> Vec<u32> {
        self.cells.iter().map(|row| row[column]).collect()
    }

    /// Count for a pair of keys; 0 when either key is unknown.
    pub fn get(&self, row: &R, column: &C) -> u32 {
        let i = self.rows.iter().position(|r| r == row);
        let j = self.columns.iter().position(|c| c == column);
        match (i, j) {
            (Some(i), Some(j)) => self.cells[i][j],
            _ => 0,
        }
    }

    /// Removes a column. Returns whether it existed.
    pub fn drop_column(&mut self, column: &C) -> bool {
        let Some(j) = self.columns.iter().position(|c| c == column) else {
            return false;
        };
        self.columns.remove(j);
        for row in &mut self.cells {
            row.remove(j);
        }
        true
    }

    /// Sum of each column.
    pub fn column_totals(&self) -> Vec<u32> {
        (0..self.columns.len())
            .map(|j| self.cells.iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Sum of each row.
    pub fn row_totals(&self) -> Vec<u32> {
        self.cells.iter().map(|row| row.iter().sum()).collect()
    }

    /// Reorders columns by descending total. Ties keep their current order.
    pub fn sort_columns_by_total_desc(&mut self) {
        let totals = self.column_totals();
        let mut order: Vec<usize> = (0..self.columns.len()).collect();
        order.sort_by(|a, b| totals[*b].cmp(&totals[*a]));

        self.columns = order.iter().map(|&j| self.columns[j].clone()).collect();
        for row in &mut self.cells {
            *row = order.iter().map(|&j| row[j]).collect();
        }
    }

    /// Largest single cell.
    pub fn max_cell(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Whether there are no cells at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelgraph_common::test_utils::RecordBuilder;

    #[test]
    fn test_split_multi_value_trims_and_skips_empty() {
        let parts: Vec<&str> = split_multi_value(" United States,India , ,France,").collect();
        assert_eq!(parts, vec!["United States", "India", "France"]);
    }

    #[test]
    fn test_explode_duplicates_row_per_value() {
        let records = vec![
            RecordBuilder::movie("A").country("USA, India").build(),
            RecordBuilder::movie("B").build(),
            RecordBuilder::show("C").country("Japan").build(),
        ];

        let rows = explode(&records, MultiValueField::Country);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].value, "USA");
        assert_eq!(rows[1].value, "India");
        assert_eq!(rows[1].record.title, "A");
        assert_eq!(rows[2].record.title, "C");
    }

    #[test]
    fn test_top_k_breaks_ties_by_key() {
        let counts = count_values(["b", "a", "c", "c", "b", "a", "d"]);
        let top = top_k(&counts, 3);
        assert_eq!(top, vec![("a", 2), ("b", 2), ("c", 2)]);
    }

    #[test]
    fn test_count_matrix_fills_zeros() {
        let matrix = CountMatrix::from_pairs(vec![
            (2020, "Dramas"),
            (2020, "Dramas"),
            (2021, "Comedies"),
        ]);

        assert_eq!(matrix.rows(), &[2020, 2021]);
        assert_eq!(matrix.columns(), &["Comedies", "Dramas"]);
        assert_eq!(matrix.get(&2020, &"Dramas"), 2);
        assert_eq!(matrix.get(&2020, &"Comedies"), 0);
        assert_eq!(matrix.get(&1999, &"Dramas"), 0);
        assert_eq!(matrix.row_totals(), vec![2, 1]);
        assert_eq!(matrix.max_cell(), 2);
    }

    #[test]
    fn test_count_matrix_drop_and_sort() {
        let mut matrix = CountMatrix::from_pairs(vec![
            (1, "x"),
            (1, "y"),
            (2, "y"),
            (2, "z"),
            (2, "z"),
            (2, "z"),
        ]);

        assert!(matrix.drop_column(&"x"));
        assert!(!matrix.drop_column(&"x"));
        matrix.sort_columns_by_total_desc();

        assert_eq!(matrix.columns(), &["z", "y"]);
        assert_eq!(matrix.row_values(0), &[0, 1]);
        assert_eq!(matrix.row_values(1), &[3, 1]);
        assert_eq!(matrix.column_values(0), vec![0, 3]);
    }
}
