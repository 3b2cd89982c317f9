//! Top genres added per year as a stacked area chart.

use crate::annotation::TextBox;
use crate::dates::year_added;
use crate::palette::{parse_color, GENRE_COLORS, GENRE_FACE};
use crate::reshape::{count_values, explode, top_k, CountMatrix, MultiValueField};
use crate::traits::{BitMapArea, ContentGraph};
use crate::types::GraphStyle;
use plotters::prelude::*;
use plotters::style::text_anchor::HPos;
use reelgraph_common::{ContentRecord, GraphKind, ReelGraphError, Result};
use std::collections::HashSet;
use tracing::debug;

/// Column that collects every genre outside the top selection.
pub const OTHERS: &str = "Others";

/// Per-year counts of the most frequent genres.
///
/// Rows are years ascending; columns are the kept genres ordered by overall
/// total, largest first. The catch-all "Others" column is never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreEvolution {
    matrix: CountMatrix<i32, String>,
    top_genres: Vec<(String, u32)>,
    limit: usize,
}

impl GenreEvolution {
    /// Explodes genres of titles with a 4-digit year added and pivots the
    /// `limit` most frequent ones by year.
    pub fn from_records(records: &[ContentRecord], limit: usize) -> Self {
        let dated: Vec<(i32, &str)> = explode(records, MultiValueField::Genres)
            .into_iter()
            .filter_map(|row| {
                year_added(row.record.date_added.as_deref()).map(|year| (year, row.value))
            })
            .collect();

        let genre_counts = count_values(dated.iter().map(|(_, genre)| *genre));
        let top_genres: Vec<(String, u32)> = top_k(&genre_counts, limit)
            .into_iter()
            .map(|(genre, count)| (genre.to_string(), count))
            .collect();
        let kept: HashSet<&str> = top_genres.iter().map(|(genre, _)| genre.as_str()).collect();

        let mut matrix = CountMatrix::from_pairs(dated.iter().map(|(year, genre)| {
            let column = if kept.contains(genre) { *genre } else { OTHERS };
            (*year, column.to_string())
        }));
        matrix.drop_column(&OTHERS.to_string());
        matrix.sort_columns_by_total_desc();

        debug!(
            genres = genre_counts.len(),
            years = matrix.rows().len(),
            "pivoted genre evolution"
        );
        Self {
            matrix,
            top_genres,
            limit,
        }
    }

    /// The year-by-genre counts.
    pub fn matrix(&self) -> &CountMatrix<i32, String> {
        &self.matrix
    }

    /// Selected genres with their overall counts, most frequent first.
    pub fn top_genres(&self) -> &[(String, u32)] {
        &self.top_genres
    }

    /// Footnote explaining why only some genres are shown.
    pub fn note(&self) -> String {
        format!(
            "Note : Since there was large collections of Genres, displayed only top {} Genres",
            self.limit
        )
    }
}

impl ContentGraph for GenreEvolution {
    fn kind(&self) -> GraphKind {
        GraphKind::GenreEvolution
    }

    fn title(&self) -> &'static str {
        "Netflix's Content Focus Over the Years: Top Genres"
    }

    fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    fn draw(&self, root: &BitMapArea<'_>, style: &GraphStyle) -> Result<()> {
        let years = self.matrix.rows();
        let (first, last) = match (years.first(), years.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(ReelGraphError::graph("genre evolution has no years to plot")),
        };
        let x_range = if first == last {
            (first - 1)..(last + 1)
        } else {
            first..last
        };
        let peak = self.matrix.row_totals().into_iter().max().unwrap_or(0);
        let y_max = (f64::from(peak) * 1.15).max(1.0);

        let mut chart = ChartBuilder::on(root)
            .caption(self.title(), style.title_font())
            .margin(style.margins.outer)
            .x_label_area_size(style.margins.x_label_area)
            .y_label_area_size(style.margins.y_label_area)
            .build_cartesian_2d(x_range, 0f64..y_max)?;

        chart.plotting_area().fill(&parse_color(GENRE_FACE))?;

        let year_label = |year: &i32| year.to_string();
        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Year")
            .y_desc("No of Genres added")
            .axis_desc_style(style.label_font())
            .x_label_formatter(&year_label)
            .disable_y_mesh();
        if !style.enable_grid {
            mesh.disable_x_mesh();
        }
        mesh.draw()?;

        // Legend heading: a label with no marker.
        chart
            .draw_series(std::iter::empty::<Circle<(i32, f64), i32>>())?
            .label("Genres");

        let mut baseline = vec![0.0; years.len()];
        for (j, genre) in self.matrix.columns().iter().enumerate() {
            let top: Vec<f64> = baseline
                .iter()
                .zip(self.matrix.column_values(j))
                .map(|(base, count)| base + f64::from(count))
                .collect();

            let mut outline: Vec<(i32, f64)> = years.iter().copied().zip(top.iter().copied()).collect();
            outline.extend(years.iter().copied().zip(baseline.iter().copied()).rev());

            let color = parse_color(GENRE_COLORS[j % GENRE_COLORS.len()]);
            chart
                .draw_series(std::iter::once(Polygon::new(outline, color.filled())))?
                .label(genre.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
            chart.draw_series(std::iter::once(PathElement::new(
                years.iter().copied().zip(top.iter().copied()).collect::<Vec<_>>(),
                BLACK.mix(0.4).stroke_width(1),
            )))?;

            baseline = top;
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.9))
            .border_style(&BLACK)
            .label_font(style.label_font())
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;

        let (x_range, y_range) = chart.plotting_area().get_pixel_range();
        let note = self.note();
        TextBox::new(&note, style.annotation_font())
            .draw(root, (x_range.end - 10, y_range.start + 10), HPos::Right)?;

        Ok(())
    }
}
