//! Top producing countries as a horizontal bar chart.

use crate::axis::{band_axis, band_edges, band_index};
use crate::palette::{parse_color, ColorMap, TREND_FACE};
use crate::reshape::{count_values, explode, top_k, MultiValueField};
use crate::traits::{BitMapArea, ContentGraph};
use crate::types::GraphStyle;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use reelgraph_common::{format_magnitude, truncate_string, ContentRecord, GraphKind, Result};
use tracing::debug;

/// Gap between neighbouring bars, as a share of the band on each side.
const BAR_INSET: f64 = 0.1;

/// Titles produced by one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCount {
    /// Country name as written in the catalog.
    pub country: String,
    /// Titles listing the country.
    pub count: u32,
}

/// The most productive countries, ordered by ascending count.
///
/// The largest producer is last so it ends up at the top of the chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryRanking {
    /// Ranked entries, smallest first.
    pub entries: Vec<CountryCount>,
}

impl CountryRanking {
    /// Counts titles per country and keeps the `limit` largest.
    ///
    /// A title listing several countries counts once for each of them.
    pub fn from_records(records: &[ContentRecord], limit: usize) -> Self {
        let counts = count_values(
            explode(records, MultiValueField::Country)
                .into_iter()
                .map(|row| row.value),
        );
        let mut top = top_k(&counts, limit);
        top.reverse();

        debug!(distinct = counts.len(), kept = top.len(), "ranked countries");
        Self {
            entries: top
                .into_iter()
                .map(|(country, count)| CountryCount {
                    country: country.to_string(),
                    count,
                })
                .collect(),
        }
    }

    /// Count for a country, if it made the ranking.
    pub fn count_of(&self, country: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.country == country)
            .map(|entry| entry.count)
    }

    fn count_bounds(&self) -> (f64, f64) {
        let counts = self.entries.iter().map(|entry| f64::from(entry.count));
        let min = counts.clone().fold(f64::INFINITY, f64::min);
        let max = counts.fold(0.0, f64::max);
        (min, max)
    }
}

impl ContentGraph for CountryRanking {
    fn kind(&self) -> GraphKind {
        GraphKind::CountryRanking
    }

    fn title(&self) -> &'static str {
        "Country-Wise Netflix Content Production"
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn draw(&self, root: &BitMapArea<'_>, style: &GraphStyle) -> Result<()> {
        let bars = self.entries.len();
        let (min, max) = self.count_bounds();

        let mut chart = ChartBuilder::on(root)
            .caption(self.title(), style.title_font())
            .margin(style.margins.outer)
            .x_label_area_size(style.margins.x_label_area)
            .y_label_area_size(style.margins.y_label_area * 2)
            .build_cartesian_2d(0f64..(max * 1.05).max(1.0), band_axis(bars))?;

        chart.plotting_area().fill(&parse_color(TREND_FACE))?;

        let magnitude = |value: &f64| format_magnitude(*value);
        let country_name = |value: &f64| {
            band_index(*value, bars)
                .and_then(|i| self.entries.get(i))
                .map(|entry| truncate_string(&entry.country, 24))
                .unwrap_or_default()
        };
        let mut mesh = chart.configure_mesh();
        mesh.x_desc("No of Movies and TV Shows Produced")
            .y_desc("Countries")
            .axis_desc_style(style.label_font())
            .x_label_formatter(&magnitude)
            .y_label_formatter(&country_name)
            .disable_y_mesh();
        if !style.enable_grid {
            mesh.disable_x_mesh();
        }
        mesh.draw()?;

        let bar_rect = |i: usize, count: u32| {
            let (low, high) = band_edges(i, BAR_INSET);
            [(0.0, low), (f64::from(count), high)]
        };

        chart.draw_series(self.entries.iter().enumerate().map(|(i, entry)| {
            let color = ColorMap::Turbo.normalized(f64::from(entry.count), min, max);
            Rectangle::new(bar_rect(i, entry.count), color.filled())
        }))?;
        chart.draw_series(self.entries.iter().enumerate().map(|(i, entry)| {
            Rectangle::new(bar_rect(i, entry.count), style.bar_outline.stroke_width(1))
        }))?;

        let value_style = TextStyle::from(style.annotation_font())
            .color(&WHITE)
            .pos(Pos::new(HPos::Right, VPos::Center));
        chart.draw_series(self.entries.iter().enumerate().map(|(i, entry)| {
            let value = f64::from(entry.count);
            Text::new(format_magnitude(value), (value * 0.98, i as f64), value_style.clone())
        }))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelgraph_common::test_utils::{catalog_fixtures, create_temp_dir, RecordBuilder};

    #[test]
    fn test_two_movie_example() {
        let ranking = CountryRanking::from_records(&catalog_fixtures::two_movie_rows(), 10);

        assert_eq!(ranking.count_of("United States"), Some(2));
        assert_eq!(ranking.count_of("India"), Some(1));
        assert_eq!(ranking.entries.len(), 2);
        assert_eq!(ranking.entries.last().unwrap().country, "United States");
    }

    #[test]
    fn test_whitespace_does_not_matter() {
        let spaced = vec![RecordBuilder::movie("a").country("USA, India").build()];
        let tight = vec![RecordBuilder::movie("a").country("USA,India").build()];

        assert_eq!(
            CountryRanking::from_records(&spaced, 10),
            CountryRanking::from_records(&tight, 10)
        );
    }

    #[test]
    fn test_limit_keeps_largest_in_ascending_order() {
        let records: Vec<_> = [("A", 5), ("B", 1), ("C", 3), ("D", 4)]
            .into_iter()
            .flat_map(|(country, n)| {
                (0..n).map(move |_| RecordBuilder::movie("t").country(country).build())
            })
            .collect();

        let ranking = CountryRanking::from_records(&records, 3);
        let order: Vec<(&str, u32)> = ranking
            .entries
            .iter()
            .map(|e| (e.country.as_str(), e.count))
            .collect();

        assert_eq!(order, vec![("C", 3), ("D", 4), ("A", 5)]);
        assert_eq!(ranking.count_of("B"), None);
    }

    #[test]
    fn test_missing_countries_skipped() {
        let records = vec![RecordBuilder::movie("a").build(), RecordBuilder::show("b").build()];
        let ranking = CountryRanking::from_records(&records, 10);
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_count_bounds() {
        let ranking = CountryRanking::from_records(&catalog_fixtures::mixed_catalog(), 10);
        let (min, max) = ranking.count_bounds();
        assert_eq!(max, 3.0);
        assert_eq!(min, 1.0);
    }

    #[test]
    fn test_render_to_file() {
        let dir = create_temp_dir();
        let path = dir.path().join("country_ranking.png");
        let ranking = CountryRanking::from_records(&catalog_fixtures::mixed_catalog(), 10);

        ranking.render_to_file(&GraphStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_single_country() {
        let dir = create_temp_dir();
        let path = dir.path().join("single_country.png");
        let ranking =
            CountryRanking::from_records(&[RecordBuilder::movie("a").country("India").build()], 10);
        assert_eq!(ranking.count_bounds(), (1.0, 1.0));

        ranking.render_to_file(&GraphStyle::default(), &path).unwrap();
        assert!(path.exists());
    }
}
