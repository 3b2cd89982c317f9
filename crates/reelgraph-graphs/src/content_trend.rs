//! Titles added per year, movies against TV shows.

use crate::annotation::TextBox;
use crate::dates::year_added;
use crate::palette::{parse_color, TREND_FACE};
use crate::reshape::count_values;
use crate::traits::{BitMapArea, ContentGraph};
use crate::types::GraphStyle;
use plotters::prelude::*;
use plotters::style::text_anchor::HPos;
use reelgraph_common::{ContentRecord, ContentType, GraphKind, ReelGraphError, Result};
use tracing::debug;

/// Number of titles added in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCount {
    /// Calendar year.
    pub year: i32,
    /// Titles added that year.
    pub count: u32,
}

/// Yearly additions split by content type. Each series is sorted by year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTrend {
    /// Movies added per year.
    pub movies: Vec<YearCount>,
    /// TV shows added per year.
    pub shows: Vec<YearCount>,
    /// Boxed caption drawn inside the plot.
    pub caption: Option<String>,
}

impl ContentTrend {
    /// Counts movies and shows per year added.
    ///
    /// Rows without a usable 4-digit year are left out, as are rows of any
    /// other content type.
    pub fn from_records(records: &[ContentRecord]) -> Self {
        let movies = yearly_counts(records, &ContentType::Movie);
        let shows = yearly_counts(records, &ContentType::TvShow);

        debug!(
            movie_years = movies.len(),
            show_years = shows.len(),
            "aggregated content trend"
        );
        Self {
            movies,
            shows,
            caption: None,
        }
    }

    /// Sets the caption drawn inside the plot.
    #[must_use]
    pub fn with_caption(mut self, caption: Option<&str>) -> Self {
        self.caption = caption.map(str::to_string);
        self
    }

    /// First and last year present in either series.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let years = self.movies.iter().chain(&self.shows).map(|point| point.year);
        let first = years.clone().min()?;
        let last = years.max()?;
        Some((first, last))
    }

    /// Highest yearly count in either series.
    pub fn max_count(&self) -> u32 {
        self.movies
            .iter()
            .chain(&self.shows)
            .map(|point| point.count)
            .max()
            .unwrap_or(0)
    }

    /// Count for one type and year, 0 when absent.
    pub fn count_for(&self, kind: &ContentType, year: i32) -> u32 {
        let series = match kind {
            ContentType::Movie => &self.movies,
            ContentType::TvShow => &self.shows,
            ContentType::Other(_) => return 0,
        };
        series
            .iter()
            .find(|point| point.year == year)
            .map_or(0, |point| point.count)
    }
}

/// Length of one dash, in pixels.
const DASH_LENGTH: f64 = 10.0;
/// Gap between dashes, in pixels.
const DASH_GAP: f64 = 6.0;

/// Cuts a polyline into dash segments, carrying the pattern across vertices.
fn dash_segments(points: &[(i32, i32)], dash: f64, gap: f64) -> Vec<[(i32, i32); 2]> {
    let period = dash + gap;
    let mut dashes = Vec::new();
    let mut phase = 0.0;

    for pair in points.windows(2) {
        let (x0, y0) = (f64::from(pair[0].0), f64::from(pair[0].1));
        let (x1, y1) = (f64::from(pair[1].0), f64::from(pair[1].1));
        let length = (x1 - x0).hypot(y1 - y0);
        if length == 0.0 {
            continue;
        }
        let at = |d: f64| {
            let t = d / length;
            ((x0 + (x1 - x0) * t).round() as i32, (y0 + (y1 - y0) * t).round() as i32)
        };

        let mut offset = 0.0;
        while offset < length {
            let in_period = (phase + offset) % period;
            if in_period < dash {
                let end = (offset + dash - in_period).min(length);
                dashes.push([at(offset), at(end)]);
                offset = end;
            } else {
                offset += period - in_period;
            }
        }
        phase = (phase + length) % period;
    }
    dashes
}

fn yearly_counts(records: &[ContentRecord], kind: &ContentType) -> Vec<YearCount> {
    let years = records
        .iter()
        .filter(|record| &record.kind == kind)
        .filter_map(|record| year_added(record.date_added.as_deref()));

    count_values(years)
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

impl ContentGraph for ContentTrend {
    fn kind(&self) -> GraphKind {
        GraphKind::ContentTrend
    }

    fn title(&self) -> &'static str {
        "Netflix Content Trend Over the Years"
    }

    fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.shows.is_empty()
    }

    fn draw(&self, root: &BitMapArea<'_>, style: &GraphStyle) -> Result<()> {
        let (first, last) = self
            .year_range()
            .ok_or_else(|| ReelGraphError::graph("content trend has no years to plot"))?;
        let y_max = (f64::from(self.max_count()) * 1.1).max(1.0);

        let mut chart = ChartBuilder::on(root)
            .caption(self.title(), style.title_font())
            .margin(style.margins.outer)
            .x_label_area_size(style.margins.x_label_area)
            .y_label_area_size(style.margins.y_label_area)
            .build_cartesian_2d((first - 1)..(last + 1), 0f64..y_max)?;

        chart.plotting_area().fill(&parse_color(TREND_FACE))?;

        let year_label = |year: &i32| year.to_string();
        let count_label = |count: &f64| format!("{count:.0}");
        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Year")
            .y_desc("No of Movies & TV Shows Added")
            .axis_desc_style(style.label_font())
            .x_labels((last - first + 3) as usize)
            .x_label_formatter(&year_label)
            .y_label_formatter(&count_label)
            .disable_y_mesh();
        if !style.enable_grid {
            mesh.disable_x_mesh();
        }
        mesh.draw()?;

        // Legend heading: a label with no marker.
        chart
            .draw_series(std::iter::empty::<Circle<(i32, f64), i32>>())?
            .label("Content Type");

        for (series, label, color) in [
            (&self.movies, "Movies", style.movie),
            (&self.shows, "TV Shows", style.tv_show),
        ] {
            if series.is_empty() {
                continue;
            }
            let points: Vec<(i32, f64)> = series
                .iter()
                .map(|point| (point.year, f64::from(point.count)))
                .collect();

            // Dashes are cut in pixel space so they look the same on both axes.
            let pixels: Vec<(i32, i32)> = points.iter().map(|p| chart.backend_coord(p)).collect();
            for dash in dash_segments(&pixels, DASH_LENGTH, DASH_GAP) {
                root.draw(&PathElement::new(dash.to_vec(), color.stroke_width(2)))?;
            }

            chart
                .draw_series(
                    points
                        .into_iter()
                        .map(|point| Circle::new(point, 4, color.filled())),
                )?
                .label(label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 8, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.9))
            .border_style(&BLACK)
            .label_font(style.label_font())
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;

        if let Some(caption) = &self.caption {
            let (x_range, y_range) = chart.plotting_area().get_pixel_range();
            let anchor = ((x_range.start + x_range.end) / 2, y_range.start + 12);
            TextBox::new(caption, style.annotation_font()).draw(root, anchor, HPos::Center)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelgraph_common::test_utils::{catalog_fixtures, create_temp_dir, RecordBuilder};

    #[test]
    fn test_counts_per_type_and_year() {
        let records = vec![
            RecordBuilder::movie("a").added("January 1, 2020").build(),
            RecordBuilder::movie("b").added("June 3, 2020").build(),
            RecordBuilder::movie("c").added("June 3, 2019").build(),
            RecordBuilder::show("d").added("May 2, 2020").build(),
        ];

        let trend = ContentTrend::from_records(&records);

        assert_eq!(
            trend.movies,
            vec![
                YearCount { year: 2019, count: 1 },
                YearCount { year: 2020, count: 2 },
            ]
        );
        assert_eq!(trend.shows, vec![YearCount { year: 2020, count: 1 }]);
        assert_eq!(trend.year_range(), Some((2019, 2020)));
        assert_eq!(trend.max_count(), 2);
    }

    #[test]
    fn test_two_movie_example() {
        let trend = ContentTrend::from_records(&catalog_fixtures::two_movie_rows());

        assert_eq!(trend.count_for(&ContentType::Movie, 2021), 2);
        assert_eq!(trend.count_for(&ContentType::TvShow, 2021), 0);
        assert!(trend.shows.is_empty());
    }

    #[test]
    fn test_unusable_years_and_types_excluded() {
        let records = vec![
            RecordBuilder::movie("no date").build(),
            RecordBuilder::movie("no comma").added("2020-01-01").build(),
            RecordBuilder::movie("short year").added("May 1, 20").build(),
            RecordBuilder::of_kind("odd", ContentType::Other("Short".into()))
                .added("May 1, 2020")
                .build(),
        ];

        let trend = ContentTrend::from_records(&records);

        assert!(trend.is_empty());
        assert_eq!(trend.year_range(), None);
        assert_eq!(trend.max_count(), 0);
    }

    #[test]
    fn test_dash_segments_follow_pattern() {
        let dashes = dash_segments(&[(0, 0), (40, 0)], 10.0, 6.0);
        assert_eq!(
            dashes,
            vec![[(0, 0), (10, 0)], [(16, 0), (26, 0)], [(32, 0), (40, 0)]]
        );
    }

    #[test]
    fn test_dash_pattern_continues_across_vertices() {
        let dashes = dash_segments(&[(0, 0), (5, 0), (5, 20)], 10.0, 6.0);
        assert_eq!(
            dashes,
            vec![[(0, 0), (5, 0)], [(5, 0), (5, 5)], [(5, 11), (5, 20)]]
        );
        assert!(dash_segments(&[(3, 3)], 10.0, 6.0).is_empty());
    }

    #[test]
    fn test_metadata() {
        let trend = ContentTrend::default();
        assert_eq!(trend.kind(), GraphKind::ContentTrend);
        assert!(trend.title().contains("Trend"));
    }

    #[test]
    fn test_caption_is_optional() {
        let trend = ContentTrend::from_records(&catalog_fixtures::two_movie_rows());
        assert_eq!(trend.caption, None);

        let captioned = trend.with_caption(Some("Spike in 2021"));
        assert_eq!(captioned.caption.as_deref(), Some("Spike in 2021"));
        assert_eq!(captioned.with_caption(None).caption, None);
    }

    #[test]
    fn test_render_to_file() {
        let dir = create_temp_dir();
        let path = dir.path().join("content_trend.png");
        let trend = ContentTrend::from_records(&catalog_fixtures::mixed_catalog())
            .with_caption(Some("First line\nSecond line"));

        trend.render_to_file(&GraphStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_single_year() {
        let dir = create_temp_dir();
        let path = dir.path().join("single_year.png");
        let trend =
            ContentTrend::from_records(&[RecordBuilder::show("a").added("May 1, 2020").build()]);

        trend.render_to_file(&GraphStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_empty_is_refused() {
        let dir = create_temp_dir();
        let path = dir.path().join("empty.png");

        assert!(ContentTrend::default()
            .render_to_file(&GraphStyle::default(), &path)
            .is_err());
        assert!(!path.exists());
    }
}
