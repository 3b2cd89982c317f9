//! Titles added per year and content type as an annotated heatmap.

use crate::axis::{band_axis, band_edges, band_index};
use crate::dates::parsed_year;
use crate::palette::{contrast_text_color, ColorMap};
use crate::reshape::CountMatrix;
use crate::traits::{BitMapArea, ContentGraph};
use crate::types::GraphStyle;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use reelgraph_common::{ContentRecord, GraphKind, Result};
use tracing::debug;

/// Width of the color scale strip beside the heatmap, in pixels.
const COLORBAR_WIDTH: u32 = 110;

/// Count of titles per year added (rows) and content type (columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreshnessHeatmap {
    matrix: CountMatrix<i32, String>,
}

impl FreshnessHeatmap {
    /// Pivots titles by parsed year added and content type label.
    ///
    /// Dates go through the lenient parser, so layouts the token rule rejects
    /// (such as ISO dates) still count here. Unparseable dates are dropped.
    pub fn from_records(records: &[ContentRecord]) -> Self {
        let matrix = CountMatrix::from_pairs(records.iter().filter_map(|record| {
            parsed_year(record.date_added.as_deref())
                .map(|year| (year, record.kind.label().to_string()))
        }));

        debug!(
            years = matrix.rows().len(),
            types = matrix.columns().len(),
            "pivoted freshness heatmap"
        );
        Self { matrix }
    }

    /// The year-by-type counts.
    pub fn matrix(&self) -> &CountMatrix<i32, String> {
        &self.matrix
    }

    fn value_bounds(&self) -> (f64, f64) {
        let cells = (0..self.matrix.rows().len()).flat_map(|i| self.matrix.row_values(i).iter().copied());
        let min = cells.clone().min().unwrap_or(0);
        let max = cells.max().unwrap_or(0);
        (f64::from(min), f64::from(max))
    }

    fn draw_colorbar(&self, area: &BitMapArea<'_>, style: &GraphStyle) -> Result<()> {
        let (min, max) = self.value_bounds();
        let (_, height) = area.dim_in_pixel();
        let top = style.margins.outer as i32 + style.title_font_size as i32 + 20;
        let bottom = height as i32 - style.margins.x_label_area as i32 - style.margins.outer as i32;
        let (left, right) = (10, 34);
        let span = (bottom - top).max(1);

        for offset in 0..span {
            let t = 1.0 - f64::from(offset) / f64::from(span);
            area.draw(&Rectangle::new(
                [(left, top + offset), (right, top + offset + 1)],
                ColorMap::Plasma.sample(t).filled(),
            ))?;
        }
        area.draw(&Rectangle::new([(left, top), (right, bottom)], BLACK.stroke_width(1)))?;

        let label_style = TextStyle::from(style.annotation_font()).pos(Pos::new(HPos::Left, VPos::Center));
        area.draw(&Text::new(format!("{max:.0}"), (right + 6, top), label_style.clone()))?;
        area.draw(&Text::new(format!("{min:.0}"), (right + 6, bottom), label_style))?;
        Ok(())
    }
}

impl ContentGraph for FreshnessHeatmap {
    fn kind(&self) -> GraphKind {
        GraphKind::FreshnessHeatmap
    }

    fn title(&self) -> &'static str {
        "Netflix Content Freshness"
    }

    fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    fn draw(&self, root: &BitMapArea<'_>, style: &GraphStyle) -> Result<()> {
        let (width, _) = root.dim_in_pixel();
        let (main, colorbar) = root.split_horizontally(width.saturating_sub(COLORBAR_WIDTH));

        let years = self.matrix.rows();
        let types = self.matrix.columns();
        let (rows, cols) = (years.len(), types.len());
        let (min, max) = self.value_bounds();

        let mut chart = ChartBuilder::on(&main)
            .caption(self.title(), style.title_font())
            .margin(style.margins.outer)
            .x_label_area_size(style.margins.x_label_area)
            .y_label_area_size(style.margins.y_label_area)
            .build_cartesian_2d(band_axis(cols), band_axis(rows))?;

        // Band 0 is at the bottom; the earliest year goes in the top band.
        let slot_of = |row: usize| rows - 1 - row;
        let type_label = |value: &f64| {
            band_index(*value, cols)
                .and_then(|j| types.get(j).cloned())
                .unwrap_or_default()
        };
        let year_label = |value: &f64| {
            band_index(*value, rows)
                .and_then(|slot| years.get(slot_of(slot)))
                .map(ToString::to_string)
                .unwrap_or_default()
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc("Type")
            .y_desc("Year")
            .axis_desc_style(style.label_font())
            .x_label_formatter(&type_label)
            .y_label_formatter(&year_label)
            .draw()?;

        let cells: Vec<(usize, usize, u32)> = (0..rows)
            .flat_map(|row| {
                let slot = slot_of(row);
                self.matrix
                    .row_values(row)
                    .iter()
                    .enumerate()
                    .map(move |(j, count)| (j, slot, *count))
            })
            .collect();
        let cell_rect = |j: usize, slot: usize| {
            let (left, right) = band_edges(j, 0.0);
            let (bottom, top) = band_edges(slot, 0.0);
            [(left, bottom), (right, top)]
        };

        chart.draw_series(cells.iter().map(|&(j, slot, count)| {
            let color = ColorMap::Plasma.normalized(f64::from(count), min, max);
            Rectangle::new(cell_rect(j, slot), color.filled())
        }))?;
        chart.draw_series(
            cells
                .iter()
                .map(|&(j, slot, _)| Rectangle::new(cell_rect(j, slot), WHITE.stroke_width(2))),
        )?;

        let (family, size) = style.annotation_font();
        chart.draw_series(cells.iter().map(|&(j, slot, count)| {
            let fill = ColorMap::Plasma.normalized(f64::from(count), min, max);
            let text_style = TextStyle {
                font: (family, size).into_font(),
                color: contrast_text_color(fill).to_backend_color(),
                pos: Pos::new(HPos::Center, VPos::Center),
            };
            Text::new(count.to_string(), (j as f64, slot as f64), text_style)
        }))?;

        self.draw_colorbar(&colorbar, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelgraph_common::test_utils::{catalog_fixtures, create_temp_dir, RecordBuilder};
    use reelgraph_common::ContentType;

    #[test]
    fn test_lenient_dates_count() {
        let heatmap = FreshnessHeatmap::from_records(&catalog_fixtures::mixed_catalog());
        let matrix = heatmap.matrix();

        assert_eq!(matrix.rows(), &[2017, 2019, 2021]);
        assert_eq!(matrix.columns(), &["Movie".to_string(), "TV Show".to_string()]);
        assert_eq!(matrix.get(&2021, &"Movie".to_string()), 2);
        assert_eq!(matrix.get(&2021, &"TV Show".to_string()), 2);
        assert_eq!(matrix.get(&2019, &"Movie".to_string()), 1);
        assert_eq!(matrix.get(&2017, &"TV Show".to_string()), 0);
    }

    #[test]
    fn test_short_years_land_in_full_year_rows() {
        let records = vec![
            RecordBuilder::movie("a").added("9/9/21").build(),
            RecordBuilder::movie("b").added("September 2021").build(),
            RecordBuilder::show("c").added("Sep 2019").build(),
        ];

        let heatmap = FreshnessHeatmap::from_records(&records);

        assert_eq!(heatmap.matrix().rows(), &[2019, 2021]);
        assert_eq!(heatmap.matrix().get(&2021, &"Movie".to_string()), 2);
        assert_eq!(heatmap.matrix().get(&2019, &"TV Show".to_string()), 1);
    }

    #[test]
    fn test_other_types_get_their_own_column() {
        let records = vec![
            RecordBuilder::of_kind("a", ContentType::Other("Special".into()))
                .added("2020-02-02")
                .build(),
            RecordBuilder::movie("b").added("February 2, 2020").build(),
        ];

        let heatmap = FreshnessHeatmap::from_records(&records);
        assert_eq!(
            heatmap.matrix().columns(),
            &["Movie".to_string(), "Special".to_string()]
        );
        assert_eq!(heatmap.value_bounds(), (1.0, 1.0));
    }

    #[test]
    fn test_unparseable_dates_dropped() {
        let records = vec![
            RecordBuilder::movie("a").added("someday").build(),
            RecordBuilder::show("b").build(),
        ];
        assert!(FreshnessHeatmap::from_records(&records).is_empty());
    }

    #[test]
    fn test_render_to_file() {
        let dir = create_temp_dir();
        let path = dir.path().join("freshness_heatmap.png");
        let heatmap = FreshnessHeatmap::from_records(&catalog_fixtures::mixed_catalog());

        heatmap.render_to_file(&GraphStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_single_cell() {
        let dir = create_temp_dir();
        let path = dir.path().join("single_cell.png");
        let heatmap =
            FreshnessHeatmap::from_records(&[RecordBuilder::movie("a").added("2020-01-01").build()]);
        assert_eq!(heatmap.value_bounds(), (1.0, 1.0));

        heatmap.render_to_file(&GraphStyle::default(), &path).unwrap();
        assert!(path.exists());
    }
}
