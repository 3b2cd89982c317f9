//! Audience rating buckets as a donut chart.

use crate::annotation::TextBox;
use crate::palette::{parse_color, RATING_COLORS};
use crate::rating::{classify_rating, RatingBucket};
use crate::reshape::count_values;
use crate::traits::{BitMapArea, ContentGraph};
use crate::types::GraphStyle;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use reelgraph_common::{format_percentage, ContentRecord, GraphKind, Result};
use std::f64::consts::TAU;
use tracing::debug;

const FOOTNOTE_GRAY: RGBColor = RGBColor(128, 128, 128);
/// Outer radius as a fraction of the shorter side, leaving room for the footnote.
const OUTER_RADIUS: f64 = 0.36;
/// Share of the largest wedge's radius it is pulled out by.
const EXPLODE_OFFSET: f64 = 0.05;
/// Inner hole radius as a fraction of the outer radius.
const HOLE_RATIO: f64 = 0.7;
/// Where percentage labels sit, as a fraction of the outer radius.
const LABEL_RADIUS: f64 = 0.85;

/// Titles falling into one rating bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketCount {
    /// The audience bucket.
    pub bucket: RatingBucket,
    /// Titles in the bucket.
    pub count: u32,
}

/// Rating bucket counts, in bucket label order. Empty buckets are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingDistribution {
    /// Non-empty buckets.
    pub buckets: Vec<BucketCount>,
    /// Footnote drawn under the donut.
    pub caption: Option<String>,
}

impl RatingDistribution {
    /// Buckets every rated title.
    ///
    /// Rows without a rating are skipped, as are rows whose rating is really a
    /// runtime such as "74 min".
    pub fn from_records(records: &[ContentRecord]) -> Self {
        let buckets = count_values(
            records
                .iter()
                .filter_map(|record| record.rating.as_deref())
                .filter_map(classify_rating),
        );

        debug!(buckets = buckets.len(), "bucketed ratings");
        Self {
            buckets: buckets
                .into_iter()
                .map(|(bucket, count)| BucketCount { bucket, count })
                .collect(),
            caption: None,
        }
    }

    /// Sets the footnote drawn under the donut.
    #[must_use]
    pub fn with_caption(mut self, caption: Option<&str>) -> Self {
        self.caption = caption.map(str::to_string);
        self
    }

    /// Total number of bucketed titles.
    pub fn total(&self) -> u32 {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Count for one bucket, 0 when absent.
    pub fn count_of(&self, bucket: RatingBucket) -> u32 {
        self.buckets
            .iter()
            .find(|b| b.bucket == bucket)
            .map_or(0, |b| b.count)
    }

    /// Fraction of all titles in `bucket`, in `[0, 1]`.
    pub fn share(&self, bucket: RatingBucket) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            f64::from(self.count_of(bucket)) / f64::from(total)
        }
    }

    /// Buckets holding the maximum count. These wedges are pulled out.
    pub fn largest(&self) -> Vec<RatingBucket> {
        let max = self.buckets.iter().map(|b| b.count).max().unwrap_or(0);
        self.buckets
            .iter()
            .filter(|b| b.count == max)
            .map(|b| b.bucket)
            .collect()
    }
}

/// Point at `radius` and `angle` around `center`, angle counterclockwise from 3 o'clock.
fn polar(center: (f64, f64), radius: f64, angle: f64) -> (i32, i32) {
    (
        (center.0 + radius * angle.cos()).round() as i32,
        (center.1 - radius * angle.sin()).round() as i32,
    )
}

impl ContentGraph for RatingDistribution {
    fn kind(&self) -> GraphKind {
        GraphKind::RatingDistribution
    }

    fn title(&self) -> &'static str {
        "Majority of Netflix Content Targets Mature Audiences"
    }

    fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn draw(&self, root: &BitMapArea<'_>, style: &GraphStyle) -> Result<()> {
        let area = root.titled(self.title(), style.title_font())?;
        let (width, height) = area.dim_in_pixel();
        let center = (f64::from(width) * 0.6, f64::from(height) / 2.0);
        let radius = f64::from(width.min(height)) * OUTER_RADIUS;

        let total = f64::from(self.total());
        let largest = self.largest();
        let percent_style = TextStyle::from(style.annotation_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));

        let mut start = 0.0;
        for (idx, entry) in self.buckets.iter().enumerate() {
            let sweep = TAU * f64::from(entry.count) / total;
            let middle = start + sweep / 2.0;
            let offset = if largest.contains(&entry.bucket) {
                radius * EXPLODE_OFFSET
            } else {
                0.0
            };
            let origin = (
                center.0 + offset * middle.cos(),
                center.1 - offset * middle.sin(),
            );

            let steps = ((sweep / TAU) * 360.0).ceil().max(2.0) as usize;
            let mut wedge = vec![polar(origin, 0.0, 0.0)];
            wedge.extend(
                (0..=steps).map(|s| polar(origin, radius, start + sweep * s as f64 / steps as f64)),
            );

            let color = parse_color(RATING_COLORS[idx % RATING_COLORS.len()]);
            area.draw(&Polygon::new(wedge, color.filled()))?;
            area.draw(&Text::new(
                format_percentage(entry.count, self.total()),
                polar(origin, radius * LABEL_RADIUS, middle),
                percent_style.clone(),
            ))?;

            start += sweep;
        }

        let hole = polar(center, 0.0, 0.0);
        area.draw(&Circle::new(
            hole,
            (radius * HOLE_RATIO).round() as i32,
            style.background.filled(),
        ))?;
        area.draw(&Text::new(
            "Audience Category",
            hole,
            TextStyle::from(style.label_font()).pos(Pos::new(HPos::Center, VPos::Center)),
        ))?;

        if let Some(caption) = &self.caption {
            let below = (center.1 + radius * (1.0 + EXPLODE_OFFSET)).round() as i32 + 16;
            TextBox::new(caption, style.annotation_font())
                .color(FOOTNOTE_GRAY, FOOTNOTE_GRAY)
                .fill(style.background)
                .draw(&area, (hole.0, below), HPos::Center)?;
        }

        self.draw_legend(&area, style)
    }
}

impl RatingDistribution {
    fn draw_legend(&self, area: &BitMapArea<'_>, style: &GraphStyle) -> Result<()> {
        let (x, mut y) = (style.margins.outer as i32, style.margins.outer as i32);
        let (family, size) = style.label_font();
        let line_height = size as i32 + 8;

        area.draw(&Text::new("Ratings", (x, y), (family, size).into_font().style(FontStyle::Bold)))?;
        y += line_height;

        for (idx, entry) in self.buckets.iter().enumerate() {
            let color = parse_color(RATING_COLORS[idx % RATING_COLORS.len()]);
            area.draw(&Rectangle::new(
                [(x, y + 2), (x + 14, y + 2 + size as i32 / 2 + 4)],
                color.filled(),
            ))?;
            area.draw(&Text::new(entry.bucket.label(), (x + 22, y), (family, size)))?;
            y += line_height;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelgraph_common::test_utils::{catalog_fixtures, create_temp_dir, RecordBuilder};

    #[test]
    fn test_buckets_mixed_catalog() {
        let distribution = RatingDistribution::from_records(&catalog_fixtures::mixed_catalog());

        // "74 min" is dropped, six rated rows remain.
        assert_eq!(distribution.total(), 6);
        assert_eq!(distribution.count_of(RatingBucket::Mature), 3);
        assert_eq!(distribution.count_of(RatingBucket::ParentalGuidance), 1);
        assert_eq!(distribution.count_of(RatingBucket::GeneralAudience), 1);
        assert_eq!(distribution.count_of(RatingBucket::Unrated), 1);
        assert_eq!(distribution.count_of(RatingBucket::Others), 0);
        assert_eq!(distribution.largest(), vec![RatingBucket::Mature]);
    }

    #[test]
    fn test_buckets_in_label_order() {
        let records = vec![
            RecordBuilder::movie("a").rating("UR").build(),
            RecordBuilder::movie("b").rating("TV-Y").build(),
            RecordBuilder::movie("c").rating("XYZ").build(),
            RecordBuilder::movie("d").rating("R").build(),
        ];

        let distribution = RatingDistribution::from_records(&records);
        let order: Vec<RatingBucket> = distribution.buckets.iter().map(|b| b.bucket).collect();

        assert_eq!(
            order,
            vec![
                RatingBucket::GeneralAudience,
                RatingBucket::Others,
                RatingBucket::Mature,
                RatingBucket::Unrated,
            ]
        );
    }

    #[test]
    fn test_unknown_codes_land_in_others() {
        let records = vec![
            RecordBuilder::movie("a").rating("TV-XX").build(),
            RecordBuilder::movie("b").rating("TV-MA").build(),
            RecordBuilder::movie("c").build(),
        ];

        let distribution = RatingDistribution::from_records(&records);

        assert_eq!(distribution.total(), 2);
        assert_eq!(distribution.share(RatingBucket::Others), 0.5);
        assert_eq!(distribution.largest().len(), 2);
    }

    #[test]
    fn test_polar_coordinates() {
        assert_eq!(polar((100.0, 100.0), 10.0, 0.0), (110, 100));
        assert_eq!(polar((100.0, 100.0), 10.0, TAU / 4.0), (100, 90));
    }

    #[test]
    fn test_empty_distribution() {
        let distribution = RatingDistribution::from_records(&[]);
        assert!(distribution.is_empty());
        assert_eq!(distribution.share(RatingBucket::Mature), 0.0);
    }

    #[test]
    fn test_render_to_file() {
        let dir = create_temp_dir();
        let path = dir.path().join("rating_distribution.png");
        let distribution = RatingDistribution::from_records(&catalog_fixtures::mixed_catalog())
            .with_caption(Some("Mostly mature\nSome kids content"));

        distribution.render_to_file(&GraphStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_single_bucket() {
        let dir = create_temp_dir();
        let path = dir.path().join("single_bucket.png");
        let records: Vec<_> = (0..3)
            .map(|_| RecordBuilder::movie("t").rating("TV-MA").build())
            .collect();
        let distribution = RatingDistribution::from_records(&records);
        assert_eq!(distribution.share(RatingBucket::Mature), 1.0);

        distribution.render_to_file(&GraphStyle::default(), &path).unwrap();
        assert!(path.exists());
    }
}
