//! Deterministic word cloud layout.
//!
//! Words are placed largest first along an Archimedean spiral that starts at
//! the canvas center. A word takes the first spiral position where its
//! bounding box fits on the canvas without overlapping an earlier word. When
//! no position fits, the font shrinks and the search restarts; a word that
//! still does not fit at the minimum size is skipped.
//!
//! Text measurement is injected so the layout can be tested without fonts.

use reelgraph_common::Result;
use tracing::trace;

/// Layout parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCloudConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Font size of the most frequent word.
    pub max_font_size: u32,
    /// Smallest font size a word may shrink to.
    pub min_font_size: u32,
    /// Gap kept around every word, in pixels.
    pub padding: u32,
    /// Angle increment along the spiral, in radians.
    pub angle_step: f64,
    /// Pixels the spiral radius grows per radian.
    pub spiral_spacing: f64,
    /// Factor applied to the font size after a failed placement.
    pub shrink_factor: f64,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            max_font_size: 96,
            min_font_size: 10,
            padding: 4,
            angle_step: 0.1,
            spiral_spacing: 2.0,
            shrink_factor: 0.8,
        }
    }
}

/// A word with its final size and top-left position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// The word.
    pub text: String,
    /// Frequency it was sized from.
    pub weight: u32,
    /// Zero-based rank in the input, used for coloring.
    pub rank: usize,
    /// Font size the word was placed at.
    pub font_size: u32,
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Measured width in pixels.
    pub width: u32,
    /// Measured height in pixels.
    pub height: u32,
}

impl PlacedWord {
    fn overlaps(&self, x: i32, y: i32, width: u32, height: u32, padding: i32) -> bool {
        let (ax0, ay0) = (self.x - padding, self.y - padding);
        let (ax1, ay1) = (
            self.x + self.width as i32 + padding,
            self.y + self.height as i32 + padding,
        );
        let (bx1, by1) = (x + width as i32, y + height as i32);
        x < ax1 && bx1 > ax0 && y < ay1 && by1 > ay0
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCloudLayout {
    /// Words that found a place, in input order.
    pub placed: Vec<PlacedWord>,
    /// Words that did not fit even at the minimum size.
    pub skipped: Vec<String>,
}

/// Font size for a word, proportional to its weight relative to the heaviest.
pub fn scaled_font_size(weight: u32, max_weight: u32, config: &WordCloudConfig) -> u32 {
    if max_weight == 0 {
        return config.min_font_size;
    }
    let scaled = f64::from(config.max_font_size) * f64::from(weight) / f64::from(max_weight);
    (scaled.round() as u32).clamp(config.min_font_size, config.max_font_size)
}

/// Lays out `words` (ordered heaviest first) on the canvas.
///
/// `measure` returns the `(width, height)` of a word at a font size.
pub fn layout_words<F>(
    words: &[(String, u32)],
    config: &WordCloudConfig,
    mut measure: F,
) -> Result<WordCloudLayout>
where
    F: FnMut(&str, u32) -> Result<(u32, u32)>,
{
    let max_weight = words.iter().map(|(_, weight)| *weight).max().unwrap_or(0);
    let mut layout = WordCloudLayout::default();

    for (rank, (text, weight)) in words.iter().enumerate() {
        let mut font_size = scaled_font_size(*weight, max_weight, config);

        let placed = loop {
            let (width, height) = measure(text, font_size)?;
            if let Some((x, y)) = find_position(&layout.placed, width, height, config) {
                break Some(PlacedWord {
                    text: text.clone(),
                    weight: *weight,
                    rank,
                    font_size,
                    x,
                    y,
                    width,
                    height,
                });
            }

            let smaller = (f64::from(font_size) * config.shrink_factor).floor() as u32;
            if font_size <= config.min_font_size || smaller < config.min_font_size {
                break None;
            }
            font_size = smaller;
        };

        match placed {
            Some(word) => {
                trace!(word = %word.text, size = word.font_size, x = word.x, y = word.y, "placed word");
                layout.placed.push(word);
            }
            None => layout.skipped.push(text.clone()),
        }
    }

    Ok(layout)
}

fn find_position(
    placed: &[PlacedWord],
    width: u32,
    height: u32,
    config: &WordCloudConfig,
) -> Option<(i32, i32)> {
    if width > config.width || height > config.height {
        return None;
    }

    let (canvas_w, canvas_h) = (f64::from(config.width), f64::from(config.height));
    let (center_x, center_y) = (canvas_w / 2.0, canvas_h / 2.0);
    let aspect = canvas_h / canvas_w;
    let max_radius = (canvas_w * canvas_w + canvas_h * canvas_h).sqrt() / 2.0;
    let padding = config.padding as i32;
    let step = config.angle_step.max(0.01);
    let spacing = config.spiral_spacing.max(0.1);

    let mut angle: f64 = 0.0;
    loop {
        let radius = spacing * angle;
        if radius > max_radius {
            return None;
        }

        let x = (center_x + radius * angle.cos() - f64::from(width) / 2.0).round() as i32;
        let y = (center_y + radius * aspect * angle.sin() - f64::from(height) / 2.0).round() as i32;

        let inside = x >= 0
            && y >= 0
            && x + width as i32 <= config.width as i32
            && y + height as i32 <= config.height as i32;
        if inside && !placed.iter().any(|word| word.overlaps(x, y, width, height, padding)) {
            return Some((x, y));
        }

        angle += step;
    }
}
