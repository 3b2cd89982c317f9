//! Boxed multi-line captions drawn over a chart.

use crate::traits::BitMapArea;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use reelgraph_common::Result;

/// Extra space between two caption lines, in pixels.
const LINE_GAP: i32 = 4;

/// A caption in a bordered box. Lines are split on `\n`.
#[derive(Debug, Clone)]
pub struct TextBox<'a> {
    lines: Vec<&'a str>,
    family: &'a str,
    size: u32,
    text_color: RGBColor,
    fill: RGBColor,
    border: RGBColor,
    padding: i32,
}

impl<'a> TextBox<'a> {
    /// Black text on white with a black border.
    pub fn new(text: &'a str, font: (&'a str, u32)) -> Self {
        Self {
            lines: text.lines().map(str::trim).collect(),
            family: font.0,
            size: font.1,
            text_color: BLACK,
            fill: WHITE,
            border: BLACK,
            padding: 8,
        }
    }

    /// Text and border color.
    #[must_use]
    pub fn color(mut self, text: RGBColor, border: RGBColor) -> Self {
        self.text_color = text;
        self.border = border;
        self
    }

    /// Box background.
    #[must_use]
    pub fn fill(mut self, fill: RGBColor) -> Self {
        self.fill = fill;
        self
    }

    /// Caption lines, whitespace-trimmed.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    fn line_height(&self) -> i32 {
        self.size as i32 + LINE_GAP
    }

    /// Draws the box with its top edge at `anchor.1`.
    ///
    /// `align` says whether `anchor.0` is the left edge, the center or the
    /// right edge of the box.
    pub fn draw(&self, area: &BitMapArea<'_>, anchor: (i32, i32), align: HPos) -> Result<()> {
        let style = TextStyle {
            font: (self.family, self.size).into_font(),
            color: self.text_color.to_backend_color(),
            pos: Pos::new(HPos::Left, VPos::Top),
        };

        let mut text_width = 0;
        for line in &self.lines {
            let (width, _) = area.estimate_text_size(line, &style)?;
            text_width = text_width.max(width as i32);
        }
        let text_height = self.line_height() * self.lines.len() as i32 - LINE_GAP;
        let [top_left, bottom_right] =
            box_rect((text_width, text_height.max(0)), anchor, align, self.padding);

        area.draw(&Rectangle::new([top_left, bottom_right], self.fill.filled()))?;
        area.draw(&Rectangle::new([top_left, bottom_right], self.border.stroke_width(1)))?;
        for (i, line) in self.lines.iter().enumerate() {
            let origin = (
                top_left.0 + self.padding,
                top_left.1 + self.padding + self.line_height() * i as i32,
            );
            area.draw(&Text::new(*line, origin, style.clone()))?;
        }
        Ok(())
    }
}

/// Corners of a box holding `content` plus `padding` on every side.
fn box_rect(content: (i32, i32), anchor: (i32, i32), align: HPos, padding: i32) -> [(i32, i32); 2] {
    let width = content.0 + 2 * padding;
    let height = content.1 + 2 * padding;
    let left = match align {
        HPos::Left => anchor.0,
        HPos::Center => anchor.0 - width / 2,
        HPos::Right => anchor.0 - width,
    };
    [(left, anchor.1), (left + width, anchor.1 + height)]
}
