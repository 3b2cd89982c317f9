//! Color parsing, categorical palettes, and continuous colormaps.

use plotters::style::RGBColor;

/// Categorical palette for the cast word cloud (matplotlib tab10).
pub const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Layer colors for the genre stacked area chart.
pub const GENRE_COLORS: [&str; 7] = [
    "#A7BED3", "#C6E2E9", "#F1FFC4", "#FFCAAF", "#FFC759", "#FF7B9C", "#DBCBD8",
];

/// Wedge colors for the rating donut, cycled when there are more wedges.
pub const RATING_COLORS: [&str; 4] = ["#648FFF", "#785EF0", "#DC267F", "#FE6100"];

/// Plot area face color of the trend chart.
pub const TREND_FACE: &str = "#F5F5F5";

/// Plot area face color of the genre chart.
pub const GENRE_FACE: &str = "#EBEBEB";

/// Parse a `#RRGGBB` string. Falls back to black when malformed.
pub fn parse_color(color_str: &str) -> RGBColor {
    try_parse_color(color_str).unwrap_or(RGBColor(0, 0, 0))
}

/// Parse a `#RRGGBB` string.
pub fn try_parse_color(color_str: &str) -> Option<RGBColor> {
    let hex = color_str.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text_color(background: RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = background;
    let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    if luminance > 150.0 {
        RGBColor(0, 0, 0)
    } else {
        RGBColor(255, 255, 255)
    }
}

/// Continuous colormaps, sampled by linear interpolation between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    /// Rainbow-like map used for the country ranking.
    Turbo,
    /// Sequential map used for the freshness heatmap.
    Plasma,
}

const TURBO_STOPS: [(u8, u8, u8); 11] = [
    (48, 18, 59),
    (68, 84, 196),
    (68, 144, 254),
    (31, 200, 222),
    (41, 239, 162),
    (125, 255, 86),
    (193, 243, 52),
    (241, 202, 58),
    (254, 146, 42),
    (234, 79, 13),
    (122, 4, 3),
];

const PLASMA_STOPS: [(u8, u8, u8); 11] = [
    (13, 8, 135),
    (65, 4, 157),
    (106, 0, 168),
    (143, 13, 164),
    (177, 42, 144),
    (204, 71, 120),
    (225, 100, 98),
    (242, 132, 75),
    (252, 166, 54),
    (252, 206, 37),
    (240, 249, 33),
];

impl ColorMap {
    fn stops(self) -> &'static [(u8, u8, u8)] {
        match self {
            Self::Turbo => &TURBO_STOPS,
            Self::Plasma => &PLASMA_STOPS,
        }
    }

    /// Color at position `t` in `[0, 1]`; values outside are clamped.
    pub fn sample(self, t: f64) -> RGBColor {
        let stops = self.stops();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let scaled = t * (stops.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(stops.len() - 1);
        let upper = (lower + 1).min(stops.len() - 1);
        let frac = scaled - lower as f64;

        let lerp = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8
        };
        let (r0, g0, b0) = stops[lower];
        let (r1, g1, b1) = stops[upper];
        RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }

    /// Color for `value` normalised between `min` and `max`.
    ///
    /// A degenerate range maps everything to the top of the scale.
    pub fn normalized(self, value: f64, min: f64, max: f64) -> RGBColor {
        if max > min {
            self.sample((value - min) / (max - min))
        } else {
            self.sample(1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!(parse_color("#FF0000"), RGBColor(255, 0, 0));
        assert_eq!(parse_color("#0000cd"), RGBColor(0, 0, 205));
        assert_eq!(parse_color("invalid"), RGBColor(0, 0, 0));
        assert_eq!(parse_color("#ZZ0000"), RGBColor(0, 0, 0));
        assert_eq!(try_parse_color("#12345"), None);
        assert_eq!(try_parse_color("#ééé"), None);
    }

    #[test]
    fn test_colormap_endpoints() {
        assert_eq!(ColorMap::Plasma.sample(0.0), RGBColor(13, 8, 135));
        assert_eq!(ColorMap::Plasma.sample(1.0), RGBColor(240, 249, 33));
        assert_eq!(ColorMap::Turbo.sample(-3.0), RGBColor(48, 18, 59));
        assert_eq!(ColorMap::Turbo.sample(7.0), RGBColor(122, 4, 3));
        assert_eq!(ColorMap::Turbo.sample(f64::NAN), RGBColor(48, 18, 59));
    }

    #[test]
    fn test_colormap_interpolates() {
        // Halfway between the first two plasma stops.
        assert_eq!(ColorMap::Plasma.sample(0.05), RGBColor(39, 6, 146));
        assert_eq!(
            ColorMap::Turbo.normalized(5.0, 0.0, 10.0),
            ColorMap::Turbo.sample(0.5)
        );
        assert_eq!(
            ColorMap::Turbo.normalized(3.0, 3.0, 3.0),
            ColorMap::Turbo.sample(1.0)
        );
    }

    #[test]
    fn test_contrast_text_color() {
        assert_eq!(contrast_text_color(RGBColor(240, 249, 33)), RGBColor(0, 0, 0));
        assert_eq!(contrast_text_color(RGBColor(13, 8, 135)), RGBColor(255, 255, 255));
    }
}
