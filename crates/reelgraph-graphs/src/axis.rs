//! Category axes with one unit-wide band per entry.
//!
//! Band `i` spans `i - 0.5 .. i + 0.5` and its tick sits on `i`, so a chart
//! with `n` categories has exactly `n` bands. This also holds for `n == 1`,
//! where a discrete plotters range would collapse to a single point.

use plotters::coord::combinators::WithKeyPoints;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

/// Half the width of a band, in axis units.
pub const BAND_HALF: f64 = 0.5;

/// Axis holding `count` bands with ticks on the band centers only.
pub fn band_axis(count: usize) -> WithKeyPoints<RangedCoordf64> {
    let centers: Vec<f64> = (0..count).map(|i| i as f64).collect();
    let upper = count.max(1) as f64 - BAND_HALF;
    (-BAND_HALF..upper).with_key_points(centers)
}

/// Category index of a band center, `None` off-center or out of range.
pub fn band_index(value: f64, count: usize) -> Option<usize> {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return None;
    }
    let index = rounded as usize;
    (index < count).then_some(index)
}

/// Lower and upper edge of band `index`, shrunk by `inset` on each side.
pub fn band_edges(index: usize, inset: f64) -> (f64, f64) {
    let center = index as f64;
    (center - BAND_HALF + inset, center + BAND_HALF - inset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::coord::ranged1d::BoldPoints;

    #[test]
    fn test_one_band_per_category() {
        let axis = band_axis(3);
        assert_eq!(axis.range(), -0.5..2.5);
        assert_eq!(axis.key_points(BoldPoints(10)), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_single_category_keeps_a_real_range() {
        let axis = band_axis(1);
        assert_eq!(axis.range(), -0.5..0.5);
        assert_eq!(axis.key_points(BoldPoints(10)), vec![0.0]);

        let (low, high) = (axis.map(&-0.5, (0, 100)), axis.map(&0.5, (0, 100)));
        assert_eq!((low, high), (0, 100));
    }

    #[test]
    fn test_band_index() {
        assert_eq!(band_index(0.0, 2), Some(0));
        assert_eq!(band_index(1.0, 2), Some(1));
        assert_eq!(band_index(2.0, 2), None);
        assert_eq!(band_index(0.5, 2), None);
        assert_eq!(band_index(-1.0, 2), None);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(band_edges(0, 0.0), (-0.5, 0.5));
        assert_eq!(band_edges(2, 0.25), (1.75, 2.25));
    }
}
