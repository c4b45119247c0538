//! Pixel <-> data-index projection for one chart's plot area.

use crate::data_types::VisibleRange;
use crate::utils::PixelsExt;
use gpui::*;

/// Maps `pixel_x` to a (fractional) data index by linear interpolation over
/// the plot's horizontal extent.
///
/// Returns `None` when the plot area is degenerate or the input is not a
/// finite number; callers treat that as "no data under the pointer".
pub fn pixel_to_index(
    pixel_x: f64,
    chart_left: f64,
    chart_right: f64,
    start: usize,
    end: usize,
) -> Option<f64> {
    let width = chart_right - chart_left;
    if !pixel_x.is_finite() || !width.is_finite() || width <= 0.0 {
        return None;
    }
    Some(start as f64 + (pixel_x - chart_left) / width * (end - start) as f64)
}

/// Round-half-up, the one rounding rule for every real -> integer index
/// conversion.
pub fn round_index(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Rounds and clamps a real index into `[0, len - 1]`.
pub fn clamp_index(value: f64, len: usize) -> usize {
    let max = len.saturating_sub(1) as i64;
    round_index(value).clamp(0, max) as usize
}

/// Snapshot of one chart's plot geometry and the shared visible window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexTransform {
    pub left: f32,
    pub right: f32,
    pub range: VisibleRange,
    /// Total samples in the series.
    pub len: usize,
}

impl IndexTransform {
    pub fn new(left: f32, right: f32, range: VisibleRange, len: usize) -> Self {
        Self {
            left,
            right,
            range,
            len,
        }
    }

    pub fn from_bounds(bounds: Bounds<Pixels>, range: VisibleRange, len: usize) -> Self {
        Self::new(
            bounds.origin.x.as_f32(),
            (bounds.origin.x + bounds.size.width).as_f32(),
            range,
            len,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn pixel_to_index(&self, pixel_x: f32) -> Option<f64> {
        pixel_to_index(
            pixel_x as f64,
            self.left as f64,
            self.right as f64,
            self.range.start,
            self.range.end,
        )
    }

    /// Inverse of [`Self::pixel_to_index`], used for overlay drawing.
    pub fn index_to_pixel(&self, index: f64) -> f32 {
        let count = self.range.count().max(1) as f64;
        let pct = (index - self.range.start as f64) / count;
        self.left + (pct * self.width() as f64) as f32
    }

    pub fn contains_x(&self, pixel_x: f32) -> bool {
        pixel_x >= self.left && pixel_x <= self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::prelude::v1::test;

    #[test]
    fn round_half_up() {
        assert_eq!(round_index(2.5), 3);
        assert_eq!(round_index(2.49), 2);
        assert_eq!(round_index(-0.5), 0);
        assert_eq!(round_index(-0.51), -1);
    }

    #[test]
    fn index_pixel_roundtrip() {
        let t = IndexTransform::new(50.0, 850.0, VisibleRange::new(100, 300), 500);
        let px = t.index_to_pixel(200.0);
        assert_eq!(px, 450.0);
        assert_eq!(t.pixel_to_index(px), Some(200.0));
    }
}
