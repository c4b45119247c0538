use serde::{Deserialize, Serialize};

/// Guards `floor(pan * max_start)` against `start / max_start * max_start`
/// landing a hair below the integer it came from.
const START_EPSILON: f64 = 1e-9;

/// The shared zoom/pan pair. Both charts derive their visible window from
/// the same value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Zoom factor, `>= 1`. `1` shows the whole series.
    pub zoom_factor: f64,
    /// Position of the window inside the scrollable range, in `[0, 1]`.
    pub pan_fraction: f64,
}

impl Viewport {
    pub fn new(zoom_factor: f64, pan_fraction: f64) -> Self {
        Self {
            zoom_factor,
            pan_fraction,
        }
    }

    /// Visible window for a series of `len` samples.
    pub fn range(&self, len: usize) -> VisibleRange {
        visible_range(len, self.zoom_factor, self.pan_fraction)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

/// Half-open index window `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn count(&self) -> usize {
        self.end - self.start
    }

    /// Index in the middle of the window, used to place new annotations.
    pub fn center(&self) -> usize {
        self.start + self.count() / 2
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Number of samples shown at `zoom_factor`.
pub fn visible_count(len: usize, zoom_factor: f64) -> usize {
    debug_assert!(
        zoom_factor >= 1.0,
        "zoom factor {zoom_factor} below 1 reached the viewport model"
    );
    (len as f64 / zoom_factor).ceil() as usize
}

/// Largest valid window start for a window of `count` samples.
pub fn max_start_index(len: usize, count: usize) -> usize {
    len.saturating_sub(count)
}

/// Window start for `pan_fraction` over `[0, max_start]`.
pub fn start_index(pan_fraction: f64, max_start: usize) -> usize {
    let start = (pan_fraction * max_start as f64 + START_EPSILON).floor();
    (start.max(0.0) as usize).min(max_start)
}

/// Visible `[start, end)` window for `(len, zoom_factor, pan_fraction)`.
///
/// Inputs are not clamped: every producer of viewport values clamps before
/// storing, and an out-of-range value here is a bug upstream.
pub fn visible_range(len: usize, zoom_factor: f64, pan_fraction: f64) -> VisibleRange {
    debug_assert!(
        (0.0..=1.0).contains(&pan_fraction),
        "pan fraction {pan_fraction} outside [0, 1] reached the viewport model"
    );
    let count = visible_count(len, zoom_factor);
    let max_start = max_start_index(len, count);
    let start = start_index(pan_fraction, max_start);
    VisibleRange::new(start, start + count)
}
