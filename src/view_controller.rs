//! Zoom and pan controllers for the shared viewport.
//!
//! Pure functions from the current [`Viewport`] to the next one, plus the
//! pixel to sample conversions the drag gestures need.

use crate::data_types::{max_start_index, visible_count, visible_range, Viewport, ZoomSettings};
use crate::transform::round_index;

/// ViewController holds the zoom and pan math on the shared viewport,
/// independently of the GPUI infrastructure to facilitate testing.
///
/// Every function returns a viewport that is already clamped into the valid
/// range; callers may store the result directly.
pub struct ViewController;

impl ViewController {
    /// Zooms around `cursor_index`, keeping that sample under the pointer.
    ///
    /// A negative `wheel_delta` zooms in, a positive one zooms out. Requests
    /// that hit a zoom bound return `current` unchanged.
    pub fn zoom(
        wheel_delta: f64,
        cursor_index: f64,
        current: Viewport,
        len: usize,
        settings: &ZoomSettings,
    ) -> Viewport {
        let factor = if wheel_delta < 0.0 {
            settings.in_step
        } else if wheel_delta > 0.0 {
            settings.out_step
        } else {
            return current;
        };

        let new_zoom = settings.clamp(current.zoom_factor * factor);
        if new_zoom == current.zoom_factor || len == 0 || !cursor_index.is_finite() {
            return current;
        }

        let old = visible_range(len, current.zoom_factor, current.pan_fraction);
        // Where the cursor sat inside the old window, 0 = left edge, 1 = right edge.
        let relative = ((cursor_index - old.start as f64) / old.count() as f64).clamp(0.0, 1.0);

        let new_count = visible_count(len, new_zoom);
        let max_start = max_start_index(len, new_count);
        if max_start == 0 {
            return Viewport::new(new_zoom, 0.0);
        }

        let target_start = cursor_index - relative * new_count as f64;
        let new_start = round_index(target_start).clamp(0, max_start as i64);
        let pan = (new_start as f64 / max_start as f64).clamp(0.0, 1.0);

        Viewport::new(new_zoom, pan)
    }

    /// Shifts the window by `index_delta` samples without changing its width.
    pub fn pan(index_delta: i64, current: Viewport, len: usize) -> Viewport {
        let count = visible_count(len, current.zoom_factor);
        let max_start = max_start_index(len, count);
        if max_start == 0 || index_delta == 0 {
            return current;
        }

        let start = visible_range(len, current.zoom_factor, current.pan_fraction).start as i64;
        let new_start = (start + index_delta).clamp(0, max_start as i64);
        Viewport::new(
            current.zoom_factor,
            (new_start as f64 / max_start as f64).clamp(0.0, 1.0),
        )
    }

    /// Converts a horizontal drag in pixels into a whole-sample index delta.
    ///
    /// Negated: dragging right moves the window towards earlier samples.
    pub fn pixel_delta_to_index_delta(delta_pixels: f32, chart_width: f32, visible: usize) -> i64 {
        if chart_width <= 0.0 || visible == 0 || !delta_pixels.is_finite() {
            return 0;
        }
        let pixels_per_index = chart_width as f64 / visible as f64;
        round_index(-(delta_pixels as f64) / pixels_per_index)
    }

    /// Pixels spanned by one sample at the current window width.
    pub fn pixels_per_index(chart_width: f32, visible: usize) -> f32 {
        if visible == 0 {
            return 0.0;
        }
        chart_width / visible as f32
    }

    /// Absolute zoom setter (slider). Keeps the pan fraction.
    pub fn set_zoom(zoom_factor: f64, current: Viewport, settings: &ZoomSettings) -> Viewport {
        if !zoom_factor.is_finite() {
            return current;
        }
        Viewport::new(settings.clamp(zoom_factor), current.pan_fraction.clamp(0.0, 1.0))
    }

    /// Absolute pan setter (slider).
    pub fn set_pan(pan_fraction: f64, current: Viewport) -> Viewport {
        if !pan_fraction.is_finite() {
            return current;
        }
        Viewport::new(current.zoom_factor, pan_fraction.clamp(0.0, 1.0))
    }

    /// Pans by a fraction of the visible window (keyboard navigation).
    pub fn step_pan(window_fraction: f64, current: Viewport, len: usize) -> Viewport {
        if !window_fraction.is_finite() {
            return current;
        }
        let count = visible_count(len, current.zoom_factor) as f64;
        let delta = round_index(window_fraction * count);
        let delta = if delta == 0 && window_fraction != 0.0 {
            window_fraction.signum() as i64
        } else {
            delta
        };
        Self::pan(delta, current, len)
    }
}
