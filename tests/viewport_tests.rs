use quickcheck_macros::quickcheck;
use synced_charts::data_types::{
    max_start_index, start_index, visible_count, visible_range, Viewport, VisibleRange,
};
use synced_charts::transform::{clamp_index, pixel_to_index, IndexTransform};

fn zoom_from(z: u8) -> f64 {
    1.0 + (z as f64 / u8::MAX as f64) * 9.0
}

fn pan_from(p: u16) -> f64 {
    p as f64 / u16::MAX as f64
}

#[test]
fn test_default_window() {
    assert_eq!(visible_range(500, 2.0, 0.5), VisibleRange::new(125, 375));
}

#[test]
fn test_fully_zoomed_out_ignores_pan() {
    assert_eq!(visible_range(500, 1.0, 0.0), VisibleRange::new(0, 500));
    assert_eq!(visible_range(500, 1.0, 0.7), VisibleRange::new(0, 500));
    assert_eq!(visible_range(500, 1.0, 1.0), VisibleRange::new(0, 500));
}

#[test]
fn test_max_zoom_window() {
    let range = visible_range(500, 10.0, 1.0);
    assert_eq!(range.count(), 50);
    assert_eq!(range, VisibleRange::new(450, 500));
}

#[test]
fn test_visible_count_rounds_up() {
    // 500 / 2.4 = 208.33
    assert_eq!(visible_count(500, 2.4), 209);
    assert_eq!(visible_count(7, 2.0), 4);
}

#[test]
fn test_pan_fraction_reproduces_start() {
    for max_start in [1usize, 3, 250, 291, 450, 4999] {
        for start in 0..=max_start {
            let pan = start as f64 / max_start as f64;
            assert_eq!(start_index(pan, max_start), start, "max_start {max_start}");
        }
    }
}

#[test]
fn test_center() {
    let range = VisibleRange::new(100, 200);
    assert_eq!(range.center(), 150);
    assert!(range.contains(100));
    assert!(!range.contains(200));
}

#[test]
fn test_pixel_to_index() {
    assert_eq!(pixel_to_index(400.0, 0.0, 800.0, 100, 300), Some(200.0));
    assert_eq!(pixel_to_index(0.0, 0.0, 800.0, 100, 300), Some(100.0));
    // Extrapolates beyond the plot, callers clamp
    assert_eq!(pixel_to_index(-400.0, 0.0, 800.0, 100, 300), Some(0.0));
}

#[test]
fn test_pixel_to_index_unresolvable() {
    assert_eq!(pixel_to_index(10.0, 100.0, 100.0, 0, 50), None);
    assert_eq!(pixel_to_index(10.0, 100.0, 50.0, 0, 50), None);
    assert_eq!(pixel_to_index(f64::NAN, 0.0, 100.0, 0, 50), None);
}

#[test]
fn test_clamp_index() {
    assert_eq!(clamp_index(-25.0, 500), 0);
    assert_eq!(clamp_index(10_000.0, 500), 499);
    assert_eq!(clamp_index(41.5, 500), 42);
    assert_eq!(clamp_index(41.49, 500), 41);
}

#[test]
fn test_cross_chart_consistency() {
    let viewport = Viewport::new(3.7, 0.42);
    let top = viewport.range(500);
    let bottom = viewport.range(500);
    assert_eq!(top, bottom);

    // Charts of different pixel widths agree on the samples at their edges
    let a = IndexTransform::new(0.0, 640.0, top, 500);
    let b = IndexTransform::new(60.0, 1260.0, bottom, 500);
    assert_eq!(a.pixel_to_index(a.left), b.pixel_to_index(b.left));
    assert_eq!(a.pixel_to_index(a.right), b.pixel_to_index(b.right));
}

#[quickcheck]
fn visible_count_within_bounds(n: u16, z: u8) -> bool {
    let n = n as usize % 5000 + 1;
    let count = visible_count(n, zoom_from(z));
    (1..=n).contains(&count)
}

#[quickcheck]
fn start_index_within_bounds(n: u16, z: u8, p: u16) -> bool {
    let n = n as usize % 5000 + 1;
    let zoom = zoom_from(z);
    let range = visible_range(n, zoom, pan_from(p));
    let max_start = max_start_index(n, visible_count(n, zoom));
    range.start <= max_start && range.start <= range.end && range.end <= n
}

#[quickcheck]
fn identical_viewports_give_identical_windows(n: u16, z: u8, p: u16) -> bool {
    let n = n as usize % 5000 + 1;
    let viewport = Viewport::new(zoom_from(z), pan_from(p));
    viewport.range(n) == Viewport::new(viewport.zoom_factor, viewport.pan_fraction).range(n)
}
