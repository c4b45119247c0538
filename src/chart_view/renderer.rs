use crate::chart::Chart;
use crate::data_types::{MarkerId, SeriesSlot, VisibleRange};
use crate::gesture::Hover;
use crate::stats::SeriesStats;
use crate::theme::ChartTheme;
use crate::transform::IndexTransform;
use crate::utils::PixelsExt;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

const Y_PADDING_PCT: f64 = 0.05;
const GRID_LINES: usize = 4;

/// Marker as handed to the paint pass.
#[derive(Clone, Copy, Debug)]
struct MarkerPaint {
    id: MarkerId,
    index: usize,
    color: Hsla,
    emphasized: bool,
}

pub struct ChartRenderer {
    pub chart: Entity<Chart>,
    pub slot: SeriesSlot,
    pub title: SharedString,
    pub show_x_axis: bool,

    // Plot bounds shared with the input handler
    pub plot_bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl ChartRenderer {
    pub fn new(chart: Entity<Chart>, slot: SeriesSlot, plot_bounds: Rc<RefCell<Bounds<Pixels>>>) -> Self {
        let title = match slot {
            SeriesSlot::First => "Series 1",
            SeriesSlot::Second => "Series 2",
        };
        Self {
            chart,
            slot,
            title: title.into(),
            show_x_axis: true,
            plot_bounds,
        }
    }

    /// Y domain for the visible samples with a small margin.
    fn y_domain(samples: &[f64]) -> (f64, f64) {
        match SeriesStats::over(samples) {
            Some(s) if (s.max - s.min).abs() > f64::EPSILON => {
                let pad = (s.max - s.min) * Y_PADDING_PCT;
                (s.min - pad, s.max + pad)
            }
            Some(s) => (s.min - 1.0, s.max + 1.0),
            None => (0.0, 1.0),
        }
    }

    pub fn render<V: 'static>(
        &self,
        hover: Option<Hover>,
        panning: bool,
        cx: &mut Context<V>,
    ) -> Div {
        let chart = self.chart.read(cx);
        let state = &chart.state;
        let theme = chart.theme.clone();
        let range = state.visible_range();
        let len = state.len();
        let samples: Vec<f64> = state.visible_samples(self.slot).to_vec();
        let (y_min, y_max) = Self::y_domain(&samples);
        let line_color = match self.slot {
            SeriesSlot::First => theme.series_colors[0],
            SeriesSlot::Second => theme.series_colors[1],
        };

        let dragging = state.dragging();
        let hovered_marker = hover.and_then(|h| h.marker);
        let markers: Vec<MarkerPaint> = state
            .markers()
            .iter()
            .map(|m| MarkerPaint {
                id: m.id,
                index: m.index,
                color: m.color.unwrap_or(if m.id.is_current() {
                    theme.current_marker
                } else {
                    theme.annotation_marker
                }),
                emphasized: dragging == Some(m.id) || hovered_marker == Some(m.id),
            })
            .collect();

        let tooltip = hover.map(|h| {
            let value = state.series(self.slot).get(h.index).copied();
            (h, value)
        });

        let cursor = if dragging.is_some() || hovered_marker.is_some() {
            CursorStyle::ResizeLeftRight
        } else if panning {
            CursorStyle::ClosedHand
        } else {
            CursorStyle::Crosshair
        };

        let plot_origin = self.plot_bounds.borrow().origin;
        let bounds_rc = self.plot_bounds.clone();
        let paint_theme = theme.clone();

        let plot = div()
            .flex_1()
            .relative()
            .cursor(cursor)
            .child(
                canvas(
                    |_bounds, _window, _cx| {},
                    move |bounds, (), window, _cx| {
                        *bounds_rc.borrow_mut() = bounds;
                        let transform = IndexTransform::from_bounds(bounds, range, len);
                        window.paint_quad(gpui::fill(bounds, paint_theme.background));
                        paint_grid(window, bounds, &paint_theme);
                        paint_series(window, bounds, &transform, range, &samples, (y_min, y_max), line_color);
                        paint_markers(window, bounds, &transform, range, &markers, &paint_theme);
                        if let Some(h) = hover {
                            paint_crosshair(window, bounds, h.pixel_x, &paint_theme);
                        }
                    },
                )
                .size_full(),
            )
            .child(axis_label(format!("{:.2}", y_max), &theme).top_1().right_1())
            .child(axis_label(format!("{:.2}", y_min), &theme).bottom_1().right_1())
            .when_some(tooltip, |d, (h, value)| {
                d.child(render_tooltip(h, value, plot_origin, &theme))
            });

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(theme.background)
            .border_1()
            .border_color(theme.axis_line)
            .child(
                div()
                    .h(px(20.0))
                    .px_2()
                    .flex()
                    .items_center()
                    .text_size(px(12.0))
                    .text_color(theme.axis_label)
                    .child(self.title.clone()),
            )
            .child(plot)
            .when(self.show_x_axis, |d| d.child(render_x_axis(range, &theme)))
    }
}

fn axis_label(text: String, theme: &ChartTheme) -> Div {
    div()
        .absolute()
        .px_1()
        .text_size(theme.axis_label_size)
        .text_color(theme.axis_label)
        .child(text)
}

fn render_x_axis(range: VisibleRange, theme: &ChartTheme) -> Div {
    let last = range.end.saturating_sub(1);
    div()
        .h(px(18.0))
        .px_1()
        .flex()
        .justify_between()
        .items_center()
        .text_size(theme.axis_label_size)
        .text_color(theme.axis_label)
        .child(format!("{}", range.start))
        .child(format!("{}", range.center()))
        .child(format!("{}", last))
}

fn render_tooltip(hover: Hover, value: Option<f64>, plot_origin: Point<Pixels>, theme: &ChartTheme) -> Div {
    let value = value.map_or_else(|| "-".to_string(), |v| format!("{:.3}", v));
    let label = match hover.marker {
        Some(id) => format!("{}  #{}  {}", id, hover.index, value),
        None => format!("#{}  {}", hover.index, value),
    };
    div()
        .absolute()
        .left(px(hover.pixel_x - plot_origin.x.as_f32() + 8.0))
        .top(px(hover.pixel_y - plot_origin.y.as_f32() + 8.0))
        .px_1()
        .rounded_sm()
        .bg(theme.tooltip_background)
        .text_size(px(10.0))
        .text_color(theme.tooltip_text)
        .child(label)
}

fn vertical_line(window: &mut Window, bounds: Bounds<Pixels>, x: f32, width: f32, color: Hsla) {
    let rect = Bounds::new(
        point(px(x - width / 2.0), bounds.origin.y),
        size(px(width), bounds.size.height),
    );
    window.paint_quad(gpui::fill(rect, color));
}

fn paint_grid(window: &mut Window, bounds: Bounds<Pixels>, theme: &ChartTheme) {
    let h = bounds.size.height.as_f32();
    for i in 1..GRID_LINES {
        let y = bounds.origin.y.as_f32() + h * i as f32 / GRID_LINES as f32;
        let rect = Bounds::new(point(bounds.origin.x, px(y)), size(bounds.size.width, px(1.0)));
        window.paint_quad(gpui::fill(rect, theme.grid_line));
    }
    let w = bounds.size.width.as_f32();
    for i in 1..GRID_LINES {
        let x = bounds.origin.x.as_f32() + w * i as f32 / GRID_LINES as f32;
        vertical_line(window, bounds, x, 1.0, theme.grid_line);
    }
}

fn paint_series(
    window: &mut Window,
    bounds: Bounds<Pixels>,
    transform: &IndexTransform,
    range: VisibleRange,
    samples: &[f64],
    (y_min, y_max): (f64, f64),
    color: Hsla,
) {
    let top = bounds.origin.y.as_f32();
    let height = bounds.size.height.as_f32();
    let span = y_max - y_min;

    let mut builder = PathBuilder::stroke(px(1.5));
    let mut first = true;
    let mut last_px_x = f32::MIN;
    let mut last_px_y = 0.0;

    for (offset, &value) in samples.iter().enumerate() {
        if !value.is_finite() {
            continue;
        }
        let px_x = transform.index_to_pixel((range.start + offset) as f64);
        let px_y = top + height - ((value - y_min) / span) as f32 * height;

        // Same X pixel: only draw if the Y change is visible
        if !first && (px_x - last_px_x).abs() < 0.5 && (px_y - last_px_y).abs() < 1.0 {
            continue;
        }

        let p = point(px(px_x), px(px_y));
        if first {
            builder.move_to(p);
            first = false;
        } else {
            builder.line_to(p);
        }
        last_px_x = px_x;
        last_px_y = px_y;
    }

    if let Ok(path) = builder.build() {
        window.paint_path(path, color);
    }
}

fn paint_markers(
    window: &mut Window,
    bounds: Bounds<Pixels>,
    transform: &IndexTransform,
    range: VisibleRange,
    markers: &[MarkerPaint],
    theme: &ChartTheme,
) {
    for marker in markers.iter().filter(|m| range.contains(m.index)) {
        let x = transform.index_to_pixel(marker.index as f64);
        let width = match (marker.id.is_current(), marker.emphasized) {
            (_, true) => 4.0,
            (true, false) => 2.0,
            (false, false) => 1.5,
        };
        if marker.emphasized {
            vertical_line(window, bounds, x, width + 2.0, theme.marker_highlight.opacity(0.4));
        }
        vertical_line(window, bounds, x, width, marker.color);
    }
}

fn paint_crosshair(window: &mut Window, bounds: Bounds<Pixels>, x: f32, theme: &ChartTheme) {
    vertical_line(window, bounds, x, 1.0, theme.crosshair_line);
}
