//! Stacks the two chart views over one shared `Chart` and adds the control
//! strip, per-series statistics and the annotation list.

use crate::chart::Chart;
use crate::chart_view::ChartView;
use crate::data_types::{ChartCommand, MarkerId, SeriesSlot};
use crate::stats::SeriesStats;
use crate::theme::ChartTheme;
use gpui::prelude::*;
use gpui::*;

/// Zoom step used by the toolbar buttons, in slider units.
const ZOOM_BUTTON_STEP: f64 = 0.5;
/// Pan step used by the toolbar buttons, as a fraction of the pan range.
const PAN_BUTTON_STEP: f64 = 0.05;

pub struct ChartContainer {
    pub chart: Entity<Chart>,
    pub top: Entity<ChartView>,
    pub bottom: Entity<ChartView>,
}

impl ChartContainer {
    pub fn new(chart: Entity<Chart>, cx: &mut Context<Self>) -> Self {
        cx.observe(&chart, |_, _, cx| cx.notify()).detach();

        let top = cx.new(|cx| {
            ChartView::new(chart.clone(), SeriesSlot::First, cx)
                .with_title("Series 1")
                .with_x_axis(false)
        });
        let bottom = cx.new(|cx| {
            ChartView::new(chart.clone(), SeriesSlot::Second, cx).with_title("Series 2")
        });

        Self { chart, top, bottom }
    }

    fn dispatch_button(
        &self,
        label: &'static str,
        enabled: bool,
        theme: &ChartTheme,
        command: impl Fn(&Chart) -> ChartCommand + 'static,
    ) -> impl IntoElement {
        let chart = self.chart.clone();
        render_control_button(label, enabled, theme, move |_, _, cx| {
            cx.stop_propagation();
            chart.update(cx, |c, cx| {
                let command = command(c);
                c.dispatch(command, cx);
            });
        })
    }

    fn render_toolbar(&self, cx: &Context<Self>) -> impl IntoElement {
        let chart = self.chart.read(cx);
        let theme = &chart.theme;
        let viewport = chart.state.viewport();
        let zoom = *chart.state.zoom_settings();
        let range = chart.state.visible_range();

        div()
            .flex()
            .items_center()
            .gap_1()
            .p_1()
            .child(self.dispatch_button("−", viewport.zoom_factor > zoom.min, theme, |c| {
                ChartCommand::SetZoom(c.state.viewport().zoom_factor - ZOOM_BUTTON_STEP)
            }))
            .child(self.dispatch_button("+", viewport.zoom_factor < zoom.max, theme, |c| {
                ChartCommand::SetZoom(c.state.viewport().zoom_factor + ZOOM_BUTTON_STEP)
            }))
            .child(self.dispatch_button("◀", viewport.pan_fraction > 0.0, theme, |c| {
                ChartCommand::SetPan(c.state.viewport().pan_fraction - PAN_BUTTON_STEP)
            }))
            .child(self.dispatch_button("▶", viewport.pan_fraction < 1.0, theme, |c| {
                ChartCommand::SetPan(c.state.viewport().pan_fraction + PAN_BUTTON_STEP)
            }))
            .child(self.dispatch_button("⟲", true, theme, |_| ChartCommand::ResetView))
            .child(self.dispatch_button("＋A", true, theme, |_| ChartCommand::AnnotationAdded))
            .child(
                div()
                    .ml_2()
                    .text_size(px(11.0))
                    .text_color(theme.axis_label)
                    .child(format!(
                        "zoom {:.2}x  pan {:.2}  window [{}, {})  current #{}",
                        viewport.zoom_factor,
                        viewport.pan_fraction,
                        range.start,
                        range.end,
                        chart.state.markers().current().index
                    )),
            )
    }

    fn render_stats(&self, cx: &Context<Self>) -> impl IntoElement {
        let chart = self.chart.read(cx);
        let theme = &chart.theme;
        let row = |label: &str, slot: SeriesSlot| {
            let text = match SeriesStats::over(chart.state.visible_samples(slot)) {
                Some(s) => format!(
                    "{}  min {:.2}  max {:.2}  mean {:.2}  last {:.2}",
                    label, s.min, s.max, s.mean, s.last
                ),
                None => format!("{}  no data", label),
            };
            div()
                .text_size(px(11.0))
                .text_color(theme.axis_label)
                .child(text)
        };

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(row("Series 1", SeriesSlot::First))
            .child(row("Series 2", SeriesSlot::Second))
    }

    fn render_annotations(&self, cx: &Context<Self>) -> impl IntoElement {
        let chart = self.chart.read(cx);
        let theme = chart.theme.clone();
        let items: Vec<(MarkerId, usize, Hsla)> = chart
            .state
            .markers()
            .annotations()
            .iter()
            .map(|m| (m.id, m.index, m.color.unwrap_or(theme.annotation_marker)))
            .collect();

        let mut list = div().flex().flex_col().gap_1().child(
            div()
                .text_size(px(11.0))
                .text_color(theme.axis_label)
                .child(format!("Annotations ({})", items.len())),
        );

        for (id, index, color) in items {
            let chart_handle = self.chart.clone();
            list = list.child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(div().w_3().h_3().bg(color))
                    .child(
                        div()
                            .text_size(px(10.0))
                            .text_color(theme.axis_label)
                            .child(format!("{} @ {}", id, index)),
                    )
                    .child(render_control_button("✕", true, &theme, move |_, _, cx| {
                        cx.stop_propagation();
                        chart_handle.update(cx, |c, cx| {
                            c.dispatch(ChartCommand::AnnotationRemoved(id), cx);
                        });
                    })),
            );
        }
        list
    }
}

pub fn render_control_button(
    label: &'static str,
    enabled: bool,
    theme: &ChartTheme,
    on_click: impl Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
) -> impl IntoElement {
    div()
        .h_6()
        .min_w(px(24.0))
        .px_1()
        .flex()
        .items_center()
        .justify_center()
        .rounded_md()
        .text_size(px(12.0))
        .bg(theme.axis_label.opacity(0.05))
        .border_1()
        .border_color(theme.axis_label.opacity(0.1))
        .when(enabled, |d| {
            d.text_color(theme.axis_label)
                .hover(|s| s.bg(theme.accent.opacity(0.4)).border_color(theme.accent))
                .cursor_pointer()
                .on_mouse_down(MouseButton::Left, on_click)
        })
        .when(!enabled, |d| {
            d.text_color(theme.axis_label.opacity(0.2))
                .bg(gpui::transparent_black())
        })
        .child(label)
}

impl Render for ChartContainer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.chart.read(cx).theme.clone();

        div()
            .size_full()
            .flex()
            .bg(theme.background)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(self.render_toolbar(cx))
                    .child(div().flex_1().child(self.top.clone()))
                    .child(div().flex_1().child(self.bottom.clone())),
            )
            .child(
                div()
                    .w(px(260.0))
                    .p_2()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .bg(theme.panel_background)
                    .border_l_1()
                    .border_color(theme.axis_line)
                    .child(self.render_stats(cx))
                    .child(self.render_annotations(cx)),
            )
    }
}
