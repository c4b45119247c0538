use crate::chart::Chart;
use crate::data_types::ChartCommand;
use gpui::*;

actions!(
    synced_charts,
    [
        PanLeft,
        PanRight,
        ZoomIn,
        ZoomOut,
        ResetView,
        AddAnnotation
    ]
);

#[derive(Clone)]
pub struct ChartActionHandler {
    pub chart: Entity<Chart>,
}

impl ChartActionHandler {
    pub fn new(chart: Entity<Chart>) -> Self {
        Self { chart }
    }

    fn zoom_at_center(&self, wheel_delta: f64, cx: &mut App) {
        self.chart.update(cx, |c, cx| {
            let range = c.state.visible_range();
            let cursor_index = (range.start + range.end) as f64 / 2.0;
            c.dispatch(
                ChartCommand::ZoomRequested {
                    wheel_delta,
                    cursor_index,
                },
                cx,
            );
        });
    }

    fn step_pan(&self, direction: f64, cx: &mut App) {
        self.chart.update(cx, |c, cx| {
            let step = c.state.config().keyboard_pan_step;
            c.dispatch(ChartCommand::StepPan(direction * step), cx);
        });
    }

    pub fn handle_pan_left(&self, _: &PanLeft, _win: &mut Window, cx: &mut App) {
        self.step_pan(-1.0, cx);
    }

    pub fn handle_pan_right(&self, _: &PanRight, _win: &mut Window, cx: &mut App) {
        self.step_pan(1.0, cx);
    }

    pub fn handle_zoom_in(&self, _: &ZoomIn, _win: &mut Window, cx: &mut App) {
        self.zoom_at_center(-1.0, cx);
    }

    pub fn handle_zoom_out(&self, _: &ZoomOut, _win: &mut Window, cx: &mut App) {
        self.zoom_at_center(1.0, cx);
    }

    pub fn handle_reset_view(&self, _: &ResetView, _win: &mut Window, cx: &mut App) {
        self.chart
            .update(cx, |c, cx| c.dispatch(ChartCommand::ResetView, cx));
    }

    pub fn handle_add_annotation(&self, _: &AddAnnotation, _win: &mut Window, cx: &mut App) {
        self.chart
            .update(cx, |c, cx| c.dispatch(ChartCommand::AnnotationAdded, cx));
    }
}
