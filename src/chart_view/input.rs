use crate::chart::Chart;
use crate::data_types::ChartState;
use crate::gesture::{GestureContext, GestureOutcome, GestureResolver};
use crate::transform::IndexTransform;
use crate::utils::PixelsExt;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Translates GPUI pointer events into gesture-resolver input and dispatches
/// the resulting commands to the shared `Chart`.
///
/// Every handler returns `true` when the owning view must repaint for its
/// local state (hover, drag affordance); shared-state changes notify through
/// the `Chart` entity instead.
pub struct ChartInputHandler {
    pub chart: Entity<Chart>,
    pub gesture: GestureResolver,

    // Shared with the renderer, written during paint
    pub plot_bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl ChartInputHandler {
    pub fn new(chart: Entity<Chart>, plot_bounds: Rc<RefCell<Bounds<Pixels>>>) -> Self {
        Self {
            chart,
            gesture: GestureResolver::new(),
            plot_bounds,
        }
    }

    fn transform(&self, state: &ChartState) -> IndexTransform {
        IndexTransform::from_bounds(*self.plot_bounds.borrow(), state.visible_range(), state.len())
    }

    fn context<'a>(&self, state: &'a ChartState) -> GestureContext<'a> {
        GestureContext {
            transform: self.transform(state),
            markers: state.markers(),
            hit_tolerance: state.config().hit_tolerance,
        }
    }

    fn in_plot(&self, position: Point<Pixels>) -> bool {
        self.plot_bounds.borrow().contains(&position)
    }

    fn dispatch(&self, outcome: GestureOutcome, cx: &mut App) -> bool {
        if !outcome.commands.is_empty() {
            self.chart
                .update(cx, |c, cx| c.dispatch_all(outcome.commands, cx));
        }
        outcome.redraw
    }

    pub fn handle_mouse_down(&mut self, event: &MouseDownEvent, cx: &mut App) -> bool {
        // Title and axis strips belong to the view but not to the plot.
        if !self.in_plot(event.position) {
            return false;
        }
        if event.click_count >= 2 {
            let ended = self.gesture.pointer_up();
            let added = self.gesture.double_click();
            debug!("double click, adding annotation");
            let redraw = self.dispatch(ended, cx);
            return self.dispatch(added, cx) || redraw;
        }

        let outcome = {
            let chart = self.chart.read(cx);
            let ctx = self.context(&chart.state);
            self.gesture.pointer_down(event.position.x.as_f32(), &ctx)
        };
        self.dispatch(outcome, cx)
    }

    pub fn handle_mouse_move(&mut self, event: &MouseMoveEvent, cx: &mut App) -> bool {
        // Button released somewhere we did not see: end the session.
        if !self.gesture.is_idle() && event.pressed_button != Some(MouseButton::Left) {
            let outcome = self.gesture.pointer_up();
            return self.dispatch(outcome, cx);
        }
        // Drags keep resolving outside the plot; hover does not.
        if self.gesture.is_idle() && !self.in_plot(event.position) {
            let outcome = self.gesture.pointer_leave();
            return self.dispatch(outcome, cx);
        }

        let outcome = {
            let chart = self.chart.read(cx);
            let ctx = self.context(&chart.state);
            self.gesture
                .pointer_move(event.position.x.as_f32(), event.position.y.as_f32(), &ctx)
        };
        self.dispatch(outcome, cx)
    }

    pub fn handle_mouse_up(&mut self, _event: &MouseUpEvent, cx: &mut App) -> bool {
        let outcome = self.gesture.pointer_up();
        self.dispatch(outcome, cx)
    }

    pub fn handle_hover(&mut self, hovered: bool, cx: &mut App) -> bool {
        if hovered {
            return false;
        }
        let outcome = self.gesture.pointer_leave();
        self.dispatch(outcome, cx)
    }

    pub fn handle_scroll_wheel(&mut self, event: &ScrollWheelEvent, cx: &mut App) -> bool {
        if !self.in_plot(event.position) {
            return false;
        }
        let modifier = event.modifiers.control || event.modifiers.platform;
        let delta_y = match event.delta {
            ScrollDelta::Pixels(p) => p.y.as_f32(),
            ScrollDelta::Lines(p) => p.y * 20.0,
        };
        // GPUI reports wheel-up as positive, the zoom controller wants
        // negative for zoom-in.
        let wheel_delta = -(delta_y as f64);

        let outcome = {
            let chart = self.chart.read(cx);
            let ctx = self.context(&chart.state);
            self.gesture
                .wheel(wheel_delta, modifier, event.position.x.as_f32(), &ctx)
        };
        if modifier {
            cx.stop_propagation();
        }
        self.dispatch(outcome, cx)
    }
}
