pub mod actions;
pub mod input;
pub mod renderer;

use crate::chart::Chart;
use crate::data_types::SeriesSlot;
use crate::gesture::{DragKind, GestureResolver};
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

pub use actions::{AddAnnotation, PanLeft, PanRight, ResetView, ZoomIn, ZoomOut};

use self::actions::ChartActionHandler;
use self::input::ChartInputHandler;
use self::renderer::ChartRenderer;

/// Registers the default key bindings for chart actions.
pub fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("left", PanLeft, None),
        KeyBinding::new("right", PanRight, None),
        KeyBinding::new("+", ZoomIn, None),
        KeyBinding::new("=", ZoomIn, None),
        KeyBinding::new("-", ZoomOut, None),
        KeyBinding::new("0", ResetView, None),
        KeyBinding::new("a", AddAnnotation, None),
    ]);
}

/// One of the two stacked charts. Draws a single series from the shared
/// `Chart` and forwards pointer input to its own gesture resolver.
pub struct ChartView {
    pub chart: Entity<Chart>,

    // Components (Delegates)
    renderer: ChartRenderer,
    input: ChartInputHandler,
    actions: ChartActionHandler,

    focus_handle: FocusHandle,
}

impl Focusable for ChartView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl ChartView {
    pub fn new(chart: Entity<Chart>, slot: SeriesSlot, cx: &mut Context<Self>) -> Self {
        cx.observe(&chart, |_, _, cx| cx.notify()).detach();

        let plot_bounds = Rc::new(RefCell::new(Bounds::default()));

        Self {
            renderer: ChartRenderer::new(chart.clone(), slot, plot_bounds.clone()),
            input: ChartInputHandler::new(chart.clone(), plot_bounds),
            actions: ChartActionHandler::new(chart.clone()),
            chart,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn with_title(mut self, title: impl Into<SharedString>) -> Self {
        self.renderer.title = title.into();
        self
    }

    pub fn with_x_axis(mut self, show: bool) -> Self {
        self.renderer.show_x_axis = show;
        self
    }

    pub fn slot(&self) -> SeriesSlot {
        self.renderer.slot
    }

    pub fn gesture(&self) -> &GestureResolver {
        &self.input.gesture
    }

    /// Plot area from the last paint, in window coordinates.
    pub fn plot_bounds(&self) -> Bounds<Pixels> {
        *self.input.plot_bounds.borrow()
    }

    fn handle_mouse_down(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
        if self.input.handle_mouse_down(event, cx) {
            cx.notify();
        }
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if self.input.handle_mouse_move(event, cx) {
            cx.notify();
        }
    }

    fn handle_mouse_up(&mut self, event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if self.input.handle_mouse_up(event, cx) {
            cx.notify();
        }
    }

    fn handle_hover(&mut self, hovered: &bool, _window: &mut Window, cx: &mut Context<Self>) {
        if self.input.handle_hover(*hovered, cx) {
            cx.notify();
        }
    }

    fn handle_scroll_wheel(&mut self, event: &ScrollWheelEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if self.input.handle_scroll_wheel(event, cx) {
            cx.notify();
        }
    }
}

impl Render for ChartView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let hover = self.input.gesture.hover().copied();
        let panning = matches!(
            self.input.gesture.session().map(|s| s.kind),
            Some(DragKind::Pan)
        );
        let element = self.renderer.render(hover, panning, cx);

        let actions = self.actions.clone();
        let entity_id = cx.entity_id();

        element
            .id(("chart-view", entity_id))
            .track_focus(&self.focus_handle)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_hover(cx.listener(Self::handle_hover))
            .on_scroll_wheel(cx.listener(Self::handle_scroll_wheel))
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_pan_left(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_pan_right(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_zoom_in(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_zoom_out(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_reset_view(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_add_annotation(a, w, c)
            })
    }
}
