use gpui::{
    point, px, AppContext, Bounds, Entity, Modifiers, MouseButton, MouseDownEvent, Pixels,
    Point, ScrollDelta, ScrollWheelEvent, TestAppContext, VisualTestContext, WindowHandle,
};
use synced_charts::data_types::{ChartCommand, ChartConfig, ChartState, MarkerId, SeriesSlot};
use synced_charts::transform::IndexTransform;
use synced_charts::{Chart, ChartContainer, ChartView};

fn state() -> ChartState {
    let s1: Vec<f64> = (0..500).map(|i| i as f64).collect();
    let s2: Vec<f64> = (0..500).map(|i| -(i as f64)).collect();
    ChartState::new(s1, s2, ChartConfig::default()).unwrap()
}

#[gpui::test]
fn test_basic_chart_view(cx: &mut TestAppContext) {
    let chart = cx.update(|cx| cx.new(|_| Chart::new(state())));
    let window = cx.add_window(|_window, cx| ChartView::new(chart.clone(), SeriesSlot::Second, cx));

    window
        .update(cx, |view, _window, _cx| {
            assert_eq!(view.chart.entity_id(), chart.entity_id());
            assert_eq!(view.slot(), SeriesSlot::Second);
            assert!(view.gesture().is_idle());
        })
        .unwrap();
}

#[gpui::test]
fn test_container_views_share_one_chart(cx: &mut TestAppContext) {
    let chart = cx.update(|cx| cx.new(|_| Chart::new(state())));
    let window = cx.add_window(|_window, cx| ChartContainer::new(chart.clone(), cx));

    window
        .update(cx, |container, _window, cx| {
            let top = container.top.read(cx);
            let bottom = container.bottom.read(cx);
            assert_eq!(top.chart.entity_id(), chart.entity_id());
            assert_eq!(bottom.chart.entity_id(), chart.entity_id());
            assert_eq!(top.slot(), SeriesSlot::First);
            assert_eq!(bottom.slot(), SeriesSlot::Second);
        })
        .unwrap();
}

#[gpui::test]
fn test_dispatch_is_seen_by_both_views(cx: &mut TestAppContext) {
    let chart = cx.update(|cx| cx.new(|_| Chart::new(state())));
    let window = cx.add_window(|_window, cx| ChartContainer::new(chart.clone(), cx));

    cx.update(|cx| {
        chart.update(cx, |c, cx| {
            assert!(c.dispatch(ChartCommand::SetZoom(5.0), cx));
            assert!(c.dispatch(ChartCommand::SetPan(0.25), cx));
            assert!(c.dispatch(ChartCommand::AnnotationAdded, cx));
            assert!(!c.dispatch(ChartCommand::SetPan(0.25), cx));
        });
    });

    window
        .update(cx, |container, _window, cx| {
            let top = container.top.read(cx).chart.read(cx).state.visible_range();
            let bottom = container.bottom.read(cx).chart.read(cx).state.visible_range();
            assert_eq!(top, bottom);
            assert_eq!((top.start, top.end), (100, 200));
        })
        .unwrap();

    chart.read_with(cx, |c, _| {
        let annotation = &c.state.markers().annotations()[0];
        assert_eq!(annotation.index, 150);
        assert_eq!(annotation.id, MarkerId::Annotation(1));
    });
}

#[gpui::test]
fn test_reset_after_interaction(cx: &mut TestAppContext) {
    let chart = cx.update(|cx| cx.new(|_| Chart::new(state())));

    cx.update(|cx| {
        chart.update(cx, |c, cx| {
            c.dispatch_all(
                [
                    ChartCommand::ZoomRequested { wheel_delta: -1.0, cursor_index: 400.0 },
                    ChartCommand::PanRequested { index_delta: -30 },
                    ChartCommand::MarkerMoved { id: MarkerId::Current, index: 12 },
                ],
                cx,
            );
            c.dispatch(ChartCommand::ResetView, cx);
        });
    });

    chart.read_with(cx, |c, _| {
        let v = c.state.viewport();
        assert_eq!((v.zoom_factor, v.pan_fraction), (2.0, 0.5));
        assert_eq!(c.state.markers().current().index, 250);
    });
}

/// Opens one chart view and returns its plot bounds after the first paint.
fn open_view(
    cx: &mut TestAppContext,
) -> (Entity<Chart>, WindowHandle<ChartView>, Bounds<Pixels>) {
    let chart = cx.update(|cx| cx.new(|_| Chart::new(state())));
    let window = cx.add_window(|_window, cx| ChartView::new(chart.clone(), SeriesSlot::First, cx));
    cx.run_until_parked();

    let bounds = window
        .update(cx, |view, _window, _cx| view.plot_bounds())
        .unwrap();
    assert!(bounds.size.width > px(0.0) && bounds.size.height > px(0.0));
    (chart, window, bounds)
}

/// Window position of `index` in the plot, at mid height.
fn index_position(
    chart: &Entity<Chart>,
    bounds: Bounds<Pixels>,
    cx: &VisualTestContext,
) -> impl Fn(f64) -> Point<Pixels> {
    let (range, len) = chart.read_with(cx, |c, _| (c.state.visible_range(), c.state.len()));
    let transform = IndexTransform::from_bounds(bounds, range, len);
    let y = bounds.center().y;
    move |index| point(px(transform.index_to_pixel(index)), y)
}

fn zoom_factor(chart: &Entity<Chart>, cx: &VisualTestContext) -> f64 {
    chart.read_with(cx, |c, _| c.state.viewport().zoom_factor)
}

fn wheel_up(position: Point<Pixels>, modifiers: Modifiers) -> ScrollWheelEvent {
    ScrollWheelEvent {
        position,
        delta: ScrollDelta::Lines(point(0.0, 1.0)),
        modifiers,
        ..Default::default()
    }
}

#[gpui::test]
fn test_drag_current_marker(cx: &mut TestAppContext) {
    let (chart, window, bounds) = open_view(cx);
    let mut visual_cx = VisualTestContext::from_window(window.into(), cx);
    let at = index_position(&chart, bounds, &visual_cx);

    visual_cx.simulate_mouse_down(at(250.0), MouseButton::Left, Default::default());
    chart.read_with(&visual_cx, |c, _| {
        assert_eq!(c.state.dragging(), Some(MarkerId::Current));
    });

    visual_cx.simulate_mouse_move(at(300.0), Some(MouseButton::Left), Default::default());
    chart.read_with(&visual_cx, |c, _| {
        assert_eq!(c.state.markers().current().index, 300);
    });

    visual_cx.simulate_mouse_up(at(300.0), MouseButton::Left, Default::default());
    chart.read_with(&visual_cx, |c, _| {
        assert_eq!(c.state.dragging(), None);
        assert_eq!(c.state.markers().current().index, 300);
    });
}

#[gpui::test]
fn test_move_without_button_ends_drag(cx: &mut TestAppContext) {
    let (chart, window, bounds) = open_view(cx);
    let mut visual_cx = VisualTestContext::from_window(window.into(), cx);
    let at = index_position(&chart, bounds, &visual_cx);

    visual_cx.simulate_mouse_down(at(250.0), MouseButton::Left, Default::default());
    // Release happened outside the window; the next move carries no button
    visual_cx.simulate_mouse_move(at(200.0), None, Default::default());

    window
        .update(&mut visual_cx, |view, _window, _cx| {
            assert!(view.gesture().is_idle());
        })
        .unwrap();
    chart.read_with(&visual_cx, |c, _| {
        assert_eq!(c.state.dragging(), None);
        assert_eq!(c.state.markers().current().index, 250);
    });
}

#[gpui::test]
fn test_double_click_adds_annotation_at_center(cx: &mut TestAppContext) {
    let (chart, window, bounds) = open_view(cx);
    let mut visual_cx = VisualTestContext::from_window(window.into(), cx);
    let at = index_position(&chart, bounds, &visual_cx);

    visual_cx.simulate_event(MouseDownEvent {
        button: MouseButton::Left,
        position: at(150.0),
        click_count: 2,
        ..Default::default()
    });

    window
        .update(&mut visual_cx, |view, _window, _cx| {
            assert!(view.gesture().is_idle());
        })
        .unwrap();
    chart.read_with(&visual_cx, |c, _| {
        let annotations = c.state.markers().annotations();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].index, 250);
    });
}

#[gpui::test]
fn test_wheel_zooms_only_with_modifier(cx: &mut TestAppContext) {
    let (chart, window, bounds) = open_view(cx);
    let mut visual_cx = VisualTestContext::from_window(window.into(), cx);
    let at = index_position(&chart, bounds, &visual_cx);

    visual_cx.simulate_event(wheel_up(at(200.0), Modifiers::none()));
    assert_eq!(zoom_factor(&chart, &visual_cx), 2.0);

    // Wheel-up zooms in
    visual_cx.simulate_event(wheel_up(at(200.0), Modifiers::control()));
    assert!(zoom_factor(&chart, &visual_cx) > 2.0);
}

#[gpui::test]
fn test_pointer_outside_plot_is_ignored(cx: &mut TestAppContext) {
    let (chart, window, bounds) = open_view(cx);
    let mut visual_cx = VisualTestContext::from_window(window.into(), cx);
    let at = index_position(&chart, bounds, &visual_cx);

    // Title strip above the plot, horizontally over the current marker
    let title = point(at(250.0).x, bounds.origin.y - px(10.0));

    visual_cx.simulate_event(wheel_up(title, Modifiers::control()));
    assert_eq!(zoom_factor(&chart, &visual_cx), 2.0);

    visual_cx.simulate_mouse_move(title, None, Default::default());
    visual_cx.simulate_mouse_down(title, MouseButton::Left, Default::default());
    window
        .update(&mut visual_cx, |view, _window, _cx| {
            assert!(view.gesture().is_idle());
            assert!(view.gesture().hover().is_none());
        })
        .unwrap();
    chart.read_with(&visual_cx, |c, _| {
        assert_eq!(c.state.dragging(), None);
    });
}
