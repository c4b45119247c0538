//! Pointer gesture resolution for one chart view.
//!
//! The resolver classifies raw pointer input into marker drags, pans, zooms
//! and annotation requests. It never touches the shared state itself: it
//! returns [`ChartCommand`]s for the owning view to dispatch.

use crate::data_types::{ChartCommand, MarkerId, MarkerStore};
use crate::transform::{clamp_index, IndexTransform};
use crate::view_controller::ViewController;
use tracing::{debug, trace};

/// What the resolver needs to know about the chart for one event.
#[derive(Clone, Copy, Debug)]
pub struct GestureContext<'a> {
    pub transform: IndexTransform,
    pub markers: &'a MarkerStore,
    /// Marker grab distance in data-index units.
    pub hit_tolerance: f64,
}

impl GestureContext<'_> {
    fn data_x(&self, pixel_x: f32) -> Option<f64> {
        self.transform.pixel_to_index(pixel_x)
    }

    /// Like `data_x`, but only for pointers over the plotted area.
    fn plot_data_x(&self, pixel_x: f32) -> Option<f64> {
        self.data_x(pixel_x).filter(|_| self.transform.contains_x(pixel_x))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragKind {
    Marker(MarkerId),
    Pan,
}

/// The in-progress drag. At most one exists per resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub kind: DragKind,
    /// Pixel X the next pan delta is measured from.
    pub anchor_pixel_x: f32,
}

/// Hover information for tooltips and cursor affordance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    pub index: usize,
    pub marker: Option<MarkerId>,
    pub pixel_x: f32,
    pub pixel_y: f32,
}

/// Result of feeding one event to the resolver.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureOutcome {
    /// Commands for the shared chart state, in order.
    pub commands: Vec<ChartCommand>,
    /// The view's local gesture state (session or hover) changed.
    pub redraw: bool,
}

impl GestureOutcome {
    fn command(command: ChartCommand) -> Self {
        Self {
            commands: vec![command],
            redraw: true,
        }
    }

    fn redraw() -> Self {
        Self {
            commands: vec![],
            redraw: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && !self.redraw
    }
}

/// `Idle -> (MarkerDrag | Panning) -> Idle` state machine.
#[derive(Clone, Debug, Default)]
pub struct GestureResolver {
    session: Option<DragSession>,
    hover: Option<Hover>,
}

impl GestureResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn hover(&self) -> Option<&Hover> {
        self.hover.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    /// Starts a marker drag or a pan. Presses outside the plot are ignored.
    pub fn pointer_down(&mut self, pixel_x: f32, cx: &GestureContext) -> GestureOutcome {
        let Some(data_x) = cx.plot_data_x(pixel_x) else {
            return GestureOutcome::default();
        };

        match cx.markers.hit_test(data_x, cx.hit_tolerance) {
            Some(id) => {
                debug!(%id, data_x, "marker drag started");
                self.session = Some(DragSession {
                    kind: DragKind::Marker(id),
                    anchor_pixel_x: pixel_x,
                });
                GestureOutcome::command(ChartCommand::DragStateChanged(Some(id)))
            }
            None => {
                debug!(pixel_x, "pan started");
                self.session = Some(DragSession {
                    kind: DragKind::Pan,
                    anchor_pixel_x: pixel_x,
                });
                GestureOutcome::redraw()
            }
        }
    }

    pub fn pointer_move(&mut self, pixel_x: f32, pixel_y: f32, cx: &GestureContext) -> GestureOutcome {
        match self.session {
            Some(DragSession {
                kind: DragKind::Marker(id),
                ..
            }) => {
                let Some(data_x) = cx.data_x(pixel_x) else {
                    return GestureOutcome::default();
                };
                let index = clamp_index(data_x, cx.transform.len);
                trace!(%id, index, "marker dragged");
                GestureOutcome {
                    commands: vec![ChartCommand::MarkerMoved { id, index }],
                    redraw: false,
                }
            }
            Some(DragSession {
                kind: DragKind::Pan,
                anchor_pixel_x,
            }) => self.pan_move(pixel_x, anchor_pixel_x, cx),
            None => self.hover_move(pixel_x, pixel_y, cx),
        }
    }

    fn pan_move(&mut self, pixel_x: f32, anchor_pixel_x: f32, cx: &GestureContext) -> GestureOutcome {
        let visible = cx.transform.range.count();
        let width = cx.transform.width();
        let delta = ViewController::pixel_delta_to_index_delta(pixel_x - anchor_pixel_x, width, visible);
        if delta == 0 {
            return GestureOutcome::default();
        }

        // Advance the anchor by the pixels this delta accounts for, so the
        // sub-sample remainder carries into the next move.
        let consumed = -(delta as f32) * ViewController::pixels_per_index(width, visible);
        if let Some(session) = self.session.as_mut() {
            session.anchor_pixel_x = anchor_pixel_x + consumed;
        }
        trace!(delta, "pan moved");
        GestureOutcome {
            commands: vec![ChartCommand::PanRequested { index_delta: delta }],
            redraw: false,
        }
    }

    fn hover_move(&mut self, pixel_x: f32, pixel_y: f32, cx: &GestureContext) -> GestureOutcome {
        let hover = cx.plot_data_x(pixel_x).map(|data_x| Hover {
                index: clamp_index(data_x, cx.transform.len),
                marker: cx.markers.hit_test(data_x, cx.hit_tolerance),
                pixel_x,
                pixel_y,
            });
        if hover == self.hover {
            return GestureOutcome::default();
        }
        self.hover = hover;
        GestureOutcome::redraw()
    }

    /// Ends any session and clears hover. Used for both pointer-up and
    /// pointer-leave.
    pub fn pointer_up(&mut self) -> GestureOutcome {
        let session = self.session.take();
        let had_hover = self.hover.take().is_some();
        match session {
            Some(DragSession {
                kind: DragKind::Marker(id),
                ..
            }) => {
                debug!(%id, "marker drag ended");
                GestureOutcome::command(ChartCommand::DragStateChanged(None))
            }
            Some(_) => {
                debug!("pan ended");
                GestureOutcome::redraw()
            }
            None if had_hover => GestureOutcome::redraw(),
            None => GestureOutcome::default(),
        }
    }

    pub fn pointer_leave(&mut self) -> GestureOutcome {
        self.pointer_up()
    }

    /// Double-click adds an annotation at the viewport center, whatever the
    /// drag state.
    pub fn double_click(&self) -> GestureOutcome {
        GestureOutcome::command(ChartCommand::AnnotationAdded)
    }

    /// Wheel zoom, only while the zoom modifier is held and the pointer is
    /// over the plot.
    pub fn wheel(
        &self,
        wheel_delta: f64,
        modifier_held: bool,
        pixel_x: f32,
        cx: &GestureContext,
    ) -> GestureOutcome {
        if !modifier_held || wheel_delta == 0.0 {
            return GestureOutcome::default();
        }
        match cx.plot_data_x(pixel_x) {
            Some(cursor_index) => GestureOutcome {
                commands: vec![ChartCommand::ZoomRequested {
                    wheel_delta,
                    cursor_index,
                }],
                redraw: false,
            },
            None => GestureOutcome::default(),
        }
    }
}
