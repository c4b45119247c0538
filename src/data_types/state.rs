use super::config::{ChartConfig, ZoomSettings};
use super::markers::{MarkerId, MarkerStore};
use super::viewport::{Viewport, VisibleRange};
use crate::view_controller::ViewController;
use eyre::{ensure, Result};
use gpui::Hsla;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Mutations of the shared chart state. Views and gestures never write the
/// state directly; they send one of these to [`ChartState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum ChartCommand {
    /// Wheel zoom anchored at a (fractional) data index.
    ZoomRequested { wheel_delta: f64, cursor_index: f64 },
    /// Drag pan by whole samples.
    PanRequested { index_delta: i64 },
    /// Pan by a fraction of the visible window.
    StepPan(f64),
    SetZoom(f64),
    SetPan(f64),
    MarkerMoved { id: MarkerId, index: usize },
    /// New annotation at the center of the visible window.
    AnnotationAdded,
    AnnotationRemoved(MarkerId),
    /// Restores the default viewport and current-position marker.
    ResetView,
    /// Marker currently grabbed by a drag session, for visual emphasis.
    DragStateChanged(Option<MarkerId>),
}

/// Which of the two series a view draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesSlot {
    First,
    Second,
}

/// Single source of truth for both charts: series, viewport and markers.
#[derive(Clone, Debug)]
pub struct ChartState {
    series: [Arc<[f64]>; 2],
    viewport: Viewport,
    markers: MarkerStore,
    palette: Vec<Hsla>,
    zoom: ZoomSettings,
    config: ChartConfig,
    dragging: Option<MarkerId>,
}

impl ChartState {
    pub fn new(series1: Vec<f64>, series2: Vec<f64>, config: ChartConfig) -> Result<Self> {
        ensure!(!series1.is_empty(), "series must contain at least one sample");
        ensure!(
            series1.len() == series2.len(),
            "series lengths differ: {} vs {}",
            series1.len(),
            series2.len()
        );
        config.validate()?;

        let len = series1.len();
        let zoom = config.zoom_settings();
        let viewport = Self::default_viewport(&config, &zoom);
        info!(len, ?viewport, "chart state created");

        Ok(Self {
            series: [series1.into(), series2.into()],
            viewport,
            markers: MarkerStore::new(len, len / 2),
            palette: config.palette_colors()?,
            zoom,
            config,
            dragging: None,
        })
    }

    fn default_viewport(config: &ChartConfig, zoom: &ZoomSettings) -> Viewport {
        if zoom.clamp(config.default_zoom) != config.default_zoom {
            warn!(
                default_zoom = config.default_zoom,
                "default zoom outside the zoom limits, clamping"
            );
        }
        Viewport::new(
            zoom.clamp(config.default_zoom),
            config.default_pan.clamp(0.0, 1.0),
        )
    }

    pub fn len(&self) -> usize {
        self.series[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn series(&self, slot: SeriesSlot) -> &Arc<[f64]> {
        match slot {
            SeriesSlot::First => &self.series[0],
            SeriesSlot::Second => &self.series[1],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.viewport.range(self.len())
    }

    pub fn markers(&self) -> &MarkerStore {
        &self.markers
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn zoom_settings(&self) -> &ZoomSettings {
        &self.zoom
    }

    pub fn dragging(&self) -> Option<MarkerId> {
        self.dragging
    }

    /// Visible samples of one series.
    pub fn visible_samples(&self, slot: SeriesSlot) -> &[f64] {
        let range = self.visible_range();
        let series = self.series(slot);
        &series[range.start.min(series.len())..range.end.min(series.len())]
    }

    /// Applies a command. Returns `true` if anything observable changed.
    pub fn apply(&mut self, command: ChartCommand) -> bool {
        trace!(?command, "applying chart command");
        let len = self.len();
        let changed = match command {
            ChartCommand::ZoomRequested {
                wheel_delta,
                cursor_index,
            } => self.store_viewport(ViewController::zoom(
                wheel_delta,
                cursor_index,
                self.viewport,
                len,
                &self.zoom,
            )),
            ChartCommand::PanRequested { index_delta } => {
                self.store_viewport(ViewController::pan(index_delta, self.viewport, len))
            }
            ChartCommand::StepPan(fraction) => {
                self.store_viewport(ViewController::step_pan(fraction, self.viewport, len))
            }
            ChartCommand::SetZoom(zoom) => {
                self.store_viewport(ViewController::set_zoom(zoom, self.viewport, &self.zoom))
            }
            ChartCommand::SetPan(pan) => {
                self.store_viewport(ViewController::set_pan(pan, self.viewport))
            }
            ChartCommand::MarkerMoved { id, index } => self.markers.set_index(id, index),
            ChartCommand::AnnotationAdded => {
                let center = self.visible_range().center();
                let id = self.markers.add_annotation(center, &self.palette);
                debug!(%id, index = center, "annotation added");
                true
            }
            ChartCommand::AnnotationRemoved(id) => {
                let removed = self.markers.remove_annotation(id);
                if removed && self.dragging == Some(id) {
                    self.dragging = None;
                }
                removed
            }
            ChartCommand::ResetView => {
                let viewport = Self::default_viewport(&self.config, &self.zoom);
                let moved = self.markers.set_index(MarkerId::Current, len / 2);
                let stored = self.store_viewport(viewport);
                info!(?viewport, "view reset");
                moved || stored
            }
            ChartCommand::DragStateChanged(id) => {
                let changed = self.dragging != id;
                self.dragging = id;
                changed
            }
        };
        if changed {
            debug!(viewport = ?self.viewport, "chart state updated");
        }
        changed
    }

    /// Clamps and stores a viewport produced by a controller.
    fn store_viewport(&mut self, viewport: Viewport) -> bool {
        let clamped = Viewport::new(
            self.zoom.clamp(viewport.zoom_factor),
            viewport.pan_fraction.clamp(0.0, 1.0),
        );
        if clamped == self.viewport {
            return false;
        }
        self.viewport = clamped;
        true
    }
}
