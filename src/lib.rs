//! synced_charts: two vertically stacked GPUI time-series charts that share
//! one zoom/pan viewport and one set of draggable markers.

pub mod chart;
pub mod chart_container;
pub mod chart_view;
pub mod data_types;
pub mod gesture;
pub mod stats;
pub mod theme;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use chart::Chart;
pub use chart_container::ChartContainer;
pub use chart_view::{init, ChartView};
pub use data_types::{
    ChartCommand, ChartConfig, ChartState, Marker, MarkerId, SeriesSlot, Viewport, VisibleRange,
};
pub use gesture::{GestureResolver, GestureOutcome};
