use gpui::*;

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub background: Hsla,
    pub panel_background: Hsla,
    pub grid_line: Hsla,
    pub axis_line: Hsla,
    pub axis_label: Hsla,
    pub axis_label_size: Pixels,
    pub series_colors: [Hsla; 2],
    pub current_marker: Hsla,
    /// Fallback for annotations without a palette color.
    pub annotation_marker: Hsla,
    pub marker_highlight: Hsla,
    pub crosshair_line: Hsla,
    pub tooltip_background: Hsla,
    pub tooltip_text: Hsla,
    pub accent: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: gpui::black(),
            panel_background: gpui::black().opacity(0.85),
            grid_line: gpui::white().alpha(0.1),
            axis_line: gpui::white().alpha(0.2),
            axis_label: gpui::white().alpha(0.8),
            axis_label_size: px(11.0),
            series_colors: [rgb(0x4e9af1).into(), rgb(0xf1a94e).into()],
            current_marker: gpui::white().alpha(0.9),
            annotation_marker: gpui::yellow(),
            marker_highlight: gpui::white(),
            crosshair_line: gpui::white().alpha(0.3),
            tooltip_background: gpui::black().alpha(0.8),
            tooltip_text: gpui::white(),
            accent: rgb(0x4e9af1).into(),
        }
    }
}
