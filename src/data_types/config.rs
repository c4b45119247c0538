use eyre::{ensure, Result, WrapErr};
use gpui::Hsla;
use serde::{Deserialize, Serialize};

/// Annotation palette, cycled by creation order.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6", "#bfef45",
];

/// Zoom limits and wheel step factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomSettings {
    pub min: f64,
    pub max: f64,
    pub in_step: f64,
    pub out_step: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 10.0,
            in_step: 1.2,
            out_step: 0.8,
        }
    }
}

impl ZoomSettings {
    pub fn clamp(&self, zoom_factor: f64) -> f64 {
        zoom_factor.clamp(self.min, self.max)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_in_step: f64,
    pub zoom_out_step: f64,
    pub default_zoom: f64,
    pub default_pan: f64,
    /// Marker grab distance, in data-index units.
    pub hit_tolerance: f64,
    /// Keyboard pan step as a fraction of the visible window.
    pub keyboard_pan_step: f64,
    pub palette: Vec<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let zoom = ZoomSettings::default();
        Self {
            zoom_min: zoom.min,
            zoom_max: zoom.max,
            zoom_in_step: zoom.in_step,
            zoom_out_step: zoom.out_step,
            default_zoom: 2.0,
            default_pan: 0.5,
            hit_tolerance: 10.0,
            keyboard_pan_step: 0.1,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ChartConfig {
    /// Parses a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse chart configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.zoom_min >= 1.0,
            "zoom_min must be at least 1, got {}",
            self.zoom_min
        );
        ensure!(
            self.zoom_max >= self.zoom_min,
            "zoom_max ({}) is below zoom_min ({})",
            self.zoom_max,
            self.zoom_min
        );
        ensure!(
            self.zoom_in_step > 1.0,
            "zoom_in_step must be greater than 1, got {}",
            self.zoom_in_step
        );
        ensure!(
            self.zoom_out_step > 0.0 && self.zoom_out_step < 1.0,
            "zoom_out_step must be in (0, 1), got {}",
            self.zoom_out_step
        );
        ensure!(
            (0.0..=1.0).contains(&self.default_pan),
            "default_pan must be in [0, 1], got {}",
            self.default_pan
        );
        ensure!(
            self.hit_tolerance > 0.0,
            "hit_tolerance must be positive, got {}",
            self.hit_tolerance
        );
        ensure!(!self.palette.is_empty(), "annotation palette is empty");
        self.palette_colors()?;
        Ok(())
    }

    pub fn zoom_settings(&self) -> ZoomSettings {
        ZoomSettings {
            min: self.zoom_min,
            max: self.zoom_max,
            in_step: self.zoom_in_step,
            out_step: self.zoom_out_step,
        }
    }

    pub fn palette_colors(&self) -> Result<Vec<Hsla>> {
        self.palette.iter().map(|c| parse_hex_color(c)).collect()
    }
}

/// Parses `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_color(hex: &str) -> Result<Hsla> {
    let digits = hex.trim().trim_start_matches('#');
    ensure!(
        digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        "color {:?} is not in #rrggbb form",
        hex
    );
    let value = u32::from_str_radix(digits, 16)
        .wrap_err_with(|| format!("color {:?} is not valid hex", hex))?;
    Ok(gpui::rgb(value).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ChartConfig::default();
        config.validate().unwrap();
        assert_eq!(config.palette_colors().unwrap().len(), 8);
    }

    #[test]
    fn hex_colors_parse() {
        assert!(parse_hex_color("#ffffff").is_ok());
        assert!(parse_hex_color("00ff00").is_ok());
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gggggg").is_err());
        assert!(parse_hex_color("+12345").is_err());
        assert!(parse_hex_color("#-12345").is_err());
    }
}
