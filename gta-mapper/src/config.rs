//! Chart layout configuration.
//!
//! Every field has a default matching the reference chart, so a JSON config
//! file only needs the fields it wants to change:
//!
//! ```json
//! { "width": 1200, "bucket_count": 8, "scheme": "rdbu" }
//! ```

use crate::color::ColorScheme;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    /// Outer SVG width, margins included
    pub width: f64,
    /// Outer SVG height, margins included
    pub height: f64,
    /// Number of legend entries
    pub bucket_count: usize,
    /// Label every Nth year on the x-axis (years divisible by this value)
    pub x_tick_interval: i32,
    /// Distance of the legend from the right edge of the plot area
    pub legend_offset_right: f64,
    pub legend_top: f64,
    pub legend_swatch_size: f64,
    pub scheme: ColorScheme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin_top: 50.0,
            margin_right: 50.0,
            margin_bottom: 50.0,
            margin_left: 100.0,
            width: 800.0,
            height: 500.0,
            bucket_count: 6,
            x_tick_interval: 10,
            legend_offset_right: 150.0,
            legend_top: 20.0,
            legend_swatch_size: 20.0,
            scheme: ColorScheme::default(),
        }
    }
}

impl ChartConfig {
    /// Width of the plot area between the left and right margins.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    /// Height of the plot area between the top and bottom margins.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    /// Top-left corner of the legend, relative to the plot area.
    pub fn legend_origin(&self) -> (f64, f64) {
        (self.inner_width() - self.legend_offset_right, self.legend_top)
    }

    pub fn from_json(json: &str) -> anyhow::Result<ChartConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<ChartConfig> {
        let body = std::fs::read_to_string(path)?;
        ChartConfig::from_json(&body)
    }
}
