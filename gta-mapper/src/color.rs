//! Continuous diverging color scale over absolute temperatures.

use gta_data::{AnomalyRecord, DataError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 11-class RdBu diverging scheme, dark red through near-white to dark blue.
const RDBU_STOPS: [Rgb; 11] = [
    Rgb::new(0x67, 0x00, 0x1f),
    Rgb::new(0xb2, 0x18, 0x2b),
    Rgb::new(0xd6, 0x60, 0x4d),
    Rgb::new(0xf4, 0xa5, 0x82),
    Rgb::new(0xfd, 0xdb, 0xc7),
    Rgb::new(0xf7, 0xf7, 0xf7),
    Rgb::new(0xd1, 0xe5, 0xf0),
    Rgb::new(0x92, 0xc5, 0xde),
    Rgb::new(0x43, 0x93, 0xc3),
    Rgb::new(0x21, 0x66, 0xac),
    Rgb::new(0x05, 0x30, 0x61),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let channel = |x: u8, y: u8| -> u8 {
            (x as f64 + (y as f64 - x as f64) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
    }
}

/// CSS functional notation, e.g. `rgb(247, 247, 247)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Direction of the diverging ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Red for the coldest months, blue for the warmest
    RdBu,
    /// Blue for the coldest months, red for the warmest
    #[default]
    BuRd,
}

impl ColorScheme {
    /// Piecewise-linear interpolation across the scheme stops for `t` in
    /// `[0, 1]`. Values outside are clamped.
    pub fn interpolate(self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
        let t = match self {
            ColorScheme::RdBu => t,
            ColorScheme::BuRd => 1.0 - t,
        };
        let segments = (RDBU_STOPS.len() - 1) as f64;
        let position = t * segments;
        let i = (position.floor() as usize).min(RDBU_STOPS.len() - 2);
        Rgb::lerp(RDBU_STOPS[i], RDBU_STOPS[i + 1], position - i as f64)
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rdbu" => Ok(ColorScheme::RdBu),
            "burd" => Ok(ColorScheme::BuRd),
            other => Err(format!("unknown color scheme '{}' (expected rdbu or burd)", other)),
        }
    }
}

/// Maps an absolute temperature onto the diverging ramp. The domain midpoint
/// maps to the ramp midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorScale {
    min: f64,
    max: f64,
    scheme: ColorScheme,
}

impl ColorScale {
    pub fn new(min: f64, max: f64, scheme: ColorScheme) -> Self {
        Self { min, max, scheme }
    }

    /// Degenerate scale pinned to a single value; everything maps to the
    /// ramp midpoint.
    pub fn fallback(value: f64, scheme: ColorScheme) -> Self {
        Self::new(value, value, scheme)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Position of `value` in the domain as a fraction, `0.5` for a
    /// zero-width domain.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min {
            0.5
        } else {
            (value - self.min) / (self.max - self.min)
        }
    }

    pub fn color(&self, value: f64) -> Rgb {
        self.scheme.interpolate(self.normalize(value))
    }
}

/// Build the color scale from the min and max of `base + variance`.
pub fn compute_color_scale(
    records: &[AnomalyRecord],
    base_temperature: f64,
    scheme: ColorScheme,
) -> Result<ColorScale, DataError> {
    let (min, max) = records
        .iter()
        .map(|r| r.temperature(base_temperature))
        .fold(None, |acc: Option<(f64, f64)>, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })
        .ok_or(DataError::EmptyDataset)?;
    Ok(ColorScale::new(min, max, scheme))
}
