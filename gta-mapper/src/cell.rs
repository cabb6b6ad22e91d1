//! Per-record visual attributes.

use crate::color::{ColorScale, Rgb};
use gta_data::{AnomalyRecord, Month};
use gta_utils::format;
use serde::Serialize;

/// Everything a heatmap cell shows about one record, independent of layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellAttributes {
    pub year: i32,
    pub month: Month,
    pub month_name: &'static str,
    /// Absolute temperature, `base + variance`
    pub temperature: f64,
    pub variance: f64,
    pub fill: Rgb,
    pub tooltip: String,
}

impl CellAttributes {
    /// Zero-based month, as exposed in the `data-month` attribute.
    pub fn month_index(&self) -> usize {
        self.month.index()
    }
}

/// A cell placed on the plot area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub attributes: CellAttributes,
}

/// `"<Month> <Year>\n<temperature>℃\n<variance>℃"`, both values to 2 decimals.
pub fn tooltip_text(month: Month, year: i32, temperature: f64, variance: f64) -> String {
    format!(
        "{} {}\n{}\n{}",
        month.name(),
        year,
        format::celsius(temperature),
        format::celsius(variance)
    )
}

/// Visual attributes for `record`. Returns `None` when the record's month
/// number is outside `1..=12`, since it has no row on the month axis.
pub fn cell_attributes(
    record: &AnomalyRecord,
    base_temperature: f64,
    color_scale: &ColorScale,
) -> Option<CellAttributes> {
    let month = record.calendar_month()?;
    let temperature = record.temperature(base_temperature);
    Some(CellAttributes {
        year: record.year,
        month,
        month_name: month.name(),
        temperature,
        variance: record.variance,
        fill: color_scale.color(temperature),
        tooltip: tooltip_text(month, record.year, temperature, record.variance),
    })
}
