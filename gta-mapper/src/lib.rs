//! Data-to-visual mapping for the temperature anomaly heatmap.
//!
//! Turns a [`Dataset`] into everything the chart needs: axis domains and band
//! scales, the diverging color scale, one positioned cell per record, and the
//! discrete legend. Nothing here performs I/O.
//!
//! # Usage
//!
//! ```rust
//! use gta_data::{AnomalyRecord, Dataset};
//! use gta_mapper::{ChartConfig, HeatmapModel};
//!
//! let dataset = Dataset::new(8.66, vec![
//!     AnomalyRecord::new(1850, 1, -0.68),
//!     AnomalyRecord::new(1850, 2, 0.42),
//! ]);
//! let model = HeatmapModel::build(&dataset, ChartConfig::default());
//! assert_eq!(model.cells.len(), 2);
//! assert_eq!(model.legend.len(), 6);
//! ```

pub mod cell;
pub mod color;
pub mod config;
pub mod domain;
pub mod legend;
pub mod scale;
pub mod tooltip;

pub use cell::{cell_attributes, Cell, CellAttributes};
pub use color::{compute_color_scale, ColorScale, ColorScheme, Rgb};
pub use config::ChartConfig;
pub use domain::{month_domain, year_domain, year_ticks};
pub use legend::{legend_buckets, LegendBucket};
pub use scale::BandScale;
pub use tooltip::{on_hover, on_unhover, Pointer, TooltipState};

use gta_data::{Dataset, Month};
use log::{info, warn};

/// The fully mapped chart, computed once per dataset.
#[derive(Debug, Clone)]
pub struct HeatmapModel {
    pub config: ChartConfig,
    pub base_temperature: f64,
    pub years: Vec<i32>,
    pub x_scale: BandScale<i32>,
    pub y_scale: BandScale<Month>,
    pub x_ticks: Vec<i32>,
    pub color_scale: ColorScale,
    pub cells: Vec<Cell>,
    pub legend: Vec<LegendBucket>,
}

impl HeatmapModel {
    /// Map `dataset` onto the plot area described by `config`.
    ///
    /// An empty dataset still produces a model (axes and legend over a
    /// zero-width domain at the base temperature) with no cells.
    pub fn build(dataset: &Dataset, config: ChartConfig) -> HeatmapModel {
        let base = dataset.base_temperature;
        let years = year_domain(&dataset.records);

        let x_scale = BandScale::new(years.clone(), (0.0, config.inner_width()));
        let y_scale = BandScale::new(Month::ALL.to_vec(), (config.inner_height(), 0.0));
        let x_ticks = year_ticks(&years, config.x_tick_interval);

        let color_scale = match compute_color_scale(&dataset.records, base, config.scheme) {
            Ok(scale) => scale,
            Err(e) => {
                warn!("{}; falling back to a flat color scale at {}", e, base);
                ColorScale::fallback(base, config.scheme)
            }
        };

        let mut skipped = 0usize;
        let mut cells = Vec::with_capacity(dataset.records.len());
        for record in &dataset.records {
            let placed = cell_attributes(record, base, &color_scale).and_then(|attributes| {
                Some(Cell {
                    x: x_scale.position(&attributes.year)?,
                    y: y_scale.position(&attributes.month)?,
                    width: x_scale.bandwidth(),
                    height: y_scale.bandwidth(),
                    attributes,
                })
            });
            match placed {
                Some(cell) => cells.push(cell),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!("Skipped {} records with a month outside 1..=12", skipped);
        }

        let legend = legend_buckets(&color_scale, config.bucket_count);
        let (lo, hi) = color_scale.domain();
        info!(
            "Mapped {} cells over {} years, temperature domain {:.3}..{:.3}",
            cells.len(),
            years.len(),
            lo,
            hi
        );

        HeatmapModel {
            config,
            base_temperature: base,
            years,
            x_scale,
            y_scale,
            x_ticks,
            color_scale,
            cells,
            legend,
        }
    }
}
