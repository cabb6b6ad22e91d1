//! Standalone SVG document for a [`HeatmapModel`].
//!
//! Cells are `<rect class="cell">` elements carrying `data-year`,
//! zero-based `data-month` and `data-temp`, so external tooling can query
//! them. Each cell also has a `<title>` child with its tooltip text, which
//! plain SVG viewers show on hover.

use crate::axis::{axis_bottom, axis_left, Tick};
use crate::escape;
use gta_mapper::{Cell, HeatmapModel};
use gta_utils::format::coord;
use std::path::Path;

/// Render `model` as a complete SVG document.
pub fn render_svg(model: &HeatmapModel) -> String {
    let mut svg = SvgBuilder::new(model);
    svg.add_axes();
    svg.add_cells();
    svg.add_legend();
    svg.finish()
}

/// Render `model` and write it to `path`.
pub fn write_svg<P: AsRef<Path>>(model: &HeatmapModel, path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render_svg(model))?;
    log::info!("Wrote SVG chart to {}", path.display());
    Ok(())
}

struct SvgBuilder<'a> {
    model: &'a HeatmapModel,
    elements: Vec<String>,
}

impl<'a> SvgBuilder<'a> {
    fn new(model: &'a HeatmapModel) -> Self {
        Self {
            model,
            elements: Vec::new(),
        }
    }

    fn add_axes(&mut self) {
        let config = &self.model.config;

        let x_ticks: Vec<Tick> = self
            .model
            .x_ticks
            .iter()
            .filter_map(|year| {
                self.model
                    .x_scale
                    .center(year)
                    .map(|x| Tick::new(x, year.to_string()))
            })
            .collect();
        self.elements.extend(axis_bottom(
            "x-axis",
            config.inner_height(),
            config.inner_width(),
            &x_ticks,
        ));

        let y_ticks: Vec<Tick> = self
            .model
            .y_scale
            .domain()
            .iter()
            .filter_map(|month| {
                self.model
                    .y_scale
                    .center(month)
                    .map(|y| Tick::new(y, month.name()))
            })
            .collect();
        self.elements
            .extend(axis_left("y-axis", config.inner_height(), &y_ticks));
    }

    fn add_cells(&mut self) {
        for cell in &self.model.cells {
            self.elements.push(cell_element(cell));
        }
    }

    fn add_legend(&mut self) {
        let config = &self.model.config;
        let (x, y) = config.legend_origin();
        let size = config.legend_swatch_size;

        self.elements.push(format!(
            r#"<g id="legend" transform="translate({},{})">"#,
            coord(x),
            coord(y)
        ));
        for (i, bucket) in self.model.legend.iter().enumerate() {
            self.elements.push(format!(
                r#"  <rect x="0" y="{}" width="{s}" height="{s}" fill="{}"/>"#,
                coord(i as f64 * size),
                bucket.color,
                s = coord(size)
            ));
        }
        for (i, bucket) in self.model.legend.iter().enumerate() {
            self.elements.push(format!(
                r#"  <text x="{}" y="{}" font-size="12" font-family="sans-serif">{}</text>"#,
                coord(size + 10.0),
                coord(i as f64 * size + 14.0),
                escape(&bucket.label())
            ));
        }
        self.elements.push("</g>".to_string());
    }

    fn finish(self) -> String {
        let config = &self.model.config;
        let mut out = String::new();
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        out.push('\n');
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = coord(config.width),
            h = coord(config.height)
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<g transform="translate({},{})">"#,
            coord(config.margin_left),
            coord(config.margin_top)
        ));
        out.push('\n');
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</g>\n</svg>\n");
        out
    }
}

fn cell_element(cell: &Cell) -> String {
    let attrs = &cell.attributes;
    format!(
        r#"<rect class="cell" x="{}" y="{}" width="{}" height="{}" data-year="{}" data-month="{}" data-temp="{}" fill="{}"><title>{}</title></rect>"#,
        coord(cell.x),
        coord(cell.y),
        coord(cell.width),
        coord(cell.height),
        attrs.year,
        attrs.month_index(),
        attrs.temperature,
        attrs.fill,
        escape(&attrs.tooltip)
    )
}
