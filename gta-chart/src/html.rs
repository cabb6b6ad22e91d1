//! Standalone HTML page: the chart container, the tooltip element, and the
//! hover script that applies tooltip updates in a browser.

use crate::escape;
use crate::svg::render_svg;
use gta_mapper::tooltip::{self, TooltipState};
use gta_mapper::HeatmapModel;
use serde::Serialize;
use std::path::Path;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");

/// Element ids and title for the generated page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub container_id: String,
    pub tooltip_id: String,
    pub title: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            container_id: "heatmap".to_string(),
            tooltip_id: "tooltip".to_string(),
            title: "Monthly Global Land-Surface Temperature".to_string(),
        }
    }
}

/// Settings handed to the hover script.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TooltipScriptConfig<'a> {
    container_id: &'a str,
    tooltip_id: &'a str,
    opacity: f64,
    offset_x: f64,
    offset_y: f64,
    duration_ms: u32,
}

/// Render a full HTML page hosting the chart.
pub fn render_page(model: &HeatmapModel, options: &PageOptions) -> anyhow::Result<String> {
    let script_config = serde_json::to_string(&TooltipScriptConfig {
        container_id: &options.container_id,
        tooltip_id: &options.tooltip_id,
        opacity: tooltip::TOOLTIP_OPACITY,
        offset_x: tooltip::OFFSET_X,
        offset_y: tooltip::OFFSET_Y,
        duration_ms: tooltip::TRANSITION_MS,
    })?;

    let initial = TooltipState::hidden();
    let svg = render_svg(model);
    // the XML prolog is not valid inside an HTML body
    let svg = svg
        .split_once("?>\n")
        .map(|(_, body)| body)
        .unwrap_or(&svg);

    let (lo, hi) = model.color_scale.domain();
    let description = if model.cells.is_empty() {
        "No data available".to_string()
    } else {
        format!(
            "{} - {}: base temperature {}℃, range {:.1}℃ to {:.1}℃",
            model.years.iter().min().copied().unwrap_or_default(),
            model.years.iter().max().copied().unwrap_or_default(),
            model.base_temperature,
            lo,
            hi
        )
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ font-family: sans-serif; }}
  #{tooltip_id} {{ position: absolute; padding: 6px 8px; background: #fffbe6; border: 1px solid #999; border-radius: 4px; pointer-events: none; font-size: 12px; }}
</style>
</head>
<body>
<h1 id="title">{title}</h1>
<p id="description">{description}</p>
<div id="{container_id}">
{svg}</div>
<div id="{tooltip_id}" style="opacity: {opacity};"></div>
<script>window.__gtaTooltip = {script_config};</script>
<script>
{script}</script>
</body>
</html>
"#,
        title = escape(&options.title),
        description = escape(&description),
        container_id = escape(&options.container_id),
        tooltip_id = escape(&options.tooltip_id),
        opacity = initial.opacity,
        svg = svg,
        script_config = script_config,
        script = TOOLTIP_JS,
    ))
}

/// Render the page and write it to `path`.
pub fn write_page<P: AsRef<Path>>(
    model: &HeatmapModel,
    options: &PageOptions,
    path: P,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render_page(model, options)?)?;
    log::info!("Wrote HTML page to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gta_data::{AnomalyRecord, Dataset};
    use gta_mapper::ChartConfig;

    fn model(records: Vec<AnomalyRecord>) -> HeatmapModel {
        HeatmapModel::build(&Dataset::new(8.66, records), ChartConfig::default())
    }

    #[test]
    fn test_page_hosts_chart_and_hidden_tooltip() {
        let page = render_page(
            &model(vec![AnomalyRecord::new(1850, 1, -0.68)]),
            &PageOptions::default(),
        )
        .unwrap();
        assert!(page.contains(r#"<div id="heatmap">"#));
        assert!(page.contains(r#"<div id="tooltip" style="opacity: 0;"></div>"#));
        assert!(page.contains("<svg "));
        assert!(!page.contains("<?xml"));
        assert!(page.contains(r#""offsetX":10.0"#));
        assert!(page.contains(r#""offsetY":-28.0"#));
        assert!(page.contains(r#""durationMs":200"#));
    }

    #[test]
    fn test_custom_ids_reach_script_config() {
        let options = PageOptions {
            container_id: "chart".to_string(),
            tooltip_id: "tip".to_string(),
            ..PageOptions::default()
        };
        let page = render_page(&model(vec![AnomalyRecord::new(1850, 1, 0.0)]), &options).unwrap();
        assert!(page.contains(r#""containerId":"chart""#));
        assert!(page.contains(r#""tooltipId":"tip""#));
        assert!(page.contains(r#"<div id="tip""#));
    }

    #[test]
    fn test_empty_dataset_page() {
        let page = render_page(&model(Vec::new()), &PageOptions::default()).unwrap();
        assert!(page.contains("No data available"));
        assert!(!page.contains(r#"class="cell""#));
    }
}
