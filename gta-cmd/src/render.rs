//! Render the heatmap from a remote or local dataset.

use anyhow::Context;
use gta_chart::html::{write_page, PageOptions};
use gta_chart::svg::write_svg;
use gta_data::Dataset;
use gta_mapper::{ChartConfig, ColorScheme, HeatmapModel};
use log::{error, info};

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Url(String),
    File(String),
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub output: String,
    pub html: Option<String>,
    pub config: Option<String>,
    pub scheme: Option<ColorScheme>,
    pub title: Option<String>,
}

/// Load the dataset from `source`.
pub async fn load_dataset(source: &Source) -> anyhow::Result<Dataset> {
    let dataset = match source {
        Source::Url(url) => {
            let client = reqwest::Client::new();
            gta_data::fetch::fetch_dataset(&client, url)
                .await
                .with_context(|| format!("dataset unavailable from {}", url))?
        }
        Source::File(path) => {
            Dataset::from_path(path).with_context(|| format!("failed to load dataset from {}", path))?
        }
    };
    info!(
        "Loaded {} records, base temperature {}℃",
        dataset.len(),
        dataset.base_temperature
    );
    Ok(dataset)
}

/// Resolve the chart configuration: file overrides first, then the scheme flag.
pub fn load_config(options: &RenderOptions) -> anyhow::Result<ChartConfig> {
    let mut config = match &options.config {
        Some(path) => ChartConfig::from_path(path)
            .with_context(|| format!("failed to load chart config from {}", path))?,
        None => ChartConfig::default(),
    };
    if let Some(scheme) = options.scheme {
        config.scheme = scheme;
    }
    Ok(config)
}

/// Load the data, map it, and write the SVG (and HTML page if requested).
///
/// When the dataset cannot be loaded no output is written.
pub async fn run_render(source: &Source, options: &RenderOptions) -> anyhow::Result<()> {
    let config = load_config(options)?;

    let dataset = match load_dataset(source).await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("{:#}", e);
            return Err(e);
        }
    };

    let model = HeatmapModel::build(&dataset, config);
    write_svg(&model, &options.output)?;

    if let Some(html) = &options.html {
        let mut page = PageOptions::default();
        if let Some(title) = &options.title {
            page.title = title.clone();
        }
        write_page(&model, &page, html)?;
    }

    info!("Render complete. Output: {}", options.output);
    Ok(())
}
