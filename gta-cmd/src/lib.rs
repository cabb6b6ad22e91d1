//! Command implementations for GTA CLI.
//!
//! Provides subcommands for rendering the temperature anomaly heatmap and
//! for saving a local copy of the dataset.

use clap::Subcommand;
use gta_mapper::ColorScheme;

pub mod fetch;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Render the heatmap as SVG (and optionally an HTML page)
    Render {
        /// Output path for the SVG chart
        #[arg(short = 'o', long)]
        output: String,

        /// Also write an HTML page hosting the chart and tooltip
        #[arg(long)]
        html: Option<String>,

        /// Read the dataset from a local JSON file instead of fetching it
        #[arg(short = 'i', long, conflicts_with = "url")]
        input: Option<String>,

        /// Dataset URL (defaults to the freeCodeCamp reference data)
        #[arg(long)]
        url: Option<String>,

        /// JSON file overriding chart layout defaults
        #[arg(short = 'c', long)]
        config: Option<String>,

        /// Color ramp direction: burd (cold = blue) or rdbu (cold = red)
        #[arg(long)]
        scheme: Option<ColorScheme>,

        /// Page title for the HTML output
        #[arg(long)]
        title: Option<String>,
    },

    /// Download the dataset JSON for offline rendering
    Fetch {
        /// Output path for the dataset JSON
        #[arg(short = 'o', long)]
        output: String,

        /// Dataset URL (defaults to the freeCodeCamp reference data)
        #[arg(long)]
        url: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            output,
            html,
            input,
            url,
            config,
            scheme,
            title,
        } => {
            let source = match input {
                Some(path) => render::Source::File(path),
                None => render::Source::Url(url.unwrap_or_else(|| gta_data::DEFAULT_DATA_URL.to_string())),
            };
            let options = render::RenderOptions {
                output,
                html,
                config,
                scheme,
                title,
            };
            render::run_render(&source, &options).await
        }
        Command::Fetch { output, url } => {
            let url = url.unwrap_or_else(|| gta_data::DEFAULT_DATA_URL.to_string());
            fetch::run_fetch(&url, &output).await
        }
    }
}
