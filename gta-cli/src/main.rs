//! GTA CLI - Command line tool for the global temperature anomaly heatmap.
//!
//! Subcommands:
//! - `render`: load the monthly variance dataset (from the reference URL,
//!   `--url`, or a local `--input` file), map it onto the heatmap and write
//!   an SVG chart, plus an HTML page with a hover tooltip when `--html` is
//!   given. Layout defaults can be overridden with `--config chart.json`
//!   and the ramp direction with `--scheme rdbu|burd`.
//! - `fetch`: download the dataset JSON once so later renders can run
//!   offline.
//!
//! Nothing is written when the dataset cannot be loaded. Set `RUST_LOG=info`
//! to see progress.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gta-cli",
    version,
    about = "Global temperature anomaly heatmap toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gta_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gta_cmd::run(cli.command).await
}
