//! Save a local copy of the dataset.

use anyhow::Context;
use log::{info, warn};

/// Fetch the dataset from `url`, check that it parses, and write the raw
/// JSON to `output`. Nothing is written if the fetch or parse fails.
pub async fn run_fetch(url: &str, output: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let body = gta_data::fetch::fetch_json(&client, url)
        .await
        .with_context(|| format!("failed to fetch dataset from {}", url))?;

    let dataset = gta_data::Dataset::from_json(&body).context("fetched dataset is malformed")?;
    if let Err(e) = dataset.ensure_non_empty() {
        warn!("{}", e);
    }

    std::fs::write(output, &body).with_context(|| format!("failed to write {}", output))?;
    info!(
        "Saved {} records (base {}℃) to {}",
        dataset.len(),
        dataset.base_temperature,
        output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_fetch;

    #[tokio::test]
    async fn test_invalid_url_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("data.json");
        let result = run_fetch("not a url", &output.to_string_lossy()).await;
        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_unreachable_host_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("data.json");
        // port 9 (discard) on loopback refuses connections
        let result = run_fetch(
            "http://127.0.0.1:9/global-temperature.json",
            &output.to_string_lossy(),
        )
        .await;
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
