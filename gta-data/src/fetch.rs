//! HTTP retrieval of the anomaly dataset.
//!
//! A single GET with no retry and no timeout; callers decide what an
//! unavailable dataset means for them.

use crate::dataset::Dataset;
use crate::error::{DataError, Result};
use log::info;

/// Fetch the raw JSON body from `url`.
pub async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<String> {
    info!("Fetching dataset from {}", url);
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(DataError::Unavailable(format!(
            "{} answered {}",
            url,
            response.status()
        )));
    }

    let body = response.text().await?;
    info!("Received {} bytes", body.len());
    Ok(body)
}

/// Fetch and parse the dataset from `url`.
pub async fn fetch_dataset(client: &reqwest::Client, url: &str) -> Result<Dataset> {
    let body = fetch_json(client, url).await?;
    Dataset::from_json(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request on a loopback port and return its URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/global-temperature.json", addr)
    }

    fn client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    #[tokio::test]
    async fn test_error_status_is_unavailable() {
        let url = serve_once("404 Not Found", "").await;
        let result = fetch_json(&client(), &url).await;
        match result {
            Err(DataError::Unavailable(msg)) => assert!(msg.contains("404"), "{}", msg),
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_unavailable() {
        let result = fetch_json(&client(), "not a url").await;
        assert!(matches!(result, Err(DataError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_fetch_dataset_parses_body() {
        let url = serve_once(
            "200 OK",
            r#"{"baseTemperature":8.66,"monthlyVariance":[{"year":1850,"month":1,"variance":-0.68}]}"#,
        )
        .await;
        let dataset = fetch_dataset(&client(), &url).await.unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0].year, 1850);
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let url = serve_once("200 OK", "<html>oops</html>").await;
        let result = fetch_dataset(&client(), &url).await;
        assert!(matches!(result, Err(DataError::Parse(_))));
    }
}
