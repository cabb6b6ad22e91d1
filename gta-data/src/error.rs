use thiserror::Error;

/// Errors raised while loading or reducing an anomaly dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// The remote source could not be reached or answered with an error status
    #[error("dataset unavailable: {0}")]
    Unavailable(String),

    /// The payload was not the expected JSON shape
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading a local copy failed
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// No records to reduce over
    #[error("dataset contains no records")]
    EmptyDataset,
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        DataError::Unavailable(err.to_string())
    }
}

/// Type alias for Results using DataError
pub type Result<T> = std::result::Result<T, DataError>;
