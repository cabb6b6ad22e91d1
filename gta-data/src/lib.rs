//! Core types for global land-surface temperature anomaly data.
//!
//! The dataset is a single JSON document with a base temperature and one
//! variance entry per month:
//!
//! ```json
//! { "baseTemperature": 8.66,
//!   "monthlyVariance": [ { "year": 1753, "month": 1, "variance": -1.366 } ] }
//! ```
//!
//! Enable the `api` feature to fetch it over HTTP.

pub mod dataset;
pub mod error;
#[cfg(feature = "api")]
pub mod fetch;
pub mod month;
pub mod record;

pub use dataset::Dataset;
pub use error::DataError;
pub use month::Month;
pub use record::AnomalyRecord;

/// Where the freeCodeCamp reference data lives.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";
