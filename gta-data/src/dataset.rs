use crate::error::{DataError, Result};
use crate::record::AnomalyRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The full anomaly dataset: a base temperature and the monthly records in
/// source order.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "baseTemperature")]
    pub base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    pub records: Vec<AnomalyRecord>,
}

impl Dataset {
    pub fn new(base_temperature: f64, records: Vec<AnomalyRecord>) -> Self {
        Self {
            base_temperature,
            records,
        }
    }

    /// Parse the JSON document served by the data source.
    pub fn from_json(json: &str) -> Result<Dataset> {
        let dataset: Dataset = serde_json::from_str(json)?;
        log::debug!(
            "Parsed dataset: base {} with {} records",
            dataset.base_temperature,
            dataset.records.len()
        );
        Ok(dataset)
    }

    /// Read and parse a local copy of the dataset.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let body = std::fs::read_to_string(path)?;
        Dataset::from_json(&body)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Fails with [`DataError::EmptyDataset`] when there is nothing to chart.
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(DataError::EmptyDataset)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;
    use crate::error::DataError;
    use crate::record::AnomalyRecord;

    #[test]
    fn test_parse_source_document() {
        let json = r#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                {"year": 1753, "month": 1, "variance": -1.366},
                {"year": 1753, "month": 2, "variance": -2.223}
            ]
        }"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert!((dataset.base_temperature - 8.66).abs() < f64::EPSILON);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[1], AnomalyRecord::new(1753, 2, -2.223));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let result = Dataset::from_json(r#"{"baseTemperature": "warm"}"#);
        assert!(matches!(result, Err(DataError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Dataset::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[test]
    fn test_ensure_non_empty() {
        let empty = Dataset::new(8.66, Vec::new());
        assert!(matches!(empty.ensure_non_empty(), Err(DataError::EmptyDataset)));

        let one = Dataset::new(8.66, vec![AnomalyRecord::new(1850, 1, 0.0)]);
        assert!(one.ensure_non_empty().is_ok());
    }
}
