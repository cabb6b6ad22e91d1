use crate::month::Month;
use serde::{Deserialize, Serialize};

/// One monthly temperature anomaly, in °C relative to the dataset's base
/// temperature.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub year: i32,
    /// 1-based month number as it appears in the source
    pub month: u32,
    pub variance: f64,
}

impl AnomalyRecord {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        Self {
            year,
            month,
            variance,
        }
    }

    /// The calendar month, or `None` if the source carried an out-of-range
    /// month number.
    pub fn calendar_month(&self) -> Option<Month> {
        Month::from_number(self.month)
    }

    /// Absolute temperature for this record.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::AnomalyRecord;
    use crate::month::Month;

    #[test]
    fn test_temperature_adds_base() {
        let record = AnomalyRecord::new(1850, 1, -0.68);
        assert!((record.temperature(8.66) - 7.98).abs() < 1e-9);
    }

    #[test]
    fn test_calendar_month() {
        assert_eq!(AnomalyRecord::new(2000, 7, 0.0).calendar_month(), Some(Month::July));
        assert_eq!(AnomalyRecord::new(2000, 0, 0.0).calendar_month(), None);
    }

    #[test]
    fn test_deserialize_from_source_shape() {
        let record: AnomalyRecord =
            serde_json::from_str(r#"{"year":1753,"month":1,"variance":-1.366}"#).unwrap();
        assert_eq!(record, AnomalyRecord::new(1753, 1, -1.366));
    }
}
