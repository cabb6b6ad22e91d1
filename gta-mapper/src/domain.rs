//! Discrete domains for the two chart axes.

use gta_data::{AnomalyRecord, Month};
use std::collections::HashSet;

/// Distinct years in the order they first appear in `records`.
pub fn year_domain(records: &[AnomalyRecord]) -> Vec<i32> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.year)
        .filter(|year| seen.insert(*year))
        .collect()
}

/// The 12 month names in calendar order. Independent of the data.
pub fn month_domain() -> [&'static str; 12] {
    Month::ALL.map(Month::name)
}

/// Years that get an x-axis label: those divisible by `interval`.
/// An interval of zero or less labels every year.
pub fn year_ticks(years: &[i32], interval: i32) -> Vec<i32> {
    if interval <= 0 {
        return years.to_vec();
    }
    years
        .iter()
        .copied()
        .filter(|year| year % interval == 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_domain_first_seen_order() {
        let records = vec![
            AnomalyRecord::new(1900, 1, 0.0),
            AnomalyRecord::new(1899, 1, 0.0),
            AnomalyRecord::new(1900, 2, 0.0),
            AnomalyRecord::new(1901, 1, 0.0),
            AnomalyRecord::new(1899, 2, 0.0),
        ];
        assert_eq!(year_domain(&records), vec![1900, 1899, 1901]);
    }

    #[test]
    fn test_year_domain_matches_distinct_set() {
        let records: Vec<AnomalyRecord> = (0..120)
            .map(|i| AnomalyRecord::new(1753 + i / 12, (i % 12) as u32 + 1, 0.1))
            .collect();
        let years = year_domain(&records);
        let distinct: HashSet<i32> = records.iter().map(|r| r.year).collect();
        assert_eq!(years.len(), distinct.len());
        assert_eq!(years.iter().copied().collect::<HashSet<_>>(), distinct);
    }

    #[test]
    fn test_month_domain_is_calendar_order() {
        assert_eq!(
            month_domain(),
            [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December"
            ]
        );
    }

    #[test]
    fn test_year_ticks_by_decade() {
        let years: Vec<i32> = (1753..=1785).collect();
        assert_eq!(year_ticks(&years, 10), vec![1760, 1770, 1780]);
        assert_eq!(year_ticks(&years, 0).len(), years.len());
    }
}
