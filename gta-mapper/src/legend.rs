//! Discrete legend derived from the continuous color scale.

use crate::color::{ColorScale, Rgb};
use gta_utils::format;
use serde::Serialize;

/// One legend entry: a slice of the temperature domain and the color drawn
/// for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendBucket {
    pub range_low: f64,
    pub range_high: f64,
    pub color: Rgb,
}

impl LegendBucket {
    /// Label text, e.g. `"2.8 - 4.8"`.
    pub fn label(&self) -> String {
        format::range(self.range_low, self.range_high)
    }
}

/// Split the scale's domain into `bucket_count` equal, contiguous ranges.
///
/// Bucket `i` covers the domain values whose normalized position falls in
/// `[i / n, (i + 1) / n]`; its color is the scale's color at the lower bound.
/// The last bucket ends exactly at the domain maximum.
pub fn legend_buckets(scale: &ColorScale, bucket_count: usize) -> Vec<LegendBucket> {
    let (min, max) = scale.domain();
    let width = (max - min) / bucket_count.max(1) as f64;
    let bound = |i: usize| {
        if i >= bucket_count {
            max
        } else {
            min + width * i as f64
        }
    };

    (0..bucket_count)
        .map(|i| {
            let range_low = bound(i);
            LegendBucket {
                range_low,
                range_high: bound(i + 1),
                color: scale.color(range_low),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScheme;

    #[test]
    fn test_six_contiguous_buckets_cover_domain() {
        let scale = ColorScale::new(1.684, 13.888, ColorScheme::BuRd);
        let buckets = legend_buckets(&scale, 6);
        assert_eq!(buckets.len(), 6);
        assert_eq!(buckets[0].range_low, 1.684);
        assert_eq!(buckets[5].range_high, 13.888);
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].range_high, pair[1].range_low);
            assert!(pair[0].range_low < pair[1].range_low);
        }
    }

    #[test]
    fn test_bucket_color_is_color_of_lower_bound() {
        let scale = ColorScale::new(0.0, 12.0, ColorScheme::RdBu);
        for bucket in legend_buckets(&scale, 4) {
            assert_eq!(bucket.color, scale.color(bucket.range_low));
        }
    }

    #[test]
    fn test_configured_count() {
        let scale = ColorScale::new(0.0, 12.0, ColorScheme::RdBu);
        assert_eq!(legend_buckets(&scale, 9).len(), 9);
        assert!(legend_buckets(&scale, 0).is_empty());
    }

    #[test]
    fn test_degenerate_domain_does_not_panic() {
        let scale = ColorScale::fallback(8.66, ColorScheme::BuRd);
        let buckets = legend_buckets(&scale, 6);
        assert_eq!(buckets.len(), 6);
        assert!(buckets.iter().all(|b| b.range_low == 8.66 && b.range_high == 8.66));
    }

    #[test]
    fn test_label_format() {
        let scale = ColorScale::new(0.0, 12.0, ColorScheme::RdBu);
        let buckets = legend_buckets(&scale, 6);
        assert_eq!(buckets[0].label(), "0.0 - 2.0");
        assert_eq!(buckets[5].label(), "10.0 - 12.0");

        // 0.25-wide buckets land on exact ties at one decimal
        let scale = ColorScale::new(0.25, 1.75, ColorScheme::RdBu);
        let buckets = legend_buckets(&scale, 6);
        assert_eq!(buckets[0].label(), "0.3 - 0.5");
        assert_eq!(buckets[5].label(), "1.5 - 1.8");
    }
}
