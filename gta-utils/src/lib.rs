//! Shared utility functions for GTA crates.

/// Number formatting helpers
pub mod format {
    /// Degree Celsius sign used in tooltips.
    pub const CELSIUS: &str = "℃";

    /// Enough fractional digits to print any f64 exactly.
    const EXACT_DIGITS: usize = 1100;

    /// Format with a fixed number of decimals, the way a browser's
    /// `toFixed` does: an exact tie rounds away from zero (0.125 -> "0.13"),
    /// everything else rounds to nearest. Negative values keep their sign;
    /// positive values get none.
    pub fn fixed(value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return format!("{}", value);
        }
        if value == 0.0 {
            // drop the sign of -0.0
            return format!("{:.*}", decimals, 0.0);
        }

        let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
        let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
        let tail = &frac_part[decimals.min(frac_part.len())..];
        let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
        if !is_tie {
            return format!("{:.*}", decimals, value);
        }

        let mut digits = String::with_capacity(int_part.len() + decimals + 1);
        digits.push_str(int_part);
        if decimals > 0 {
            digits.push('.');
            digits.push_str(&frac_part[..decimals]);
        }
        let magnitude = increment_last_digit(&digits);
        if value < 0.0 {
            format!("-{}", magnitude)
        } else {
            magnitude
        }
    }

    /// Add one unit in the last place of a non-negative decimal string,
    /// carrying through the point: "0.12" -> "0.13", "9.9" -> "10.0".
    fn increment_last_digit(digits: &str) -> String {
        let mut bytes = digits.as_bytes().to_vec();
        for i in (0..bytes.len()).rev() {
            match bytes[i] {
                b'.' => continue,
                b'9' => bytes[i] = b'0',
                d => {
                    bytes[i] = d + 1;
                    return String::from_utf8_lossy(&bytes).into_owned();
                }
            }
        }
        format!("1{}", String::from_utf8_lossy(&bytes))
    }

    /// Format a temperature as "<value to 2 decimals>℃".
    pub fn celsius(value: f64) -> String {
        format!("{}{}", fixed(value, 2), CELSIUS)
    }

    /// Format a range as "<low> - <high>" with one decimal each.
    pub fn range(low: f64, high: f64) -> String {
        format!("{} - {}", fixed(low, 1), fixed(high, 1))
    }

    /// Format a pixel coordinate for SVG output without trailing zeros.
    pub fn coord(value: f64) -> String {
        let rounded = (value * 1000.0).round() / 1000.0;
        if rounded == 0.0 {
            // avoid "-0"
            return "0".to_string();
        }
        let s = format!("{:.3}", rounded);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_fixed() {
            assert_eq!(fixed(7.98, 2), "7.98");
            assert_eq!(fixed(8.66 - 0.68, 2), "7.98");
            assert_eq!(fixed(-0.68, 2), "-0.68");
            assert_eq!(fixed(1.0, 1), "1.0");
        }

        #[test]
        fn test_fixed_exact_ties_round_away_from_zero() {
            assert_eq!(fixed(0.125, 2), "0.13");
            assert_eq!(fixed(-0.125, 2), "-0.13");
            assert_eq!(fixed(0.25, 1), "0.3");
            assert_eq!(fixed(0.625, 2), "0.63");
            assert_eq!(fixed(2.5, 0), "3");
        }

        #[test]
        fn test_fixed_tie_carries() {
            assert_eq!(fixed(9.95, 1), "9.9"); // 9.95 is stored just below the tie
            assert_eq!(fixed(9.5, 0), "10");
            assert_eq!(fixed(-99.5, 0), "-100");
            assert_eq!(fixed(0.96875, 4), "0.9688");
            assert_eq!(fixed(9.96875, 4), "9.9688");
            assert_eq!(fixed(9.999755859375, 11), "9.99975585938");
        }

        #[test]
        fn test_fixed_non_ties_unchanged() {
            assert_eq!(fixed(8.785, 2), "8.79");
            assert_eq!(fixed(0.124, 2), "0.12");
            assert_eq!(fixed(-0.0, 2), "0.00");
        }

        #[test]
        fn test_celsius() {
            assert_eq!(celsius(-0.68), "-0.68℃");
            assert_eq!(celsius(0.5), "0.50℃");
        }

        #[test]
        fn test_range() {
            assert_eq!(range(1.684, 3.718), "1.7 - 3.7");
            assert_eq!(range(0.25, 2.75), "0.3 - 2.8");
        }

        #[test]
        fn test_coord() {
            assert_eq!(coord(100.0), "100");
            assert_eq!(coord(2.5), "2.5");
            assert_eq!(coord(1.0 / 3.0), "0.333");
            assert_eq!(coord(-0.0), "0");
            assert_eq!(coord(-12.25), "-12.25");
        }
    }
}
