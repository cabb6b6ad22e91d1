//! Band scales for the discrete axes.

use std::collections::HashMap;
use std::hash::Hash;

/// Maps a discrete domain onto contiguous equal-width bands in pixel space.
///
/// With a range of `(r0, r1)` and `n` domain values, each band is
/// `(r1 - r0) / n` wide and value `i` starts at `r0 + i * step`. When
/// `r1 < r0` the order is flipped, so the first domain value ends up at the
/// far end of the range (used to put January at the bottom of the y-axis).
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    index: HashMap<T, usize>,
    start: f64,
    step: f64,
    reverse: bool,
}

impl<T: Eq + Hash + Clone> BandScale<T> {
    /// Build a scale over `domain`. Duplicate domain values keep their first
    /// position.
    pub fn new(domain: Vec<T>, range: (f64, f64)) -> Self {
        let mut index = HashMap::with_capacity(domain.len());
        let mut unique = Vec::with_capacity(domain.len());
        for value in domain {
            if !index.contains_key(&value) {
                index.insert(value.clone(), unique.len());
                unique.push(value);
            }
        }

        let (r0, r1) = range;
        let reverse = r1 < r0;
        let (start, stop) = if reverse { (r1, r0) } else { (r0, r1) };
        let step = (stop - start) / unique.len().max(1) as f64;

        Self {
            domain: unique,
            index,
            start,
            step,
            reverse,
        }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    /// Start of the band for `value`, or `None` if it is not in the domain.
    pub fn position(&self, value: &T) -> Option<f64> {
        let i = *self.index.get(value)?;
        let slot = if self.reverse {
            self.domain.len() - 1 - i
        } else {
            i
        };
        Some(self.start + self.step * slot as f64)
    }

    /// Middle of the band for `value`; where axis ticks go.
    pub fn center(&self, value: &T) -> Option<f64> {
        self.position(value).map(|p| p + self.step / 2.0)
    }
}
