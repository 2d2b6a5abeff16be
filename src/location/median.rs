//! Median

use crate::error::StatsError;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Compute the median of a sample.
///
/// A private copy of the sample is sorted ascending under the IEEE 754
/// total order; the caller's slice is never reordered. An odd-length sample
/// yields its middle element, an even-length sample the arithmetic mean of
/// the two middle elements.
///
/// # Example
///
/// ```
/// use batchstats::location::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
/// ```
///
/// # Errors
///
/// [`StatsError::EmptySample`] for an empty slice.
pub fn median(sample: &[f64]) -> Result<f64, StatsError> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let mut sorted: Vec<f64> = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_length() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), Ok(2.0));
        assert_eq!(median(&[9.0, 1.0, 5.0, 3.0, 7.0]), Ok(5.0));
    }

    #[test]
    fn test_even_length() {
        assert_eq!(median(&[1.0, 2.0]), Ok(1.5));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(median(&[42.0]), Ok(42.0));
    }

    #[test]
    fn test_unsorted_input() {
        // The statistic must not depend on input order
        assert_eq!(median(&[5.0, 1.0, 4.0, 2.0, 3.0]), Ok(3.0));
        assert_eq!(median(&[3.0, 2.0, 4.0, 1.0, 5.0]), Ok(3.0));
    }

    #[test]
    fn test_caller_slice_untouched() {
        let sample = [3.0, 1.0, 2.0];
        median(&sample).unwrap();
        assert_eq!(sample, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(median(&[5.0, 5.0, 5.0, 5.0]), Ok(5.0));
        assert_eq!(median(&[1.0, 2.0, 2.0, 3.0, 4.0]), Ok(2.0));
    }

    #[test]
    fn test_empty() {
        assert_eq!(median(&[]), Err(StatsError::EmptySample));
    }
}
