//! Summary records
//!
//! A [`Summary`] bundles the four statistics of one sample together with
//! the observation count, and renders the classic tab-separated report.
//!
//! # Example
//!
//! ```
//! use batchstats::summary::Summary;
//!
//! let summary = Summary::compute(&[1.0, 2.0, 2.0, 3.0, 4.0]).unwrap();
//!
//! assert_eq!(summary.mean, 2.4);
//! assert_eq!(summary.count, 5);
//! println!("{}", summary);
//! ```

use crate::error::StatsError;
use crate::frequency::mode;
use crate::location::{mean, median};
use crate::spread::range;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

/// Summary statistics of one sample
///
/// All fields are computed from the same sample in a single
/// [`compute`](Summary::compute) call; the record is plain data and remains
/// valid for as long as the caller keeps it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Arithmetic mean
    pub mean: f64,
    /// Median of the sorted sample
    pub median: f64,
    /// Most frequent value (first-occurrence tie-break)
    pub mode: f64,
    /// Maximum minus minimum
    pub range: f64,
    /// Number of observations
    pub count: usize,
}

impl Summary {
    /// Compute all four statistics over one sample.
    ///
    /// The statistics are evaluated independently over the same slice; the
    /// first failure aborts the whole summary, so no partial record is ever
    /// produced.
    ///
    /// # Example
    ///
    /// ```
    /// use batchstats::Summary;
    ///
    /// let summary = Summary::compute(&[5.0, 5.0, 5.0, 5.0]).unwrap();
    /// assert_eq!(summary.median, 5.0);
    /// assert_eq!(summary.range, 0.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates the first [`StatsError`] from the underlying operations.
    pub fn compute(sample: &[f64]) -> Result<Self, StatsError> {
        Ok(Self {
            mean: mean(sample)?,
            median: median(sample)?,
            mode: mode(sample)?,
            range: range(sample)?,
            count: sample.len(),
        })
    }
}

impl core::fmt::Display for Summary {
    /// Render the report: one `Label:<TAB>value` line per statistic with
    /// eight decimal places, then the thousands-grouped count. The `Range`
    /// label carries no colon.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Mean:\t{:.8}\nMedian:\t{:.8}\nMode:\t{:.8}\nRange\t{:.8}\nCount:\t{}",
            self.mean,
            self.median,
            self.mode,
            self.range,
            group_thousands(self.count)
        )
    }
}

/// Format a count with a comma between each group of three digits.
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, digit) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
