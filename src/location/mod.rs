//! Measures of central tendency
//!
//! This module provides the location statistics of a sample: where the data
//! is centered.
//!
//! # Statistics
//!
//! - [`mean`]: arithmetic mean with left-to-right accumulation
//! - [`median`]: middle of the sorted sample (mean of the two middle
//!   elements for even-length samples)
//!
//! # Example
//!
//! ```
//! use batchstats::location::{mean, median};
//!
//! let sample = [4.0, 1.0, 3.0, 2.0];
//!
//! assert_eq!(mean(&sample), Ok(2.5));
//! assert_eq!(median(&sample), Ok(2.5));
//! ```

mod mean;
mod median;

pub use mean::mean;
pub use median::median;
