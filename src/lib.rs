//! # Batchstats
//!
//! Exact descriptive statistics for in-memory samples.
//!
//! Batchstats computes summary statistics over a fully materialized sample
//! of `f64` observations. Because the whole sample is available, every
//! statistic is exact: there are no approximation bounds to reason about and
//! no accumulator state to carry between calls.
//!
//! ## Features
//!
//! - **Location**: arithmetic mean and median
//! - **Frequency**: mode, with a deterministic first-occurrence tie-break
//! - **Spread**: range (maximum minus minimum) in a single pass
//! - **Summaries**: a one-call [`Summary`] record covering all four
//!   statistics, with the classic tab-separated report format
//!
//! ## Quick Start
//!
//! ```rust
//! use batchstats::prelude::*;
//!
//! let sample = [1.0, 2.0, 2.0, 3.0, 4.0];
//!
//! let summary = Summary::compute(&sample).unwrap();
//! assert_eq!(summary.mean, 2.4);
//! assert_eq!(summary.median, 2.0);
//! assert_eq!(summary.mode, 2.0);
//! assert_eq!(summary.range, 3.0);
//! assert_eq!(summary.count, 5);
//! ```
//!
//! Each statistic is also available as an independent call:
//!
//! ```rust
//! use batchstats::location::mean;
//!
//! assert_eq!(mean(&[1.0, 2.0, 3.0]), Ok(2.0));
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<f64, StatsError>`. An empty sample is
//! rejected as [`StatsError::EmptySample`] before the slice is read; there
//! is no out-of-band error state to poll after a call. See [`error`] for
//! the full taxonomy.
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library support
//! - `serde`: enable serialization of [`Summary`]

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod frequency;
pub mod input;
pub mod location;
pub mod spread;
pub mod summary;

pub mod prelude {
    pub use crate::error::StatsError;
    pub use crate::frequency::mode;
    pub use crate::location::{mean, median};
    pub use crate::spread::range;
    pub use crate::summary::Summary;
}

pub use error::StatsError;
pub use summary::Summary;
