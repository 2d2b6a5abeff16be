//! Input record tokenizing
//!
//! The input format is a single comma-separated record of numbers; only the
//! first record of a file or stream is ever examined. Tokenizing lives in
//! the library so the command-line binary stays glue-only.

use crate::error::ParseError;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Tokenize one comma-separated record into a sample.
///
/// Fields are trimmed before parsing, so `"1, 2.5 ,3"` is accepted. A blank
/// record is a valid empty sample; the statistics operations reject it
/// downstream. A field that does not parse as a number, or that parses to a
/// non-finite value (the sample model admits finite observations only), is
/// an error carrying the 1-based field position.
///
/// # Example
///
/// ```
/// use batchstats::input::parse_record;
///
/// let sample = parse_record("1, 2.5, -3e2").unwrap();
/// assert_eq!(sample, vec![1.0, 2.5, -300.0]);
///
/// assert!(parse_record("").unwrap().is_empty());
/// assert!(parse_record("1, two, 3").is_err());
/// ```
pub fn parse_record(record: &str) -> Result<Vec<f64>, ParseError> {
    if record.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut sample = Vec::with_capacity(record.len() / 2);
    for (index, field) in record.split(',').enumerate() {
        let text = field.trim();
        let value: f64 = text.parse().map_err(|_| ParseError::InvalidNumber {
            field: index + 1,
            text: text.into(),
        })?;
        if !value.is_finite() {
            return Err(ParseError::InvalidNumber {
                field: index + 1,
                text: text.into(),
            });
        }
        sample.push(value);
    }

    Ok(sample)
}
