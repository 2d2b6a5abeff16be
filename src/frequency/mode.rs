//! Mode with a deterministic tie-break

use crate::error::StatsError;

#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap as HashMap;

/// Frequency-map entry for one distinct value
#[derive(Clone, Copy, Debug)]
struct ValueCount {
    /// Occurrences seen so far
    count: usize,
    /// Index of the value's first occurrence
    first_seen: usize,
}

/// Compute the mode of a sample.
///
/// The mode is the value occurring most frequently, under exact value
/// equality: no epsilon tolerance, and `-0.0` counts as `0.0`. When several
/// values share the maximum frequency, the one whose first occurrence comes
/// earliest in the input wins; in particular, if every value is distinct
/// the mode is the first element.
///
/// # Example
///
/// ```
/// use batchstats::frequency::mode;
///
/// // 1.0 and 3.0 both occur twice; 3.0 appears first in the input
/// assert_eq!(mode(&[3.0, 1.0, 3.0, 2.0, 1.0]), Ok(3.0));
///
/// // All distinct: the first element is the mode
/// assert_eq!(mode(&[7.0, 8.0, 9.0]), Ok(7.0));
/// ```
///
/// # Errors
///
/// [`StatsError::EmptySample`] for an empty slice.
pub fn mode(sample: &[f64]) -> Result<f64, StatsError> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let mut counts: HashMap<u64, ValueCount> = HashMap::new();

    for (index, &value) in sample.iter().enumerate() {
        counts
            .entry(key_of(value))
            .or_insert(ValueCount {
                count: 0,
                first_seen: index,
            })
            .count += 1;
    }

    // Map iteration order is unspecified; selecting by (count, first_seen)
    // is total over the entries, so the winner is deterministic.
    let mut best = ValueCount {
        count: 0,
        first_seen: 0,
    };
    for &entry in counts.values() {
        if entry.count > best.count
            || (entry.count == best.count && entry.first_seen < best.first_seen)
        {
            best = entry;
        }
    }

    Ok(sample[best.first_seen])
}

/// Key a value for the frequency map. The two IEEE zeros compare equal and
/// must share a key; every other value is its own bit pattern.
fn key_of(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
