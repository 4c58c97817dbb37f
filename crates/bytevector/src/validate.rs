//! Argument checks shared by the checked (`safe_*`) operations.
//!
//! Both checks take wide `i64` inputs so that negative or oversized
//! arguments can be rejected instead of being silently truncated at the call
//! site. A check either succeeds with the narrowed value or fails before any
//! state has been touched.

use crate::{
    error::{ArgumentError, RangeError, VectorError},
    options::ValueRange,
};

/// Checks that `idx` addresses a live element of a vector of length `len`.
///
/// Returns the index as a `usize` on success.
///
/// # Errors
///
/// [`VectorError::OutOfRange`] if `idx` is negative or `idx > len - 1`. An
/// empty vector rejects every index.
pub fn validate_index(idx: i64, len: usize) -> Result<usize, VectorError> {
    let Ok(index) = usize::try_from(idx) else {
        return Err(RangeError::NegativeIndex(idx).into());
    };
    if index >= len {
        return Err(RangeError::Index { index: idx, len }.into());
    }
    Ok(index)
}

/// Checks that `val` is a representable element under `range`.
///
/// Returns the value narrowed to `i8` on success.
///
/// # Errors
///
/// [`VectorError::InvalidArgument`] if `val` is below `range.min()` or above
/// `range.max()`.
pub fn validate_value(val: i64, range: ValueRange) -> Result<i8, VectorError> {
    match i8::try_from(val) {
        Ok(value) if range.contains(val) => Ok(value),
        _ if val < i64::from(range.min()) => Err(ArgumentError::ValueTooSmall {
            value: val,
            min: range.min(),
        }
        .into()),
        _ => Err(ArgumentError::ValueTooBig {
            value: val,
            max: range.max(),
        }
        .into()),
    }
}

/// Checks that a requested length or capacity is non-negative.
pub(crate) fn validate_len(len: i64) -> Result<usize, ArgumentError> {
    usize::try_from(len).map_err(|_| ArgumentError::NegativeLength(len))
}
