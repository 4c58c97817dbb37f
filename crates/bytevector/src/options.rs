use core::num::NonZeroUsize;

/// Range of element values accepted by checked operations.
///
/// Unchecked operations take `i8` and therefore always admit the full
/// `[-128, 127]` range; this setting only governs the `safe_*` family and
/// [`ByteVector::validate_value`](crate::ByteVector::validate_value).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValueRange {
    /// The full two's complement range, `[-128, 127]`.
    #[default]
    Int8,
    /// The symmetric range `[-127, 127]`, rejecting `i8::MIN`.
    ///
    /// Matches containers that treat `-128` as reserved.
    Symmetric,
}

impl ValueRange {
    /// Smallest accepted value.
    #[must_use]
    pub const fn min(self) -> i8 {
        match self {
            Self::Int8 => i8::MIN,
            Self::Symmetric => -i8::MAX,
        }
    }

    /// Largest accepted value.
    #[must_use]
    pub const fn max(self) -> i8 {
        i8::MAX
    }

    /// Whether `value` falls inside the range.
    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        value >= self.min() as i64 && value <= self.max() as i64
    }
}

/// Configuration for a [`ByteVector`](crate::ByteVector).
///
/// Options are fixed at construction and travel with the vector; operations
/// that replace the buffer (`swap`, `reserve`) keep the receiver's options.
///
/// # Examples
///
/// ```rust
/// use bytevector::{ByteVector, ValueRange, VectorOptions};
///
/// let options = VectorOptions {
///     value_range: ValueRange::Symmetric,
///     ..Default::default()
/// };
/// let mut v = ByteVector::with_options(0, options).unwrap();
/// assert!(v.safe_push_back(-128).is_err());
/// assert!(v.safe_push_back(-127).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VectorOptions {
    /// Values accepted by checked operations.
    ///
    /// # Default
    ///
    /// [`ValueRange::Int8`]
    pub value_range: ValueRange,

    /// Capacity established the first time an empty buffer has to grow.
    ///
    /// Doubling starts from here, so a vector created with length zero
    /// reaches capacities `b, 2b, 4b, ...` while being appended to.
    ///
    /// # Default
    ///
    /// `1`
    pub baseline_capacity: NonZeroUsize,
}

impl Default for VectorOptions {
    fn default() -> Self {
        Self {
            value_range: ValueRange::default(),
            baseline_capacity: NonZeroUsize::MIN,
        }
    }
}
