use thiserror::Error;

/// Failure returned by fallible [`ByteVector`](crate::ByteVector) operations.
///
/// The two variants are the two failure categories of the container: a
/// malformed argument, or an index that does not address a live element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// A length, capacity or element value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
    /// An index did not address a live element.
    #[error("out of range: {0}")]
    OutOfRange(#[from] RangeError),
}

/// Coarse category of a [`VectorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`VectorError::InvalidArgument`].
    InvalidArgument,
    /// See [`VectorError::OutOfRange`].
    OutOfRange,
}

impl VectorError {
    /// The category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::OutOfRange(_) => ErrorKind::OutOfRange,
        }
    }
}

/// Why an argument was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A length seed was negative.
    #[error("length must be non-negative, got {0}")]
    NegativeLength(i64),
    /// A requested capacity was negative.
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),
    /// An element value fell below the configured minimum.
    #[error("value {value} is too small for an 8-bit signed integer (minimum {min})")]
    ValueTooSmall {
        /// The rejected value.
        value: i64,
        /// Lowest accepted value.
        min: i8,
    },
    /// An element value exceeded the configured maximum.
    #[error("value {value} is too big for an 8-bit signed integer (maximum {max})")]
    ValueTooBig {
        /// The rejected value.
        value: i64,
        /// Highest accepted value.
        max: i8,
    },
    /// A checked resize did not strictly grow the vector.
    #[error("resize to {requested} must grow past the current length {len}")]
    ResizeNotGrowing {
        /// The requested length.
        requested: i64,
        /// Length at the time of the call.
        len: usize,
    },
    /// The allocator could not provide a buffer of this many slots.
    #[error("cannot allocate {0} slots")]
    AllocationFailed(usize),
}

/// Why an index was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The index is at or past the live length.
    #[error("index {index} is out of bounds for length {len}")]
    Index {
        /// The rejected index.
        index: i64,
        /// Length at the time of the call.
        len: usize,
    },
    /// The index was negative.
    #[error("index must be non-negative, got {0}")]
    NegativeIndex(i64),
    /// A checked pop found no live element.
    #[error("cannot pop from an empty vector")]
    Empty,
}

impl RangeError {
    pub(crate) fn index(index: usize, len: usize) -> Self {
        Self::Index {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}
