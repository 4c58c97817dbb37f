//! Capacity planning for [`ByteVector::reserve`].

use tracing::debug;

use crate::{
    ByteVector,
    error::{ArgumentError, VectorError},
};

/// What [`ByteVector::reserve`] does for a given request.
///
/// Planned from the vector's `len`, its `capacity` and the request `p`:
///
/// | `len` | `capacity` | request                | plan         |
/// |-------|------------|------------------------|--------------|
/// | 0     | 0          | any `p`                | `Allocate`   |
/// | 0     | > 0        | `p <= capacity`        | `Keep`       |
/// | 0     | > 0        | `p > capacity`         | `Allocate`   |
/// | > 0   | > 0        | `p < len`              | `Truncate`   |
/// | > 0   | > 0        | `len <= p <= capacity` | `Keep`       |
/// | > 0   | > 0        | `p > capacity`         | `Reallocate` |
///
/// `Truncate` is lossy: elements past `p` are dropped and their bytes stay in
/// the buffer, unreachable. A request for zero slots on an unallocated vector
/// plans `Keep`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservePlan {
    /// Nothing changes.
    Keep,
    /// An empty vector gets a fresh buffer of this many slots. Old spare
    /// bytes are discarded.
    Allocate(usize),
    /// The length is cut down to this value; capacity is kept.
    Truncate(usize),
    /// The live elements move into a fresh buffer of this many slots.
    Reallocate(usize),
}

impl ReservePlan {
    /// Plans a reservation of `requested` slots for a vector with the given
    /// length and capacity.
    #[must_use]
    pub fn for_request(len: usize, capacity: usize, requested: usize) -> Self {
        debug_assert!(len <= capacity);
        if len == 0 {
            if requested > capacity {
                Self::Allocate(requested)
            } else {
                Self::Keep
            }
        } else if requested < len {
            Self::Truncate(requested)
        } else if requested <= capacity {
            Self::Keep
        } else {
            Self::Reallocate(requested)
        }
    }
}

impl ByteVector {
    /// Plans and applies a capacity reservation of `p` slots.
    ///
    /// The decision comes from [`ReservePlan::for_request`] and is returned.
    /// An empty vector is given a fresh buffer when `p` exceeds its capacity.
    /// A non-empty vector is reallocated, keeping its elements, when `p`
    /// exceeds its capacity, and is **truncated** to `p` elements when `p` is
    /// below its length.
    ///
    /// ```rust
    /// use bytevector::ByteVector;
    ///
    /// let mut v = ByteVector::new(&[1i8, 2, 3]).unwrap();
    /// v.reserve(8).unwrap();
    /// assert_eq!((v.len(), v.capacity()), (3, 8));
    /// v.reserve(1).unwrap();
    /// assert_eq!((v.len(), v.capacity()), (1, 8));
    /// ```
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidArgument`] if `p` is negative or the new buffer
    /// cannot be allocated. The vector is unchanged on failure.
    pub fn reserve(&mut self, p: i64) -> Result<ReservePlan, VectorError> {
        let requested = usize::try_from(p).map_err(|_| ArgumentError::NegativeCapacity(p))?;
        let plan = ReservePlan::for_request(self.len(), self.capacity(), requested);
        match plan {
            ReservePlan::Keep => {}
            ReservePlan::Allocate(capacity) | ReservePlan::Reallocate(capacity) => {
                self.reallocate(capacity)?;
            }
            ReservePlan::Truncate(len) => {
                debug!(len = self.len(), requested = len, "reserve truncates");
                self.truncate(len);
            }
        }
        Ok(plan)
    }
}
