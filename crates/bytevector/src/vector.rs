//! The [`ByteVector`] container.
//!
//! # Layout
//!
//! The vector owns a boxed slice whose length *is* the capacity, plus a live
//! length `len`. Slots in `[0, len)` are the elements; slots in
//! `[len, capacity)` are spare and may still hold stale bytes left behind by
//! `clear`, `pop_back`, shrinking `resize` or a truncating `reserve`.
//!
//! # Checked and unchecked operations
//!
//! Every accessor and mutator comes in two flavors:
//!
//! - Unchecked (`get`, `set`, `push_back`, `pop_back`, `resize`) take `usize`
//!   indices and `i8` values and only perform the single bound check the
//!   operation needs. Allocation failure aborts, as with `Vec`.
//! - Checked (`safe_*`) take wide `i64` arguments, validate all of them before
//!   touching storage and report every failure as a [`VectorError`]. On error
//!   the vector is left exactly as it was, and allocation failure is reported
//!   instead of aborting.

use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;

use bstr::BStr;
use tracing::trace;

use crate::{
    error::{ArgumentError, RangeError, VectorError},
    options::VectorOptions,
    seed::Seed,
    validate::{self, validate_len},
};

/// A resizable container of signed 8-bit integers.
///
/// # Examples
///
/// ```rust
/// use bytevector::ByteVector;
///
/// let mut v = ByteVector::new(0).unwrap();
/// v.push_back(5);
/// v.push_back(-3);
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.get(0), Ok(5));
/// assert_eq!(v.get(1), Ok(-3));
/// assert_eq!(v.pop_back(), -3);
/// ```
#[derive(Clone, Default)]
pub struct ByteVector {
    buf: Box<[i8]>,
    len: usize,
    options: VectorOptions,
}

/// Allocates `capacity` zeroed slots, reporting failure instead of aborting.
pub(crate) fn allocate(capacity: usize) -> Result<Box<[i8]>, ArgumentError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| ArgumentError::AllocationFailed(capacity))?;
    slots.resize(capacity, 0);
    Ok(slots.into_boxed_slice())
}

impl ByteVector {
    /// Creates a vector from a [`Seed`] with default options.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidArgument`] if a length seed is negative or the
    /// buffer cannot be allocated.
    pub fn new<'a>(seed: impl Into<Seed<'a>>) -> Result<Self, VectorError> {
        Self::with_options(seed, VectorOptions::default())
    }

    /// Creates a vector from a [`Seed`] with the given options.
    ///
    /// Copying seeds (`Signed`, `Raw`, `Vector`) produce a vector whose
    /// capacity equals the number of copied elements. A `Vector` seed copies
    /// only the live elements of its source.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVector::new`].
    pub fn with_options<'a>(
        seed: impl Into<Seed<'a>>,
        options: VectorOptions,
    ) -> Result<Self, VectorError> {
        let seed = seed.into();
        let len = validate_len(seed.requested_len())?;
        let mut buf = allocate(len)?;
        seed.copy_into(&mut buf);
        Ok(Self { buf, len, options })
    }

    /// Creates a vector of `len` zeroed elements.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            buf: vec![0; len].into_boxed_slice(),
            len,
            options: VectorOptions::default(),
        }
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// `true` when there are no live elements, whatever the capacity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The options this vector was created with.
    #[must_use]
    pub fn options(&self) -> &VectorOptions {
        &self.options
    }

    /// Checks an index against the current length.
    ///
    /// # Errors
    ///
    /// See [`validate::validate_index`].
    pub fn validate_index(&self, idx: i64) -> Result<usize, VectorError> {
        validate::validate_index(idx, self.len)
    }

    /// Checks a value against this vector's configured range.
    ///
    /// # Errors
    ///
    /// See [`validate::validate_value`].
    pub fn validate_value(&self, val: i64) -> Result<i8, VectorError> {
        validate::validate_value(val, self.options.value_range)
    }

    /// Reads the element at `idx`.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if `idx >= len`.
    pub fn get(&self, idx: usize) -> Result<i8, VectorError> {
        self.live()
            .get(idx)
            .copied()
            .ok_or_else(|| RangeError::index(idx, self.len).into())
    }

    /// Overwrites the element at `idx`.
    ///
    /// Only existing elements can be set; use [`push_back`](Self::push_back)
    /// to append.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if `idx > len - 1`.
    pub fn set(&mut self, idx: usize, val: i8) -> Result<(), VectorError> {
        let len = self.len;
        let slot = self.buf[..len]
            .get_mut(idx)
            .ok_or_else(|| RangeError::index(idx, len))?;
        *slot = val;
        Ok(())
    }

    /// Reads the element at `idx` after validating the index.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if `idx` is negative or `idx >= len`.
    pub fn safe_get(&self, idx: i64) -> Result<i8, VectorError> {
        let index = self.validate_index(idx)?;
        Ok(self.buf[index])
    }

    /// Overwrites the element at `idx` after validating value and index.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidArgument`] if `val` is outside the configured
    /// range, otherwise [`VectorError::OutOfRange`] if `idx` does not address
    /// a live element. Nothing is written on failure.
    pub fn safe_set(&mut self, idx: i64, val: i64) -> Result<(), VectorError> {
        let value = self.validate_value(val)?;
        let index = self.validate_index(idx)?;
        self.buf[index] = value;
        Ok(())
    }

    /// Appends `val`, doubling the capacity first when the vector is full.
    pub fn push_back(&mut self, val: i8) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.buf[self.len] = val;
        self.len += 1;
    }

    /// Appends `val` after validating it.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidArgument`] if `val` is outside the configured
    /// range or the grown buffer cannot be allocated. The vector is unchanged
    /// on failure.
    pub fn safe_push_back(&mut self, val: i64) -> Result<(), VectorError> {
        let value = self.validate_value(val)?;
        if self.len == self.capacity() {
            self.try_grow()?;
        }
        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element. Capacity is kept.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Use
    /// [`safe_pop_back`](Self::safe_pop_back) when that is possible.
    pub fn pop_back(&mut self) -> i8 {
        assert!(self.len > 0, "pop_back called on an empty ByteVector");
        self.len -= 1;
        self.buf[self.len]
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if the vector is empty.
    pub fn safe_pop_back(&mut self) -> Result<i8, VectorError> {
        if self.len == 0 {
            return Err(RangeError::Empty.into());
        }
        self.len -= 1;
        Ok(self.buf[self.len])
    }

    /// Drops all elements in O(1). Capacity and the stored bytes are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Sets the length to `new_len`.
    ///
    /// When growing, capacity doubles until it covers `new_len` and the new
    /// slots `[len, new_len)` are filled with `fill`. When shrinking, only
    /// the length changes; the bytes past it stay in the buffer.
    pub fn resize(&mut self, new_len: usize, fill: i8) {
        if new_len > self.capacity() {
            let to = self.doubled_capacity_for(new_len);
            self.grow_into(vec![0; to].into_boxed_slice());
        }
        self.fill_to(new_len, fill);
    }

    /// [`resize`](Self::resize) with a zero fill.
    pub fn resize_zeroed(&mut self, new_len: usize) {
        self.resize(new_len, 0);
    }

    /// Grows the length to `new_len`, filling new slots with `fill`.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidArgument`] if `fill` is outside the configured
    /// range, `new_len` is negative, `new_len <= len`, or the grown buffer
    /// cannot be allocated. The vector is unchanged on failure.
    pub fn safe_resize(&mut self, new_len: i64, fill: i64) -> Result<(), VectorError> {
        let fill = self.validate_value(fill)?;
        let target = validate_len(new_len)?;
        if target <= self.len {
            return Err(ArgumentError::ResizeNotGrowing {
                requested: new_len,
                len: self.len,
            }
            .into());
        }
        if target > self.capacity() {
            let next = allocate(self.doubled_capacity_for(target))?;
            self.grow_into(next);
        }
        self.fill_to(target, fill);
        Ok(())
    }

    /// Replaces this vector's contents with a copy of `other`'s live
    /// elements.
    ///
    /// This is a one-way transfer: `other` is not modified. The new buffer is
    /// sized exactly to `other.len()`, so afterwards
    /// `self.capacity() == self.len() == other.len()`. The receiver keeps its
    /// own options.
    pub fn swap(&mut self, other: &ByteVector) {
        trace!(from = self.capacity(), to = other.len, "swap");
        self.buf = other.live().into();
        self.len = other.len;
    }

    /// The live elements.
    pub(crate) fn live(&self) -> &[i8] {
        &self.buf[..self.len]
    }

    /// Shortens the length to `len`, leaving the dropped bytes in place.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    /// Moves the live elements into a fresh buffer of exactly `capacity`
    /// slots, which must be at least `len`.
    pub(crate) fn reallocate(&mut self, capacity: usize) -> Result<(), ArgumentError> {
        debug_assert!(capacity >= self.len);
        let mut next = allocate(capacity)?;
        next[..self.len].copy_from_slice(self.live());
        trace!(from = self.capacity(), to = capacity, "reallocate");
        self.buf = next;
        Ok(())
    }

    /// Capacity after one growth step: doubled, or the baseline when empty.
    fn grown_capacity(&self) -> usize {
        match self.capacity() {
            0 => self.options.baseline_capacity.get(),
            cap => cap.saturating_mul(2),
        }
    }

    /// Capacity reached by repeated growth steps until `target` fits.
    fn doubled_capacity_for(&self, target: usize) -> usize {
        let mut cap = self.grown_capacity();
        while cap < target {
            cap = cap.saturating_mul(2);
        }
        cap
    }

    fn grow(&mut self) {
        let to = self.grown_capacity();
        self.grow_into(vec![0; to].into_boxed_slice());
    }

    fn try_grow(&mut self) -> Result<(), ArgumentError> {
        let next = allocate(self.grown_capacity())?;
        self.grow_into(next);
        Ok(())
    }

    /// Installs a larger buffer, carrying over every existing slot (spare
    /// slots included).
    fn grow_into(&mut self, mut next: Box<[i8]>) {
        let from = self.capacity();
        next[..from].copy_from_slice(&self.buf);
        trace!(from, to = next.len(), "grow");
        self.buf = next;
    }

    /// Fills `[len, new_len)` with `fill` and sets the length. Capacity must
    /// already cover `new_len`.
    fn fill_to(&mut self, new_len: usize, fill: i8) {
        if new_len > self.len {
            self.buf[self.len..new_len].fill(fill);
        }
        self.len = new_len;
    }

    /// Asserts the structural invariants.
    ///
    /// # Panics
    ///
    /// Panics if the length exceeds the capacity.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn check_invariants(&self) {
        assert!(
            self.len <= self.buf.len(),
            "len {} exceeds capacity {}",
            self.len,
            self.buf.len()
        );
    }
}

impl PartialEq for ByteVector {
    fn eq(&self, other: &Self) -> bool {
        self.live() == other.live()
    }
}

impl Eq for ByteVector {}

impl fmt::Debug for ByteVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes: Vec<u8> = self
            .live()
            .iter()
            .map(|b| u8::from_ne_bytes(b.to_ne_bytes()))
            .collect();
        f.debug_struct("ByteVector")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("bytes", &BStr::new(&bytes))
            .finish()
    }
}

impl From<&[i8]> for ByteVector {
    fn from(src: &[i8]) -> Self {
        Self {
            buf: src.into(),
            len: src.len(),
            options: VectorOptions::default(),
        }
    }
}

impl From<&[u8]> for ByteVector {
    fn from(src: &[u8]) -> Self {
        Self {
            buf: src.iter().map(|&b| i8::from_ne_bytes([b])).collect(),
            len: src.len(),
            options: VectorOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    use rstest::rstest;

    use super::*;
    use crate::{error::ErrorKind, options::ValueRange};

    fn contents(v: &ByteVector) -> Vec<i8> {
        v.live().to_vec()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(17)]
    fn length_seed_is_zeroed(#[case] n: i64) {
        let v = ByteVector::new(n).unwrap();
        let n = usize::try_from(n).unwrap();
        assert_eq!(v.len(), n);
        assert_eq!(v.capacity(), n);
        assert!(contents(&v).iter().all(|&b| b == 0));
    }

    #[test]
    fn negative_length_seed_is_rejected() {
        let err = ByteVector::new(-1i64).unwrap_err();
        assert_eq!(err, VectorError::from(ArgumentError::NegativeLength(-1)));
    }

    #[test]
    fn raw_seed_reinterprets_bytes() {
        let v = ByteVector::new(&[0x00u8, 0x7f, 0x80, 0xff]).unwrap();
        assert_eq!(contents(&v), [0, 127, -128, -1]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn vector_seed_copies_live_elements() {
        let mut src = ByteVector::new(&[1i8, 2, 3, 4]).unwrap();
        src.pop_back();
        let copy = ByteVector::new(&src).unwrap();
        assert_eq!(contents(&copy), [1, 2, 3]);
        assert_eq!(copy.capacity(), 3);
    }

    #[test]
    fn growth_from_empty_uses_baseline() {
        let mut v = ByteVector::new(0).unwrap();
        assert_eq!(v.capacity(), 0);
        v.push_back(1);
        assert_eq!(v.capacity(), 1);
        v.push_back(2);
        assert_eq!(v.capacity(), 2);
        v.push_back(3);
        assert_eq!(v.capacity(), 4);
        assert_eq!(contents(&v), [1, 2, 3]);
    }

    #[test]
    fn configured_baseline_is_honored() {
        let options = VectorOptions {
            baseline_capacity: NonZeroUsize::new(8).unwrap(),
            ..VectorOptions::default()
        };
        let mut v = ByteVector::with_options(0, options).unwrap();
        v.push_back(1);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn growth_preserves_elements() {
        let mut v = ByteVector::new(&[1i8, 2]).unwrap();
        v.push_back(3);
        assert_eq!(v.capacity(), 4);
        assert_eq!(contents(&v), [1, 2, 3]);
        assert_eq!(v.buf[3], 0);
    }

    #[test]
    fn set_rejects_index_at_len() {
        let mut v = ByteVector::new(2).unwrap();
        assert_eq!(
            v.set(2, 1).unwrap_err(),
            VectorError::from(RangeError::Index { index: 2, len: 2 })
        );
        v.set(1, -7).unwrap();
        assert_eq!(v.get(1), Ok(-7));
    }

    #[test]
    fn get_does_not_read_spare_slots() {
        let mut v = ByteVector::new(&[9i8]).unwrap();
        v.clear();
        assert_eq!(v.get(0).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn safe_set_validates_value_before_index() {
        let mut v = ByteVector::new(1).unwrap();
        assert_eq!(
            v.safe_set(5, 200).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(v.safe_set(5, 1).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(contents(&v), [0]);
    }

    #[test]
    fn safe_push_back_rejects_without_growing() {
        let mut v = ByteVector::new(0).unwrap();
        assert!(v.safe_push_back(128).is_err());
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        v.safe_push_back(-128).unwrap();
        assert_eq!(contents(&v), [-128]);
    }

    #[test]
    fn symmetric_range_applies_to_every_checked_operation() {
        let options = VectorOptions {
            value_range: ValueRange::Symmetric,
            ..VectorOptions::default()
        };
        let mut v = ByteVector::with_options(2, options).unwrap();
        assert!(v.safe_set(0, -128).is_err());
        assert!(v.safe_push_back(-128).is_err());
        assert!(v.safe_resize(4, -128).is_err());
        assert_eq!(contents(&v), [0, 0]);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn pop_back_on_empty_panics() {
        let mut v = ByteVector::default();
        v.pop_back();
    }

    #[test]
    fn safe_pop_back_on_empty_fails() {
        let mut v = ByteVector::new(&[3i8]).unwrap();
        assert_eq!(v.safe_pop_back(), Ok(3));
        assert_eq!(v.safe_pop_back(), Err(VectorError::from(RangeError::Empty)));
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn resize_grows_by_doubling_and_fills() {
        let mut v = ByteVector::new(4).unwrap();
        v.resize(6, 9);
        assert_eq!(contents(&v), [0, 0, 0, 0, 9, 9]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn resize_shrink_keeps_bytes() {
        let mut v = ByteVector::new(&[1i8, 2, 3]).unwrap();
        v.resize_zeroed(1);
        assert_eq!(contents(&v), [1]);
        assert_eq!(&v.buf[..], &[1, 2, 3]);
    }

    #[test]
    fn resize_from_empty_reaches_target() {
        let mut v = ByteVector::default();
        v.resize(5, -1);
        assert_eq!(contents(&v), [-1; 5]);
        assert_eq!(v.capacity(), 8);
    }

    #[rstest]
    #[case(3, 0)]
    #[case(2, 0)]
    #[case(-1, 0)]
    #[case(5, 128)]
    fn safe_resize_rejections_leave_vector_intact(#[case] new_len: i64, #[case] fill: i64) {
        let mut v = ByteVector::new(&[1i8, 2, 3]).unwrap();
        let err = v.safe_resize(new_len, fill).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(contents(&v), [1, 2, 3]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn swap_copies_from_other_only() {
        let mut other = ByteVector::new(&[4i8, 5, 6, 7]).unwrap();
        other.pop_back();
        let mut this = ByteVector::new(10).unwrap();
        this.swap(&other);
        assert_eq!(contents(&this), [4, 5, 6]);
        assert_eq!(this.capacity(), 3);
        assert_eq!(contents(&other), [4, 5, 6]);
        assert_eq!(other.capacity(), 4);
    }

    #[test]
    fn equality_ignores_capacity_and_stale_bytes() {
        let mut a = ByteVector::new(&[1i8, 2, 9]).unwrap();
        a.pop_back();
        let b = ByteVector::from(&[1i8, 2][..]);
        assert_eq!(a, b);
        assert_ne!(a.capacity(), b.capacity());
    }
}
