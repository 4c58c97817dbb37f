use crate::ByteVector;

/// The initial contents of a new [`ByteVector`].
///
/// Most callers never name this type: [`ByteVector::new`] accepts anything
/// that converts into a `Seed`.
///
/// ```rust
/// use bytevector::ByteVector;
///
/// let zeroed = ByteVector::new(3).unwrap();
/// let signed = ByteVector::new(&[1i8, -1, 7]).unwrap();
/// let raw = ByteVector::new(&b"\x01\xff\x07"[..]).unwrap();
/// assert_eq!(signed, raw);
/// assert_eq!(ByteVector::new(&signed).unwrap(), signed);
/// assert_eq!(zeroed.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Seed<'a> {
    /// `n` zeroed elements. Negative lengths are rejected.
    Length(i64),
    /// A copy of signed bytes.
    Signed(&'a [i8]),
    /// A copy of raw bytes, each reinterpreted as two's complement `i8`.
    Raw(&'a [u8]),
    /// A copy of another vector's live elements.
    Vector(&'a ByteVector),
}

impl Seed<'_> {
    /// Number of elements the seeded vector will hold.
    pub(crate) fn requested_len(&self) -> i64 {
        match self {
            Self::Length(n) => *n,
            Self::Signed(src) => saturating_i64(src.len()),
            Self::Raw(src) => saturating_i64(src.len()),
            Self::Vector(src) => saturating_i64(src.len()),
        }
    }

    /// Writes the seeded contents into `dst`, which is exactly
    /// `requested_len()` slots long and zeroed.
    pub(crate) fn copy_into(&self, dst: &mut [i8]) {
        match self {
            Self::Length(_) => {}
            Self::Signed(src) => dst.copy_from_slice(src),
            Self::Raw(src) => {
                for (slot, &byte) in dst.iter_mut().zip(src.iter()) {
                    *slot = i8::from_ne_bytes([byte]);
                }
            }
            Self::Vector(src) => dst.copy_from_slice(src.live()),
        }
    }
}

fn saturating_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl From<i64> for Seed<'_> {
    fn from(n: i64) -> Self {
        Self::Length(n)
    }
}

impl From<i32> for Seed<'_> {
    fn from(n: i32) -> Self {
        Self::Length(i64::from(n))
    }
}

impl From<usize> for Seed<'_> {
    fn from(n: usize) -> Self {
        Self::Length(saturating_i64(n))
    }
}

impl<'a> From<&'a [i8]> for Seed<'a> {
    fn from(src: &'a [i8]) -> Self {
        Self::Signed(src)
    }
}

impl<'a, const N: usize> From<&'a [i8; N]> for Seed<'a> {
    fn from(src: &'a [i8; N]) -> Self {
        Self::Signed(src)
    }
}

impl<'a> From<&'a [u8]> for Seed<'a> {
    fn from(src: &'a [u8]) -> Self {
        Self::Raw(src)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Seed<'a> {
    fn from(src: &'a [u8; N]) -> Self {
        Self::Raw(src)
    }
}

impl<'a> From<&'a ByteVector> for Seed<'a> {
    fn from(src: &'a ByteVector) -> Self {
        Self::Vector(src)
    }
}
