//! A resizable container for signed 8-bit integers.
//!
//! [`ByteVector`] owns a fixed-width buffer and splits it into a live length
//! and a capacity. Appends are amortized O(1) through capacity doubling,
//! capacity can be planned explicitly with [`ByteVector::reserve`], and every
//! accessor comes in an unchecked flavor and a checked `safe_*` flavor that
//! validates its arguments and never mutates on failure.
//!
//! ```rust
//! use bytevector::{ByteVector, ErrorKind};
//!
//! let mut v = ByteVector::new(4).unwrap();
//! v.resize(6, 9);
//! assert_eq!(v.len(), 6);
//! assert_eq!(v.get(4), Ok(9));
//!
//! let err = v.safe_set(0, 200).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! assert_eq!(v.get(0), Ok(0));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod reserve;
mod seed;
pub mod validate;
mod vector;


pub use error::{ArgumentError, ErrorKind, RangeError, VectorError};
pub use options::{ValueRange, VectorOptions};
pub use reserve::ReservePlan;
pub use seed::Seed;
pub use vector::ByteVector;
