//! ranges - generic half-open interval algebra
//!
//! A [`Range`] is an immutable interval `[start, end)` over any totally ordered
//! [`Point`] type with an associated measure. Ranges can be tested against each
//! other (meets, overlaps, contains) and combined (join, intersection,
//! punch-through). Bindings for integers, UTC instants and `qtty` quantities
//! are provided in [`instances`].
//!
//! ```rust
//! use ranges::{IntegerRange, RangeError};
//!
//! let a = IntegerRange::of(42, 55);
//! let b = IntegerRange::of(51, 1023);
//!
//! assert_eq!(a.overlap(&b), Ok(4));
//! assert_eq!(a.join_with(&b), Ok(IntegerRange::of(42, 1023)));
//! assert_eq!(a.intersect_with(&b), Some(IntegerRange::of(51, 55)));
//!
//! let rest: Vec<_> = a.punch_through(&b).collect();
//! assert_eq!(rest, vec![IntegerRange::of(42, 51)]);
//!
//! let far = IntegerRange::of(1023, 1610);
//! assert!(matches!(a.join_with(&far), Err(RangeError::IllegalAdjacency { .. })));
//! ```

pub mod error;
pub mod instances;
pub mod point;
pub mod range;

pub use error::{RangeError, Result};
pub use instances::{InstantRange, IntegerRange, Position, QuantityRange};
pub use point::{max, min, minmax, Point};
pub use range::{Pieces, Range};
