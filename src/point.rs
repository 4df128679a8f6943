//! The point/measure contract every range is built on.
//!
//! A [`Point`] is a totally ordered value with an associated measure type: the
//! distance (or duration) between two points. Concrete bindings live in
//! [`crate::instances`].

/// A totally ordered point type with a measure between two points.
///
/// The range algebra only ever calls [`Point::meter`] with `start <= end`, so
/// implementations for unsigned types need not worry about underflow.
///
/// # Example
///
/// ```rust
/// use ranges::Point;
///
/// assert_eq!(<i64 as Point>::meter(&42, &51), 9);
/// assert_eq!(<i64 as Point>::zero(), 0);
/// ```
pub trait Point: Ord + Clone {
    /// Distance between two points.
    type Measure: Ord + Clone;

    /// Measures the distance from `start` to `end`.
    fn meter(start: &Self, end: &Self) -> Self::Measure;

    /// The identity measure, the length of a zero-length range.
    fn zero() -> Self::Measure;
}

/// Returns the smaller of two points, `a` on ties.
#[inline]
pub fn min<P: Ord>(a: P, b: P) -> P {
    std::cmp::min(a, b)
}

/// Returns the larger of two points, `b` on ties.
#[inline]
pub fn max<P: Ord>(a: P, b: P) -> P {
    std::cmp::max(a, b)
}

/// Returns both points ordered as `(min, max)`.
#[inline]
pub fn minmax<P: Ord>(a: P, b: P) -> (P, P) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}
