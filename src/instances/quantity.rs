//! Ranges over physical quantities.
//!
//! `qtty` quantities are `f64`-backed and only partially ordered. [`Position`]
//! wraps one under IEEE-754 total order (`total_cmp`) so it can serve as a
//! range point; the measure between two positions is again a position in the
//! same unit.

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use qtty::{Quantity, Unit};

use crate::point::Point;
use crate::range::Range;

/// Range over quantities of unit `U`, measured in `U`.
pub type QuantityRange<U> = Range<Position<U>>;

/// A quantity under IEEE-754 total order.
///
/// `-0.0` sorts before `0.0`. Every NaN is stored as the positive quiet NaN,
/// so NaN sorts after every number and a length is never negative.
pub struct Position<U: Unit>(Quantity<U>);

impl<U: Unit> Position<U> {
    pub fn new(quantity: Quantity<U>) -> Self {
        Self::from_f64(quantity.value())
    }

    pub fn from_f64(value: f64) -> Self {
        let value = if value.is_nan() { f64::NAN } else { value };
        Self(Quantity::<U>::new(value))
    }

    pub const fn quantity(&self) -> Quantity<U> {
        self.0
    }

    pub const fn value(&self) -> f64 {
        self.0.value()
    }

    /// Converts this position to another unit of the same dimension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qtty::{Day, Second};
    /// use ranges::Position;
    ///
    /// let p = Position::<Second>::from_f64(86400.0);
    /// let d: Position<Day> = p.to();
    /// assert!((d.value() - 1.0).abs() < 1e-12);
    /// ```
    pub fn to<T: Unit<Dim = U::Dim>>(self) -> Position<T> {
        Position::new(self.0.to())
    }
}

impl<U: Unit> Point for Position<U> {
    type Measure = Position<U>;

    fn meter(start: &Self, end: &Self) -> Self::Measure {
        // inf - inf is NaN, possibly sign-bit set
        Self::new(end.0 - start.0)
    }

    fn zero() -> Self::Measure {
        Self::from_f64(0.0)
    }
}

impl<U: Unit> Range<Position<U>> {
    /// Creates the range spanned by two raw values in unit `U`.
    pub fn from_f64(a: f64, b: f64) -> Self {
        Self::of(Position::from_f64(a), Position::from_f64(b))
    }

    /// Converts both bounds to another unit of the same dimension.
    pub fn to<T: Unit<Dim = U::Dim>>(self) -> Range<Position<T>> {
        let (start, end) = self.into_bounds();
        Range::of(start.to(), end.to())
    }
}

impl<U: Unit> From<Quantity<U>> for Position<U> {
    fn from(quantity: Quantity<U>) -> Self {
        Self::new(quantity)
    }
}

impl<U: Unit> Clone for Position<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit> Copy for Position<U> {}

impl<U: Unit> PartialEq for Position<U> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<U: Unit> Eq for Position<U> {}

impl<U: Unit> Ord for Position<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().total_cmp(&other.value())
    }
}

impl<U: Unit> PartialOrd for Position<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: Unit> Hash for Position<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // total_cmp equality is bit equality
        self.value().to_bits().hash(state);
    }
}

impl<U: Unit> fmt::Debug for Position<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Position").field(&self.value()).finish()
    }
}

impl<U: Unit> Display for Position<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// =============================================================================
// Position Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Position<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Position<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self::from_f64(f64::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::{Day, Second};

    fn s(value: f64) -> Position<Second> {
        Position::from_f64(value)
    }

    #[test]
    fn test_total_order() {
        assert!(s(-0.0) < s(0.0));
        assert!(s(1.0) < s(f64::NAN));
        assert_eq!(s(f64::NAN), s(f64::NAN));
        assert_eq!(s(42.0).max(s(51.0)), s(51.0));
    }

    #[test]
    fn test_length_in_unit() {
        let r = QuantityRange::<Second>::from_f64(100.0, 0.0);
        assert_eq!(r.start(), &s(0.0));
        assert_eq!(r.length(), s(100.0));
        assert_eq!(r.to_string(), "[0,100)");
    }

    #[test]
    fn test_range_to_conversion() {
        let r = QuantityRange::<Second>::from_f64(0.0, 86400.0);
        let days: QuantityRange<Day> = r.to();
        assert!((days.start().value() - 0.0).abs() < 1e-12);
        assert!((days.end().value() - 1.0).abs() < 1e-12);
        assert!((days.length().value() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_in_unit() {
        let x = QuantityRange::<Second>::from_f64(0.0, 100.0);
        let y = QuantityRange::<Second>::from_f64(50.0, 150.0);
        assert_eq!(x.overlap(&y), Ok(s(50.0)));
        assert_eq!(
            x.intersect_with(&y),
            Some(QuantityRange::from_f64(50.0, 100.0))
        );
    }

    #[test]
    fn test_negative_nan_is_canonical() {
        let neg = s(-f64::NAN);
        assert!(neg.value().is_nan());
        assert!(neg.value().is_sign_positive());
        assert_eq!(neg, s(f64::NAN));
        assert!(s(f64::INFINITY) < neg);

        let r = QuantityRange::of(neg, s(1.0));
        assert_eq!(r.start(), &s(1.0));
        assert!(r.length() >= Position::<Second>::zero());
    }

    #[test]
    fn test_nan_from_quantity() {
        let p: Position<Second> = Quantity::<Second>::new(-f64::NAN).into();
        assert!(p.value().is_sign_positive());
        assert_eq!(p, Position::new(Quantity::new(f64::NAN)));
    }

    #[test]
    fn test_infinite_bounds() {
        let whole = QuantityRange::<Second>::from_f64(f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(whole.length(), s(f64::INFINITY));
        assert!(whole.contains(&s(f64::MAX)));
        assert!(!whole.contains(&s(f64::INFINITY)));

        let at_infinity = QuantityRange::<Second>::from_f64(f64::INFINITY, f64::INFINITY);
        assert!(at_infinity.length() >= Position::<Second>::zero());

        let clipped = QuantityRange::<Second>::from_f64(0.0, f64::INFINITY);
        assert_eq!(whole.intersect_with(&clipped), Some(clipped));
        assert_eq!(whole.overlap(&clipped), Ok(s(f64::INFINITY)));
    }

    #[test]
    fn test_lengths_never_below_zero_at_extremes() {
        let extremes = [
            f64::NEG_INFINITY,
            f64::MIN,
            -0.0,
            0.0,
            f64::MIN_POSITIVE,
            f64::MAX,
            f64::INFINITY,
            f64::NAN,
            -f64::NAN,
        ];
        for &a in &extremes {
            for &b in &extremes {
                let r = QuantityRange::<Second>::from_f64(a, b);
                assert!(r.start() <= r.end(), "{r}");
                assert!(r.length() >= Position::<Second>::zero(), "{r} has length {}", r.length());
            }
        }
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::HashSet;

        let set: HashSet<Position<Second>> = [s(1.0), s(1.0), s(2.0)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
