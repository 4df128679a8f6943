//! Half-open ranges over any [`Point`] type.
//!
//! [`Range`] is an immutable value `[start, end)`. Construction always orders
//! its two points, so it never fails. The predicates and combinations below are
//! written once against the [`Point`] contract and shared by every concrete
//! binding in [`crate::instances`].

mod pieces;

use std::fmt::{self, Display};
use std::ops::{Bound, RangeBounds};

use crate::error::{RangeError, Result};
use crate::point::{self, Point};

pub use pieces::Pieces;

/// Half-open interval `[start, end)` with `start <= end`.
///
/// Equality, ordering and hashing are structural: by `start`, then by `end`.
/// A zero-length range `[p, p)` is valid and stands for the single instant `p`.
///
/// # Example
///
/// ```rust
/// use ranges::Range;
///
/// let a = Range::of(55_i64, 42);
/// assert_eq!(a.start(), &42);
/// assert_eq!(a.end(), &55);
/// assert_eq!(a.to_string(), "[42,55)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range<P: Point> {
    start: P,
    end: P,
}

// ─────────────────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────────────────

impl<P: Point> Range<P> {
    /// Creates the range spanned by `a` and `b`, in whichever order they come.
    pub fn of(a: P, b: P) -> Self {
        let (start, end) = point::minmax(a, b);
        Self { start, end }
    }

    /// Creates a range of the same kind as `self` from new bounds.
    ///
    /// The bounds are normalized the same way [`Range::of`] does.
    pub fn between(&self, start_inclusive: P, end_exclusive: P) -> Self {
        Self::of(start_inclusive, end_exclusive)
    }

    pub fn start(&self) -> &P {
        &self.start
    }

    pub fn end(&self) -> &P {
        &self.end
    }

    /// Consumes the range and returns `(start, end)`.
    pub fn into_bounds(self) -> (P, P) {
        (self.start, self.end)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Predicates
// ─────────────────────────────────────────────────────────────────────

impl<P: Point> Range<P> {
    /// Distance from `start` to `end`, never below [`Point::zero`].
    pub fn length(&self) -> P::Measure {
        P::meter(&self.start, &self.end)
    }

    /// Returns `true` for a zero-length range `[p, p)`.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `start <= p < end`.
    ///
    /// A zero-length range `[p, p)` contains its own start.
    pub fn contains(&self, p: &P) -> bool {
        (self.start <= *p && *p < self.end) || (self.is_empty() && *p == self.start)
    }

    /// Returns true if `other` lies completely within `self`.
    pub fn contains_range(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns true if the ranges touch at a boundary.
    ///
    /// Meeting ranges never overlap.
    pub fn meets(&self, other: &Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Returns true if the ranges share at least one point.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ranges::Range;
    ///
    /// let a = Range::of(42_i64, 55);
    /// assert!(a.overlaps(&Range::of(51, 1023)));
    /// assert!(!a.overlaps(&Range::of(55, 1023))); // meets only
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    fn meets_or_overlaps(&self, other: &Self) -> bool {
        self.meets(other) || self.overlaps(other)
    }

    /// Returns the range strictly between two ranges that neither meet nor
    /// overlap, or `None` otherwise.
    pub fn gap(&self, other: &Self) -> Option<Self> {
        if self.end < other.start {
            Some(Self {
                start: self.end.clone(),
                end: other.start.clone(),
            })
        } else if other.end < self.start {
            Some(Self {
                start: other.end.clone(),
                end: self.start.clone(),
            })
        } else {
            None
        }
    }
}

impl<P: Point + Display> Range<P> {
    /// Fails with [`RangeError::IllegalAdjacency`] unless the ranges meet or
    /// overlap.
    pub fn check_meets_or_overlaps(&self, other: &Self) -> Result<()> {
        if self.meets_or_overlaps(other) {
            return Ok(());
        }
        log::debug!("rejecting disjoint ranges {} and {}", self, other);
        Err(RangeError::IllegalAdjacency {
            this: self.to_string(),
            other: other.to_string(),
        })
    }

    /// Length of the part shared by two meeting or overlapping ranges.
    ///
    /// Meeting ranges share a single boundary and yield [`Point::zero`].
    ///
    /// # Errors
    ///
    /// [`RangeError::IllegalAdjacency`] if the ranges are disjoint.
    pub fn overlap(&self, other: &Self) -> Result<P::Measure> {
        self.check_meets_or_overlaps(other)?;
        let start = point::max(self.start.clone(), other.start.clone());
        let end = point::min(self.end.clone(), other.end.clone());
        Ok(P::meter(&start, &end))
    }

    // ─────────────────────────────────────────────────────────────────
    // Combinations
    // ─────────────────────────────────────────────────────────────────

    /// Smallest range covering both `self` and `other`.
    ///
    /// # Errors
    ///
    /// [`RangeError::IllegalAdjacency`] if the ranges are disjoint, since the
    /// join would silently cover the gap between them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ranges::Range;
    ///
    /// let joined = Range::of(42_i64, 55).join_with(&Range::of(51, 1023)).unwrap();
    /// assert_eq!(joined, Range::of(42, 1023));
    /// assert!(Range::of(42_i64, 55).join_with(&Range::of(1023, 1610)).is_err());
    /// ```
    pub fn join_with(&self, other: &Self) -> Result<Self> {
        self.check_meets_or_overlaps(other)?;
        Ok(Self {
            start: point::min(self.start.clone(), other.start.clone()),
            end: point::max(self.end.clone(), other.end.clone()),
        })
    }
}

impl<P: Point> Range<P> {
    /// Shared part of two overlapping ranges.
    ///
    /// Ranges that merely meet have nothing in common and yield `None`.
    pub fn intersect_with(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            start: point::max(self.start.clone(), other.start.clone()),
            end: point::min(self.end.clone(), other.end.clone()),
        })
    }

    /// Removes `punch` from `self`, yielding what is left of `self` from left
    /// to right.
    ///
    /// - `punch` covers `self`: nothing.
    /// - `punch` clips one edge: one remainder.
    /// - `punch` lies strictly inside: two remainders.
    /// - `punch` does not overlap `self`: `self`, unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ranges::Range;
    ///
    /// let rest: Vec<_> = Range::of(42_i64, 1610)
    ///     .punch_through(&Range::of(55, 1023))
    ///     .collect();
    /// assert_eq!(rest, vec![Range::of(42, 55), Range::of(1023, 1610)]);
    /// ```
    pub fn punch_through(&self, punch: &Self) -> Pieces<P> {
        if !self.overlaps(punch) {
            return Pieces::new(Some(self.clone()), None);
        }
        let left = (self.start < punch.start).then(|| Self {
            start: self.start.clone(),
            end: punch.start.clone(),
        });
        let right = (punch.end < self.end).then(|| Self {
            start: punch.end.clone(),
            end: self.end.clone(),
        });
        Pieces::new(left, right)
    }

    /// Replaces the part of `self` under `punch` by `punch` itself.
    ///
    /// Returns the left remainder, `punch` and the right remainder, skipping
    /// remainders that are absent. A `punch` that does not overlap `self`
    /// leaves `[self]`.
    pub fn splice(&self, punch: &Self) -> Vec<Self> {
        if !self.overlaps(punch) {
            return vec![self.clone()];
        }
        let mut pieces = self.punch_through(punch);
        let mut out = Vec::with_capacity(3);
        if self.start < punch.start {
            out.extend(pieces.next());
        }
        out.push(punch.clone());
        out.extend(pieces);
        out
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl<P: Point + Display> Display for Range<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}

impl<P: Point> RangeBounds<P> for Range<P> {
    fn start_bound(&self) -> Bound<&P> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&P> {
        Bound::Excluded(&self.end)
    }
}

impl<P: Point> From<std::ops::Range<P>> for Range<P> {
    /// Normalizes a reversed `std` range instead of treating it as empty.
    fn from(range: std::ops::Range<P>) -> Self {
        Self::of(range.start, range.end)
    }
}

impl<P: Point> From<Range<P>> for std::ops::Range<P> {
    fn from(range: Range<P>) -> Self {
        range.start..range.end
    }
}

// =============================================================================
// Range Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<P: Point + serde::Serialize> serde::Serialize for Range<P> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Range", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, P: Point + serde::Deserialize<'de>> serde::Deserialize<'de> for Range<P> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            start: T,
            end: T,
        }

        let raw = Raw::<P>::deserialize(deserializer)?;
        Ok(Self::of(raw.start, raw.end))
    }
}
