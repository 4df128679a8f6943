use chrono::{DateTime, TimeDelta, Utc};

use crate::point::Point;
use crate::range::Range;

/// Range over UTC instants measured as a [`TimeDelta`].
///
/// # Example
///
/// ```rust
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use ranges::InstantRange;
///
/// let start = Utc.timestamp_opt(42, 0).unwrap();
/// let end = Utc.timestamp_opt(51, 0).unwrap();
/// let r = InstantRange::of(end, start);
/// assert_eq!(r.length(), TimeDelta::seconds(9));
/// ```
pub type InstantRange = Range<DateTime<Utc>>;

impl Point for DateTime<Utc> {
    type Measure = TimeDelta;

    #[inline]
    fn meter(start: &Self, end: &Self) -> Self::Measure {
        end.signed_duration_since(*start)
    }

    #[inline]
    fn zero() -> Self::Measure {
        TimeDelta::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_length_is_duration_between() {
        let r = InstantRange::of(at(1023), at(42));
        assert_eq!(r.length(), TimeDelta::seconds(981));
        assert_eq!(InstantRange::of(at(42), at(42)).length(), TimeDelta::zero());
    }

    #[test]
    fn test_overlap_as_duration() {
        let x = InstantRange::of(at(42), at(55));
        let y = InstantRange::of(at(51), at(1023));
        assert_eq!(x.overlap(&y), Ok(TimeDelta::seconds(4)));
    }

    #[test]
    fn test_display_uses_instant_rendering() {
        let r = InstantRange::of(at(42), at(51));
        assert_eq!(r.to_string(), format!("[{},{})", at(42), at(51)));
    }

    #[test]
    fn test_subsecond_precision() {
        let start = Utc.timestamp_opt(42, 500_000_000).unwrap();
        let r = InstantRange::of(start, at(43));
        assert_eq!(r.length(), TimeDelta::milliseconds(500));
        assert!(r.contains(&start));
        assert!(!r.contains(&at(42)));
    }
}
