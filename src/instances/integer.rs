use crate::point::Point;
use crate::range::Range;

/// Range over `i64` points measured in `u64`.
///
/// The measure is unsigned so that a range spanning the whole of `i64` still
/// has a representable length.
pub type IntegerRange = Range<i64>;

macro_rules! impl_integer_point {
    ($($t:ty => $m:ty),* $(,)?) => {
        $(
            impl Point for $t {
                type Measure = $m;

                #[inline]
                fn meter(start: &Self, end: &Self) -> Self::Measure {
                    end.abs_diff(*start)
                }

                #[inline]
                fn zero() -> Self::Measure {
                    0
                }
            }
        )*
    };
}

impl_integer_point!(
    i32 => u32,
    i64 => u64,
    u32 => u32,
    u64 => u64,
    usize => usize,
);
