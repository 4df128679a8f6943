use std::iter::FusedIterator;

use super::Range;
use crate::point::Point;

/// The remainders left by [`Range::punch_through`], in left-to-right order.
///
/// Holds at most two ranges. Clone it to walk the same remainders again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pieces<P: Point> {
    left: Option<Range<P>>,
    right: Option<Range<P>>,
}

impl<P: Point> Pieces<P> {
    pub(super) fn new(left: Option<Range<P>>, right: Option<Range<P>>) -> Self {
        Self { left, right }
    }

    /// Returns `true` when nothing is left.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<P: Point> Iterator for Pieces<P> {
    type Item = Range<P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.left.take().or_else(|| self.right.take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.left.is_some()) + usize::from(self.right.is_some());
        (n, Some(n))
    }
}

impl<P: Point> DoubleEndedIterator for Pieces<P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.right.take().or_else(|| self.left.take())
    }
}

impl<P: Point> ExactSizeIterator for Pieces<P> {}

impl<P: Point> FusedIterator for Pieces<P> {}
