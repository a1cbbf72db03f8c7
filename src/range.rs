//! Conversion of arbitrary range expressions into checked `start..end` pairs.

use core::ops::{Bound, Range, RangeBounds};

use crate::{Error, Result};

/// Resolves `range` against a vector of length `len`.
///
/// Fails if the start is past the end, or the end is past `len`. The
/// reported index is the offending bound.
pub(crate) fn checked_range<R: RangeBounds<usize>>(range: R, len: usize) -> Result<Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&x) => x,
        Bound::Excluded(&x) => x.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&x) => x.saturating_add(1),
        Bound::Excluded(&x) => x,
        Bound::Unbounded => len,
    };

    if end > len {
        return Err(Error::out_of_range(end, len));
    }
    if start > end {
        return Err(Error::out_of_range(start, len));
    }

    Ok(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_bound_kind() {
        assert_eq!(checked_range(.., 5), Ok(0..5));
        assert_eq!(checked_range(1..3, 5), Ok(1..3));
        assert_eq!(checked_range(1..=3, 5), Ok(1..4));
        assert_eq!(checked_range(2.., 5), Ok(2..5));
        assert_eq!(checked_range(..=4, 5), Ok(0..5));
        assert_eq!(
            checked_range((Bound::Excluded(1), Bound::Unbounded), 5),
            Ok(2..5)
        );
    }

    #[test]
    fn empty_ranges_are_valid() {
        assert_eq!(checked_range(0..0, 0), Ok(0..0));
        assert_eq!(checked_range(3..3, 3), Ok(3..3));
    }

    #[test]
    fn rejects_reversed_and_overlong_ranges() {
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = checked_range(3..1, 5);
        assert_eq!(reversed, Err(Error::out_of_range(3, 5)));
        assert_eq!(checked_range(0..6, 5), Err(Error::out_of_range(6, 5)));
        assert_eq!(checked_range(..=5, 5), Err(Error::out_of_range(6, 5)));
    }
}
