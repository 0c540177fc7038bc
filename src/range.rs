use crate::BoundsError;
use std::ops::Range;

/// A half-open range `start..end` of element offsets.
///
/// This is the `{start, end}` pair generated code carries around when it
/// builds sub-slices. It converts to and from [`Range<usize>`], and every
/// operation that accepts one also accepts the other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceRange {
    pub start: usize,
    pub end: usize,
}

impl SliceRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The range `0..end`.
    pub const fn to(end: usize) -> Self {
        Self { start: 0, end }
    }

    /// Returns the number of offsets covered, or zero if `start > end`.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Validates the range against a view of `len` elements.
    pub(crate) fn check(self, len: usize) -> Result<Self, BoundsError> {
        let Self { start, end } = self;
        if start > end {
            Err(BoundsError::Inverted { start, end })
        } else if end > len {
            Err(BoundsError::Range { start, end, len })
        } else {
            Ok(self)
        }
    }

    /// Validates the range against a buffer holding `capacity` elements.
    pub(crate) fn check_capacity(self, capacity: usize) -> Result<Self, BoundsError> {
        self.check(capacity).map_err(|e| match e {
            BoundsError::Range { end, .. } => BoundsError::Capacity { end, capacity },
            other => other,
        })
    }
}

impl From<Range<usize>> for SliceRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<SliceRange> for Range<usize> {
    fn from(range: SliceRange) -> Self {
        range.start..range.end
    }
}
