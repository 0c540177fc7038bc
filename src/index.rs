use crate::{BoundsError, Slice, SliceMut, SliceRange};
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// A helper trait for indexing operations.
///
/// An element offset yields a reference to the element, any range type yields
/// a sub-slice over the same storage.
pub trait SliceIndex<T> {
    /// The output type returned by non-`mut` methods.
    type Output<'a>
    where
        T: 'a;

    /// The output type returned by `mut` methods.
    type OutputMut<'a>
    where
        T: 'a;

    /// Returns the output at this location, if in bounds.
    fn get<'a>(self, slice: Slice<'a, T>) -> Result<Self::Output<'a>, BoundsError>;

    /// Returns the mutable output at this location, if in bounds.
    fn get_mut<'a>(self, slice: SliceMut<'a, T>) -> Result<Self::OutputMut<'a>, BoundsError>;
}

impl<T> SliceIndex<T> for usize {
    type Output<'a>
        = &'a T
    where
        T: 'a;

    type OutputMut<'a>
        = &'a mut T
    where
        T: 'a;

    fn get<'a>(self, slice: Slice<'a, T>) -> Result<Self::Output<'a>, BoundsError> {
        let len = slice.len();
        if self < len {
            // SAFETY: The index is in bounds and `Slice` holds a shared borrow
            // for 'a.
            Ok(unsafe { slice.raw.get_ref(self) })
        } else {
            Err(BoundsError::Index { index: self, len })
        }
    }

    fn get_mut<'a>(self, slice: SliceMut<'a, T>) -> Result<Self::OutputMut<'a>, BoundsError> {
        let len = slice.len();
        if self < len {
            // SAFETY: The index is in bounds and `SliceMut` is consumed, so
            // its exclusive borrow moves into the returned reference.
            Ok(unsafe { slice.raw.get_mut(self) })
        } else {
            Err(BoundsError::Index { index: self, len })
        }
    }
}

/// Converts a range type to a [`SliceRange`] given the length of the view.
trait ToSliceRange {
    fn to_slice_range(self, len: usize) -> Result<SliceRange, BoundsError>;
}

impl ToSliceRange for SliceRange {
    fn to_slice_range(self, _len: usize) -> Result<SliceRange, BoundsError> {
        Ok(self)
    }
}

impl ToSliceRange for Range<usize> {
    fn to_slice_range(self, _len: usize) -> Result<SliceRange, BoundsError> {
        Ok(self.into())
    }
}

impl ToSliceRange for RangeTo<usize> {
    fn to_slice_range(self, _len: usize) -> Result<SliceRange, BoundsError> {
        Ok(SliceRange::to(self.end))
    }
}

impl ToSliceRange for RangeFrom<usize> {
    fn to_slice_range(self, len: usize) -> Result<SliceRange, BoundsError> {
        if self.start > len {
            Err(BoundsError::Range {
                start: self.start,
                end: len,
                len,
            })
        } else {
            Ok(SliceRange::new(self.start, len))
        }
    }
}

impl ToSliceRange for RangeFull {
    fn to_slice_range(self, len: usize) -> Result<SliceRange, BoundsError> {
        Ok(SliceRange::to(len))
    }
}

impl ToSliceRange for RangeInclusive<usize> {
    fn to_slice_range(self, len: usize) -> Result<SliceRange, BoundsError> {
        // An exhausted iterator is empty even though `start <= end`.
        let exhausted = self.is_empty() && self.start() <= self.end();
        let (start, end) = self.into_inner();
        match end.checked_add(1) {
            Some(end) if exhausted => Ok(SliceRange::new(end, end)),
            Some(end) => Ok(SliceRange::new(start, end)),
            None => Err(BoundsError::Range { start, end, len }),
        }
    }
}

impl ToSliceRange for RangeToInclusive<usize> {
    fn to_slice_range(self, len: usize) -> Result<SliceRange, BoundsError> {
        (0..=self.end).to_slice_range(len)
    }
}

macro_rules! range_index {
    ($($t:ty),*) => {
        $(
            impl<T> SliceIndex<T> for $t {
                type Output<'a>
                    = Slice<'a, T>
                where
                    T: 'a;

                type OutputMut<'a>
                    = SliceMut<'a, T>
                where
                    T: 'a;

                fn get<'a>(self, slice: Slice<'a, T>) -> Result<Self::Output<'a>, BoundsError> {
                    let range = self.to_slice_range(slice.len())?.check(slice.len())?;
                    // SAFETY: The range was checked against the length of the
                    // view.
                    Ok(unsafe { Slice::from_raw(slice.raw.sub(range)) })
                }

                fn get_mut<'a>(
                    self,
                    slice: SliceMut<'a, T>,
                ) -> Result<Self::OutputMut<'a>, BoundsError> {
                    let range = self.to_slice_range(slice.len())?.check(slice.len())?;
                    // SAFETY: The range was checked and `slice` is consumed.
                    Ok(unsafe { SliceMut::from_raw(slice.raw.sub(range)) })
                }
            }
        )*
    };
}

range_index!(
    SliceRange,
    Range<usize>,
    RangeTo<usize>,
    RangeFrom<usize>,
    RangeFull,
    RangeInclusive<usize>,
    RangeToInclusive<usize>
);

#[cfg(test)]
mod tests {
    use crate::{BoundsError, Slice};

    const BUFFER: [i32; 5] = [10, 20, 30, 40, 50];

    #[test]
    fn range_types() {
        let slice = Slice::new(&BUFFER);
        assert_eq!(slice.get(1..4).unwrap(), [20, 30, 40]);
        assert_eq!(slice.get(..2).unwrap(), [10, 20]);
        assert_eq!(slice.get(3..).unwrap(), [40, 50]);
        assert_eq!(slice.get(..).unwrap(), BUFFER);
        assert_eq!(slice.get(1..=1).unwrap(), [20]);
        assert_eq!(slice.get(..=4).unwrap(), BUFFER);
    }

    #[test]
    fn exhausted_inclusive_range() {
        let slice = Slice::new(&BUFFER);
        let mut range = 1..=1;
        assert_eq!(range.next(), Some(1));
        let empty = slice.get(range).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.as_ptr(), slice.get(2..2).unwrap().as_ptr());

        let mut range = 4..=4;
        range.next();
        assert!(slice.get(range).unwrap().is_empty());
        assert_eq!(
            slice.get(3..=1).unwrap_err(),
            BoundsError::Inverted { start: 3, end: 2 }
        );
    }

    #[test]
    fn range_errors() {
        let slice = Slice::new(&BUFFER);
        assert_eq!(
            slice.get(6..).unwrap_err(),
            BoundsError::Range {
                start: 6,
                end: 5,
                len: 5
            }
        );
        assert!(slice.get(5..).unwrap().is_empty());
        assert_eq!(
            slice.get(..=5).unwrap_err(),
            BoundsError::Range {
                start: 0,
                end: 6,
                len: 5
            }
        );
        assert_eq!(
            slice.get(0..=usize::MAX).unwrap_err(),
            BoundsError::Range {
                start: 0,
                end: usize::MAX,
                len: 5
            }
        );
    }
}
