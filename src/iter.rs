use crate::{Slice, SliceMut, SliceRange, slice_raw::SliceRaw};
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
};

/// Immutable [`Slice`] iterator.
///
/// This struct is created by the [`iter`] method.
///
/// [`iter`]: crate::Slice::iter
pub struct Iter<'a, T> {
    pub(crate) raw: SliceRaw<T>,
    pub(crate) marker: PhantomData<&'a T>,
}

/// Mutable [`SliceMut`] iterator.
///
/// This struct is created by the [`iter_mut`] method.
///
/// [`iter_mut`]: crate::SliceMut::iter_mut
pub struct IterMut<'a, T> {
    pub(crate) raw: SliceRaw<T>,
    pub(crate) marker: PhantomData<&'a mut T>,
}

// SAFETY: Same as the corresponding slice iterators.
unsafe impl<T> Send for Iter<'_, T> where T: Sync {}
unsafe impl<T> Sync for Iter<'_, T> where T: Sync {}
unsafe impl<T> Send for IterMut<'_, T> where T: Send {}
unsafe impl<T> Sync for IterMut<'_, T> where T: Sync {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    /// Returns a view of the elements that have not been yielded yet.
    pub fn as_view(&self) -> Slice<'a, T> {
        // SAFETY: The remaining elements are borrowed for 'a.
        unsafe { Slice::from_raw(self.raw) }
    }
}

impl<'a, T> IterMut<'a, T> {
    /// Returns a view of the elements that have not been yielded yet.
    pub fn as_view(&self) -> Slice<'_, T> {
        // SAFETY: Shared for the borrow of `self`, which blocks `next`.
        unsafe { Slice::from_raw(self.raw) }
    }

    /// Converts into a mutable view of the elements not yet yielded.
    pub fn into_view(self) -> SliceMut<'a, T> {
        // SAFETY: The remaining elements were never handed out.
        unsafe { SliceMut::from_raw(self.raw) }
    }
}

impl<T> Debug for Iter<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_view()).finish()
    }
}

impl<T> Debug for IterMut<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.as_view()).finish()
    }
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self {
            raw: SliceRaw::empty(),
            marker: PhantomData,
        }
    }
}

macro_rules! iter_with_raw {
    ($t:ident, $item:ty, $get:ident) => {
        impl<'a, T> Iterator for $t<'a, T> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                if self.raw.is_empty() {
                    None
                } else {
                    // SAFETY: The view is nonempty, and each element is
                    // yielded once before being dropped from the view.
                    unsafe {
                        let out = self.raw.$get(0);
                        self.raw = self.raw.sub(SliceRange::new(1, self.raw.len()));
                        Some(out)
                    }
                }
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.raw.len(), Some(self.raw.len()))
            }

            fn count(self) -> usize {
                self.raw.len()
            }

            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                let skip = n.min(self.raw.len());
                // SAFETY: `skip` is clamped to the length.
                self.raw = unsafe { self.raw.sub(SliceRange::new(skip, self.raw.len())) };
                self.next()
            }
        }

        impl<'a, T> DoubleEndedIterator for $t<'a, T> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                let last = self.raw.len().checked_sub(1)?;
                // SAFETY: `last` is in bounds and is removed from the view
                // before it is yielded.
                unsafe {
                    self.raw = self.raw.sub(SliceRange::to(last));
                    let tail = SliceRaw::from_raw_parts(self.raw.ptr.add(last), 1);
                    Some(tail.$get(0))
                }
            }
        }

        impl<T> ExactSizeIterator for $t<'_, T> {}

        impl<T> FusedIterator for $t<'_, T> {}
    };
}

iter_with_raw!(Iter, &'a T, get_ref);
iter_with_raw!(IterMut, &'a mut T, get_mut);

#[cfg(test)]
mod tests {
    use crate::{Slice, SliceMut};

    #[test]
    fn forward_and_back() {
        let buffer = [1, 2, 3, 4, 5];
        let slice = Slice::from_buffer_range(&buffer, 1..4).unwrap();
        let mut iter = slice.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.as_view(), [3]);
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn nth() {
        let buffer = [1, 2, 3];
        let mut iter = Slice::new(&buffer).iter();
        assert_eq!(iter.nth(1), Some(&2));
        assert_eq!(iter.nth(5), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn collect() {
        let buffer = [3, 1, 2];
        let slice = Slice::new(&buffer);
        let sum: i32 = slice.into_iter().sum();
        assert_eq!(sum, 6);
        assert_eq!(slice.iter().rev().copied().collect::<Vec<_>>(), [2, 1, 3]);
    }

    #[test]
    fn iter_mut() {
        let mut buffer = [1, 2, 3, 4];
        let slice = SliceMut::from_buffer(&mut buffer, 3).unwrap();
        for (i, x) in slice.into_iter().enumerate() {
            *x += i as i32 * 10;
        }
        assert_eq!(buffer, [1, 12, 23, 4]);
    }
}
