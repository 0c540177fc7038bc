use crate::{BoundsError, Iter, SliceIndex, SliceRange, slice_raw::SliceRaw};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::Index,
};

/// A non-owning view over a contiguous run of elements.
///
/// A `Slice` is a base address and an element count, bound by `'a` to the
/// storage it views. It is semantically equivalent to `&'a [T]`, but every
/// access is spelled as a checked operation that reports a [`BoundsError`]
/// instead of panicking.
///
/// # Examples
///
/// ```
/// # use slice_glue::Slice;
/// let buffer = [10, 20, 30, 40, 50];
/// let slice = Slice::from_buffer(&buffer, 5)?;
/// assert_eq!(slice.len(), 5);
/// assert_eq!(*slice.get(2)?, 30);
///
/// let sub = slice.subslice(1..4)?;
/// assert_eq!(sub, [20, 30, 40]);
/// assert!(sub.get(3).is_err());
/// # Ok::<(), slice_glue::BoundsError>(())
/// ```
pub struct Slice<'a, T> {
    pub(crate) raw: SliceRaw<T>,
    pub(crate) marker: PhantomData<&'a [T]>,
}

// SAFETY: A `Slice` behaves like `&[T]`.
unsafe impl<T> Send for Slice<'_, T> where T: Sync {}
unsafe impl<T> Sync for Slice<'_, T> where T: Sync {}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<T> Default for Slice<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T> Slice<'a, T> {
    /// Wraps a raw view.
    ///
    /// # Safety
    ///
    /// `raw` must be valid for shared reads for `'a`.
    pub(crate) const unsafe fn from_raw(raw: SliceRaw<T>) -> Self {
        Self {
            raw,
            marker: PhantomData,
        }
    }

    /// An empty view.
    pub const fn empty() -> Self {
        // SAFETY: An empty view is never dereferenced.
        unsafe { Self::from_raw(SliceRaw::empty()) }
    }

    /// Views the whole of `buffer`.
    pub const fn new(buffer: &'a [T]) -> Self {
        // SAFETY: The view borrows `buffer` for 'a.
        unsafe { Self::from_raw(SliceRaw::from_slice(buffer)) }
    }

    /// Views the first `end` elements of `buffer`.
    ///
    /// # Errors
    ///
    /// [`BoundsError::Capacity`] if `end` exceeds the length of `buffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slice_glue::{BoundsError, Slice};
    /// let buffer = [1, 2, 3];
    /// assert_eq!(Slice::from_buffer(&buffer, 2)?.len(), 2);
    /// assert_eq!(
    ///     Slice::from_buffer(&buffer, 4),
    ///     Err(BoundsError::Capacity { end: 4, capacity: 3 }),
    /// );
    /// # Ok::<(), BoundsError>(())
    /// ```
    pub fn from_buffer(buffer: &'a [T], end: usize) -> Result<Self, BoundsError> {
        Self::from_buffer_range(buffer, SliceRange::to(end))
    }

    /// Views `buffer[range.start..range.end]`.
    ///
    /// # Errors
    ///
    /// [`BoundsError::Inverted`] if the range starts after it ends, or
    /// [`BoundsError::Capacity`] if it ends past the end of `buffer`.
    pub fn from_buffer_range(
        buffer: &'a [T],
        range: impl Into<SliceRange>,
    ) -> Result<Self, BoundsError> {
        let range = range.into().check_capacity(buffer.len())?;
        let raw = SliceRaw::from_slice(buffer);
        // SAFETY: The range was checked against the buffer, which stays
        // borrowed for 'a.
        Ok(unsafe { Self::from_raw(raw.sub(range)) })
    }

    /// Returns the number of elements in the view.
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the view contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the address of the first viewed element.
    pub const fn as_ptr(&self) -> *const T {
        self.raw.as_ptr()
    }

    /// Returns the viewed elements as a native slice.
    pub fn as_slice(&self) -> &'a [T] {
        // SAFETY: The view holds a shared borrow for 'a.
        unsafe { self.raw.as_slice() }
    }

    /// Returns an element or a sub-slice, depending on the type of index.
    ///
    /// - With a `usize`, returns a reference to the element at that offset.
    /// - With a range, returns a view over those elements.
    ///
    /// # Errors
    ///
    /// [`BoundsError::Index`] for an offset at or past the end, and
    /// [`BoundsError::Range`] or [`BoundsError::Inverted`] for a bad range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slice_glue::Slice;
    /// let buffer = [1, 2, 3, 4];
    /// let slice = Slice::new(&buffer);
    /// assert_eq!(slice.get(1), Ok(&2));
    /// assert_eq!(slice.get(1..3)?, [2, 3]);
    /// assert!(slice.get(4).is_err());
    /// # Ok::<(), slice_glue::BoundsError>(())
    /// ```
    pub fn get<I>(self, index: I) -> Result<I::Output<'a>, BoundsError>
    where
        I: SliceIndex<T>,
    {
        SliceIndex::get(index, self)
    }

    /// Returns a reference to an element without doing bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked(self, index: usize) -> &'a T {
        debug_assert!(index < self.len(), "tried to index out-of-bounds of a slice");
        // SAFETY: The caller guarantees the index is in bounds.
        unsafe { self.raw.get_ref(index) }
    }

    /// Returns a view over `range` that shares this view's storage.
    ///
    /// # Errors
    ///
    /// [`BoundsError::Inverted`] if the range starts after it ends, or
    /// [`BoundsError::Range`] if it ends past the end of this view.
    pub fn subslice(self, range: impl Into<SliceRange>) -> Result<Self, BoundsError> {
        self.get::<SliceRange>(range.into())
    }

    /// Divides the view into two at `mid`.
    pub fn split_at(self, mid: usize) -> Result<(Self, Self), BoundsError> {
        Ok((self.get(..mid)?, self.get(mid..)?))
    }

    /// Returns the first element, or `None` if the view is empty.
    pub fn first(self) -> Option<&'a T> {
        self.get(0).ok()
    }

    /// Returns the last element, or `None` if the view is empty.
    pub fn last(self) -> Option<&'a T> {
        self.len().checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Returns true if both views have the same base address and length.
    ///
    /// This is identity, not element equality; use `==` for that.
    ///
    /// ```
    /// # use slice_glue::Slice;
    /// let buffer = [1, 2, 3];
    /// let slice = Slice::new(&buffer);
    /// assert!(slice.subslice(0..3)?.same_view(&slice));
    /// assert!(!slice.subslice(1..3)?.same_view(&slice));
    /// # Ok::<(), slice_glue::BoundsError>(())
    /// ```
    pub fn same_view(&self, other: &Slice<'_, T>) -> bool {
        self.raw.same_view(&other.raw)
    }

    /// Returns an iterator over the elements.
    pub fn iter(self) -> Iter<'a, T> {
        Iter {
            raw: self.raw,
            marker: PhantomData,
        }
    }

    /// Copies the viewed elements into a new `Vec`.
    pub fn to_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(buffer: &'a [T]) -> Self {
        Self::new(buffer)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Slice<'a, T> {
    fn from(buffer: &'a [T; N]) -> Self {
        Self::new(buffer)
    }
}

impl<T> AsRef<[T]> for Slice<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

/// Panics with the [`BoundsError`] message if `index` is out of bounds.
impl<T> Index<usize> for Slice<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(element) => element,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Debug for Slice<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> PartialOrd for Slice<'_, T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T> Ord for Slice<'_, T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Hash for Slice<'_, T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::Slice;
    use crate::{BoundsError, SliceRange};

    const BUFFER: [i32; 5] = [10, 20, 30, 40, 50];

    #[test]
    fn from_buffer_length() {
        for end in 0..=BUFFER.len() {
            assert_eq!(Slice::from_buffer(&BUFFER, end).unwrap().len(), end);
        }
        assert_eq!(
            Slice::from_buffer(&BUFFER, 6),
            Err(BoundsError::Capacity {
                end: 6,
                capacity: 5
            })
        );
    }

    #[test]
    fn from_buffer_range() {
        let buffer = BUFFER;
        let slice = Slice::from_buffer_range(&buffer, SliceRange::new(2, 5)).unwrap();
        assert_eq!(slice.as_ptr(), &buffer[2] as *const i32);
        assert_eq!(slice, [30, 40, 50]);
        assert_eq!(
            Slice::from_buffer_range(&BUFFER, 4..2),
            Err(BoundsError::Inverted { start: 4, end: 2 })
        );
        assert_eq!(
            Slice::from_buffer_range(&BUFFER, 1..7),
            Err(BoundsError::Capacity {
                end: 7,
                capacity: 5
            })
        );
    }

    #[test]
    fn index_matches_buffer() {
        let buffer = BUFFER;
        let slice = Slice::new(&buffer);
        for (i, expected) in buffer.iter().enumerate() {
            assert!(std::ptr::eq(slice.get(i).unwrap(), expected));
        }
        assert_eq!(
            slice.get(5),
            Err(BoundsError::Index { index: 5, len: 5 })
        );
    }

    #[test]
    fn subslice_composes_with_index() {
        let slice = Slice::new(&BUFFER);
        for start in 0..=slice.len() {
            for end in start..=slice.len() {
                let sub = slice.subslice(start..end).unwrap();
                assert_eq!(sub.len(), end - start);
                for j in 0..sub.len() {
                    assert_eq!(sub.get(j), slice.get(start + j));
                }
            }
        }
    }

    #[test]
    fn full_subslice_is_same_view() {
        let slice = Slice::from_buffer(&BUFFER, 4).unwrap();
        let full = slice.subslice(0..slice.len()).unwrap();
        assert!(full.same_view(&slice));
    }

    #[test]
    fn empty_subslice() {
        let slice = Slice::new(&BUFFER);
        for k in 0..=slice.len() {
            let empty = slice.subslice(k..k).unwrap();
            assert!(empty.is_empty());
            assert_eq!(empty.get(0), Err(BoundsError::Index { index: 0, len: 0 }));
        }
        assert!(Slice::<u8>::empty().get(0).unwrap_err().is_index());
    }

    #[test]
    fn subslice_errors() {
        let slice = Slice::new(&BUFFER).subslice(1..4).unwrap();
        assert_eq!(
            slice.subslice(2..4),
            Err(BoundsError::Range {
                start: 2,
                end: 4,
                len: 3
            })
        );
        assert_eq!(
            slice.subslice(2..1),
            Err(BoundsError::Inverted { start: 2, end: 1 })
        );
    }

    #[test]
    fn split_first_last() {
        let slice = Slice::new(&BUFFER);
        let (a, b) = slice.split_at(2).unwrap();
        assert_eq!(a, [10, 20]);
        assert_eq!(b, [30, 40, 50]);
        assert!(slice.split_at(6).is_err());
        assert_eq!(slice.first(), Some(&10));
        assert_eq!(slice.last(), Some(&50));
        assert_eq!(Slice::<i32>::empty().last(), None);
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the len is 3 but the index is 3")]
    fn index_operator_panics() {
        let slice = Slice::from_buffer(&BUFFER, 3).unwrap();
        let _ = slice[3];
    }

    #[test]
    fn debug() {
        let slice = Slice::from_buffer(&BUFFER, 2).unwrap();
        assert_eq!(format!("{slice:?}"), "[10, 20]");
    }
}
