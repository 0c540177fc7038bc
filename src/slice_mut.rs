use crate::{BoundsError, Iter, IterMut, Slice, SliceIndex, SliceRange, slice_raw::SliceRaw};
use std::{
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Index, IndexMut},
};

/// A mutably borrowed [`Slice`].
///
/// A `SliceMut` applies the same borrowing rules as a mutable reference. It is
/// semantically equivalent to `&'a mut [T]`, and is how generated code writes
/// to an element in place.
///
/// # Examples
///
/// ```
/// # use slice_glue::SliceMut;
/// let mut buffer = [1, 2, 3, 4];
/// let mut slice = SliceMut::from_buffer(&mut buffer, 3)?;
/// *slice.get_mut(1)? = 20;
/// slice.subslice_mut(2..3)?.fill(30);
/// assert_eq!(buffer, [1, 20, 30, 4]);
/// # Ok::<(), slice_glue::BoundsError>(())
/// ```
pub struct SliceMut<'a, T> {
    pub(crate) raw: SliceRaw<T>,
    pub(crate) marker: PhantomData<&'a mut [T]>,
}

// SAFETY: A `SliceMut` behaves like `&mut [T]`.
unsafe impl<T> Send for SliceMut<'_, T> where T: Send {}
unsafe impl<T> Sync for SliceMut<'_, T> where T: Sync {}

impl<T> Default for SliceMut<'_, T> {
    fn default() -> Self {
        // SAFETY: An empty view is never dereferenced.
        unsafe { Self::from_raw(SliceRaw::empty()) }
    }
}

impl<'a, T> SliceMut<'a, T> {
    /// Wraps a raw view.
    ///
    /// # Safety
    ///
    /// `raw` must be valid for exclusive access for `'a`.
    pub(crate) const unsafe fn from_raw(raw: SliceRaw<T>) -> Self {
        Self {
            raw,
            marker: PhantomData,
        }
    }

    /// Views the whole of `buffer`.
    pub fn new(buffer: &'a mut [T]) -> Self {
        // SAFETY: The view takes the exclusive borrow of `buffer`.
        unsafe { Self::from_raw(SliceRaw::from_mut_slice(buffer)) }
    }

    /// Views the first `end` elements of `buffer`.
    ///
    /// # Errors
    ///
    /// [`BoundsError::Capacity`] if `end` exceeds the length of `buffer`.
    pub fn from_buffer(buffer: &'a mut [T], end: usize) -> Result<Self, BoundsError> {
        Self::from_buffer_range(buffer, SliceRange::to(end))
    }

    /// Views `buffer[range.start..range.end]`.
    ///
    /// # Errors
    ///
    /// [`BoundsError::Inverted`] or [`BoundsError::Capacity`], as for
    /// [`Slice::from_buffer_range`].
    pub fn from_buffer_range(
        buffer: &'a mut [T],
        range: impl Into<SliceRange>,
    ) -> Result<Self, BoundsError> {
        let range = range.into().check_capacity(buffer.len())?;
        let raw = SliceRaw::from_mut_slice(buffer);
        // SAFETY: The range was checked and the exclusive borrow moves into
        // the view.
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

    pub const fn as_ptr(&self) -> *const T {
        self.raw.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.ptr.as_ptr()
    }

    /// Reborrows as a shared view.
    pub fn as_view(&self) -> Slice<'_, T> {
        // SAFETY: The shared borrow of `self` prevents writes for '_.
        unsafe { Slice::from_raw(self.raw) }
    }

    /// Converts into a shared view for the rest of `'a`.
    pub fn into_view(self) -> Slice<'a, T> {
        // SAFETY: `self` is consumed, so nothing else writes through it.
        unsafe { Slice::from_raw(self.raw) }
    }

    /// Reborrows for a shorter lifetime, leaving `self` usable afterwards.
    pub fn reborrow(&mut self) -> SliceMut<'_, T> {
        // SAFETY: The exclusive borrow of `self` lasts as long as the result.
        unsafe { SliceMut::from_raw(self.raw) }
    }

    pub fn as_slice(&self) -> &[T] {
        self.as_view().as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: Exclusive for the borrow of `self`.
        unsafe { self.raw.as_mut_slice() }
    }

    pub fn into_mut_slice(self) -> &'a mut [T] {
        // SAFETY: `self` is consumed and its borrow lasts for 'a.
        unsafe { self.raw.as_mut_slice() }
    }

    /// Returns an element or a sub-slice, depending on the type of index.
    ///
    /// See [`Slice::get`].
    pub fn get<I>(&self, index: I) -> Result<I::Output<'_>, BoundsError>
    where
        I: SliceIndex<T>,
    {
        SliceIndex::get(index, self.as_view())
    }

    /// Returns a mutable reference to an element or a mutable sub-slice,
    /// depending on the type of index.
    ///
    /// # Errors
    ///
    /// The same as [`Slice::get`].
    pub fn get_mut<I>(&mut self, index: I) -> Result<I::OutputMut<'_>, BoundsError>
    where
        I: SliceIndex<T>,
    {
        SliceIndex::get_mut(index, self.reborrow())
    }

    /// Returns a mutable reference to an element without doing bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "tried to index out-of-bounds of a slice");
        // SAFETY: The caller guarantees the index is in bounds.
        unsafe { self.raw.get_mut(index) }
    }

    /// Returns a shared view over `range`.
    pub fn subslice(&self, range: impl Into<SliceRange>) -> Result<Slice<'_, T>, BoundsError> {
        self.as_view().subslice(range)
    }

    /// Returns a mutable view over `range`, borrowing from `self`.
    pub fn subslice_mut(
        &mut self,
        range: impl Into<SliceRange>,
    ) -> Result<SliceMut<'_, T>, BoundsError> {
        self.reborrow().into_subslice(range)
    }

    /// Narrows the view to `range`, keeping the full lifetime.
    pub fn into_subslice(self, range: impl Into<SliceRange>) -> Result<Self, BoundsError> {
        <SliceRange as SliceIndex<T>>::get_mut(range.into(), self)
    }

    /// Divides the view into two disjoint mutable views at `mid`.
    pub fn split_at_mut(self, mid: usize) -> Result<(Self, Self), BoundsError> {
        let len = self.len();
        if mid > len {
            return Err(BoundsError::Range {
                start: 0,
                end: mid,
                len,
            });
        }
        // SAFETY: Both halves were checked and do not overlap.
        unsafe {
            Ok((
                Self::from_raw(self.raw.sub(SliceRange::to(mid))),
                Self::from_raw(self.raw.sub(SliceRange::new(mid, len))),
            ))
        }
    }

    /// Copies every element of `src` into this view.
    ///
    /// # Errors
    ///
    /// [`BoundsError::LengthMismatch`] if the two views differ in length.
    pub fn copy_from(&mut self, src: Slice<'_, T>) -> Result<(), BoundsError>
    where
        T: Copy,
    {
        if src.len() != self.len() {
            return Err(BoundsError::LengthMismatch {
                expected: self.len(),
                actual: src.len(),
            });
        }
        self.as_mut_slice().copy_from_slice(src.as_slice());
        Ok(())
    }

    /// Assigns `value` to every element.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.as_view().iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            raw: self.raw,
            marker: PhantomData,
        }
    }
}

impl<'a, T> From<&'a mut [T]> for SliceMut<'a, T> {
    fn from(buffer: &'a mut [T]) -> Self {
        Self::new(buffer)
    }
}

impl<'a, T> From<SliceMut<'a, T>> for Slice<'a, T> {
    fn from(slice: SliceMut<'a, T>) -> Self {
        slice.into_view()
    }
}

impl<T> AsRef<[T]> for SliceMut<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SliceMut<'_, T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Panics with the [`BoundsError`] message if `index` is out of bounds.
impl<T> Index<usize> for SliceMut<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(element) => element,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Panics with the [`BoundsError`] message if `index` is out of bounds.
impl<T> IndexMut<usize> for SliceMut<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, T> IntoIterator for SliceMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            raw: self.raw,
            marker: PhantomData,
        }
    }
}

impl<T> Debug for SliceMut<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_view().fmt(f)
    }
}

impl<T> Hash for SliceMut<'_, T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_view().hash(state)
    }
}
