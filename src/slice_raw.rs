use crate::SliceRange;
use std::{fmt, ptr::NonNull};

/// A base pointer and an element count, with no lifetime attached.
///
/// This is the representation shared by [`Slice`] and [`SliceMut`]. Every
/// method that touches memory is unsafe; the safe wrappers check bounds and
/// carry the lifetime of the viewed storage.
///
/// [`Slice`]: crate::Slice
/// [`SliceMut`]: crate::SliceMut
#[repr(C)]
pub struct SliceRaw<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) len: usize,
}

impl<T> Clone for SliceRaw<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceRaw<T> {}

impl<T> fmt::Debug for SliceRaw<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceRaw")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

impl<T> SliceRaw<T> {
    /// An empty view with a dangling, well-aligned base.
    pub const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
        }
    }

    /// Views the whole of `slice`.
    pub const fn from_slice(slice: &[T]) -> Self {
        Self {
            // SAFETY: References are never null.
            ptr: unsafe { NonNull::new_unchecked(slice.as_ptr() as *mut T) },
            len: slice.len(),
        }
    }

    /// Views the whole of `slice`, keeping write provenance.
    pub fn from_mut_slice(slice: &mut [T]) -> Self {
        let len = slice.len();
        Self {
            ptr: NonNull::from(slice).cast(),
            len,
        }
    }

    /// Creates a view from its raw components.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` consecutive elements of `T`
    /// for as long as the returned value, or anything derived from it, is
    /// dereferenced.
    pub const unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> Self {
        Self { ptr, len }
    }

    /// Decomposes the view into its base pointer and length.
    pub const fn into_raw_parts(self) -> (NonNull<T>, usize) {
        (self.ptr, self.len)
    }

    /// Returns the number of elements in the view.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a view over `range`, offset from this view's base.
    ///
    /// # Safety
    ///
    /// `range.start <= range.end <= self.len()` must hold.
    pub const unsafe fn sub(self, range: SliceRange) -> Self {
        Self {
            // SAFETY: The caller guarantees that start is within the view, so
            // the offset pointer stays inside the same allocation.
            ptr: unsafe { self.ptr.add(range.start) },
            len: range.end - range.start,
        }
    }

    /// # Safety
    ///
    /// `index < self.len()` must hold and the storage must not be mutably
    /// aliased for `'a`.
    pub unsafe fn get_ref<'a>(self, index: usize) -> &'a T {
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// # Safety
    ///
    /// `index < self.len()` must hold and the storage must not be aliased at
    /// all for `'a`.
    pub unsafe fn get_mut<'a>(self, index: usize) -> &'a mut T {
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// # Safety
    ///
    /// The storage must not be mutably aliased for `'a`.
    pub unsafe fn as_slice<'a>(self) -> &'a [T] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// # Safety
    ///
    /// The storage must not be aliased at all for `'a`.
    pub unsafe fn as_mut_slice<'a>(self) -> &'a mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Returns true if both views start at the same address and have the same
    /// length.
    pub fn same_view(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.len == other.len
    }
}
