use crate::{BoundsError, Slice, SliceMut, SliceRange};

/// Contiguous storage that can be viewed as a [`Slice`].
///
/// Similar to `AsRef<[T]>`, but returns a view value rather than a reference,
/// and provides the buffer-level constructors in method form.
pub trait AsSlice {
    /// The type that the storage contains.
    type Item;

    /// Returns a [`Slice`] over the entire storage.
    fn as_view(&self) -> Slice<'_, Self::Item>;

    /// Returns a [`Slice`] over the first `end` elements.
    ///
    /// # Errors
    ///
    /// [`BoundsError::Capacity`] if `end` exceeds the storage length.
    fn view_to(&self, end: usize) -> Result<Slice<'_, Self::Item>, BoundsError> {
        Slice::from_buffer(self.as_view().as_slice(), end)
    }

    /// Returns a [`Slice`] over `range`.
    fn view_range(
        &self,
        range: impl Into<SliceRange>,
    ) -> Result<Slice<'_, Self::Item>, BoundsError> {
        Slice::from_buffer_range(self.as_view().as_slice(), range)
    }
}

/// Similar to `AsMut<[T]>`, but returns a [`SliceMut`] value rather than a
/// mutable reference.
pub trait AsMutSlice: AsSlice {
    /// Returns a [`SliceMut`] over the entire storage.
    fn as_mut_view(&mut self) -> SliceMut<'_, Self::Item>;

    /// Returns a [`SliceMut`] over the first `end` elements.
    fn view_to_mut(&mut self, end: usize) -> Result<SliceMut<'_, Self::Item>, BoundsError> {
        SliceMut::from_buffer(self.as_mut_view().into_mut_slice(), end)
    }

    /// Returns a [`SliceMut`] over `range`.
    fn view_range_mut(
        &mut self,
        range: impl Into<SliceRange>,
    ) -> Result<SliceMut<'_, Self::Item>, BoundsError> {
        SliceMut::from_buffer_range(self.as_mut_view().into_mut_slice(), range)
    }
}

impl<T> AsSlice for [T] {
    type Item = T;

    fn as_view(&self) -> Slice<'_, T> {
        Slice::new(self)
    }
}

impl<T> AsMutSlice for [T] {
    fn as_mut_view(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(self)
    }
}

impl<T, const N: usize> AsSlice for [T; N] {
    type Item = T;

    fn as_view(&self) -> Slice<'_, T> {
        Slice::new(self)
    }
}

impl<T, const N: usize> AsMutSlice for [T; N] {
    fn as_mut_view(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(self)
    }
}

impl<T> AsSlice for Vec<T> {
    type Item = T;

    fn as_view(&self) -> Slice<'_, T> {
        Slice::new(self)
    }
}

impl<T> AsMutSlice for Vec<T> {
    fn as_mut_view(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(self)
    }
}

impl<T> AsSlice for Slice<'_, T> {
    type Item = T;

    fn as_view(&self) -> Slice<'_, T> {
        *self
    }
}

impl<T> AsSlice for SliceMut<'_, T> {
    type Item = T;

    fn as_view(&self) -> Slice<'_, T> {
        SliceMut::as_view(self)
    }
}

impl<T> AsMutSlice for SliceMut<'_, T> {
    fn as_mut_view(&mut self) -> SliceMut<'_, T> {
        self.reborrow()
    }
}
