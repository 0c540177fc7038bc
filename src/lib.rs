//! Bounds-checked slice views for generated low-level code.
//!
//! Code produced by a compiler back end often passes arrays around as a base
//! pointer and a length, and builds sub-slices and element accesses by offset
//! arithmetic. This crate provides that representation as [`Slice`] and
//! [`SliceMut`], bound by a lifetime to the storage they view, with every
//! operation checked:
//!
//! | operation | method | macro |
//! |---|---|---|
//! | view over a buffer | [`Slice::from_buffer`] | [`array_to_slice!`] |
//! | view over part of a buffer | [`Slice::from_buffer_range`] | [`array_to_subslice!`] |
//! | length | [`Slice::len`] | [`slice_len!`] |
//! | element access | [`Slice::get`], [`SliceMut::get_mut`] | [`slice_index!`], [`slice_index_mut!`] |
//! | sub-slice | [`Slice::subslice`], [`SliceMut::subslice_mut`] | [`slice_subslice!`] |
//!
//! An access outside the view returns a [`BoundsError`]. The [`host`] module
//! provides the process exit and diagnostic output that generated code uses
//! to give up on such an error.
//!
//! # Examples
//!
//! ```
//! use slice_glue::{Slice, SliceRange};
//!
//! let buffer = [10, 20, 30, 40, 50];
//! let slice = Slice::from_buffer(&buffer, 5)?;
//! let middle = slice.subslice(SliceRange::new(1, 4))?;
//! let inner = middle.subslice(1..2)?;
//! assert_eq!(inner.get(0)?, slice.get(2)?);
//! assert!(inner.get(1).is_err());
//! # Ok::<(), slice_glue::BoundsError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: implements `Serialize` for views and
//!   `Serialize`/`Deserialize` for [`SliceRange`].

mod as_slice;
pub use as_slice::{AsMutSlice, AsSlice};

mod eq_impl;

mod error;
pub use error::BoundsError;

pub mod host;

mod index;
pub use index::SliceIndex;

mod iter;
pub use iter::{Iter, IterMut};

mod macros;

mod range;
pub use range::SliceRange;

mod slice;
pub use slice::Slice;

mod slice_mut;
pub use slice_mut::SliceMut;

mod slice_raw;
pub use slice_raw::SliceRaw;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod tests {
    use crate::{AsSlice, BoundsError, Slice, SliceMut, SliceRange};

    static ELEMENTS: [u64; 5] = [10, 20, 30, 40, 50];

    #[test]
    pub fn scenario() {
        let slice = Slice::from_buffer(&ELEMENTS, 5).unwrap();
        assert_eq!(slice.len(), 5);
        assert_eq!(slice.get(2), Ok(&30));

        let sub = slice.subslice(SliceRange::new(1, 4)).unwrap();
        assert_eq!(sub.len(), 3);
        assert_eq!(sub.get(0), Ok(&20));
        assert_eq!(sub.get(1), Ok(&30));
        assert_eq!(sub.get(2), Ok(&40));

        let inner = sub.subslice(SliceRange::new(1, 2)).unwrap();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner.get(0), slice.get(2));
        assert!(std::ptr::eq(inner.get(0).unwrap(), &ELEMENTS[2]));
    }

    #[test]
    pub fn index_matches_offset_access() {
        let slice = ELEMENTS.view_range(1..5).unwrap();
        for i in 0..slice.len() {
            let expected = unsafe { &*ELEMENTS.as_ptr().add(1 + i) };
            assert!(std::ptr::eq(slice.get(i).unwrap(), expected));
        }
    }

    #[test]
    pub fn nested_subslices() {
        test_nested(0..5, 1..3, &[20, 30]);
        test_nested(1..5, 2..4, &[40, 50]);
        test_nested(2..4, 0..2, &[30, 40]);
        test_nested(4..5, 1..1, &[]);
    }

    fn test_nested(
        outer: std::ops::Range<usize>,
        inner: std::ops::Range<usize>,
        expected: &[u64],
    ) {
        let outer = Slice::from_buffer_range(&ELEMENTS, outer).unwrap();
        let nested = outer.subslice(inner.clone()).unwrap();
        assert_eq!(nested.len(), inner.len());
        assert_eq!(nested, expected);
        for j in 0..nested.len() {
            assert_eq!(nested.get(j), outer.get(inner.start + j));
        }
    }

    #[test]
    pub fn zero_length_views() {
        let slice = Slice::from_buffer(&ELEMENTS, 0).unwrap();
        assert!(slice.is_empty());
        assert_eq!(slice.get(0), Err(BoundsError::Index { index: 0, len: 0 }));
        assert!(slice.subslice(0..0).unwrap().same_view(&slice));
        assert!(slice.subslice(0..1).unwrap_err().is_range());
    }

    #[test]
    pub fn write_through_view() {
        let mut elements = ELEMENTS;
        let mut view = SliceMut::from_buffer(&mut elements, 4).unwrap();
        let mut tail = view.subslice_mut(2..4).unwrap();
        *tail.get_mut(1).unwrap() = 0;
        assert_eq!(view.as_view(), [10, 20, 30, 0]);
        assert_eq!(elements, [10, 20, 30, 0, 50]);
    }
}
