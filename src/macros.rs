//! Macro spellings of the slice operations.
//!
//! Generated code emits these instead of method calls so that one code
//! generator template covers arrays, vectors and views alike. Every macro
//! that can fail evaluates to a `Result<_, BoundsError>`.

/// Views `$x[$start..$end]`, where `$x` is any [`AsSlice`](crate::AsSlice).
///
/// ```
/// # use slice_glue::slice;
/// let buffer = [1, 2, 3, 4];
/// assert_eq!(slice!(buffer, 1, 3)?, [2, 3]);
/// # Ok::<(), slice_glue::BoundsError>(())
/// ```
#[macro_export]
macro_rules! slice {
    ($x:expr, $start:expr, $end:expr) => {{
        use $crate::AsSlice as _;
        ($x).view_range($crate::SliceRange::new($start, $end))
    }};
}

/// Views the first `$end` elements of `$x`.
#[macro_export]
macro_rules! array_to_slice {
    ($x:expr, $end:expr) => {{
        use $crate::AsSlice as _;
        ($x).view_to($end)
    }};
}

/// Views the elements of `$x` in the range `$r`.
#[macro_export]
macro_rules! array_to_subslice {
    ($x:expr, $r:expr) => {{
        use $crate::AsSlice as _;
        ($x).view_range($r)
    }};
}

/// Mutable form of [`array_to_slice!`].
#[macro_export]
macro_rules! array_to_slice_mut {
    ($x:expr, $end:expr) => {{
        use $crate::AsMutSlice as _;
        ($x).view_to_mut($end)
    }};
}

/// Mutable form of [`array_to_subslice!`].
#[macro_export]
macro_rules! array_to_subslice_mut {
    ($x:expr, $r:expr) => {{
        use $crate::AsMutSlice as _;
        ($x).view_range_mut($r)
    }};
}

/// The length of a view.
#[macro_export]
macro_rules! slice_len {
    ($s:expr) => {
        ($s).len()
    };
}

/// The length of a view, spelled with an optional element type.
///
/// ```
/// # use slice_glue::{Slice, core_slice_len};
/// let view = Slice::new(&[1u8, 2, 3]);
/// assert_eq!(core_slice_len!(view, u8), 3);
/// ```
#[macro_export]
macro_rules! core_slice_len {
    ($s:expr $(, $t:ty)?) => {
        $crate::slice_len!($s)
    };
}

/// A reference to element `$i` of a view.
#[macro_export]
macro_rules! slice_index {
    ($s:expr, $i:expr) => {
        ($s).get::<usize>($i)
    };
}

/// A mutable reference to element `$i` of a [`SliceMut`](crate::SliceMut).
///
/// ```
/// # use slice_glue::{SliceMut, slice_index_mut};
/// let mut buffer = [0; 3];
/// let mut view = SliceMut::new(&mut buffer);
/// *slice_index_mut!(view, 2)? = 7;
/// assert_eq!(buffer, [0, 0, 7]);
/// # Ok::<(), slice_glue::BoundsError>(())
/// ```
#[macro_export]
macro_rules! slice_index_mut {
    ($s:expr, $i:expr) => {
        ($s).get_mut::<usize>($i)
    };
}

/// A view over the range `$r` of another view.
#[macro_export]
macro_rules! slice_subslice {
    ($s:expr, $r:expr) => {
        ($s).subslice($r)
    };
}

/// A mutable view over the range `$r` of a [`SliceMut`](crate::SliceMut).
#[macro_export]
macro_rules! slice_subslice_mut {
    ($s:expr, $r:expr) => {
        ($s).subslice_mut($r)
    };
}

/// Terminates the process, or the given [`Host`](crate::host::Host).
#[macro_export]
macro_rules! host_exit {
    ($host:expr => $status:expr) => {{
        use $crate::host::Terminate as _;
        ($host).terminate($status)
    }};
    ($status:expr) => {
        $crate::host::Terminate::terminate(&$crate::host::StdHost, $status)
    };
}

/// Writes a formatted diagnostic to `stderr`, or to the given
/// [`Host`](crate::host::Host).
#[macro_export]
macro_rules! host_eprintf {
    ($host:expr => $($arg:tt)*) => {{
        use $crate::host::Diagnostic as _;
        ($host).emit(::std::format_args!($($arg)*))
    }};
    ($($arg:tt)*) => {
        $crate::host::Diagnostic::emit(&$crate::host::StdHost, ::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use crate::{BoundsError, SliceMut, SliceRange, host::RecordingHost};

    #[test]
    fn scenario() -> Result<(), BoundsError> {
        let buffer = [10, 20, 30, 40, 50];
        let slice = array_to_slice!(buffer, 5)?;
        assert_eq!(slice_len!(slice), 5);
        assert_eq!(*slice_index!(slice, 2)?, 30);

        let sub = slice_subslice!(slice, SliceRange::new(1, 4))?;
        assert_eq!(slice_len!(sub), 3);
        assert_eq!(*slice_index!(sub, 0)?, 20);
        assert_eq!(*slice_index!(sub, 1)?, 30);
        assert_eq!(*slice_index!(sub, 2)?, 40);

        let inner = slice_subslice!(sub, SliceRange::new(1, 2))?;
        assert_eq!(slice_len!(inner), 1);
        assert_eq!(slice_index!(inner, 0)?, slice_index!(slice, 2)?);
        assert!(slice_index!(inner, 1).unwrap_err().is_index());
        Ok(())
    }

    #[test]
    fn buffer_forms() -> Result<(), BoundsError> {
        let vec = vec![1u8, 2, 3];
        assert_eq!(slice!(vec, 1, 3)?, [2, 3]);
        assert_eq!(slice!(&vec[..], 0, 0)?.len(), 0);
        assert_eq!(array_to_subslice!(vec, 1..2)?, [2]);
        assert_eq!(
            slice!(vec, 2, 1),
            Err(BoundsError::Inverted { start: 2, end: 1 })
        );
        Ok(())
    }

    #[test]
    fn mutable_forms() -> Result<(), BoundsError> {
        let mut buffer = [0u32; 4];
        let mut view: SliceMut<'_, u32> = array_to_subslice_mut!(buffer, 1..4)?;
        *slice_index_mut!(view, 0)? = 1;
        slice_subslice_mut!(view, 1..3)?.fill(2);
        assert!(slice_index_mut!(view, 3).is_err());
        array_to_slice_mut!(buffer, 1)?.fill(9);
        assert_eq!(buffer, [9, 1, 2, 2]);
        Ok(())
    }

    #[test]
    fn host_forms() {
        let host = RecordingHost::new();
        host_eprintf!(host => "bad index {}\n", 7);
        let status = host.run::<()>(|h| host_exit!(h => 2));
        assert_eq!(status, Err(2));
        assert_eq!(host.diagnostics(), ["bad index 7\n"]);
    }

    #[test]
    fn core_slice_len() -> Result<(), BoundsError> {
        let buffer = [1u16, 2, 3, 4];
        let view = slice!(buffer, 1, 4)?;
        assert_eq!(core_slice_len!(view), 3);
        assert_eq!(core_slice_len!(view, u16), slice_len!(view));
        assert_eq!(core_slice_len!(slice!(buffer, 2, 2)?, u16), 0);
        Ok(())
    }

    #[test]
    fn std_host_eprintf() {
        host_eprintf!("");
        host_eprintf!("{}", "");
    }
}
