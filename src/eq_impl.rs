use crate::{Slice, SliceMut};

macro_rules! uni {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        impl<T, U $(,$($b)+)?> PartialEq<$u> for $t
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$u) -> bool {
                let me: &[T] = self.as_ref();
                let other: &[U] = other.as_ref();
                me == other
            }
        }
    };
}

macro_rules! bi {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        $crate::eq_impl::uni!($t, $u $(, $($b)+)?);

        impl<T, U $(,$($b)+)?> PartialEq<$t> for $u
        where
            U: PartialEq<T>,
        {
            fn eq(&self, other: &$t) -> bool {
                let me: &[U] = self.as_ref();
                let other: &[T] = other.as_ref();
                me == other
            }
        }
    };
}

macro_rules! impl_for {
    ($t:ty) => {
        $crate::eq_impl::bi!($t, Vec<U>);
        $crate::eq_impl::bi!($t, [U]);
        $crate::eq_impl::bi!($t, &[U]);
        $crate::eq_impl::bi!($t, &mut [U]);
        $crate::eq_impl::bi!($t, [U; N], const N: usize);
        $crate::eq_impl::bi!($t, &[U; N], const N: usize);
        $crate::eq_impl::uni!($t, Slice<'_, U>);
        $crate::eq_impl::uni!($t, SliceMut<'_, U>);
        impl<T> Eq for $t where T: Eq {}
    };
}

pub(crate) use bi;
pub(crate) use uni;

impl_for!(Slice<'_, T>);
impl_for!(SliceMut<'_, T>);
