/// Lets sequence types take part in `source | adaptor` and in `all(..)`.
///
/// Generic parameters are listed in brackets with a trailing comma,
/// e.g. `['a, T,] Borrowed<'a, T>;`.
macro_rules! sequence_operators {
    ($([$($gen:tt)*] $ty:ty;)*) => {$(
        impl<$($gen)* Rhs> ::std::ops::BitOr<Rhs> for $ty
        where
            Rhs: $crate::pipe::Adaptor<$ty>,
        {
            type Output = <Rhs as $crate::pipe::Adaptor<$ty>>::Output;

            fn bitor(self, adaptor: Rhs) -> Self::Output {
                $crate::pipe::pipe(self, adaptor)
            }
        }

        impl<$($gen)*> $crate::buffer::IntoSequence for $ty
        where
            $ty: $crate::view::Sequence,
        {
            type Seq = Self;

            fn into_seq(self) -> Self {
                self
            }
        }
    )*};
}

/// Lets adaptor closures chain point-free: `a | b` runs `a`, then `b`.
macro_rules! adaptor_operators {
    ($([$($gen:tt)*] $ty:ty;)*) => {$(
        impl<$($gen)* Rhs> ::std::ops::BitOr<Rhs> for $ty {
            type Output = $crate::pipe::Then<$ty, Rhs>;

            fn bitor(self, next: Rhs) -> Self::Output {
                $crate::pipe::Then::new(self, next)
            }
        }
    )*};
}
