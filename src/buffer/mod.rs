//! Sources: containers turned into sequences.
//!
//! Handing over a container by value yields an [`Owned`] sequence tagged
//! `Owns`; handing over a reference yields a [`Borrowed`] one tagged
//! `BorrowsFrom` the referenced storage.

pub mod slice;
pub mod vec;

pub use {slice::Borrowed, vec::Owned};

use crate::view::Sequence;

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

pub trait IntoSequence {
    type Seq: Sequence;

    fn into_seq(self) -> Self::Seq;
}

impl<T: Clone> IntoSequence for Vec<T> {
    type Seq = Owned<T>;

    fn into_seq(self) -> Owned<T> {
        Owned::from(self)
    }
}

impl<'a, T> IntoSequence for &'a Vec<T> {
    type Seq = Borrowed<'a, T>;

    fn into_seq(self) -> Borrowed<'a, T> {
        Borrowed::new(self.as_slice())
    }
}

impl<'a, T> IntoSequence for &'a [T] {
    type Seq = Borrowed<'a, T>;

    fn into_seq(self) -> Borrowed<'a, T> {
        Borrowed::new(self)
    }
}

impl<'a, T, const N: usize> IntoSequence for &'a [T; N] {
    type Seq = Borrowed<'a, T>;

    fn into_seq(self) -> Borrowed<'a, T> {
        Borrowed::new(self.as_slice())
    }
}

impl<'a, S: Sequence + ?Sized> IntoSequence for &'a mut S {
    type Seq = &'a mut S;

    fn into_seq(self) -> &'a mut S {
        self
    }
}

/// Wraps anything sequence-like as a sequence.
pub fn all<I: IntoSequence>(src: I) -> I::Seq {
    src.into_seq()
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::{
        buffer::*,
        view::{Ownership, SequenceExt, SourceId},
    };

    #[test]
    fn temporaries_are_owned() {
        let seq = all(vec![1, 2, 3]);
        assert_eq!(seq.props().ownership, Ownership::Owns);
    }

    #[test]
    fn named_containers_are_borrowed() {
        let v = vec![1, 2, 3];
        let a = [4, 5];

        assert_eq!(
            all(&v).props().ownership,
            Ownership::BorrowsFrom(SourceId::of(&v))
        );
        assert_eq!(
            all(&a).props().ownership,
            Ownership::BorrowsFrom(SourceId::of(&a))
        );
        assert_eq!(
            all(&v[1..]).props().ownership,
            Ownership::BorrowsFrom(SourceId::of(&v[1..]))
        );
    }

    #[test]
    fn sequences_pass_through() {
        let mut seq = all(vec!['x']);
        let by_ref = all(&mut seq);
        assert_eq!(by_ref.to_vec(), vec!['x']);

        let again = all(seq);
        assert_eq!(again.into_vec(), vec!['x']);
    }
}
