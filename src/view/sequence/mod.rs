use crate::view::{
    cursor::{Cursor, SeqIter},
    props::SeqProps,
};

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                 Sequence
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// A lazy, non-owning (or explicitly owning) ordered source of elements.
///
/// Every sequence can be traversed through a mutable reference. Traversal
/// through a shared reference is only offered by [`SharedSequence`], which
/// stateful adaptors do not implement.
pub trait Sequence {
    type Item;
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    fn props(&self) -> SeqProps;
    fn cursor_mut(&mut self) -> Self::Cursor<'_>;
}

/// A sequence whose whole adaptor chain is stateless.
///
/// Any number of cursors may walk it at once, from any thread the source
/// itself may be read from.
pub trait SharedSequence: Sequence {
    fn cursor(&self) -> Self::Cursor<'_>;
}

/// O(1) access to any position.
pub trait RandomAccess: SharedSequence {
    fn get(&self, idx: usize) -> Option<Self::Item>;

    /// `None` for unbounded sequences.
    fn len(&self) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;
    type Cursor<'a> = S::Cursor<'a> where Self: 'a;

    fn props(&self) -> SeqProps {
        (**self).props()
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        (**self).cursor_mut()
    }
}

impl<S: SharedSequence + ?Sized> SharedSequence for &mut S {
    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<S: RandomAccess + ?Sized> RandomAccess for &mut S {
    fn get(&self, idx: usize) -> Option<S::Item> {
        (**self).get(idx)
    }

    fn len(&self) -> Option<usize> {
        (**self).len()
    }
}

impl<S: SharedSequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor<'a> = S::Cursor<'a> where Self: 'a;

    fn props(&self) -> SeqProps {
        (**self).props()
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<S: SharedSequence + ?Sized> SharedSequence for &S {
    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<S: RandomAccess + ?Sized> RandomAccess for &S {
    fn get(&self, idx: usize) -> Option<S::Item> {
        (**self).get(idx)
    }

    fn len(&self) -> Option<usize> {
        (**self).len()
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
              Materialization
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Consuming a sequence into owned storage.
///
/// Each call starts a fresh traversal and re-runs every adaptor in the chain
/// for every element it touches. None of these return if the sequence is
/// unbounded; composing `take` (or another bounding adaptor) first is the
/// caller's responsibility.
pub trait SequenceExt: Sequence {
    fn walk(&mut self) -> SeqIter<Self::Cursor<'_>> {
        SeqIter::new(self.cursor_mut())
    }

    fn collect<C: FromIterator<Self::Item>>(&mut self) -> C {
        let mut count = 0usize;
        let out = self
            .walk()
            .inspect(|_| count += 1)
            .collect();
        tracing::debug!(count, "materialized sequence");
        out
    }

    fn to_vec(&mut self) -> Vec<Self::Item> {
        self.collect()
    }

    fn into_vec(mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.to_vec()
    }

    fn first(&mut self) -> Option<Self::Item> {
        let cur = self.cursor_mut();
        if cur.is_end() {
            None
        } else {
            Some(cur.read())
        }
    }

    fn count(&mut self) -> usize {
        let mut cur = self.cursor_mut();
        let mut n = 0;
        while !cur.is_end() {
            cur.advance();
            n += 1;
        }
        n
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}

pub trait SharedSequenceExt: SharedSequence {
    fn iter(&self) -> SeqIter<Self::Cursor<'_>> {
        SeqIter::new(self.cursor())
    }
}

impl<S: SharedSequence + ?Sized> SharedSequenceExt for S {}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::{
        buffer::{all, Owned},
        view::{sequence::*, props::Traversal},
    };

    #[test]
    fn walk_owned() {
        let mut seq = Owned::from(vec![1, 2, 3]);
        assert_eq!(seq.walk().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(seq.count(), 3);
        assert_eq!(seq.first(), Some(1));
    }

    #[test]
    fn shared_iter_is_repeatable() {
        let v = vec!['a', 'b'];
        let seq = all(&v);

        let a: String = seq.iter().collect();
        let b: String = seq.iter().collect();
        assert_eq!(a, "ab");
        assert_eq!(a, b);
    }

    #[test]
    fn references_forward_to_the_sequence() {
        let mut seq = Owned::from(vec![4, 5]);

        let by_mut = &mut seq;
        assert_eq!(by_mut.props().traversal, Traversal::RandomAccess);
        assert_eq!(RandomAccess::get(&by_mut, 1), Some(5));

        let by_ref = &seq;
        assert_eq!(by_ref.iter().collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn size_hint_comes_from_the_cursor() {
        let seq = Owned::from(vec![1, 2, 3]);
        let mut it = seq.iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        it.next();
        assert_eq!(it.size_hint(), (2, Some(2)));
    }

    #[test]
    fn first_of_empty() {
        let mut seq = Owned::<u8>::from(vec![]);
        assert_eq!(seq.first(), None);
        assert!(seq.is_empty());
    }
}
