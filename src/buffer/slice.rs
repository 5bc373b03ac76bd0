use crate::view::{IndexCursor, Ownership, RandomAccess, SeqProps, Sequence, SharedSequence, SourceId};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// A sequence borrowing a slice that lives in an enclosing scope.
///
/// The borrow is checked statically: a `Borrowed<'a, T>` (and anything
/// composed on top of it) cannot be returned past the end of `'a`.
///
/// ```compile_fail
/// use r3seq::prelude::*;
///
/// fn escape() -> Borrowed<'static, i32> {
///     let local = vec![1, 2, 3];
///     all(&local)
/// }
/// ```
///
/// Collecting into owned storage first is the way across such a boundary:
///
/// ```
/// use r3seq::prelude::*;
///
/// fn doubled() -> Owned<i32> {
///     let local = vec![1, 2, 3];
///     all(&local).map(|x| x * 2).collect()
/// }
///
/// assert_eq!(doubled(), vec![2, 4, 6]);
/// ```
#[derive(Debug)]
pub struct Borrowed<'a, T> {
    data: &'a [T],
}

impl<'a, T> Borrowed<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Borrowed { data }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn source_id(&self) -> SourceId {
        SourceId::of(self.data)
    }
}

impl<'a, T> Clone for Borrowed<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Borrowed<'a, T> {}

impl<'a, T> Sequence for Borrowed<'a, T> {
    type Item = &'a T;
    type Cursor<'s> = IndexCursor<'s, Self> where Self: 's;

    fn props(&self) -> SeqProps {
        SeqProps::indexed(self.data.len(), Ownership::BorrowsFrom(self.source_id()))
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        IndexCursor::new(&*self)
    }
}

impl<'a, T> SharedSequence for Borrowed<'a, T> {
    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self)
    }
}

impl<'a, T> RandomAccess for Borrowed<'a, T> {
    fn get(&self, idx: usize) -> Option<&'a T> {
        self.data.get(idx)
    }

    fn len(&self) -> Option<usize> {
        Some(self.data.len())
    }
}

sequence_operators! {
    ['a, T,] Borrowed<'a, T>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
