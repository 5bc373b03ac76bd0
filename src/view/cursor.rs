use crate::view::{
    props::SizeHint,
    sequence::RandomAccess,
};

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                  Cursor
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Position inside a sequence.
///
/// `read` does not consume: reading twice at the same position recomputes the
/// element through the whole adaptor chain (see `cache1` for memoized reads).
/// Calling `read` or `advance` while `is_end()` holds is a contract violation
/// and panics.
pub trait Cursor {
    type Item;

    fn is_end(&self) -> bool;
    fn read(&self) -> Self::Item;
    fn advance(&mut self);

    /// Advance `n` positions. Cursors that can jump do so in O(1).
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Number of elements left, including the current one.
    fn remaining(&self) -> SizeHint {
        SizeHint::Unknown
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn is_end(&self) -> bool {
        (**self).is_end()
    }

    fn read(&self) -> C::Item {
        (**self).read()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn advance_by(&mut self, n: usize) {
        (**self).advance_by(n)
    }

    fn remaining(&self) -> SizeHint {
        (**self).remaining()
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Cursor over any random-access sequence, walking it by index.
pub struct IndexCursor<'a, S>
where
    S: RandomAccess + ?Sized,
{
    seq: &'a S,
    pos: usize,
    end: Option<usize>,
}

impl<'a, S> IndexCursor<'a, S>
where
    S: RandomAccess + ?Sized,
{
    pub fn new(seq: &'a S) -> Self {
        IndexCursor {
            seq,
            pos: 0,
            end: seq.len(),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Jump to absolute position `pos` in O(1).
    pub fn seek(&mut self, pos: usize) {
        self.pos = match self.end {
            Some(end) => std::cmp::min(pos, end),
            None => pos,
        };
    }
}

impl<'a, S> Clone for IndexCursor<'a, S>
where
    S: RandomAccess + ?Sized,
{
    fn clone(&self) -> Self {
        IndexCursor {
            seq: self.seq,
            pos: self.pos,
            end: self.end,
        }
    }
}

impl<'a, S> Cursor for IndexCursor<'a, S>
where
    S: RandomAccess + ?Sized,
{
    type Item = S::Item;

    fn is_end(&self) -> bool {
        self.end.map_or(false, |end| self.pos >= end)
    }

    fn read(&self) -> S::Item {
        match self.seq.get(self.pos) {
            Some(item) => item,
            None => panic!("read past the end of a sequence (position {})", self.pos),
        }
    }

    fn advance(&mut self) {
        assert!(!self.is_end(), "advance past the end of a sequence");
        self.pos += 1;
    }

    fn advance_by(&mut self, n: usize) {
        if let Some(end) = self.end {
            assert!(
                n <= end.saturating_sub(self.pos),
                "advance past the end of a sequence"
            );
        }
        self.pos += n;
    }

    fn remaining(&self) -> SizeHint {
        match self.end {
            Some(end) => SizeHint::Exact(end.saturating_sub(self.pos)),
            None => SizeHint::AtLeast(usize::MAX),
        }
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
              Iterator Bridge
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Drives a cursor as a std [`Iterator`].
pub struct SeqIter<C> {
    cur: C,
}

impl<C: Cursor> SeqIter<C> {
    pub fn new(cur: C) -> Self {
        SeqIter { cur }
    }

    pub fn into_cursor(self) -> C {
        self.cur
    }
}

impl<C: Cursor> Iterator for SeqIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.cur.is_end() {
            None
        } else {
            let item = self.cur.read();
            self.cur.advance();
            Some(item)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cur.remaining() {
            SizeHint::Exact(n) => (n, Some(n)),
            SizeHint::AtLeast(n) => (n, None),
            SizeHint::Unknown => (0, None),
        }
    }
}
