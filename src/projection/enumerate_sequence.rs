use crate::{
    pipe::Adaptor,
    view::{AdaptorKind, Cursor, RandomAccess, SeqProps, Sequence, SharedSequence, SizeHint},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Pairs every element with its position.
#[derive(Clone)]
pub struct Enumerate<S> {
    src: S,
}

impl<S> Enumerate<S> {
    pub fn new(src: S) -> Self {
        Enumerate { src }
    }
}

pub struct EnumerateCursor<C> {
    src: C,
    idx: usize,
}

impl<C: Cursor> Cursor for EnumerateCursor<C> {
    type Item = (usize, C::Item);

    fn is_end(&self) -> bool {
        self.src.is_end()
    }

    fn read(&self) -> Self::Item {
        (self.idx, self.src.read())
    }

    fn advance(&mut self) {
        self.src.advance();
        self.idx += 1;
    }

    fn advance_by(&mut self, n: usize) {
        self.src.advance_by(n);
        self.idx += n;
    }

    fn remaining(&self) -> SizeHint {
        self.src.remaining()
    }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);
    type Cursor<'a> = EnumerateCursor<S::Cursor<'a>> where Self: 'a;

    fn props(&self) -> SeqProps {
        self.src.props().adapted(AdaptorKind::StatelessMap)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        EnumerateCursor {
            src: self.src.cursor_mut(),
            idx: 0,
        }
    }
}

impl<S: SharedSequence> SharedSequence for Enumerate<S> {
    fn cursor(&self) -> Self::Cursor<'_> {
        EnumerateCursor {
            src: self.src.cursor(),
            idx: 0,
        }
    }
}

impl<S: RandomAccess> RandomAccess for Enumerate<S> {
    fn get(&self, idx: usize) -> Option<Self::Item> {
        Some((idx, self.src.get(idx)?))
    }

    fn len(&self) -> Option<usize> {
        self.src.len()
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone, Copy, Debug, Default)]
pub struct EnumerateFn;

pub fn enumerate() -> EnumerateFn {
    EnumerateFn
}

impl<S: Sequence> Adaptor<S> for EnumerateFn {
    type Output = Enumerate<S>;

    fn apply(self, src: S) -> Enumerate<S> {
        Enumerate::new(src)
    }
}

sequence_operators! {
    [S,] Enumerate<S>;
}

adaptor_operators! {
    [] EnumerateFn;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
