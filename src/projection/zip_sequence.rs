use crate::{
    buffer::IntoSequence,
    view::{Cursor, Finiteness, SeqProps, Sequence, SizeHint},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Pairs of elements at the same position in `a` and `b`, as long as the
/// shorter source lasts.
#[derive(Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Zip { a, b }
    }
}

pub fn zip<A, B>(a: A, b: B) -> Zip<A::Seq, B::Seq>
where
    A: IntoSequence,
    B: IntoSequence,
{
    Zip::new(a.into_seq(), b.into_seq())
}

pub struct ZipCursor<CA, CB> {
    a: CA,
    b: CB,
}

impl<CA: Cursor, CB: Cursor> Cursor for ZipCursor<CA, CB> {
    type Item = (CA::Item, CB::Item);

    fn is_end(&self) -> bool {
        self.a.is_end() || self.b.is_end()
    }

    fn read(&self) -> Self::Item {
        (self.a.read(), self.b.read())
    }

    fn advance(&mut self) {
        self.a.advance();
        self.b.advance();
    }

    fn advance_by(&mut self, n: usize) {
        self.a.advance_by(n);
        self.b.advance_by(n);
    }

    fn remaining(&self) -> SizeHint {
        shorter(self.a.remaining(), self.b.remaining())
    }
}

fn shorter(a: SizeHint, b: SizeHint) -> SizeHint {
    match (a, b) {
        (SizeHint::Exact(n), other) | (other, SizeHint::Exact(n)) => other.at_most(n),
        (SizeHint::AtLeast(n), SizeHint::AtLeast(m)) => SizeHint::AtLeast(std::cmp::min(n, m)),
        _ => SizeHint::Unknown,
    }
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Item = (A::Item, B::Item);
    type Cursor<'a> = ZipCursor<A::Cursor<'a>, B::Cursor<'a>> where Self: 'a;

    fn props(&self) -> SeqProps {
        let (a, b) = (self.a.props(), self.b.props());
        let mut props = a.joined(b, shorter(a.size, b.size));
        if a.is_bounded() || b.is_bounded() {
            props = props.with_finiteness(Finiteness::Finite);
        }
        props
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        ZipCursor {
            a: self.a.cursor_mut(),
            b: self.b.cursor_mut(),
        }
    }
}

sequence_operators! {
    [A, B,] Zip<A, B>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
