use crate::{
    buffer::IntoSequence,
    view::{Cursor, SeqProps, Sequence, SizeHint},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// All of `a`, then all of `b`.
///
/// `b` is not touched until `a` is exhausted: its cursor is only opened
/// once the first source runs out.
#[derive(Clone)]
pub struct Concat<A, B> {
    a: A,
    b: B,
}

impl<A, B> Concat<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Concat { a, b }
    }
}

/// Two sources joined end to end. There is no closure form: with two
/// inputs there is no single source to pipe in.
pub fn concat<A, B>(a: A, b: B) -> Concat<A::Seq, B::Seq>
where
    A: IntoSequence,
    B: IntoSequence,
    B::Seq: Sequence<Item = <A::Seq as Sequence>::Item>,
{
    Concat::new(a.into_seq(), b.into_seq())
}

pub struct ConcatCursor<'a, CA, B>
where
    B: Sequence + 'a,
{
    first: CA,
    pending: Option<&'a mut B>,
    second: Option<B::Cursor<'a>>,
}

impl<'a, CA, B> ConcatCursor<'a, CA, B>
where
    CA: Cursor,
    B: Sequence<Item = CA::Item> + 'a,
{
    fn new(first: CA, b: &'a mut B) -> Self {
        let mut cur = ConcatCursor {
            first,
            pending: Some(b),
            second: None,
        };
        cur.open_second();
        cur
    }

    fn open_second(&mut self) {
        if self.first.is_end() {
            if let Some(b) = self.pending.take() {
                self.second = Some(b.cursor_mut());
            }
        }
    }
}

impl<'a, CA, B> Cursor for ConcatCursor<'a, CA, B>
where
    CA: Cursor,
    B: Sequence<Item = CA::Item> + 'a,
{
    type Item = CA::Item;

    fn is_end(&self) -> bool {
        match &self.second {
            Some(second) => second.is_end(),
            None => false,
        }
    }

    fn read(&self) -> CA::Item {
        match &self.second {
            Some(second) => second.read(),
            None => self.first.read(),
        }
    }

    fn advance(&mut self) {
        match &mut self.second {
            Some(second) => second.advance(),
            None => {
                self.first.advance();
                self.open_second();
            }
        }
    }

    fn remaining(&self) -> SizeHint {
        match (&self.second, &self.pending) {
            (Some(second), _) => second.remaining(),
            (None, Some(b)) => self.first.remaining().plus(b.props().size),
            (None, None) => self.first.remaining(),
        }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor<'a> = ConcatCursor<'a, A::Cursor<'a>, B> where Self: 'a;

    fn props(&self) -> SeqProps {
        let (a, b) = (self.a.props(), self.b.props());
        a.joined(b, a.size.plus(b.size))
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        let Concat { a, b } = self;
        ConcatCursor::new(a.cursor_mut(), b)
    }
}

sequence_operators! {
    [A, B,] Concat<A, B>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
