use {
    crate::{
        pipe::Adaptor,
        view::{AdaptorKind, Cursor, SeqProps, Sequence, SizeHint},
    },
    std::cell::OnceCell,
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Memoizes the element under the cursor.
///
/// Reading the same position any number of times runs the upstream chain
/// once; advancing forgets the slot. Useful in front of an expensive `map`
/// that a later adaptor (`dedup`, `take_while`, ..) reads more than once.
#[derive(Clone)]
pub struct Cache1<S> {
    src: S,
}

impl<S> Cache1<S> {
    pub fn new(src: S) -> Self {
        Cache1 { src }
    }
}

pub struct Cache1Cursor<C: Cursor> {
    src: C,
    slot: OnceCell<C::Item>,
}

impl<C> Cursor for Cache1Cursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn is_end(&self) -> bool {
        self.src.is_end()
    }

    fn read(&self) -> C::Item {
        self.slot.get_or_init(|| self.src.read()).clone()
    }

    fn advance(&mut self) {
        self.slot = OnceCell::new();
        self.src.advance();
    }

    fn advance_by(&mut self, n: usize) {
        if n > 0 {
            self.slot = OnceCell::new();
            self.src.advance_by(n);
        }
    }

    fn remaining(&self) -> SizeHint {
        self.src.remaining()
    }
}

impl<S> Sequence for Cache1<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;
    type Cursor<'a> = Cache1Cursor<S::Cursor<'a>> where Self: 'a;

    fn props(&self) -> SeqProps {
        self.src.props().adapted(AdaptorKind::Windowing)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        Cache1Cursor {
            src: self.src.cursor_mut(),
            slot: OnceCell::new(),
        }
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone, Copy, Debug, Default)]
pub struct Cache1Fn;

pub fn cache1() -> Cache1Fn {
    Cache1Fn
}

impl<S> Adaptor<S> for Cache1Fn
where
    S: Sequence,
    S::Item: Clone,
{
    type Output = Cache1<S>;

    fn apply(self, src: S) -> Cache1<S> {
        Cache1::new(src)
    }
}

sequence_operators! {
    [S,] Cache1<S>;
}

adaptor_operators! {
    [] Cache1Fn;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
