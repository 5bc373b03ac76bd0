use crate::{
    pipe::Adaptor,
    view::{AdaptorKind, Cursor, RandomAccess, SeqProps, Sequence, SharedSequence, SizeHint},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Applies `f` to every element, each time the element is read.
///
/// Nothing is cached: two traversals call `f` twice per element.
#[derive(Clone)]
pub struct Map<S, F> {
    src: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub fn new(src: S, f: F) -> Self {
        Map { src, f }
    }
}

pub struct MapCursor<'a, C, F> {
    src: C,
    f: &'a F,
}

impl<'a, C, F, U> Cursor for MapCursor<'a, C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn is_end(&self) -> bool {
        self.src.is_end()
    }

    fn read(&self) -> U {
        (self.f)(self.src.read())
    }

    fn advance(&mut self) {
        self.src.advance();
    }

    fn advance_by(&mut self, n: usize) {
        self.src.advance_by(n);
    }

    fn remaining(&self) -> SizeHint {
        self.src.remaining()
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'a> = MapCursor<'a, S::Cursor<'a>, F> where Self: 'a;

    fn props(&self) -> SeqProps {
        self.src.props().adapted(AdaptorKind::StatelessMap)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        MapCursor {
            src: self.src.cursor_mut(),
            f: &self.f,
        }
    }
}

impl<S, F, U> SharedSequence for Map<S, F>
where
    S: SharedSequence,
    F: Fn(S::Item) -> U,
{
    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            src: self.src.cursor(),
            f: &self.f,
        }
    }
}

impl<S, F, U> RandomAccess for Map<S, F>
where
    S: RandomAccess,
    F: Fn(S::Item) -> U,
{
    fn get(&self, idx: usize) -> Option<U> {
        self.src.get(idx).map(|item| (self.f)(item))
    }

    fn len(&self) -> Option<usize> {
        self.src.len()
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone)]
pub struct MapFn<F>(F);

pub fn map<F>(f: F) -> MapFn<F> {
    MapFn(f)
}

impl<S, F, U> Adaptor<S> for MapFn<F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Output = Map<S, F>;

    fn apply(self, src: S) -> Map<S, F> {
        Map::new(src, self.0)
    }
}

sequence_operators! {
    [S, F,] Map<S, F>;
}

adaptor_operators! {
    [F,] MapFn<F>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
