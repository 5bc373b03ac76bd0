use {
    crate::{
        buffer::Owned,
        pipe::Adaptor,
        view::{AdaptorKind, Cursor, SeqProps, Sequence, SizeHint},
    },
    std::cell::RefCell,
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Splits the source into groups at every element matching `delim`.
///
/// Delimiters are dropped. Two adjacent delimiters produce an empty group in
/// between, and a delimiter at the very end produces a trailing empty group;
/// an empty source produces no group at all.
#[derive(Clone)]
pub struct SplitWhen<S, P> {
    src: S,
    delim: P,
}

impl<S, P> SplitWhen<S, P> {
    pub fn new(src: S, delim: P) -> Self {
        SplitWhen { src, delim }
    }
}

enum Group<T> {
    /// not gathered yet
    Stale,
    Ready(Vec<T>),
    Done,
}

struct SplitState<'a, C: Cursor, P> {
    src: C,
    delim: &'a P,
    group: Group<C::Item>,
    /// whether another group follows the current one
    more: bool,
}

impl<'a, C, P> SplitState<'a, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    fn group(&mut self) -> Option<&Vec<C::Item>> {
        if matches!(self.group, Group::Stale) {
            self.gather();
        }
        match &self.group {
            Group::Ready(group) => Some(group),
            _ => None,
        }
    }

    fn gather(&mut self) {
        if !self.more {
            self.group = Group::Done;
            return;
        }

        let mut group = Vec::new();
        self.more = false;
        while !self.src.is_end() {
            let item = self.src.read();
            self.src.advance();
            if (self.delim)(&item) {
                self.more = true;
                break;
            }
            group.push(item);
        }
        self.group = Group::Ready(group);
    }
}

/// Gathers a group only when it is looked at.
pub struct SplitCursor<'a, C: Cursor, P> {
    state: RefCell<SplitState<'a, C, P>>,
}

impl<'a, C, P> SplitCursor<'a, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    fn new(src: C, delim: &'a P) -> Self {
        SplitCursor {
            state: RefCell::new(SplitState {
                more: !src.is_end(),
                src,
                delim,
                group: Group::Stale,
            }),
        }
    }
}

impl<'a, C, P> Cursor for SplitCursor<'a, C, P>
where
    C: Cursor,
    C::Item: Clone,
    P: Fn(&C::Item) -> bool,
{
    type Item = Owned<C::Item>;

    fn is_end(&self) -> bool {
        let mut state = self.state.borrow_mut();
        state.group().is_none()
    }

    fn read(&self) -> Owned<C::Item> {
        let mut state = self.state.borrow_mut();
        match state.group() {
            Some(group) => Owned::from(group.clone()),
            None => panic!("read past the end of a sequence"),
        }
    }

    fn advance(&mut self) {
        let state = self.state.get_mut();
        assert!(state.group().is_some(), "advance past the end of a sequence");
        state.group = Group::Stale;
    }

    fn remaining(&self) -> SizeHint {
        let state = self.state.borrow();
        match (&state.group, state.more) {
            (Group::Done, _) | (Group::Stale, false) => SizeHint::Exact(0),
            (Group::Ready(_), false) => SizeHint::Exact(1),
            (Group::Stale, true) => SizeHint::AtLeast(1),
            (Group::Ready(_), true) => SizeHint::AtLeast(2),
        }
    }
}

impl<S, P> Sequence for SplitWhen<S, P>
where
    S: Sequence,
    S::Item: Clone,
    P: Fn(&S::Item) -> bool,
{
    type Item = Owned<S::Item>;
    type Cursor<'a> = SplitCursor<'a, S::Cursor<'a>, P> where Self: 'a;

    fn props(&self) -> SeqProps {
        self.src
            .props()
            .adapted(AdaptorKind::FanOut)
            .with_size(SizeHint::Unknown)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        SplitCursor::new(self.src.cursor_mut(), &self.delim)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone)]
pub struct SplitWhenFn<P>(P);

pub fn split_when<P>(delim: P) -> SplitWhenFn<P> {
    SplitWhenFn(delim)
}

impl<S, P> Adaptor<S> for SplitWhenFn<P>
where
    S: Sequence,
    S::Item: Clone,
    P: Fn(&S::Item) -> bool,
{
    type Output = SplitWhen<S, P>;

    fn apply(self, src: S) -> SplitWhen<S, P> {
        SplitWhen::new(src, self.0)
    }
}

sequence_operators! {
    [S, P,] SplitWhen<S, P>;
}

adaptor_operators! {
    [P,] SplitWhenFn<P>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
