use crate::{
    pipe::Adaptor,
    view::{AdaptorKind, Cursor, SeqProps, Sequence, SizeHint, Traversal},
};

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                  Filter
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Only the elements satisfying `pred`.
///
/// The offset of the first match is found on the first traversal and kept,
/// so every later traversal starts without re-testing the skipped prefix.
/// Because of that cache a filter is stateful: it can only be walked through
/// `&mut`, and random access is gone.
///
/// ```compile_fail
/// use r3seq::prelude::*;
///
/// let v = vec![1, 2, 3];
/// let odd = all(&v).filter(|x| **x % 2 == 1);
/// let _ = odd.iter();
/// ```
///
/// ```compile_fail
/// use r3seq::prelude::*;
///
/// let v = vec![1, 2, 3];
/// let _ = all(&v).filter(|x| **x % 2 == 1).reverse();
/// ```
#[derive(Clone)]
pub struct Filter<S, P> {
    src: S,
    pred: P,
    begin: Option<usize>,
}

impl<S, P> Filter<S, P> {
    pub fn new(src: S, pred: P) -> Self {
        Filter {
            src,
            pred,
            begin: None,
        }
    }
}

pub struct FilterCursor<'a, C, P> {
    src: C,
    pred: &'a P,
}

impl<'a, C, P> FilterCursor<'a, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    /// Moves the source onto the next match, returning how many elements
    /// were passed over.
    fn seek_match(&mut self) -> usize {
        let mut skipped = 0;
        while !self.src.is_end() && !(self.pred)(&self.src.read()) {
            self.src.advance();
            skipped += 1;
        }
        skipped
    }
}

impl<'a, C, P> Cursor for FilterCursor<'a, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn is_end(&self) -> bool {
        self.src.is_end()
    }

    fn read(&self) -> C::Item {
        self.src.read()
    }

    fn advance(&mut self) {
        self.src.advance();
        self.seek_match();
    }

    fn remaining(&self) -> SizeHint {
        if self.src.is_end() {
            SizeHint::Exact(0)
        } else {
            SizeHint::AtLeast(1)
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a> = FilterCursor<'a, S::Cursor<'a>, P> where Self: 'a;

    fn props(&self) -> SeqProps {
        self.src
            .props()
            .adapted(AdaptorKind::StatefulFilter)
            .with_size(SizeHint::Unknown)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        // a single-pass source is never at the same place twice
        let cacheable = self.src.props().traversal >= Traversal::Forward;

        let Filter { src, pred, begin } = self;
        let mut cur = FilterCursor {
            src: src.cursor_mut(),
            pred: &*pred,
        };

        match *begin {
            Some(offset) if cacheable => cur.src.advance_by(offset),
            _ => {
                let offset = cur.seek_match();
                if cacheable {
                    *begin = Some(offset);
                }
            }
        }

        cur
    }
}

#[derive(Clone)]
pub struct FilterFn<P>(P);

pub fn filter<P>(pred: P) -> FilterFn<P> {
    FilterFn(pred)
}

impl<S, P> Adaptor<S> for FilterFn<P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Output = Filter<S, P>;

    fn apply(self, src: S) -> Filter<S, P> {
        Filter::new(src, self.0)
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                   Dedup
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Collapses every run of equal consecutive elements into its first one.
#[derive(Clone)]
pub struct Dedup<S> {
    src: S,
}

impl<S> Dedup<S> {
    pub fn new(src: S) -> Self {
        Dedup { src }
    }
}

pub struct DedupCursor<C> {
    src: C,
}

impl<C> Cursor for DedupCursor<C>
where
    C: Cursor,
    C::Item: PartialEq,
{
    type Item = C::Item;

    fn is_end(&self) -> bool {
        self.src.is_end()
    }

    fn read(&self) -> C::Item {
        self.src.read()
    }

    fn advance(&mut self) {
        let run = self.src.read();
        self.src.advance();
        while !self.src.is_end() && self.src.read() == run {
            self.src.advance();
        }
    }

    fn remaining(&self) -> SizeHint {
        if self.src.is_end() {
            SizeHint::Exact(0)
        } else {
            SizeHint::AtLeast(1)
        }
    }
}

impl<S> Sequence for Dedup<S>
where
    S: Sequence,
    S::Item: PartialEq,
{
    type Item = S::Item;
    type Cursor<'a> = DedupCursor<S::Cursor<'a>> where Self: 'a;

    fn props(&self) -> SeqProps {
        self.src
            .props()
            .adapted(AdaptorKind::StatefulFilter)
            .with_size(SizeHint::Unknown)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        DedupCursor {
            src: self.src.cursor_mut(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DedupFn;

pub fn dedup() -> DedupFn {
    DedupFn
}

impl<S> Adaptor<S> for DedupFn
where
    S: Sequence,
    S::Item: PartialEq,
{
    type Output = Dedup<S>;

    fn apply(self, src: S) -> Dedup<S> {
        Dedup::new(src)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

sequence_operators! {
    [S, P,] Filter<S, P>;
    [S,] Dedup<S>;
}

adaptor_operators! {
    [P,] FilterFn<P>;
    [] DedupFn;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use {
        crate::{
            buffer::all,
            factory::{from_iter, iota},
            projection::{filter_sequence::*, map, Project},
            view::{CursorState, SequenceExt},
        },
        std::cell::Cell,
    };

    #[test]
    fn filter_seq1() {
        let v = vec![3, -4, 9, -1, 12];
        let mut seq = all(&v).filter(|x| **x > 0);

        assert_eq!(seq.to_vec(), vec![&3, &9, &12]);
    }

    #[test]
    fn filter_loses_random_access() {
        let v = vec![1, 2, 3];
        let seq = all(&v) | filter(|x: &&i32| **x > 1);

        let props = seq.props();
        assert_eq!(props.traversal, Traversal::Forward);
        assert_eq!(props.state, CursorState::Stateful);
        assert_eq!(props.size, SizeHint::Unknown);

        // mapping on top does not bring it back
        let mapped = seq | map(|x: &i32| x * 2);
        assert_eq!(mapped.props().traversal, Traversal::Forward);
        assert_eq!(mapped.props().state, CursorState::Stateful);
    }

    #[test]
    fn begin_is_computed_once() {
        let tests = Cell::new(0);
        let v = vec![0, 0, 0, 0, 7, 8];

        let mut seq = all(&v).filter(|x| {
            tests.set(tests.get() + 1);
            **x != 0
        });

        assert_eq!(seq.first(), Some(&7));
        assert_eq!(tests.get(), 5);

        // the four rejected zeros are not tested again
        assert_eq!(seq.first(), Some(&7));
        assert_eq!(tests.get(), 5);

        assert_eq!(seq.to_vec(), vec![&7, &8]);
    }

    #[test]
    fn no_match_at_all() {
        let mut seq = all(vec![2, 4, 6]).filter(|x| x % 2 == 1);
        assert_eq!(seq.first(), None);
        assert_eq!(seq.count(), 0);
        assert_eq!(seq.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn single_pass_sources_are_not_cached() {
        let mut seq = from_iter(vec![1, 2, 3, 4, 5, 6].into_iter()).filter(|x| x % 2 == 0);

        // `first` only peeks, the walk consumes
        assert_eq!(seq.first(), Some(2));
        assert_eq!(seq.walk().take(1).collect::<Vec<_>>(), vec![2]);
        assert_eq!(seq.to_vec(), vec![4, 6]);
    }

    #[test]
    fn filter_unbounded_then_take() {
        let mut seq = iota(1u32).filter(|x| x % 3 == 0).take(4);
        assert_eq!(seq.to_vec(), vec![3, 6, 9, 12]);
    }

    #[test]
    fn dedup_runs() {
        let mut seq = all(vec![1, 1, 2, 3, 3, 3, 1]) | dedup();
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 1]);
        assert_eq!(seq.props().traversal, Traversal::Forward);

        let mut empty = all(Vec::<u8>::new()).dedup();
        assert_eq!(empty.count(), 0);
    }
}
