use crate::{
    pipe::Adaptor,
    view::{
        AdaptorKind, Cursor, Finiteness, RandomAccess, SeqProps, Sequence, SharedSequence,
        SizeHint, Traversal,
    },
};

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                   Take
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// At most the first `n` elements.
///
/// The only way to materialize an unbounded source: the result is finite
/// whatever the source is.
#[derive(Clone)]
pub struct Take<S> {
    src: S,
    n: usize,
}

impl<S> Take<S> {
    pub fn new(src: S, n: usize) -> Self {
        Take { src, n }
    }
}

pub struct TakeCursor<C> {
    src: C,
    left: usize,
    consume_last: bool,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn is_end(&self) -> bool {
        self.left == 0 || self.src.is_end()
    }

    fn read(&self) -> C::Item {
        assert!(self.left > 0, "read past the end of a sequence");
        self.src.read()
    }

    // A multi-pass source is left on the last taken element, so no search
    // past the prefix is started (a filter beyond its last match would never
    // return). A single-pass source has to consume it, or the next traversal
    // would see it again.
    fn advance(&mut self) {
        assert!(self.left > 0, "advance past the end of a sequence");
        self.left -= 1;
        if self.left > 0 || self.consume_last {
            self.src.advance();
        }
    }

    fn advance_by(&mut self, n: usize) {
        assert!(n <= self.left, "advance past the end of a sequence");
        if n > 0 {
            self.left -= n;
            let last = usize::from(self.left == 0 && !self.consume_last);
            self.src.advance_by(n - last);
        }
    }

    fn remaining(&self) -> SizeHint {
        if self.left == 0 {
            SizeHint::Exact(0)
        } else {
            self.src.remaining().at_most(self.left)
        }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor<'a> = TakeCursor<S::Cursor<'a>> where Self: 'a;

    fn props(&self) -> SeqProps {
        let props = self.src.props();
        props
            .adapted(AdaptorKind::StatelessMap)
            .with_size(props.size.at_most(self.n))
            .with_finiteness(Finiteness::Finite)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        let consume_last = self.src.props().traversal == Traversal::SinglePass;
        TakeCursor {
            src: self.src.cursor_mut(),
            left: self.n,
            consume_last,
        }
    }
}

impl<S: SharedSequence> SharedSequence for Take<S> {
    fn cursor(&self) -> Self::Cursor<'_> {
        TakeCursor {
            src: self.src.cursor(),
            left: self.n,
            consume_last: false,
        }
    }
}

impl<S: RandomAccess> RandomAccess for Take<S> {
    fn get(&self, idx: usize) -> Option<S::Item> {
        if idx < self.n {
            self.src.get(idx)
        } else {
            None
        }
    }

    fn len(&self) -> Option<usize> {
        Some(match self.src.len() {
            Some(len) => std::cmp::min(len, self.n),
            None => self.n,
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TakeFn(usize);

pub fn take(n: usize) -> TakeFn {
    TakeFn(n)
}

impl<S: Sequence> Adaptor<S> for TakeFn {
    type Output = Take<S>;

    fn apply(self, src: S) -> Take<S> {
        Take::new(src, self.0)
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                 TakeWhile
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// The longest prefix whose elements all satisfy `pred`.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    src: S,
    pred: P,
}

impl<S, P> TakeWhile<S, P> {
    pub fn new(src: S, pred: P) -> Self {
        TakeWhile { src, pred }
    }
}

pub struct TakeWhileCursor<'a, C, P> {
    src: C,
    pred: &'a P,
    done: bool,
}

impl<'a, C, P> TakeWhileCursor<'a, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    fn new(src: C, pred: &'a P) -> Self {
        let mut cur = TakeWhileCursor {
            src,
            pred,
            done: false,
        };
        cur.check();
        cur
    }

    fn check(&mut self) {
        self.done = self.src.is_end() || !(self.pred)(&self.src.read());
    }
}

impl<'a, C, P> Cursor for TakeWhileCursor<'a, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn is_end(&self) -> bool {
        self.done
    }

    fn read(&self) -> C::Item {
        assert!(!self.done, "read past the end of a sequence");
        self.src.read()
    }

    fn advance(&mut self) {
        assert!(!self.done, "advance past the end of a sequence");
        self.src.advance();
        self.check();
    }

    fn remaining(&self) -> SizeHint {
        if self.done {
            SizeHint::Exact(0)
        } else {
            SizeHint::AtLeast(1)
        }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a> = TakeWhileCursor<'a, S::Cursor<'a>, P> where Self: 'a;

    fn props(&self) -> SeqProps {
        self.src
            .props()
            .adapted(AdaptorKind::StatefulFilter)
            .with_size(SizeHint::Unknown)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        TakeWhileCursor::new(self.src.cursor_mut(), &self.pred)
    }
}

#[derive(Clone)]
pub struct TakeWhileFn<P>(P);

pub fn take_while<P>(pred: P) -> TakeWhileFn<P> {
    TakeWhileFn(pred)
}

impl<S, P> Adaptor<S> for TakeWhileFn<P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Output = TakeWhile<S, P>;

    fn apply(self, src: S) -> TakeWhile<S, P> {
        TakeWhile::new(src, self.0)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

sequence_operators! {
    [S,] Take<S>;
    [S, P,] TakeWhile<S, P>;
}

adaptor_operators! {
    [] TakeFn;
    [P,] TakeWhileFn<P>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use {
        crate::{
            buffer::all,
            factory::{from_iter, generate, iota, repeat},
            projection::{take_sequence::*, Project},
            view::{SequenceExt, SharedSequenceExt},
        },
        proptest::prelude::*,
    };

    #[test]
    fn take_seq1() {
        let v = vec![1, 2, 3, 4];
        let seq = all(&v).take(2);

        assert_eq!(seq.len(), Some(2));
        assert_eq!(seq.get(1), Some(&2));
        assert_eq!(seq.get(2), None);
        assert_eq!(seq.props().traversal, Traversal::RandomAccess);
    }

    #[test]
    fn take_more_than_available() {
        let mut seq = all(vec![1, 2]) | take(10);
        assert_eq!(seq.props().size, SizeHint::Exact(2));
        assert_eq!(seq.to_vec(), vec![1, 2]);
    }

    #[test]
    fn take_bounds_unbounded_sources() {
        let mut seq = iota(0) | take(5);
        assert_eq!(seq.props().finiteness, Finiteness::Finite);
        assert_eq!(seq.props().size, SizeHint::Exact(5));
        assert_eq!(seq.to_vec(), vec![0, 1, 2, 3, 4]);

        let mut ones = repeat(1u8).take(3);
        assert_eq!(ones.to_vec(), vec![1, 1, 1]);
    }

    #[test]
    fn take_from_a_generator_calls_it_no_more_than_needed() {
        let mut calls = 0;
        {
            let mut seq = generate(|| {
                calls += 1;
                calls
            })
            .take(3);
            assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        }
        assert_eq!(calls, 3);
    }

    #[test]
    fn take_hands_each_single_pass_element_out_once() {
        let mut seq = from_iter(["a", "b", "c", "d"]);

        let mut seen = (&mut seq).take(2).to_vec();
        seen.extend((&mut seq).take(1).to_vec());
        seen.extend(seq.to_vec());

        assert_eq!(seen, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn take_stops_before_searching_past_the_prefix() {
        // a second advance of the filter would never find another match
        let mut seq = iota(1u32).filter(|x| *x < 3).take(2);
        assert_eq!(seq.to_vec(), vec![1, 2]);
    }

    #[test]
    fn take_while_stops_at_first_failure() {
        let mut seq = all(vec![2, 4, 5, 6]) | take_while(|x: &i32| x % 2 == 0);
        assert_eq!(seq.to_vec(), vec![2, 4]);
        assert_eq!(seq.props().traversal, Traversal::Forward);
    }

    #[test]
    fn take_while_on_unbounded() {
        let mut seq = iota(1u64).take_while(|x| x * x < 50);
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    proptest! {
        #[test]
        fn take_is_a_prefix(v in proptest::collection::vec(any::<i16>(), 0..64), n in 0usize..80) {
            let seq = all(&v).take(n);
            let got: Vec<i16> = seq.iter().copied().collect();
            prop_assert_eq!(got.len(), std::cmp::min(n, v.len()));
            prop_assert_eq!(&got[..], &v[..got.len()]);
        }
    }
}
