use crate::{
    pipe::Adaptor,
    view::{AdaptorKind, Cursor, RandomAccess, SeqProps, Sequence, SharedSequence, SizeHint},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Everything but the first `n` elements.
#[derive(Clone)]
pub struct Skip<S> {
    src: S,
    n: usize,
}

impl<S> Skip<S> {
    pub fn new(src: S, n: usize) -> Self {
        Skip { src, n }
    }
}

pub struct SkipCursor<C> {
    src: C,
}

impl<C: Cursor> SkipCursor<C> {
    fn new(mut src: C, n: usize) -> Self {
        match src.remaining() {
            SizeHint::Exact(len) => src.advance_by(std::cmp::min(len, n)),
            SizeHint::AtLeast(len) if len >= n => src.advance_by(n),
            _ => {
                let mut k = 0;
                while k < n && !src.is_end() {
                    src.advance();
                    k += 1;
                }
            }
        }
        SkipCursor { src }
    }
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn is_end(&self) -> bool {
        self.src.is_end()
    }

    fn read(&self) -> C::Item {
        self.src.read()
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

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor<'a> = SkipCursor<S::Cursor<'a>> where Self: 'a;

    fn props(&self) -> SeqProps {
        let props = self.src.props();
        props
            .adapted(AdaptorKind::StatelessMap)
            .with_size(props.size.minus(self.n))
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        SkipCursor::new(self.src.cursor_mut(), self.n)
    }
}

impl<S: SharedSequence> SharedSequence for Skip<S> {
    fn cursor(&self) -> Self::Cursor<'_> {
        SkipCursor::new(self.src.cursor(), self.n)
    }
}

impl<S: RandomAccess> RandomAccess for Skip<S> {
    fn get(&self, idx: usize) -> Option<S::Item> {
        self.src.get(idx.checked_add(self.n)?)
    }

    fn len(&self) -> Option<usize> {
        self.src.len().map(|len| len.saturating_sub(self.n))
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone, Copy, Debug)]
pub struct SkipFn(usize);

pub fn skip(n: usize) -> SkipFn {
    SkipFn(n)
}

impl<S: Sequence> Adaptor<S> for SkipFn {
    type Output = Skip<S>;

    fn apply(self, src: S) -> Skip<S> {
        Skip::new(src, self.0)
    }
}

sequence_operators! {
    [S,] Skip<S>;
}

adaptor_operators! {
    [] SkipFn;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::{
        buffer::all,
        factory::iota,
        projection::{skip_sequence::*, Project},
        view::{SequenceExt, SharedSequenceExt},
    };

    #[test]
    fn skip_seq1() {
        let v = vec![1, 2, 3, 4, 5];
        let seq = all(&v).skip(2);

        assert_eq!(seq.len(), Some(3));
        assert_eq!(seq.get(0), Some(&3));
        assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn skip_past_the_end_is_empty() {
        let mut seq = all(vec![1, 2]) | skip(5);
        assert_eq!(seq.props().size, SizeHint::Exact(0));
        assert_eq!(seq.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn skip_over_a_filter() {
        let mut seq = all(vec![1, 2, 3, 4, 5, 6]).filter(|x| x % 2 == 1).skip(1);
        assert_eq!(seq.to_vec(), vec![3, 5]);

        let mut past = all(vec![1, 3]).filter(|x| x % 2 == 0).skip(4);
        assert_eq!(past.count(), 0);
    }

    #[test]
    fn skip_then_take_on_unbounded() {
        let mut seq = iota(0u8).skip(250).take(6);
        assert_eq!(seq.to_vec(), vec![250, 251, 252, 253, 254, 255]);
    }
}
