use crate::{
    pipe::Adaptor,
    view::{AdaptorKind, Cursor, RandomAccess, SeqProps, Sequence, SharedSequence, SizeHint},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
//                  Prepend
//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// `head` followed by the whole source.
///
/// The source keeps being the primary input (it is what `|` pipes into),
/// the extra element is a parameter.
#[derive(Clone)]
pub struct Prepend<S, T> {
    head: T,
    src: S,
}

impl<S, T> Prepend<S, T> {
    pub fn new(src: S, head: T) -> Self {
        Prepend { head, src }
    }
}

pub struct PrependCursor<'a, C, T> {
    head: Option<&'a T>,
    src: C,
}

impl<'a, C, T> Cursor for PrependCursor<'a, C, T>
where
    C: Cursor<Item = T>,
    T: Clone,
{
    type Item = C::Item;

    fn is_end(&self) -> bool {
        self.head.is_none() && self.src.is_end()
    }

    fn read(&self) -> C::Item {
        match self.head {
            Some(head) => head.clone(),
            None => self.src.read(),
        }
    }

    fn advance(&mut self) {
        if self.head.take().is_none() {
            self.src.advance();
        }
    }

    fn advance_by(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        match self.head.take() {
            Some(_) => self.src.advance_by(n - 1),
            None => self.src.advance_by(n),
        }
    }

    fn remaining(&self) -> SizeHint {
        let head = if self.head.is_some() { 1 } else { 0 };
        self.src.remaining().plus(SizeHint::Exact(head))
    }
}

impl<S, T> Sequence for Prepend<S, T>
where
    S: Sequence<Item = T>,
    T: Clone,
{
    type Item = T;
    type Cursor<'a> = PrependCursor<'a, S::Cursor<'a>, T> where Self: 'a;

    fn props(&self) -> SeqProps {
        let props = self.src.props();
        props
            .adapted(AdaptorKind::StatelessMap)
            .with_size(props.size.plus(SizeHint::Exact(1)))
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        PrependCursor {
            head: Some(&self.head),
            src: self.src.cursor_mut(),
        }
    }
}

impl<S, T> SharedSequence for Prepend<S, T>
where
    S: SharedSequence<Item = T>,
    T: Clone,
{
    fn cursor(&self) -> Self::Cursor<'_> {
        PrependCursor {
            head: Some(&self.head),
            src: self.src.cursor(),
        }
    }
}

impl<S, T> RandomAccess for Prepend<S, T>
where
    S: RandomAccess<Item = T>,
    T: Clone,
{
    fn get(&self, idx: usize) -> Option<T> {
        match idx {
            0 => Some(self.head.clone()),
            _ => self.src.get(idx - 1),
        }
    }

    fn len(&self) -> Option<usize> {
        Some(self.src.len()? + 1)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone, Debug)]
pub struct PrependFn<T>(T);

pub fn prepend<T>(head: T) -> PrependFn<T> {
    PrependFn(head)
}

impl<S, T> Adaptor<S> for PrependFn<T>
where
    S: Sequence<Item = T>,
    T: Clone,
{
    type Output = Prepend<S, T>;

    fn apply(self, src: S) -> Prepend<S, T> {
        Prepend::new(src, self.0)
    }
}

sequence_operators! {
    [S, T,] Prepend<S, T>;
}

adaptor_operators! {
    [T,] PrependFn<T>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::{
        buffer::all,
        factory::{empty, iota},
        projection::{decorate_sequence::*, map, Project},
        view::{SequenceExt, SharedSequenceExt, Traversal},
    };

    #[test]
    fn prepend_seq1() {
        let v = vec![2, 3];
        let seq = all(&v) | map(|x: &i32| *x) | prepend(1);

        assert_eq!(seq.len(), Some(3));
        assert_eq!(seq.get(0), Some(1));
        assert_eq!(seq.get(2), Some(3));
        assert_eq!(seq.get(3), None);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(seq.props().traversal, Traversal::RandomAccess);
    }

    #[test]
    fn prepend_to_empty() {
        let mut seq = empty::<&str>().prepend("only");
        assert_eq!(seq.to_vec(), vec!["only"]);
    }

    #[test]
    fn prepend_then_skip() {
        let mut seq = iota(5u16).prepend(0).skip(1).take(3);
        assert_eq!(seq.to_vec(), vec![5, 6, 7]);
    }
}
