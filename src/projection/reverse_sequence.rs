use crate::{
    error::{Result, SeqError},
    pipe::Adaptor,
    view::{AdaptorKind, IndexCursor, RandomAccess, SeqProps, Sequence, SharedSequence},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// The source back to front.
///
/// Needs a random-access source (checked by the type system) that is also
/// bounded (checked when composing: there is no last element of `iota`).
#[derive(Clone)]
pub struct Reverse<S> {
    src: S,
    len: usize,
}

impl<S: RandomAccess> Reverse<S> {
    pub fn new(src: S) -> Result<Self> {
        match src.len() {
            Some(len) => Ok(Reverse { src, len }),
            None => Err(SeqError::capability("reverse", "bounded")),
        }
    }
}

impl<S: RandomAccess> Sequence for Reverse<S> {
    type Item = S::Item;
    type Cursor<'a> = IndexCursor<'a, Self> where Self: 'a;

    fn props(&self) -> SeqProps {
        self.src.props().adapted(AdaptorKind::StatelessMap)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        IndexCursor::new(&*self)
    }
}

impl<S: RandomAccess> SharedSequence for Reverse<S> {
    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self)
    }
}

impl<S: RandomAccess> RandomAccess for Reverse<S> {
    fn get(&self, idx: usize) -> Option<S::Item> {
        if idx < self.len {
            self.src.get(self.len - 1 - idx)
        } else {
            None
        }
    }

    fn len(&self) -> Option<usize> {
        Some(self.len)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseFn;

pub fn reverse() -> ReverseFn {
    ReverseFn
}

impl<S: RandomAccess> Adaptor<S> for ReverseFn {
    type Output = Result<Reverse<S>>;

    fn apply(self, src: S) -> Result<Reverse<S>> {
        Reverse::new(src)
    }
}

sequence_operators! {
    [S,] Reverse<S>;
}

adaptor_operators! {
    [] ReverseFn;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::{
        buffer::all,
        factory::{iota, iota_to},
        projection::{map, reverse_sequence::*, Project},
        view::{SequenceExt, SharedSequenceExt, Traversal},
    };

    #[test]
    fn reverse_seq1() {
        let v = vec![1, 2, 3];
        let seq = all(&v).reverse().unwrap();

        assert_eq!(seq.get(0), Some(&3));
        assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(seq.props().traversal, Traversal::RandomAccess);
    }

    #[test]
    fn reverse_twice_is_identity() -> Result<()> {
        let v = vec!['x', 'y', 'z'];
        let mut seq = (all(&v) | reverse())?.reverse()?;
        assert_eq!(seq.to_vec(), vec![&'x', &'y', &'z']);
        Ok(())
    }

    #[test]
    fn reverse_of_mapped_range() {
        let mut seq = (iota_to(0, 4) | map(|x: i32| x * x) | reverse()).unwrap();
        assert_eq!(seq.to_vec(), vec![9, 4, 1, 0]);
    }

    #[test]
    fn reverse_of_unbounded_fails() {
        let err = iota(0u32).reverse().map(|_| ()).unwrap_err();
        assert_eq!(
            err,
            SeqError::CapabilityMismatch {
                adaptor: "reverse",
                required: "bounded"
            }
        );

        // bounding it first makes it fine
        let mut seq = iota(0u32).take(3).reverse().unwrap();
        assert_eq!(seq.to_vec(), vec![2, 1, 0]);
    }

    #[test]
    fn reverse_of_empty() {
        let mut seq = all(Vec::<u8>::new()).reverse().unwrap();
        assert_eq!(seq.count(), 0);
    }
}
