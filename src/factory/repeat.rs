use {
    crate::view::{IndexCursor, Ownership, RandomAccess, SeqProps, Sequence, SharedSequence},
    std::marker::PhantomData,
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// The same value, forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repeat<T> {
    value: T,
}

pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;
    type Cursor<'a> = IndexCursor<'a, Self> where Self: 'a;

    fn props(&self) -> SeqProps {
        SeqProps::unbounded()
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        IndexCursor::new(&*self)
    }
}

impl<T: Clone> SharedSequence for Repeat<T> {
    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self)
    }
}

impl<T: Clone> RandomAccess for Repeat<T> {
    fn get(&self, _idx: usize) -> Option<T> {
        Some(self.value.clone())
    }

    fn len(&self) -> Option<usize> {
        None
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Exactly one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Single<T> {
    value: T,
}

pub fn single<T: Clone>(value: T) -> Single<T> {
    Single { value }
}

impl<T: Clone> Sequence for Single<T> {
    type Item = T;
    type Cursor<'a> = IndexCursor<'a, Self> where Self: 'a;

    fn props(&self) -> SeqProps {
        SeqProps::indexed(1, Ownership::Owns)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        IndexCursor::new(&*self)
    }
}

impl<T: Clone> SharedSequence for Single<T> {
    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self)
    }
}

impl<T: Clone> RandomAccess for Single<T> {
    fn get(&self, idx: usize) -> Option<T> {
        match idx {
            0 => Some(self.value.clone()),
            _ => None,
        }
    }

    fn len(&self) -> Option<usize> {
        Some(1)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// No elements.
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

pub fn empty<T>() -> Empty<T> {
    Empty { _item: PhantomData }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor<'a> = IndexCursor<'a, Self> where Self: 'a;

    fn props(&self) -> SeqProps {
        SeqProps::indexed(0, Ownership::Owns)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        IndexCursor::new(&*self)
    }
}

impl<T> SharedSequence for Empty<T> {
    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self)
    }
}

impl<T> RandomAccess for Empty<T> {
    fn get(&self, _idx: usize) -> Option<T> {
        None
    }

    fn len(&self) -> Option<usize> {
        Some(0)
    }
}

sequence_operators! {
    [T,] Repeat<T>;
    [T,] Single<T>;
    [T,] Empty<T>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::{
        factory::repeat::*,
        projection::{take, Project},
        view::{Finiteness, SequenceExt},
    };

    #[test]
    fn repeat_take() {
        let mut seq = repeat("ab".to_string()) | take(2);
        assert_eq!(seq.to_vec(), vec!["ab", "ab"]);
        assert_eq!(repeat(0).props().finiteness, Finiteness::Unbounded);
    }

    #[test]
    fn single_and_empty() {
        assert_eq!(single('z').to_vec(), vec!['z']);
        assert_eq!(empty::<char>().to_vec(), Vec::<char>::new());
        assert!(empty::<()>().is_empty());
        assert_eq!(single(1).concat(empty()).count(), 1);
    }
}
