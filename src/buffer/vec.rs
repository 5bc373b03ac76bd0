use {
    crate::view::{IndexCursor, Ownership, RandomAccess, SeqProps, Sequence, SharedSequence},
    std::ops::{Deref, DerefMut},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// A sequence that owns its backing `Vec`.
///
/// This is both what a temporary container turns into when handed to
/// [`all`](crate::buffer::all) and what materialization produces. Its
/// elements are handed out by clone, so it can be moved across any scope
/// boundary without dangling.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Owned<T> {
    data: Vec<T>,
}

impl<T> Owned<T> {
    pub fn new() -> Self {
        Owned { data: Vec::new() }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the backing storage.
    ///
    /// Needs `&mut self`, so no cursor can be alive at the same time.
    pub fn get_mut(&mut self) -> MutableVecAccess<'_, T> {
        MutableVecAccess { data: &mut self.data }
    }
}

impl<T> From<Vec<T>> for Owned<T> {
    fn from(data: Vec<T>) -> Self {
        Owned { data }
    }
}

impl<T> FromIterator<T> for Owned<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Owned {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Owned<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T> AsRef<[T]> for Owned<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Owned<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.data == other
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

pub struct MutableVecAccess<'a, T> {
    data: &'a mut Vec<T>,
}

impl<'a, T> Deref for MutableVecAccess<'a, T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        self.data
    }
}

impl<'a, T> DerefMut for MutableVecAccess<'a, T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        self.data
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<T: Clone> Sequence for Owned<T> {
    type Item = T;
    type Cursor<'a> = IndexCursor<'a, Self> where Self: 'a;

    fn props(&self) -> SeqProps {
        SeqProps::indexed(self.data.len(), Ownership::Owns)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        IndexCursor::new(&*self)
    }
}

impl<T: Clone> SharedSequence for Owned<T> {
    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self)
    }
}

impl<T: Clone> RandomAccess for Owned<T> {
    fn get(&self, idx: usize) -> Option<T> {
        self.data.get(idx).cloned()
    }

    fn len(&self) -> Option<usize> {
        Some(self.data.len())
    }
}

sequence_operators! {
    [T,] Owned<T>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::{
        buffer::vec::*,
        view::{SequenceExt, SharedSequenceExt},
    };

    #[test]
    fn owned_buffer1() {
        let mut buffer = Owned::from(vec!['a', 'b', 'c']);
        assert_eq!(buffer.props().ownership, Ownership::Owns);
        assert_eq!(buffer.get(1), Some('b'));
        assert_eq!(buffer.get(3), None);
        assert_eq!(buffer.to_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn mutate_between_traversals() {
        let mut buffer = Owned::from(vec![1, 2]);
        assert_eq!(buffer.iter().sum::<i32>(), 3);

        buffer.get_mut().push(3);
        buffer.get_mut()[0] = 10;

        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![10, 2, 3]);
    }

    #[test]
    fn owned_outlives_its_scope() {
        fn make() -> Owned<String> {
            let words = vec!["x".to_string(), "y".to_string()];
            Owned::from(words)
        }

        let mut seq = make();
        assert_eq!(seq.to_vec(), vec!["x".to_string(), "y".to_string()]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_array() {
        let buffer = Owned::from(vec![1, 2, 3]);
        let json = serde_json::to_string(&buffer).unwrap();
        assert_eq!(json, "[1,2,3]");

        let back: Owned<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, buffer);
    }
}
