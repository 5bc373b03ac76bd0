use crate::view::{IndexCursor, Ownership, RandomAccess, SeqProps, Sequence, SharedSequence};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Integers that can be counted up from.
pub trait Countable: Copy {
    /// `self + n`, or `None` if it does not fit.
    fn offset(self, n: usize) -> Option<Self>;

    /// Number of values in `self..end`.
    fn distance(self, end: Self) -> usize;
}

macro_rules! countable {
    ($($t:ty)*) => {$(
        impl Countable for $t {
            fn offset(self, n: usize) -> Option<Self> {
                let wide = i128::from(self).checked_add(i128::try_from(n).ok()?)?;
                <$t>::try_from(wide).ok()
            }

            fn distance(self, end: Self) -> usize {
                let d = i128::from(end) - i128::from(self);
                usize::try_from(d.max(0)).unwrap_or(usize::MAX)
            }
        }
    )*};
}

countable! { i8 i16 i32 i64 u8 u16 u32 u64 }

impl Countable for usize {
    fn offset(self, n: usize) -> Option<Self> {
        self.checked_add(n)
    }

    fn distance(self, end: Self) -> usize {
        end.saturating_sub(self)
    }
}

impl Countable for isize {
    fn offset(self, n: usize) -> Option<Self> {
        self.checked_add_unsigned(n)
    }

    fn distance(self, end: Self) -> usize {
        if end > self {
            end.abs_diff(self)
        } else {
            0
        }
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// `start, start + 1, start + 2, ..` without end.
///
/// Reading past the largest value of `T` is a contract violation, like
/// reading past the end of any other sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Iota<T> {
    start: T,
}

pub fn iota<T: Countable>(start: T) -> Iota<T> {
    Iota { start }
}

impl<T: Countable> Sequence for Iota<T> {
    type Item = T;
    type Cursor<'a> = IndexCursor<'a, Self> where Self: 'a;

    fn props(&self) -> SeqProps {
        SeqProps::unbounded()
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        IndexCursor::new(&*self)
    }
}

impl<T: Countable> SharedSequence for Iota<T> {
    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self)
    }
}

impl<T: Countable> RandomAccess for Iota<T> {
    fn get(&self, idx: usize) -> Option<T> {
        self.start.offset(idx)
    }

    fn len(&self) -> Option<usize> {
        None
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// `start..end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IotaTo<T> {
    start: T,
    len: usize,
}

pub fn iota_to<T: Countable>(start: T, end: T) -> IotaTo<T> {
    IotaTo {
        start,
        len: start.distance(end),
    }
}

impl<T: Countable> Sequence for IotaTo<T> {
    type Item = T;
    type Cursor<'a> = IndexCursor<'a, Self> where Self: 'a;

    fn props(&self) -> SeqProps {
        SeqProps::indexed(self.len, Ownership::Owns)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        IndexCursor::new(&*self)
    }
}

impl<T: Countable> SharedSequence for IotaTo<T> {
    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self)
    }
}

impl<T: Countable> RandomAccess for IotaTo<T> {
    fn get(&self, idx: usize) -> Option<T> {
        if idx < self.len {
            self.start.offset(idx)
        } else {
            None
        }
    }

    fn len(&self) -> Option<usize> {
        Some(self.len)
    }
}

sequence_operators! {
    [T,] Iota<T>;
    [T,] IotaTo<T>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
