use {
    crate::view::{Cursor, Finiteness, SeqProps, Sequence, SizeHint},
    std::cell::RefCell,
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Calls `f` for every element, without end.
///
/// `f` runs once per element, when a traversal first looks at it. Advancing
/// consumes the element, so no element is produced twice: a second
/// traversal starts on the first element the previous one did not consume.
pub struct Generate<F, T> {
    f: F,
    head: Option<T>,
}

pub fn generate<F, T>(f: F) -> Generate<F, T>
where
    F: FnMut() -> T,
    T: Clone,
{
    Generate { f, head: None }
}

struct GeneratePull<'a, F, T> {
    f: &'a mut F,
    head: &'a mut Option<T>,
}

impl<'a, F, T> GeneratePull<'a, F, T>
where
    F: FnMut() -> T,
{
    fn fill(&mut self) -> &T {
        let GeneratePull { f, head } = self;
        head.get_or_insert_with(|| f())
    }
}

pub struct GenerateCursor<'a, F, T> {
    pull: RefCell<GeneratePull<'a, F, T>>,
}

impl<'a, F, T> Cursor for GenerateCursor<'a, F, T>
where
    F: FnMut() -> T,
    T: Clone,
{
    type Item = T;

    fn is_end(&self) -> bool {
        false
    }

    fn read(&self) -> T {
        let mut pull = self.pull.borrow_mut();
        pull.fill().clone()
    }

    fn advance(&mut self) {
        let pull = self.pull.get_mut();
        if pull.head.take().is_none() {
            // skipped without being looked at
            (pull.f)();
        }
    }

    fn remaining(&self) -> SizeHint {
        SizeHint::AtLeast(usize::MAX)
    }
}

impl<F, T> Sequence for Generate<F, T>
where
    F: FnMut() -> T,
    T: Clone,
{
    type Item = T;
    type Cursor<'a> = GenerateCursor<'a, F, T> where Self: 'a;

    fn props(&self) -> SeqProps {
        SeqProps::single_pass(SizeHint::AtLeast(usize::MAX), Finiteness::Unbounded)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        let Generate { f, head } = self;
        GenerateCursor {
            pull: RefCell::new(GeneratePull { f, head }),
        }
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                 From Iterator
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

enum Head<T> {
    /// nothing pulled since the last advance
    Stale,
    Ready(T),
    Done,
}

/// Any std iterator as a single-pass sequence.
///
/// This is the boundary to push-style producers (channels, readers, ..):
/// only forward, only once. The iterator is pulled lazily, one item per
/// element a traversal actually looks at.
pub struct FromIter<I: Iterator> {
    iter: I,
    head: Head<I::Item>,
}

pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    FromIter {
        iter: iter.into_iter(),
        head: Head::Stale,
    }
}

fn iter_hint<T>(size_hint: (usize, Option<usize>), head: &Head<T>) -> (SizeHint, Finiteness) {
    let pending = match head {
        Head::Done => return (SizeHint::Exact(0), Finiteness::Finite),
        Head::Ready(_) => 1,
        Head::Stale => 0,
    };
    match size_hint {
        (lower, Some(upper)) if lower == upper => (
            SizeHint::Exact(lower.saturating_add(pending)),
            Finiteness::Finite,
        ),
        (lower, Some(_)) => (
            SizeHint::AtLeast(lower.saturating_add(pending)),
            Finiteness::Finite,
        ),
        (lower, None) => (
            SizeHint::AtLeast(lower.saturating_add(pending)),
            Finiteness::Unbounded,
        ),
    }
}

struct IterPull<'a, I: Iterator> {
    iter: &'a mut I,
    head: &'a mut Head<I::Item>,
}

impl<'a, I: Iterator> IterPull<'a, I> {
    fn fill(&mut self) -> Option<&I::Item> {
        if matches!(*self.head, Head::Stale) {
            *self.head = match self.iter.next() {
                Some(item) => Head::Ready(item),
                None => Head::Done,
            };
        }
        match &*self.head {
            Head::Ready(item) => Some(item),
            _ => None,
        }
    }
}

pub struct FromIterCursor<'a, I: Iterator> {
    pull: RefCell<IterPull<'a, I>>,
}

impl<'a, I> Cursor for FromIterCursor<'a, I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn is_end(&self) -> bool {
        let mut pull = self.pull.borrow_mut();
        pull.fill().is_none()
    }

    fn read(&self) -> I::Item {
        let mut pull = self.pull.borrow_mut();
        match pull.fill() {
            Some(item) => item.clone(),
            None => panic!("read past the end of a sequence"),
        }
    }

    fn advance(&mut self) {
        let pull = self.pull.get_mut();
        assert!(pull.fill().is_some(), "advance past the end of a sequence");
        *pull.head = Head::Stale;
    }

    fn remaining(&self) -> SizeHint {
        let pull = self.pull.borrow();
        iter_hint(pull.iter.size_hint(), &*pull.head).0
    }
}

impl<I> Sequence for FromIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    type Cursor<'a> = FromIterCursor<'a, I> where Self: 'a;

    fn props(&self) -> SeqProps {
        let (size, finiteness) = iter_hint(self.iter.size_hint(), &self.head);
        SeqProps::single_pass(size, finiteness)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        let FromIter { iter, head } = self;
        FromIterCursor {
            pull: RefCell::new(IterPull { iter, head }),
        }
    }
}

sequence_operators! {
    [F, T,] Generate<F, T>;
    [I: Iterator,] FromIter<I>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use {
        crate::{
            factory::generate::*,
            projection::{map, take, Project},
            view::{SequenceExt, Traversal},
        },
        std::cell::Cell,
    };

    #[test]
    fn generate_take() {
        let mut n = 1u64;
        let mut powers = generate(move || {
            let out = n;
            n *= 2;
            out
        });

        assert_eq!(powers.props().traversal, Traversal::SinglePass);
        assert_eq!((&mut powers).take(4).to_vec(), vec![1, 2, 4, 8]);

        // the next traversal starts on the first element not yet consumed
        assert_eq!((&mut powers).take(2).to_vec(), vec![16, 32]);
    }

    #[test]
    fn generate_runs_once_per_element() {
        let calls = Cell::new(0);
        let mut seq = generate(|| {
            calls.set(calls.get() + 1);
            calls.get()
        });

        let mut cur = seq.cursor_mut();
        assert_eq!(calls.get(), 0);

        assert_eq!(cur.read(), 1);
        assert_eq!(cur.read(), 1);
        cur.advance();
        assert_eq!(calls.get(), 1);

        // skipping an element it never looked at still consumes it
        cur.advance();
        assert_eq!(cur.read(), 3);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn from_iter_is_single_pass() {
        let mut seq = from_iter("a b c d".split(' '));
        assert_eq!(seq.props().traversal, Traversal::SinglePass);

        let mut seen = (&mut seq).take(2).to_vec();
        assert_eq!(seen, vec!["a", "b"]);

        seen.extend(seq.to_vec());
        assert_eq!(seen, vec!["a", "b", "c", "d"]);
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn from_iter_pulls_lazily() {
        let mut seq = from_iter(1..=3);
        assert_eq!(seq.props().size, SizeHint::Exact(3));

        let mut cur = seq.cursor_mut();
        assert_eq!(cur.remaining(), SizeHint::Exact(3));
        assert!(!cur.is_end());
        assert_eq!(cur.read(), 1);
        cur.advance();
        assert_eq!(cur.remaining(), SizeHint::Exact(2));
        drop(cur);

        assert_eq!(seq.props().size, SizeHint::Exact(2));
        assert_eq!(seq.to_vec(), vec![2, 3]);
        assert_eq!(seq.props().size, SizeHint::Exact(0));
    }

    #[test]
    fn from_endless_iterator_then_take() {
        let endless = from_iter(std::iter::repeat(7u8));
        assert_eq!(endless.props().size, SizeHint::AtLeast(usize::MAX));

        let mut seq = endless.take(3);
        assert_eq!(seq.props().size, SizeHint::Exact(3));
        assert_eq!(seq.to_vec(), vec![7, 7, 7]);
    }

    #[test]
    fn from_iter_knows_exact_sizes() {
        let seq = from_iter(vec![1, 2, 3]);
        assert_eq!(seq.props().size, SizeHint::Exact(3));
        assert_eq!(seq.props().finiteness, Finiteness::Finite);

        let endless = from_iter(std::iter::successors(Some(1u32), |x| x.checked_mul(3)));
        assert_eq!(endless.props().finiteness, Finiteness::Unbounded);

        let mut seq = endless | map(|x: u32| x + 1) | take(3);
        assert_eq!(seq.to_vec(), vec![2, 4, 10]);
    }
}
