use {
    crate::{
        buffer::Owned,
        error::{positive, Result},
        pipe::Adaptor,
        view::{AdaptorKind, Cursor, SeqProps, Sequence, SizeHint},
    },
    std::{cell::RefCell, collections::VecDeque},
};

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                   Chunk
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Consecutive, non-overlapping groups of `size` elements; the last group
/// may be shorter.
///
/// Each group is handed out as an [`Owned`] window. The cursor gathers the
/// group it stands on, so a chunked sequence is stateful.
#[derive(Clone)]
pub struct Chunk<S> {
    src: S,
    size: usize,
}

impl<S> Chunk<S> {
    pub fn new(src: S, size: usize) -> Result<Self> {
        let size = positive("chunk", "size", size)?;
        Ok(Chunk { src, size })
    }
}

struct ChunkState<C: Cursor> {
    src: C,
    /// `None` until somebody looks at the current group
    window: Option<Vec<C::Item>>,
}

impl<C: Cursor> ChunkState<C> {
    fn window(&mut self, size: usize) -> &Vec<C::Item> {
        let ChunkState { src, window } = self;
        window.get_or_insert_with(|| {
            let mut group = Vec::with_capacity(size);
            while group.len() < size && !src.is_end() {
                group.push(src.read());
                src.advance();
            }
            group
        })
    }
}

/// Gathers a group only when it is looked at, so advancing past the last
/// group a consumer wants does not pull the next one out of the source.
pub struct ChunkCursor<C: Cursor> {
    state: RefCell<ChunkState<C>>,
    size: usize,
}

impl<C: Cursor> ChunkCursor<C> {
    fn new(src: C, size: usize) -> Self {
        ChunkCursor {
            state: RefCell::new(ChunkState { src, window: None }),
            size,
        }
    }
}

impl<C> Cursor for ChunkCursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = Owned<C::Item>;

    fn is_end(&self) -> bool {
        let mut state = self.state.borrow_mut();
        state.window(self.size).is_empty()
    }

    fn read(&self) -> Owned<C::Item> {
        let mut state = self.state.borrow_mut();
        let window = state.window(self.size);
        assert!(!window.is_empty(), "read past the end of a sequence");
        Owned::from(window.clone())
    }

    fn advance(&mut self) {
        let state = self.state.get_mut();
        assert!(
            !state.window(self.size).is_empty(),
            "advance past the end of a sequence"
        );
        state.window = None;
    }

    fn remaining(&self) -> SizeHint {
        let state = self.state.borrow();
        let pending = match &state.window {
            Some(window) if window.is_empty() => return SizeHint::Exact(0),
            Some(_) => 1,
            None => 0,
        };
        match state.src.remaining() {
            SizeHint::Exact(n) => SizeHint::Exact(n.div_ceil(self.size).saturating_add(pending)),
            other => SizeHint::AtLeast(other.lower().div_ceil(self.size).saturating_add(pending)),
        }
    }
}

impl<S> Sequence for Chunk<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Owned<S::Item>;
    type Cursor<'a> = ChunkCursor<S::Cursor<'a>> where Self: 'a;

    fn props(&self) -> SeqProps {
        let props = self.src.props();
        let size = match props.size {
            SizeHint::Exact(n) => SizeHint::Exact(n.div_ceil(self.size)),
            SizeHint::AtLeast(usize::MAX) => SizeHint::AtLeast(usize::MAX),
            SizeHint::AtLeast(n) => SizeHint::AtLeast(n.div_ceil(self.size)),
            SizeHint::Unknown => SizeHint::Unknown,
        };
        props.adapted(AdaptorKind::Windowing).with_size(size)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        ChunkCursor::new(self.src.cursor_mut(), self.size)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChunkFn(usize);

/// Fails right away on `size == 0`, before any source is involved.
pub fn chunk(size: usize) -> Result<ChunkFn> {
    Ok(ChunkFn(positive("chunk", "size", size)?))
}

impl<S> Adaptor<S> for ChunkFn
where
    S: Sequence,
    S::Item: Clone,
{
    type Output = Chunk<S>;

    fn apply(self, src: S) -> Chunk<S> {
        Chunk { src, size: self.0 }
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                  Sliding
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Every run of `size` consecutive elements, overlapping, in order.
///
/// A source shorter than `size` has no windows at all.
#[derive(Clone)]
pub struct Sliding<S> {
    src: S,
    size: usize,
}

impl<S> Sliding<S> {
    pub fn new(src: S, size: usize) -> Result<Self> {
        let size = positive("sliding", "size", size)?;
        Ok(Sliding { src, size })
    }
}

pub struct SlidingCursor<C: Cursor> {
    src: C,
    size: usize,
    window: VecDeque<C::Item>,
}

impl<C: Cursor> SlidingCursor<C> {
    fn new(src: C, size: usize) -> Self {
        let mut cur = SlidingCursor {
            src,
            size,
            window: VecDeque::with_capacity(size),
        };
        while cur.window.len() < size && !cur.src.is_end() {
            cur.window.push_back(cur.src.read());
            cur.src.advance();
        }
        cur
    }
}

impl<C> Cursor for SlidingCursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = Owned<C::Item>;

    fn is_end(&self) -> bool {
        self.window.len() < self.size
    }

    fn read(&self) -> Owned<C::Item> {
        assert!(!self.is_end(), "read past the end of a sequence");
        self.window.iter().cloned().collect()
    }

    fn advance(&mut self) {
        assert!(!self.is_end(), "advance past the end of a sequence");
        self.window.pop_front();
        if !self.src.is_end() {
            self.window.push_back(self.src.read());
            self.src.advance();
        }
    }

    fn remaining(&self) -> SizeHint {
        if self.is_end() {
            return SizeHint::Exact(0);
        }
        match self.src.remaining() {
            SizeHint::Exact(n) => SizeHint::Exact(n.saturating_add(1)),
            other => SizeHint::AtLeast(other.lower().saturating_add(1)),
        }
    }
}

impl<S> Sequence for Sliding<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Owned<S::Item>;
    type Cursor<'a> = SlidingCursor<S::Cursor<'a>> where Self: 'a;

    fn props(&self) -> SeqProps {
        let props = self.src.props();
        let size = match props.size {
            SizeHint::Exact(n) => SizeHint::Exact(n.saturating_add(1).saturating_sub(self.size)),
            // endless stays endless
            SizeHint::AtLeast(usize::MAX) => SizeHint::AtLeast(usize::MAX),
            SizeHint::AtLeast(n) => SizeHint::AtLeast((n + 1).saturating_sub(self.size)),
            SizeHint::Unknown => SizeHint::Unknown,
        };
        props.adapted(AdaptorKind::Windowing).with_size(size)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        SlidingCursor::new(self.src.cursor_mut(), self.size)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SlidingFn(usize);

pub fn sliding(size: usize) -> Result<SlidingFn> {
    Ok(SlidingFn(positive("sliding", "size", size)?))
}

impl<S> Adaptor<S> for SlidingFn
where
    S: Sequence,
    S::Item: Clone,
{
    type Output = Sliding<S>;

    fn apply(self, src: S) -> Sliding<S> {
        Sliding { src, size: self.0 }
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

sequence_operators! {
    [S,] Chunk<S>;
    [S,] Sliding<S>;
}

adaptor_operators! {
    [] ChunkFn;
    [] SlidingFn;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
