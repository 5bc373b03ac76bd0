use crate::{
    error::{positive, Result},
    pipe::Adaptor,
    view::{AdaptorKind, IndexCursor, RandomAccess, SeqProps, Sequence, SharedSequence, SizeHint},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Every `step`-th element, starting with the first.
#[derive(Clone)]
pub struct Stride<S> {
    src: S,
    step: usize,
}

impl<S: RandomAccess> Stride<S> {
    pub fn new(src: S, step: usize) -> Result<Self> {
        let step = positive("stride", "step", step)?;
        Ok(Stride { src, step })
    }
}

impl<S: RandomAccess> Sequence for Stride<S> {
    type Item = S::Item;
    type Cursor<'a> = IndexCursor<'a, Self> where Self: 'a;

    fn props(&self) -> SeqProps {
        let props = self.src.props();
        let size = match props.size {
            SizeHint::Exact(n) => SizeHint::Exact(n.div_ceil(self.step)),
            SizeHint::AtLeast(n) => SizeHint::AtLeast(n.div_ceil(self.step)),
            SizeHint::Unknown => SizeHint::Unknown,
        };
        props.adapted(AdaptorKind::StatelessMap).with_size(size)
    }

    fn cursor_mut(&mut self) -> Self::Cursor<'_> {
        IndexCursor::new(&*self)
    }
}

impl<S: RandomAccess> SharedSequence for Stride<S> {
    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self)
    }
}

impl<S: RandomAccess> RandomAccess for Stride<S> {
    fn get(&self, idx: usize) -> Option<S::Item> {
        self.src.get(idx.checked_mul(self.step)?)
    }

    fn len(&self) -> Option<usize> {
        self.src.len().map(|len| len.div_ceil(self.step))
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone, Copy, Debug)]
pub struct StrideFn(usize);

pub fn stride(step: usize) -> Result<StrideFn> {
    Ok(StrideFn(positive("stride", "step", step)?))
}

impl<S: RandomAccess> Adaptor<S> for StrideFn {
    type Output = Stride<S>;

    fn apply(self, src: S) -> Stride<S> {
        Stride { src, step: self.0 }
    }
}

sequence_operators! {
    [S,] Stride<S>;
}

adaptor_operators! {
    [] StrideFn;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
