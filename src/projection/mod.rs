//! Adaptors: lazily composed views over a source sequence.
//!
//! Every adaptor comes in two forms, a method of [`Project`] and a free
//! function building a closure for the pipeline operator (see
//! [`pipe`](crate::pipe)). Fan-in adaptors ([`concat`], [`zip`]) only exist
//! as direct calls.

pub mod cache_sequence;
pub mod concat_sequence;
pub mod decorate_sequence;
pub mod enumerate_sequence;
pub mod filter_map_sequence;
pub mod filter_sequence;
pub mod map_sequence;
pub mod reverse_sequence;
pub mod skip_sequence;
pub mod split_sequence;
pub mod stride_sequence;
pub mod take_sequence;
pub mod window_sequence;
pub mod zip_sequence;

pub use {
    cache_sequence::{cache1, Cache1},
    concat_sequence::{concat, Concat},
    decorate_sequence::{prepend, Prepend},
    enumerate_sequence::{enumerate, Enumerate},
    filter_map_sequence::{filter_map, FilterMap},
    filter_sequence::{dedup, filter, Dedup, Filter},
    map_sequence::{map, Map},
    reverse_sequence::{reverse, Reverse},
    skip_sequence::{skip, Skip},
    split_sequence::{split_when, SplitWhen},
    stride_sequence::{stride, Stride},
    take_sequence::{take, take_while, Take, TakeWhile},
    window_sequence::{chunk, sliding, Chunk, Sliding},
    zip_sequence::{zip, Zip},
};

use crate::{
    buffer::IntoSequence,
    error::Result,
    view::{RandomAccess, Sequence},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Direct entry points of all adaptors.
///
/// Calling one of these only builds the composed sequence. No element of
/// the source is read until the result is traversed.
pub trait Project: Sequence + Sized {
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }

    fn skip(self, n: usize) -> Skip<Self> {
        Skip::new(self, n)
    }

    fn prepend(self, head: Self::Item) -> Prepend<Self, Self::Item>
    where
        Self::Item: Clone,
    {
        Prepend::new(self, head)
    }

    fn reverse(self) -> Result<Reverse<Self>>
    where
        Self: RandomAccess,
    {
        Reverse::new(self)
    }

    fn stride(self, step: usize) -> Result<Stride<Self>>
    where
        Self: RandomAccess,
    {
        Stride::new(self, step)
    }

    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F, U>
    where
        F: Fn(Self::Item) -> Option<U>,
    {
        filter_map_sequence::filter_map_seq(self, f)
    }

    fn dedup(self) -> Dedup<Self>
    where
        Self::Item: PartialEq,
    {
        Dedup::new(self)
    }

    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    fn cache1(self) -> Cache1<Self>
    where
        Self::Item: Clone,
    {
        Cache1::new(self)
    }

    fn chunk(self, size: usize) -> Result<Chunk<Self>>
    where
        Self::Item: Clone,
    {
        Chunk::new(self, size)
    }

    fn sliding(self, size: usize) -> Result<Sliding<Self>>
    where
        Self::Item: Clone,
    {
        Sliding::new(self, size)
    }

    fn split_when<P>(self, delim: P) -> SplitWhen<Self, P>
    where
        Self::Item: Clone,
        P: Fn(&Self::Item) -> bool,
    {
        SplitWhen::new(self, delim)
    }

    fn concat<B>(self, other: B) -> Concat<Self, B::Seq>
    where
        B: IntoSequence,
        B::Seq: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other.into_seq())
    }

    fn zip<B: IntoSequence>(self, other: B) -> Zip<Self, B::Seq> {
        Zip::new(self, other.into_seq())
    }
}

impl<S: Sequence> Project for S {}
