use crate::{
    pipe::Adaptor,
    projection::{filter_sequence::Filter, map_sequence::Map},
    view::Sequence,
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// `map` to an `Option`, keep the `Some`s, unwrap them.
///
/// Nothing but a composition of existing adaptors, so it inherits their
/// properties: stateful and forward-only, like any filter.
pub type FilterMap<S, F, U> = Map<Filter<Map<S, F>, fn(&Option<U>) -> bool>, fn(Option<U>) -> U>;

fn is_kept<U>(item: &Option<U>) -> bool {
    item.is_some()
}

fn kept<U>(item: Option<U>) -> U {
    match item {
        Some(item) => item,
        None => unreachable!("filter_map passed on a rejected element"),
    }
}

pub fn filter_map_seq<S, F, U>(src: S, f: F) -> FilterMap<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> Option<U>,
{
    Map::new(
        Filter::new(Map::new(src, f), is_kept::<U> as fn(&Option<U>) -> bool),
        kept::<U> as fn(Option<U>) -> U,
    )
}

#[derive(Clone)]
pub struct FilterMapFn<F>(F);

pub fn filter_map<F>(f: F) -> FilterMapFn<F> {
    FilterMapFn(f)
}

impl<S, F, U> Adaptor<S> for FilterMapFn<F>
where
    S: Sequence,
    F: Fn(S::Item) -> Option<U>,
{
    type Output = FilterMap<S, F, U>;

    fn apply(self, src: S) -> FilterMap<S, F, U> {
        filter_map_seq(src, self.0)
    }
}

adaptor_operators! {
    [F,] FilterMapFn<F>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
