//! Eager actions: in-place algorithms on a container taken by value.
//!
//! An action consumes its container and hands the (modified) container
//! back, so the caller states explicitly whether the input survives:
//!
//! ```
//! use r3seq::prelude::*;
//! use r3seq::action::{drop_front, sort, unique};
//!
//! let v = vec![3, 1, 3, 2, 1];
//!
//! // keep `v`: hand over a copy
//! let w = v.clone().pipe(sort() | unique());
//! assert_eq!(w, vec![1, 2, 3]);
//!
//! // give `v` up: it is moved into the action
//! let rest = v.pipe(drop_front(2));
//! assert_eq!(rest, vec![3, 2, 1]);
//! ```
//!
//! Using a container after it was moved into an action does not compile:
//!
//! ```compile_fail
//! use r3seq::prelude::*;
//! use r3seq::action::sort;
//!
//! let v = vec![2, 1];
//! let sorted = v.pipe(sort());
//! assert_eq!(v.len(), 2);
//! ```
//!
//! Actions compose with `|` like adaptors do and also apply to an
//! [`Owned`] sequence, e.g. right after materializing a lazy chain.

use crate::{buffer::Owned, pipe::Adaptor};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

pub trait Action<T> {
    const NAME: &'static str;

    fn run(self, v: Vec<T>) -> Vec<T>;
}

fn run_action<T, A: Action<T>>(action: A, v: Vec<T>) -> Vec<T> {
    tracing::trace!(action = A::NAME, len = v.len(), "action");
    action.run(v)
}

macro_rules! actions {
    ($([$($gen:ident),*] $ty:ty;)*) => {$(
        impl<T, $($gen),*> Adaptor<Vec<T>> for $ty
        where
            $ty: Action<T>,
        {
            type Output = Vec<T>;

            fn apply(self, v: Vec<T>) -> Vec<T> {
                run_action(self, v)
            }
        }

        impl<T, $($gen),*> Adaptor<Owned<T>> for $ty
        where
            $ty: Action<T>,
        {
            type Output = Owned<T>;

            fn apply(self, v: Owned<T>) -> Owned<T> {
                Owned::from(run_action(self, v.into_vec()))
            }
        }

        adaptor_operators! {
            [$($gen,)*] $ty;
        }
    )*};
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                 Slicing
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Removes the first `n` elements (all of them if there are fewer).
#[derive(Clone, Copy, Debug)]
pub struct DropFront(usize);

pub fn drop_front(n: usize) -> DropFront {
    DropFront(n)
}

impl<T> Action<T> for DropFront {
    const NAME: &'static str = "drop_front";

    fn run(self, mut v: Vec<T>) -> Vec<T> {
        let n = std::cmp::min(self.0, v.len());
        v.drain(..n);
        v
    }
}

/// Keeps only the first `n` elements.
#[derive(Clone, Copy, Debug)]
pub struct TakeFront(usize);

pub fn take_front(n: usize) -> TakeFront {
    TakeFront(n)
}

impl<T> Action<T> for TakeFront {
    const NAME: &'static str = "take_front";

    fn run(self, mut v: Vec<T>) -> Vec<T> {
        v.truncate(self.0);
        v
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                 Ordering
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

#[derive(Clone, Copy, Debug, Default)]
pub struct Sort;

pub fn sort() -> Sort {
    Sort
}

impl<T: Ord> Action<T> for Sort {
    const NAME: &'static str = "sort";

    fn run(self, mut v: Vec<T>) -> Vec<T> {
        v.sort();
        v
    }
}

/// Stable sort by a derived key.
#[derive(Clone, Copy, Debug)]
pub struct SortByKey<F>(F);

pub fn sort_by_key<F>(f: F) -> SortByKey<F> {
    SortByKey(f)
}

impl<T, K, F> Action<T> for SortByKey<F>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    const NAME: &'static str = "sort_by_key";

    fn run(self, mut v: Vec<T>) -> Vec<T> {
        v.sort_by_key(self.0);
        v
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseInPlace;

pub fn reverse() -> ReverseInPlace {
    ReverseInPlace
}

impl<T> Action<T> for ReverseInPlace {
    const NAME: &'static str = "reverse";

    fn run(self, mut v: Vec<T>) -> Vec<T> {
        v.reverse();
        v
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                 Removal
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Removes consecutive duplicates; after `sort` that leaves each value once.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unique;

pub fn unique() -> Unique {
    Unique
}

impl<T: PartialEq> Action<T> for Unique {
    const NAME: &'static str = "unique";

    fn run(self, mut v: Vec<T>) -> Vec<T> {
        v.dedup();
        v
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RemoveIf<P>(P);

pub fn remove_if<P>(pred: P) -> RemoveIf<P> {
    RemoveIf(pred)
}

impl<T, P> Action<T> for RemoveIf<P>
where
    P: FnMut(&T) -> bool,
{
    const NAME: &'static str = "remove_if";

    fn run(self, mut v: Vec<T>) -> Vec<T> {
        let mut pred = self.0;
        v.retain(|x| !pred(x));
        v
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                 Mutation
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Applies `f` to every element in place.
#[derive(Clone, Copy, Debug)]
pub struct Transform<F>(F);

pub fn transform<F>(f: F) -> Transform<F> {
    Transform(f)
}

impl<T, F> Action<T> for Transform<F>
where
    F: FnMut(&mut T),
{
    const NAME: &'static str = "transform";

    fn run(self, mut v: Vec<T>) -> Vec<T> {
        v.iter_mut().for_each(self.0);
        v
    }
}

actions! {
    [] DropFront;
    [] TakeFront;
    [] Sort;
    [F] SortByKey<F>;
    [] ReverseInPlace;
    [] Unique;
    [P] RemoveIf<P>;
    [F] Transform<F>;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::{
        action::*,
        buffer::all,
        pipe::Pipe,
        projection::{filter, map},
        view::SequenceExt,
    };

    #[test]
    fn drop_front_on_a_copy() {
        let v = vec![1, 2, 3, 2, 4, 2, 5];
        let w = v.clone().pipe(drop_front(3));

        assert_eq!(w, vec![2, 4, 2, 5]);
        assert_eq!(v, vec![1, 2, 3, 2, 4, 2, 5]);
    }

    #[test]
    fn drop_front_taking_the_container() {
        let mut v = vec![1, 2, 3, 2, 4, 2, 5];
        let w = std::mem::take(&mut v).pipe(drop_front(3));

        assert_eq!(w, vec![2, 4, 2, 5]);
        assert!(v.is_empty());
    }

    #[test]
    fn drop_and_take_more_than_available() {
        assert_eq!(vec![1, 2].pipe(drop_front(5)), Vec::<i32>::new());
        assert_eq!(vec![1, 2].pipe(take_front(5)), vec![1, 2]);
        assert_eq!(vec![1, 2, 3].pipe(take_front(1)), vec![1]);
    }

    #[test]
    fn composed_actions_run_in_order() {
        let v = vec![5, 1, 4, 1, 5, 9, 2, 6];

        let w = v.clone().pipe(sort() | unique() | reverse() | take_front(3));
        assert_eq!(w, vec![9, 6, 5]);

        let w = v.pipe(remove_if(|x: &i32| x % 2 == 0) | transform(|x: &mut i32| *x *= 10));
        assert_eq!(w, vec![50, 10, 10, 50, 90]);
    }

    #[test]
    fn sort_by_key_is_stable() {
        let words = vec!["bb", "a", "cc", "d"];
        let sorted = words.pipe(sort_by_key(|w: &&str| w.len()));
        assert_eq!(sorted, vec!["a", "d", "bb", "cc"]);
    }

    #[test]
    fn actions_after_materialization() {
        let v = vec![3, 8, 1, 8, 6];
        let lazy = all(&v) | filter(|x: &&i32| **x > 2) | map(|x: &i32| *x);
        let owned = lazy.into_vec().pipe(sort() | unique());
        assert_eq!(owned, vec![3, 6, 8]);

        let seq = all(vec![2, 1, 2]) | (sort() | unique());
        assert_eq!(seq, vec![1, 2]);
    }
}
