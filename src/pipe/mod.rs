//! Composition of adaptors.
//!
//! Every adaptor `A` with parameters `p` is reachable two ways:
//!
//! * directly, as a method on the source: `source.a(p)`;
//! * deferred, as a closure value `a(p)` that is later applied with the
//!   pipeline operator: `source | a(p)`.
//!
//! Both build the same lazily composed sequence and neither reads a single
//! element of the source. Chains associate: `(src | a) | b`, `src | a | b`
//! and `src | (a | b)` are the same sequence.
//!
//! ```
//! use r3seq::prelude::*;
//! use r3seq::projection::{filter, map, take};
//!
//! let v = vec![1, 2, 3, 4, 5, 6];
//!
//! let evens_squared = filter(|x: &i32| x % 2 == 0) | map(|x: i32| x * x);
//! let mut seq = all(v.clone()) | evens_squared | take(2);
//!
//! assert_eq!(seq.to_vec(), vec![4, 16]);
//! ```
//!
//! Fan-in adaptors such as [`concat`](crate::projection::concat) have no
//! closure form: with several sources there is no single one to pipe in.

use std::any::type_name;

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// A partially applied adaptor, waiting for its source.
///
/// Parameters are captured when the closure is created and never change
/// afterwards. Any `FnOnce(S) -> O` is an adaptor as well, which covers
/// adaptors that need nothing but the source.
pub trait Adaptor<S> {
    type Output;

    fn apply(self, src: S) -> Self::Output;
}

impl<S, O, F> Adaptor<S> for F
where
    F: FnOnce(S) -> O,
{
    type Output = O;

    fn apply(self, src: S) -> O {
        self(src)
    }
}

/// Apply `adaptor` to `src`; the function form of `src | adaptor`.
pub fn pipe<S, A: Adaptor<S>>(src: S, adaptor: A) -> A::Output {
    tracing::trace!(
        source = type_name::<S>(),
        adaptor = type_name::<A>(),
        "pipe"
    );
    adaptor.apply(src)
}

/// Method form of [`pipe`], usable on any value, including containers
/// that eager actions consume.
pub trait Pipe: Sized {
    fn pipe<A: Adaptor<Self>>(self, adaptor: A) -> A::Output {
        pipe(self, adaptor)
    }
}

impl<T> Pipe for T {}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                 Chaining
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Two adaptors applied one after the other.
#[derive(Clone, Debug)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Then { first, second }
    }
}

impl<S, A, B> Adaptor<S> for Then<A, B>
where
    A: Adaptor<S>,
    B: Adaptor<A::Output>,
{
    type Output = B::Output;

    fn apply(self, src: S) -> B::Output {
        pipe(pipe(src, self.first), self.second)
    }
}

adaptor_operators! {
    [A, B,] Then<A, B>;
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
              Custom Adaptors
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// A user function bound to its extra parameters.
#[derive(Clone, Debug)]
pub struct Bound<F, P> {
    f: F,
    params: P,
}

impl<S, F, P, O> Adaptor<S> for Bound<F, P>
where
    F: FnOnce(S, P) -> O,
{
    type Output = O;

    fn apply(self, src: S) -> O {
        (self.f)(src, self.params)
    }
}

adaptor_operators! {
    [F, P,] Bound<F, P>;
}

/// Turns `f(source, params)` into a closure factory usable with `|`.
///
/// ```
/// use r3seq::prelude::*;
/// use r3seq::projection::{Skip, Take};
///
/// fn window(src: Owned<i32>, (from, len): (usize, usize)) -> Take<Skip<Owned<i32>>> {
///     src.skip(from).take(len)
/// }
///
/// let window = make_pipeable(window);
///
/// let mut seq = all(vec![1, 2, 3, 4, 5]) | window((1, 3));
/// assert_eq!(seq.to_vec(), vec![2, 3, 4]);
/// ```
///
/// Several parameters travel as a tuple, as above.
pub fn make_pipeable<F, P>(f: F) -> impl Fn(P) -> Bound<F, P>
where
    F: Clone,
{
    move |params| Bound {
        f: f.clone(),
        params,
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use {
        crate::{
            buffer::{all, Borrowed, Owned},
            pipe::*,
            projection::{enumerate, filter, map, skip, take, Project},
            view::{SequenceExt, SharedSequenceExt},
        },
        proptest::prelude::*,
    };

    #[test]
    fn pipe_equals_direct_application() {
        let v = vec![5, 6, 7];

        let mut piped = all(&v) | map(|x: &i32| x + 1);
        let mut direct = all(&v).map(|x| x + 1);

        assert_eq!(piped.to_vec(), direct.to_vec());
    }

    #[test]
    fn closures_capture_parameters_at_creation() {
        let mut k = 2;
        let times_k = map(move |x: i32| x * k);
        k = 100;

        let mut seq = all(vec![1, 2]) | times_k;
        assert_eq!(seq.to_vec(), vec![2, 4]);
        assert_eq!(k, 100);
    }

    #[test]
    fn composed_closures_apply_in_order() {
        let chain = skip(1) | map(|x: i32| x * 3) | take(2);
        let mut seq = all(vec![1, 2, 3, 4]) | chain;

        assert_eq!(seq.to_vec(), vec![6, 9]);
    }

    #[test]
    fn plain_functions_are_adaptors() {
        let first_two = |s: Owned<i32>| s.take(2);
        let mut seq = all(vec![9, 8, 7]) | first_two;
        assert_eq!(seq.to_vec(), vec![9, 8]);

        let v = vec![1, 2, 3];
        let total = v.pipe(|v: Vec<i32>| v.into_iter().sum::<i32>());
        assert_eq!(total, 6);
    }

    #[test]
    fn make_pipeable_with_tuple_params() {
        fn slice_window<'a>(
            src: Borrowed<'a, u8>,
            (from, len): (usize, usize),
        ) -> crate::projection::Take<crate::projection::Skip<Borrowed<'a, u8>>> {
            src.skip(from).take(len)
        }

        let window = make_pipeable(slice_window);
        let bytes = b"pipeline".to_vec();

        let mid = all(&bytes) | window((4, 4));
        let s: Vec<u8> = mid.iter().copied().collect();
        assert_eq!(s, b"line".to_vec());
    }

    #[test]
    fn pipeable_closures_compose_with_builtins() {
        let add = make_pipeable(|src: Owned<i32>, k: i32| src.map(move |x| x + k));

        let mut seq = all(vec![1, 2, 3]) | (add(10) | enumerate());
        assert_eq!(seq.to_vec(), vec![(0, 11), (1, 12), (2, 13)]);
    }

    proptest! {
        #[test]
        fn pipeline_is_associative(v in proptest::collection::vec(-100i32..100, 0..40), n in 0usize..50) {
            // filter, then map
            let mut a = (all(&v) | filter(|x: &&i32| **x > 0)) | map(|x: &i32| x * 2);
            let mut b = all(&v) | (filter(|x: &&i32| **x > 0) | map(|x: &i32| x * 2));
            prop_assert_eq!(a.to_vec(), b.to_vec());

            // skip, then take
            let mut a = (all(&v) | skip(n / 3)) | take(n);
            let mut b = all(&v) | skip(n / 3) | take(n);
            prop_assert_eq!(a.to_vec(), b.to_vec());

            // map, then enumerate
            let a = (all(&v) | map(|x: &i32| x - 1)) | enumerate();
            let b = all(&v) | (map(|x: &i32| x - 1) | enumerate());
            prop_assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
        }
    }
}
