//! Lazy, composable sequences
//!
//! Using **r3seq** you describe a computation over a source as a chain of
//! *Adaptors* (map, filter, take, ..) and pay for it only when the chain is
//! traversed. Composing a chain reads no element; every traversal recomputes
//! exactly the elements it touches.
//!
//! *Sequences* are ordered element sources walked through a *Cursor*.
//! *Projections* (adaptors) wrap a sequence into another one.
//! *Actions* are the eager counterpart: they take a container by value and
//! hand it back modified.
//!
//! Chains are written either with methods or with the pipeline operator:
//!
//! ```
//! use r3seq::prelude::*;
//! use r3seq::projection::{filter, map};
//!
//! let v = vec![3, -1, 4, -1, 5];
//!
//! let mut direct = all(&v).filter(|x| **x > 0).map(|x| x * 10);
//! let mut piped = all(&v) | filter(|x: &&i32| **x > 0) | map(|x: &i32| x * 10);
//!
//! assert_eq!(direct.to_vec(), vec![30, 40, 50]);
//! assert_eq!(direct.to_vec(), piped.to_vec());
//! ```
//!
//! What a sequence supports is part of its type. Stateless chains
//! implement [`SharedSequence`](view::SharedSequence) and may be walked
//! through `&` by any number of readers at once; a chain holding a stateful
//! adaptor can only be walked through `&mut`, which also means it cannot be
//! replaced while one of its cursors is alive:
//!
//! ```compile_fail
//! use r3seq::prelude::*;
//!
//! let mut seq = all(vec![1, 2, 3]);
//! let mut walk = seq.walk();
//! walk.next();
//! seq = all(vec![4, 5]);
//! walk.next();
//! ```

#[macro_use]
mod macros;

pub mod action;
pub mod buffer;
pub mod error;
pub mod factory;
pub mod pipe;
pub mod projection;
pub mod view;

pub mod prelude {
    pub use crate::{
        buffer::{all, Borrowed, IntoSequence, Owned},
        error::SeqError,
        factory::{empty, from_iter, generate, iota, iota_to, repeat, single},
        pipe::{make_pipeable, Adaptor, Pipe},
        projection::{concat, zip, Project},
        view::{
            Cursor, RandomAccess, Sequence, SequenceExt, SharedSequence, SharedSequenceExt,
        },
    };
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
