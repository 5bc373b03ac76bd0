//! The core sequence contract.
//!
//! A [`Sequence`] is walked through a [`Cursor`]. Stateless chains additionally
//! implement [`SharedSequence`] and may be walked through `&`; chains that keep
//! only stateless, index-computable adaptors implement [`RandomAccess`].
//! [`SeqProps`] reports the same facts at run time.

pub mod cursor;
pub mod props;
pub mod sequence;

pub use {
    cursor::{Cursor, IndexCursor, SeqIter},
    props::{
        AdaptorKind, CursorState, Finiteness, Ownership, SeqProps, SizeHint, SourceId, Traversal,
    },
    sequence::{RandomAccess, Sequence, SequenceExt, SharedSequence, SharedSequenceExt},
};
