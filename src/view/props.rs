#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                Traversal
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// How freely a consumer may move through a sequence.
///
/// Ordered from least to most capable, so the capability of a composed
/// sequence is the `min` of its parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Traversal {
    /// every element can be visited once; a second traversal continues
    /// where the previous one stopped
    SinglePass,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl Traversal {
    pub fn meet(self, other: Traversal) -> Traversal {
        std::cmp::min(self, other)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SizeHint {
    Exact(usize),
    AtLeast(usize),
    Unknown,
}

impl SizeHint {
    pub fn exact(&self) -> Option<usize> {
        match self {
            SizeHint::Exact(n) => Some(*n),
            _ => None,
        }
    }

    /// Lower bound on the number of elements.
    pub fn lower(&self) -> usize {
        match self {
            SizeHint::Exact(n) | SizeHint::AtLeast(n) => *n,
            SizeHint::Unknown => 0,
        }
    }

    /// Size of the concatenation of two sequences.
    pub fn plus(self, other: SizeHint) -> SizeHint {
        match (self, other) {
            (SizeHint::Exact(a), SizeHint::Exact(b)) => SizeHint::Exact(a.saturating_add(b)),
            (SizeHint::Unknown, SizeHint::Unknown) => SizeHint::Unknown,
            (a, b) => SizeHint::AtLeast(a.lower().saturating_add(b.lower())),
        }
    }

    /// Size of a sequence cut down to at most `n` elements.
    pub fn at_most(self, n: usize) -> SizeHint {
        match self {
            SizeHint::Exact(m) => SizeHint::Exact(std::cmp::min(m, n)),
            SizeHint::AtLeast(m) if m >= n => SizeHint::Exact(n),
            _ => SizeHint::Unknown,
        }
    }

    /// Size of a sequence with its first `n` elements removed.
    pub fn minus(self, n: usize) -> SizeHint {
        match self {
            SizeHint::Exact(m) => SizeHint::Exact(m.saturating_sub(n)),
            SizeHint::AtLeast(m) => SizeHint::AtLeast(m.saturating_sub(n)),
            SizeHint::Unknown => SizeHint::Unknown,
        }
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Finiteness {
    Finite,
    /// No end is guaranteed. Materializing such a sequence does not return.
    Unbounded,
}

/// Whether traversing a sequence needs exclusive, mutable access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CursorState {
    Stateless,
    Stateful,
}

impl CursorState {
    pub fn meet(self, other: CursorState) -> CursorState {
        if self == CursorState::Stateful || other == CursorState::Stateful {
            CursorState::Stateful
        } else {
            CursorState::Stateless
        }
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
               Adaptor Kinds
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Closed set of adaptor categories.
///
/// Only `StatelessMap` adaptors may be traversed through a shared reference
/// and keep random access; every other kind remembers a derived position
/// between advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdaptorKind {
    StatelessMap,
    StatefulFilter,
    Windowing,
    FanIn,
    FanOut,
}

impl AdaptorKind {
    pub fn cursor_state(self) -> CursorState {
        match self {
            AdaptorKind::StatelessMap => CursorState::Stateless,
            _ => CursorState::Stateful,
        }
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                Ownership
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Identity of a borrowed backing storage (its address).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceId(pub usize);

impl SourceId {
    pub fn of<T>(data: &[T]) -> SourceId {
        SourceId(data.as_ptr() as usize)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Ownership {
    Owns,
    BorrowsFrom(SourceId),
    /// borrows from more than one storage (fan-in over borrowed sources)
    BorrowsMany,
}

impl Ownership {
    pub fn is_owned(&self) -> bool {
        matches!(self, Ownership::Owns)
    }

    pub fn meet(self, other: Ownership) -> Ownership {
        match (self, other) {
            (Ownership::Owns, o) | (o, Ownership::Owns) => o,
            (Ownership::BorrowsFrom(a), Ownership::BorrowsFrom(b)) if a == b => {
                Ownership::BorrowsFrom(a)
            }
            _ => Ownership::BorrowsMany,
        }
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
             Sequence Properties
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeqProps {
    pub traversal: Traversal,
    pub size: SizeHint,
    pub finiteness: Finiteness,
    pub state: CursorState,
    pub ownership: Ownership,
}

impl SeqProps {
    /// Properties of a finite, random-access source of `len` elements.
    pub fn indexed(len: usize, ownership: Ownership) -> Self {
        SeqProps {
            traversal: Traversal::RandomAccess,
            size: SizeHint::Exact(len),
            finiteness: Finiteness::Finite,
            state: CursorState::Stateless,
            ownership,
        }
    }

    /// Properties of an endless, random-access generator.
    ///
    /// Its size is `AtLeast(usize::MAX)`: cutting it down to `n` elements
    /// yields exactly `n`.
    pub fn unbounded() -> Self {
        SeqProps {
            traversal: Traversal::RandomAccess,
            size: SizeHint::AtLeast(usize::MAX),
            finiteness: Finiteness::Unbounded,
            state: CursorState::Stateless,
            ownership: Ownership::Owns,
        }
    }

    /// Properties of a single-pass producer.
    pub fn single_pass(size: SizeHint, finiteness: Finiteness) -> Self {
        SeqProps {
            traversal: Traversal::SinglePass,
            size,
            finiteness,
            state: CursorState::Stateful,
            ownership: Ownership::Owns,
        }
    }

    /// Properties after composing an adaptor of the given kind on top.
    ///
    /// The ownership tag is carried over unchanged; adaptors never take
    /// ownership of anything their source did not already own.
    pub fn adapted(self, kind: AdaptorKind) -> Self {
        let state = self.state.meet(kind.cursor_state());
        let traversal = match kind {
            AdaptorKind::StatelessMap => self.traversal,
            _ => self.traversal.meet(Traversal::Forward),
        };

        SeqProps {
            traversal,
            state,
            ..self
        }
    }

    /// Properties of a fan-in over two sources.
    pub fn joined(self, other: SeqProps, size: SizeHint) -> Self {
        let finiteness = if self.finiteness == Finiteness::Finite
            && other.finiteness == Finiteness::Finite
        {
            Finiteness::Finite
        } else {
            Finiteness::Unbounded
        };

        SeqProps {
            traversal: self.traversal.meet(other.traversal),
            size,
            finiteness,
            state: self.state.meet(other.state),
            ownership: self.ownership.meet(other.ownership),
        }
        .adapted(AdaptorKind::FanIn)
    }

    pub fn with_size(self, size: SizeHint) -> Self {
        SeqProps { size, ..self }
    }

    pub fn with_finiteness(self, finiteness: Finiteness) -> Self {
        SeqProps { finiteness, ..self }
    }

    pub fn is_bounded(&self) -> bool {
        self.finiteness == Finiteness::Finite
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::view::props::*;

    #[test]
    fn traversal_meet_is_most_restrictive() {
        assert_eq!(
            Traversal::RandomAccess.meet(Traversal::Forward),
            Traversal::Forward
        );
        assert_eq!(
            Traversal::Bidirectional.meet(Traversal::RandomAccess),
            Traversal::Bidirectional
        );
        assert_eq!(
            Traversal::SinglePass.meet(Traversal::Forward),
            Traversal::SinglePass
        );
    }

    #[test]
    fn filtering_kind_downgrades_random_access() {
        let src = SeqProps::indexed(4, Ownership::Owns);

        let mapped = src.adapted(AdaptorKind::StatelessMap);
        assert_eq!(mapped.traversal, Traversal::RandomAccess);
        assert_eq!(mapped.state, CursorState::Stateless);

        let filtered = mapped.adapted(AdaptorKind::StatefulFilter);
        assert_eq!(filtered.traversal, Traversal::Forward);
        assert_eq!(filtered.state, CursorState::Stateful);

        // mapping afterwards cannot win the capability back
        let remapped = filtered.adapted(AdaptorKind::StatelessMap);
        assert_eq!(remapped.traversal, Traversal::Forward);
        assert_eq!(remapped.state, CursorState::Stateful);
    }

    #[test]
    fn adapting_preserves_ownership() {
        let id = SourceId(0x1000);
        let src = SeqProps::indexed(3, Ownership::BorrowsFrom(id));
        for kind in [
            AdaptorKind::StatelessMap,
            AdaptorKind::StatefulFilter,
            AdaptorKind::Windowing,
            AdaptorKind::FanOut,
        ] {
            assert_eq!(src.adapted(kind).ownership, Ownership::BorrowsFrom(id));
        }
    }

    #[test]
    fn ownership_meet() {
        let a = Ownership::BorrowsFrom(SourceId(1));
        let b = Ownership::BorrowsFrom(SourceId(2));

        assert_eq!(Ownership::Owns.meet(Ownership::Owns), Ownership::Owns);
        assert_eq!(Ownership::Owns.meet(a), a);
        assert_eq!(a.meet(a), a);
        assert_eq!(a.meet(b), Ownership::BorrowsMany);
    }

    #[test]
    fn size_hint_arithmetic() {
        assert_eq!(SizeHint::Exact(3).plus(SizeHint::Exact(4)), SizeHint::Exact(7));
        assert_eq!(SizeHint::Exact(3).plus(SizeHint::Unknown), SizeHint::AtLeast(3));
        assert_eq!(SizeHint::Unknown.at_most(5), SizeHint::Unknown);
        assert_eq!(SizeHint::AtLeast(10).at_most(5), SizeHint::Exact(5));
        assert_eq!(SizeHint::Exact(2).minus(5), SizeHint::Exact(0));
    }

    #[test]
    fn joined_props_meet_both_sources() {
        let owned = SeqProps::indexed(2, Ownership::Owns);
        let endless = SeqProps::unbounded();

        let j = owned.joined(endless, SizeHint::Unknown);
        assert_eq!(j.traversal, Traversal::Forward);
        assert_eq!(j.state, CursorState::Stateful);
        assert_eq!(j.finiteness, Finiteness::Unbounded);
        assert_eq!(j.ownership, Ownership::Owns);
    }
}
