//! Node identity and the session-scoped id allocator.

use std::fmt;

use mz_common::{Span, TokenIndex};
use serde::{Deserialize, Serialize};

/// Identifier of a parse-tree node, unique within one parse session.
///
/// Ids are never reused, even after deletion, and compare by equality only.
/// `0` is reserved as "none"; real ids start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(0);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues monotonically increasing node identifiers within a parse session.
///
/// Not shared across sessions and not re-entrant; a deep-copied session
/// carries its own copy of the counter.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    counter: u32,
}

impl IdAllocator {
    /// Increment the counter and return the new id.
    #[inline]
    pub fn next(&mut self) -> NodeId {
        self.counter += 1;
        NodeId(self.counter)
    }

    /// The number of ids issued so far.
    #[inline]
    pub fn counter(&self) -> u32 {
        self.counter
    }
}

/// The token window a closed node covers.
///
/// `token_index_end` is exclusive, mirroring [`Span`]'s half-open interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRange {
    pub token_index_start: TokenIndex,
    pub token_index_end: TokenIndex,
    pub span: Span,
}

impl TokenRange {
    pub const fn new(token_index_start: TokenIndex, token_index_end: TokenIndex, span: Span) -> Self {
        TokenRange {
            token_index_start,
            token_index_end,
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_starts_at_one() {
        let mut allocator = IdAllocator::default();
        assert_eq!(allocator.counter(), 0);
        assert_eq!(allocator.next(), NodeId(1));
        assert_eq!(allocator.next(), NodeId(2));
        assert_eq!(allocator.counter(), 2);
    }

    #[test]
    fn zero_is_none() {
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId(1).is_none());
    }

    #[test]
    fn deep_copied_allocator_diverges() {
        let mut original = IdAllocator::default();
        original.next();
        let mut copy = original.clone();
        assert_eq!(original.next(), NodeId(2));
        assert_eq!(copy.next(), NodeId(2));
    }
}
