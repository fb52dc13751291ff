//! Open parse-tree entries.

use mz_common::{Token, TokenIndex};

use crate::ast::NodeKind;
use crate::base::NodeId;

/// An open, still-growing parse-tree entry.
///
/// Contexts are the mutable half of the two-realm graph: the lifecycle
/// operations bump `attribute_counter` as children are opened beneath the
/// node and overwrite `attribute_index` during collapse. A context stops
/// existing when it is closed (promoted to the ast realm under the same id)
/// or deleted.
#[derive(Clone, Debug)]
pub struct ParseContext {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Index of the first token this production covers.
    pub token_index_start: TokenIndex,
    /// The starting token, when the driver had one in hand.
    pub token_start: Option<Token>,
    /// How many attributes (child contexts) have ever been opened beneath
    /// this node. Never decremented.
    pub attribute_counter: u32,
    /// This node's slot beneath its own parent; `None` for root.
    pub attribute_index: Option<u32>,
}

impl ParseContext {
    pub(crate) fn new(
        id: NodeId,
        kind: NodeKind,
        token_index_start: TokenIndex,
        token_start: Option<Token>,
        attribute_index: Option<u32>,
    ) -> Self {
        ParseContext {
            id,
            kind,
            token_index_start,
            token_start,
            attribute_counter: 0,
            attribute_index,
        }
    }
}
