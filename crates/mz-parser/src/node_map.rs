//! The relational core of the parse graph.
//!
//! `NodeIdMap` replaces an owning tree with four id-keyed mappings plus an
//! order-of-closure leaf list. Because edges are ids rather than references,
//! the same identity can transition between the context realm and the ast
//! realm without any ownership gymnastics, and a deep copy is a map clone.
//!
//! The map is a passive substrate: within a session it is mutated only by
//! the lifecycle operations in [`crate::session`].

use std::sync::Arc;

use mz_common::InvariantError;
use rustc_hash::FxHashMap;

use crate::ast::{AstNode, NodeKind};
use crate::base::NodeId;
use crate::context::ParseContext;

// ---------------------------------------------------------------------------
// XorNode
// ---------------------------------------------------------------------------

/// A tagged handle naming either a still-open context or an already-closed
/// ast node.
///
/// Consumers that walk the graph work uniformly through this handle and
/// match on the realm when it matters.
#[derive(Clone, Copy, Debug)]
pub enum XorNode<'a> {
    Ast(&'a AstNode),
    Context(&'a ParseContext),
}

impl XorNode<'_> {
    #[inline]
    pub fn id(&self) -> NodeId {
        match self {
            XorNode::Ast(node) => node.id,
            XorNode::Context(context) => context.id,
        }
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            XorNode::Ast(node) => node.kind,
            XorNode::Context(context) => context.kind,
        }
    }

    #[inline]
    pub fn is_ast(&self) -> bool {
        matches!(self, XorNode::Ast(_))
    }

    #[inline]
    pub fn is_context(&self) -> bool {
        matches!(self, XorNode::Context(_))
    }
}

// ---------------------------------------------------------------------------
// NodeIdMap
// ---------------------------------------------------------------------------

/// Four mutable mappings and one list.
///
/// Every allocated, not-deleted id appears in exactly one of `ast_by_id` /
/// `context_by_id`. Parent and children edges are stored by id on both
/// sides; `children_by_id` preserves insertion order, which equals the
/// attribute-index sequence of the children.
#[derive(Clone, Debug, Default)]
pub struct NodeIdMap {
    pub(crate) ast_by_id: FxHashMap<NodeId, Arc<AstNode>>,
    pub(crate) context_by_id: FxHashMap<NodeId, ParseContext>,
    pub(crate) parent_by_id: FxHashMap<NodeId, NodeId>,
    pub(crate) children_by_id: FxHashMap<NodeId, Vec<NodeId>>,
    /// Ids of closed leaf nodes, in order of closure.
    pub(crate) leaf_ids: Vec<NodeId>,
}

impl NodeIdMap {
    // -- soft lookups --------------------------------------------------------

    /// Look up a closed node.
    pub fn ast(&self, id: NodeId) -> Option<&AstNode> {
        self.ast_by_id.get(&id).map(Arc::as_ref)
    }

    /// Look up an open context.
    pub fn context(&self, id: NodeId) -> Option<&ParseContext> {
        self.context_by_id.get(&id)
    }

    /// Resolve an id to whichever realm currently holds it.
    pub fn xor(&self, id: NodeId) -> Option<XorNode<'_>> {
        if let Some(node) = self.ast(id) {
            return Some(XorNode::Ast(node));
        }
        self.context(id).map(XorNode::Context)
    }

    /// The ordered child ids of a node, if it has any.
    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.children_by_id.get(&id).map(Vec::as_slice)
    }

    /// The parent id of a non-root node.
    pub fn parent_id(&self, id: NodeId) -> Option<NodeId> {
        self.parent_by_id.get(&id).copied()
    }

    // -- hard lookups --------------------------------------------------------

    /// Look up a closed node, failing if the id is absent from the ast realm.
    pub fn expect_ast(&self, id: NodeId) -> Result<&AstNode, InvariantError> {
        self.ast(id)
            .ok_or_else(|| InvariantError::new("no ast node for id").with_detail("node_id", id))
    }

    /// Look up an open context, failing if the id is absent from the context
    /// realm.
    pub fn expect_context(&self, id: NodeId) -> Result<&ParseContext, InvariantError> {
        self.context(id)
            .ok_or_else(|| InvariantError::new("no context node for id").with_detail("node_id", id))
    }

    /// Resolve an id to either realm, failing if it is in neither.
    pub fn expect_xor(&self, id: NodeId) -> Result<XorNode<'_>, InvariantError> {
        self.xor(id)
            .ok_or_else(|| InvariantError::new("id is in neither realm").with_detail("node_id", id))
    }

    /// The ordered child ids of a node, failing if it has none recorded.
    pub fn expect_children(&self, id: NodeId) -> Result<&[NodeId], InvariantError> {
        self.children(id)
            .ok_or_else(|| InvariantError::new("no children for id").with_detail("node_id", id))
    }

    /// The parent id of a node, failing if the node has no parent mapping.
    pub fn expect_parent_id(&self, id: NodeId) -> Result<NodeId, InvariantError> {
        self.parent_id(id)
            .ok_or_else(|| InvariantError::new("no parent for id").with_detail("node_id", id))
    }

    // -- iteration -----------------------------------------------------------

    /// Ids currently in the ast realm, in no particular order.
    pub fn ast_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ast_by_id.keys().copied()
    }

    /// Ids currently in the context realm, in no particular order.
    pub fn context_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.context_by_id.keys().copied()
    }

    /// Ids of closed leaf nodes, in order of closure.
    pub fn leaf_ids(&self) -> &[NodeId] {
        &self.leaf_ids
    }

    /// Walk a node's children as cross-realm handles, in attribute order.
    ///
    /// Children that were deleted no longer appear; children in either realm
    /// resolve to their current handle.
    pub fn iter_children_xor(&self, id: NodeId) -> impl Iterator<Item = XorNode<'_>> + '_ {
        self.children_by_id
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(|child_id| self.xor(*child_id))
    }

    // -- snapshotting --------------------------------------------------------

    /// Produce an independent collection whose mutations do not affect the
    /// original. The four mappings and the leaf list are duplicated; the
    /// immutable ast-node records are shared.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }
}
