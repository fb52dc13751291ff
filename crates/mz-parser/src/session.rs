//! Parse session state and the context lifecycle.
//!
//! A session is owned by exactly one logical driver at a time. The driver
//! calls [`ParseSessionState::start_context`] on entering a grammar
//! production, [`ParseSessionState::end_context`] once the production has
//! matched enough tokens to construct a finished ast node, and
//! [`ParseSessionState::delete_context`] when the production must be
//! abandoned (backtrack, truncation at end of input, or collapse of a
//! trivially-wrapping node).
//!
//! Each operation validates all of its preconditions before the first
//! mutation and leaves invariants I1-I7 of the node graph intact. Contract
//! breaches surface as [`InvariantError`] and are never caught internally;
//! the driver is expected to fail the session.

use std::sync::Arc;

use mz_common::{InvariantError, Token, TokenIndex};
use tracing::trace;

use crate::ast::{AstNode, NodeKind};
use crate::base::{IdAllocator, NodeId};
use crate::context::ParseContext;
use crate::node_map::{NodeIdMap, XorNode};

/// Aggregated state of one parse session: the id allocator, the node graph,
/// and the root handle.
#[derive(Clone, Debug, Default)]
pub struct ParseSessionState {
    node_id_map: NodeIdMap,
    id_allocator: IdAllocator,
    /// The topmost node, if a root context has been started. The id may
    /// resolve to either realm once the root has been closed or promoted.
    root: Option<NodeId>,
}

impl ParseSessionState {
    /// A fresh session: no root, empty maps, id counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // -- read access ---------------------------------------------------------

    pub fn node_id_map(&self) -> &NodeIdMap {
        &self.node_id_map
    }

    /// The number of ids issued so far.
    pub fn id_counter(&self) -> u32 {
        self.id_allocator.counter()
    }

    /// The root handle, if a root has been installed.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Resolve the root handle to a cross-realm handle.
    pub fn root_xor(&self) -> Option<XorNode<'_>> {
        self.root.and_then(|id| self.node_id_map.xor(id))
    }

    /// A fully independent snapshot for speculative parsing: copy, mutate,
    /// discard on failure. Immutable ast payloads are shared.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    // -- lifecycle -----------------------------------------------------------

    /// Open a new context under `parent_id`, or as the root when no parent
    /// is given.
    ///
    /// The new context takes the parent's current attribute counter as its
    /// attribute index, and the counter is incremented.
    pub fn start_context(
        &mut self,
        kind: NodeKind,
        token_index_start: TokenIndex,
        token_start: Option<Token>,
        parent_id: Option<NodeId>,
    ) -> Result<NodeId, InvariantError> {
        let attribute_index = match parent_id {
            Some(parent_id) => {
                let Some(parent) = self.node_id_map.context_by_id.get_mut(&parent_id) else {
                    return Err(InvariantError::new("parent is not an open context")
                        .with_detail("parent_id", parent_id));
                };
                let index = parent.attribute_counter;
                parent.attribute_counter += 1;
                Some(index)
            }
            None => None,
        };

        let node_id = self.id_allocator.next();
        trace!(
            node_id = node_id.0,
            ?kind,
            parent_id = parent_id.map(|id| id.0),
            "start context"
        );

        match parent_id {
            Some(parent_id) => {
                self.node_id_map.parent_by_id.insert(node_id, parent_id);
                self.node_id_map
                    .children_by_id
                    .entry(parent_id)
                    .or_default()
                    .push(node_id);
            }
            None => self.root = Some(node_id),
        }

        self.node_id_map.context_by_id.insert(
            node_id,
            ParseContext::new(node_id, kind, token_index_start, token_start, attribute_index),
        );

        Ok(node_id)
    }

    /// Close a context by binding an ast node to its identity, moving the id
    /// from the context realm to the ast realm.
    ///
    /// Returns the parent's id when the parent is still an open context;
    /// `None` when the closed node was root.
    pub fn end_context(
        &mut self,
        context_id: NodeId,
        ast: AstNode,
    ) -> Result<Option<NodeId>, InvariantError> {
        if !self.node_id_map.context_by_id.contains_key(&context_id) {
            return Err(InvariantError::new("cannot close a context that is not open")
                .with_detail("context_id", context_id));
        }
        if ast.id != context_id {
            return Err(
                InvariantError::new("ast node must reuse the context's identity")
                    .with_detail("context_id", context_id)
                    .with_detail("ast_id", ast.id),
            );
        }

        trace!(
            node_id = context_id.0,
            kind = ?ast.kind,
            is_leaf = ast.is_leaf(),
            "end context"
        );

        if ast.is_leaf() {
            self.node_id_map.leaf_ids.push(context_id);
        }
        self.node_id_map.context_by_id.remove(&context_id);
        self.node_id_map.ast_by_id.insert(context_id, Arc::new(ast));

        let maybe_parent_id = self.node_id_map.parent_id(context_id);
        Ok(maybe_parent_id.filter(|id| self.node_id_map.context_by_id.contains_key(id)))
    }

    /// Remove an open context and reconcile the graph.
    ///
    /// A context may be deleted with no children (truncation at end of
    /// input) or with exactly one child, in which case the child is spliced
    /// into the deleted node's place. Deleting a context with two or more
    /// children would discard siblings and is a driver bug.
    ///
    /// Returns the parent's id when the parent is still an open context.
    pub fn delete_context(&mut self, node_id: NodeId) -> Result<Option<NodeId>, InvariantError> {
        // Validate everything before the first mutation.
        let Some(context) = self.node_id_map.context_by_id.get(&node_id) else {
            return Err(InvariantError::new("cannot delete a context that is not open")
                .with_detail("node_id", node_id));
        };
        let deleted_attribute_index = context.attribute_index;

        let children = self.node_id_map.children(node_id).unwrap_or(&[]);
        if children.len() > 1 {
            return Err(
                InvariantError::new("cannot delete a context with multiple children")
                    .with_detail("node_id", node_id)
                    .with_detail("child_count", children.len()),
            );
        }
        let maybe_child_id = children.first().copied();
        let maybe_parent_id = self.node_id_map.parent_id(node_id);

        let maybe_slot = match maybe_parent_id {
            Some(parent_id) => {
                let siblings = self.node_id_map.expect_children(parent_id)?;
                let Some(slot) = siblings.iter().position(|id| *id == node_id) else {
                    return Err(
                        InvariantError::new("node is missing from its parent's child list")
                            .with_detail("node_id", node_id)
                            .with_detail("parent_id", parent_id),
                    );
                };
                Some(slot)
            }
            None => None,
        };

        trace!(
            node_id = node_id.0,
            child_id = maybe_child_id.map(|id| id.0),
            parent_id = maybe_parent_id.map(|id| id.0),
            "delete context"
        );

        match (maybe_parent_id, maybe_child_id) {
            // Leaf collapse: drop the node from its parent's children list,
            // preserving sibling order.
            (Some(parent_id), None) => {
                if let (Some(siblings), Some(slot)) =
                    (self.node_id_map.children_by_id.get_mut(&parent_id), maybe_slot)
                {
                    siblings.remove(slot);
                    if siblings.is_empty() {
                        self.node_id_map.children_by_id.remove(&parent_id);
                    }
                }
            }
            // Root leaf collapse: the tree becomes empty.
            (None, None) => {
                if self.root == Some(node_id) {
                    self.root = None;
                }
            }
            // Interior collapse: the sole child takes the deleted node's
            // slot and inherits its attribute index.
            (Some(parent_id), Some(child_id)) => {
                if let (Some(siblings), Some(slot)) =
                    (self.node_id_map.children_by_id.get_mut(&parent_id), maybe_slot)
                {
                    siblings[slot] = child_id;
                }
                self.node_id_map.parent_by_id.insert(child_id, parent_id);
                if let Some(child) = self.node_id_map.context_by_id.get_mut(&child_id) {
                    child.attribute_index = deleted_attribute_index;
                }
            }
            // Root collapse: promote the sole child. The handle is id-based,
            // so a closed child resolves through the xor lookup.
            (None, Some(child_id)) => {
                self.node_id_map.parent_by_id.remove(&child_id);
                if self.root == Some(node_id) {
                    self.root = Some(child_id);
                }
            }
        }

        self.node_id_map.context_by_id.remove(&node_id);
        self.node_id_map.children_by_id.remove(&node_id);
        self.node_id_map.parent_by_id.remove(&node_id);
        self.node_id_map.leaf_ids.retain(|id| *id != node_id);

        Ok(maybe_parent_id.filter(|id| self.node_id_map.context_by_id.contains_key(id)))
    }
}
