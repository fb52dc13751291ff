//! Closed parse-tree nodes.
//!
//! An [`AstNode`] is produced when a grammar production completes. It reuses
//! the identity of the context it closes, references its children by id, and
//! is never mutated after creation — the session stores closed nodes behind
//! `Arc` so deep-copied snapshots share them.

use mz_common::Span;
use serde::{Deserialize, Serialize};

use crate::base::{NodeId, TokenRange};

/// The closed enumeration of M grammar productions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    ArithmeticExpression,
    ArrayWrapper,
    AsExpression,
    AsNullablePrimitiveType,
    AsType,
    Constant,
    Csv,
    EachExpression,
    EqualityExpression,
    ErrorHandlingExpression,
    ErrorRaisingExpression,
    FieldProjection,
    FieldSelector,
    FieldSpecification,
    FieldSpecificationList,
    FieldTypeSpecification,
    FunctionExpression,
    FunctionType,
    GeneralizedIdentifier,
    GeneralizedIdentifierPairedAnyLiteral,
    GeneralizedIdentifierPairedExpression,
    Identifier,
    IdentifierExpression,
    IdentifierPairedExpression,
    IfExpression,
    InvokeExpression,
    IsExpression,
    IsNullablePrimitiveType,
    ItemAccessExpression,
    LetExpression,
    ListExpression,
    ListLiteral,
    ListType,
    LiteralExpression,
    LogicalExpression,
    MetadataExpression,
    NotImplementedExpression,
    NullCoalescingExpression,
    NullablePrimitiveType,
    NullableType,
    OtherwiseExpression,
    Parameter,
    ParameterList,
    ParenthesizedExpression,
    PrimitiveType,
    RangeExpression,
    RecordExpression,
    RecordLiteral,
    RecordType,
    RecursivePrimaryExpression,
    RelationalExpression,
    Section,
    SectionMember,
    TableType,
    TypePrimaryType,
    UnaryExpression,
}

impl NodeKind {
    /// Check if this production closes as a leaf (no attributes of its own).
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::Constant
                | NodeKind::GeneralizedIdentifier
                | NodeKind::Identifier
                | NodeKind::LiteralExpression
                | NodeKind::PrimitiveType
        )
    }
}

/// Kind-specific structural data of a closed node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstNodeData {
    /// A leaf node: constants, identifiers, literals. Carries the literal
    /// text where applicable.
    Leaf { literal: Option<String> },
    /// An interior node referencing its children by id, in attribute order.
    Branch { children: Vec<NodeId> },
}

/// An immutable, closed parse-tree entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstNode {
    /// Equal to the id of the context this node closed.
    pub id: NodeId,
    pub kind: NodeKind,
    pub token_range: TokenRange,
    pub data: AstNodeData,
}

impl AstNode {
    /// Build a closed leaf node.
    pub fn leaf(id: NodeId, kind: NodeKind, token_range: TokenRange, literal: Option<String>) -> Self {
        AstNode {
            id,
            kind,
            token_range,
            data: AstNodeData::Leaf { literal },
        }
    }

    /// Build a closed interior node over already-closed children.
    pub fn branch(id: NodeId, kind: NodeKind, token_range: TokenRange, children: Vec<NodeId>) -> Self {
        AstNode {
            id,
            kind,
            token_range,
            data: AstNodeData::Branch { children },
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.data, AstNodeData::Leaf { .. })
    }

    /// The node's children in attribute order; empty for leaves.
    pub fn children(&self) -> &[NodeId] {
        match &self.data {
            AstNodeData::Leaf { .. } => &[],
            AstNodeData::Branch { children } => children,
        }
    }

    /// The source window this node covers.
    #[inline]
    pub fn span(&self) -> Span {
        self.token_range.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_kinds_are_flagged() {
        assert!(NodeKind::Constant.is_leaf());
        assert!(NodeKind::Identifier.is_leaf());
        assert!(NodeKind::LiteralExpression.is_leaf());
        assert!(!NodeKind::ListExpression.is_leaf());
        assert!(!NodeKind::Csv.is_leaf());
    }

    #[test]
    fn branch_children_preserve_order() {
        let node = AstNode::branch(
            NodeId(3),
            NodeKind::Csv,
            TokenRange::default(),
            vec![NodeId(4), NodeId(5)],
        );
        assert!(!node.is_leaf());
        assert_eq!(node.children(), &[NodeId(4), NodeId(5)]);
    }

    #[test]
    fn leaf_has_no_children() {
        let node = AstNode::leaf(
            NodeId(2),
            NodeKind::Constant,
            TokenRange::default(),
            Some("{".to_string()),
        );
        assert!(node.is_leaf());
        assert!(node.children().is_empty());
    }

    #[test]
    fn span_comes_from_the_token_range() {
        let range = TokenRange::new(1, 2, Span::new(4, 5));
        let node = AstNode::leaf(NodeId(2), NodeKind::Constant, range, None);
        assert_eq!(node.span(), Span::new(4, 5));
        assert_eq!(node.token_range.token_index_end, 2);
    }
}
