//! Incremental parse-context substrate for the Power Query / M language.
//!
//! This crate provides the bookkeeping that lets a recursive-descent driver
//! abandon a production mid-flight without losing the work completed so far.
//! Nodes live in one of two realms:
//!
//! - *contexts* — open, still-growing entries, mutable;
//! - *ast nodes* — closed, immutable entries.
//!
//! A node is an id; its storage lives in one of two maps indexed by that id,
//! and edges (parent, children) are id-based as well. The graph is queryable
//! at every intermediate state, so an incomplete parse is a first-class
//! output rather than an error.
//!
//! # Architecture
//!
//! - [`base`] - node identity and the session-scoped id allocator
//! - [`ast`] - the closed `NodeKind` enumeration and immutable [`ast::AstNode`]
//! - [`context`] - the open [`context::ParseContext`] record
//! - [`node_map`] - the relational core ([`node_map::NodeIdMap`], [`node_map::XorNode`])
//! - [`session`] - [`session::ParseSessionState`] and the lifecycle operations

pub mod ast;
pub mod base;
pub mod context;
pub mod node_map;
pub mod session;

// Re-export key types at crate root for convenience
pub use ast::{AstNode, AstNodeData, NodeKind};
pub use base::{IdAllocator, NodeId, TokenRange};
pub use context::ParseContext;
pub use node_map::{NodeIdMap, XorNode};
pub use session::ParseSessionState;
