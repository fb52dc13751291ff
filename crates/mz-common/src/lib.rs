//! Shared base types for the mz Power Query / M front-end.
//!
//! This crate is the base layer of the workspace: it holds the types shared
//! between the parse substrate and downstream tooling so that the sibling
//! crates never depend on each other.
//!
//! ```text
//! mz-common (base layer)
//!   ↓
//! mz-parser
//! ```

pub mod error;
pub mod span;
pub mod token;

pub use error::InvariantError;
pub use span::Span;
pub use token::{Token, TokenIndex, TokenKind};
