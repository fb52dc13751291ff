//! Invariant-violation signaling.
//!
//! The parse substrate surfaces exactly one error kind. An `InvariantError`
//! means a caller broke a lifecycle contract or the graph itself became
//! inconsistent; it is not recoverable and the owning session should be
//! abandoned. Parsing problems (unexpected token, missing production) are
//! not errors at this layer — they are open contexts that never closed.

use std::error::Error;
use std::fmt;

/// A contract breach detected by the parse substrate.
///
/// Carries a message and an ordered list of structured details, typically
/// the offending node ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvariantError {
    pub message: String,
    pub details: Vec<(&'static str, String)>,
}

impl InvariantError {
    pub fn new(message: impl Into<String>) -> Self {
        InvariantError {
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Attach a structured detail. Keys are fixed strings so call sites stay
    /// grep-able; values are rendered eagerly.
    #[must_use]
    pub fn with_detail(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.details.push((key, value.to_string()));
        self
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.details.is_empty() {
            write!(f, " (")?;
            for (i, (key, value)) in self.details.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl Error for InvariantError {}
