//! The lexer token contract.
//!
//! The upstream lexer is an external collaborator; this module defines only
//! the shape of what it produces. The parse substrate records a token index
//! and, optionally, a copy of the starting token on each open context — it
//! never re-lexes.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Position of a token in the lexer's token stream.
pub type TokenIndex = u32;

/// The closed set of M token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Ampersand,
    Asterisk,
    AtSign,
    Bang,
    Comma,
    Division,
    DotDot,
    Ellipsis,
    Equal,
    FatArrow,
    GreaterThan,
    GreaterThanEqualTo,
    HexLiteral,
    Identifier,
    KeywordAnd,
    KeywordAs,
    KeywordEach,
    KeywordElse,
    KeywordError,
    KeywordFalse,
    KeywordHashBinary,
    KeywordHashDate,
    KeywordHashDateTime,
    KeywordHashDateTimeZone,
    KeywordHashDuration,
    KeywordHashInfinity,
    KeywordHashNan,
    KeywordHashSections,
    KeywordHashShared,
    KeywordHashTable,
    KeywordHashTime,
    KeywordIf,
    KeywordIn,
    KeywordIs,
    KeywordLet,
    KeywordMeta,
    KeywordNot,
    KeywordOr,
    KeywordOtherwise,
    KeywordSection,
    KeywordShared,
    KeywordThen,
    KeywordTrue,
    KeywordTry,
    KeywordType,
    LeftBrace,
    LeftBracket,
    LeftParenthesis,
    LessThan,
    LessThanEqualTo,
    Minus,
    NotEqual,
    NullCoalescingOperator,
    NullLiteral,
    NumericLiteral,
    Plus,
    QuestionMark,
    RightBrace,
    RightBracket,
    RightParenthesis,
    Semicolon,
    TextLiteral,
}

impl TokenKind {
    /// Check if this kind is a keyword (including the `#`-prefixed constructors).
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KeywordAnd
                | TokenKind::KeywordAs
                | TokenKind::KeywordEach
                | TokenKind::KeywordElse
                | TokenKind::KeywordError
                | TokenKind::KeywordFalse
                | TokenKind::KeywordHashBinary
                | TokenKind::KeywordHashDate
                | TokenKind::KeywordHashDateTime
                | TokenKind::KeywordHashDateTimeZone
                | TokenKind::KeywordHashDuration
                | TokenKind::KeywordHashInfinity
                | TokenKind::KeywordHashNan
                | TokenKind::KeywordHashSections
                | TokenKind::KeywordHashShared
                | TokenKind::KeywordHashTable
                | TokenKind::KeywordHashTime
                | TokenKind::KeywordIf
                | TokenKind::KeywordIn
                | TokenKind::KeywordIs
                | TokenKind::KeywordLet
                | TokenKind::KeywordMeta
                | TokenKind::KeywordNot
                | TokenKind::KeywordOr
                | TokenKind::KeywordOtherwise
                | TokenKind::KeywordSection
                | TokenKind::KeywordShared
                | TokenKind::KeywordThen
                | TokenKind::KeywordTrue
                | TokenKind::KeywordTry
                | TokenKind::KeywordType
        )
    }

    /// Check if this kind is a literal token.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::HexLiteral
                | TokenKind::NullLiteral
                | TokenKind::NumericLiteral
                | TokenKind::TextLiteral
        )
    }
}

/// A single token produced by the lexer.
///
/// `data` is the source slice the token covers — the literal value where
/// applicable (numeric text, string contents, identifier name).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub data: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, data: impl Into<String>) -> Self {
        Token {
            kind,
            span,
            data: data.into(),
        }
    }
}
