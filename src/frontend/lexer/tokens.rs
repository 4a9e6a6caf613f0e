//! Token types

use crate::util::span::Position;

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input
    Eof,
    /// A single `\n`
    Newline,
    /// A single `\t`
    Indent,
    LParen,
    RParen,
    /// Maximal run of decimal digits
    Integer,
    /// Alphabetic start, alphanumeric continuation
    Symbol,
    /// Maximal run of characters that are not alphanumeric, space, or tab
    Operator,
}

/// A classified lexical unit with its source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The literal lexeme (empty for [`TokenKind::Eof`])
    pub text: String,
    /// Position of the token's last character
    pub pos: Position,
}

impl Token {
    /// Create a new token
    #[inline]
    pub fn new(kind: TokenKind, text: String, pos: Position) -> Self {
        Self { kind, text, pos }
    }

    /// True for the end-of-input marker
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
