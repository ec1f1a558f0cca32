//! Token types for the Flick lexer.
//!
//! Tokens are plain `{ kind, text }` values. They carry no source position; the parser only ever looks at the kind
//! and, for identifiers and literals, the text.
//!
//! ## Notes
//! - `TokenKind` is flat: both the `return` keyword and the `^` sigil are [`TokenKind::Return`].
//! - Use `crate::token_helpers` for registry conversions and layout checks.

use serde::Serialize;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // ========== Reserved symbols ==========
    MethodDec, // ::
    Colon,
    Semicolon,
    Comma,
    Newline,
    Pipe,
    Cascade, // |>
    Return,  // ^ and `return`
    Eq,      // ==
    Assign,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Tab,
    Func, // ->

    // ========== Keywords ==========
    If,
    Then,
    Else,

    // ========== Content ==========
    Number,
    String,
    Comment,
    Ident,

    // ========== Special ==========
    EndOfInput,
}

/// A token: its kind plus the text it was produced from.
///
/// Delimited literals store their content without the delimiters; `Tab` always stores `"\t"`, even when it was
/// produced from a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-input marker that terminates every token stream.
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }
}
