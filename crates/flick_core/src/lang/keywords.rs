//! Reserved keyword vocabulary.
//!
//! Keywords are bare words the lexer promotes from `Ident` after scanning a word run.
//!
//! ## Examples
//! ```rust
//! use flick_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("then"), Some(KeywordId::Then));
//! assert_eq!(keywords::from_str("Then"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Return,
    If,
    Then,
    Else,
}

/// Broad grouping for keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// `if` / `then` / `else`.
    Conditional,
    /// `return`.
    Control,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub spelling: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    KeywordInfo {
        id: KeywordId::Return,
        spelling: "return",
        category: KeywordCategory::Control,
    },
    KeywordInfo {
        id: KeywordId::If,
        spelling: "if",
        category: KeywordCategory::Conditional,
    },
    KeywordInfo {
        id: KeywordId::Then,
        spelling: "then",
        category: KeywordCategory::Conditional,
    },
    KeywordInfo {
        id: KeywordId::Else,
        spelling: "else",
        category: KeywordCategory::Conditional,
    },
];

/// Resolve a word to a keyword id, if reserved.
pub fn from_str(word: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.spelling == word).map(|k| k.id)
}

/// Return the canonical spelling of a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    match id {
        KeywordId::Return => "return",
        KeywordId::If => "if",
        KeywordId::Then => "then",
        KeywordId::Else => "else",
    }
}
