//! Reserved symbol vocabulary.
//!
//! Reserved symbols are the fixed punctuation/operator spellings the lexer recognizes directly from raw text:
//! separators, structural brackets, layout characters and the function arrow.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `"|>"` is one symbol, `"|"` another.
//! - Two-character symbols share a first character with a one-character symbol (`::`/`:`, `|>`/`|`, `==`/`=`), so
//!   the lexer must try the pair first.
//!
//! ## Examples
//! ```rust
//! use flick_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(symbols::from_str("->"), Some(SymbolId::Arrow));
//! assert_eq!(symbols::as_str(SymbolId::Cascade), "|>");
//! assert_eq!(symbols::from_str("-"), None);
//! ```

/// Broad syntactic grouping for reserved symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    /// Brackets, parens and braces.
    Delimiter,
    /// Separators like `,`, `:` and `;`.
    Separator,
    /// Operators like `=`, `==`, `|`, `|>` and the `^` return sigil.
    Operator,
    /// Newline and tab: the characters block structure is measured from.
    Layout,
    /// Declaration markers like `->` and `::`.
    Marker,
}

/// Stable identifier for every reserved symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolId {
    // Markers
    MethodDec,
    Arrow,

    // Separators
    Colon,
    Semicolon,
    Comma,

    // Operators
    Pipe,
    Cascade,
    Caret,
    EqEq,
    Assign,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Layout
    Newline,
    Tab,
}

/// Metadata for a reserved symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub id: SymbolId,
    pub spelling: &'static str,
    pub category: SymbolCategory,
}

/// Registry of all reserved symbols.
pub const SYMBOLS: &[SymbolInfo] = &[
    info(SymbolId::MethodDec, "::", SymbolCategory::Marker),
    info(SymbolId::Arrow, "->", SymbolCategory::Marker),
    info(SymbolId::Colon, ":", SymbolCategory::Separator),
    info(SymbolId::Semicolon, ";", SymbolCategory::Separator),
    info(SymbolId::Comma, ",", SymbolCategory::Separator),
    info(SymbolId::Pipe, "|", SymbolCategory::Operator),
    info(SymbolId::Cascade, "|>", SymbolCategory::Operator),
    info(SymbolId::Caret, "^", SymbolCategory::Operator),
    info(SymbolId::EqEq, "==", SymbolCategory::Operator),
    info(SymbolId::Assign, "=", SymbolCategory::Operator),
    info(SymbolId::LParen, "(", SymbolCategory::Delimiter),
    info(SymbolId::RParen, ")", SymbolCategory::Delimiter),
    info(SymbolId::LBracket, "[", SymbolCategory::Delimiter),
    info(SymbolId::RBracket, "]", SymbolCategory::Delimiter),
    info(SymbolId::LBrace, "{", SymbolCategory::Delimiter),
    info(SymbolId::RBrace, "}", SymbolCategory::Delimiter),
    info(SymbolId::Newline, "\n", SymbolCategory::Layout),
    info(SymbolId::Tab, "\t", SymbolCategory::Layout),
];

const fn info(id: SymbolId, spelling: &'static str, category: SymbolCategory) -> SymbolInfo {
    SymbolInfo { id, spelling, category }
}

/// Resolve an exact spelling to a reserved symbol.
pub fn from_str(spelling: &str) -> Option<SymbolId> {
    SYMBOLS.iter().find(|s| s.spelling == spelling).map(|s| s.id)
}

/// Return the canonical spelling of a reserved symbol.
pub fn as_str(id: SymbolId) -> &'static str {
    info_for(id).spelling
}

/// Return the registry entry for `id`.
pub fn info_for(id: SymbolId) -> &'static SymbolInfo {
    // Every SymbolId has exactly one entry in SYMBOLS.
    SYMBOLS
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| unreachable!("symbol {id:?} missing from SYMBOLS"))
}
