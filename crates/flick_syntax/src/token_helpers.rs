//! Small helper APIs for working with `TokenKind`.
//!
//! These bridge the `flick_core::lang` registries to the flat token kinds and keep layout checks out of the parser's
//! dispatch code.

use crate::lexer::TokenKind;
use flick_core::lang::keywords::KeywordId;
use flick_core::lang::symbols::SymbolId;

impl From<SymbolId> for TokenKind {
    fn from(id: SymbolId) -> Self {
        match id {
            SymbolId::MethodDec => TokenKind::MethodDec,
            SymbolId::Arrow => TokenKind::Func,
            SymbolId::Colon => TokenKind::Colon,
            SymbolId::Semicolon => TokenKind::Semicolon,
            SymbolId::Comma => TokenKind::Comma,
            SymbolId::Pipe => TokenKind::Pipe,
            SymbolId::Cascade => TokenKind::Cascade,
            SymbolId::Caret => TokenKind::Return,
            SymbolId::EqEq => TokenKind::Eq,
            SymbolId::Assign => TokenKind::Assign,
            SymbolId::LParen => TokenKind::LParen,
            SymbolId::RParen => TokenKind::RParen,
            SymbolId::LBracket => TokenKind::LBracket,
            SymbolId::RBracket => TokenKind::RBracket,
            SymbolId::LBrace => TokenKind::LBrace,
            SymbolId::RBrace => TokenKind::RBrace,
            SymbolId::Newline => TokenKind::Newline,
            SymbolId::Tab => TokenKind::Tab,
        }
    }
}

impl From<KeywordId> for TokenKind {
    fn from(id: KeywordId) -> Self {
        match id {
            KeywordId::Return => TokenKind::Return,
            KeywordId::If => TokenKind::If,
            KeywordId::Then => TokenKind::Then,
            KeywordId::Else => TokenKind::Else,
        }
    }
}

impl TokenKind {
    /// Return `true` for tokens that end a line: `Newline` and `EndOfInput`.
    pub fn ends_line(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::EndOfInput)
    }

    /// Return `true` for tokens that never produce an AST node on their own.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Tab | TokenKind::Comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flick_core::lang::{keywords, symbols};

    #[test]
    fn return_sigil_and_keyword_share_a_kind() {
        assert_eq!(TokenKind::from(SymbolId::Caret), TokenKind::Return);
        assert_eq!(TokenKind::from(KeywordId::Return), TokenKind::Return);
    }

    #[test]
    fn line_ends_and_trivia() {
        assert!(TokenKind::Newline.ends_line());
        assert!(TokenKind::EndOfInput.ends_line());
        assert!(!TokenKind::Tab.ends_line());
        assert!(TokenKind::Tab.is_trivia());
        assert!(TokenKind::Comment.is_trivia());
        assert!(!TokenKind::Newline.is_trivia());
    }

    #[test]
    fn every_registry_entry_has_a_kind() {
        for s in symbols::SYMBOLS {
            assert_ne!(TokenKind::from(s.id), TokenKind::Ident);
        }
        for k in keywords::KEYWORDS {
            assert_ne!(TokenKind::from(k.id), TokenKind::Ident);
        }
    }
}
