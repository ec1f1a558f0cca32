//! Lexer for the Flick language
//!
//! Handles tokenization including:
//! - Reserved symbols, two-character pairs (`->`, `|>`, `::`, `==`) before single characters
//! - Delimited literals: numbers, `'strings'` and `"comments"`
//! - Indentation normalization: spaces become `Tab` tokens
//! - Bare words, promoted to keywords (`return`, `if`, `then`, `else`) when reserved
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `literals` - Number / string / comment scanning

mod literals;
pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::diagnostics::{LexError, LiteralKind};
use flick_core::lang::Vocabulary;
use flick_core::lang::symbols::SymbolId;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Each step consumes at least one character, tried in priority order:
//
//   reserved pair → reserved char → digit / ' / " literal → space → bare word
//
// No backtracking: a bare word stops wherever a reserved symbol could begin.
// ============================================================================

/// Lexer for Flick source code.
pub struct Lexer<'a> {
    source: &'a str,
    vocab: &'a Vocabulary,
    chars: Vec<(usize, char)>,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over the standard vocabulary.
    pub fn new(source: &'a str) -> Self {
        Self::with_vocabulary(source, &Vocabulary::STANDARD)
    }

    /// Create a new lexer that consults the given reserved-word tables.
    pub fn with_vocabulary(source: &'a str, vocab: &'a Vocabulary) -> Self {
        Self {
            source,
            vocab,
            chars: source.char_indices().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// The token stream always ends with an `EndOfInput` token.
    ///
    /// ## Errors
    /// Returns [`LexError::UnterminatedLiteral`] if a `'` or `"` literal is never closed.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }
        self.tokens.push(Token::end_of_input());
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Byte offset of the character at `pos` (or the end of the source).
    fn offset(&self, pos: usize) -> usize {
        self.chars.get(pos).map_or(self.source.len(), |(o, _)| *o)
    }

    fn add_token(&mut self, kind: TokenKind, text: impl Into<String>) {
        self.tokens.push(Token::new(kind, text));
    }

    fn add_symbol(&mut self, id: SymbolId) {
        let text = flick_core::lang::symbols::as_str(id);
        self.add_token(TokenKind::from(id), text);
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), LexError> {
        let Some(c) = self.peek() else {
            return Ok(());
        };

        if let Some(id) = self.reserved_pair_at(self.pos) {
            self.pos += 2;
            self.add_symbol(id);
            return Ok(());
        }

        if let Some(id) = self.vocab.symbol_char(c) {
            self.advance();
            self.add_symbol(id);
            return Ok(());
        }

        match c {
            '0'..='9' => self.scan_number(),
            '"' => self.scan_delimited(LiteralKind::Comment)?,
            '\'' => self.scan_delimited(LiteralKind::String)?,

            // One space is one unit of indentation, same as a literal tab.
            ' ' if self.pos > 0 => {
                self.advance();
                self.add_symbol(SymbolId::Tab);
            }
            ' ' | '\r' => {
                self.advance();
            }

            _ => self.scan_word(),
        }
        Ok(())
    }

    fn reserved_pair_at(&self, pos: usize) -> Option<SymbolId> {
        let (_, first) = *self.chars.get(pos)?;
        let (_, second) = *self.chars.get(pos + 1)?;
        self.vocab.symbol_pair(first, second)
    }

    /// Return `true` if a reserved symbol (pair or single) begins at `pos`.
    fn starts_reserved(&self, pos: usize) -> bool {
        match self.chars.get(pos) {
            Some((_, c)) => self.vocab.symbol_char(*c).is_some() || self.reserved_pair_at(pos).is_some(),
            None => false,
        }
    }

    // ========================================================================
    // Bare words
    // ========================================================================

    fn scan_word(&mut self) {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if matches!(c, ' ' | '\t' | '\r') || self.starts_reserved(self.pos) {
                break;
            }
            self.advance();
        }

        let source = self.source;
        let word = &source[self.offset(start)..self.offset(self.pos)];
        match self.vocab.keyword(word) {
            Some(id) => self.add_token(TokenKind::from(id), word),
            None => self.add_token(TokenKind::Ident, word),
        }
    }
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::trace!(token_count = tokens.len(), "lexed source");
    Ok(tokens)
}

// ============================================================================
// TESTS
// ============================================================================
