//! Delimited literal scanning for the Flick lexer
//!
//! Numbers are digit runs; strings and comments run from their opening delimiter to the next identical delimiter,
//! with no escapes.

use super::Lexer;
use super::tokens::TokenKind;
use crate::diagnostics::{LexError, LiteralKind};

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self) {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let source = self.source;
        let digits = &source[self.offset(start)..self.offset(self.pos)];
        self.add_token(TokenKind::Number, digits);
    }

    /// Scan a `'string'` or `"comment"`, keeping only the text between the delimiters.
    pub(super) fn scan_delimited(&mut self, literal: LiteralKind) -> Result<(), LexError> {
        let delimiter = literal.delimiter();
        let open = self.offset(self.pos);
        self.advance();

        let start = self.pos;
        loop {
            match self.peek() {
                Some(c) if c == delimiter => break,
                Some(_) => {
                    self.advance();
                }
                None => {
                    return Err(LexError::UnterminatedLiteral {
                        literal,
                        span: (open, self.source.len() - open).into(),
                    });
                }
            }
        }
        let source = self.source;
        let content = &source[self.offset(start)..self.offset(self.pos)];
        self.advance();

        let kind = match literal {
            LiteralKind::String => TokenKind::String,
            LiteralKind::Comment => TokenKind::Comment,
        };
        self.add_token(kind, content);
        Ok(())
    }
}
