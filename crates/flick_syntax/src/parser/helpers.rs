/// Token-stream helpers and indentation measurement.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`current`, `kind_at`, `advance`)
/// - Looking past inline `Tab` tokens
/// - Walking one line into a body (`walk_line`)
/// - Opening, re-checking, and closing indented blocks
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token, or `UnexpectedEnd` naming `construct` if the tokens ran out.
    fn current(&self, construct: Construct) -> Result<&'a Token, ParseError> {
        let tokens = self.tokens;
        tokens.get(self.pos).ok_or(ParseError::unexpected_end(construct))
    }

    fn kind_at(&self, pos: usize) -> Option<TokenKind> {
        self.tokens.get(pos).map(|t| t.kind)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.kind_at(self.pos) == Some(kind)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Number of consecutive `Tab` tokens starting at `from`.
    fn tab_run(&self, from: usize) -> usize {
        self.tokens
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|t| t.kind == TokenKind::Tab).count())
    }

    /// Position of the first non-`Tab` token at or after `from`.
    fn past_tabs(&self, from: usize) -> usize {
        from + self.tab_run(from)
    }

    /// Kind of the first non-`Tab` token after the current one.
    fn lookahead_past_tabs(&self) -> Option<TokenKind> {
        self.kind_at(self.past_tabs(self.pos + 1))
    }

    fn skip_inline_tabs(&mut self) {
        self.pos = self.past_tabs(self.pos);
    }

    fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Walk nodes into `body` until the current token ends the line, is one of `stop`, or closes the innermost open
    /// bracketed form.
    ///
    /// The terminating token is left in place for the caller.
    fn walk_line(&mut self, body: &mut Vec<Node>, construct: Construct, stop: &[TokenKind]) -> Result<(), ParseError> {
        loop {
            let kind = self.current(construct)?.kind;
            if kind.ends_line() || stop.contains(&kind) || Some(kind) == self.closer {
                return Ok(());
            }
            body.extend(self.walk()?);
        }
    }

    // ========================================================================
    // Indentation
    // ========================================================================

    /// From a `Newline` at `from`, skip blank lines and measure the next one.
    ///
    /// Returns the line's `Tab` count and the position of its first other token. A line holding nothing but tabs
    /// counts as blank.
    fn next_line(&self, from: usize) -> Option<(usize, usize)> {
        let mut cursor = from;
        while self.kind_at(cursor) == Some(TokenKind::Newline) {
            let width = self.tab_run(cursor + 1);
            let first = cursor + 1 + width;
            if self.kind_at(first) != Some(TokenKind::Newline) {
                return Some((width, first));
            }
            cursor = first;
        }
        None
    }

    /// Enter a multi-line block whose header line ends at the current `Newline`.
    fn open_block(&mut self, construct: Construct) -> Result<usize, ParseError> {
        let (width, first) = self
            .next_line(self.pos)
            .ok_or(ParseError::unexpected_end(construct))?;
        self.pos = first;
        self.indents.push(Block::Indented(width));
        tracing::trace!(width, depth = self.indents.depth(), "block opened");
        Ok(width)
    }

    /// Decide whether the line after the current `Newline` still belongs to a block of `width`.
    ///
    /// On `true` the cursor moves to the first token of that line. On `false` it stays on the line terminator, so
    /// enclosing blocks can run the same check against their own width.
    fn continues_block(&mut self, width: usize) -> bool {
        match self.next_line(self.pos) {
            Some((tabs, first)) if tabs == width => {
                if matches!(self.kind_at(first), None | Some(TokenKind::EndOfInput)) {
                    return false;
                }
                self.pos = first;
                true
            }
            _ => false,
        }
    }

    /// Parse a multi-line body: one or more lines at the width of its first line.
    fn indented_body(&mut self, construct: Construct) -> Result<Vec<Node>, ParseError> {
        let width = self.open_block(construct)?;
        let mut body = Vec::new();
        loop {
            self.walk_line(&mut body, construct, &[])?;
            if !self.continues_block(width) {
                break;
            }
        }
        self.indents.pop();
        tracing::trace!(width, statements = body.len(), "block closed");
        Ok(body)
    }
}
