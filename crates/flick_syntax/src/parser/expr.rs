// Bracketed forms and prefix operators.

/// Identifier spellings dispatched as prefix operators. `^` only reaches here through a custom vocabulary;
/// the standard one lexes it as `Return`.
const PREFIX_OPERATORS: &[&str] = &["+", "-", "*", "/", "^"];

fn is_prefix_operator(text: &str) -> bool {
    PREFIX_OPERATORS.contains(&text)
}

impl<'a> Parser<'a> {
    /// Parse `[...]`, `(...)` or `{...}` after its opening token.
    ///
    /// The closer is checked before each child and consumed when found. Newlines inside are ignored. While the form
    /// is open, line-terminated constructs inside it also stop at its closer.
    fn bracketed(&mut self, close: TokenKind, construct: Construct) -> Result<Vec<Node>, ParseError> {
        self.advance(); // opener
        let outer = self.closer.replace(close);
        let result = self.bracketed_body(close, construct);
        self.closer = outer;
        result
    }

    fn bracketed_body(&mut self, close: TokenKind, construct: Construct) -> Result<Vec<Node>, ParseError> {
        let mut body = Vec::new();
        loop {
            let kind = self.current(construct)?.kind;
            if kind == close {
                self.advance();
                return Ok(body);
            }
            if kind == TokenKind::EndOfInput {
                return Err(ParseError::unexpected_end(construct));
            }
            body.extend(self.walk()?);
        }
    }

    /// Parse a prefix operator and exactly one operand from the same line.
    fn operator(&mut self) -> Result<Node, ParseError> {
        let value = self.current(Construct::Operand)?.text.clone();
        self.advance();

        loop {
            match self.current(Construct::Operand)?.kind {
                TokenKind::EndOfInput => return Err(ParseError::unexpected_end(Construct::Operand)),
                TokenKind::Newline => return Err(ParseError::MissingOperand { operator: value }),
                kind if Some(kind) == self.closer => return Err(ParseError::MissingOperand { operator: value }),
                kind if kind.is_trivia() => self.advance(),
                _ => break,
            }
        }

        match self.walk()? {
            Some(operand) => Ok(Node::Operator {
                value,
                operand: Box::new(operand),
            }),
            None => Err(ParseError::MissingOperand { operator: value }),
        }
    }
}
