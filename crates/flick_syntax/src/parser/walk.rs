/// Dispatch.
///
/// `walk` looks at the current token, consumes everything that belongs to it, and produces at most one node.
/// Layout and punctuation with no meaning of their own (`Tab`, comments, `:`, `,`, `|>`, `==`, stray closers, ...)
/// are consumed without producing anything; callers collect with `body.extend(self.walk()?)`, so absent results never
/// reach a body sequence.
///
/// Every construct that can contain further constructs is entered through `nested`, which bounds recursion depth at
/// [`MAX_NESTING`].
impl<'a> Parser<'a> {
    fn nested<T>(
        &mut self,
        construct: Construct,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.nesting >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { construct });
        }
        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }

    fn walk(&mut self) -> Result<Option<Node>, ParseError> {
        let token = self.current(Construct::Statement)?;
        let node = match token.kind {
            TokenKind::EndOfInput => {
                self.advance();
                None
            }
            TokenKind::Func => Some(self.nested(Construct::FunctionBody, Self::function_literal)?),
            TokenKind::Newline => {
                // Blank lines collapse into one.
                self.skip_newlines();
                None
            }
            TokenKind::Return => Some(self.nested(Construct::ReturnExpression, Self::return_expression)?),
            TokenKind::Ident if self.is_assignment() => Some(self.nested(Construct::Assignment, Self::assignment)?),
            TokenKind::LBracket => Some(Node::Array {
                body: self.nested(Construct::Array, |p| p.bracketed(TokenKind::RBracket, Construct::Array))?,
            }),
            TokenKind::LParen => Some(Node::ParenBlock {
                body: self.nested(Construct::ParenBlock, |p| p.bracketed(TokenKind::RParen, Construct::ParenBlock))?,
            }),
            TokenKind::LBrace => Some(Node::ArrayLiteral {
                body: self.nested(Construct::ArrayLiteral, |p| {
                    p.bracketed(TokenKind::RBrace, Construct::ArrayLiteral)
                })?,
            }),
            TokenKind::String => {
                self.advance();
                Some(Node::string(token.text.as_str()))
            }
            TokenKind::Number => {
                self.advance();
                Some(Node::number(token.text.as_str()))
            }
            TokenKind::Ident if is_prefix_operator(&token.text) => Some(self.nested(Construct::Operand, Self::operator)?),
            TokenKind::Ident => {
                self.advance();
                Some(Node::ident(token.text.as_str()))
            }
            TokenKind::If => Some(self.nested(Construct::IfBody, Self::if_statement)?),
            TokenKind::Else => Some(self.nested(Construct::ElseBody, Self::else_statement)?),
            _ => {
                self.advance();
                None
            }
        };
        Ok(node)
    }
}
