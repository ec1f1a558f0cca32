/// Block-shaped constructs: function literals and if/else.
///
/// Each comes in two shapes. If anything follows the header on the same line, the body is the rest of that line.
/// If the header line ends instead, the body is the indented block below it.
impl<'a> Parser<'a> {
    fn function_literal(&mut self) -> Result<Node, ParseError> {
        let top_level = self.indents.is_empty();
        self.advance(); // ->

        let body = if self.kind_at(self.past_tabs(self.pos)) == Some(TokenKind::Newline) {
            self.skip_inline_tabs();
            self.indented_body(Construct::FunctionBody)?
        } else {
            self.indents.push(Block::Inline);
            let mut body = Vec::new();
            self.walk_line(&mut body, Construct::FunctionBody, &[])?;
            self.indents.pop();
            body
        };

        Ok(if top_level {
            Node::TopLevelFuncDef { body }
        } else {
            Node::FuncDef { body }
        })
    }

    fn if_statement(&mut self) -> Result<Node, ParseError> {
        self.advance(); // if

        let mut condition = Vec::new();
        loop {
            match self.current(Construct::IfCondition)?.kind {
                TokenKind::Then | TokenKind::Newline => break,
                TokenKind::EndOfInput => return Err(ParseError::unexpected_end(Construct::IfCondition)),
                _ => condition.extend(self.walk()?),
            }
        }

        let body = if self.check(TokenKind::Then) {
            self.advance();
            let mut body = Vec::new();
            self.walk_line(&mut body, Construct::IfBody, &[TokenKind::Else])?;
            body
        } else {
            self.indented_body(Construct::IfBody)?
        };

        Ok(Node::IfStatement { condition, body })
    }

    fn else_statement(&mut self) -> Result<Node, ParseError> {
        self.advance(); // else
        self.skip_inline_tabs();

        let body = match self.current(Construct::ElseBody)?.kind {
            TokenKind::Newline => self.indented_body(Construct::ElseBody)?,
            TokenKind::EndOfInput => return Err(ParseError::unexpected_end(Construct::ElseBody)),
            _ => {
                let mut body = Vec::new();
                self.walk_line(&mut body, Construct::ElseBody, &[])?;
                body
            }
        };

        Ok(Node::ElseStatement { body })
    }
}
