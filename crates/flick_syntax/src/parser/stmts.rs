/// Line-terminated statements: `return` / `^` and `name = ...`.
///
/// Both run to the end of their line and leave the `Newline` for the enclosing block.
impl<'a> Parser<'a> {
    fn return_expression(&mut self) -> Result<Node, ParseError> {
        self.advance(); // return | ^
        let mut body = Vec::new();
        self.walk_line(&mut body, Construct::ReturnExpression, &[])?;
        Ok(Node::ReturnExpression { body })
    }

    /// `true` if the current identifier is followed (past inline tabs) by `=`.
    fn is_assignment(&self) -> bool {
        self.check(TokenKind::Ident) && self.lookahead_past_tabs() == Some(TokenKind::Assign)
    }

    fn assignment(&mut self) -> Result<Node, ParseError> {
        let name = self.current(Construct::Assignment)?.text.clone();
        self.pos = self.past_tabs(self.pos + 1) + 1; // name, tabs, `=`

        let mut body = Vec::new();
        self.walk_line(&mut body, Construct::Assignment, &[])?;
        Ok(Node::AssignExpression { name, body })
    }
}
