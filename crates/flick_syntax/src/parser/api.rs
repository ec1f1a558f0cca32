/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `flick_syntax::lexer`.
///
/// ## Errors
/// Returns [`ParseError::UnexpectedEnd`] when the tokens run out inside an open construct, and
/// [`ParseError::MissingOperand`] for a prefix operator with nothing after it on its line.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}
