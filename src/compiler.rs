//! Compile pipeline: source text to tokens and AST.
//!
//! Lexing runs to completion before parsing starts. Either both phases succeed and the caller receives both
//! artifacts, or the first error is returned and nothing else.

use flick_syntax::ast::Program;
use flick_syntax::diagnostics::CompileError;
use flick_syntax::lexer::{self, Token};
use flick_syntax::parser;

/// The two artifacts of a successful compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    /// Full token stream, comments included, terminated by `EndOfInput`.
    pub tokens: Vec<Token>,
    /// Root of the AST.
    pub program: Program,
}

/// Lex and parse `source`.
///
/// ## Errors
/// - [`CompileError::Lex`] for an unterminated string or comment literal.
/// - [`CompileError::Parse`] when the tokens run out inside an open construct or an operator has no operand.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn compile(source: &str) -> Result<Compilation, CompileError> {
    let tokens = lexer::lex(source)?;
    let program = parser::parse(&tokens)?;
    tracing::debug!(
        tokens = tokens.len(),
        statements = program.body.len(),
        nodes = program.node_count(),
        "compiled"
    );
    Ok(Compilation { tokens, program })
}
