//! Error types for the Flick front end.
//!
//! Both phases fail hard: there is no recovery and no partial result. Errors integrate with [`miette`] so the CLI
//! can render them against the source text.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Which delimited literal was left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// `'...'`
    String,
    /// `"..."`
    Comment,
}

impl LiteralKind {
    /// The delimiter character that opens and closes this literal.
    pub fn delimiter(self) -> char {
        match self {
            LiteralKind::String => '\'',
            LiteralKind::Comment => '"',
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::String => write!(f, "string"),
            LiteralKind::Comment => write!(f, "comment"),
        }
    }
}

/// A lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    /// A `'` or `"` literal ran to the end of the input without its closing delimiter.
    #[error("unterminated {literal} literal")]
    #[diagnostic(
        code(flick::lex::unterminated_literal),
        help("add the closing delimiter before the end of the file")
    )]
    UnterminatedLiteral {
        literal: LiteralKind,
        /// From the opening delimiter to the end of the input.
        #[label("opened here")]
        span: SourceSpan,
    },
}

/// A construct the parser was still inside when the tokens ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Statement,
    FunctionBody,
    ReturnExpression,
    Assignment,
    Array,
    ParenBlock,
    ArrayLiteral,
    Operand,
    IfCondition,
    IfBody,
    ElseBody,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Construct::Statement => "statement",
            Construct::FunctionBody => "function body",
            Construct::ReturnExpression => "return expression",
            Construct::Assignment => "assignment",
            Construct::Array => "array `[...]`",
            Construct::ParenBlock => "paren block `(...)`",
            Construct::ArrayLiteral => "array literal `{...}`",
            Construct::Operand => "operator operand",
            Construct::IfCondition => "if condition",
            Construct::IfBody => "if body",
            Construct::ElseBody => "else body",
        };
        f.write_str(name)
    }
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// The token stream ended while `construct` was still open.
    #[error("unexpected end of input inside {construct}")]
    #[diagnostic(code(flick::parse::unexpected_end))]
    UnexpectedEnd { construct: Construct },

    /// A prefix operator was the last thing on its line.
    #[error("operator `{operator}` is missing its operand")]
    #[diagnostic(
        code(flick::parse::missing_operand),
        help("prefix operators apply to exactly one following value on the same line")
    )]
    MissingOperand { operator: String },

    /// Constructs were opened inside each other past [`crate::parser::MAX_NESTING`].
    #[error("{construct} nested too deeply")]
    #[diagnostic(
        code(flick::parse::nesting_too_deep),
        help("split the expression into smaller assignments")
    )]
    NestingTooDeep { construct: Construct },
}

impl ParseError {
    pub fn unexpected_end(construct: Construct) -> Self {
        ParseError::UnexpectedEnd { construct }
    }
}

/// Any failure of a whole compile call.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CompileError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}
