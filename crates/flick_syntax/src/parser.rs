//! Parser for the Flick programming language
//!
//! Recursive descent over a token list, with block structure inferred from indentation: a multi-line function or
//! if/else body lasts exactly as long as its lines start with the same number of `Tab` tokens as its first line.
//!
//! ## Examples
//!
//! ```rust
//! use flick_syntax::ast::Node;
//! use flick_syntax::{lexer, parser};
//!
//! let source = "test = ->\n\tx = 1\n\tprint(x)\n";
//! let tokens = lexer::lex(source).unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert!(matches!(&program.body[0], Node::AssignExpression { name, .. } if name == "test"));
//! ```

use crate::ast::*;
use crate::diagnostics::{Construct, ParseError};
use crate::lexer::{Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/walk.rs");
include!("parser/blocks.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
