//! Syntax front end for the Flick language: tokens, lexer, AST, parser and diagnostics.
//!
//! The pipeline is two-phase: [`lexer::lex`] runs to completion, then [`parser::parse`] walks the token list.
//!
//! ## Notes
//! - This crate is syntax-only. Nothing here interprets, checks, or lowers the AST.
//! - Reserved spellings come from `flick_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use flick_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("greet = -> print('hi')\n").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
