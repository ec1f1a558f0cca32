#![forbid(unsafe_code)]
//! Flick language front end
//!
//! Flick is a small experimental language whose blocks are delimited purely by indentation. This crate ties the
//! syntax front end (`flick_syntax`) into a single compile call and hosts the `flick` command-line driver.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```rust
//! let compilation = flick::compile("test = () -> print('Hello!')").unwrap();
//! assert_eq!(compilation.program.body.len(), 1);
//! ```

pub mod cli;
pub mod compiler;
pub mod version;

pub use flick_core::lang;
pub use flick_syntax::{ast, diagnostics, lexer, parser};

pub use compiler::{Compilation, compile};
pub use flick_syntax::diagnostics::CompileError;
