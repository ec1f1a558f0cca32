//! Registry-first language vocabulary.
//!
//! ## Notes
//! - Registries are pure data: no AST, no IO, no lexing.
//! - Lookups are case-sensitive.

pub mod keywords;
pub mod symbols;
mod vocabulary;

pub use vocabulary::Vocabulary;
