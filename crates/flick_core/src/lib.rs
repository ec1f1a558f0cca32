//! Shared language vocabulary for the Flick front end.
//!
//! The lexer never hard-codes spellings: every reserved symbol and keyword lives in a `const` registry under
//! [`lang`], and the lexer borrows a [`lang::Vocabulary`] that bundles both tables.

pub mod lang;
