//! Flick version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time, so the CLI and any tooling that
//! reports a version agree on one constant.

/// The Flick version string (for example, `0.1.0`).
pub const FLICK_VERSION: &str = env!("CARGO_PKG_VERSION");
