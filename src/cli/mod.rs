//! CLI module for the Flick front end
//!
//! ## Usage
//!
//! - `flick [FILE]` - Compile FILE (or the built-in sample program) and print tokens and AST
//! - `--lex` / `--parse` - Print only the tokens / only the AST
//! - `--json` - Print the AST as JSON
//! - `--dev` - After compiling, serve the development listener on `--host`/`--port`
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `dev_server` - Fixed-response HTTP listener for manual testing
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod dev_server;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::version::FLICK_VERSION;
use commands::AstFormat;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<dev_server::DevServerError> for CliError {
    fn from(e: dev_server::DevServerError) -> Self {
        CliError::failure(format!("Dev listener error: {}", e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Program compiled when no FILE is given.
pub const SAMPLE_SOURCE: &str = "
test = () -> print('Hello!')

testOne = (x) -> return x + 1

test = ->
  x = testOne(1)
  print(x)
";

/// Display name used in diagnostics for [`SAMPLE_SOURCE`].
const SAMPLE_NAME: &str = "<sample>";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lexer and indentation-sensitive parser for the Flick language
#[derive(Parser, Debug)]
#[command(name = "flick")]
#[command(version = FLICK_VERSION)]
#[command(about = "Lexer and indentation-sensitive parser for the Flick language", long_about = None)]
pub struct Cli {
    /// Source file to compile (default: built-in sample program)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenize only (debug)
    #[arg(long = "lex")]
    pub lex_only: bool,

    /// Parse only, print the AST without tokens (debug)
    #[arg(long = "parse", conflicts_with = "lex_only")]
    pub parse_only: bool,

    /// Print the AST as JSON instead of the debug tree
    #[arg(long, conflicts_with = "lex_only")]
    pub json: bool,

    /// Start the development listener after compiling
    #[arg(long)]
    pub dev: bool,

    /// Port for the development listener
    #[arg(long, value_name = "PORT", default_value_t = 3000, requires = "dev")]
    pub port: u16,

    /// Host address for the development listener
    #[arg(long, value_name = "HOST", default_value = "127.0.0.1", requires = "dev")]
    pub host: String,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let (name, source) = match &cli.file {
        Some(file) => {
            let name = file.to_string_lossy().to_string();
            let source = commands::read_source(&name)?;
            (name, source)
        }
        None => (SAMPLE_NAME.to_string(), SAMPLE_SOURCE.to_string()),
    };
    tracing::debug!(file = %name, bytes = source.len(), "source loaded");

    let format = if cli.json { AstFormat::Json } else { AstFormat::Debug };
    let exit_code = if cli.lex_only {
        commands::lex_source(&name, &source)?
    } else if cli.parse_only {
        commands::parse_source(&name, &source, format)?
    } else {
        commands::compile_source(&name, &source, format)?
    };

    if cli.dev {
        dev_server::run(&cli.host, cli.port)?;
    }
    Ok(exit_code)
}

// ============================================================================
// Tests
// ============================================================================
