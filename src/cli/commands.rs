//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use miette::{NamedSource, Report};

use crate::ast::Program;
use crate::compiler;
use crate::diagnostics::CompileError;
use crate::lexer::{self, Token};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// How the AST is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstFormat {
    /// `{:#?}` pretty debug output
    Debug,
    /// JSON, each node tagged with a `type` field
    Json,
}

/// Read a source file into memory.
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render a compile error against its source, with labels and help text.
pub fn render_error(name: &str, source: &str, err: CompileError) -> String {
    let report = Report::new(err).with_source_code(NamedSource::new(name, source.to_string()));
    format!("{report:?}")
}

fn compile_error(name: &str, source: &str, err: impl Into<CompileError>) -> CliError {
    CliError::failure(render_error(name, source, err.into()).trim_end())
}

/// Lex and display tokens.
pub fn lex_source(name: &str, source: &str) -> CliResult<ExitCode> {
    let tokens = lexer::lex(source).map_err(|e| compile_error(name, source, e))?;
    print_tokens(&tokens);
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the AST.
pub fn parse_source(name: &str, source: &str, format: AstFormat) -> CliResult<ExitCode> {
    let compilation = compiler::compile(source).map_err(|e| compile_error(name, source, e))?;
    print_program(&compilation.program, format)?;
    Ok(ExitCode::SUCCESS)
}

/// Full compile: display tokens, then the AST.
pub fn compile_source(name: &str, source: &str, format: AstFormat) -> CliResult<ExitCode> {
    println!("Starting compilation");
    let compilation = compiler::compile(source).map_err(|e| compile_error(name, source, e))?;
    print_tokens(&compilation.tokens);
    println!();
    print_program(&compilation.program, format)?;
    Ok(ExitCode::SUCCESS)
}

fn print_tokens(tokens: &[Token]) {
    for tok in tokens {
        println!("{:?}", tok);
    }
}

/// Render a program in the requested format.
pub fn format_program(program: &Program, format: AstFormat) -> CliResult<String> {
    match format {
        AstFormat::Debug => Ok(format!("{:#?}", program)),
        AstFormat::Json => serde_json::to_string_pretty(program)
            .map_err(|e| CliError::failure(format!("Error serializing AST: {}", e))),
    }
}

fn print_program(program: &Program, format: AstFormat) -> CliResult<()> {
    println!("{}", format_program(program, format)?);
    Ok(())
}
