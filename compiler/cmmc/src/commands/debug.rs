//! Debug commands: `lex` and `parse` for inspecting the front end.

use super::read_source;
use crate::RunError;
use std::fmt::Write;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> Result<(), RunError> {
    let content = read_source(path)?;
    print!("{}", render_tokens(path, &content));
    Ok(())
}

/// Parse a file and display the statements and any syntax errors.
///
/// Syntax errors are part of the dump, not a command failure.
pub fn parse_file(path: &str) -> Result<(), RunError> {
    let content = read_source(path)?;
    print!("{}", render_parse(path, &content));
    Ok(())
}

/// One line per token, `END` included.
pub fn render_tokens(path: &str, source: &str) -> String {
    let tokens = cmm_lexer::lex(source);
    let mut out = String::new();
    let _ = writeln!(out, "Tokens for '{path}' ({} tokens):", tokens.len());
    for tok in &tokens {
        let _ = writeln!(out, "  {} {:?} @ {}", tok.kind, tok.text, tok.span);
    }
    out
}

pub fn render_parse(path: &str, source: &str) -> String {
    let output = cmm_parse::parse(source);
    let mut out = String::new();
    let _ = writeln!(out, "Parse result for '{path}':");
    let _ = writeln!(out, "  Statements: {}", output.program.len());
    let _ = writeln!(out, "  Errors: {}", output.errors.len());

    if !output.program.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Statements:");
        for stmt in &output.program.statements {
            let _ = writeln!(out, "  {stmt}");
        }
    }

    if output.has_errors() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Errors:");
        for error in &output.errors {
            let _ = writeln!(out, "  {}: {error}", error.span());
        }
    }
    out
}
