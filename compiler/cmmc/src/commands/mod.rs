//! Command implementations for the `cmm` binary.

mod debug;
mod run;

pub use debug::{lex_file, parse_file, render_parse, render_tokens};
pub use run::run_file;

use crate::RunError;
use std::io::Read;

/// Read a program from `path`, or from stdin when `path` is `-`.
pub fn read_source(path: &str) -> Result<String, RunError> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| RunError::from_io("<stdin>", e))?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| RunError::from_io(path, e))
}
