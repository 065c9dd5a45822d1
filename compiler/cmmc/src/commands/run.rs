//! The `run` command.

use super::read_source;
use crate::{run_source, Config, RunError};
use cmm_eval::stdout_handler;

/// Read, parse and evaluate a program file, printing to stdout.
pub fn run_file(path: &str, config: &Config) -> Result<(), RunError> {
    let source = read_source(path)?;
    tracing::debug!(path, bytes = source.len(), "running program");
    run_source(&source, config, &stdout_handler())?;
    Ok(())
}
