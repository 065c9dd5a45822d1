//! C-- interpreter driver.
//!
//! Wires lexer, parser and evaluator into one pipeline and hosts the
//! command handlers used by the `cmm` binary.
//!
//! ```text
//! source ──► cmm_parse::parse ──► errors? ──yes──► report, stop
//!                                    │
//!                                    no
//!                                    ▼
//!                        cmm_eval::evaluate ──► print output + result
//! ```

pub mod commands;
mod config;
mod error;

pub use config::Config;
pub use error::RunError;

use cmm_eval::{SharedPrintHandler, Value};
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once, if `RUST_LOG` is set.
///
/// Logs go to stderr so they never interleave with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Parse and evaluate `source`.
///
/// On syntax errors every message is written to `print_handler`, one per
/// line, and evaluation is skipped. Otherwise `print` output goes to
/// `print_handler`, followed by the rendered final value when
/// [`Config::print_result`] is set.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn run_source(
    source: &str,
    config: &Config,
    print_handler: &SharedPrintHandler,
) -> Result<Value, RunError> {
    let output = cmm_parse::parse(source);
    if output.has_errors() {
        for error in &output.errors {
            print_handler.println(&error.to_string());
        }
        print_handler.flush();
        return Err(RunError::Syntax {
            count: output.errors.len(),
        });
    }

    let value = cmm_eval::evaluate(&output.program, print_handler.clone());
    if config.print_result {
        print_handler.print(&value.to_string());
    }
    print_handler.flush();
    Ok(value)
}
