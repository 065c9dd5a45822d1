//! Destination for `print` output.
//!
//! The CLI writes straight to stdout, tests and embedders capture into a
//! buffer, and benchmarks discard everything. Dispatch is a plain enum
//! match.

use crate::Value;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

pub enum PrintHandlerImpl {
    /// Write to the process's stdout.
    Stdout,
    /// Accumulate into an in-memory buffer.
    Buffer(Mutex<String>),
    /// Drop all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Emit one `print` argument: its rendering followed by a space.
    pub fn print_value(&self, value: &Value) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                // write errors are dropped
                let _ = write!(out, "{value} ");
            }
            Self::Buffer(buf) => {
                use std::fmt::Write as _;
                let _ = write!(buf.lock(), "{value} ");
            }
            Self::Silent => {}
        }
    }

    /// Write raw text.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout => print!("{msg}"),
            Self::Buffer(buf) => buf.lock().push_str(msg),
            Self::Silent => {}
        }
    }

    /// Write raw text and a newline.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far. Empty unless buffering.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }

    /// Push buffered stdout bytes to the terminal.
    pub fn flush(&self) {
        if let Self::Stdout = self {
            let _ = std::io::stdout().flush();
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
