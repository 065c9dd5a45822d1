//! Driver errors.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The messages themselves have already been written to the output.
    #[error("{count} syntax error(s)")]
    Syntax { count: usize },
}

impl RunError {
    /// Classify an I/O failure while reading `path`.
    pub fn from_io(path: &str, source: io::Error) -> Self {
        let path = path.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => RunError::NotFound { path },
            io::ErrorKind::PermissionDenied => RunError::PermissionDenied { path },
            io::ErrorKind::InvalidData => RunError::InvalidUtf8 { path },
            _ => RunError::Io { path, source },
        }
    }

    /// Whether the user already saw the details on stdout.
    pub fn is_reported(&self) -> bool {
        matches!(self, RunError::Syntax { .. })
    }
}
