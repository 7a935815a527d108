//! Errors carried by nodes and returned by decoding.

use std::fmt;
use thiserror::Error;

/// Why a navigation step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Key or index absent.
    #[error("undefined")]
    Undefined,
    /// Key navigation on a node that is not an object.
    #[error("not an object")]
    NotObject,
    /// Index navigation on a node that is not an array.
    #[error("not an array")]
    NotArray,
}

impl ErrorKind {
    /// Stable name of the kind, e.g. `ErrorNotObject`.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Undefined => "ErrorUndefined",
            ErrorKind::NotObject => "ErrorNotObject",
            ErrorKind::NotArray => "ErrorNotArray",
        }
    }
}

/// A navigation failure and the path at which it happened.
///
/// Renders as `json<path>: <kind>`, or just `<kind>` at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    path: String,
}

impl Error {
    pub fn new(kind: ErrorKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Root-relative path of the failure, e.g. `.hello[0].name`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "json{}: {}", self.path, self.kind)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Failure of an operation that reads or fully decodes bytes.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Path(#[from] Error),
}
