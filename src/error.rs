// src/error.rs

use reqwest::StatusCode;
use std::fmt;

/// Coarse failure class, used only for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Network,
    Parse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::Parse => "parse",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that can go wrong while fetching or reading the reference table.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Transport failure, timeout or unreadable body.
    #[error("GET {url} failed: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("GET {url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// The HTTP client could not be built.
    #[error("building HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The body is not valid tab-delimited data.
    #[error("malformed reference table: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a column the lookup depends on.
    #[error("reference table has no `{column}` column")]
    MissingColumn { column: &'static str },
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Network { .. } | LookupError::Status { .. } | LookupError::Client(_) => {
                ErrorKind::Network
            }
            LookupError::Csv(_) | LookupError::MissingColumn { .. } => ErrorKind::Parse,
        }
    }
}
