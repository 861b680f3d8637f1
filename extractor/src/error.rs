//! Errors raised by the surfaces around extraction.
//!
//! Extraction itself is total: every string yields a (possibly empty) list of
//! tokens. These errors come from reading input, parsing kind names and
//! writing reports.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown token kind: {0}")]
    UnknownKind(String),
}

impl From<ExtractError> for std::io::Error {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::InvalidInput, other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
