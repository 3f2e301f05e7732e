use std::io;
use thiserror::Error;

/// Runtime failures of a session.
///
/// A type that cannot be classified never reaches runtime: the missing
/// [`crate::Serializable`] impl is reported by the compiler.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Truncated stream: needed {needed} bytes, only {available} available")]
    TruncatedStream { needed: usize, available: usize },

    #[error("Implausible container length {count} (limit {limit})")]
    SizeImplausible { count: u64, limit: u64 },

    #[error("Bytes are not a valid {type_name}")]
    InvalidValue { type_name: &'static str },

    #[error("{0} trailing bytes after the decoded value")]
    TrailingBytes(usize),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the failure came from the source running dry.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::TruncatedStream { .. })
    }
}
