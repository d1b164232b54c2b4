use thiserror::Error;

/// Errors surfaced by the file-reading entry point.
///
/// Classification itself never fails: a buffer or filename that cannot be
/// identified is a `None` result, not an error.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DetectError>;
