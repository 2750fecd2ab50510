use thiserror::Error;

/// Errors returned by the byte cursor.
///
/// # Examples
/// ```
/// use exrpeek_core::SourceError;
///
/// let err = SourceError::UnexpectedEof { offset: 8, needed: 4, available: 1 };
/// assert!(err.to_string().contains("unexpected end of input"));
/// ```
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unexpected end of input at offset {offset}: need {needed} bytes, got {available}")]
    UnexpectedEof {
        offset: u64,
        needed: u64,
        available: u64,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    pub fn is_eof(&self) -> bool {
        matches!(self, SourceError::UnexpectedEof { .. })
    }
}
