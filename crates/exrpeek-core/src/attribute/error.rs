use thiserror::Error;

/// Errors returned by typed attribute decoding.
///
/// # Examples
/// ```
/// use exrpeek_core::AttributeError;
///
/// let err = AttributeError::SizeMismatch { type_tag: "int", expected: 4, actual: 3 };
/// assert!(err.to_string().contains("expected 4 bytes"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("{type_tag} value has wrong size: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        type_tag: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("value too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("channel name at offset {offset} is not terminated")]
    UnterminatedChannelName { offset: usize },
    #[error("channel name at offset {offset} is not valid UTF-8")]
    InvalidChannelName { offset: usize },
    #[error("channel '{channel}' record truncated: need {needed} bytes, got {actual}")]
    TruncatedChannel {
        channel: String,
        needed: usize,
        actual: usize,
    },
    #[error("string vector entry at offset {offset} has negative length {length}")]
    NegativeStringLength { offset: usize, length: i32 },
    #[error("{width}x{height} preview needs {expected} bytes, got {actual}")]
    PreviewSizeMismatch {
        width: u32,
        height: u32,
        expected: u64,
        actual: usize,
    },
}
