//! Error types for cecinfo-core

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Parcel decoding errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Buffer ended before a value could be read
    #[error("Buffer underflow reading {field}: need {needed} bytes, {remaining} remaining")]
    Underflow {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// String field is not a valid length-prefixed UTF-16 string
    #[error("Invalid string: {reason}")]
    InvalidString {
        reason: String,
    },

    /// Decoded integer does not fit the field's type
    #[error("Value {value} out of range for {field}")]
    OutOfRange {
        field: &'static str,
        value: i64,
    },

    /// Typed list contains a null element
    #[error("Unexpected null element at index {index}")]
    NullElement {
        index: usize,
    },

    /// Bytes left over after the last value
    #[error("{remaining} trailing bytes after parcel")]
    TrailingBytes {
        remaining: usize,
    },
}

impl Error {
    /// Check if the error was caused by malformed input bytes
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::Underflow { .. }
                | Self::InvalidString { .. }
                | Self::OutOfRange { .. }
                | Self::NullElement { .. }
                | Self::TrailingBytes { .. }
        )
    }
}
