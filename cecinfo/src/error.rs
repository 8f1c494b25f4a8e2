//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Codec error: {0}")]
    Codec(#[from] cecinfo_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] cecinfo_transport::Error),

    #[error("Channel not open")]
    NotConnected,
}

impl Error {
    /// Check if the peer sent bytes that do not decode
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Codec(e) if e.is_malformed_input())
    }
}
