//! Transport layer for cecinfo
//!
//! Carries length-framed parcels between processes.

pub mod error;
pub mod stream;

pub use error::{Error, Result};
pub use stream::StreamTransport;

use async_trait::async_trait;
use bytes::BytesMut;

/// Transport trait for different IPC channels
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one frame
    async fn send(&mut self, frame: &[u8]) -> Result<()>;

    /// Receive one complete frame (with timeout)
    async fn receive(&mut self) -> Result<BytesMut>;

    /// Close the channel
    async fn close(&mut self) -> Result<()>;

    /// Check if open
    fn is_open(&self) -> bool;

    /// Describe the remote end
    fn peer(&self) -> String;
}
