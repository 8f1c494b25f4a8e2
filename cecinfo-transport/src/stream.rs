//! Length-framed stream transport

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use bytes::{BufMut, BytesMut};
use cecinfo_core::constants::{DEFAULT_READ_TIMEOUT, FRAME_HEADER_SIZE, MAX_FRAME_SIZE};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, trace, warn};

use crate::{error::*, Transport};

/// Frame layout on the stream
///
/// ```text
/// ┌──────────────────┬─────────────────┐
/// │  Length (u32 LE) │     Parcel      │
/// │     4 bytes      │  Length bytes   │
/// └──────────────────┴─────────────────┘
/// ```
pub struct StreamTransport<S> {
    peer: String,
    stream: Option<S>,
    read_timeout: Duration,
    max_frame_size: usize,
}

impl<S> StreamTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + Sync,
{
    /// Wrap an already connected stream
    pub fn new(stream: S, peer: impl Into<String>) -> Self {
        Self {
            peer: peer.into(),
            stream: Some(stream),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT),
            max_frame_size: MAX_FRAME_SIZE,
        }
    }

    /// Set read timeout
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the largest frame accepted in either direction
    ///
    /// Capped at `u32::MAX`, the largest length the header can carry.
    pub fn with_max_frame_size(mut self, max: usize) -> Self {
        self.max_frame_size = max.min(u32::MAX as usize);
        self
    }
}

#[cfg(unix)]
impl StreamTransport<tokio::net::UnixStream> {
    /// Connect to a Unix domain socket
    pub async fn connect_unix(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();

        debug!("Connecting to {}...", path.display());

        let stream = tokio::net::UnixStream::connect(path).await?;

        debug!("Connected to {}", path.display());

        Ok(Self::new(stream, path.display().to_string()))
    }
}

fn map_eof(e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        Error::ConnectionClosed
    } else {
        Error::Io(e)
    }
}

async fn read_frame<S>(stream: &mut S, max_frame_size: usize) -> Result<BytesMut>
where
    S: AsyncRead + Unpin,
{
    let mut header = [0u8; FRAME_HEADER_SIZE];
    stream.read_exact(&mut header).await.map_err(map_eof)?;

    let size = u32::from_le_bytes(header) as usize;
    if size > max_frame_size {
        return Err(Error::FrameTooLarge {
            size,
            max: max_frame_size,
        });
    }

    let mut buf = BytesMut::zeroed(size);
    stream.read_exact(&mut buf).await.map_err(map_eof)?;

    Ok(buf)
}

#[async_trait]
impl<S> Transport for StreamTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + Sync,
{
    async fn send(&mut self, frame: &[u8]) -> Result<()> {
        let too_large = Error::FrameTooLarge {
            size: frame.len(),
            max: self.max_frame_size,
        };
        if frame.len() > self.max_frame_size {
            return Err(too_large);
        }
        let len = u32::try_from(frame.len()).map_err(|_| too_large)?;

        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

        trace!(
            "Sending {} bytes: {}",
            frame.len(),
            hex::encode(&frame[..frame.len().min(16)])
        );

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + frame.len());
        buf.put_u32_le(len);
        buf.put_slice(frame);

        stream.write_all(&buf).await?;
        stream.flush().await?;

        Ok(())
    }

    async fn receive(&mut self) -> Result<BytesMut> {
        let max_frame_size = self.max_frame_size;
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

        let buf = timeout(self.read_timeout, read_frame(stream, max_frame_size))
            .await
            .map_err(|_| Error::ReadTimeout)??;

        trace!(
            "Received {} bytes: {}",
            buf.len(),
            hex::encode(&buf[..buf.len().min(16)])
        );

        Ok(buf)
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            debug!("Closing channel to {}...", self.peer);

            // Graceful shutdown
            let _ = stream.shutdown().await;
        }

        Ok(())
    }

    fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    fn peer(&self) -> String {
        self.peer.clone()
    }
}

impl<S> Drop for StreamTransport<S> {
    fn drop(&mut self) {
        if self.stream.is_some() {
            warn!("Stream transport to {} dropped while still open", self.peer);
        }
    }
}
