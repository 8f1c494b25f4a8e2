//! High-level device information channel

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info};

use cecinfo_core::{ParcelReader, ParcelWriter, Parcelable};
use cecinfo_transport::{StreamTransport, Transport};
use cecinfo_types::DeviceInfo;

use crate::error::{Error, Result};

/// Channel carrying `DeviceInfo` records between processes
///
/// Every record or record list travels as one parcel in one frame.
///
/// # Examples
///
/// ```
/// use cecinfo::{DeviceInfo, DeviceInfoChannel};
///
/// #[tokio::main]
/// async fn main() -> cecinfo::Result<()> {
///     let (a, b) = tokio::io::duplex(1024);
///     let mut sender = DeviceInfoChannel::from_stream(a, "receiver");
///     let mut receiver = DeviceInfoChannel::from_stream(b, "sender");
///
///     sender.send_device(&DeviceInfo::for_non_cec_device(0x2000, 2)).await?;
///     let info = receiver.receive_device().await?;
///     assert_eq!(info.port_id(), 2);
///
///     sender.close().await?;
///     receiver.close().await?;
///     Ok(())
/// }
/// ```
pub struct DeviceInfoChannel {
    transport: Box<dyn Transport>,
}

impl DeviceInfoChannel {
    /// Create a channel over any transport
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Create a channel over an already connected byte stream
    pub fn from_stream<S>(stream: S, peer: impl Into<String>) -> Self
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + Sync + 'static,
    {
        Self::new(StreamTransport::new(stream, peer))
    }

    /// Connect to a Unix domain socket
    #[cfg(unix)]
    pub async fn connect_unix(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let transport = StreamTransport::connect_unix(path).await?;

        info!("Channel open to {}", transport.peer());

        Ok(Self::new(transport))
    }

    /// Check if open
    pub fn is_open(&self) -> bool {
        self.transport.is_open()
    }

    /// Describe the remote end
    pub fn peer(&self) -> String {
        self.transport.peer()
    }

    async fn send_parcel(&mut self, parcel: ParcelWriter) -> Result<()> {
        if !self.is_open() {
            return Err(Error::NotConnected);
        }

        let frame = parcel.into_bytes();
        self.transport.send(&frame).await?;

        Ok(())
    }

    async fn receive_parcel(&mut self) -> Result<ParcelReader> {
        if !self.is_open() {
            return Err(Error::NotConnected);
        }

        let frame = self.transport.receive().await?;
        Ok(ParcelReader::new(frame))
    }

    /// Send one record
    pub async fn send_device(&mut self, info: &DeviceInfo) -> Result<()> {
        debug!("Sending {}", info);

        let mut parcel = ParcelWriter::new();
        parcel.write_parcelable(info);
        self.send_parcel(parcel).await
    }

    /// Receive one record
    ///
    /// The record always reports `is_cec_device() == true`.
    pub async fn receive_device(&mut self) -> Result<DeviceInfo> {
        let mut parcel = self.receive_parcel().await?;
        let info = DeviceInfo::read_from_parcel(&mut parcel)?;
        parcel.finish()?;

        debug!("Received {}", info);

        Ok(info)
    }

    /// Send a record list
    pub async fn send_devices(&mut self, devices: &[DeviceInfo]) -> Result<()> {
        debug!("Sending {} devices", devices.len());

        let mut parcel = ParcelWriter::new();
        parcel.write_typed_list(devices);
        self.send_parcel(parcel).await
    }

    /// Receive a record list
    pub async fn receive_devices(&mut self) -> Result<Vec<DeviceInfo>> {
        let mut parcel = self.receive_parcel().await?;
        let devices: Vec<DeviceInfo> = parcel.read_typed_list()?;
        parcel.finish()?;

        debug!("Received {} devices", devices.len());

        Ok(devices)
    }

    /// Close the channel
    pub async fn close(&mut self) -> Result<()> {
        if self.is_open() {
            info!("Closing channel to {}", self.transport.peer());
        }

        self.transport.close().await?;
        Ok(())
    }
}
