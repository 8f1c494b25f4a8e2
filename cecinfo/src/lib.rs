//! # cecinfo
//!
//! HDMI-CEC device information records and their IPC marshalling.
//!
//! ## Features
//!
//! - Immutable `DeviceInfo` value for CEC and non-CEC devices
//! - Parcel wire format (int32 fields, length-prefixed UTF-16 strings)
//! - Async framed channel for sending records between processes
//!
//! ## Quick Start
//!
//! ```no_run
//! use cecinfo::{DeviceInfo, DeviceInfoChannel, DeviceType};
//!
//! #[tokio::main]
//! async fn main() -> cecinfo::Result<()> {
//!     let mut channel = DeviceInfoChannel::connect_unix("/run/hdmi-control.sock").await?;
//!
//!     let info = DeviceInfo::for_cec_device(4, 0x1000, 1, DeviceType::Playback, 0x001A, "BluRay".to_string());
//!     channel.send_device(&info).await?;
//!
//!     let devices = channel.receive_devices().await?;
//!     for device in &devices {
//!         println!("{}", device);
//!     }
//!
//!     channel.close().await?;
//!     Ok(())
//! }
//! ```

pub mod channel;
pub mod error;

// Re-exports
pub use channel::DeviceInfoChannel;
pub use error::{Error, Result};

// Re-export types
pub use cecinfo_core::{ParcelReader, ParcelWriter, Parcelable};
pub use cecinfo_transport::{StreamTransport, Transport};
pub use cecinfo_types::{constants, DeviceInfo, DeviceType, UnknownCode};
