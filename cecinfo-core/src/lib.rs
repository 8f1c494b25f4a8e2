//! # cecinfo-core
//!
//! Marshalling for HDMI-CEC device information.
//!
//! This crate provides the low-level codec primitives:
//! - Parcel writer and reader (4-byte aligned, little-endian)
//! - The `Parcelable` trait and its `DeviceInfo` implementation
//! - Typed lists of parcelables
//! - Codec constants

pub mod constants;
pub mod device_info;
pub mod error;
pub mod parcel;

pub use error::{Error, Result};
pub use parcel::{ParcelReader, ParcelWriter, Parcelable};
