//! Type definitions for cecinfo

pub mod constants;
pub mod device_info;
pub mod device_type;

pub use device_info::DeviceInfo;
pub use device_type::{DeviceType, UnknownCode};
