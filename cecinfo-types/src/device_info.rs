//! Device information structures

use std::fmt;

use crate::{constants::ADDR_NON_CEC, device_type::DeviceType};

/// Device information for an HDMI-CEC device
///
/// Holds the basic information such as logical address, physical address and
/// device type, plus vendor id and OSD name. Also used for non-CEC devices,
/// for which only the port ID and physical address are meaningful.
///
/// All fields are fixed at construction. A device that changes is described
/// by a new `DeviceInfo`.
///
/// # Examples
///
/// ```
/// use cecinfo_types::{DeviceInfo, DeviceType};
///
/// let info = DeviceInfo::for_cec_device(4, 0x1000, 1, DeviceType::Playback, 0x001A, "BluRay".to_string());
/// assert!(info.is_cec_device());
/// assert!(info.is_source_type());
///
/// let hdmi = DeviceInfo::for_non_cec_device(0x2000, 2);
/// assert_eq!(hdmi.logical_address(), -1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceInfo {
    logical_address: i32,
    physical_address: u16,
    port_id: i32,
    device_type: DeviceType,
    vendor_id: u32,
    display_name: Option<String>,
    is_cec_device: bool,
}

impl DeviceInfo {
    /// Create device information for a CEC device
    ///
    /// No field is validated.
    pub fn for_cec_device(
        logical_address: i32,
        physical_address: u16,
        port_id: i32,
        device_type: impl Into<DeviceType>,
        vendor_id: u32,
        display_name: impl Into<Option<String>>,
    ) -> Self {
        Self {
            logical_address,
            physical_address,
            port_id,
            device_type: device_type.into(),
            vendor_id,
            display_name: display_name.into(),
            is_cec_device: true,
        }
    }

    /// Create device information for a non-CEC device (e.g. MHL or plain HDMI)
    pub fn for_non_cec_device(physical_address: u16, port_id: i32) -> Self {
        Self {
            logical_address: ADDR_NON_CEC,
            physical_address,
            port_id,
            device_type: DeviceType::Reserved,
            vendor_id: 0,
            display_name: None,
            is_cec_device: false,
        }
    }

    /// CEC logical address (`-1` for non-CEC devices)
    pub fn logical_address(&self) -> i32 {
        self.logical_address
    }

    /// HDMI physical address (routing path)
    pub fn physical_address(&self) -> u16 {
        self.physical_address
    }

    /// HDMI port ID (1 for HDMI1)
    pub fn port_id(&self) -> i32 {
        self.port_id
    }

    /// Device type (`Reserved` for non-CEC devices)
    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Vendor id, used for vendor specific commands
    pub fn vendor_id(&self) -> u32 {
        self.vendor_id
    }

    /// Display (OSD) name
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// `false` if the device is either MHL or a non-CEC device
    pub fn is_cec_device(&self) -> bool {
        self.is_cec_device
    }

    /// Check if the device is of a type that can be an input source
    pub fn is_source_type(&self) -> bool {
        self.device_type.is_source_type()
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cec_device {
            write!(
                f,
                "CEC: logical_address: {}, physical_address: {}, port_id: {}, device_type: {}, vendor_id: {}, display_name: {}",
                self.logical_address,
                self.physical_address,
                self.port_id,
                self.device_type,
                self.vendor_id,
                self.display_name.as_deref().unwrap_or("null")
            )
        } else {
            write!(
                f,
                "Non-CEC: physical_address: {}, port_id: {}, ",
                self.physical_address, self.port_id
            )
        }
    }
}
