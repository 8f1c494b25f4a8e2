//! `DeviceInfo` wire format
//!
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────┬──────────┬──────────────┐
//! │ Logical  │ Physical │  PortId  │  Device  │ VendorId │ DisplayName  │
//! │ Address  │ Address  │          │   Type   │          │              │
//! │ (int32)  │ (int32)  │ (int32)  │ (int32)  │ (int32)  │   (string)   │
//! └──────────┴──────────┴──────────┴──────────┴──────────┴──────────────┘
//! ```
//!
//! The CEC flag is not on the wire. Decoding always goes through
//! [`DeviceInfo::for_cec_device`], so a decoded record reports
//! `is_cec_device() == true` even if it was built as a non-CEC device.

use cecinfo_types::{DeviceInfo, DeviceType};
use tracing::trace;

use crate::{
    error::{Error, Result},
    parcel::{ParcelReader, ParcelWriter, Parcelable},
};

impl Parcelable for DeviceInfo {
    fn write_to_parcel(&self, parcel: &mut ParcelWriter) {
        parcel.write_i32(self.logical_address());
        parcel.write_i32(self.physical_address().into());
        parcel.write_i32(self.port_id());
        parcel.write_i32(self.device_type().code());
        parcel.write_u32(self.vendor_id());
        parcel.write_string(self.display_name());
    }

    /// # Examples
    ///
    /// ```
    /// use cecinfo_core::Parcelable;
    /// use cecinfo_types::DeviceInfo;
    ///
    /// let hdmi = DeviceInfo::for_non_cec_device(0x2000, 2);
    /// let decoded = DeviceInfo::decode(hdmi.encode()).unwrap();
    ///
    /// assert_eq!(decoded.physical_address(), 0x2000);
    /// assert!(decoded.is_cec_device());
    /// ```
    fn read_from_parcel(parcel: &mut ParcelReader) -> Result<Self> {
        let logical_address = parcel.read_i32()?;
        let physical_raw = parcel.read_i32()?;
        let port_id = parcel.read_i32()?;
        let device_type = parcel.read_i32()?;
        let vendor_id = parcel.read_u32()?;
        let display_name = parcel.read_string()?;

        let physical_address = u16::try_from(physical_raw).map_err(|_| Error::OutOfRange {
            field: "physical_address",
            value: physical_raw.into(),
        })?;

        let device_type = DeviceType::from(device_type);

        trace!(
            logical_address,
            physical_address,
            port_id,
            device_type = device_type.name(),
            vendor_id,
            "Decoded device info"
        );

        Ok(DeviceInfo::for_cec_device(
            logical_address,
            physical_address,
            port_id,
            device_type,
            vendor_id,
            display_name,
        ))
    }
}
