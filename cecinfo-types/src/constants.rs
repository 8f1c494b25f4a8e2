//! Addressing sentinels

/// Logical address of the internal device (the TV itself)
pub const ADDR_INTERNAL: i32 = 0;

/// Logical address carried by non-CEC devices
pub const ADDR_NON_CEC: i32 = -1;

/// Physical address of the internal device (the TV itself)
pub const PATH_INTERNAL: u16 = 0x0000;

/// Invalid physical address (routing path)
pub const PATH_INVALID: u16 = 0xFFFF;

/// Invalid port ID
pub const PORT_INVALID: i32 = -1;
