//! Codec and framing constants

/// Parcel data alignment in bytes
pub const PARCEL_ALIGNMENT: usize = 4;

/// Size of an encoded int32
pub const INT32_SIZE: usize = 4;

/// String length marking an absent string
pub const NULL_STRING_LENGTH: i32 = -1;

/// List count marking an absent list
pub const NULL_LIST_COUNT: i32 = -1;

/// Frame header size (u32 LE payload length)
pub const FRAME_HEADER_SIZE: usize = 4;

/// Maximum frame payload size (64KB)
pub const MAX_FRAME_SIZE: usize = 65536;

/// Default read timeout (seconds)
pub const DEFAULT_READ_TIMEOUT: u64 = 5;
