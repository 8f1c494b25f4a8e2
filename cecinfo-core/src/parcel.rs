//! Parcel container encoding/decoding
//!
//! A parcel is a flat sequence of 4-byte aligned values.
//!
//! ```text
//! int32   ┌───────────────┐
//!         │  4 bytes (LE) │
//!         └───────────────┘
//!
//! string  ┌───────────────┬──────────────────┬────────────┬─────────┐
//!         │ length (int32)│ length x UTF-16LE│ 0x0000 NUL │ padding │
//!         └───────────────┴──────────────────┴────────────┴─────────┘
//! ```
//!
//! An absent string is written as length `-1` with no body.

use byteorder::{ByteOrder, LittleEndian};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::{
    constants::{INT32_SIZE, NULL_LIST_COUNT, NULL_STRING_LENGTH, PARCEL_ALIGNMENT},
    error::{Error, Result},
};

/// Bytes needed after `len` to reach the parcel alignment
fn padding_for(len: usize) -> usize {
    (PARCEL_ALIGNMENT - len % PARCEL_ALIGNMENT) % PARCEL_ALIGNMENT
}

/// Aligned size of a string body of `units_len` UTF-16 units plus NUL
fn padded_string_size(units_len: usize) -> Option<usize> {
    let body = units_len.checked_mul(2)?.checked_add(2)?;
    body.checked_add(padding_for(body))
}

/// A value that can be written to and read back from a parcel
pub trait Parcelable: Sized {
    /// Write this value's fields in wire order
    fn write_to_parcel(&self, parcel: &mut ParcelWriter);

    /// Read a value written by [`Parcelable::write_to_parcel`]
    fn read_from_parcel(parcel: &mut ParcelReader) -> Result<Self>;

    /// Encode to a standalone parcel
    fn encode(&self) -> BytesMut {
        let mut parcel = ParcelWriter::new();
        self.write_to_parcel(&mut parcel);
        parcel.into_bytes()
    }

    /// Decode from the start of a parcel
    ///
    /// Bytes after the value are left unread and ignored.
    fn decode(buf: impl Into<Bytes>) -> Result<Self> {
        let mut parcel = ParcelReader::new(buf);
        Self::read_from_parcel(&mut parcel)
    }
}

/// Parcel writer
///
/// # Examples
///
/// ```
/// use cecinfo_core::ParcelWriter;
///
/// let mut parcel = ParcelWriter::new();
/// parcel.write_i32(7);
/// parcel.write_string(Some("TV"));
/// assert_eq!(parcel.len(), 4 + 4 + 8);
/// ```
#[derive(Debug, Default)]
pub struct ParcelWriter {
    buf: BytesMut,
}

impl ParcelWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    /// Write an unsigned value using its int32 bit pattern
    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    /// Write a length-prefixed UTF-16 string, or `-1` when absent
    pub fn write_string(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            self.write_i32(NULL_STRING_LENGTH);
            return;
        };

        let units: Vec<u16> = value.encode_utf16().collect();
        self.write_i32(units.len() as i32);

        // Terminator and padding stay zeroed
        let start = self.buf.len();
        let body = (units.len() + 1) * 2;
        self.buf.resize(start + body + padding_for(body), 0);
        LittleEndian::write_u16_into(&units, &mut self.buf[start..start + units.len() * 2]);
    }

    pub fn write_parcelable<T: Parcelable>(&mut self, value: &T) {
        value.write_to_parcel(self);
    }

    /// Write a typed list: count, then a non-null marker and each element
    pub fn write_typed_list<T: Parcelable>(&mut self, values: &[T]) {
        self.write_i32(values.len() as i32);
        for value in values {
            self.write_i32(1);
            value.write_to_parcel(self);
        }
    }

    /// Write an absent typed list
    pub fn write_null_list(&mut self) {
        self.write_i32(NULL_LIST_COUNT);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> BytesMut {
        trace!(
            len = self.buf.len(),
            head = hex::encode(&self.buf[..self.buf.len().min(32)]),
            "Encoded parcel"
        );
        self.buf
    }
}

/// Parcel reader
///
/// # Examples
///
/// ```
/// use cecinfo_core::{ParcelReader, ParcelWriter};
///
/// let mut writer = ParcelWriter::new();
/// writer.write_i32(-1);
/// writer.write_string(None);
///
/// let mut reader = ParcelReader::new(writer.into_bytes());
/// assert_eq!(reader.read_i32().unwrap(), -1);
/// assert_eq!(reader.read_string().unwrap(), None);
/// reader.finish().unwrap();
/// ```
#[derive(Debug)]
pub struct ParcelReader {
    buf: Bytes,
}

impl ParcelReader {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self { buf: buf.into() }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn ensure(&self, field: &'static str, needed: usize) -> Result<()> {
        if self.buf.remaining() < needed {
            return Err(Error::Underflow {
                field,
                needed,
                remaining: self.buf.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.ensure("int32", INT32_SIZE)?;
        Ok(self.buf.get_i32_le())
    }

    /// Read an int32 as its unsigned bit pattern
    pub fn read_u32(&mut self) -> Result<u32> {
        self.ensure("int32", INT32_SIZE)?;
        Ok(self.buf.get_u32_le())
    }

    /// Read a length-prefixed UTF-16 string; `None` when absent
    pub fn read_string(&mut self) -> Result<Option<String>> {
        self.ensure("string length", INT32_SIZE)?;
        let len = self.buf.get_i32_le();

        if len == NULL_STRING_LENGTH {
            return Ok(None);
        }
        let units_len = usize::try_from(len).map_err(|_| Error::InvalidString {
            reason: format!("negative length {}", len),
        })?;

        let padded = padded_string_size(units_len).ok_or_else(|| Error::InvalidString {
            reason: format!("length {} too large", len),
        })?;
        self.ensure("string body", padded)?;

        let text_size = units_len * 2;

        let raw = self.buf.split_to(padded);
        if raw[text_size..text_size + 2] != [0, 0] {
            return Err(Error::InvalidString {
                reason: "missing NUL terminator".to_string(),
            });
        }

        let mut units = vec![0u16; units_len];
        LittleEndian::read_u16_into(&raw[..text_size], &mut units);

        let value = String::from_utf16(&units).map_err(|e| Error::InvalidString {
            reason: e.to_string(),
        })?;

        trace!(len = units_len, "Decoded string");

        Ok(Some(value))
    }

    pub fn read_parcelable<T: Parcelable>(&mut self) -> Result<T> {
        T::read_from_parcel(self)
    }

    /// Read a typed list written by [`ParcelWriter::write_typed_list`]
    ///
    /// An absent list reads as empty.
    pub fn read_typed_list<T: Parcelable>(&mut self) -> Result<Vec<T>> {
        let count = self.read_i32()?;
        if count == NULL_LIST_COUNT {
            return Ok(Vec::new());
        }
        let count = usize::try_from(count).map_err(|_| Error::OutOfRange {
            field: "list count",
            value: count.into(),
        })?;

        // Each element carries at least its marker
        self.ensure("typed list", count.saturating_mul(INT32_SIZE))?;

        let mut values = Vec::with_capacity(count);
        for index in 0..count {
            if self.read_i32()? == 0 {
                return Err(Error::NullElement { index });
            }
            values.push(T::read_from_parcel(self)?);
        }

        Ok(values)
    }

    /// Fail unless every byte has been consumed
    pub fn finish(self) -> Result<()> {
        match self.buf.remaining() {
            0 => Ok(()),
            remaining => Err(Error::TrailingBytes { remaining }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_padding_for() {
        assert_eq!(padding_for(0), 0);
        assert_eq!(padding_for(1), 3);
        assert_eq!(padding_for(4), 0);
        assert_eq!(padding_for(6), 2);
    }

    #[test]
    fn test_padded_string_size() {
        assert_eq!(padded_string_size(0), Some(4));
        assert_eq!(padded_string_size(2), Some(8));
        assert_eq!(padded_string_size(3), Some(8));
    }

    #[test]
    fn test_padded_string_size_overflow() {
        // Body fits, NUL terminator does not
        assert_eq!(padded_string_size(usize::MAX / 2), None);
        assert_eq!(padded_string_size(usize::MAX), None);
        assert_eq!(padded_string_size(usize::MAX / 2 - 1), None);
    }

    #[test]
    fn test_string_max_length_is_error() {
        let mut writer = ParcelWriter::new();
        writer.write_i32(i32::MAX);
        writer.write_i32(0);

        let mut reader = ParcelReader::new(writer.into_bytes());
        let err = reader.read_string().unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_int_layout() {
        let mut parcel = ParcelWriter::new();
        parcel.write_i32(-1);
        parcel.write_u32(0x001A);

        assert_eq!(
            parcel.into_bytes().as_ref(),
            &[0xFF, 0xFF, 0xFF, 0xFF, 0x1A, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_string_layout() {
        let mut parcel = ParcelWriter::new();
        parcel.write_string(Some("TV"));

        // length 2, 'T' 'V', NUL, 2 bytes padding
        assert_eq!(
            parcel.into_bytes().as_ref(),
            &[2, 0, 0, 0, b'T', 0, b'V', 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_string_odd_length_layout() {
        let mut parcel = ParcelWriter::new();
        parcel.write_string(Some("abc"));

        // 3 units + NUL = 8 bytes, already aligned
        assert_eq!(parcel.len(), 4 + 8);
    }

    #[test]
    fn test_null_and_empty_strings() {
        let mut writer = ParcelWriter::new();
        writer.write_string(None);
        writer.write_string(Some(""));
        let bytes = writer.into_bytes();

        assert_eq!(bytes.as_ref(), &[0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0, 0, 0, 0, 0]);

        let mut reader = ParcelReader::new(bytes);
        assert_eq!(reader.read_string().unwrap(), None);
        assert_eq!(reader.read_string().unwrap(), Some(String::new()));
        reader.finish().unwrap();
    }

    #[test]
    fn test_non_ascii_string() {
        let name = "Télé 📺";
        let mut writer = ParcelWriter::new();
        writer.write_string(Some(name));

        let mut reader = ParcelReader::new(writer.into_bytes());
        assert_eq!(reader.read_string().unwrap().as_deref(), Some(name));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_int_underflow() {
        let mut reader = ParcelReader::new(vec![1u8, 2, 3]);
        let err = reader.read_i32().unwrap_err();

        assert!(err.is_malformed_input());
        assert!(matches!(
            err,
            Error::Underflow { needed: 4, remaining: 3, .. }
        ));
    }

    #[test]
    fn test_string_missing_length() {
        let mut reader = ParcelReader::new(Bytes::new());
        assert!(matches!(
            reader.read_string(),
            Err(Error::Underflow { field: "string length", .. })
        ));
    }

    #[test]
    fn test_string_truncated_body() {
        let mut writer = ParcelWriter::new();
        writer.write_string(Some("Projector"));
        let mut bytes = writer.into_bytes();
        bytes.truncate(bytes.len() - 4);

        let mut reader = ParcelReader::new(bytes);
        assert!(matches!(
            reader.read_string(),
            Err(Error::Underflow { field: "string body", .. })
        ));
    }

    #[test]
    fn test_string_negative_length() {
        let mut writer = ParcelWriter::new();
        writer.write_i32(-2);

        let mut reader = ParcelReader::new(writer.into_bytes());
        assert!(matches!(reader.read_string(), Err(Error::InvalidString { .. })));
    }

    #[test]
    fn test_string_missing_terminator() {
        let mut writer = ParcelWriter::new();
        writer.write_string(Some("TV"));
        let mut bytes = writer.into_bytes();
        bytes[8] = b'!';

        let mut reader = ParcelReader::new(bytes);
        assert!(matches!(reader.read_string(), Err(Error::InvalidString { .. })));
    }

    #[test]
    fn test_string_invalid_utf16() {
        let mut writer = ParcelWriter::new();
        writer.write_i32(1);
        // Lone high surrogate
        writer.write_u32(0x0000_D800);

        let mut reader = ParcelReader::new(writer.into_bytes());
        assert!(matches!(reader.read_string(), Err(Error::InvalidString { .. })));
    }

    #[test]
    fn test_finish_trailing_bytes() {
        let mut writer = ParcelWriter::new();
        writer.write_i32(1);
        writer.write_i32(2);

        let mut reader = ParcelReader::new(writer.into_bytes());
        reader.read_i32().unwrap();
        assert!(matches!(
            reader.finish(),
            Err(Error::TrailingBytes { remaining: 4 })
        ));
    }

    #[test]
    fn test_list_count_bounded_by_buffer() {
        let mut writer = ParcelWriter::new();
        writer.write_i32(i32::MAX);

        let mut reader = ParcelReader::new(writer.into_bytes());
        let result: Result<Vec<cecinfo_types::DeviceInfo>> = reader.read_typed_list();
        assert!(matches!(result, Err(Error::Underflow { field: "typed list", .. })));
    }

    #[test]
    fn test_list_negative_count() {
        let mut writer = ParcelWriter::new();
        writer.write_i32(-5);

        let mut reader = ParcelReader::new(writer.into_bytes());
        let result: Result<Vec<cecinfo_types::DeviceInfo>> = reader.read_typed_list();
        assert!(matches!(result, Err(Error::OutOfRange { value: -5, .. })));
    }

    #[test]
    fn test_null_list_reads_empty() {
        let mut writer = ParcelWriter::new();
        writer.write_null_list();

        let mut reader = ParcelReader::new(writer.into_bytes());
        let values: Vec<cecinfo_types::DeviceInfo> = reader.read_typed_list().unwrap();
        assert!(values.is_empty());
        reader.finish().unwrap();
    }
}
