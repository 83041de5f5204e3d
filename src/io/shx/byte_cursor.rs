//! Sequential reader over an in-memory SHX buffer

use crate::error::Result;
use byteorder::{LittleEndian, ReadBytesExt};
use encoding_rs::Encoding;
use std::io::{self, Cursor};

/// Typed primitive reads over a byte buffer.
///
/// Every read fails with an `UnexpectedEof` I/O error when fewer bytes
/// remain than required; the SHX parsers turn it into a file structure error.
pub struct ByteCursor<'a> {
    stream: Cursor<&'a [u8]>,
    encoding: &'static Encoding,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at `position`
    pub fn new(data: &'a [u8], position: usize) -> Self {
        let mut stream = Cursor::new(data);
        stream.set_position(position as u64);
        Self {
            stream,
            encoding: encoding_rs::WINDOWS_1252,
        }
    }

    /// Set the text encoding of [`read_str`](Self::read_str).
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn position(&self) -> usize {
        self.stream.position() as usize
    }

    pub fn remaining(&self) -> usize {
        self.stream.get_ref().len().saturating_sub(self.position())
    }

    pub fn has_data(&self) -> bool {
        self.remaining() > 0
    }

    fn ensure(&self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("{} bytes required at offset {}", n, self.position()),
            )
            .into());
        }
        Ok(())
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.stream.set_position((self.position() + n) as u64);
        Ok(())
    }

    pub fn u8(&mut self) -> Result<u8> {
        Ok(self.stream.read_u8()?)
    }

    /// Signed byte of the shape format: values above 127 map to
    /// `(value & 127) - 128`, which is not two's complement.
    pub fn i8(&mut self) -> Result<i32> {
        let value = self.u8()? as i32;
        if value > 127 {
            Ok((value & 127) - 128)
        } else {
            Ok(value)
        }
    }

    /// Octant specification byte: the high bit negates the low 7 bits.
    pub fn octant(&mut self) -> Result<i32> {
        let value = self.u8()? as i32;
        if value & 128 != 0 {
            Ok(-(value & 127))
        } else {
            Ok(value)
        }
    }

    /// Little-endian unsigned 16-bit value
    pub fn u16(&mut self) -> Result<u16> {
        Ok(self.stream.read_u16::<LittleEndian>()?)
    }

    /// Read a NUL terminated string, the terminator is consumed.
    pub fn read_str(&mut self) -> Result<String> {
        let start = self.position();
        let data = *self.stream.get_ref();
        let length = data
            .get(start..)
            .unwrap_or_default()
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "string terminator not found")
            })?;
        let (text, _, _) = self.encoding.decode(&data[start..start + length]);
        self.stream.set_position((start + length + 1) as u64);
        Ok(text.into_owned())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let start = self.position();
        let data = *self.stream.get_ref();
        self.stream.set_position((start + n) as u64);
        Ok(&data[start..start + n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeFileError;

    #[test]
    fn test_i8_rule() {
        let data = [0x05, 0x7F, 0x80, 0x85, 0xFF];
        let mut cursor = ByteCursor::new(&data, 0);
        assert_eq!(cursor.i8().unwrap(), 5);
        assert_eq!(cursor.i8().unwrap(), 127);
        assert_eq!(cursor.i8().unwrap(), -128);
        assert_eq!(cursor.i8().unwrap(), -123);
        assert_eq!(cursor.i8().unwrap(), -1);
    }

    #[test]
    fn test_octant_rule() {
        let data = [0x05, 0x85, 0x80, 0x34];
        let mut cursor = ByteCursor::new(&data, 0);
        assert_eq!(cursor.octant().unwrap(), 5);
        assert_eq!(cursor.octant().unwrap(), -5);
        assert_eq!(cursor.octant().unwrap(), 0);
        assert_eq!(cursor.octant().unwrap(), 0x34);
    }

    #[test]
    fn test_u16_little_endian() {
        let data = [0x34, 0x12];
        let mut cursor = ByteCursor::new(&data, 0);
        assert_eq!(cursor.u16().unwrap(), 0x1234);
        assert!(!cursor.has_data());
    }

    #[test]
    fn test_read_str() {
        let data = b"NAME\0\x01";
        let mut cursor = ByteCursor::new(data, 0);
        assert_eq!(cursor.read_str().unwrap(), "NAME");
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.u8().unwrap(), 1);
    }

    #[test]
    fn test_read_str_without_terminator_fails() {
        let mut cursor = ByteCursor::new(b"ABC", 0);
        assert!(matches!(cursor.read_str(), Err(ShapeFileError::Io(_))));
    }

    #[test]
    fn test_out_of_bounds() {
        let data = [1u8, 2, 3];
        let mut cursor = ByteCursor::new(&data, 2);
        assert!(cursor.u16().is_err());
        let mut cursor = ByteCursor::new(&data, 1);
        assert!(cursor.read_bytes(3).is_err());
        assert_eq!(cursor.read_bytes(2).unwrap(), &[2, 3]);
        assert!(cursor.skip(1).is_err());
        assert!(cursor.u8().is_err());
    }
}
