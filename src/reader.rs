//! Byte reader for session payloads
//!
//! Thin cursor over a decoded payload. Multi-byte integers are Big Endian,
//! which is what the legacy session layouts use.

use byteorder::{BigEndian, ReadBytesExt};
use std::io::{Cursor, Seek, SeekFrom};

use crate::{Error, Result};

/// Sequential reader over a borrowed byte slice
pub struct ByteReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> ByteReader<'a> {
    /// Create a new reader positioned at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    /// Get current position in the payload
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Check if we've reached the end of the payload
    pub fn at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Get remaining bytes count
    pub fn remaining(&self) -> usize {
        let pos = self.cursor.position() as usize;
        let len = self.cursor.get_ref().len();
        len.saturating_sub(pos)
    }

    fn eof(&self) -> Error {
        Error::UnexpectedEof {
            offset: self.position(),
        }
    }

    /// Skip n bytes
    pub fn skip(&mut self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(self.eof());
        }
        self.cursor
            .seek(SeekFrom::Current(n as i64))
            .map_err(|_| self.eof())?;
        Ok(())
    }

    /// Read a single byte
    pub fn read_u8(&mut self) -> Result<u8> {
        self.cursor.read_u8().map_err(|_| self.eof())
    }

    /// Read a single byte as a flag, nonzero meaning `true`
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read an unsigned 16-bit integer - Big Endian
    pub fn read_u16(&mut self) -> Result<u16> {
        self.cursor
            .read_u16::<BigEndian>()
            .map_err(|_| self.eof())
    }

    /// Borrow the next `len` bytes without copying
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(self.eof());
        }

        let data: &'a [u8] = *self.cursor.get_ref();
        let start = self.cursor.position() as usize;
        self.cursor.set_position((start + len) as u64);
        Ok(&data[start..start + len])
    }

    /// Borrow everything that has not been read yet
    pub fn read_rest(&mut self) -> &'a [u8] {
        let data: &'a [u8] = *self.cursor.get_ref();
        let start = (self.cursor.position() as usize).min(data.len());
        self.cursor.set_position(data.len() as u64);
        &data[start..]
    }
}
