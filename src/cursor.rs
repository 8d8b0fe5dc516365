//! Bounded little-endian primitive readers shared by the header and body decoders.

use crate::{PoseError, Result};

/// Forward read cursor over an immutable byte slice. All reads are little-endian
/// and fail with [`PoseError::TruncatedBuffer`] instead of reading past the end.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Remaining bytes from current position.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Seek to an absolute position. Seeking past the end is allowed; the next
    /// read reports truncation.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    fn take<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N]> {
        if self.remaining() < N {
            return Err(PoseError::truncated(context, self.pos, N, self.remaining()));
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(bytes)
    }

    pub fn read_u16(&mut self, context: &'static str) -> Result<u16> {
        self.take::<2>(context).map(u16::from_le_bytes)
    }

    pub fn read_i16(&mut self, context: &'static str) -> Result<i16> {
        self.take::<2>(context).map(i16::from_le_bytes)
    }

    pub fn read_f32(&mut self, context: &'static str) -> Result<f32> {
        self.take::<4>(context).map(f32::from_le_bytes)
    }

    /// Read a NUL-terminated string and consume its terminator.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn read_cstring(&mut self, context: &'static str) -> Result<String> {
        let rest = self.data.get(self.pos..).unwrap_or_default();
        let Some(len) = rest.iter().position(|&b| b == 0) else {
            // The terminator itself is the missing byte
            return Err(PoseError::truncated(context, self.pos, rest.len() + 1, rest.len()));
        };
        let text = String::from_utf8_lossy(&rest[..len]).into_owned();
        self.pos += len + 1;
        Ok(text)
    }
}
