// Copyright 2024-2025 Monotype Imaging Inc.
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Positionable big-endian cursor over an in-memory byte slice.
//!
//! Unlike a plain [`std::io::Cursor`], this reader carries a movable
//! *limit* which masks the visible tail of the buffer. Charstring
//! execution enters a subroutine by narrowing the limit to the
//! subroutine's end offset and restores it on return; the limit is the
//! only thing that stops the interpreter from running past a corrupt
//! length into the next glyph's bytes.

use crate::error::DumpError;

/// A cursor over `&[u8]` with big-endian typed reads and a movable limit.
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    limit: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a reader over the whole slice, with the limit at capacity.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            limit: data.len(),
        }
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the read position. Positions past the limit are legal until a
    /// read is attempted.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Current limit (exclusive upper bound of readable data).
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Narrows or widens the visible window. Clamped to capacity.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.min(self.data.len());
    }

    /// Total capacity of the underlying buffer, ignoring the limit.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes left below the current limit.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.pos)
    }

    /// Runs `f` with the limit moved to `end`, restoring the previous
    /// limit on all exit paths.
    pub fn with_limit<R>(
        &mut self,
        end: usize,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let saved = self.limit;
        self.set_limit(end);
        let result = f(self);
        self.limit = saved;
        result
    }

    /// Runs `f` with both position and limit moved to the `[start, end)`
    /// window, restoring both afterwards. This is the subroutine-call
    /// discipline: the caller's cursor is untouched by whatever happens
    /// inside the frame.
    pub fn with_frame<R>(
        &mut self,
        start: usize,
        end: usize,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let saved_pos = self.pos;
        let saved_limit = self.limit;
        self.pos = start;
        self.set_limit(end);
        let result = f(self);
        self.pos = saved_pos;
        self.limit = saved_limit;
        result
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], DumpError> {
        if self.remaining() < count {
            return Err(DumpError::ShortRead {
                offset: self.pos,
                wanted: count - self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }

    /// Reads one unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8, DumpError> {
        Ok(self.take(1)?[0])
    }

    /// Reads a big-endian unsigned 16-bit value.
    pub fn read_u16(&mut self) -> Result<u16, DumpError> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Reads a big-endian unsigned 24-bit value.
    pub fn read_u24(&mut self) -> Result<u32, DumpError> {
        let b = self.take(3)?;
        Ok(u32::from_be_bytes([0, b[0], b[1], b[2]]))
    }

    /// Reads a big-endian unsigned 32-bit value.
    pub fn read_u32(&mut self) -> Result<u32, DumpError> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads a big-endian signed 16-bit value.
    pub fn read_i16(&mut self) -> Result<i16, DumpError> {
        Ok(self.read_u16()? as i16)
    }

    /// Reads a big-endian signed 32-bit value.
    pub fn read_i32(&mut self) -> Result<i32, DumpError> {
        Ok(self.read_u32()? as i32)
    }

    /// Reads an INDEX offset size; only 1 through 4 are legal.
    pub fn read_off_size(&mut self) -> Result<u8, DumpError> {
        let off_size = self.read_u8()?;
        if !(1..=4).contains(&off_size) {
            return Err(DumpError::BadOffsetSize(off_size));
        }
        Ok(off_size)
    }

    /// Reads an `off_size`-byte big-endian unsigned offset.
    pub fn read_off(&mut self, off_size: u8) -> Result<u32, DumpError> {
        match off_size {
            1 => Ok(self.read_u8()? as u32),
            2 => Ok(self.read_u16()? as u32),
            3 => self.read_u24(),
            _ => self.read_u32(),
        }
    }

    /// Reads `count` raw bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], DumpError> {
        self.take(count)
    }

    /// Peeks the next byte without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        if self.pos < self.limit {
            Some(self.data[self.pos])
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "reader_test.rs"]
mod tests;
