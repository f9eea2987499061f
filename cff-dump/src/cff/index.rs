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

//! CFF INDEX structures.
//!
//! An INDEX is a 16-bit count, an offset size in 1..=4, `count + 1`
//! offsets relative to a shared origin, and the element payload. The
//! origin is the byte that precedes the payload, so the first offset is
//! always 1.

use crate::{error::DumpError, messages::Messages, reader::ByteReader};

/// A parsed INDEX. Elements are addressed as absolute byte ranges in
/// the underlying buffer; payload bytes are not copied.
pub struct CffIndex {
    start: usize,
    count: usize,
    off_size: u8,
    origin: usize,
    offsets: Vec<u32>,
    end: usize,
}

impl CffIndex {
    /// Parses an INDEX at the reader's current position, leaving the
    /// reader positioned after the payload. Offset violations are
    /// recorded as errors but do not abort the parse.
    pub fn parse(
        reader: &mut ByteReader<'_>,
        messages: &mut Messages,
    ) -> Result<Self, DumpError> {
        let start = reader.position();
        let count = reader.read_u16()? as usize;
        if count == 0 {
            // No offset-size byte and no payload.
            return Ok(Self {
                start,
                count,
                off_size: 0,
                origin: reader.position(),
                offsets: Vec::new(),
                end: reader.position(),
            });
        }
        let off_size = reader.read_off_size()?;
        let array_start = reader.position();
        let origin = array_start + off_size as usize * (count + 1) - 1;
        let mut offsets = Vec::with_capacity(count + 1);
        for _ in 0..count + 1 {
            offsets.push(reader.read_off(off_size)?);
        }
        if offsets[0] != 1 {
            messages.error(format!(
                "First INDEX offset is {} instead of 1 (INDEX at 0x{start:X})",
                offsets[0]
            ));
        }
        if offsets.windows(2).any(|pair| pair[0] > pair[1]) {
            messages.error(format!(
                "INDEX at 0x{start:X} has decreasing offsets"
            ));
        }
        let mut end = origin + offsets[count] as usize;
        if end > reader.capacity() {
            messages.error(format!(
                "INDEX at 0x{start:X} runs past the end of the data"
            ));
            end = reader.capacity();
        }
        reader.set_position(end);
        Ok(Self {
            start,
            count,
            off_size,
            origin,
            offsets,
            end,
        })
    }

    /// Position of the INDEX's count field.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Declared offset size; 0 for an empty INDEX.
    pub fn off_size(&self) -> u8 {
        self.off_size
    }

    /// Whether the INDEX holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The raw offset array, for the `--offsets` dump.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Position one past the last payload byte.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Absolute `[start, end)` byte range of element `i`, clamped to the
    /// payload so corrupt offsets cannot address foreign data.
    pub fn range(&self, i: usize) -> Option<(usize, usize)> {
        if i >= self.count {
            return None;
        }
        let from = (self.origin + self.offsets[i] as usize).min(self.end);
        let to = (self.origin + self.offsets[i + 1] as usize).min(self.end);
        Some((from.min(to), to))
    }

    /// Computes the subroutine-number bias for an INDEX of `count`
    /// elements.
    pub fn bias_for_count(count: usize) -> i32 {
        if count < 1240 {
            107
        } else if count < 33900 {
            1131
        } else {
            32768
        }
    }

    /// The bias applied to subroutine operands referencing this INDEX.
    pub fn bias(&self) -> i32 {
        Self::bias_for_count(self.count)
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
