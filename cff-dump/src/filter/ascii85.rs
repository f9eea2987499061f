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

//! ASCII-85 decoding source.

use super::{is_ps_whitespace, ByteSource, FilterError};

/// Decodes groups of five characters in `!`..=`u` into four bytes.
/// `z` at a group boundary expands to four zero bytes; `~` ends the
/// stream. A partial final group of k characters contributes k-1 bytes,
/// padded with `u`.
pub struct Ascii85Source<S> {
    inner: S,
    out: [u8; 4],
    out_len: usize,
    out_pos: usize,
    done: bool,
}

impl<S: ByteSource> Ascii85Source<S> {
    /// Creates an ASCII-85 decoding source over `inner`.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            out: [0; 4],
            out_len: 0,
            out_pos: 0,
            done: false,
        }
    }

    fn refill(&mut self) -> Result<(), FilterError> {
        let mut group = [0u32; 5];
        let mut len = 0usize;
        loop {
            match self.inner.next_byte()? {
                None | Some(b'~') => {
                    self.done = true;
                    break;
                }
                Some(b'z') if len == 0 => {
                    self.out = [0; 4];
                    self.out_len = 4;
                    self.out_pos = 0;
                    return Ok(());
                }
                Some(b) if is_ps_whitespace(b) => continue,
                Some(b @ 33..=117) => {
                    group[len] = (b - 33) as u32;
                    len += 1;
                    if len == 5 {
                        break;
                    }
                }
                Some(b) => return Err(FilterError::BadAscii85Byte(b)),
            }
        }
        if len == 0 {
            self.out_len = 0;
            self.out_pos = 0;
            return Ok(());
        }
        if len == 1 {
            return Err(FilterError::Ascii85TruncatedGroup);
        }
        // Missing characters of a partial group are padded with 'u'.
        let produced = len - 1;
        for slot in group.iter_mut().skip(len) {
            *slot = (b'u' - 33) as u32;
        }
        let mut value: u64 = 0;
        for digit in group {
            value = value * 85 + digit as u64;
        }
        if value > u32::MAX as u64 {
            return Err(FilterError::Ascii85Overflow);
        }
        self.out = (value as u32).to_be_bytes();
        self.out_len = if self.done { produced } else { 4 };
        self.out_pos = 0;
        Ok(())
    }
}

impl<S: ByteSource> ByteSource for Ascii85Source<S> {
    fn next_byte(&mut self) -> Result<Option<u8>, FilterError> {
        if self.out_pos == self.out_len {
            if self.done {
                return Ok(None);
            }
            self.refill()?;
            if self.out_len == 0 {
                return Ok(None);
            }
        }
        let b = self.out[self.out_pos];
        self.out_pos += 1;
        Ok(Some(b))
    }
}

#[cfg(test)]
#[path = "ascii85_test.rs"]
mod tests;
