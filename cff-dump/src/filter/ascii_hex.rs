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

//! ASCII-hex decoding source.

use super::{hex_value, is_ps_whitespace, ByteSource, FilterError};

/// Decodes pairs of hex digits into bytes, skipping whitespace. The `>`
/// end-of-data marker or the end of the wrapped source terminates the
/// stream; a pending odd digit is padded with `'0'`.
pub struct AsciiHexSource<S> {
    inner: S,
    done: bool,
}

impl<S: ByteSource> AsciiHexSource<S> {
    /// Creates a hex-decoding source over `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner, done: false }
    }

    fn next_digit(&mut self) -> Result<Option<u8>, FilterError> {
        loop {
            match self.inner.next_byte()? {
                None => return Ok(None),
                Some(b'>') => {
                    self.done = true;
                    return Ok(None);
                }
                Some(b) if is_ps_whitespace(b) => continue,
                Some(b) => match hex_value(b) {
                    Some(v) => return Ok(Some(v)),
                    None => return Err(FilterError::BadHexDigit(b)),
                },
            }
        }
    }
}

impl<S: ByteSource> ByteSource for AsciiHexSource<S> {
    fn next_byte(&mut self) -> Result<Option<u8>, FilterError> {
        if self.done {
            return Ok(None);
        }
        let hi = match self.next_digit()? {
            Some(v) => v,
            None => {
                self.done = true;
                return Ok(None);
            }
        };
        // On end-of-data with one digit pending, the low nibble is '0'.
        let lo = match self.next_digit()? {
            Some(v) => v,
            None => {
                self.done = true;
                0
            }
        };
        Ok(Some((hi << 4) | lo))
    }
}

#[cfg(test)]
#[path = "ascii_hex_test.rs"]
mod tests;
