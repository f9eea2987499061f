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

//! The eexec stream cipher used for the private section of Type 1 fonts
//! and, with a different key, for individual charstrings.

use super::{
    hex_value, AsciiHexSource, ByteSource, FilterError, PrependSource,
};

/// Initial cipher state for the eexec-encrypted region.
pub const EEXEC_KEY: u16 = 55665;
/// Initial cipher state for individual charstrings.
pub const CHARSTRING_KEY: u16 = 4330;

const C1: u16 = 52845;
const C2: u16 = 22719;

#[inline]
fn decrypt_byte(r: &mut u16, cipher: u8) -> u8 {
    let plain = cipher ^ (*r >> 8) as u8;
    *r = (cipher as u16)
        .wrapping_add(*r)
        .wrapping_mul(C1)
        .wrapping_add(C2);
    plain
}

/// Decrypting byte source installed over the raw stream when the Type 1
/// parser reaches the `eexec` keyword.
///
/// The constructor sniffs the first four payload bytes: if all four are
/// hex digits an ASCII-hex layer is inserted below the decryptor,
/// otherwise the stream is taken as binary. The first four plaintext
/// bytes only initialize the cipher state and are discarded.
pub struct EexecSource<'a> {
    inner: Box<dyn ByteSource + 'a>,
    r: u16,
}

impl<'a> EexecSource<'a> {
    /// Installs the decryptor over `raw`, which must be positioned just
    /// past the `eexec` keyword. Whitespace (space, LF, CR, tab only) is
    /// skipped before the first payload byte.
    pub fn install(
        mut raw: Box<dyn ByteSource + 'a>,
    ) -> Result<Self, FilterError> {
        let first = loop {
            match raw.next_byte()? {
                None => return Err(FilterError::EexecTooShort),
                Some(b) if matches!(b, b' ' | b'\n' | b'\r' | b'\t') => {
                    continue
                }
                Some(b) => break b,
            }
        };
        let mut head = vec![first];
        for _ in 0..3 {
            match raw.next_byte()? {
                None => return Err(FilterError::EexecTooShort),
                Some(b) => head.push(b),
            }
        }
        let all_hex = head.iter().all(|b| hex_value(*b).is_some());
        let inner: Box<dyn ByteSource + 'a> = if all_hex {
            Box::new(AsciiHexSource::new(PrependSource::new(head, raw)))
        } else {
            Box::new(PrependSource::new(head, raw))
        };
        let mut source = Self {
            inner,
            r: EEXEC_KEY,
        };
        for _ in 0..4 {
            if source.next_byte()?.is_none() {
                return Err(FilterError::EexecTooShort);
            }
        }
        Ok(source)
    }
}

impl ByteSource for EexecSource<'_> {
    fn next_byte(&mut self) -> Result<Option<u8>, FilterError> {
        match self.inner.next_byte()? {
            Some(c) => Ok(Some(decrypt_byte(&mut self.r, c))),
            None => Ok(None),
        }
    }
}

/// Decrypts one charstring blob with the 4330 key, discarding the first
/// `len_iv` plaintext bytes. A negative `len_iv` disables decryption.
pub fn charstring_decrypt(data: &[u8], len_iv: i32) -> Vec<u8> {
    if len_iv < 0 {
        return data.to_vec();
    }
    let mut r = CHARSTRING_KEY;
    let plain: Vec<u8> =
        data.iter().map(|c| decrypt_byte(&mut r, *c)).collect();
    let skip = (len_iv as usize).min(plain.len());
    plain[skip..].to_vec()
}

#[cfg(test)]
#[path = "eexec_test.rs"]
mod tests;
