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

//! Input filters applied ahead of the structural parsers.
//!
//! Each decoder is a byte source wrapping another byte source, so they
//! compose left to right. The controller drains a composed chain into a
//! flat buffer before parsing begins; the Type 1 tokenizer additionally
//! installs the eexec decryptor over its live source when it reaches the
//! `eexec` keyword.

mod ascii85;
mod ascii_hex;
mod deflate;
mod eexec;
mod pfb;

pub use ascii85::Ascii85Source;
pub use ascii_hex::AsciiHexSource;
pub use deflate::inflate;
pub use eexec::{charstring_decrypt, EexecSource, CHARSTRING_KEY, EEXEC_KEY};
pub use pfb::strip_pfb;

/// Errors raised by the input filters. Filter failures are fatal for the
/// font being dumped.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// ASCII-85 group decodes to a value above 2^32 - 1.
    #[error("ASCII-85 group overflows 32 bits")]
    Ascii85Overflow,
    /// The final ASCII-85 group had a single character, which encodes
    /// nothing.
    #[error("Truncated ASCII-85 group of one character")]
    Ascii85TruncatedGroup,
    /// A byte outside the ASCII-85 alphabet was encountered.
    #[error("Illegal character 0x{0:02X} in ASCII-85 data")]
    BadAscii85Byte(u8),
    /// A byte that is neither a hex digit nor whitespace was encountered.
    #[error("Illegal character 0x{0:02X} in ASCII-hex data")]
    BadHexDigit(u8),
    /// A PFB segment header did not start with the 0x80 magic byte.
    #[error("Bad PFB segment magic 0x{0:02X}; expected 0x80")]
    BadPfbMagic(u8),
    /// A PFB segment header carried an unknown type code.
    #[error("Bad PFB segment type {0}; expected 1, 2 or 3")]
    BadPfbSegmentType(u8),
    /// The eexec-encrypted region ended before its four seed bytes.
    #[error("eexec data ends before the four initialization bytes")]
    EexecTooShort,
    /// The deflate stream was corrupt.
    #[error("Corrupt deflate stream: {0}")]
    Inflate(std::io::Error),
    /// A PFB segment claimed more bytes than remain in the input.
    #[error("PFB segment length {0} overruns the input")]
    PfbSegmentOverrun(u32),
}

/// A pull-based byte source. `None` signals a clean end of stream.
pub trait ByteSource {
    /// Produces the next byte, or `None` at end of stream.
    fn next_byte(&mut self) -> Result<Option<u8>, FilterError>;
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn next_byte(&mut self) -> Result<Option<u8>, FilterError> {
        (**self).next_byte()
    }
}

/// Byte source over a plain slice.
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Creates a source reading the slice front to back.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> Result<Option<u8>, FilterError> {
        match self.data.get(self.pos) {
            Some(b) => {
                self.pos += 1;
                Ok(Some(*b))
            }
            None => Ok(None),
        }
    }
}

/// Byte source that replays a handful of already-consumed bytes before
/// continuing with the wrapped source. Used when a decoder has to sniff
/// a few bytes (e.g. the eexec hex-vs-binary decision) and then hand them
/// back.
pub struct PrependSource<S> {
    head: Vec<u8>,
    head_pos: usize,
    inner: S,
}

impl<S: ByteSource> PrependSource<S> {
    /// Creates a source yielding `head` first, then `inner`.
    pub fn new(head: Vec<u8>, inner: S) -> Self {
        Self {
            head,
            head_pos: 0,
            inner,
        }
    }
}

impl<S: ByteSource> ByteSource for PrependSource<S> {
    fn next_byte(&mut self) -> Result<Option<u8>, FilterError> {
        if self.head_pos < self.head.len() {
            let b = self.head[self.head_pos];
            self.head_pos += 1;
            return Ok(Some(b));
        }
        self.inner.next_byte()
    }
}

/// Drains a byte source to completion.
pub fn drain(source: &mut dyn ByteSource) -> Result<Vec<u8>, FilterError> {
    let mut out = Vec::new();
    while let Some(b) = source.next_byte()? {
        out.push(b);
    }
    Ok(out)
}

pub(crate) fn is_ps_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x00 | 0x0C)
}

pub(crate) fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
