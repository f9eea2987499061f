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

//! PFB segment stripper.
//!
//! A PFB file wraps the Type 1 program in 6-byte segment headers: a 0x80
//! magic byte, a type byte (1 = text, 2 = binary, 3 = end of file) and a
//! little-endian 32-bit payload length.

use super::FilterError;

/// Strips PFB segment headers, concatenating the text and binary
/// payloads until the type-3 terminator.
pub fn strip_pfb(data: &[u8]) -> Result<Vec<u8>, FilterError> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    loop {
        let magic = *data
            .get(pos)
            .ok_or(FilterError::PfbSegmentOverrun(6))?;
        if magic != 0x80 {
            return Err(FilterError::BadPfbMagic(magic));
        }
        let kind = *data
            .get(pos + 1)
            .ok_or(FilterError::PfbSegmentOverrun(6))?;
        match kind {
            3 => return Ok(out),
            1 | 2 => {
                let header = data
                    .get(pos + 2..pos + 6)
                    .ok_or(FilterError::PfbSegmentOverrun(6))?;
                let length = u32::from_le_bytes([
                    header[0], header[1], header[2], header[3],
                ]);
                let payload = data
                    .get(pos + 6..pos + 6 + length as usize)
                    .ok_or(FilterError::PfbSegmentOverrun(length))?;
                out.extend_from_slice(payload);
                pos += 6 + length as usize;
            }
            other => return Err(FilterError::BadPfbSegmentType(other)),
        }
    }
}

#[cfg(test)]
#[path = "pfb_test.rs"]
mod tests;
