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

//! Deflate (RFC 1951) decoding using the flate2 library.

use std::io::Read;

use super::FilterError;

/// Inflates a raw deflate stream into a flat buffer.
pub fn inflate(data: &[u8]) -> Result<Vec<u8>, FilterError> {
    let mut decoder = flate2::read::DeflateDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(FilterError::Inflate)?;
    Ok(out)
}

#[cfg(test)]
#[path = "deflate_test.rs"]
mod tests;
