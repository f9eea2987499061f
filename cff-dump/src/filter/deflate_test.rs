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

//! Tests for the deflate filter.

use std::io::Write;

use super::*;

#[test]
fn test_inflate_roundtrip() {
    let plain = b"CFF data, deflated for embedding.";
    let mut encoder = flate2::write::DeflateEncoder::new(
        Vec::new(),
        flate2::Compression::default(),
    );
    encoder.write_all(plain).unwrap();
    let compressed = encoder.finish().unwrap();
    assert_eq!(inflate(&compressed).unwrap(), plain);
}

#[test]
fn test_corrupt_stream_fails() {
    assert!(matches!(
        inflate(&[0xFF, 0xFF, 0xFF, 0xFF]),
        Err(FilterError::Inflate(_))
    ));
}
