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

//! Tests for the ASCII-85 filter.

use super::*;
use crate::filter::{drain, SliceSource};

fn decode(input: &[u8]) -> Result<Vec<u8>, FilterError> {
    drain(&mut Ascii85Source::new(SliceSource::new(input)))
}

#[test]
fn test_full_groups() {
    // "easy" encodes as "ARTY*" in base-85.
    assert_eq!(decode(b"ARTY*").unwrap(), b"easy");
    // Whitespace between groups is skipped; "DZ" is a two-character
    // partial group contributing the final byte.
    assert_eq!(decode(b"87cUR DZ").unwrap(), b"Hello");
}

#[test]
fn test_z_shortcut() {
    assert_eq!(decode(b"z").unwrap(), vec![0, 0, 0, 0]);
    assert_eq!(decode(b"zz~").unwrap(), vec![0; 8]);
}

#[test]
fn test_partial_final_group() {
    // Four characters yield three bytes.
    assert_eq!(decode(b"ARTX~").unwrap(), b"eas");
    // Two characters yield one byte.
    assert_eq!(decode(b"AR").unwrap(), b"e");
}

#[test]
fn test_single_leftover_character_fails() {
    assert!(matches!(
        decode(b"ARTY*A"),
        Err(FilterError::Ascii85TruncatedGroup)
    ));
}

#[test]
fn test_group_overflow_fails() {
    // "uuuuu" decodes above 2^32 - 1.
    assert!(matches!(decode(b"uuuuu"), Err(FilterError::Ascii85Overflow)));
}

#[test]
fn test_illegal_byte_fails() {
    assert!(matches!(
        decode(b"AR\x7FY*"),
        Err(FilterError::BadAscii85Byte(0x7F))
    ));
}
