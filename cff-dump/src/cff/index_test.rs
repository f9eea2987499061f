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

//! Tests for INDEX parsing.

use super::*;

/// Builds an INDEX whose element `i` holds `(i + 1)` bytes of value `i`.
fn make_index(off_size: u8, count: usize) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&(count as u16).to_be_bytes());
    if count == 0 {
        return buf;
    }
    buf.push(off_size);
    let mut offset = 1u32;
    for i in 0..count + 1 {
        match off_size {
            1 => buf.push(offset as u8),
            2 => buf.extend_from_slice(&(offset as u16).to_be_bytes()),
            3 => buf.extend_from_slice(&offset.to_be_bytes()[1..]),
            _ => buf.extend_from_slice(&offset.to_be_bytes()),
        }
        offset += (i as u32) + 1;
    }
    for i in 0..count {
        buf.extend(std::iter::repeat(i as u8).take(i + 1));
    }
    buf
}

#[test]
fn test_index_element_ranges() {
    for off_size in 1..=4u8 {
        let data = make_index(off_size, 4);
        let mut reader = ByteReader::new(&data);
        let mut messages = Messages::new();
        let index = CffIndex::parse(&mut reader, &mut messages).unwrap();
        assert_eq!(index.count(), 4);
        assert_eq!(index.off_size(), off_size);
        assert!(!messages.has_errors());
        for i in 0..4 {
            let (from, to) = index.range(i).unwrap();
            assert_eq!(to - from, i + 1);
            assert!(data[from..to].iter().all(|b| *b == i as u8));
        }
        assert_eq!(index.range(4), None);
        // The reader is left just past the payload.
        assert_eq!(reader.position(), data.len());
        assert_eq!(index.end(), data.len());
    }
}

#[test]
fn test_empty_index_has_no_off_size_byte() {
    let data = [0x00, 0x00, 0xAB];
    let mut reader = ByteReader::new(&data);
    let mut messages = Messages::new();
    let index = CffIndex::parse(&mut reader, &mut messages).unwrap();
    assert!(index.is_empty());
    assert_eq!(reader.position(), 2);
    assert_eq!(index.end(), 2);
}

#[test]
fn test_first_offset_violation_is_reported_not_fatal() {
    // count 1, offSize 1, offsets [2, 3], payload "ab".
    let data = [0x00, 0x01, 0x01, 0x02, 0x03, b'a', b'b'];
    let mut reader = ByteReader::new(&data);
    let mut messages = Messages::new();
    let index = CffIndex::parse(&mut reader, &mut messages).unwrap();
    assert!(messages.has_errors());
    assert_eq!(index.count(), 1);
}

#[test]
fn test_decreasing_offsets_are_reported() {
    let data = [0x00, 0x02, 0x01, 0x01, 0x03, 0x02, b'a', b'b'];
    let mut reader = ByteReader::new(&data);
    let mut messages = Messages::new();
    let index = CffIndex::parse(&mut reader, &mut messages).unwrap();
    assert!(messages.has_errors());
    // Ranges are clamped so from <= to always holds.
    let (from, to) = index.range(1).unwrap();
    assert!(from <= to);
}

#[test]
fn test_overrunning_index_is_clamped() {
    // Final offset claims 200 bytes of payload that do not exist.
    let data = [0x00, 0x01, 0x01, 0x01, 0xC9, b'a', b'b'];
    let mut reader = ByteReader::new(&data);
    let mut messages = Messages::new();
    let index = CffIndex::parse(&mut reader, &mut messages).unwrap();
    assert!(messages.has_errors());
    assert_eq!(index.end(), data.len());
}

#[test]
fn test_bad_off_size_is_fatal_for_the_block() {
    let data = [0x00, 0x01, 0x07, 0x01, 0x02, b'a'];
    let mut reader = ByteReader::new(&data);
    let mut messages = Messages::new();
    assert!(matches!(
        CffIndex::parse(&mut reader, &mut messages),
        Err(DumpError::BadOffsetSize(7))
    ));
}

#[test]
fn test_subr_bias_thresholds() {
    assert_eq!(CffIndex::bias_for_count(0), 107);
    assert_eq!(CffIndex::bias_for_count(1239), 107);
    assert_eq!(CffIndex::bias_for_count(1240), 1131);
    assert_eq!(CffIndex::bias_for_count(33899), 1131);
    assert_eq!(CffIndex::bias_for_count(33900), 32768);
}
