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

//! Tests for table tags

use super::*;

#[test]
fn test_tag_read() {
    let mut reader = std::io::Cursor::new(&b"CFF ");
    let result = FontTag::from_reader(&mut reader);
    assert!(result.is_ok());
    let tag = result.unwrap();
    assert_eq!(tag, FontTag::CFF);
}

#[test]
fn test_tag_read_with_short_buffer() {
    let mut reader = std::io::Cursor::new(&b"CF");
    let result = FontTag::from_reader(&mut reader);
    assert!(result.is_err());
    let err = result.err().unwrap();
    assert!(matches!(err, DumpError::IoError(_)));
}

#[test]
fn test_tag_display() {
    let tag = FontTag::new(*b"CFF ");
    assert_eq!(format!("{}", tag), "CFF ");
}

#[test]
fn test_tag_debug() {
    let tag = FontTag::new(*b"CFF ");
    assert_eq!(format!("{:?}", tag), "FontTag(CFF )");
}
