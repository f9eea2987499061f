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

//! Tests for the OpenType CFF locator.

use super::*;

fn sfnt_with_tables(tables: &[(&[u8; 4], u32, u32)]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&SFNT_VERSION_OTTO.to_be_bytes());
    data.extend_from_slice(&(tables.len() as u16).to_be_bytes());
    data.extend_from_slice(&[0u8; 6]);
    for (tag, offset, length) in tables {
        data.extend_from_slice(*tag);
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&offset.to_be_bytes());
        data.extend_from_slice(&length.to_be_bytes());
    }
    data
}

#[test]
fn test_locates_cff_table() {
    let data =
        sfnt_with_tables(&[(b"head", 0x100, 54), (b"CFF ", 0x20, 0x400)]);
    let location = locate_cff_table(&data).unwrap();
    assert_eq!(
        location,
        CffLocation {
            offset: 0x20,
            length: 0x400
        }
    );
}

#[test]
fn test_rejects_non_otto() {
    let mut data = sfnt_with_tables(&[(b"CFF ", 0x20, 0x400)]);
    data[0..4].copy_from_slice(&0x00010000u32.to_be_bytes());
    assert!(matches!(
        locate_cff_table(&data),
        Err(DumpError::NotOpenTypeCff(0x00010000))
    ));
}

#[test]
fn test_missing_cff_table() {
    let data = sfnt_with_tables(&[(b"head", 0x100, 54)]);
    assert!(matches!(
        locate_cff_table(&data),
        Err(DumpError::CffTableNotFound)
    ));
}
