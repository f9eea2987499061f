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

//! Locating the `CFF ` table inside an OpenType font.

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::{error::DumpError, tag::FontTag};

/// sfnt version for OpenType fonts with CFF outlines ('OTTO').
const SFNT_VERSION_OTTO: u32 = 0x4F54544F;

/// Location of the CFF table within an OpenType file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CffLocation {
    /// Byte offset of the table from the start of the file.
    pub offset: u32,
    /// Length of the table in bytes.
    pub length: u32,
}

/// Walks the sfnt table directory and returns the location of the
/// `CFF ` table.
pub fn locate_cff_table(data: &[u8]) -> Result<CffLocation, DumpError> {
    let mut reader = Cursor::new(data);
    let sfnt_version = reader.read_u32::<BigEndian>()?;
    if sfnt_version != SFNT_VERSION_OTTO {
        return Err(DumpError::NotOpenTypeCff(sfnt_version));
    }
    let num_tables = reader.read_u16::<BigEndian>()?;
    // searchRange, entrySelector and rangeShift are not needed here.
    let mut unused = [0u8; 6];
    reader.read_exact(&mut unused)?;
    for _ in 0..num_tables {
        let tag = FontTag::from_reader(&mut reader)?;
        let _checksum = reader.read_u32::<BigEndian>()?;
        let offset = reader.read_u32::<BigEndian>()?;
        let length = reader.read_u32::<BigEndian>()?;
        if tag == FontTag::CFF {
            return Ok(CffLocation { offset, length });
        }
    }
    Err(DumpError::CffTableNotFound)
}

#[cfg(test)]
#[path = "otf_test.rs"]
mod tests;
