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

//! Errors related to font dumping.
//!
//! Only unrecoverable conditions travel through these types; recoverable
//! structural and interpretive problems are collected in the dump's own
//! message register so that the dump can continue past them.

/// Errors which abort the dump of a font.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// An INDEX declared an offset size outside 1..=4.
    #[error("Invalid INDEX offset size {0}; must be 1..4")]
    BadOffsetSize(u8),
    /// The CFF table was not found in an OpenType font.
    #[error("No 'CFF ' table was found in the OpenType font")]
    CffTableNotFound,
    /// An error occurred in one of the input filters.
    #[error(transparent)]
    Filter(#[from] crate::filter::FilterError),
    /// An error occurred while reading the input file.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// The input claimed to be OpenType but does not start with 'OTTO'.
    #[error("Not an OpenType font with CFF outlines; sfnt version was 0x{0:08X}")]
    NotOpenTypeCff(u32),
    /// A typed read ran past the readable window of the input.
    #[error("Unexpected end of data at offset 0x{offset:X} (wanted {wanted} more byte(s))")]
    ShortRead {
        /// Position at which the read was attempted.
        offset: usize,
        /// Number of bytes the read still needed.
        wanted: usize,
    },
    /// The font uses the multiple-master extension, which cannot be dumped.
    #[error("Multiple-master fonts are not supported")]
    MultipleMaster,
    /// The font is a synthetic base font.
    #[error("Synthetic base fonts are not supported")]
    SyntheticBase,
    /// The CFF header carries a major version other than 1.
    #[error("Unsupported CFF version {major}.{minor}")]
    UnsupportedCffVersion {
        /// Major version from the header.
        major: u8,
        /// Minor version from the header.
        minor: u8,
    },
    /// The Type 1 parser exceeded its token budget without terminating.
    #[error("Type 1 program did not terminate within {0} tokens")]
    TokenLimitExceeded(u64),
    /// The Type 1 program ended in the middle of a construct.
    #[error("Unexpected end of Type 1 program while reading {0}")]
    UnexpectedEndOfProgram(&'static str),
    /// The `--start` skip count is larger than the input.
    #[error("Start offset {0} is past the end of the input ({1} bytes)")]
    StartPastEnd(usize, usize),
}
