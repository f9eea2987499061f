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

//! CFF DICT decoding.
//!
//! Operands precede operators. Integers come in five encodings; reals
//! are binary-coded decimal nibbles whose textual form is retained
//! verbatim, because the lossless string is what the dump reproduces.

use crate::{
    dump::fmt_number, error::DumpError, messages::Messages,
    reader::ByteReader,
};

/// A decoded DICT operand.
#[derive(Clone, Debug, PartialEq)]
pub enum DictValue {
    /// Integer operand.
    Int(i32),
    /// Real operand, keeping the exact text decoded from the nibbles.
    Real {
        /// Textual form built nibble by nibble.
        text: String,
        /// Numeric value for arithmetic.
        value: f64,
    },
}

impl DictValue {
    /// Numeric value of the operand.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(v) => *v as f64,
            Self::Real { value, .. } => *value,
        }
    }

    /// Integer value, truncating reals.
    pub fn as_i32(&self) -> i32 {
        match self {
            Self::Int(v) => *v,
            Self::Real { value, .. } => *value as i32,
        }
    }

    /// Text for the dump: the retained string for reals, the plain
    /// decimal form for integers.
    pub fn text(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Real { text, .. } => text.clone(),
        }
    }
}

/// One `operands operator` group as it appeared in the DICT.
pub struct DictEntry {
    /// Operator key: the single byte for one-byte operators, or
    /// `0x0C00 | second_byte` for escaped two-byte operators.
    pub op: u16,
    /// Operands in source order.
    pub operands: Vec<DictValue>,
}

/// A decoded DICT, preserving entry order.
#[derive(Default)]
pub struct Dict {
    /// Entries in the order they were encoded.
    pub entries: Vec<DictEntry>,
}

/// Operator keys used by the dumper.
pub mod ops {
    /// `version` (SID).
    pub const VERSION: u16 = 0;
    /// `FontBBox` array.
    pub const FONT_BBOX: u16 = 5;
    /// `UniqueID`.
    pub const UNIQUE_ID: u16 = 13;
    /// `charset` offset or predefined id.
    pub const CHARSET: u16 = 15;
    /// `Encoding` offset or predefined id.
    pub const ENCODING: u16 = 16;
    /// `CharStrings` offset.
    pub const CHAR_STRINGS: u16 = 17;
    /// `Private` size and offset pair.
    pub const PRIVATE: u16 = 18;
    /// `Subrs` offset, relative to the Private DICT.
    pub const SUBRS: u16 = 19;
    /// `defaultWidthX`.
    pub const DEFAULT_WIDTH_X: u16 = 20;
    /// `nominalWidthX`.
    pub const NOMINAL_WIDTH_X: u16 = 21;
    /// `CharstringType`.
    pub const CHARSTRING_TYPE: u16 = 0x0C06;
    /// `SyntheticBase`: aborts the dump.
    pub const SYNTHETIC_BASE: u16 = 0x0C14;
    /// Multiple-master `MultipleMaster`: aborts the dump.
    pub const MULTIPLE_MASTER: u16 = 0x0C18;
    /// `ROS`: marks the font as CID-keyed.
    pub const ROS: u16 = 0x0C1E;
    /// `FDArray` offset.
    pub const FD_ARRAY: u16 = 0x0C24;
    /// `FDSelect` offset.
    pub const FD_SELECT: u16 = 0x0C25;
    /// `FontName` (SID), in CID font DICTs.
    pub const FONT_NAME: u16 = 0x0C26;
}

/// How an operator's operands are rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OperandKind {
    /// One SID resolved to a string.
    Sid,
    /// Array emitted as-is.
    Array,
    /// Delta-encoded array: absolute values plus original deltas.
    Delta,
    /// One number.
    Number,
    /// One integer.
    Integer,
    /// Boolean 0/1 rendered as false/true.
    Boolean,
    /// Offset or predefined value, recorded for later sections.
    Offset,
    /// The `Private` size/offset pair.
    Private,
    /// `ROS`: Registry SID, Ordering SID, Supplement integer.
    Ros,
}

const OPERATORS: &[(u16, &str, OperandKind)] = &[
    (0, "version", OperandKind::Sid),
    (1, "Notice", OperandKind::Sid),
    (2, "FullName", OperandKind::Sid),
    (3, "FamilyName", OperandKind::Sid),
    (4, "Weight", OperandKind::Sid),
    (5, "FontBBox", OperandKind::Array),
    (6, "BlueValues", OperandKind::Delta),
    (7, "OtherBlues", OperandKind::Delta),
    (8, "FamilyBlues", OperandKind::Delta),
    (9, "FamilyOtherBlues", OperandKind::Delta),
    (10, "StdHW", OperandKind::Number),
    (11, "StdVW", OperandKind::Number),
    (13, "UniqueID", OperandKind::Integer),
    (14, "XUID", OperandKind::Array),
    (15, "charset", OperandKind::Offset),
    (16, "Encoding", OperandKind::Offset),
    (17, "CharStrings", OperandKind::Offset),
    (18, "Private", OperandKind::Private),
    (19, "Subrs", OperandKind::Offset),
    (20, "defaultWidthX", OperandKind::Number),
    (21, "nominalWidthX", OperandKind::Number),
    (0x0C00, "Copyright", OperandKind::Sid),
    (0x0C01, "isFixedPitch", OperandKind::Boolean),
    (0x0C02, "ItalicAngle", OperandKind::Number),
    (0x0C03, "UnderlinePosition", OperandKind::Number),
    (0x0C04, "UnderlineThickness", OperandKind::Number),
    (0x0C05, "PaintType", OperandKind::Integer),
    (0x0C06, "CharstringType", OperandKind::Integer),
    (0x0C07, "FontMatrix", OperandKind::Array),
    (0x0C08, "StrokeWidth", OperandKind::Number),
    (0x0C09, "BlueScale", OperandKind::Number),
    (0x0C0A, "BlueShift", OperandKind::Number),
    (0x0C0B, "BlueFuzz", OperandKind::Number),
    (0x0C0C, "StemSnapH", OperandKind::Delta),
    (0x0C0D, "StemSnapV", OperandKind::Delta),
    (0x0C0E, "ForceBold", OperandKind::Boolean),
    (0x0C0F, "ForceBoldThreshold", OperandKind::Number),
    (0x0C10, "lenIV", OperandKind::Integer),
    (0x0C11, "LanguageGroup", OperandKind::Integer),
    (0x0C12, "ExpansionFactor", OperandKind::Number),
    (0x0C13, "initialRandomSeed", OperandKind::Integer),
    (0x0C14, "SyntheticBase", OperandKind::Integer),
    (0x0C15, "PostScript", OperandKind::Sid),
    (0x0C16, "BaseFontName", OperandKind::Sid),
    (0x0C17, "BaseFontBlend", OperandKind::Delta),
    (0x0C18, "MultipleMaster", OperandKind::Integer),
    (0x0C1E, "ROS", OperandKind::Ros),
    (0x0C1F, "CIDFontVersion", OperandKind::Number),
    (0x0C20, "CIDFontRevision", OperandKind::Number),
    (0x0C21, "CIDFontType", OperandKind::Integer),
    (0x0C22, "CIDCount", OperandKind::Integer),
    (0x0C23, "UIDBase", OperandKind::Integer),
    (0x0C24, "FDArray", OperandKind::Offset),
    (0x0C25, "FDSelect", OperandKind::Offset),
    (0x0C26, "FontName", OperandKind::Sid),
    (0x0C27, "Chameleon", OperandKind::Integer),
];

/// Looks up the name and operand shape of an operator key.
pub fn operator_info(op: u16) -> Option<(&'static str, OperandKind)> {
    OPERATORS
        .iter()
        .find(|(key, _, _)| *key == op)
        .map(|(_, name, kind)| (*name, *kind))
}

impl Dict {
    /// Decodes a DICT spanning `[reader.position(), end)`.
    ///
    /// Unknown operators are recorded and skipped; the multiple-master
    /// and synthetic-base operators abort the font.
    pub fn parse(
        reader: &mut ByteReader<'_>,
        end: usize,
        messages: &mut Messages,
    ) -> Result<Self, DumpError> {
        let mut entries = Vec::new();
        let mut operands: Vec<DictValue> = Vec::new();
        while reader.position() < end {
            let b0 = reader.read_u8()?;
            match b0 {
                32..=246 => {
                    operands.push(DictValue::Int(b0 as i32 - 139));
                }
                247..=250 => {
                    let b1 = reader.read_u8()? as i32;
                    operands.push(DictValue::Int(
                        (b0 as i32 - 247) * 256 + b1 + 108,
                    ));
                }
                251..=254 => {
                    let b1 = reader.read_u8()? as i32;
                    operands.push(DictValue::Int(
                        -(b0 as i32 - 251) * 256 - b1 - 108,
                    ));
                }
                28 => {
                    operands.push(DictValue::Int(reader.read_i16()? as i32));
                }
                29 => {
                    operands.push(DictValue::Int(reader.read_i32()?));
                }
                30 => {
                    operands.push(read_real(reader, messages)?);
                }
                0..=21 => {
                    let op = if b0 == 12 {
                        0x0C00 | reader.read_u8()? as u16
                    } else {
                        b0 as u16
                    };
                    match op {
                        ops::MULTIPLE_MASTER => {
                            return Err(DumpError::MultipleMaster)
                        }
                        ops::SYNTHETIC_BASE => {
                            return Err(DumpError::SyntheticBase)
                        }
                        _ => {}
                    }
                    if operator_info(op).is_none() {
                        messages.error(format!(
                            "Unknown DICT operator {}",
                            describe_op(op)
                        ));
                    }
                    entries.push(DictEntry {
                        op,
                        operands: std::mem::take(&mut operands),
                    });
                }
                _ => {
                    messages.error(format!(
                        "Reserved byte {b0} in DICT data"
                    ));
                }
            }
        }
        if !operands.is_empty() {
            messages.error("DICT ends with operands but no operator");
        }
        Ok(Self { entries })
    }

    /// Operands of the first entry with operator `op`.
    pub fn get(&self, op: u16) -> Option<&[DictValue]> {
        self.entries
            .iter()
            .find(|entry| entry.op == op)
            .map(|entry| entry.operands.as_slice())
    }

    /// Whether the DICT contains operator `op`.
    pub fn has(&self, op: u16) -> bool {
        self.get(op).is_some()
    }

    /// Sole integer operand of `op`, if present.
    pub fn get_int(&self, op: u16) -> Option<i32> {
        match self.get(op) {
            Some([value]) => Some(value.as_i32()),
            _ => None,
        }
    }

    /// Sole numeric operand of `op`, if present.
    pub fn get_f64(&self, op: u16) -> Option<f64> {
        match self.get(op) {
            Some([value]) => Some(value.as_f64()),
            _ => None,
        }
    }

    /// The synthesized Private-size / Private-offset pair.
    pub fn private_range(&self) -> Option<(usize, usize)> {
        match self.get(ops::PRIVATE) {
            Some([size, offset]) => {
                Some((size.as_i32().max(0) as usize, offset.as_i32().max(0) as usize))
            }
            _ => None,
        }
    }
}

/// Formats an operator key the way it appears in the encoding.
pub fn describe_op(op: u16) -> String {
    if op >= 0x0C00 {
        format!("12 {}", op & 0xFF)
    } else {
        format!("{op}")
    }
}

fn read_real(
    reader: &mut ByteReader<'_>,
    messages: &mut Messages,
) -> Result<DictValue, DumpError> {
    let mut text = String::new();
    'outer: loop {
        let byte = reader.read_u8()?;
        for nibble in [byte >> 4, byte & 0x0F] {
            match nibble {
                0..=9 => text.push((b'0' + nibble) as char),
                0xA => text.push('.'),
                0xB => text.push('E'),
                0xC => text.push_str("E-"),
                0xE => text.push('-'),
                0xF => break 'outer,
                _ => {
                    messages.error(format!(
                        "Reserved nibble {nibble} in real number"
                    ));
                }
            }
        }
    }
    let value = text.parse::<f64>().unwrap_or_else(|_| {
        messages.error(format!("Unparsable real number \"{text}\""));
        0.0
    });
    Ok(DictValue::Real { text, value })
}

#[cfg(test)]
#[path = "dict_test.rs"]
mod tests;
