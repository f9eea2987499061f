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

//! Incremental builder for the textual dump.
//!
//! Sections whose content can only be finalized after all charstrings
//! have been executed (subroutine INDEXes, private DICTs) are built in
//! buffers of their own and concatenated in a fixed order at teardown.

/// Divider width between CFF sections.
pub const CFF_DIVIDER_WIDTH: usize = 80;
/// Divider width between Type 1 sections.
pub const TYPE1_DIVIDER_WIDTH: usize = 67;

/// Indentation for operator lines inside glyphs and subroutines.
pub const OPERATOR_INDENT: &str = "    ";

/// A growable text buffer with dump-specific formatting helpers.
#[derive(Default)]
pub struct DumpBuffer {
    out: String,
}

impl DumpBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw text.
    pub fn push_str(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Appends one line, terminating it with `\n`.
    pub fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Appends an empty line.
    pub fn lf(&mut self) {
        self.out.push('\n');
    }

    /// Appends a section divider of `width` dashes.
    pub fn divider(&mut self, width: usize) {
        self.line(&"-".repeat(width));
    }

    /// Appends a major block heading: `Name (0xXXXXXXXX):`.
    pub fn heading(&mut self, name: &str, offset: usize) {
        self.line(&format!("{name} (0x{offset:08X}):"));
    }

    /// Appends `items` in right-padded tabular layout, wrapped at `cols`
    /// columns. With `long` set, one item per line.
    pub fn columns(&mut self, items: &[String], cols: usize, long: bool) {
        if items.is_empty() {
            return;
        }
        if long {
            for item in items {
                self.line(&format!("{OPERATOR_INDENT}{item}"));
            }
            return;
        }
        let width =
            items.iter().map(|i| i.len()).max().unwrap_or_default() + 1;
        for row in items.chunks(cols) {
            let mut line = String::from(OPERATOR_INDENT);
            for item in row {
                line.push_str(item);
                for _ in item.len()..width {
                    line.push(' ');
                }
            }
            self.line(line.trim_end());
        }
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Returns the accumulated text.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the buffer, returning the accumulated text.
    pub fn into_string(self) -> String {
        self.out
    }
}

/// Formats a charstring or DICT number for the dump: integral values
/// print without a fraction, others with at most eight decimal places,
/// trailing zeros trimmed.
pub fn fmt_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e12 {
        return format!("{}", value as i64);
    }
    let mut text = format!("{value:.8}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
#[path = "dump_test.rs"]
mod tests;
