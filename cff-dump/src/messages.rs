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

//! Diagnostic register for one font dump.
//!
//! Structural and interpretive problems are recorded here instead of
//! aborting the dump; repeated messages are coalesced and only the count
//! is tracked. Info messages record the "special feature" findings that
//! close the dump.

use crate::dump::{DumpBuffer, OPERATOR_INDENT};

/// Info messages with fixed wording.
pub mod notes {
    /// The font is CID-keyed.
    pub const CID_FONT: &str = "CID-keyed font";
    /// A Type 2 endchar carried accent-composition operands.
    pub const USES_SEAC: &str = "Operator endchar is used as \"seac\".";
    /// The font contains flex segments (Type 1 othersubrs or Type 2
    /// flex operators).
    pub const USES_FLEX: &str = "Font contains flex segments";
    /// A Type 1 charstring used vstem3/hstem3 counter hints.
    pub const USES_STEM3: &str = "Font uses stem3 counter hints";
    /// A Type 1 charstring invoked the counter-control othersubrs.
    pub const COUNTER_CONTROL: &str =
        "Font uses counter-control othersubrs";
    /// The custom encoding carries a supplemental table.
    pub const SUPPLEMENTAL_ENCODING: &str =
        "Encoding contains supplemental mappings";
    /// An unused-subroutine dump hit hintmask and was cut short.
    pub const UNUSED_SUBR_HINTMASK: &str =
        "Dump of an unused subroutine was interrupted at hintmask/cntrmask";
    /// Operand-count errors were suppressed while dumping unused
    /// subroutines.
    pub const UNUSED_SUBR_SILENCED: &str =
        "Missing-operand errors were silenced in unused subroutines";
    /// The font is a multiple-master Type 1 font.
    pub const MULTIPLE_MASTER: &str = "Multiple-master font";
}

/// Register of coalesced error messages and distinct info messages.
#[derive(Default)]
pub struct Messages {
    errors: Vec<(String, u32)>,
    infos: Vec<String>,
}

impl Messages {
    /// Creates an empty register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error message, coalescing repeats by exact text.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(message, "dump error recorded");
        if let Some(entry) =
            self.errors.iter_mut().find(|(m, _)| *m == message)
        {
            entry.1 += 1;
        } else {
            self.errors.push((message, 1));
        }
    }

    /// Records an info message once.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.infos.contains(&message) {
            self.infos.push(message);
        }
    }

    /// Whether any error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether a given info message has been recorded.
    pub fn has_info(&self, message: &str) -> bool {
        self.infos.iter().any(|m| m == message)
    }

    /// Whether the register holds nothing at all.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.infos.is_empty()
    }

    /// Renders the final messages section.
    pub fn render(&self, out: &mut DumpBuffer) {
        if !self.errors.is_empty() {
            out.line("Errors:");
            for (message, count) in &self.errors {
                if *count == 1 {
                    out.line(&format!("{OPERATOR_INDENT}{message}"));
                } else {
                    out.line(&format!(
                        "{OPERATOR_INDENT}{message}  ({count} times)"
                    ));
                }
            }
        }
        if !self.infos.is_empty() {
            out.line("Info:");
            for message in &self.infos {
                out.line(&format!("{OPERATOR_INDENT}{message}"));
            }
        }
    }
}

#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;
