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

//! Tests for the message register.

use super::*;

#[test]
fn test_errors_coalesce_by_message() {
    let mut messages = Messages::new();
    messages.error("Offset out of range");
    messages.error("First INDEX offset is not 1");
    messages.error("Offset out of range");
    messages.error("Offset out of range");

    let mut out = DumpBuffer::new();
    messages.render(&mut out);
    let text = out.into_string();
    assert_eq!(
        text,
        "Errors:\n    Offset out of range  (3 times)\n    First INDEX offset is not 1\n"
    );
}

#[test]
fn test_infos_are_distinct_and_ordered() {
    let mut messages = Messages::new();
    messages.info(notes::USES_FLEX);
    messages.info(notes::CID_FONT);
    messages.info(notes::USES_FLEX);
    assert!(messages.has_info(notes::USES_FLEX));
    assert!(!messages.has_info(notes::USES_SEAC));

    let mut out = DumpBuffer::new();
    messages.render(&mut out);
    assert_eq!(
        out.as_str(),
        "Info:\n    Font contains flex segments\n    CID-keyed font\n"
    );
}

#[test]
fn test_empty_register_renders_nothing() {
    let messages = Messages::new();
    let mut out = DumpBuffer::new();
    messages.render(&mut out);
    assert!(out.is_empty());
}
