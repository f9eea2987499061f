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

//! Parsing and dumping of Compact Font Format data.

pub(crate) mod charset;
pub(crate) mod dict;
pub(crate) mod dumper;
pub(crate) mod encoding;
pub(crate) mod fd_select;
pub(crate) mod index;
pub(crate) mod strings;

pub use dumper::CffDumper;
pub use index::CffIndex;
