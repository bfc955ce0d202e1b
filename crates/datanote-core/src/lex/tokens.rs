// Dweve DataNote - Unified Semi-Structured Data Engine
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bare word tokens.
//!
//! A label is `[_\p{Alphabetic}][_\p{Alphanumeric}]*` that is not one of
//! the literal keywords. Under the extended number syntax the words
//! `Infinity` and `NaN` are numbers and therefore not labels either.

use super::numbers::EXTENDED_WORDS;

/// Words with a fixed literal meaning.
pub const KEYWORDS: [&str; 3] = ["true", "false", "null"];

#[inline]
pub fn is_word_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

#[inline]
pub fn is_word_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// True if `s` has the shape of a bare word.
pub fn is_word(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_word_start(c) => chars.all(is_word_continue),
        _ => false,
    }
}

/// True if `s` reads back as a label.
///
/// `extended_numbers` reserves the extended number words as well.
pub fn is_valid_label(s: &str, extended_numbers: bool) -> bool {
    is_word(s)
        && !KEYWORDS.contains(&s)
        && !(extended_numbers && EXTENDED_WORDS.contains(&s))
}
