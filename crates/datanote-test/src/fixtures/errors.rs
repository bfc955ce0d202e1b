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


//! Error test fixtures.
//!
//! Each function returns (name, text) pairs that the named processor must
//! reject.

/// Malformed JSON.
pub fn invalid_json_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "  \t\n "),
        ("unclosed_string", r#"["abc"#),
        ("invalid_escape", r#""\x41""#),
        ("lone_surrogate", r#""\uD800""#),
        ("raw_newline_in_string", "\"a\nb\""),
        ("leading_zero", "[01]"),
        ("bare_decimal_point", "[1.]"),
        ("plus_sign", "+1"),
        ("unknown_word", "[yes]"),
        ("trailing_comma", "[1, 2,]"),
        ("missing_colon", r#"{"a" 1}"#),
        ("non_string_key", "{1: 2}"),
        ("unbalanced", "[[1]"),
        ("mismatched", "[1}"),
        ("two_values", "1 2"),
        ("single_quotes", "'a'"),
        ("comment", "# no # 1"),
        ("option", "(1)"),
        ("nan", "NaN"),
    ]
}

/// Malformed JEXIS.
pub fn invalid_jexis_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("unterminated_comment", "[1] # open"),
        ("empty_char", "''"),
        ("long_char", "'ab'"),
        ("unclosed_char", "'a"),
        ("unclosed_option", "(1, 2"),
        ("trailing_comma", "(1,)"),
        ("misplaced_separator", "1__0"),
        ("trailing_separator", "10_"),
        ("radix_without_extended", "0x10"),
        ("key_without_value", "{Red}"),
        ("stray_character", "[@]"),
    ]
}

/// Malformed CSV under the default dialect.
pub fn invalid_csv_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("unclosed_quote", "a,\"b\n"),
        ("text_after_quote", "\"a\"b,c\n"),
        ("dangling_escape", "\"a\\"),
    ]
}
