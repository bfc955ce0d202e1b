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

//! Backslash escapes for quoted literals.
//!
//! Both directions use the JSON escape set (`\" \\ \/ \b \f \n \r \t
//! \uXXXX`). A literal delimited by `'` additionally accepts `\'`.
//! `\u` escapes encode UTF-16 code units, so characters outside the
//! Basic Multilingual Plane arrive as a surrogate pair that is combined
//! into one scalar value; an unpaired surrogate is an error.

use std::str::Chars;

use super::error::LexError;
use super::span::SourcePos;

/// Appends `s` to `out` with everything escaped that cannot appear raw
/// between two `quote` characters.
pub fn escape_into(out: &mut String, s: &str, quote: char) {
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}

/// Writes `s` between `quote` characters.
pub fn quote(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    escape_into(&mut out, s, quote);
    out.push(quote);
    out
}

/// Resolves the escapes in the body of a quoted literal.
///
/// `raw` excludes the delimiting quotes and `start` is the position of its
/// first character; errors point at the offending escape.
pub fn unescape(raw: &str, start: SourcePos, quote: char) -> Result<String, LexError> {
    if !raw.chars().any(|c| c == '\\' || (c as u32) < 0x20) {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut pos = start;
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        let here = pos;
        pos.advance(c);
        match c {
            '\\' => {
                let escaped = chars
                    .next()
                    .ok_or(LexError::DanglingEscape { pos: here })?;
                pos.advance(escaped);
                let resolved = match escaped {
                    '"' | '\\' | '/' => escaped,
                    '\'' if quote == '\'' => escaped,
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'u' => unicode_escape(&mut chars, &mut pos, here)?,
                    other => {
                        return Err(LexError::InvalidEscape {
                            sequence: format!("\\{other}"),
                            pos: here,
                        })
                    }
                };
                out.push(resolved);
            }
            c if (c as u32) < 0x20 => {
                return Err(LexError::ControlCharacter {
                    code: c as u32,
                    pos: here,
                })
            }
            c => out.push(c),
        }
    }
    Ok(out)
}

fn hex4(chars: &mut Chars<'_>, pos: &mut SourcePos, at: SourcePos) -> Result<u32, LexError> {
    let mut value = 0;
    let mut seen = String::from("\\u");
    for _ in 0..4 {
        let digit = chars.next().and_then(|c| {
            pos.advance(c);
            seen.push(c);
            c.to_digit(16)
        });
        match digit {
            Some(d) => value = value * 16 + d,
            None => {
                return Err(LexError::InvalidEscape {
                    sequence: seen,
                    pos: at,
                })
            }
        }
    }
    Ok(value)
}

fn unicode_escape(
    chars: &mut Chars<'_>,
    pos: &mut SourcePos,
    at: SourcePos,
) -> Result<char, LexError> {
    let unit = hex4(chars, pos, at)?;
    let code = match unit {
        0xD800..=0xDBFF => {
            let mut ahead = chars.clone();
            if ahead.next() != Some('\\') || ahead.next() != Some('u') {
                return Err(LexError::LoneSurrogate { code: unit, pos: at });
            }
            *chars = ahead;
            pos.advance('\\');
            pos.advance('u');
            let low = hex4(chars, pos, at)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(LexError::LoneSurrogate { code: unit, pos: at });
            }
            0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
        }
        0xDC00..=0xDFFF => return Err(LexError::LoneSurrogate { code: unit, pos: at }),
        _ => unit,
    };
    char::from_u32(code).ok_or(LexError::LoneSurrogate { code, pos: at })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(raw: &str) -> Result<String, LexError> {
        unescape(raw, SourcePos::start(), '"')
    }

    // ==================== Escape tests ====================

    #[test]
    fn test_escape_specials() {
        assert_eq!(quote("a\"b\\c\n", '"'), r#""a\"b\\c\n""#);
        assert_eq!(quote("\u{1}", '"'), r#""\u0001""#);
    }

    #[test]
    fn test_escape_keeps_unicode_raw() {
        assert_eq!(quote("😀 ü", '"'), "\"😀 ü\"");
    }

    #[test]
    fn test_escape_single_quote() {
        assert_eq!(quote("'", '\''), r"'\''");
        assert_eq!(quote("'", '"'), "\"'\"");
    }

    // ==================== Unescape tests ====================

    #[test]
    fn test_unescape_plain() {
        assert_eq!(plain("hello").unwrap(), "hello");
    }

    #[test]
    fn test_unescape_standard_set() {
        assert_eq!(plain(r#"\"\\\/\b\f\n\r\t"#).unwrap(), "\"\\/\u{8}\u{c}\n\r\t");
    }

    #[test]
    fn test_unescape_unicode() {
        assert_eq!(plain(r"\u00fc").unwrap(), "ü");
        assert_eq!(plain(r"\uD83D\uDE00").unwrap(), "😀");
    }

    #[test]
    fn test_unescape_lone_surrogate() {
        assert!(matches!(plain(r"\uD83D"), Err(LexError::LoneSurrogate { .. })));
        assert!(matches!(plain(r"\uDE00x"), Err(LexError::LoneSurrogate { .. })));
        assert!(matches!(plain(r"\uD83DA"), Err(LexError::LoneSurrogate { .. })));
    }

    #[test]
    fn test_unescape_invalid() {
        let err = plain(r"ab\q").unwrap_err();
        assert_eq!(
            err,
            LexError::InvalidEscape {
                sequence: "\\q".to_string(),
                pos: SourcePos::with_offset(1, 3, 2)
            }
        );
        assert!(matches!(plain(r"\u12"), Err(LexError::InvalidEscape { .. })));
        assert!(matches!(plain(r"\'"), Err(LexError::InvalidEscape { .. })));
    }

    #[test]
    fn test_unescape_single_quote_delimiter() {
        assert_eq!(unescape(r"\'", SourcePos::start(), '\'').unwrap(), "'");
    }

    #[test]
    fn test_unescape_dangling() {
        assert!(matches!(plain("a\\"), Err(LexError::DanglingEscape { .. })));
    }

    #[test]
    fn test_unescape_control_character() {
        assert!(matches!(
            plain("a\nb"),
            Err(LexError::ControlCharacter { code: 0x0A, .. })
        ));
    }
}
