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


//! Character-level cursor over bracket-format text.

use datanote_core::lex::{unescape, LexError, LexResult, SourcePos};
use memchr::{memchr, memchr2};

pub(crate) struct Scanner<'a> {
    text: &'a str,
    index: usize,
    pos: SourcePos,
    comments: bool,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str, comments: bool) -> Self {
        Self {
            text,
            index: 0,
            pos: SourcePos::start(),
            comments,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> SourcePos {
        self.pos
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.text[self.index..].chars().next()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += c.len_utf8();
        self.pos.advance(c);
        Some(c)
    }

    /// Consumes `c` if it is next.
    pub(crate) fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_to(&mut self, end: usize) {
        self.pos = self.pos.advanced_by(&self.text[self.index..end]);
        self.index = end;
    }

    /// Skips whitespace and, when enabled, `# ... #` comments.
    pub(crate) fn skip_trivia(&mut self) -> LexResult<()> {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\n' | '\r') => {
                    self.bump();
                }
                Some('#') if self.comments => {
                    let start = self.pos;
                    let body = self.index + 1;
                    let close = memchr(b'#', &self.text.as_bytes()[body..])
                        .ok_or(LexError::UnterminatedComment { pos: start })?;
                    self.skip_to(body + close + 1);
                }
                _ => return Ok(()),
            }
        }
    }

    /// Reads a quoted literal starting at the opening `quote` and returns
    /// its unescaped body.
    pub(crate) fn quoted(&mut self, quote: char, max_length: usize) -> LexResult<String> {
        let open = self.pos;
        let body = self.index + quote.len_utf8();
        let bytes = self.text.as_bytes();

        let unclosed = || {
            if quote == '\'' {
                LexError::UnclosedChar { pos: open }
            } else {
                LexError::UnclosedQuote { pos: open }
            }
        };

        let mut cursor = body;
        let end = loop {
            if cursor >= bytes.len() {
                return Err(unclosed());
            }
            match memchr2(quote as u8, b'\\', &bytes[cursor..]) {
                Some(hit) if bytes[cursor + hit] == b'\\' => cursor += hit + 2,
                Some(hit) => break cursor + hit,
                None => return Err(unclosed()),
            }
        };

        let raw = &self.text[body..end];
        if raw.len() > max_length {
            return Err(LexError::StringTooLong {
                length: raw.len(),
                max: max_length,
                pos: open,
            });
        }
        let mut first = open;
        first.advance(quote);
        let value = unescape(raw, first, quote)?;
        self.skip_to(end + 1);
        Ok(value)
    }

    /// Consumes the longest run whose characters satisfy `accept`, given
    /// the previous character and the next one.
    pub(crate) fn run(&mut self, mut accept: impl FnMut(char, char) -> bool) -> &'a str {
        let start = self.index;
        let mut prev = '\0';
        while let Some(c) = self.peek() {
            if self.index > start && !accept(prev, c) {
                break;
            }
            prev = c;
            self.bump();
        }
        &self.text[start..self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace_and_comments() {
        let mut s = Scanner::new("  # note #\n x", true);
        s.skip_trivia().unwrap();
        assert_eq!(s.peek(), Some('x'));
        assert_eq!(s.pos().line(), 2);
        assert_eq!(s.pos().column(), 2);
    }

    #[test]
    fn test_comments_disabled() {
        let mut s = Scanner::new(" #x#", false);
        s.skip_trivia().unwrap();
        assert_eq!(s.peek(), Some('#'));
    }

    #[test]
    fn test_unterminated_comment() {
        let mut s = Scanner::new("\n  # open", true);
        let err = s.skip_trivia().unwrap_err();
        assert_eq!(err, LexError::UnterminatedComment { pos: SourcePos::with_offset(2, 3, 3) });
    }

    #[test]
    fn test_quoted_with_escapes() {
        let mut s = Scanner::new(r#""a\"b\\" rest"#, false);
        assert_eq!(s.quoted('"', usize::MAX).unwrap(), "a\"b\\");
        assert_eq!(s.peek(), Some(' '));
        assert_eq!(s.pos().column(), 9);
    }

    #[test]
    fn test_quoted_multibyte_body() {
        let mut s = Scanner::new("\"größe\"", false);
        assert_eq!(s.quoted('"', usize::MAX).unwrap(), "größe");
        assert_eq!(s.peek(), None);
        assert_eq!(s.pos().column(), 8);
    }

    #[test]
    fn test_unclosed_quote() {
        let mut s = Scanner::new("\"abc", false);
        assert!(matches!(s.quoted('"', usize::MAX), Err(LexError::UnclosedQuote { .. })));
        let mut s = Scanner::new("\"abc\\", false);
        assert!(matches!(s.quoted('"', usize::MAX), Err(LexError::UnclosedQuote { .. })));
        let mut s = Scanner::new("'a", false);
        assert!(matches!(s.quoted('\'', usize::MAX), Err(LexError::UnclosedChar { .. })));
    }

    #[test]
    fn test_string_limit() {
        let mut s = Scanner::new("\"abcdef\"", false);
        let err = s.quoted('"', 3).unwrap_err();
        assert!(err.is_limit());
    }

    #[test]
    fn test_run() {
        let mut s = Scanner::new("abc_1,", false);
        assert_eq!(s.run(|_, c| c.is_alphanumeric() || c == '_'), "abc_1");
        assert_eq!(s.peek(), Some(','));
    }
}
