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


//! Record scanner.
//!
//! Splits a character stream into records of fields. The stream may be
//! stitched together from several chunks; a record, a field, or even a
//! `\r\n` pair may straddle a chunk boundary.
//!
//! Rules, for a dialect with separator `,`, quote `"` and escape `\`:
//!
//! - a record ends at `\r\n`, `\n` or `\r` outside quotes; empty lines
//!   produce no record
//! - a field that starts with `"` runs to the matching `"`; inside it `""`
//!   is one `"`, `\x` is `x`, and separators and line breaks are text
//! - after the closing quote only a separator or line break may follow
//! - in an unquoted field `"` and `\` are ordinary characters

use std::iter::Peekable;

use datanote_core::lex::{LexError, LexResult, SourcePos};

use crate::config::Dialect;

/// One field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Field {
    pub text: String,
    pub quoted: bool,
}

/// One record and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    pub fields: Vec<Field>,
    pub pos: SourcePos,
}

pub(crate) struct RecordReader<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    pos: SourcePos,
    separator: char,
    quote: char,
    escape: char,
    trim: bool,
}

impl<I: Iterator<Item = char>> RecordReader<I> {
    pub fn new(chars: I, dialect: Dialect, trim: bool) -> Self {
        Self {
            chars: chars.peekable(),
            pos: SourcePos::start(),
            separator: dialect.separator_char(),
            quote: dialect.quote_char(),
            escape: dialect.escape_char(),
            trim,
        }
    }

    #[inline]
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos.advance(c);
        if c == '\r' && self.peek() != Some('\n') {
            self.pos.next_line();
        }
        Some(c)
    }

    fn at_line_break(&mut self) -> bool {
        matches!(self.peek(), Some('\r' | '\n'))
    }

    fn line_break(&mut self) {
        if self.bump() == Some('\r') && self.peek() == Some('\n') {
            self.bump();
        }
    }

    fn skip_blanks(&mut self) {
        if !self.trim {
            return;
        }
        while let Some(c @ (' ' | '\t')) = self.peek() {
            if c == self.separator {
                break;
            }
            self.bump();
        }
    }

    /// The next record, or `None` once the stream is exhausted.
    pub fn next_record(&mut self) -> LexResult<Option<Record>> {
        while self.at_line_break() {
            self.line_break();
        }
        if self.peek().is_none() {
            return Ok(None);
        }

        let pos = self.pos;
        let mut fields = Vec::new();
        loop {
            fields.push(self.field()?);
            match self.peek() {
                Some(c) if c == self.separator => {
                    self.bump();
                }
                Some(_) => {
                    self.line_break();
                    break;
                }
                None => break,
            }
        }
        Ok(Some(Record { fields, pos }))
    }

    fn field(&mut self) -> LexResult<Field> {
        self.skip_blanks();
        if self.peek() == Some(self.quote) {
            return self.quoted();
        }

        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == self.separator || c == '\r' || c == '\n' {
                break;
            }
            text.push(c);
            self.bump();
        }
        if self.trim {
            let kept = text.trim_end_matches([' ', '\t']).len();
            text.truncate(kept);
        }
        Ok(Field {
            text,
            quoted: false,
        })
    }

    fn quoted(&mut self) -> LexResult<Field> {
        let open = self.pos;
        self.bump();

        let mut text = String::new();
        loop {
            let at = self.pos;
            match self.bump() {
                None => return Err(LexError::UnclosedQuote { pos: open }),
                Some(c) if c == self.escape => match self.bump() {
                    Some(next) => text.push(next),
                    None => return Err(LexError::DanglingEscape { pos: at }),
                },
                Some(c) if c == self.quote => {
                    if self.peek() == Some(self.quote) {
                        self.bump();
                        text.push(c);
                    } else {
                        break;
                    }
                }
                Some(c) => text.push(c),
            }
        }

        self.skip_blanks();
        match self.peek() {
            Some(c) if c != self.separator && c != '\r' && c != '\n' => {
                Err(LexError::TextAfterQuote {
                    found: c,
                    pos: self.pos,
                })
            }
            _ => Ok(Field { text, quoted: true }),
        }
    }
}
