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


//! Recursive descent reader shared by the JSON and JEXIS processors.
//!
//! The reader reports parse events to a [`NoteSink`] instead of building a
//! tree itself, so the same pass can feed a [`TreeBuilder`] or any other
//! builder.
//!
//! [`TreeBuilder`]: datanote_core::TreeBuilder

use datanote_core::lex::numbers::{is_number_continue, is_number_start, EXTENDED_WORDS};
use datanote_core::lex::{is_word_continue, is_word_start, LexError, SourcePos};
use datanote_core::{DataError, DataNote, DataResult, Kind, Limits, NoteSink, Number, Slot};

use crate::grammar::Grammar;
use crate::scanner::Scanner;

/// Reads exactly one value from `text`, followed by nothing but trivia.
pub(crate) fn read_document(
    text: &str,
    grammar: &Grammar,
    limits: &Limits,
    sink: &mut dyn NoteSink,
) -> DataResult<()> {
    let mut reader = Reader {
        scanner: Scanner::new(text, grammar.comments),
        grammar,
        limits,
        sink,
        depth: 0,
    };
    reader.scanner.skip_trivia()?;
    reader.value(Slot::Value)?;
    reader.scanner.skip_trivia()?;
    match reader.scanner.peek() {
        None => Ok(()),
        Some(c) => Err(DataError::structural_at(
            format!("unexpected '{c}' after the top-level value"),
            reader.scanner.pos(),
        )),
    }
}

struct Reader<'a, 's> {
    scanner: Scanner<'a>,
    grammar: &'a Grammar,
    limits: &'a Limits,
    sink: &'s mut dyn NoteSink,
    depth: usize,
}

impl Reader<'_, '_> {
    fn value(&mut self, slot: Slot) -> DataResult<()> {
        let pos = self.scanner.pos();
        let Some(c) = self.scanner.peek() else {
            return Err(DataError::structural_at("expected a value, found end of input", pos));
        };
        match c {
            '[' => self.container(Kind::Array, ']', slot),
            '{' => self.container(Kind::Table, '}', slot),
            '(' if self.grammar.options => self.container(Kind::Option, ')', slot),
            '"' => {
                let s = self.scanner.quoted('"', self.limits.max_string_length)?;
                self.sink.simplex(DataNote::string(s), slot)
            }
            '\'' if self.grammar.chars => {
                let note = self.char_literal(pos)?;
                self.sink.simplex(note, slot)
            }
            c if is_number_start(c, self.grammar.numbers) => {
                let note = self.number(pos)?;
                self.sink.simplex(note, slot)
            }
            c if is_word_start(c) => {
                let note = self.word(pos)?;
                self.sink.simplex(note, slot)
            }
            ']' | '}' | ')' | ',' | ':' => Err(DataError::structural_at(
                format!("expected a value, found '{c}'"),
                pos,
            )),
            c => Err(LexError::UnexpectedChar { found: c, pos }.into()),
        }
    }

    fn container(&mut self, kind: Kind, close: char, slot: Slot) -> DataResult<()> {
        let open = self.scanner.pos();
        if self.depth >= self.limits.max_depth {
            return Err(DataError::limit(format!(
                "nesting depth exceeds the limit of {}",
                self.limits.max_depth
            ))
            .with_pos(open));
        }
        self.scanner.bump();
        self.depth += 1;
        self.sink.open(kind, slot)?;
        self.scanner.skip_trivia()?;

        if !self.scanner.eat(close) {
            let mut count = 0usize;
            loop {
                if count == self.limits.max_container_size {
                    return Err(DataError::limit(format!(
                        "{kind} holds more than {} members",
                        self.limits.max_container_size
                    ))
                    .with_pos(self.scanner.pos()));
                }
                if kind == Kind::Table {
                    self.entry()?;
                } else {
                    self.value(Slot::Value)?;
                }
                count += 1;

                self.scanner.skip_trivia()?;
                let pos = self.scanner.pos();
                match self.scanner.bump() {
                    Some(',') => {
                        self.scanner.skip_trivia()?;
                        if self.scanner.peek() == Some(close) {
                            return Err(DataError::structural_at(
                                format!("trailing ',' before '{close}'"),
                                pos,
                            ));
                        }
                    }
                    Some(c) if c == close => break,
                    Some(c) => {
                        return Err(DataError::structural_at(
                            format!("expected ',' or '{close}', found '{c}'"),
                            pos,
                        ))
                    }
                    None => return Err(DataError::structural_at(format!("unclosed {kind}"), open)),
                }
            }
        }

        self.depth -= 1;
        self.sink.close()
    }

    fn entry(&mut self) -> DataResult<()> {
        let pos = self.scanner.pos();
        if !self.grammar.any_keys && self.scanner.peek() != Some('"') {
            return match self.scanner.peek() {
                None => Err(DataError::structural_at("expected a key, found end of input", pos)),
                Some(_) => Err(DataError::structural_at("non-string key not allowed here", pos)),
            };
        }
        self.value(Slot::Key)?;

        self.scanner.skip_trivia()?;
        let pos = self.scanner.pos();
        if !self.scanner.eat(':') {
            return Err(DataError::structural_at("missing ':' after table key", pos));
        }
        self.scanner.skip_trivia()?;
        self.value(Slot::Value)
    }

    fn char_literal(&mut self, pos: SourcePos) -> DataResult<DataNote> {
        let body = self.scanner.quoted('\'', self.limits.max_string_length)?;
        let mut chars = body.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(DataNote::char(c)),
            (None, _) => Err(LexError::InvalidChar {
                message: "empty char literal".to_string(),
                pos,
            }
            .into()),
            (Some(_), Some(_)) => Err(LexError::InvalidChar {
                message: format!("char literal holds {} characters", body.chars().count()),
                pos,
            }
            .into()),
        }
    }

    fn number(&mut self, pos: SourcePos) -> DataResult<DataNote> {
        let text = self.scanner.run(|prev, c| is_number_continue(prev, c));
        Number::parse_with(text, self.grammar.numbers)
            .map(DataNote::number)
            .map_err(|reason| {
                LexError::InvalidNumber {
                    text: text.to_string(),
                    reason,
                    pos,
                }
                .into()
            })
    }

    fn word(&mut self, pos: SourcePos) -> DataResult<DataNote> {
        let word = self.scanner.run(|_, c| is_word_continue(c));
        match word {
            "true" => Ok(DataNote::boole(true)),
            "false" => Ok(DataNote::boole(false)),
            "null" => Ok(DataNote::void()),
            w if self.grammar.extended_numbers() && EXTENDED_WORDS.contains(&w) => {
                Number::parse_with(w, self.grammar.numbers)
                    .map(DataNote::number)
                    .map_err(|reason| {
                        LexError::InvalidNumber {
                            text: w.to_string(),
                            reason,
                            pos,
                        }
                        .into()
                    })
            }
            w if self.grammar.labels => Ok(DataNote::label(w)),
            w => Err(DataError::lexical(format!("unknown literal '{w}'"), pos)),
        }
    }
}
