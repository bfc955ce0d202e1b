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


//! Presenter shared by the JSON and JEXIS processors.

use datanote_core::lex::{escape_into, is_valid_label};
use datanote_core::{
    traverse, Data, DataError, DataNote, DataResult, Kind, Layout, NoteVisitor, Slot, Transform,
    VisitorContext,
};
use tracing::debug;

use crate::grammar::Grammar;

/// Renders `note` under `grammar`, rejecting anything the grammar cannot
/// spell.
pub(crate) fn write_document(
    note: &DataNote,
    grammar: &Grammar,
    indent: usize,
    layout: Layout,
    transform: &dyn Transform,
) -> DataResult<String> {
    debug!(format = grammar.name, kind = %note.kind(), ?layout, "present started");
    let mut writer = Writer {
        out: String::new(),
        grammar,
        indent,
        pretty: layout.is_pretty(),
    };
    traverse(note, transform, &mut writer).map_err(|e| e.or_context(grammar.name))?;
    debug!(format = grammar.name, bytes = writer.out.len(), "present finished");
    Ok(writer.out)
}

struct Writer<'g> {
    out: String,
    grammar: &'g Grammar,
    indent: usize,
    pretty: bool,
}

impl Writer<'_> {
    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        self.out.extend(std::iter::repeat(' ').take(depth * self.indent));
    }

    /// Writes whatever separates this node from the previous one.
    fn separate(&mut self, ctx: &VisitorContext) {
        if ctx.is_root() {
            return;
        }
        let compact = !self.pretty || ctx.in_key;
        if ctx.parent == Some(Kind::Table) && !ctx.slot.is_key() {
            self.out.push(':');
            if !compact {
                self.out.push(' ');
            }
            return;
        }
        if ctx.index > 0 {
            self.out.push(',');
        }
        if !compact {
            self.newline(ctx.depth);
        }
    }

    fn check_key(&self, note: &DataNote, ctx: &VisitorContext) -> DataResult<()> {
        if ctx.slot.is_key() && !self.grammar.any_keys && note.kind() != Kind::String {
            return Err(DataError::structural(format!(
                "non-string key not allowed here (found {})",
                note.kind()
            )));
        }
        Ok(())
    }

    fn unsupported(&self, kind: Kind) -> DataError {
        DataError::structural(format!("{kind} not allowed in {}", self.grammar.name))
    }
}

impl NoteVisitor for Writer<'_> {
    type Error = DataError;

    fn visit_simplex(&mut self, note: &DataNote, ctx: &VisitorContext) -> DataResult<()> {
        self.check_key(note, ctx)?;
        self.separate(ctx);
        match note.data() {
            Data::String(s) => {
                self.out.push('"');
                escape_into(&mut self.out, s, '"');
                self.out.push('"');
            }
            Data::Number(n) => {
                if !n.conforms_to(self.grammar.numbers) {
                    return Err(DataError::structural(format!(
                        "number {n} not allowed in {}",
                        self.grammar.name
                    )));
                }
                self.out.push_str(n.as_str());
            }
            Data::Char(c) => {
                if !self.grammar.chars {
                    return Err(self.unsupported(Kind::Char));
                }
                self.out.push('\'');
                escape_into(&mut self.out, c.encode_utf8(&mut [0; 4]), '\'');
                self.out.push('\'');
            }
            Data::Label(s) => {
                if !self.grammar.labels {
                    return Err(self.unsupported(Kind::Label));
                }
                if !is_valid_label(s, self.grammar.extended_numbers()) {
                    return Err(DataError::structural(format!("'{s}' is not a valid label")));
                }
                self.out.push_str(s);
            }
            Data::Boole(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Data::Void => self.out.push_str("null"),
            Data::Array(_) | Data::Option(_) | Data::Table(_) => {
                return Err(DataError::structural("container offered as a leaf"))
            }
        }
        Ok(())
    }

    fn begin_complex(&mut self, note: &DataNote, ctx: &VisitorContext) -> DataResult<()> {
        self.check_key(note, ctx)?;
        if note.kind() == Kind::Option && !self.grammar.options {
            return Err(self.unsupported(Kind::Option));
        }
        self.separate(ctx);
        self.out.push(match note.kind() {
            Kind::Option => '(',
            Kind::Table => '{',
            _ => '[',
        });
        Ok(())
    }

    fn end_complex(&mut self, note: &DataNote, ctx: &VisitorContext) -> DataResult<()> {
        if self.pretty && !ctx.in_key && ctx.slot == Slot::Value && note.extent() > 0 {
            self.newline(ctx.depth);
        }
        self.out.push(match note.kind() {
            Kind::Option => ')',
            Kind::Table => '}',
            _ => ']',
        });
        Ok(())
    }
}
