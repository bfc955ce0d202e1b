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


//! Presenting trees as CSV.
//!
//! The tree must be two-dimensional: an Array or Option of rows, each row
//! an Array, Option or Table of Simplex fields.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use datanote_core::{
    traverse, DataError, DataNote, DataResult, Kind, Layout, NoteVisitor, Transform,
    VisitorContext,
};
use tracing::debug;

use crate::config::{CsvConfig, Dialect, HeaderMode};
use crate::error::CsvError;

struct RowWriter {
    dialect: Dialect,
    header: HeaderMode,
    always_quote: bool,
    out: csv::Writer<Vec<u8>>,
    row: usize,
    columns: Option<Vec<String>>,
    keys: Vec<String>,
    fields: Vec<String>,
}

/// Orders a Table row's fields by the header columns. A column the row
/// lacks becomes an empty field; keys outside the header follow in row
/// order and read back as surplus fields.
fn align(columns: &[String], keys: Vec<String>, fields: Vec<String>) -> Vec<String> {
    let mut pending: Vec<Option<(String, String)>> = keys.into_iter().zip(fields).map(Some).collect();
    let mut record: Vec<String> = columns
        .iter()
        .map(|column| {
            pending
                .iter_mut()
                .find(|entry| matches!(entry, Some((key, _)) if key == column))
                .and_then(Option::take)
                .map(|(_, value)| value)
                .unwrap_or_default()
        })
        .collect();
    record.extend(pending.into_iter().flatten().map(|(_, value)| value));
    record
}

impl RowWriter {
    /// Doubles the escape byte in fields that the writer will quote, so
    /// reading them back yields the original text.
    fn prepare(&self, text: &str) -> String {
        let escape = self.dialect.escape_char();
        if !text.contains(escape) {
            return text.to_string();
        }
        let quoted = self.always_quote
            || text.contains([
                self.dialect.separator_char(),
                self.dialect.quote_char(),
                '\r',
                '\n',
            ]);
        if quoted {
            text.replace(escape, &format!("{escape}{escape}"))
        } else {
            text.to_string()
        }
    }
}

impl NoteVisitor for RowWriter {
    type Error = DataError;

    fn visit_simplex(&mut self, note: &DataNote, ctx: &VisitorContext) -> DataResult<()> {
        match ctx.depth {
            0 => Err(DataError::structural(format!(
                "expected an Array or Option of rows, found {}",
                note.kind()
            ))),
            1 => Err(DataError::structural(format!(
                "row {} is a {}, expected an Array, Option or Table",
                ctx.index,
                note.kind()
            ))),
            _ => {
                // Void has no String form and becomes the empty field
                let text = self.prepare(&note.as_string().unwrap_or_default());
                if ctx.slot.is_key() {
                    self.keys.push(text);
                } else {
                    self.fields.push(text);
                }
                Ok(())
            }
        }
    }

    fn begin_complex(&mut self, note: &DataNote, ctx: &VisitorContext) -> DataResult<()> {
        match ctx.depth {
            0 if note.kind() == Kind::Table => Err(DataError::structural(
                "expected an Array or Option of rows, found Table",
            )),
            0 => Ok(()),
            1 => {
                self.keys.clear();
                self.fields.clear();
                Ok(())
            }
            _ => Err(DataError::structural(format!(
                "row {} holds a {} field; fields must be Simplex",
                self.row,
                note.kind()
            ))),
        }
    }

    fn end_complex(&mut self, note: &DataNote, ctx: &VisitorContext) -> DataResult<()> {
        if ctx.depth != 1 {
            return Ok(());
        }
        if self.row == 0 && note.kind() == Kind::Table && self.header == HeaderMode::Keys {
            self.out.write_record(&self.keys).map_err(CsvError::from)?;
            self.columns = Some(self.keys.clone());
        }
        let keys = std::mem::take(&mut self.keys);
        let fields = std::mem::take(&mut self.fields);
        let record = match (&self.columns, note.kind()) {
            (Some(columns), Kind::Table) => align(columns, keys, fields),
            _ => fields,
        };
        self.out.write_record(&record).map_err(CsvError::from)?;
        self.row += 1;
        Ok(())
    }
}

/// Renders `note` as CSV text with CRLF record terminators.
///
/// [`Layout::Compact`] quotes only the fields that need it;
/// [`Layout::Pretty`] quotes every field.
pub(crate) fn write_rows(
    note: &DataNote,
    config: &CsvConfig,
    layout: Layout,
    transform: &dyn Transform,
) -> DataResult<String> {
    debug!(format = "CSV", kind = %note.kind(), "present started");
    let dialect = config.dialect;
    let out = WriterBuilder::new()
        .delimiter(dialect.separator)
        .quote(dialect.quote)
        .escape(dialect.escape)
        .double_quote(true)
        .quote_style(if layout.is_pretty() {
            QuoteStyle::Always
        } else {
            QuoteStyle::Necessary
        })
        .terminator(Terminator::CRLF)
        .flexible(true)
        .has_headers(false)
        .from_writer(Vec::new());

    let mut writer = RowWriter {
        dialect,
        header: config.header,
        always_quote: layout.is_pretty(),
        out,
        row: 0,
        columns: None,
        keys: Vec::new(),
        fields: Vec::new(),
    };
    traverse(note, transform, &mut writer).map_err(|e| e.or_context("CSV"))?;

    let bytes = writer
        .out
        .into_inner()
        .map_err(|e| CsvError::Io(e.into_error()))?;
    let text = String::from_utf8(bytes).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })?;
    debug!(format = "CSV", rows = writer.row, bytes = text.len(), "present finished");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datanote_core::Identity;

    fn write(note: &DataNote, layout: Layout) -> DataResult<String> {
        write_rows(note, &CsvConfig::default(), layout, &Identity)
    }

    #[test]
    fn test_simplex_fields() {
        let row = DataNote::array([
            DataNote::from("s"),
            DataNote::char('c'),
            DataNote::label("Blue"),
            DataNote::from(15),
            DataNote::boole(false),
            DataNote::void(),
        ]);
        let text = write(&DataNote::array([row]), Layout::Compact).unwrap();
        assert_eq!(text, "s,c,Blue,15,false,\r\n");
    }

    #[test]
    fn test_compact_quotes_when_needed() {
        let note = DataNote::array([DataNote::array(["a,b", "c", "say \"hi\""])]);
        assert_eq!(write(&note, Layout::Compact).unwrap(), "\"a,b\",c,\"say \"\"hi\"\"\"\r\n");
    }

    #[test]
    fn test_pretty_quotes_everything() {
        let note = DataNote::array([DataNote::array([DataNote::from(1), DataNote::void()])]);
        assert_eq!(write(&note, Layout::Pretty).unwrap(), "\"1\",\"\"\r\n");
    }

    #[test]
    fn test_escape_doubled_only_inside_quotes() {
        let note = DataNote::array([DataNote::array([r"a\b", r"c\d,e"])]);
        assert_eq!(write(&note, Layout::Compact).unwrap(), "a\\b,\"c\\\\d,e\"\r\n");
    }

    #[test]
    fn test_shape_errors() {
        assert!(write(&DataNote::from(1), Layout::Compact).is_err());
        assert!(write(&DataNote::table([("a", 1)]), Layout::Compact).is_err());
        assert!(write(&DataNote::array([1]), Layout::Compact).is_err());
        let nested = DataNote::array([DataNote::array([DataNote::array([1])])]);
        let err = write(&nested, Layout::Compact).unwrap_err();
        assert!(err.message.contains("fields must be Simplex"));
        assert_eq!(err.context.as_deref(), Some("CSV"));
    }

    #[test]
    fn test_keyed_rows_follow_header_order() {
        let config = CsvConfig {
            header: HeaderMode::Keys,
            ..CsvConfig::default()
        };
        let note = DataNote::array([
            DataNote::table([("A", "1"), ("B", "2")]),
            DataNote::table([("B", "3"), ("A", "4")]),
            DataNote::table([("B", "5")]),
            DataNote::table([("C", "6"), ("A", "7")]),
        ]);
        let text = write_rows(&note, &config, Layout::Compact, &Identity).unwrap();
        assert_eq!(text, "A,B\r\n1,2\r\n4,3\r\n,5\r\n7,,6\r\n");
    }

    #[test]
    fn test_align_keeps_surplus_in_row_order() {
        let columns = vec!["A".to_string(), "B".to_string()];
        let keys = vec!["-3".to_string(), "B".to_string(), "-2".to_string()];
        let fields = vec!["x".to_string(), "b".to_string(), "y".to_string()];
        assert_eq!(align(&columns, keys, fields), vec!["", "b", "x", "y"]);
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(write(&DataNote::array(Vec::<DataNote>::new()), Layout::Compact).unwrap(), "");
    }
}
