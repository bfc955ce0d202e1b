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


//! Turning records into rows.

use datanote_core::{DataError, DataNote, DataResult, Kind, NoteSink, Processor, Slot, TreeBuilder};
use datanote_json::JsonProcessor;
use tracing::trace;

use crate::config::{CsvConfig, FieldTyping, HeaderMode};
use crate::error::CsvError;
use crate::records::{Field, RecordReader};

/// Key of the surplus field at zero-based `column` of a keyed row.
///
/// ```
/// assert_eq!(datanote_csv::surplus_key(2), datanote_core::DataNote::from("-2"));
/// ```
pub fn surplus_key(column: usize) -> DataNote {
    DataNote::string(format!("-{column}"))
}

struct RowEmitter<'s> {
    sink: &'s mut dyn NoteSink,
    keys: Option<Vec<DataNote>>,
    typing: Option<JsonProcessor>,
}

fn typed(typing: Option<&JsonProcessor>, field: Field) -> DataNote {
    let Some(json) = typing else {
        return DataNote::string(field.text);
    };
    match json.build(&field.text, TreeBuilder::default()) {
        Ok(note) if matches!(note.kind(), Kind::Number | Kind::Boole | Kind::Void) => note,
        Ok(note) => {
            trace!(field = %field.text, kind = %note.kind(), "field kept as string");
            DataNote::string(field.text)
        }
        Err(err) => {
            trace!(field = %field.text, error = %err, "field kept as string");
            DataNote::string(field.text)
        }
    }
}

impl RowEmitter<'_> {
    fn row(&mut self, fields: Vec<Field>) -> DataResult<()> {
        let Self { sink, keys, typing } = self;
        let typing = typing.as_ref();

        let Some(keys) = keys else {
            sink.open(Kind::Array, Slot::Value)?;
            for field in fields {
                sink.simplex(typed(typing, field), Slot::Value)?;
            }
            return sink.close();
        };

        sink.open(Kind::Table, Slot::Value)?;
        let width = fields.len();
        for (column, field) in fields.into_iter().enumerate() {
            let key = keys.get(column).cloned().unwrap_or_else(|| surplus_key(column));
            sink.simplex(key, Slot::Key)?;
            sink.simplex(typed(typing, field), Slot::Value)?;
        }
        for key in keys.iter().skip(width) {
            sink.simplex(key.clone(), Slot::Key)?;
            sink.simplex(DataNote::void(), Slot::Value)?;
        }
        sink.close()
    }
}

fn header_keys(fields: Vec<Field>) -> Vec<DataNote> {
    fields.into_iter().map(|f| DataNote::string(f.text)).collect()
}

/// Reads an external header: the first record of `text`.
pub(crate) fn read_header(text: &str, config: &CsvConfig) -> DataResult<Vec<DataNote>> {
    let mut reader = RecordReader::new(text.chars(), config.dialect, config.trim);
    match reader.next_record()? {
        Some(record) => Ok(header_keys(record.fields)),
        None => Err(DataError::structural("header holds no columns")),
    }
}

/// Scans `chunks` as one stream and reports an Array of rows to `sink`.
///
/// With `header` set, every record is data and rows are keyed by it,
/// whatever [`CsvConfig::header`] says.
pub(crate) fn read_rows(
    chunks: &[&str],
    header: Option<Vec<DataNote>>,
    config: &CsvConfig,
    sink: &mut dyn NoteSink,
) -> DataResult<()> {
    let mut reader = RecordReader::new(
        chunks.iter().flat_map(|chunk| chunk.chars()),
        config.dialect,
        config.trim,
    );

    let keys = match (header, config.header) {
        (Some(keys), _) => Some(keys),
        (None, HeaderMode::None) => None,
        (None, mode) => match reader.next_record()? {
            Some(record) if mode == HeaderMode::Keys => Some(header_keys(record.fields)),
            _ => None,
        },
    };

    let typing = match config.typing {
        FieldTyping::Off => None,
        FieldTyping::Json => Some(JsonProcessor::new()),
        FieldTyping::ExtendedJson => Some(JsonProcessor::extended()),
    };

    sink.open(Kind::Array, Slot::Value)?;
    let mut emitter = RowEmitter { sink, keys, typing };
    let mut rows = 0usize;
    while let Some(record) = reader.next_record()? {
        if rows == config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: rows + 1,
            }
            .into());
        }
        rows += 1;
        emitter
            .row(record.fields)
            .map_err(|e| if e.pos.is_none() { e.with_pos(record.pos) } else { e })?;
    }
    emitter.sink.close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use datanote_core::NoteBuilder;

    fn read(chunks: &[&str], config: &CsvConfig) -> DataResult<DataNote> {
        let mut builder = TreeBuilder::default();
        read_rows(chunks, None, config, &mut builder)?;
        builder.finish()
    }

    #[test]
    fn test_plain_rows() {
        let note = read(&["a,b\n1,2\n"], &CsvConfig::default()).unwrap();
        assert_eq!(note, DataNote::array([DataNote::array(["a", "b"]), DataNote::array(["1", "2"])]));
    }

    #[test]
    fn test_empty_input_is_empty_array() {
        let note = read(&[""], &CsvConfig::default()).unwrap();
        assert_eq!(note, DataNote::array(Vec::<DataNote>::new()));
        let keyed = CsvConfig::builder().header(HeaderMode::Keys).build().unwrap();
        assert_eq!(read(&["A,B\n"], &keyed).unwrap().extent(), 0);
    }

    #[test]
    fn test_skip_header() {
        let config = CsvConfig::builder().header(HeaderMode::Skip).build().unwrap();
        let note = read(&["h1,h2\nx,y\n"], &config).unwrap();
        assert_eq!(note, DataNote::array([DataNote::array(["x", "y"])]));
    }

    #[test]
    fn test_surplus_and_missing_columns() {
        let config = CsvConfig::builder().header(HeaderMode::Keys).build().unwrap();
        let note = read(&["A,B\n1\n1,2,3,4\n"], &config).unwrap();
        assert_eq!(note.at(0), &DataNote::table([("A", DataNote::from("1")), ("B", DataNote::void())]));
        assert_eq!(note.at(1).at("-2"), &DataNote::from("3"));
        assert_eq!(note.at(1).at("-3"), &DataNote::from("4"));
    }

    #[test]
    fn test_typing_keeps_other_kinds_as_strings() {
        let config = CsvConfig::builder().typing(FieldTyping::Json).build().unwrap();
        let note = read(&["1.5,true,null,\"[1]\",x,\"\\\"s\\\"\",\n"], &config).unwrap();
        let row = note.at(0);
        assert_eq!(row.at(0).kind(), Kind::Number);
        assert_eq!(row.at(1), &DataNote::boole(true));
        assert_eq!(row.at(2), &DataNote::void());
        assert_eq!(row.at(3), &DataNote::from("[1]"));
        assert_eq!(row.at(4), &DataNote::from("x"));
        assert_eq!(row.at(5), &DataNote::from("\"s\""));
        assert_eq!(row.at(6), &DataNote::from(""));
    }

    #[test]
    fn test_extended_typing() {
        let plain = CsvConfig::builder().typing(FieldTyping::Json).build().unwrap();
        let extended = CsvConfig::builder().typing(FieldTyping::ExtendedJson).build().unwrap();
        assert_eq!(read(&["NaN"], &plain).unwrap().at(0).at(0).kind(), Kind::String);
        assert_eq!(read(&["NaN"], &extended).unwrap().at(0).at(0).kind(), Kind::Number);
    }

    #[test]
    fn test_row_limit() {
        let config = CsvConfig::builder().max_rows(2).build().unwrap();
        assert_eq!(read(&["a\nb\n"], &config).unwrap().extent(), 2);
        let err = read(&["a\nb\nc\n"], &config).unwrap_err();
        assert_eq!(err.kind, datanote_core::ErrorKind::Limit);
    }

    #[test]
    fn test_header_rows_do_not_count() {
        let config = CsvConfig::builder()
            .header(HeaderMode::Skip)
            .max_rows(1)
            .build()
            .unwrap();
        assert!(read(&["h\nx\n"], &config).is_ok());
    }

    #[test]
    fn test_read_header() {
        let keys = read_header("Code,Char,Name", &CsvConfig::default()).unwrap();
        assert_eq!(keys, vec![DataNote::from("Code"), "Char".into(), "Name".into()]);
        assert!(read_header("\r\n", &CsvConfig::default()).is_err());
    }
}
