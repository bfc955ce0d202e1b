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


//! The CSV processor.

use datanote_core::{
    DataNote, DataResult, Identity, Layout, NoteBuilder, NoteSink, Processor, Transform,
    TreeBuilder,
};
use tracing::debug;

use crate::config::{CsvConfig, Dialect};
use crate::error::Result;
use crate::from_csv::{read_header, read_rows};
use crate::to_csv::write_rows;

/// Reads and writes delimited text.
///
/// A parse always yields an Array of rows. Rows are Arrays of fields, or
/// Tables keyed by the header under [`HeaderMode::Keys`](crate::HeaderMode::Keys).
///
/// # Examples
///
/// ```
/// use datanote_core::{DataNote, Processor};
/// use datanote_csv::CsvProcessor;
///
/// let csv = CsvProcessor::new();
/// let note = csv.parse("a,b\r\n1,2\r\n").unwrap();
/// assert_eq!(note.at(1).at(0), &DataNote::from("1"));
/// assert_eq!(csv.present(&note).unwrap(), "a,b\r\n1,2\r\n");
/// ```
///
/// A header kept apart from the body:
///
/// ```
/// use datanote_core::DataNote;
/// use datanote_csv::{CsvConfig, CsvProcessor, FieldTyping};
///
/// let config = CsvConfig::builder().typing(FieldTyping::Json).build().unwrap();
/// let csv = CsvProcessor::with_config(config).unwrap();
/// let note = csv.parse_with_header("7,true\r\n", "id,ok").unwrap();
/// assert_eq!(note.at(0).at("id"), &DataNote::from(7));
/// assert_eq!(note.at(0).at("ok"), &DataNote::boole(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvProcessor {
    config: CsvConfig,
}

impl CsvProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A default processor with another separator, quote and escape byte.
    ///
    /// ```
    /// use datanote_core::{DataNote, Processor};
    /// use datanote_csv::CsvProcessor;
    ///
    /// let tsv = CsvProcessor::with_dialect(b'\t', b'\'', b'\\').unwrap();
    /// let note = tsv.parse("'a\tb'\tc").unwrap();
    /// assert_eq!(note.at(0), &DataNote::array(["a\tb", "c"]));
    /// ```
    pub fn with_dialect(separator: u8, quote: u8, escape: u8) -> Result<Self> {
        let dialect = Dialect::new(separator, quote, escape)?;
        Ok(Self {
            config: CsvConfig {
                dialect,
                ..CsvConfig::default()
            },
        })
    }

    pub fn with_config(config: CsvConfig) -> Result<Self> {
        config.dialect.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Parses `chunks` as if they were one concatenated text.
    pub fn parse_chunks(&self, chunks: &[&str]) -> DataResult<DataNote> {
        self.parse_chunks_with(chunks, &Identity)
    }

    pub fn parse_chunks_with(&self, chunks: &[&str], transform: &dyn Transform) -> DataResult<DataNote> {
        self.read(chunks, None, transform)
    }

    /// Parses `text` with the column names in `header`.
    ///
    /// `header` is read with the processor's dialect and only its first
    /// record is used. Every record of `text` is data, and rows are Tables
    /// whatever the configured [`HeaderMode`](crate::HeaderMode).
    pub fn parse_with_header(&self, text: &str, header: &str) -> DataResult<DataNote> {
        self.parse_with_header_with(text, header, &Identity)
    }

    pub fn parse_with_header_with(
        &self,
        text: &str,
        header: &str,
        transform: &dyn Transform,
    ) -> DataResult<DataNote> {
        self.read(&[text], Some(header), transform)
    }

    fn read(&self, chunks: &[&str], header: Option<&str>, transform: &dyn Transform) -> DataResult<DataNote> {
        let bytes: usize = chunks.iter().map(|c| c.len()).sum();
        debug!(
            format = self.name(),
            chunks = chunks.len(),
            bytes,
            external_header = header.is_some(),
            "parse started"
        );
        let mut builder = TreeBuilder::new(transform);
        self.scan_chunks(chunks, header, &mut builder)
            .map_err(|e| e.or_context(self.name()))?;
        let note = builder.finish().map_err(|e| e.or_context(self.name()))?;
        debug!(format = self.name(), rows = note.extent(), "parse finished");
        Ok(note)
    }

    fn scan_chunks(&self, chunks: &[&str], header: Option<&str>, sink: &mut dyn NoteSink) -> DataResult<()> {
        let keys = header.map(|h| read_header(h, &self.config)).transpose()?;
        read_rows(chunks, keys, &self.config, sink)
    }
}

impl Processor for CsvProcessor {
    fn name(&self) -> &'static str {
        "CSV"
    }

    fn scan(&self, text: &str, sink: &mut dyn NoteSink) -> DataResult<()> {
        self.scan_chunks(&[text], None, sink)
    }

    fn present_with(
        &self,
        note: &DataNote,
        layout: Layout,
        transform: &dyn Transform,
    ) -> DataResult<String> {
        write_rows(note, &self.config, layout, transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeaderMode;

    #[test]
    fn test_name_and_defaults() {
        let csv = CsvProcessor::new();
        assert_eq!(csv.name(), "CSV");
        assert_eq!(csv.config().header, HeaderMode::None);
    }

    #[test]
    fn test_with_dialect_validates() {
        assert!(CsvProcessor::with_dialect(b';', b'"', b'\\').is_ok());
        assert!(CsvProcessor::with_dialect(b'"', b'"', b'\\').is_err());
        let bad = CsvConfig {
            dialect: Dialect {
                separator: b'\n',
                ..Dialect::COMMA
            },
            ..CsvConfig::default()
        };
        assert!(CsvProcessor::with_config(bad).is_err());
    }

    #[test]
    fn test_error_context() {
        let err = CsvProcessor::new().parse("\"open").unwrap_err();
        assert!(err.is_lexical());
        assert_eq!(err.context.as_deref(), Some("CSV"));
        let err = CsvProcessor::new().parse_chunks(&["\"open"]).unwrap_err();
        assert_eq!(err.context.as_deref(), Some("CSV"));
    }

    #[test]
    fn test_external_header_overrides_skip() {
        let config = CsvConfig::builder().header(HeaderMode::Skip).build().unwrap();
        let csv = CsvProcessor::with_config(config).unwrap();
        let note = csv.parse_with_header("1,2\r\n", "a,b").unwrap();
        assert_eq!(note, DataNote::array([DataNote::table([("a", "1"), ("b", "2")])]));
    }

    #[test]
    fn test_build_with_custom_builder() {
        let rows = CsvProcessor::new().build("x,y\n", TreeBuilder::default()).unwrap();
        assert_eq!(rows.at(0).extent(), 2);
    }
}
