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


//! # DataNote - one value tree, many text formats
//!
//! DataNote reads semi-structured text into a single immutable value tree
//! and writes it back out, in any of the supported formats.
//!
//! ## Quick Start
//!
//! ```rust
//! use datanote::{by_jexis, path, DataNote, NoteFormats};
//!
//! let note = by_jexis(r#"{"name": 'A', "langs": (Rust, C)}"#).unwrap();
//! assert_eq!(note.at("name").as_char(), Some('A'));
//! assert_eq!(note.at_path(&path!["langs"]).extent(), 2);
//!
//! // Writes return a new tree and leave the old one intact
//! let next = note.set("name", "Ada").unwrap();
//! assert_eq!(next.as_json().unwrap_err().kind, datanote::ErrorKind::Structural);
//! assert_eq!(
//!     next.set("langs", DataNote::array(["Rust"])).unwrap().as_json().unwrap(),
//!     r#"{"name":"Ada","langs":["Rust"]}"#
//! );
//! ```
//!
//! ## Formats
//!
//! - [`json`]: standard JSON ([`json::JsonProcessor`]), optionally with
//!   extended numbers, and JEXIS ([`json::JexisProcessor`]), a superset
//!   adding Chars, Labels, Options, keys of any kind and comments
//! - [`csv`]: delimited text with configurable dialect and headers
//!
//! Every format implements [`Processor`]; parse and present accept a
//! [`Transform`] that sees every node on its way in or out.

pub use datanote_core::{
    coerce, path, traverse, Data, DataError, DataNote, DataResult, ErrorKind, Identity, Kind,
    Layout, Limits, NoteBuilder, NoteSink, NoteVisitor, Number, NumberNormalizer, Processor,
    Slot, Transform, TransformError, TreeBuilder, VisitorContext,
};

pub mod lex {
    //! Lexical building blocks shared by the scanners
    pub use datanote_core::lex::{LexError, NumberSyntax, SourcePos};
}

pub mod json {
    //! JSON and JEXIS processors
    pub use datanote_json::{
        from_json_value, to_json_value, Grammar, GrammarConfig, GrammarConfigBuilder,
        JexisProcessor, JsonConversionError, JsonDowngrade, JsonProcessor, JsonValueBuilder,
    };
}

pub mod csv {
    //! The CSV processor
    pub use datanote_csv::{
        surplus_key, CsvConfig, CsvConfigBuilder, CsvError, CsvProcessor, Dialect, FieldTyping,
        HeaderMode, DEFAULT_MAX_ROWS,
    };
}

use datanote_csv::CsvProcessor;
use datanote_json::{JexisProcessor, JsonProcessor};

/// Parses `text` with `processor`.
///
/// ```rust
/// use datanote::csv::CsvProcessor;
///
/// let tsv = CsvProcessor::with_dialect(b'\t', b'"', b'\\').unwrap();
/// let rows = datanote::by(&tsv, "a\tb\n").unwrap();
/// assert_eq!(rows.at(0).extent(), 2);
/// ```
#[inline]
pub fn by<P: Processor + ?Sized>(processor: &P, text: &str) -> DataResult<DataNote> {
    processor.parse(text)
}

/// Parses CSV with the default dialect; rows are Arrays of Strings.
#[inline]
pub fn by_csv(text: &str) -> DataResult<DataNote> {
    by(&CsvProcessor::new(), text)
}

/// Parses standard JSON.
///
/// ```rust
/// let note = datanote::by_json(r#"{"a": [1, null]}"#).unwrap();
/// assert_eq!(note.depth(), 2);
/// ```
#[inline]
pub fn by_json(text: &str) -> DataResult<DataNote> {
    by(&JsonProcessor::new(), text)
}

/// Parses JEXIS.
#[inline]
pub fn by_jexis(text: &str) -> DataResult<DataNote> {
    by(&JexisProcessor::new(), text)
}

/// Presenting a tree in each built-in format with default settings.
///
/// Formats that cannot hold a node fail rather than convert it:
/// [`as_json`](Self::as_json) rejects Chars, Labels, Options and
/// non-String keys. Present through [`json::JsonDowngrade`] to convert
/// instead.
pub trait NoteFormats {
    fn as_csv(&self) -> DataResult<String>;
    fn as_csv_pretty(&self) -> DataResult<String>;
    fn as_json(&self) -> DataResult<String>;
    fn as_json_pretty(&self) -> DataResult<String>;
    fn as_jexis(&self) -> DataResult<String>;
    fn as_jexis_pretty(&self) -> DataResult<String>;
}

impl NoteFormats for DataNote {
    fn as_csv(&self) -> DataResult<String> {
        CsvProcessor::new().present(self)
    }

    fn as_csv_pretty(&self) -> DataResult<String> {
        CsvProcessor::new().present_pretty(self)
    }

    fn as_json(&self) -> DataResult<String> {
        JsonProcessor::new().present(self)
    }

    fn as_json_pretty(&self) -> DataResult<String> {
        JsonProcessor::new().present_pretty(self)
    }

    fn as_jexis(&self) -> DataResult<String> {
        JexisProcessor::new().present(self)
    }

    fn as_jexis_pretty(&self) -> DataResult<String> {
        JexisProcessor::new().present_pretty(self)
    }
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
