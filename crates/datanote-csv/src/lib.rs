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

//! CSV processor for DataNote trees.
//!
//! A CSV text reads as an Array of rows. Each row is an Array of fields,
//! or a Table keyed by the header when [`HeaderMode::Keys`] is set.
//! Presenting goes the other way and accepts an Array or Option of rows
//! whose fields are all Simplex.
//!
//! # Features
//!
//! - **Dialects**: any ASCII separator, quote and escape byte ([`Dialect`])
//! - **Chunked input**: a text split at arbitrary points parses exactly like
//!   the joined text ([`CsvProcessor::parse_chunks`])
//! - **Headers**: inline, skipped, or supplied apart from the body
//! - **Field typing**: optional JSON or extended JSON reading of each field
//! - **Ragged rows**: short rows are padded with Void, surplus fields are
//!   keyed by [`surplus_key`]
//! - **Security**: a configurable row limit ([`DEFAULT_MAX_ROWS`])
//!
//! # Examples
//!
//! ## Reading keyed rows
//!
//! ```
//! use datanote_core::{DataNote, Kind};
//! use datanote_csv::{surplus_key, CsvConfig, CsvProcessor, HeaderMode};
//!
//! let config = CsvConfig::builder().header(HeaderMode::Keys).build().unwrap();
//! let csv = CsvProcessor::with_config(config).unwrap();
//! let note = csv.parse_chunks(&["A,BB\r\n1\r\n4444,555", "55,666666\r\n"]).unwrap();
//!
//! assert_eq!(note.extent(), 2);
//! assert_eq!(note.at(0).at("A"), &DataNote::from("1"));
//! assert_eq!(note.at(0).at("BB").kind(), Kind::Void);
//! assert_eq!(note.at(1).at("BB"), &DataNote::from("55555"));
//! assert_eq!(note.at(1).at(surplus_key(2)), &DataNote::from("666666"));
//! ```
//!
//! ## Writing rows
//!
//! ```
//! use datanote_core::{DataNote, Layout, Processor};
//! use datanote_csv::CsvProcessor;
//!
//! let rows = DataNote::array([
//!     DataNote::array(["name", "note"]),
//!     DataNote::array(["Ada", "likes, commas"]),
//! ]);
//! let csv = CsvProcessor::new();
//! assert_eq!(
//!     csv.present(&rows).unwrap(),
//!     "name,note\r\nAda,\"likes, commas\"\r\n"
//! );
//! assert_eq!(
//!     csv.present_with(&rows, Layout::Pretty, &datanote_core::Identity).unwrap(),
//!     "\"name\",\"note\"\r\n\"Ada\",\"likes, commas\"\r\n"
//! );
//! ```

mod config;
mod error;
mod from_csv;
mod processor;
mod records;
mod to_csv;

pub use config::{CsvConfig, CsvConfigBuilder, Dialect, FieldTyping, HeaderMode, DEFAULT_MAX_ROWS};
pub use error::{CsvError, Result};
pub use from_csv::surplus_key;
pub use processor::CsvProcessor;
