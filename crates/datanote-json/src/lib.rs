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


//! JSON and JEXIS processors for DataNote.
//!
//! Both formats share one bracket grammar engine; [`Grammar`] describes
//! what each of them accepts.
//!
//! # Features
//!
//! - **JSON**: standard JSON, numbers kept as literal text
//! - **Extended numbers**: optional `Infinity`, `NaN`, digit separators,
//!   radix integers and hexadecimal floats
//! - **JEXIS**: a strict superset of JSON with Chars, Labels, Options,
//!   keys of any kind and comments
//! - **Downgrade**: [`JsonDowngrade`] presents JEXIS trees as JSON
//! - **serde_json interop**: [`interop`] converts to and from
//!   `serde_json::Value`
//! - **Security Limits**: configurable depth, string and container limits
//!
//! # Examples
//!
//! ```rust
//! use datanote_core::Processor;
//! use datanote_json::{JexisProcessor, JsonProcessor};
//!
//! let text = r#"{"name": "Ada", "langs": ["en", "fr"]}"#;
//! let json = JsonProcessor::new().parse(text).unwrap();
//! let jexis = JexisProcessor::new().parse(text).unwrap();
//! assert_eq!(json, jexis);
//!
//! let pretty = JsonProcessor::new().present_pretty(&json).unwrap();
//! assert_eq!(pretty, "{\n  \"name\": \"Ada\",\n  \"langs\": [\n    \"en\",\n    \"fr\"\n  ]\n}");
//! ```

mod grammar;
pub mod interop;
mod jexis;
mod json;
mod parser;
mod scanner;
mod writer;

pub use grammar::{
    Grammar, GrammarConfig, GrammarConfigBuilder, DEFAULT_INDENT, DEFAULT_MAX_CONTAINER_SIZE,
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_STRING_LENGTH,
};
pub use interop::{from_json_value, to_json_value, JsonConversionError, JsonValueBuilder};
pub use jexis::JexisProcessor;
pub use json::{JsonDowngrade, JsonProcessor};
