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


//! The JSON processor and the transform that downgrades JEXIS trees to
//! JSON.

use datanote_core::lex::NumberSyntax;
use datanote_core::{
    coerce, Data, DataNote, DataResult, Kind, Layout, NoteSink, Number, Processor, Slot,
    Transform, TransformError,
};

use crate::grammar::{Grammar, GrammarConfig};
use crate::parser::read_document;
use crate::writer::write_document;

/// Reads and writes standard JSON.
///
/// # Examples
///
/// ```
/// use datanote_core::{DataNote, Processor};
/// use datanote_json::JsonProcessor;
///
/// let json = JsonProcessor::new();
/// let note = json.parse(r#"{"id": 7, "tags": ["a", "b"]}"#).unwrap();
/// assert_eq!(note.at("id"), &DataNote::from(7));
/// assert_eq!(json.present(&note).unwrap(), r#"{"id":7,"tags":["a","b"]}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonProcessor {
    config: GrammarConfig,
}

impl JsonProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A processor that also accepts `Infinity`, `NaN`, digit separators,
    /// radix integers and hexadecimal floats.
    pub fn extended() -> Self {
        Self::with_config(GrammarConfig::builder().extended_numbers(true).build())
    }

    pub fn with_config(config: GrammarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    pub fn grammar(&self) -> Grammar {
        Grammar::JSON.with_extended_numbers(self.config.extended_numbers)
    }
}

impl Processor for JsonProcessor {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn scan(&self, text: &str, sink: &mut dyn NoteSink) -> DataResult<()> {
        read_document(text, &self.grammar(), &self.config.limits, sink)
    }

    fn present_with(
        &self,
        note: &DataNote,
        layout: Layout,
        transform: &dyn Transform,
    ) -> DataResult<String> {
        write_document(note, &self.grammar(), self.config.indent, layout, transform)
    }
}

/// Rewrites the JEXIS-only parts of a tree into their closest JSON form.
///
/// | Node                          | Becomes                         |
/// |-------------------------------|---------------------------------|
/// | Char or Label value           | String                          |
/// | Option                        | Array, members in stored order  |
/// | Simplex key other than String | String of its text (`null` for Void) |
/// | Complex key                   | error "Incorrect complex key"   |
/// | radix or hex-float Number     | decimal Number of equal value   |
///
/// `Infinity` and `NaN` are kept; only an extended JSON processor accepts
/// them.
///
/// ```
/// use datanote_core::{DataNote, Processor};
/// use datanote_json::{JexisProcessor, JsonDowngrade, JsonProcessor};
///
/// let note = JexisProcessor::new().parse("{1: ('x', Blue)}").unwrap();
/// let text = JsonProcessor::new().present_with(&note, Default::default(), &JsonDowngrade).unwrap();
/// assert_eq!(text, r#"{"1":["x","Blue"]}"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDowngrade;

impl Transform for JsonDowngrade {
    fn apply(&self, note: DataNote, slot: Slot) -> Result<DataNote, TransformError> {
        match (note.data(), slot) {
            (Data::String(_) | Data::Boole(_) | Data::Void | Data::Array(_) | Data::Table(_), Slot::Value) => {
                Ok(note)
            }
            (Data::String(_), Slot::Key) => Ok(note),
            (Data::Array(_) | Data::Option(_) | Data::Table(_), Slot::Key) => {
                Err(TransformError::new("Incorrect complex key"))
            }
            (Data::Void, Slot::Key) => Ok(DataNote::string("null")),
            (Data::Option(items), Slot::Value) => Ok(DataNote::new(Data::Array(items.clone()))),
            (Data::Number(n), Slot::Value) => Ok(decimal(n).map_or(note.clone(), DataNote::number)),
            (_, _) => coerce(&note, Kind::String)
                .ok_or_else(|| TransformError::new(format!("{} has no JSON form", note.kind()))),
        }
    }
}

/// Decimal spelling of a radix or hex-float literal.
fn decimal(n: &Number) -> Option<Number> {
    if n.conforms_to(NumberSyntax::JSON) {
        return None;
    }
    n.to_decimal().map(Number::from)
}
