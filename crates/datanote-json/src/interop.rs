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


//! Conversion between DataNote trees and `serde_json::Value`.
//!
//! Numbers keep their literal text in both directions (serde_json is built
//! with `arbitrary_precision`) and object member order is preserved
//! (`preserve_order`).

use datanote_core::lex::NumberSyntax;
use datanote_core::{
    coerce, Data, DataError, DataNote, DataResult, Kind, NoteBuilder, NoteSink, Number, Slot,
};
use serde_json::{Map, Number as JsonNumber, Value as JsonValue};
use thiserror::Error;

/// Errors converting a tree into a `serde_json::Value`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JsonConversionError {
    /// Number literal with no JSON spelling
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Container used as a Table key
    #[error("Complex key has no JSON counterpart: {0}")]
    ComplexKey(Kind),

    /// Builder events out of order
    #[error("Malformed event stream: {0}")]
    Malformed(&'static str),
}

impl From<JsonConversionError> for DataError {
    fn from(err: JsonConversionError) -> Self {
        DataError::structural(err.to_string()).with_context("serde_json")
    }
}

/// Converts a `serde_json::Value` into a tree.
///
/// ```
/// use datanote_json::interop::from_json_value;
///
/// let value: serde_json::Value = serde_json::from_str(r#"{"a": [1.50, null]}"#).unwrap();
/// let note = from_json_value(&value);
/// assert_eq!(format!("{note:?}"), r#"{"a":[1.50,null]}"#);
/// ```
pub fn from_json_value(value: &JsonValue) -> DataNote {
    match value {
        JsonValue::Null => DataNote::void(),
        JsonValue::Bool(b) => DataNote::boole(*b),
        JsonValue::Number(n) => DataNote::number(number_from_json(n)),
        JsonValue::String(s) => DataNote::string(s.as_str()),
        JsonValue::Array(items) => DataNote::array(items.iter().map(from_json_value)),
        JsonValue::Object(map) => DataNote::table(
            map.iter()
                .map(|(k, v)| (DataNote::string(k.as_str()), from_json_value(v))),
        ),
    }
}

fn number_from_json(n: &JsonNumber) -> Number {
    let text = n.to_string();
    Number::parse_with(&text, NumberSyntax::JSON)
        .unwrap_or_else(|_| Number::from_f64(n.as_f64().unwrap_or(f64::NAN)))
}

/// Converts a tree into a `serde_json::Value`.
///
/// Char and Label become strings, Options become arrays and Simplex keys
/// become the string of their text. Complex keys and non-finite numbers
/// fail.
pub fn to_json_value(note: &DataNote) -> Result<JsonValue, JsonConversionError> {
    match note.data() {
        Data::Array(items) | Data::Option(items) => items
            .iter()
            .map(to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        Data::Table(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, value) in entries {
                map.insert(key_text(key)?, to_json_value(value)?);
            }
            Ok(JsonValue::Object(map))
        }
        _ => simplex_to_json(note),
    }
}

fn simplex_to_json(note: &DataNote) -> Result<JsonValue, JsonConversionError> {
    Ok(match note.data() {
        Data::Void => JsonValue::Null,
        Data::Boole(b) => JsonValue::Bool(*b),
        Data::Number(n) => JsonValue::Number(number_to_json(n)?),
        Data::String(s) | Data::Label(s) => JsonValue::String(s.clone()),
        Data::Char(c) => JsonValue::String(c.to_string()),
        Data::Array(_) | Data::Option(_) | Data::Table(_) => {
            return Err(JsonConversionError::Malformed("container offered as a leaf"))
        }
    })
}

fn number_to_json(n: &Number) -> Result<JsonNumber, JsonConversionError> {
    if n.conforms_to(NumberSyntax::JSON) {
        if let Ok(number) = serde_json::from_str::<JsonNumber>(n.as_str()) {
            return Ok(number);
        }
    }
    JsonNumber::from_f64(n.to_f64()).ok_or_else(|| JsonConversionError::InvalidNumber(n.to_string()))
}

fn key_text(key: &DataNote) -> Result<String, JsonConversionError> {
    match key.data() {
        Data::String(s) => Ok(s.clone()),
        Data::Void => Ok("null".to_string()),
        _ => coerce(key, Kind::String)
            .and_then(|s| s.as_string())
            .ok_or(JsonConversionError::ComplexKey(key.kind())),
    }
}

enum Frame {
    Array(Vec<JsonValue>),
    Object {
        map: Map<String, JsonValue>,
        key: Option<String>,
    },
}

/// Builds a `serde_json::Value` straight from parse events, skipping the
/// intermediate tree.
///
/// ```
/// use datanote_core::Processor;
/// use datanote_json::{interop::JsonValueBuilder, JexisProcessor};
///
/// let value = JexisProcessor::new()
///     .build("{Red: ('r', 1)}", JsonValueBuilder::default())
///     .unwrap();
/// assert_eq!(value, serde_json::json!({"Red": ["r", 1]}));
/// ```
#[derive(Default)]
pub struct JsonValueBuilder {
    stack: Vec<Frame>,
    root: Option<JsonValue>,
}

impl JsonValueBuilder {
    fn attach(&mut self, value: JsonValue) -> Result<(), JsonConversionError> {
        match self.stack.last_mut() {
            None if self.root.is_none() => {
                self.root = Some(value);
                Ok(())
            }
            None => Err(JsonConversionError::Malformed("more than one top-level value")),
            Some(Frame::Array(items)) => {
                items.push(value);
                Ok(())
            }
            Some(Frame::Object { map, key }) => match key.take() {
                Some(k) => {
                    map.insert(k, value);
                    Ok(())
                }
                None => match value {
                    JsonValue::String(k) => {
                        *key = Some(k);
                        Ok(())
                    }
                    _ => Err(JsonConversionError::Malformed("object key is not a string")),
                },
            },
        }
    }
}

impl NoteSink for JsonValueBuilder {
    fn simplex(&mut self, note: DataNote, slot: Slot) -> DataResult<()> {
        let value = if slot.is_key() {
            JsonValue::String(key_text(&note)?)
        } else {
            simplex_to_json(&note)?
        };
        Ok(self.attach(value)?)
    }

    fn open(&mut self, kind: Kind, slot: Slot) -> DataResult<()> {
        if slot.is_key() {
            return Err(JsonConversionError::ComplexKey(kind).into());
        }
        self.stack.push(match kind {
            Kind::Table => Frame::Object {
                map: Map::new(),
                key: None,
            },
            _ => Frame::Array(Vec::new()),
        });
        Ok(())
    }

    fn close(&mut self) -> DataResult<()> {
        let value = match self.stack.pop() {
            Some(Frame::Array(items)) => JsonValue::Array(items),
            Some(Frame::Object { key: Some(_), .. }) => {
                return Err(JsonConversionError::Malformed("object key without value").into())
            }
            Some(Frame::Object { map, key: None }) => JsonValue::Object(map),
            None => return Err(JsonConversionError::Malformed("close without open container").into()),
        };
        Ok(self.attach(value)?)
    }
}

impl NoteBuilder for JsonValueBuilder {
    type Output = JsonValue;

    fn finish(self) -> DataResult<JsonValue> {
        if !self.stack.is_empty() {
            return Err(JsonConversionError::Malformed("unclosed container").into());
        }
        self.root
            .ok_or_else(|| JsonConversionError::Malformed("input holds no value").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_value_keeps_literals() {
        let value: JsonValue = serde_json::from_str(r#"{"b": 1E0, "a": 1.0}"#).unwrap();
        let note = from_json_value(&value);
        assert_eq!(format!("{note:?}"), r#"{"b":1E0,"a":1.0}"#);
    }

    #[test]
    fn test_to_json_value_downgrades() {
        let note = DataNote::table([
            (DataNote::from("s"), DataNote::option([DataNote::char('c'), DataNote::label("L")])),
            (DataNote::from(2), DataNote::void()),
        ]);
        assert_eq!(to_json_value(&note).unwrap(), json!({"s": ["c", "L"], "2": null}));
    }

    #[test]
    fn test_to_json_value_errors() {
        let complex = DataNote::table([(DataNote::array([1]), 1)]);
        assert_eq!(
            to_json_value(&complex).unwrap_err(),
            JsonConversionError::ComplexKey(Kind::Array)
        );
        let nan = DataNote::from(f64::NAN);
        assert!(matches!(to_json_value(&nan), Err(JsonConversionError::InvalidNumber(_))));
    }

    #[test]
    fn test_radix_number_becomes_decimal() {
        let note = DataNote::number(Number::parse("0x10").unwrap());
        assert_eq!(to_json_value(&note).unwrap(), json!(16.0));
    }

    #[test]
    fn test_builder_rejects_complex_keys() {
        let mut builder = JsonValueBuilder::default();
        builder.open(Kind::Table, Slot::Value).unwrap();
        let err = builder.open(Kind::Array, Slot::Key).unwrap_err();
        assert!(err.is_structural());
    }
}
