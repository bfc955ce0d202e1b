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

//! Best-effort conversion between kinds and typed extraction.
//!
//! All conversions go through one table, [`coerce`]. A conversion that
//! cannot succeed is a miss and yields `None`; it is never an error.
//!
//! | From \ To      | String | Number        | Char       | Label       | Boole          | Array  | Option | Table         |
//! |----------------|--------|---------------|------------|-------------|----------------|--------|--------|---------------|
//! | String         | =      | valid literal | one scalar | valid label | `true`/`false` |        |        |               |
//! | Number         | text   | =             |            |             | non-zero       |        |        |               |
//! | Char           | text   |               | =          | valid label |                |        |        |               |
//! | Label          | text   | valid literal | one scalar | =           | `true`/`false` |        |        |               |
//! | Boole          | text   | `1`/`0`       |            |             | =              |        |        |               |
//! | Void           |        |               |            |             |                |        |        |               |
//! | Array          |        |               |            |             |                | =      | same   | index keys    |
//! | Option         |        |               |            |             |                | same   | =      | member → true |
//! | Table          |        |               |            |             |                | values | values | =             |
//!
//! `Void` converts only to itself. Number literals are read with every
//! extension enabled, so `"0x10"` and `"Infinity"` convert.

use std::borrow::Cow;
use std::collections::HashSet;
use std::hash::Hash;

use bigdecimal::BigDecimal;
use indexmap::IndexMap;

use crate::kind::Kind;
use crate::lex::tokens::is_valid_label;
use crate::number::Number;
use crate::value::{Data, DataNote};

fn text(note: &DataNote) -> Option<Cow<'_, str>> {
    match note.data() {
        Data::String(s) | Data::Label(s) => Some(Cow::Borrowed(s)),
        Data::Number(n) => Some(Cow::Borrowed(n.as_str())),
        Data::Char(c) => Some(Cow::Owned(c.to_string())),
        Data::Boole(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        _ => None,
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Converts `note` to the `target` kind, or returns `None` on a miss.
pub fn coerce(note: &DataNote, target: Kind) -> Option<DataNote> {
    let source = note.kind();
    if source == target {
        return Some(note.clone());
    }
    match (note.data(), target) {
        (Data::Void, _) => None,
        (Data::Label(_) | Data::Number(_) | Data::Boole(_) | Data::Char(_), Kind::String) => {
            text(note).map(DataNote::string)
        }
        (Data::String(s) | Data::Label(s), Kind::Number) => Number::parse(s).map(DataNote::number),
        (Data::Boole(b), Kind::Number) => Some(DataNote::from(u8::from(*b))),
        (Data::String(s) | Data::Label(s), Kind::Char) => single_char(s).map(DataNote::char),
        (Data::String(s) | Data::Label(s), Kind::Boole) => match s.as_str() {
            "true" => Some(DataNote::boole(true)),
            "false" => Some(DataNote::boole(false)),
            _ => None,
        },
        (Data::Number(n), Kind::Boole) => Some(DataNote::boole(!n.is_zero())),
        (Data::String(_) | Data::Char(_), Kind::Label) => {
            let t = text(note)?;
            is_valid_label(&t, true).then(|| DataNote::label(t.into_owned()))
        }
        (Data::Array(items), Kind::Option) => Some(DataNote::new(Data::Option(items.clone()))),
        (Data::Option(items), Kind::Array) => Some(DataNote::new(Data::Array(items.clone()))),
        (Data::Table(map), Kind::Array) => Some(DataNote::array(map.values())),
        (Data::Table(map), Kind::Option) => Some(DataNote::option(map.values())),
        (Data::Array(items), Kind::Table) => Some(DataNote::table(
            items.iter().enumerate().map(|(i, item)| (i, item.clone())),
        )),
        (Data::Option(items), Kind::Table) => {
            Some(DataNote::table(items.iter().map(|item| (item.clone(), true))))
        }
        _ => None,
    }
}

impl DataNote {
    /// Converts to `kind` through the conversion table.
    pub fn as_kind(&self, kind: Kind) -> Option<DataNote> {
        coerce(self, kind)
    }

    pub fn as_string(&self) -> Option<String> {
        match self.data() {
            Data::String(s) => Some(s.clone()),
            _ => coerce(self, Kind::String)?.as_string(),
        }
    }

    /// Borrowed text of a String or Label node.
    pub fn as_str(&self) -> Option<&str> {
        match self.data() {
            Data::String(s) | Data::Label(s) => Some(s),
            _ => None,
        }
    }

    /// Exact decimal value.
    pub fn as_number(&self) -> Option<BigDecimal> {
        self.with_number(Number::to_decimal)?
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.with_number(Number::to_f64)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.with_number(Number::to_i64)?
    }

    pub fn as_char(&self) -> Option<char> {
        match coerce(self, Kind::Char)?.data() {
            Data::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Unicode code point of the Char conversion.
    pub fn as_code(&self) -> Option<u32> {
        self.as_char().map(u32::from)
    }

    pub fn as_boole(&self) -> Option<bool> {
        match coerce(self, Kind::Boole)?.data() {
            Data::Boole(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_boole_or(&self, default: bool) -> bool {
        self.as_boole().unwrap_or(default)
    }

    /// True for `Void`, including the absent sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self.data(), Data::Void)
    }

    /// Elements of the Array conversion.
    pub fn as_array(&self) -> Option<Vec<DataNote>> {
        match self.data() {
            Data::Array(items) => Some(items.clone()),
            _ => coerce(self, Kind::Array)?.as_array(),
        }
    }

    /// Elements of the Array conversion, each converted by `f`. A miss on
    /// any element is a miss for the whole list.
    pub fn as_list<T>(&self, f: impl FnMut(&DataNote) -> Option<T>) -> Option<Vec<T>> {
        let array = coerce(self, Kind::Array)?;
        array.elements()?.iter().map(f).collect()
    }

    /// Members of the Option conversion, each converted by `f`.
    pub fn as_set<T: Eq + Hash>(&self, f: impl FnMut(&DataNote) -> Option<T>) -> Option<HashSet<T>> {
        let option = coerce(self, Kind::Option)?;
        option.elements()?.iter().map(f).collect()
    }

    /// Entries of the Table conversion, keys and values converted by
    /// `key` and `value`.
    pub fn as_map<K, V>(
        &self,
        mut key: impl FnMut(&DataNote) -> Option<K>,
        mut value: impl FnMut(&DataNote) -> Option<V>,
    ) -> Option<IndexMap<K, V>>
    where
        K: Eq + Hash,
    {
        let table = coerce(self, Kind::Table)?;
        table
            .entries()?
            .iter()
            .map(|(k, v)| Some((key(k)?, value(v)?)))
            .collect()
    }

    fn with_number<T>(&self, f: impl FnOnce(&Number) -> T) -> Option<T> {
        match self.data() {
            Data::Number(n) => Some(f(n)),
            _ => match coerce(self, Kind::Number)?.data() {
                Data::Number(n) => Some(f(n)),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn num(text: &str) -> DataNote {
        DataNote::number(Number::parse(text).unwrap())
    }

    // ==================== Simplex conversion tests ====================

    #[test]
    fn test_to_string() {
        assert_eq!(DataNote::label("Hi").as_string().as_deref(), Some("Hi"));
        assert_eq!(num("1.50").as_string().as_deref(), Some("1.50"));
        assert_eq!(DataNote::boole(true).as_string().as_deref(), Some("true"));
        assert_eq!(DataNote::char('😀').as_string().as_deref(), Some("😀"));
        assert_eq!(DataNote::void().as_string(), None);
        assert_eq!(DataNote::array([1]).as_string(), None);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(DataNote::from("12.5").as_f64(), Some(12.5));
        assert_eq!(DataNote::from("0x400P0").as_f64(), Some(1024.0));
        assert_eq!(DataNote::from("abc").as_f64(), None);
        assert_eq!(DataNote::boole(true).as_f64(), Some(1.0));
        assert_eq!(DataNote::boole(false).as_i64(), Some(0));
        assert_eq!(DataNote::void().as_f64(), None);
        assert_eq!(
            num("0.1000000000000000000001").as_number(),
            Some(BigDecimal::from_str("0.1000000000000000000001").unwrap())
        );
        assert_eq!(DataNote::label("Infinity").as_f64(), Some(f64::INFINITY));
        assert_eq!(num("NaN").as_number(), None);
    }

    #[test]
    fn test_to_char() {
        assert_eq!(DataNote::from("x").as_char(), Some('x'));
        assert_eq!(DataNote::from("😀").as_code(), Some(0x1F600));
        assert_eq!(DataNote::from("xy").as_char(), None);
        assert_eq!(DataNote::from("").as_char(), None);
        assert_eq!(num("1").as_char(), None);
    }

    #[test]
    fn test_to_boole() {
        assert_eq!(DataNote::from("true").as_boole(), Some(true));
        assert_eq!(DataNote::label("false").as_boole(), Some(false));
        assert_eq!(num("0.0").as_boole(), Some(false));
        assert_eq!(num("NaN").as_boole(), Some(true));
        assert_eq!(DataNote::from("yes").as_boole(), None);
        assert!(DataNote::void().as_boole_or(true));
        assert!(!DataNote::from("yes").as_boole_or(false));
    }

    #[test]
    fn test_to_label() {
        assert_eq!(coerce(&DataNote::from("ok_1"), Kind::Label), Some(DataNote::label("ok_1")));
        assert_eq!(coerce(&DataNote::from("not ok"), Kind::Label), None);
        assert_eq!(coerce(&DataNote::from("null"), Kind::Label), None);
        assert_eq!(coerce(&DataNote::char('x'), Kind::Label), Some(DataNote::label("x")));
    }

    #[test]
    fn test_void_only_to_void() {
        for kind in Kind::ALL {
            let converted = coerce(&DataNote::void(), kind);
            assert_eq!(converted.is_some(), kind == Kind::Void, "{kind}");
        }
        assert!(DataNote::void().is_null());
        assert!(DataNote::absent().is_null());
    }

    // ==================== Complex conversion tests ====================

    #[test]
    fn test_array_option_swap() {
        let arr = DataNote::array([1, 2]);
        assert_eq!(coerce(&arr, Kind::Option), Some(DataNote::option([2, 1])));
        let opt = DataNote::option([3]);
        assert_eq!(opt.as_array(), Some(vec![DataNote::from(3)]));
    }

    #[test]
    fn test_table_views() {
        let table = DataNote::table([("a", 1), ("b", 2)]);
        assert_eq!(table.as_array(), Some(vec![DataNote::from(1), DataNote::from(2)]));
        let arr = DataNote::array(["x", "y"]);
        assert_eq!(coerce(&arr, Kind::Table), Some(DataNote::table([(0, "x"), (1, "y")])));
        let opt = DataNote::option(["x"]);
        assert_eq!(coerce(&opt, Kind::Table), Some(DataNote::table([("x", true)])));
    }

    #[test]
    fn test_simplex_to_complex_misses() {
        assert_eq!(coerce(&DataNote::from("[1]"), Kind::Array), None);
        assert_eq!(coerce(&DataNote::array([1]), Kind::String), None);
    }

    // ==================== Collection extraction tests ====================

    #[test]
    fn test_as_list() {
        let arr = DataNote::array([1, 2, 3]);
        assert_eq!(arr.as_list(DataNote::as_i64), Some(vec![1, 2, 3]));
        let mixed = DataNote::array([DataNote::from(1), DataNote::from("x")]);
        assert_eq!(mixed.as_list(DataNote::as_i64), None);
        assert_eq!(mixed.as_list(DataNote::as_string), Some(vec!["1".into(), "x".into()]));
    }

    #[test]
    fn test_as_set() {
        let opt = DataNote::option(["a", "b", "a"]);
        let set = opt.as_set(DataNote::as_string).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
    }

    #[test]
    fn test_as_map() {
        let table = DataNote::table([("x", 1), ("y", 2)]);
        let map = table.as_map(DataNote::as_string, DataNote::as_i64).unwrap();
        assert_eq!(map.get("y"), Some(&2));
        assert_eq!(map.get_index(0).map(|(k, _)| k.as_str()), Some("x"));
        assert_eq!(DataNote::from(1).as_map(DataNote::as_string, DataNote::as_i64), None);
    }

    #[test]
    fn test_as_str_borrows() {
        let s = DataNote::from("text");
        assert_eq!(s.as_str(), Some("text"));
        assert_eq!(DataNote::from(1).as_str(), None);
    }
}
