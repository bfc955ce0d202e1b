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


//! Proptest strategies for arbitrary trees.
//!
//! [`arb_note`] covers every kind with values that JEXIS can spell;
//! [`arb_json_note`] stays inside what plain JSON can spell.

use datanote_core::lex::numbers::EXTENDED_WORDS;
use datanote_core::{DataNote, Number};
use proptest::prelude::*;

/// Number literals in JSON syntax, integers and decimals with exponents.
pub fn arb_number() -> impl Strategy<Value = DataNote> {
    prop_oneof![
        any::<i64>().prop_map(DataNote::from),
        (any::<i32>(), 0u32..1000, prop::option::of(-20i32..20)).prop_map(|(int, frac, exp)| {
            let literal = match exp {
                Some(e) => format!("{int}.{frac}e{e}"),
                None => format!("{int}.{frac}"),
            };
            Number::parse(&literal).map_or_else(DataNote::void, DataNote::number)
        }),
    ]
}

/// Labels that are never keywords or extended number words.
pub fn arb_label() -> impl Strategy<Value = DataNote> {
    "[A-Z_][A-Za-z0-9_]{0,7}"
        .prop_filter("extended number word", |s| !EXTENDED_WORDS.contains(&s.as_str()))
        .prop_map(DataNote::label)
}

fn arb_json_simplex() -> impl Strategy<Value = DataNote> {
    prop_oneof![
        ".{0,12}".prop_map(DataNote::string),
        arb_number(),
        any::<bool>().prop_map(DataNote::boole),
        Just(DataNote::void()),
    ]
}

/// Any Simplex node.
pub fn arb_simplex() -> impl Strategy<Value = DataNote> {
    prop_oneof![
        4 => arb_json_simplex(),
        1 => any::<char>().prop_map(DataNote::char),
        1 => arb_label(),
    ]
}

/// Trees JSON can spell: String keys, no Char, Label or Option.
pub fn arb_json_note() -> impl Strategy<Value = DataNote> {
    arb_json_simplex().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(DataNote::array),
            prop::collection::vec(("[a-z]{0,6}", inner), 0..6).prop_map(DataNote::table),
        ]
    })
}

/// Trees of every kind, with keys of every kind.
pub fn arb_note() -> impl Strategy<Value = DataNote> {
    arb_simplex().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(DataNote::array),
            prop::collection::vec(inner.clone(), 0..6).prop_map(DataNote::option),
            prop::collection::vec((inner.clone(), inner), 0..6).prop_map(DataNote::table),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use datanote_core::{Data, Kind};

    fn json_only(note: &DataNote) -> bool {
        match note.data() {
            Data::Char(_) | Data::Label(_) | Data::Option(_) => false,
            Data::Array(items) => items.iter().all(json_only),
            Data::Table(map) => map
                .iter()
                .all(|(k, v)| k.kind() == Kind::String && json_only(v)),
            _ => true,
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: the JSON strategy never leaves the JSON subset
        #[test]
        fn prop_json_strategy_is_json(note in arb_json_note()) {
            prop_assert!(json_only(&note));
        }

        /// Property: generated labels are valid
        #[test]
        fn prop_labels_valid(label in arb_label()) {
            let text = label.as_str().unwrap_or_default();
            prop_assert!(datanote_core::lex::is_valid_label(text, true));
        }
    }
}
