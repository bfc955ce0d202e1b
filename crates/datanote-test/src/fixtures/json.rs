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


//! JSON fixtures.

use datanote_core::{DataNote, Number};

fn num(literal: &str) -> DataNote {
    Number::parse(literal)
        .map(DataNote::number)
        .unwrap_or_else(|| panic!("fixture number {literal} is not a literal"))
}

fn empty_table() -> DataNote {
    DataNote::table(Vec::<(DataNote, DataNote)>::new())
}

/// Every Simplex kind JSON can spell.
pub const SCALARS_JSON: &str = r#"{"s": "text", "n": 42, "t": true, "f": false, "z": null}"#;

pub fn scalars() -> DataNote {
    DataNote::table([
        ("s", DataNote::from("text")),
        ("n", DataNote::from(42)),
        ("t", DataNote::boole(true)),
        ("f", DataNote::boole(false)),
        ("z", DataNote::void()),
    ])
}

/// Number literals that differ only in spelling stay distinct.
pub const NUMBERS_JSON: &str = "[1, 1.0, 1E0, -0, 0.5e-3, 12345678901234567890123]";

pub fn numbers() -> DataNote {
    DataNote::array(
        ["1", "1.0", "1E0", "-0", "0.5e-3", "12345678901234567890123"].map(num),
    )
}

/// Escapes, including a surrogate pair.
pub const ESCAPES_JSON: &str =
    r#"["tab\there", "quote\"", "slash\/", "\u00e9", "\uD83D\uDE00", "line\nbreak"]"#;

pub fn escapes() -> DataNote {
    DataNote::array(["tab\there", "quote\"", "slash/", "é", "😀", "line\nbreak"])
}

/// An array of records.
pub const PEOPLE_JSON: &str = r#"[
  {"name": "Ada", "born": 1815, "langs": ["en", "fr"]},
  {"name": "Alan", "born": 1912, "langs": []}
]"#;

pub fn people() -> DataNote {
    DataNote::array([
        DataNote::table([
            ("name", DataNote::from("Ada")),
            ("born", DataNote::from(1815)),
            ("langs", DataNote::array(["en", "fr"])),
        ]),
        DataNote::table([
            ("name", DataNote::from("Alan")),
            ("born", DataNote::from(1912)),
            ("langs", DataNote::array(Vec::<DataNote>::new())),
        ]),
    ])
}

/// Depth three with empty containers along the way.
pub const NESTED_JSON: &str = r#"{"a": {"b": {"c": [[], {}]}}, "d": [[1, 2], [3, 4]]}"#;

pub fn nested() -> DataNote {
    DataNote::table([
        (
            "a",
            DataNote::table([(
                "b",
                DataNote::table([(
                    "c",
                    DataNote::array([DataNote::array(Vec::<DataNote>::new()), empty_table()]),
                )]),
            )]),
        ),
        ("d", DataNote::from(vec![vec![1, 2], vec![3, 4]])),
    ])
}

/// The JSON twin of [`CODES_CSV`](super::CODES_CSV) read with
/// [`CODES_HEADER`](super::CODES_HEADER) and JSON field typing.
pub const CODES_JSON: &str = r#"[
  {"Code": 333, "Char": "M", "Name": 1},
  {"Code": 955, "Char": "λ", "Name": "lambda"}
]"#;

pub fn codes() -> DataNote {
    DataNote::array([
        DataNote::table([
            ("Code", DataNote::from(333)),
            ("Char", DataNote::from("M")),
            ("Name", DataNote::from(1)),
        ]),
        DataNote::table([
            ("Code", DataNote::from(955)),
            ("Char", DataNote::from("λ")),
            ("Name", DataNote::from("lambda")),
        ]),
    ])
}
