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


//! JEXIS fixtures.

use datanote_core::DataNote;

/// One of everything JEXIS adds to JSON.
pub const SHOWCASE_JEXIS: &str = r#"# A tour of JEXIS #
{
  "title": "Palette",
  Primary: (Red, Green, Blue),
  'c': 'λ',
  [0, 0]: "origin",
  (A, null): "set-like key",   # keys of any kind #
  "count": +1_000,
  "ratio": 0.25,
  "on": true,
  "none": null
}
"#;

pub fn showcase() -> DataNote {
    DataNote::table([
        (DataNote::from("title"), DataNote::from("Palette")),
        (
            DataNote::label("Primary"),
            DataNote::option(["Red", "Green", "Blue"].map(DataNote::label)),
        ),
        (DataNote::char('c'), DataNote::char('λ')),
        (DataNote::array([0, 0]), DataNote::from("origin")),
        (
            DataNote::option([DataNote::label("A"), DataNote::void()]),
            DataNote::from("set-like key"),
        ),
        (DataNote::from("count"), DataNote::from(1000)),
        (DataNote::from("ratio"), DataNote::from(0.25)),
        (DataNote::from("on"), DataNote::boole(true)),
        (DataNote::from("none"), DataNote::void()),
    ])
}

/// Options with duplicates, nulls and mixed kinds.
pub const OPTIONS_JEXIS: &str = r#"[(1, 1, null), (), ('a', "a", a)]"#;

pub fn options() -> DataNote {
    DataNote::array([
        DataNote::option([DataNote::from(1), DataNote::from(1), DataNote::void()]),
        DataNote::option(Vec::<DataNote>::new()),
        DataNote::option([DataNote::char('a'), DataNote::from("a"), DataNote::label("a")]),
    ])
}

/// Keys of every family.
pub const COMPLEX_KEYS_JEXIS: &str =
    r#"{{"x": 1}: [1], [1, [2]]: {}, 3: "three", true: false, null: null}"#;

pub fn complex_keys() -> DataNote {
    DataNote::table([
        (DataNote::table([("x", 1)]), DataNote::array([1])),
        (
            DataNote::array([DataNote::from(1), DataNote::array([2])]),
            DataNote::table(Vec::<(DataNote, DataNote)>::new()),
        ),
        (DataNote::from(3), DataNote::from("three")),
        (DataNote::boole(true), DataNote::boole(false)),
        (DataNote::void(), DataNote::void()),
    ])
}
