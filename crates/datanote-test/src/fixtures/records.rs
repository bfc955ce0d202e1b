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


//! CSV fixtures.

use datanote_core::DataNote;

/// Header supplied apart from [`CODES_CSV`].
pub const CODES_HEADER: &str = "Code,Char,Name";

/// A header-less body; see [`codes`](super::codes) for the tree it yields
/// under [`CODES_HEADER`] with JSON field typing.
pub const CODES_CSV: &str = "333,M,1\r\n955,λ,lambda\r\n";

/// Rows shorter and longer than the header.
pub const RAGGED_CSV: &str = "A,BB\r\n1\r\n4444,55555,666666\r\n";

/// [`RAGGED_CSV`] read with its header as keys and JSON field typing.
pub fn ragged() -> DataNote {
    DataNote::array([
        DataNote::table([("A", DataNote::from(1)), ("BB", DataNote::void())]),
        DataNote::table([
            ("A", DataNote::from(4444)),
            ("BB", DataNote::from(55555)),
            ("-2", DataNote::from(666666)),
        ]),
    ])
}

/// Quoting edge cases: separators, doubled quotes and line breaks inside
/// quotes, a blank line and no trailing line break.
pub const QUOTED_CSV: &str = "name,quote\n\"Smith, J\",\"said \"\"hi\"\"\"\n\nplain,\"multi\nline\"";

/// [`QUOTED_CSV`] read without header handling.
pub fn quoted() -> DataNote {
    DataNote::array([
        DataNote::array(["name", "quote"]),
        DataNote::array(["Smith, J", "said \"hi\""]),
        DataNote::array(["plain", "multi\nline"]),
    ])
}

/// Tab separated, single quoted.
pub const TSV_TEXT: &str = "a\tb\n'x\ty'\tz\n";

/// [`TSV_TEXT`] read with the `(b'\t', b'\'', b'\\')` dialect.
pub fn tsv() -> DataNote {
    DataNote::array([DataNote::array(["a", "b"]), DataNote::array(["x\ty", "z"])])
}
