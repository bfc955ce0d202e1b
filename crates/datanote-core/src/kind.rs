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

//! Node kinds.

use std::fmt;

/// The tag of a [`DataNote`](crate::DataNote).
///
/// The first six kinds are Simplex (terminal, 0-dimensional); the last three
/// are Complex (recursive containers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    String,
    Number,
    Char,
    Label,
    Boole,
    Void,
    Array,
    Option,
    Table,
}

impl Kind {
    /// Every kind, Simplex first.
    pub const ALL: [Kind; 9] = [
        Kind::String,
        Kind::Number,
        Kind::Char,
        Kind::Label,
        Kind::Boole,
        Kind::Void,
        Kind::Array,
        Kind::Option,
        Kind::Table,
    ];

    #[inline]
    pub const fn is_simplex(self) -> bool {
        !self.is_complex()
    }

    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Kind::Array | Kind::Option | Kind::Table)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Kind::String => "String",
            Kind::Number => "Number",
            Kind::Char => "Char",
            Kind::Label => "Label",
            Kind::Boole => "Boole",
            Kind::Void => "Void",
            Kind::Array => "Array",
            Kind::Option => "Option",
            Kind::Table => "Table",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
