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


//! Canonical fixtures, organized by format:
//!
//! - **json**: JSON texts, each valid JEXIS as well
//! - **jexis**: texts using the JEXIS extras
//! - **records**: CSV bodies and headers
//! - **errors**: malformed inputs

pub mod errors;
mod jexis;
mod json;
mod records;

pub use jexis::*;
pub use json::*;
pub use records::*;

use crate::FixtureList;

/// JSON fixtures as (name, text, expected tree).
pub fn json_fixtures() -> FixtureList {
    vec![
        ("scalars", SCALARS_JSON, scalars),
        ("numbers", NUMBERS_JSON, numbers),
        ("escapes", ESCAPES_JSON, escapes),
        ("people", PEOPLE_JSON, people),
        ("nested", NESTED_JSON, nested),
        ("codes", CODES_JSON, codes),
    ]
}

/// JEXIS fixtures as (name, text, expected tree).
pub fn jexis_fixtures() -> FixtureList {
    vec![
        ("showcase", SHOWCASE_JEXIS, showcase),
        ("options", OPTIONS_JEXIS, options),
        ("complex_keys", COMPLEX_KEYS_JEXIS, complex_keys),
    ]
}
