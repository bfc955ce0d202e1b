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


//! Property-based tests for the facade entry points.

use datanote::{by_jexis, by_json, NoteFormats};
use datanote_test::{arb_json_note, arb_note};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: as_json and by_json are inverse on JSON trees
    #[test]
    fn prop_json_round_trip(note in arb_json_note()) {
        prop_assert_eq!(by_json(&note.as_json().unwrap()).unwrap(), note.clone());
        prop_assert_eq!(by_json(&note.as_json_pretty().unwrap()).unwrap(), note);
    }

    /// Property: as_jexis and by_jexis are inverse on every tree
    #[test]
    fn prop_jexis_round_trip(note in arb_note()) {
        prop_assert_eq!(by_jexis(&note.as_jexis().unwrap()).unwrap(), note);
    }

    /// Property: every JSON tree presents identically as JSON and JEXIS
    #[test]
    fn prop_json_text_is_jexis_text(note in arb_json_note()) {
        prop_assert_eq!(note.as_json().unwrap(), note.as_jexis().unwrap());
    }
}
