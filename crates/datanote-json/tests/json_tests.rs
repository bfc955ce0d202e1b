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


//! Integration tests for the JSON processor.

use datanote_core::{path, DataNote, ErrorKind, Kind, Layout, NumberNormalizer, Processor};
use datanote_json::{GrammarConfig, JsonProcessor};
use datanote_test::fixtures::{self, errors};

// =============================================================================
// Fixture Tests
// =============================================================================

#[test]
fn test_fixtures_parse_to_expected_trees() {
    datanote_test::init_tracing();
    let json = JsonProcessor::new();
    for (name, text, expected) in fixtures::json_fixtures() {
        let note = json.parse(text).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(note, expected(), "{name}");
    }
}

#[test]
fn test_fixtures_survive_present_and_parse() {
    let json = JsonProcessor::new();
    for (name, _, expected) in fixtures::json_fixtures() {
        let tree = expected();
        for layout in [Layout::Compact, Layout::Pretty] {
            let text = json.present_with(&tree, layout, &datanote_core::Identity).unwrap();
            assert_eq!(json.parse(&text).unwrap(), tree, "{name} {layout:?}");
        }
    }
}

#[test]
fn test_invalid_samples_rejected() {
    let json = JsonProcessor::new();
    for (name, text) in errors::invalid_json_samples() {
        let err = json.parse(text).expect_err(name);
        assert!(
            matches!(err.kind, ErrorKind::Lexical | ErrorKind::Structural),
            "{name}: {err}"
        );
        assert_eq!(err.context.as_deref(), Some("JSON"), "{name}");
    }
}

// =============================================================================
// Number Tests
// =============================================================================

#[test]
fn test_numbers_compare_by_text() {
    let json = JsonProcessor::new();
    let one = json.parse("1").unwrap();
    assert_ne!(json.parse("1E0").unwrap(), json.parse("1.0").unwrap());
    assert_ne!(json.parse("1.0").unwrap(), one);
    assert_eq!(JsonProcessor::extended().parse("+1").unwrap(), one);
}

#[test]
fn test_normalizing_transform_folds_numbers() {
    let json = JsonProcessor::new();
    let note = json.parse_with("[1E0, 1.0, 1]", &NumberNormalizer).unwrap();
    assert_eq!(note.at(0), note.at(1));
    assert_eq!(note.at(1), note.at(2));
    assert_eq!(json.present(&note).unwrap(), "[1.0,1.0,1.0]");
}

#[test]
fn test_large_numbers_keep_precision() {
    let literal = "123456789012345678901234567890.000000000000000000001";
    let json = JsonProcessor::new();
    let note = json.parse(literal).unwrap();
    assert_eq!(json.present(&note).unwrap(), literal);

    let folded = DataNote::from(note.as_f64().unwrap());
    assert_ne!(note.as_number(), folded.as_number());
    assert!(note.as_number().is_some());
}

#[test]
fn test_extended_number_forms() {
    let json = JsonProcessor::extended();
    let note = json.parse("[1_024, 0x400P0, NaN, Infinity, false, true]").unwrap();
    assert_eq!(note.at(0).as_f64(), Some(1024.0));
    assert_eq!(note.at(1).as_f64(), Some(1024.0));
    assert!(note.at(2).as_f64().unwrap().is_nan());
    assert_eq!(note.at(3).as_f64(), Some(f64::INFINITY));
    assert_eq!(note.at(4).as_f64(), Some(0.0));
    assert_eq!(note.at(5).as_f64(), Some(1.0));
    assert_eq!(json.present(&note).unwrap(), "[1024,0x400P0,NaN,Infinity,false,true]");
    assert!(JsonProcessor::new().present(&note).is_err());
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_pretty_with_custom_indent() {
    let json = JsonProcessor::with_config(GrammarConfig::builder().indent(4).build());
    let note = json.parse(r#"{"a":[1]}"#).unwrap();
    assert_eq!(json.present_pretty(&note).unwrap(), "{\n    \"a\": [\n        1\n    ]\n}");
}

#[test]
fn test_layout_has_no_semantic_effect() {
    let json = JsonProcessor::new();
    let tree = fixtures::people();
    let compact = json.present(&tree).unwrap();
    let pretty = json.present_pretty(&tree).unwrap();
    assert_ne!(compact, pretty);
    assert_eq!(json.parse(&compact).unwrap(), json.parse(&pretty).unwrap());
}

// =============================================================================
// Error Reporting Tests
// =============================================================================

#[test]
fn test_lexical_error_position() {
    let err = JsonProcessor::new().parse("{\n  \"a\": \"x\\q\"\n}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lexical);
    let pos = err.pos.unwrap();
    assert_eq!((pos.line(), pos.column()), (2, 10));
}

#[test]
fn test_structural_error_message() {
    let err = JsonProcessor::new().parse("{\"a\": 1 \"b\": 2}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "StructuralError at line 1, column 9: expected ',' or '}', found '\"' (JSON)"
    );
}

#[test]
fn test_limits_from_config() {
    let json = JsonProcessor::with_config(
        GrammarConfig::builder().max_depth(3).max_string_length(4).build(),
    );
    assert_eq!(json.parse("[[[[]]]]").unwrap_err().kind, ErrorKind::Limit);
    assert_eq!(json.parse(r#""abcde""#).unwrap_err().kind, ErrorKind::Limit);
    assert!(json.parse(r#"[[["abcd"]]]"#).is_ok());
}

// =============================================================================
// Access Tests
// =============================================================================

#[test]
fn test_parsed_tree_access() {
    let note = JsonProcessor::new().parse(fixtures::NESTED_JSON).unwrap();
    assert_eq!(note.depth(), 4);
    assert_eq!(note.at("d").depth(), 2);
    assert_eq!(note.at_path(&path!["d", 1, 0]).as_i64(), Some(3));
    assert_eq!(note.at_path(&path!["a", "b", "c", 1]).kind(), Kind::Table);
    assert!(note.at_path(&path!["a", "x", "c"]).is_absent());

    let edited = note.set_at(&path!["a", "b", "c", 0], DataNote::from("filled")).unwrap();
    assert_eq!(
        JsonProcessor::new().present(&edited).unwrap(),
        r#"{"a":{"b":{"c":["filled",{}]}},"d":[[1,2],[3,4]]}"#
    );
    assert!(edited.at("d").ptr_eq(note.at("d")));
}
