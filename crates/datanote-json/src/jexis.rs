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


//! The JEXIS processor.
//!
//! JEXIS reads every JSON document to the same tree and adds:
//!
//! - Char literals in single quotes: `'x'`, `'\''`
//! - bare Labels: `Red`, `_tmp`, `Größe`
//! - Options in parentheses, unordered with duplicates: `(1, 1, null)`
//! - Table keys of any kind: `{1: "one", [0, 0]: "origin"}`
//! - `# comments #` and number sugar: `+5`, `1_000_000`

use datanote_core::{DataNote, DataResult, Layout, NoteSink, Processor, Transform};

use crate::grammar::{Grammar, GrammarConfig};
use crate::parser::read_document;
use crate::writer::write_document;

/// Reads and writes JEXIS.
///
/// # Examples
///
/// ```
/// use datanote_core::{DataNote, Kind, Processor};
/// use datanote_json::JexisProcessor;
///
/// let jexis = JexisProcessor::new();
/// let note = jexis.parse("{ # palette # Red: (1, 1), 'k': Void_ }").unwrap();
/// assert_eq!(note.at(DataNote::label("Red")).kind(), Kind::Option);
/// assert_eq!(jexis.present(&note).unwrap(), "{Red:(1,1),'k':Void_}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JexisProcessor {
    config: GrammarConfig,
}

impl JexisProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A processor that also accepts `Infinity`, `NaN`, radix integers and
    /// hexadecimal floats.
    pub fn extended() -> Self {
        Self::with_config(GrammarConfig::builder().extended_numbers(true).build())
    }

    pub fn with_config(config: GrammarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    pub fn grammar(&self) -> Grammar {
        Grammar::JEXIS.with_extended_numbers(self.config.extended_numbers)
    }
}

impl Processor for JexisProcessor {
    fn name(&self) -> &'static str {
        "JEXIS"
    }

    fn scan(&self, text: &str, sink: &mut dyn NoteSink) -> DataResult<()> {
        read_document(text, &self.grammar(), &self.config.limits, sink)
    }

    fn present_with(
        &self,
        note: &DataNote,
        layout: Layout,
        transform: &dyn Transform,
    ) -> DataResult<String> {
        write_document(note, &self.grammar(), self.config.indent, layout, transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datanote_core::{path, Kind};

    #[test]
    fn test_comments_are_dropped() {
        let jexis = JexisProcessor::new();
        let a = jexis.parse("[1, # two # 2]").unwrap();
        let b = jexis.parse("[1,2]").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_number_sugar() {
        let note = JexisProcessor::new().parse("[+5, 1_000_000]").unwrap();
        assert_eq!(note, DataNote::array([5, 1_000_000]));
    }

    #[test]
    fn test_option_is_a_multiset() {
        let jexis = JexisProcessor::new();
        assert_eq!(jexis.parse("(null, A)").unwrap(), jexis.parse("(A, null)").unwrap());
        assert_ne!(jexis.parse("(A, A)").unwrap(), jexis.parse("(A)").unwrap());
    }

    #[test]
    fn test_complex_keys() {
        let note = JexisProcessor::new().parse(r#"{[0, 0]: "origin", (X): 1}"#).unwrap();
        assert_eq!(note.at(DataNote::array([0, 0])), &DataNote::from("origin"));
        assert_eq!(note.at_path(&path![DataNote::option([DataNote::label("X")])]).as_i64(), Some(1));
    }

    #[test]
    fn test_unicode_label() {
        let note = JexisProcessor::new().parse("Größe").unwrap();
        assert_eq!(note.kind(), Kind::Label);
        assert_eq!(JexisProcessor::new().present(&note).unwrap(), "Größe");
    }

    #[test]
    fn test_extended_words_are_labels_unless_enabled() {
        assert_eq!(JexisProcessor::new().parse("NaN").unwrap().kind(), Kind::Label);
        assert_eq!(JexisProcessor::extended().parse("NaN").unwrap().kind(), Kind::Number);
        assert!(JexisProcessor::extended().present(&DataNote::label("NaN")).is_err());
    }
}
