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


//! Grammar tables and configuration for the bracket formats.
//!
//! JSON and JEXIS are read and written by one engine. What differs between
//! them is data: which literal forms exist, which kinds may be Table keys
//! and which number extensions are accepted.

use datanote_core::lex::NumberSyntax;
use datanote_core::Limits;

/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default maximum string literal length in bytes (100 MB).
pub const DEFAULT_MAX_STRING_LENGTH: usize = 100 * 1024 * 1024;

/// Default maximum number of elements or entries in one container.
pub const DEFAULT_MAX_CONTAINER_SIZE: usize = 10_000_000;

/// Default number of spaces per indentation level in pretty output.
pub const DEFAULT_INDENT: usize = 2;

/// The literal forms a bracket grammar accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    /// Format name used in logs and error context.
    pub name: &'static str,
    /// Single quoted Char literals.
    pub chars: bool,
    /// Bare Label literals.
    pub labels: bool,
    /// Parenthesised Option literals.
    pub options: bool,
    /// Table keys of any kind instead of Strings only.
    pub any_keys: bool,
    /// `# ... #` comments.
    pub comments: bool,
    pub numbers: NumberSyntax,
}

impl Grammar {
    pub const JSON: Self = Self {
        name: "JSON",
        chars: false,
        labels: false,
        options: false,
        any_keys: false,
        comments: false,
        numbers: NumberSyntax::JSON,
    };

    pub const JEXIS: Self = Self {
        name: "JEXIS",
        chars: true,
        labels: true,
        options: true,
        any_keys: true,
        comments: true,
        numbers: NumberSyntax::JEXIS,
    };

    /// Returns a copy that also accepts the extended number forms.
    ///
    /// Switching them on for JSON brings the plus sign and digit
    /// separators along.
    pub const fn with_extended_numbers(mut self, extended: bool) -> Self {
        if extended {
            self.numbers = NumberSyntax::EXTENDED;
        } else if self.chars {
            self.numbers = NumberSyntax::JEXIS;
        } else {
            self.numbers = NumberSyntax::JSON;
        }
        self
    }

    #[inline]
    pub fn extended_numbers(&self) -> bool {
        self.numbers.extended
    }
}

/// Configuration for the JSON and JEXIS processors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarConfig {
    /// Accept and emit `Infinity`, `NaN`, radix and hex-float literals
    /// (default: false).
    pub extended_numbers: bool,

    /// Spaces per indentation level in pretty output (default: 2).
    pub indent: usize,

    /// Parser security limits.
    pub limits: Limits,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            extended_numbers: false,
            indent: DEFAULT_INDENT,
            limits: Limits {
                max_depth: DEFAULT_MAX_DEPTH,
                max_string_length: DEFAULT_MAX_STRING_LENGTH,
                max_container_size: DEFAULT_MAX_CONTAINER_SIZE,
            },
        }
    }
}

impl GrammarConfig {
    /// Creates a builder starting from the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use datanote_json::GrammarConfig;
    ///
    /// let config = GrammarConfig::builder()
    ///     .extended_numbers(true)
    ///     .indent(4)
    ///     .max_depth(64)
    ///     .build();
    /// assert_eq!(config.limits.max_depth, 64);
    /// ```
    pub fn builder() -> GrammarConfigBuilder {
        GrammarConfigBuilder::default()
    }
}

/// Builder for [`GrammarConfig`].
#[derive(Debug, Clone, Default)]
pub struct GrammarConfigBuilder {
    config: GrammarConfig,
}

impl GrammarConfigBuilder {
    pub fn extended_numbers(mut self, enabled: bool) -> Self {
        self.config.extended_numbers = enabled;
        self
    }

    pub fn indent(mut self, spaces: usize) -> Self {
        self.config.indent = spaces;
        self
    }

    /// Set the maximum nesting depth
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.config.limits.max_depth = limit;
        self
    }

    /// Set the maximum string literal length in bytes
    pub fn max_string_length(mut self, limit: usize) -> Self {
        self.config.limits.max_string_length = limit;
        self
    }

    /// Set the maximum number of elements or entries per container
    pub fn max_container_size(mut self, limit: usize) -> Self {
        self.config.limits.max_container_size = limit;
        self
    }

    /// Disable all limits (use with caution - only for trusted input)
    pub fn unlimited(mut self) -> Self {
        self.config.limits = Limits::unlimited();
        self
    }

    pub fn build(self) -> GrammarConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jexis_is_wider_than_json() {
        let (json, jexis) = (Grammar::JSON, Grammar::JEXIS);
        assert!(!json.chars && jexis.chars);
        assert!(!json.labels && jexis.labels);
        assert!(!json.options && jexis.options);
        assert!(!json.any_keys && jexis.any_keys);
        assert!(!json.comments && jexis.comments);
        assert!(jexis.numbers.plus_sign && !json.numbers.plus_sign);
    }

    #[test]
    fn test_extended_numbers_toggle() {
        let json = Grammar::JSON.with_extended_numbers(true);
        assert!(json.extended_numbers());
        assert!(json.numbers.underscores);
        assert_eq!(json.with_extended_numbers(false), Grammar::JSON);
        assert_eq!(
            Grammar::JEXIS.with_extended_numbers(true).with_extended_numbers(false),
            Grammar::JEXIS
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = GrammarConfig::default();
        assert!(!config.extended_numbers);
        assert_eq!(config.indent, 2);
        assert_eq!(config.limits, Limits::default());
    }

    #[test]
    fn test_builder_unlimited() {
        let config = GrammarConfig::builder().max_depth(3).unlimited().build();
        assert_eq!(config.limits.max_depth, usize::MAX);
        assert_eq!(config.limits.max_string_length, usize::MAX);
    }
}
