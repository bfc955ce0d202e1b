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


//! Dialect and parse configuration.

use crate::error::{CsvError, Result};

/// Default maximum number of data rows.
///
/// Bounds the memory a single parse may claim. Raise it through
/// [`CsvConfigBuilder::max_rows`] for large trusted inputs.
///
/// ```
/// # use datanote_csv::CsvConfig;
/// assert_eq!(CsvConfig::default().max_rows, 1_000_000);
/// ```
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// The three bytes that shape a CSV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Field separator (default `,`).
    pub separator: u8,
    /// Quote character (default `"`); doubled inside a quoted field it
    /// stands for itself.
    pub quote: u8,
    /// Escape character inside quoted fields (default `\`).
    pub escape: u8,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::COMMA
    }
}

impl Dialect {
    /// `,` separated, `"` quoted, `\` escaped.
    pub const COMMA: Self = Self {
        separator: b',',
        quote: b'"',
        escape: b'\\',
    };

    /// Checks and builds a dialect.
    ///
    /// All three bytes must be ASCII, distinct, and not a line break.
    ///
    /// ```
    /// use datanote_csv::Dialect;
    ///
    /// assert!(Dialect::new(b'\t', b'\'', b'\\').is_ok());
    /// assert!(Dialect::new(b',', b',', b'\\').is_err());
    /// assert!(Dialect::new(b'\n', b'"', b'\\').is_err());
    /// ```
    pub fn new(separator: u8, quote: u8, escape: u8) -> Result<Self> {
        let dialect = Self {
            separator,
            quote,
            escape,
        };
        dialect.validate()?;
        Ok(dialect)
    }

    pub fn validate(&self) -> Result<()> {
        let roles = [
            ("separator", self.separator),
            ("quote", self.quote),
            ("escape", self.escape),
        ];
        for (role, byte) in roles {
            if !byte.is_ascii() {
                return Err(CsvError::InvalidDialect {
                    reason: format!("{role} byte 0x{byte:02X} is not ASCII"),
                });
            }
            if byte == b'\r' || byte == b'\n' {
                return Err(CsvError::InvalidDialect {
                    reason: format!("{role} cannot be a line break"),
                });
            }
        }
        for (i, (a, x)) in roles.iter().enumerate() {
            if let Some((b, _)) = roles[i + 1..].iter().find(|(_, y)| y == x) {
                return Err(CsvError::InvalidDialect {
                    reason: format!("{a} and {b} are both {:?}", char::from(*x)),
                });
            }
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn separator_char(&self) -> char {
        char::from(self.separator)
    }

    #[inline]
    pub(crate) fn quote_char(&self) -> char {
        char::from(self.quote)
    }

    #[inline]
    pub(crate) fn escape_char(&self) -> char {
        char::from(self.escape)
    }
}

/// What the first record of the input means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Every record is data; rows are Arrays.
    #[default]
    None,
    /// The first record is dropped; rows are Arrays.
    Skip,
    /// The first record names the columns; rows are Tables keyed by it.
    Keys,
}

/// Tentative reinterpretation of field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldTyping {
    /// Every field stays a String.
    #[default]
    Off,
    /// Fields that read as a JSON number, `true`, `false` or `null` take
    /// that value.
    Json,
    /// As [`FieldTyping::Json`], with `Infinity`, `NaN`, radix and
    /// hex-float numbers.
    ExtendedJson,
}

/// Configuration for [`CsvProcessor`](crate::CsvProcessor).
///
/// # Examples
///
/// ```
/// use datanote_csv::{CsvConfig, FieldTyping, HeaderMode};
///
/// let config = CsvConfig::builder()
///     .separator(b';')
///     .header(HeaderMode::Keys)
///     .typing(FieldTyping::Json)
///     .build()
///     .unwrap();
/// assert_eq!(config.dialect.separator, b';');
/// assert!(!config.trim);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfig {
    pub dialect: Dialect,

    /// Header handling (default: [`HeaderMode::None`]).
    pub header: HeaderMode,

    /// Strip spaces and tabs around unquoted fields and around the quotes
    /// of quoted ones (default: false).
    pub trim: bool,

    /// Field reinterpretation (default: [`FieldTyping::Off`]).
    pub typing: FieldTyping,

    /// Maximum number of data rows (default: [`DEFAULT_MAX_ROWS`]).
    pub max_rows: usize,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::COMMA,
            header: HeaderMode::None,
            trim: false,
            typing: FieldTyping::Off,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl CsvConfig {
    pub fn builder() -> CsvConfigBuilder {
        CsvConfigBuilder::default()
    }
}

/// Builder for [`CsvConfig`]; [`build`](Self::build) validates the dialect.
#[derive(Debug, Clone, Default)]
pub struct CsvConfigBuilder {
    config: CsvConfig,
}

impl CsvConfigBuilder {
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.config.dialect = dialect;
        self
    }

    pub fn separator(mut self, byte: u8) -> Self {
        self.config.dialect.separator = byte;
        self
    }

    pub fn quote(mut self, byte: u8) -> Self {
        self.config.dialect.quote = byte;
        self
    }

    pub fn escape(mut self, byte: u8) -> Self {
        self.config.dialect.escape = byte;
        self
    }

    pub fn header(mut self, mode: HeaderMode) -> Self {
        self.config.header = mode;
        self
    }

    pub fn trim(mut self, enabled: bool) -> Self {
        self.config.trim = enabled;
        self
    }

    pub fn typing(mut self, typing: FieldTyping) -> Self {
        self.config.typing = typing;
        self
    }

    pub fn max_rows(mut self, limit: usize) -> Self {
        self.config.max_rows = limit;
        self
    }

    /// Lifts the row limit.
    pub fn unlimited(mut self) -> Self {
        self.config.max_rows = usize::MAX;
        self
    }

    pub fn build(self) -> Result<CsvConfig> {
        self.config.dialect.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Dialect tests ====================

    #[test]
    fn test_default_dialect() {
        let d = Dialect::default();
        assert_eq!((d.separator, d.quote, d.escape), (b',', b'"', b'\\'));
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_dialect_rejects_duplicates() {
        let err = Dialect::new(b'"', b'"', b'\\').unwrap_err();
        assert!(err.to_string().contains("separator and quote are both"));
        assert!(Dialect::new(b',', b'"', b',').is_err());
        assert!(Dialect::new(b',', b'\\', b'\\').is_err());
    }

    #[test]
    fn test_dialect_rejects_non_ascii_and_line_breaks() {
        assert!(Dialect::new(0xA7, b'"', b'\\').is_err());
        assert!(Dialect::new(b',', b'\r', b'\\').is_err());
        assert!(Dialect::new(b',', b'"', b'\n').is_err());
    }

    // ==================== Config tests ====================

    #[test]
    fn test_config_defaults() {
        let config = CsvConfig::default();
        assert_eq!(config.header, HeaderMode::None);
        assert_eq!(config.typing, FieldTyping::Off);
        assert_eq!(config.max_rows, DEFAULT_MAX_ROWS);
        assert!(!config.trim);
    }

    #[test]
    fn test_builder_validates() {
        assert!(CsvConfig::builder().quote(b',').build().is_err());
        let config = CsvConfig::builder()
            .separator(b'\t')
            .quote(b'\'')
            .trim(true)
            .unlimited()
            .build()
            .unwrap();
        assert_eq!(config.dialect, Dialect::new(b'\t', b'\'', b'\\').unwrap());
        assert_eq!(config.max_rows, usize::MAX);
    }
}
