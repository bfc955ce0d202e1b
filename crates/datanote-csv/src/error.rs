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


//! Error types for CSV processing.

use datanote_core::{DataError, ErrorKind};
use thiserror::Error;

/// Errors raised by the CSV processor outside the lexical layer.
///
/// Malformed records are reported as [`LexError`](datanote_core::lex::LexError)s
/// with a source position. This type covers the rest: dialect validation,
/// the row limit, and failures of the underlying `csv` writer. Every
/// variant converts into a [`DataError`] so it can travel through the
/// [`Processor`](datanote_core::Processor) interface.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Separator, quote or escape byte unusable as configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use datanote_csv::CsvError;
    ///
    /// let err = CsvError::InvalidDialect {
    ///     reason: "separator and quote are both ','".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid CSV dialect: separator and quote are both ','");
    /// ```
    #[error("Invalid CSV dialect: {reason}")]
    InvalidDialect {
        /// Which byte is at fault and why.
        reason: String,
    },

    /// Too many data rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use datanote_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit { limit: 1000, actual: 1001 };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Security limit exceeded: row count 1001 exceeds maximum 1000"
    /// );
    /// ```
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Configured maximum number of rows.
        limit: usize,
        /// Row count reached when the limit tripped.
        actual: usize,
    },

    /// Writer output that is not UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Where the bytes came from.
        context: String,
    },

    /// I/O error from the output buffer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the `csv` crate.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;

impl From<CsvError> for DataError {
    fn from(err: CsvError) -> Self {
        let kind = match err {
            CsvError::SecurityLimit { .. } => ErrorKind::Limit,
            _ => ErrorKind::Structural,
        };
        DataError::new(kind, err.to_string()).with_context("CSV")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_maps_to_limit_kind() {
        let err: DataError = CsvError::SecurityLimit { limit: 1, actual: 2 }.into();
        assert_eq!(err.kind, ErrorKind::Limit);
        assert_eq!(err.context.as_deref(), Some("CSV"));
    }

    #[test]
    fn test_dialect_maps_to_structural() {
        let err: DataError = CsvError::InvalidDialect {
            reason: "x".to_string(),
        }
        .into();
        assert!(err.is_structural());
        assert!(err.message.contains("Invalid CSV dialect"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "closed");
        let err: CsvError = io.into();
        assert!(matches!(err, CsvError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: closed");
    }
}
