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

//! Lexical error types.
//!
//! The messages carry no location; the position is available through
//! [`LexError::pos`] and is rendered by [`crate::DataError`] when the
//! error is lifted into the parse result.

use thiserror::Error;

pub use crate::lex::span::SourcePos;

/// A malformed token in the active grammar.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LexError {
    // ==================== Quoting errors ====================
    /// Quoted string without its closing quote.
    #[error("unclosed quoted string")]
    UnclosedQuote { pos: SourcePos },

    /// Character literal without its closing quote.
    #[error("unclosed character literal")]
    UnclosedChar { pos: SourcePos },

    /// Text between a closing quote and the next separator.
    #[error("unexpected {found:?} after closing quote")]
    TextAfterQuote { found: char, pos: SourcePos },

    // ==================== Escape errors ====================
    /// Unknown or truncated escape sequence.
    #[error("invalid escape sequence: {sequence}")]
    InvalidEscape { sequence: String, pos: SourcePos },

    /// Escape character as the last character of the input.
    #[error("dangling escape character at end of input")]
    DanglingEscape { pos: SourcePos },

    /// Surrogate code unit without its partner.
    #[error("unpaired surrogate \\u{code:04X}")]
    LoneSurrogate { code: u32, pos: SourcePos },

    /// Raw control character inside a quoted literal.
    #[error("control character U+{code:04X} must be escaped")]
    ControlCharacter { code: u32, pos: SourcePos },

    // ==================== Literal errors ====================
    /// Text that looked like a number but is not one.
    #[error("invalid number literal {text:?}: {reason}")]
    InvalidNumber {
        text: String,
        reason: &'static str,
        pos: SourcePos,
    },

    /// Character literal holding zero or several scalar values.
    #[error("invalid character literal: {message}")]
    InvalidChar { message: String, pos: SourcePos },

    /// `# ...` without the closing `#`.
    #[error("unterminated comment")]
    UnterminatedComment { pos: SourcePos },

    /// Character that cannot start any token.
    #[error("unexpected character {found:?}")]
    UnexpectedChar { found: char, pos: SourcePos },

    /// Input ended inside a token.
    #[error("unexpected end of input")]
    UnexpectedEnd { pos: SourcePos },

    // ==================== Resource limit errors ====================
    /// String literal longer than the configured limit.
    #[error("string length {length} exceeds maximum {max}")]
    StringTooLong {
        length: usize,
        max: usize,
        pos: SourcePos,
    },
}

impl LexError {
    /// Where the offending token starts.
    pub fn pos(&self) -> SourcePos {
        match self {
            Self::UnclosedQuote { pos }
            | Self::UnclosedChar { pos }
            | Self::TextAfterQuote { pos, .. }
            | Self::InvalidEscape { pos, .. }
            | Self::DanglingEscape { pos }
            | Self::LoneSurrogate { pos, .. }
            | Self::ControlCharacter { pos, .. }
            | Self::InvalidNumber { pos, .. }
            | Self::InvalidChar { pos, .. }
            | Self::UnterminatedComment { pos }
            | Self::UnexpectedChar { pos, .. }
            | Self::UnexpectedEnd { pos }
            | Self::StringTooLong { pos, .. } => *pos,
        }
    }

    /// True for errors raised by a resource limit rather than by malformed text.
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::StringTooLong { .. })
    }
}
