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

//! Lexical building blocks shared by every processor.
//!
//! # Module Structure
//!
//! - [`error`] - Lexical error type
//! - [`span`] - Source positions for error reporting
//! - [`numbers`] - Number literal grammar and its extensions
//! - [`tokens`] - Bare words (labels and keywords)
//! - [`strings`] - Backslash escapes for quoted literals
//!
//! # Examples
//!
//! ```
//! use datanote_core::lex::{is_valid_label, normalize_number, NumberSyntax};
//!
//! assert!(is_valid_label("Hello_World", false));
//! assert_eq!(normalize_number("+1_024", NumberSyntax::JEXIS).unwrap(), "1024");
//! assert!(normalize_number("0x400P0", NumberSyntax::JSON).is_err());
//! ```

pub mod error;
pub mod numbers;
pub mod span;
pub mod strings;
pub mod tokens;

pub use error::LexError;
pub use numbers::{normalize as normalize_number, NumberSyntax};
pub use span::SourcePos;
pub use strings::{escape_into, quote, unescape};
pub use tokens::{is_valid_label, is_word, is_word_continue, is_word_start, KEYWORDS};

/// Result type for lexical operations.
pub type LexResult<T> = Result<T, LexError>;
