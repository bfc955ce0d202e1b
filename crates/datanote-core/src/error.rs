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

//! Error types for parsing, presenting and path writes.
//!
//! Conversion misses are not errors: typed accessors return `None` instead.

use std::fmt;
use thiserror::Error;

use crate::lex::{LexError, SourcePos};
use crate::transform::TransformError;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed token.
    Lexical,
    /// Grammar violation above the token level, or a tree the grammar
    /// cannot spell.
    Structural,
    /// A transform rejected a node.
    Transform,
    /// Security limit exceeded.
    Limit,
    /// Path write that cannot be carried out.
    Path,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "LexicalError"),
            Self::Structural => write!(f, "StructuralError"),
            Self::Transform => write!(f, "TransformError"),
            Self::Limit => write!(f, "LimitError"),
            Self::Path => write!(f, "PathError"),
        }
    }
}

fn locate(pos: &Option<SourcePos>) -> String {
    pos.map(|p| format!(" at {p}")).unwrap_or_default()
}

fn explain(context: &Option<String>) -> String {
    context
        .as_ref()
        .map(|c| format!(" ({c})"))
        .unwrap_or_default()
}

/// An error raised while parsing, presenting or writing into a tree.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{kind}{}: {message}{}", locate(.pos), explain(.context))]
pub struct DataError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Where in the input the error was detected.
    pub pos: Option<SourcePos>,
    /// Additional context (e.g., the processor or the rejecting transform).
    pub context: Option<String>,
}

impl DataError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            pos: None,
            context: None,
        }
    }

    /// Add position information.
    pub fn with_pos(mut self, pos: SourcePos) -> Self {
        self.pos = Some(pos);
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add context information unless some is already present.
    pub fn or_context(mut self, context: impl Into<String>) -> Self {
        if self.context.is_none() {
            self.context = Some(context.into());
        }
        self
    }

    // Convenience constructors for each error kind
    pub fn lexical(message: impl Into<String>, pos: SourcePos) -> Self {
        Self::new(ErrorKind::Lexical, message).with_pos(pos)
    }

    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Structural, message)
    }

    pub fn structural_at(message: impl Into<String>, pos: SourcePos) -> Self {
        Self::structural(message).with_pos(pos)
    }

    pub fn limit(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Limit, message)
    }

    pub fn path(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Path, message)
    }

    pub fn is_lexical(&self) -> bool {
        self.kind == ErrorKind::Lexical
    }

    /// True for grammar violations, including transform rejections.
    pub fn is_structural(&self) -> bool {
        matches!(self.kind, ErrorKind::Structural | ErrorKind::Transform)
    }
}

impl From<LexError> for DataError {
    fn from(err: LexError) -> Self {
        let kind = if err.is_limit() {
            ErrorKind::Limit
        } else {
            ErrorKind::Lexical
        };
        Self::new(kind, err.to_string()).with_pos(err.pos())
    }
}

impl From<TransformError> for DataError {
    fn from(err: TransformError) -> Self {
        Self::new(ErrorKind::Transform, err.to_string()).with_context("rejected by transform")
    }
}

/// Result type for DataNote operations.
pub type DataResult<T> = Result<T, DataError>;
