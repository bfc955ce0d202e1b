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

//! Source position tracking for lexical analysis.
//!
//! Every scanner in the workspace reports failures against a [`SourcePos`],
//! which records the 1-based line and column of a character together with
//! its character offset from the start of the input.
//!
//! # Examples
//!
//! ```
//! use datanote_core::lex::SourcePos;
//!
//! let mut pos = SourcePos::start();
//! for c in "ab\nc".chars() {
//!     pos.advance(c);
//! }
//! assert_eq!(pos.line(), 2);
//! assert_eq!(pos.column(), 2);
//! assert_eq!(pos.offset(), 4);
//! ```

use std::fmt;

/// A position in source text.
///
/// Line and column numbers are 1-indexed; the offset counts characters
/// (not bytes) from the start of the input and is 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePos {
    line: usize,
    column: usize,
    offset: usize,
}

impl Default for SourcePos {
    fn default() -> Self {
        Self::start()
    }
}

impl SourcePos {
    /// Creates a position with a zero offset.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
        }
    }

    /// Creates a fully specified position.
    #[inline]
    pub const fn with_offset(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The position of the first character of an input.
    #[inline]
    pub const fn start() -> Self {
        Self::with_offset(1, 1, 0)
    }

    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Moves past `c`.
    ///
    /// A `\n` starts a new line. A lone `\r` does too, but a `\r` that is
    /// followed by `\n` should be fed as two characters: the `\n` then
    /// performs the line break and the `\r` only bumps the column.
    #[inline]
    pub fn advance(&mut self, c: char) {
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Moves to the start of the next line without consuming a character.
    #[inline]
    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Returns this position moved past every character of `text`.
    pub fn advanced_by(mut self, text: &str) -> Self {
        for c in text.chars() {
            self.advance(c);
        }
        self
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let pos = SourcePos::start();
        assert_eq!((pos.line(), pos.column(), pos.offset()), (1, 1, 0));
        assert_eq!(pos, SourcePos::default());
    }

    #[test]
    fn test_advance_column() {
        let mut pos = SourcePos::start();
        pos.advance('a');
        pos.advance('😀');
        assert_eq!(pos.column(), 3);
        assert_eq!(pos.offset(), 2);
    }

    #[test]
    fn test_advance_newline() {
        let pos = SourcePos::start().advanced_by("ab\ncd");
        assert_eq!(pos.line(), 2);
        assert_eq!(pos.column(), 3);
        assert_eq!(pos.offset(), 5);
    }

    #[test]
    fn test_next_line_keeps_offset() {
        let mut pos = SourcePos::with_offset(3, 7, 40);
        pos.next_line();
        assert_eq!(pos, SourcePos::with_offset(4, 1, 40));
    }

    #[test]
    fn test_display() {
        assert_eq!(SourcePos::new(10, 25).to_string(), "line 10, column 25");
    }
}
