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

//! The processor contract shared by every text format.
//!
//! A format implements two operations:
//!
//! - [`Processor::scan`] reads text and reports parse events to a
//!   [`NoteSink`]
//! - [`Processor::present_with`] renders a tree, offering every node to a
//!   [`Transform`] first
//!
//! Everything else (`parse`, `parse_with`, `build`, `present`,
//! `present_pretty`) is provided on top of these. Grammar differences are
//! configuration of the concrete processor types, not overrides.

use tracing::debug;

use crate::build::{NoteBuilder, NoteSink, TreeBuilder};
use crate::error::DataResult;
use crate::transform::{Identity, Transform};
use crate::value::DataNote;

/// Output whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// No insignificant whitespace.
    #[default]
    Compact,
    /// Line breaks and indentation.
    Pretty,
}

impl Layout {
    #[inline]
    pub fn is_pretty(self) -> bool {
        self == Layout::Pretty
    }
}

/// A parser/presenter pair for one text format.
pub trait Processor {
    /// Short format name used in logs and error context.
    fn name(&self) -> &'static str;

    /// Reads the whole of `text`, reporting parse events to `sink`.
    fn scan(&self, text: &str, sink: &mut dyn NoteSink) -> DataResult<()>;

    /// Renders `note`, passing each node through `transform` first.
    fn present_with(
        &self,
        note: &DataNote,
        layout: Layout,
        transform: &dyn Transform,
    ) -> DataResult<String>;

    /// Parses `text`, passing each completed node through `transform`.
    fn parse_with(&self, text: &str, transform: &dyn Transform) -> DataResult<DataNote> {
        debug!(format = self.name(), bytes = text.len(), "parse started");
        let mut builder = TreeBuilder::new(transform);
        self.scan(text, &mut builder)
            .map_err(|e| e.or_context(self.name()))?;
        let note = builder.finish().map_err(|e| e.or_context(self.name()))?;
        debug!(
            format = self.name(),
            kind = %note.kind(),
            depth = note.depth(),
            extent = note.extent(),
            "parse finished"
        );
        Ok(note)
    }

    fn parse(&self, text: &str) -> DataResult<DataNote> {
        self.parse_with(text, &Identity)
    }

    /// Parses `text` into a result chosen by `builder`.
    fn build<B: NoteBuilder>(&self, text: &str, mut builder: B) -> DataResult<B::Output>
    where
        Self: Sized,
    {
        self.scan(text, &mut builder)?;
        builder.finish()
    }

    fn present(&self, note: &DataNote) -> DataResult<String> {
        self.present_with(note, Layout::Compact, &Identity)
    }

    fn present_pretty(&self, note: &DataNote) -> DataResult<String> {
        self.present_with(note, Layout::Pretty, &Identity)
    }
}
