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

//! Parse events and result builders.
//!
//! Scanners do not build trees themselves. They report what they recognise
//! to a [`NoteSink`] as a flat stream of events:
//!
//! ```text
//! {"a": [1, 'x']}   open(Table) simplex("a", Key) open(Array, Value)
//!                   simplex(1) simplex('x') close() close()
//! ```
//!
//! Inside a Table the events alternate between key and value. A
//! [`NoteBuilder`] turns the stream into a result of its choosing;
//! [`TreeBuilder`] produces a [`DataNote`] and applies a [`Transform`] to
//! every completed node.

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

use crate::error::{DataError, DataResult};
use crate::kind::Kind;
use crate::transform::{Identity, Slot, Transform};
use crate::value::{Data, DataNote};

/// Receiver of parse events.
pub trait NoteSink {
    /// A complete Simplex node.
    fn simplex(&mut self, note: DataNote, slot: Slot) -> DataResult<()>;

    /// Start of a container of the given Complex kind.
    fn open(&mut self, kind: Kind, slot: Slot) -> DataResult<()>;

    /// End of the innermost open container.
    fn close(&mut self) -> DataResult<()>;
}

/// A sink that produces a result once the input is exhausted.
pub trait NoteBuilder: NoteSink {
    type Output;

    fn finish(self) -> DataResult<Self::Output>;
}

struct Frame {
    kind: Kind,
    slot: Slot,
    items: Vec<DataNote>,
    entries: IndexMap<DataNote, DataNote>,
    pending_key: Option<DataNote>,
}

/// Builds a [`DataNote`] tree, applying a transform bottom-up.
pub struct TreeBuilder<'t> {
    transform: &'t dyn Transform,
    stack: Vec<Frame>,
    root: Option<DataNote>,
}

impl Default for TreeBuilder<'static> {
    fn default() -> Self {
        TreeBuilder::new(&Identity)
    }
}

impl<'t> TreeBuilder<'t> {
    pub fn new(transform: &'t dyn Transform) -> Self {
        Self {
            transform,
            stack: Vec::new(),
            root: None,
        }
    }

    /// Number of containers currently open.
    pub fn open_depth(&self) -> usize {
        self.stack.len()
    }

    fn attach(&mut self, note: DataNote) -> DataResult<()> {
        let Some(frame) = self.stack.last_mut() else {
            if self.root.is_some() {
                return Err(DataError::structural("more than one top-level value"));
            }
            self.root = Some(note);
            return Ok(());
        };

        if frame.kind != Kind::Table {
            frame.items.push(note);
            return Ok(());
        }
        match frame.pending_key.take() {
            None => frame.pending_key = Some(note),
            Some(key) => match frame.entries.entry(key) {
                Entry::Occupied(mut slot) => {
                    debug!(key = ?slot.key(), "duplicate table key, last value wins");
                    slot.insert(note);
                }
                Entry::Vacant(slot) => {
                    slot.insert(note);
                }
            },
        }
        Ok(())
    }
}

impl NoteSink for TreeBuilder<'_> {
    fn simplex(&mut self, note: DataNote, slot: Slot) -> DataResult<()> {
        let note = self.transform.apply(note, slot)?;
        self.attach(note)
    }

    fn open(&mut self, kind: Kind, slot: Slot) -> DataResult<()> {
        if kind.is_simplex() {
            return Err(DataError::structural(format!("{kind} is not a container kind")));
        }
        self.stack.push(Frame {
            kind,
            slot,
            items: Vec::new(),
            entries: IndexMap::new(),
            pending_key: None,
        });
        Ok(())
    }

    fn close(&mut self) -> DataResult<()> {
        let frame = self
            .stack
            .pop()
            .ok_or_else(|| DataError::structural("close without open container"))?;
        let data = match frame.kind {
            Kind::Array => Data::Array(frame.items),
            Kind::Option => Data::Option(frame.items),
            _ => {
                if frame.pending_key.is_some() {
                    return Err(DataError::structural("table key without value"));
                }
                Data::Table(frame.entries)
            }
        };
        let note = self.transform.apply(DataNote::new(data), frame.slot)?;
        self.attach(note)
    }
}

impl NoteBuilder for TreeBuilder<'_> {
    type Output = DataNote;

    fn finish(self) -> DataResult<DataNote> {
        if let Some(frame) = self.stack.last() {
            return Err(DataError::structural(format!("unclosed {}", frame.kind)));
        }
        self.root
            .ok_or_else(|| DataError::structural("input holds no value"))
    }
}
