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

//! Tree traversal for presenters.
//!
//! The visitor pattern separates the depth-first walk from rendering.
//! Presenters implement [`NoteVisitor`]; [`traverse`] drives the walk and
//! offers every node to a [`Transform`] before the visitor sees it, so the
//! visitor only ever observes transformed nodes.
//!
//! # Example
//!
//! ```
//! use datanote_core::traverse::{traverse, NoteVisitor, VisitorContext};
//! use datanote_core::{DataError, DataNote, Identity};
//!
//! #[derive(Default)]
//! struct LeafCounter(usize);
//!
//! impl NoteVisitor for LeafCounter {
//!     type Error = DataError;
//!
//!     fn visit_simplex(&mut self, _: &DataNote, _: &VisitorContext) -> Result<(), DataError> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let note = DataNote::table([("a", DataNote::array([1, 2])), ("b", DataNote::void())]);
//! let mut counter = LeafCounter::default();
//! traverse(&note, &Identity, &mut counter).unwrap();
//! assert_eq!(counter.0, 5); // two keys, three values
//! ```

use crate::kind::Kind;
use crate::transform::{Slot, Transform, TransformError};
use crate::value::{Data, DataNote};

/// Context provided to visitors during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitorContext {
    /// Current nesting depth (0 = root).
    pub depth: usize,
    /// Slot of the current node in its parent.
    pub slot: Slot,
    /// Position among the parent's elements or entries.
    pub index: usize,
    /// Kind of the parent, `None` at the root.
    pub parent: Option<Kind>,
    /// True below a Table key: some ancestor occupies [`Slot::Key`].
    pub in_key: bool,
}

impl VisitorContext {
    /// Context of the root node.
    pub fn root() -> Self {
        Self {
            depth: 0,
            slot: Slot::Value,
            index: 0,
            parent: None,
            in_key: false,
        }
    }

    /// Context of the `index`-th child of a node of kind `parent`.
    pub fn child(&self, parent: Kind, index: usize, slot: Slot) -> Self {
        Self {
            depth: self.depth + 1,
            slot,
            index,
            parent: Some(parent),
            in_key: self.in_key || self.slot.is_key(),
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Trait for visiting the nodes of a tree.
///
/// Container callbacks default to doing nothing, so an implementation that
/// only cares about leaves overrides [`visit_simplex`](Self::visit_simplex)
/// alone.
pub trait NoteVisitor {
    /// Error type returned by visitor methods.
    type Error;

    /// Called for every Simplex node.
    fn visit_simplex(&mut self, note: &DataNote, ctx: &VisitorContext) -> Result<(), Self::Error>;

    /// Called before the children of a container.
    fn begin_complex(&mut self, _note: &DataNote, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the children of a container.
    fn end_complex(&mut self, _note: &DataNote, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walks `note` depth-first, keys before their values, applying
/// `transform` top-down.
pub fn traverse<V>(note: &DataNote, transform: &dyn Transform, visitor: &mut V) -> Result<(), V::Error>
where
    V: NoteVisitor,
    V::Error: From<TransformError>,
{
    walk(note.clone(), transform, visitor, VisitorContext::root())
}

fn walk<V>(
    note: DataNote,
    transform: &dyn Transform,
    visitor: &mut V,
    ctx: VisitorContext,
) -> Result<(), V::Error>
where
    V: NoteVisitor,
    V::Error: From<TransformError>,
{
    let note = transform.apply(note, ctx.slot)?;
    match note.data() {
        Data::Array(items) | Data::Option(items) => {
            visitor.begin_complex(&note, &ctx)?;
            let kind = note.kind();
            for (i, item) in items.iter().enumerate() {
                walk(item.clone(), transform, visitor, ctx.child(kind, i, Slot::Value))?;
            }
            visitor.end_complex(&note, &ctx)
        }
        Data::Table(map) => {
            visitor.begin_complex(&note, &ctx)?;
            for (i, (key, value)) in map.iter().enumerate() {
                walk(key.clone(), transform, visitor, ctx.child(Kind::Table, i, Slot::Key))?;
                walk(value.clone(), transform, visitor, ctx.child(Kind::Table, i, Slot::Value))?;
            }
            visitor.end_complex(&note, &ctx)
        }
        _ => visitor.visit_simplex(&note, &ctx),
    }
}
