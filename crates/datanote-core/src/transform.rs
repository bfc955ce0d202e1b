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

//! Per-node transforms.
//!
//! A [`Transform`] sees every node a processor handles, together with the
//! [`Slot`] the node occupies. While parsing it runs bottom-up: a node is
//! offered once it is complete and before it is linked into its parent, so
//! containers arrive with their children already transformed. While
//! presenting it runs top-down: a node is offered before its children are
//! rendered, so a container may be replaced by one of another kind.
//!
//! Transforms must be pure functions of their arguments. Returning an error
//! aborts the whole parse or present.
//!
//! Any `Fn(DataNote, Slot) -> Result<DataNote, TransformError>` is a
//! transform:
//!
//! ```
//! use datanote_core::{DataNote, Kind, Slot, Transform, TransformError};
//!
//! let strict_keys = |note: DataNote, slot: Slot| {
//!     if slot.is_key() && note.kind() != Kind::String {
//!         return Err(TransformError::new("non-string key not allowed here"));
//!     }
//!     Ok(note)
//! };
//! assert!(strict_keys.apply(DataNote::from(1), Slot::Key).is_err());
//! ```

use thiserror::Error;

use crate::value::{Data, DataNote};

/// Position of a node inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Table key.
    Key,
    /// Everything else, including the root.
    Value,
}

impl Slot {
    #[inline]
    pub fn is_key(self) -> bool {
        self == Slot::Key
    }
}

/// Rejection signalled by a transform.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransformError {
    message: String,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A per-node rewrite applied during parse or present.
pub trait Transform {
    fn apply(&self, note: DataNote, slot: Slot) -> Result<DataNote, TransformError>;

    /// Runs `self`, then `next` on its result.
    fn then<T: Transform>(self, next: T) -> Chain<Self, T>
    where
        Self: Sized,
    {
        Chain(self, next)
    }
}

impl<F> Transform for F
where
    F: Fn(DataNote, Slot) -> Result<DataNote, TransformError>,
{
    fn apply(&self, note: DataNote, slot: Slot) -> Result<DataNote, TransformError> {
        self(note, slot)
    }
}

/// Leaves every node as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    #[inline]
    fn apply(&self, note: DataNote, _slot: Slot) -> Result<DataNote, TransformError> {
        Ok(note)
    }
}

/// Folds every Number into its nearest `f64`, so that `1`, `1.0` and `1E0`
/// all become `1.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberNormalizer;

impl Transform for NumberNormalizer {
    fn apply(&self, note: DataNote, _slot: Slot) -> Result<DataNote, TransformError> {
        match note.data() {
            Data::Number(n) => Ok(DataNote::from(n.to_f64())),
            _ => Ok(note),
        }
    }
}

/// Two transforms run one after the other.
#[derive(Debug, Clone, Copy)]
pub struct Chain<A, B>(A, B);

impl<A: Transform, B: Transform> Transform for Chain<A, B> {
    fn apply(&self, note: DataNote, slot: Slot) -> Result<DataNote, TransformError> {
        self.1.apply(self.0.apply(note, slot)?, slot)
    }
}
