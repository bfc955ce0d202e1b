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

//! Value tree and processor contract for DataNote.
//!
//! This crate provides the format-independent half of the engine:
//!
//! - [`DataNote`]: an immutable, reference-counted, tagged value tree with
//!   six Simplex kinds (String, Number, Char, Label, Boole, Void) and three
//!   Complex kinds (Array, Option, Table)
//! - path-based reads and copy-on-write writes ([`access`])
//! - best-effort typed extraction through one conversion table ([`convert`])
//! - the [`Processor`] trait that every text format implements, together
//!   with the parse event ([`build`]) and traversal ([`traverse`])
//!   contracts it is built on
//! - per-node [`Transform`]s applied during parse and present
//!
//! # Lexical Analysis
//!
//! The [`lex`] module holds the pieces shared by the format scanners:
//! source positions, lexical errors, the number literal grammar, bare
//! words and backslash escapes.
//!
//! # Example
//!
//! ```
//! use datanote_core::{path, DataNote, Kind};
//!
//! let tree = DataNote::from(vec![vec![1, 2], vec![3, 4]]);
//! assert_eq!(tree.depth(), 2);
//! assert_eq!(tree.at_path(&path![1, 0]).as_i64(), Some(3));
//!
//! let edited = tree.set_at(&path![0, 1], "two").unwrap();
//! assert_eq!(edited.at_path(&path![0, 1]).kind(), Kind::String);
//! assert_eq!(tree.at_path(&path![0, 1]).kind(), Kind::Number);
//! ```
//!
//! # Concurrency
//!
//! Trees are immutable and `Send + Sync`; any number of threads may read
//! the same tree. A write builds a new root and never disturbs readers of
//! the old one.

pub mod access;
pub mod build;
mod construct;
pub mod convert;
mod error;
mod kind;
pub mod lex;
mod limits;
mod number;
pub mod processor;
pub mod transform;
pub mod traverse;
mod value;

pub use build::{NoteBuilder, NoteSink, TreeBuilder};
pub use convert::coerce;
pub use error::{DataError, DataResult, ErrorKind};
pub use kind::Kind;
pub use limits::Limits;
pub use number::Number;
pub use processor::{Layout, Processor};
pub use transform::{Chain, Identity, NumberNormalizer, Slot, Transform, TransformError};
pub use traverse::{traverse, NoteVisitor, VisitorContext};
pub use value::{Data, DataNote};
