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

//! The value tree.
//!
//! A [`DataNote`] is a reference-counted handle to an immutable node. Cloning
//! a handle never copies the node, so a subtree can be held by any number of
//! parents and threads at once. Every node caches a structural digest and
//! its complexity depth when it is created; equality checks pointers first,
//! then digests, and only then content.
//!
//! Because a node is frozen before any parent can refer to it, a tree can
//! never contain itself. Writing a tree into one of its own paths nests a
//! snapshot of the tree as it was before the write.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use seahash::SeaHasher;

use crate::kind::Kind;
use crate::lex::strings::quote;
use crate::number::Number;

/// The content of a node.
#[derive(Clone)]
pub enum Data {
    /// Text.
    String(String),
    /// Number literal.
    Number(Number),
    /// A single Unicode scalar value.
    Char(char),
    /// Bare identifier.
    Label(String),
    /// Boolean.
    Boole(bool),
    /// The null value.
    Void,
    /// Ordered sequence.
    Array(Vec<DataNote>),
    /// Unordered multiset; duplicates and `Void` members are allowed.
    Option(Vec<DataNote>),
    /// Key to value mapping that remembers insertion order. Equality ignores
    /// the order.
    Table(IndexMap<DataNote, DataNote>),
}

impl Data {
    pub fn kind(&self) -> Kind {
        match self {
            Data::String(_) => Kind::String,
            Data::Number(_) => Kind::Number,
            Data::Char(_) => Kind::Char,
            Data::Label(_) => Kind::Label,
            Data::Boole(_) => Kind::Boole,
            Data::Void => Kind::Void,
            Data::Array(_) => Kind::Array,
            Data::Option(_) => Kind::Option,
            Data::Table(_) => Kind::Table,
        }
    }
}

impl PartialEq for Data {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Data::String(a), Data::String(b)) | (Data::Label(a), Data::Label(b)) => a == b,
            (Data::Number(a), Data::Number(b)) => a == b,
            (Data::Char(a), Data::Char(b)) => a == b,
            (Data::Boole(a), Data::Boole(b)) => a == b,
            (Data::Void, Data::Void) => true,
            (Data::Array(a), Data::Array(b)) => a == b,
            (Data::Option(a), Data::Option(b)) => same_multiset(a, b),
            (Data::Table(a), Data::Table(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Data {}

fn same_multiset(a: &[DataNote], b: &[DataNote]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a == b {
        return true;
    }
    let mut counts: HashMap<&DataNote, isize> = HashMap::with_capacity(a.len());
    for note in a {
        *counts.entry(note).or_insert(0) += 1;
    }
    for note in b {
        match counts.get_mut(note) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

struct Node {
    data: Data,
    digest: u64,
    depth: usize,
}

/// An immutable tagged value.
///
/// # Examples
///
/// ```
/// use datanote_core::{DataNote, Kind};
///
/// let point = DataNote::table([("x", 1), ("y", 2)]);
/// assert_eq!(point.kind(), Kind::Table);
/// assert_eq!(point.depth(), 1);
/// assert_eq!(point.at("x"), &DataNote::from(1));
/// ```
#[derive(Clone)]
pub struct DataNote(Arc<Node>);

static ABSENT: OnceLock<DataNote> = OnceLock::new();

impl DataNote {
    /// Wraps `data` in a new node.
    pub fn new(data: Data) -> Self {
        let digest = digest(&data);
        let depth = depth(&data);
        DataNote(Arc::new(Node {
            data,
            digest,
            depth,
        }))
    }

    /// The shared sentinel returned by reads that do not resolve.
    ///
    /// It is a `Void` node, equal to every other `Void`, and the only node
    /// for which [`is_absent`](Self::is_absent) holds.
    pub fn absent() -> &'static DataNote {
        ABSENT.get_or_init(|| DataNote::new(Data::Void))
    }

    // ==================== Named constructors ====================

    pub fn string(s: impl Into<String>) -> Self {
        Self::new(Data::String(s.into()))
    }

    pub fn number(n: impl Into<Number>) -> Self {
        Self::new(Data::Number(n.into()))
    }

    pub fn char(c: char) -> Self {
        Self::new(Data::Char(c))
    }

    /// A label node. The text is not checked here; presenters reject
    /// labels their grammar cannot spell.
    pub fn label(s: impl Into<String>) -> Self {
        Self::new(Data::Label(s.into()))
    }

    pub fn boole(b: bool) -> Self {
        Self::new(Data::Boole(b))
    }

    pub fn void() -> Self {
        Self::new(Data::Void)
    }

    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DataNote>,
    {
        Self::new(Data::Array(items.into_iter().map(Into::into).collect()))
    }

    pub fn option<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DataNote>,
    {
        Self::new(Data::Option(items.into_iter().map(Into::into).collect()))
    }

    /// A table from key/value pairs. A repeated key keeps its first
    /// position and takes the last value.
    pub fn table<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<DataNote>,
        V: Into<DataNote>,
    {
        Self::new(Data::Table(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    // ==================== Shape ====================

    #[inline]
    pub fn data(&self) -> &Data {
        &self.0.data
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.0.data.kind()
    }

    #[inline]
    pub fn is_simplex(&self) -> bool {
        self.kind().is_simplex()
    }

    /// True for Array, Option and Table nodes, empty or not.
    #[inline]
    pub fn is_container(&self) -> bool {
        self.kind().is_complex()
    }

    /// Complexity depth: 0 for Simplex nodes and empty containers,
    /// otherwise one more than the deepest child (keys included).
    #[inline]
    pub fn depth(&self) -> usize {
        self.0.depth
    }

    /// True if the node has exactly the given complexity depth.
    #[inline]
    pub fn is_complex(&self, depth: usize) -> bool {
        self.0.depth == depth
    }

    /// Number of elements or entries; 0 for Simplex nodes.
    pub fn extent(&self) -> usize {
        match self.data() {
            Data::Array(items) | Data::Option(items) => items.len(),
            Data::Table(map) => map.len(),
            _ => 0,
        }
    }

    /// True if both handles point at the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &DataNote) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// True only for [`DataNote::absent`].
    pub fn is_absent(&self) -> bool {
        ABSENT.get().map_or(false, |absent| self.ptr_eq(absent))
    }

    /// Structural digest, stable for equal trees.
    #[inline]
    pub fn digest(&self) -> u64 {
        self.0.digest
    }

    /// Elements of an Array or Option.
    pub fn elements(&self) -> Option<&[DataNote]> {
        match self.data() {
            Data::Array(items) | Data::Option(items) => Some(items),
            _ => None,
        }
    }

    /// Entries of a Table.
    pub fn entries(&self) -> Option<&IndexMap<DataNote, DataNote>> {
        match self.data() {
            Data::Table(map) => Some(map),
            _ => None,
        }
    }
}

fn tag(kind: Kind) -> u8 {
    kind as u8
}

fn spread(digest: u64) -> u64 {
    seahash::hash(&digest.to_le_bytes())
}

fn digest(data: &Data) -> u64 {
    let mut h = SeaHasher::new();
    h.write_u8(tag(data.kind()));
    match data {
        Data::String(s) | Data::Label(s) => h.write(s.as_bytes()),
        Data::Number(n) => h.write(n.as_str().as_bytes()),
        Data::Char(c) => h.write_u32(*c as u32),
        Data::Boole(b) => h.write_u8(*b as u8),
        Data::Void => {}
        Data::Array(items) => {
            h.write_usize(items.len());
            for item in items {
                h.write_u64(item.digest());
            }
        }
        // order-insensitive: sum of spread digests
        Data::Option(items) => {
            h.write_usize(items.len());
            let sum = items
                .iter()
                .fold(0u64, |acc, item| acc.wrapping_add(spread(item.digest())));
            h.write_u64(sum);
        }
        Data::Table(map) => {
            h.write_usize(map.len());
            let sum = map.iter().fold(0u64, |acc, (k, v)| {
                let mut pair = SeaHasher::new();
                pair.write_u64(k.digest());
                pair.write_u64(v.digest());
                acc.wrapping_add(pair.finish())
            });
            h.write_u64(sum);
        }
    }
    h.finish()
}

fn depth(data: &Data) -> usize {
    let deepest = match data {
        Data::Array(items) | Data::Option(items) => items.iter().map(DataNote::depth).max(),
        Data::Table(map) => map.iter().map(|(k, v)| k.depth().max(v.depth())).max(),
        _ => return 0,
    };
    deepest.map_or(0, |d| d + 1)
}

impl PartialEq for DataNote {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.0.digest == other.0.digest
            && self.0.depth == other.0.depth
            && self.0.data == other.0.data
    }
}

impl Eq for DataNote {}

impl Hash for DataNote {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.digest);
    }
}

impl Default for DataNote {
    fn default() -> Self {
        DataNote::void()
    }
}

/// Compact JEXIS-like rendering.
impl fmt::Debug for DataNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(f: &mut fmt::Formatter<'_>, items: &[DataNote], open: &str, close: &str) -> fmt::Result {
            f.write_str(open)?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{item:?}")?;
            }
            f.write_str(close)
        }

        match self.data() {
            Data::String(s) => f.write_str(&quote(s, '"')),
            Data::Number(n) => f.write_str(n.as_str()),
            Data::Char(c) => f.write_str(&quote(c.encode_utf8(&mut [0; 4]), '\'')),
            Data::Label(s) => f.write_str(s),
            Data::Boole(b) => write!(f, "{b}"),
            Data::Void => f.write_str("null"),
            Data::Array(items) => list(f, items, "[", "]"),
            Data::Option(items) => list(f, items, "(", ")"),
            Data::Table(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{k:?}:{v:?}")?;
                }
                f.write_str("}")
            }
        }
    }
}
