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

//! Path-based reads and copy-on-write writes.
//!
//! A path is a slice of keys. Table entries are addressed by key equality;
//! Array and Option elements by a non-negative integer Number (Option
//! elements in stored order).
//!
//! Reads never fail: a segment that does not resolve yields `None` from
//! the `get` family and [`DataNote::absent`] from the `at` family.
//!
//! Writes return a new root. Every node on the path is rebuilt, every
//! other subtree is shared with the original, and the original is left
//! untouched. Rules for segments that do not resolve:
//!
//! | Node at segment   | Segment                  | Result                          |
//! |-------------------|--------------------------|---------------------------------|
//! | Table             | missing key              | entry appended                  |
//! | Array / Option    | index `== len`           | element appended                |
//! | Array / Option    | index `> len`            | padded with `Void`, then append |
//! | Array / Option    | index `>= max_container_size` | [`ErrorKind::Path`] error  |
//! | Array / Option    | not an index             | [`ErrorKind::Path`] error       |
//! | `Void` / missing  | any, more segments left  | empty Table created             |
//! | other Simplex     | any                      | [`ErrorKind::Path`] error       |
//!
//! The container bound is [`Limits::default`]'s `max_container_size`.
//!
//! [`ErrorKind::Path`]: crate::ErrorKind::Path
//! [`Limits::default`]: crate::Limits
//!
//! ```
//! use datanote_core::{path, DataNote};
//!
//! let root = DataNote::table([("user", DataNote::table([("name", "Ada")]))]);
//! let next = root.set_at(&path!["user", "langs", 0], "Rust").unwrap();
//!
//! assert_eq!(next.at_path(&path!["user", "langs", 0]), &DataNote::from("Rust"));
//! assert!(root.at_path(&path!["user", "langs"]).is_absent());
//! ```

use indexmap::IndexMap;

use crate::error::{DataError, DataResult};
use crate::limits::Limits;
use crate::value::{Data, DataNote};

/// Builds a path array from anything convertible into [`DataNote`].
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        [$($crate::DataNote::from($segment)),*]
    };
}

fn index_of(key: &DataNote) -> Option<usize> {
    match key.data() {
        Data::Number(n) => n.to_index(),
        _ => None,
    }
}

impl DataNote {
    /// Child under `key`.
    pub fn get(&self, key: &DataNote) -> Option<&DataNote> {
        match self.data() {
            Data::Array(items) | Data::Option(items) => index_of(key).and_then(|i| items.get(i)),
            Data::Table(map) => map.get(key),
            _ => None,
        }
    }

    /// Child under `key`, or the absent sentinel.
    pub fn at(&self, key: impl Into<DataNote>) -> &DataNote {
        self.get(&key.into()).unwrap_or(DataNote::absent())
    }

    /// Descendant at `path`; the empty path yields `self`.
    pub fn get_path(&self, path: &[DataNote]) -> Option<&DataNote> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Descendant at `path`, or the absent sentinel.
    pub fn at_path(&self, path: &[DataNote]) -> &DataNote {
        self.get_path(path).unwrap_or(DataNote::absent())
    }

    /// Descendant at `path`, or `default`.
    pub fn at_path_or<'a>(&'a self, path: &[DataNote], default: &'a DataNote) -> &'a DataNote {
        self.get_path(path).unwrap_or(default)
    }

    /// New root with `value` under `key`.
    pub fn set(&self, key: impl Into<DataNote>, value: impl Into<DataNote>) -> DataResult<DataNote> {
        self.set_at(&[key.into()], value)
    }

    /// New root with `value` at `path`; the empty path yields `value`.
    pub fn set_at(&self, path: &[DataNote], value: impl Into<DataNote>) -> DataResult<DataNote> {
        replace(self, path, value.into(), 0)
    }
}

fn replace(node: &DataNote, path: &[DataNote], value: DataNote, level: usize) -> DataResult<DataNote> {
    let Some((key, rest)) = path.split_first() else {
        return Ok(value);
    };

    match node.data() {
        Data::Table(map) => {
            let child = match map.get(key) {
                Some(child) => replace(child, rest, value, level + 1)?,
                None => replace(&empty_table(), rest, value, level + 1)?,
            };
            let mut map = map.clone();
            map.insert(key.clone(), child);
            Ok(DataNote::new(Data::Table(map)))
        }
        Data::Array(items) | Data::Option(items) => {
            let index = index_of(key).ok_or_else(|| {
                DataError::path(format!(
                    "segment {level}: {key:?} is not an index into {}",
                    node.kind()
                ))
            })?;
            let mut items = items.clone();
            if index < items.len() {
                let child = replace(&items[index], rest, value, level + 1)?;
                items[index] = child;
            } else {
                let limit = Limits::default().max_container_size;
                if index >= limit {
                    return Err(DataError::path(format!(
                        "segment {level}: index {index} exceeds the container limit of {limit}"
                    )));
                }
                items.resize(index, DataNote::void());
                items.push(replace(&empty_table(), rest, value, level + 1)?);
            }
            Ok(DataNote::new(match node.data() {
                Data::Option(_) => Data::Option(items),
                _ => Data::Array(items),
            }))
        }
        Data::Void => replace(&empty_table(), path, value, level),
        _ => Err(DataError::path(format!(
            "segment {level}: cannot descend into {} with {key:?}",
            node.kind()
        ))),
    }
}

fn empty_table() -> DataNote {
    DataNote::new(Data::Table(IndexMap::new()))
}
