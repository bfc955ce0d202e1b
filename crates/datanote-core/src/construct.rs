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

//! Construction from host values.
//!
//! | Host value                          | Kind    |
//! |-------------------------------------|---------|
//! | `&str`, `String`                    | String  |
//! | integers, `f32`, `f64`, [`Number`]  | Number  |
//! | `char`                              | Char    |
//! | `bool`                              | Boole   |
//! | `()`, `None`                        | Void    |
//! | `Vec<T>`, `[T; N]`, `&[T]`          | Array   |
//! | `HashSet<T>`, `BTreeSet<T>`         | Option  |
//! | `HashMap`, `BTreeMap`, `IndexMap`   | Table   |
//!
//! Containers convert their elements recursively.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use crate::number::Number;
use crate::value::{Data, DataNote};

impl From<&str> for DataNote {
    fn from(s: &str) -> Self {
        DataNote::string(s)
    }
}

impl From<String> for DataNote {
    fn from(s: String) -> Self {
        DataNote::string(s)
    }
}

impl From<&String> for DataNote {
    fn from(s: &String) -> Self {
        DataNote::string(s.as_str())
    }
}

impl From<char> for DataNote {
    fn from(c: char) -> Self {
        DataNote::char(c)
    }
}

impl From<bool> for DataNote {
    fn from(b: bool) -> Self {
        DataNote::boole(b)
    }
}

impl From<()> for DataNote {
    fn from(_: ()) -> Self {
        DataNote::void()
    }
}

impl From<Number> for DataNote {
    fn from(n: Number) -> Self {
        DataNote::number(n)
    }
}

impl From<Data> for DataNote {
    fn from(data: Data) -> Self {
        DataNote::new(data)
    }
}

impl From<&DataNote> for DataNote {
    fn from(note: &DataNote) -> Self {
        note.clone()
    }
}

macro_rules! note_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DataNote {
                fn from(value: $t) -> Self {
                    DataNote::number(value)
                }
            }
        )*
    };
}

note_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Into<DataNote>> From<Option<T>> for DataNote {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(DataNote::void, Into::into)
    }
}

impl<T: Into<DataNote>> From<Vec<T>> for DataNote {
    fn from(items: Vec<T>) -> Self {
        DataNote::array(items)
    }
}

impl<T: Into<DataNote>, const N: usize> From<[T; N]> for DataNote {
    fn from(items: [T; N]) -> Self {
        DataNote::array(items)
    }
}

impl<T: Into<DataNote> + Clone> From<&[T]> for DataNote {
    fn from(items: &[T]) -> Self {
        DataNote::array(items.iter().cloned())
    }
}

impl<T: Into<DataNote>, S: BuildHasher> From<HashSet<T, S>> for DataNote {
    fn from(items: HashSet<T, S>) -> Self {
        DataNote::option(items)
    }
}

impl<T: Into<DataNote>> From<BTreeSet<T>> for DataNote {
    fn from(items: BTreeSet<T>) -> Self {
        DataNote::option(items)
    }
}

impl<K: Into<DataNote>, V: Into<DataNote>, S: BuildHasher> From<HashMap<K, V, S>> for DataNote {
    fn from(map: HashMap<K, V, S>) -> Self {
        DataNote::table(map)
    }
}

impl<K: Into<DataNote>, V: Into<DataNote>> From<BTreeMap<K, V>> for DataNote {
    fn from(map: BTreeMap<K, V>) -> Self {
        DataNote::table(map)
    }
}

impl<K: Into<DataNote>, V: Into<DataNote>, S> From<IndexMap<K, V, S>> for DataNote {
    fn from(map: IndexMap<K, V, S>) -> Self {
        DataNote::table(map)
    }
}

/// Collects into an Array.
impl<T: Into<DataNote>> FromIterator<T> for DataNote {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DataNote::array(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    #[test]
    fn test_simplex_inference() {
        assert_eq!(DataNote::from("x").kind(), Kind::String);
        assert_eq!(DataNote::from(String::from("x")).kind(), Kind::String);
        assert_eq!(DataNote::from('x').kind(), Kind::Char);
        assert_eq!(DataNote::from(true).kind(), Kind::Boole);
        assert_eq!(DataNote::from(()).kind(), Kind::Void);
        assert_eq!(DataNote::from(7u16).kind(), Kind::Number);
        assert_eq!(DataNote::from(2.5).kind(), Kind::Number);
    }

    #[test]
    fn test_option_values() {
        assert_eq!(DataNote::from(Some(1)), DataNote::from(1));
        assert_eq!(DataNote::from(None::<i32>), DataNote::void());
    }

    #[test]
    fn test_ordered_sequence_is_array() {
        let note = DataNote::from(vec![1, 2, 3]);
        assert_eq!(note.kind(), Kind::Array);
        assert_eq!(note.extent(), 3);
        assert_eq!(DataNote::from(&[1, 2, 3][..]), note);
        assert_eq!((1..=3).collect::<DataNote>(), note);
    }

    #[test]
    fn test_unordered_collection_is_option() {
        let set: HashSet<&str> = ["a", "b"].into_iter().collect();
        let note = DataNote::from(set);
        assert_eq!(note.kind(), Kind::Option);
        assert_eq!(note, DataNote::option(["b", "a"]));

        let tree: BTreeSet<i32> = [3, 1].into_iter().collect();
        assert_eq!(DataNote::from(tree), DataNote::option([1, 3]));
    }

    #[test]
    fn test_mapping_is_table() {
        let mut map = HashMap::new();
        map.insert("x", vec![1.5, 2.5]);
        map.insert("y", vec![]);
        let note = DataNote::from(map);
        assert_eq!(note.kind(), Kind::Table);
        assert_eq!(note.depth(), 2);

        let tree: BTreeMap<i32, bool> = [(1, true)].into_iter().collect();
        assert_eq!(DataNote::from(tree), DataNote::table([(1, true)]));
    }

    #[test]
    fn test_nested_host_structure() {
        let rows = vec![vec![Some("a"), None], vec![Some("b"), Some("c")]];
        let note = DataNote::from(rows);
        assert_eq!(note.depth(), 2);
        assert_eq!(note, DataNote::array([
            DataNote::array([DataNote::from("a"), DataNote::void()]),
            DataNote::array(["b", "c"]),
        ]));
    }
}
