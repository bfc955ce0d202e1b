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

//! Security limits for parsing.

/// Configurable limits for parser security.
///
/// These limits protect against denial-of-service attacks and memory exhaustion
/// by bounding the resources consumed during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum container nesting depth (default: 512).
    pub max_depth: usize,
    /// Maximum length of a single string literal in bytes (default: 100MB).
    pub max_string_length: usize,
    /// Maximum number of elements or entries in one container (default: 10M).
    pub max_container_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 512,
            max_string_length: 100 * 1024 * 1024, // 100MB
            max_container_size: 10_000_000,       // 10M
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            max_string_length: usize::MAX,
            max_container_size: usize::MAX,
        }
    }

    /// Builder-style depth override.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default limits tests ====================

    #[test]
    fn test_default_max_depth() {
        assert_eq!(Limits::default().max_depth, 512);
    }

    #[test]
    fn test_default_max_string_length() {
        assert_eq!(Limits::default().max_string_length, 100 * 1024 * 1024);
    }

    #[test]
    fn test_default_max_container_size() {
        assert_eq!(Limits::default().max_container_size, 10_000_000);
    }

    // ==================== Unlimited limits tests ====================

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_depth, usize::MAX);
        assert_eq!(limits.max_string_length, usize::MAX);
        assert_eq!(limits.max_container_size, usize::MAX);
    }

    // ==================== Custom limits tests ====================

    #[test]
    fn test_with_max_depth() {
        let limits = Limits::default().with_max_depth(4);
        assert_eq!(limits.max_depth, 4);
        assert_eq!(limits.max_container_size, 10_000_000);
    }
}
