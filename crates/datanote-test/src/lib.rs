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


//! Shared test fixtures and strategies for DataNote processors.
//!
//! This crate provides canonical sample texts together with the trees they
//! must parse to, invalid inputs for error-path tests, and proptest
//! strategies for arbitrary trees.
//!
//! # Features
//!
//! - **Paired fixtures**: every sample text comes with a hand-built tree
//! - **Error fixtures**: malformed inputs per format
//! - **Strategies**: arbitrary JEXIS trees and their JSON-only subset
//! - **Tracing**: one-line subscriber setup for tests
//!
//! # Quick Start
//!
//! ```rust
//! use datanote_test::fixtures;
//!
//! for (name, text, expected) in fixtures::json_fixtures() {
//!     let tree = expected();
//!     assert!(!text.is_empty(), "{name}");
//!     let _ = tree.depth();
//! }
//!
//! for (name, invalid) in fixtures::errors::invalid_json_samples() {
//!     // feed `invalid` to a parser and expect an error
//!     let _ = (name, invalid);
//! }
//! ```

use datanote_core::DataNote;
use tracing_subscriber::{fmt, EnvFilter};

/// Canonical sample texts and the trees they parse to.
pub mod fixtures;

/// Proptest strategies for arbitrary trees.
pub mod strategies;

/// Type alias for a list of paired fixtures (name, text, expected tree).
pub type FixtureList = Vec<(&'static str, &'static str, fn() -> DataNote)>;

pub use fixtures::*;
pub use strategies::{arb_json_note, arb_note};

/// Initialize tracing for tests.
///
/// Honours `RUST_LOG` and defaults to `debug`. Safe to call from every
/// test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(true)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_names_unique() {
        let mut names: Vec<_> = fixtures::json_fixtures()
            .into_iter()
            .chain(fixtures::jexis_fixtures())
            .map(|(name, _, _)| name)
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
