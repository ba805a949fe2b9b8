// SPDX-License-Identifier: LGPL-2.1-or-later
// Copyright (C) 2026 Lindaspace contributors
//
// This file is part of Lindaspace.
//
// Lindaspace is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 2.1 of the License, or
// (at your option) any later version.
//
// Lindaspace is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with Lindaspace. If not, see <https://www.gnu.org/licenses/>.

//! Store backend abstraction.
//!
//! ## Purpose
//! Defines the contract every tuple store must satisfy so a space can use it:
//! an ordered, duplicate-permitting collection behind `add`, `remove`, `find`
//! and `find_all`. The default backend is [`memory::MemoryStore`]; external
//! backends (a document database, a remote service) implement the same trait
//! and may resolve operations over the network — the space calls every store
//! through the same async interface.
//!
//! ## Capabilities
//! Implementing the trait gets a backend most of the way; the remaining
//! contract the compiler cannot check is declared through `capabilities()`.
//! A space requires `ordering: insertion` — `find`/`find_all` determinism
//! depends on it — and rejects stores that do not declare it at construction
//! time with [`crate::error::SpaceError::IncompatibleStore`].

pub mod memory;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::SpaceResult;
use crate::pattern::Pattern;
use crate::tuple::Tuple;

/// Capability key for result ordering.
pub const CAP_ORDERING: &str = "ordering";
/// Ordering capability value a space requires: insertion order.
pub const CAP_ORDERING_INSERTION: &str = "insertion";
/// Capability key for the backend type ("memory", "mongodb", ...).
pub const CAP_STORAGE: &str = "storage";
/// Capability key for persistence ("true"/"false").
pub const CAP_PERSISTENT: &str = "storage.persistent";

/// Tuple store backend trait.
///
/// ## Contract
/// - `add` appends; duplicates (structurally equal, distinct instances) are
///   permitted and kept in insertion order.
/// - `remove` identifies the tuple by instance identity, never by
///   re-matching, so duplicates are removed one at a time.
/// - `find` returns the first match in insertion order; `find_all` returns a
///   snapshot of all matches at call time, in insertion order.
/// - All methods are async so network-backed stores fit the same calling
///   convention as the in-memory one.
#[async_trait]
pub trait TupleStore: Send + Sync {
    /// Intrinsic capabilities of this backend.
    fn capabilities(&self) -> HashMap<String, String>;

    /// Append a tuple. Returns the stored tuple.
    async fn add(&self, tuple: Tuple) -> SpaceResult<Tuple>;

    /// Remove a tuple by instance identity.
    ///
    /// ## Errors
    /// `NotFound` if no stored tuple has this instance id.
    async fn remove(&self, tuple: &Tuple) -> SpaceResult<Tuple>;

    /// Whether a tuple with this instance id is present.
    async fn contains(&self, tuple: &Tuple) -> SpaceResult<bool>;

    /// First tuple matching the pattern, in insertion order.
    async fn find(&self, pattern: &Pattern) -> SpaceResult<Option<Tuple>>;

    /// All tuples matching the pattern, snapshot at call time, insertion
    /// order.
    async fn find_all(&self, pattern: &Pattern) -> SpaceResult<Vec<Tuple>>;

    /// Snapshot of every tuple currently stored, insertion order.
    async fn all(&self) -> SpaceResult<Vec<Tuple>>;

    /// Number of tuples matching the pattern.
    async fn count(&self, pattern: &Pattern) -> SpaceResult<usize> {
        Ok(self.find_all(pattern).await?.len())
    }

    /// Remove every tuple.
    async fn clear(&self) -> SpaceResult<()>;
}

/// Whether a store declares the ordering guarantee a space requires.
pub fn supports_insertion_order(caps: &HashMap<String, String>) -> bool {
    caps.get(CAP_ORDERING).map(|v| v == CAP_ORDERING_INSERTION) == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_capability_check() {
        let mut caps = HashMap::new();
        assert!(!supports_insertion_order(&caps));

        caps.insert(CAP_ORDERING.to_string(), "none".to_string());
        assert!(!supports_insertion_order(&caps));

        caps.insert(
            CAP_ORDERING.to_string(),
            CAP_ORDERING_INSERTION.to_string(),
        );
        assert!(supports_insertion_order(&caps));
    }
}
