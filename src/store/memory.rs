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

//! In-memory store backend.
//!
//! ## Design
//! - **Storage**: `Vec<Tuple>` behind a `tokio::sync::RwLock`; push order is
//!   insertion order, which gives `find`/`find_all` their determinism.
//! - **Pattern matching**: linear scan with early exit.
//! - **Identity**: removal scans for the tuple's instance id, so structural
//!   duplicates are removed first-found-first-removed.
//!
//! Ideal for development, testing, and single-process coordination domains.
//! Use an external backend for persistence or cross-process spaces.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{TupleStore, CAP_ORDERING, CAP_ORDERING_INSERTION, CAP_PERSISTENT, CAP_STORAGE};
use crate::error::{SpaceError, SpaceResult};
use crate::pattern::Pattern;
use crate::tuple::Tuple;

/// In-memory tuple store, the default backend for a space.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tuples: RwLock<Vec<Tuple>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Create a store seeded with initial tuples, kept in the given order.
    pub fn with_tuples(initial: Vec<Tuple>) -> Self {
        MemoryStore {
            tuples: RwLock::new(initial),
        }
    }
}

#[async_trait]
impl TupleStore for MemoryStore {
    fn capabilities(&self) -> HashMap<String, String> {
        HashMap::from([
            (CAP_STORAGE.to_string(), "memory".to_string()),
            (CAP_PERSISTENT.to_string(), "false".to_string()),
            (
                CAP_ORDERING.to_string(),
                CAP_ORDERING_INSERTION.to_string(),
            ),
        ])
    }

    async fn add(&self, tuple: Tuple) -> SpaceResult<Tuple> {
        let mut tuples = self.tuples.write().await;
        tuples.push(tuple.clone());
        Ok(tuple)
    }

    async fn remove(&self, tuple: &Tuple) -> SpaceResult<Tuple> {
        let mut tuples = self.tuples.write().await;
        let position = tuples.iter().position(|t| t.same_instance(tuple));
        match position {
            Some(index) => Ok(tuples.remove(index)),
            None => Err(SpaceError::NotFound),
        }
    }

    async fn contains(&self, tuple: &Tuple) -> SpaceResult<bool> {
        let tuples = self.tuples.read().await;
        Ok(tuples.iter().any(|t| t.same_instance(tuple)))
    }

    async fn find(&self, pattern: &Pattern) -> SpaceResult<Option<Tuple>> {
        let tuples = self.tuples.read().await;
        Ok(tuples.iter().find(|t| pattern.matches(t)).cloned())
    }

    async fn find_all(&self, pattern: &Pattern) -> SpaceResult<Vec<Tuple>> {
        let tuples = self.tuples.read().await;
        Ok(tuples
            .iter()
            .filter(|t| pattern.matches(t))
            .cloned()
            .collect())
    }

    async fn all(&self) -> SpaceResult<Vec<Tuple>> {
        let tuples = self.tuples.read().await;
        Ok(tuples.clone())
    }

    async fn clear(&self) -> SpaceResult<()> {
        let mut tuples = self.tuples.write().await;
        tuples.clear();
        Ok(())
    }
}
