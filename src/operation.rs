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

//! Operation descriptors and dispatch.
//!
//! ## Purpose
//! An [`Operation`] is an immutable `{ kind, operand }` descriptor for one
//! coordination verb. It carries its own kind so the permission model can
//! authorize it before it ever touches a space, and it knows how to execute
//! itself against a [`Space`](crate::Space):
//!
//! | kind          | effect                                                    |
//! |---------------|-----------------------------------------------------------|
//! | `Write`       | add the operand tuple                                     |
//! | `Take`        | blocking search, then remove the match                    |
//! | `TakeNow`     | non-blocking search; remove if found, `None` otherwise    |
//! | `Read`        | blocking search                                           |
//! | `ReadNow`     | non-blocking search                                       |
//! | `ReadAllNow`  | snapshot of all matches                                   |
//! | `Eval`        | resolve the active tuple, then add the passive result     |
//!
//! Operations are built through typed constructors, so a kind/operand
//! mismatch cannot be expressed. [`OperationKind::from_str`] exists for
//! config-driven permission declarations and fails with
//! `InvalidOperationKind` on unknown names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SpaceError, SpaceResult};
use crate::pattern::Pattern;
use crate::space::Space;
use crate::tuple::{ActiveTuple, Tuple};

/// The coordination verbs an operation can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// Deposit a tuple
    Write,
    /// Blocking destructive search
    Take,
    /// Non-blocking destructive search
    TakeNow,
    /// Blocking non-destructive search
    Read,
    /// Non-blocking non-destructive search
    ReadNow,
    /// Non-blocking snapshot of every match
    ReadAllNow,
    /// Evaluate an active tuple and deposit the result
    Eval,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Write => "WRITE",
            OperationKind::Take => "TAKE",
            OperationKind::TakeNow => "TAKE_NOW",
            OperationKind::Read => "READ",
            OperationKind::ReadNow => "READ_NOW",
            OperationKind::ReadAllNow => "READ_ALL_NOW",
            OperationKind::Eval => "EVAL",
        };
        f.write_str(name)
    }
}

impl FromStr for OperationKind {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WRITE" => Ok(OperationKind::Write),
            "TAKE" => Ok(OperationKind::Take),
            "TAKE_NOW" => Ok(OperationKind::TakeNow),
            "READ" => Ok(OperationKind::Read),
            "READ_NOW" => Ok(OperationKind::ReadNow),
            "READ_ALL_NOW" => Ok(OperationKind::ReadAllNow),
            "EVAL" => Ok(OperationKind::Eval),
            other => Err(SpaceError::InvalidOperationKind(other.to_string())),
        }
    }
}

/// The operand an operation carries, shaped by its kind.
#[derive(Debug)]
pub enum Operand {
    /// A tuple to deposit (`Write`)
    Tuple(Tuple),
    /// A pattern to search with (take/read family)
    Pattern(Pattern),
    /// An active tuple to evaluate (`Eval`)
    Active(ActiveTuple),
}

/// An immutable descriptor of one coordination verb and its operand.
#[derive(Debug)]
pub struct Operation {
    kind: OperationKind,
    operand: Operand,
}

impl Operation {
    /// A write of the given tuple.
    pub fn write(tuple: Tuple) -> Self {
        Operation {
            kind: OperationKind::Write,
            operand: Operand::Tuple(tuple),
        }
    }

    /// A blocking take for the given pattern.
    pub fn take(pattern: Pattern) -> Self {
        Operation {
            kind: OperationKind::Take,
            operand: Operand::Pattern(pattern),
        }
    }

    /// A non-blocking take for the given pattern.
    pub fn take_now(pattern: Pattern) -> Self {
        Operation {
            kind: OperationKind::TakeNow,
            operand: Operand::Pattern(pattern),
        }
    }

    /// A blocking read for the given pattern.
    pub fn read(pattern: Pattern) -> Self {
        Operation {
            kind: OperationKind::Read,
            operand: Operand::Pattern(pattern),
        }
    }

    /// A non-blocking read for the given pattern.
    pub fn read_now(pattern: Pattern) -> Self {
        Operation {
            kind: OperationKind::ReadNow,
            operand: Operand::Pattern(pattern),
        }
    }

    /// A non-blocking read of every match for the given pattern.
    pub fn read_all_now(pattern: Pattern) -> Self {
        Operation {
            kind: OperationKind::ReadAllNow,
            operand: Operand::Pattern(pattern),
        }
    }

    /// An evaluation of the given active tuple.
    pub fn eval(active: ActiveTuple) -> Self {
        Operation {
            kind: OperationKind::Eval,
            operand: Operand::Active(active),
        }
    }

    /// The kind of this operation.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The operand of this operation.
    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Execute this operation against a space.
    ///
    /// Consumes the operation: an `Eval` operand owns its computations and
    /// can only run once.
    pub async fn execute(self, space: &Space) -> SpaceResult<Outcome> {
        match (self.kind, self.operand) {
            (OperationKind::Write, Operand::Tuple(tuple)) => {
                Ok(Outcome::Tuple(space.add(tuple).await?))
            }
            (OperationKind::Take, Operand::Pattern(pattern)) => {
                Ok(Outcome::Tuple(space.take_until_found(pattern).await?))
            }
            (OperationKind::TakeNow, Operand::Pattern(pattern)) => {
                match space.search_now(&pattern).await? {
                    // the remove can still lose a race against another
                    // consumer; NotFound propagates as a retryable condition
                    Some(tuple) => Ok(Outcome::MaybeTuple(Some(space.remove(tuple).await?))),
                    None => Ok(Outcome::MaybeTuple(None)),
                }
            }
            (OperationKind::Read, Operand::Pattern(pattern)) => {
                Ok(Outcome::Tuple(space.search_until_found(pattern).await?))
            }
            (OperationKind::ReadNow, Operand::Pattern(pattern)) => {
                Ok(Outcome::MaybeTuple(space.search_now(&pattern).await?))
            }
            (OperationKind::ReadAllNow, Operand::Pattern(pattern)) => {
                Ok(Outcome::Tuples(space.search_all_now(&pattern).await?))
            }
            (OperationKind::Eval, Operand::Active(active)) => {
                let tuple = active.resolve().await?;
                Ok(Outcome::Tuple(space.add(tuple).await?))
            }
            (kind, _) => Err(SpaceError::InvalidOperationKind(format!(
                "{kind} operand mismatch"
            ))),
        }
    }
}

/// The result of executing an operation.
#[derive(Debug)]
pub enum Outcome {
    /// A single tuple (write, take, read, eval)
    Tuple(Tuple),
    /// An optional tuple (non-blocking take/read)
    MaybeTuple(Option<Tuple>),
    /// A sequence of tuples (read-all)
    Tuples(Vec<Tuple>),
}

impl Outcome {
    /// Unwrap a single-tuple outcome.
    pub fn into_tuple(self) -> SpaceResult<Tuple> {
        match self {
            Outcome::Tuple(tuple) => Ok(tuple),
            other => Err(SpaceError::InvalidOperationKind(format!(
                "expected tuple outcome, got {other:?}"
            ))),
        }
    }

    /// Unwrap an optional-tuple outcome.
    pub fn into_maybe_tuple(self) -> SpaceResult<Option<Tuple>> {
        match self {
            Outcome::MaybeTuple(tuple) => Ok(tuple),
            other => Err(SpaceError::InvalidOperationKind(format!(
                "expected optional tuple outcome, got {other:?}"
            ))),
        }
    }

    /// Unwrap a tuple-sequence outcome.
    pub fn into_tuples(self) -> SpaceResult<Vec<Tuple>> {
        match self {
            Outcome::Tuples(tuples) => Ok(tuples),
            other => Err(SpaceError::InvalidOperationKind(format!(
                "expected tuple sequence outcome, got {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_names() {
        for kind in [
            OperationKind::Write,
            OperationKind::Take,
            OperationKind::TakeNow,
            OperationKind::Read,
            OperationKind::ReadNow,
            OperationKind::ReadAllNow,
            OperationKind::Eval,
        ] {
            let parsed: OperationKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_kind_name_is_rejected() {
        let result = "COMPARE_AND_SWAP".parse::<OperationKind>();
        assert!(matches!(
            result,
            Err(SpaceError::InvalidOperationKind(name)) if name == "COMPARE_AND_SWAP"
        ));
    }

    #[test]
    fn constructors_pair_kind_and_operand() {
        use crate::pattern;

        let op = Operation::take(pattern![1, _]);
        assert_eq!(op.kind(), OperationKind::Take);
        assert!(matches!(op.operand(), Operand::Pattern(_)));

        let op = Operation::write(crate::tuple![1]);
        assert_eq!(op.kind(), OperationKind::Write);
        assert!(matches!(op.operand(), Operand::Tuple(_)));
    }

    #[tokio::test]
    async fn take_now_surfaces_lost_race_as_not_found() {
        use std::collections::HashMap;
        use std::sync::Arc;

        use async_trait::async_trait;

        use crate::store::memory::MemoryStore;
        use crate::store::TupleStore;
        use crate::{pattern, tuple};

        // a store whose tuples are always gone again by removal time,
        // standing in for a faster concurrent consumer
        struct ContendedStore {
            inner: MemoryStore,
        }

        #[async_trait]
        impl TupleStore for ContendedStore {
            fn capabilities(&self) -> HashMap<String, String> {
                self.inner.capabilities()
            }
            async fn add(&self, tuple: Tuple) -> SpaceResult<Tuple> {
                self.inner.add(tuple).await
            }
            async fn remove(&self, tuple: &Tuple) -> SpaceResult<Tuple> {
                self.inner.remove(tuple).await
            }
            async fn contains(&self, _tuple: &Tuple) -> SpaceResult<bool> {
                Ok(false)
            }
            async fn find(&self, pattern: &Pattern) -> SpaceResult<Option<Tuple>> {
                self.inner.find(pattern).await
            }
            async fn find_all(&self, pattern: &Pattern) -> SpaceResult<Vec<Tuple>> {
                self.inner.find_all(pattern).await
            }
            async fn all(&self) -> SpaceResult<Vec<Tuple>> {
                self.inner.all().await
            }
            async fn clear(&self) -> SpaceResult<()> {
                self.inner.clear().await
            }
        }

        let space = Space::with_store(
            "contended",
            Arc::new(ContendedStore {
                inner: MemoryStore::new(),
            }),
        )
        .unwrap();
        space.add(tuple![1, "claimed"]).await.unwrap();

        // the find succeeds, but the removal loses to the other consumer:
        // a retryable NotFound, never a silent None
        let result = Operation::take_now(pattern![1, _]).execute(&space).await;
        assert!(matches!(result, Err(SpaceError::NotFound)));
    }
}
