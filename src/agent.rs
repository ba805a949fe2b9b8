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

//! Single-flight operation executors.
//!
//! ## Purpose
//! An [`Agent`] is how a caller operates on a space. It enforces two things
//! before any operation reaches the space:
//!
//! - **Single flight**: one outstanding operation per agent. A second call
//!   while one is in flight fails immediately with `AgentBusy` — this is an
//!   explicit gate, not a queue; the caller retries after the first
//!   operation completes. A "blocking" take/read therefore never blocks a
//!   thread: it suspends only this agent's ability to start another
//!   operation.
//! - **Authorization**: an agent bound to a role tests `role.can(op)` and
//!   fails with `Unauthorized` without touching the space. Agents without a
//!   role are unrestricted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::error::{SpaceError, SpaceResult};
use crate::operation::Operation;
use crate::pattern::Pattern;
use crate::role::Role;
use crate::space::Space;
use crate::tuple::{ActiveTuple, Tuple};

/// A single-flight, optionally role-scoped operation executor bound to one
/// space. Created with [`Space::create_agent`].
pub struct Agent {
    space: Arc<Space>,
    role: Option<Arc<Role>>,
    blocked: AtomicBool,
}

/// Releases the single-flight gate on every exit path.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Agent {
    pub(crate) fn new(space: Arc<Space>, role: Option<Arc<Role>>) -> Self {
        Agent {
            space,
            role,
            blocked: AtomicBool::new(false),
        }
    }

    /// Whether an operation is currently in flight.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::Acquire)
    }

    /// The role this agent is bound to, if any.
    pub fn role(&self) -> Option<&Arc<Role>> {
        self.role.as_ref()
    }

    async fn execute(&self, operation: Operation) -> SpaceResult<crate::operation::Outcome> {
        if self
            .blocked
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SpaceError::AgentBusy);
        }
        let _guard = FlightGuard(&self.blocked);

        if let Some(role) = &self.role {
            if !role.can(&operation) {
                debug!(
                    space = %self.space.name(),
                    role = %role.name(),
                    kind = %operation.kind(),
                    "operation rejected by role"
                );
                return Err(SpaceError::Unauthorized(operation.kind()));
            }
        }

        operation.execute(&self.space).await
    }

    /// Deposit a tuple into the space.
    pub async fn write(&self, tuple: Tuple) -> SpaceResult<Tuple> {
        self.execute(Operation::write(tuple)).await?.into_tuple()
    }

    /// Take a matching tuple, suspending until one is available.
    pub async fn take(&self, pattern: Pattern) -> SpaceResult<Tuple> {
        self.execute(Operation::take(pattern)).await?.into_tuple()
    }

    /// Take a matching tuple if one is present right now.
    pub async fn take_now(&self, pattern: Pattern) -> SpaceResult<Option<Tuple>> {
        self.execute(Operation::take_now(pattern))
            .await?
            .into_maybe_tuple()
    }

    /// Read a matching tuple, suspending until one is available.
    pub async fn read(&self, pattern: Pattern) -> SpaceResult<Tuple> {
        self.execute(Operation::read(pattern)).await?.into_tuple()
    }

    /// Read a matching tuple if one is present right now.
    pub async fn read_now(&self, pattern: Pattern) -> SpaceResult<Option<Tuple>> {
        self.execute(Operation::read_now(pattern))
            .await?
            .into_maybe_tuple()
    }

    /// Read every tuple matching the pattern right now.
    pub async fn read_all_now(&self, pattern: Pattern) -> SpaceResult<Vec<Tuple>> {
        self.execute(Operation::read_all_now(pattern))
            .await?
            .into_tuples()
    }

    /// Evaluate an active tuple and deposit the resulting passive tuple.
    pub async fn eval(&self, active: ActiveTuple) -> SpaceResult<Tuple> {
        self.execute(Operation::eval(active)).await?.into_tuple()
    }
}
