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

//! Error types for tuplespace coordination.
//!
//! No error here is retried internally by the engine; retry policy is always
//! caller-side. `NotFound` in particular is the recoverable "someone else got
//! it first" signal for take-style callers.

use thiserror::Error;

use crate::operation::OperationKind;

/// Result type for space operations.
pub type SpaceResult<T> = Result<T, SpaceError>;

/// Errors that can occur during space operations.
#[derive(Error, Debug)]
pub enum SpaceError {
    /// A tuple was rejected by a registered validator
    #[error("Tuple rejected by validator: {0}")]
    Validation(String),

    /// Removal targeted a tuple that is no longer in the space
    /// (double-remove race, or a tuple that was never inserted)
    #[error("Tuple not found in the space")]
    NotFound,

    /// The agent's role does not grant the attempted operation
    #[error("Agent is not authorized to perform {0} operations on this operand")]
    Unauthorized(OperationKind),

    /// The agent already has an operation in flight
    #[error("Agent is still waiting for a previously requested operation to complete")]
    AgentBusy,

    /// The store does not satisfy the contract required by a space
    #[error("Incompatible store: {0}")]
    IncompatibleStore(String),

    /// An operation kind name could not be recognized
    #[error("Invalid operation kind: {0}")]
    InvalidOperationKind(String),

    /// An agent was requested for a role that is not registered on the space
    #[error("Role not registered on this space: {0}")]
    RoleNotRegistered(String),

    /// A lifecycle hook failed
    #[error("Hook failed: {0}")]
    Hook(String),

    /// A computation of an active tuple failed during eval
    #[error("Computation failed: {0}")]
    Computation(String),

    /// Store backend error (I/O, connection, etc.)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<serde_json::Error> for SpaceError {
    fn from(err: serde_json::Error) -> Self {
        SpaceError::InvalidConfiguration(err.to_string())
    }
}
