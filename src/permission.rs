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

//! Authorization units.
//!
//! ## Purpose
//! A [`Permission`] pairs an operation kind with a pattern and decides by
//! subsumption whether a concrete operation is authorized:
//!
//! - `Write`/`Eval`: the permission pattern must match the operand tuple
//!   (for an active tuple, pending computations are covered only by wildcard
//!   fields, since their value is not known at authorization time).
//! - take/read family: the permission pattern must *generalize* the operand
//!   pattern. The direction is deliberate — a permission for a broad pattern
//!   covers equally broad or narrower requests, while a request more general
//!   than the grant could observe tuples outside the granted scope and is
//!   rejected.

use serde::{Deserialize, Serialize};

use crate::operation::{Operand, Operation, OperationKind};
use crate::pattern::Pattern;

/// An authorization unit: one operation kind scoped by one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    kind: OperationKind,
    pattern: Pattern,
}

impl Permission {
    /// Create a permission for the given kind and pattern scope.
    pub fn new(kind: OperationKind, pattern: Pattern) -> Self {
        Permission { kind, pattern }
    }

    /// The operation kind this permission covers.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The pattern scope of this permission.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Whether this permission authorizes the given operation.
    pub fn authorizes(&self, operation: &Operation) -> bool {
        if operation.kind() != self.kind {
            return false;
        }

        match operation.operand() {
            Operand::Tuple(tuple) => self.pattern.matches(tuple),
            Operand::Active(active) => self.pattern.matches_active(active),
            Operand::Pattern(requested) => self.pattern.generalizes(requested),
        }
    }
}
