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

//! Pattern matching over tuples.
//!
//! ## Purpose
//! A [`Pattern`] is a tuple-shaped template: each field is an exact value, an
//! explicit [`PatternField::Any`] wildcard, or a type constraint. Matching is
//! a total, side-effect-free comparison; a pattern and a tuple must have the
//! same arity or nothing matches — partial tuples never match.
//!
//! Patterns also order themselves by generality: [`Pattern::generalizes`] is
//! the subsumption test the permission model is built on. A permission granted
//! for a broad (wildcard-heavy) pattern authorizes operations asking for
//! equally broad or narrower patterns, never broader ones.

use serde::{Deserialize, Serialize};

use crate::tuple::{ActiveField, ActiveTuple, Tuple, Value, ValueKind};

/// A field of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternField {
    /// Matches exactly one value
    Exact(Value),
    /// Matches any value
    Any,
    /// Matches any value of the given kind
    Typed(ValueKind),
}

impl PatternField {
    /// Whether a concrete value satisfies this field.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            PatternField::Exact(expected) => value == expected,
            PatternField::Any => true,
            PatternField::Typed(kind) => value.kind() == *kind,
        }
    }

    /// Whether this field is at least as general as `other`.
    ///
    /// `Any` generalizes everything; `Typed(k)` generalizes itself and any
    /// exact value of kind `k`; an exact field generalizes only the same
    /// exact field. A wildcard is therefore never generalized by a concrete
    /// field, which is the direction authorization depends on.
    pub fn generalizes(&self, other: &PatternField) -> bool {
        match (self, other) {
            (PatternField::Any, _) => true,
            (PatternField::Typed(kind), PatternField::Typed(other_kind)) => kind == other_kind,
            (PatternField::Typed(kind), PatternField::Exact(value)) => value.kind() == *kind,
            (PatternField::Exact(a), PatternField::Exact(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! exact_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for PatternField {
            fn from(val: $ty) -> Self {
                PatternField::Exact(Value::from(val))
            }
        })*
    };
}

exact_from!(i64, String, &str, bool, f64, Vec<u8>);

impl From<Value> for PatternField {
    fn from(val: Value) -> Self {
        PatternField::Exact(val)
    }
}

/// A template for selecting tuples out of a space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    fields: Vec<PatternField>,
}

impl Pattern {
    /// Create a pattern from fields.
    pub fn new(fields: Vec<PatternField>) -> Self {
        Pattern { fields }
    }

    /// The fields of the pattern.
    pub fn fields(&self) -> &[PatternField] {
        &self.fields
    }

    /// Number of fields (the pattern's arity).
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Whether a tuple matches this pattern, field by field.
    pub fn matches(&self, tuple: &Tuple) -> bool {
        if self.fields.len() != tuple.arity() {
            return false;
        }

        self.fields
            .iter()
            .zip(tuple.fields().iter())
            .all(|(pattern_field, value)| pattern_field.matches(value))
    }

    /// Whether this pattern is at least as general as `other`: every field of
    /// `other` must be generalized by the corresponding field here. Reflexive.
    pub fn generalizes(&self, other: &Pattern) -> bool {
        if self.fields.len() != other.fields.len() {
            return false;
        }

        self.fields
            .iter()
            .zip(other.fields.iter())
            .all(|(general, specific)| general.generalizes(specific))
    }

    /// Whether an active tuple is covered by this pattern. A pending
    /// computation has no value yet, so only an `Any` field can cover it;
    /// passive fields match as usual.
    pub fn matches_active(&self, active: &ActiveTuple) -> bool {
        if self.fields.len() != active.arity() {
            return false;
        }

        self.fields
            .iter()
            .zip(active.fields().iter())
            .all(|(pattern_field, active_field)| match active_field {
                ActiveField::Value(value) => pattern_field.matches(value),
                ActiveField::Computation(_) => matches!(pattern_field, PatternField::Any),
            })
    }
}

/// Construct a [`Pattern`] from field templates. `_` is the wildcard.
///
/// # Examples
/// ```
/// # use lindaspace::{pattern, tuple};
/// let p = pattern![1, _, "pending"];
/// assert!(p.matches(&tuple![1, "anything", "pending"]));
/// assert!(!p.matches(&tuple![2, "anything", "pending"]));
/// ```
#[macro_export]
macro_rules! pattern {
    ($($field:tt),* $(,)?) => {
        $crate::Pattern::new(vec![$($crate::pattern_field!($field)),*])
    };
}

/// Helper for [`pattern!`]: turns `_` into [`PatternField::Any`] and any
/// other token into an exact field.
#[doc(hidden)]
#[macro_export]
macro_rules! pattern_field {
    (_) => {
        $crate::PatternField::Any
    };
    ($field:expr) => {
        $crate::PatternField::from($field)
    };
}
