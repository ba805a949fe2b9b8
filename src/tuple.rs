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

//! Tuples and their field values.
//!
//! ## Purpose
//! A [`Tuple`] is an ordered, immutable record of [`Value`] fields — the unit
//! of storage and matching in a space. Two tuples with equal fields are
//! structurally equal but remain distinct *instances*: every tuple carries a
//! ULID assigned at construction, and stores remove tuples by that instance
//! identity, so structural duplicates coexist and are taken one at a time.
//!
//! An [`ActiveTuple`] is the eval-side counterpart: a tuple whose fields may
//! still be pending computations. Resolving it runs all computations
//! concurrently and yields the passive [`Tuple`] in the original field order.

use std::cmp::Ordering;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{SpaceError, SpaceResult};

/// A single field value of a tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    /// Integer value
    Int(i64),
    /// String value
    Str(String),
    /// Boolean value
    Bool(bool),
    /// Floating point value
    Float(OrderedFloat),
    /// Binary data
    Bytes(Vec<u8>),
    /// Null value
    Null,
}

impl Value {
    /// The kind of this value, for type-constrained pattern fields.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Str(_) => ValueKind::Str,
            Value::Bool(_) => ValueKind::Bool,
            Value::Float(_) => ValueKind::Float,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Null => ValueKind::Null,
        }
    }
}

/// Kind of a [`Value`], used by type-constrained pattern fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueKind {
    /// Integer type
    Int,
    /// String type
    Str,
    /// Boolean type
    Bool,
    /// Floating point type
    Float,
    /// Binary data type
    Bytes,
    /// Null type
    Null,
}

/// An `f64` with total order and bit-pattern hashing, so float fields can
/// participate in tuple equality and pattern matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderedFloat(f64);

impl OrderedFloat {
    /// Wrap a float value.
    pub fn new(value: f64) -> Self {
        OrderedFloat(value)
    }

    /// The inner float value.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for OrderedFloat {}

impl PartialOrd for OrderedFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        // NaN sorts above every number and equal to itself
        match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal),
        }
    }
}

impl std::hash::Hash for OrderedFloat {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// A passive tuple: an ordered record of values with an instance identity.
///
/// Equality, ordering, and hashing are structural (fields only). Instance
/// identity is compared with [`Tuple::same_instance`]; clones of a tuple keep
/// the identity of the original, so a tuple handed back by a search still
/// identifies the stored instance it was cloned from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuple {
    id: Ulid,
    fields: Vec<Value>,
}

impl Tuple {
    /// Create a new tuple instance from fields.
    pub fn new(fields: Vec<Value>) -> Self {
        Tuple {
            id: Ulid::new(),
            fields,
        }
    }

    /// The fields of the tuple.
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// Number of fields (the tuple's arity).
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// The instance id of this tuple.
    pub fn id(&self) -> Ulid {
        self.id
    }

    /// Whether `other` is the same stored instance as `self`, regardless of
    /// structural equality.
    pub fn same_instance(&self, other: &Tuple) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for Tuple {}

impl std::hash::Hash for Tuple {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.fields.hash(state);
    }
}

impl PartialOrd for Tuple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tuple {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fields.cmp(&other.fields)
    }
}

/// A pending computation producing one field value.
pub type Computation = BoxFuture<'static, SpaceResult<Value>>;

/// A field of an active tuple: either an already-passive value or a pending
/// computation.
pub enum ActiveField {
    /// A value that needs no evaluation
    Value(Value),
    /// A computation to be evaluated into a value
    Computation(Computation),
}

impl ActiveField {
    /// Wrap a future as a computation field.
    pub fn computation<F>(fut: F) -> Self
    where
        F: std::future::Future<Output = SpaceResult<Value>> + Send + 'static,
    {
        ActiveField::Computation(Box::pin(fut))
    }

    /// Whether this field still needs evaluation.
    pub fn is_computation(&self) -> bool {
        matches!(self, ActiveField::Computation(_))
    }
}

impl std::fmt::Debug for ActiveField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveField::Value(v) => f.debug_tuple("Value").field(v).finish(),
            ActiveField::Computation(_) => f.debug_tuple("Computation").field(&"<future>").finish(),
        }
    }
}

macro_rules! active_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ActiveField {
            fn from(val: $ty) -> Self {
                ActiveField::Value(Value::from(val))
            }
        })*
    };
}

active_from!(i64, String, &str, bool, f64, Vec<u8>);

impl From<Value> for ActiveField {
    fn from(val: Value) -> Self {
        ActiveField::Value(val)
    }
}

/// A tuple whose fields may be pending computations, resolved by `eval`
/// before insertion.
#[derive(Debug)]
pub struct ActiveTuple {
    fields: Vec<ActiveField>,
}

impl ActiveTuple {
    /// Create an active tuple from fields.
    pub fn new(fields: Vec<ActiveField>) -> Self {
        ActiveTuple { fields }
    }

    /// The fields of the active tuple.
    pub fn fields(&self) -> &[ActiveField] {
        &self.fields
    }

    /// Number of fields.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Evaluate every computation field concurrently and assemble the passive
    /// tuple. Field order is fixed by the original operand positions, not by
    /// completion order. Fails without producing a tuple if any computation
    /// fails.
    pub async fn resolve(self) -> SpaceResult<Tuple> {
        let futures: Vec<Computation> = self
            .fields
            .into_iter()
            .map(|field| match field {
                ActiveField::Value(v) => {
                    Box::pin(std::future::ready(Ok(v))) as Computation
                }
                ActiveField::Computation(fut) => fut,
            })
            .collect();

        let values = futures::future::try_join_all(futures).await?;
        Ok(Tuple::new(values))
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Int(val)
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::Str(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::Str(val.to_string())
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Bool(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Float(OrderedFloat(val))
    }
}

impl From<Vec<u8>> for Value {
    fn from(val: Vec<u8>) -> Self {
        Value::Bytes(val)
    }
}

/// Construct a [`Tuple`] from field values.
///
/// # Examples
/// ```
/// # use lindaspace::{tuple, Tuple, Value};
/// let t = tuple![1, "hello", true];
/// assert_eq!(t.arity(), 3);
/// ```
#[macro_export]
macro_rules! tuple {
    ($($field:expr),* $(,)?) => {
        $crate::Tuple::new(vec![$($crate::Value::from($field)),*])
    };
}
