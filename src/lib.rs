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

//! Linda-style tuplespace coordination.
//!
//! A [`Space`] is an associative bag of tuples that decouples producers and
//! consumers in both identity and time. Agents deposit tuples with `write`,
//! search them by pattern with the take/read family (blocking or
//! non-blocking), and spawn computations with `eval`. Blocking searches
//! suspend the calling task until a matching tuple arrives; removal is
//! by instance, so duplicate tuples are distinct entries.
//!
//! Access is mediated by [`Agent`]s: single-flight executors optionally
//! scoped to a [`Role`], whose [`Permission`]s authorize operations by
//! pattern subsumption before they reach the space.
//!
//! ```rust
//! use lindaspace::{pattern, tuple, Space};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> lindaspace::SpaceResult<()> {
//! let space = Space::new();
//! let agent = space.create_agent(None).await?;
//!
//! agent.write(tuple![1, "Bob"]).await?;
//! let found = agent.take(pattern![1, _]).await?;
//! assert_eq!(found, tuple![1, "Bob"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod agent;
pub mod config;
pub mod error;
pub mod operation;
pub mod pattern;
pub mod permission;
pub mod role;
pub mod space;
pub mod store;
pub mod tuple;

pub use agent::Agent;
pub use config::{PermissionConfig, RoleConfig, SpaceConfig};
pub use error::{SpaceError, SpaceResult};
pub use operation::{Operand, Operation, OperationKind, Outcome};
pub use pattern::{Pattern, PatternField};
pub use permission::Permission;
pub use role::Role;
pub use space::{Hook, Space, Validator};
pub use store::memory::MemoryStore;
pub use store::TupleStore;
pub use tuple::{ActiveField, ActiveTuple, Computation, OrderedFloat, Tuple, Value, ValueKind};
