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

//! Declarative space configuration.
//!
//! ## Purpose
//! Lets a coordination domain be described as data: a name, seed tuples, and
//! role declarations, loadable from JSON. Everything a config can express is
//! carried explicitly on the built [`Space`] — there is no process-wide
//! registry or environment fallback.
//!
//! Seed tuples go straight into the store. Validators and hooks cannot have
//! been registered on a space that does not exist yet, so nothing is bypassed.
//! Roles may reference earlier-declared roles as superroles; forward or
//! unknown references are configuration errors.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{SpaceError, SpaceResult};
use crate::operation::OperationKind;
use crate::pattern::{Pattern, PatternField};
use crate::permission::Permission;
use crate::role::Role;
use crate::space::Space;
use crate::store::memory::MemoryStore;
use crate::tuple::{Tuple, Value};

/// A permission declaration: an operation kind name and a pattern scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionConfig {
    /// Operation kind name ("WRITE", "TAKE", "TAKE_NOW", "READ", "READ_NOW",
    /// "READ_ALL_NOW", "EVAL")
    pub kind: String,
    /// Pattern fields scoping the grant
    pub pattern: Vec<PatternField>,
}

/// A role declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleConfig {
    /// Role name, unique within the space
    pub name: String,
    /// The role's own permissions
    #[serde(default)]
    pub permissions: Vec<PermissionConfig>,
    /// Names of earlier-declared roles to inherit from
    #[serde(default)]
    pub superroles: Vec<String>,
}

/// A space described as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceConfig {
    /// Space name
    pub name: String,
    /// Tuples present before the space accepts operations
    #[serde(default)]
    pub initial_tuples: Vec<Vec<Value>>,
    /// Role declarations, in order (superroles must come first)
    #[serde(default)]
    pub roles: Vec<RoleConfig>,
}

impl SpaceConfig {
    /// A config with the given name and nothing else.
    pub fn named(name: impl Into<String>) -> Self {
        SpaceConfig {
            name: name.into(),
            initial_tuples: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// Parse a config from a JSON document.
    pub fn from_json_str(json: &str) -> SpaceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the configured space over an in-memory store.
    ///
    /// ## Errors
    /// `InvalidOperationKind` for an unrecognized permission kind name;
    /// `InvalidConfiguration` for a superrole reference that is not declared
    /// earlier in the list.
    pub async fn build(self) -> SpaceResult<Arc<Space>> {
        let seed: Vec<Tuple> = self.initial_tuples.into_iter().map(Tuple::new).collect();
        let space = Space::with_store(self.name, Arc::new(MemoryStore::with_tuples(seed)))?;

        let mut built: HashMap<String, Arc<Role>> = HashMap::new();
        let mut roles = Vec::with_capacity(self.roles.len());
        for role_config in self.roles {
            let mut permissions = Vec::with_capacity(role_config.permissions.len());
            for permission in role_config.permissions {
                let kind: OperationKind = permission.kind.parse()?;
                permissions.push(Permission::new(kind, Pattern::new(permission.pattern)));
            }

            let mut superroles = Vec::with_capacity(role_config.superroles.len());
            for parent in &role_config.superroles {
                let parent = built.get(parent).cloned().ok_or_else(|| {
                    SpaceError::InvalidConfiguration(format!(
                        "superrole {parent:?} of role {:?} is not declared earlier",
                        role_config.name
                    ))
                })?;
                superroles.push(parent);
            }

            let role = Arc::new(Role::with_superroles(
                role_config.name.clone(),
                permissions,
                superroles,
            ));
            built.insert(role_config.name, role.clone());
            roles.push(role);
        }
        space.add_roles(roles).await;

        Ok(space)
    }
}
