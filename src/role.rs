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

//! Roles: named, inheritable bundles of permissions.
//!
//! A role's effective permission set is its own permissions united with those
//! of its superroles, transitively and deduplicated. Roles are immutable once
//! constructed; a space keeps a registry of them and agents are bound to
//! registry members by name.

use std::collections::HashSet;
use std::sync::Arc;

use crate::operation::Operation;
use crate::permission::Permission;

/// A named, immutable bundle of permissions, optionally inheriting from
/// parent roles.
#[derive(Debug, Clone)]
pub struct Role {
    name: String,
    permissions: Vec<Permission>,
    superroles: Vec<Arc<Role>>,
}

impl Role {
    /// Create a role with its own permissions.
    pub fn new(name: impl Into<String>, permissions: Vec<Permission>) -> Self {
        Role {
            name: name.into(),
            permissions,
            superroles: Vec::new(),
        }
    }

    /// Create a role that also inherits every permission of the given
    /// superroles, transitively.
    pub fn with_superroles(
        name: impl Into<String>,
        permissions: Vec<Permission>,
        superroles: Vec<Arc<Role>>,
    ) -> Self {
        Role {
            name: name.into(),
            permissions,
            superroles,
        }
    }

    /// The role's name, used for registry lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The role's own permissions, excluding inherited ones.
    pub fn own_permissions(&self) -> &[Permission] {
        &self.permissions
    }

    /// The effective permission set: own permissions united with all
    /// superroles' permissions, deduplicated.
    pub fn effective_permissions(&self) -> HashSet<&Permission> {
        let mut set = HashSet::new();
        self.collect_permissions(&mut set);
        set
    }

    fn collect_permissions<'a>(&'a self, set: &mut HashSet<&'a Permission>) {
        for permission in &self.permissions {
            set.insert(permission);
        }
        for superrole in &self.superroles {
            superrole.collect_permissions(set);
        }
    }

    /// Whether any permission in the effective set authorizes the operation.
    pub fn can(&self, operation: &Operation) -> bool {
        self.permissions.iter().any(|p| p.authorizes(operation))
            || self.superroles.iter().any(|r| r.can(operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OperationKind;
    use crate::{pattern, tuple};

    fn write_permission() -> Permission {
        Permission::new(OperationKind::Write, pattern![1, _])
    }

    fn take_permission() -> Permission {
        Permission::new(OperationKind::Take, pattern![1, _])
    }

    #[test]
    fn effective_permissions_include_own() {
        let role = Role::new("producer", vec![write_permission(), take_permission()]);
        assert_eq!(role.effective_permissions().len(), 2);
    }

    #[test]
    fn effective_permissions_inherit_from_superroles() {
        let parent = Arc::new(Role::new(
            "base",
            vec![write_permission(), take_permission()],
        ));
        let eval = Permission::new(OperationKind::Eval, pattern![1, _]);
        let role = Role::with_superroles("worker", vec![eval], vec![parent]);

        assert_eq!(role.effective_permissions().len(), 3);
    }

    #[test]
    fn inherited_duplicates_are_not_double_counted() {
        let parent1 = Arc::new(Role::new("writers", vec![write_permission()]));
        let parent2 = Arc::new(Role::new("takers", vec![take_permission()]));
        // repeats the write grant both directly and via parent1
        let role = Role::with_superroles(
            "both",
            vec![write_permission()],
            vec![parent1, parent2],
        );

        assert_eq!(role.effective_permissions().len(), 2);
    }

    #[test]
    fn can_checks_own_and_inherited_permissions() {
        let parent = Arc::new(Role::new("writers", vec![write_permission()]));
        let role = Role::with_superroles("child", vec![], vec![parent]);

        assert!(role.can(&Operation::write(tuple![1, "Bob"])));
        assert!(!role.can(&Operation::take(pattern![1, _])));
    }

    #[test]
    fn can_is_false_without_a_compatible_permission() {
        let role = Role::new("readers", vec![take_permission()]);
        assert!(!role.can(&Operation::write(tuple![1, "Bob"])));
    }
}
