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

//! Role-scoped agents end to end: pattern-subsumption grants, inheritance,
//! and the registry gate on agent creation.

use std::sync::Arc;

use lindaspace::{
    pattern, tuple, OperationKind, Permission, Role, Space, SpaceError,
};

async fn space_with_roles(roles: Vec<Arc<Role>>) -> Arc<Space> {
    let space = Space::named("secured");
    space.add_roles(roles).await;
    space
}

#[tokio::test]
async fn grants_are_scoped_by_pattern_subsumption() {
    let clerk = Arc::new(Role::new(
        "clerk",
        vec![
            Permission::new(OperationKind::Write, pattern![1, _]),
            Permission::new(OperationKind::Take, pattern![1, _]),
        ],
    ));
    let space = space_with_roles(vec![clerk]).await;
    let agent = space.create_agent(Some("clerk")).await.unwrap();

    // within the granted scope
    agent.write(tuple![1, "Bob"]).await.unwrap();
    let taken = agent.take(pattern![1, "Bob"]).await.unwrap();
    assert_eq!(taken, tuple![1, "Bob"]);

    // a request more general than the grant could observe tuples
    // outside the granted scope
    let result = agent.take(pattern![_, "Bob"]).await;
    assert!(matches!(result, Err(SpaceError::Unauthorized(OperationKind::Take))));

    // write outside the scope
    let result = agent.write(tuple![2, "Eve"]).await;
    assert!(matches!(result, Err(SpaceError::Unauthorized(OperationKind::Write))));
}

#[tokio::test]
async fn unauthorized_operations_never_touch_the_space() {
    let auditor = Arc::new(Role::new(
        "auditor",
        vec![Permission::new(OperationKind::ReadAllNow, pattern![_, _])],
    ));
    let space = space_with_roles(vec![auditor]).await;
    let agent = space.create_agent(Some("auditor")).await.unwrap();

    let result = agent.write(tuple![1, "smuggled"]).await;
    assert!(matches!(result, Err(SpaceError::Unauthorized(_))));
    assert!(space.snapshot().await.unwrap().is_empty());

    // the rejection releases the agent for its permitted work
    let all = agent.read_all_now(pattern![_, _]).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn inherited_permissions_apply_transitively() {
    let reader = Arc::new(Role::new(
        "reader",
        vec![Permission::new(OperationKind::ReadNow, pattern![_, _])],
    ));
    let writer = Arc::new(Role::with_superroles(
        "writer",
        vec![Permission::new(OperationKind::Write, pattern![_, _])],
        vec![reader.clone()],
    ));
    let admin = Arc::new(Role::with_superroles(
        "admin",
        vec![Permission::new(OperationKind::TakeNow, pattern![_, _])],
        vec![writer.clone()],
    ));
    let space = space_with_roles(vec![reader, writer, admin]).await;

    let admin = space.create_agent(Some("admin")).await.unwrap();
    // own grant
    assert!(admin.take_now(pattern![1, _]).await.unwrap().is_none());
    // one level up
    admin.write(tuple![1, "note"]).await.unwrap();
    // two levels up
    assert!(admin.read_now(pattern![1, _]).await.unwrap().is_some());

    let writer = space.create_agent(Some("writer")).await.unwrap();
    let result = writer.take_now(pattern![1, _]).await;
    assert!(matches!(result, Err(SpaceError::Unauthorized(_))));
}

#[tokio::test]
async fn separate_roles_partition_the_space() {
    let orders = Arc::new(Role::new(
        "orders",
        vec![
            Permission::new(OperationKind::Write, pattern![1, _]),
            Permission::new(OperationKind::TakeNow, pattern![1, _]),
        ],
    ));
    let invoices = Arc::new(Role::new(
        "invoices",
        vec![
            Permission::new(OperationKind::Write, pattern![2, _]),
            Permission::new(OperationKind::TakeNow, pattern![2, _]),
        ],
    ));
    let space = space_with_roles(vec![orders, invoices]).await;

    let order_clerk = space.create_agent(Some("orders")).await.unwrap();
    let invoice_clerk = space.create_agent(Some("invoices")).await.unwrap();

    order_clerk.write(tuple![1, "widget"]).await.unwrap();
    invoice_clerk.write(tuple![2, "due"]).await.unwrap();

    // each clerk can only drain its own partition
    let result = invoice_clerk.take_now(pattern![1, _]).await;
    assert!(matches!(result, Err(SpaceError::Unauthorized(_))));
    let order = order_clerk.take_now(pattern![1, _]).await.unwrap();
    assert_eq!(order, Some(tuple![1, "widget"]));
}

#[tokio::test]
async fn eval_grants_require_wildcards_for_computations() {
    use lindaspace::{ActiveField, ActiveTuple, Value};

    let worker = Arc::new(Role::new(
        "worker",
        vec![Permission::new(OperationKind::Eval, pattern![1, _])],
    ));
    let space = space_with_roles(vec![worker]).await;
    let agent = space.create_agent(Some("worker")).await.unwrap();

    let produced = agent
        .eval(ActiveTuple::new(vec![
            ActiveField::from(1),
            ActiveField::computation(async { Ok(Value::from(42)) }),
        ]))
        .await
        .unwrap();
    assert_eq!(produced, tuple![1, 42]);

    // a computation in a position the grant pins to a concrete value
    // cannot be authorized up front
    let result = agent
        .eval(ActiveTuple::new(vec![
            ActiveField::computation(async { Ok(Value::from(1)) }),
            ActiveField::from("late"),
        ]))
        .await;
    assert!(matches!(result, Err(SpaceError::Unauthorized(OperationKind::Eval))));
}
