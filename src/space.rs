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

//! The coordination core.
//!
//! ## Purpose
//! A [`Space`] is one tuple universe: it owns a store, a validator pipeline,
//! four lifecycle-hook pipelines, the registered roles, and the registry of
//! pending blocking searches. All mutation passes through [`Space::add`] and
//! [`Space::remove`] — there is no other path to the store — which makes the
//! space the single choke point where validators and hooks run.
//!
//! ## Blocking protocol
//! `search_until_found`/`take_until_found` resolve immediately when a match
//! is already present; otherwise the caller is registered as a *waiter* with
//! a one-shot completion channel. Every successful add tests the new tuple
//! against pending waiters in registration order. Read waiters are
//! non-consuming, so every matching one resolves; the first matching take
//! waiter consumes the tuple and ends the scan. A take-style waiter is
//! resolved and its tuple removed as one step under the waiter lock, so two
//! blocked takers can never both claim the same tuple; the non-blocking take
//! path keeps search and removal separate and surfaces a lost race as a
//! retryable `NotFound`.
//!
//! There is no engine-side timeout or cancellation: a caller wanting one
//! races the pending future against a timer and drops it. Waiters whose
//! completion channel has been dropped are pruned on the next add.
//!
//! ## Hook contract
//! Validators run before any hook; will-hooks run before mutation and abort
//! it on failure; did-hooks run after mutation, and a failure there is
//! surfaced to the caller without rolling the mutation back. Hooks within a
//! category run in registration order. Hooks run under the space's internal
//! locks and must not issue operations against the same space.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::{oneshot, Mutex, RwLock};
use tracing::{debug, warn};

use crate::agent::Agent;
use crate::error::{SpaceError, SpaceResult};
use crate::pattern::Pattern;
use crate::role::Role;
use crate::store::memory::MemoryStore;
use crate::store::{supports_insertion_order, TupleStore};
use crate::tuple::Tuple;

/// A tuple validator: accepts the candidate or rejects it with a reason.
pub type Validator = Box<dyn Fn(&Tuple) -> Result<(), String> + Send + Sync>;

/// A lifecycle hook, invoked with the tuple being added or removed.
pub type Hook = Box<dyn Fn(Tuple) -> BoxFuture<'static, SpaceResult<()>> + Send + Sync>;

enum WaiterMode {
    Read,
    Take,
}

struct Waiter {
    pattern: Pattern,
    mode: WaiterMode,
    tx: oneshot::Sender<SpaceResult<Tuple>>,
}

/// One coordination domain: the authoritative holder of tuples, validators,
/// hooks, roles, and pending blocking searches.
pub struct Space {
    name: String,
    store: Arc<dyn TupleStore>,
    validators: RwLock<Vec<Validator>>,
    will_add: RwLock<Vec<Hook>>,
    did_add: RwLock<Vec<Hook>>,
    will_remove: RwLock<Vec<Hook>>,
    did_remove: RwLock<Vec<Hook>>,
    roles: RwLock<HashMap<String, Arc<Role>>>,
    waiters: Mutex<Vec<Waiter>>,
}

impl Space {
    /// Create a space backed by an empty in-memory store.
    pub fn new() -> Arc<Self> {
        Space::named("default")
    }

    /// Create a named space backed by an empty in-memory store.
    pub fn named(name: impl Into<String>) -> Arc<Self> {
        // the in-memory store always satisfies the contract
        match Space::with_store(name, Arc::new(MemoryStore::new())) {
            Ok(space) => space,
            Err(_) => unreachable!("in-memory store declares insertion ordering"),
        }
    }

    /// Create a named space over the given store.
    ///
    /// ## Errors
    /// `IncompatibleStore` if the store does not declare the insertion-order
    /// capability the blocking protocol and `find`/`find_all` determinism
    /// depend on.
    pub fn with_store(
        name: impl Into<String>,
        store: Arc<dyn TupleStore>,
    ) -> SpaceResult<Arc<Self>> {
        let caps = store.capabilities();
        if !supports_insertion_order(&caps) {
            return Err(SpaceError::IncompatibleStore(format!(
                "store {:?} does not guarantee insertion ordering",
                caps.get(crate::store::CAP_STORAGE)
            )));
        }

        Ok(Arc::new(Space {
            name: name.into(),
            store,
            validators: RwLock::new(Vec::new()),
            will_add: RwLock::new(Vec::new()),
            did_add: RwLock::new(Vec::new()),
            will_remove: RwLock::new(Vec::new()),
            did_remove: RwLock::new(Vec::new()),
            roles: RwLock::new(HashMap::new()),
            waiters: Mutex::new(Vec::new()),
        }))
    }

    /// The space's name, mostly useful in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    // ------------------------------------------------------------------
    // Registration (append-only for the space's lifetime)
    // ------------------------------------------------------------------

    /// Register a validator. Every registered validator must accept a tuple
    /// for it to be admitted.
    pub async fn add_validator<F>(&self, validator: F)
    where
        F: Fn(&Tuple) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validators.write().await.push(Box::new(validator));
    }

    /// Register a hook to run before a tuple is inserted. Failure aborts the
    /// insertion.
    pub async fn on_will_add<F, Fut>(&self, hook: F)
    where
        F: Fn(Tuple) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = SpaceResult<()>> + Send + 'static,
    {
        Self::push_hook(&self.will_add, hook).await;
    }

    /// Register a hook to run after a tuple was inserted. Failure is
    /// surfaced but the tuple stays inserted.
    pub async fn on_did_add<F, Fut>(&self, hook: F)
    where
        F: Fn(Tuple) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = SpaceResult<()>> + Send + 'static,
    {
        Self::push_hook(&self.did_add, hook).await;
    }

    /// Register a hook to run before a tuple is removed. Failure aborts the
    /// removal.
    pub async fn on_will_remove<F, Fut>(&self, hook: F)
    where
        F: Fn(Tuple) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = SpaceResult<()>> + Send + 'static,
    {
        Self::push_hook(&self.will_remove, hook).await;
    }

    /// Register a hook to run after a tuple was removed. Failure is surfaced
    /// but the tuple stays removed.
    pub async fn on_did_remove<F, Fut>(&self, hook: F)
    where
        F: Fn(Tuple) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = SpaceResult<()>> + Send + 'static,
    {
        Self::push_hook(&self.did_remove, hook).await;
    }

    async fn push_hook<F, Fut>(hooks: &RwLock<Vec<Hook>>, hook: F)
    where
        F: Fn(Tuple) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = SpaceResult<()>> + Send + 'static,
    {
        hooks
            .write()
            .await
            .push(Box::new(move |tuple| Box::pin(hook(tuple))));
    }

    /// Register roles that agents of this space may be bound to.
    pub async fn add_roles(&self, roles: Vec<Arc<Role>>) {
        let mut registry = self.roles.write().await;
        for role in roles {
            registry.insert(role.name().to_string(), role);
        }
    }

    /// Create an agent bound to this space.
    ///
    /// With an empty role registry every agent is unrestricted and the
    /// `role` argument is ignored. Once roles are registered, an agent must
    /// name one of them.
    ///
    /// ## Errors
    /// `RoleNotRegistered` if roles are registered and `role` does not name
    /// one of them.
    pub async fn create_agent(self: &Arc<Self>, role: Option<&str>) -> SpaceResult<Agent> {
        let registry = self.roles.read().await;
        if registry.is_empty() {
            return Ok(Agent::new(self.clone(), None));
        }

        let name = role.ok_or_else(|| {
            SpaceError::RoleNotRegistered("a role is required on this space".to_string())
        })?;
        let role = registry
            .get(name)
            .cloned()
            .ok_or_else(|| SpaceError::RoleNotRegistered(name.to_string()))?;
        Ok(Agent::new(self.clone(), Some(role)))
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Admit a tuple into the space.
    ///
    /// Order: validators, will-add hooks, store insertion, did-add hooks,
    /// waiter notification. A validator rejection or will-add failure means
    /// the tuple was never inserted and nothing after it ran. A did-add
    /// failure is returned to the caller while the tuple stays inserted;
    /// pending waiters are not notified in that case (they still observe the
    /// tuple through their initial search).
    pub async fn add(&self, tuple: Tuple) -> SpaceResult<Tuple> {
        self.run_validators(&tuple).await?;
        Self::run_hooks(&self.will_add, &tuple).await?;

        let stored = self.store.add(tuple).await?;
        debug!(space = %self.name, id = %stored.id(), "tuple added");

        if let Err(err) = Self::run_hooks(&self.did_add, &stored).await {
            warn!(space = %self.name, error = %err, "did-add hook failed after insertion");
            return Err(err);
        }

        self.notify_waiters(&stored).await;
        Ok(stored)
    }

    /// Withdraw a tuple from the space, identified by instance.
    ///
    /// Order: presence check (the double-remove guard), will-remove hooks,
    /// store removal, did-remove hooks. A did-remove failure is returned to
    /// the caller while the tuple stays removed.
    ///
    /// ## Errors
    /// `NotFound` if the instance is not (or no longer) present.
    pub async fn remove(&self, tuple: Tuple) -> SpaceResult<Tuple> {
        if !self.store.contains(&tuple).await? {
            return Err(SpaceError::NotFound);
        }

        Self::run_hooks(&self.will_remove, &tuple).await?;
        let removed = self.store.remove(&tuple).await?;
        debug!(space = %self.name, id = %removed.id(), "tuple removed");

        if let Err(err) = Self::run_hooks(&self.did_remove, &removed).await {
            warn!(space = %self.name, error = %err, "did-remove hook failed after removal");
            return Err(err);
        }

        Ok(removed)
    }

    async fn run_validators(&self, tuple: &Tuple) -> SpaceResult<()> {
        let validators = self.validators.read().await;
        for validator in validators.iter() {
            validator(tuple).map_err(SpaceError::Validation)?;
        }
        Ok(())
    }

    async fn run_hooks(hooks: &RwLock<Vec<Hook>>, tuple: &Tuple) -> SpaceResult<()> {
        let hooks = hooks.read().await;
        for hook in hooks.iter() {
            hook(tuple.clone()).await?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// First tuple matching the pattern, or `None`. Never blocks.
    pub async fn search_now(&self, pattern: &Pattern) -> SpaceResult<Option<Tuple>> {
        self.store.find(pattern).await
    }

    /// Snapshot of all tuples matching the pattern. Never blocks.
    pub async fn search_all_now(&self, pattern: &Pattern) -> SpaceResult<Vec<Tuple>> {
        self.store.find_all(pattern).await
    }

    /// Snapshot of every tuple currently in the space.
    pub async fn snapshot(&self) -> SpaceResult<Vec<Tuple>> {
        self.store.all().await
    }

    /// Number of tuples matching the pattern.
    pub async fn count(&self, pattern: &Pattern) -> SpaceResult<usize> {
        self.store.count(pattern).await
    }

    /// Resolve with a matching tuple, suspending until one is added if none
    /// is present. The tuple is not removed.
    pub async fn search_until_found(&self, pattern: Pattern) -> SpaceResult<Tuple> {
        let rx = {
            // the waiter lock closes the gap between a miss and registration:
            // adds notify under the same lock, so no tuple can slip between
            let mut waiters = self.waiters.lock().await;
            if let Some(tuple) = self.store.find(&pattern).await? {
                return Ok(tuple);
            }
            let (tx, rx) = oneshot::channel();
            debug!(space = %self.name, "registering read waiter");
            waiters.push(Waiter {
                pattern,
                mode: WaiterMode::Read,
                tx,
            });
            rx
        };

        rx.await
            .map_err(|_| SpaceError::Backend("waiter completion channel closed".to_string()))?
    }

    /// Resolve with a matching tuple and remove it, suspending until one is
    /// added if none is present.
    pub async fn take_until_found(&self, pattern: Pattern) -> SpaceResult<Tuple> {
        loop {
            let rx = {
                let mut waiters = self.waiters.lock().await;
                match self.store.find(&pattern).await? {
                    Some(tuple) => match self.remove(tuple).await {
                        Ok(tuple) => return Ok(tuple),
                        // another consumer won the race; search again
                        Err(SpaceError::NotFound) => continue,
                        Err(err) => return Err(err),
                    },
                    None => {
                        let (tx, rx) = oneshot::channel();
                        debug!(space = %self.name, "registering take waiter");
                        waiters.push(Waiter {
                            pattern: pattern.clone(),
                            mode: WaiterMode::Take,
                            tx,
                        });
                        rx
                    }
                }
            };

            return rx.await.map_err(|_| {
                SpaceError::Backend("waiter completion channel closed".to_string())
            })?;
        }
    }

    /// Offer a newly added tuple to pending waiters, in registration order.
    /// Read waiters are non-consuming, so every matching one is resolved
    /// while the tuple remains present. The first matching take waiter
    /// consumes it, with removal happening here, under the waiter lock,
    /// before delivery; the scan ends once the tuple is gone.
    async fn notify_waiters(&self, tuple: &Tuple) {
        let mut waiters = self.waiters.lock().await;
        waiters.retain(|w| !w.tx.is_closed());

        let mut index = 0;
        while index < waiters.len() {
            if !waiters[index].pattern.matches(tuple) {
                index += 1;
                continue;
            }

            match waiters[index].mode {
                WaiterMode::Read => {
                    let waiter = waiters.remove(index);
                    debug!(space = %self.name, id = %tuple.id(), "resolving read waiter");
                    let _ = waiter.tx.send(Ok(tuple.clone()));
                    // the tuple is still present; keep offering it
                }
                WaiterMode::Take => match self.remove(tuple.clone()).await {
                    Ok(removed) => {
                        let waiter = waiters.remove(index);
                        debug!(space = %self.name, id = %removed.id(), "resolving take waiter");
                        if waiter.tx.send(Ok(removed)).is_err() {
                            warn!(space = %self.name, "take waiter receiver dropped; tuple discarded");
                        }
                        return;
                    }
                    Err(SpaceError::NotFound) => {
                        // a non-blocking consumer got the tuple first; the
                        // waiter keeps waiting for the next one
                        debug!(space = %self.name, id = %tuple.id(), "tuple gone before waiter removal");
                        return;
                    }
                    Err(err) => {
                        let waiter = waiters.remove(index);
                        let _ = waiter.tx.send(Err(err));
                        return;
                    }
                },
            }
        }
    }

    #[cfg(test)]
    pub(crate) async fn waiter_count(&self) -> usize {
        self.waiters.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pattern, tuple};
    use std::sync::Mutex as StdMutex;

    fn event_log() -> Arc<StdMutex<Vec<String>>> {
        Arc::new(StdMutex::new(Vec::new()))
    }

    async fn log_hook(
        space: &Space,
        log: &Arc<StdMutex<Vec<String>>>,
        stage: &'static str,
    ) {
        let log = log.clone();
        let hook = move |_tuple: Tuple| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(stage.to_string());
                Ok(())
            }
        };
        match stage {
            "will-add" => space.on_will_add(hook).await,
            "did-add" => space.on_did_add(hook).await,
            "will-remove" => space.on_will_remove(hook).await,
            "did-remove" => space.on_did_remove(hook).await,
            other => panic!("unknown stage {other}"),
        }
    }

    #[tokio::test]
    async fn add_runs_validators_before_hooks() {
        let space = Space::new();
        let log = event_log();
        log_hook(&space, &log, "will-add").await;

        space
            .add_validator(|tuple: &Tuple| {
                if tuple.arity() == 0 {
                    Err("empty tuple".to_string())
                } else {
                    Ok(())
                }
            })
            .await;

        let result = space.add(Tuple::new(vec![])).await;
        assert!(matches!(result, Err(SpaceError::Validation(_))));
        // rejected before any hook ran, never inserted
        assert!(log.lock().unwrap().is_empty());
        assert!(space.snapshot().await.unwrap().is_empty());

        space.add(tuple![1]).await.unwrap();
        assert_eq!(log.lock().unwrap().as_slice(), ["will-add"]);
    }

    #[tokio::test]
    async fn hooks_run_in_stage_and_registration_order() {
        let space = Space::new();
        let log = event_log();
        log_hook(&space, &log, "will-add").await;
        log_hook(&space, &log, "did-add").await;
        log_hook(&space, &log, "will-remove").await;
        log_hook(&space, &log, "did-remove").await;

        let stored = space.add(tuple![1]).await.unwrap();
        space.remove(stored).await.unwrap();

        assert_eq!(
            log.lock().unwrap().as_slice(),
            ["will-add", "did-add", "will-remove", "did-remove"]
        );
    }

    #[tokio::test]
    async fn will_add_failure_prevents_insertion() {
        let space = Space::new();
        space
            .on_will_add(|_tuple| async { Err(SpaceError::Hook("refused".to_string())) })
            .await;

        let result = space.add(tuple![1]).await;
        assert!(matches!(result, Err(SpaceError::Hook(_))));
        assert!(space.snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn did_add_failure_is_surfaced_but_tuple_stays() {
        let space = Space::new();
        space
            .on_did_add(|_tuple| async { Err(SpaceError::Hook("late failure".to_string())) })
            .await;

        let result = space.add(tuple![1]).await;
        assert!(matches!(result, Err(SpaceError::Hook(_))));
        // no rollback: the insertion already succeeded
        assert_eq!(space.snapshot().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_of_absent_tuple_is_not_found() {
        let space = Space::new();
        let never_added = tuple![1];

        let result = space.remove(never_added).await;
        assert!(matches!(result, Err(SpaceError::NotFound)));

        let stored = space.add(tuple![2]).await.unwrap();
        space.remove(stored.clone()).await.unwrap();
        let result = space.remove(stored).await;
        assert!(matches!(result, Err(SpaceError::NotFound)));
    }

    #[tokio::test]
    async fn will_remove_failure_keeps_tuple() {
        let space = Space::new();
        space
            .on_will_remove(|_tuple| async { Err(SpaceError::Hook("keep it".to_string())) })
            .await;

        let stored = space.add(tuple![1]).await.unwrap();
        let result = space.remove(stored).await;
        assert!(matches!(result, Err(SpaceError::Hook(_))));
        assert_eq!(space.snapshot().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn search_until_found_resolves_immediately_when_present() {
        let space = Space::new();
        space.add(tuple![1, "here"]).await.unwrap();

        let found = space.search_until_found(pattern![1, _]).await.unwrap();
        assert_eq!(found, tuple![1, "here"]);
        assert_eq!(space.waiter_count().await, 0);
    }

    #[tokio::test]
    async fn first_registered_take_waiter_wins() {
        let space = Space::new();

        let s1 = space.clone();
        let first = tokio::spawn(async move { s1.take_until_found(pattern![_, _]).await });
        // deterministic registration order
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        let s2 = space.clone();
        let second = tokio::spawn(async move { s2.take_until_found(pattern![_, _]).await });
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert_eq!(space.waiter_count().await, 2);

        space.add(tuple![1, "only"]).await.unwrap();

        let resolved = first.await.unwrap().unwrap();
        assert_eq!(resolved, tuple![1, "only"]);
        // the second waiter is still registered, waiting for the next add
        assert_eq!(space.waiter_count().await, 1);
        assert!(!second.is_finished());
        second.abort();
    }

    #[tokio::test]
    async fn all_matching_read_waiters_resolve_on_one_add() {
        let space = Space::new();

        let s1 = space.clone();
        let first = tokio::spawn(async move { s1.search_until_found(pattern![_, _]).await });
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        let s2 = space.clone();
        let second = tokio::spawn(async move { s2.search_until_found(pattern![1, _]).await });
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert_eq!(space.waiter_count().await, 2);

        space.add(tuple![1, "shared"]).await.unwrap();

        // non-consuming: both readers see the same resident tuple
        assert_eq!(first.await.unwrap().unwrap(), tuple![1, "shared"]);
        assert_eq!(second.await.unwrap().unwrap(), tuple![1, "shared"]);
        assert_eq!(space.waiter_count().await, 0);
        assert_eq!(space.snapshot().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn read_waiter_ahead_of_take_waiter_does_not_starve_it() {
        let space = Space::new();

        let reader = space.clone();
        let read = tokio::spawn(async move { reader.search_until_found(pattern![_, _]).await });
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        let taker = space.clone();
        let take = tokio::spawn(async move { taker.take_until_found(pattern![_, _]).await });
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert_eq!(space.waiter_count().await, 2);

        space.add(tuple![1, "handoff"]).await.unwrap();

        // the read resolves without consuming, so the same add satisfies
        // the take behind it
        assert_eq!(read.await.unwrap().unwrap(), tuple![1, "handoff"]);
        assert_eq!(take.await.unwrap().unwrap(), tuple![1, "handoff"]);
        assert!(space.snapshot().await.unwrap().is_empty());
        assert_eq!(space.waiter_count().await, 0);
    }

    #[tokio::test]
    async fn dropped_waiters_are_pruned_on_add() {
        let space = Space::new();

        let s1 = space.clone();
        let abandoned = tokio::spawn(async move { s1.search_until_found(pattern![99]).await });
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert_eq!(space.waiter_count().await, 1);

        abandoned.abort();
        let _ = abandoned.await;

        space.add(tuple![1]).await.unwrap();
        assert_eq!(space.waiter_count().await, 0);
    }

    #[tokio::test]
    async fn create_agent_requires_registered_role_once_roles_exist() {
        use crate::operation::OperationKind;
        use crate::permission::Permission;

        let space = Space::new();
        // empty registry: unrestricted agents, role argument ignored
        assert!(space.create_agent(None).await.is_ok());
        assert!(space.create_agent(Some("anything")).await.is_ok());

        let role = Arc::new(Role::new(
            "producer",
            vec![Permission::new(OperationKind::Write, pattern![_, _])],
        ));
        space.add_roles(vec![role]).await;

        assert!(space.create_agent(Some("producer")).await.is_ok());
        assert!(matches!(
            space.create_agent(Some("consumer")).await,
            Err(SpaceError::RoleNotRegistered(_))
        ));
        assert!(matches!(
            space.create_agent(None).await,
            Err(SpaceError::RoleNotRegistered(_))
        ));
    }

    #[tokio::test]
    async fn incompatible_store_is_rejected_at_construction() {
        use async_trait::async_trait;

        struct UnorderedStore;

        #[async_trait]
        impl TupleStore for UnorderedStore {
            fn capabilities(&self) -> HashMap<String, String> {
                HashMap::from([(crate::store::CAP_STORAGE.to_string(), "bag".to_string())])
            }
            async fn add(&self, tuple: Tuple) -> SpaceResult<Tuple> {
                Ok(tuple)
            }
            async fn remove(&self, _tuple: &Tuple) -> SpaceResult<Tuple> {
                Err(SpaceError::NotFound)
            }
            async fn contains(&self, _tuple: &Tuple) -> SpaceResult<bool> {
                Ok(false)
            }
            async fn find(&self, _pattern: &Pattern) -> SpaceResult<Option<Tuple>> {
                Ok(None)
            }
            async fn find_all(&self, _pattern: &Pattern) -> SpaceResult<Vec<Tuple>> {
                Ok(vec![])
            }
            async fn all(&self) -> SpaceResult<Vec<Tuple>> {
                Ok(vec![])
            }
            async fn clear(&self) -> SpaceResult<()> {
                Ok(())
            }
        }

        let result = Space::with_store("bad", Arc::new(UnorderedStore));
        assert!(matches!(result, Err(SpaceError::IncompatibleStore(_))));
    }
}
