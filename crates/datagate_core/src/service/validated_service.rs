//! Validated CRUD composition: validation gate in front of persistence.
//!
//! # Responsibility
//! - Run the implementer's validator before every create and update.
//! - Delegate persistence to the injected store capability.
//!
//! # Invariants
//! - Validation is attempted first, unconditionally, for every create and
//!   update call; there is no bypass.
//! - A rejected write never reaches the store.
//! - Rejections carry the validator's error list verbatim: same entries,
//!   same order, nothing reformatted.
//! - `delete`, `get_all` and `find` are not gated and pass straight
//!   through to the store.
//! - Gate log events are metadata-only: error counts, never message bodies.
//!
//! # See also
//! - docs/architecture/service-gate.md

use crate::outcome::Outcome;
use crate::service::entity_service::{EntityFilter, EntityService};
use async_trait::async_trait;
use log::debug;

/// Validation capability invoked ahead of every write.
///
/// The concrete rule set (field checks, uniqueness, cross-entity checks) is
/// entirely implementer-defined. Rejection is signalled by returning a
/// failure outcome; the `bool` payload of a success is informational and is
/// not consulted by the gate.
#[async_trait]
pub trait EntityValidator<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Checks one entity against the implementer's business rules.
    async fn validate(&self, entity: &T) -> Outcome<bool>;
}

/// Persistence capability the validated service delegates to.
///
/// `insert` and `apply_update` are only ever invoked after validation
/// succeeds. Their internals, and the read/delete paths, wrap whatever
/// persistence mechanism the implementer chooses.
#[async_trait]
pub trait EntityStore<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Writes a new entity. Invoked only after validation succeeds.
    async fn insert(&self, entity: &T) -> Outcome<T>;

    /// Writes changes to an existing entity. Invoked only after validation
    /// succeeds.
    async fn apply_update(&self, entity: &T) -> Outcome<T>;

    /// Removes an entity and returns the removed entity on success.
    async fn remove(&self, entity: &T) -> Outcome<T>;

    /// Returns all stored entities.
    async fn fetch_all(&self) -> Outcome<Vec<T>>;

    /// Returns stored entities matching `predicate`.
    async fn filter(&self, predicate: EntityFilter<'_, T>) -> Outcome<Vec<T>>;
}

/// Entity service that gates writes behind an injected validator.
///
/// Replaces subclass overriding with explicit composition: the store and
/// the validator are two function-shaped collaborators supplied at
/// construction.
pub struct ValidatedEntityService<S, V> {
    store: S,
    validator: V,
}

impl<S, V> ValidatedEntityService<S, V> {
    /// Creates a service from a persistence capability and a validation
    /// capability.
    pub fn new(store: S, validator: V) -> Self {
        Self { store, validator }
    }
}

#[async_trait]
impl<T, S, V> EntityService<T> for ValidatedEntityService<S, V>
where
    T: Send + Sync,
    S: EntityStore<T>,
    V: EntityValidator<T>,
{
    async fn create(&self, entity: &T) -> Outcome<T> {
        match self.validator.validate(entity).await {
            Outcome::Success(_) => self.store.insert(entity).await,
            Outcome::Failure(errors) => {
                debug!(
                    "event=create_rejected module=service status=rejected errors={}",
                    errors.messages().len()
                );
                Outcome::Failure(errors)
            }
        }
    }

    async fn update(&self, entity: &T) -> Outcome<T> {
        match self.validator.validate(entity).await {
            Outcome::Success(_) => self.store.apply_update(entity).await,
            Outcome::Failure(errors) => {
                debug!(
                    "event=update_rejected module=service status=rejected errors={}",
                    errors.messages().len()
                );
                Outcome::Failure(errors)
            }
        }
    }

    async fn delete(&self, entity: &T) -> Outcome<T> {
        self.store.remove(entity).await
    }

    async fn get_all(&self) -> Outcome<Vec<T>> {
        self.store.fetch_all().await
    }

    async fn find(&self, predicate: EntityFilter<'_, T>) -> Outcome<Vec<T>> {
        self.store.filter(predicate).await
    }
}
