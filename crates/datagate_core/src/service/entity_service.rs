//! Base CRUD capability contract.
//!
//! # Responsibility
//! - Define the uniform operation set every entity service exposes.
//! - Keep the contract storage-agnostic and entity-agnostic.
//!
//! # Invariants
//! - Failures are returned as [`Outcome`] values; no panic crosses the
//!   service boundary.
//! - Entities are borrowed for the duration of a call and never retained.
//!
//! # See also
//! - docs/architecture/service-gate.md

use crate::outcome::Outcome;
use async_trait::async_trait;

/// Caller-supplied predicate used by [`EntityService::find`].
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Evaluation is synchronous and side-effect-free by convention; this is
/// not enforced.
pub type EntityFilter<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// Uniform CRUD contract over one entity type.
///
/// Implementations place no constraint on the entity shape: the contract
/// inspects no attributes and prescribes no error taxonomy. Every concrete
/// failure becomes a failure outcome.
#[async_trait]
pub trait EntityService<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Persists a new entity.
    ///
    /// On success returns the persisted entity, possibly with generated
    /// identity fields populated by the implementer.
    async fn create(&self, entity: &T) -> Outcome<T>;

    /// Persists changes to an existing entity.
    ///
    /// Whether a missing entity is a failure is implementer-defined.
    async fn update(&self, entity: &T) -> Outcome<T>;

    /// Removes an entity and returns the removed entity on success.
    async fn delete(&self, entity: &T) -> Outcome<T>;

    /// Returns all entities. Ordering is unspecified.
    async fn get_all(&self) -> Outcome<Vec<T>>;

    /// Returns entities for which `predicate` evaluates `true`.
    ///
    /// The predicate is applied to every entity with no short-circuiting;
    /// evaluation order follows the backing store's iteration order.
    async fn find(&self, predicate: EntityFilter<'_, T>) -> Outcome<Vec<T>>;
}
