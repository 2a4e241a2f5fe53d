//! Entity service contracts and the validated composition.
//!
//! # Responsibility
//! - Define the uniform CRUD capability every entity service exposes.
//! - Provide the write-gating composition over injected persistence and
//!   validation capabilities.
//!
//! # See also
//! - docs/architecture/service-gate.md

pub mod entity_service;
pub mod validated_service;
