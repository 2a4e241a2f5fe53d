//! Core contracts for validation-gated entity services.
//! This crate is the single source of truth for the write-gating contract.

pub mod logging;
pub mod outcome;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use outcome::{EmptyErrorList, ErrorList, Outcome};
pub use service::entity_service::{EntityFilter, EntityService};
pub use service::validated_service::{EntityStore, EntityValidator, ValidatedEntityService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
