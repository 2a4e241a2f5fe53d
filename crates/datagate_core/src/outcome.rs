//! Operation outcome wrapper shared by every service contract.
//!
//! # Responsibility
//! - Represent one operation result as success-with-value or
//!   failure-with-errors.
//! - Keep rejection reasons as an ordered message list callers can show
//!   verbatim.
//!
//! # Invariants
//! - Exactly one of success or failure holds at a time.
//! - A failure carries at least one error message.
//! - Message order is preserved from producer to consumer.
//!
//! # See also
//! - docs/architecture/outcome.md

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned when building an [`ErrorList`] from an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyErrorList;

impl Display for EmptyErrorList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "an error list must carry at least one message")
    }
}

impl Error for EmptyErrorList {}

/// Ordered, non-empty collection of human-readable error messages.
///
/// Non-emptiness is a construction-time property: [`ErrorList::new`]
/// requires a first message and conversion from a `Vec<String>` is fallible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ErrorList {
    messages: Vec<String>,
}

impl ErrorList {
    /// Creates a list holding one initial message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// Appends one message, keeping insertion order.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Returns all messages in insertion order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Iterates messages in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.messages.iter()
    }
}

impl TryFrom<Vec<String>> for ErrorList {
    type Error = EmptyErrorList;

    fn try_from(messages: Vec<String>) -> Result<Self, Self::Error> {
        if messages.is_empty() {
            return Err(EmptyErrorList);
        }
        Ok(Self { messages })
    }
}

impl From<ErrorList> for Vec<String> {
    fn from(value: ErrorList) -> Self {
        value.messages
    }
}

impl Display for ErrorList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages.join("; "))
    }
}

/// Result of one service operation.
///
/// Failures are ordinary values: service and store contracts never panic or
/// raise across the call boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    /// Operation completed with a payload.
    Success(T),
    /// Operation was rejected or failed with at least one error.
    Failure(ErrorList),
}

impl<T> Outcome<T> {
    /// Builds a success outcome from a payload.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Builds a failure outcome from an existing error list.
    pub fn failure(errors: ErrorList) -> Self {
        Self::Failure(errors)
    }

    /// Builds a failure outcome from a single message.
    pub fn fail_with(message: impl Into<String>) -> Self {
        Self::Failure(ErrorList::new(message))
    }

    /// Returns whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success payload, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome and returns the success payload, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the aggregated errors, if any.
    pub fn errors(&self) -> Option<&ErrorList> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Consumes the outcome and returns the aggregated errors, if any.
    pub fn into_errors(self) -> Option<ErrorList> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Maps the success payload, keeping failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorList, Outcome};

    #[test]
    fn error_list_preserves_insertion_order() {
        let mut errors = ErrorList::new("first");
        errors.push("second");
        errors.push("third");

        assert_eq!(errors.messages(), ["first", "second", "third"]);
    }

    #[test]
    fn error_list_rejects_empty_vec() {
        let result = ErrorList::try_from(Vec::<String>::new());
        assert!(result.is_err());
    }

    #[test]
    fn error_list_accepts_non_empty_vec() {
        let errors =
            ErrorList::try_from(vec!["a".to_string(), "b".to_string()]).expect("non-empty input");
        assert_eq!(errors.messages(), ["a", "b"]);
    }

    #[test]
    fn outcome_discriminant_accessors_are_exclusive() {
        let ok: Outcome<u32> = Outcome::success(7);
        assert!(ok.is_success());
        assert!(!ok.is_failure());
        assert_eq!(ok.value(), Some(&7));
        assert!(ok.errors().is_none());

        let failed: Outcome<u32> = Outcome::fail_with("rejected");
        assert!(failed.is_failure());
        assert!(failed.value().is_none());
        assert_eq!(
            failed.errors().expect("failure carries errors").messages(),
            ["rejected"]
        );
    }

    #[test]
    fn map_transforms_payload_and_keeps_errors() {
        let doubled = Outcome::success(21).map(|value| value * 2);
        assert_eq!(doubled.into_value(), Some(42));

        let failed: Outcome<u32> = Outcome::fail_with("no");
        let mapped = failed.map(|value| value * 2);
        assert_eq!(
            mapped.into_errors().expect("failure survives map").messages(),
            ["no"]
        );
    }

    #[test]
    fn outcome_serializes_with_stable_tags() {
        let ok: Outcome<u32> = Outcome::success(1);
        let json = serde_json::to_string(&ok).expect("success serializes");
        assert_eq!(json, r#"{"success":1}"#);

        let failed: Outcome<u32> = Outcome::fail_with("bad input");
        let json = serde_json::to_string(&failed).expect("failure serializes");
        assert_eq!(json, r#"{"failure":["bad input"]}"#);
    }
}
