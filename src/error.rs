//! Error types for vocabulary term construction.

use thiserror::Error;

/// The requested local name is not one of the vocabulary's object properties.
///
/// Returned by [`Vocabulary::predicate`](crate::Vocabulary::predicate). The
/// message enumerates every valid property name so the caller can see the
/// full set of alternatives. Not retryable: the input will never become
/// valid without a caller-side change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "'{property}' is not a recognized '{prefix}' property; use one of: {}",
    .valid.join(", ")
)]
pub struct InvalidPropertyError {
    prefix: &'static str,
    property: String,
    valid: &'static [&'static str],
}

impl InvalidPropertyError {
    pub(crate) fn new(
        prefix: &'static str,
        property: &str,
        valid: &'static [&'static str],
    ) -> Self {
        Self {
            prefix,
            property: property.to_owned(),
            valid,
        }
    }

    /// Returns the offending local name as given by the caller.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Returns the full set of valid property names, in table order.
    #[must_use]
    pub fn valid_properties(&self) -> &'static [&'static str] {
        self.valid
    }
}
