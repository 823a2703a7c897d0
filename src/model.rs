//! Core vocabulary model types.
//!
//! These types represent an RDF vocabulary as typed Rust data. The tables
//! themselves are `static` string slices declared in [`crate::vocab`]; all
//! consumers hold `&'static` borrows, so every operation here is a pure
//! computation over immutable data and is safe to share across threads.

use std::fmt;

use crate::error::InvalidPropertyError;

/// An RDF vocabulary: a namespace URI, its conventional short prefix, and
/// the fixed, ordered sets of class and object-property local names the
/// ontology defines.
///
/// Instances are declared as `static` data, one per vocabulary module (see
/// [`crate::vocab::ore`]), and handed out as `&'static Vocabulary`.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// The prefix used when abbreviating terms (e.g., `"ore"`).
    pub(crate) prefix: &'static str,
    /// The full namespace URI every term is rooted under.
    pub(crate) namespace: &'static str,
    /// Local names of the classes defined by the ontology, in declaration order.
    pub(crate) classes: &'static [&'static str],
    /// Local names of the object properties, in declaration order.
    pub(crate) properties: &'static [&'static str],
}

impl Vocabulary {
    /// Returns the namespace URI shared by every term of this vocabulary.
    #[must_use]
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Returns the conventional short prefix for the namespace.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Returns the recognized class local names, in declaration order.
    #[must_use]
    pub fn class_names(&self) -> &'static [&'static str] {
        self.classes
    }

    /// Returns the recognized object-property local names, in declaration order.
    #[must_use]
    pub fn property_names(&self) -> &'static [&'static str] {
        self.properties
    }

    /// Returns `true` if `local_name` is one of [`class_names`](Self::class_names).
    #[must_use]
    pub fn has_class(&self, local_name: &str) -> bool {
        self.classes.contains(&local_name)
    }

    /// Returns `true` if `local_name` is one of [`property_names`](Self::property_names).
    #[must_use]
    pub fn has_property(&self, local_name: &str) -> bool {
        self.properties.contains(&local_name)
    }

    /// Returns a [`Resource`] whose URI is `namespace() + local_name`.
    ///
    /// No membership check is performed against [`class_names`](Self::class_names):
    /// any local name is accepted. Callers wanting a checked construction can
    /// probe [`has_class`](Self::has_class) first.
    #[must_use]
    pub fn resource(&self, local_name: &str) -> Resource {
        Resource {
            uri: format!("{}{local_name}", self.namespace),
        }
    }

    /// Returns a [`Predicate`] for `local_name` without checking membership
    /// in [`property_names`](Self::property_names).
    ///
    /// This is the low-level builder; [`predicate`](Self::predicate) is the
    /// validating factory meant for untrusted input.
    #[must_use]
    pub fn property(&self, local_name: &str) -> Predicate {
        Predicate {
            prefix: self.prefix,
            namespace: self.namespace,
            local_name: local_name.to_owned(),
            uri: format!("{}{local_name}", self.namespace),
        }
    }

    /// Returns a validated [`Predicate`] for the given object-property name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPropertyError`] when `property` is not one of
    /// [`property_names`](Self::property_names). The error message enumerates
    /// the full list of valid property names. An unrecognized name is a caller
    /// programming error, never a transient condition; the error is not
    /// retryable.
    pub fn predicate(&self, property: &str) -> Result<Predicate, InvalidPropertyError> {
        if !self.has_property(property) {
            return Err(InvalidPropertyError::new(
                self.prefix,
                property,
                self.properties,
            ));
        }
        Ok(self.property(property))
    }
}

/// A handle for an RDF resource: a full URI formed by concatenating a
/// vocabulary namespace and a local name.
///
/// Construction is deliberately permissive (no membership check against the
/// vocabulary's class table); see [`Vocabulary::resource`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Resource {
    uri: String,
}

impl Resource {
    /// Returns the full URI of this resource.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

/// A fully-qualified predicate descriptor, ready to be handed to RDF
/// statement-building code.
///
/// Every `Predicate` produced by [`Vocabulary::predicate`] has its
/// `local_name` drawn from the vocabulary's property table, and its `uri`
/// is always `namespace + local_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Predicate {
    prefix: &'static str,
    local_name: String,
    namespace: &'static str,
    uri: String,
}

impl Predicate {
    /// Returns the vocabulary prefix (e.g., `"ore"`).
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Returns the property's local name (e.g., `"aggregates"`).
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the vocabulary namespace URI.
    #[must_use]
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Returns the full URI, `namespace + local_name`.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(feature = "sophia")]
mod sophia_interop {
    //! Conversions into `sophia_api` terms, for callers asserting triples
    //! with the sophia graph stack.

    use sophia_api::term::IriRef;

    use super::{Predicate, Resource};

    impl Resource {
        /// Borrows this resource's URI as a sophia [`IriRef`].
        ///
        /// The URI is not re-validated: resources built from a local name
        /// containing characters forbidden in IRIs carry that malformation
        /// through (permissive construction, see [`super::Vocabulary::resource`]).
        #[must_use]
        pub fn to_iriref(&self) -> IriRef<&str> {
            IriRef::new_unchecked(&self.uri)
        }
    }

    impl Predicate {
        /// Borrows this predicate's URI as a sophia [`IriRef`].
        ///
        /// Predicates from [`super::Vocabulary::predicate`] are built from the
        /// fixed property table, whose entries are all well-formed IRI suffixes.
        #[must_use]
        pub fn to_iriref(&self) -> IriRef<&str> {
            IriRef::new_unchecked(&self.uri)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    static TEST_VOCAB: Vocabulary = Vocabulary {
        prefix: "ex",
        namespace: "http://example.org/terms/",
        classes: &["Thing"],
        properties: &["relatesTo", "derivesFrom"],
    };

    #[test]
    fn resource_concatenates_namespace_and_local_name() {
        let r = TEST_VOCAB.resource("Thing");
        assert_eq!(r.uri(), "http://example.org/terms/Thing");
    }

    #[test]
    fn resource_is_permissive() {
        // No membership check: unknown local names still build a handle.
        let r = TEST_VOCAB.resource("NotAThing");
        assert_eq!(r.uri(), "http://example.org/terms/NotAThing");
    }

    #[test]
    fn property_builder_fills_all_fields() {
        let p = TEST_VOCAB.property("anything");
        assert_eq!(p.prefix(), "ex");
        assert_eq!(p.local_name(), "anything");
        assert_eq!(p.namespace(), "http://example.org/terms/");
        assert_eq!(p.uri(), "http://example.org/terms/anything");
    }

    #[test]
    fn predicate_accepts_every_table_entry() {
        for name in TEST_VOCAB.property_names() {
            let p = TEST_VOCAB
                .predicate(name)
                .unwrap_or_else(|e| panic!("{name} rejected: {e}"));
            assert_eq!(p.local_name(), *name);
            assert_eq!(p.uri(), format!("{}{name}", TEST_VOCAB.namespace()));
        }
    }

    #[test]
    fn predicate_rejects_unknown_names() {
        let err = TEST_VOCAB.predicate("relatesto").unwrap_err();
        assert_eq!(err.property(), "relatesto");
        assert_eq!(err.valid_properties(), TEST_VOCAB.property_names());
    }

    #[test]
    fn membership_probes() {
        assert!(TEST_VOCAB.has_class("Thing"));
        assert!(!TEST_VOCAB.has_class("relatesTo"));
        assert!(TEST_VOCAB.has_property("derivesFrom"));
        assert!(!TEST_VOCAB.has_property("Thing"));
    }

    #[test]
    fn display_prints_the_uri() {
        assert_eq!(
            TEST_VOCAB.resource("Thing").to_string(),
            "http://example.org/terms/Thing"
        );
        assert_eq!(
            TEST_VOCAB.property("relatesTo").to_string(),
            "http://example.org/terms/relatesTo"
        );
    }

    #[cfg(feature = "sophia")]
    #[test]
    fn iriref_borrows_the_uri() {
        let p = TEST_VOCAB.property("relatesTo");
        assert_eq!(p.to_iriref().as_str(), "http://example.org/terms/relatesTo");
        let r = TEST_VOCAB.resource("Thing");
        assert_eq!(r.to_iriref().as_str(), "http://example.org/terms/Thing");
    }
}
