//! DataONE ProvONE/ORE vocabulary encoded as typed Rust data.
//!
//! The `dataone-vocabulary` crate provides the ORE (Object Reuse and
//! Exchange) ontology subset used by DataONE's ProvONE tooling as static
//! Rust data structures: the namespace URI, its prefix, the recognized
//! class and object-property names, and factories for building resource
//! handles and validated predicate descriptors to feed into RDF
//! statement-building code.
//!
//! # Entry Point
//!
//! ```
//! let vocab = dataone_vocabulary::vocab::ore::vocabulary();
//! assert_eq!(vocab.namespace(), "http://www.openarchives.org/ore/terms/");
//! assert_eq!(vocab.prefix(), "ore");
//! ```
//!
//! # Predicates
//!
//! Predicate construction validates the property name against the fixed
//! table; the error enumerates every valid alternative:
//!
//! ```
//! use dataone_vocabulary::vocab::ore;
//!
//! let aggregates = ore::vocabulary().predicate("aggregates")?;
//! assert_eq!(
//!     aggregates.uri(),
//!     "http://www.openarchives.org/ore/terms/aggregates",
//! );
//! assert!(ore::vocabulary().predicate("notAProperty").is_err());
//! # Ok::<(), dataone_vocabulary::InvalidPropertyError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;
pub mod vocab;

pub use error::InvalidPropertyError;
pub use model::{Predicate, Resource, Vocabulary};
