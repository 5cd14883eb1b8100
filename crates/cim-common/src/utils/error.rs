//! Crate-wide error type.

use thiserror::Error;

/// Result alias used throughout the toolkit.
pub type Result<T> = std::result::Result<T, Error>;

/// Error conditions raised by the stores, the profile registry, and the
/// CIM/XML reader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was not well-formed XML, was missing the version PI, had
    /// the wrong root element, or contained an unterminated section.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A query referenced a profile version IRI that was never registered.
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    /// A profile (or header profile) collides with one already registered.
    #[error("duplicate registration: {0}")]
    DuplicateRegistration(String),

    /// A literal value did not satisfy its declared datatype during
    /// validation. Only raised when validation is enabled.
    #[error("illegal datatype: {0}")]
    IllegalDatatype(String),

    /// An iterator observed a mutation to its source graph after creation.
    #[error("concurrent modification detected")]
    ConcurrentModification,

    /// An operation was called with arguments that are structurally
    /// invalid for it, e.g. difference-model accessors on a full model.
    #[error("illegal argument: {0}")]
    IllegalArgument(String),
}
