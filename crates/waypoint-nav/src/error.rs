//! Error types for building the navigation chrome from configuration.
//!
//! Runtime navigation never fails: missing elements and unresolvable scroll
//! positions degrade to no-ops. Only configuration can be rejected.

use thiserror::Error;

/// Result type for registry construction.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur while validating section and layer descriptors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// No sections were configured.
    #[error("section registry is empty")]
    Empty,

    /// Two sections share an id.
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),

    /// A section id is blank.
    #[error("section at position {0} has an empty id")]
    BlankId(usize),

    /// A layer id is not one of pace, gaps, reps, action.
    #[error("unknown layer id: {0}")]
    UnknownLayer(String),

    /// The same layer was configured twice.
    #[error("duplicate layer id: {0}")]
    DuplicateLayer(String),

    /// A layer from the fixed set has no descriptor.
    #[error("missing layer descriptor: {0}")]
    MissingLayer(String),
}
