//! Error type for partkit.
//!
//! Every variant here is raised before any geometry is produced, so a
//! returned error implies no partial output. Recoverable conditions
//! (no matching face, a stalled assembly) are not errors - they are
//! distinct outcome arms on the functions that can hit them.

use thiserror::Error;

/// Crate-level error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartError {
    /// A step or spacing value was zero or negative.
    #[error("step along {axis} must be positive, got {value}")]
    NonPositiveStep {
        /// Which spacing the value came from ("x", "y", or "stack").
        axis: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The grid radius was negative.
    #[error("grid radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    /// Basis vectors were not orthonormal, or a derived axis degenerated.
    #[error("invalid basis: {0}")]
    InvalidBasis(&'static str),

    /// A base line with coincident endpoints has no offset direction.
    #[error("base line endpoints coincide; no offset direction")]
    DegenerateLine,

    /// The loop assembler was handed no segments at all.
    #[error("cannot assemble a loop from an empty segment set")]
    EmptySegmentBag,

    /// A spacing sequence was empty.
    #[error("spacing sequence must contain at least one step")]
    EmptySteps,

    /// The document partitioning collaborator rejected the request.
    #[error("partitioner failed: {0}")]
    Collaborator(String),
}
