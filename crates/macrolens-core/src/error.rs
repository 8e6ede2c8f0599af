//! # Errors
//!
//! Fatal catalog problems. These are raised at load time only, so the
//! assessors themselves never fail.
//!
//! Join problems between conditions and crises are NOT errors. They are
//! reported as [`Diagnostic`](crate::Diagnostic) values next to the result.

use thiserror::Error;

/// Result alias for catalog loading and snapshot decoding.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while loading, validating or decoding a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two crisis events share the same key.
    #[error("duplicate crisis id '{0}'")]
    DuplicateCrisisId(String),

    /// Severity must lie in 1..=5.
    #[error("crisis '{id}' has severity {severity}, expected 1..=5")]
    SeverityOutOfRange { id: String, severity: u8 },

    /// Threshold triple is not ordered in the indicator's danger direction.
    #[error(
        "indicator '{indicator}' has non-monotonic thresholds \
         (average {average}, warning {warning}, danger {danger}, inverted {inverted})"
    )]
    NonMonotonicThresholds {
        indicator: String,
        average: f64,
        warning: f64,
        danger: f64,
        inverted: bool,
    },

    /// A numeric field that must be finite is NaN or infinite.
    #[error("{context}: field '{field}' is not a finite number")]
    NonFiniteValue { context: String, field: &'static str },

    /// Engine weights cannot produce a meaningful score.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    /// Snapshot header is missing, has the wrong magic, or an unknown version.
    #[error("invalid snapshot header: {0}")]
    SnapshotHeader(String),

    /// Snapshot payload failed to encode or decode.
    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] postcard::Error),
}
