//! Error taxonomy for the analysis core.
//!
//! The core never catches or suppresses failures: every function returns a
//! typed error to its caller, and the HTTP layer translates these into
//! response codes. No retries happen at this level (the core performs no
//! I/O).

use thiserror::Error;

/// Result type for analysis core operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Typed failures the analysis core can produce.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Polygon malformed: too few distinct vertices or a self-intersecting
    /// ring. Fails fast, no partial result.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A computation that has no zero-result contract was asked to run on
    /// an empty or unusable series.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Malformed analysis configuration: fusion weights not summing to 1,
    /// non-positive area or agronomic constants, inverted thresholds.
    #[error("configuration error: {0}")]
    Configuration(String),
}
