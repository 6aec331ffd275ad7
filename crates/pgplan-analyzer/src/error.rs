//! Analyzer error types
//!
//! The analyzers have no fatal failure modes: malformed or unexpected plan
//! lines are skipped, and empty input yields zero-valued results. The only
//! reportable condition is caller misuse.

use thiserror::Error;

/// Errors returned by the analysis entry points
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Thresholds are plan costs and must be non-negative
    #[error("threshold must be non-negative, got {0}")]
    NegativeThreshold(f64),
}

/// Result type for plan analysis
pub type Result<T> = std::result::Result<T, AnalyzeError>;
