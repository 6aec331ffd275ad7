//! Index Recommendation Pipeline
//!
//! Two cooperating stages live here: the plan context walker, which re-scans
//! the EXPLAIN text and gathers per-operation annotations from the indented
//! child lines, and the generator, which turns those contexts into ranked
//! CREATE INDEX recommendations.

pub mod generator;
pub mod walker;

pub use generator::{IndexRecommendation, IndexRecommendationInfo, generate_recommendations};
pub use walker::{OperationContext, collect_contexts};

use crate::error::Result;

/// Runs the full pipeline: walk the plan, then generate recommendations.
pub fn analyze_index_opportunities(plan: &str, threshold: f64) -> Result<IndexRecommendationInfo> {
    let contexts = collect_contexts(plan, threshold)?;
    Ok(generate_recommendations(&contexts, threshold))
}

#[cfg(test)]
mod tests;
