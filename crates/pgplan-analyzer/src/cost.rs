//! Cost Extractor
//!
//! Scans text-format EXPLAIN output for `cost=low..high` annotations, tracks
//! the maximum upper bound seen as the query's total cost, and collects every
//! operation at or above a caller-supplied threshold.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyzeError, Result};
use crate::ops::classify_operation;

static COST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"cost=(\d+\.?\d*)\.\.(\d+\.?\d*)").expect("valid regex"));

/// Aggregate cost metrics for one EXPLAIN plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInfo {
    /// Maximum upper-bound cost found on any single line, not a sum
    pub total_cost: f64,
    /// Operations at or above the threshold, in plan order
    pub expensive_ops: Vec<ExpensiveOperation>,
    /// Whether `total_cost` reached the threshold. A threshold of 0 means
    /// "alert disabled"; the flag is then always true and callers must not
    /// surface it.
    pub exceeds_limit: bool,
    /// Threshold the plan was scanned with
    pub threshold_value: f64,
}

/// A single plan line whose cost reached the threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensiveOperation {
    /// Short operation label for the line
    pub operation: String,
    /// Upper-bound cost parsed from the line
    pub cost: f64,
    /// The trimmed line text
    pub line: String,
}

/// Extracts the upper-bound cost from a single plan line, if present.
pub(crate) fn line_cost(line: &str) -> Option<f64> {
    let captures = COST_REGEX.captures(line)?;
    captures[2].parse().ok()
}

/// Scans an EXPLAIN plan for cost annotations.
///
/// Lines without a parseable `cost=low..high` annotation contribute nothing;
/// a plan with no annotations at all yields a zero-valued [`CostInfo`] rather
/// than an error.
pub fn parse_cost(plan: &str, threshold: f64) -> Result<CostInfo> {
    if threshold < 0.0 {
        return Err(AnalyzeError::NegativeThreshold(threshold));
    }

    let mut info = CostInfo {
        total_cost: 0.0,
        expensive_ops: Vec::new(),
        exceeds_limit: false,
        threshold_value: threshold,
    };

    for line in plan.lines() {
        let Some(cost) = line_cost(line) else {
            continue;
        };

        // The highest single-node cost stands in for the whole query.
        if cost > info.total_cost {
            info.total_cost = cost;
        }

        if cost >= threshold {
            info.expensive_ops.push(ExpensiveOperation {
                operation: classify_operation(line),
                cost,
                line: line.trim().to_string(),
            });
        }
    }

    info.exceeds_limit = info.total_cost >= threshold;

    tracing::debug!(
        total_cost = info.total_cost,
        expensive_ops = info.expensive_ops.len(),
        "cost scan complete"
    );

    Ok(info)
}
