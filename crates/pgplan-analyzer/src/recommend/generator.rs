//! Recommendation Generator
//!
//! Applies a fixed rule set to the walker's operation contexts, validates and
//! deduplicates the resulting candidates, and ranks them by a priority
//! heuristic.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::walker::OperationContext;

/// Table-name prefixes that are never recommendation targets.
const SYSTEM_SCHEMAS: [&str; 2] = ["pg_catalog", "information_schema"];

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("valid regex"));

/// A single CREATE INDEX recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRecommendation {
    pub table_name: String,
    pub columns: Vec<String>,
    pub index_type: String,
    /// Why the rule fired, phrased for display
    pub reason: String,
    /// Operation label of the originating context
    pub operation_type: String,
    pub operation_cost: f64,
    /// Ready-to-run CREATE INDEX statement derived from table and columns
    pub create_statement: String,
    /// Urgency tier, 1 (minimal) to 5 (critical)
    pub priority: u8,
}

/// All recommendations derived from one plan, ranked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRecommendationInfo {
    /// Sorted by descending priority, ties by descending cost
    pub recommendations: Vec<IndexRecommendation>,
    pub total_found: usize,
    /// Number of recommendations with priority 4 or 5
    pub high_priority: usize,
    pub threshold_used: f64,
}

/// Which rule produced a candidate; joins get a priority bonus.
#[derive(Clone, Copy, PartialEq)]
enum Rule {
    Filter,
    Join,
    Sort,
}

/// Generates ranked index recommendations from operation contexts.
///
/// The priority score is a monotone heuristic over operation cost and row
/// estimates, not a calibrated cost model.
pub fn generate_recommendations(
    contexts: &[OperationContext],
    threshold: f64,
) -> IndexRecommendationInfo {
    let mut recommendations = Vec::new();
    // First valid recommendation wins per (table, columns) key. The set lives
    // and dies with this call.
    let mut seen: HashSet<String> = HashSet::new();

    for context in contexts {
        apply_filter_rule(context, &mut recommendations, &mut seen);
        apply_join_rule(context, &mut recommendations, &mut seen);
        apply_sort_rule(context, &mut recommendations, &mut seen);
    }

    // Stable sort: exact ties keep discovery order, so re-runs on the same
    // input produce one deterministic ordering.
    recommendations.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then(b.operation_cost.total_cmp(&a.operation_cost))
    });

    let total_found = recommendations.len();
    let high_priority = recommendations.iter().filter(|r| r.priority >= 4).count();

    tracing::debug!(total_found, high_priority, "recommendation pass complete");

    IndexRecommendationInfo {
        recommendations,
        total_found,
        high_priority,
        threshold_used: threshold,
    }
}

/// Sequential scan with a filter: one single-column candidate per filter
/// column on the scanned table.
fn apply_filter_rule(
    context: &OperationContext,
    out: &mut Vec<IndexRecommendation>,
    seen: &mut HashSet<String>,
) {
    if !context.operation_type.contains("Seq Scan") || context.filter_columns.is_empty() {
        return;
    }
    let Some(table) = context.table_name.as_deref() else {
        return;
    };

    for column in &context.filter_columns {
        let candidate = build_recommendation(
            table,
            vec![column.clone()],
            format!("Sequential scan with filter on '{column}'"),
            context,
            Rule::Filter,
        );
        push_candidate(candidate, out, seen);
    }
}

/// Hash or merge join condition: one single-column candidate per side of the
/// join. The table comes from the "table.column" pair, not from the context,
/// since join nodes never name a table themselves.
fn apply_join_rule(
    context: &OperationContext,
    out: &mut Vec<IndexRecommendation>,
    seen: &mut HashSet<String>,
) {
    let op = &context.operation_type;
    if !(op.contains("Hash Join") || op.contains("Merge Join")) || context.join_columns.is_empty() {
        return;
    }

    for pair in &context.join_columns {
        let Some((table, column)) = pair.split_once('.') else {
            continue;
        };
        let candidate = build_recommendation(
            table,
            vec![column.to_string()],
            format!("Join condition on '{table}.{column}'"),
            context,
            Rule::Join,
        );
        push_candidate(candidate, out, seen);
    }
}

/// Expensive sort with known keys: one composite candidate over all sort
/// columns of the context's own table.
fn apply_sort_rule(
    context: &OperationContext,
    out: &mut Vec<IndexRecommendation>,
    seen: &mut HashSet<String>,
) {
    if !context.operation_type.contains("Sort") || context.sort_columns.is_empty() {
        return;
    }
    let Some(table) = context.table_name.as_deref() else {
        return;
    };

    let candidate = build_recommendation(
        table,
        context.sort_columns.clone(),
        format!(
            "Expensive sort operation on {}",
            context.sort_columns.join(", ")
        ),
        context,
        Rule::Sort,
    );
    push_candidate(candidate, out, seen);
}

fn build_recommendation(
    table: &str,
    columns: Vec<String>,
    reason: String,
    context: &OperationContext,
    rule: Rule,
) -> IndexRecommendation {
    let create_statement = format_create_index(table, &columns);
    IndexRecommendation {
        table_name: table.to_string(),
        columns,
        index_type: "BTREE".to_string(),
        reason,
        operation_type: context.operation_type.clone(),
        operation_cost: context.cost,
        create_statement,
        priority: calculate_priority(context.cost, context.rows_estimate, rule),
    }
}

fn format_create_index(table: &str, columns: &[String]) -> String {
    format!(
        "CREATE INDEX idx_{}_{} ON {} USING BTREE ({});",
        table,
        columns.join("_"),
        table,
        columns.join(", ")
    )
}

/// Priority tiers over operation cost, with bonuses for very large row
/// estimates and for join conditions, capped at 5.
fn calculate_priority(cost: f64, rows: i64, rule: Rule) -> u8 {
    let mut priority: u8 = if cost > 10_000.0 {
        5
    } else if cost > 5_000.0 {
        4
    } else if cost > 1_000.0 {
        3
    } else if cost > 500.0 {
        2
    } else {
        1
    };

    if rows > 100_000 {
        priority = (priority + 1).min(5);
    }

    if rule == Rule::Join {
        priority = (priority + 1).min(5);
    }

    priority
}

/// Validates a candidate and appends it unless its (table, columns) key has
/// already been taken.
fn push_candidate(
    candidate: IndexRecommendation,
    out: &mut Vec<IndexRecommendation>,
    seen: &mut HashSet<String>,
) {
    if !is_valid(&candidate) {
        return;
    }

    let key = format!("{}:{}", candidate.table_name, candidate.columns.join(","));
    if seen.insert(key) {
        out.push(candidate);
    }
}

fn is_valid(candidate: &IndexRecommendation) -> bool {
    if candidate.table_name.is_empty() || candidate.columns.is_empty() {
        return false;
    }
    if SYSTEM_SCHEMAS
        .iter()
        .any(|schema| candidate.table_name.starts_with(schema))
    {
        return false;
    }
    candidate
        .columns
        .iter()
        .all(|column| IDENTIFIER_REGEX.is_match(column))
}
