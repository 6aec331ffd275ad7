//! Plan Context Walker
//!
//! Re-scans the plan text and, for each line whose cost reaches the index
//! threshold, builds an [`OperationContext`] from the line itself plus the
//! filter, join-condition, and sort-key annotations found on the immediately
//! following indented lines.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cost::line_cost;
use crate::error::{AnalyzeError, Result};
use crate::ops::classify_operation;

/// How many lines below an operation are inspected for annotations.
const LOOKAHEAD_LINES: usize = 4;

static TABLE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:Seq Scan|Parallel Seq Scan|Index Scan|Index Only Scan|Bitmap Heap Scan)\s+on\s+(\w+)",
    )
    .expect("valid regex")
});

static ROWS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rows=(\d+)").expect("valid regex"));

static FILTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Filter:\s*\(([^)]+(?:\([^)]*\)[^)]*)*)\)").expect("valid regex")
});

static FILTER_COLUMN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\w+)\s*(?:=|>|<|>=|<=|!=|<>|~~|LIKE|IN|IS)").expect("valid regex")
});

static HASH_COND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Hash Cond:\s*\(([^)]+)\)").expect("valid regex"));

static MERGE_COND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Merge Cond:\s*\(([^)]+)\)").expect("valid regex"));

static SORT_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Sort Key:\s*(.+)").expect("valid regex"));

static JOIN_COLUMN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\.(\w+)\s*=\s*(\w+)\.(\w+)").expect("valid regex"));

/// Parsed information about a single qualifying EXPLAIN line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationContext {
    /// The trimmed anchor line
    pub line: String,
    /// Short operation label for the anchor line
    pub operation_type: String,
    /// Table the operation scans, when the line names one
    pub table_name: Option<String>,
    /// Filter identifiers, deduplicated in first-seen order
    pub filter_columns: Vec<String>,
    /// Join keys as "table.column" pairs
    pub join_columns: Vec<String>,
    /// Sort keys with direction keywords and table qualifiers stripped
    pub sort_columns: Vec<String>,
    /// Upper-bound cost parsed from the anchor line
    pub cost: f64,
    /// Row estimate from the anchor line, 0 when absent
    pub rows_estimate: i64,
}

/// Walks an EXPLAIN plan and collects one context per line whose cost is at
/// or above `threshold`, in line-scan order.
pub fn collect_contexts(plan: &str, threshold: f64) -> Result<Vec<OperationContext>> {
    if threshold < 0.0 {
        return Err(AnalyzeError::NegativeThreshold(threshold));
    }

    let lines: Vec<&str> = plan.lines().collect();
    let mut contexts = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some(cost) = line_cost(line) else {
            continue;
        };
        if cost < threshold {
            continue;
        }

        let mut context = OperationContext {
            line: line.trim().to_string(),
            operation_type: classify_operation(line),
            table_name: TABLE_NAME_REGEX.captures(line).map(|c| c[1].to_string()),
            filter_columns: Vec::new(),
            join_columns: Vec::new(),
            sort_columns: Vec::new(),
            cost,
            rows_estimate: ROWS_REGEX
                .captures(line)
                .and_then(|c| c[1].parse().ok())
                .unwrap_or(0),
        };

        for child in lines.iter().skip(i + 1).take(LOOKAHEAD_LINES) {
            // Leaving the current node's child block. An indentation
            // heuristic, not a tree parse: only a two-space or tab prefix
            // counts as still indented.
            if !child.starts_with("  ") && !child.starts_with('\t') {
                break;
            }

            collect_filter_columns(child, &mut context.filter_columns);
            collect_join_columns(child, &mut context.join_columns);
            collect_sort_columns(child, &mut context.sort_columns);
        }

        contexts.push(context);
    }

    tracing::debug!(contexts = contexts.len(), threshold, "plan walk complete");

    Ok(contexts)
}

/// Pulls every identifier followed by a comparison operator out of a
/// `Filter: (...)` annotation, deduplicated in first-seen order.
fn collect_filter_columns(line: &str, columns: &mut Vec<String>) {
    let Some(captures) = FILTER_REGEX.captures(line) else {
        return;
    };
    for candidate in FILTER_COLUMN_REGEX.captures_iter(&captures[1]) {
        let column = candidate[1].to_string();
        if !columns.contains(&column) {
            columns.push(column);
        }
    }
}

/// Pulls a `a.b = c.d` pair out of a `Hash Cond:` or `Merge Cond:`
/// annotation. Only the first pair per annotation line is taken.
fn collect_join_columns(line: &str, columns: &mut Vec<String>) {
    for cond in [&HASH_COND_REGEX, &MERGE_COND_REGEX] {
        let Some(captures) = cond.captures(line) else {
            continue;
        };
        if let Some(pair) = JOIN_COLUMN_REGEX.captures(&captures[1]) {
            columns.push(format!("{}.{}", &pair[1], &pair[2]));
            columns.push(format!("{}.{}", &pair[3], &pair[4]));
        }
    }
}

/// Splits a `Sort Key:` list, stripping direction keywords and keeping only
/// the column part of table-qualified keys.
fn collect_sort_columns(line: &str, columns: &mut Vec<String>) {
    let Some(captures) = SORT_KEY_REGEX.captures(line) else {
        return;
    };
    for key in captures[1].split(',') {
        let key = key.trim();
        let key = key.strip_suffix(" DESC").unwrap_or(key);
        let key = key.strip_suffix(" ASC").unwrap_or(key);
        if key.contains('.') {
            if let Some(column) = key.split('.').nth(1) {
                columns.push(column.to_string());
            }
        } else {
            columns.push(key.to_string());
        }
    }
}
