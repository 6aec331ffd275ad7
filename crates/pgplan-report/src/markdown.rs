//! Markdown rendering of analysis results

use pgplan_analyzer::{CostInfo, ExpensiveOperation, IndexRecommendationInfo};

/// Escapes characters that would change Markdown table or emphasis structure.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '*' | '_' | '[' | ']' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Renders the cost metrics as a two-column table.
pub fn render_cost_info(info: &CostInfo) -> String {
    let mut out = String::new();
    out.push_str("| Metric | Value |\n");
    out.push_str("|--------|-------|\n");
    out.push_str(&format!("| Total Cost | {:.2} |\n", info.total_cost));
    out.push_str(&format!("| Exceeds Threshold | {} |\n", info.exceeds_limit));
    out.push_str(&format!(
        "| Threshold Value | {:.2} |\n",
        info.threshold_value
    ));
    out
}

/// Renders the expensive operations as a table, one row per operation.
pub fn render_expensive_ops(ops: &[ExpensiveOperation]) -> String {
    if ops.is_empty() {
        return "_No expensive operations found_\n".to_string();
    }

    let mut out = String::new();
    out.push_str("| Operation | Cost | Details |\n");
    out.push_str("|-----------|------|---------|\n");
    for op in ops {
        out.push_str(&format!(
            "| {} | {:.2} | {} |\n",
            escape(&op.operation),
            op.cost,
            escape(&op.line)
        ));
    }
    out
}

/// Renders the recommendation list as a table, already in priority order.
pub fn render_recommendations(info: &IndexRecommendationInfo) -> String {
    if info.recommendations.is_empty() {
        return "_No index recommendations_\n".to_string();
    }

    let mut out = String::new();
    out.push_str("| Priority | Table | Columns | Reason | Statement |\n");
    out.push_str("|----------|-------|---------|--------|-----------|\n");
    for rec in &info.recommendations {
        out.push_str(&format!(
            "| {} | {} | {} | {} | `{}` |\n",
            rec.priority,
            escape(&rec.table_name),
            escape(&rec.columns.join(", ")),
            escape(&rec.reason),
            rec.create_statement
        ));
    }
    out
}

/// Renders the full plan report document: query, cost analysis, optional
/// recommendations, and the raw plan in a fenced block.
pub fn render_plan_report(
    plan: &str,
    query: &str,
    cost: &CostInfo,
    recommendations: Option<&IndexRecommendationInfo>,
) -> String {
    let mut out = String::new();
    out.push_str("# Query Execution Plan\n\n");
    out.push_str(&format!("**Query:** {}\n\n", escape(query)));
    out.push_str("---\n\n");

    out.push_str("## Cost Analysis\n\n");
    out.push_str(&render_cost_info(cost));
    out.push('\n');

    if !cost.expensive_ops.is_empty() {
        out.push_str("### Expensive Operations\n\n");
        out.push_str(&render_expensive_ops(&cost.expensive_ops));
        out.push('\n');
    }

    if let Some(info) = recommendations {
        out.push_str("## Index Recommendations\n\n");
        out.push_str(&render_recommendations(info));
        out.push('\n');
    }

    out.push_str("---\n\n");
    out.push_str("## Execution Plan\n\n");
    out.push_str("```\n");
    out.push_str(plan);
    out.push_str("\n```\n");
    out
}
