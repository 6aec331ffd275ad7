//! Console-style plain text rendering

use pgplan_analyzer::{CostInfo, IndexRecommendation, IndexRecommendationInfo};

const RULE_WIDTH: usize = 70;

/// Description shown next to the numeric priority level.
pub fn priority_label(priority: u8) -> &'static str {
    match priority {
        5 => "Critical - Very High Cost",
        4 => "High - Significant Impact",
        3 => "Medium - Moderate Impact",
        2 => "Low - Minor Impact",
        _ => "Minimal Impact",
    }
}

/// Renders the cost threshold alert block.
///
/// Returns `None` when the plan stayed below the threshold, or when the
/// threshold is 0: the zero sentinel means "alert disabled" and its
/// always-true `exceeds_limit` flag must not be surfaced.
pub fn render_cost_alert(info: &CostInfo) -> Option<String> {
    if !info.exceeds_limit || info.threshold_value == 0.0 {
        return None;
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&rule);
    out.push_str("\nCOST THRESHOLD ALERT\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "Query Cost: {:.2} (Threshold: {:.2})\n",
        info.total_cost, info.threshold_value
    ));
    out.push_str(&format!(
        "Status: EXCEEDS THRESHOLD by {:.2}\n",
        info.total_cost - info.threshold_value
    ));

    if !info.expensive_ops.is_empty() {
        out.push_str(&format!(
            "\nExpensive Operations Found: {}\n",
            info.expensive_ops.len()
        ));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        for (i, op) in info.expensive_ops.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} (Cost: {:.2})\n",
                i + 1,
                op.operation,
                op.cost
            ));
            out.push_str(&format!("   {}\n", op.line));
        }
    }

    out.push_str(&rule);
    out.push('\n');
    Some(out)
}

/// Renders the recommendation list grouped by priority, highest first.
///
/// Returns `None` when there is nothing to recommend.
pub fn render_recommendations(info: &IndexRecommendationInfo) -> Option<String> {
    if info.total_found == 0 {
        return None;
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&rule);
    out.push_str("\nINDEX RECOMMENDATIONS\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Found: {} recommendations", info.total_found));
    if info.high_priority > 0 {
        out.push_str(&format!(" ({} high priority)", info.high_priority));
    }
    out.push('\n');
    out.push_str(&format!(
        "Threshold: Operations with cost >= {:.0}\n",
        info.threshold_used
    ));

    for priority in (1..=5u8).rev() {
        let tier: Vec<&IndexRecommendation> = info
            .recommendations
            .iter()
            .filter(|r| r.priority == priority)
            .collect();
        if tier.is_empty() {
            continue;
        }

        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push_str(&format!(
            "\nPriority {} ({})\n",
            priority,
            priority_label(priority)
        ));

        for (i, rec) in tier.iter().enumerate() {
            out.push_str(&format!("\n{}. Table: {}\n", i + 1, rec.table_name));
            out.push_str(&format!("   Columns: {}\n", rec.columns.join(", ")));
            out.push_str(&format!("   Reason: {}\n", rec.reason));
            out.push_str(&format!(
                "   Operation: {} (Cost: {:.2})\n",
                rec.operation_type, rec.operation_cost
            ));
            out.push_str(&format!("   {}\n", rec.create_statement));
        }
    }

    out.push_str(&rule);
    out.push('\n');
    Some(out)
}

#[cfg(test)]
mod tests;
