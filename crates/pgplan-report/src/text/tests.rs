//! Tests for the plain text renderers

use super::*;
use pgplan_analyzer::{analyze_index_opportunities, parse_cost};
use pretty_assertions::assert_eq;

const JOIN_PLAN: &str = "\
Hash Join  (cost=125.00..850.25 rows=10000 width=100)
  Hash Cond: (orders.user_id = users.id)
  ->  Seq Scan on orders  (cost=0.00..425.50 rows=10000 width=50)
        Filter: (total > 100)";

// ============================================================================
// Cost Alert Tests
// ============================================================================

#[test]
fn test_no_alert_below_threshold() {
    let info = parse_cost(JOIN_PLAN, 5000.0).expect("parse failed");
    assert_eq!(render_cost_alert(&info), None);
}

#[test]
fn test_no_alert_when_threshold_disabled() {
    // exceeds_limit is always true at threshold 0; the renderer is the
    // boundary that suppresses it.
    let info = parse_cost(JOIN_PLAN, 0.0).expect("parse failed");
    assert!(info.exceeds_limit);
    assert_eq!(render_cost_alert(&info), None);
}

#[test]
fn test_alert_lists_expensive_operations() {
    let info = parse_cost(JOIN_PLAN, 400.0).expect("parse failed");
    let alert = render_cost_alert(&info).expect("alert expected");

    assert!(alert.contains("COST THRESHOLD ALERT"));
    assert!(alert.contains("Query Cost: 850.25 (Threshold: 400.00)"));
    assert!(alert.contains("Status: EXCEEDS THRESHOLD by 450.25"));
    assert!(alert.contains("Expensive Operations Found: 2"));
    assert!(alert.contains("1. Hash Join (Cost: 850.25)"));
    assert!(alert.contains("2. Seq Scan (Cost: 425.50)"));
}

// ============================================================================
// Recommendation Tests
// ============================================================================

#[test]
fn test_no_output_without_recommendations() {
    let info = analyze_index_opportunities("", 100.0).expect("analysis failed");
    assert_eq!(render_recommendations(&info), None);
}

#[test]
fn test_recommendations_grouped_by_priority() {
    let info = analyze_index_opportunities(JOIN_PLAN, 0.0).expect("analysis failed");
    let rendered = render_recommendations(&info).expect("output expected");

    assert!(rendered.contains("INDEX RECOMMENDATIONS"));
    assert!(rendered.contains("Found: 3 recommendations"));
    // Join recommendations land in tier 3, the filter one in tier 1.
    let tier3 = rendered
        .find("Priority 3 (Medium - Moderate Impact)")
        .expect("tier 3 header");
    let tier1 = rendered
        .find("Priority 1 (Minimal Impact)")
        .expect("tier 1 header");
    assert!(tier3 < tier1);
    assert!(rendered.contains("CREATE INDEX idx_orders_user_id ON orders USING BTREE (user_id);"));
    assert!(rendered.contains("Reason: Sequential scan with filter on 'total'"));
}

#[test]
fn test_priority_labels() {
    assert_eq!(priority_label(5), "Critical - Very High Cost");
    assert_eq!(priority_label(1), "Minimal Impact");
}
