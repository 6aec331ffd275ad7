//! End-to-end tests for the recommendation pipeline

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_seq_scan_with_filter_end_to_end() {
    let plan = "\
Seq Scan on users  (cost=0.00..425.50 rows=1000 width=100)
  Filter: (status = 'active'::text)";

    let info = analyze_index_opportunities(plan, 0.0).expect("analysis failed");

    assert_eq!(info.total_found, 1);
    let rec = &info.recommendations[0];
    assert_eq!(rec.table_name, "users");
    assert_eq!(rec.columns, vec!["status"]);
    assert_eq!(
        rec.create_statement,
        "CREATE INDEX idx_users_status ON users USING BTREE (status);"
    );
    assert_eq!(rec.priority, 1);
}

#[test]
fn test_hash_join_end_to_end() {
    let plan = "\
Hash Join  (cost=125.00..850.25 rows=10000 width=100)
  Hash Cond: (orders.user_id = users.id)";

    let info = analyze_index_opportunities(plan, 0.0).expect("analysis failed");

    assert_eq!(info.total_found, 2);
    assert_eq!(info.recommendations[0].table_name, "orders");
    assert_eq!(info.recommendations[0].columns, vec!["user_id"]);
    assert_eq!(info.recommendations[1].table_name, "users");
    assert_eq!(info.recommendations[1].columns, vec!["id"]);
    assert!(info.recommendations.iter().all(|r| r.priority == 3));
}

#[test]
fn test_full_plan_combines_rules_and_dedups() {
    let plan = "\
Hash Join  (cost=125.00..850.25 rows=10000 width=100)
  Hash Cond: (orders.user_id = users.id)
  ->  Seq Scan on orders  (cost=0.00..425.50 rows=10000 width=50)
        Filter: (user_id > 100)
  ->  Hash  (cost=75.00..75.00 rows=4000 width=50)
        ->  Seq Scan on users  (cost=0.00..75.00 rows=4000 width=50)";

    let info = analyze_index_opportunities(plan, 0.0).expect("analysis failed");

    // The filter on orders.user_id collides with the join key for the same
    // table and column; the join side is discovered first and wins.
    assert_eq!(info.total_found, 2);
    assert_eq!(info.recommendations[0].table_name, "orders");
    assert_eq!(
        info.recommendations[0].reason,
        "Join condition on 'orders.user_id'"
    );
    assert_eq!(info.recommendations[1].table_name, "users");
}

#[test]
fn test_empty_plan_yields_no_recommendations() {
    let info = analyze_index_opportunities("", 100.0).expect("analysis failed");

    assert_eq!(info.total_found, 0);
    assert_eq!(info.high_priority, 0);
    assert_eq!(info.threshold_used, 100.0);
}

#[test]
fn test_operations_below_threshold_are_ignored() {
    let plan = "\
Seq Scan on users  (cost=0.00..80.00 rows=100 width=36)
  Filter: (status = 'active'::text)";

    let info =
        analyze_index_opportunities(plan, crate::DEFAULT_INDEX_THRESHOLD).expect("analysis failed");
    assert_eq!(info.total_found, 0);
}
