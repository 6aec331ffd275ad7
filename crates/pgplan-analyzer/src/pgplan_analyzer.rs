//! PGPlan Analyzer - Cost metrics and index recommendations for EXPLAIN output
//!
//! This crate provides functionality for:
//! - Extracting aggregate cost metrics from PostgreSQL text-format EXPLAIN output
//! - Flagging operations whose cost reaches a caller-supplied threshold
//! - Deriving ranked CREATE INDEX recommendations from plan annotations
//!
//! The analyzers are purely in-process: they consume one plan string, perform
//! no I/O, and return freshly constructed value objects on every call. Lines
//! that do not look like anything the analyzers understand are skipped, never
//! errors.
//!
//! # Example
//!
//! ```
//! use pgplan_analyzer::{parse_cost, analyze_index_opportunities};
//!
//! let plan = "Seq Scan on users  (cost=0.00..425.50 rows=1000 width=100)\n  Filter: (status = 'active'::text)";
//!
//! let cost = parse_cost(plan, 100.0).unwrap();
//! assert_eq!(cost.total_cost, 425.5);
//! assert!(cost.exceeds_limit);
//!
//! let info = analyze_index_opportunities(plan, 100.0).unwrap();
//! assert_eq!(
//!     info.recommendations[0].create_statement,
//!     "CREATE INDEX idx_users_status ON users USING BTREE (status);"
//! );
//! ```

pub mod cost;
pub mod error;
pub mod ops;
pub mod recommend;

pub use cost::{CostInfo, ExpensiveOperation, parse_cost};
pub use error::{AnalyzeError, Result};
pub use ops::classify_operation;
pub use recommend::{
    IndexRecommendation, IndexRecommendationInfo, OperationContext, analyze_index_opportunities,
    collect_contexts, generate_recommendations,
};

/// Default minimum operation cost for index recommendation analysis.
pub const DEFAULT_INDEX_THRESHOLD: f64 = 100.0;
