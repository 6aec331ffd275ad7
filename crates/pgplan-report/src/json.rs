//! JSON rendering of analysis results

use pgplan_analyzer::{CostInfo, IndexRecommendationInfo};
use serde::{Deserialize, Serialize};

/// Combined analysis output for machine consumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub cost: CostInfo,
    pub index_recommendations: IndexRecommendationInfo,
}

/// Serializes both analysis results as pretty-printed JSON.
pub fn render_analysis(
    cost: &CostInfo,
    recommendations: &IndexRecommendationInfo,
) -> serde_json::Result<String> {
    let report = AnalysisReport {
        cost: cost.clone(),
        index_recommendations: recommendations.clone(),
    };
    serde_json::to_string_pretty(&report)
}
