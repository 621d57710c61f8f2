// ==========================================
// Seasonal Load Planner - Risk & Metrics Model
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::RiskLevel;

// ==========================================
// RiskAssessment
// ==========================================
// Four-dimension assessment. Under the current rule set the
// overall risk can never come out "low" (weather and volatility
// each bottom out at medium); intentional, covered by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub weather_risk: RiskLevel,
    pub demand_volatility: RiskLevel,
    pub competitive_risk: RiskLevel,
    pub overall_risk: RiskLevel,
}

// ==========================================
// KeyMetrics
// ==========================================
// Summary KPIs for the planning window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub projected_revenue: i64,
    pub projected_profit: i64,
    pub expected_load_count: i64,
    pub avg_revenue_per_mile: f64,
    /// Percentage, capped at 95.
    pub driver_utilization_rate: f64,
    /// Percentage improvement from route/pricing discipline.
    pub fuel_efficiency_gain: f64,
}
