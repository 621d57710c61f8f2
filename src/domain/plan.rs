// ==========================================
// Seasonal Load Planner - Seasonal Load Plan
// ==========================================
// The engine's sole output. Constructed once per request,
// immutable thereafter; owned exclusively by the caller.
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::capacity::CapacityOptimization;
use crate::domain::forecast::DemandPattern;
use crate::domain::request::PlanningRequest;
use crate::domain::risk::{KeyMetrics, RiskAssessment};
use crate::domain::routes::{PricingStrategy, RouteRecommendations};
use crate::domain::types::Season;

// ==========================================
// PlanPeriodSummary - echoed period plus computed weeks
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPeriodSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub season: Season,
    pub total_weeks: u32,
}

// ==========================================
// ContingencyPlan
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContingencyPlan {
    pub scenario: String,
    pub trigger: String,
    /// Ordered response steps.
    pub actions: Vec<String>,
}

// ==========================================
// SeasonalLoadPlan
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalLoadPlan {
    pub plan_id: String,
    /// The originating request, echoed verbatim.
    pub request: PlanningRequest,
    /// Confidence percentage from the narrative analysis (default 85).
    pub confidence: f64,
    pub reasoning: String,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    pub planning_period: PlanPeriodSummary,
    /// 48 records, season -> month -> week order.
    pub demand_forecast: Vec<DemandPattern>,
    pub capacity_optimization: CapacityOptimization,
    pub route_recommendations: RouteRecommendations,
    pub pricing_strategy: PricingStrategy,
    pub risk_assessment: RiskAssessment,
    pub key_metrics: KeyMetrics,
    pub action_items: Vec<String>,
    pub contingency_plans: Vec<ContingencyPlan>,
    pub created_at: NaiveDateTime,
}
