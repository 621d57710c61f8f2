// ==========================================
// Seasonal Load Planner - Capacity Optimization Model
// ==========================================
// Derived output of the capacity optimizer. Never persisted on
// its own; embedded in the SeasonalLoadPlan or returned directly
// from the optimize_capacity operation.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{AdjustmentAction, ResourceType};

// ==========================================
// RecommendedCapacity
// ==========================================
// Input constraints scaled up by the capacity multiplier, rounded up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCapacity {
    pub drivers: u32,
    pub vehicles: u32,
    pub daily_miles: u32,
}

// ==========================================
// UtilizationForecast
// ==========================================
// Demand index values reported as integer percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationForecast {
    pub expected_utilization: i64,
    pub peak_utilization: i64,
    pub low_utilization: i64,
}

// ==========================================
// CapacityAdjustment
// ==========================================
// Every adjustment carries an explicit reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityAdjustment {
    pub action: AdjustmentAction,
    pub resource_type: ResourceType,
    pub adjustment_percentage: f64,
    pub reasoning: String,
}

// ==========================================
// SeasonalStaffing
// ==========================================
// Graduated escalation: each count compares peak demand against
// its own floor (100 / 120 / 110), no mutual exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalStaffing {
    pub temporary_drivers: u32,
    pub contract_carriers: u32,
    pub equipment_leasing: u32,
}

// ==========================================
// CapacityOptimization
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityOptimization {
    pub recommended_capacity: RecommendedCapacity,
    pub utilization_forecast: UtilizationForecast,
    pub capacity_adjustments: Vec<CapacityAdjustment>,
    pub seasonal_staffing: SeasonalStaffing,
}
