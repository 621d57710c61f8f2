// ==========================================
// Seasonal Load Planner - Configuration
// ==========================================
// Tunable engine parameters with production defaults.
// Deserializable so a deployment can override individual
// values from a JSON config without restating the rest.
// ==========================================

use serde::{Deserialize, Serialize};

/// Engine tuning parameters.
///
/// Defaults reproduce the production heuristics; every field can be
/// overridden independently via `#[serde(default)]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerConfig {
    /// Half-width of the uniform demand jitter band.
    pub jitter_range: f64,
    /// Assumed average length of a load, in miles.
    pub avg_miles_per_load: f64,
    /// Profit share of projected revenue.
    pub profit_margin: f64,
    /// Ceiling on the reported driver utilization percentage.
    pub utilization_cap: f64,
    /// Fixed fuel-efficiency gain percentage claimed by the plan.
    pub fuel_efficiency_gain: f64,
    /// Corridor rate/frequency multiplier for fall weeks.
    pub fall_rate_multiplier: f64,
    /// Corridor rate/frequency multiplier for summer weeks.
    pub summer_rate_multiplier: f64,
    /// Default confidence percentage when narrative analysis supplies none.
    pub default_confidence: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            jitter_range: 5.0,
            avg_miles_per_load: 500.0,
            profit_margin: 0.15,
            utilization_cap: 95.0,
            fuel_efficiency_gain: 8.0,
            fall_rate_multiplier: 1.2,
            summer_rate_multiplier: 1.1,
            default_confidence: 85.0,
        }
    }
}
