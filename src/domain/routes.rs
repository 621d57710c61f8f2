// ==========================================
// Seasonal Load Planner - Route & Pricing Model
// ==========================================
// Route recommendations and the two-part pricing strategy.
// Route identity and margins are static reference data; only
// expected volume is demand-driven.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{PriorityTier, Season};

// ==========================================
// PriorityRoute
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityRoute {
    pub origin: String,
    pub destination: String,
    /// Loads expected over the planning window.
    pub expected_volume: i64,
    pub avg_rate: f64,
    /// Fraction of revenue, e.g. 0.18.
    pub profit_margin: f64,
    pub priority: PriorityTier,
}

// ==========================================
// AvoidRoute
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvoidRoute {
    pub corridor: String,
    pub reason: String,
    pub alternative: Option<String>,
}

// ==========================================
// RouteRecommendations
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecommendations {
    pub priority_routes: Vec<PriorityRoute>,
    pub avoid_routes: Vec<AvoidRoute>,
}

// ==========================================
// BasePricing
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePricing {
    pub season: Season,
    /// (peak demand - 100) / 100; applied on top of contract rates.
    pub adjustment_factor: f64,
    pub reasoning: String,
}

// ==========================================
// DynamicPricing
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicPricing {
    pub high_demand_multiplier: f64,
    pub low_demand_discount: f64,
    pub peak_season_surcharge: f64,
}

// ==========================================
// PricingStrategy
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingStrategy {
    pub base_pricing: BasePricing,
    pub dynamic_pricing: DynamicPricing,
}
