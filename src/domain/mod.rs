// ==========================================
// Seasonal Load Planner - Domain Layer
// ==========================================
// Entities, value types and reference tables.
// No engine logic, no I/O.
// ==========================================

pub mod capacity;
pub mod forecast;
pub mod plan;
pub mod reference;
pub mod request;
pub mod risk;
pub mod routes;
pub mod trend;
pub mod types;

// Re-export core types
pub use capacity::{
    CapacityAdjustment, CapacityOptimization, RecommendedCapacity, SeasonalStaffing,
    UtilizationForecast,
};
pub use forecast::{DemandPattern, DemandStats, EquipmentRates, PopularRoute};
pub use plan::{ContingencyPlan, PlanPeriodSummary, SeasonalLoadPlan};
pub use request::{BusinessPriorities, CapacityConstraints, PlanningPeriod, PlanningRequest};
pub use risk::{KeyMetrics, RiskAssessment};
pub use routes::{
    AvoidRoute, BasePricing, DynamicPricing, PricingStrategy, PriorityRoute,
    RouteRecommendations,
};
pub use trend::{PlanningTemplate, SeasonalTrend};
pub use types::{
    AdjustmentAction, EquipmentType, PriorityTier, ResourceType, RiskLevel, Season, WeatherImpact,
};
