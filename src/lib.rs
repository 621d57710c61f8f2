// ==========================================
// Seasonal Load Planner - Core Library
// ==========================================
// Seasonal demand forecasting and capacity optimization for
// freight operations: week-by-week demand patterns, capacity
// and staffing recommendations, route/pricing strategy, risk
// assessment and summary KPIs, assembled into one plan.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Engine layer - business rules
pub mod engine;

// Narrative analysis seam - external text collaborator
pub mod analysis;

// Repository layer - read-only data sources
pub mod repository;

// Configuration
pub mod config;

// Logging
pub mod logging;

// API layer - business interface
pub mod api;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{
    AdjustmentAction, EquipmentType, PriorityTier, ResourceType, RiskLevel, Season, WeatherImpact,
};

// Domain entities
pub use domain::{
    BusinessPriorities, CapacityConstraints, CapacityOptimization, ContingencyPlan, DemandPattern,
    DemandStats, KeyMetrics, PlanningPeriod, PlanningRequest, PlanningTemplate, PricingStrategy,
    RiskAssessment, RouteRecommendations, SeasonalLoadPlan, SeasonalTrend,
};

// Engines
pub use engine::{CapacityOptimizer, DemandForecastEngine, RiskEvaluator, RoutePricingAdvisor};

// Narrative analysis
pub use analysis::{NarrativeAnalyzer, NarrativeInsight, NoOpNarrativeAnalyzer};

// Configuration
pub use config::PlannerConfig;

// Repository
pub use repository::TrendRepository;

// API
pub use api::{PlanningApi, PlanningError, PlanningResult};

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Seasonal Load Planner";
