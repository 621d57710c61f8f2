// ==========================================
// Seasonal Load Planner - Engine Layer
// ==========================================
// Business rules over the domain model. Engines are stateless,
// consume the forecast series independently, and every derived
// adjustment or recommendation carries an explicit reason.
// ==========================================

pub mod capacity;
pub mod demand;
pub mod risk;
pub mod routing;

// Re-export core engines
pub use capacity::CapacityOptimizer;
pub use demand::DemandForecastEngine;
pub use risk::RiskEvaluator;
pub use routing::RoutePricingAdvisor;
