// ==========================================
// Seasonal Load Planner - Repository Layer
// ==========================================
// Read-only data sources. No engine logic.
// ==========================================

pub mod trend_repo;

pub use trend_repo::TrendRepository;
