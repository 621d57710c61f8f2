// ==========================================
// Seasonal Load Planner - API Layer
// ==========================================
// Business interface consumed by the HTTP boundary. Validates
// request shape, orchestrates the engines, owns the error taxonomy.
// ==========================================

pub mod error;
pub mod planning_api;
pub mod validator;

pub use error::{PlanningError, PlanningResult};
pub use planning_api::PlanningApi;
pub use validator::validate_request;
