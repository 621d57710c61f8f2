// ==========================================
// Seasonal Load Planner - API Error Types
// ==========================================
// Every rejection carries an explicit, user-readable reason.
// Collaborator failure is deliberately NOT represented here:
// the planner substitutes default narrative text instead of
// failing a plan whose numeric results are still valid.
// ==========================================

use thiserror::Error;

/// API-layer error type.
#[derive(Error, Debug)]
pub enum PlanningError {
    /// Malformed request, rejected before any computation. A rejected
    /// request is never retried: the date math would only produce
    /// nonsensical output again.
    #[error("invalid planning request: {0}")]
    InvalidRequest(String),

    /// Raised by the calling boundary when the seasonal planning
    /// feature flag is off. The core itself never checks the flag.
    #[error("seasonal load planning is disabled")]
    FeatureDisabled,
}

pub type PlanningResult<T> = Result<T, PlanningError>;
