// ==========================================
// Seasonal Load Planner - Request Validator
// ==========================================
// Shape validation for planning requests, applied before any
// computation begins. Date-range math (total weeks) would
// otherwise produce nonsensical output.
// ==========================================

use crate::api::error::{PlanningError, PlanningResult};
use crate::domain::request::PlanningRequest;

/// Validate the basic shape of a planning request.
///
/// Checks, in order:
/// 1. start date strictly before end date
/// 2. at least one target region
/// 3. all capacity constraints positive
/// 4. all business priority weights within 1-10
pub fn validate_request(request: &PlanningRequest) -> PlanningResult<()> {
    let period = &request.planning_period;
    if period.start_date >= period.end_date {
        return Err(PlanningError::InvalidRequest(format!(
            "planning period start {} must be before end {}",
            period.start_date, period.end_date
        )));
    }

    if request.target_regions.is_empty() {
        return Err(PlanningError::InvalidRequest(
            "at least one target region is required".to_string(),
        ));
    }

    let constraints = &request.capacity_constraints;
    if constraints.max_drivers == 0 || constraints.max_vehicles == 0 || constraints.max_daily_miles == 0
    {
        return Err(PlanningError::InvalidRequest(
            "capacity constraints must all be positive".to_string(),
        ));
    }

    let priorities = &request.business_priorities;
    for (name, weight) in [
        ("profitMaximization", priorities.profit_maximization),
        ("customerSatisfaction", priorities.customer_satisfaction),
        ("driverUtilization", priorities.driver_utilization),
        ("fuelEfficiency", priorities.fuel_efficiency),
    ] {
        if !(1..=10).contains(&weight) {
            return Err(PlanningError::InvalidRequest(format!(
                "business priority {name} must be within 1-10, got {weight}"
            )));
        }
    }

    Ok(())
}
