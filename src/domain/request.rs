// ==========================================
// Seasonal Load Planner - Planning Request
// ==========================================
// Immutable input to plan creation. Shape validation happens
// at the API boundary (api::validator), not here.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EquipmentType, Season};

// ==========================================
// PlanningPeriod
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub season: Season,
}

// ==========================================
// CapacityConstraints
// ==========================================
// Hard ceilings of the current operation. All positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityConstraints {
    pub max_drivers: u32,
    pub max_vehicles: u32,
    pub max_daily_miles: u32,
}

// ==========================================
// BusinessPriorities
// ==========================================
// Four weights on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPriorities {
    pub profit_maximization: u8,
    pub customer_satisfaction: u8,
    pub driver_utilization: u8,
    pub fuel_efficiency: u8,
}

// ==========================================
// PlanningRequest
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningRequest {
    pub planning_period: PlanningPeriod,
    /// Region codes, in caller priority order.
    pub target_regions: Vec<String>,
    pub equipment_types: Vec<EquipmentType>,
    pub commodity_types: Vec<String>,
    pub capacity_constraints: CapacityConstraints,
    pub business_priorities: BusinessPriorities,
    /// Years of history the caller wants considered.
    pub historical_data_period: u32,
}

impl PlanningRequest {
    /// Days between start and end of the planning period.
    pub fn period_days(&self) -> i64 {
        (self.planning_period.end_date - self.planning_period.start_date).num_days()
    }

    /// Planning window length in whole weeks, rounded up.
    pub fn total_weeks(&self) -> u32 {
        let days = self.period_days().max(0) as u32;
        days.div_ceil(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Season;

    fn create_test_period(start: (i32, u32, u32), end: (i32, u32, u32)) -> PlanningPeriod {
        PlanningPeriod {
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            season: Season::Fall,
        }
    }

    fn create_test_request(period: PlanningPeriod) -> PlanningRequest {
        PlanningRequest {
            planning_period: period,
            target_regions: vec!["US-Midwest".to_string()],
            equipment_types: vec![EquipmentType::DryVan],
            commodity_types: vec!["retail".to_string()],
            capacity_constraints: CapacityConstraints {
                max_drivers: 50,
                max_vehicles: 40,
                max_daily_miles: 500,
            },
            business_priorities: BusinessPriorities {
                profit_maximization: 8,
                customer_satisfaction: 9,
                driver_utilization: 7,
                fuel_efficiency: 6,
            },
            historical_data_period: 3,
        }
    }

    #[test]
    fn test_total_weeks_rounds_up() {
        // 2025-09-01 .. 2025-11-30 is 90 days -> 13 weeks
        let request = create_test_request(create_test_period((2025, 9, 1), (2025, 11, 30)));
        assert_eq!(request.period_days(), 90);
        assert_eq!(request.total_weeks(), 13);
    }

    #[test]
    fn test_total_weeks_exact_multiple() {
        let request = create_test_request(create_test_period((2025, 9, 1), (2025, 9, 15)));
        assert_eq!(request.total_weeks(), 2);
    }

    #[test]
    fn test_request_roundtrips_camel_case_json() {
        let request = create_test_request(create_test_period((2025, 9, 1), (2025, 11, 30)));
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("planningPeriod"));
        assert!(json.contains("maxDailyMiles"));
        assert!(json.contains("profitMaximization"));
        let back: PlanningRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
