// ==========================================
// Seasonal Load Planner - Trends & Templates
// ==========================================
// Historical trend records served by the trend repository and
// the canned planning templates a dispatcher can start from.
// ==========================================

use chrono::{Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::request::PlanningRequest;
use crate::domain::types::Season;

// ==========================================
// SeasonalTrend - one historical quarter
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalTrend {
    /// Quarter label: Q1..Q4.
    pub period: String,
    /// Regions the caller asked about, echoed back.
    pub regions: Vec<String>,
    pub years_analyzed: u32,
    pub demand_index: f64,
    pub avg_rate_per_mile: f64,
    pub load_volume: u32,
    /// Percentage change versus the prior year.
    pub year_over_year_change: f64,
}

// ==========================================
// PlanningTemplate - canned starting point
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningTemplate {
    pub id: String,
    pub name: String,
    pub season: Season,
    pub description: String,
    /// Percentage uplift applied to driver/vehicle ceilings.
    pub capacity_increase: f64,
    pub focus_routes: Vec<String>,
    /// Percentage uplift applied to base pricing.
    pub pricing_adjustment: f64,
}

impl PlanningTemplate {
    /// Apply this template to a request: install a three-month planning
    /// window starting today, take the template's season, and scale the
    /// driver/vehicle ceilings by the capacity increase.
    pub fn apply_to(&self, request: &PlanningRequest) -> PlanningRequest {
        self.apply_from(request, Local::now().date_naive())
    }

    /// Same as `apply_to` with an explicit window start.
    pub fn apply_from(&self, request: &PlanningRequest, start_date: NaiveDate) -> PlanningRequest {
        let end_date = start_date
            .checked_add_months(Months::new(3))
            .unwrap_or(start_date);
        let scale = 1.0 + self.capacity_increase / 100.0;

        let mut applied = request.clone();
        applied.planning_period.start_date = start_date;
        applied.planning_period.end_date = end_date;
        applied.planning_period.season = self.season;
        applied.capacity_constraints.max_drivers =
            (f64::from(request.capacity_constraints.max_drivers) * scale).round() as u32;
        applied.capacity_constraints.max_vehicles =
            (f64::from(request.capacity_constraints.max_vehicles) * scale).round() as u32;
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::{BusinessPriorities, CapacityConstraints, PlanningPeriod};
    use crate::domain::types::EquipmentType;

    fn create_test_request() -> PlanningRequest {
        PlanningRequest {
            planning_period: PlanningPeriod {
                start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
                season: Season::Fall,
            },
            target_regions: vec!["US-Midwest".to_string()],
            equipment_types: vec![EquipmentType::DryVan],
            commodity_types: vec!["retail".to_string()],
            capacity_constraints: CapacityConstraints {
                max_drivers: 50,
                max_vehicles: 40,
                max_daily_miles: 2500,
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
    fn test_apply_scales_constraints_and_swaps_season() {
        let template = PlanningTemplate {
            id: "retail-peak".to_string(),
            name: "Retail Peak Season".to_string(),
            season: Season::Holiday,
            description: "Q4 retail surge".to_string(),
            capacity_increase: 25.0,
            focus_routes: vec!["Chicago -> Atlanta".to_string()],
            pricing_adjustment: 15.0,
        };

        let start = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let applied = template.apply_from(&create_test_request(), start);

        assert_eq!(applied.planning_period.season, Season::Holiday);
        assert_eq!(applied.planning_period.start_date, start);
        assert_eq!(
            applied.planning_period.end_date,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
        assert_eq!(applied.capacity_constraints.max_drivers, 63); // 50 * 1.25
        assert_eq!(applied.capacity_constraints.max_vehicles, 50); // 40 * 1.25
        // Daily miles are not touched by templates
        assert_eq!(applied.capacity_constraints.max_daily_miles, 2500);
    }
}
