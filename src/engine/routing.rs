// ==========================================
// Seasonal Load Planner - Route & Pricing Advisor
// ==========================================
// Responsibility: corridor recommendations plus the two-part
// pricing strategy (base adjustment + dynamic multipliers).
// Input: planning request + demand pattern series
// Output: (RouteRecommendations, PricingStrategy)
// ==========================================
// Corridor identity and margins come from the reference table;
// only expected volume is demand-driven.
// ==========================================

use crate::domain::forecast::{DemandPattern, DemandStats};
use crate::domain::reference::{
    PRIORITY_CORRIDORS, WINTER_AVOID_ALTERNATIVE, WINTER_AVOID_CORRIDOR, WINTER_AVOID_REASON,
};
use crate::domain::request::PlanningRequest;
use crate::domain::routes::{
    AvoidRoute, BasePricing, DynamicPricing, PricingStrategy, PriorityRoute, RouteRecommendations,
};

const HIGH_DEMAND_MULTIPLIER: f64 = 1.25;
const LOW_DEMAND_DISCOUNT: f64 = 0.90;
const PEAK_SURCHARGE_HIGH: f64 = 0.20;
const PEAK_SURCHARGE_NORMAL: f64 = 0.10;
const PEAK_SURCHARGE_THRESHOLD: f64 = 120.0;

// ==========================================
// RoutePricingAdvisor
// ==========================================
pub struct RoutePricingAdvisor {
    // Stateless; corridors and multipliers are reference data.
}

impl RoutePricingAdvisor {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // Core method
    // ==========================================

    /// Derive route recommendations and the pricing strategy.
    pub fn advise(
        &self,
        request: &PlanningRequest,
        forecast: &[DemandPattern],
    ) -> (RouteRecommendations, PricingStrategy) {
        let stats = DemandStats::from_patterns(forecast);
        (
            self.route_recommendations(&stats),
            self.pricing_strategy(request, &stats),
        )
    }

    // ==========================================
    // Routes
    // ==========================================

    fn route_recommendations(&self, stats: &DemandStats) -> RouteRecommendations {
        let priority_routes = PRIORITY_CORRIDORS
            .iter()
            .map(|corridor| PriorityRoute {
                origin: corridor.origin.to_string(),
                destination: corridor.destination.to_string(),
                expected_volume: (stats.avg * corridor.volume_factor).round() as i64,
                avg_rate: corridor.avg_rate,
                profit_margin: corridor.profit_margin,
                priority: corridor.priority,
            })
            .collect();

        let avoid_routes = vec![AvoidRoute {
            corridor: WINTER_AVOID_CORRIDOR.to_string(),
            reason: WINTER_AVOID_REASON.to_string(),
            alternative: Some(WINTER_AVOID_ALTERNATIVE.to_string()),
        }];

        RouteRecommendations {
            priority_routes,
            avoid_routes,
        }
    }

    // ==========================================
    // Pricing
    // ==========================================

    fn pricing_strategy(&self, request: &PlanningRequest, stats: &DemandStats) -> PricingStrategy {
        let adjustment_factor = (stats.peak - 100.0) / 100.0;
        let peak_season_surcharge = if stats.peak > PEAK_SURCHARGE_THRESHOLD {
            PEAK_SURCHARGE_HIGH
        } else {
            PEAK_SURCHARGE_NORMAL
        };

        PricingStrategy {
            base_pricing: BasePricing {
                season: request.planning_period.season,
                adjustment_factor,
                reasoning: format!(
                    "Peak demand index of {:.0} supports a {:.0}% base rate adjustment for the {} season",
                    stats.peak,
                    adjustment_factor * 100.0,
                    request.planning_period.season
                ),
            },
            dynamic_pricing: DynamicPricing {
                high_demand_multiplier: HIGH_DEMAND_MULTIPLIER,
                low_demand_discount: LOW_DEMAND_DISCOUNT,
                peak_season_surcharge,
            },
        }
    }
}

impl Default for RoutePricingAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::EquipmentRates;
    use crate::domain::request::{BusinessPriorities, CapacityConstraints, PlanningPeriod};
    use crate::domain::types::{EquipmentType, PriorityTier, Season, WeatherImpact};
    use chrono::NaiveDate;

    fn create_test_pattern(demand_index: f64) -> DemandPattern {
        DemandPattern {
            season: Season::Fall,
            month: 10,
            week: 1,
            demand_index,
            equipment_rates: EquipmentRates {
                dry_van: 2.1,
                refrigerated: 2.8,
                flatbed: 2.4,
                specialized: 3.2,
            },
            volume_multiplier: demand_index / 100.0,
            popular_routes: vec![],
            weather_impact: WeatherImpact::Low,
            holiday_effect: false,
        }
    }

    fn create_test_request(season: Season) -> PlanningRequest {
        PlanningRequest {
            planning_period: PlanningPeriod {
                start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
                season,
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
    fn test_priority_routes_volume_tracks_average_demand() {
        let advisor = RoutePricingAdvisor::new();
        let forecast = vec![create_test_pattern(110.0), create_test_pattern(130.0)];
        let (routes, _) = advisor.advise(&create_test_request(Season::Fall), &forecast);

        assert_eq!(routes.priority_routes.len(), 2);
        // avg 120: 120 * 1.2 = 144, 120 * 1.0 = 120
        assert_eq!(routes.priority_routes[0].expected_volume, 144);
        assert_eq!(routes.priority_routes[1].expected_volume, 120);
        assert_eq!(routes.priority_routes[0].priority, PriorityTier::High);
        assert_eq!(routes.priority_routes[0].profit_margin, 0.18);
        assert_eq!(routes.priority_routes[1].priority, PriorityTier::Medium);
        assert_eq!(routes.priority_routes[1].profit_margin, 0.15);
    }

    #[test]
    fn test_single_winter_avoid_entry_with_alternative() {
        let advisor = RoutePricingAdvisor::new();
        let forecast = vec![create_test_pattern(100.0)];
        let (routes, _) = advisor.advise(&create_test_request(Season::Winter), &forecast);

        assert_eq!(routes.avoid_routes.len(), 1);
        let avoid = &routes.avoid_routes[0];
        assert!(avoid.corridor.contains("Northern"));
        assert!(avoid.alternative.as_deref().unwrap().contains("Southern"));
    }

    #[test]
    fn test_base_adjustment_factor_from_peak() {
        let advisor = RoutePricingAdvisor::new();
        let forecast = vec![create_test_pattern(100.0), create_test_pattern(135.0)];
        let (_, pricing) = advisor.advise(&create_test_request(Season::Fall), &forecast);

        assert!((pricing.base_pricing.adjustment_factor - 0.35).abs() < 1e-9);
        assert_eq!(pricing.base_pricing.season, Season::Fall);
        assert!(pricing.base_pricing.reasoning.contains("135"));
    }

    #[test]
    fn test_dynamic_pricing_surcharge_threshold() {
        let advisor = RoutePricingAdvisor::new();

        let hot = vec![create_test_pattern(125.0)];
        let (_, pricing) = advisor.advise(&create_test_request(Season::Fall), &hot);
        assert_eq!(pricing.dynamic_pricing.peak_season_surcharge, 0.20);
        assert_eq!(pricing.dynamic_pricing.high_demand_multiplier, 1.25);
        assert_eq!(pricing.dynamic_pricing.low_demand_discount, 0.90);

        let mild = vec![create_test_pattern(115.0)];
        let (_, pricing) = advisor.advise(&create_test_request(Season::Fall), &mild);
        assert_eq!(pricing.dynamic_pricing.peak_season_surcharge, 0.10);
    }
}
