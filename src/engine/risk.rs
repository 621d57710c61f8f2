// ==========================================
// Seasonal Load Planner - Risk Evaluator
// ==========================================
// Responsibility: four-dimension risk assessment plus the
// summary KPI block for the planning window.
// Input: planning request + demand pattern series
// Output: (RiskAssessment, KeyMetrics)
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::forecast::{DemandPattern, DemandStats};
use crate::domain::request::PlanningRequest;
use crate::domain::risk::{KeyMetrics, RiskAssessment};
use crate::domain::types::{RiskLevel, Season};

const VOLATILITY_SPREAD_THRESHOLD: f64 = 40.0;

// ==========================================
// RiskEvaluator
// ==========================================
pub struct RiskEvaluator {
    config: PlannerConfig,
}

impl RiskEvaluator {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    // ==========================================
    // Core method
    // ==========================================

    /// Assess plan risk and compute the KPI block over one forecast.
    pub fn evaluate(
        &self,
        request: &PlanningRequest,
        forecast: &[DemandPattern],
    ) -> (RiskAssessment, KeyMetrics) {
        let stats = DemandStats::from_patterns(forecast);
        (
            self.assess_risk(request, &stats),
            self.key_metrics(forecast, &stats),
        )
    }

    // ==========================================
    // Risk dimensions
    // ==========================================

    /// Weather follows the requested season, volatility follows the
    /// peak-to-low spread, competitive risk is held at medium. Overall
    /// is high when either variable dimension is high, otherwise
    /// medium; "low" is unreachable under this rule set and the tests
    /// pin that behavior rather than fix it.
    fn assess_risk(&self, request: &PlanningRequest, stats: &DemandStats) -> RiskAssessment {
        let weather_risk = if request.planning_period.season == Season::Winter {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        };

        let demand_volatility = if stats.spread() > VOLATILITY_SPREAD_THRESHOLD {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        };

        let competitive_risk = RiskLevel::Medium;

        let overall_risk = if weather_risk == RiskLevel::High || demand_volatility == RiskLevel::High
        {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        };

        RiskAssessment {
            weather_risk,
            demand_volatility,
            competitive_risk,
            overall_risk,
        }
    }

    // ==========================================
    // KPI block
    // ==========================================

    fn key_metrics(&self, forecast: &[DemandPattern], stats: &DemandStats) -> KeyMetrics {
        let avg_rate = average_dry_van_rate(forecast);
        let expected_load_count = (stats.avg * 10.0).round() as i64;
        let projected_revenue =
            (expected_load_count as f64 * avg_rate * self.config.avg_miles_per_load).round() as i64;
        let projected_profit = (projected_revenue as f64 * self.config.profit_margin).round() as i64;

        KeyMetrics {
            projected_revenue,
            projected_profit,
            expected_load_count,
            avg_revenue_per_mile: avg_rate,
            driver_utilization_rate: stats.avg.min(self.config.utilization_cap),
            fuel_efficiency_gain: self.config.fuel_efficiency_gain,
        }
    }
}

/// Mean dry-van rate across the series; baseline rate for an empty one.
fn average_dry_van_rate(forecast: &[DemandPattern]) -> f64 {
    if forecast.is_empty() {
        return crate::domain::reference::DRY_VAN_RATES.base_rate;
    }
    forecast
        .iter()
        .map(|p| p.equipment_rates.dry_van)
        .sum::<f64>()
        / forecast.len() as f64
}
