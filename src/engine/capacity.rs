// ==========================================
// Seasonal Load Planner - Capacity Optimizer
// ==========================================
// Responsibility: scale current capacity ceilings to the
// forecast peak and derive staffing escalation.
// Input: capacity constraints + demand pattern series
// Output: CapacityOptimization
// ==========================================
// Every adjustment carries an explicit reason.
// ==========================================

use crate::domain::capacity::{
    CapacityAdjustment, CapacityOptimization, RecommendedCapacity, SeasonalStaffing,
    UtilizationForecast,
};
use crate::domain::forecast::{DemandPattern, DemandStats};
use crate::domain::request::CapacityConstraints;
use crate::domain::types::{AdjustmentAction, ResourceType};

// Demand floors for graduated staffing escalation.
const TEMP_DRIVER_FLOOR: f64 = 100.0;
const CONTRACT_CARRIER_FLOOR: f64 = 120.0;
const EQUIPMENT_LEASING_FLOOR: f64 = 110.0;

// ==========================================
// CapacityOptimizer
// ==========================================
pub struct CapacityOptimizer {
    // Stateless; reference floors are compile-time constants.
}

impl CapacityOptimizer {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // Core method
    // ==========================================

    /// Derive the capacity recommendation for a forecast series.
    pub fn optimize(
        &self,
        constraints: &CapacityConstraints,
        forecast: &[DemandPattern],
    ) -> CapacityOptimization {
        let stats = DemandStats::from_patterns(forecast);
        let multiplier = stats.capacity_multiplier();

        CapacityOptimization {
            recommended_capacity: self.scale_capacity(constraints, multiplier),
            utilization_forecast: UtilizationForecast {
                expected_utilization: stats.avg.round() as i64,
                peak_utilization: stats.peak.round() as i64,
                low_utilization: stats.low.round() as i64,
            },
            capacity_adjustments: vec![self.driver_adjustment(stats.peak)],
            seasonal_staffing: self.staffing_needs(stats.peak),
        }
    }

    // ==========================================
    // Derivations
    // ==========================================

    /// Scale each ceiling by the peak multiplier, rounding up so the
    /// recommendation never undercuts the constraint when peak >= 100.
    fn scale_capacity(
        &self,
        constraints: &CapacityConstraints,
        multiplier: f64,
    ) -> RecommendedCapacity {
        RecommendedCapacity {
            drivers: (f64::from(constraints.max_drivers) * multiplier).ceil() as u32,
            vehicles: (f64::from(constraints.max_vehicles) * multiplier).ceil() as u32,
            daily_miles: (f64::from(constraints.max_daily_miles) * multiplier).ceil() as u32,
        }
    }

    /// The single always-present driver adjustment entry.
    fn driver_adjustment(&self, peak: f64) -> CapacityAdjustment {
        let action = if peak > 120.0 {
            AdjustmentAction::Increase
        } else {
            AdjustmentAction::Maintain
        };
        let adjustment_percentage = ((peak - 100.0) * 0.5).max(0.0);

        CapacityAdjustment {
            action,
            resource_type: ResourceType::Drivers,
            adjustment_percentage,
            reasoning: format!(
                "Peak demand index of {peak:.0} drives a {} posture on driver capacity",
                action
            ),
        }
    }

    /// Graduated staffing escalation. The three floors are independent:
    /// temp drivers from 100, equipment leasing from 110, contract
    /// carriers from 120.
    fn staffing_needs(&self, peak: f64) -> SeasonalStaffing {
        SeasonalStaffing {
            temporary_drivers: escalation(peak, TEMP_DRIVER_FLOOR, 0.1),
            contract_carriers: escalation(peak, CONTRACT_CARRIER_FLOOR, 0.05),
            equipment_leasing: escalation(peak, EQUIPMENT_LEASING_FLOOR, 0.08),
        }
    }
}

impl Default for CapacityOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// ceil((peak - floor) * factor), floored at zero.
fn escalation(peak: f64, floor: f64, factor: f64) -> u32 {
    if peak <= floor {
        return 0;
    }
    ((peak - floor) * factor).ceil() as u32
}
