// ==========================================
// Seasonal Load Planner - Demand Forecast Model
// ==========================================
// One DemandPattern per (season, month, week-of-month).
// A full forecast is 48 records: four seasons in fixed order,
// three months per season, four weeks per month. Downstream
// aggregates (min/max/average) rely on that ordering contract.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{Season, WeatherImpact};

// ==========================================
// EquipmentRates - average rate per mile by equipment class
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRates {
    pub dry_van: f64,
    pub refrigerated: f64,
    pub flatbed: f64,
    pub specialized: f64,
}

// ==========================================
// PopularRoute - reference corridor scaled for the season
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularRoute {
    pub origin: String,
    pub destination: String,
    /// Expected loads per week on this corridor.
    pub frequency: u32,
    pub avg_rate: f64,
}

// ==========================================
// DemandPattern - one forecast week
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandPattern {
    pub season: Season,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Week of month, 1-4.
    pub week: u8,
    /// Relative demand score centered at 100. Not clamped:
    /// holiday stacking plus jitter may push it outside [0, 200].
    pub demand_index: f64,
    pub equipment_rates: EquipmentRates,
    /// demand_index / 100, exactly.
    pub volume_multiplier: f64,
    pub popular_routes: Vec<PopularRoute>,
    pub weather_impact: WeatherImpact,
    pub holiday_effect: bool,
}

// ==========================================
// DemandStats - aggregates over a forecast series
// ==========================================
/// Average, peak and low demand index over a forecast series.
///
/// An empty series yields the neutral baseline (100) for all three,
/// so capacity math stays closed-form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandStats {
    pub avg: f64,
    pub peak: f64,
    pub low: f64,
}

impl DemandStats {
    pub fn from_patterns(patterns: &[DemandPattern]) -> Self {
        if patterns.is_empty() {
            return Self {
                avg: 100.0,
                peak: 100.0,
                low: 100.0,
            };
        }

        let sum: f64 = patterns.iter().map(|p| p.demand_index).sum();
        let peak = patterns
            .iter()
            .map(|p| p.demand_index)
            .fold(f64::MIN, f64::max);
        let low = patterns
            .iter()
            .map(|p| p.demand_index)
            .fold(f64::MAX, f64::min);

        Self {
            avg: sum / patterns.len() as f64,
            peak,
            low,
        }
    }

    /// Peak demand index divided by 100; scales capacity recommendations.
    pub fn capacity_multiplier(&self) -> f64 {
        self.peak / 100.0
    }

    /// Spread between peak and low demand, the volatility input.
    pub fn spread(&self) -> f64 {
        self.peak - self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Season;

    fn create_test_pattern(demand_index: f64) -> DemandPattern {
        DemandPattern {
            season: Season::Fall,
            month: 9,
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

    #[test]
    fn test_stats_over_series() {
        let patterns = vec![
            create_test_pattern(90.0),
            create_test_pattern(120.0),
            create_test_pattern(150.0),
        ];
        let stats = DemandStats::from_patterns(&patterns);
        assert_eq!(stats.avg, 120.0);
        assert_eq!(stats.peak, 150.0);
        assert_eq!(stats.low, 90.0);
        assert_eq!(stats.capacity_multiplier(), 1.5);
        assert_eq!(stats.spread(), 60.0);
    }

    #[test]
    fn test_empty_series_is_neutral_baseline() {
        let stats = DemandStats::from_patterns(&[]);
        assert_eq!(stats.avg, 100.0);
        assert_eq!(stats.peak, 100.0);
        assert_eq!(stats.low, 100.0);
    }
}
