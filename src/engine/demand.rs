// ==========================================
// Seasonal Load Planner - Demand Forecast Engine
// ==========================================
// Responsibility: generate the 48-week demand pattern series.
// Input: planning request
// Output: Vec<DemandPattern>, season -> month -> week order
// ==========================================
// The series always covers all four calendar seasons regardless
// of the requested season; the request influences downstream
// consumers, not the row count.
// ==========================================

use rand::Rng;

use crate::config::PlannerConfig;
use crate::domain::forecast::{DemandPattern, EquipmentRates, PopularRoute};
use crate::domain::reference::{
    seasonal_base_offset, DRY_VAN_RATES, FLATBED_RATES, POPULAR_CORRIDORS, REFRIGERATED_RATES,
    SEASON_MONTHS, SPECIALIZED_RATES,
};
use crate::domain::request::PlanningRequest;
use crate::domain::types::{Season, WeatherImpact};

// ==========================================
// DemandForecastEngine
// ==========================================
pub struct DemandForecastEngine {
    config: PlannerConfig,
}

impl DemandForecastEngine {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    // ==========================================
    // Core method
    // ==========================================

    /// Generate the full forecast series: 4 seasons x 3 months x 4 weeks.
    ///
    /// Ordering is a contract: downstream min/max/average aggregates and
    /// the UI's week axis both rely on it.
    pub fn generate_forecast(&self, _request: &PlanningRequest) -> Vec<DemandPattern> {
        let mut rng = rand::thread_rng();
        let mut patterns = Vec::with_capacity(48);

        for (season, months) in SEASON_MONTHS {
            for month in months {
                for week in 1..=4u8 {
                    let base = seasonal_base_offset(season);
                    let holiday = holiday_boost(month, week);
                    let jitter = if self.config.jitter_range > 0.0 {
                        rng.gen_range(-self.config.jitter_range..=self.config.jitter_range)
                    } else {
                        0.0
                    };
                    // No clamping: holiday stacking plus jitter may leave
                    // the sane [0, 200] band and consumers accept that.
                    let demand_index = 100.0 + base + holiday + jitter;

                    patterns.push(DemandPattern {
                        season,
                        month,
                        week,
                        demand_index,
                        equipment_rates: equipment_rates_at(demand_index),
                        volume_multiplier: demand_index / 100.0,
                        popular_routes: self.popular_routes_for(season),
                        weather_impact: weather_impact_for(month),
                        holiday_effect: holiday_effect_for(month, week),
                    });
                }
            }
        }

        patterns
    }

    // ==========================================
    // Reference corridor scaling
    // ==========================================

    /// Popular corridors with rate and frequency scaled for the season.
    fn popular_routes_for(&self, season: Season) -> Vec<PopularRoute> {
        let multiplier = self.season_multiplier(season);
        POPULAR_CORRIDORS
            .iter()
            .map(|corridor| PopularRoute {
                origin: corridor.origin.to_string(),
                destination: corridor.destination.to_string(),
                frequency: (f64::from(corridor.base_frequency) * multiplier).round() as u32,
                avg_rate: corridor.base_rate * multiplier,
            })
            .collect()
    }

    fn season_multiplier(&self, season: Season) -> f64 {
        match season {
            Season::Fall => self.config.fall_rate_multiplier,
            Season::Summer => self.config.summer_rate_multiplier,
            _ => 1.0,
        }
    }
}

// ==========================================
// Week-level rules
// ==========================================

/// Holiday demand stacked on the seasonal base. December from week 2
/// and November from week 3; both additive with the seasonal offset.
fn holiday_boost(month: u32, week: u8) -> f64 {
    let mut boost = 0.0;
    if month == 12 && week >= 2 {
        boost += 30.0;
    }
    if month == 11 && week >= 3 {
        boost += 25.0;
    }
    boost
}

/// Demand-adjusted rate card for one week.
fn equipment_rates_at(demand_index: f64) -> EquipmentRates {
    EquipmentRates {
        dry_van: DRY_VAN_RATES.rate_at(demand_index),
        refrigerated: REFRIGERATED_RATES.rate_at(demand_index),
        flatbed: FLATBED_RATES.rate_at(demand_index),
        specialized: SPECIALIZED_RATES.rate_at(demand_index),
    }
}

/// High in meteorological winter, medium in mid-summer, low otherwise.
fn weather_impact_for(month: u32) -> WeatherImpact {
    match month {
        12 | 1 | 2 => WeatherImpact::High,
        6 | 7 | 8 => WeatherImpact::Medium,
        _ => WeatherImpact::Low,
    }
}

/// Thanksgiving week, the Christmas run-up, and the July 4th week.
fn holiday_effect_for(month: u32, week: u8) -> bool {
    matches!((month, week), (11, 4) | (12, 3) | (12, 4) | (7, 1))
}
