// ==========================================
// Seasonal Load Planner - Trend Repository
// ==========================================
// Read-only source for historical seasonal trends and the canned
// planning templates. Currently a stub: trends are synthesized
// with randomized indices and inputs are echoed without branching.
// ==========================================

use rand::Rng;

use crate::domain::reference::planning_templates;
use crate::domain::trend::{PlanningTemplate, SeasonalTrend};

/// Quarter labels, always returned in this order.
const QUARTERS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];

// ==========================================
// TrendRepository
// ==========================================
pub struct TrendRepository {
    // Stub backend; no connection state.
}

impl TrendRepository {
    pub fn new() -> Self {
        Self {}
    }

    /// Historical quarterly trends for the given regions.
    ///
    /// Always four entries, Q1..Q4. Regions and years are echoed into
    /// each record; the synthesized indices do not branch on them.
    pub fn seasonal_trends(&self, regions: &[String], years: u32) -> Vec<SeasonalTrend> {
        let mut rng = rand::thread_rng();

        QUARTERS
            .iter()
            .map(|quarter| SeasonalTrend {
                period: (*quarter).to_string(),
                regions: regions.to_vec(),
                years_analyzed: years,
                demand_index: rng.gen_range(90.0..=135.0),
                avg_rate_per_mile: rng.gen_range(2.0..=3.0),
                load_volume: rng.gen_range(800..=1600),
                year_over_year_change: rng.gen_range(-5.0..=12.0),
            })
            .collect()
    }

    /// The four canned planning templates.
    pub fn planning_templates(&self) -> Vec<PlanningTemplate> {
        planning_templates()
    }
}

impl Default for TrendRepository {
    fn default() -> Self {
        Self::new()
    }
}
