// ==========================================
// Seasonal Load Planner - Reference Tables
// ==========================================
// Immutable market reference data: rate card, corridor lists,
// season calendar, planning templates, contingency scenarios.
// Scoring functions consume these tables instead of inlining
// literals, so they stay testable in isolation.
// ==========================================

use crate::domain::plan::ContingencyPlan;
use crate::domain::trend::PlanningTemplate;
use crate::domain::types::{PriorityTier, Season};

// ==========================================
// Season calendar
// ==========================================

/// Forecast seasons in fixed order with their calendar months.
/// The forecast ordering contract starts here.
pub const SEASON_MONTHS: [(Season, [u32; 3]); 4] = [
    (Season::Spring, [3, 4, 5]),
    (Season::Summer, [6, 7, 8]),
    (Season::Fall, [9, 10, 11]),
    (Season::Winter, [12, 1, 2]),
];

/// Season-fixed demand offset on the 100-centered index.
pub fn seasonal_base_offset(season: Season) -> f64 {
    match season {
        Season::Spring => 5.0,
        Season::Summer => 10.0,
        Season::Fall => 20.0,
        Season::Winter => -5.0,
        // Holiday/Custom never appear in the generated series;
        // treat them as neutral if asked.
        Season::Holiday | Season::Custom => 0.0,
    }
}

// ==========================================
// Equipment rate card
// ==========================================

/// Base rate per mile and demand sensitivity for one equipment class.
/// rate = base + (demand_index - 100) * sensitivity
#[derive(Debug, Clone, Copy)]
pub struct RateCardEntry {
    pub base_rate: f64,
    pub sensitivity: f64,
}

pub const DRY_VAN_RATES: RateCardEntry = RateCardEntry {
    base_rate: 2.10,
    sensitivity: 0.01,
};
pub const REFRIGERATED_RATES: RateCardEntry = RateCardEntry {
    base_rate: 2.80,
    sensitivity: 0.015,
};
pub const FLATBED_RATES: RateCardEntry = RateCardEntry {
    base_rate: 2.40,
    sensitivity: 0.012,
};
pub const SPECIALIZED_RATES: RateCardEntry = RateCardEntry {
    base_rate: 3.20,
    sensitivity: 0.02,
};

impl RateCardEntry {
    /// Demand-adjusted rate per mile.
    pub fn rate_at(&self, demand_index: f64) -> f64 {
        self.base_rate + (demand_index - 100.0) * self.sensitivity
    }
}

// ==========================================
// Reference corridors
// ==========================================

/// High-volume corridor tracked in every forecast week.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceCorridor {
    pub origin: &'static str,
    pub destination: &'static str,
    /// Loads per week at baseline demand.
    pub base_frequency: u32,
    pub base_rate: f64,
}

pub const POPULAR_CORRIDORS: [ReferenceCorridor; 3] = [
    ReferenceCorridor {
        origin: "Chicago, IL",
        destination: "Atlanta, GA",
        base_frequency: 24,
        base_rate: 2.35,
    },
    ReferenceCorridor {
        origin: "Dallas, TX",
        destination: "Los Angeles, CA",
        base_frequency: 18,
        base_rate: 2.15,
    },
    ReferenceCorridor {
        origin: "Newark, NJ",
        destination: "Chicago, IL",
        base_frequency: 15,
        base_rate: 2.55,
    },
];

/// Corridor promoted by the route advisor.
#[derive(Debug, Clone, Copy)]
pub struct PriorityCorridor {
    pub origin: &'static str,
    pub destination: &'static str,
    /// Scale applied to the average demand index to size volume.
    pub volume_factor: f64,
    pub avg_rate: f64,
    pub profit_margin: f64,
    pub priority: PriorityTier,
}

pub const PRIORITY_CORRIDORS: [PriorityCorridor; 2] = [
    PriorityCorridor {
        origin: "Chicago, IL",
        destination: "Atlanta, GA",
        volume_factor: 1.2,
        avg_rate: 2.45,
        profit_margin: 0.18,
        priority: PriorityTier::High,
    },
    PriorityCorridor {
        origin: "Dallas, TX",
        destination: "Memphis, TN",
        volume_factor: 1.0,
        avg_rate: 2.25,
        profit_margin: 0.15,
        priority: PriorityTier::Medium,
    },
];

pub const WINTER_AVOID_CORRIDOR: &str = "Northern transcontinental (I-90/I-94)";
pub const WINTER_AVOID_REASON: &str =
    "High closure and delay risk across the northern corridor during winter storms";
pub const WINTER_AVOID_ALTERNATIVE: &str = "Southern corridor via I-40/I-10";

// ==========================================
// Planning templates
// ==========================================

/// The four canned templates, always returned in this order.
pub fn planning_templates() -> Vec<PlanningTemplate> {
    vec![
        PlanningTemplate {
            id: "retail-peak".to_string(),
            name: "Retail Peak Season".to_string(),
            season: Season::Fall,
            description: "Q4 retail surge: big-box replenishment and e-commerce overflow"
                .to_string(),
            capacity_increase: 25.0,
            focus_routes: vec![
                "Chicago, IL -> Atlanta, GA".to_string(),
                "Newark, NJ -> Chicago, IL".to_string(),
            ],
            pricing_adjustment: 15.0,
        },
        PlanningTemplate {
            id: "agricultural".to_string(),
            name: "Agricultural Harvest".to_string(),
            season: Season::Summer,
            description: "Harvest season produce and grain moves out of the Midwest".to_string(),
            capacity_increase: 15.0,
            focus_routes: vec![
                "Des Moines, IA -> Chicago, IL".to_string(),
                "Fresno, CA -> Dallas, TX".to_string(),
            ],
            pricing_adjustment: 10.0,
        },
        PlanningTemplate {
            id: "construction".to_string(),
            name: "Construction Season".to_string(),
            season: Season::Spring,
            description: "Spring construction ramp: flatbed materials and equipment".to_string(),
            capacity_increase: 10.0,
            focus_routes: vec![
                "Houston, TX -> Denver, CO".to_string(),
                "Pittsburgh, PA -> Nashville, TN".to_string(),
            ],
            pricing_adjustment: 8.0,
        },
        PlanningTemplate {
            id: "holiday-rush".to_string(),
            name: "Holiday Rush".to_string(),
            season: Season::Holiday,
            description: "November-December parcel and retail final-mile feeder surge".to_string(),
            capacity_increase: 35.0,
            focus_routes: vec![
                "Memphis, TN -> Louisville, KY".to_string(),
                "Ontario, CA -> Phoenix, AZ".to_string(),
            ],
            pricing_adjustment: 20.0,
        },
    ]
}

// ==========================================
// Contingency scenarios
// ==========================================

/// Named contingency plans attached to every seasonal plan.
pub fn contingency_plans() -> Vec<ContingencyPlan> {
    vec![
        ContingencyPlan {
            scenario: "Demand surge beyond forecast".to_string(),
            trigger: "Weekly demand index exceeds forecast peak by 15 points".to_string(),
            actions: vec![
                "Activate contract carrier agreements".to_string(),
                "Raise spot exposure on priority corridors".to_string(),
                "Apply the high-demand pricing multiplier".to_string(),
            ],
        },
        ContingencyPlan {
            scenario: "Capacity shortfall".to_string(),
            trigger: "Driver availability drops below 90% of recommended capacity".to_string(),
            actions: vec![
                "Release temporary driver requisitions".to_string(),
                "Shift low-margin freight to partner carriers".to_string(),
                "Protect committed volume on high-priority lanes first".to_string(),
            ],
        },
        ContingencyPlan {
            scenario: "Severe weather disruption".to_string(),
            trigger: "Multi-day closure on a priority corridor".to_string(),
            actions: vec![
                "Reroute via the designated southern alternative".to_string(),
                "Notify affected customers with revised ETAs".to_string(),
                "Rebalance equipment once the corridor reopens".to_string(),
            ],
        },
    ]
}
