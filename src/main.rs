// ==========================================
// Seasonal Load Planner - CLI Entry Point
// ==========================================
// The calling boundary: owns the feature flag, loads a JSON
// planning request (or falls back to a sample), and prints the
// assembled plan as JSON. The core is never invoked while the
// feature flag is off.
// ==========================================

use std::env;
use std::fs;

use anyhow::Context;
use chrono::NaiveDate;

use seasonal_load_planner::domain::request::{
    BusinessPriorities, CapacityConstraints, PlanningPeriod,
};
use seasonal_load_planner::{
    logging, EquipmentType, PlanningApi, PlanningError, PlanningRequest, Season,
};

const FEATURE_FLAG: &str = "ENABLE_SEASONAL_LOAD_PLANNING";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", seasonal_load_planner::APP_NAME);
    tracing::info!("version: {}", seasonal_load_planner::VERSION);
    tracing::info!("==================================================");

    if !feature_enabled() {
        tracing::error!("{FEATURE_FLAG} is off; refusing to run the planner");
        return Err(PlanningError::FeatureDisabled.into());
    }

    let request = match env::args().nth(1) {
        Some(path) => {
            tracing::info!("loading planning request from {path}");
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("cannot read request file {path}"))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("cannot parse planning request in {path}"))?
        }
        None => {
            tracing::info!("no request file given, using the sample fall request");
            sample_request()
        }
    };

    let api = PlanningApi::with_defaults();
    let plan = api.create_seasonal_plan(&request).await?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

/// Feature flag check. On unless explicitly disabled.
fn feature_enabled() -> bool {
    match env::var(FEATURE_FLAG) {
        Ok(value) => !matches!(value.trim(), "false" | "0" | "off"),
        Err(_) => true,
    }
}

/// Sample fall-quarter request with the default fleet profile.
fn sample_request() -> PlanningRequest {
    PlanningRequest {
        planning_period: PlanningPeriod {
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2025, 11, 30).expect("valid date"),
            season: Season::Fall,
        },
        target_regions: vec!["US-Midwest".to_string(), "US-Southeast".to_string()],
        equipment_types: vec![EquipmentType::DryVan, EquipmentType::Refrigerated],
        commodity_types: vec!["retail".to_string(), "food".to_string()],
        capacity_constraints: CapacityConstraints {
            max_drivers: 50,
            max_vehicles: 45,
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
