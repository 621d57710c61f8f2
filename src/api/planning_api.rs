// ==========================================
// Seasonal Load Planner - Planning API
// ==========================================
// Responsibility: plan assembly and the read paths for trends
// and templates. Stateless aside from its injected collaborator;
// construct one per request or share freely, there is no hidden
// cross-request state.
// ==========================================
// Flow: forecast once -> capacity / routing / risk consume the
// same series independently -> narrative analysis (with default
// substitution) -> assemble the immutable SeasonalLoadPlan.
// ==========================================

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::analysis::{self, NarrativeAnalyzer, NarrativeInsight, NoOpNarrativeAnalyzer};
use crate::api::error::PlanningResult;
use crate::api::validator::validate_request;
use crate::config::PlannerConfig;
use crate::domain::capacity::CapacityOptimization;
use crate::domain::forecast::{DemandPattern, DemandStats};
use crate::domain::plan::{PlanPeriodSummary, SeasonalLoadPlan};
use crate::domain::reference::contingency_plans;
use crate::domain::request::{CapacityConstraints, PlanningRequest};
use crate::domain::trend::{PlanningTemplate, SeasonalTrend};
use crate::domain::types::AdjustmentAction;
use crate::engine::{CapacityOptimizer, DemandForecastEngine, RiskEvaluator, RoutePricingAdvisor};
use crate::repository::TrendRepository;

const ANALYSIS_TOPIC: &str = "seasonal-load-planning";

// ==========================================
// PlanningApi
// ==========================================
pub struct PlanningApi {
    config: PlannerConfig,
    demand_engine: DemandForecastEngine,
    capacity_optimizer: CapacityOptimizer,
    route_advisor: RoutePricingAdvisor,
    risk_evaluator: RiskEvaluator,
    trend_repo: TrendRepository,
    analyzer: Arc<dyn NarrativeAnalyzer>,
}

impl PlanningApi {
    pub fn new(config: PlannerConfig, analyzer: Arc<dyn NarrativeAnalyzer>) -> Self {
        Self {
            config,
            demand_engine: DemandForecastEngine::new(config),
            capacity_optimizer: CapacityOptimizer::new(),
            route_advisor: RoutePricingAdvisor::new(),
            risk_evaluator: RiskEvaluator::new(config),
            trend_repo: TrendRepository::new(),
            analyzer,
        }
    }

    /// Default configuration with no narrative backend.
    pub fn with_defaults() -> Self {
        Self::new(PlannerConfig::default(), Arc::new(NoOpNarrativeAnalyzer))
    }

    // ==========================================
    // Plan creation
    // ==========================================

    /// Create a complete seasonal load plan for one request.
    ///
    /// Fails only on a malformed request. A failing narrative
    /// collaborator degrades to default text; the numeric results
    /// are the primary value of the plan and remain valid.
    pub async fn create_seasonal_plan(
        &self,
        request: &PlanningRequest,
    ) -> PlanningResult<SeasonalLoadPlan> {
        validate_request(request)?;

        let season = request.planning_period.season;
        tracing::info!(
            season = %season,
            regions = request.target_regions.len(),
            "creating seasonal load plan"
        );

        let forecast = self.demand_engine.generate_forecast(request);
        let stats = DemandStats::from_patterns(&forecast);

        let capacity_optimization = self
            .capacity_optimizer
            .optimize(&request.capacity_constraints, &forecast);
        let (route_recommendations, pricing_strategy) =
            self.route_advisor.advise(request, &forecast);
        let (risk_assessment, key_metrics) = self.risk_evaluator.evaluate(request, &forecast);

        let insight = self.run_narrative_analysis(request, &stats).await;
        let narrative = analysis::with_defaults(insight, season, &self.config);

        let action_items = self.build_action_items(request, &capacity_optimization);
        let total_weeks = request.total_weeks();

        tracing::info!(
            total_weeks,
            peak = stats.peak,
            overall_risk = %risk_assessment.overall_risk,
            "seasonal load plan assembled"
        );

        Ok(SeasonalLoadPlan {
            plan_id: Uuid::new_v4().to_string(),
            request: request.clone(),
            confidence: narrative.confidence,
            reasoning: narrative.reasoning,
            recommendations: narrative.recommendations,
            risk_factors: narrative.risk_factors,
            planning_period: PlanPeriodSummary {
                start_date: request.planning_period.start_date,
                end_date: request.planning_period.end_date,
                season,
                total_weeks,
            },
            demand_forecast: forecast,
            capacity_optimization,
            route_recommendations,
            pricing_strategy,
            risk_assessment,
            key_metrics,
            action_items,
            contingency_plans: contingency_plans(),
            created_at: Utc::now().naive_utc(),
        })
    }

    // ==========================================
    // Independent read paths
    // ==========================================

    /// Optimize capacity for an externally supplied forecast series.
    pub fn optimize_capacity(
        &self,
        constraints: &CapacityConstraints,
        forecast: &[DemandPattern],
    ) -> CapacityOptimization {
        self.capacity_optimizer.optimize(constraints, forecast)
    }

    /// Historical quarterly trends; always four entries, Q1..Q4.
    pub fn get_seasonal_trends(&self, regions: &[String], years: u32) -> Vec<SeasonalTrend> {
        self.trend_repo.seasonal_trends(regions, years)
    }

    /// The four canned planning templates.
    pub fn get_planning_templates(&self) -> Vec<PlanningTemplate> {
        self.trend_repo.planning_templates()
    }

    // ==========================================
    // Narrative analysis
    // ==========================================

    /// One collaborator call per plan; no timeout, no retry. A failure
    /// is logged and degrades to an empty insight, which the caller
    /// resolves against the engine-owned defaults.
    async fn run_narrative_analysis(
        &self,
        request: &PlanningRequest,
        stats: &DemandStats,
    ) -> NarrativeInsight {
        let context = json!({
            "season": request.planning_period.season,
            "targetRegions": request.target_regions,
            "equipmentTypes": request.equipment_types,
            "commodityTypes": request.commodity_types,
            "avgDemandIndex": stats.avg,
            "peakDemandIndex": stats.peak,
            "lowDemandIndex": stats.low,
        });

        match self.analyzer.analyze(ANALYSIS_TOPIC, &context).await {
            Ok(insight) => insight,
            Err(err) => {
                tracing::warn!(error = %err, "narrative analysis unavailable, using defaults");
                NarrativeInsight::default()
            }
        }
    }

    // ==========================================
    // Action items
    // ==========================================

    /// Concrete follow-ups derived from the computed results.
    fn build_action_items(
        &self,
        request: &PlanningRequest,
        capacity: &CapacityOptimization,
    ) -> Vec<String> {
        let mut items = Vec::new();

        let recommended = capacity.recommended_capacity;
        let current = request.capacity_constraints;
        if recommended.drivers > current.max_drivers {
            items.push(format!(
                "Secure {} additional drivers ahead of the peak window ({} -> {})",
                recommended.drivers - current.max_drivers,
                current.max_drivers,
                recommended.drivers
            ));
        }
        if recommended.vehicles > current.max_vehicles {
            items.push(format!(
                "Expand the fleet to {} vehicles for the planning window",
                recommended.vehicles
            ));
        }

        let staffing = capacity.seasonal_staffing;
        if staffing.contract_carriers > 0 {
            items.push(format!(
                "Pre-negotiate {} contract carrier agreements",
                staffing.contract_carriers
            ));
        }
        if staffing.equipment_leasing > 0 {
            items.push(format!(
                "Arrange short-term leases for {} trailers",
                staffing.equipment_leasing
            ));
        }

        if let Some(adjustment) = capacity.capacity_adjustments.first() {
            if adjustment.action == AdjustmentAction::Increase {
                items.push(
                    "Brief dispatch on the capacity-increase posture for driver scheduling"
                        .to_string(),
                );
            }
        }

        items.push(format!(
            "Re-run the {} plan after the first two weeks of realized demand",
            request.planning_period.season
        ));

        items
    }
}
