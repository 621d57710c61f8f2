// ==========================================
// Seasonal Load Planner - Narrative Analysis Seam
// ==========================================
// The planner defines the trait; whatever text-generation backend
// a deployment chooses implements it. The numeric core never
// depends on the backend: any failure or missing field falls back
// to the engine-owned defaults below, so narrative output stays
// advisory and non-authoritative.
// ==========================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PlannerConfig;
use crate::domain::types::Season;

// ==========================================
// NarrativeInsight - loosely typed analysis result
// ==========================================

/// Result of a narrative analysis call. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NarrativeInsight {
    /// Confidence percentage, 0-100.
    pub confidence: Option<f64>,
    pub reasoning: Option<String>,
    pub recommendations: Option<Vec<String>>,
    pub risk_factors: Option<Vec<String>>,
}

// ==========================================
// NarrativeAnalyzer trait
// ==========================================

/// Asynchronous narrative-analysis collaborator.
///
/// The planner awaits exactly one call per plan and applies no
/// timeout or retry of its own; errors are converted into default
/// substitution by the caller, never propagated.
#[async_trait]
pub trait NarrativeAnalyzer: Send + Sync {
    /// Analyze `context` for the given topic and return free-text
    /// reasoning, recommendations and risk factors.
    async fn analyze(&self, topic: &str, context: &Value) -> anyhow::Result<NarrativeInsight>;
}

// ==========================================
// NoOpNarrativeAnalyzer
// ==========================================

/// Analyzer that supplies nothing; the planner fills every field
/// from its defaults. Useful for tests and offline deployments.
pub struct NoOpNarrativeAnalyzer;

#[async_trait]
impl NarrativeAnalyzer for NoOpNarrativeAnalyzer {
    async fn analyze(&self, _topic: &str, _context: &Value) -> anyhow::Result<NarrativeInsight> {
        Ok(NarrativeInsight::default())
    }
}

// ==========================================
// Engine-owned defaults
// ==========================================

pub fn default_reasoning(season: Season) -> String {
    format!(
        "Capacity and pricing recommendations for the {season} season follow the generated \
         demand pattern series; staffing escalation tracks how far peak demand runs above the \
         100-point baseline."
    )
}

pub fn default_recommendations() -> Vec<String> {
    vec![
        "Lock in contract carrier capacity before the peak window opens".to_string(),
        "Concentrate owned capacity on the high-priority corridors".to_string(),
        "Review pricing weekly against the realized demand index".to_string(),
    ]
}

pub fn default_risk_factors() -> Vec<String> {
    vec![
        "Weather disruption on northern corridors".to_string(),
        "Spot-market rate compression if demand undershoots the forecast".to_string(),
        "Driver availability tightening during holiday weeks".to_string(),
    ]
}

// ==========================================
// Default substitution
// ==========================================

/// Fill every absent or empty field of an insight with the
/// engine-owned default for that field.
pub fn with_defaults(
    insight: NarrativeInsight,
    season: Season,
    config: &PlannerConfig,
) -> ResolvedNarrative {
    ResolvedNarrative {
        confidence: insight.confidence.unwrap_or(config.default_confidence),
        reasoning: match insight.reasoning {
            Some(text) if !text.trim().is_empty() => text,
            _ => default_reasoning(season),
        },
        recommendations: match insight.recommendations {
            Some(items) if !items.is_empty() => items,
            _ => default_recommendations(),
        },
        risk_factors: match insight.risk_factors {
            Some(items) if !items.is_empty() => items,
            _ => default_risk_factors(),
        },
    }
}

/// Narrative fields after default substitution; nothing optional left.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNarrative {
    pub confidence: f64,
    pub reasoning: String,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
}
