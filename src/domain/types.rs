// ==========================================
// Seasonal Load Planner - Domain Types
// ==========================================
// Shared enumerations used across the forecast,
// capacity, pricing and risk models.
// Serialized forms match the JSON consumed by the web UI.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Season
// ==========================================
// The forecast always walks the four calendar seasons;
// Holiday and Custom are request labels only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    Holiday,
    Custom,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Fall => write!(f, "fall"),
            Season::Winter => write!(f, "winter"),
            Season::Holiday => write!(f, "holiday"),
            Season::Custom => write!(f, "custom"),
        }
    }
}

// ==========================================
// Weather Impact
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherImpact {
    Low,
    Medium,
    High,
}

impl fmt::Display for WeatherImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherImpact::Low => write!(f, "low"),
            WeatherImpact::Medium => write!(f, "medium"),
            WeatherImpact::High => write!(f, "high"),
        }
    }
}

// ==========================================
// Risk Level
// ==========================================
// Used for all four risk dimensions of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

// ==========================================
// Equipment Type
// ==========================================
// The four equipment classes carried by the rate card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentType {
    DryVan,
    Refrigerated,
    Flatbed,
    Specialized,
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentType::DryVan => write!(f, "dry-van"),
            EquipmentType::Refrigerated => write!(f, "refrigerated"),
            EquipmentType::Flatbed => write!(f, "flatbed"),
            EquipmentType::Specialized => write!(f, "specialized"),
        }
    }
}

// ==========================================
// Capacity Adjustment Action
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentAction {
    Increase,
    Decrease,
    Maintain,
}

impl fmt::Display for AdjustmentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjustmentAction::Increase => write!(f, "increase"),
            AdjustmentAction::Decrease => write!(f, "decrease"),
            AdjustmentAction::Maintain => write!(f, "maintain"),
        }
    }
}

// ==========================================
// Resource Type
// ==========================================
// Resource a capacity adjustment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Drivers,
    Vehicles,
    Equipment,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::Drivers => write!(f, "drivers"),
            ResourceType::Vehicles => write!(f, "vehicles"),
            ResourceType::Equipment => write!(f, "equipment"),
        }
    }
}

// ==========================================
// Priority Tier
// ==========================================
// Priority of a recommended route corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityTier::High => write!(f, "high"),
            PriorityTier::Medium => write!(f, "medium"),
            PriorityTier::Low => write!(f, "low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Season::Fall).unwrap(), "\"fall\"");
        assert_eq!(serde_json::to_string(&Season::Holiday).unwrap(), "\"holiday\"");
    }

    #[test]
    fn test_equipment_type_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&EquipmentType::DryVan).unwrap(),
            "\"dry-van\""
        );
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_display_matches_serde() {
        assert_eq!(Season::Winter.to_string(), "winter");
        assert_eq!(AdjustmentAction::Maintain.to_string(), "maintain");
        assert_eq!(ResourceType::Drivers.to_string(), "drivers");
    }
}
