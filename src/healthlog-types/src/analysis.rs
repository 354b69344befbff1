use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Triage tier, ordered from least to most urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Urgency {
    Normal,
    Monitor,
    Emergency,
}

/// Qualitative label for a risk score, used in the narrative summary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskBand {
    Minimal,
    Low,
    Moderate,
    Elevated,
    High,
}

impl RiskBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..25 => RiskBand::Minimal,
            25..45 => RiskBand::Low,
            45..65 => RiskBand::Moderate,
            65..80 => RiskBand::Elevated,
            _ => RiskBand::High,
        }
    }
}

/// Per-category contributions. Diagnostic only: these are rounded but not
/// clamped and need not sum to the risk score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactBreakdown {
    pub symptom_impact: i64,
    pub sleep_impact: i64,
    pub lifestyle_impact: i64,
    pub medical_history_impact: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Always within 0..=100.
    pub risk_score: u8,
    pub urgency: Urgency,
    pub recommended_specialist: String,
    pub reasoning: Vec<String>,
    pub summary: String,
    pub impact_breakdown: ImpactBreakdown,
}

impl AnalysisResult {
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_score(self.risk_score)
    }
}
