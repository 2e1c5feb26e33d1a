//! Portfolio recommendation by risk tolerance

use std::str::FromStr;

/// Reply used when the risk level is missing or unrecognized
pub const INVALID_RISK_LEVEL: &str =
    "Invalid risk level. Please enter 'none', 'low', 'medium', or 'high'.";

/// Investor's risk tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bond/equity split recommended for this risk level
    pub fn allocation(&self) -> &'static str {
        match self {
            RiskLevel::None => "100% bonds (AGG), 0% equities (SPY)",
            RiskLevel::Low => "60% bonds (AGG), 40% equities (SPY)",
            RiskLevel::Medium => "40% bonds (AGG), 60% equities (SPY)",
            RiskLevel::High => "20% bonds (AGG), 80% equities (SPY)",
        }
    }
}

/// Input that is not one of the four risk levels
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized risk level: {0}")]
pub struct UnknownRiskLevel(pub String);

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(RiskLevel::None),
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(UnknownRiskLevel(s.to_string())),
        }
    }
}

/// Allocation for a raw risk level slot value
///
/// Never fails: anything that isn't a known level, including an unset slot,
/// gets [`INVALID_RISK_LEVEL`].
pub fn select_risk_level(risk_level: Option<&str>) -> &'static str {
    risk_level
        .and_then(|raw| raw.parse::<RiskLevel>().ok())
        .map_or(INVALID_RISK_LEVEL, |level| level.allocation())
}
