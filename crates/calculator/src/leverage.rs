use serde::Serialize;

/// Multipliers shown in the results table, in display order.
pub const LEVERAGE_LEVELS: [u32; 10] = [2, 3, 5, 10, 15, 20, 30, 50, 100, 125];

const LOW_TIER_MAX: u32 = 20;
const MEDIUM_TIER_MAX: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverageTier {
    Low,
    Medium,
    High,
}

impl LeverageTier {
    pub fn for_leverage(leverage: u32) -> Self {
        if leverage <= LOW_TIER_MAX {
            Self::Low
        } else if leverage <= MEDIUM_TIER_MAX {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Low => "tier-low",
            Self::Medium => "tier-medium",
            Self::High => "tier-high",
        }
    }
}
