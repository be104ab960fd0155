use crate::funnel::domain::{Concern, RiskFactor, Severity};
use serde::Serialize;

/// Monthly premium tiers used by the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PremiumTier {
    Basic,
    Standard,
    Premium,
}

impl PremiumTier {
    pub fn monthly(self) -> u32 {
        match self {
            PremiumTier::Basic => 20_000,
            PremiumTier::Standard => 35_000,
            PremiumTier::Premium => 60_000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PremiumTier::Basic => "기본형",
            PremiumTier::Standard => "표준형",
            PremiumTier::Premium => "프리미엄형",
        }
    }

    fn quote(self) -> PremiumQuote {
        PremiumQuote {
            monthly: self.monthly(),
            annual: self.monthly() * 12,
            tier: self.label(),
        }
    }
}

/// One tier priced monthly and annually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PremiumQuote {
    pub monthly: u32,
    pub annual: u32,
    #[serde(rename = "type")]
    pub tier: &'static str,
}

/// Current versus recommended premium, derived from the score and risk mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumEstimate {
    pub current: PremiumQuote,
    pub recommended: PremiumQuote,
    pub difference: PremiumDifference,
    pub is_upgrade_needed: bool,
}

/// Recommended minus current; negative when the score already prices above
/// the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PremiumDifference {
    pub monthly: i64,
    pub annual: i64,
}

impl PremiumEstimate {
    pub fn estimate(score: i32, risk_factors: &[RiskFactor], concerns: &[Concern]) -> Self {
        let current = if score >= 70 {
            PremiumTier::Basic
        } else if score >= 50 {
            PremiumTier::Standard
        } else {
            PremiumTier::Premium
        };

        let high_severity = risk_factors
            .iter()
            .filter(|factor| factor.severity == Severity::High)
            .count();
        let upgrade_prompted = concerns
            .iter()
            .any(|concern| concern.prompts_premium_upgrade());

        let recommended = if high_severity >= 2 || upgrade_prompted {
            PremiumTier::Premium
        } else {
            PremiumTier::Standard
        };

        let monthly_difference =
            i64::from(recommended.monthly()) - i64::from(current.monthly());

        Self {
            current: current.quote(),
            recommended: recommended.quote(),
            difference: PremiumDifference {
                monthly: monthly_difference,
                annual: monthly_difference * 12,
            },
            is_upgrade_needed: recommended.monthly() > current.monthly(),
        }
    }
}
