use crate::funnel::domain::{RiskFactor, Severity};
use serde::Serialize;

/// Marketing quality tiers derived from the diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeadQuality {
    Hot,
    Warm,
    Cold,
}

/// Lead quality classification; a low diagnosis score and many severe risk
/// factors make a hotter lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeadScore {
    pub score: u32,
    pub quality: LeadQuality,
    pub priority: u8,
}

impl LeadScore {
    pub fn classify(score: i32, risk_factors: &[RiskFactor]) -> Self {
        let band = if score < 40 {
            40
        } else if score < 60 {
            30
        } else if score < 80 {
            15
        } else {
            0
        };

        let high_severity = risk_factors
            .iter()
            .filter(|factor| factor.severity == Severity::High)
            .count() as u32;

        let lead_score = band + 5 * risk_factors.len() as u32 + 10 * high_severity;

        let (quality, priority) = if lead_score >= 80 {
            (LeadQuality::Hot, 1)
        } else if lead_score >= 50 {
            (LeadQuality::Warm, 2)
        } else {
            (LeadQuality::Cold, 3)
        };

        Self {
            score: lead_score,
            quality,
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risks(total: usize, high: usize) -> Vec<RiskFactor> {
        (0..total)
            .map(|index| RiskFactor {
                category: "현재 증상".to_string(),
                detail: format!("risk {index}"),
                severity: if index < high {
                    Severity::High
                } else {
                    Severity::Medium
                },
            })
            .collect()
    }

    // Reachable lead scores are all multiples of 5, so the 80 and 50
    // thresholds are exercised with the closest reachable values on
    // either side.
    #[test]
    fn quality_boundaries_are_exact() {
        let hot = LeadScore::classify(50, &risks(4, 3)); // 30 + 20 + 30 = 80
        assert_eq!(hot.score, 80);
        assert_eq!(hot.quality, LeadQuality::Hot);
        assert_eq!(hot.priority, 1);

        let warm_top = LeadScore::classify(50, &risks(3, 3)); // 30 + 15 + 30 = 75
        assert_eq!(warm_top.score, 75);
        assert_eq!(warm_top.quality, LeadQuality::Warm);
        assert_eq!(warm_top.priority, 2);

        let warm_floor = LeadScore::classify(60, &risks(3, 2)); // 15 + 15 + 20 = 50
        assert_eq!(warm_floor.score, 50);
        assert_eq!(warm_floor.quality, LeadQuality::Warm);

        let cold = LeadScore::classify(60, &risks(4, 1)); // 15 + 20 + 10 = 45
        assert_eq!(cold.score, 45);
        assert_eq!(cold.quality, LeadQuality::Cold);
        assert_eq!(cold.priority, 3);
    }

    #[test]
    fn perfect_scores_earn_no_band_points() {
        let classified = LeadScore::classify(80, &[]);
        assert_eq!(classified.score, 0);
        assert_eq!(classified.quality, LeadQuality::Cold);
    }

    #[test]
    fn quality_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&LeadQuality::Hot).expect("serializes"),
            "\"HOT\""
        );
    }
}
