mod category;
mod lead_score;
mod premium;

pub use category::{CategoryAnalysis, CategoryBreakdown, CoverageStatus, TreatmentCategory};
pub use lead_score::{LeadQuality, LeadScore};
pub use premium::{PremiumEstimate, PremiumQuote, PremiumTier};

use super::domain::{AgeGroup, AnswerRecord, RiskFactor, ScenarioCostItem, Severity};
use serde::Serialize;

/// Knobs for the deterministic scoring pass. The deduction and cost tables
/// themselves live on the option enums; this carries the aggregate rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub score_ceiling: i32,
    pub prevention_threshold: i32,
    pub prevention_penalty: i32,
    pub default_scenario_cost: u64,
    pub minimum_coverage_rate: f64,
    pub optimized_coverage_rate: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            // no mouth scores a perfect 100, so the ceiling sits at 85
            score_ceiling: 85,
            prevention_threshold: 75,
            prevention_penalty: 5,
            default_scenario_cost: 2_500_000,
            minimum_coverage_rate: 0.15,
            optimized_coverage_rate: 0.15,
        }
    }
}

/// Stateless engine folding an answer record over the deduction tables.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Produce the full diagnosis for one answer record. Pure and
    /// deterministic: identical input yields identical output.
    pub fn diagnose(&self, answers: &AnswerRecord) -> DiagnosisResult {
        let mut score: i32 = 100;
        let mut risk_factors: Vec<RiskFactor> = Vec::new();
        let mut scenario_costs: Vec<ScenarioCostItem> = Vec::new();

        // an absent age band takes the same fallback deduction as an
        // unrecognized one
        let age = answers.age_group.unwrap_or(AgeGroup::Unrecognized);
        score += age.deduction();

        if let Some(severity) = age.risk_severity() {
            risk_factors.push(RiskFactor {
                category: "연령 위험도".to_string(),
                detail: format!("{}: 치아 노화로 인한 치료 가능성 증가", age.label()),
                severity,
            });
        }

        for history in &answers.dental_history {
            let deduction = history.deduction();
            score += deduction;
            if deduction < 0 {
                risk_factors.push(RiskFactor {
                    category: "치료 이력".to_string(),
                    detail: history.label().to_string(),
                    severity: severity_for(deduction, 15),
                });
                if let Some(cost) = history.scenario_cost() {
                    scenario_costs.push(cost);
                }
            }
        }

        for symptom in &answers.symptoms {
            let deduction = symptom.deduction();
            score += deduction;
            if deduction < 0 {
                risk_factors.push(RiskFactor {
                    category: "현재 증상".to_string(),
                    detail: symptom.label().to_string(),
                    severity: severity_for(deduction, 10),
                });
                if let Some(cost) = symptom.scenario_cost() {
                    scenario_costs.push(cost);
                }
            }
        }

        for concern in &answers.concerns {
            let deduction = concern.deduction();
            score += deduction;
            if deduction < 0 {
                risk_factors.push(RiskFactor {
                    category: "미래 걱정".to_string(),
                    detail: concern.label().to_string(),
                    severity: severity_for(deduction, 10),
                });
                if let Some(cost) = concern.scenario_cost() {
                    scenario_costs.push(cost);
                }
            }
        }

        score = score.clamp(0, self.config.score_ceiling);

        // Even a clean mouth needs checkups; fires on the post-clamp score so
        // the reachable range stays [0,75] plus [71,80].
        if score > self.config.prevention_threshold {
            score -= self.config.prevention_penalty;
            risk_factors.push(RiskFactor {
                category: "예방 관리".to_string(),
                detail: "정기 검진 및 예방 관리 필요 (완벽한 보장은 없습니다)".to_string(),
                severity: Severity::Low,
            });
        }

        let grade = Grade::for_score(score);

        let summed: u64 = scenario_costs.iter().map(|item| u64::from(item.cost)).sum();
        let total_scenario_cost = if summed == 0 {
            self.config.default_scenario_cost
        } else {
            summed
        };

        let current_coverage_rate = (f64::from(score) * 0.01).max(self.config.minimum_coverage_rate);
        let current_out_of_pocket =
            (total_scenario_cost as f64 * (1.0 - current_coverage_rate)).floor() as u64;
        let optimized_out_of_pocket =
            (total_scenario_cost as f64 * self.config.optimized_coverage_rate).floor() as u64;
        let savings = current_out_of_pocket.saturating_sub(optimized_out_of_pocket);

        let categories = CategoryBreakdown::analyze(score, answers);
        let lead_score = LeadScore::classify(score, &risk_factors);
        let insurance_premium = PremiumEstimate::estimate(score, &risk_factors, &answers.concerns);

        DiagnosisResult {
            score,
            grade,
            risk_factors,
            total_scenario_cost,
            scenario_costs,
            current_out_of_pocket,
            optimized_out_of_pocket,
            savings,
            categories,
            has_insurance: answers.has_insurance.clone(),
            lead_score,
            insurance_premium,
        }
    }
}

fn severity_for(deduction: i32, high_threshold: i32) -> Severity {
    if deduction.abs() >= high_threshold {
        Severity::High
    } else {
        Severity::Medium
    }
}

/// Display tuple for a score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub text: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

impl Grade {
    pub fn for_score(score: i32) -> Self {
        if score >= 70 {
            Grade {
                text: "양호",
                color: "blue",
                emoji: "🔵",
            }
        } else if score >= 55 {
            Grade {
                text: "보통",
                color: "yellow",
                emoji: "🟡",
            }
        } else if score >= 35 {
            Grade {
                text: "주의",
                color: "orange",
                emoji: "🟠",
            }
        } else {
            Grade {
                text: "위험",
                color: "red",
                emoji: "🔴",
            }
        }
    }
}

/// Full computed output of the scoring engine for one answer record.
/// Created fresh per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub score: i32,
    pub grade: Grade,
    pub risk_factors: Vec<RiskFactor>,
    pub total_scenario_cost: u64,
    pub scenario_costs: Vec<ScenarioCostItem>,
    pub current_out_of_pocket: u64,
    pub optimized_out_of_pocket: u64,
    pub savings: u64,
    pub categories: CategoryBreakdown,
    pub has_insurance: Option<String>,
    pub lead_score: LeadScore,
    pub insurance_premium: PremiumEstimate,
}

impl DiagnosisResult {
    pub fn high_severity_count(&self) -> usize {
        self.risk_factors
            .iter()
            .filter(|factor| factor.severity == Severity::High)
            .count()
    }
}
