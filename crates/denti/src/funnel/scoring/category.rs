use crate::funnel::domain::{AnswerRecord, Concern, DentalHistory};
use serde::Serialize;

/// The three fixed treatment categories broken down for every diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreatmentCategory {
    CavityNerve,
    CrownImplant,
    GumDisease,
}

struct CategoryMetadata {
    display_name: &'static str,
    medical_name: &'static str,
    icon: &'static str,
    description: &'static str,
    examples: [&'static str; 3],
    threshold: u32,
    base_coverage: u64,
}

impl TreatmentCategory {
    fn metadata(self) -> &'static CategoryMetadata {
        match self {
            TreatmentCategory::CavityNerve => &CategoryMetadata {
                display_name: "충치·신경 치료",
                medical_name: "보존치료",
                icon: "🦷",
                description: "치아를 뽑지 않고 살리는 치료",
                examples: [
                    "충치 때우기 (레진, 인레이)",
                    "신경 치료 (근관치료)",
                    "이 시릴 때 치료",
                ],
                threshold: 70,
                base_coverage: 1_000_000,
            },
            TreatmentCategory::CrownImplant => &CategoryMetadata {
                display_name: "크라운·임플란트",
                medical_name: "보철치료",
                icon: "🔧",
                description: "상한 치아를 씌우거나 새로 심는 치료",
                examples: [
                    "금니, 지르코니아 (크라운)",
                    "임플란트 (이 심기)",
                    "브릿지, 틀니",
                ],
                threshold: 65,
                base_coverage: 1_200_000,
            },
            TreatmentCategory::GumDisease => &CategoryMetadata {
                display_name: "잇몸 질환",
                medical_name: "치주치료",
                icon: "🩸",
                description: "피나는 잇몸, 흔들리는 이를 치료",
                examples: [
                    "스케일링 (치석 제거)",
                    "잇몸 속 치료 (치주 소파술)",
                    "잇몸 수술",
                ],
                threshold: 75,
                base_coverage: 800_000,
            },
        }
    }

    fn related_symptoms(self, answers: &AnswerRecord) -> Option<&'static str> {
        match self {
            TreatmentCategory::CrownImplant => answers
                .concerns
                .contains(&Concern::Implant)
                .then_some("⚠️ 당신의 선택: 임플란트 고민 → 긴급 보완 필요!"),
            TreatmentCategory::GumDisease => answers
                .symptoms
                .iter()
                .any(|symptom| symptom.is_gum_related())
                .then_some("⚠️ 당신의 증상: 잇몸 피남/시림 → 지금 당장 보장 추가!"),
            TreatmentCategory::CavityNerve => answers
                .dental_history
                .contains(&DentalHistory::CavityFilling)
                .then_some("⚠️ 치료 이력 있음 → 보장 상향 추천"),
        }
    }

    /// Coverage adequacy view for this category at the given overall score.
    pub fn analyze(self, score: i32, answers: &AnswerRecord) -> CategoryAnalysis {
        let metadata = self.metadata();

        let bonus = if self == TreatmentCategory::GumDisease {
            5
        } else {
            0
        };
        let percentage = (score + bonus).clamp(0, 100) as u32;

        let status = if percentage >= metadata.threshold {
            CoverageStatus::Adequate
        } else if percentage + 20 >= metadata.threshold {
            CoverageStatus::Insufficient
        } else {
            CoverageStatus::SeverelyInsufficient
        };

        let current_coverage = metadata.base_coverage * u64::from(percentage) / 100;
        let recommended_coverage = metadata.base_coverage;
        // May go negative when the score pushes coverage past the baseline.
        let shortfall = recommended_coverage as i64 - current_coverage as i64;

        CategoryAnalysis {
            display_name: metadata.display_name,
            medical_name: metadata.medical_name,
            icon: metadata.icon,
            description: metadata.description,
            status,
            percentage,
            current_coverage,
            recommended_coverage,
            shortfall,
            examples: metadata.examples,
            related_symptoms: self.related_symptoms(answers),
        }
    }
}

/// Coverage adequacy tiers, serialized with their display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CoverageStatus {
    #[serde(rename = "적정")]
    Adequate,
    #[serde(rename = "부족")]
    Insufficient,
    #[serde(rename = "매우 부족")]
    SeverelyInsufficient,
}

/// Per-category coverage breakdown combining static metadata with the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAnalysis {
    pub display_name: &'static str,
    pub medical_name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub status: CoverageStatus,
    pub percentage: u32,
    pub current_coverage: u64,
    pub recommended_coverage: u64,
    pub shortfall: i64,
    pub examples: [&'static str; 3],
    pub related_symptoms: Option<&'static str>,
}

/// All three category analyses keyed the way clients consume them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub cavity_nerve: CategoryAnalysis,
    pub crown_implant: CategoryAnalysis,
    pub gum_disease: CategoryAnalysis,
}

impl CategoryBreakdown {
    pub fn analyze(score: i32, answers: &AnswerRecord) -> Self {
        Self {
            cavity_nerve: TreatmentCategory::CavityNerve.analyze(score, answers),
            crown_implant: TreatmentCategory::CrownImplant.analyze(score, answers),
            gum_disease: TreatmentCategory::GumDisease.analyze(score, answers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funnel::domain::Symptom;

    #[test]
    fn percentage_clamps_to_hundred_for_gum_bonus() {
        let answers = AnswerRecord::default();
        let analysis = TreatmentCategory::GumDisease.analyze(98, &answers);
        assert_eq!(analysis.percentage, 100);
        assert_eq!(analysis.status, CoverageStatus::Adequate);
        // full coverage means the gap goes to zero, never below via clamping
        assert_eq!(analysis.shortfall, 0);
    }

    #[test]
    fn percentage_clamps_even_for_out_of_range_scores() {
        let answers = AnswerRecord::default();
        let high = TreatmentCategory::CavityNerve.analyze(1000, &answers);
        assert_eq!(high.percentage, 100);
        let low = TreatmentCategory::CavityNerve.analyze(-50, &answers);
        assert_eq!(low.percentage, 0);
        assert_eq!(low.status, CoverageStatus::SeverelyInsufficient);
    }

    #[test]
    fn status_bands_follow_threshold_window() {
        let answers = AnswerRecord::default();
        // crown/implant threshold is 65
        assert_eq!(
            TreatmentCategory::CrownImplant.analyze(65, &answers).status,
            CoverageStatus::Adequate
        );
        assert_eq!(
            TreatmentCategory::CrownImplant.analyze(64, &answers).status,
            CoverageStatus::Insufficient
        );
        assert_eq!(
            TreatmentCategory::CrownImplant.analyze(45, &answers).status,
            CoverageStatus::Insufficient
        );
        assert_eq!(
            TreatmentCategory::CrownImplant.analyze(44, &answers).status,
            CoverageStatus::SeverelyInsufficient
        );
    }

    #[test]
    fn related_warnings_follow_tagged_options() {
        let answers = AnswerRecord {
            symptoms: vec![Symptom::SwollenGums],
            concerns: vec![Concern::Implant],
            dental_history: vec![DentalHistory::CavityFilling],
            ..AnswerRecord::default()
        };

        assert!(TreatmentCategory::GumDisease
            .analyze(60, &answers)
            .related_symptoms
            .is_some());
        assert!(TreatmentCategory::CrownImplant
            .analyze(60, &answers)
            .related_symptoms
            .is_some());
        assert!(TreatmentCategory::CavityNerve
            .analyze(60, &answers)
            .related_symptoms
            .is_some());

        let silent = AnswerRecord::default();
        assert!(TreatmentCategory::GumDisease
            .analyze(60, &silent)
            .related_symptoms
            .is_none());
    }

    #[test]
    fn coverage_amounts_derive_from_percentage() {
        let answers = AnswerRecord::default();
        let analysis = TreatmentCategory::CavityNerve.analyze(40, &answers);
        assert_eq!(analysis.current_coverage, 400_000);
        assert_eq!(analysis.recommended_coverage, 1_000_000);
        assert_eq!(analysis.shortfall, 600_000);
    }
}
