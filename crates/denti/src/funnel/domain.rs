use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Questionnaire answers keyed by question id. Unknown JSON keys are ignored
/// and every field may be absent; unrecognized option values map to the
/// fallback variants below instead of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerRecord {
    pub age_group: Option<AgeGroup>,
    pub dental_history: Vec<DentalHistory>,
    pub symptoms: Vec<Symptom>,
    pub concerns: Vec<Concern>,
    /// Echoed back in the diagnosis; no scoring rule reads it.
    pub has_insurance: Option<String>,
}

impl AnswerRecord {
    /// Decode a questionnaire submission field by field. A recognized key
    /// holding the wrong shape (a string where a list belongs, a number where
    /// a label belongs) is treated as if it were absent, so one malformed
    /// field never sinks the rest of the record.
    pub fn from_submission(value: &Value) -> Self {
        Self {
            age_group: lenient_field(value, "ageGroup"),
            dental_history: lenient_list(value, "dentalHistory"),
            symptoms: lenient_list(value, "symptoms"),
            concerns: lenient_list(value, "concerns"),
            has_insurance: value
                .get("hasInsurance")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

fn lenient_field<T: DeserializeOwned>(value: &Value, key: &str) -> Option<T> {
    value
        .get(key)
        .and_then(|raw| serde_json::from_value(raw.clone()).ok())
}

fn lenient_list<T: DeserializeOwned>(value: &Value, key: &str) -> Vec<T> {
    match value.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Severity tier attached to a flagged risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A flagged negative finding accumulated during scoring, in evaluation
/// order: age, history, symptoms, concerns, prevention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub category: String,
    pub detail: String,
    pub severity: Severity,
}

/// An itemized estimated treatment cost tied to a specific risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioCostItem {
    pub item: String,
    pub cost: u32,
}

impl ScenarioCostItem {
    fn new(item: &str, cost: u32) -> Self {
        Self {
            item: item.to_string(),
            cost,
        }
    }
}

/// Age band options. The questionnaire labels are the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "20대")]
    Twenties,
    #[serde(rename = "30대")]
    Thirties,
    #[serde(rename = "40대")]
    Forties,
    #[serde(rename = "50대")]
    Fifties,
    #[serde(rename = "60대 이상")]
    SixtyPlus,
    #[serde(other)]
    Unrecognized,
}

impl AgeGroup {
    /// Deduction applied to the base score of 100.
    pub fn deduction(self) -> i32 {
        match self {
            AgeGroup::Twenties => -5,
            AgeGroup::Thirties => -8,
            AgeGroup::Forties => -12,
            AgeGroup::Fifties => -18,
            AgeGroup::SixtyPlus => -25,
            AgeGroup::Unrecognized => -10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Twenties => "20대",
            AgeGroup::Thirties => "30대",
            AgeGroup::Forties => "40대",
            AgeGroup::Fifties => "50대",
            AgeGroup::SixtyPlus => "60대 이상",
            AgeGroup::Unrecognized => "기타",
        }
    }

    /// Bands from the 40s up are flagged as an age risk factor.
    pub fn risk_severity(self) -> Option<Severity> {
        match self {
            AgeGroup::Forties => Some(Severity::Medium),
            AgeGroup::Fifties | AgeGroup::SixtyPlus => Some(Severity::High),
            _ => None,
        }
    }
}

/// Prior treatment history options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DentalHistory {
    #[serde(rename = "없어요 (건강해요)")]
    Healthy,
    #[serde(rename = "스케일링만 받았어요")]
    ScalingOnly,
    #[serde(rename = "충치 치료 (때우기)")]
    CavityFilling,
    #[serde(rename = "신경 치료 (크라운 씌움)")]
    RootCanal,
    #[serde(rename = "이를 뺐어요")]
    Extraction,
    #[serde(rename = "임플란트/브릿지")]
    ImplantOrBridge,
    #[serde(other)]
    Unrecognized,
}

impl DentalHistory {
    pub fn deduction(self) -> i32 {
        match self {
            DentalHistory::Healthy | DentalHistory::Unrecognized => 0,
            DentalHistory::ScalingOnly => -5,
            DentalHistory::CavityFilling => -10,
            DentalHistory::RootCanal => -15,
            DentalHistory::Extraction => -20,
            DentalHistory::ImplantOrBridge => -25,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DentalHistory::Healthy => "없어요 (건강해요)",
            DentalHistory::ScalingOnly => "스케일링만 받았어요",
            DentalHistory::CavityFilling => "충치 치료 (때우기)",
            DentalHistory::RootCanal => "신경 치료 (크라운 씌움)",
            DentalHistory::Extraction => "이를 뺐어요",
            DentalHistory::ImplantOrBridge => "임플란트/브릿지",
            DentalHistory::Unrecognized => "기타",
        }
    }

    /// Retreatment cost scenarios tied to prior prosthetic work.
    pub fn scenario_cost(self) -> Option<ScenarioCostItem> {
        match self {
            DentalHistory::RootCanal => Some(ScenarioCostItem::new("크라운 재치료 가능성", 800_000)),
            DentalHistory::ImplantOrBridge => {
                Some(ScenarioCostItem::new("추가 임플란트 가능성", 1_200_000))
            }
            _ => None,
        }
    }
}

/// Current symptom options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symptom {
    #[serde(rename = "없어요 (괜찮아요)")]
    NoSymptoms,
    #[serde(rename = "양치할 때 피가 나요 🩸")]
    BleedingWhileBrushing,
    #[serde(rename = "찬물 마시면 시려요 🧊")]
    ColdSensitivity,
    #[serde(rename = "씹을 때 아파요 😣")]
    PainWhenChewing,
    #[serde(rename = "이가 흔들려요 💨")]
    LooseTooth,
    #[serde(rename = "잇몸이 자주 부어요 🔥")]
    SwollenGums,
    #[serde(other)]
    Unrecognized,
}

impl Symptom {
    pub fn deduction(self) -> i32 {
        match self {
            Symptom::NoSymptoms | Symptom::Unrecognized => 0,
            Symptom::BleedingWhileBrushing => -8,
            Symptom::ColdSensitivity => -6,
            Symptom::PainWhenChewing => -10,
            Symptom::LooseTooth => -15,
            Symptom::SwollenGums => -8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Symptom::NoSymptoms => "없어요 (괜찮아요)",
            Symptom::BleedingWhileBrushing => "양치할 때 피가 나요 🩸",
            Symptom::ColdSensitivity => "찬물 마시면 시려요 🧊",
            Symptom::PainWhenChewing => "씹을 때 아파요 😣",
            Symptom::LooseTooth => "이가 흔들려요 💨",
            Symptom::SwollenGums => "잇몸이 자주 부어요 🔥",
            Symptom::Unrecognized => "기타",
        }
    }

    /// Gum or bleeding related symptoms trigger the periodontal category
    /// warning and a gum-treatment cost scenario.
    pub fn is_gum_related(self) -> bool {
        matches!(self, Symptom::BleedingWhileBrushing | Symptom::SwollenGums)
    }

    pub fn scenario_cost(self) -> Option<ScenarioCostItem> {
        match self {
            Symptom::LooseTooth => Some(ScenarioCostItem::new("임플란트 필요 가능성", 1_200_000)),
            _ if self.is_gum_related() => Some(ScenarioCostItem::new("잇몸 치료", 500_000)),
            _ => None,
        }
    }
}

/// Anticipated future treatment concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Concern {
    #[serde(rename = "없어요")]
    NoConcerns,
    #[serde(rename = "임플란트 (이 빠지면) 💰")]
    Implant,
    #[serde(rename = "크라운·금니 (씌우기) 👑")]
    CrownOrGold,
    #[serde(rename = "자녀 치아 교정 👶")]
    ChildBraces,
    #[serde(rename = "부모님 틀니 👴")]
    ParentsDentures,
    #[serde(rename = "잇몸 치료 (치주염) 🦷")]
    GumTreatment,
    #[serde(other)]
    Unrecognized,
}

impl Concern {
    pub fn deduction(self) -> i32 {
        match self {
            Concern::NoConcerns | Concern::Unrecognized => 0,
            Concern::Implant => -15,
            Concern::CrownOrGold => -8,
            Concern::ChildBraces => -5,
            Concern::ParentsDentures => -10,
            Concern::GumTreatment => -8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Concern::NoConcerns => "없어요",
            Concern::Implant => "임플란트 (이 빠지면) 💰",
            Concern::CrownOrGold => "크라운·금니 (씌우기) 👑",
            Concern::ChildBraces => "자녀 치아 교정 👶",
            Concern::ParentsDentures => "부모님 틀니 👴",
            Concern::GumTreatment => "잇몸 치료 (치주염) 🦷",
            Concern::Unrecognized => "기타",
        }
    }

    pub fn scenario_cost(self) -> Option<ScenarioCostItem> {
        match self {
            Concern::Implant => Some(ScenarioCostItem::new("임플란트 (평균 2개)", 2_400_000)),
            Concern::ChildBraces => Some(ScenarioCostItem::new("자녀 교정", 4_500_000)),
            Concern::ParentsDentures => Some(ScenarioCostItem::new("부모님 틀니", 3_000_000)),
            Concern::CrownOrGold => Some(ScenarioCostItem::new("크라운 치료", 500_000)),
            Concern::GumTreatment => Some(ScenarioCostItem::new("잇몸 치료", 800_000)),
            _ => None,
        }
    }

    /// Implant and denture concerns push the recommended premium tier up.
    pub fn prompts_premium_upgrade(self) -> bool {
        matches!(self, Concern::Implant | Concern::ParentsDentures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_record_tolerates_unknown_keys_and_values() {
        let raw = r#"{
            "ageGroup": "100대",
            "dentalHistory": ["임플란트/브릿지", "레이저 미백"],
            "symptoms": [],
            "extraField": {"ignored": true}
        }"#;

        let record: AnswerRecord = serde_json::from_str(raw).expect("record parses");
        assert_eq!(record.age_group, Some(AgeGroup::Unrecognized));
        assert_eq!(
            record.dental_history,
            vec![DentalHistory::ImplantOrBridge, DentalHistory::Unrecognized]
        );
        assert!(record.symptoms.is_empty());
        assert!(record.concerns.is_empty());
        assert!(record.has_insurance.is_none());
    }

    #[test]
    fn submission_drops_wrong_shaped_fields_instead_of_failing() {
        let raw = serde_json::json!({
            "ageGroup": 30,
            "dentalHistory": "not-an-array",
            "symptoms": ["이가 흔들려요 💨", 42, "미확인 옵션"],
            "hasInsurance": false
        });

        let record = AnswerRecord::from_submission(&raw);
        assert_eq!(record.age_group, None);
        assert!(record.dental_history.is_empty());
        assert_eq!(
            record.symptoms,
            vec![Symptom::LooseTooth, Symptom::Unrecognized]
        );
        assert!(record.concerns.is_empty());
        assert!(record.has_insurance.is_none());
    }

    #[test]
    fn submission_matches_strict_decoding_for_well_formed_records() {
        let raw = serde_json::json!({
            "ageGroup": "50대",
            "concerns": ["임플란트 (이 빠지면) 💰"],
            "hasInsurance": "네, 있어요"
        });

        let lenient = AnswerRecord::from_submission(&raw);
        let strict: AnswerRecord =
            serde_json::from_value(raw).expect("well-formed record parses");
        assert_eq!(lenient, strict);
    }

    #[test]
    fn option_labels_round_trip() {
        let symptom: Symptom =
            serde_json::from_str("\"이가 흔들려요 💨\"").expect("label recognized");
        assert_eq!(symptom, Symptom::LooseTooth);
        assert_eq!(
            serde_json::to_string(&symptom).expect("serializes"),
            "\"이가 흔들려요 💨\""
        );
    }

    #[test]
    fn unrecognized_options_carry_no_deduction() {
        assert_eq!(DentalHistory::Unrecognized.deduction(), 0);
        assert_eq!(Symptom::Unrecognized.deduction(), 0);
        assert_eq!(Concern::Unrecognized.deduction(), 0);
        assert_eq!(AgeGroup::Unrecognized.deduction(), -10);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::High).expect("serializes"),
            "\"high\""
        );
    }
}
