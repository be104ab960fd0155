use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use crate::funnel::domain::{AgeGroup, AnswerRecord, Concern, DentalHistory, Symptom};
use crate::funnel::repository::{Lead, LeadDraft, LeadRepository, RepositoryError};

/// In-memory lead store for exercising the intake service and router.
#[derive(Default, Clone)]
pub(crate) struct MemoryLeadRepository {
    leads: Arc<Mutex<Vec<Lead>>>,
}

impl LeadRepository for MemoryLeadRepository {
    fn append(&self, draft: LeadDraft) -> Result<Lead, RepositoryError> {
        let mut guard = self.leads.lock().expect("lead store mutex poisoned");
        let lead = Lead {
            id: guard.len() as u64 + 1,
            timestamp: draft.timestamp,
            payload: draft.payload,
        };
        guard.push(lead.clone());
        Ok(lead)
    }

    fn list(&self) -> Result<Vec<Lead>, RepositoryError> {
        Ok(self.leads.lock().expect("lead store mutex poisoned").clone())
    }
}

/// A repository that always fails, for the error envelope paths.
#[derive(Default, Clone)]
pub(crate) struct BrokenLeadRepository;

impl LeadRepository for BrokenLeadRepository {
    fn append(&self, _draft: LeadDraft) -> Result<Lead, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Lead>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(crate) fn empty_answers() -> AnswerRecord {
    AnswerRecord::default()
}

/// The worst-case elderly profile: every answer lands in the highest
/// deduction band of its question.
pub(crate) fn elderly_high_risk_answers() -> AnswerRecord {
    AnswerRecord {
        age_group: Some(AgeGroup::SixtyPlus),
        dental_history: vec![DentalHistory::ImplantOrBridge],
        symptoms: vec![Symptom::LooseTooth],
        concerns: vec![Concern::Implant],
        has_insurance: Some("아니요, 없어요".to_string()),
    }
}

pub(crate) fn contact_payload(name: &str) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("name".to_string(), Value::from(name));
    payload.insert("phone".to_string(), Value::from("010-1234-5678"));
    payload.insert("birthDate".to_string(), Value::from("1961-03-02"));
    payload.insert("privacyConsent".to_string(), Value::from(true));
    payload.insert("score".to_string(), Value::from(20));
    payload.insert("leadQuality".to_string(), Value::from("HOT"));
    payload
}
