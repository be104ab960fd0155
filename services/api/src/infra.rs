use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use denti::funnel::{Lead, LeadDraft, LeadRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-lifetime lead store: an append-only list with ids assigned from
/// the current length. Nothing survives a restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    leads: Arc<Mutex<Vec<Lead>>>,
}

impl LeadRepository for InMemoryLeadRepository {
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
