use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::info;

use super::repository::{Lead, LeadDraft, LeadRepository, RepositoryError};

/// Service appending consultation leads to the injected repository. Leads are
/// never updated or deleted; the store only ever grows.
pub struct LeadIntakeService<R> {
    repository: Arc<R>,
}

impl<R> LeadIntakeService<R>
where
    R: LeadRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stamp and store a contact submission, returning the assigned lead.
    pub fn submit(&self, mut payload: Map<String, Value>) -> Result<Lead, LeadIntakeError> {
        // id and timestamp are server-assigned; a client copy would otherwise
        // reappear as a duplicate key when the lead is serialized
        payload.remove("id");
        payload.remove("timestamp");

        let draft = LeadDraft {
            timestamp: Utc::now(),
            payload,
        };
        let lead = self.repository.append(draft)?;

        info!(
            lead_id = lead.id,
            name = lead.payload_str("name").unwrap_or("unknown"),
            phone = lead.payload_str("phone").unwrap_or("unknown"),
            score = lead.payload_number("score").unwrap_or(-1),
            quality = lead.payload_str("leadQuality").unwrap_or("unknown"),
            total_leads = lead.id,
            "new lead captured"
        );

        Ok(lead)
    }

    /// Full lead list, oldest first. Administrative surface only.
    pub fn list(&self) -> Result<Vec<Lead>, LeadIntakeError> {
        Ok(self.repository.list()?)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum LeadIntakeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
