use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Captured contact submission paired with its diagnosis context. The payload
/// stays free-form: intake applies no schema validation, so whatever shape
/// the client sends is stored and replayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Lead {
    /// String field from the submitted payload, for log lines.
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }

    pub fn payload_number(&self, key: &str) -> Option<i64> {
        self.payload.get(key).and_then(Value::as_i64)
    }
}

/// A submission stamped by the service but not yet assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadDraft {
    pub timestamp: DateTime<Utc>,
    pub payload: Map<String, Value>,
}

/// Storage abstraction so the intake service can be exercised in isolation.
/// Implementations assign sequential ids starting at 1 for the lifetime of
/// the backing store.
pub trait LeadRepository: Send + Sync {
    fn append(&self, draft: LeadDraft) -> Result<Lead, RepositoryError>;
    fn list(&self) -> Result<Vec<Lead>, RepositoryError>;
}

/// Error enumeration for lead store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("lead store unavailable: {0}")]
    Unavailable(String),
}
