//! Dental insurance diagnosis funnel: questionnaire domain, the scoring
//! engine that turns answers into an adequacy diagnosis, and the lead intake
//! pipeline that captures consultation requests.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use domain::{
    AgeGroup, AnswerRecord, Concern, DentalHistory, RiskFactor, ScenarioCostItem, Severity,
    Symptom,
};
pub use repository::{Lead, LeadDraft, LeadRepository, RepositoryError};
pub use router::{funnel_router, FunnelState};
pub use scoring::{
    CategoryAnalysis, CategoryBreakdown, CoverageStatus, DiagnosisResult, Grade, LeadQuality,
    LeadScore, PremiumEstimate, PremiumQuote, PremiumTier, ScoringConfig, ScoringEngine,
    TreatmentCategory,
};
pub use service::{LeadIntakeError, LeadIntakeService};
