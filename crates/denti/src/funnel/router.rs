use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use super::domain::AnswerRecord;
use super::repository::LeadRepository;
use super::scoring::ScoringEngine;
use super::service::LeadIntakeService;

/// Shared state for the funnel endpoints: the stateless scoring engine and
/// the repository-backed intake service.
pub struct FunnelState<R> {
    engine: Arc<ScoringEngine>,
    intake: Arc<LeadIntakeService<R>>,
}

impl<R> FunnelState<R> {
    pub fn new(engine: ScoringEngine, intake: Arc<LeadIntakeService<R>>) -> Self {
        Self {
            engine: Arc::new(engine),
            intake,
        }
    }
}

impl<R> Clone for FunnelState<R> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            intake: self.intake.clone(),
        }
    }
}

/// Router builder exposing the diagnosis and lead intake endpoints.
pub fn funnel_router<R>(state: FunnelState<R>) -> Router
where
    R: LeadRepository + 'static,
{
    Router::new()
        .route("/api/diagnosis", post(diagnosis_handler::<R>))
        .route("/api/lead", post(submit_lead_handler::<R>))
        .route("/api/leads", get(list_leads_handler::<R>))
        .with_state(state)
}

fn failure(message: &str) -> Response {
    let payload = json!({ "success": false, "error": message });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

pub(crate) async fn diagnosis_handler<R>(
    State(state): State<FunnelState<R>>,
    Json(body): Json<Value>,
) -> Response
where
    R: LeadRepository + 'static,
{
    // Field-wise lenient decode: a wrong-shaped field is scored as absent
    // instead of failing the whole record.
    let answers = AnswerRecord::from_submission(&body);

    let result = state.engine.diagnose(&answers);
    info!(
        score = result.score,
        grade = result.grade.text,
        lead_quality = ?result.lead_score.quality,
        "diagnosis computed"
    );

    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": result })),
    )
        .into_response()
}

pub(crate) async fn submit_lead_handler<R>(
    State(state): State<FunnelState<R>>,
    Json(body): Json<Value>,
) -> Response
where
    R: LeadRepository + 'static,
{
    let Value::Object(payload) = body else {
        warn!("lead submission rejected: body is not a JSON object");
        return failure("Failed to save lead information");
    };

    match state.intake.submit(payload) {
        Ok(lead) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "상담 신청이 완료되었습니다.",
                "leadId": lead.id,
            })),
        )
            .into_response(),
        Err(err) => {
            error!(%err, "lead capture failed");
            failure("Failed to save lead information")
        }
    }
}

pub(crate) async fn list_leads_handler<R>(State(state): State<FunnelState<R>>) -> Response
where
    R: LeadRepository + 'static,
{
    match state.intake.list() {
        Ok(leads) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "count": leads.len(),
                "data": leads,
            })),
        )
            .into_response(),
        Err(err) => {
            error!(%err, "lead listing failed");
            failure("Failed to load leads")
        }
    }
}
