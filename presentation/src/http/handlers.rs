//! REST handlers

use super::AppState;
use super::error::ApiError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use triage_domain::{IntakeForm, IntakeId, IntakeRecord, Questionnaire};

#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: IntakeId,
}

#[derive(Debug, Deserialize)]
pub struct DiagnosisRequest {
    /// One entry per question; `null`, `""` and `"-"` mean unanswered
    pub answers: Vec<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct DiagnosisResponse {
    pub diagnosis: String,
    pub injections: Vec<String>,
    pub medicines: Vec<String>,
    /// `null` when the fallback record was used
    pub matched_rule: Option<String>,
}

pub async fn root() -> &'static str {
    "API is running"
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<IntakeForm>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(form) = payload?;
    let record = state.register.execute(&form).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "User info saved successfully".to_string(),
            id: record.id,
        }),
    ))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IntakeRecord>>, ApiError> {
    Ok(Json(state.list.execute().await?))
}

pub async fn questions(State(state): State<Arc<AppState>>) -> Json<Questionnaire> {
    Json(state.diagnose.table().questionnaire().clone())
}

pub async fn diagnose(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DiagnosisRequest>, JsonRejection>,
) -> Result<Json<DiagnosisResponse>, ApiError> {
    let Json(request) = payload?;
    let diagnosis = state.diagnose.execute(request.answers.as_slice())?;

    Ok(Json(DiagnosisResponse {
        diagnosis: diagnosis.record.name,
        injections: diagnosis.record.injections,
        medicines: diagnosis.record.medicines,
        matched_rule: diagnosis.matched_rule,
    }))
}
