//! Axum route handlers for resume screening.

use axum::{body::Bytes, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::Caller;
use crate::errors::AppError;
use crate::screening::filter::{filter_resumes, FilterRequest, FilterSummary};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRef {
    pub company_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub job_title: String,
    pub company: Option<CompanyRef>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobListing>,
}

/// Reads the filter body. An empty body is a request without `jobId`;
/// the content type is not checked.
pub fn parse_filter_request(body: &[u8]) -> Result<FilterRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FilterRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))
}

/// POST /ai/resume/filter
///
/// Screens every applicant of `jobId` with the model and returns them ranked.
pub async fn handle_filter_resumes(
    State(state): State<AppState>,
    _caller: Caller,
    body: Bytes,
) -> Result<Json<FilterSummary>, AppError> {
    let request = parse_filter_request(&body)?;
    let summary = filter_resumes(
        state.store.as_ref(),
        state.evaluator.as_ref(),
        state.config.screening_concurrency,
        &request,
    )
    .await?;

    Ok(Json(summary))
}

/// GET /tpo/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    _caller: Caller,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = state
        .store
        .list_jobs()
        .await?
        .into_iter()
        .map(|row| JobListing {
            id: row.id,
            job_title: row.title,
            company: row.company_name.map(|company_name| CompanyRef { company_name }),
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(JobListResponse { jobs }))
}
