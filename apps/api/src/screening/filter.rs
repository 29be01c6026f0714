//! Resume filtering: screens every applicant of a job and ranks them.
//!
//! Pipeline: validate → load job → load applicants → evaluate each (in
//! enumeration order, `concurrency` in flight) → stable sort by score → count.
//! A failed evaluation never aborts the batch; it becomes a fallback result.

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::applicant::ApplicantRow;
use crate::models::job::JobRow;
use crate::screening::evaluator::{CandidateEvaluator, Evaluation, Recommendation};
use crate::screening::profile::ApplicantProfile;
use crate::screening::store::PlacementStore;

pub const FALLBACK_SCORE: u8 = 50;
pub const FALLBACK_REASON: &str = "AI evaluation failed, manual review required";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    pub job_id: Option<String>,
    /// Accepted for client compatibility; screening does not narrow by it.
    #[allow(dead_code)]
    #[serde(default)]
    pub filters: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub applicant_id: Uuid,
    pub applicant_name: String,
    pub email: String,
    pub department: String,
    pub year: i32,
    pub cgpa: f64,
    pub match_score: u8,
    pub recommendation: Recommendation,
    pub reason: String,
    pub matches: Vec<String>,
    pub gaps: Vec<String>,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSummary {
    pub total_applicants: usize,
    pub filtered_results: Vec<MatchResult>,
    pub shortlisted: usize,
    pub maybe: usize,
    pub rejected: usize,
}

impl FilterSummary {
    pub fn empty() -> Self {
        Self {
            total_applicants: 0,
            filtered_results: Vec::new(),
            shortlisted: 0,
            maybe: 0,
            rejected: 0,
        }
    }
}

/// How one applicant's result was produced. On the wire both look the same.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Evaluated(MatchResult),
    Fallback(MatchResult),
}

impl Outcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    pub fn into_result(self) -> MatchResult {
        match self {
            Outcome::Evaluated(result) | Outcome::Fallback(result) => result,
        }
    }
}

fn base_result(
    applicant: &ApplicantRow,
    profile: ApplicantProfile,
    evaluation: Evaluation,
) -> MatchResult {
    MatchResult {
        applicant_id: applicant.id,
        applicant_name: profile.name,
        email: applicant.email.clone(),
        department: profile.department,
        year: profile.year,
        cgpa: profile.cgpa,
        match_score: evaluation.match_score,
        recommendation: evaluation.recommendation,
        reason: evaluation.reason,
        matches: evaluation.matches,
        gaps: evaluation.gaps,
        resume: applicant.resume.clone(),
    }
}

/// The result recorded for an applicant whose evaluation could not be obtained.
pub fn fallback_result(applicant: &ApplicantRow, profile: ApplicantProfile) -> MatchResult {
    base_result(
        applicant,
        profile,
        Evaluation {
            match_score: FALLBACK_SCORE,
            recommendation: Recommendation::Maybe,
            reason: FALLBACK_REASON.to_string(),
            matches: Vec::new(),
            gaps: Vec::new(),
        },
    )
}

/// Screens a single applicant. Never fails.
pub async fn screen_applicant(
    evaluator: &dyn CandidateEvaluator,
    applicant: &ApplicantRow,
    job: &JobRow,
) -> Outcome {
    let profile = ApplicantProfile::derive(applicant);

    match evaluator.evaluate(&profile, job).await {
        Ok(evaluation) => Outcome::Evaluated(base_result(applicant, profile, evaluation)),
        Err(e) => {
            warn!(
                applicant_id = %applicant.id,
                job_id = %job.id,
                "Evaluation failed, using fallback: {e}"
            );
            Outcome::Fallback(fallback_result(applicant, profile))
        }
    }
}

/// Ranks results by score, highest first. Equal scores keep enumeration order.
pub fn summarize(total_applicants: usize, outcomes: Vec<Outcome>) -> FilterSummary {
    let mut results: Vec<MatchResult> = outcomes.into_iter().map(Outcome::into_result).collect();
    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    let count = |label: Recommendation| {
        results
            .iter()
            .filter(|r| r.recommendation == label)
            .count()
    };

    FilterSummary {
        total_applicants,
        shortlisted: count(Recommendation::Shortlist),
        maybe: count(Recommendation::Maybe),
        rejected: count(Recommendation::Reject),
        filtered_results: results,
    }
}

/// Screens every applicant of the requested job.
///
/// Errors: `Validation` when `jobId` is missing, `NotFound` when the job does
/// not exist, `Database` when a lookup fails. Model failures are absorbed.
pub async fn filter_resumes(
    store: &dyn PlacementStore,
    evaluator: &dyn CandidateEvaluator,
    concurrency: usize,
    request: &FilterRequest,
) -> Result<FilterSummary, AppError> {
    let raw_id = request
        .job_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("Job ID is required".to_string()))?;

    // An id that cannot name a job is reported like any other unknown job.
    let job_id =
        Uuid::parse_str(raw_id).map_err(|_| AppError::NotFound("Job not found".to_string()))?;

    let job = store
        .find_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    let applicants = store.find_applicants(job_id).await?;
    if applicants.is_empty() {
        info!(%job_id, "No applicants to screen");
        return Ok(FilterSummary::empty());
    }

    let job = &job;
    let applicants = &applicants;
    let outcomes: Vec<Outcome> = stream::iter(0..applicants.len())
        .map(|i| screen_applicant(evaluator, &applicants[i], job))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let fallbacks = outcomes.iter().filter(|o| o.is_fallback()).count();
    let summary = summarize(applicants.len(), outcomes);

    info!(
        %job_id,
        total = summary.total_applicants,
        shortlisted = summary.shortlisted,
        maybe = summary.maybe,
        rejected = summary.rejected,
        fallbacks,
        "Screened applicants"
    );

    Ok(summary)
}
