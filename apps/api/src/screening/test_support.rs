//! In-memory fakes for the screening seams.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::llm_client::LlmError;
use crate::models::applicant::ApplicantRow;
use crate::models::job::{JobRow, JobSummaryRow};
use crate::screening::evaluator::{CandidateEvaluator, Evaluation, Recommendation};
use crate::screening::profile::ApplicantProfile;
use crate::screening::store::PlacementStore;

pub fn bare_applicant() -> ApplicantRow {
    ApplicantRow {
        id: Uuid::new_v4(),
        first_name: None,
        last_name: None,
        email: "student@college.edu".to_string(),
        department: None,
        year: None,
        sgpa: None,
        live_backlogs: None,
        internships: None,
        resume: None,
    }
}

pub fn applicant_named(first_name: &str) -> ApplicantRow {
    ApplicantRow {
        first_name: Some(first_name.to_string()),
        email: format!("{}@college.edu", first_name.to_lowercase()),
        department: Some("Computer".to_string()),
        year: Some(4),
        sgpa: Some(vec![Some(8.0), Some(9.0)]),
        ..bare_applicant()
    }
}

pub fn sample_job() -> JobRow {
    JobRow {
        id: Uuid::new_v4(),
        title: "Backend Engineer".to_string(),
        description: Some("Build and operate placement services.".to_string()),
        eligibility: Some("CGPA above 7, no live backlogs.".to_string()),
        company_id: Some(Uuid::new_v4()),
        company_name: Some("Acme".to_string()),
        created_at: Utc::now(),
    }
}

#[derive(Default)]
pub struct FakeStore {
    job: Option<JobRow>,
    applicants: Vec<ApplicantRow>,
    lookups: AtomicUsize,
}

impl FakeStore {
    pub fn with_job(job: JobRow, applicants: Vec<ApplicantRow>) -> Self {
        Self {
            job: Some(job),
            applicants,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlacementStore for FakeStore {
    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.job.clone().filter(|j| j.id == job_id))
    }

    async fn find_applicants(&self, job_id: Uuid) -> Result<Vec<ApplicantRow>, sqlx::Error> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match &self.job {
            Some(job) if job.id == job_id => Ok(self.applicants.clone()),
            _ => Ok(Vec::new()),
        }
    }

    async fn list_jobs(&self) -> Result<Vec<JobSummaryRow>, sqlx::Error> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .job
            .iter()
            .map(|j| JobSummaryRow {
                id: j.id,
                title: j.title.clone(),
                company_name: j.company_name.clone(),
                created_at: j.created_at,
            })
            .collect())
    }
}

/// Answers by applicant name. Unscripted names fail like an empty completion.
#[derive(Default)]
pub struct ScriptedEvaluator {
    script: HashMap<String, Option<(u8, Recommendation)>>,
    calls: AtomicUsize,
}

impl ScriptedEvaluator {
    pub fn score(mut self, name: &str, score: u8, recommendation: Recommendation) -> Self {
        self.script
            .insert(name.to_string(), Some((score, recommendation)));
        self
    }

    pub fn fail(mut self, name: &str) -> Self {
        self.script.insert(name.to_string(), None);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CandidateEvaluator for ScriptedEvaluator {
    async fn evaluate(
        &self,
        profile: &ApplicantProfile,
        _job: &JobRow,
    ) -> Result<Evaluation, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.get(&profile.name) {
            Some(Some((score, recommendation))) => Ok(Evaluation {
                match_score: *score,
                recommendation: *recommendation,
                reason: format!("scripted for {}", profile.name),
                matches: vec!["CGPA".to_string()],
                gaps: Vec::new(),
            }),
            Some(None) => Err(LlmError::Api {
                status: 503,
                message: "provider unavailable".to_string(),
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}

/// Every lookup fails as if the pool were exhausted.
pub struct BrokenStore;

#[async_trait]
impl PlacementStore for BrokenStore {
    async fn find_job(&self, _job_id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_applicants(&self, _job_id: Uuid) -> Result<Vec<ApplicantRow>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn list_jobs(&self) -> Result<Vec<JobSummaryRow>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}
