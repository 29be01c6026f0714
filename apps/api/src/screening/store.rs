//! Read-only access to jobs and their applicants.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::applicant::ApplicantRow;
use crate::models::job::{JobRow, JobSummaryRow};

/// Lookups the screening flow needs. Carried in `AppState` as `Arc<dyn PlacementStore>`.
#[async_trait]
pub trait PlacementStore: Send + Sync {
    /// The job with its company joined in, or `None` if it does not exist.
    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, sqlx::Error>;

    /// Everyone who applied to `job_id`, ordered by application time then applicant id.
    async fn find_applicants(&self, job_id: Uuid) -> Result<Vec<ApplicantRow>, sqlx::Error>;

    /// All jobs, newest first.
    async fn list_jobs(&self) -> Result<Vec<JobSummaryRow>, sqlx::Error>;
}

pub struct PgPlacementStore {
    pool: PgPool,
}

impl PgPlacementStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlacementStore for PgPlacementStore {
    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>(
            r#"
            SELECT j.id, j.title, j.description, j.eligibility,
                   j.company_id, c.name AS company_name, j.created_at
            FROM jobs j
            LEFT JOIN companies c ON c.id = j.company_id
            WHERE j.id = $1
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_applicants(&self, job_id: Uuid) -> Result<Vec<ApplicantRow>, sqlx::Error> {
        sqlx::query_as::<_, ApplicantRow>(
            r#"
            SELECT u.id, u.first_name, u.last_name, u.email,
                   sp.department, sp.year, sp.sgpa, sp.live_backlogs,
                   sp.internships, sp.resume
            FROM job_applications a
            JOIN users u ON u.id = a.user_id
            LEFT JOIN student_profiles sp ON sp.user_id = u.id
            WHERE a.job_id = $1
            ORDER BY a.applied_at, u.id
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn list_jobs(&self) -> Result<Vec<JobSummaryRow>, sqlx::Error> {
        sqlx::query_as::<_, JobSummaryRow>(
            r#"
            SELECT j.id, j.title, c.name AS company_name, j.created_at
            FROM jobs j
            LEFT JOIN companies c ON c.id = j.company_id
            ORDER BY j.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
