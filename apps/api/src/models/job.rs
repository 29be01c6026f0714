use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting joined with its company.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub eligibility: Option<String>,
    pub company_id: Option<Uuid>,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Compact job row backing the screening job picker.
#[derive(Debug, Clone, FromRow)]
pub struct JobSummaryRow {
    pub id: Uuid,
    pub title: String,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
