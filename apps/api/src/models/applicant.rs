use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A student who has applied to a job, with the academic profile fields
/// screening reads. Every profile column is nullable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicantRow {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub department: Option<String>,
    pub year: Option<i32>,
    /// Per-term grade points, in term order. Unrecorded terms are NULL.
    pub sgpa: Option<Vec<Option<f64>>>,
    pub live_backlogs: Option<i32>,
    pub internships: Option<Json<Vec<Value>>>,
    /// Stored resume file reference.
    pub resume: Option<String>,
}
