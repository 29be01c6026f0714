//! Candidate Evaluator: asks the model whether one applicant suits one job.
//!
//! `AppState` holds an `Arc<dyn CandidateEvaluator>`; tests swap in fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::llm_client::{parse_json_content, ChatRequest, LlmClient, LlmError};
use crate::models::job::JobRow;
use crate::screening::profile::{truncate_chars, ApplicantProfile};
use crate::screening::prompts::{EVALUATION_PROMPT_TEMPLATE, SCREENING_SYSTEM};

/// Job text beyond this many characters is not sent to the model.
pub const JOB_TEXT_LIMIT: usize = 500;
const TEMPERATURE: f32 = 0.5;
const MAX_OUTPUT_TOKENS: u32 = 500;
pub const NO_REASON: &str = "No reason provided";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Shortlist,
    #[default]
    Maybe,
    Reject,
}

impl Recommendation {
    /// Case-insensitive. Anything unrecognised is `Maybe`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "shortlist" => Recommendation::Shortlist,
            "reject" => Recommendation::Reject,
            _ => Recommendation::Maybe,
        }
    }
}

/// The model's judgment of one applicant, after defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub match_score: u8,
    pub recommendation: Recommendation,
    pub reason: String,
    pub matches: Vec<String>,
    pub gaps: Vec<String>,
}

impl Evaluation {
    /// Parses the model's content. Only a JSON object is accepted; each field
    /// falls back to its default when missing or of the wrong shape.
    pub fn from_model_json(text: &str) -> Result<Self, LlmError> {
        let fields: Map<String, Value> = parse_json_content(text)?;
        Ok(Self::from_fields(&fields))
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            match_score: fields.get("matchScore").map_or(0, score_from_value),
            recommendation: fields
                .get("recommendation")
                .and_then(Value::as_str)
                .map(Recommendation::from_label)
                .unwrap_or_default(),
            reason: fields
                .get("reason")
                .and_then(Value::as_str)
                .filter(|r| !r.trim().is_empty())
                .unwrap_or(NO_REASON)
                .to_string(),
            matches: string_list(fields.get("matches")),
            gaps: string_list(fields.get("gaps")),
        }
    }
}

/// Numbers and numeric strings are rounded and clamped to 0..=100; anything else is 0.
fn score_from_value(value: &Value) -> u8 {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    raw.filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Two decimals, or a bare `0` when no term was graded.
fn render_cgpa(cgpa: f64) -> String {
    if cgpa == 0.0 {
        "0".to_string()
    } else {
        format!("{cgpa:.2}")
    }
}

/// The completion request sent for one applicant.
pub fn screening_request(prompt: &str) -> ChatRequest<'_> {
    ChatRequest {
        system: SCREENING_SYSTEM,
        prompt,
        temperature: TEMPERATURE,
        max_tokens: MAX_OUTPUT_TOKENS,
        json_object: true,
    }
}

/// Builds the per-applicant evaluation prompt.
pub fn build_evaluation_prompt(profile: &ApplicantProfile, job: &JobRow) -> String {
    let clipped = |text: &Option<String>| {
        text.as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| truncate_chars(t, JOB_TEXT_LIMIT).to_string())
            .unwrap_or_else(|| "N/A".to_string())
    };

    EVALUATION_PROMPT_TEMPLATE
        .replace("{name}", &profile.name)
        .replace("{department}", &profile.department)
        .replace("{year}", &profile.year.to_string())
        .replace("{cgpa}", &render_cgpa(profile.cgpa))
        .replace("{backlogs}", &profile.backlogs.to_string())
        .replace("{has_resume}", &profile.has_resume.to_string())
        .replace("{internships}", &profile.internships.to_string())
        .replace("{job_title}", &job.title)
        .replace("{job_description}", &clipped(&job.description))
        .replace("{job_eligibility}", &clipped(&job.eligibility))
}

#[async_trait]
pub trait CandidateEvaluator: Send + Sync {
    async fn evaluate(
        &self,
        profile: &ApplicantProfile,
        job: &JobRow,
    ) -> Result<Evaluation, LlmError>;
}

/// Evaluates through the chat-completion API with low-temperature JSON output.
pub struct LlmCandidateEvaluator(pub LlmClient);

#[async_trait]
impl CandidateEvaluator for LlmCandidateEvaluator {
    async fn evaluate(
        &self,
        profile: &ApplicantProfile,
        job: &JobRow,
    ) -> Result<Evaluation, LlmError> {
        let prompt = build_evaluation_prompt(profile, job);
        let fields: Map<String, Value> =
            self.0.complete_json(&screening_request(&prompt)).await?;
        Ok(Evaluation::from_fields(&fields))
    }
}
