use std::sync::Arc;

use crate::config::Config;
use crate::screening::evaluator::CandidateEvaluator;
use crate::screening::store::PlacementStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only job and applicant lookups. Default: `PgPlacementStore`.
    pub store: Arc<dyn PlacementStore>,
    /// Per-applicant judgment. Default: `LlmCandidateEvaluator`.
    pub evaluator: Arc<dyn CandidateEvaluator>,
    pub config: Config,
}
