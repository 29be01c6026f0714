// AI resume screening: ranks a job's applicants by model-judged fit.
// All model calls go through llm_client via the CandidateEvaluator seam.

pub mod evaluator;
pub mod filter;
pub mod handlers;
pub mod profile;
pub mod prompts;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;
