//! Evaluation collaborator
//!
//! Submitted code is never executed locally. An [`Evaluator`] is asked for a
//! verdict and every way that can go wrong is folded into an
//! [`ExecutionStatus::Error`] result by [`evaluate_at_boundary`], so nothing
//! past this module ever sees a failed evaluation call.

mod gemini;
mod prompt;

use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Problem, TestCase};
use crate::syntax::Language;

pub use gemini::{GeminiEvaluator, GeminiSettings, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use prompt::{build_prompt, format_test_cases};

/// Shown when the collaborator fails or returns something unusable
pub const COMMUNICATION_FAILURE_MESSAGE: &str = "Failed to communicate with execution engine.";

/// Shown when the evaluation itself blew up
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "An unexpected error occurred during execution.";

pub type Result<T> = std::result::Result<T, EvaluationError>;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API key not set (looked in {variables})")]
    MissingApiKey { variables: String },

    #[error("evaluation service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("empty response from evaluation service")]
    EmptyResponse,
}

/// Overall verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    Pass,
    Fail,
    Error,
}

/// Outcome of one sample test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

/// Verdict for a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    /// Estimated execution time in milliseconds
    pub execution_time: f64,
    #[serde(default)]
    pub results: Vec<TestResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ExecutionResult {
    /// An `Error` verdict with no per-case results
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ExecutionStatus::Error,
            execution_time: 0.0,
            results: Vec::new(),
            error_message: Some(message.into()),
        }
    }

    /// The error message, when one is present and non-empty
    pub fn error_text(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|m| !m.is_empty())
    }

    pub fn is_pass(&self) -> bool {
        self.status == ExecutionStatus::Pass
    }
}

/// Everything sent to the collaborator for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    pub code: String,
    pub language: Language,
    pub title: String,
    pub description: String,
    pub test_cases: Vec<TestCase>,
}

impl EvaluationRequest {
    /// Snapshot `code` for `problem`
    pub fn new(code: impl Into<String>, language: Language, problem: &Problem) -> Self {
        Self {
            code: code.into(),
            language,
            title: problem.title.clone(),
            description: problem.description.clone(),
            test_cases: problem.examples.clone(),
        }
    }
}

/// Something that can judge a submission
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, request: &EvaluationRequest) -> Result<ExecutionResult>;
}

/// Ask `evaluator` for a verdict; failures and panics become `Error` results.
pub fn evaluate_at_boundary(evaluator: &dyn Evaluator, request: &EvaluationRequest) -> ExecutionResult {
    match panic::catch_unwind(AssertUnwindSafe(|| evaluator.evaluate(request))) {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            tracing::error!("Evaluation failed: {}", e);
            ExecutionResult::error(COMMUNICATION_FAILURE_MESSAGE)
        }
        Err(_) => {
            tracing::error!("Evaluation panicked");
            ExecutionResult::error(UNEXPECTED_FAILURE_MESSAGE)
        }
    }
}
