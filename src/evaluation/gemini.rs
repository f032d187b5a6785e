//! Gemini `generateContent` client
//!
//! The model is asked to simulate running the code and answer in JSON that
//! matches [`ExecutionResult`]'s wire format, enforced through a response
//! schema.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use super::prompt::build_prompt;
use super::{EvaluationError, EvaluationRequest, Evaluator, ExecutionResult, Result};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Where and how to reach the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl GeminiSettings {
    /// Settings with the API key read from the first set variable in `key_vars`
    pub fn from_env(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        key_vars: &[&str],
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = key_vars
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .ok_or_else(|| EvaluationError::MissingApiKey {
                variables: key_vars.join(", "),
            })?;
        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key,
            timeout,
        })
    }

    /// `{endpoint}/models/{model}:generateContent`
    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

pub struct GeminiEvaluator {
    client: Client,
    settings: GeminiSettings,
}

impl GeminiEvaluator {
    pub fn new(settings: GeminiSettings) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }
}

impl Evaluator for GeminiEvaluator {
    fn evaluate(&self, request: &EvaluationRequest) -> Result<ExecutionResult> {
        let payload = request_body(&build_prompt(request));
        tracing::info!(
            model = %self.settings.model,
            language = %request.language,
            "Requesting evaluation"
        );

        let response = self
            .client
            .post(self.settings.url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(EvaluationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response_text(&body)?;
        let result: ExecutionResult = serde_json::from_str(&text)?;
        tracing::debug!(status = ?result.status, cases = result.results.len(), "Evaluation result");
        Ok(result)
    }
}

/// Request payload: the prompt plus JSON output constrained by a schema
fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "role": "user", "parts": [{ "text": prompt }] }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
        }
    })
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "status": { "type": "STRING", "enum": ["Pass", "Fail", "Error"] },
            "executionTime": { "type": "NUMBER" },
            "errorMessage": { "type": "STRING" },
            "results": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "input": { "type": "STRING" },
                        "expected": { "type": "STRING" },
                        "actual": { "type": "STRING" },
                        "passed": { "type": "BOOLEAN" }
                    },
                    "required": ["input", "expected", "actual", "passed"]
                }
            }
        },
        "required": ["status", "executionTime", "results"]
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Concatenated text of the first candidate; empty text is an error
fn response_text(body: &str) -> Result<String> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(EvaluationError::EmptyResponse);
    }
    Ok(text)
}
