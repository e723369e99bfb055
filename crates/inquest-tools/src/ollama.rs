//! Ollama stage tool implementation
//!
//! Runs research/analysis/writing stages against a local Ollama instance.
//!
//! # Features
//!
//! - Async HTTP communication with the Ollama API
//! - Configurable endpoint and model
//! - Retry logic with exponential backoff for transient network failures
//! - Timeout handling surfaced as [`ToolError`]

use crate::prompt::build_prompt;
use crate::ToolError;
use inquest_domain::traits::StageTool;
use inquest_domain::{Stage, StageParameters};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for a single stage invocation (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of transient-failure retries inside one invocation
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Ollama-backed stage tool
///
/// Builds a per-stage prompt from the parameters and generates text with a
/// local model. Transient network failures are retried internally; a fully
/// failed invocation surfaces as a [`ToolError`], which feeds the
/// controller's own retry budget.
pub struct OllamaTool {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
    #[allow(dead_code)]
    done: bool,
}

impl OllamaTool {
    /// Create a new Ollama stage tool
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use inquest_tools::OllamaTool;
    ///
    /// let tool = OllamaTool::new("http://localhost:11434", "llama2");
    /// ```
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create a tool against the default local endpoint
    pub fn default_endpoint(model: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Set the maximum number of internal retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Generate text for one stage invocation
    ///
    /// # Errors
    ///
    /// Returns an error if Ollama is unreachable, the model is not
    /// available, or the response cannot be parsed.
    pub async fn generate(
        &self,
        stage: Stage,
        parameters: &StageParameters,
    ) -> Result<String, ToolError> {
        let url = format!("{}/api/generate", self.endpoint);
        let request_body = OllamaGenerateRequest {
            model: self.model.clone(),
            prompt: build_prompt(stage, parameters),
            stream: false,
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return match response.json::<OllamaGenerateResponse>().await {
                            Ok(body) => Ok(body.response),
                            Err(e) => Err(ToolError::InvalidResponse(format!(
                                "Failed to parse response: {}",
                                e
                            ))),
                        };
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(ToolError::ModelNotAvailable(self.model.clone()));
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(ToolError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) if e.is_timeout() => {
                    last_error = Some(ToolError::Timeout);
                }
                Err(e) => {
                    last_error =
                        Some(ToolError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| ToolError::Communication("Max retries exceeded".to_string())))
    }
}

impl StageTool for OllamaTool {
    type Error = ToolError;

    fn run(&self, stage: Stage, parameters: &StageParameters) -> Result<String, ToolError> {
        // Blocking wrapper for the async client; the controller invokes
        // stage tools from a blocking task
        tokio::runtime::Runtime::new()
            .map_err(|e| ToolError::Execution(format!("Runtime error: {}", e)))?
            .block_on(async { self.generate(stage, parameters).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_creation() {
        let tool = OllamaTool::new("http://localhost:11434", "llama2");
        assert_eq!(tool.endpoint, "http://localhost:11434");
        assert_eq!(tool.model, "llama2");
        assert_eq!(tool.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_default_endpoint() {
        let tool = OllamaTool::default_endpoint("mistral");
        assert_eq!(tool.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_with_max_retries() {
        let tool = OllamaTool::new("http://localhost:11434", "llama2").with_max_retries(5);
        assert_eq!(tool.max_retries, 5);
    }

    // Integration test (requires running Ollama)
    #[tokio::test]
    #[ignore]
    async fn test_generate_integration() {
        let tool = OllamaTool::default_endpoint("llama2");
        let params = StageParameters::new("What is Rust?", 3, 50);
        let result = tool.generate(Stage::Research, &params).await;
        assert!(result.is_ok());
    }
}
