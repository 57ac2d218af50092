//! Gemini Provider
//!
//! Implementation of the TextGenerator trait for Google's Generative
//! Language API (`generateContent`).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::provider::{missing_api_key_error, parse_http_error, TextGenerator};
use super::types::{
    LlmError, LlmRequestOptions, LlmResponse, LlmResult, ProviderConfig, StopReason, UsageStats,
};
use crate::http_client::build_http_client;

/// Default Gemini API base URL
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider
pub struct GeminiProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given configuration
    pub fn new(config: ProviderConfig) -> Self {
        let client = build_http_client(config.timeout_secs);
        Self { config, client }
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(GEMINI_API_URL)
    }

    /// Build the request body for the API
    fn build_request_body(
        &self,
        prompt: &str,
        request_options: &LlmRequestOptions,
    ) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": request_options
                    .temperature_override
                    .unwrap_or(self.config.temperature),
                "maxOutputTokens": request_options
                    .max_tokens_override
                    .unwrap_or(self.config.max_tokens),
            }
        })
    }

    /// Map a Gemini API response to an LlmResponse.
    ///
    /// A prompt-level block or a safety-terminated empty candidate is a
    /// provider failure, not a response.
    fn parse_response(&self, response: GeminiResponse) -> LlmResult<LlmResponse> {
        if let Some(feedback) = &response.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                return Err(LlmError::ContentBlocked {
                    message: format!("prompt blocked: {}", reason),
                });
            }
        }

        let candidate = response.candidates.into_iter().next();

        let stop_reason = candidate
            .as_ref()
            .and_then(|c| c.finish_reason.as_deref())
            .map(StopReason::from)
            .unwrap_or(StopReason::EndTurn);

        let content = candidate.and_then(|c| c.content).map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        });

        if stop_reason == StopReason::Safety && content.as_deref().unwrap_or("").trim().is_empty() {
            return Err(LlmError::ContentBlocked {
                message: "candidate terminated by safety filter".to_string(),
            });
        }

        let usage = response
            .usage_metadata
            .map(|u| UsageStats {
                input_tokens: u.prompt_token_count.unwrap_or(0),
                output_tokens: u.candidates_token_count.unwrap_or(0),
            })
            .unwrap_or_default();

        Ok(LlmResponse {
            content,
            stop_reason,
            usage,
            model: response
                .model_version
                .unwrap_or_else(|| self.config.model.clone()),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn generate(&self, prompt: &str, options: LlmRequestOptions) -> LlmResult<LlmResponse> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("gemini"))?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url(),
            self.config.model
        );
        let body = self.build_request_body(prompt, &options);

        debug!(prompt_len = prompt.len(), model = %self.config.model, "gemini: sending request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(|e| LlmError::NetworkError {
            message: e.to_string(),
        })?;

        if status != 200 {
            return Err(parse_http_error(status, &body_text, "gemini"));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&body_text).map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        let parsed = self.parse_response(gemini_response)?;
        debug!(
            content_len = parsed.content.as_deref().map(str::len).unwrap_or(0),
            stop_reason = ?parsed.stop_reason,
            "gemini: response received"
        );
        Ok(parsed)
    }

    async fn health_check(&self) -> LlmResult<()> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("gemini"))?;

        let url = format!("{}/models", self.base_url());
        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", api_key)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            let body_text = response.text().await.unwrap_or_default();
            return Err(parse_http_error(status, &body_text, "gemini"));
        }

        Ok(())
    }
}

// Wire format structs for the Gemini API

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
    usage_metadata: Option<GeminiUsageMetadata>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}
