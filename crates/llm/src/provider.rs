//! Provider Trait
//!
//! Defines the common interface for all text-generation providers.

use std::sync::Arc;

use async_trait::async_trait;

use super::types::{LlmError, LlmRequestOptions, LlmResponse, LlmResult, ProviderConfig};

/// Trait that all text-generation providers must implement.
///
/// One prompt in, one completed response out. The engine treats this as an
/// opaque capability: a deterministic stub satisfies it in tests, a
/// network-bound client in production.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;

    /// Send a single prompt and get the complete response.
    ///
    /// Blocks the calling task until the provider answers or fails. One
    /// attempt only; retry policy belongs to the caller.
    async fn generate(&self, prompt: &str, options: LlmRequestOptions) -> LlmResult<LlmResponse>;

    /// Check if the provider is healthy and reachable.
    ///
    /// For API providers this validates the API key against a cheap
    /// listing endpoint.
    async fn health_check(&self) -> LlmResult<()>;
}

/// Helper function to create an error for missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 => LlmError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => LlmError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => LlmError::ModelNotFound {
            model: body.to_string(),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
            retry_after: None,
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}

/// Create a provider from a ProviderConfig.
///
/// Factory function that maps ProviderType to the concrete implementation.
pub fn create_provider(config: ProviderConfig) -> Arc<dyn TextGenerator> {
    use super::types::ProviderType;
    use crate::gemini::GeminiProvider;
    use crate::openai::OpenAiProvider;

    match config.provider {
        ProviderType::Gemini => Arc::new(GeminiProvider::new(config)),
        ProviderType::OpenAI => Arc::new(OpenAiProvider::new(config)),
    }
}
