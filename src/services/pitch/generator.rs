//! Pitch Generation
//!
//! The atomic unit of work: one brand, one provider call, one parsed result.

use std::sync::Arc;

use tracing::{debug, warn};

use vibepitch_core::{BrandTarget, EventContext, PitchResult};
use vibepitch_llm::{LlmError, LlmRequestOptions, LlmResponse, TextGenerator};

use crate::services::pitch::composer::compose_pitch_prompt;
use crate::services::pitch::parser::{parse_pitch_response, ParsedPitch};
use crate::utils::error::{EngineError, EngineResult};

/// Pull the text out of a provider response.
///
/// An empty or missing completion is a provider failure, not something the
/// marker fallback should paper over.
pub(crate) fn extract_response_text(response: &LlmResponse) -> EngineResult<String> {
    response.text().map(str::to_string).ok_or_else(|| {
        EngineError::Provider(LlmError::ParseError {
            message: format!(
                "response contained no text content (model: {}, stop_reason: {:?})",
                response.model, response.stop_reason
            ),
        })
    })
}

/// Generates one pitch per call against an injected provider.
///
/// Stateless between calls; the provider handle is the only thing it holds.
pub struct PitchGenerator {
    provider: Arc<dyn TextGenerator>,
}

impl PitchGenerator {
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self { provider }
    }

    /// Generate a pitch, propagating any failure to the caller.
    ///
    /// This is the single-pitch entry point: a half-generated pitch is
    /// worthless, so provider errors surface directly. Input validation
    /// happens before any provider call.
    pub async fn try_generate(
        &self,
        event: &EventContext,
        brand: &BrandTarget,
    ) -> EngineResult<ParsedPitch> {
        event.validate()?;
        brand.validate()?;

        let prompt = compose_pitch_prompt(event, brand);
        debug!(brand = %brand.name, prompt_len = prompt.len(), "generating pitch");

        let response = self
            .provider
            .generate(&prompt, LlmRequestOptions::default())
            .await?;
        let text = extract_response_text(&response)?;

        Ok(parse_pitch_response(&text))
    }

    /// Generate a pitch, capturing any failure into the result.
    ///
    /// This is the batch-row entry point: one brand's failure must not abort
    /// the surrounding run, so every outcome is representable as data.
    pub async fn generate(&self, event: &EventContext, brand: &BrandTarget) -> PitchResult {
        match self.try_generate(event, brand).await {
            Ok(pitch) => PitchResult::ok(pitch.subject, pitch.body),
            Err(err) => {
                warn!(brand = %brand.name, error = %err, "pitch generation failed");
                PitchResult::failed(err.to_string())
            }
        }
    }
}
