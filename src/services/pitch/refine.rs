//! Pitch Refinement
//!
//! Rewrites an existing email body from a free-text command via a second
//! provider call. Only the body is ever replaced; subject and row identity
//! are untouched. Unlike generation there is no fallback: a failed rewrite
//! surfaces to the caller rather than silently keeping stale text.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use vibepitch_core::BatchResult;
use vibepitch_llm::{LlmRequestOptions, TextGenerator};

use crate::services::pitch::composer::compose_refine_prompt;
use crate::services::pitch::generator::extract_response_text;
use crate::utils::error::{EngineError, EngineResult};

/// Rewrites pitch bodies against an injected provider.
pub struct RefinementEngine {
    provider: Arc<dyn TextGenerator>,
}

impl RefinementEngine {
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self { provider }
    }

    /// Rewrite `current_body` per `instruction` and return the new body.
    ///
    /// A blank instruction is rejected before any provider call.
    pub async fn refine(&self, current_body: &str, instruction: &str) -> EngineResult<String> {
        if instruction.trim().is_empty() {
            return Err(EngineError::validation("refinement command is required"));
        }

        let prompt = compose_refine_prompt(current_body, instruction);
        debug!(instruction = %instruction, body_len = current_body.len(), "refining pitch body");

        let response = self
            .provider
            .generate(&prompt, LlmRequestOptions::default())
            .await?;
        extract_response_text(&response)
    }

    /// Rewrite one batch row's body in place, addressed by row id.
    pub async fn refine_row(
        &self,
        batch: &mut BatchResult,
        row_id: Uuid,
        instruction: &str,
    ) -> EngineResult<()> {
        let current_body = batch
            .row(row_id)
            .ok_or_else(|| EngineError::not_found(format!("no row with id: {}", row_id)))?
            .result
            .body
            .clone();

        let new_body = self.refine(&current_body, instruction).await?;
        batch.set_body(row_id, new_body)?;
        Ok(())
    }
}
