//! Shared test support: a scripted provider stub and campaign fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use vibepitch_core::{BrandTarget, EventContext, ToneStyle};
use vibepitch_llm::{
    LlmError, LlmRequestOptions, LlmResponse, LlmResult, ProviderConfig, StopReason, TextGenerator,
    UsageStats,
};

/// Build a successful text response for a stub script.
pub fn text_response(text: &str) -> LlmResult<LlmResponse> {
    Ok(LlmResponse {
        content: Some(text.to_string()),
        stop_reason: StopReason::EndTurn,
        usage: UsageStats::default(),
        model: "stub-model".to_string(),
    })
}

/// A provider stub that returns predefined responses in sequence and counts
/// how many times it was called.
pub struct StubProvider {
    responses: Mutex<Vec<LlmResult<LlmResponse>>>,
    calls: AtomicUsize,
    config: ProviderConfig,
}

impl StubProvider {
    pub fn new(responses: Vec<LlmResult<LlmResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
            config: ProviderConfig::default(),
        }
    }

    pub fn with_text_response(text: &str) -> Self {
        Self::new(vec![text_response(text)])
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn generate(&self, _prompt: &str, _options: LlmRequestOptions) -> LlmResult<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(LlmError::Other {
                message: "No more stub responses available".to_string(),
            })
        } else {
            responses.remove(0)
        }
    }

    async fn health_check(&self) -> LlmResult<()> {
        Ok(())
    }
}

/// The TechFest event fixture.
pub fn techfest() -> EventContext {
    EventContext {
        name: "TechFest".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        expected_footfall: 5000,
        deck_url: "https://techfest.example.com/deck".to_string(),
        signature: "— Team TechFest".to_string(),
    }
}

/// A bulk-grid-shaped brand row.
pub fn brand(name: &str) -> BrandTarget {
    BrandTarget::new(
        name,
        format!("{}.example.com", name.to_lowercase()),
        ToneStyle::CorporateProfessional,
    )
}
