//! Single-Pitch and Refinement Flow Tests
//!
//! Drives the generator and refinement engine end-to-end against the
//! scripted provider stub.

use std::sync::Arc;

use vibepitch::{EngineError, PitchGenerator, RefinementEngine, DEFAULT_SUBJECT};
use vibepitch_core::{BatchResult, BatchRow, BrandTarget, PitchResult, ToneStyle};
use vibepitch_llm::LlmError;

use crate::support::{brand, techfest, text_response, StubProvider};

// ============================================================================
// Single Pitch Generation
// ============================================================================

#[tokio::test]
async fn test_single_pitch_end_to_end() {
    let provider = Arc::new(StubProvider::with_text_response(
        "SUBJECT: Let's Team Up\nBODY: \nHey Acme team...\n— Team TechFest",
    ));
    let generator = PitchGenerator::new(provider.clone());

    let acme = BrandTarget::new("Acme", "acme.com", ToneStyle::PlayfulCreative);
    let result = generator.generate(&techfest(), &acme).await;

    assert!(result.is_ok());
    assert_eq!(result.subject, "Let's Team Up");
    assert_eq!(result.body, "Hey Acme team...\n— Team TechFest");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_single_pitch_unstructured_output_degrades_gracefully() {
    let provider = Arc::new(StubProvider::with_text_response(
        "Dear Acme, we would love to work together.",
    ));
    let generator = PitchGenerator::new(provider);

    let result = generator
        .generate(&techfest(), &brand("Acme"))
        .await;

    assert!(result.is_ok());
    assert_eq!(result.subject, DEFAULT_SUBJECT);
    assert_eq!(result.body, "Dear Acme, we would love to work together.");
}

#[tokio::test]
async fn test_single_pitch_provider_failure_surfaces() {
    let provider = Arc::new(StubProvider::new(vec![Err(LlmError::AuthenticationFailed {
        message: "bad key".to_string(),
    })]));
    let generator = PitchGenerator::new(provider);

    let err = generator
        .try_generate(&techfest(), &brand("Acme"))
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Provider(_)));
    assert!(err.to_string().contains("bad key"));
}

#[tokio::test]
async fn test_single_pitch_missing_names_rejected_before_any_call() {
    let provider = Arc::new(StubProvider::with_text_response("unused"));
    let generator = PitchGenerator::new(provider.clone());

    let mut event = techfest();
    event.name = String::new();
    assert!(generator
        .try_generate(&event, &brand("Acme"))
        .await
        .is_err());

    assert!(generator
        .try_generate(&techfest(), &brand(""))
        .await
        .is_err());

    assert_eq!(provider.call_count(), 0);
}

// ============================================================================
// Refinement Flows
// ============================================================================

#[tokio::test]
async fn test_refine_replaces_body_only() {
    let provider = Arc::new(StubProvider::with_text_response("Shorter body."));
    let engine = RefinementEngine::new(provider);

    let new_body = engine
        .refine("Hey Acme team, a very long body...", "make it shorter")
        .await
        .unwrap();

    assert_eq!(new_body, "Shorter body.");
}

#[tokio::test]
async fn test_refine_row_round_trip() {
    let provider = Arc::new(StubProvider::with_text_response("Punchier body."));
    let engine = RefinementEngine::new(provider);

    let mut batch = BatchResult::new();
    let row = BatchRow::new(
        brand("Acme"),
        PitchResult::ok("Let's Team Up", "Original body."),
    );
    let id = row.id;
    batch.push(row);

    engine
        .refine_row(&mut batch, id, "make it punchier")
        .await
        .unwrap();

    let row = batch.row(id).unwrap();
    assert_eq!(row.id, id);
    assert_eq!(row.result.subject, "Let's Team Up");
    assert_eq!(row.result.body, "Punchier body.");
}

#[tokio::test]
async fn test_refine_failure_propagates_without_fallback() {
    let provider = Arc::new(StubProvider::new(vec![Err(LlmError::ServerError {
        message: "overloaded".to_string(),
        status: Some(503),
    })]));
    let engine = RefinementEngine::new(provider);

    let err = engine.refine("body", "shorter").await.unwrap_err();
    assert!(matches!(err, EngineError::Provider(_)));
}

#[tokio::test]
async fn test_generate_then_refine_sequence() {
    let provider = Arc::new(StubProvider::new(vec![
        text_response("SUBJECT: Hi\nBODY: \nLong first draft."),
        text_response("Tight second draft."),
    ]));
    let generator = PitchGenerator::new(provider.clone());
    let engine = RefinementEngine::new(provider.clone());

    let pitch = generator.generate(&techfest(), &brand("Acme")).await;
    assert_eq!(pitch.body, "Long first draft.");

    let refined = engine.refine(&pitch.body, "tighten it").await.unwrap();
    assert_eq!(refined, "Tight second draft.");
    assert_eq!(provider.call_count(), 2);
}
