//! Bulk Execution Flow Tests
//!
//! Drives the batch runner end-to-end: ordering, failure isolation, empty
//! input rejection, and progress reporting.

use std::sync::Arc;

use vibepitch::{BatchConfig, BatchEvent, BatchRunner, EngineError, RefinementEngine};
use vibepitch_llm::LlmError;

use crate::support::{brand, techfest, text_response, StubProvider};

#[tokio::test]
async fn test_batch_all_rows_succeed_in_order() {
    let provider = Arc::new(StubProvider::new(vec![
        text_response("SUBJECT: A\nBODY: \nPitch for Acme\n— Team TechFest"),
        text_response("SUBJECT: B\nBODY: \nPitch for Globex\n— Team TechFest"),
    ]));
    let runner = BatchRunner::new(provider.clone(), BatchConfig::no_delay());

    let batch = runner
        .run(&techfest(), vec![brand("Acme"), brand("Globex")], |_| {})
        .await
        .unwrap();

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.succeeded(), 2);
    assert_eq!(batch.rows()[0].brand.name, "Acme");
    assert_eq!(batch.rows()[0].result.subject, "A");
    assert_eq!(batch.rows()[1].brand.name, "Globex");
    assert_eq!(batch.rows()[1].result.subject, "B");
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_batch_failure_isolation() {
    // Row 2 of 3 fails; the run still produces all three rows.
    let provider = Arc::new(StubProvider::new(vec![
        text_response("SUBJECT: A\nBODY: \nFirst"),
        Err(LlmError::RateLimited {
            message: "quota".to_string(),
            retry_after: Some(60),
        }),
        text_response("SUBJECT: C\nBODY: \nThird"),
    ]));
    let runner = BatchRunner::new(provider.clone(), BatchConfig::no_delay());

    let batch = runner
        .run(
            &techfest(),
            vec![brand("Acme"), brand("Globex"), brand("Initech")],
            |_| {},
        )
        .await
        .unwrap();

    assert_eq!(batch.len(), 3);
    assert!(batch.rows()[0].result.is_ok());
    assert!(batch.rows()[1].result.is_failed());
    assert!(batch.rows()[2].result.is_ok());
    assert_eq!(provider.call_count(), 3);
}

#[tokio::test]
async fn test_batch_all_blank_names_rejected_with_zero_calls() {
    let provider = Arc::new(StubProvider::with_text_response("unused"));
    let runner = BatchRunner::new(provider.clone(), BatchConfig::no_delay());

    let err = runner
        .run(&techfest(), vec![brand(""), brand("  ")], |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Validation(_)));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_batch_progress_fractions() {
    let provider = Arc::new(StubProvider::new(vec![
        text_response("SUBJECT: A\nBODY: \nOne"),
        text_response("SUBJECT: B\nBODY: \nTwo"),
        text_response("SUBJECT: C\nBODY: \nThree"),
        text_response("SUBJECT: D\nBODY: \nFour"),
    ]));
    let runner = BatchRunner::new(provider, BatchConfig::no_delay());

    let mut fractions = Vec::new();
    let mut statuses = Vec::new();
    runner
        .run(
            &techfest(),
            vec![brand("A"), brand("B"), brand("C"), brand("D")],
            |e| {
                if let Some(f) = e.fraction() {
                    fractions.push(f);
                }
                if let BatchEvent::RowStarted { .. } = &e {
                    statuses.push(e.status_line());
                }
            },
        )
        .await
        .unwrap();

    assert_eq!(fractions, vec![0.25, 0.5, 0.75, 1.0]);
    assert_eq!(statuses[0], "Processing: A...");
    assert_eq!(statuses[3], "Processing: D...");
}

#[tokio::test]
async fn test_batch_then_bulk_review_refine() {
    // Full bulk-review flow: run a batch, pick a row, refine its body.
    let provider = Arc::new(StubProvider::new(vec![
        text_response("SUBJECT: A\nBODY: \nDraft for Acme"),
        text_response("SUBJECT: B\nBODY: \nDraft for Globex"),
        text_response("Rewritten draft for Globex"),
    ]));
    let runner = BatchRunner::new(provider.clone(), BatchConfig::no_delay());
    let engine = RefinementEngine::new(provider);

    let mut batch = runner
        .run(&techfest(), vec![brand("Acme"), brand("Globex")], |_| {})
        .await
        .unwrap();

    let id = batch.find_by_name("Globex").unwrap().id;
    engine
        .refine_row(&mut batch, id, "rewrite it")
        .await
        .unwrap();

    assert_eq!(batch.rows()[1].result.body, "Rewritten draft for Globex");
    assert_eq!(batch.rows()[1].result.subject, "B");
    // The untouched row keeps its draft
    assert_eq!(batch.rows()[0].result.body, "Draft for Acme");
}

#[tokio::test]
async fn test_batch_duplicate_names_need_row_ids() {
    let provider = Arc::new(StubProvider::new(vec![
        text_response("SUBJECT: A\nBODY: \nFirst Acme"),
        text_response("SUBJECT: B\nBODY: \nSecond Acme"),
    ]));
    let runner = BatchRunner::new(provider, BatchConfig::no_delay());

    let batch = runner
        .run(&techfest(), vec![brand("Acme"), brand("Acme")], |_| {})
        .await
        .unwrap();

    // Name lookup refuses to guess between duplicates; ids stay unambiguous.
    assert!(batch.find_by_name("Acme").is_err());
    let first_id = batch.rows()[0].id;
    let second_id = batch.rows()[1].id;
    assert_ne!(first_id, second_id);
    assert_eq!(batch.row(first_id).unwrap().result.body, "First Acme");
    assert_eq!(batch.row(second_id).unwrap().result.body, "Second Acme");
}

#[tokio::test]
async fn test_batch_manual_edit_round_trip() {
    let provider = Arc::new(StubProvider::with_text_response(
        "SUBJECT: A\nBODY: \nGenerated draft",
    ));
    let runner = BatchRunner::new(provider, BatchConfig::no_delay());

    let mut batch = runner
        .run(&techfest(), vec![brand("Acme")], |_| {})
        .await
        .unwrap();

    let id = batch.rows()[0].id;
    batch.set_body(id, "Hand-edited draft").unwrap();

    assert_eq!(batch.row(id).unwrap().result.body, "Hand-edited draft");
    assert_eq!(batch.row(id).unwrap().result.subject, "A");
}
