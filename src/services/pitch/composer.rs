//! Pitch Prompt Composition
//!
//! Builds the instruction prompts sent to the text provider. Both builders
//! are pure functions of their inputs: identical inputs always produce a
//! byte-identical prompt, which is what makes the surrounding flows testable
//! against a non-deterministic model.

use vibepitch_core::{BrandTarget, EventContext};

/// Marker the model must put in front of the subject line.
pub const SUBJECT_MARKER: &str = "SUBJECT:";

/// Marker separating the subject line from the email body.
pub const BODY_MARKER: &str = "BODY:";

/// Activation instruction used when a brand requests none.
const SUGGEST_ACTIVATION: &str = "Suggest one logical integration.";

/// Build the cold-email instruction prompt for one brand.
///
/// The role block pins the sender/recipient assignment so the model writes
/// as the event, never as the brand. The formatting rules mandate the
/// SUBJECT/BODY output shape and the exact closing signature.
pub fn compose_pitch_prompt(event: &EventContext, brand: &BrandTarget) -> String {
    let activations = if brand.activations.is_empty() {
        SUGGEST_ACTIVATION.to_string()
    } else {
        brand.activations.join(", ")
    };

    format!(
        "You are an elite B2B sales copywriter writing a sponsorship cold email.\n\
         \n\
         ABSOLUTE ROLES (DO NOT HALLUCINATE):\n\
         - SENDER: You represent {event_name}.\n\
         - RECIPIENT: You are pitching TO the marketing team at {brand_name} ({brand_url}).\n\
         \n\
         CONTEXT:\n\
         - Event Dates: {start_date} to {end_date}\n\
         - Expected Footfall: {footfall}\n\
         - Sponsorship Deck: {deck_url}\n\
         - Requested Activations: {activations}\n\
         - Strategic Override: {strategic_context}\n\
         - Required Vibe/Tone: {vibe}\n\
         \n\
         FORMATTING RULES:\n\
         1. Do not act like you are the brand. You are pitching the brand.\n\
         2. Output EXACTLY in this format:\n\
         {subject_marker} [Your subject line]\n\
         {body_marker} \n\
         [Email body]\n\
         \n\
         3. Conclude the email body EXACTLY with this signature, do not add placeholders:\n\
         {signature}",
        event_name = event.name,
        brand_name = brand.name,
        brand_url = brand.website_url,
        start_date = event.start_date,
        end_date = event.end_date,
        footfall = event.expected_footfall,
        deck_url = event.deck_url,
        activations = activations,
        strategic_context = brand.strategic_context,
        vibe = brand.vibe,
        subject_marker = SUBJECT_MARKER,
        body_marker = BODY_MARKER,
        signature = event.signature,
    )
}

/// Build the rewrite prompt for refining an existing email body.
///
/// Deliberately simpler than the generation prompt: the command already
/// constrains the model to plain-body output, so no marker extraction is
/// needed afterwards.
pub fn compose_refine_prompt(current_body: &str, instruction: &str) -> String {
    format!(
        "Rewrite this email based on this command: {}. Only output the new plain text body.\n\n{}",
        instruction, current_body
    )
}
