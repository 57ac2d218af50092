//! Pitch Response Parsing
//!
//! Splits the model's raw text into subject and body on the sentinel markers
//! the prompt mandates. This is the one place the unstructured-text contract
//! with the model is interpreted, and it is total: any input, however
//! malformed, degrades to a default subject with the raw text as the body.

use serde::{Deserialize, Serialize};

use super::composer::{BODY_MARKER, SUBJECT_MARKER};

/// Subject used when the model ignored the output format.
pub const DEFAULT_SUBJECT: &str = "Sponsorship Proposal";

/// Subject and body extracted from one model response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPitch {
    pub subject: String,
    pub body: String,
}

/// Extract `(subject, body)` from raw model output.
///
/// Splits at the first body marker: the subject is everything before it with
/// the subject label stripped and trimmed, the body everything after,
/// trimmed. Without the marker the whole text becomes the body under a fixed
/// default subject. Never fails.
pub fn parse_pitch_response(raw: &str) -> ParsedPitch {
    match raw.split_once(BODY_MARKER) {
        Some((head, tail)) => ParsedPitch {
            subject: head.replace(SUBJECT_MARKER, "").trim().to_string(),
            body: tail.trim().to_string(),
        },
        None => ParsedPitch {
            subject: DEFAULT_SUBJECT.to_string(),
            body: raw.to_string(),
        },
    }
}
