//! Pitch Result Types
//!
//! One generated email per brand, and the ordered collection a bulk run
//! accumulates. Results are plain data owned by the caller: the engine
//! creates them, the host UI edits and stores them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::campaign::BrandTarget;
use crate::error::{CoreError, CoreResult};

/// Outcome of one generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PitchStatus {
    /// Generation produced a usable email
    Ok,
    /// The provider call failed; the row keeps the captured message
    Failed { message: String },
}

/// A generated sponsorship email for one brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchResult {
    /// Subject line
    pub subject: String,
    /// Email body, mutable via manual edit or refinement
    pub body: String,
    /// Whether generation succeeded
    pub status: PitchStatus,
}

impl PitchResult {
    /// A successful result.
    pub fn ok(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            status: PitchStatus::Ok,
        }
    }

    /// A failed result. Subject and body stay empty; the message is kept so
    /// the row remains reviewable alongside the rows that succeeded.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            subject: String::new(),
            body: String::new(),
            status: PitchStatus::Failed {
                message: message.into(),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.status, PitchStatus::Ok)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, PitchStatus::Failed { .. })
    }

    /// The captured failure message, if any.
    pub fn failure_message(&self) -> Option<&str> {
        match &self.status {
            PitchStatus::Failed { message } => Some(message),
            PitchStatus::Ok => None,
        }
    }
}

/// One row of a bulk run: the brand and its generated pitch.
///
/// The id is the stable handle for review and refinement. Brand names are not
/// required to be unique within a batch, so name-based selection can be
/// ambiguous; id-based selection never is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRow {
    pub id: Uuid,
    pub brand: BrandTarget,
    pub result: PitchResult,
}

impl BatchRow {
    pub fn new(brand: BrandTarget, result: PitchResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            brand,
            result,
        }
    }
}

/// Ordered results of a bulk run, row order = input row order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchResult {
    rows: Vec<BatchRow>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: BatchRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[BatchRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows whose generation succeeded.
    pub fn succeeded(&self) -> usize {
        self.rows.iter().filter(|r| r.result.is_ok()).count()
    }

    /// Number of rows whose generation failed.
    pub fn failed(&self) -> usize {
        self.rows.iter().filter(|r| r.result.is_failed()).count()
    }

    /// Look up a row by id.
    pub fn row(&self, id: Uuid) -> Option<&BatchRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Look up a row by id for editing.
    pub fn row_mut(&mut self, id: Uuid) -> Option<&mut BatchRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    /// Look up a row by brand name.
    ///
    /// Errors when the name matches no row, and also when it matches more
    /// than one — callers that need an unambiguous handle should use the row
    /// id instead of guessing which duplicate was meant.
    pub fn find_by_name(&self, name: &str) -> CoreResult<&BatchRow> {
        let mut matches = self.rows.iter().filter(|r| r.brand.name == name);
        let first = matches
            .next()
            .ok_or_else(|| CoreError::not_found(format!("no row for brand: {}", name)))?;
        if matches.next().is_some() {
            return Err(CoreError::validation(format!(
                "brand name matches multiple rows: {}",
                name
            )));
        }
        Ok(first)
    }

    /// Overwrite a row's body in place (manual edit). Subject and status are
    /// untouched.
    pub fn set_body(&mut self, id: Uuid, body: impl Into<String>) -> CoreResult<()> {
        let row = self
            .row_mut(id)
            .ok_or_else(|| CoreError::not_found(format!("no row with id: {}", id)))?;
        row.result.body = body.into();
        Ok(())
    }
}
