//! Campaign Input Types
//!
//! The event being pitched and the brands being pitched to. These are the
//! immutable inputs to every pitch generation: the host UI collects them once
//! per session and the engine only reads them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The four recognized pitch tone registers.
///
/// Serializes to and displays as the exact labels the leads grid uses, so a
/// value parsed from an uploaded row round-trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToneStyle {
    #[serde(rename = "Corporate/Professional")]
    CorporateProfessional,
    #[serde(rename = "Aggressive/Energetic")]
    AggressiveEnergetic,
    #[serde(rename = "Playful/Creative")]
    PlayfulCreative,
    #[serde(rename = "Culturally Authentic")]
    CulturallyAuthentic,
}

impl ToneStyle {
    /// All recognized tones, in the order the grid presents them.
    pub const ALL: [ToneStyle; 4] = [
        ToneStyle::CorporateProfessional,
        ToneStyle::AggressiveEnergetic,
        ToneStyle::PlayfulCreative,
        ToneStyle::CulturallyAuthentic,
    ];

    /// The grid label for this tone.
    pub fn label(&self) -> &'static str {
        match self {
            ToneStyle::CorporateProfessional => "Corporate/Professional",
            ToneStyle::AggressiveEnergetic => "Aggressive/Energetic",
            ToneStyle::PlayfulCreative => "Playful/Creative",
            ToneStyle::CulturallyAuthentic => "Culturally Authentic",
        }
    }
}

impl Default for ToneStyle {
    fn default() -> Self {
        ToneStyle::CorporateProfessional
    }
}

impl fmt::Display for ToneStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToneStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToneStyle::ALL
            .iter()
            .find(|t| t.label() == s.trim())
            .copied()
            .ok_or_else(|| CoreError::parse(format!("unrecognized tone: {}", s)))
    }
}

/// Core event and sender details, shared by every pitch in a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventContext {
    /// Organization and fest name (the sender identity)
    pub name: String,
    /// First day of the event
    pub start_date: NaiveDate,
    /// Last day of the event
    pub end_date: NaiveDate,
    /// Expected attendance
    pub expected_footfall: u32,
    /// Link to the sponsorship deck
    pub deck_url: String,
    /// Email signature appended verbatim to every pitch body
    pub signature: String,
}

impl EventContext {
    /// Reject an event with no usable sender name. Generation cannot assign
    /// the sender role without one.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("event name is required"));
        }
        Ok(())
    }
}

/// One brand to pitch: the recipient side of a single email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandTarget {
    /// Brand name (required, the recipient identity)
    pub name: String,
    /// Brand website
    pub website_url: String,
    /// Requested tone register for the email
    pub vibe: ToneStyle,
    /// Specific activations to pitch; empty means the model should suggest one
    #[serde(default)]
    pub activations: Vec<String>,
    /// Free-text strategic context injected into the prompt
    #[serde(default = "default_strategic_context")]
    pub strategic_context: String,
}

fn default_strategic_context() -> String {
    "None".to_string()
}

impl BrandTarget {
    /// Create a target with no activations and the default strategic context,
    /// the shape every bulk-grid row has.
    pub fn new(name: impl Into<String>, website_url: impl Into<String>, vibe: ToneStyle) -> Self {
        Self {
            name: name.into(),
            website_url: website_url.into(),
            vibe,
            activations: Vec::new(),
            strategic_context: default_strategic_context(),
        }
    }

    /// Reject a target with no usable brand name.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("brand name is required"));
        }
        Ok(())
    }

    /// Whether the row has a usable brand name. Blank-name rows are dropped
    /// before a bulk run rather than rejected.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
