//! VibePitch Core
//!
//! Domain types and error types for the VibePitch workspace. This crate has
//! zero dependencies on application-level code (HTTP, providers, UI).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `campaign` - Campaign inputs (`EventContext`, `BrandTarget`, `ToneStyle`)
//! - `pitch` - Generated results (`PitchResult`, `BatchRow`, `BatchResult`)
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/thiserror/chrono/uuid** -
//!    keeps build times minimal
//! 2. **Plain data, caller-owned** - the engine creates and reads these
//!    values but holds no state of its own between calls

pub mod campaign;
pub mod error;
pub mod pitch;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Campaign Inputs ────────────────────────────────────────────────────
pub use campaign::{BrandTarget, EventContext, ToneStyle};

// ── Pitch Results ──────────────────────────────────────────────────────
pub use pitch::{BatchResult, BatchRow, PitchResult, PitchStatus};
