//! VibePitch Engine
//!
//! Generates B2B sponsorship-pitch emails by templating event and brand
//! context into prompts for a hosted text model, for a single brand or a
//! bulk grid of brands. The host UI supplies typed inputs and owns every
//! result; the engine itself is stateless between calls.
//!
//! ## Module Organization
//!
//! - `services::pitch` - composer, parser, generator, batch runner, refiner
//! - `utils::error` - engine error types (`EngineError`, `EngineResult`)
//!
//! Domain types live in `vibepitch-core`; the provider boundary lives in
//! `vibepitch-llm`.

pub mod services;
pub mod utils;

// ── Engine Services ────────────────────────────────────────────────────
pub use services::pitch::{
    compose_pitch_prompt, compose_refine_prompt, parse_pitch_response, BatchConfig, BatchEvent,
    BatchRunner, ParsedPitch, PitchGenerator, RefinementEngine, BODY_MARKER, DEFAULT_SUBJECT,
    SUBJECT_MARKER,
};

// ── Error Types ────────────────────────────────────────────────────────
pub use utils::error::{EngineError, EngineResult};
