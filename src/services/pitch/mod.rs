//! Pitch Generation Services
//!
//! The five pieces of the pitch pipeline: prompt composition, response
//! parsing, single-pitch generation, bulk execution, and refinement.

pub mod batch;
pub mod composer;
pub mod generator;
pub mod parser;
pub mod refine;

pub use batch::{BatchConfig, BatchEvent, BatchRunner};
pub use composer::{compose_pitch_prompt, compose_refine_prompt, BODY_MARKER, SUBJECT_MARKER};
pub use generator::PitchGenerator;
pub use parser::{parse_pitch_response, ParsedPitch, DEFAULT_SUBJECT};
pub use refine::RefinementEngine;
