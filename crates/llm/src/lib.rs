//! VibePitch LLM
//!
//! Provides a unified interface for the text-generation providers the pitch
//! engine can call:
//! - Gemini (Google Generative Language API)
//! - OpenAI-compatible chat-completions endpoints
//!
//! Also includes the HTTP client factory and the provider error taxonomy.

pub mod gemini;
pub mod http_client;
pub mod openai;
pub mod provider;
pub mod types;

// Re-export main types
pub use gemini::GeminiProvider;
pub use http_client::build_http_client;
pub use openai::OpenAiProvider;
pub use provider::{create_provider, missing_api_key_error, parse_http_error, TextGenerator};
pub use types::*;
