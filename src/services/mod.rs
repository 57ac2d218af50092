//! Engine Services
//!
//! Service modules implementing the pitch-generation flows. Services hold a
//! provider handle and configuration only; everything they produce is owned
//! by the caller.

pub mod pitch;
