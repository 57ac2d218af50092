//! Integration Tests Module
//!
//! End-to-end tests for the pitch engine: single-pitch generation, bulk
//! execution with failure isolation, and refinement flows, all driven by a
//! scripted provider stub.

// Shared provider stub and fixtures
mod support;

// Single-pitch generation and refinement flows
mod pitch_flow_test;

// Bulk execution flows
mod batch_flow_test;
