//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: idempotent tracing
//! setup and assertions for the problem-details error contract.

pub mod logging;
pub mod problem_details;
