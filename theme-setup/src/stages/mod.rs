//! The setup stages, in the order the orchestrator runs them.

pub mod conflicts;
pub mod dependencies;
pub mod hooks;
pub mod manifest;
pub mod preflight;
pub mod repository;
pub mod templates;
