//! Document generation: cover letters (plain text) and resumes (HTML).
//!
//! Generators are pure functions of a validated request record. Nothing here
//! touches storage; profile-backed defaults are computed from a row the
//! caller has already loaded.

pub mod defaults;
pub mod export;
pub mod guidance;
pub mod handlers;
pub mod letter;
mod letter_structures;
pub mod phase;
pub mod resume;
pub mod validation;
