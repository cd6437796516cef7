//! Configuration type definitions for profiles-config.
//!
//! Responsibilities:
//! - Define the validated, immutable configuration model (`Configuration`, `Profile`).
//! - Define `CaseMode`, the construction-time switch for name normalization.
//! - Provide deterministic text rendering and ordered serde serialization.
//!
//! Does NOT handle:
//! - Reading, preprocessing, or parsing files (see `loader` module).
//! - Duplicate detection (see `loader::validate`).
//!
//! Invariants:
//! - Profiles and keys keep first-appearance order from the source file.
//! - Profile names and keys are unique after normalization.
//! - Nothing outside the crate can mutate a `Configuration` once built.

mod case_mode;
mod configuration;
mod profile;

pub use case_mode::CaseMode;
pub use configuration::Configuration;
pub use profile::Profile;
