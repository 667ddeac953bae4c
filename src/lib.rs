//! Matri Algo - Partner-preference compatibility scoring for the Matri matrimony platform
//!
//! This library provides the compatibility evaluator shown on the
//! profile-details page: a candidate profile is checked against the other
//! party's stated partner preferences across a fixed checklist of criteria,
//! and both directions of a viewer/target pair are reported side by side.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compare, evaluate, normalize_preferences, normalize_profile};
pub use crate::models::{
    Criterion, CriterionResult, ManglikPreference, ManglikStatus, MatchBadge, MatchComparison,
    MatchReport, PreferenceRecord, Profile,
};
