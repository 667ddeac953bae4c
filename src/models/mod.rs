// Model exports
pub mod domain;
pub mod report;

pub use domain::{ManglikPreference, ManglikStatus, PreferenceRecord, Profile};
pub use report::{Criterion, CriterionResult, MatchBadge, MatchComparison, MatchReport};
