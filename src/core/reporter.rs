//! Bidirectional match reporting for the profile-details page.

use crate::core::evaluator::evaluate;
use crate::models::{MatchComparison, MatchReport, PreferenceRecord, Profile};

/// Evaluate a viewer/target pair in both directions.
///
/// Each direction is computed independently: the target against the viewer's
/// preferences and the viewer against the target's. A party with no
/// preference record contributes `None` for its direction rather than an
/// empty 0/0 report, so the presentation layer can hide that block.
pub fn compare(
    viewer: &Profile,
    viewer_prefs: Option<&PreferenceRecord>,
    target: &Profile,
    target_prefs: Option<&PreferenceRecord>,
) -> MatchComparison {
    MatchComparison {
        viewer_matri_id: viewer.matri_id.clone(),
        target_matri_id: target.matri_id.clone(),
        target_report: viewer_prefs.map(|prefs| evaluate(target, prefs)),
        viewer_report: target_prefs.map(|prefs| evaluate(viewer, prefs)),
    }
}

/// One direction only, for callers that render a single checklist.
pub fn report_for(candidate: &Profile, prefs: Option<&PreferenceRecord>) -> Option<MatchReport> {
    prefs.map(|p| evaluate(candidate, p))
}
