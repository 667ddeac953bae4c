//! Partner-preference compatibility evaluator.
//!
//! Scores one candidate profile against one party's stated preferences
//! across a fixed, externally visible checklist of criteria. A criterion is
//! only "considered" when the preference side actually specifies it; an
//! unconsidered criterion auto-passes and stays out of the score
//! denominator. Missing candidate data fails a considered check. The
//! evaluator is pure and infallible: it never errors on incomplete input.

use crate::models::{
    Criterion, CriterionResult, ManglikPreference, ManglikStatus, MatchReport, PreferenceRecord,
    Profile,
};

/// Evaluate how well `profile` satisfies `prefs`.
///
/// Criteria are evaluated and returned in `Criterion::ALL` order; the
/// checklist rendering depends on that order staying stable. A report with
/// `total == 0` means the preference record specified nothing at all.
pub fn evaluate(profile: &Profile, prefs: &PreferenceRecord) -> MatchReport {
    let results = Criterion::ALL
        .iter()
        .map(|&criterion| {
            let (considered, passed) = check_criterion(criterion, profile, prefs);
            CriterionResult::new(criterion, considered, passed)
        })
        .collect();

    MatchReport::from_results(results)
}

/// Returns `(considered, passed)` for a single criterion.
fn check_criterion(
    criterion: Criterion,
    profile: &Profile,
    prefs: &PreferenceRecord,
) -> (bool, bool) {
    match criterion {
        Criterion::Age => range_check(
            profile.age_years.map(i64::from),
            prefs.min_age.map(i64::from),
            prefs.max_age.map(i64::from),
        ),
        Criterion::Height => range_check(
            profile.height_cm.map(i64::from),
            prefs.min_height_cm.map(i64::from),
            prefs.max_height_cm.map(i64::from),
        ),
        Criterion::Religion => containment_check(&prefs.religions, profile.religion.as_deref()),
        Criterion::Caste => containment_check(&prefs.castes, profile.caste.as_deref()),
        // Mother tongue is the one list-to-list criterion: any overlap
        // between the candidate's languages and the preferred ones passes.
        Criterion::MotherTongue => {
            intersection_check(&prefs.mother_tongues, &profile.mother_tongues)
        }
        Criterion::Education => containment_check(&prefs.educations, profile.education.as_deref()),
        Criterion::Occupation => {
            containment_check(&prefs.occupations, profile.occupation.as_deref())
        }
        // Income has a floor but no ceiling; a candidate without a stated
        // income fails when the floor is set.
        Criterion::AnnualIncome => match prefs.min_income {
            Some(floor) => (true, profile.annual_income.is_some_and(|inc| inc >= floor)),
            None => (false, false),
        },
        Criterion::Country => containment_check(&prefs.countries, profile.country.as_deref()),
        Criterion::Manglik => match prefs.manglik {
            ManglikPreference::DontCare => (false, false),
            // Unknown candidate status never satisfies a definite
            // requirement.
            ManglikPreference::RequireYes => (true, profile.manglik == ManglikStatus::Yes),
            ManglikPreference::RequireNo => (true, profile.manglik == ManglikStatus::No),
        },
        Criterion::Diet => containment_check(&prefs.diets, profile.diet.as_deref()),
        Criterion::Drinking => containment_check(&prefs.drinking, profile.drinking.as_deref()),
        Criterion::Smoking => containment_check(&prefs.smoking, profile.smoking.as_deref()),
    }
}

/// Range criterion: considered when either bound is set; a candidate with no
/// value always fails a considered range.
fn range_check(value: Option<i64>, min: Option<i64>, max: Option<i64>) -> (bool, bool) {
    if min.is_none() && max.is_none() {
        return (false, false);
    }
    let passed = match value {
        Some(v) => min.map_or(true, |lo| v >= lo) && max.map_or(true, |hi| v <= hi),
        None => false,
    };
    (true, passed)
}

/// Single-value containment: considered when the preference list is
/// non-empty; passes when the candidate's value appears in it.
fn containment_check(preferred: &[String], value: Option<&str>) -> (bool, bool) {
    if preferred.is_empty() {
        return (false, false);
    }
    let passed = value.is_some_and(|v| preferred.iter().any(|p| eq_fold(p, v)));
    (true, passed)
}

/// List-to-list intersection: passes when any candidate value appears in the
/// preference list.
fn intersection_check(preferred: &[String], values: &[String]) -> (bool, bool) {
    if preferred.is_empty() {
        return (false, false);
    }
    let passed = values
        .iter()
        .any(|v| preferred.iter().any(|p| eq_fold(p, v)));
    (true, passed)
}

/// Trimmed, case-insensitive string equality.
fn eq_fold(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
