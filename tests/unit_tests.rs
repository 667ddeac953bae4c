// Unit tests for Matri Algo

use matri_algo::core::{
    compare, evaluate, normalize_list, normalize_preferences, RawPreferences,
};
use matri_algo::models::{
    Criterion, CriterionResult, ManglikPreference, ManglikStatus, MatchBadge, MatchReport,
    PreferenceRecord, Profile,
};
use serde_json::json;

fn criterion<'a>(report: &'a MatchReport, wanted: Criterion) -> &'a CriterionResult {
    report
        .results
        .iter()
        .find(|r| r.criterion == wanted)
        .expect("criterion present in report")
}

fn candidate() -> Profile {
    Profile {
        matri_id: "MAT2044".to_string(),
        age_years: Some(27),
        height_cm: Some(165),
        religion: Some("Hindu".to_string()),
        caste: Some("Brahmin".to_string()),
        mother_tongues: vec!["Odia".to_string()],
        annual_income: Some(600_000),
        manglik: ManglikStatus::No,
        ..Default::default()
    }
}

#[test]
fn test_age_range_is_inclusive_and_monotonic() {
    let prefs = PreferenceRecord {
        min_age: Some(24),
        max_age: Some(30),
        ..Default::default()
    };

    for age in 0..=120u8 {
        let profile = Profile {
            age_years: Some(age),
            ..candidate()
        };
        let report = evaluate(&profile, &prefs);
        let result = criterion(&report, Criterion::Age);
        assert!(result.considered);
        assert_eq!(result.passed, (24..=30).contains(&age), "age {}", age);
    }
}

#[test]
fn test_age_not_considered_without_bounds() {
    let report = evaluate(&candidate(), &PreferenceRecord::default());
    assert!(!criterion(&report, Criterion::Age).considered);
}

#[test]
fn test_religion_containment_is_case_insensitive() {
    let prefs = PreferenceRecord {
        religions: vec!["hindu".to_string(), "Muslim".to_string()],
        ..Default::default()
    };
    let report = evaluate(&candidate(), &prefs);
    assert!(criterion(&report, Criterion::Religion).passed);
}

#[test]
fn test_empty_preference_list_is_not_considered() {
    let prefs = PreferenceRecord {
        religions: vec![],
        ..Default::default()
    };
    let report = evaluate(&candidate(), &prefs);
    let result = criterion(&report, Criterion::Religion);
    assert!(!result.considered);
    assert_eq!(report.total, 0);
}

#[test]
fn test_mother_tongue_uses_list_intersection() {
    let profile = Profile {
        mother_tongues: vec!["Odia".to_string(), "Hindi".to_string()],
        ..candidate()
    };
    let prefs = PreferenceRecord {
        mother_tongues: vec!["Telugu".to_string(), "Hindi".to_string()],
        ..Default::default()
    };
    let report = evaluate(&profile, &prefs);
    assert!(criterion(&report, Criterion::MotherTongue).passed);
}

#[test]
fn test_income_has_floor_but_no_ceiling() {
    let prefs = PreferenceRecord {
        min_income: Some(500_000),
        ..Default::default()
    };

    let exactly_at_floor = Profile {
        annual_income: Some(500_000),
        ..candidate()
    };
    let just_below = Profile {
        annual_income: Some(499_999),
        ..candidate()
    };
    let unstated = Profile {
        annual_income: None,
        ..candidate()
    };

    assert!(criterion(&evaluate(&exactly_at_floor, &prefs), Criterion::AnnualIncome).passed);
    assert!(!criterion(&evaluate(&just_below, &prefs), Criterion::AnnualIncome).passed);

    let result_report = evaluate(&unstated, &prefs);
    let result = criterion(&result_report, Criterion::AnnualIncome);
    assert!(result.considered);
    assert!(!result.passed);
}

#[test]
fn test_manglik_tri_state_semantics() {
    let require_yes = PreferenceRecord {
        manglik: ManglikPreference::RequireYes,
        ..Default::default()
    };

    let says_yes = Profile {
        manglik: ManglikStatus::Yes,
        ..candidate()
    };
    let says_no = Profile {
        manglik: ManglikStatus::No,
        ..candidate()
    };
    let unknown = Profile {
        manglik: ManglikStatus::Unknown,
        ..candidate()
    };

    assert!(criterion(&evaluate(&says_yes, &require_yes), Criterion::Manglik).passed);
    assert!(!criterion(&evaluate(&says_no, &require_yes), Criterion::Manglik).passed);

    // Unknown is considered but never satisfies a definite requirement.
    let unknown_report = evaluate(&unknown, &require_yes);
    let result = criterion(&unknown_report, Criterion::Manglik);
    assert!(result.considered);
    assert!(!result.passed);

    // Don't-care ignores the candidate's status entirely.
    let report = evaluate(&says_yes, &PreferenceRecord::default());
    assert!(!criterion(&report, Criterion::Manglik).considered);
}

#[test]
fn test_zero_preference_record_is_vacuous() {
    let report = evaluate(&candidate(), &PreferenceRecord::default());
    assert_eq!(report.score, 0);
    assert_eq!(report.total, 0);
    assert!(report.is_vacuous());
}

#[test]
fn test_directions_are_evaluated_independently() {
    let viewer = candidate();
    let viewer_prefs = PreferenceRecord {
        religions: vec!["Hindu".to_string()],
        ..Default::default()
    };
    let target_prefs = PreferenceRecord {
        min_age: Some(25),
        ..Default::default()
    };

    let target_young = Profile {
        matri_id: "MAT9".to_string(),
        religion: Some("Hindu".to_string()),
        age_years: Some(22),
        ..Default::default()
    };
    let target_older = Profile {
        age_years: Some(40),
        religion: Some("Sikh".to_string()),
        ..target_young.clone()
    };

    let first = compare(&viewer, Some(&viewer_prefs), &target_young, Some(&target_prefs));
    let second = compare(&viewer, Some(&viewer_prefs), &target_older, Some(&target_prefs));

    // The viewer-side report only depends on the viewer's profile and the
    // target's preferences, so it is identical across both comparisons.
    assert_eq!(
        first.viewer_report.as_ref().unwrap().score,
        second.viewer_report.as_ref().unwrap().score
    );
    // The target-side report moves with the target's profile.
    assert_ne!(
        first.target_report.as_ref().unwrap().score,
        second.target_report.as_ref().unwrap().score
    );
}

#[test]
fn test_absent_preferences_omit_the_direction() {
    let viewer = candidate();
    let target = Profile {
        matri_id: "MAT9".to_string(),
        ..Default::default()
    };

    let comparison = compare(&viewer, None, &target, None);
    assert!(comparison.target_report.is_none());
    assert!(comparison.viewer_report.is_none());
}

#[test]
fn test_end_to_end_profile_details_scenario() {
    let profile = Profile {
        matri_id: "MAT2044".to_string(),
        age_years: Some(27),
        height_cm: Some(165),
        religion: Some("Hindu".to_string()),
        caste: Some("Brahmin".to_string()),
        mother_tongues: vec!["Odia".to_string()],
        annual_income: Some(600_000),
        manglik: ManglikStatus::No,
        ..Default::default()
    };

    // The raw preference payload as the storage layer ships it.
    let raw: RawPreferences = serde_json::from_value(json!({
        "minAge": 24,
        "maxAge": 30,
        "religions": ["Hindu"],
        "castes": [],
        "minIncome": 500000,
        "manglik": false
    }))
    .unwrap();
    let prefs = normalize_preferences(&raw);

    let report = evaluate(&profile, &prefs);

    assert_eq!(report.score, 4);
    assert_eq!(report.total, 4);

    assert_eq!(criterion(&report, Criterion::Age).badge(), MatchBadge::Matched);
    assert_eq!(
        criterion(&report, Criterion::Religion).badge(),
        MatchBadge::Matched
    );
    assert_eq!(
        criterion(&report, Criterion::Caste).badge(),
        MatchBadge::NotSpecified
    );
    assert_eq!(
        criterion(&report, Criterion::AnnualIncome).badge(),
        MatchBadge::Matched
    );
    assert_eq!(
        criterion(&report, Criterion::Manglik).badge(),
        MatchBadge::Matched
    );
    assert_eq!(
        criterion(&report, Criterion::Height).badge(),
        MatchBadge::NotSpecified
    );
    assert_eq!(
        criterion(&report, Criterion::Education).badge(),
        MatchBadge::NotSpecified
    );
}

#[test]
fn test_normalize_list_accepts_scalar_or_array() {
    assert_eq!(normalize_list(Some(&json!("Hindi"))), vec!["Hindi"]);
    assert_eq!(
        normalize_list(Some(&json!(["Hindi", "", "Odia"]))),
        vec!["Hindi", "Odia"]
    );
    assert!(normalize_list(None).is_empty());
}
