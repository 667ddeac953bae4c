//! Normalization boundary between raw storage payloads and the evaluator.
//!
//! The profile and preference tables are user-generated and loosely typed:
//! list fields arrive as JSON arrays, single strings, or nothing at all;
//! numbers sometimes arrive as strings; manglik is free text. Everything is
//! coerced here so the evaluator only ever sees strict `Profile` /
//! `PreferenceRecord` values and never re-checks shapes. All functions are
//! pure and never fail: unusable input degrades to "absent".

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

use crate::models::{ManglikPreference, ManglikStatus, PreferenceRecord, Profile};

/// Ages outside this range are treated as unknown rather than trusted.
pub const MAX_PLAUSIBLE_AGE: u8 = 120;

/// Raw profile row as assembled by the storage layer, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    #[serde(rename = "matriId", default)]
    pub matri_id: String,
    /// Explicit age, when stored. Takes precedence over the date of birth.
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "heightCm", default)]
    pub height_cm: Option<Value>,
    #[serde(default)]
    pub religion: Option<Value>,
    #[serde(default)]
    pub caste: Option<Value>,
    #[serde(rename = "motherTongues", default)]
    pub mother_tongues: Option<Value>,
    #[serde(default)]
    pub education: Option<Value>,
    /// Occupation fallback chain, first non-empty wins.
    #[serde(default)]
    pub profession: Option<Value>,
    #[serde(default)]
    pub job: Option<Value>,
    #[serde(rename = "jobRole", default)]
    pub job_role: Option<Value>,
    #[serde(rename = "annualIncome", default)]
    pub annual_income: Option<Value>,
    #[serde(default)]
    pub country: Option<Value>,
    /// Free text such as "Yes", "no", "1", "Doesn't Matter".
    #[serde(default)]
    pub manglik: Option<Value>,
    #[serde(default)]
    pub diet: Option<Value>,
    #[serde(default)]
    pub drinking: Option<Value>,
    #[serde(default)]
    pub smoking: Option<Value>,
}

/// Raw partner-preference row before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPreferences {
    #[serde(rename = "minAge", default)]
    pub min_age: Option<Value>,
    #[serde(rename = "maxAge", default)]
    pub max_age: Option<Value>,
    #[serde(rename = "minHeightCm", default)]
    pub min_height_cm: Option<Value>,
    #[serde(rename = "maxHeightCm", default)]
    pub max_height_cm: Option<Value>,
    #[serde(default)]
    pub religions: Option<Value>,
    #[serde(default)]
    pub castes: Option<Value>,
    #[serde(rename = "motherTongues", default)]
    pub mother_tongues: Option<Value>,
    #[serde(default)]
    pub educations: Option<Value>,
    #[serde(default)]
    pub occupations: Option<Value>,
    #[serde(default)]
    pub countries: Option<Value>,
    #[serde(rename = "minIncome", default)]
    pub min_income: Option<Value>,
    /// Only a JSON boolean expresses a definite requirement; anything else
    /// (including strings) means "don't care".
    #[serde(default)]
    pub manglik: Option<Value>,
    #[serde(default)]
    pub diets: Option<Value>,
    #[serde(default)]
    pub drinking: Option<Value>,
    #[serde(default)]
    pub smoking: Option<Value>,
}

/// Coerce a raw value into a guaranteed list of non-empty trimmed strings.
///
/// Arrays keep their string/number entries (blank entries dropped); a single
/// non-empty scalar wraps into a one-element list; everything else is empty.
pub fn normalize_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| clean_string(Some(item)))
            .collect(),
        other => clean_string(other).into_iter().collect(),
    }
}

/// Coerce a raw manglik preference into the explicit tri-state.
pub fn normalize_manglik_preference(value: Option<&Value>) -> ManglikPreference {
    match value {
        Some(Value::Bool(true)) => ManglikPreference::RequireYes,
        Some(Value::Bool(false)) => ManglikPreference::RequireNo,
        _ => ManglikPreference::DontCare,
    }
}

/// Parse a candidate's free-text manglik field into its tri-state.
pub fn parse_manglik_status(value: Option<&str>) -> ManglikStatus {
    let Some(raw) = value else {
        return ManglikStatus::Unknown;
    };
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => ManglikStatus::Yes,
        "no" | "n" | "false" | "0" => ManglikStatus::No,
        _ => ManglikStatus::Unknown,
    }
}

/// Completed years between `born` and `on`, unknown when implausible.
pub fn age_from_dob(born: NaiveDate, on: NaiveDate) -> Option<u8> {
    let mut years = on.year() - born.year();
    // Subtract one year if this year's birthday has not happened yet.
    if (on.month(), on.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    clamp_age(years as i64)
}

/// Build a normalized `Profile` from a raw row. `on` is the reference date
/// for deriving age from the date of birth.
pub fn normalize_profile(raw: &RawProfile, on: NaiveDate) -> Profile {
    let age_years = as_int(raw.age.as_ref())
        .and_then(clamp_age)
        .or_else(|| raw.date_of_birth.and_then(|dob| age_from_dob(dob, on)));

    let occupation = resolve_occupation(&[
        clean_string(raw.profession.as_ref()),
        clean_string(raw.job.as_ref()),
        clean_string(raw.job_role.as_ref()),
    ]);

    let manglik_text = clean_string(raw.manglik.as_ref());

    Profile {
        matri_id: raw.matri_id.trim().to_string(),
        age_years,
        height_cm: as_int(raw.height_cm.as_ref()).and_then(to_u16),
        religion: clean_string(raw.religion.as_ref()),
        caste: clean_string(raw.caste.as_ref()),
        mother_tongues: normalize_list(raw.mother_tongues.as_ref()),
        education: clean_string(raw.education.as_ref()),
        occupation,
        annual_income: as_int(raw.annual_income.as_ref()).filter(|v| *v >= 0),
        country: clean_string(raw.country.as_ref()),
        manglik: parse_manglik_status(manglik_text.as_deref()),
        diet: clean_string(raw.diet.as_ref()),
        drinking: clean_string(raw.drinking.as_ref()),
        smoking: clean_string(raw.smoking.as_ref()),
    }
}

/// Build a normalized `PreferenceRecord` from a raw row. Inverted scalar
/// ranges (min above max with both set) are swapped rather than rejected.
pub fn normalize_preferences(raw: &RawPreferences) -> PreferenceRecord {
    let (min_age, max_age) = ordered_bounds(
        as_int(raw.min_age.as_ref()).and_then(clamp_age).map(i64::from),
        as_int(raw.max_age.as_ref()).and_then(clamp_age).map(i64::from),
    );
    let (min_height, max_height) = ordered_bounds(
        as_int(raw.min_height_cm.as_ref()).and_then(to_u16).map(i64::from),
        as_int(raw.max_height_cm.as_ref()).and_then(to_u16).map(i64::from),
    );

    PreferenceRecord {
        min_age: min_age.map(|v| v as u8),
        max_age: max_age.map(|v| v as u8),
        min_height_cm: min_height.map(|v| v as u16),
        max_height_cm: max_height.map(|v| v as u16),
        religions: normalize_list(raw.religions.as_ref()),
        castes: normalize_list(raw.castes.as_ref()),
        mother_tongues: normalize_list(raw.mother_tongues.as_ref()),
        educations: normalize_list(raw.educations.as_ref()),
        occupations: normalize_list(raw.occupations.as_ref()),
        countries: normalize_list(raw.countries.as_ref()),
        min_income: as_int(raw.min_income.as_ref()).filter(|v| *v >= 0),
        manglik: normalize_manglik_preference(raw.manglik.as_ref()),
        diets: normalize_list(raw.diets.as_ref()),
        drinking: normalize_list(raw.drinking.as_ref()),
        smoking: normalize_list(raw.smoking.as_ref()),
    }
}

/// First non-empty entry of the occupation fallback chain.
fn resolve_occupation(chain: &[Option<String>]) -> Option<String> {
    chain.iter().flatten().next().cloned()
}

/// Trimmed non-empty string from a string or number value.
fn clean_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Integer from a number or numeric string.
fn as_int(value: Option<&Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn clamp_age(years: i64) -> Option<u8> {
    if (0..=MAX_PLAUSIBLE_AGE as i64).contains(&years) {
        Some(years as u8)
    } else {
        None
    }
}

fn to_u16(value: i64) -> Option<u16> {
    u16::try_from(value).ok()
}

fn ordered_bounds(min: Option<i64>, max: Option<i64>) -> (Option<i64>, Option<i64>) {
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
        other => other,
    }
}
