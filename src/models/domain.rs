use serde::{Deserialize, Serialize};

/// A candidate's manglik status, parsed from free-text profile data.
///
/// Profiles frequently carry values like "Doesn't Matter" or nothing at all,
/// so `Unknown` is a first-class state rather than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManglikStatus {
    Yes,
    No,
    Unknown,
}

impl Default for ManglikStatus {
    fn default() -> Self {
        ManglikStatus::Unknown
    }
}

/// A seeker's manglik requirement.
///
/// `DontCare` means the criterion is not considered at all; a definite
/// requirement only passes on an exact match of the candidate's status.
/// `Unknown` on the candidate side never satisfies a definite requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManglikPreference {
    RequireYes,
    RequireNo,
    DontCare,
}

impl Default for ManglikPreference {
    fn default() -> Self {
        ManglikPreference::DontCare
    }
}

/// A matrimony profile, reduced to the attributes the compatibility
/// evaluator reads.
///
/// Every field other than the matri ID is optional: profiles are
/// user-generated and frequently incomplete. Missing candidate data fails a
/// considered check but never aborts an evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Public-facing profile identifier (distinct from the database key).
    #[serde(rename = "matriId")]
    pub matri_id: String,
    /// Age in completed years, derived from date of birth when not stored
    /// directly. Values outside [0, 120] are treated as unknown.
    #[serde(rename = "ageYears", default)]
    pub age_years: Option<u8>,
    #[serde(rename = "heightCm", default)]
    pub height_cm: Option<u16>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub caste: Option<String>,
    #[serde(rename = "motherTongues", default)]
    pub mother_tongues: Vec<String>,
    #[serde(default)]
    pub education: Option<String>,
    /// Resolved upstream with a fallback chain: profession name, then
    /// free-text job, then job role; first non-empty wins.
    #[serde(default)]
    pub occupation: Option<String>,
    /// Currency-agnostic annual figure.
    #[serde(rename = "annualIncome", default)]
    pub annual_income: Option<i64>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub manglik: ManglikStatus,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub drinking: Option<String>,
    #[serde(default)]
    pub smoking: Option<String>,
}

/// A partner-preference record: the criteria one profile states for a
/// desired match.
///
/// List fields are guaranteed lists after normalization; an empty list means
/// the criterion is not considered (auto-pass), never "must be empty".
/// Scalar bounds are nullable and independent, and `min_income` has no
/// matching ceiling in the product model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceRecord {
    #[serde(rename = "minAge", default)]
    pub min_age: Option<u8>,
    #[serde(rename = "maxAge", default)]
    pub max_age: Option<u8>,
    #[serde(rename = "minHeightCm", default)]
    pub min_height_cm: Option<u16>,
    #[serde(rename = "maxHeightCm", default)]
    pub max_height_cm: Option<u16>,
    #[serde(default)]
    pub religions: Vec<String>,
    #[serde(default)]
    pub castes: Vec<String>,
    #[serde(rename = "motherTongues", default)]
    pub mother_tongues: Vec<String>,
    #[serde(default)]
    pub educations: Vec<String>,
    #[serde(default)]
    pub occupations: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(rename = "minIncome", default)]
    pub min_income: Option<i64>,
    #[serde(default)]
    pub manglik: ManglikPreference,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub drinking: Vec<String>,
    #[serde(default)]
    pub smoking: Vec<String>,
}

impl PreferenceRecord {
    /// True when no criterion is specified at all. An evaluation against such
    /// a record yields 0/0, which callers must present as "no preferences to
    /// evaluate" rather than as a perfect or zero match.
    pub fn is_empty(&self) -> bool {
        self.min_age.is_none()
            && self.max_age.is_none()
            && self.min_height_cm.is_none()
            && self.max_height_cm.is_none()
            && self.religions.is_empty()
            && self.castes.is_empty()
            && self.mother_tongues.is_empty()
            && self.educations.is_empty()
            && self.occupations.is_empty()
            && self.countries.is_empty()
            && self.min_income.is_none()
            && self.manglik == ManglikPreference::DontCare
            && self.diets.is_empty()
            && self.drinking.is_empty()
            && self.smoking.is_empty()
    }
}
