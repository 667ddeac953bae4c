use serde::{Deserialize, Serialize};

/// One compatibility dimension. The declaration order here is the order the
/// checklist is rendered in, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Age,
    Height,
    Religion,
    Caste,
    MotherTongue,
    Education,
    Occupation,
    AnnualIncome,
    Country,
    Manglik,
    Diet,
    Drinking,
    Smoking,
}

impl Criterion {
    /// All criteria in evaluation/presentation order.
    pub const ALL: [Criterion; 13] = [
        Criterion::Age,
        Criterion::Height,
        Criterion::Religion,
        Criterion::Caste,
        Criterion::MotherTongue,
        Criterion::Education,
        Criterion::Occupation,
        Criterion::AnnualIncome,
        Criterion::Country,
        Criterion::Manglik,
        Criterion::Diet,
        Criterion::Drinking,
        Criterion::Smoking,
    ];

    /// Human-readable label as rendered in the profile-details checklist.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Age => "Age",
            Criterion::Height => "Height",
            Criterion::Religion => "Religion",
            Criterion::Caste => "Caste",
            Criterion::MotherTongue => "Mother Tongue",
            Criterion::Education => "Education",
            Criterion::Occupation => "Occupation",
            Criterion::AnnualIncome => "Annual Income",
            Criterion::Country => "Country",
            Criterion::Manglik => "Manglik",
            Criterion::Diet => "Diet",
            Criterion::Drinking => "Drinking Habit",
            Criterion::Smoking => "Smoking Habit",
        }
    }
}

/// Presentation state of one checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchBadge {
    #[serde(rename = "Matched")]
    Matched,
    #[serde(rename = "Mis-match")]
    MisMatch,
    #[serde(rename = "Not Specified")]
    NotSpecified,
}

/// Outcome of a single evaluated criterion.
///
/// `passed` is only meaningful when `considered` is true; unconsidered
/// criteria are carried as passes so the checklist stays complete, but they
/// never count toward the score denominator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub label: String,
    pub considered: bool,
    pub passed: bool,
}

impl CriterionResult {
    pub fn new(criterion: Criterion, considered: bool, passed: bool) -> Self {
        Self {
            criterion,
            label: criterion.label().to_string(),
            // An unconsidered criterion is an automatic pass.
            passed: passed || !considered,
            considered,
        }
    }

    pub fn badge(&self) -> MatchBadge {
        if !self.considered {
            MatchBadge::NotSpecified
        } else if self.passed {
            MatchBadge::Matched
        } else {
            MatchBadge::MisMatch
        }
    }
}

/// Aggregate result of evaluating one profile against one preference record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Considered criteria that passed.
    pub score: u32,
    /// Considered criteria overall. Zero means no preferences were specified
    /// at all; callers must not render that as 0% or 100%.
    pub total: u32,
    pub results: Vec<CriterionResult>,
}

impl MatchReport {
    pub fn from_results(results: Vec<CriterionResult>) -> Self {
        let total = results.iter().filter(|r| r.considered).count() as u32;
        let score = results
            .iter()
            .filter(|r| r.considered && r.passed)
            .count() as u32;
        Self {
            score,
            total,
            results,
        }
    }

    /// True when no criterion was considered ("no preferences to evaluate").
    pub fn is_vacuous(&self) -> bool {
        self.total == 0
    }
}

/// Bidirectional comparison of two profiles, one report per direction.
///
/// A direction is `None` when that party has no preference record at all;
/// the presentation layer hides the corresponding block instead of showing a
/// misleading 0/0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchComparison {
    pub viewer_matri_id: String,
    pub target_matri_id: String,
    /// The target evaluated against the viewer's stated preferences.
    pub target_report: Option<MatchReport>,
    /// The viewer evaluated against the target's stated preferences.
    pub viewer_report: Option<MatchReport>,
}
