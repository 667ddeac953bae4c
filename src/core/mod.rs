// Core algorithm exports
pub mod evaluator;
pub mod normalize;
pub mod reporter;

pub use evaluator::evaluate;
pub use normalize::{
    age_from_dob, normalize_list, normalize_manglik_preference, normalize_preferences,
    normalize_profile, parse_manglik_status, RawPreferences, RawProfile,
};
pub use reporter::{compare, report_for};
