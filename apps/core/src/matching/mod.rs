// Résumé ↔ job posting comparison.
// Pure functions only: no I/O, no shared state, safe to call from any thread.

pub mod experience_years;
pub mod scorer;

pub use experience_years::{estimate_experience_years, required_years, total_experience_years};
pub use scorer::{score_match, KeywordMatchScorer, MatchScorer, ScoringWeights};
