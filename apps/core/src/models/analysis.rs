use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Result of scoring a résumé against a job posting.
///
/// Keyword sets are `BTreeSet`s so serialization order is sorted and stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    /// Always within `0.0..=100.0`.
    pub ats_score: f64,
    pub keyword_overlap: BTreeSet<String>,
    pub missing_keywords: BTreeSet<String>,
    pub recommendations: Vec<String>,
}
