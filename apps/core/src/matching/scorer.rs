//! Match Scorer — pluggable, trait-based scorer of a résumé against a job posting.
//!
//! Default: `KeywordMatchScorer` (pure, deterministic, no I/O).
//!
//! Algorithm:
//! 1. Case-fold both keyword universes. The job side is keywords ∪ must-have ∪
//!    nice-to-have; the résumé side is skills, summary tokens, every job title and
//!    company, and bullet tokens.
//! 2. keyword part = weight × |overlap| / |job keywords|
//! 3. must-have part = weight × covered share of must-haves (full when there are none)
//! 4. title part = full weight when the job title appears in the résumé text, half when
//!    any of its words does
//! 5. Clamp the sum to 0–100. An empty job universe scores the neutral value instead.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CoreError;
use crate::models::{JobPosting, MatchAnalysis, ResumeRecord};

/// Recommendations name at most this many keywords.
const MAX_LISTED_KEYWORDS: usize = 5;
const MIN_SUMMARY_CHARS: usize = 50;
const MIN_SKILLS: usize = 5;

const SUMMARY_ADVICE: &str = "Add a professional summary section highlighting key qualifications";
const SKILLS_ADVICE: &str = "Expand skills section with relevant keywords";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Points for full coverage of the job keyword universe.
    pub keyword: f64,
    /// Points for full coverage of the must-have keywords.
    pub must_have: f64,
    /// Points for an exact title hit; a partial hit earns half.
    pub title: f64,
    /// Score returned when the job carries no keywords at all.
    pub neutral_score: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword: 60.0,
            must_have: 30.0,
            title: 10.0,
            neutral_score: 50.0,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("keyword", self.keyword),
            ("must_have", self.must_have),
            ("title", self.title),
            ("neutral_score", self.neutral_score),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidConfig(format!(
                    "scoring weight '{name}' must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// The match scorer trait. Implement it to swap scoring backends without touching
/// callers; hold it as `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    fn score(&self, resume: &ResumeRecord, job: &JobPosting) -> MatchAnalysis;
}

#[derive(Debug, Clone, Default)]
pub struct KeywordMatchScorer {
    weights: ScoringWeights,
}

impl KeywordMatchScorer {
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, resume: &ResumeRecord, job: &JobPosting) -> MatchAnalysis {
        compute_match(resume, job, &self.weights)
    }
}

/// Scores with the default weights.
pub fn score_match(resume: &ResumeRecord, job: &JobPosting) -> MatchAnalysis {
    KeywordMatchScorer::default().score(resume, job)
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword match algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_match(resume: &ResumeRecord, job: &JobPosting, weights: &ScoringWeights) -> MatchAnalysis {
    let resume_keywords = resume_keywords(resume);

    let must_have = fold_all(&job.must_have_keywords);
    let nice_to_have = fold_all(&job.nice_to_have_keywords);
    let job_keywords: BTreeSet<String> = fold_all(&job.keywords)
        .into_iter()
        .chain(must_have.iter().cloned())
        .chain(nice_to_have.iter().cloned())
        .collect();

    let keyword_overlap: BTreeSet<String> = job_keywords
        .iter()
        .filter(|k| resume_keywords.contains(*k))
        .cloned()
        .collect();
    let missing_must_have = missing_from(&must_have, &resume_keywords);
    let missing_nice_to_have = missing_from(&nice_to_have, &resume_keywords);

    let ats_score = if job_keywords.is_empty() {
        weights.neutral_score.clamp(0.0, 100.0)
    } else {
        let keyword_score =
            weights.keyword * keyword_overlap.len() as f64 / job_keywords.len() as f64;

        let must_have_ratio = if must_have.is_empty() {
            1.0
        } else {
            (must_have.len() - missing_must_have.len()) as f64 / must_have.len() as f64
        };
        let must_have_score = weights.must_have * must_have_ratio;

        let total = keyword_score + must_have_score + title_score(resume, job, weights);
        total.clamp(0.0, 100.0)
    };

    let recommendations =
        build_recommendations(&missing_must_have, &missing_nice_to_have, resume);

    debug!(
        "Match scored {:.1}: {} of {} job keywords covered, {} missing",
        ats_score,
        keyword_overlap.len(),
        job_keywords.len(),
        missing_must_have.len() + missing_nice_to_have.len()
    );

    MatchAnalysis {
        ats_score,
        keyword_overlap,
        missing_keywords: missing_must_have
            .union(&missing_nice_to_have)
            .cloned()
            .collect(),
        recommendations,
    }
}

fn fold_all(keywords: &[String]) -> BTreeSet<String> {
    keywords.iter().map(|k| k.to_lowercase()).collect()
}

fn missing_from(wanted: &BTreeSet<String>, have: &HashSet<String>) -> BTreeSet<String> {
    wanted.iter().filter(|k| !have.contains(*k)).cloned().collect()
}

/// Case-folded keyword universe of a résumé.
fn resume_keywords(resume: &ResumeRecord) -> HashSet<String> {
    let mut keywords: HashSet<String> = resume.skills.iter().map(|s| s.to_lowercase()).collect();

    if let Some(summary) = &resume.summary {
        keywords.extend(summary.to_lowercase().split_whitespace().map(str::to_string));
    }

    for entry in &resume.experience {
        keywords.insert(entry.title.to_lowercase());
        keywords.insert(entry.company.to_lowercase());
        for bullet in &entry.bullets {
            keywords.extend(bullet.to_lowercase().split_whitespace().map(str::to_string));
        }
    }

    keywords
}

fn title_score(resume: &ResumeRecord, job: &JobPosting, weights: &ScoringWeights) -> f64 {
    let title = job.title.trim().to_lowercase();
    if title.is_empty() {
        return 0.0;
    }

    let raw = resume.raw_text.to_lowercase();
    if raw.contains(&title) {
        return weights.title;
    }

    let raw_tokens: HashSet<&str> = raw.split_whitespace().collect();
    if title.split_whitespace().any(|t| raw_tokens.contains(t)) {
        weights.title / 2.0
    } else {
        0.0
    }
}

/// Fixed-order advice: missing must-haves, missing nice-to-haves, thin summary, thin
/// skills. Keyword lists come from sorted sets, so output is stable across runs.
fn build_recommendations(
    missing_must_have: &BTreeSet<String>,
    missing_nice_to_have: &BTreeSet<String>,
    resume: &ResumeRecord,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing_must_have.is_empty() {
        recommendations.push(format!(
            "Add must-have keywords: {}",
            list_first(missing_must_have)
        ));
    }

    if !missing_nice_to_have.is_empty() {
        recommendations.push(format!(
            "Consider adding: {}",
            list_first(missing_nice_to_have)
        ));
    }

    let summary_chars = resume
        .summary
        .as_deref()
        .map(|s| s.chars().count())
        .unwrap_or(0);
    if summary_chars < MIN_SUMMARY_CHARS {
        recommendations.push(SUMMARY_ADVICE.to_string());
    }

    if resume.skills.len() < MIN_SKILLS {
        recommendations.push(SKILLS_ADVICE.to_string());
    }

    recommendations
}

fn list_first(keywords: &BTreeSet<String>) -> String {
    keywords
        .iter()
        .take(MAX_LISTED_KEYWORDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactInfo, ExperienceEntry, Language};

    const LONG_SUMMARY: &str =
        "Backend engineer building reliable distributed systems in Rust and Go for eight years.";

    fn make_resume(skills: &[&str], summary: Option<&str>, raw_text: &str) -> ResumeRecord {
        ResumeRecord {
            contact: ContactInfo::default(),
            summary: summary.map(str::to_string),
            experience: vec![ExperienceEntry {
                title: "Backend Engineer".to_string(),
                company: "Acme Corp".to_string(),
                dates: "2020 - Present".to_string(),
                location: None,
                bullets: vec!["Built Kafka pipelines".to_string()],
                raw_text: String::new(),
            }],
            skills: skills.iter().map(|s| s.to_string()).collect(),
            education: vec![],
            language: Language::En,
            raw_text: raw_text.to_string(),
        }
    }

    fn make_job(title: &str, keywords: &[&str], must: &[&str], nice: &[&str]) -> JobPosting {
        let owned = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        JobPosting {
            title: title.to_string(),
            keywords: owned(keywords),
            must_have_keywords: owned(must),
            nice_to_have_keywords: owned(nice),
            ..JobPosting::default()
        }
    }

    #[test]
    fn test_empty_job_universe_is_neutral() {
        let resume = make_resume(&["Rust"], None, "Backend Engineer");
        let job = make_job("Backend Engineer", &[], &[], &[]);

        let analysis = score_match(&resume, &job);
        assert_eq!(analysis.ats_score, 50.0);
        assert!(analysis.keyword_overlap.is_empty());
        assert!(analysis.missing_keywords.is_empty());
    }

    #[test]
    fn test_full_coverage_reaches_exactly_100() {
        let resume = make_resume(
            &["Rust", "SQL", "Docker", "Go", "gRPC"],
            Some(LONG_SUMMARY),
            "Jane Smith\nBackend Engineer at Acme Corp",
        );
        let job = make_job("Backend Engineer", &["rust", "SQL"], &["docker"], &["kafka"]);

        let analysis = score_match(&resume, &job);
        assert_eq!(analysis.ats_score, 100.0);
        assert!(analysis.missing_keywords.is_empty());
        assert!(analysis.recommendations.is_empty(), "{:?}", analysis.recommendations);
    }

    #[test]
    fn test_clamped_when_weights_overshoot() {
        let scorer = KeywordMatchScorer::with_weights(ScoringWeights {
            keyword: 90.0,
            must_have: 90.0,
            title: 90.0,
            neutral_score: 50.0,
        });
        let resume = make_resume(&["Rust"], Some(LONG_SUMMARY), "Backend Engineer");
        let job = make_job("Backend Engineer", &["rust"], &[], &[]);
        assert_eq!(scorer.score(&resume, &job).ats_score, 100.0);
    }

    #[test]
    fn test_score_components() {
        // 1 of 4 keywords (rust) → 15; must-have 0 of 2 → 0; partial title → 5
        let resume = make_resume(&["Rust"], None, "Senior engineer");
        let job = make_job("Platform Engineer", &["rust"], &["java", "spring"], &["k8s"]);

        let analysis = score_match(&resume, &job);
        assert!((analysis.ats_score - 20.0).abs() < 1e-9, "Score was {}", analysis.ats_score);
        assert_eq!(
            analysis.keyword_overlap,
            BTreeSet::from(["rust".to_string()])
        );
        assert_eq!(
            analysis.missing_keywords.iter().collect::<Vec<_>>(),
            vec!["java", "k8s", "spring"]
        );
    }

    #[test]
    fn test_no_must_haves_earns_full_must_have_points() {
        // 0 of 1 keyword → 0; must-have empty → 30; title absent → 0
        let resume = make_resume(&[], None, "nothing relevant");
        let job = make_job("Chef", &["cooking"], &[], &[]);
        assert_eq!(score_match(&resume, &job).ats_score, 30.0);
    }

    #[test]
    fn test_blank_job_title_scores_no_title_points() {
        let resume = make_resume(&[], None, "anything");
        let job = make_job("   ", &[], &["rust"], &[]);
        assert_eq!(score_match(&resume, &job).ats_score, 0.0);
    }

    #[test]
    fn test_resume_keywords_include_titles_and_bullet_tokens() {
        let resume = make_resume(&[], Some("Loves Tokio"), "");
        let keywords = resume_keywords(&resume);
        assert!(keywords.contains("backend engineer"));
        assert!(keywords.contains("acme corp"));
        assert!(keywords.contains("kafka"));
        assert!(keywords.contains("tokio"));
    }

    #[test]
    fn test_recommendations_fixed_order_and_truncation() {
        let resume = make_resume(&["Rust"], Some("Short."), "");
        let job = make_job(
            "Engineer",
            &[],
            &["zig", "ada", "cobol", "fortran", "lisp", "basic", "pascal"],
            &["kafka", "redis"],
        );

        let analysis = score_match(&resume, &job);
        assert_eq!(
            analysis.recommendations,
            vec![
                "Add must-have keywords: ada, basic, cobol, fortran, lisp".to_string(),
                "Consider adding: redis".to_string(),
                SUMMARY_ADVICE.to_string(),
                SKILLS_ADVICE.to_string(),
            ]
        );
    }

    #[test]
    fn test_recommendations_are_deterministic() {
        let resume = make_resume(&["Rust", "Go"], None, "Backend Engineer");
        let job = make_job(
            "Backend Engineer",
            &["python", "rust"],
            &["postgres", "aws", "terraform"],
            &["graphql", "elixir"],
        );

        let first = score_match(&resume, &job);
        for _ in 0..20 {
            assert_eq!(score_match(&resume, &job), first);
        }
    }

    #[test]
    fn test_score_always_within_bounds() {
        let resume = make_resume(&["Rust", "Go", "SQL"], Some(LONG_SUMMARY), "Rust Go");
        let jobs = [
            make_job("", &[], &[], &[]),
            make_job("Rust Go", &["rust"], &["go"], &["sql"]),
            make_job("x", &["a", "b", "c"], &["d"], &["e"]),
        ];
        for job in &jobs {
            let score = score_match(&resume, job).ats_score;
            assert!((0.0..=100.0).contains(&score), "Score was {score}");
        }
    }

    #[test]
    fn test_weights_validation() {
        assert!(ScoringWeights::default().validate().is_ok());
        let bad = ScoringWeights {
            keyword: -1.0,
            ..ScoringWeights::default()
        };
        assert!(matches!(bad.validate(), Err(CoreError::InvalidConfig(_))));
        let nan = ScoringWeights {
            title: f64::NAN,
            ..ScoringWeights::default()
        };
        assert!(nan.validate().is_err());
    }
}
