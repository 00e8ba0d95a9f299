//! Résumé reconstruction and job-match scoring.
//!
//! `parse_resume` turns plain résumé text into a [`ResumeRecord`]; `score_match`
//! compares that record with a [`JobPosting`]. Both are synchronous, pure and total:
//! malformed input degrades to defaults and never produces an error.
//!
//! Decoding binary documents, fetching postings, LLM rewriting and rendering live
//! outside this crate. Expensive collaborator calls can be memoised through an
//! injected [`cache::ResponseCache`].

pub mod cache;
pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod parsing;
pub mod telemetry;

pub use config::Config;
pub use errors::CoreError;
pub use matching::{score_match, KeywordMatchScorer, MatchScorer, ScoringWeights};
pub use models::{
    ContactInfo, EducationEntry, ExperienceEntry, JobPosting, Language, MatchAnalysis,
    ResumeRecord,
};
pub use parsing::{parse_resume, ResumeParser};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const RESUME: &str = "Jane Smith
jane.smith@example.com
+1 555 123 4567

Professional Summary
Senior backend engineer with a decade of experience designing payment platforms.

Work Experience
Senior Backend Engineer
Acme Corp
2020 - Present
- Built Rust services handling 10k rps
- Led migration to Kubernetes

Backend Engineer
Beta Inc
2016 - 2020
- Wrote Python ETL jobs

Technical Skills
Rust, Python, PostgreSQL, Kubernetes, Docker, python

Education
Master of Science, ETH Zurich, 2014 - 2016";

    fn job() -> JobPosting {
        JobPosting {
            title: "Senior Backend Engineer".to_string(),
            company: Some("Globex".to_string()),
            description: "5+ years building backend systems".to_string(),
            keywords: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            must_have_keywords: vec!["kubernetes".to_string(), "Go".to_string()],
            nice_to_have_keywords: vec!["Kafka".to_string()],
            ..JobPosting::default()
        }
    }

    #[test]
    fn test_parse_then_score_pipeline() {
        let resume = parse_resume(RESUME);
        assert_eq!(resume.experience.len(), 2);
        assert_eq!(resume.skills.len(), 5);
        assert_eq!(resume.education[0].institution, "ETH Zurich");

        let analysis = score_match(&resume, &job());
        // universe {rust, postgresql, kubernetes, go, kafka}; 3 covered → 36
        // must-have 1 of 2 → 15; exact title → 10
        assert!((analysis.ats_score - 61.0).abs() < 1e-9, "Score was {}", analysis.ats_score);
        assert_eq!(
            analysis.missing_keywords.iter().collect::<Vec<_>>(),
            vec!["go", "kafka"]
        );
        assert_eq!(
            analysis.recommendations,
            vec!["Add must-have keywords: go", "Consider adding: kafka"]
        );
    }

    #[test]
    fn test_trait_object_scorer_matches_free_function() {
        let scorer: Arc<dyn MatchScorer> = Arc::new(KeywordMatchScorer::default());
        let resume = parse_resume(RESUME);
        assert_eq!(scorer.score(&resume, &job()), score_match(&resume, &job()));
    }

    #[test]
    fn test_parallel_calls_agree() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| score_match(&parse_resume(RESUME), &job())))
            .collect();
        let results: Vec<MatchAnalysis> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }
}
