// Résumé reconstruction: section location, per-section extraction, assembly.
// Every extractor is total: malformed input degrades to defaults, never to an error.

pub mod contact;
pub mod education;
pub mod experience;
pub mod language;
pub mod markers;
pub mod sections;
pub mod skills;

use std::sync::Arc;

use tracing::debug;

use crate::models::{EducationEntry, ExperienceEntry, ResumeRecord};
use language::{detect_language, LanguageDetector};
use sections::{section_text, Section};

/// Output of one section extractor.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Summary(Option<String>),
    Experience(Vec<ExperienceEntry>),
    Skills(Vec<String>),
    Education(Vec<EducationEntry>),
}

type SectionExtractor = fn(&str) -> SectionContent;

/// Extraction strategy per section. Contact details are read from the whole text, so
/// the contact section only acts as a boundary for the others.
const EXTRACTORS: [(Section, SectionExtractor); 4] = [
    (Section::Summary, summary_content),
    (Section::Experience, experience_content),
    (Section::Skills, skills_content),
    (Section::Education, education_content),
];

fn summary_content(text: &str) -> SectionContent {
    SectionContent::Summary(extract_summary(text))
}

fn experience_content(text: &str) -> SectionContent {
    SectionContent::Experience(experience::extract_experience(text))
}

fn skills_content(text: &str) -> SectionContent {
    SectionContent::Skills(skills::extract_skills(text))
}

fn education_content(text: &str) -> SectionContent {
    SectionContent::Education(education::segment_and_parse(text))
}

/// Summary body without its header line; `None` when nothing is left.
pub fn extract_summary(section_text: &str) -> Option<String> {
    let body = section_text
        .split_once('\n')
        .map(|(_, rest)| rest)
        .unwrap_or_default()
        .trim();
    (!body.is_empty()).then(|| body.to_string())
}

/// Assembles a [`ResumeRecord`] from plain text.
///
/// Holds an optional external language detector; without one (or when it returns
/// `None`) the Cyrillic-ratio heuristic decides.
#[derive(Clone, Default)]
pub struct ResumeParser {
    detector: Option<Arc<dyn LanguageDetector>>,
}

impl ResumeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language_detector(detector: Arc<dyn LanguageDetector>) -> Self {
        Self {
            detector: Some(detector),
        }
    }

    pub fn parse(&self, raw_text: &str) -> ResumeRecord {
        let mut record = ResumeRecord {
            contact: contact::extract_contact(raw_text),
            summary: None,
            experience: Vec::new(),
            skills: Vec::new(),
            education: Vec::new(),
            language: self
                .detector
                .as_ref()
                .and_then(|d| d.detect(raw_text))
                .unwrap_or_else(|| detect_language(raw_text)),
            raw_text: raw_text.to_string(),
        };

        for (section, extract) in EXTRACTORS {
            let Some(text) = section_text(raw_text, section) else {
                continue;
            };
            match extract(&text) {
                SectionContent::Summary(summary) => record.summary = summary,
                SectionContent::Experience(entries) => record.experience = entries,
                SectionContent::Skills(skills) => record.skills = skills,
                SectionContent::Education(entries) => record.education = entries,
            }
        }

        debug!(
            "Parsed resume: {} experience entries, {} skills, {} education entries, language={}",
            record.experience.len(),
            record.skills.len(),
            record.education.len(),
            record.language
        );

        record
    }
}

/// Parses résumé text with the built-in language heuristic.
pub fn parse_resume(raw_text: &str) -> ResumeRecord {
    ResumeParser::default().parse(raw_text)
}
