use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Sentinel for title, company and institution fields that could not be classified.
pub const UNKNOWN: &str = "Unknown";

/// Language of a résumé or job posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

/// One job from the experience section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Never empty; `UNKNOWN` when no header line qualified.
    pub title: String,
    /// Never empty; `UNKNOWN` when no header line qualified.
    pub company: String,
    /// Free text such as `2020 - Present`; empty when no year was found.
    pub dates: String,
    pub location: Option<String>,
    pub bullets: Vec<String>,
    /// Verbatim source block, kept so downstream stages can recover from a bad parse.
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: String,
    pub dates: Option<String>,
    pub details: Option<String>,
}

/// Structured résumé assembled from plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub contact: ContactInfo,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    /// Ordered, case-insensitively unique.
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub language: Language,
    pub raw_text: String,
}

impl ResumeRecord {
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
