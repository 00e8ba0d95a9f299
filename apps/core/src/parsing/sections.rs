//! Section Locator — finds where a labelled résumé section starts and stops.
//!
//! Header patterns are anchored at the start of a trimmed line and matched
//! case-insensitively, in English and Russian. A section runs from its first header
//! line (inclusive) to the next line that is a header of a *different* section
//! (exclusive), or to the end of the text. Blank lines never end a section.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Summary,
    Experience,
    Skills,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Summary,
        Section::Experience,
        Section::Skills,
        Section::Education,
        Section::Contact,
    ];

    /// Ordered header patterns for this section.
    pub fn header_patterns(&self) -> &'static [Regex] {
        let index = match self {
            Section::Summary => 0,
            Section::Experience => 1,
            Section::Skills => 2,
            Section::Education => 3,
            Section::Contact => 4,
        };
        &HEADER_PATTERNS[index]
    }

    /// True when the trimmed line opens this section.
    pub fn matches_header(&self, line: &str) -> bool {
        let line = line.trim();
        self.header_patterns().iter().any(|p| p.is_match(line))
    }
}

const HEADER_SOURCES: [&[&str]; 5] = [
    // summary
    &[
        r"(?i)^(summary|profile|objective|about|резюме|профиль|о себе)",
        r"(?i)^(professional summary|executive summary)",
    ],
    // experience
    &[
        r"(?i)^(experience|work experience|employment|work history|опыт работы|трудовой опыт|места работы)",
        r"(?i)^(professional experience|career history)",
    ],
    // skills
    &[
        r"(?i)^(skills|technical skills|core competencies|навыки|компетенции|технические навыки)",
        r"(?i)^(key skills|professional skills)",
    ],
    // education
    &[
        r"(?i)^(education|academic background|qualifications|образование|квалификация)",
        r"(?i)^(educational background|academic qualifications)",
    ],
    // contact
    &[r"(?i)^(contact|contact information|personal information|контакты|контактная информация)"],
];

static HEADER_PATTERNS: Lazy<Vec<Vec<Regex>>> = Lazy::new(|| {
    HEADER_SOURCES
        .iter()
        .map(|sources| {
            sources
                .iter()
                .map(|s| Regex::new(s).expect("valid section header regex"))
                .collect()
        })
        .collect()
});

/// Returns the half-open range of line indices (split on `\n`) covered by `section`,
/// or `None` when no header for it exists.
pub fn locate(text: &str, section: Section) -> Option<Range<usize>> {
    let lines: Vec<&str> = text.split('\n').collect();

    let Some(start) = lines.iter().position(|l| section.matches_header(l)) else {
        debug!("Section {:?} not found", section);
        return None;
    };

    let end = lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .filter(|(_, l)| !l.trim().is_empty())
        .find(|(_, l)| {
            Section::ALL
                .iter()
                .filter(|other| **other != section)
                .any(|other| other.matches_header(l))
        })
        .map(|(i, _)| i)
        .unwrap_or(lines.len());

    Some(start..end)
}

/// The text of `section`, header line included, joined back with `\n`.
pub fn section_text(text: &str, section: Section) -> Option<String> {
    let range = locate(text, section)?;
    let lines: Vec<&str> = text.split('\n').collect();
    Some(lines[range].join("\n"))
}
