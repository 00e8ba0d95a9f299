//! Education Segmenter and Parser.
//!
//! A line naming a degree opens a new entry once another entry is already open; a
//! blank line closes the open entry. Only the first line of an entry is interpreted,
//! the rest is kept verbatim as details.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{EducationEntry, UNKNOWN};
use crate::parsing::sections::Section;

static DEGREE_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:bachelor|master|phd|doctorate|degree|бакалавр|магистр|диплом)")
        .expect("valid degree keyword regex")
});

/// Keyword plus the words that follow it, up to the first digit or punctuation mark.
static DEGREE_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:bachelor|master|phd|doctorate|degree|бакалавр|магистр|диплом)[\p{L}\s'’]*")
        .expect("valid degree phrase regex")
});

static EDUCATION_DATES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\d{1,2}/\d{4}|\d{4})(?:\s*[-–—]\s*(?:\d{1,2}/\d{4}|\d{4}))?\b")
        .expect("valid education dates regex")
});

const EDGE_SEPARATORS: &[char] = &['-', '–', '—', '•', '*', '|', ',', ';', '(', ')'];

/// Splits the education section into entries and parses each one.
pub fn segment_and_parse(section_text: &str) -> Vec<EducationEntry> {
    segment(section_text)
        .iter()
        .map(|block| parse_entry(block))
        .collect()
}

fn segment(section_text: &str) -> Vec<Vec<&str>> {
    let mut lines = section_text.split('\n').map(str::trim).peekable();
    if lines
        .peek()
        .is_some_and(|first| Section::Education.matches_header(first))
    {
        lines.next();
    }

    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }

        if DEGREE_KEYWORD.is_match(line) && !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(line);
    }

    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn parse_entry(lines: &[&str]) -> EducationEntry {
    let first = lines.first().copied().unwrap_or_default();

    let dates = EDUCATION_DATES
        .find(first)
        .map(|m| m.as_str().trim().to_string());

    let degree_match = DEGREE_PHRASE.find(first);
    let degree = degree_match
        .map(|m| m.as_str().trim().to_string())
        .filter(|d| !d.is_empty());

    let without_degree = match degree_match {
        Some(m) => format!("{}{}", &first[..m.start()], &first[m.end()..]),
        None => first.to_string(),
    };
    let remainder = EDUCATION_DATES.replace_all(&without_degree, "");
    let institution = remainder
        .trim_matches(|c: char| c.is_whitespace() || EDGE_SEPARATORS.contains(&c))
        .to_string();

    let details = (lines.len() > 1).then(|| lines[1..].join("\n"));

    EducationEntry {
        degree,
        institution: if institution.is_empty() {
            UNKNOWN.to_string()
        } else {
            institution
        },
        dates,
        details,
    }
}
