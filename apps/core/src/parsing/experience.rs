//! Experience Segmenter and Entry Parser.
//!
//! The segmenter walks the experience section with a small line classifier and cuts it
//! into one raw block per job. The parser then reads title, company and dates out of a
//! block's header lines and collects its bullets.
//!
//! Both heuristics tolerate 2-line and 3-line job headers. Wrapped bullet text is kept
//! inside the current job: once a block holds a bullet, every following line belongs to
//! it until a blank line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ExperienceEntry, UNKNOWN};
use crate::parsing::markers::{has_year, is_bullet, strip_marker};
use crate::parsing::sections::Section;

/// Header lines collected before a non-bullet, year-less line may open a new job.
const HEADER_COLLECTION_LINES: usize = 3;

static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:19|20)\d{2}\b(?:\s*[-–—]\s*(?:\b(?:19|20)\d{2}\b|Present|Current))?")
        .expect("valid date range regex")
});

/// Splits an experience section into raw per-job blocks.
pub fn segment(section_text: &str) -> Vec<String> {
    let mut lines = section_text.split('\n').peekable();
    if lines
        .peek()
        .is_some_and(|first| Section::Experience.matches_header(first))
    {
        lines.next();
    }

    let mut blocks = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();

    for line in lines {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush(&mut buffer, &mut blocks);
            continue;
        }

        let in_bullets = buffer.iter().any(|l| is_bullet(l.trim()));

        if is_bullet(trimmed) || in_bullets || buffer.len() < HEADER_COLLECTION_LINES {
            buffer.push(line);
        } else if !has_year(trimmed) && trimmed.chars().count() > 3 {
            flush(&mut buffer, &mut blocks);
            buffer.push(line);
        } else {
            buffer.push(line);
        }
    }

    flush(&mut buffer, &mut blocks);
    blocks
}

fn flush(buffer: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if !buffer.is_empty() {
        blocks.push(buffer.join("\n"));
        buffer.clear();
    }
}

/// Parses one raw block produced by [`segment`].
pub fn parse_entry(raw_block: &str) -> ExperienceEntry {
    let lines: Vec<&str> = raw_block
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let split_at = lines.iter().position(|l| is_bullet(l)).unwrap_or(lines.len());
    let (header_lines, bullet_lines) = lines.split_at(split_at);

    let mut title: Option<String> = None;
    let mut company: Option<String> = None;
    let mut dates = String::new();

    for (i, line) in header_lines.iter().enumerate() {
        let dated = has_year(line);

        if i == 0 && !dated {
            title = Some(line.to_string());
        } else if i == 1 && !dated {
            company = Some(line.to_string());
        } else if dated {
            if let Some(m) = DATE_RANGE.find(line) {
                dates = m.as_str().trim().to_string();
            }
            let leftover = DATE_RANGE.replace_all(line, "");
            let leftover = leftover.trim();
            if !leftover.is_empty() && company.is_none() {
                company = Some(leftover.to_string());
            }
        } else if title.is_none() && company.is_none() {
            title = Some(line.to_string());
        } else if title.is_some() && company.is_none() {
            company = Some(line.to_string());
        }
    }

    let bullets = bullet_lines
        .iter()
        .map(|l| strip_marker(l))
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    ExperienceEntry {
        title: title.unwrap_or_else(|| UNKNOWN.to_string()),
        company: company.unwrap_or_else(|| UNKNOWN.to_string()),
        dates,
        location: None,
        bullets,
        raw_text: raw_block.to_string(),
    }
}

/// Segments and parses the whole experience section.
pub fn extract_experience(section_text: &str) -> Vec<ExperienceEntry> {
    segment(section_text)
        .iter()
        .map(|block| parse_entry(block))
        .collect()
}
