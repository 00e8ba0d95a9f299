//! Years-of-experience estimates from parsed entries and job posting text.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ExperienceEntry, JobPosting, ResumeRecord};

/// Used when neither the résumé nor the posting yields a number.
const DEFAULT_YEARS: f64 = 3.0;

static ONGOING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(present|current|now|по настоящее время|текущий)").expect("valid ongoing regex")
});

static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19[0-9]{2}|20[0-9]{2})\b").expect("valid year regex"));

static MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+([0-9]{4})")
        .expect("valid month-year regex")
});

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Tried in order; the first pattern that matches decides. Two captures mean a range.
static REQUIRED_YEARS: Lazy<Vec<Regex>> = Lazy::new(|| {
    const UNIT: &str = r"(?:years?|лет|года|годов)";
    [
        format!(r"(?i)(?:от|from|min|minimum)\s*([0-9]+)\s*(?:до|to|max|maximum|-)\s*([0-9]+)\s*{UNIT}"),
        format!(r"(?i)([0-9]+)\s*[-–—]\s*([0-9]+)\s*{UNIT}"),
        format!(r"(?i)([0-9]+)\s*\+\s*{UNIT}"),
        format!(r"(?i)(?:от|from|min|minimum)\s*([0-9]+)\s*{UNIT}"),
        format!(r"(?i)([0-9]+)\s*{UNIT}\s*(?:of|опыта|experience)"),
        format!(r"(?i)([0-9]+)\s*{UNIT}"),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid required-years regex"))
    .collect()
});

/// Total years across entries, rounded to one decimal.
///
/// Two years in `dates` count as their difference; one year plus an ongoing marker
/// counts up to `today`; a lone year counts as one year. Entries without years add
/// nothing.
pub fn total_experience_years(entries: &[ExperienceEntry], today: NaiveDate) -> f64 {
    let total_months: i64 = entries
        .iter()
        .map(|e| entry_months(&e.dates, today))
        .sum();

    (total_months as f64 / 12.0 * 10.0).round() / 10.0
}

fn entry_months(dates: &str, today: NaiveDate) -> i64 {
    let dates = dates.trim();
    if dates.is_empty() {
        return 0;
    }

    let mut years: Vec<i64> = YEAR
        .captures_iter(dates)
        .filter_map(|c| c[1].parse().ok())
        .collect();
    if years.is_empty() {
        years = MONTH_YEAR
            .captures_iter(dates)
            .filter_map(|c| c[2].parse().ok())
            .collect();
    }

    match years.as_slice() {
        [start, end, ..] => (end - start) * 12,
        [start] if ONGOING.is_match(dates) => {
            let lower = dates.to_lowercase();
            let start_month = MONTHS
                .iter()
                .position(|m| lower.contains(m))
                .map(|i| i as i64 + 1)
                .unwrap_or(1);
            (i64::from(today.year()) - start) * 12 + (i64::from(today.month()) - start_month)
        }
        [_] => 12,
        [] => 0,
    }
}

/// Years of experience a posting asks for, from its description and requirements.
/// A range such as `3-5 years` yields its midpoint.
pub fn required_years(job: &JobPosting) -> Option<f64> {
    let text = format!("{} {}", job.description, job.requirements.join(" "));

    REQUIRED_YEARS.iter().find_map(|pattern| {
        let caps = pattern.captures(&text)?;
        let low: f64 = caps.get(1)?.as_str().parse().ok()?;
        match caps.get(2) {
            Some(high) => {
                let high: f64 = high.as_str().parse().ok()?;
                Some((low + high) / 2.0)
            }
            None => Some(low),
        }
    })
}

/// Best available experience figure for generated prose: computed from the résumé,
/// else required by the posting, else the number of jobs, else a fixed default.
pub fn estimate_experience_years(resume: &ResumeRecord, job: &JobPosting, today: NaiveDate) -> f64 {
    let computed = total_experience_years(&resume.experience, today);
    if computed > 0.0 {
        return computed;
    }

    if let Some(required) = required_years(job).filter(|y| *y > 0.0) {
        return required;
    }

    if !resume.experience.is_empty() {
        return resume.experience.len() as f64;
    }

    DEFAULT_YEARS
}
