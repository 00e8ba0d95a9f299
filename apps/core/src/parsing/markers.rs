//! Line-level markers shared by the section extractors: list bullets and year tokens.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)](?:\s|$)").expect("valid numbered marker regex"));

static LEADING_SYMBOL_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-•*]\s*").expect("valid symbol marker regex"));

static LEADING_NUMBERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]\s*").expect("valid numbered strip regex"));

static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid year regex"));

/// `-`, `•`, `*`, `1. ` or `1) ` at the start of an already-trimmed line.
pub fn is_bullet(line: &str) -> bool {
    line.starts_with(['-', '•', '*']) || NUMBERED_MARKER.is_match(line)
}

/// Removes one leading symbol marker, then one leading numbered marker, and trims.
pub fn strip_marker(line: &str) -> &str {
    let line = line.trim();
    let line = match LEADING_SYMBOL_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    let line = match LEADING_NUMBERED_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    line.trim()
}

/// True when the line carries a 4-digit year in the 1900–2099 range.
pub fn has_year(line: &str) -> bool {
    YEAR.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_bullets() {
        assert!(is_bullet("- Built APIs"));
        assert!(is_bullet("• Led team"));
        assert!(is_bullet("* Wrote tests"));
    }

    #[test]
    fn test_numbered_bullets_need_separator() {
        assert!(is_bullet("1. Shipped v2"));
        assert!(is_bullet("12) Cut costs"));
        assert!(!is_bullet("2020.05 - 2021.01"));
        assert!(!is_bullet("Software Engineer"));
    }

    #[test]
    fn test_strip_marker_variants() {
        assert_eq!(strip_marker("- Built APIs"), "Built APIs");
        assert_eq!(strip_marker("•Led team "), "Led team");
        assert_eq!(strip_marker("3) Reduced latency"), "Reduced latency");
        assert_eq!(strip_marker("- 2. nested"), "nested");
        assert_eq!(strip_marker("-"), "");
        assert_eq!(strip_marker("plain text"), "plain text");
    }

    #[test]
    fn test_has_year_bounds() {
        assert!(has_year("2020 - Present"));
        assert!(has_year("Jan 1999"));
        assert!(!has_year("Room 2150"));
        assert!(!has_year("120345"));
    }
}
