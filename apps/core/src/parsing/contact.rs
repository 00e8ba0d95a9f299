//! Contact Extractor — email, phone, profile links and name from the whole text.
//!
//! Every field is found independently and defaults to `None`. The phone pattern is
//! deliberately loose and can pick up date ranges or IDs when no phone is present.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ContactInfo;

/// How many leading lines are considered when looking for the candidate's name.
const NAME_SCAN_LINES: usize = 10;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,9}")
        .expect("valid phone regex")
});

static LINKEDIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:linkedin\.com/in/|linkedin\.com/pub/)([\w-]+)").expect("valid linkedin regex")
});

static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)github\.com/([\w-]+)").expect("valid github regex"));

static NAME_STOP_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(email|phone|location|address|contact|summary|experience|skills|education)")
        .expect("valid name stop-word regex")
});

pub fn extract_contact(text: &str) -> ContactInfo {
    let email = EMAIL.find(text).map(|m| m.as_str().to_string());
    let phone = PHONE.find(text).map(|m| m.as_str().to_string());

    let linkedin = LINKEDIN
        .captures(text)
        .map(|c| format!("https://linkedin.com/in/{}", &c[1]));
    let github = GITHUB
        .captures(text)
        .map(|c| format!("https://github.com/{}", &c[1]));

    let name = find_name(text, email.as_deref(), phone.as_deref());

    ContactInfo {
        name,
        email,
        phone,
        location: None,
        linkedin,
        github,
    }
}

/// First of the leading lines that looks like a personal name: 2–4 words, no digits,
/// no list marker, no colon, and not one of the lines that carry the email or phone.
fn find_name(text: &str, email: Option<&str>, phone: Option<&str>) -> Option<String> {
    text.split('\n')
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !email.is_some_and(|e| line.contains(e)))
        .filter(|line| !phone.is_some_and(|p| line.contains(p)))
        .filter(|line| !NAME_STOP_WORDS.is_match(line))
        .find(|line| looks_like_name(line))
        .map(str::to_string)
}

fn looks_like_name(line: &str) -> bool {
    let words = line.split_whitespace().count();
    (2..=4).contains(&words)
        && !line.chars().any(char::is_numeric)
        && !line.starts_with(['-', '•', '*', '#'])
        && !line.contains(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_email_phone_from_header_block() {
        let text = "Jane Smith\njane.smith@example.com\n+1 555 123 4567\n\nSummary\nEngineer";
        let contact = extract_contact(text);
        assert_eq!(contact.name.as_deref(), Some("Jane Smith"));
        assert_eq!(contact.email.as_deref(), Some("jane.smith@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("+1 555 123 4567"));
        assert!(contact.location.is_none());
    }

    #[test]
    fn test_profile_links_are_canonicalised() {
        let text = "John Doe\nwww.LinkedIn.com/in/john-doe-42 | https://github.com/jdoe_dev/repo";
        let contact = extract_contact(text);
        assert_eq!(
            contact.linkedin.as_deref(),
            Some("https://linkedin.com/in/john-doe-42")
        );
        assert_eq!(contact.github.as_deref(), Some("https://github.com/jdoe_dev"));
    }

    #[test]
    fn test_name_skips_headers_and_labelled_lines() {
        let text = "Contact Details\nEmail: me@example.org\n# Resume Draft\nИван Петров\n";
        let contact = extract_contact(text);
        assert_eq!(contact.name.as_deref(), Some("Иван Петров"));
    }

    #[test]
    fn test_name_rejects_digits_and_single_words() {
        let text = "Resume\nRoom 42 Block B\nAlice Marie Johnson";
        assert_eq!(
            extract_contact(text).name.as_deref(),
            Some("Alice Marie Johnson")
        );
    }

    #[test]
    fn test_name_only_scans_leading_lines() {
        let mut text = "x\n".repeat(NAME_SCAN_LINES);
        text.push_str("Late Name");
        assert!(extract_contact(&text).name.is_none());
    }

    #[test]
    fn test_empty_text_yields_all_absent() {
        assert_eq!(extract_contact(""), ContactInfo::default());
    }
}
