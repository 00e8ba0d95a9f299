//! Skills Extractor — tokenizes the skills section into a deduplicated list.

use std::collections::HashSet;

use crate::parsing::markers::strip_marker;

/// Every line after the header is split on commas, or pipes when there are no commas,
/// or kept whole. Duplicates are dropped case-insensitively; the first spelling wins.
pub fn extract_skills(section_text: &str) -> Vec<String> {
    let tokens = section_text
        .split('\n')
        .skip(1)
        .map(strip_marker)
        .filter(|line| !line.is_empty())
        .flat_map(split_line);

    dedup_case_insensitive(tokens)
}

fn split_line(line: &str) -> Vec<&str> {
    if line.contains(',') {
        line.split(',').collect()
    } else if line.contains('|') {
        line.split('|').collect()
    } else {
        vec![line]
    }
}

/// Trims, drops empties, and keeps the first occurrence of each case-folded value.
pub fn dedup_case_insensitive<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .map(str::to_string)
        .collect()
}
