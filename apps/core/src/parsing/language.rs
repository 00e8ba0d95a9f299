use crate::models::Language;

/// Share of Cyrillic letters among all letters above which text counts as Russian.
const CYRILLIC_RATIO_THRESHOLD: f64 = 0.3;

/// External language detector. Return `None` when unsure; the parser then falls back
/// to [`detect_language`].
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Option<Language>;
}

/// Built-in detector based on the Cyrillic letter ratio.
pub struct CyrillicRatioDetector;

impl LanguageDetector for CyrillicRatioDetector {
    fn detect(&self, text: &str) -> Option<Language> {
        Some(detect_language(text))
    }
}

/// `ru` when more than 30% of alphabetic characters are Cyrillic, `en` otherwise
/// (including text without letters).
pub fn detect_language(text: &str) -> Language {
    let (cyrillic, letters) = text
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(cyr, total), c| {
            let is_cyrillic = ('\u{0400}'..='\u{04FF}').contains(&c);
            (cyr + usize::from(is_cyrillic), total + 1)
        });

    if letters == 0 {
        return Language::En;
    }

    if cyrillic as f64 / letters as f64 > CYRILLIC_RATIO_THRESHOLD {
        Language::Ru
    } else {
        Language::En
    }
}

/// Language to generate output in: the shared language when both agree, otherwise the
/// job posting's (or the résumé's when `prefer_job` is false).
pub fn decide_output_language(resume: Language, job: Language, prefer_job: bool) -> Language {
    if resume == job || prefer_job {
        job
    } else {
        resume
    }
}
