//! Study metadata extraction from inline emoji markers.
//!
//! Each marker is optional and independent of the others; an absent marker
//! leaves its field at the default. Extraction never fails.

use crate::patterns::{
    CATEGORY_MARKER, DATE_MARKERS, FREQUENCY_MARKER, KEYWORD_MARKER, KEYWORD_TOKEN,
    resolve_difficulty,
};
use crate::types::{HeaderDefaults, Population, StudyMetadata};

/// Derive a [`StudyMetadata`] record from raw study document text.
///
/// # Examples
///
/// ```
/// use omni_frontmatter::{HeaderDefaults, extract_study_metadata};
///
/// let meta = extract_study_metadata("💡핵심키워드: #Go_Routine", &HeaderDefaults::default());
/// assert_eq!(meta.tags(), ["study", "go-routine"]);
/// ```
#[must_use]
pub fn extract_study_metadata(content: &str, defaults: &HeaderDefaults) -> StudyMetadata {
    let mut metadata = StudyMetadata::new(Population::Study.seed_tag(), defaults.created.clone());
    metadata.difficulty = defaults.difficulty;

    if let Some(value) = capture(&CATEGORY_MARKER, content) {
        for category in value.split(',') {
            metadata.push_tag(category_tag(category));
        }
    }

    if let Some(value) = capture(&KEYWORD_MARKER, content) {
        for token in KEYWORD_TOKEN.captures_iter(value) {
            if let Some(keyword) = token.get(1) {
                metadata.push_tag(keyword.as_str().to_lowercase().replace('_', "-"));
            }
        }
    }

    if let Some(difficulty) = capture(&FREQUENCY_MARKER, content).and_then(resolve_difficulty) {
        metadata.difficulty = difficulty;
    }

    if let Some(created) = extract_created(content) {
        metadata.created = created;
    }

    metadata
}

fn capture<'a>(regex: &regex::Regex, content: &'a str) -> Option<&'a str> {
    regex
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Lowercase a category entry and collapse each whitespace run into `-`.
fn category_tag(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// First matching date marker rendered as zero-padded `YYYY-MM-DD`.
fn extract_created(content: &str) -> Option<String> {
    DATE_MARKERS.iter().find_map(|regex| {
        let caps = regex.captures(content)?;
        let (year, month, day) = (caps.get(1)?, caps.get(2)?, caps.get(3)?);
        Some(format!(
            "{}-{:0>2}-{:0>2}",
            year.as_str(),
            month.as_str(),
            day.as_str()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    fn extract(content: &str) -> StudyMetadata {
        extract_study_metadata(content, &HeaderDefaults::default())
    }

    #[test]
    fn test_defaults_when_no_markers() {
        let meta = extract("# Title\n\nbody\n");
        assert_eq!(meta.tags(), ["study"]);
        assert_eq!(meta.created, "2026-01-23");
        assert_eq!(meta.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_category_whitespace_collapses() {
        assert_eq!(category_tag("  Operating   System "), "operating-system");
        assert_eq!(category_tag(" "), "");
    }

    #[test]
    fn test_long_form_date_wins_over_written_on() {
        let content = "**작성일**: 2025-1-2\n날짜: 2024년 11월 9일\n";
        assert_eq!(extract_created(content).as_deref(), Some("2024-11-09"));
    }

    #[test]
    fn test_written_on_date_fallback() {
        let content = "**작성일**: 2025-1-2\n";
        assert_eq!(extract_created(content).as_deref(), Some("2025-01-02"));
    }

    #[test]
    fn test_fullwidth_digits_keep_default_date() {
        let meta = extract("날짜: ２０２６년 ３월 ５일\n# T\n");
        assert_eq!(meta.created, "2026-01-23");
    }

    #[test]
    fn test_fullwidth_long_form_falls_back_to_written_on() {
        let content = "날짜: ２０２６년 ３월 ５일\n**작성일**: 2026-3-5\n";
        assert_eq!(extract_created(content).as_deref(), Some("2026-03-05"));
    }
}
