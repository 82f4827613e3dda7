//! Marker patterns for study-note metadata.
//!
//! Centralized pattern definitions for metadata extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::Difficulty;

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

/// `🏷️기술 카테고리: a, b c` (variation selector optional).
pub static CATEGORY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"\x{1F3F7}\x{FE0F}?기술 카테고리:[^\S\n]*([^\n]+)"));

/// `💡핵심키워드: #a #b_c`
pub static KEYWORD_MARKER: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"\x{1F4A1}핵심키워드:[^\S\n]*([^\n]+)"));

/// Hash-prefixed keyword token inside the keyword marker value.
pub static KEYWORD_TOKEN: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"#(\w+)"));

/// `💼 면접 빈출도: ⭐최상`
pub static FREQUENCY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"\x{1F4BC} 면접 빈출도:\s*(\S+)"));

/// Date marker alternatives, tried in order; the first match wins.
///
/// Each captures year, month and day.
pub static DATE_MARKERS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        compile_regex(r"날짜:\s*([0-9]{4})년\s*([0-9]{1,2})월\s*([0-9]{1,2})일"),
        compile_regex(r"\*\*작성일\*\*:\s*([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})"),
    ]
});

/// Frequency level rules, evaluated top to bottom by substring containment.
///
/// Order is load-bearing: `최상` contains `상`, so the highest tier must be
/// checked before the generic high tier. The first matching rule wins.
pub const DIFFICULTY_RULES: [(&str, Difficulty); 4] = [
    ("최상", Difficulty::High),
    ("상", Difficulty::High),
    ("중", Difficulty::Medium),
    ("하", Difficulty::Low),
];

/// Resolve a frequency token to a difficulty using [`DIFFICULTY_RULES`].
#[must_use]
pub fn resolve_difficulty(level: &str) -> Option<Difficulty> {
    DIFFICULTY_RULES
        .iter()
        .find(|(needle, _)| level.contains(needle))
        .map(|(_, difficulty)| *difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_tier_checked_first() {
        assert_eq!(DIFFICULTY_RULES[0].0, "최상");
        assert_eq!(resolve_difficulty("⭐⭐⭐최상"), Some(Difficulty::High));
    }

    #[test]
    fn test_resolve_levels() {
        assert_eq!(resolve_difficulty("상"), Some(Difficulty::High));
        assert_eq!(resolve_difficulty("중간"), Some(Difficulty::Medium));
        assert_eq!(resolve_difficulty("하"), Some(Difficulty::Low));
        assert_eq!(resolve_difficulty("unknown"), None);
    }

    #[test]
    fn test_category_marker_without_variation_selector() {
        let caps = CATEGORY_MARKER.captures("\u{1F3F7}기술 카테고리: Go");
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("Go"));
    }
}
