//! Tag-shape normalizer for interview documents.
//!
//! Rewrites a comma-separated `tags:` line into YAML list form, or prepends a
//! default frontmatter block when the document has none.

use crate::error::MigrateError;
use crate::types::{HEADER_DELIMITER, HeaderDefaults, Population, Rewrite};
use crate::writer::has_frontmatter;

/// Reason reported when a default header is prepended.
pub const REASON_HEADER_ADDED: &str = "frontmatter added";
/// Reason reported when a comma-separated tag line is expanded.
pub const REASON_TAGS_FIXED: &str = "tag format fixed";
/// Reason reported when nothing needs to change.
pub const REASON_NO_CHANGE: &str = "no change needed";

/// Only this many leading lines are searched for the `tags:` field.
pub const TAG_SCAN_LINES: usize = 10;

const MIN_HEADER_LINES: usize = 3;
const TAGS_LABEL: &str = "tags:";

/// Default interview header, blank separator line included.
#[must_use]
pub fn default_interview_header(defaults: &HeaderDefaults) -> String {
    format!(
        "{HEADER_DELIMITER}\n{TAGS_LABEL}\n  - {}\ncreated: {}\ndifficulty: {}\n{HEADER_DELIMITER}\n\n",
        Population::Interview.seed_tag(),
        defaults.created,
        defaults.difficulty,
    )
}

/// Split the value of a comma-separated `tags:` line into trimmed entries.
fn split_tag_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

/// Build the normalized text for an interview document.
///
/// # Errors
///
/// Returns [`MigrateError::TooShort`] when the document opens a header but
/// has fewer than three lines.
pub fn normalize_interview_tags(
    content: &str,
    defaults: &HeaderDefaults,
) -> Result<Rewrite, MigrateError> {
    if !has_frontmatter(content) {
        return Ok(Rewrite::Changed {
            content: format!("{}{content}", default_interview_header(defaults)),
            reason: REASON_HEADER_ADDED,
        });
    }

    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() < MIN_HEADER_LINES {
        return Err(MigrateError::TooShort { lines: lines.len() });
    }

    let found = lines
        .iter()
        .take(TAG_SCAN_LINES)
        .enumerate()
        .find_map(|(index, line)| {
            line.strip_prefix(TAGS_LABEL)
                .filter(|value| value.contains(','))
                .map(|value| (index, value))
        });
    let Some((index, value)) = found else {
        return Ok(Rewrite::Unchanged {
            reason: REASON_NO_CHANGE,
        });
    };

    let mut output: Vec<String> = Vec::with_capacity(lines.len() + 4);
    output.extend(lines[..index].iter().map(|line| (*line).to_string()));
    output.push(TAGS_LABEL.to_string());
    output.extend(split_tag_list(value).map(|tag| format!("  - {tag}")));
    output.extend(lines[index + 1..].iter().map(|line| (*line).to_string()));

    Ok(Rewrite::Changed {
        content: output.join("\n"),
        reason: REASON_TAGS_FIXED,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tag_list_skips_empty_entries() {
        let tags: Vec<&str> = split_tag_list(" go, ,backend ,").collect();
        assert_eq!(tags, ["go", "backend"]);
    }

    #[test]
    fn test_default_header_shape() {
        assert_eq!(
            default_interview_header(&HeaderDefaults::default()),
            "---\ntags:\n  - interview\ncreated: 2026-01-23\ndifficulty: 중\n---\n\n"
        );
    }

    #[test]
    fn test_too_short() {
        let result = normalize_interview_tags("---\n", &HeaderDefaults::default());
        assert!(matches!(result, Err(MigrateError::TooShort { lines: 2 })));
    }

    #[test]
    fn test_tags_line_beyond_scan_window_is_ignored() {
        let mut content = String::from("---\n");
        for i in 0..TAG_SCAN_LINES {
            content.push_str(&format!("field{i}: x\n"));
        }
        content.push_str("tags: a, b\n---\n");
        let result = normalize_interview_tags(&content, &HeaderDefaults::default());
        assert!(matches!(result, Ok(Rewrite::Unchanged { .. })));
    }

    fn with_tags_on_line(line_number: usize) -> String {
        let mut content = String::from("---\n");
        for i in 2..line_number {
            content.push_str(&format!("field{i}: x\n"));
        }
        content.push_str("tags: a, b\n---\n");
        content
    }

    #[test]
    fn test_tags_on_last_scanned_line_is_rewritten() {
        let content = with_tags_on_line(TAG_SCAN_LINES);
        assert_eq!(content.split('\n').nth(TAG_SCAN_LINES - 1), Some("tags: a, b"));
        let result = normalize_interview_tags(&content, &HeaderDefaults::default());
        let Ok(Rewrite::Changed { content, .. }) = result else {
            panic!("expected rewrite");
        };
        assert!(content.contains("tags:\n  - a\n  - b\n---\n"));
    }

    #[test]
    fn test_tags_on_first_unscanned_line_is_ignored() {
        let content = with_tags_on_line(TAG_SCAN_LINES + 1);
        assert_eq!(content.split('\n').nth(TAG_SCAN_LINES), Some("tags: a, b"));
        let result = normalize_interview_tags(&content, &HeaderDefaults::default());
        assert!(matches!(result, Ok(Rewrite::Unchanged { .. })));
    }
}
