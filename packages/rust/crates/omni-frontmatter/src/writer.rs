//! Frontmatter writer for study documents.
//!
//! Replaces everything above the first top-level heading with a freshly
//! rendered frontmatter block.

use crate::error::MigrateError;
use crate::types::{HEADER_DELIMITER, Rewrite, StudyMetadata};

/// Reason reported for a study document that is rewritten.
pub const REASON_CONVERTED: &str = "converted";
/// Reason reported for a study document that already has frontmatter.
pub const REASON_ALREADY_CONVERTED: &str = "already converted";

/// Whether `content` already opens with a frontmatter block.
#[must_use]
pub fn has_frontmatter(content: &str) -> bool {
    content
        .strip_prefix(HEADER_DELIMITER)
        .is_some_and(|rest| rest.starts_with('\n'))
}

/// Whether `line` is a top-level `# ` heading (not `## ` or deeper).
#[must_use]
pub fn is_top_level_heading(line: &str) -> bool {
    line.trim().starts_with("# ")
}

/// Render the frontmatter block lines for `metadata`, closing delimiter last.
#[must_use]
pub fn render_frontmatter(metadata: &StudyMetadata) -> Vec<String> {
    let mut lines = Vec::with_capacity(metadata.tags().len() + 5);
    lines.push(HEADER_DELIMITER.to_string());
    lines.push("tags:".to_string());
    lines.extend(metadata.tags().iter().map(|tag| format!("  - {tag}")));
    lines.push(format!("created: {}", metadata.created));
    lines.push(format!("difficulty: {}", metadata.difficulty));
    lines.push(HEADER_DELIMITER.to_string());
    lines
}

/// Build the converted text for a study document.
///
/// Returns [`Rewrite::Unchanged`] when the document already starts with the
/// header delimiter.
///
/// # Errors
///
/// Returns [`MigrateError::NoHeading`] when no line is a top-level heading.
pub fn convert_study_document(
    content: &str,
    metadata: &StudyMetadata,
) -> Result<Rewrite, MigrateError> {
    if has_frontmatter(content) {
        return Ok(Rewrite::Unchanged {
            reason: REASON_ALREADY_CONVERTED,
        });
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let body_start = lines
        .iter()
        .position(|line| is_top_level_heading(line))
        .ok_or(MigrateError::NoHeading)?;

    let mut output = render_frontmatter(metadata);
    output.push(String::new());
    output.extend(lines[body_start..].iter().map(|line| (*line).to_string()));

    Ok(Rewrite::Changed {
        content: output.join("\n"),
        reason: REASON_CONVERTED,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    #[test]
    fn test_heading_levels() {
        assert!(is_top_level_heading("# Title"));
        assert!(is_top_level_heading("  # Indented"));
        assert!(!is_top_level_heading("## Section"));
        assert!(!is_top_level_heading("#tag"));
    }

    #[test]
    fn test_has_frontmatter_requires_delimiter_line() {
        assert!(has_frontmatter("---\ntags:\n---\n"));
        assert!(!has_frontmatter("----\n"));
        assert!(!has_frontmatter("# Title\n---\n"));
    }

    #[test]
    fn test_render_frontmatter_order() {
        let mut meta = StudyMetadata::new("study", "2026-03-05");
        meta.push_tag("go");
        meta.difficulty = Difficulty::High;
        assert_eq!(
            render_frontmatter(&meta),
            [
                "---",
                "tags:",
                "  - study",
                "  - go",
                "created: 2026-03-05",
                "difficulty: 상",
                "---",
            ]
        );
    }

    #[test]
    fn test_preamble_is_discarded() {
        let meta = StudyMetadata::default();
        let content = "note preamble\n## not this\n# Title\nbody\n";
        let Ok(Rewrite::Changed { content, .. }) = convert_study_document(content, &meta) else {
            panic!("expected rewrite");
        };
        assert_eq!(
            content,
            "---\ntags:\n  - study\ncreated: 2026-01-23\ndifficulty: 중\n---\n\n# Title\nbody\n"
        );
    }
}
