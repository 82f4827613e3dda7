//! Tests for extractor module - study metadata markers.

use omni_frontmatter::{Difficulty, HeaderDefaults, StudyMetadata, extract_study_metadata};

fn extract(content: &str) -> StudyMetadata {
    extract_study_metadata(content, &HeaderDefaults::default())
}

const FULL_NOTE: &str = "\
> 날짜: 2026년 3월 5일
> 🏷️기술 카테고리: Go, Operating System
> 💡핵심키워드: #Goroutine #Context_Switch #go
> 💼 면접 빈출도: ⭐⭐⭐최상

# 고루틴 스케줄링

본문
";

#[test]
fn test_full_note() {
    let meta = extract(FULL_NOTE);
    assert_eq!(
        meta.tags(),
        [
            "study",
            "go",
            "operating-system",
            "goroutine",
            "context-switch"
        ]
    );
    assert_eq!(meta.created, "2026-03-05");
    assert_eq!(meta.difficulty, Difficulty::High);
}

#[test]
fn test_category_deduplicates_case_variants() {
    let meta = extract("🏷️기술 카테고리: Go, go, GO\n");
    assert_eq!(meta.tags(), ["study", "go"]);
}

#[test]
fn test_seed_tag_not_duplicated() {
    let meta = extract("🏷️기술 카테고리: Study, Network\n💡핵심키워드: #network\n");
    assert_eq!(meta.tags(), ["study", "network"]);
}

#[test]
fn test_highest_tier_maps_to_high() {
    assert_eq!(extract("💼 면접 빈출도: 최상\n").difficulty, Difficulty::High);
    assert_eq!(extract("💼 면접 빈출도: ⭐⭐상\n").difficulty, Difficulty::High);
    assert_eq!(extract("💼 면접 빈출도: ⭐중\n").difficulty, Difficulty::Medium);
    assert_eq!(extract("💼 면접 빈출도: 하\n").difficulty, Difficulty::Low);
}

#[test]
fn test_unknown_level_keeps_default() {
    assert_eq!(extract("💼 면접 빈출도: ???\n").difficulty, Difficulty::Medium);
}

#[test]
fn test_written_on_date_padded() {
    let meta = extract("**작성일**: 2025-9-1\n# T\n");
    assert_eq!(meta.created, "2025-09-01");
}

#[test]
fn test_custom_default_date() {
    let defaults = HeaderDefaults {
        created: "2024-12-31".to_string(),
        difficulty: Difficulty::Low,
    };
    let meta = extract_study_metadata("# Untagged\n", &defaults);
    assert_eq!(meta.created, "2024-12-31");
    assert_eq!(meta.difficulty, Difficulty::Low);
    assert_eq!(meta.tags(), ["study"]);
}
