//! Scoring rules for sub-agent definitions.

use regex::Regex;
use std::sync::LazyLock;

use super::metrics::{CategoryScore, Metric, MetricCategory};
use super::rules::{
    ANTI_PATTERNS, Band, CompositionThresholds, FieldSpec, SectionSpec, anti_patterns_fallback,
    description_depth, heading_count, score_composition, score_required_fields, score_sections,
    score_sections_with_fallback,
};
use super::scorer::{DocumentSize, ScorerComponent};
use crate::model::{Frontmatter, description_len, str_field};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", 5),
    FieldSpec::new("description", 5),
    FieldSpec::new("model", 5),
    FieldSpec::list("tools", 5),
];

static SECTIONS: LazyLock<[SectionSpec; 4]> = LazyLock::new(|| {
    [
        SectionSpec::new(r"^#{2,3}\s+.*\bfoundation\b", "Foundation", 5),
        SectionSpec::new(r"^#{2,3}\s+(phase\s+\d+|workflow)\b", "Phase workflow", 4),
        SectionSpec::new(r"^#{2,3}\s+success criteria\b", "Success Criteria", 3),
        SectionSpec::new(r"^#{2,3}\s+edge cases\b", "Edge Cases", 3),
    ]
});

static PRACTICE_SECTIONS: LazyLock<[SectionSpec; 2]> = LazyLock::new(|| {
    [
        SectionSpec::new(r"^#{2,3}\s+anti-?patterns\b", ANTI_PATTERNS, 5),
        SectionSpec::new(r"^#{2,3}\s+expected output\b", "Expected Output", 5),
    ]
});

static SKILL_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Skill:|\*\*Skill\*\*:|Skill\([^)]*\)|Skills:").expect("static regex")
});

/// 200-line target with ±10% tolerance on the OK/over-limit edges
pub const AGENT_COMPOSITION: CompositionThresholds = CompositionThresholds {
    metric: "Line count",
    excellent: Band::new(120, "Excellent: ≤120 lines"),
    good: Band::new(180, "Good: ≤180 lines"),
    ok: Band::new(220, "OK: ≤220 lines (target 200)"),
    over_limit: Band::new(275, "Over limit: ≤275 lines"),
    fat_note: "Too long: >275 lines",
};

/// Whether a description reads in the third person
pub(crate) fn is_third_person(description: &str) -> bool {
    let description = description.trim_start();
    !description.is_empty() && !description.starts_with("I ")
}

/// Whether a description tells the model when to delegate
pub(crate) fn has_trigger_phrase(description: &str) -> bool {
    let lower = description.to_lowercase();
    description.contains("PROACTIVELY") || lower.contains("use when") || lower.contains("when user")
}

/// Scorer for `agents/*.md`
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentScorer;

impl ScorerComponent for AgentScorer {
    fn score_structural(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore {
        let mut score = score_required_fields(frontmatter, FIELDS);
        score.extend(score_sections(body, &*SECTIONS, MetricCategory::Structural));
        score
    }

    fn score_practices(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore {
        let description = str_field(frontmatter, "description");
        let mut score = CategoryScore::new();

        score.push(Metric::check(
            MetricCategory::Practices,
            "Skill reference",
            10,
            SKILL_REFERENCE.is_match(body),
        ));
        score.extend(score_sections_with_fallback(
            body,
            &*PRACTICE_SECTIONS,
            MetricCategory::Practices,
            anti_patterns_fallback,
        ));
        score.push(Metric::check(
            MetricCategory::Practices,
            "HARD GATE",
            5,
            body.contains("HARD GATE"),
        ));
        score.push(Metric::check(
            MetricCategory::Practices,
            "Third-person description",
            5,
            is_third_person(description),
        ));
        score.push(Metric::check(
            MetricCategory::Practices,
            "Trigger phrase",
            5,
            has_trigger_phrase(description),
        ));
        score
    }

    fn score_composition(&self, size: DocumentSize) -> CategoryScore {
        score_composition(size.lines, &AGENT_COMPOSITION).into()
    }

    fn score_documentation(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore {
        let (desc_points, desc_note) = description_depth(description_len(frontmatter));
        let (heading_points, heading_note) = match heading_count(body) {
            6.. => (5, "Well-structured"),
            4..=5 => (3, "Adequate"),
            2..=3 => (1, "Minimal"),
            _ => (0, "Poor"),
        };

        let mut score = CategoryScore::new();
        score.push(Metric::graded(
            MetricCategory::Documentation,
            "Description depth",
            desc_points,
            5,
            desc_note,
        ));
        score.push(Metric::graded(
            MetricCategory::Documentation,
            "Heading structure",
            heading_points,
            5,
            heading_note,
        ));
        score
    }
}
