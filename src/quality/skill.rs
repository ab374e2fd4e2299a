//! Scoring rules for skills.
//!
//! A skill is graded with one of two mutually exclusive rule sets, chosen
//! by [`is_thin_router`]: methodology skills must carry their workflow
//! inline, thin routers must route cleanly to reference files. Both sets
//! spend the same point budgets, so scores compare across skill styles.

use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::agent::{has_trigger_phrase, is_third_person};
use super::metrics::{CategoryScore, Metric, MetricCategory};
use super::rules::{
    ANTI_PATTERNS, Band, CompositionThresholds, FieldSpec, SectionSpec, anti_patterns_fallback,
    code_fence_count, description_depth, score_composition, score_required_fields,
    score_sections, score_sections_with_fallback,
};
use super::scorer::{DocumentSize, ScorerComponent};
use super::thin_router::is_thin_router;
use crate::model::{Frontmatter, description_len, str_field};

const FIELDS: &[FieldSpec] = &[FieldSpec::new("name", 10), FieldSpec::new("description", 10)];

static METHODOLOGY_SECTIONS: LazyLock<[SectionSpec; 3]> = LazyLock::new(|| {
    [
        SectionSpec::new(r"^#{2,3}\s+quick reference\b", "Quick Reference", 8),
        SectionSpec::new(r"^#{2,3}\s+(workflow|process|phase\s+\d+)\b", "Workflow", 7),
        SectionSpec::new(r"^#{2,3}\s+success criteria\b", "Success Criteria", 5),
    ]
});

static METHODOLOGY_PRACTICES: LazyLock<[SectionSpec; 2]> = LazyLock::new(|| {
    [
        SectionSpec::new(r"^#{2,3}\s+anti-?patterns\b", ANTI_PATTERNS, 10),
        SectionSpec::new(r"^#{2,3}\s+examples?\b", "Examples section", 10),
    ]
});

static PROGRESSIVE_DISCLOSURE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"references/|see also|\]\([\w./-]+\.md\)")
        .case_insensitive(true)
        .build()
        .expect("static regex")
});

static ROUTING_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*\|.*references/.*\|").expect("static regex")
});

static REFERENCE_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"references/\w[\w./-]*").expect("static regex"));

static DECISION_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(
        r"^\s*\|\s*(intent|when|if|task|need|situation|goal|scenario|user wants)\b[^|\n]*\|",
    )
    .case_insensitive(true)
    .multi_line(true)
    .build()
    .expect("static regex")
});

static ROUTING_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Read\(references/[^)\s]+").expect("static regex"));

static CROSS_LINK: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^#{2,3}\s+related\b|related skills|see also|\[\[[^\]]+\]\]")
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .expect("static regex")
});

static DEGENERALIZATION: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"degenerali[sz](ed|ation)")
        .case_insensitive(true)
        .build()
        .expect("static regex")
});

static ANTI_PATTERNS_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"anti-?patterns?")
        .case_insensitive(true)
        .build()
        .expect("static regex")
});

static SUCCESS_CRITERIA_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"success criteria")
        .case_insensitive(true)
        .build()
        .expect("static regex")
});

/// 500-line target with ±10% tolerance on the OK/over-limit edges
pub const SKILL_COMPOSITION: CompositionThresholds = CompositionThresholds {
    metric: "Line count",
    excellent: Band::new(250, "Excellent: ≤250 lines"),
    good: Band::new(400, "Good: ≤400 lines"),
    ok: Band::new(550, "OK: ≤550 lines (target 500)"),
    over_limit: Band::new(660, "Over limit: ≤660 lines"),
    fat_note: "Too long: >660 lines, move detail to references/",
};

fn distinct_reference_files(body: &str) -> usize {
    REFERENCE_FILE
        .find_iter(body)
        .map(|m| m.as_str().trim_end_matches(['.', '/']))
        .collect::<BTreeSet<_>>()
        .len()
}

fn methodology_structural(body: &str) -> CategoryScore {
    score_sections(body, &*METHODOLOGY_SECTIONS, MetricCategory::Structural)
}

fn router_structural(body: &str) -> CategoryScore {
    let references = distinct_reference_files(body);
    let mut score = CategoryScore::new();
    score.push(Metric::check(
        MetricCategory::Structural,
        "Routing table",
        10,
        ROUTING_TABLE.is_match(body),
    ));
    score.push(
        Metric::check(
            MetricCategory::Structural,
            "Reference file mentions",
            5,
            references > 0,
        )
        .with_note(format!("{references} file(s)")),
    );
    score.push(Metric::check(
        MetricCategory::Structural,
        "Decision table",
        5,
        DECISION_TABLE.is_match(body),
    ));
    score
}

fn methodology_practices(frontmatter: &Frontmatter, body: &str) -> CategoryScore {
    let description = str_field(frontmatter, "description");
    let mut score = score_sections_with_fallback(
        body,
        &*METHODOLOGY_PRACTICES,
        MetricCategory::Practices,
        anti_patterns_fallback,
    );
    score.push(Metric::check(
        MetricCategory::Practices,
        "Trigger phrase",
        10,
        has_trigger_phrase(description),
    ));
    score.push(Metric::check(
        MetricCategory::Practices,
        "Third-person description",
        5,
        is_third_person(description),
    ));
    score.push(Metric::check(
        MetricCategory::Practices,
        "Progressive disclosure",
        5,
        PROGRESSIVE_DISCLOSURE.is_match(body),
    ));
    score
}

fn router_practices(body: &str) -> CategoryScore {
    let mut score = CategoryScore::new();
    score.push(Metric::check(
        MetricCategory::Practices,
        "Reference routing pattern",
        15,
        ROUTING_CALL.is_match(body),
    ));
    score.push(Metric::check(
        MetricCategory::Practices,
        "Related skills",
        10,
        CROSS_LINK.is_match(body),
    ));
    score.push(Metric::check(
        MetricCategory::Practices,
        "Degeneralization note",
        5,
        DEGENERALIZATION.is_match(body),
    ));
    score.push(Metric::check(
        MetricCategory::Practices,
        "Anti-Patterns marker",
        5,
        ANTI_PATTERNS_MARKER.is_match(body),
    ));
    score.push(Metric::check(
        MetricCategory::Practices,
        "Success Criteria marker",
        5,
        SUCCESS_CRITERIA_MARKER.is_match(body),
    ));
    score
}

/// Scorer for `skills/<name>/SKILL.md`
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillScorer;

impl ScorerComponent for SkillScorer {
    fn score_structural(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore {
        let mut score = score_required_fields(frontmatter, FIELDS);
        if is_thin_router(body) {
            score.extend(router_structural(body));
        } else {
            score.extend(methodology_structural(body));
        }
        score
    }

    fn score_practices(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore {
        if is_thin_router(body) {
            router_practices(body)
        } else {
            methodology_practices(frontmatter, body)
        }
    }

    fn score_composition(&self, size: DocumentSize) -> CategoryScore {
        score_composition(size.lines, &SKILL_COMPOSITION).into()
    }

    fn score_documentation(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore {
        let (desc_points, desc_note) = description_depth(description_len(frontmatter));
        let (example_points, example_note) = match code_fence_count(body) {
            6.. => (5, "Rich"),
            3..=5 => (3, "Adequate"),
            1..=2 => (1, "Few"),
            0 => (0, "No examples"),
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
            "Code examples",
            example_points,
            5,
            example_note,
        ));
        score
    }
}
