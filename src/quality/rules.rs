//! Reusable rule evaluators shared by every document scorer.
//!
//! Rule tables are declarative: a scorer lists the frontmatter keys
//! ([`FieldSpec`]) and body patterns ([`SectionSpec`]) it expects, plus the
//! size ladder ([`CompositionThresholds`]) for its kind, and these
//! functions turn them into metrics.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use super::metrics::{CategoryScore, Metric, MetricCategory};
use crate::model::{FieldType, Frontmatter, has_field};

/// A required frontmatter key and the shape its value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub points: u32,
    pub field_type: FieldType,
}

impl FieldSpec {
    /// A key whose value must be a non-blank string
    #[must_use]
    pub const fn new(name: &'static str, points: u32) -> Self {
        Self {
            name,
            points,
            field_type: FieldType::Text,
        }
    }

    /// A key that may also hold a list, like `tools: [Read, Grep]`
    #[must_use]
    pub const fn list(name: &'static str, points: u32) -> Self {
        Self {
            name,
            points,
            field_type: FieldType::TextOrList,
        }
    }
}

/// A required body pattern, matched case-insensitively in multi-line mode
#[derive(Debug, Clone)]
pub struct SectionSpec {
    pub pattern: Regex,
    pub name: &'static str,
    pub points: u32,
}

impl SectionSpec {
    /// Compile a section rule.
    ///
    /// Only called while initializing static rule tables, where a bad
    /// pattern is a programming error.
    #[must_use]
    pub fn new(pattern: &str, name: &'static str, points: u32) -> Self {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .expect("static section pattern");
        Self {
            pattern,
            name,
            points,
        }
    }

    /// Whether the body contains this section
    #[must_use]
    pub fn matches(&self, body: &str) -> bool {
        self.pattern.is_match(body)
    }
}

/// One step of a composition ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// Inclusive upper bound
    pub limit: usize,
    pub note: &'static str,
}

impl Band {
    #[must_use]
    pub const fn new(limit: usize, note: &'static str) -> Self {
        Self { limit, note }
    }
}

/// Size ladder for one document kind: 10/8/6/3/0 points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionThresholds {
    /// Metric label, e.g. "Line count"
    pub metric: &'static str,
    pub excellent: Band,
    pub good: Band,
    pub ok: Band,
    pub over_limit: Band,
    /// Note for anything past `over_limit`
    pub fat_note: &'static str,
}

impl CompositionThresholds {
    /// Points and note for a measured size
    #[must_use]
    pub const fn grade(&self, size: usize) -> (u32, &'static str) {
        if size <= self.excellent.limit {
            (10, self.excellent.note)
        } else if size <= self.good.limit {
            (8, self.good.note)
        } else if size <= self.ok.limit {
            (6, self.ok.note)
        } else if size <= self.over_limit.limit {
            (3, self.over_limit.note)
        } else {
            (0, self.fat_note)
        }
    }
}

/// Maximum points a composition metric can award
pub const COMPOSITION_MAX_POINTS: u32 = 10;

/// Award each field's points iff the key holds a value of the expected type.
///
/// Emits one structural metric per field, named `Has <key>`.
#[must_use]
pub fn score_required_fields(frontmatter: &Frontmatter, specs: &[FieldSpec]) -> CategoryScore {
    specs
        .iter()
        .map(|spec| {
            Metric::check(
                MetricCategory::Structural,
                format!("Has {}", spec.name),
                spec.points,
                has_field(frontmatter, spec.name, spec.field_type),
            )
        })
        .collect()
}

/// Award each section's points iff its pattern matches the body.
#[must_use]
pub fn score_sections(
    body: &str,
    specs: &[SectionSpec],
    category: MetricCategory,
) -> CategoryScore {
    score_sections_with_fallback(body, specs, category, |_, _| false)
}

/// Like [`score_sections`], but a failed pattern gets a second chance
/// through `fallback(body, section_name)`.
#[must_use]
pub fn score_sections_with_fallback<F>(
    body: &str,
    specs: &[SectionSpec],
    category: MetricCategory,
    fallback: F,
) -> CategoryScore
where
    F: Fn(&str, &str) -> bool,
{
    specs
        .iter()
        .map(|spec| {
            let found = spec.matches(body) || fallback(body, spec.name);
            Metric::check(category, spec.name, spec.points, found)
        })
        .collect()
}

/// Grade a line or byte count against a kind's ladder.
#[must_use]
pub fn score_composition(size: usize, thresholds: &CompositionThresholds) -> Metric {
    let (points, note) = thresholds.grade(size);
    Metric::graded(
        MetricCategory::Composition,
        thresholds.metric,
        points,
        COMPOSITION_MAX_POINTS,
        note,
    )
}

// ============================================================================
// Shared heuristics
// ============================================================================

static BEST_PRACTICES_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^##\s+best practices\b.*$")
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .expect("static regex")
});

static LEVEL_TWO_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s").expect("static regex"));

static DONT_SUBSECTION: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^###\s+(don'?t|don’t|do not|avoid)\b")
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .expect("static regex")
});

static MARKDOWN_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+\S").expect("static regex"));

/// Name shared by every Anti-Patterns rule, used to key the fallback
pub const ANTI_PATTERNS: &str = "Anti-Patterns";

/// Fallback for a missing Anti-Patterns section: a `## Best Practices`
/// section whose own text contains a `### Don't` subsection.
#[must_use]
pub fn anti_patterns_fallback(body: &str, section_name: &str) -> bool {
    if section_name != ANTI_PATTERNS {
        return false;
    }
    BEST_PRACTICES_HEADING.find_iter(body).any(|heading| {
        let rest = &body[heading.end()..];
        let section_end = LEVEL_TWO_HEADING
            .find(rest)
            .map_or(rest.len(), |next| next.start());
        DONT_SUBSECTION.is_match(&rest[..section_end])
    })
}

/// Number of markdown headings in a body
#[must_use]
pub fn heading_count(body: &str) -> usize {
    MARKDOWN_HEADING.find_iter(body).count()
}

/// Number of literal code fence markers (an open/close pair counts twice)
#[must_use]
pub fn code_fence_count(body: &str) -> usize {
    body.matches("```").count()
}

/// Description-length ladder used by agents and skills
#[must_use]
pub fn description_depth(len: usize) -> (u32, &'static str) {
    match len {
        200.. => (5, "Comprehensive"),
        100..=199 => (3, "Adequate"),
        1..=99 => (1, "Brief"),
        0 => (0, "Missing"),
    }
}
