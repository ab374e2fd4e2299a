//! Scoring rules for slash commands.
//!
//! Commands are expected to stay thin: document their flags, state what
//! success looks like, and hand the heavy lifting to sub-agents through
//! `Task(...)` calls.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use super::metrics::{CategoryScore, Metric, MetricCategory};
use super::rules::{Band, CompositionThresholds, FieldSpec, score_composition, score_required_fields};
use super::scorer::{DocumentSize, ScorerComponent};
use crate::model::{Frontmatter, description_len};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::list("allowed-tools", 10),
    FieldSpec::new("description", 10),
    FieldSpec::new("argument-hint", 10),
];

static SUCCESS_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^#{1,4}\s+success criteria\b|\*\*success criteria\*\*|^\s*[-*]\s+\[[ x]\]")
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .expect("static regex")
});

static FLAGS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^##\s+flags\b")
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .expect("static regex")
});

static LONG_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^\w-])--[a-zA-Z][\w-]*").expect("static regex"));

/// 50-line target with ±10% tolerance on the OK/over-limit edges
pub const COMMAND_COMPOSITION: CompositionThresholds = CompositionThresholds {
    metric: "Line count",
    excellent: Band::new(30, "Excellent: ≤30 lines"),
    good: Band::new(45, "Good: ≤45 lines"),
    ok: Band::new(55, "OK: ≤55 lines (target 50)"),
    over_limit: Band::new(65, "Over limit: ≤65 lines"),
    fat_note: "Too long: >65 lines, delegate to an agent",
};

fn task_calls(body: &str) -> usize {
    body.matches("Task(").count()
}

/// Scorer for `commands/*.md`
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandScorer;

impl ScorerComponent for CommandScorer {
    fn score_structural(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore {
        let mut score = score_required_fields(frontmatter, FIELDS);
        score.push(Metric::check(
            MetricCategory::Structural,
            "Task() delegation",
            10,
            task_calls(body) > 0,
        ));
        score
    }

    fn score_practices(&self, _frontmatter: &Frontmatter, body: &str) -> CategoryScore {
        let calls = task_calls(body);
        let mut score = CategoryScore::new();
        score.push(Metric::check(
            MetricCategory::Practices,
            "Success criteria",
            15,
            SUCCESS_MARKER.is_match(body),
        ));
        score.push(
            Metric::check(MetricCategory::Practices, "Task() calls", 15, calls > 0)
                .with_note(format!("{calls} call(s)")),
        );
        score.push(Metric::check(
            MetricCategory::Practices,
            "Flags documented",
            10,
            FLAGS_SECTION.is_match(body) || LONG_FLAG.is_match(body),
        ));
        score
    }

    fn score_composition(&self, size: DocumentSize) -> CategoryScore {
        score_composition(size.lines, &COMMAND_COMPOSITION).into()
    }

    fn score_documentation(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore {
        let (desc_points, desc_note) = match description_len(frontmatter) {
            50.. => (5, "Clear"),
            20..=49 => (3, "Brief"),
            1..=19 => (1, "Minimal"),
            0 => (0, "Missing"),
        };

        let mut score = CategoryScore::new();
        score.push(Metric::graded(
            MetricCategory::Documentation,
            "Description clarity",
            desc_points,
            5,
            desc_note,
        ));
        score.push(Metric::check(
            MetricCategory::Documentation,
            "Code examples",
            5,
            body.contains("```"),
        ));
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fm(value: serde_json::Value) -> Frontmatter {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_structural_full() {
        let frontmatter = fm(json!({
            "allowed-tools": "Bash, Task",
            "description": "Ship it",
            "argument-hint": "[--dry-run]",
        }));
        let score = CommandScorer.score_structural(&frontmatter, "Task(subagent_type=\"x\")");
        assert_eq!(score.points(), 40);
    }

    #[test]
    fn test_kebab_case_keys_only() {
        let frontmatter = fm(json!({"allowed_tools": "Bash", "argumentHint": "x"}));
        let score = CommandScorer.score_structural(&frontmatter, "");
        assert_eq!(score.points(), 0);
    }

    #[test]
    fn test_success_marker_variants() {
        for body in [
            "## Success Criteria\n",
            "**Success Criteria**: all green",
            "- [ ] tests pass",
            "- [x] lint clean",
        ] {
            let score = CommandScorer.score_practices(&Frontmatter::new(), body);
            assert_eq!(score.metrics()[0].points, 15, "{body:?}");
        }
    }

    #[test]
    fn test_flags_detection() {
        let flagged = |body| {
            CommandScorer.score_practices(&Frontmatter::new(), body).metrics()[2].passed
        };
        assert!(flagged("## Flags\n- none"));
        assert!(flagged("Pass `--dry-run` to preview"));
        assert!(flagged("--verbose prints more"));
        assert!(!flagged("a horizontal rule\n---\n"));
        assert!(!flagged("a -- b"));
    }

    #[test]
    fn test_task_call_note() {
        let score = CommandScorer.score_practices(&Frontmatter::new(), "Task(a)\nTask(b)");
        assert_eq!(score.metrics()[1].note.as_deref(), Some("2 call(s)"));
    }

    #[test]
    fn test_documentation_bands() {
        let doc = |desc: &str| {
            CommandScorer
                .score_documentation(&fm(json!({ "description": desc })), "")
                .points()
        };
        assert_eq!(doc(&"x".repeat(50)), 5);
        assert_eq!(doc(&"x".repeat(20)), 3);
        assert_eq!(doc("short"), 1);
        assert_eq!(doc(""), 0);
    }
}
