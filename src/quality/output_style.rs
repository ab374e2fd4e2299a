//! Scoring rules for output styles.

use super::metrics::{CategoryScore, Metric, MetricCategory};
use super::rules::{Band, CompositionThresholds, FieldSpec, score_composition, score_required_fields};
use super::scorer::{DocumentSize, ScorerComponent};
use crate::model::{Frontmatter, description_len};

const FIELDS: &[FieldSpec] = &[FieldSpec::new("name", 15), FieldSpec::new("description", 15)];

/// Bodies shorter than this are too thin to steer a response style
const SUBSTANTIAL_BODY_CHARS: usize = 50;

pub const OUTPUT_STYLE_COMPOSITION: CompositionThresholds = CompositionThresholds {
    metric: "Line count",
    excellent: Band::new(50, "Excellent: ≤50 lines"),
    good: Band::new(100, "Good: ≤100 lines"),
    ok: Band::new(200, "OK: ≤200 lines"),
    over_limit: Band::new(500, "Over limit: ≤500 lines"),
    fat_note: "Too long: >500 lines",
};

fn has_formatting(body: &str) -> bool {
    body.contains('#') || body.contains("- ") || body.contains("```")
}

/// Scorer for `output-styles/*.md`
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputStyleScorer;

impl ScorerComponent for OutputStyleScorer {
    fn score_structural(&self, frontmatter: &Frontmatter, _body: &str) -> CategoryScore {
        let mut score = CategoryScore::from(Metric::check(
            MetricCategory::Structural,
            "Has frontmatter",
            10,
            !frontmatter.is_empty(),
        ));
        score.extend(score_required_fields(frontmatter, FIELDS));
        score
    }

    fn score_practices(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore {
        let body = body.trim();
        let mut score = CategoryScore::new();
        score.push(Metric::check(
            MetricCategory::Practices,
            "Non-empty body",
            20,
            !body.is_empty(),
        ));
        score.push(Metric::check(
            MetricCategory::Practices,
            "keep-coding-instructions declared",
            10,
            frontmatter.contains_key("keep-coding-instructions"),
        ));
        score.push(Metric::check(
            MetricCategory::Practices,
            "Substantial body",
            10,
            body.chars().count() >= SUBSTANTIAL_BODY_CHARS,
        ));
        score
    }

    fn score_composition(&self, size: DocumentSize) -> CategoryScore {
        score_composition(size.lines, &OUTPUT_STYLE_COMPOSITION).into()
    }

    fn score_documentation(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore {
        let (desc_points, desc_note) = match description_len(frontmatter) {
            100.. => (5, "Comprehensive"),
            50..=99 => (3, "Adequate"),
            1..=49 => (1, "Brief"),
            0 => (0, "Missing"),
        };

        let mut score = CategoryScore::new();
        score.push(Metric::graded(
            MetricCategory::Documentation,
            "Description depth",
            desc_points,
            5,
            desc_note,
        ));
        score.push(Metric::check(
            MetricCategory::Documentation,
            "Markdown formatting",
            5,
            has_formatting(body),
        ));
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::Scorer;
    use serde_json::json;

    fn fm(value: serde_json::Value) -> Frontmatter {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_keep_coding_instructions_presence_only() {
        let practices = |value| {
            OutputStyleScorer
                .score_practices(&fm(json!({ "keep-coding-instructions": value })), "")
                .metrics()[1]
                .passed
        };
        assert!(practices(json!(false)));
        assert!(practices(json!(null)));
        assert!(!OutputStyleScorer.score_practices(&Frontmatter::new(), "").metrics()[1].passed);
    }

    #[test]
    fn test_frontmatter_marker() {
        let empty = OutputStyleScorer.score_structural(&Frontmatter::new(), "");
        assert_eq!(empty.points(), 0);
        let named = OutputStyleScorer.score_structural(&fm(json!({"name": "Terse"})), "");
        assert_eq!(named.points(), 25);
    }

    #[test]
    fn test_body_practices() {
        let practices = |body: &str| OutputStyleScorer.score_practices(&Frontmatter::new(), body).points();
        assert_eq!(practices("   \n"), 0);
        assert_eq!(practices("Be terse."), 20);
        assert_eq!(practices(&"word ".repeat(20)), 30);
    }

    #[test]
    fn test_formatting_markers() {
        assert!(has_formatting("# Style"));
        assert!(has_formatting("- bullet"));
        assert!(has_formatting("```\ncode\n```"));
        assert!(!has_formatting("plain prose only"));
    }

    #[test]
    fn test_complete_style_scores_full() {
        let frontmatter = fm(json!({
            "name": "Tutor",
            "description": "Explains each change in a patient tutoring voice, with small \
                            worked examples and a short recap at the end of every answer.",
            "keep-coding-instructions": true,
        }));
        let body = "# Voice\n- Explain reasoning step by step before showing the final code.\n";
        let content = format!("---\nname: Tutor\n---\n{body}");
        let score = OutputStyleScorer.score(&content, &frontmatter, body);
        assert_eq!(score.overall, 100);
    }
}
