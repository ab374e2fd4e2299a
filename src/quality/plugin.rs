//! Scoring rules for plugin manifests.
//!
//! A manifest has no body: every check reads the decoded JSON object, and
//! composition is measured in bytes of the raw file.

use super::metrics::{CategoryScore, Metric, MetricCategory};
use super::rules::{Band, CompositionThresholds, FieldSpec, score_composition, score_required_fields};
use super::scorer::{DocumentSize, ScorerComponent};
use crate::model::{
    FieldType, Frontmatter, description_len, has_field, nested_str_field, non_empty_array,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", 10),
    FieldSpec::new("description", 10),
    FieldSpec::new("version", 10),
];

const LINK_FIELDS: &[&str] = &["homepage", "repository", "license"];

pub const PLUGIN_COMPOSITION: CompositionThresholds = CompositionThresholds {
    metric: "Manifest size",
    excellent: Band::new(1024, "Excellent: ≤1KB"),
    good: Band::new(2 * 1024, "Good: ≤2KB"),
    ok: Band::new(5 * 1024, "OK: ≤5KB"),
    over_limit: Band::new(10 * 1024, "Large: ≤10KB"),
    fat_note: "Too large: >10KB",
};

/// Scorer for `.claude-plugin/plugin.json`
#[derive(Debug, Clone, Copy, Default)]
pub struct PluginScorer;

impl ScorerComponent for PluginScorer {
    fn score_structural(&self, manifest: &Frontmatter, _body: &str) -> CategoryScore {
        let mut score = score_required_fields(manifest, FIELDS);
        score.push(Metric::check(
            MetricCategory::Structural,
            "Has author.name",
            10,
            !nested_str_field(manifest, "author", "name").trim().is_empty(),
        ));
        score
    }

    fn score_practices(&self, manifest: &Frontmatter, _body: &str) -> CategoryScore {
        let mut score: CategoryScore = LINK_FIELDS
            .iter()
            .map(|&key| {
                Metric::check(
                    MetricCategory::Practices,
                    format!("Has {key}"),
                    10,
                    has_field(manifest, key, FieldType::Text),
                )
            })
            .collect();
        score.push(Metric::check(
            MetricCategory::Practices,
            "Has keywords",
            10,
            non_empty_array(manifest, "keywords"),
        ));
        score
    }

    fn score_composition(&self, size: DocumentSize) -> CategoryScore {
        score_composition(size.bytes, &PLUGIN_COMPOSITION).into()
    }

    fn score_documentation(&self, manifest: &Frontmatter, _body: &str) -> CategoryScore {
        let (desc_points, desc_note) = match description_len(manifest) {
            100.. => (5, "Comprehensive"),
            50..=99 => (3, "Adequate"),
            20..=49 => (1, "Brief"),
            _ => (0, "Too short"),
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
            "Has readme",
            5,
            has_field(manifest, "readme", FieldType::Text),
        ));
        score
    }
}
