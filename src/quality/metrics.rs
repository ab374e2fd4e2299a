//! Score values produced by the quality engine.
//!
//! A [`QualityScore`] is built from four [`CategoryScore`]s, each of which
//! owns the [`Metric`]s it awarded. Category points are always derived from
//! the metrics they hold, so the total of `details` and `overall` cannot
//! drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scoring category a metric belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricCategory {
    /// Required fields and sections (0-40)
    Structural,
    /// Conventions and good habits (0-40)
    Practices,
    /// Size against the per-kind budget (0-10)
    Composition,
    /// Description quality and examples (0-10)
    Documentation,
}

impl MetricCategory {
    /// All categories, in emission order
    pub const ALL: [Self; 4] = [
        Self::Structural,
        Self::Practices,
        Self::Composition,
        Self::Documentation,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Practices => "practices",
            Self::Composition => "composition",
            Self::Documentation => "documentation",
        }
    }

    /// Upper bound of points a category can contribute
    #[must_use]
    pub const fn max_points(&self) -> u32 {
        match self {
            Self::Structural | Self::Practices => 40,
            Self::Composition | Self::Documentation => 10,
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One graded check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub category: MetricCategory,
    /// Human-readable check label
    pub name: String,
    /// Points awarded, never above `max_points`
    pub points: u32,
    pub max_points: u32,
    pub passed: bool,
    /// Graded label such as "Comprehensive"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Metric {
    /// All-or-nothing check
    pub fn check(
        category: MetricCategory,
        name: impl Into<String>,
        max_points: u32,
        passed: bool,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            points: if passed { max_points } else { 0 },
            max_points,
            passed,
            note: None,
        }
    }

    /// Partial-credit check; passes when any points are awarded.
    ///
    /// `points` is clamped to `max_points`.
    pub fn graded(
        category: MetricCategory,
        name: impl Into<String>,
        points: u32,
        max_points: u32,
        note: impl Into<String>,
    ) -> Self {
        let points = points.min(max_points);
        Self {
            category,
            name: name.into(),
            points,
            max_points,
            passed: points > 0,
            note: Some(note.into()),
        }
    }

    /// Attach a note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Points and metrics for a single category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryScore {
    points: u32,
    metrics: Vec<Metric>,
}

impl CategoryScore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: 0,
            metrics: Vec::new(),
        }
    }

    /// Add a metric, accumulating its points
    pub fn push(&mut self, metric: Metric) {
        self.points += metric.points;
        self.metrics.push(metric);
    }

    /// Merge another category result into this one
    pub fn extend(&mut self, other: Self) {
        self.points += other.points;
        self.metrics.extend(other.metrics);
    }

    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    #[must_use]
    pub fn into_parts(self) -> (u32, Vec<Metric>) {
        (self.points, self.metrics)
    }
}

impl From<Metric> for CategoryScore {
    fn from(metric: Metric) -> Self {
        let mut score = Self::new();
        score.push(metric);
        score
    }
}

impl FromIterator<Metric> for CategoryScore {
    fn from_iter<I: IntoIterator<Item = Metric>>(iter: I) -> Self {
        let mut score = Self::new();
        for metric in iter {
            score.push(metric);
        }
        score
    }
}

/// Letter tier derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Excellent: 85-100
    A,
    /// Good: 70-84
    B,
    /// Fair: 50-69
    C,
    /// Poor: 30-49
    D,
    /// Failing: <30
    F,
}

impl Tier {
    /// All tiers, best first
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::F];

    /// Create tier from an overall score
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            85..=u32::MAX => Self::A,
            70..=84 => Self::B,
            50..=69 => Self::C,
            30..=49 => Self::D,
            _ => Self::F,
        }
    }

    /// Get tier letter
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Get tier description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Fair",
            Self::D => "Poor",
            Self::F => "Failing",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Complete quality score for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct QualityScore {
    /// Overall score (0-100)
    pub overall: u32,
    pub tier: Tier,
    pub structural: u32,
    pub practices: u32,
    pub composition: u32,
    pub documentation: u32,
    /// Metrics in emission order: structural, practices, composition, documentation
    pub details: Vec<Metric>,
}

impl QualityScore {
    /// Sum the four categories into an overall score and derive its tier
    pub fn new(
        structural: CategoryScore,
        practices: CategoryScore,
        composition: CategoryScore,
        documentation: CategoryScore,
    ) -> Self {
        let (structural, mut details) = structural.into_parts();
        let (practices, practice_metrics) = practices.into_parts();
        let (composition, composition_metrics) = composition.into_parts();
        let (documentation, documentation_metrics) = documentation.into_parts();
        details.extend(practice_metrics);
        details.extend(composition_metrics);
        details.extend(documentation_metrics);

        let overall = structural + practices + composition + documentation;
        Self {
            overall,
            tier: Tier::from_score(overall),
            structural,
            practices,
            composition,
            documentation,
            details,
        }
    }

    /// Points awarded in one category
    #[must_use]
    pub const fn category_points(&self, category: MetricCategory) -> u32 {
        match category {
            MetricCategory::Structural => self.structural,
            MetricCategory::Practices => self.practices,
            MetricCategory::Composition => self.composition,
            MetricCategory::Documentation => self.documentation,
        }
    }

    /// Find a metric by name
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.details.iter().find(|m| m.name == name)
    }

    /// Metrics that awarded less than their maximum
    pub fn shortfalls(&self) -> impl Iterator<Item = &Metric> {
        self.details.iter().filter(|m| m.points < m.max_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bands() {
        assert_eq!(Tier::from_score(100), Tier::A);
        assert_eq!(Tier::from_score(85), Tier::A);
        assert_eq!(Tier::from_score(84), Tier::B);
        assert_eq!(Tier::from_score(70), Tier::B);
        assert_eq!(Tier::from_score(69), Tier::C);
        assert_eq!(Tier::from_score(50), Tier::C);
        assert_eq!(Tier::from_score(49), Tier::D);
        assert_eq!(Tier::from_score(30), Tier::D);
        assert_eq!(Tier::from_score(29), Tier::F);
        assert_eq!(Tier::from_score(0), Tier::F);
    }

    #[test]
    fn test_check_metric_points() {
        let pass = Metric::check(MetricCategory::Structural, "Has name", 5, true);
        let fail = Metric::check(MetricCategory::Structural, "Has name", 5, false);
        assert_eq!((pass.points, pass.passed), (5, true));
        assert_eq!((fail.points, fail.passed), (0, false));
    }

    #[test]
    fn test_graded_metric_clamps() {
        let m = Metric::graded(MetricCategory::Documentation, "Description", 9, 5, "Big");
        assert_eq!(m.points, 5);
        assert!(m.passed);
        let zero = Metric::graded(MetricCategory::Documentation, "Description", 0, 5, "Missing");
        assert!(!zero.passed);
    }

    #[test]
    fn test_quality_score_sums_categories() {
        let structural: CategoryScore = [
            Metric::check(MetricCategory::Structural, "a", 10, true),
            Metric::check(MetricCategory::Structural, "b", 10, false),
        ]
        .into_iter()
        .collect();
        let practices = CategoryScore::from(Metric::check(MetricCategory::Practices, "c", 15, true));
        let composition = CategoryScore::from(Metric::graded(
            MetricCategory::Composition,
            "Line count",
            8,
            10,
            "Good",
        ));
        let documentation = CategoryScore::new();

        let score = QualityScore::new(structural, practices, composition, documentation);
        assert_eq!(score.structural, 10);
        assert_eq!(score.practices, 15);
        assert_eq!(score.composition, 8);
        assert_eq!(score.documentation, 0);
        assert_eq!(score.overall, 33);
        assert_eq!(score.tier, Tier::D);
        assert_eq!(score.details.len(), 4);
        assert_eq!(
            score.details.iter().map(|m| m.points).sum::<u32>(),
            score.overall
        );
        assert_eq!(score.details[0].name, "a");
        assert_eq!(score.details[3].category, MetricCategory::Composition);
    }

    #[test]
    fn test_shortfalls() {
        let score = QualityScore::new(
            CategoryScore::from(Metric::check(MetricCategory::Structural, "ok", 5, true)),
            CategoryScore::from(Metric::check(MetricCategory::Practices, "missing", 5, false)),
            CategoryScore::new(),
            CategoryScore::new(),
        );
        let names: Vec<_> = score.shortfalls().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["missing"]);
    }

    #[test]
    fn test_metric_serialization_omits_empty_note() {
        let m = Metric::check(MetricCategory::Practices, "HARD GATE", 5, true);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["category"], "practices");
        assert!(json.get("note").is_none());
    }
}
