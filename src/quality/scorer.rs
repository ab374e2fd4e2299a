//! Scoring seam and the shared combiner.
//!
//! Each document kind implements [`ScorerComponent`] with its own rule
//! tables. Aggregation lives in one place, [`compute_combined_score`], and
//! every component gets [`Scorer`] through a blanket impl, so no kind can
//! assemble a [`QualityScore`] differently from the others.

use super::agent::AgentScorer;
use super::command::CommandScorer;
use super::metrics::{CategoryScore, QualityScore};
use super::output_style::OutputStyleScorer;
use super::plugin::PluginScorer;
use super::skill::SkillScorer;
use crate::model::{DocumentKind, Frontmatter};

/// Quality scoring engine version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Size of the raw document, measured once per score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSize {
    pub lines: usize,
    pub bytes: usize,
}

impl DocumentSize {
    #[must_use]
    pub fn of(content: &str) -> Self {
        Self {
            lines: content.lines().count(),
            bytes: content.len(),
        }
    }
}

/// The four category methods a document kind supplies
pub trait ScorerComponent {
    /// Required fields and sections (0-40)
    fn score_structural(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore;

    /// Conventions and good habits (0-40)
    fn score_practices(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore;

    /// Size against the kind's budget (0-10)
    fn score_composition(&self, size: DocumentSize) -> CategoryScore;

    /// Description quality and examples (0-10)
    fn score_documentation(&self, frontmatter: &Frontmatter, body: &str) -> CategoryScore;
}

/// Score a document from its raw text, metadata and body
pub trait Scorer: Send + Sync {
    fn score(&self, content: &str, frontmatter: &Frontmatter, body: &str) -> QualityScore;
}

impl<T: ScorerComponent + Send + Sync> Scorer for T {
    fn score(&self, content: &str, frontmatter: &Frontmatter, body: &str) -> QualityScore {
        compute_combined_score(content, frontmatter, body, self)
    }
}

/// Run a component's four category methods in emission order and combine
/// them into a [`QualityScore`].
pub fn compute_combined_score<C>(
    content: &str,
    frontmatter: &Frontmatter,
    body: &str,
    component: &C,
) -> QualityScore
where
    C: ScorerComponent + ?Sized,
{
    let size = DocumentSize::of(content);

    let structural = component.score_structural(frontmatter, body);
    let practices = component.score_practices(frontmatter, body);
    let composition = component.score_composition(size);
    let documentation = component.score_documentation(frontmatter, body);

    QualityScore::new(structural, practices, composition, documentation)
}

/// Scorer for a document kind
#[must_use]
pub fn scorer_for(kind: DocumentKind) -> &'static dyn Scorer {
    match kind {
        DocumentKind::Agent => &AgentScorer,
        DocumentKind::Command => &CommandScorer,
        DocumentKind::Skill => &SkillScorer,
        DocumentKind::Plugin => &PluginScorer,
        DocumentKind::OutputStyle => &OutputStyleScorer,
    }
}
