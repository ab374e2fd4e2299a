//! Scoring discovered files and aggregating the results.

use super::discovery::DiscoveredDocument;
use crate::error::GraderError;
use crate::model::{Document, DocumentKind};
use crate::parsers::parse_file;
use crate::quality::{QualityScore, Tier, is_thin_router};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

/// A successfully scored file
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDocument {
    pub path: PathBuf,
    pub kind: DocumentKind,
    /// Which skill rule set applied; `None` for other kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thin_router: Option<bool>,
    pub score: QualityScore,
}

impl ScoredDocument {
    /// Score an already-parsed document
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        let thin_router = (doc.kind == DocumentKind::Skill).then(|| is_thin_router(&doc.body));
        Self {
            path: doc.path.clone().unwrap_or_default(),
            kind: doc.kind,
            thin_router,
            score: doc.score(),
        }
    }
}

/// A file that could not be read or parsed
#[derive(Debug, Clone, Serialize)]
pub struct FailedDocument {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of grading one file
#[derive(Debug, Clone)]
pub enum GradeOutcome {
    Scored(ScoredDocument),
    Failed(FailedDocument),
}

fn grade_one(discovered: &DiscoveredDocument) -> GradeOutcome {
    let parsed = match discovered.kind {
        Some(kind) => parse_file(&discovered.path, Some(kind)),
        None => Err(GraderError::unknown_kind(
            discovered.path.display().to_string(),
        )),
    };
    match parsed {
        Ok(doc) => {
            let scored = ScoredDocument::from_document(&doc);
            tracing::debug!(
                path = %scored.path.display(),
                kind = %scored.kind,
                overall = scored.score.overall,
                "scored document"
            );
            GradeOutcome::Scored(scored)
        }
        Err(err) => {
            tracing::warn!("{err}");
            GradeOutcome::Failed(FailedDocument {
                path: discovered.path.clone(),
                error: err.to_string(),
            })
        }
    }
}

/// Parse and score every discovered file in parallel.
///
/// Output order follows input order.
#[must_use]
pub fn score_paths(documents: &[DiscoveredDocument]) -> Vec<GradeOutcome> {
    documents.par_iter().map(grade_one).collect()
}

/// The lowest-scoring document of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowestScore {
    pub path: PathBuf,
    pub overall: u32,
}

/// Aggregate figures for a run
#[derive(Debug, Clone, Serialize)]
pub struct GradeSummary {
    pub documents: usize,
    pub failures: usize,
    /// Mean overall score, 0 when nothing was scored
    pub mean_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest: Option<LowestScore>,
    /// Documents per tier, every tier listed best first
    pub by_tier: IndexMap<Tier, usize>,
    /// Documents per kind, only kinds that occurred
    pub by_kind: IndexMap<DocumentKind, usize>,
}

impl GradeSummary {
    fn from_documents(documents: &[ScoredDocument], failures: usize) -> Self {
        let mut by_tier: IndexMap<Tier, usize> = Tier::ALL.iter().map(|&t| (t, 0)).collect();
        let mut by_kind: IndexMap<DocumentKind, usize> = IndexMap::new();
        for doc in documents {
            *by_tier.entry(doc.score.tier).or_default() += 1;
            *by_kind.entry(doc.kind).or_default() += 1;
        }
        by_kind.sort_keys();

        let total: u32 = documents.iter().map(|d| d.score.overall).sum();
        let mean_score = if documents.is_empty() {
            0.0
        } else {
            f64::from(total) / documents.len() as f64
        };
        let lowest = documents
            .iter()
            .min_by_key(|d| d.score.overall)
            .map(|d| LowestScore {
                path: d.path.clone(),
                overall: d.score.overall,
            });

        Self {
            documents: documents.len(),
            failures,
            mean_score,
            lowest,
            by_tier,
            by_kind,
        }
    }
}

/// Everything a report needs about one run
#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub summary: GradeSummary,
    pub documents: Vec<ScoredDocument>,
    pub failures: Vec<FailedDocument>,
}

impl GradeReport {
    /// Split outcomes into scored documents and failures, sorted by path
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<GradeOutcome>) -> Self {
        let mut documents = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                GradeOutcome::Scored(doc) => documents.push(doc),
                GradeOutcome::Failed(failed) => failures.push(failed),
            }
        }
        documents.sort_by(|a, b| a.path.cmp(&b.path));
        failures.sort_by(|a, b| a.path.cmp(&b.path));

        Self {
            summary: GradeSummary::from_documents(&documents, failures.len()),
            documents,
            failures,
        }
    }

    /// Documents scoring strictly below `min_score`
    pub fn below(&self, min_score: u32) -> impl Iterator<Item = &ScoredDocument> {
        self.documents
            .iter()
            .filter(move |d| d.score.overall < min_score)
    }

    /// Process exit code for this run.
    ///
    /// Parse failures take precedence over low scores.
    #[must_use]
    pub fn exit_code(&self, min_score: Option<u32>) -> i32 {
        if !self.failures.is_empty() {
            super::exit_codes::PARSE_FAILURES
        } else if min_score.is_some_and(|min| self.below(min).next().is_some()) {
            super::exit_codes::BELOW_MIN_SCORE
        } else {
            super::exit_codes::SUCCESS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Frontmatter;
    use crate::pipeline::exit_codes;

    fn scored(path: &str, kind: DocumentKind, body: &str) -> GradeOutcome {
        let doc = Document::new(kind, body, Frontmatter::new(), body).with_path(path);
        GradeOutcome::Scored(ScoredDocument::from_document(&doc))
    }

    fn failed(path: &str) -> GradeOutcome {
        GradeOutcome::Failed(FailedDocument {
            path: path.into(),
            error: "boom".into(),
        })
    }

    #[test]
    fn test_summary_counts() {
        let report = GradeReport::from_outcomes(vec![
            scored("b.md", DocumentKind::Command, ""),
            scored("a.md", DocumentKind::Agent, ""),
            failed("c.md"),
        ]);
        assert_eq!(report.documents[0].path, PathBuf::from("a.md"));
        assert_eq!(report.summary.documents, 2);
        assert_eq!(report.summary.failures, 1);
        assert_eq!(report.summary.by_tier.len(), 5);
        assert_eq!(report.summary.by_tier[&Tier::F], 2);
        let kinds: Vec<_> = report.summary.by_kind.keys().copied().collect();
        assert_eq!(kinds, vec![DocumentKind::Agent, DocumentKind::Command]);
    }

    #[test]
    fn test_mean_and_lowest() {
        let report = GradeReport::from_outcomes(vec![
            scored("agent.md", DocumentKind::Agent, ""),
            scored("style.md", DocumentKind::OutputStyle, ""),
        ]);
        let agent = report.documents[0].score.overall;
        let style = report.documents[1].score.overall;
        let mean = f64::from(agent + style) / 2.0;
        assert!((report.summary.mean_score - mean).abs() < f64::EPSILON);
        assert_eq!(report.summary.lowest.as_ref().unwrap().overall, agent.min(style));
    }

    #[test]
    fn test_empty_report() {
        let report = GradeReport::from_outcomes(Vec::new());
        assert!(report.summary.lowest.is_none());
        assert!(report.summary.mean_score.abs() < f64::EPSILON);
        assert_eq!(report.exit_code(Some(100)), exit_codes::SUCCESS);
    }

    #[test]
    fn test_exit_codes() {
        let low = GradeReport::from_outcomes(vec![scored("a.md", DocumentKind::Agent, "")]);
        assert_eq!(low.exit_code(None), exit_codes::SUCCESS);
        assert_eq!(low.exit_code(Some(0)), exit_codes::SUCCESS);
        assert_eq!(low.exit_code(Some(90)), exit_codes::BELOW_MIN_SCORE);

        let broken = GradeReport::from_outcomes(vec![
            scored("a.md", DocumentKind::Agent, ""),
            failed("b.md"),
        ]);
        assert_eq!(broken.exit_code(Some(90)), exit_codes::PARSE_FAILURES);
    }

    #[test]
    fn test_skill_classification_recorded() {
        let router = "| Task | Go |\n|---|---|\n| a | Read(references/a.md) |\n";
        let GradeOutcome::Scored(skill) = scored("s/SKILL.md", DocumentKind::Skill, router) else {
            panic!("expected a score");
        };
        assert_eq!(skill.thin_router, Some(true));
        let GradeOutcome::Scored(agent) = scored("a.md", DocumentKind::Agent, router) else {
            panic!("expected a score");
        };
        assert_eq!(agent.thin_router, None);
    }

    #[test]
    fn test_unknown_kind_fails() {
        let outcomes = score_paths(&[DiscoveredDocument {
            path: "notes.md".into(),
            kind: None,
        }]);
        assert!(matches!(outcomes[0], GradeOutcome::Failed(_)));
    }
}
