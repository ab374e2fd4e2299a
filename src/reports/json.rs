//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::{FailedDocument, GradeReport, GradeSummary, ScoredDocument};
use crate::quality::SCORING_ENGINE_VERSION;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        report: &GradeReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let json = JsonGradeReport {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
                scoring_engine_version: SCORING_ENGINE_VERSION,
            },
            generated_at: Utc::now().to_rfc3339(),
            min_score: config.min_score,
            summary: &report.summary,
            documents: &report.documents,
            failures: &report.failures,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };
        Ok(rendered)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
    scoring_engine_version: &'static str,
}

#[derive(Serialize)]
struct JsonGradeReport<'a> {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<u32>,
    summary: &'a GradeSummary,
    documents: &'a [ScoredDocument],
    failures: &'a [FailedDocument],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;
    use serde_json::Value;

    fn render(config: &ReportConfig) -> Value {
        let out = JsonReporter::new().generate(&sample_report(), config).unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn test_top_level_shape() {
        let json = render(&ReportConfig::default());
        assert_eq!(json["tool"]["name"], "agent-grader");
        assert_eq!(json["tool"]["scoring_engine_version"], SCORING_ENGINE_VERSION);
        assert!(json["generated_at"].is_string());
        assert!(json.get("min_score").is_none());
        assert_eq!(json["summary"]["documents"], 2);
        assert_eq!(json["summary"]["by_tier"]["F"], 1);
        assert_eq!(json["summary"]["by_kind"]["command"], 1);
        assert_eq!(json["failures"][0]["path"], "skills/broken/SKILL.md");
    }

    #[test]
    fn test_document_details() {
        let json = render(&ReportConfig {
            min_score: Some(70),
            ..ReportConfig::default()
        });
        assert_eq!(json["min_score"], 70);
        let agent = &json["documents"][0];
        assert_eq!(agent["kind"], "agent");
        let details = agent["score"]["details"].as_array().unwrap();
        let total: u64 = details.iter().map(|m| m["points"].as_u64().unwrap()).sum();
        assert_eq!(agent["score"]["overall"].as_u64(), Some(total));
        assert_eq!(details[0]["category"], "structural");
    }

    #[test]
    fn test_compact_output() {
        let out = JsonReporter::new()
            .pretty(false)
            .generate(&sample_report(), &ReportConfig::default())
            .unwrap();
        assert!(!out.contains('\n'));
    }
}
