//! SARIF 2.1.0 report generator for CI/CD integration.
//!
//! Every check a document failed becomes a result located at that file, so
//! code-scanning dashboards can annotate it. Structural shortfalls are
//! warnings; the rest are notes. Files that could not be parsed are errors.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::GradeReport;
use crate::quality::MetricCategory;
use serde::Serialize;

const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

const RULE_STRUCTURAL: &str = "AGENT-GRADER-001";
const RULE_CHECK: &str = "AGENT-GRADER-002";
const RULE_PARSE: &str = "AGENT-GRADER-003";
const RULE_MIN_SCORE: &str = "AGENT-GRADER-004";

/// SARIF report generator
pub struct SarifReporter {
    /// Include note-level results for non-structural checks
    include_info: bool,
}

impl SarifReporter {
    /// Create a new SARIF reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { include_info: true }
    }

    /// Set whether to include note-level results
    #[must_use]
    pub const fn include_info(mut self, include: bool) -> Self {
        self.include_info = include;
        self
    }
}

impl Default for SarifReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn location(path: &std::path::Path) -> Vec<SarifLocation> {
    vec![SarifLocation {
        physical_location: Some(SarifPhysicalLocation {
            artifact_location: SarifArtifactLocation {
                uri: path.display().to_string().replace('\\', "/"),
            },
        }),
    }]
}

impl ReportGenerator for SarifReporter {
    fn generate(
        &self,
        report: &GradeReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut results = Vec::new();

        for doc in &report.documents {
            for metric in doc.score.details.iter().filter(|m| !m.passed) {
                let structural = metric.category == MetricCategory::Structural;
                if !structural && !self.include_info {
                    continue;
                }
                let note = metric
                    .note
                    .as_deref()
                    .map(|n| format!(" ({n})"))
                    .unwrap_or_default();
                results.push(SarifResult {
                    rule_id: if structural { RULE_STRUCTURAL } else { RULE_CHECK }.to_string(),
                    level: if structural {
                        SarifLevel::Warning
                    } else {
                        SarifLevel::Note
                    },
                    message: SarifMessage {
                        text: format!(
                            "{} check failed: {} (0/{}){note}",
                            metric.category, metric.name, metric.max_points
                        ),
                    },
                    locations: location(&doc.path),
                });
            }

            if let Some(min) = config.min_score
                && doc.score.overall < min
            {
                results.push(SarifResult {
                    rule_id: RULE_MIN_SCORE.to_string(),
                    level: SarifLevel::Error,
                    message: SarifMessage {
                        text: format!(
                            "{} scored {} (tier {}), below the minimum of {min}",
                            doc.kind, doc.score.overall, doc.score.tier
                        ),
                    },
                    locations: location(&doc.path),
                });
            }
        }

        for failed in &report.failures {
            results.push(SarifResult {
                rule_id: RULE_PARSE.to_string(),
                level: SarifLevel::Error,
                message: SarifMessage {
                    text: failed.error.clone(),
                },
                locations: location(&failed.path),
            });
        }

        let sarif = SarifReport {
            schema: SARIF_SCHEMA.to_string(),
            version: "2.1.0".to_string(),
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: env!("CARGO_PKG_NAME").to_string(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                        information_uri: Some(env!("CARGO_PKG_REPOSITORY"))
                            .filter(|uri| !uri.is_empty())
                            .map(str::to_string),
                        rules: get_sarif_rules(),
                    },
                },
                results,
            }],
        };

        Ok(serde_json::to_string_pretty(&sarif)?)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Sarif
    }
}

fn rule(id: &str, name: &str, description: &str, level: SarifLevel) -> SarifRule {
    SarifRule {
        id: id.to_string(),
        name: name.to_string(),
        short_description: SarifMessage {
            text: description.to_string(),
        },
        default_configuration: SarifConfiguration { level },
    }
}

fn get_sarif_rules() -> Vec<SarifRule> {
    vec![
        rule(
            RULE_STRUCTURAL,
            "MissingStructure",
            "A required frontmatter field or section is missing",
            SarifLevel::Warning,
        ),
        rule(
            RULE_CHECK,
            "QualityCheckFailed",
            "A practices, composition or documentation check awarded no points",
            SarifLevel::Note,
        ),
        rule(
            RULE_PARSE,
            "UnparseableDocument",
            "The file could not be read or its metadata could not be decoded",
            SarifLevel::Error,
        ),
        rule(
            RULE_MIN_SCORE,
            "BelowMinimumScore",
            "The document scored below the configured minimum",
            SarifLevel::Error,
        ),
    ]
}

// SARIF structures

#[derive(Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    information_uri: Option<String>,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    name: String,
    short_description: SarifMessage,
    default_configuration: SarifConfiguration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifConfiguration {
    level: SarifLevel,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: SarifLevel,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: Option<SarifPhysicalLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum SarifLevel {
    Note,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;
    use serde_json::Value;

    fn results(reporter: &SarifReporter, config: &ReportConfig) -> Vec<Value> {
        let out = reporter.generate(&sample_report(), config).unwrap();
        let sarif: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(sarif["version"], "2.1.0");
        sarif["runs"][0]["results"].as_array().unwrap().clone()
    }

    fn count(results: &[Value], rule: &str) -> usize {
        results.iter().filter(|r| r["ruleId"] == rule).count()
    }

    #[test]
    fn test_levels_by_category() {
        let results = results(&SarifReporter::new(), &ReportConfig::default());
        // The empty command misses all three fields and Task() delegation.
        assert_eq!(count(&results, RULE_STRUCTURAL), 4);
        assert!(count(&results, RULE_CHECK) > 0);
        assert_eq!(count(&results, RULE_PARSE), 1);
        assert_eq!(count(&results, RULE_MIN_SCORE), 0);

        let parse = results.iter().find(|r| r["ruleId"] == RULE_PARSE).unwrap();
        assert_eq!(parse["level"], "error");
        assert_eq!(
            parse["locations"][0]["physicalLocation"]["artifactLocation"]["uri"],
            "skills/broken/SKILL.md"
        );
        assert!(results
            .iter()
            .filter(|r| r["ruleId"] == RULE_STRUCTURAL)
            .all(|r| r["level"] == "warning"));
    }

    #[test]
    fn test_without_info_and_with_min_score() {
        let config = ReportConfig {
            min_score: Some(50),
            ..ReportConfig::default()
        };
        let results = results(&SarifReporter::new().include_info(false), &config);
        assert_eq!(count(&results, RULE_CHECK), 0);
        assert_eq!(count(&results, RULE_MIN_SCORE), 1);
    }
}
