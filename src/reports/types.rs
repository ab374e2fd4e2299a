//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: from the output file extension, summary otherwise
    #[default]
    Auto,
    /// Compact terminal summary
    #[value(alias = "text")]
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
    /// SARIF 2.1.0 for CI/CD
    Sarif,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
            Self::Sarif => write!(f, "sarif"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include every metric, not just category totals
    pub show_details: bool,
    /// Threshold from `--min-score`, flagged in reports that support it
    pub min_score: Option<u32>,
    /// Title for the report
    pub title: Option<String>,
}

impl ReportConfig {
    /// Config with per-metric details enabled
    #[must_use]
    pub fn detailed() -> Self {
        Self {
            show_details: true,
            ..Self::default()
        }
    }

    /// Report title, falling back to the tool name
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Agent Grader Report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_round_trips_through_clap() {
        for format in ReportFormat::value_variants() {
            let parsed = ReportFormat::from_str(&format.to_string(), true).unwrap();
            assert_eq!(parsed, *format);
        }
        assert_eq!(ReportFormat::from_str("md", true), Ok(ReportFormat::Markdown));
    }

    #[test]
    fn test_default_title() {
        assert_eq!(ReportConfig::default().title(), "Agent Grader Report");
    }
}
