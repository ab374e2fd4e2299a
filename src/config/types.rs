//! Configuration types for agent-grader.

use crate::model::DocumentKind;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory names skipped during discovery unless overridden
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[".git", "node_modules", "target"];

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or
/// config files, with CLI values overriding file values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Scoring options
    pub scoring: ScoringConfig,
    /// File discovery options
    pub discovery: DiscoveryConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Show per-metric details.
    pub const fn details(mut self, details: bool) -> Self {
        self.config.output.details = details;
        self
    }

    /// Fail when any document scores below `min_score`.
    pub const fn min_score(mut self, min_score: Option<u32>) -> Self {
        self.config.scoring.min_score = min_score;
        self
    }

    /// Force every document to be scored as `kind`.
    pub const fn kind(mut self, kind: Option<DocumentKind>) -> Self {
        self.config.scoring.kind = kind;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section configs
// ============================================================================

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (stdout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Show every metric, not just category totals
    pub details: bool,
}

/// Scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Exit with code 1 when any document scores below this (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u32>,
    /// Score every file as this kind instead of detecting it from the path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
}

/// File discovery configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directory names never descended into
    pub exclude_dirs: Vec<String>,
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(ToString::to_string).collect(),
            follow_links: false,
        }
    }
}

impl DiscoveryConfig {
    /// Whether a directory name is excluded
    #[must_use]
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == dir_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .min_score(Some(70))
            .kind(Some(DocumentKind::Skill))
            .details(true)
            .build();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.scoring.min_score, Some(70));
        assert_eq!(config.scoring.kind, Some(DocumentKind::Skill));
        assert!(config.output.details);
    }

    #[test]
    fn test_default_excludes() {
        let discovery = DiscoveryConfig::default();
        assert!(discovery.is_excluded(".git"));
        assert!(discovery.is_excluded("node_modules"));
        assert!(!discovery.is_excluded("agents"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("scoring:\n  min_score: 60\n").unwrap();
        assert_eq!(config.scoring.min_score, Some(60));
        assert_eq!(config.discovery, DiscoveryConfig::default());
        assert_eq!(config.output.format, ReportFormat::Auto);
    }

    #[test]
    fn test_kind_deserializes_kebab_case() {
        let config: AppConfig = serde_yaml::from_str("scoring:\n  kind: output-style\n").unwrap();
        assert_eq!(config.scoring.kind, Some(DocumentKind::OutputStyle));
    }
}
