//! Report generation for grading runs.
//!
//! This module renders a [`GradeReport`] in several formats:
//! - Summary: compact terminal output
//! - JSON: structured data for programmatic integration
//! - Markdown: tables for pull-request comments and docs
//! - SARIF: CI/CD code-scanning dashboards
//!
//! # Security
//!
//! Paths, notes and error messages come from the files being graded. The
//! `escape` module must be used before embedding them in Markdown.

pub mod escape;
mod json;
mod markdown;
mod sarif;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use sarif::SarifReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat};

use crate::pipeline::GradeReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a grading run
    fn generate(&self, report: &GradeReport, config: &ReportConfig)
    -> Result<String, ReportError>;

    /// Write a rendered report to a writer
    fn write_report(
        &self,
        report: &GradeReport,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate(report, config)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Sarif => Box::new(SarifReporter::new()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_format_renders() {
        let report = test_support::sample_report();
        for format in [
            ReportFormat::Auto,
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Markdown,
            ReportFormat::Sarif,
        ] {
            let reporter = create_reporter_with_options(format, false);
            let out = reporter.generate(&report, &ReportConfig::detailed()).unwrap();
            assert!(out.contains("agents/reviewer.md"), "{format}");
        }
    }

    #[test]
    fn test_write_report() {
        let report = test_support::sample_report();
        let mut buf = Vec::new();
        JsonReporter::new()
            .write_report(&report, &ReportConfig::default(), &mut buf)
            .unwrap();
        assert!(!buf.is_empty());
    }
}
