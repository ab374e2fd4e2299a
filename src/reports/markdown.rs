//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::{GradeReport, ScoredDocument};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_details(md: &mut String, doc: &ScoredDocument) -> std::fmt::Result {
        writeln!(
            md,
            "### {} ({} / {})\n",
            escape_markdown_inline(&doc.path.display().to_string()),
            doc.score.overall,
            doc.score.tier
        )?;
        writeln!(md, "| Category | Check | Points | Note |")?;
        writeln!(md, "|----------|-------|--------|------|")?;
        for metric in &doc.score.details {
            writeln!(
                md,
                "| {} | {} {} | {}/{} | {} |",
                metric.category,
                if metric.passed { "✅" } else { "❌" },
                escape_markdown_table(&metric.name),
                metric.points,
                metric.max_points,
                escape_markdown_table(metric.note.as_deref().unwrap_or(""))
            )?;
        }
        writeln!(md)
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        report: &GradeReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        let summary = &report.summary;

        writeln!(md, "# {}\n", escape_markdown_inline(config.title()))?;

        writeln!(md, "## Summary\n")?;
        writeln!(md, "| Metric | Value |")?;
        writeln!(md, "|--------|-------|")?;
        writeln!(md, "| Documents | {} |", summary.documents)?;
        writeln!(md, "| Failures | {} |", summary.failures)?;
        writeln!(md, "| Mean score | {:.1} |", summary.mean_score)?;
        if let Some(min) = config.min_score {
            let below = report.below(min).count();
            writeln!(md, "| Below {min} | {below} |")?;
        }
        for (tier, count) in &summary.by_tier {
            writeln!(md, "| Tier {tier} | {count} |")?;
        }
        writeln!(md)?;

        writeln!(md, "## Documents\n")?;
        if report.documents.is_empty() {
            writeln!(md, "_No documents scored._\n")?;
        } else {
            writeln!(
                md,
                "| Document | Kind | Tier | Score | Structural | Practices | Composition | Documentation |"
            )?;
            writeln!(
                md,
                "|----------|------|------|-------|------------|-----------|-------------|---------------|"
            )?;
            for doc in &report.documents {
                let s = &doc.score;
                writeln!(
                    md,
                    "| {} | {} | {} | {} | {}/40 | {}/40 | {}/10 | {}/10 |",
                    escape_markdown_table(&doc.path.display().to_string()),
                    doc.kind,
                    s.tier,
                    s.overall,
                    s.structural,
                    s.practices,
                    s.composition,
                    s.documentation
                )?;
            }
            writeln!(md)?;
        }

        if config.show_details && !report.documents.is_empty() {
            writeln!(md, "## Details\n")?;
            for doc in &report.documents {
                Self::write_details(&mut md, doc)?;
            }
        }

        if !report.failures.is_empty() {
            writeln!(md, "## Failures\n")?;
            writeln!(md, "| File | Error |")?;
            writeln!(md, "|------|-------|")?;
            for failed in &report.failures {
                writeln!(
                    md,
                    "| {} | {} |",
                    escape_markdown_table(&failed.path.display().to_string()),
                    escape_markdown_table(&failed.error)
                )?;
            }
            writeln!(md)?;
        }

        writeln!(
            md,
            "---\n_Generated by {} v{}_",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
