//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::{GradeReport, ScoredDocument};
use crate::quality::{MetricCategory, Tier};
use std::fmt::Write as _;
use unicode_width::UnicodeWidthStr;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::A => "green",
        Tier::B => "cyan",
        Tier::C => "yellow",
        Tier::D | Tier::F => "red",
    }
}

/// Pad `text` with spaces to `width` terminal columns
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn document_lines(
        &self,
        doc: &ScoredDocument,
        path_width: usize,
        config: &ReportConfig,
    ) -> Vec<String> {
        let score = &doc.score;
        let below = config.min_score.is_some_and(|min| score.overall < min);
        let mut lines = vec![format!(
            "  {} {:>3}  {}  {}{}",
            self.color(score.tier.letter(), tier_color(score.tier)),
            score.overall,
            pad(&doc.path.display().to_string(), path_width),
            self.color(doc.kind.name(), "dim"),
            if below {
                format!("  {}", self.color("below minimum", "red"))
            } else {
                String::new()
            }
        )];

        let breakdown = MetricCategory::ALL
            .iter()
            .map(|&cat| {
                format!(
                    "{} {}/{}",
                    cat.name(),
                    score.category_points(cat),
                    cat.max_points()
                )
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(format!("        {}", self.color(&breakdown, "dim")));

        if let Some(thin) = doc.thin_router {
            let rules = if thin { "thin router" } else { "methodology" };
            lines.push(format!("        {}", self.color(&format!("rules: {rules}"), "dim")));
        }

        if config.show_details {
            for metric in &score.details {
                let mark = if metric.passed {
                    self.color("✓", "green")
                } else {
                    self.color("✗", "red")
                };
                let note = metric
                    .note
                    .as_deref()
                    .map(|n| format!(" ({n})"))
                    .unwrap_or_default();
                lines.push(format!(
                    "        {mark} {} {}/{}{note}",
                    metric.name, metric.points, metric.max_points
                ));
            }
        }
        lines
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        report: &GradeReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(config.title(), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let path_width = report
            .documents
            .iter()
            .map(|d| UnicodeWidthStr::width(d.path.display().to_string().as_str()))
            .max()
            .unwrap_or(0);

        if report.documents.is_empty() && report.failures.is_empty() {
            lines.push(format!("  {}", self.color("No documents found", "dim")));
        }
        for doc in &report.documents {
            lines.extend(self.document_lines(doc, path_width, config));
        }

        if !report.failures.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Failed:", "bold"));
            for failed in &report.failures {
                lines.push(format!(
                    "  {} {}: {}",
                    self.color("✗", "red"),
                    failed.path.display(),
                    failed.error
                ));
            }
        }

        let summary = &report.summary;
        lines.push(String::new());
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let mut totals = String::new();
        write!(
            totals,
            "{}  {}   {}  {}   {}  {:.1}",
            self.color("Documents:", "cyan"),
            summary.documents,
            self.color("Failures:", "cyan"),
            summary.failures,
            self.color("Mean:", "cyan"),
            summary.mean_score
        )?;
        lines.push(totals);

        let tiers = summary
            .by_tier
            .iter()
            .map(|(tier, count)| format!("{tier} {count}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(format!("{}  {tiers}", self.color("Tiers:", "cyan")));

        if let Some(lowest) = &summary.lowest {
            lines.push(format!(
                "{}  {} ({})",
                self.color("Lowest:", "cyan"),
                lowest.path.display(),
                lowest.overall
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;

    #[test]
    fn test_plain_summary() {
        let out = SummaryReporter::new()
            .no_color()
            .generate(&sample_report(), &ReportConfig::default())
            .unwrap();
        assert!(!out.contains('\x1b'));
        assert!(out.contains("agents/reviewer.md"));
        assert!(out.contains("Documents:  2   Failures:  1"));
        assert!(out.contains("✗ skills/broken/SKILL.md"));
        assert!(out.contains("Tiers:  A "));
        assert!(!out.contains("✓"));
    }

    #[test]
    fn test_details_and_min_score() {
        let config = ReportConfig {
            show_details: true,
            min_score: Some(50),
            title: None,
        };
        let out = SummaryReporter::new()
            .no_color()
            .generate(&sample_report(), &config)
            .unwrap();
        assert!(out.contains("✓ Has name 5/5"));
        assert!(out.contains("below minimum"));
    }

    #[test]
    fn test_colored_summary() {
        let out = SummaryReporter::new()
            .generate(&sample_report(), &ReportConfig::default())
            .unwrap();
        assert!(out.contains("\x1b[1m"));
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("日本", 4), "日本");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
