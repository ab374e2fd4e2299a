//! Explain command handler.
//!
//! Scores a single document and prints every metric, plus the thin-router
//! signals for skills so authors can see which rule set was applied.

use crate::model::{Document, DocumentKind};
use crate::parsers::parse_file;
use crate::quality::{MetricCategory, QUORUM, QualityScore, ThinRouterSignals};
use anyhow::{Context, Result};
use std::fmt::{self, Write as _};
use std::path::Path;

/// Run the explain command and print the breakdown to stdout.
pub fn run_explain(path: &Path, kind: Option<DocumentKind>) -> Result<()> {
    let document =
        parse_file(path, kind).with_context(|| format!("failed to parse {}", path.display()))?;
    let score = document.score();
    tracing::debug!(path = %path.display(), overall = score.overall, "explained document");
    let text = render_explanation(&document, &score).context("failed to render explanation")?;
    print!("{text}");
    Ok(())
}

fn mark(hit: bool) -> char {
    if hit { '✓' } else { '✗' }
}

/// Plain-text breakdown of one document's score
pub(crate) fn render_explanation(
    document: &Document,
    score: &QualityScore,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{} ({})", document.label(), document.kind)?;
    writeln!(
        out,
        "Score: {}/100  Tier {} ({})",
        score.overall,
        score.tier,
        score.tier.description()
    )?;

    if document.kind == DocumentKind::Skill {
        write_signals(&mut out, &ThinRouterSignals::evaluate(&document.body))?;
    }

    for category in MetricCategory::ALL {
        writeln!(out)?;
        writeln!(
            out,
            "{}: {}/{}",
            category.name(),
            score.category_points(category),
            category.max_points()
        )?;
        for metric in score.details.iter().filter(|m| m.category == category) {
            let note = metric
                .note
                .as_deref()
                .map(|n| format!(" ({n})"))
                .unwrap_or_default();
            writeln!(
                out,
                "  {} {:<34} {:>2}/{:<2}{note}",
                mark(metric.passed),
                metric.name,
                metric.points,
                metric.max_points
            )?;
        }
    }
    Ok(out)
}

fn write_signals(out: &mut String, signals: &ThinRouterSignals) -> fmt::Result {
    let rules = if signals.is_thin_router() {
        "thin router"
    } else {
        "methodology"
    };
    writeln!(out)?;
    writeln!(
        out,
        "Classification: {rules} ({} of 4 indicators, quorum {QUORUM})",
        signals.indicator_count()
    )?;
    writeln!(
        out,
        "  {} methodology marker (veto)",
        mark(signals.methodology_marker)
    )?;
    writeln!(out, "  {} mentions references/", mark(signals.references_dir))?;
    writeln!(out, "  {} degeneralization note", mark(signals.degeneralized))?;
    writeln!(
        out,
        "  {} short body reading a reference",
        mark(signals.short_with_read)
    )?;
    writeln!(out, "  {} routing table row", mark(signals.routing_table_row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_content;

    #[test]
    fn test_explanation_lists_every_category() {
        let doc = parse_content(
            DocumentKind::Command,
            "---\ndescription: Run the tests\n---\nRun `cargo test`.\n",
        )
        .expect("parse");
        let text = render_explanation(&doc, &doc.score()).expect("render");
        for category in MetricCategory::ALL {
            assert!(text.contains(category.name()), "{category} missing");
        }
        assert!(!text.contains("Classification"));
    }

    #[test]
    fn test_skill_explanation_shows_signals() {
        let body = "Read(references/a.md)\nSee references/ for details.\n";
        let doc = parse_content(DocumentKind::Skill, &format!("---\nname: x\n---\n{body}"))
            .expect("parse");
        let text = render_explanation(&doc, &doc.score()).expect("render");
        assert!(text.contains("Classification: thin router (2 of 4 indicators"));
        assert!(text.contains("✓ mentions references/"));
    }

    #[test]
    fn test_explanation_layout() {
        let doc = parse_content(
            DocumentKind::Skill,
            "---\nname: deploy\n---\n## Workflow\nRead(references/a.md)\nSee references/.\n",
        )
        .expect("parse");
        let score = doc.score();
        let text = render_explanation(&doc, &score).expect("render");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[1],
            format!(
                "Score: {}/100  Tier {} ({})",
                score.overall,
                score.tier,
                score.tier.description()
            )
        );
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Classification: methodology (2 of 4 indicators, quorum 2)");
        assert_eq!(lines[4], "  ✓ methodology marker (veto)");
        assert_eq!(lines[8], "  ✗ routing table row");
        assert_eq!(lines[9], "");
        assert!(lines[10].starts_with("structural: "));
        assert!(text.ends_with('\n'));
    }
}
