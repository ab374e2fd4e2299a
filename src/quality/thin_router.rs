//! Thin-router classification for skills.
//!
//! Some skills carry almost no inline methodology and instead dispatch to
//! reference files (`Read(references/...)`). Grading them against the
//! methodology rule set would punish good delegation, so this classifier
//! picks the rule set before structural and practices scoring run.
//!
//! The decision is a hand-tuned quorum over four indicators, vetoed by any
//! inline methodology marker. Keep it exactly as is unless it has been
//! re-checked against a graded corpus.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Bodies at or above this many lines are too long to count as a short router
pub const SHORT_ROUTER_MAX_LINES: usize = 150;

/// Indicators required for a thin-router verdict
pub const QUORUM: usize = 2;

static METHODOLOGY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^##\s+(Workflow|Algorithm|Process)\b|^###\s+(Phase|Step)\s+\d")
        .expect("static regex")
});

static ROUTING_TABLE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*\|.*\|\s*`?Read\(references/").expect("static regex")
});

/// The raw signals behind a classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ThinRouterSignals {
    /// Body contains inline methodology; vetoes the verdict
    pub methodology_marker: bool,
    /// Body mentions `references/`
    pub references_dir: bool,
    /// Body mentions degeneralization
    pub degeneralized: bool,
    /// Short body that reads a reference file
    pub short_with_read: bool,
    /// A table row routes to `Read(references/...)`
    pub routing_table_row: bool,
}

impl ThinRouterSignals {
    /// Evaluate every signal against a skill body
    #[must_use]
    pub fn evaluate(body: &str) -> Self {
        Self {
            methodology_marker: METHODOLOGY_MARKER.is_match(body),
            references_dir: body.contains("references/"),
            degeneralized: body.contains("degeneralized") || body.contains("Degeneralization"),
            short_with_read: body.lines().count() < SHORT_ROUTER_MAX_LINES
                && body.contains("Read(references/"),
            routing_table_row: ROUTING_TABLE_ROW.is_match(body),
        }
    }

    /// Number of quorum indicators that hold (the veto is not counted)
    #[must_use]
    pub fn indicator_count(&self) -> usize {
        [
            self.references_dir,
            self.degeneralized,
            self.short_with_read,
            self.routing_table_row,
        ]
        .into_iter()
        .filter(|&hit| hit)
        .count()
    }

    /// Final verdict: no methodology marker and at least [`QUORUM`] indicators
    #[must_use]
    pub fn is_thin_router(&self) -> bool {
        !self.methodology_marker && self.indicator_count() >= QUORUM
    }
}

/// Whether a skill body should be graded as a thin router
#[must_use]
pub fn is_thin_router(body: &str) -> bool {
    let signals = ThinRouterSignals::evaluate(body);
    let verdict = signals.is_thin_router();
    tracing::trace!(?signals, verdict, "skill classification");
    verdict
}
