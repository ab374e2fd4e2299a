//! Pipeline orchestration: discover → parse → score → report.
//!
//! Shared by the CLI command handlers so each of them stays a thin layer
//! over configuration and output.

mod discovery;
mod grade;
mod output;

pub use discovery::{DiscoveredDocument, discover_documents};
pub use grade::{
    FailedDocument, GradeOutcome, GradeReport, GradeSummary, LowestScore, ScoredDocument,
    score_paths,
};
pub use output::{OutputTarget, auto_detect_format, should_use_color, write_output};

use crate::config::AppConfig;
use crate::error::Result;
use std::path::PathBuf;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Every document parsed and met the minimum score
    pub const SUCCESS: i32 = 0;
    /// At least one document scored below `--min-score`
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// At least one file could not be read or parsed
    pub const PARSE_FAILURES: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Discover and score everything under `roots` according to `config`.
pub fn grade(roots: &[PathBuf], config: &AppConfig) -> Result<GradeReport> {
    let discovered = discover_documents(roots, &config.discovery, config.scoring.kind)?;
    let report = GradeReport::from_outcomes(score_paths(&discovered));
    tracing::info!(
        documents = report.summary.documents,
        failures = report.summary.failures,
        mean = format_args!("{:.1}", report.summary.mean_score),
        "grading complete"
    );
    Ok(report)
}
