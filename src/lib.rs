//! **Quality scoring for agent definition files.**
//!
//! `agent-grader` grades the Markdown and JSON files that define agents,
//! slash commands, skills, plugins and output styles. Every document gets a
//! deterministic 0-100 score split into four categories (structural 40,
//! practices 40, composition 10, documentation 10), a letter tier, and a
//! list of the individual checks behind the number.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Document`], [`DocumentKind`] and the [`Frontmatter`]
//!   map shared by YAML frontmatter and JSON manifests.
//! - **[`parsers`]**: frontmatter splitting, metadata decoding and kind
//!   detection from a file's path.
//! - **[`quality`]**: the scoring engine. One [`Scorer`] per kind, plus the
//!   thin-router classifier that picks the rule set for skills.
//! - **[`pipeline`]**: directory discovery, parallel scoring and the
//!   aggregate [`GradeReport`].
//! - **[`reports`]**: summary, JSON, Markdown and SARIF renderers.
//! - **[`config`]**: `.agent-grader.yaml` discovery, validation and merging.
//!
//! ## Getting Started
//!
//! ```
//! use agent_grader::{DocumentKind, parse_content};
//!
//! let doc = parse_content(
//!     DocumentKind::Command,
//!     "---\ndescription: Run the test suite\n---\nRun `cargo test`.\n",
//! )?;
//! let score = doc.score();
//! assert!(score.overall <= 100);
//! println!("{} scored {} ({})", doc.label(), score.overall, score.tier);
//! # Ok::<(), agent_grader::GraderError>(())
//! ```
//!
//! ### Grading a directory
//!
//! ```no_run
//! use agent_grader::{AppConfig, pipeline};
//! use std::path::PathBuf;
//!
//! let report = pipeline::grade(&[PathBuf::from(".claude")], &AppConfig::default())?;
//! println!("{} documents, mean {:.1}", report.summary.documents, report.summary.mean_score);
//! # Ok::<(), agent_grader::GraderError>(())
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Mean scores and per-tier ratios convert between usize, u32 and f64
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    // Doc completeness: # Errors sections are not written for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Report renderers are long sequences of writeln! calls
    clippy::too_many_lines,
    // Config sections legitimately use several bools for toggle flags
    clippy::struct_excessive_bools,
    // ScorerComponent methods take &self for uniform dispatch
    clippy::unused_self
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod quality;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{ErrorContext, GraderError, ParseErrorKind, Result};
pub use model::{Document, DocumentKind, Frontmatter};
pub use parsers::{detect_kind, parse_content, parse_document, parse_file};
pub use pipeline::{GradeReport, GradeSummary, ScoredDocument};
pub use quality::{Metric, MetricCategory, QualityScore, Scorer, Tier, scorer_for};
pub use reports::{ReportFormat, ReportGenerator};
