//! Score command handler.
//!
//! Implements the `score` subcommand: discover documents, grade them, render
//! a report and map the outcome to an exit code.

use crate::config::{AppConfig, Validatable};
use crate::pipeline::{self, OutputTarget, auto_detect_format, should_use_color, write_output};
use crate::reports::{ReportConfig, create_reporter_with_options};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Run the score command, returning the desired exit code.
///
/// `config` is the fully merged configuration (file values overlaid with
/// CLI flags). The caller is responsible for calling `std::process::exit()`
/// with the returned code when it is non-zero.
pub fn run_score(paths: Vec<PathBuf>, config: &AppConfig, quiet: bool) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid configuration:\n  {}", messages.join("\n  "));
    }

    let roots = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let report = pipeline::grade(&roots, config).context("failed to grade documents")?;

    let target = OutputTarget::from_option(config.output.file.clone());
    let format = auto_detect_format(config.output.format, &target);
    let use_color = should_use_color(config.output.no_color, &target);
    tracing::debug!(%format, use_color, "rendering report");

    let report_config = ReportConfig {
        show_details: config.output.details,
        min_score: config.scoring.min_score,
        title: None,
    };
    let rendered = create_reporter_with_options(format, use_color)
        .generate(&report, &report_config)
        .context("failed to render report")?;
    write_output(&rendered, &target, quiet)?;

    for failure in &report.failures {
        tracing::warn!("{}: {}", failure.path.display(), failure.error);
    }
    if let Some(min) = config.scoring.min_score {
        let below = report.below(min).count();
        if below > 0 {
            tracing::error!("{below} document(s) scored below the minimum of {min}");
        }
    }

    Ok(report.exit_code(config.scoring.min_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::exit_codes;
    use std::fs;

    const AGENT: &str = "---\nname: reviewer\ndescription: Reviews code.\n---\n# Reviewer\n";

    fn workspace() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("agents")).expect("mkdir");
        fs::write(dir.path().join("agents/reviewer.md"), AGENT).expect("write");
        dir
    }

    #[test]
    fn test_run_score_writes_json_report() {
        let dir = workspace();
        let out = dir.path().join("grades.json");
        let config = AppConfig::builder().output_file(Some(out.clone())).build();

        let code = run_score(vec![dir.path().to_path_buf()], &config, true).expect("run");
        assert_eq!(code, exit_codes::SUCCESS);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out).expect("read")).expect("json");
        assert_eq!(json["summary"]["documents"], 1);
    }

    #[test]
    fn test_run_score_min_score_fails() {
        let dir = workspace();
        let config = AppConfig::builder()
            .output_file(Some(dir.path().join("grades.md")))
            .min_score(Some(100))
            .build();
        let code = run_score(vec![dir.path().to_path_buf()], &config, true).expect("run");
        assert_eq!(code, exit_codes::BELOW_MIN_SCORE);
    }

    #[test]
    fn test_run_score_rejects_invalid_config() {
        let config = AppConfig::builder().min_score(Some(101)).build();
        assert!(run_score(Vec::new(), &config, true).is_err());
    }
}
