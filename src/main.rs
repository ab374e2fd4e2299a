//! agent-grader: quality scoring for agent definition files
//!
//! Grades agents, commands, skills, plugin manifests and output styles
//! against a fixed 100-point rubric.

#![allow(clippy::needless_pass_by_value)]

use agent_grader::{
    cli,
    config::{AppConfig, CONFIG_FILE_NAMES},
    model::DocumentKind,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with supported document kinds
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nDocument Kinds:",
        "\n  agent, command, skill, plugin, output-style",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown, sarif",
        "\n\nScoring:",
        "\n  structural 40, practices 40, composition 10, documentation 10"
    )
}

#[derive(Parser)]
#[command(name = "agent-grader")]
#[command(version, long_version = build_long_version())]
#[command(about = "Quality scoring for agent, skill and plugin definitions", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All documents scored (and met --min-score)
    1  A document scored below --min-score
    2  One or more files could not be parsed
    3  Error occurred

EXAMPLES:
    # Grade everything under the current directory
    agent-grader score

    # CI gate with a SARIF report
    agent-grader score .claude --min-score 70 -O grades.sarif

    # See why a skill scored the way it did
    agent-grader explain skills/deploy/SKILL.md")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to config file (default: auto-discover .agent-grader.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every document under the given paths
    Score(ScoreArgs),

    /// Print every metric for a single document
    Explain {
        /// Document to explain
        path: PathBuf,

        /// Score as this kind instead of detecting it from the path
        #[arg(long, value_enum)]
        kind: Option<DocumentKind>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate a man page and print it to stdout
    Man,
}

#[derive(Args)]
struct ScoreArgs {
    /// Files or directories to score (default: current directory)
    paths: Vec<PathBuf>,

    /// Score every file as this kind instead of detecting it from the path
    #[arg(long, value_enum)]
    kind: Option<DocumentKind>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "auto")]
    output: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Show every metric, not just category totals
    #[arg(long)]
    details: bool,

    /// Exit with code 1 if any document scores below this (0-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    min_score: Option<u32>,
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .agent-grader.yaml in the current directory
    Init,
}

fn init_logging(verbose: bool, quiet: bool) {
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Score(args) => {
            let overrides = AppConfig::builder()
                .output_format(args.output)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .details(args.details)
                .min_score(args.min_score)
                .kind(args.kind)
                .build();
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides)?;
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }
            cli::run_score(args.paths, &config, cli.quiet)
        }

        Commands::Explain { path, kind } => {
            cli::run_explain(&path, kind)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "agent-grader", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = agent_grader::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            run_config(action, cli.config)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buf = Vec::new();
            man.render(&mut buf).context("failed to render man page")?;
            io::stdout().write_all(&buf)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_config(action: ConfigAction, explicit: Option<PathBuf>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) =
                agent_grader::config::load_or_default(explicit.as_deref())?;
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("agent-grader").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order, git root after the current dir):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match agent_grader::config::discover_config_file(explicit.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".agent-grader.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = agent_grader::config::generate_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(())
}
