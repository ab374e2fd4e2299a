//! Configuration module for agent-grader.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.agent-grader.yaml` file in your project root or
//! `~/.config/agent-grader/`:
//!
//! ```yaml
//! output:
//!   format: markdown
//! scoring:
//!   min_score: 70
//! discovery:
//!   exclude_dirs: [.git, node_modules, vendor]
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, DEFAULT_EXCLUDE_DIRS, DiscoveryConfig, OutputConfig,
    ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, discover_config_file, generate_example_config,
    load_config_file, load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option that can be set in
/// `.agent-grader.yaml` and can be used by editors for validation and
/// autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
