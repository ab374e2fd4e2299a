//! Configuration validation for agent-grader.

use super::types::{AppConfig, DiscoveryConfig, OutputConfig, ScoringConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.scoring.validate());
        errors.extend(self.discovery.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(file) = &self.file
            && file.as_os_str().is_empty()
        {
            errors.push(ConfigError::new("output.file", "Output path must not be empty"));
        }
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min_score) = self.min_score
            && min_score > 100
        {
            errors.push(ConfigError::new(
                "scoring.min_score",
                format!("Minimum score must be between 0 and 100, got {min_score}"),
            ));
        }
        errors
    }
}

impl Validatable for DiscoveryConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.exclude_dirs
            .iter()
            .enumerate()
            .filter_map(|(i, dir)| {
                let field = format!("discovery.exclude_dirs[{i}]");
                if dir.trim().is_empty() {
                    Some(ConfigError::new(field, "Directory name must not be empty"))
                } else if dir.contains(['/', '\\']) {
                    Some(ConfigError::new(
                        field,
                        format!("'{dir}' must be a bare directory name, not a path"),
                    ))
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_min_score_bounds() {
        let ok = ScoringConfig {
            min_score: Some(100),
            ..ScoringConfig::default()
        };
        assert!(ok.is_valid());

        let bad = ScoringConfig {
            min_score: Some(101),
            ..ScoringConfig::default()
        };
        let errors = bad.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scoring.min_score");
    }

    #[test]
    fn test_exclude_dirs_must_be_names() {
        let discovery = DiscoveryConfig {
            exclude_dirs: vec!["vendor".into(), String::new(), "a/b".into()],
            follow_links: false,
        };
        let fields: Vec<_> = discovery.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["discovery.exclude_dirs[1]", "discovery.exclude_dirs[2]"]
        );
    }

    #[test]
    fn test_empty_output_path() {
        let output = OutputConfig {
            file: Some(PathBuf::new()),
            ..OutputConfig::default()
        };
        assert!(!output.is_valid());
        assert!(AppConfig {
            output,
            ..AppConfig::default()
        }
        .validate()
        .iter()
        .any(|e| e.to_string().starts_with("output.file:")));
    }
}
