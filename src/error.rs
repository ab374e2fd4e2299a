//! Unified error types for agent-grader.
//!
//! The scoring engine itself never fails; these errors cover the layers
//! around it: reading files, splitting and decoding frontmatter, loading
//! configuration and rendering reports.

use std::path::PathBuf;
use thiserror::Error;

use crate::reports::ReportError;

/// Main error type for agent-grader operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GraderError {
    /// Errors while decoding a document
    #[error("Failed to parse document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors during report generation
    #[error("Report generation failed: {0}")]
    Report(#[from] ReportError),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("frontmatter opened with '---' but never closed")]
    UnterminatedFrontmatter,

    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(String),

    #[error("invalid JSON manifest: {0}")]
    InvalidJson(String),

    #[error("metadata must be a key/value mapping, found {found}")]
    NotAMapping { found: &'static str },

    #[error("cannot determine document kind for {0}")]
    UnknownKind(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for agent-grader operations
pub type Result<T> = std::result::Result<T, GraderError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl GraderError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for a path whose kind cannot be detected
    pub fn unknown_kind(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::parse(format!("at {path}"), ParseErrorKind::UnknownKind(path))
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for GraderError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for GraderError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse("JSON manifest", ParseErrorKind::InvalidJson(err.to_string()))
    }
}

impl From<serde_yaml::Error> for GraderError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse("YAML frontmatter", ParseErrorKind::InvalidYaml(err.to_string()))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context is chained rather than replaced, so a parse failure bubbling up
/// through discovery reads `"agents/foo.md: YAML frontmatter"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<GraderError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: GraderError, new_ctx: &str) -> GraderError {
    match err {
        GraderError::Parse {
            context: existing,
            source,
        } => GraderError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GraderError::Io {
            path,
            message,
            source,
        } => GraderError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        GraderError::Config(msg) => GraderError::Config(chain_context(new_ctx, &msg)),
        other @ GraderError::Report(_) => other,
    }
}

/// Returns `"new: existing"`, or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraderError::unknown_kind("notes/todo.md");
        let display = err.to_string();
        assert!(display.contains("parse"), "{display}");
        assert!(display.contains("notes/todo.md"), "{display}");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = GraderError::io("/path/to/agent.md", io_err);
        assert!(err.to_string().contains("/path/to/agent.md"));
    }

    #[test]
    fn test_context_chaining() {
        fn inner() -> Result<()> {
            Err(GraderError::parse(
                "YAML frontmatter",
                ParseErrorKind::UnterminatedFrontmatter,
            ))
        }

        match inner().context("agents/reviewer.md") {
            Err(GraderError::Parse { context, source }) => {
                assert_eq!(context, "agents/reviewer.md: YAML frontmatter");
                assert!(matches!(source, ParseErrorKind::UnterminatedFrontmatter));
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;
        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "unused"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(GraderError::config("bad"));
        let _ = err_result.with_context(|| {
            called = true;
            "used"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_json_error_conversion() {
        let err: GraderError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            GraderError::Parse {
                source: ParseErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
