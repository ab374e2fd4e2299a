//! Document parsers.
//!
//! Turns raw files into [`Document`]s: markdown definitions are split into
//! YAML frontmatter and body, plugin manifests are decoded as JSON. The kind
//! of a file is inferred from its path unless the caller overrides it.
//!
//! ## Usage
//!
//! ```no_run
//! use agent_grader::parsers::parse_file;
//! use std::path::Path;
//!
//! let doc = parse_file(Path::new("agents/reviewer.md"), None)?;
//! println!("{}: {}", doc.label(), doc.score().overall);
//! # Ok::<(), agent_grader::GraderError>(())
//! ```

mod detection;
mod frontmatter;

pub use detection::detect_kind;
pub use frontmatter::{parse_manifest, parse_markdown, parse_yaml_block, split_frontmatter};

use crate::error::{ErrorContext, GraderError, Result};
use crate::model::{Document, DocumentKind};
use std::path::Path;

/// Maximum document size (4 MB). Definition files are hand-written prose.
pub const MAX_DOCUMENT_SIZE: u64 = 4 * 1024 * 1024;

/// Decode `content` as a document of `kind`.
pub fn parse_content(kind: DocumentKind, content: &str) -> Result<Document> {
    let (frontmatter, body) = if kind.is_manifest() {
        (parse_manifest(content)?, String::new())
    } else {
        parse_markdown(content)?
    };
    Ok(Document::new(kind, content, frontmatter, body))
}

/// Parse a document whose text is already in memory.
///
/// `kind_override` wins over path detection; without it an undetectable
/// path is an error.
pub fn parse_document(
    path: &Path,
    content: &str,
    kind_override: Option<DocumentKind>,
) -> Result<Document> {
    let kind = kind_override
        .or_else(|| detect_kind(path))
        .ok_or_else(|| GraderError::unknown_kind(path.display().to_string()))?;
    parse_content(kind, content)
        .with_context(|| path.display().to_string())
        .map(|doc| doc.with_path(path))
}

/// Read and parse a document from disk.
pub fn parse_file(path: &Path, kind_override: Option<DocumentKind>) -> Result<Document> {
    let metadata = std::fs::metadata(path).map_err(|e| GraderError::io(path, e))?;
    if metadata.len() > MAX_DOCUMENT_SIZE {
        return Err(GraderError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "file is {} KB, exceeding the {} KB limit",
                    metadata.len() / 1024,
                    MAX_DOCUMENT_SIZE / 1024
                ),
            ),
        ));
    }
    let content = std::fs::read_to_string(path).map_err(|e| GraderError::io(path, e))?;
    parse_document(path, &content, kind_override)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn test_parse_document_detects_kind() {
        let doc = parse_document(
            Path::new("agents/a.md"),
            "---\nname: a\n---\n## Body\n",
            None,
        )
        .unwrap();
        assert_eq!(doc.kind, DocumentKind::Agent);
        assert_eq!(doc.body, "## Body\n");
        assert_eq!(doc.label(), "agents/a.md");
    }

    #[test]
    fn test_override_beats_detection() {
        let doc = parse_document(Path::new("notes.md"), "plain", Some(DocumentKind::OutputStyle))
            .unwrap();
        assert_eq!(doc.kind, DocumentKind::OutputStyle);
        assert!(doc.frontmatter.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let err = parse_document(Path::new("notes.md"), "plain", None).unwrap_err();
        assert!(matches!(
            err,
            GraderError::Parse {
                source: ParseErrorKind::UnknownKind(_),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_error_carries_path() {
        let err = parse_document(Path::new("agents/bad.md"), "---\nname: a\n", None).unwrap_err();
        assert!(err.to_string().contains("agents/bad.md"), "{err}");
    }

    #[test]
    fn test_manifest_has_empty_body() {
        let doc = parse_document(Path::new("plugin.json"), r#"{"name": "p"}"#, None).unwrap();
        assert_eq!(doc.kind, DocumentKind::Plugin);
        assert!(doc.body.is_empty());
        assert_eq!(doc.content, r#"{"name": "p"}"#);
    }
}
