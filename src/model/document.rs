//! Document kinds and the parsed document value.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::Frontmatter;
use crate::quality::{QualityScore, scorer_for};

/// The kinds of definition files the grader understands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// Sub-agent definition (`agents/*.md`)
    Agent,
    /// Slash command (`commands/*.md`)
    Command,
    /// Skill (`skills/<name>/SKILL.md`)
    Skill,
    /// Plugin manifest (`.claude-plugin/plugin.json`)
    Plugin,
    /// Output style (`output-styles/*.md`)
    #[value(alias = "output_style")]
    OutputStyle,
}

impl DocumentKind {
    /// All kinds, in report order
    pub const ALL: [Self; 5] = [
        Self::Agent,
        Self::Command,
        Self::Skill,
        Self::Plugin,
        Self::OutputStyle,
    ];

    /// Get the human-readable name for this kind
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Command => "command",
            Self::Skill => "skill",
            Self::Plugin => "plugin",
            Self::OutputStyle => "output-style",
        }
    }

    /// Whether documents of this kind are JSON manifests rather than
    /// markdown with YAML frontmatter
    #[must_use]
    pub const fn is_manifest(&self) -> bool {
        matches!(self, Self::Plugin)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "agent" | "agents" => Ok(Self::Agent),
            "command" | "commands" => Ok(Self::Command),
            "skill" | "skills" => Ok(Self::Skill),
            "plugin" | "manifest" => Ok(Self::Plugin),
            "output-style" | "output_style" | "outputstyle" => Ok(Self::OutputStyle),
            _ => Err(format!(
                "Unknown document kind: {s}. Valid options: agent, command, skill, plugin, output-style"
            )),
        }
    }
}

/// A parsed definition file, ready to be scored.
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the document was read from, if anywhere
    pub path: Option<PathBuf>,
    /// Kind used to pick the scorer
    pub kind: DocumentKind,
    /// Raw text, metadata block included
    pub content: String,
    /// Decoded metadata block
    pub frontmatter: Frontmatter,
    /// Text after the metadata block (empty for manifests)
    pub body: String,
}

impl Document {
    /// Create a document from already-parsed parts
    pub fn new(
        kind: DocumentKind,
        content: impl Into<String>,
        frontmatter: Frontmatter,
        body: impl Into<String>,
    ) -> Self {
        Self {
            path: None,
            kind,
            content: content.into(),
            frontmatter,
            body: body.into(),
        }
    }

    /// Attach the source path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Display label: the path when known, the kind otherwise
    #[must_use]
    pub fn label(&self) -> String {
        self.path.as_ref().map_or_else(
            || format!("<{}>", self.kind),
            |p| p.display().to_string(),
        )
    }

    /// Score this document with the scorer for its kind
    pub fn score(&self) -> QualityScore {
        scorer_for(self.kind).score(&self.content, &self.frontmatter, &self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("agent".parse::<DocumentKind>(), Ok(DocumentKind::Agent));
        assert_eq!("Skills".parse::<DocumentKind>(), Ok(DocumentKind::Skill));
        assert_eq!(
            "output_style".parse::<DocumentKind>(),
            Ok(DocumentKind::OutputStyle)
        );
        assert!("hook".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&DocumentKind::OutputStyle).unwrap();
        assert_eq!(json, "\"output-style\"");
    }

    #[test]
    fn test_only_plugin_is_manifest() {
        let manifests: Vec<_> = DocumentKind::ALL
            .iter()
            .filter(|k| k.is_manifest())
            .collect();
        assert_eq!(manifests, vec![&DocumentKind::Plugin]);
    }

    #[test]
    fn test_label_falls_back_to_kind() {
        let doc = Document::new(DocumentKind::Command, "", Frontmatter::new(), "");
        assert_eq!(doc.label(), "<command>");
        assert_eq!(doc.with_path("commands/x.md").label(), "commands/x.md");
    }
}
