//! Path-based document kind detection.

use crate::model::DocumentKind;
use std::path::{Component, Path};

const PLUGIN_MANIFEST: &str = "plugin.json";
const SKILL_STEM: &str = "SKILL";
/// Supporting files a skill routes to; never graded on their own
const REFERENCES_DIR: &str = "references";

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Directory names above the file, nearest first
fn ancestors(path: &Path) -> impl Iterator<Item = &str> {
    let mut dirs: Vec<&str> = path
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|component| match component {
            Component::Normal(name) => name.to_str(),
            _ => None,
        })
        .collect();
    dirs.reverse();
    dirs.into_iter()
}

/// Infer a document's kind from its path.
///
/// The nearest recognized directory wins, so `skills/x/agents/a.md` is an
/// agent. Files under a `references/` directory and anything else
/// unrecognized yield `None`.
#[must_use]
pub fn detect_kind(path: &Path) -> Option<DocumentKind> {
    let file_name = path.file_name()?.to_str()?;

    if file_name == PLUGIN_MANIFEST {
        return Some(DocumentKind::Plugin);
    }
    if !is_markdown(path) {
        return None;
    }
    if path.file_stem().is_some_and(|stem| stem == SKILL_STEM) {
        return Some(DocumentKind::Skill);
    }
    if ancestors(path).any(|dir| dir == REFERENCES_DIR) {
        return None;
    }

    let kind = ancestors(path).find_map(|dir| match dir {
        "agents" => Some(DocumentKind::Agent),
        "commands" => Some(DocumentKind::Command),
        "skills" => Some(DocumentKind::Skill),
        "output-styles" => Some(DocumentKind::OutputStyle),
        _ => None,
    });
    tracing::trace!(path = %path.display(), ?kind, "detected document kind");
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(path: &str) -> Option<DocumentKind> {
        detect_kind(Path::new(path))
    }

    #[test]
    fn test_manifest() {
        assert_eq!(kind(".claude-plugin/plugin.json"), Some(DocumentKind::Plugin));
        assert_eq!(kind("plugin.json"), Some(DocumentKind::Plugin));
        assert_eq!(kind("package.json"), None);
    }

    #[test]
    fn test_markdown_kinds() {
        assert_eq!(kind("agents/reviewer.md"), Some(DocumentKind::Agent));
        assert_eq!(kind("plugins/x/commands/ship.md"), Some(DocumentKind::Command));
        assert_eq!(kind("output-styles/terse.md"), Some(DocumentKind::OutputStyle));
        assert_eq!(kind("skills/deploy/SKILL.md"), Some(DocumentKind::Skill));
        assert_eq!(kind("SKILL.MD"), Some(DocumentKind::Skill));
        assert_eq!(kind("skills/deploy/notes.md"), Some(DocumentKind::Skill));
    }

    #[test]
    fn test_nearest_directory_wins() {
        assert_eq!(kind("skills/x/agents/a.md"), Some(DocumentKind::Agent));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(kind("README.md"), None);
        assert_eq!(kind("agents/config.yaml"), None);
        assert_eq!(kind("docs/guide.md"), None);
        assert_eq!(kind("skills/deploy/references/api.md"), None);
    }
}
