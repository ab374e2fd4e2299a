//! Locating definition files on disk.

use crate::config::DiscoveryConfig;
use crate::error::{GraderError, Result};
use crate::model::DocumentKind;
use crate::parsers::detect_kind;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A file selected for scoring
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiscoveredDocument {
    pub path: PathBuf,
    /// `None` only for explicitly named files whose kind is unknown
    pub kind: Option<DocumentKind>,
}

fn is_excluded(entry: &DirEntry, config: &DiscoveryConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_excluded(name))
}

fn walk_root(
    root: &Path,
    config: &DiscoveryConfig,
    kind_override: Option<DocumentKind>,
    found: &mut Vec<DiscoveredDocument>,
) {
    // Kinds are detected below the root's parent: the root's own name
    // counts (a root named `agents`), directories above it never do.
    let base = root.file_name().and(root.parent()).unwrap_or(root);
    let walker = WalkDir::new(root)
        .follow_links(config.follow_links)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, config));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(base)
            .or_else(|_| entry.path().strip_prefix(root))
            .unwrap_or(entry.path());
        if let Some(kind) = detect_kind(relative) {
            found.push(DiscoveredDocument {
                path: entry.path().to_path_buf(),
                kind: Some(kind_override.unwrap_or(kind)),
            });
        }
    }
}

/// Collect every definition file under `roots`.
///
/// Directories are walked recursively, skipping excluded directory names;
/// only files with a detectable kind are kept. A root that is itself a file
/// is always kept, with `kind_override` applied when given. The result is
/// sorted by path and free of duplicates.
pub fn discover_documents(
    roots: &[PathBuf],
    config: &DiscoveryConfig,
    kind_override: Option<DocumentKind>,
) -> Result<Vec<DiscoveredDocument>> {
    let mut found = Vec::new();

    for root in roots {
        let metadata = std::fs::metadata(root).map_err(|e| GraderError::io(root, e))?;
        if metadata.is_file() {
            found.push(DiscoveredDocument {
                path: root.clone(),
                kind: kind_override.or_else(|| detect_kind(root)),
            });
        } else {
            walk_root(root, config, kind_override, &mut found);
        }
    }

    found.sort();
    found.dedup_by(|a, b| a.path == b.path);
    tracing::debug!(count = found.len(), "discovered documents");
    Ok(found)
}
