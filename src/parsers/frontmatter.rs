//! Frontmatter splitting and decoding.

use crate::error::{GraderError, ParseErrorKind, Result};
use crate::model::Frontmatter;
use serde_json::Value;

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// Whether a line is a bare `---` marker (trailing whitespace and `\r` allowed)
fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Split `content` into its YAML block and body.
///
/// Returns `Ok(None)` when the first line is not `---`. An opening marker
/// with no closing one is an error.
pub fn split_frontmatter(content: &str) -> Result<Option<(&str, &str)>> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let Some((first, rest)) = content.split_once('\n') else {
        return if is_delimiter(content) {
            Err(GraderError::parse(
                "frontmatter",
                ParseErrorKind::UnterminatedFrontmatter,
            ))
        } else {
            Ok(None)
        };
    };
    if !is_delimiter(first) {
        return Ok(None);
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_delimiter(line) {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok(Some((yaml, body)));
        }
        offset += line.len();
    }

    Err(GraderError::parse(
        "frontmatter",
        ParseErrorKind::UnterminatedFrontmatter,
    ))
}

const fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

fn into_mapping(value: Value) -> Result<Frontmatter> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Frontmatter::new()),
        other => Err(GraderError::parse(
            "metadata",
            ParseErrorKind::NotAMapping {
                found: value_type_name(&other),
            },
        )),
    }
}

/// Decode a YAML block into frontmatter. Blank blocks decode to an empty map.
pub fn parse_yaml_block(yaml: &str) -> Result<Frontmatter> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::new());
    }
    let value: Value = serde_yaml::from_str(yaml)?;
    into_mapping(value)
}

/// Parse a markdown document into `(frontmatter, body)`.
///
/// A document without a metadata block has empty frontmatter and the
/// whole text as its body.
pub fn parse_markdown(content: &str) -> Result<(Frontmatter, String)> {
    match split_frontmatter(content)? {
        Some((yaml, body)) => Ok((parse_yaml_block(yaml)?, body.to_string())),
        None => Ok((
            Frontmatter::new(),
            content.strip_prefix(BOM).unwrap_or(content).to_string(),
        )),
    }
}

/// Parse a JSON manifest. The top level must be an object.
pub fn parse_manifest(content: &str) -> Result<Frontmatter> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(GraderError::parse(
            "JSON manifest",
            ParseErrorKind::NotAMapping {
                found: value_type_name(&other),
            },
        )),
    }
}
