//! Typed, total accessors over decoded frontmatter.
//!
//! Frontmatter is untrusted: a `description` may be a number, `keywords` a
//! string, `author` a bare name. Every accessor here treats a value of the
//! wrong type as absent instead of failing.

use serde_json::Value;

/// String-keyed metadata decoded from YAML frontmatter or a JSON manifest.
pub type Frontmatter = serde_json::Map<String, Value>;

/// The shape a value must have for its key to count as present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A non-blank string
    Text,
    /// A non-blank string, or a list holding at least one non-blank string
    TextOrList,
}

impl FieldType {
    /// Whether `value` has this shape and carries content
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        let non_blank = |v: &Value| v.as_str().is_some_and(|s| !s.trim().is_empty());
        match (self, value) {
            (_, Value::String(_)) => non_blank(value),
            (Self::TextOrList, Value::Array(items)) => items.iter().any(non_blank),
            _ => false,
        }
    }
}

/// Whether `key` exists in `frontmatter` with a value of type `field_type`.
///
/// Numbers, booleans and other mistyped values count as absent, the same
/// way [`str_field`] reads them as `""`.
#[must_use]
pub fn has_field(frontmatter: &Frontmatter, key: &str, field_type: FieldType) -> bool {
    frontmatter
        .get(key)
        .is_some_and(|value| field_type.accepts(value))
}

/// The string stored under `key`, or `""` when missing or not a string.
#[must_use]
pub fn str_field<'a>(frontmatter: &'a Frontmatter, key: &str) -> &'a str {
    frontmatter
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// The string stored under `outer.inner`, one level deep.
#[must_use]
pub fn nested_str_field<'a>(frontmatter: &'a Frontmatter, outer: &str, inner: &str) -> &'a str {
    frontmatter
        .get(outer)
        .and_then(Value::as_object)
        .and_then(|obj| obj.get(inner))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// Whether `key` holds an array with at least one element.
#[must_use]
pub fn non_empty_array(frontmatter: &Frontmatter, key: &str) -> bool {
    frontmatter
        .get(key)
        .and_then(Value::as_array)
        .is_some_and(|items| !items.is_empty())
}

/// Character length of the trimmed `description` field.
#[must_use]
pub fn description_len(frontmatter: &Frontmatter) -> usize {
    str_field(frontmatter, "description").trim().chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fm(value: Value) -> Frontmatter {
        match value {
            Value::Object(map) => map,
            _ => panic!("test frontmatter must be an object"),
        }
    }

    #[test]
    fn test_has_field_text() {
        let map = fm(json!({
            "name": "reviewer",
            "blank": "   ",
            "nothing": null,
            "flag": false,
            "count": 42,
            "list": ["a"],
        }));
        assert!(has_field(&map, "name", FieldType::Text));
        assert!(!has_field(&map, "blank", FieldType::Text));
        assert!(!has_field(&map, "nothing", FieldType::Text));
        assert!(!has_field(&map, "flag", FieldType::Text));
        assert!(!has_field(&map, "count", FieldType::Text));
        assert!(!has_field(&map, "list", FieldType::Text));
        assert!(!has_field(&map, "missing", FieldType::Text));
    }

    #[test]
    fn test_has_field_text_or_list() {
        let map = fm(json!({
            "csv": "Read, Grep",
            "list": ["Read", "Grep"],
            "empty_list": [],
            "blank_list": ["  "],
            "numbers": [1, 2],
            "object": {"Read": true},
        }));
        assert!(has_field(&map, "csv", FieldType::TextOrList));
        assert!(has_field(&map, "list", FieldType::TextOrList));
        assert!(!has_field(&map, "empty_list", FieldType::TextOrList));
        assert!(!has_field(&map, "blank_list", FieldType::TextOrList));
        assert!(!has_field(&map, "numbers", FieldType::TextOrList));
        assert!(!has_field(&map, "object", FieldType::TextOrList));
    }

    #[test]
    fn test_str_field_wrong_type_is_empty() {
        let map = fm(json!({"description": 42, "name": "x"}));
        assert_eq!(str_field(&map, "description"), "");
        assert_eq!(str_field(&map, "name"), "x");
        assert_eq!(description_len(&map), 0);
    }

    #[test]
    fn test_nested_str_field() {
        let map = fm(json!({"author": {"name": "Ada"}, "owner": "Bob"}));
        assert_eq!(nested_str_field(&map, "author", "name"), "Ada");
        assert_eq!(nested_str_field(&map, "owner", "name"), "");
        assert_eq!(nested_str_field(&map, "missing", "name"), "");
    }

    #[test]
    fn test_non_empty_array() {
        let map = fm(json!({"keywords": ["a"], "empty": [], "scalar": "a"}));
        assert!(non_empty_array(&map, "keywords"));
        assert!(!non_empty_array(&map, "empty"));
        assert!(!non_empty_array(&map, "scalar"));
    }

    #[test]
    fn test_description_len_counts_chars() {
        let map = fm(json!({"description": "  héllo  "}));
        assert_eq!(description_len(&map), 5);
    }
}
