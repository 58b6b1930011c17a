//! Named keyboard layouts as stored in `layouts.json`.

use crate::error::SchemaError;
use anyhow::{Context, Result};
use serde::Deserialize;

/// One entry of `layouts.json`.
///
/// The optimizer writes bare layout strings keyed by name; hand-written
/// files may pair a display title with the layout instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum LayoutEntry {
    /// `["Title", "qwertyuiop..."]`
    Titled(String, String),
    /// `"qwertyuiop..."`, titled with the configuration name
    Bare(String),
}

/// A keyboard layout to render.
///
/// `keys` holds one character per key in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    /// Configuration name (key in `layouts.json`, after normalization)
    pub name: String,
    /// Title drawn above the diagram
    pub title: String,
    /// Key labels, one char per key
    pub keys: String,
}

impl KeyboardLayout {
    /// Creates a layout with an explicit title.
    pub fn new(name: impl Into<String>, title: impl Into<String>, keys: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            keys: keys.into(),
        }
    }

    /// Builds a layout from a `layouts.json` value.
    pub fn from_json(name: &str, value: serde_json::Value) -> Result<Self> {
        let entry: LayoutEntry = serde_json::from_value(value).with_context(|| {
            format!("Layout '{name}' must be a string or a [title, layout] pair")
        })?;

        Ok(match entry {
            LayoutEntry::Titled(title, keys) => Self::new(name, title, keys),
            LayoutEntry::Bare(keys) => Self::new(name, name, keys),
        })
    }

    /// Returns the first `count` key labels.
    pub fn key_labels(&self, count: usize) -> Result<Vec<char>, SchemaError> {
        key_labels(&self.title, &self.keys, count)
    }
}

/// Returns the first `count` chars of `keys`.
///
/// Fails when the layout string is shorter than `count`; extra characters
/// are ignored.
pub fn key_labels(title: &str, keys: &str, count: usize) -> Result<Vec<char>, SchemaError> {
    let labels: Vec<char> = keys.chars().take(count).collect();
    if labels.len() < count {
        return Err(SchemaError::LayoutTooShort {
            title: title.to_string(),
            expected: count,
            found: keys.chars().count(),
        });
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_titled() {
        let layout =
            KeyboardLayout::from_json("optimized sfb", json!(["Min SFB", "abc"])).unwrap();
        assert_eq!(layout.name, "optimized sfb");
        assert_eq!(layout.title, "Min SFB");
        assert_eq!(layout.keys, "abc");
    }

    #[test]
    fn test_from_json_bare_string_uses_name_as_title() {
        let layout = KeyboardLayout::from_json("qwerty", json!("qwertyuiop")).unwrap();
        assert_eq!(layout.title, "qwerty");
        assert_eq!(layout.keys, "qwertyuiop");
    }

    #[test]
    fn test_from_json_rejects_other_shapes() {
        assert!(KeyboardLayout::from_json("x", json!(42)).is_err());
        assert!(KeyboardLayout::from_json("x", json!(["a", "b", "c"])).is_err());
        assert!(KeyboardLayout::from_json("x", json!({"title": "a"})).is_err());
    }

    #[test]
    fn test_key_labels() {
        let layout = KeyboardLayout::new("n", "t", "abcdé");
        assert_eq!(layout.key_labels(5).unwrap(), vec!['a', 'b', 'c', 'd', 'é']);
        assert_eq!(layout.key_labels(2).unwrap(), vec!['a', 'b']);
    }

    #[test]
    fn test_key_labels_too_short() {
        let layout = KeyboardLayout::new("n", "short", "abc");
        assert_eq!(
            layout.key_labels(31),
            Err(SchemaError::LayoutTooShort {
                title: "short".to_string(),
                expected: 31,
                found: 3,
            })
        );
    }
}
