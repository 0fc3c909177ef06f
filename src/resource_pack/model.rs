//! Java item model documents.
//!
//! Only the parts that carry custom model data are parsed: the `parent`
//! reference and the `overrides` predicate list.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A parsed item model from models/*.json.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemModel {
    /// Parent model to inherit from.
    #[serde(default)]
    pub parent: Option<String>,

    /// Predicate overrides that switch to another model.
    #[serde(default)]
    pub overrides: Vec<ModelOverride>,
}

/// One entry of a model's `overrides` list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelOverride {
    #[serde(default)]
    pub predicate: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub model: Option<String>,
}

impl ItemModel {
    /// Read a model from disk. Unreadable or malformed files yield `None`.
    pub fn load(path: &Path) -> Option<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!("Skipping model {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(model) => Some(model),
            Err(e) => {
                tracing::debug!("Skipping malformed model {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Custom model data carried by this model.
    ///
    /// The first override predicate with a `custom_model_data` value wins;
    /// otherwise a trailing number on the parent reference is used
    /// (`item/gem_1001` -> 1001).
    pub fn custom_model_data(&self) -> Option<i32> {
        self.overrides
            .iter()
            .find_map(|o| {
                o.predicate
                    .get("custom_model_data")
                    .and_then(|v| v.as_i64())
                    .and_then(|v| i32::try_from(v).ok())
            })
            .or_else(|| self.parent.as_deref().and_then(trailing_number))
    }
}

/// Parse the run of ASCII digits at the end of `s`.
fn trailing_number(s: &str) -> Option<i32> {
    let digits = s.len() - s.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    s[s.len() - digits..].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_predicate_wins() {
        let json = r#"{
            "parent": "item/handheld_7",
            "overrides": [
                { "predicate": { "pulling": 1 }, "model": "test:item/gem_pull" },
                { "predicate": { "custom_model_data": 42 }, "model": "test:item/gem" }
            ]
        }"#;
        let model: ItemModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.custom_model_data(), Some(42));
    }

    #[test]
    fn test_out_of_range_predicate_is_ignored() {
        let json = r#"{ "overrides": [{ "predicate": { "custom_model_data": 4294967296 } }] }"#;
        let model: ItemModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.custom_model_data(), None);
    }

    #[test]
    fn test_parent_suffix_fallback() {
        let json = r#"{ "parent": "test:item/base_1001" }"#;
        let model: ItemModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.custom_model_data(), Some(1001));

        let model: ItemModel = serde_json::from_str(r#"{ "parent": "item/generated" }"#).unwrap();
        assert_eq!(model.custom_model_data(), None);
    }

    #[test]
    fn test_trailing_number() {
        assert_eq!(trailing_number("gem_12"), Some(12));
        assert_eq!(trailing_number("gem"), None);
        assert_eq!(trailing_number("3"), Some(3));
        assert_eq!(trailing_number("gem_99999999999"), None);
    }

    #[test]
    fn test_load_malformed_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(ItemModel::load(&path).is_none());
        assert!(ItemModel::load(&dir.path().join("missing.json")).is_none());
    }
}
