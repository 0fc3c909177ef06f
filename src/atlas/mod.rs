//! Bedrock texture atlases and the per-asset texture indices built from them.

pub mod builder;
pub mod classifier;

pub use builder::{AtlasBuilder, AtlasDocument, TextureAtlas, TextureRecord};
pub use classifier::{ClassifierRules, FileLister, FsLister, StaticLister, TextureClass};

use std::collections::HashMap;

/// Ordered mapping from asset full id to texture id.
///
/// Holds at most one entry per full id; the first assignment sticks.
#[derive(Debug, Clone, Default)]
pub struct TextureIndex {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl TextureIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, full_id: impl Into<String>, texture_id: impl Into<String>) -> bool {
        let full_id = full_id.into();
        if self.index.contains_key(&full_id) {
            return false;
        }
        self.index.insert(full_id.clone(), self.entries.len());
        self.entries.push((full_id, texture_id.into()));
        true
    }

    pub fn get(&self, full_id: &str) -> Option<&str> {
        self.index.get(full_id).map(|&i| self.entries[i].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
