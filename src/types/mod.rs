//! Shared types used throughout the library.

pub mod hashed_id;

use std::collections::HashMap;
use std::path::PathBuf;

/// Whether an asset is held in the hand or placed in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Item,
    Block,
}

impl AssetKind {
    /// Directory names used by Java packs for this kind (`textures/item`, `models/block`, ...).
    pub fn folder_names(&self) -> &'static [&'static str] {
        match self {
            AssetKind::Item => &["item", "items"],
            AssetKind::Block => &["block", "blocks"],
        }
    }
}

/// A normalized custom item or block, independent of the document it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalAsset {
    pub kind: AssetKind,
    /// Namespace, e.g. "myitems".
    pub namespace: String,
    /// Local id within the namespace, e.g. "ruby_sword".
    pub local_id: String,
    /// Display name shown to players.
    pub display_name: String,
    /// Vanilla material the asset is layered on (e.g. "DIAMOND").
    pub base_material: String,
    /// Custom model data declared by the pack, in the `i32` range Java uses.
    pub custom_model_data: Option<i32>,
    pub durability: Option<i64>,
    pub max_stack_size: u32,
    pub lore: Vec<String>,
    /// Source texture file, if one was found.
    pub texture_path: Option<PathBuf>,
    /// Source model document, if one was found.
    pub model_path: Option<PathBuf>,
}

impl CanonicalAsset {
    /// Create an asset with defaults for every optional field.
    pub fn new(
        kind: AssetKind,
        namespace: impl Into<String>,
        local_id: impl Into<String>,
        base_material: impl Into<String>,
    ) -> Self {
        let local_id = local_id.into();
        Self {
            kind,
            namespace: namespace.into(),
            display_name: local_id.clone(),
            local_id,
            base_material: base_material.into(),
            custom_model_data: None,
            durability: None,
            max_stack_size: 64,
            lore: Vec::new(),
            texture_path: None,
            model_path: None,
        }
    }

    /// The `namespace:local_id` join key.
    pub fn full_id(&self) -> String {
        format!("{}:{}", self.namespace, self.local_id)
    }
}

/// Assets keyed by full id, iterated in insertion order.
///
/// The first asset inserted under a given full id wins.
#[derive(Debug, Clone, Default)]
pub struct AssetSet {
    assets: Vec<CanonicalAsset>,
    index: HashMap<String, usize>,
}

impl AssetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an asset. Returns false (and drops the asset) if its full id is taken.
    pub fn insert(&mut self, asset: CanonicalAsset) -> bool {
        let full_id = asset.full_id();
        if self.index.contains_key(&full_id) {
            return false;
        }
        self.index.insert(full_id, self.assets.len());
        self.assets.push(asset);
        true
    }

    pub fn get(&self, full_id: &str) -> Option<&CanonicalAsset> {
        self.index.get(full_id).map(|&i| &self.assets[i])
    }

    pub fn contains(&self, full_id: &str) -> bool {
        self.index.contains_key(full_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalAsset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl<'a> IntoIterator for &'a AssetSet {
    type Item = &'a CanonicalAsset;
    type IntoIter = std::slice::Iter<'a, CanonicalAsset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_id() {
        let asset = CanonicalAsset::new(AssetKind::Item, "test", "gem", "DIAMOND");
        assert_eq!(asset.full_id(), "test:gem");
        assert_eq!(asset.display_name, "gem");
        assert_eq!(asset.max_stack_size, 64);
    }

    #[test]
    fn test_asset_set_first_wins() {
        let mut set = AssetSet::new();
        let mut first = CanonicalAsset::new(AssetKind::Item, "a", "x", "PAPER");
        first.custom_model_data = Some(1);
        let mut second = first.clone();
        second.custom_model_data = Some(2);

        assert!(set.insert(first));
        assert!(!set.insert(second));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("a:x").unwrap().custom_model_data, Some(1));
    }

    #[test]
    fn test_asset_set_keeps_insertion_order() {
        let mut set = AssetSet::new();
        for id in ["zeta", "alpha", "mid"] {
            set.insert(CanonicalAsset::new(AssetKind::Block, "ns", id, "NOTE_BLOCK"));
        }
        let ids: Vec<_> = set.iter().map(|a| a.local_id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }
}
