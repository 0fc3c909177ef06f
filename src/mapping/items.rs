//! Item mappings (`items.json`).

use super::tables::MappingTables;
use crate::atlas::TextureIndex;
use crate::types::hashed_id::IdScheme;
use crate::types::{AssetSet, CanonicalAsset};
use serde::Serialize;
use std::collections::BTreeMap;

/// One custom item layered on a vanilla item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemMapping {
    pub name: String,
    pub custom_model_data: i32,
    pub icon: String,
    pub allow_offhand: bool,
}

/// The `items.json` document.
#[derive(Debug, Clone, Serialize)]
pub struct ItemMappings {
    pub format_version: u32,
    /// Vanilla item id -> custom items on it.
    pub items: BTreeMap<String, Vec<ItemMapping>>,
}

impl ItemMappings {
    /// Total number of mapped items.
    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Group items by vanilla item and assign final custom model data.
pub fn build_item_mappings(
    items: &AssetSet,
    textures: &TextureIndex,
    tables: &MappingTables,
) -> ItemMappings {
    let mut groups: BTreeMap<String, Vec<&CanonicalAsset>> = BTreeMap::new();
    for item in items {
        match tables.vanilla_id(&item.base_material) {
            Some(vanilla_id) => groups.entry(vanilla_id).or_default().push(item),
            None => tracing::debug!("Item {} has no material; skipped", item.full_id()),
        }
    }

    let items = groups
        .into_iter()
        .map(|(vanilla_id, mut group)| {
            // Stable: ties keep definition order. Undeclared values sort last.
            group.sort_by_key(|item| (item.custom_model_data.is_none(), item.custom_model_data));
            let mut allocator = CmdAllocator::new(tables.cmd_floor);

            let mappings = group
                .into_iter()
                .filter_map(|item| {
                    let full_id = item.full_id();
                    let Some(custom_model_data) = allocator.assign(item.custom_model_data) else {
                        tracing::warn!(
                            "No custom model data left on {}; {} skipped",
                            vanilla_id,
                            full_id
                        );
                        return None;
                    };
                    let texture_id = textures
                        .get(&full_id)
                        .map(str::to_string)
                        .unwrap_or_else(|| IdScheme::Asset.derive(&full_id));
                    Some(ItemMapping {
                        name: texture_id.clone(),
                        custom_model_data,
                        icon: texture_id,
                        allow_offhand: true,
                    })
                })
                .collect();
            (vanilla_id, mappings)
        })
        .collect();

    ItemMappings {
        format_version: 1,
        items,
    }
}

/// Hands out custom model data values within one vanilla item group.
///
/// Values never drop below the floor and strictly increase.
#[derive(Debug, Clone)]
pub struct CmdAllocator {
    /// `None` once `i32::MAX` has been handed out.
    next: Option<i32>,
}

impl CmdAllocator {
    pub fn new(floor: i32) -> Self {
        Self { next: Some(floor) }
    }

    /// Final value for an entry that declared `declared`.
    ///
    /// Undeclared entries get the next free value. Declared values are raised
    /// to the next free value if they fall below it. Returns `None` when the
    /// `i32` range is used up.
    pub fn assign(&mut self, declared: Option<i32>) -> Option<i32> {
        let next = self.next?;
        let value = declared.map_or(next, |v| v.max(next));
        self.next = value.checked_add(1);
        Some(value)
    }
}
