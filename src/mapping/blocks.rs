//! Block mappings (`blocks.json`).

use super::tables::MappingTables;
use crate::atlas::TextureIndex;
use crate::types::hashed_id::IdScheme;
use crate::types::{AssetSet, CanonicalAsset};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Render settings for one face selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialInstance {
    pub texture: String,
    pub render_method: String,
}

/// Appearance assigned to one vanilla block state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateOverride {
    pub name: String,
    pub geometry: String,
    pub material_instances: BTreeMap<String, MaterialInstance>,
}

/// State overrides in assignment order.
///
/// Written as a JSON object. A group larger than its state table reuses
/// keys, and every entry is still written, so the object can repeat a key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateOverrides(pub Vec<(String, StateOverride)>);

impl StateOverrides {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateOverride)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for StateOverrides {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Custom blocks layered on one vanilla block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockMapping {
    pub name: String,
    pub included_in_creative_inventory: bool,
    pub only_override_states: bool,
    pub place_air: bool,
    pub state_overrides: StateOverrides,
}

/// The `blocks.json` document.
#[derive(Debug, Clone, Serialize)]
pub struct BlockMappings {
    pub format_version: u32,
    /// Vanilla block id -> overrides on it.
    pub blocks: BTreeMap<String, BlockMapping>,
}

impl BlockMappings {
    /// Total number of state overrides.
    pub fn len(&self) -> usize {
        self.blocks.values().map(|b| b.state_overrides.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Group blocks by vanilla block and assign state keys in definition order.
pub fn build_block_mappings(
    blocks: &AssetSet,
    textures: &TextureIndex,
    tables: &MappingTables,
) -> BlockMappings {
    let mut groups: BTreeMap<String, Vec<&CanonicalAsset>> = BTreeMap::new();
    for block in blocks {
        match tables.vanilla_id(&block.base_material) {
            Some(vanilla_id) => groups.entry(vanilla_id).or_default().push(block),
            None => tracing::debug!("Block {} has no material; skipped", block.full_id()),
        }
    }

    let blocks = groups
        .into_iter()
        .map(|(vanilla_id, group)| {
            if let Some(table_len) = tables.state_table_len(&vanilla_id) {
                if group.len() > table_len {
                    tracing::warn!(
                        "{} custom blocks on {} but only {} distinct states; states will be reused",
                        group.len(),
                        vanilla_id,
                        table_len
                    );
                }
            }

            let overrides = group
                .iter()
                .enumerate()
                .map(|(position, block)| {
                    let full_id = block.full_id();
                    let texture_id = textures
                        .get(&full_id)
                        .map(str::to_string)
                        .unwrap_or_else(|| IdScheme::Terrain.derive(&full_id));
                    let state = StateOverride {
                        name: texture_id.clone(),
                        geometry: format!("{}.{}", tables.block_geometry_prefix, texture_id),
                        material_instances: BTreeMap::from([(
                            "*".to_string(),
                            MaterialInstance {
                                texture: texture_id,
                                render_method: "alpha_test".to_string(),
                            },
                        )]),
                    };
                    (tables.state_key(&vanilla_id, position), state)
                })
                .collect();

            let mapping = BlockMapping {
                name: tables.strip_vanilla_namespace(&vanilla_id).to_string(),
                included_in_creative_inventory: false,
                only_override_states: true,
                place_air: true,
                state_overrides: StateOverrides(overrides),
            };
            (vanilla_id, mapping)
        })
        .collect();

    BlockMappings {
        format_version: 1,
        blocks,
    }
}
