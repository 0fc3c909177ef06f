//! Geyser custom mapping documents.
//!
//! This module groups canonical assets by the vanilla item or block they
//! sit on and writes the `items.json` and `blocks.json` documents, using
//! the texture ids assigned during relocation.

pub mod blocks;
pub mod items;
pub mod tables;

pub use blocks::{build_block_mappings, BlockMapping, BlockMappings, StateOverride};
pub use items::{build_item_mappings, CmdAllocator, ItemMapping, ItemMappings};
pub use tables::MappingTables;

use crate::atlas::TextureIndex;
use crate::types::AssetSet;

/// Builds mapping documents from assets and texture indices.
pub struct MappingEmitter<'a> {
    tables: &'a MappingTables,
}

impl<'a> MappingEmitter<'a> {
    pub fn new(tables: &'a MappingTables) -> Self {
        Self { tables }
    }

    /// The `items.json` document.
    pub fn items(&self, items: &AssetSet, textures: &TextureIndex) -> ItemMappings {
        build_item_mappings(items, textures, self.tables)
    }

    /// The `blocks.json` document.
    pub fn blocks(&self, blocks: &AssetSet, textures: &TextureIndex) -> BlockMappings {
        build_block_mappings(blocks, textures, self.tables)
    }
}
