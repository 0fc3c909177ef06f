//! # ItemsAdder → Geyser
//!
//! A Rust library for converting ItemsAdder packs for Bedrock players.
//!
//! ## Overview
//!
//! This library takes an ItemsAdder pack (item definitions plus a Java
//! resource pack, as a ZIP or a directory) and produces a Bedrock resource
//! pack together with the `items.json` and `blocks.json` custom mappings
//! Geyser reads.
//!
//! ## Quick Start
//!
//! ```ignore
//! use itemsadder_geyser::{convert, ConverterConfig};
//!
//! let config = ConverterConfig::default().with_zip(true);
//! let report = convert("path/to/pack.zip", "output", &config)?;
//! println!("{} items mapped", report.items);
//! ```
//!
//! ## Pipeline
//!
//! Conversion runs three stages in order, each consuming the previous one's
//! output:
//!
//! 1. [`SourcePackResolver`] reads the pack into canonical items and blocks.
//! 2. [`AssetRelocator`] copies textures, writes atlases and geometry, and
//!    assigns texture ids.
//! 3. [`MappingEmitter`] groups assets by vanilla material and emits the
//!    mapping documents using those texture ids.

pub mod atlas;
pub mod config;
pub mod error;
pub mod export;
pub mod mapping;
pub mod relocator;
pub mod resource_pack;
pub mod types;

// Re-export main types for convenience
pub use atlas::{ClassifierRules, TextureAtlas, TextureClass, TextureIndex};
pub use config::ConverterConfig;
pub use error::{ConverterError, Result};
pub use mapping::{BlockMappings, ItemMappings, MappingEmitter, MappingTables};
pub use relocator::{AssetRelocator, RelocationOutput};
pub use resource_pack::{AssetDefaults, ResolvedPack, SourcePackResolver};
pub use types::{AssetKind, AssetSet, CanonicalAsset};

use std::path::{Path, PathBuf};

/// Summary of a finished conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub items: usize,
    pub blocks: usize,
    /// Whether the source pack contained a Java resource pack.
    pub had_resource_pack: bool,
    /// Whether assets were inferred from textures instead of read from definitions.
    pub inferred: bool,
    pub pack_dir: PathBuf,
    pub items_mappings: PathBuf,
    pub blocks_mappings: PathBuf,
    pub zip_path: Option<PathBuf>,
    pub copied_textures: usize,
    /// Sound and animation files carried over from the Java pack.
    pub extra_assets: usize,
    pub item_textures: usize,
    pub terrain_textures: usize,
}

/// Convert the pack at `input` into `output`.
///
/// Writes the resource pack to `output/<pack_name>/`, the mappings to
/// `output/items.json` and `output/blocks.json`, and, if configured,
/// `output/<pack_name>.zip`. Nothing is written if the input cannot be
/// found or its definitions cannot be parsed.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &ConverterConfig,
) -> Result<ConversionReport> {
    let output = output.as_ref();

    let resolver = SourcePackResolver::new(config.defaults.clone());
    let pack = resolver.resolve(input)?;

    let pack_dir = output.join(&config.pack_name);
    let relocation = AssetRelocator::new(config).relocate(&pack, &pack_dir)?;

    let emitter = MappingEmitter::new(&config.tables);
    let item_mappings = emitter.items(&pack.items, &relocation.item_textures);
    let block_mappings = emitter.blocks(&pack.blocks, &relocation.terrain_textures);

    let items_mappings = output.join("items.json");
    let blocks_mappings = output.join("blocks.json");
    export::write_json(&items_mappings, &item_mappings)?;
    export::write_json(&blocks_mappings, &block_mappings)?;
    tracing::info!(
        "Wrote {} item and {} block mappings",
        item_mappings.len(),
        block_mappings.len()
    );

    let zip_path = if config.create_zip {
        let zip_path = output.join(format!("{}.zip", config.pack_name));
        export::package_directory(&pack_dir, &zip_path)?;
        Some(zip_path)
    } else {
        None
    };

    Ok(ConversionReport {
        items: pack.items.len(),
        blocks: pack.blocks.len(),
        had_resource_pack: pack.resource_root.is_some(),
        inferred: pack.is_inferred(),
        pack_dir,
        items_mappings,
        blocks_mappings,
        zip_path,
        copied_textures: relocation.copied_textures,
        extra_assets: relocation.extra_assets,
        item_textures: relocation.item_atlas.len(),
        terrain_textures: relocation.terrain_atlas.len(),
    })
}
