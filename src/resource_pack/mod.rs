//! Source pack resolution.
//!
//! This module turns an ItemsAdder pack (ZIP file or directory) into
//! canonical items and blocks plus the location of its Java resource pack.

pub mod definitions;
pub mod inference;
pub mod loader;
pub mod model;
pub mod texture;

pub use definitions::{DefinitionReader, Definitions};
pub use model::ItemModel;

use crate::error::Result;
use crate::types::{AssetKind, AssetSet};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Materials given to assets that do not name one.
#[derive(Debug, Clone)]
pub struct AssetDefaults {
    pub item_material: String,
    pub block_material: String,
}

impl Default for AssetDefaults {
    fn default() -> Self {
        Self {
            item_material: "DIAMOND".to_string(),
            block_material: "NOTE_BLOCK".to_string(),
        }
    }
}

impl AssetDefaults {
    pub fn material(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Item => &self.item_material,
            AssetKind::Block => &self.block_material,
        }
    }
}

/// A source pack resolved into canonical assets.
///
/// When the input was a ZIP, this value owns the extraction directory and
/// every path it hands out points into it. The directory is removed when
/// the value is dropped.
#[derive(Debug)]
pub struct ResolvedPack {
    pub items: AssetSet,
    pub blocks: AssetSet,
    /// Directory containing `assets/`, if the pack has a resource pack.
    pub resource_root: Option<PathBuf>,
    /// Directory the pack contents were read from.
    pub pack_root: PathBuf,
    /// The definition document used, if any.
    pub definitions_path: Option<PathBuf>,
    _scratch: Option<TempDir>,
}

impl ResolvedPack {
    /// Whether the assets came from structural inference.
    pub fn is_inferred(&self) -> bool {
        self.definitions_path.is_none()
    }
}

/// Parses a source pack into canonical assets.
pub struct SourcePackResolver {
    defaults: AssetDefaults,
}

impl SourcePackResolver {
    pub fn new(defaults: AssetDefaults) -> Self {
        Self { defaults }
    }

    /// Resolve the pack at `input` (ZIP file or directory).
    pub fn resolve<P: AsRef<Path>>(&self, input: P) -> Result<ResolvedPack> {
        let opened = loader::open_input(input)?;
        let pack_root = opened.root.clone();

        let resource_root = loader::find_resource_root(&pack_root)?;
        match &resource_root {
            Some(root) => tracing::info!("Resource pack found at {}", root.display()),
            None => tracing::warn!("No resource pack found; only mappings will be generated"),
        }

        let definitions_path = loader::find_definitions(&pack_root)?;
        let (items, blocks) = match &definitions_path {
            Some(path) => {
                tracing::info!("Reading definitions from {}", path.display());
                let reader =
                    DefinitionReader::new(&pack_root, resource_root.as_deref(), &self.defaults);
                let defs = reader.read(path)?;
                (defs.items, defs.blocks)
            }
            None => match &resource_root {
                Some(root) => {
                    tracing::info!(
                        "No {} found; inferring items from textures",
                        loader::DEFINITIONS_FILE
                    );
                    (inference::infer_items(root, &self.defaults.item_material)?, AssetSet::new())
                }
                None => (AssetSet::new(), AssetSet::new()),
            },
        };

        tracing::info!("Found {} items and {} blocks", items.len(), blocks.len());

        Ok(ResolvedPack {
            items,
            blocks,
            resource_root,
            pack_root,
            definitions_path,
            _scratch: opened.scratch,
        })
    }
}

impl Default for SourcePackResolver {
    fn default() -> Self {
        Self::new(AssetDefaults::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConverterError;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_resolve_definitions_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets/ns/textures/item")).unwrap();
        fs::write(dir.path().join("assets/ns/textures/item/widget.png"), b"png").unwrap();
        fs::write(dir.path().join("items.yml"), "items:\n  ns:\n    other: {}\n").unwrap();

        let pack = SourcePackResolver::default().resolve(dir.path()).unwrap();
        assert!(!pack.is_inferred());
        assert_eq!(pack.items.len(), 1);
        assert!(pack.items.contains("ns:other"));
        assert_eq!(pack.resource_root.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_resolve_without_anything() {
        let dir = tempfile::tempdir().unwrap();
        let pack = SourcePackResolver::default().resolve(dir.path()).unwrap();
        assert!(pack.items.is_empty());
        assert!(pack.blocks.is_empty());
        assert!(pack.resource_root.is_none());
    }

    #[test]
    fn test_zip_scratch_removed_on_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("broken.zip");
        let marker = format!("marker-{}.txt", uuid::Uuid::new_v4());
        {
            let mut zip = zip::ZipWriter::new(fs::File::create(&zip_path).unwrap());
            let options = zip::write::SimpleFileOptions::default();
            zip.start_file("items.yml", options).unwrap();
            zip.write_all(b"items: [unclosed\n").unwrap();
            zip.start_file(marker.as_str(), options).unwrap();
            zip.write_all(b"x").unwrap();
            zip.finish().unwrap();
        }

        let err = SourcePackResolver::default().resolve(&zip_path).unwrap_err();
        assert!(matches!(err, ConverterError::DefinitionParse { .. }));

        // No extraction directory holding this archive's files survives.
        let leftovers: Vec<_> = fs::read_dir(std::env::temp_dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with("iageyser_"))
            .filter(|e| e.path().join(&marker).exists())
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_defaults_per_kind() {
        let defaults = AssetDefaults::default();
        assert_eq!(defaults.material(AssetKind::Item), "DIAMOND");
        assert_eq!(defaults.material(AssetKind::Block), "NOTE_BLOCK");
    }
}
