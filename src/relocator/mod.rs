//! Asset relocation into a Bedrock resource pack.
//!
//! Copies the Java textures into the output pack, builds the two texture
//! atlases from the copied tree, assigns every asset its texture id and
//! writes placeholder attachables and block geometry.

pub mod copy;

use crate::atlas::{
    AtlasBuilder, FileLister, FsLister, TextureAtlas, TextureClass, TextureIndex, TextureRecord,
};
use crate::config::ConverterConfig;
use crate::error::Result;
use crate::export::{attachable_document, block_geometry_document, write_json, write_manifest};
use crate::resource_pack::texture::{is_texture_file, texture_dimensions};
use crate::resource_pack::ResolvedPack;
use crate::types::hashed_id::IdScheme;
use crate::types::AssetSet;
use std::collections::HashSet;
use std::path::Path;

/// Directories every output pack has.
const SKELETON: &[&str] = &["textures", "models/blocks", "attachables"];

/// Size assumed for block textures whose header cannot be read.
const DEFAULT_TEXTURE_SIZE: (u32, u32) = (16, 16);

/// What relocation produced.
#[derive(Debug, Default)]
pub struct RelocationOutput {
    /// Item full id -> texture id in `item_texture.json`.
    pub item_textures: TextureIndex,
    /// Block full id -> texture id in `terrain_texture.json`.
    pub terrain_textures: TextureIndex,
    pub item_atlas: TextureAtlas,
    pub terrain_atlas: TextureAtlas,
    pub copied_textures: usize,
    /// Sound and animation files mirrored from the Java pack root.
    pub extra_assets: usize,
    pub attachables: usize,
    pub block_geometries: usize,
}

/// A texture file located in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OutputTexture {
    /// Path below `textures/` without extension.
    stem: String,
    /// Path below `textures/` with extension.
    file: String,
}

impl OutputTexture {
    fn from_file(file: &str) -> Self {
        let stem = match file.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => file.to_string(),
        };
        Self {
            stem,
            file: file.to_string(),
        }
    }
}

/// Relocates assets of a resolved pack into an output pack directory.
pub struct AssetRelocator<'a> {
    config: &'a ConverterConfig,
}

impl<'a> AssetRelocator<'a> {
    pub fn new(config: &'a ConverterConfig) -> Self {
        Self { config }
    }

    /// Build the pack in `pack_dir`.
    pub fn relocate(&self, pack: &ResolvedPack, pack_dir: &Path) -> Result<RelocationOutput> {
        for dir in SKELETON {
            std::fs::create_dir_all(pack_dir.join(dir))?;
        }
        write_manifest(pack_dir, &self.config.pack_name, &self.config.pack_description)?;

        let textures_root = pack_dir.join("textures");
        let copied_textures = match &pack.resource_root {
            Some(root) => copy::copy_textures(&root.join("assets"), &textures_root)?,
            None => 0,
        };
        let extra_assets = match &pack.resource_root {
            Some(root) => copy::copy_extra_assets(root, pack_dir)?,
            None => 0,
        };

        // Atlases are built from the copied tree so paths match the output layout.
        let builder = AtlasBuilder::new(&self.config.rules, &FsLister);
        let mut item_atlas = builder.build(&textures_root, TextureClass::Item)?;
        let mut terrain_atlas = builder.build(&textures_root, TextureClass::Block)?;

        let listing: Vec<String> = FsLister
            .list_files(&textures_root)?
            .into_iter()
            .filter(|f| is_texture_file(Path::new(f)))
            .collect();
        let locator = TextureLocator::new(pack.resource_root.as_deref(), &listing);

        let item_textures = self.assign(&pack.items, &locator, &mut item_atlas, IdScheme::Texture);
        let terrain_textures =
            self.assign(&pack.blocks, &locator, &mut terrain_atlas, IdScheme::Terrain);

        materialize_aliases(&textures_root, &item_atlas)?;
        materialize_aliases(&textures_root, &terrain_atlas)?;

        let name = &self.config.pack_name;
        write_json(&textures_root.join("item_texture.json"), &item_atlas.item_document(name))?;
        write_json(
            &textures_root.join("terrain_texture.json"),
            &terrain_atlas.terrain_document(name),
        )?;
        tracing::info!(
            "Wrote atlases with {} item and {} terrain textures",
            item_atlas.len(),
            terrain_atlas.len()
        );

        let attachables =
            self.write_attachables(pack_dir, &pack.items, &item_textures, &item_atlas)?;
        let block_geometries = self.write_block_geometry(pack_dir, &pack.blocks)?;

        Ok(RelocationOutput {
            item_textures,
            terrain_textures,
            item_atlas,
            terrain_atlas,
            copied_textures,
            extra_assets,
            attachables,
            block_geometries,
        })
    }

    /// Give every textured asset a texture id, adding atlas records for
    /// textures the scan did not pick up.
    fn assign(
        &self,
        assets: &AssetSet,
        locator: &TextureLocator,
        atlas: &mut TextureAtlas,
        fallback: IdScheme,
    ) -> TextureIndex {
        let mut index = TextureIndex::new();

        for asset in assets {
            let Some(texture) = &asset.texture_path else {
                continue;
            };
            let Some(output) = locator.locate(texture) else {
                tracing::debug!(
                    "Texture {} of {} is not in the output pack",
                    texture.display(),
                    asset.full_id()
                );
                continue;
            };

            let texture_id = match atlas.id_for_path(&output.stem) {
                Some(id) => id.to_string(),
                None => {
                    let relative_path = self.config.rules.normalize(&output.stem);
                    let id = fallback.derive(&relative_path);
                    atlas.insert(TextureRecord {
                        texture_id: id.clone(),
                        relative_path,
                        source_file: output.file.clone(),
                    });
                    atlas.link_path(output.stem, id.clone());
                    id
                }
            };
            index.insert(asset.full_id(), texture_id);
        }

        index
    }

    fn write_attachables(
        &self,
        pack_dir: &Path,
        items: &AssetSet,
        textures: &TextureIndex,
        atlas: &TextureAtlas,
    ) -> Result<usize> {
        let mut written = 0;
        for item in items.iter().filter(|i| i.model_path.is_some()) {
            let full_id = item.full_id();
            let geometry_id = IdScheme::Geometry.derive(&full_id);
            let texture = textures
                .get(&full_id)
                .and_then(|id| atlas.get(id))
                .map(|record| format!("textures/{}", record.relative_path));

            let path = pack_dir.join("attachables").join(format!("{}.json", geometry_id));
            write_json(&path, &attachable_document(&geometry_id, texture.as_deref()))?;
            written += 1;
        }
        Ok(written)
    }

    fn write_block_geometry(&self, pack_dir: &Path, blocks: &AssetSet) -> Result<usize> {
        let mut written = 0;
        for block in blocks.iter().filter(|b| b.model_path.is_some()) {
            let geometry_id = IdScheme::Geometry.derive(&block.full_id());
            let size = block
                .texture_path
                .as_deref()
                .and_then(texture_dimensions)
                .unwrap_or(DEFAULT_TEXTURE_SIZE);

            let path = pack_dir
                .join("models/blocks")
                .join(format!("{}.geo.json", geometry_id));
            write_json(&path, &block_geometry_document(&geometry_id, size))?;
            written += 1;
        }
        Ok(written)
    }
}

/// Finds where a source texture ended up below the output `textures/`.
struct TextureLocator<'a> {
    assets_dir: Option<std::path::PathBuf>,
    listing: &'a [String],
    copied: HashSet<&'a str>,
}

impl<'a> TextureLocator<'a> {
    fn new(resource_root: Option<&Path>, listing: &'a [String]) -> Self {
        Self {
            assets_dir: resource_root.map(|r| r.join("assets")),
            listing,
            copied: listing.iter().map(String::as_str).collect(),
        }
    }

    /// The direct copy destination if it exists, else the first output
    /// texture with the same file stem.
    ///
    /// The stem fallback picks the first match in lexicographic order, which
    /// is not necessarily the intended file when two namespaces ship a
    /// texture with the same name.
    fn locate(&self, texture: &Path) -> Option<OutputTexture> {
        let direct = self
            .assets_dir
            .as_deref()
            .and_then(|assets| texture.strip_prefix(assets).ok())
            .and_then(copy::destination)
            .map(|p| p.to_string_lossy().replace('\\', "/"));
        if let Some(file) = direct {
            if self.copied.contains(file.as_str()) {
                return Some(OutputTexture::from_file(&file));
            }
        }

        let stem = texture.file_stem()?.to_str()?;
        let mut matches = self
            .listing
            .iter()
            .filter(|f| Path::new(f.as_str()).file_stem().and_then(|s| s.to_str()) == Some(stem));
        let first = matches.next()?;
        if let Some(other) = matches.next() {
            tracing::warn!(
                "Texture {} matched both {} and {}; using {}",
                texture.display(),
                first,
                other,
                first
            );
        }
        Some(OutputTexture::from_file(first))
    }
}

/// Copy textures whose normalized path differs from their copied path, so
/// every atlas entry points at a real file.
fn materialize_aliases(textures_root: &Path, atlas: &TextureAtlas) -> Result<usize> {
    let mut copied = 0;
    for record in atlas.records() {
        let source = OutputTexture::from_file(&record.source_file);
        if source.stem == record.relative_path {
            continue;
        }
        let extension = Path::new(&record.source_file)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("png");
        let target = textures_root.join(format!("{}.{}", record.relative_path, extension));
        if target.exists() {
            continue;
        }
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(textures_root.join(&record.source_file), &target)?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_pack::SourcePackResolver;
    use std::fs;

    fn write(path: &Path, contents: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_output_texture_from_file() {
        let t = OutputTexture::from_file("test/item/gem.png");
        assert_eq!(t.stem, "test/item/gem");
        assert_eq!(t.file, "test/item/gem.png");
    }

    #[test]
    fn test_locator_direct_and_fallback() {
        let listing = vec!["a/item/gem.png".to_string(), "b/item/gem.png".to_string()];
        let root = Path::new("/pack");
        let locator = TextureLocator::new(Some(root), &listing);

        let direct = locator.locate(Path::new("/pack/assets/b/textures/item/gem.png")).unwrap();
        assert_eq!(direct.file, "b/item/gem.png");

        // Outside the assets tree: first same-named texture wins.
        let fallback = locator.locate(Path::new("/elsewhere/gem.png")).unwrap();
        assert_eq!(fallback.file, "a/item/gem.png");

        assert!(locator.locate(Path::new("/elsewhere/ruby.png")).is_none());
    }

    #[test]
    fn test_relocate_shared_texture() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        write(&src.join("assets/test/textures/item/gem.png"), b"png");
        write(&src.join("assets/test/models/item/gem.json"), b"{}");
        write(&src.join("assets/test/textures/block/ore.png"), b"png");
        write(&src.join("assets/test/textures/misc/odd.png"), b"png");
        write(
            &src.join("items.yml"),
            br#"
items:
  test:
    gem: {}
    twin:
      texture: item/gem
blocks:
  test:
    ore:
      model: block/ore
    odd:
      texture: misc/odd
"#,
        );
        write(&src.join("assets/test/models/block/ore.json"), b"{}");
        write(&src.join("sounds.json"), b"{}");

        let pack = SourcePackResolver::default().resolve(&src).unwrap();
        let config = ConverterConfig::default();
        let out = dir.path().join("out");
        let result = AssetRelocator::new(&config).relocate(&pack, &out).unwrap();

        assert!(out.join("manifest.json").is_file());
        assert!(out.join("textures/test/item/gem.png").is_file());
        assert!(out.join("textures/test/ia_auto_gen/gem.png").is_file());
        assert_eq!(result.copied_textures, 3);
        assert_eq!(result.extra_assets, 1);
        assert!(out.join("sounds.json").is_file());

        let gem = result.item_textures.get("test:gem").unwrap();
        assert_eq!(result.item_textures.get("test:twin"), Some(gem));
        assert_eq!(result.item_atlas.len(), 1);

        let ore = result.terrain_textures.get("test:ore").unwrap();
        assert!(ore.starts_with("test_f"));
        let odd = result.terrain_textures.get("test:odd").unwrap();
        assert_eq!(odd, IdScheme::Terrain.derive("test/misc/odd"));
        assert_eq!(result.terrain_atlas.len(), 2);

        assert_eq!(result.attachables, 1);
        assert_eq!(result.block_geometries, 1);
        let geometry_id = IdScheme::Geometry.derive("test:ore");
        assert!(out.join(format!("models/blocks/{}.geo.json", geometry_id)).is_file());

        let atlas = fs::read_to_string(out.join("textures/item_texture.json")).unwrap();
        let atlas: serde_json::Value = serde_json::from_str(&atlas).unwrap();
        assert_eq!(atlas["texture_data"][gem]["textures"], "textures/test/ia_auto_gen/gem");
    }

    #[test]
    fn test_relocate_without_resource_pack() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        write(&src.join("items.yml"), b"items:\n  test:\n    gem: {}\n");

        let pack = SourcePackResolver::default().resolve(&src).unwrap();
        let config = ConverterConfig::default();
        let out = dir.path().join("out");
        let result = AssetRelocator::new(&config).relocate(&pack, &out).unwrap();

        assert_eq!(result.copied_textures, 0);
        assert!(result.item_textures.is_empty());
        assert!(out.join("textures/terrain_texture.json").is_file());
        assert!(out.join("attachables").is_dir());
    }
}
