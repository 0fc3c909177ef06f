//! Structural inference of items from a bare resource pack.
//!
//! Used when a pack ships no definition document: every texture under a
//! namespace's `textures/item` or `textures/items` folder becomes an item.

use super::model::ItemModel;
use super::texture::is_texture_file;
use crate::error::Result;
use crate::types::{AssetKind, AssetSet, CanonicalAsset};
use std::path::Path;
use walkdir::WalkDir;

/// Namespace of vanilla content, never treated as custom.
pub const VANILLA_NAMESPACE: &str = "minecraft";

/// Infer items from `resource_root/assets/*/textures/item(s)/**`.
pub fn infer_items(resource_root: &Path, default_material: &str) -> Result<AssetSet> {
    let mut items = AssetSet::new();
    let assets = resource_root.join("assets");
    if !assets.is_dir() {
        return Ok(items);
    }

    for ns_entry in WalkDir::new(&assets).min_depth(1).max_depth(1).sort_by_file_name() {
        let ns_entry = ns_entry?;
        if !ns_entry.file_type().is_dir() {
            continue;
        }
        let namespace = ns_entry.file_name().to_string_lossy().to_string();
        if namespace == VANILLA_NAMESPACE {
            continue;
        }

        for folder in AssetKind::Item.folder_names() {
            let texture_dir = ns_entry.path().join("textures").join(folder);
            if !texture_dir.is_dir() {
                continue;
            }

            for entry in WalkDir::new(&texture_dir).sort_by_file_name() {
                let entry = entry?;
                if !entry.file_type().is_file() || !is_texture_file(entry.path()) {
                    continue;
                }

                let relative = match entry.path().strip_prefix(&texture_dir) {
                    Ok(r) => r.with_extension(""),
                    Err(_) => continue,
                };
                let segments: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().to_string())
                    .collect();
                let local_id = segments.join("_");

                let mut asset =
                    CanonicalAsset::new(AssetKind::Item, &namespace, &local_id, default_material);
                asset.display_name = humanize(&local_id);
                asset.texture_path = Some(entry.path().to_path_buf());

                let model_path = ns_entry
                    .path()
                    .join("models")
                    .join(folder)
                    .join(format!("{}.json", segments.join("/")));
                if model_path.is_file() {
                    asset.custom_model_data =
                        ItemModel::load(&model_path).and_then(|m| m.custom_model_data());
                    asset.model_path = Some(model_path);
                }

                let full_id = asset.full_id();
                if !items.insert(asset) {
                    tracing::debug!("Skipping duplicate inferred item {}", full_id);
                }
            }
        }
    }

    tracing::debug!("Inferred {} items from {}", items.len(), resource_root.display());
    Ok(items)
}

/// Turn an id into a display name: `ruby_sword` -> `Ruby Sword`.
pub fn humanize(id: &str) -> String {
    id.split(|c: char| c == '_' || c == '-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
