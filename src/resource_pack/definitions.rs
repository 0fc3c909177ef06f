//! Declarative item and block definitions (`items.yml`).
//!
//! Expected shape:
//!
//! ```yaml
//! items:
//!   <namespace>:
//!     <id>:
//!       display_name: "Ruby"
//!       material: DIAMOND
//!       custom_model_data: 5
//!       resource:
//!         texture: item/ruby
//! blocks:
//!   <namespace>:
//!     <id>: { ... }
//! ```

use super::AssetDefaults;
use crate::error::{ConverterError, Result};
use crate::types::{AssetKind, AssetSet, CanonicalAsset};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Namespace searched after an asset's own namespace for conventional paths.
const FALLBACK_NAMESPACE: &str = "itemsadder";

/// Assets read from a definition document.
#[derive(Debug, Default)]
pub struct Definitions {
    pub items: AssetSet,
    pub blocks: AssetSet,
}

/// Turns a definition document into canonical assets.
pub struct DefinitionReader<'a> {
    pack_root: &'a Path,
    resource_root: Option<&'a Path>,
    defaults: &'a AssetDefaults,
}

impl<'a> DefinitionReader<'a> {
    pub fn new(
        pack_root: &'a Path,
        resource_root: Option<&'a Path>,
        defaults: &'a AssetDefaults,
    ) -> Self {
        Self {
            pack_root,
            resource_root,
            defaults,
        }
    }

    /// Read and parse the document at `path`.
    pub fn read(&self, path: &Path) -> Result<Definitions> {
        let contents = std::fs::read_to_string(path)?;
        self.parse(&contents).map_err(|source| ConverterError::DefinitionParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse document text. A document without `items` or `blocks` yields no assets.
    pub fn parse(&self, contents: &str) -> std::result::Result<Definitions, serde_yaml::Error> {
        let doc: Value = serde_yaml::from_str(contents)?;
        let mut definitions = Definitions::default();

        if let Some(items) = doc.get("items").and_then(Value::as_mapping) {
            self.collect(items, AssetKind::Item, &mut definitions.items);
        }
        if let Some(blocks) = doc.get("blocks").and_then(Value::as_mapping) {
            self.collect(blocks, AssetKind::Block, &mut definitions.blocks);
        }

        Ok(definitions)
    }

    fn collect(&self, collection: &Mapping, kind: AssetKind, out: &mut AssetSet) {
        for (namespace, entries) in collection {
            let Some(namespace) = key_string(namespace) else {
                continue;
            };
            let Some(entries) = entries.as_mapping() else {
                continue;
            };
            for (local_id, props) in entries {
                let Some(local_id) = key_string(local_id) else {
                    continue;
                };
                let Some(props) = props.as_mapping() else {
                    continue;
                };
                let asset = self.build_asset(kind, &namespace, &local_id, props);
                if !out.insert(asset) {
                    tracing::warn!("Duplicate definition {}:{} ignored", namespace, local_id);
                }
            }
        }
    }

    fn build_asset(
        &self,
        kind: AssetKind,
        namespace: &str,
        local_id: &str,
        props: &Mapping,
    ) -> CanonicalAsset {
        let resource = props.get("resource").and_then(Value::as_mapping);

        let material = string_field(props, &["material"])
            .or_else(|| resource.and_then(|r| string_field(r, &["material"])))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.defaults.material(kind).to_string());

        let mut asset = CanonicalAsset::new(kind, namespace, local_id, material);
        if let Some(name) = string_field(props, &["display_name", "display-name"]) {
            asset.display_name = name;
        }
        asset.custom_model_data = cmd_field(props, namespace, local_id);
        asset.durability = int_field(props, &["durability"]);
        if let Some(stack) = int_field(props, &["max_stack_size", "max-stack-size"]) {
            asset.max_stack_size = u32::try_from(stack).unwrap_or(64);
        }
        if let Some(lore) = props.get("lore").and_then(Value::as_sequence) {
            asset.lore = lore.iter().filter_map(|l| l.as_str().map(str::to_string)).collect();
        }

        asset.texture_path = self.find_texture(kind, namespace, local_id, props, resource);
        asset.model_path = self.find_model(kind, namespace, local_id, props, resource);
        asset
    }

    fn find_texture(
        &self,
        kind: AssetKind,
        namespace: &str,
        local_id: &str,
        props: &Mapping,
        resource: Option<&Mapping>,
    ) -> Option<PathBuf> {
        let explicit = [
            string_field(props, &["texture"]),
            resource.and_then(|r| string_field(r, &["texture"])),
            resource
                .and_then(|r| r.get("textures"))
                .and_then(Value::as_sequence)
                .and_then(|t| t.first())
                .and_then(Value::as_str)
                .map(str::to_string),
        ];

        explicit
            .iter()
            .flatten()
            .find_map(|r| self.resolve_reference(kind, namespace, r, "textures", "png"))
            .or_else(|| self.conventional(kind, namespace, local_id, "textures", "png"))
    }

    fn find_model(
        &self,
        kind: AssetKind,
        namespace: &str,
        local_id: &str,
        props: &Mapping,
        resource: Option<&Mapping>,
    ) -> Option<PathBuf> {
        let explicit = [
            string_field(props, &["model"]),
            resource.and_then(|r| string_field(r, &["model", "model_path"])),
        ];

        explicit
            .iter()
            .flatten()
            .find_map(|r| self.resolve_reference(kind, namespace, r, "models", "json"))
            .or_else(|| self.conventional(kind, namespace, local_id, "models", "json"))
    }

    /// Resolve an explicit reference: a file path first, then a resource
    /// location under `assets/<ns>/<category>/`, with and without the kind folder.
    fn resolve_reference(
        &self,
        kind: AssetKind,
        namespace: &str,
        reference: &str,
        category: &str,
        extension: &str,
    ) -> Option<PathBuf> {
        let direct = self.pack_root.join(reference);
        if direct.is_file() {
            return Some(direct);
        }

        let root = self.resource_root?;
        let (ns, path) = reference.split_once(':').unwrap_or((namespace, reference));
        let file = if path.ends_with(&format!(".{}", extension)) {
            path.to_string()
        } else {
            format!("{}.{}", path, extension)
        };

        let base = root.join("assets").join(ns).join(category);
        std::iter::once(base.join(&file))
            .chain(kind.folder_names().iter().map(|folder| base.join(folder).join(&file)))
            .find(|p| p.is_file())
    }

    /// Look in the conventional per-namespace places, then the shared namespace.
    fn conventional(
        &self,
        kind: AssetKind,
        namespace: &str,
        local_id: &str,
        category: &str,
        extension: &str,
    ) -> Option<PathBuf> {
        let root = self.resource_root?;
        let file = format!("{}.{}", local_id, extension);
        // Models only use the singular folder name.
        let folders = if category == "models" {
            &kind.folder_names()[..1]
        } else {
            kind.folder_names()
        };

        for ns in [namespace, FALLBACK_NAMESPACE] {
            for folder in folders {
                let path = root.join("assets").join(ns).join(category).join(folder).join(&file);
                if path.is_file() {
                    return Some(path);
                }
            }
        }
        None
    }
}

/// Mapping keys may be strings or bare numbers.
fn key_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_field(map: &Mapping, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| map.get(*k))
        .and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// Declared custom model data. Values outside the `i32` range count as undeclared.
fn cmd_field(map: &Mapping, namespace: &str, local_id: &str) -> Option<i32> {
    let value = int_field(map, &["custom_model_data", "custom-model-data"])?;
    match i32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(
                "Custom model data {} of {}:{} is out of range; treated as undeclared",
                value,
                namespace,
                local_id
            );
            None
        }
    }
}

fn int_field(map: &Mapping, keys: &[&str]) -> Option<i64> {
    keys.iter()
        .find_map(|k| map.get(*k))
        .and_then(|v| match v {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
}
