//! Texture atlas descriptors (`item_texture.json`, `terrain_texture.json`).

use super::classifier::{ClassifierRules, FileLister, TextureClass};
use crate::error::Result;
use crate::types::hashed_id::IdScheme;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::path::Path;

/// One atlas entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRecord {
    pub texture_id: String,
    /// Normalized path below `textures/`, without extension.
    pub relative_path: String,
    /// File the record was created from, below `textures/`, with extension.
    pub source_file: String,
}

/// Texture records keyed by id, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TextureAtlas {
    records: Vec<TextureRecord>,
    by_id: HashMap<String, usize>,
    /// Scanned path (no extension) -> texture id.
    by_path: HashMap<String, String>,
}

impl TextureAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record unless its id is already present.
    pub fn insert(&mut self, record: TextureRecord) -> bool {
        if self.by_id.contains_key(&record.texture_id) {
            return false;
        }
        self.by_id.insert(record.texture_id.clone(), self.records.len());
        self.records.push(record);
        true
    }

    /// Remember which id a scanned path resolved to.
    pub fn link_path(&mut self, path: impl Into<String>, texture_id: impl Into<String>) {
        self.by_path.insert(path.into(), texture_id.into());
    }

    /// The id a scanned path (no extension) resolved to.
    pub fn id_for_path(&self, path: &str) -> Option<&str> {
        self.by_path.get(path).map(String::as_str)
    }

    pub fn get(&self, texture_id: &str) -> Option<&TextureRecord> {
        self.by_id.get(texture_id).map(|&i| &self.records[i])
    }

    pub fn records(&self) -> &[TextureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `item_texture.json` document.
    pub fn item_document<'a>(&'a self, pack_name: &'a str) -> AtlasDocument<'a> {
        AtlasDocument {
            resource_pack_name: pack_name,
            texture_name: "atlas.items",
            padding: None,
            num_mip_levels: None,
            texture_data: TextureData(&self.records),
        }
    }

    /// The `terrain_texture.json` document.
    pub fn terrain_document<'a>(&'a self, pack_name: &'a str) -> AtlasDocument<'a> {
        AtlasDocument {
            resource_pack_name: pack_name,
            texture_name: "atlas.terrain",
            padding: Some(8),
            num_mip_levels: Some(4),
            texture_data: TextureData(&self.records),
        }
    }
}

/// Serialized shape of a Bedrock atlas descriptor.
#[derive(Debug, serde::Serialize)]
pub struct AtlasDocument<'a> {
    pub resource_pack_name: &'a str,
    pub texture_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_mip_levels: Option<u32>,
    pub texture_data: TextureData<'a>,
}

/// `texture_data` map, written in record order.
#[derive(Debug)]
pub struct TextureData<'a>(&'a [TextureRecord]);

impl Serialize for TextureData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Entry {
            textures: String,
        }

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for record in self.0 {
            let entry = Entry {
                textures: format!("textures/{}", record.relative_path),
            };
            map.serialize_entry(&record.texture_id, &entry)?;
        }
        map.end()
    }
}

/// Scans a relocated `textures/` tree into an atlas for one texture class.
pub struct AtlasBuilder<'a, L: FileLister> {
    rules: &'a ClassifierRules,
    lister: &'a L,
}

impl<'a, L: FileLister> AtlasBuilder<'a, L> {
    pub fn new(rules: &'a ClassifierRules, lister: &'a L) -> Self {
        Self { rules, lister }
    }

    /// Build the atlas of every PNG below `textures_root` classified as `class`.
    pub fn build(&self, textures_root: &Path, class: TextureClass) -> Result<TextureAtlas> {
        let mut atlas = TextureAtlas::new();

        for file in self.lister.list_files(textures_root)? {
            let Some(stem) = strip_png(&file) else {
                continue;
            };
            if self.rules.classify(&file) != class {
                continue;
            }

            let relative_path = self.rules.normalize(stem);
            let texture_id = IdScheme::Texture.derive(&relative_path);
            atlas.link_path(stem, texture_id.clone());
            atlas.insert(TextureRecord {
                texture_id,
                relative_path,
                source_file: file.clone(),
            });
        }

        tracing::debug!("Scanned {} {:?} textures", atlas.len(), class);
        Ok(atlas)
    }
}

/// `a/b.png` -> `a/b`; anything that is not a PNG -> `None`.
fn strip_png(file: &str) -> Option<&str> {
    let split = file.len().checked_sub(4)?;
    let (stem, ext) = (file.get(..split)?, file.get(split..)?);
    ext.eq_ignore_ascii_case(".png").then_some(stem)
}
