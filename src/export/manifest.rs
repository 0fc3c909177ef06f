//! Bedrock resource pack manifest.json.

use super::write_json;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pack and module version written to every manifest.
pub const PACK_VERSION: [u32; 3] = [1, 0, 0];
/// Oldest Bedrock engine the pack targets.
pub const MIN_ENGINE_VERSION: [u32; 3] = [1, 16, 0];

/// Top-level manifest.json structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackManifest {
    pub format_version: u32,
    pub header: ManifestHeader,
    pub modules: Vec<ManifestModule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub name: String,
    pub description: String,
    pub uuid: String,
    /// Semantic version as `[major, minor, patch]`.
    pub version: [u32; 3],
    pub min_engine_version: [u32; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestModule {
    #[serde(rename = "type")]
    pub module_type: String,
    pub uuid: String,
    pub version: [u32; 3],
}

impl PackManifest {
    /// A resources manifest with fresh header and module UUIDs.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            format_version: 2,
            header: ManifestHeader {
                name: name.to_string(),
                description: description.to_string(),
                uuid: uuid::Uuid::new_v4().to_string(),
                version: PACK_VERSION,
                min_engine_version: MIN_ENGINE_VERSION,
            },
            modules: vec![ManifestModule {
                module_type: "resources".to_string(),
                uuid: uuid::Uuid::new_v4().to_string(),
                version: PACK_VERSION,
            }],
        }
    }
}

/// Write `manifest.json` into `pack_dir`.
pub fn write_manifest(pack_dir: &Path, name: &str, description: &str) -> Result<PackManifest> {
    let manifest = PackManifest::new(name, description);
    write_json(&pack_dir.join("manifest.json"), &manifest)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_uuids() {
        let manifest = PackManifest::new("Pack", "Desc");
        assert_ne!(manifest.header.uuid, manifest.modules[0].uuid);
        assert!(uuid::Uuid::parse_str(&manifest.header.uuid).is_ok());
        assert_eq!(manifest.modules[0].module_type, "resources");
    }

    #[test]
    fn test_written_manifest_shape() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_manifest(dir.path(), "Pack", "Converted").unwrap();

        let json = std::fs::read_to_string(dir.path().join("manifest.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["format_version"], 2);
        assert_eq!(value["header"]["version"], serde_json::json!([1, 0, 0]));
        assert_eq!(value["header"]["min_engine_version"], serde_json::json!([1, 16, 0]));
        assert_eq!(value["modules"][0]["type"], "resources");

        let read: PackManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(read.header.uuid, written.header.uuid);
    }
}
