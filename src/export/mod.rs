//! Output document writers.
//!
//! This module writes the Bedrock pack manifest, placeholder attachables
//! and block geometry, and the final ZIP archive.

pub mod archive;
pub mod geometry;
pub mod manifest;

pub use archive::package_directory;
pub use geometry::{attachable_document, block_geometry_document};
pub use manifest::{write_manifest, PackManifest};

use crate::error::Result;
use std::path::Path;

/// Write `value` as pretty JSON, creating parent directories as needed.
pub fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
