//! Locating the pieces of a source pack on disk.
//!
//! Supports both directories and ZIP files. A ZIP is extracted into a
//! temporary directory whose guard is handed back to the caller; dropping
//! the guard removes the extracted tree.

use crate::error::{ConverterError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Name of the declarative item definition document.
pub const DEFINITIONS_FILE: &str = "items.yml";

/// Places checked for the definition document before a full search.
const DEFINITION_CANDIDATES: &[&str] = &["items.yml", "contents/items.yml", "configs/items.yml"];

/// Subdirectories checked for a resource pack before a full search.
const RESOURCE_PACK_CANDIDATES: &[&str] = &[
    "resourcepack",
    "resource_pack",
    "rp",
    "contents/resourcepack",
];

/// A source pack opened for reading.
#[derive(Debug)]
pub struct OpenedInput {
    /// Directory holding the pack contents.
    pub root: PathBuf,
    /// Extraction directory, present when the input was a ZIP.
    pub scratch: Option<TempDir>,
}

/// Open a source pack from a file path.
///
/// Directories are used in place. Any other file is read as a ZIP archive
/// and extracted.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<OpenedInput> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConverterError::InputNotFound(path.to_path_buf()));
    }

    if path.is_dir() {
        return Ok(OpenedInput {
            root: path.to_path_buf(),
            scratch: None,
        });
    }

    let scratch = extract_zip(path)?;
    Ok(OpenedInput {
        root: scratch.path().to_path_buf(),
        scratch: Some(scratch),
    })
}

/// Extract a ZIP archive into a fresh temporary directory.
fn extract_zip(path: &Path) -> Result<TempDir> {
    let scratch = tempfile::Builder::new().prefix("iageyser_").tempdir()?;
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    archive.extract(scratch.path())?;

    tracing::debug!(
        "Extracted {} entries from {} into {}",
        archive.len(),
        path.display(),
        scratch.path().display()
    );
    Ok(scratch)
}

/// Find the directory that acts as the Java resource pack root.
///
/// In order: `root` itself if it has an `assets` folder, then the
/// conventional subdirectories, then the shallowest `assets` folder
/// anywhere below `root` that holds at least one namespace directory.
pub fn find_resource_root(root: &Path) -> Result<Option<PathBuf>> {
    if root.join("assets").is_dir() {
        return Ok(Some(root.to_path_buf()));
    }

    for candidate in RESOURCE_PACK_CANDIDATES {
        let path = root.join(candidate);
        if path.is_dir() {
            return Ok(Some(path));
        }
    }

    let mut best: Option<(usize, PathBuf)> = None;
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_dir() || entry.file_name() != "assets" {
            continue;
        }
        if best.as_ref().map(|(depth, _)| entry.depth() >= *depth).unwrap_or(false) {
            continue;
        }
        if has_subdirectory(entry.path())? {
            if let Some(parent) = entry.path().parent() {
                best = Some((entry.depth(), parent.to_path_buf()));
            }
        }
    }

    Ok(best.map(|(_, path)| path))
}

fn has_subdirectory(dir: &Path) -> Result<bool> {
    for entry in std::fs::read_dir(dir)? {
        if entry?.file_type()?.is_dir() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Find the declarative definition document, if the pack has one.
pub fn find_definitions(root: &Path) -> Result<Option<PathBuf>> {
    for candidate in DEFINITION_CANDIDATES {
        let path = root.join(candidate);
        if path.is_file() {
            return Ok(Some(path));
        }
    }

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name() == DEFINITIONS_FILE {
            return Ok(Some(entry.into_path()));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_input(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ConverterError::InputNotFound(_)));
    }

    #[test]
    fn test_root_with_assets() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets/test")).unwrap();
        fs::create_dir_all(dir.path().join("rp/assets/other")).unwrap();
        assert_eq!(find_resource_root(dir.path()).unwrap(), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_conventional_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("resource_pack")).unwrap();
        fs::create_dir_all(dir.path().join("rp")).unwrap();
        assert_eq!(
            find_resource_root(dir.path()).unwrap(),
            Some(dir.path().join("resource_pack"))
        );
    }

    #[test]
    fn test_search_prefers_shallowest_assets() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/deep/nest/assets/ns")).unwrap();
        fs::create_dir_all(dir.path().join("z/pack/assets/ns")).unwrap();
        // Empty assets folders do not count.
        fs::create_dir_all(dir.path().join("b/assets")).unwrap();
        assert_eq!(
            find_resource_root(dir.path()).unwrap(),
            Some(dir.path().join("z/pack"))
        );
    }

    #[test]
    fn test_no_resource_root() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("readme.txt"));
        assert_eq!(find_resource_root(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_find_definitions_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("deep/x/items.yml"));
        assert_eq!(
            find_definitions(dir.path()).unwrap(),
            Some(dir.path().join("deep/x/items.yml"))
        );

        touch(&dir.path().join("configs/items.yml"));
        assert_eq!(
            find_definitions(dir.path()).unwrap(),
            Some(dir.path().join("configs/items.yml"))
        );

        touch(&dir.path().join("items.yml"));
        assert_eq!(find_definitions(dir.path()).unwrap(), Some(dir.path().join("items.yml")));
    }

    #[test]
    fn test_zip_input_is_extracted_and_cleaned_up() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("pack.zip");
        {
            let file = File::create(&zip_path).unwrap();
            let mut zip = zip::ZipWriter::new(file);
            let options = zip::write::SimpleFileOptions::default();
            zip.start_file("items.yml", options).unwrap();
            zip.write_all(b"items: {}\n").unwrap();
            zip.finish().unwrap();
        }

        let opened = open_input(&zip_path).unwrap();
        let root = opened.root.clone();
        assert!(root.join("items.yml").is_file());
        drop(opened);
        assert!(!root.exists());
    }
}
