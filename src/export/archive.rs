//! ZIP packaging of an output tree.

use crate::error::{ConverterError, Result};
use std::fs::File;
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Package every file below `source_dir` into a ZIP at `zip_path`.
///
/// Entries are stored relative to `source_dir` with `/` separators, in
/// lexicographic order. Directory entries are not written. Returns the
/// number of files stored.
pub fn package_directory(source_dir: &Path, zip_path: &Path) -> Result<usize> {
    let packaging = |source: zip::result::ZipError| ConverterError::Packaging {
        path: zip_path.to_path_buf(),
        source,
    };

    if let Some(parent) = zip_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(zip_path).map_err(|e| packaging(e.into()))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut count = 0;
    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(source_dir) else {
            continue;
        };
        let name = relative.to_string_lossy().replace('\\', "/");

        zip.start_file(name, options).map_err(packaging)?;
        let mut input = File::open(entry.path())?;
        std::io::copy(&mut input, &mut zip)?;
        count += 1;
    }

    zip.finish().map_err(packaging)?;
    tracing::info!("Packaged {} files into {}", count, zip_path.display());
    Ok(count)
}
