//! Texture file predicates.

use std::path::Path;

/// File extensions treated as textures when copying packs.
pub const TEXTURE_EXTENSIONS: &[&str] = &["png", "tga"];

/// Whether `path` names a texture file.
///
/// Animation sidecars (`foo.png.mcmeta`) have the `mcmeta` extension and are
/// therefore rejected.
pub fn is_texture_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| TEXTURE_EXTENSIONS.iter().any(|t| e.eq_ignore_ascii_case(t)))
        .unwrap_or(false)
}

/// Read width and height from a PNG header without decoding the pixels.
///
/// Returns `None` for anything the decoder rejects.
pub fn texture_dimensions(path: &Path) -> Option<(u32, u32)> {
    match image::image_dimensions(path) {
        Ok(dims) => Some(dims),
        Err(e) => {
            tracing::debug!("Could not read dimensions of {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_texture_file() {
        assert!(is_texture_file(Path::new("a/b/gem.png")));
        assert!(is_texture_file(Path::new("a/b/gem.TGA")));
        assert!(!is_texture_file(Path::new("a/b/gem.png.mcmeta")));
        assert!(!is_texture_file(Path::new("a/b/gem.json")));
        assert!(!is_texture_file(Path::new("a/b/png")));
    }

    #[test]
    fn test_texture_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbaImage::new(32, 16).save(&path).unwrap();
        assert_eq!(texture_dimensions(&path), Some((32, 16)));

        let junk = dir.path().join("junk.png");
        std::fs::write(&junk, b"not a png").unwrap();
        assert_eq!(texture_dimensions(&junk), None);
    }
}
