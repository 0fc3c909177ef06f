//! Copying Java textures and pass-through assets into the Bedrock layout.

use crate::error::Result;
use crate::resource_pack::texture::is_texture_file;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where a Java texture lands below the output `textures/` directory.
///
/// `<ns>/textures/<rest>` -> `<ns>/<rest>`. Anything outside a namespace's
/// `textures` folder has no destination.
pub fn destination(relative_to_assets: &Path) -> Option<PathBuf> {
    let mut components = relative_to_assets.components();
    let namespace = components.next()?;
    if components.next()?.as_os_str() != "textures" {
        return None;
    }
    let rest = components.as_path();
    if rest.as_os_str().is_empty() {
        return None;
    }
    Some(Path::new(namespace.as_os_str()).join(rest))
}

/// Copy every texture below `assets_dir` into `textures_root`.
///
/// Returns the number of files copied.
pub fn copy_textures(assets_dir: &Path, textures_root: &Path) -> Result<usize> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_texture_file(entry.path()) {
            continue;
        }
        let Some(target) = entry
            .path()
            .strip_prefix(assets_dir)
            .ok()
            .and_then(destination)
        else {
            continue;
        };

        let target = textures_root.join(target);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(entry.path(), &target)?;
        copied += 1;
    }

    tracing::info!("Copied {} textures", copied);
    Ok(copied)
}

/// Entries of the Java pack root mirrored into the output pack as-is.
pub const EXTRA_ASSETS: &[&str] = &["sounds", "sounds.json", "animations", "animation_controllers"];

/// Mirror the [`EXTRA_ASSETS`] present in `resource_root` into `pack_dir`.
///
/// Returns the number of files copied.
pub fn copy_extra_assets(resource_root: &Path, pack_dir: &Path) -> Result<usize> {
    let mut copied = 0;
    for name in EXTRA_ASSETS {
        let source = resource_root.join(name);
        if source.is_file() {
            std::fs::copy(&source, pack_dir.join(name))?;
            copied += 1;
        } else if source.is_dir() {
            for entry in WalkDir::new(&source).sort_by_file_name() {
                let entry = entry?;
                let Ok(relative) = entry.path().strip_prefix(resource_root) else {
                    continue;
                };
                let target = pack_dir.join(relative);
                if entry.file_type().is_dir() {
                    std::fs::create_dir_all(&target)?;
                } else if entry.file_type().is_file() {
                    std::fs::copy(entry.path(), &target)?;
                    copied += 1;
                }
            }
        }
    }

    if copied > 0 {
        tracing::info!("Copied {} sound and animation files", copied);
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_destination() {
        assert_eq!(
            destination(Path::new("test/textures/item/gem.png")),
            Some(PathBuf::from("test/item/gem.png"))
        );
        assert_eq!(destination(Path::new("test/models/item/gem.json")), None);
        assert_eq!(destination(Path::new("test/textures")), None);
        assert_eq!(destination(Path::new("gem.png")), None);
    }

    #[test]
    fn test_copy_only_textures() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        let out = dir.path().join("out/textures");
        for path in [
            "test/textures/item/gem.png",
            "test/textures/item/gem.png.mcmeta",
            "test/textures/block/ore.tga",
            "test/models/item/gem.json",
            "test/sounds.json",
        ] {
            let full = assets.join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, path).unwrap();
        }

        assert_eq!(copy_textures(&assets, &out).unwrap(), 2);
        assert_eq!(
            fs::read_to_string(out.join("test/item/gem.png")).unwrap(),
            "test/textures/item/gem.png"
        );
        assert!(out.join("test/block/ore.tga").is_file());
        assert!(!out.join("test/item/gem.png.mcmeta").exists());
    }

    #[test]
    fn test_copy_extra_assets() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("rp");
        let pack = dir.path().join("pack");
        fs::create_dir_all(&pack).unwrap();
        for path in [
            "sounds.json",
            "sounds/mob/roar.ogg",
            "animations/spin.json",
            "animation_controllers/spin.json",
            "pack.mcmeta",
            "models/other.json",
        ] {
            let full = root.join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, path).unwrap();
        }

        assert_eq!(copy_extra_assets(&root, &pack).unwrap(), 4);
        assert_eq!(fs::read_to_string(pack.join("sounds.json")).unwrap(), "sounds.json");
        assert!(pack.join("sounds/mob/roar.ogg").is_file());
        assert!(pack.join("animations/spin.json").is_file());
        assert!(pack.join("animation_controllers/spin.json").is_file());
        assert!(!pack.join("pack.mcmeta").exists());
        assert!(!pack.join("models").exists());
    }

    #[test]
    fn test_copy_extra_assets_none_present() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(copy_extra_assets(dir.path(), &dir.path().join("pack")).unwrap(), 0);
    }
}
