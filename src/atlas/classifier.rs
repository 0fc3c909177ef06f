//! Path classification for relocated textures.
//!
//! Paths here are relative to the output `textures/` directory and use `/`
//! separators, e.g. `mypack/item/swords/ruby.png`. The first segment is the
//! namespace.

use crate::error::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Which atlas a texture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureClass {
    Item,
    Block,
    Neither,
}

/// Segment rules deciding [`TextureClass`] and id normalization.
#[derive(Debug, Clone)]
pub struct ClassifierRules {
    /// Folders marking item textures in any namespace.
    pub item_segments: Vec<String>,
    /// Folders marking item textures inside the internal namespace.
    pub internal_item_segments: Vec<String>,
    /// Folders marking block textures.
    pub block_segments: Vec<String>,
    /// Namespace ItemsAdder reserves for its own GUI and HUD assets.
    pub internal_namespace: String,
    /// Legacy item folder names rewritten during normalization.
    pub legacy_item_folders: Vec<String>,
    /// Folder name the legacy item folders are rewritten to.
    pub generated_folder: String,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            item_segments: strings(&["item", "items", "entity"]),
            internal_item_segments: strings(&["gui", "hud", "icons"]),
            block_segments: strings(&["block", "blocks"]),
            internal_namespace: "_iainternal".to_string(),
            legacy_item_folders: strings(&["item", "items"]),
            generated_folder: "ia_auto_gen".to_string(),
        }
    }
}

impl ClassifierRules {
    /// Classify a relative texture path. Item rules are checked first.
    pub fn classify(&self, relative: &str) -> TextureClass {
        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < 2 {
            return TextureClass::Neither;
        }
        let namespace = segments[0];
        let folders = &segments[1..segments.len() - 1];
        let has = |set: &[String]| folders.iter().any(|f| set.iter().any(|s| s == f));

        let internal = namespace == self.internal_namespace;
        let block = !internal && has(&self.block_segments);

        if has(&self.item_segments)
            || (internal && has(&self.internal_item_segments))
            || (internal && !block)
        {
            TextureClass::Item
        } else if block {
            TextureClass::Block
        } else {
            TextureClass::Neither
        }
    }

    /// Rewrite legacy item folders to the generated folder.
    ///
    /// `test/item/gem` -> `test/ia_auto_gen/gem`. The namespace and the file
    /// name are never rewritten.
    pub fn normalize(&self, relative: &str) -> String {
        let segments: Vec<&str> = relative.split('/').collect();
        let last = segments.len().saturating_sub(1);
        segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                if i > 0 && i < last && self.legacy_item_folders.iter().any(|l| l == segment) {
                    self.generated_folder.as_str()
                } else {
                    segment
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Lists files below a directory.
pub trait FileLister {
    /// Relative paths (`/`-separated) of every file below `root`, in a fixed
    /// order. A missing `root` lists nothing.
    fn list_files(&self, root: &Path) -> Result<Vec<String>>;
}

/// Lists files from disk in lexicographic order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl FileLister for FsLister {
    fn list_files(&self, root: &Path) -> Result<Vec<String>> {
        let mut files = Vec::new();
        if !root.is_dir() {
            return Ok(files);
        }
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(root) {
                files.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(files)
    }
}

/// A fixed file listing, independent of `root`.
#[derive(Debug, Clone, Default)]
pub struct StaticLister {
    pub files: Vec<String>,
}

impl StaticLister {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileLister for StaticLister {
    fn list_files(&self, _root: &Path) -> Result<Vec<String>> {
        Ok(self.files.clone())
    }
}
