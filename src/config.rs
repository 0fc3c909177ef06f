//! Converter configuration.

use crate::atlas::ClassifierRules;
use crate::mapping::MappingTables;
use crate::resource_pack::AssetDefaults;

/// Main converter configuration.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Name of the output pack directory, ZIP file and atlas `resource_pack_name`.
    pub pack_name: String,
    /// Description written into the pack manifest.
    pub pack_description: String,
    /// Package the pack directory into `<pack_name>.zip`.
    pub create_zip: bool,
    /// Materials for assets that do not declare one.
    pub defaults: AssetDefaults,
    /// Texture classification and normalization rules.
    pub rules: ClassifierRules,
    /// Vanilla lookup tables for the mapping documents.
    pub tables: MappingTables,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            pack_name: "itemsadder-geyser-pack".to_string(),
            pack_description: "Converted ItemsAdder pack for Geyser".to_string(),
            create_zip: false,
            defaults: AssetDefaults::default(),
            rules: ClassifierRules::default(),
            tables: MappingTables::default(),
        }
    }
}

impl ConverterConfig {
    pub fn with_pack_name(mut self, name: impl Into<String>) -> Self {
        self.pack_name = name.into();
        self
    }

    pub fn with_zip(mut self, create_zip: bool) -> Self {
        self.create_zip = create_zip;
        self
    }
}
