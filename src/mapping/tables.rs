//! Vanilla lookup tables used when emitting mappings.

use std::collections::HashMap;

/// Blocks whose spare block states carry custom blocks, with the state
/// strings handed out in order.
fn default_state_tables() -> HashMap<String, Vec<String>> {
    let notes = [20, 18, 16, 15, 17, 19, 21, 22, 23, 24];
    let note_block = notes
        .iter()
        .map(|n| format!("instrument=basedrum,note={},powered=false", n))
        .collect();

    let mushroom = [
        "down=false,east=false,north=false,south=false,up=false,west=false",
        "down=false,east=false,north=false,south=false,up=false,west=true",
        "down=false,east=true,north=false,south=false,up=false,west=false",
        "down=true,east=false,north=false,south=false,up=false,west=false",
        "down=false,east=false,north=true,south=false,up=false,west=false",
        "down=false,east=false,north=false,south=true,up=false,west=false",
        "down=false,east=false,north=false,south=false,up=true,west=false",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let mut tables = HashMap::new();
    tables.insert("minecraft:note_block".to_string(), note_block);
    tables.insert("minecraft:brown_mushroom_block".to_string(), mushroom);
    tables
}

/// Immutable tables consulted by the mapping emitter.
#[derive(Debug, Clone)]
pub struct MappingTables {
    /// Namespace prepended to bare material names.
    pub vanilla_namespace: String,
    /// Lowest custom model data value handed out.
    pub cmd_floor: i32,
    /// Prefix of the geometry id written into block state overrides.
    pub block_geometry_prefix: String,
    /// Vanilla block id -> state keys, cycled through per group.
    pub state_tables: HashMap<String, Vec<String>>,
}

impl Default for MappingTables {
    fn default() -> Self {
        Self {
            vanilla_namespace: "minecraft".to_string(),
            cmd_floor: 10000,
            block_geometry_prefix: "geometry.furnace".to_string(),
            state_tables: default_state_tables(),
        }
    }
}

impl MappingTables {
    /// Vanilla identifier for a material name: `DIAMOND` -> `minecraft:diamond`.
    ///
    /// Returns `None` for a blank material.
    pub fn vanilla_id(&self, material: &str) -> Option<String> {
        let material = material.trim().to_lowercase();
        if material.is_empty() {
            return None;
        }
        if material.contains(':') {
            Some(material)
        } else {
            Some(format!("{}:{}", self.vanilla_namespace, material))
        }
    }

    /// `minecraft:note_block` -> `note_block`.
    pub fn strip_vanilla_namespace<'a>(&self, vanilla_id: &'a str) -> &'a str {
        vanilla_id
            .strip_prefix(&self.vanilla_namespace)
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(vanilla_id)
    }

    /// State key for the block at `position` within its group.
    pub fn state_key(&self, vanilla_block_id: &str, position: usize) -> String {
        match self.state_tables.get(vanilla_block_id) {
            Some(table) if !table.is_empty() => table[position % table.len()].clone(),
            _ => format!("custom_state={}", position),
        }
    }

    /// Number of distinct state keys before a group starts reusing them.
    pub fn state_table_len(&self, vanilla_block_id: &str) -> Option<usize> {
        self.state_tables.get(vanilla_block_id).map(Vec::len)
    }
}
