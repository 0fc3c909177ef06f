//! Placeholder attachables and block geometry.
//!
//! These stand in for real model conversion: items get an attachable that
//! renders their texture, blocks get a plain full cube.

use serde_json::{json, Value};

/// Attachable for an item whose geometry id is `geometry_id`.
///
/// `texture_path` is relative to the pack root, without extension
/// (`textures/test/ia_auto_gen/gem`).
pub fn attachable_document(geometry_id: &str, texture_path: Option<&str>) -> Value {
    let texture = texture_path.unwrap_or("textures/misc/missing_texture");
    json!({
        "format_version": "1.10.0",
        "minecraft:attachable": {
            "description": {
                "identifier": format!("geyser_custom:{}", geometry_id),
                "materials": {
                    "default": "entity_alphatest",
                    "enchanted": "entity_alphatest_glint"
                },
                "textures": {
                    "default": texture,
                    "enchanted": "textures/misc/enchanted_item_glint"
                },
                "geometry": {
                    "default": format!("geometry.{}", geometry_id)
                },
                "render_controllers": ["controller.render.item_default"]
            }
        }
    })
}

/// A 16x16x16 cube named `geometry.<geometry_id>`, box-UV mapped onto a
/// texture of the given size.
pub fn block_geometry_document(geometry_id: &str, texture_size: (u32, u32)) -> Value {
    let (width, height) = texture_size;
    json!({
        "format_version": "1.12.0",
        "minecraft:geometry": [{
            "description": {
                "identifier": format!("geometry.{}", geometry_id),
                "texture_width": width,
                "texture_height": height,
                "visible_bounds_width": 2,
                "visible_bounds_height": 2.5,
                "visible_bounds_offset": [0, 0.75, 0]
            },
            "bones": [{
                "name": "block",
                "pivot": [0, 0, 0],
                "cubes": [{
                    "origin": [-8, 0, -8],
                    "size": [16, 16, 16],
                    "uv": [0, 0]
                }]
            }]
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachable() {
        let doc = attachable_document("test_gem_fabc", Some("textures/test/ia_auto_gen/gem"));
        let description = &doc["minecraft:attachable"]["description"];
        assert_eq!(description["identifier"], "geyser_custom:test_gem_fabc");
        assert_eq!(description["geometry"]["default"], "geometry.test_gem_fabc");
        assert_eq!(description["textures"]["default"], "textures/test/ia_auto_gen/gem");

        let doc = attachable_document("x", None);
        assert_eq!(
            doc["minecraft:attachable"]["description"]["textures"]["default"],
            "textures/misc/missing_texture"
        );
    }

    #[test]
    fn test_block_geometry() {
        let doc = block_geometry_document("test_ore_fabc", (32, 32));
        let geometry = &doc["minecraft:geometry"][0];
        assert_eq!(geometry["description"]["identifier"], "geometry.test_ore_fabc");
        assert_eq!(geometry["description"]["texture_width"], 32);
        assert_eq!(geometry["bones"][0]["cubes"][0]["size"], json!([16, 16, 16]));
    }
}
