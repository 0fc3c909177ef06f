//! Short hashed identifiers shared by atlases, geometry and mappings.
//!
//! Every generated identifier is some prefix plus the first
//! [`HASH_PREFIX_LEN`] hex characters of a SHA-256 digest. The atlas writer
//! and the mapping emitter both call into this module, which is what keeps
//! the ids in `item_texture.json` and `items.json` in agreement.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const HASH_PREFIX_LEN: usize = 11;

/// First [`HASH_PREFIX_LEN`] hex characters of the SHA-256 of `input`.
pub fn hash_prefix(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(HASH_PREFIX_LEN);
    hex
}

/// The naming conventions built on top of [`hash_prefix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScheme {
    /// `namespace_f<hash>` over a normalized texture path such as
    /// `test/ia_auto_gen/gem`. The namespace is the first path segment.
    Texture,
    /// `t<hash>` over a texture path. Used for block textures that never
    /// made it into the scanned terrain records.
    Terrain,
    /// `namespace_f<hash>` over a full id (`namespace:local`). Used when an
    /// item has no texture at all.
    Asset,
    /// `namespace_local_f<hash>` over a full id. Names attachables and block
    /// geometry files.
    Geometry,
}

impl IdScheme {
    /// Derive the identifier for `input` under this scheme.
    pub fn derive(&self, input: &str) -> String {
        let hash = hash_prefix(input);
        match self {
            IdScheme::Texture => {
                let namespace = input.split('/').next().unwrap_or(input);
                format!("{}_f{}", namespace, hash)
            }
            IdScheme::Terrain => format!("t{}", hash),
            IdScheme::Asset => {
                let namespace = input.split_once(':').map(|(ns, _)| ns).unwrap_or("unknown");
                format!("{}_f{}", namespace, hash)
            }
            IdScheme::Geometry => format!("{}_f{}", input.replace(':', "_"), hash),
        }
    }
}
