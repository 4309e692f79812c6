//! Marker material palette.
//!
//! Materials are pure data consumed verbatim by the renderer: CSS gradient
//! and shadow strings plus text color. The engine only carries the id.

use serde::{Deserialize, Serialize};

/// Visual material applied to a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub background: String,
    pub text_color: String,
    pub border: String,
    pub shadow_color: String,
    pub glow_effect: String,
}

impl Material {
    pub fn library() -> Self {
        Self {
            id: "library".to_string(),
            name: "Library".to_string(),
            background: "linear-gradient(135deg, #fee2e2, #dc2626, #991b1b)".to_string(),
            text_color: "#ffffff".to_string(),
            border: "3px solid rgba(220, 38, 38, 0.8)".to_string(),
            shadow_color: "rgba(220, 38, 38, 0.4)".to_string(),
            glow_effect: "0 0 30px rgba(220, 38, 38, 0.6), 0 0 60px rgba(220, 38, 38, 0.3)"
                .to_string(),
        }
    }

    pub fn author() -> Self {
        Self {
            id: "author".to_string(),
            name: "Authors".to_string(),
            background: "linear-gradient(135deg, #d1fae5, #10b981, #059669)".to_string(),
            text_color: "#ffffff".to_string(),
            border: "3px solid rgba(16, 185, 129, 0.8)".to_string(),
            shadow_color: "rgba(16, 185, 129, 0.4)".to_string(),
            glow_effect: "0 0 30px rgba(16, 185, 129, 0.6), 0 0 60px rgba(16, 185, 129, 0.3)"
                .to_string(),
        }
    }

    pub fn social() -> Self {
        Self {
            id: "social".to_string(),
            name: "Social Media".to_string(),
            background: "linear-gradient(135deg, #dbeafe, #3b82f6, #1d4ed8)".to_string(),
            text_color: "#ffffff".to_string(),
            border: "3px solid rgba(59, 130, 246, 0.8)".to_string(),
            shadow_color: "rgba(59, 130, 246, 0.4)".to_string(),
            glow_effect: "0 0 30px rgba(59, 130, 246, 0.6), 0 0 60px rgba(59, 130, 246, 0.3)"
                .to_string(),
        }
    }

    /// Returns the built-in materials.
    pub fn palette() -> Vec<Material> {
        vec![Self::library(), Self::author(), Self::social()]
    }

    /// Looks up a built-in material by id, falling back to the library red.
    pub fn by_id(id: &str) -> Material {
        Self::palette()
            .into_iter()
            .find(|m| m.id == id)
            .unwrap_or_else(Self::library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_ids_unique() {
        let palette = Material::palette();
        for (i, material) in palette.iter().enumerate() {
            for other in &palette[..i] {
                assert_ne!(material.id, other.id);
            }
        }
    }

    #[test]
    fn test_by_id_lookup_and_fallback() {
        assert_eq!(Material::by_id("social").name, "Social Media");
        assert_eq!(Material::by_id("unknown").id, "library");
    }
}
