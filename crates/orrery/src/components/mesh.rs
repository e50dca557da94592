use crate::api::types::{Rgb, TextureId};

/// Mesh primitive.
///
/// Rings are flat annuli lying in the local XY plane; the owning node's
/// tilt turns them into the equatorial plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Ring { inner: f32, outer: f32 },
}

/// Shading for a mesh.
///
/// `texture` is a handle into the `TextureRegistry`. Until the texture
/// resolves (or if it fails) the renderer shades with `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub texture: Option<TextureId>,
    /// Self-illumination (0.0 = lit only by the sun, 1.0 = fully bright).
    pub emissive: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Rgb::GREY,
            texture: None,
            emissive: 0.0,
        }
    }
}

impl Material {
    pub fn solid(color: Rgb) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn textured(texture: TextureId, fallback: Rgb) -> Self {
        Self {
            color: fallback,
            texture: Some(texture),
            emissive: 0.0,
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}

/// A renderable mesh attached to a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMesh {
    pub shape: Shape,
    pub material: Material,
}

impl BodyMesh {
    pub fn sphere(radius: f32, material: Material) -> Self {
        Self {
            shape: Shape::Sphere { radius },
            material,
        }
    }

    pub fn ring(inner: f32, outer: f32, material: Material) -> Self {
        Self {
            shape: Shape::Ring { inner, outer },
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textured_material_keeps_fallback_color() {
        let mat = Material::textured(TextureId(3), Rgb::hex(0x00ff00));
        assert_eq!(mat.texture, Some(TextureId(3)));
        assert_eq!(mat.color, Rgb::hex(0x00ff00));
    }
}
