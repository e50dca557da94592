use crate::assets::textures::TextureRegistry;
use crate::components::mesh::Shape;
use crate::core::graph::SceneGraph;
use crate::renderer::instance::{RenderBuffer, RenderInstance, NO_TEXTURE, SHAPE_RING, SHAPE_SPHERE};

/// Build the render buffer from the scene graph.
/// Emits one instance per mesh-bearing node, root-to-leaf. Textures that
/// are not ready yet render with the material's colour.
pub fn build_render_buffer(graph: &SceneGraph, textures: &TextureRegistry, buffer: &mut RenderBuffer) {
    buffer.clear();

    graph.walk(|_, node, world| {
        let Some(mesh) = node.mesh else { return };

        let (shape, radius, inner_radius) = match mesh.shape {
            Shape::Sphere { radius } => (SHAPE_SPHERE, radius, 0.0),
            Shape::Ring { inner, outer } => (SHAPE_RING, outer, inner),
        };
        let texture = match mesh.material.texture {
            Some(id) if textures.is_ready(id) => id.0 as f32,
            _ => NO_TEXTURE,
        };

        buffer.push(RenderInstance {
            model: world.to_cols_array_2d(),
            color: mesh.material.color.to_array(),
            texture,
            shape,
            radius,
            inner_radius,
            emissive: mesh.material.emissive,
        });
    });
}
