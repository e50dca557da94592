//! Pointer-to-planet hit testing by ray/sphere intersection.

use crate::api::types::NodeId;
use crate::components::mesh::Shape;
use crate::core::graph::SceneGraph;
use crate::input::pointer::PointerState;
use crate::renderer::camera::{PerspectiveCamera, Ray};

/// A body eligible for picking, with its display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Pickable {
    /// Mesh node of the body.
    pub node: NodeId,
    pub name: String,
    pub fun_fact: String,
}

impl Pickable {
    /// Tooltip line: "name: fact".
    pub fn label(&self) -> String {
        format!("{}: {}", self.name, self.fun_fact)
    }
}

/// Flat, ordered list of pickable bodies. Built once; read-only after.
#[derive(Debug, Clone, Default)]
pub struct PickableRegistry {
    items: Vec<Pickable>,
}

impl PickableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pickable: Pickable) {
        self.items.push(pickable);
    }

    pub fn get(&self, index: usize) -> Option<&Pickable> {
        self.items.get(index)
    }

    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pickable> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into the `PickableRegistry`.
    pub index: usize,
    pub node: NodeId,
    /// Ray parameter of the intersection.
    pub distance: f32,
}

/// Cast a ray through the pointer and return the nearest registered body.
pub fn pick(
    pointer: &PointerState,
    registry: &PickableRegistry,
    camera: &PerspectiveCamera,
    graph: &SceneGraph,
) -> Option<Hit> {
    pick_ray(&camera.ray_from_ndc(pointer.ndc), registry, graph)
}

/// Nearest registry member along `ray`, if any.
///
/// Only sphere meshes are tested; a registered node without one is skipped.
pub fn pick_ray(ray: &Ray, registry: &PickableRegistry, graph: &SceneGraph) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for (index, pickable) in registry.iter().enumerate() {
        let Some(node) = graph.get(pickable.node) else { continue };
        let Some(Shape::Sphere { radius }) = node.mesh.map(|m| m.shape) else { continue };
        let Some(center) = graph.world_position(pickable.node) else { continue };

        if let Some(t) = ray.intersect_sphere(center, radius) {
            if best.map_or(true, |b| t < b.distance) {
                best = Some(Hit {
                    index,
                    node: pickable.node,
                    distance: t,
                });
            }
        }
    }
    best
}
