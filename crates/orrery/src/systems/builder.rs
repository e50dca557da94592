//! Orbit graph builder. Turns catalog entries into the scene hierarchy.
//!
//! Per planet:
//! ```text
//! root
//!  └─ <name>-orbit        (Orbit, animated)
//!      └─ <name>          (Body, offset (orbit_radius, 0, 0), pickable)
//!          ├─ <name>-moon-orbit   (Orbit, animated, only with has_moon)
//!          │   └─ <name>-moon     (Moon, offset (moon.distance, 0, 0))
//!          └─ <name>-rings        (Ring, tilted 90° about X, only with has_rings)
//! ```
//! The sun is a separate root at the origin: never animated, never pickable.

use std::collections::HashSet;
use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::api::config::SceneConfig;
use crate::api::types::NodeId;
use crate::assets::textures::TextureRegistry;
use crate::catalog::{Catalog, CelestialBodySpec, Surface};
use crate::components::mesh::{BodyMesh, Material};
use crate::core::graph::{LocalTransform, Node, NodeKind, SceneGraph};
use crate::error::CatalogError;
use crate::systems::animation::AnimationEntry;
use crate::systems::picking::{Pickable, PickableRegistry};

/// Everything the builder produces.
#[derive(Debug, Default)]
pub struct SolarSystem {
    pub graph: SceneGraph,
    pub sun: Option<NodeId>,
    /// Top-level orbit pivot of each accepted planet, in catalog order.
    pub orbits: Vec<NodeId>,
    pub animations: Vec<AnimationEntry>,
    pub pickables: PickableRegistry,
    /// Entries skipped by validation.
    pub rejected: Vec<CatalogError>,
}

/// Build the whole system. Invalid entries are skipped and reported in
/// `rejected`; they never abort the build.
pub fn build_system(catalog: &Catalog, config: &SceneConfig, textures: &mut TextureRegistry) -> SolarSystem {
    let mut system = SolarSystem::default();

    system.sun = Some(build_sun(&mut system.graph, config, textures));

    if !catalog.orbit_radii_increasing() {
        log::warn!("catalog orbit radii are not strictly increasing");
    }

    let mut seen = HashSet::new();
    for spec in catalog.iter() {
        let checked = spec.validate().and_then(|()| {
            if seen.insert(spec.name.as_str()) {
                Ok(())
            } else {
                Err(CatalogError::DuplicateName(spec.name.clone()))
            }
        });
        match checked {
            Ok(()) => build_planet(&mut system, spec, config, textures),
            Err(err) => {
                log::warn!("skipping catalog entry: {}", err);
                system.rejected.push(err);
            }
        }
    }

    log::info!(
        "built {} planets ({} animated orbits, {} pickable, {} rejected)",
        system.orbits.len(),
        system.animations.len(),
        system.pickables.len(),
        system.rejected.len(),
    );
    system
}

fn build_sun(graph: &mut SceneGraph, config: &SceneConfig, textures: &mut TextureRegistry) -> NodeId {
    let sun = &config.sun;
    let material = match &sun.texture {
        Some(url) => Material::textured(textures.request(url), sun.color),
        None => Material::solid(sun.color),
    }
    .with_emissive(sun.emissive);

    graph.add_root(Node::new("Sun", NodeKind::Sun).with_mesh(BodyMesh::sphere(sun.radius, material)))
}

fn resolve_material(spec: &CelestialBodySpec, textures: &mut TextureRegistry) -> Material {
    let fallback = spec.color.unwrap_or_default();
    match spec.surface() {
        Some(Surface::Texture(url)) => Material::textured(textures.request(url), fallback),
        Some(Surface::Color(color)) => Material::solid(color),
        None => Material::solid(fallback),
    }
}

fn build_planet(system: &mut SolarSystem, spec: &CelestialBodySpec, config: &SceneConfig, textures: &mut TextureRegistry) {
    let graph = &mut system.graph;
    let material = resolve_material(spec, textures);

    let orbit = graph.add_root(Node::new(format!("{}-orbit", spec.name), NodeKind::Orbit));
    let body = graph.add_child(
        orbit,
        Node::new(spec.name.clone(), NodeKind::Body)
            .with_local(LocalTransform::from_translation(Vec3::new(spec.orbit_radius, 0.0, 0.0)))
            .with_mesh(BodyMesh::sphere(spec.body_radius, material)),
    );

    system.pickables.push(Pickable {
        node: body,
        name: spec.name.clone(),
        fun_fact: spec.fun_fact.clone(),
    });
    system.animations.push(AnimationEntry {
        node: orbit,
        speed: spec.rotation_speed,
    });
    system.orbits.push(orbit);

    if spec.has_moon {
        let moon = &config.moon;
        // Parented under the planet mesh, so it follows the planet around.
        let moon_orbit = graph.add_child(body, Node::new(format!("{}-moon-orbit", spec.name), NodeKind::Orbit));
        graph.add_child(
            moon_orbit,
            Node::new(format!("{}-moon", spec.name), NodeKind::Moon)
                .with_local(LocalTransform::from_translation(Vec3::new(moon.distance, 0.0, 0.0)))
                .with_mesh(BodyMesh::sphere(moon.radius, Material::solid(moon.color))),
        );
        system.animations.push(AnimationEntry {
            node: moon_orbit,
            speed: moon.speed,
        });
    }

    if spec.has_rings {
        let rings = &config.rings;
        graph.add_child(
            body,
            Node::new(format!("{}-rings", spec.name), NodeKind::Ring)
                .with_local(LocalTransform::new().with_tilt(Quat::from_rotation_x(FRAC_PI_2)))
                .with_mesh(BodyMesh::ring(
                    spec.body_radius * rings.inner_factor,
                    spec.body_radius * rings.outer_factor,
                    Material::solid(rings.color),
                )),
        );
    }
}
