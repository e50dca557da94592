// core/graph.rs
//
// Transform hierarchy for the orrery: an arena of nodes addressed by NodeId.
//
// Usage:
//   let mut graph = SceneGraph::new();
//   let orbit = graph.add_root(Node::new("earth-orbit", NodeKind::Orbit));
//   let earth = graph.add_child(orbit, Node::new("Earth", NodeKind::Body)
//       .with_local(LocalTransform::from_translation(Vec3::new(20.0, 0.0, 0.0))));
//   graph.walk(|id, node, world| { /* emit draw data */ });

use glam::{Mat4, Quat, Vec3};
use crate::api::types::NodeId;
use crate::components::mesh::BodyMesh;

/// What a node stands for. Used for logging, rendering and tests only;
/// the transform math is the same for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The central body. A root with no orbit node.
    Sun,
    /// Pivot whose spin sweeps its children around its origin.
    Orbit,
    /// A planet mesh, offset from its orbit pivot.
    Body,
    /// A moon mesh, offset from its moon-orbit pivot.
    Moon,
    /// Decorative ring disc.
    Ring,
}

/// Local transform data for nodes in the hierarchy.
///
/// Local matrix = `T(translation) * R_y(spin) * tilt`.
/// `spin` is the only field the animation driver touches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    /// Position relative to parent.
    pub translation: Vec3,
    /// Fixed orientation applied beneath the spin (ring plane, axial tilt).
    pub tilt: Quat,
    /// Angle about the local vertical (Y) axis, radians.
    pub spin: f32,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            tilt: Quat::IDENTITY,
            spin: 0.0,
        }
    }
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn with_tilt(mut self, tilt: Quat) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.spin) * self.tilt, self.translation)
    }
}

/// A node in the scene graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// Name for lookup and logging (planet name for bodies).
    pub tag: String,
    pub kind: NodeKind,
    pub local: LocalTransform,
    /// Zero or one mesh; orbit pivots carry none.
    pub mesh: Option<BodyMesh>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(tag: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            tag: tag.into(),
            kind,
            local: LocalTransform::default(),
            mesh: None,
            parent: None,
            children: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_local(mut self, local: LocalTransform) -> Self {
        self.local = local;
        self
    }

    pub fn with_mesh(mut self, mesh: BodyMesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed transform hierarchy.
///
/// Nodes are never removed during a session, so a `NodeId` stays valid
/// for the lifetime of the graph that issued it.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    /// Nodes with no parent (top-level).
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level node.
    pub fn add_root(&mut self, node: Node) -> NodeId {
        let id = self.push(node, None);
        self.roots.push(id);
        id
    }

    /// Add a node beneath `parent`. An unknown parent makes the node a root.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        if parent.index() >= self.nodes.len() {
            log::warn!("add_child: unknown parent {:?}, attaching `{}` at root", parent, node.tag);
            return self.add_root(node);
        }
        let id = self.push(node, Some(parent));
        self.nodes[parent.index()].children.push(id);
        id
    }

    fn push(&mut self, mut node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Current spin angle of a node.
    pub fn spin(&self, id: NodeId) -> Option<f32> {
        self.get(id).map(|n| n.local.spin)
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.tag == tag)
            .map(|i| NodeId(i as u32))
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.kind == kind).count()
    }

    /// World matrix of one node, composed up the parent chain.
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.get(id)?;
        let mut world = node.local.matrix();
        while let Some(parent) = node.parent {
            node = self.get(parent)?;
            world = node.local.matrix() * world;
        }
        Some(world)
    }

    /// World-space origin of a node.
    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.world_matrix(id).map(|m| m.transform_point3(Vec3::ZERO))
    }

    /// Visit every node root-to-leaf with its world matrix.
    pub fn walk(&self, mut visit: impl FnMut(NodeId, &Node, &Mat4)) {
        for &root in &self.roots {
            self.walk_recursive(root, Mat4::IDENTITY, &mut visit);
        }
    }

    fn walk_recursive(&self, id: NodeId, parent_world: Mat4, visit: &mut impl FnMut(NodeId, &Node, &Mat4)) {
        let Some(node) = self.get(id) else { return };
        let world = parent_world * node.local.matrix();
        visit(id, node, &world);
        for &child in &node.children {
            self.walk_recursive(child, world, visit);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn parent_child_relationship() {
        let mut graph = SceneGraph::new();
        let pivot = graph.add_root(Node::new("pivot", NodeKind::Orbit));
        let body = graph.add_child(pivot, Node::new("body", NodeKind::Body));

        assert_eq!(graph.get(body).unwrap().parent(), Some(pivot));
        assert_eq!(graph.get(pivot).unwrap().children(), [body].as_slice());
        assert_eq!(graph.roots(), [pivot].as_slice());
    }

    #[test]
    fn child_offset_follows_parent_spin() {
        let mut graph = SceneGraph::new();
        let pivot = graph.add_root(Node::new("pivot", NodeKind::Orbit));
        let body = graph.add_child(
            pivot,
            Node::new("body", NodeKind::Body)
                .with_local(LocalTransform::from_translation(Vec3::new(10.0, 0.0, 0.0))),
        );

        assert!(approx(graph.world_position(body).unwrap(), Vec3::new(10.0, 0.0, 0.0)));

        // Quarter turn about +Y carries +X onto -Z.
        graph.get_mut(pivot).unwrap().local.spin = FRAC_PI_2;
        assert!(approx(graph.world_position(body).unwrap(), Vec3::new(0.0, 0.0, -10.0)));
    }

    #[test]
    fn nested_orbit_composes() {
        let mut graph = SceneGraph::new();
        let pivot = graph.add_root(Node::new("pivot", NodeKind::Orbit));
        let planet = graph.add_child(
            pivot,
            Node::new("planet", NodeKind::Body)
                .with_local(LocalTransform::from_translation(Vec3::new(10.0, 0.0, 0.0))),
        );
        let moon_pivot = graph.add_child(planet, Node::new("moon-pivot", NodeKind::Orbit));
        let moon = graph.add_child(
            moon_pivot,
            Node::new("moon", NodeKind::Moon)
                .with_local(LocalTransform::from_translation(Vec3::new(2.0, 0.0, 0.0))),
        );

        assert!(approx(graph.world_position(moon).unwrap(), Vec3::new(12.0, 0.0, 0.0)));

        graph.get_mut(moon_pivot).unwrap().local.spin = std::f32::consts::PI;
        assert!(approx(graph.world_position(moon).unwrap(), Vec3::new(8.0, 0.0, 0.0)));
    }

    #[test]
    fn walk_matches_world_matrix() {
        let mut graph = SceneGraph::new();
        let pivot = graph.add_root(
            Node::new("pivot", NodeKind::Orbit).with_local(LocalTransform::new().with_spin(0.7)),
        );
        let body = graph.add_child(
            pivot,
            Node::new("body", NodeKind::Body)
                .with_local(LocalTransform::from_translation(Vec3::new(5.0, 1.0, 0.0))),
        );

        let mut visited = Vec::new();
        graph.walk(|id, _, world| visited.push((id, world.transform_point3(Vec3::ZERO))));

        assert_eq!(visited.len(), 2);
        assert_eq!(visited[0].0, pivot);
        assert_eq!(visited[1].0, body);
        assert!(approx(visited[1].1, graph.world_position(body).unwrap()));
    }

    #[test]
    fn unknown_parent_becomes_root() {
        let mut graph = SceneGraph::new();
        let id = graph.add_child(NodeId(42), Node::new("stray", NodeKind::Body));
        assert!(graph.roots().contains(&id));
        assert_eq!(graph.get(id).unwrap().parent(), None);
    }

    #[test]
    fn find_by_tag() {
        let mut graph = SceneGraph::new();
        graph.add_root(Node::new("Sun", NodeKind::Sun));
        let mars = graph.add_root(Node::new("Mars", NodeKind::Body));
        assert_eq!(graph.find_by_tag("Mars"), Some(mars));
        assert_eq!(graph.find_by_tag("Pluto"), None);
    }
}
