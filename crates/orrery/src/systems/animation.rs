//! Advances orbit spins once per rendered frame.

use std::f32::consts::TAU;

use crate::api::types::NodeId;
use crate::core::graph::SceneGraph;

/// Speed constants are authored per frame at this rate.
pub const FRAME_RATE_BASELINE: f32 = 60.0;

/// One animated orbit pivot and its angular rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationEntry {
    pub node: NodeId,
    /// Radians per nominal 60 Hz frame.
    pub speed: f32,
}

/// Two-state pause machine driven by the pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Running,
    Paused,
}

impl MotionState {
    pub fn is_paused(self) -> bool {
        self == MotionState::Paused
    }

    /// Button pressed: Running → Paused.
    pub fn on_pointer_down(self) -> Self {
        MotionState::Paused
    }

    /// Button released: Paused → Running.
    pub fn on_pointer_up(self) -> Self {
        MotionState::Running
    }
}

/// Advance every entry by `speed * dt * 60` radians. No-op while paused.
///
/// Angles are kept in [0, TAU).
pub fn advance(graph: &mut SceneGraph, entries: &[AnimationEntry], dt: f32, paused: bool) {
    if paused {
        return;
    }
    for entry in entries {
        if let Some(node) = graph.get_mut(entry.node) {
            let spin = node.local.spin + entry.speed * dt * FRAME_RATE_BASELINE;
            node.local.spin = spin.rem_euclid(TAU);
        }
    }
}
