use serde::Deserialize;

use crate::api::types::Rgb;
use crate::error::Error;

/// Scene-wide tunables. Every field has a default so a partial JSON object
/// (or none at all) produces a working scene.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub sun: SunConfig,
    pub moon: MoonConfig,
    pub rings: RingConfig,
    /// Pixel offset of the tooltip from the pointer.
    pub tooltip_offset: [f32; 2],
    pub overlay: OverlayConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
            sun: SunConfig::default(),
            moon: MoonConfig::default(),
            rings: RingConfig::default(),
            tooltip_offset: [10.0, 10.0],
            overlay: OverlayConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Perspective camera placement.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub eye: [f32; 3],
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            eye: [0.0, 50.0, 100.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Radians of rotation per dragged pixel.
    pub rotate_speed: f32,
    /// Multiplicative distance change per wheel notch.
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Per-60th-of-a-second damping factor (0 = snap, 0.9 = sluggish).
    pub damping: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotate_speed: 0.005,
            zoom_step: 1.1,
            min_distance: 10.0,
            max_distance: 400.0,
            damping: 0.75,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub radius: f32,
    pub color: Rgb,
    pub texture: Option<String>,
    pub emissive: f32,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            color: Rgb::hex(0xffdd33),
            texture: Some("textures/sun.jpg".to_string()),
            emissive: 1.0,
        }
    }
}

/// Moon parameters shared by every planet flagged `has_moon`.
/// The speed is independent of the parent's catalog speed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MoonConfig {
    pub distance: f32,
    pub radius: f32,
    pub speed: f32,
    pub color: Rgb,
}

impl Default for MoonConfig {
    fn default() -> Self {
        Self {
            distance: 2.0,
            radius: 0.27,
            speed: 0.05,
            color: Rgb::hex(0xcccccc),
        }
    }
}

/// Ring radii are multiples of the owning planet's body radius.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub inner_factor: f32,
    pub outer_factor: f32,
    pub color: Rgb,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            inner_factor: 1.2,
            outer_factor: 2.0,
            color: Rgb::hex(0xc2b280),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// How long the overlay stays up after the latest qualifying click.
    pub duration_ms: f64,
    /// Body name whose click raises the overlay.
    pub target: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5000.0,
            target: "Mars".to_string(),
        }
    }
}
