use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Index of a node in the scene graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a texture slot in the `TextureRegistry`.
/// The page loader receives the numeric value alongside the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Linear RGB colour, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const GREY: Self = Self::new(0.6, 0.6, 0.6);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as f32 / 255.0,
            g: ((value >> 8) & 0xff) as f32 / 255.0,
            b: (value & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::GREY
    }
}

/// Overlay became visible. `a` = pickable index of the clicked body.
pub const UI_OVERLAY_SHOW: f32 = 1.0;
/// Overlay dismissal deadline elapsed.
pub const UI_OVERLAY_HIDE: f32 = 2.0;

/// A UI signal handed from Rust to the page script.
/// Generic container: `kind` identifies the signal, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct UiEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl UiEvent {
    pub const FLOATS: usize = 4;

    pub fn overlay_show(body: usize) -> Self {
        Self { kind: UI_OVERLAY_SHOW, a: body as f32, ..Default::default() }
    }

    pub fn overlay_hide() -> Self {
        Self { kind: UI_OVERLAY_HIDE, ..Default::default() }
    }
}
