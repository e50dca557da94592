use bytemuck::{Pod, Zeroable};

/// `shape` value for spheres.
pub const SHAPE_SPHERE: f32 = 0.0;
/// `shape` value for flat rings.
pub const SHAPE_RING: f32 = 1.0;
/// `texture` value meaning "shade with `color`".
pub const NO_TEXTURE: f32 = -1.0;

/// Per-mesh render data read by the page renderer straight out of WASM memory.
/// Must match the TypeScript layout: 24 floats = 96 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// World matrix, column-major.
    pub model: [[f32; 4]; 4],
    /// Base colour (fallback while the texture is unresolved).
    pub color: [f32; 3],
    /// Texture id, or `NO_TEXTURE` when none is ready.
    pub texture: f32,
    /// `SHAPE_SPHERE` or `SHAPE_RING`.
    pub shape: f32,
    /// Sphere radius, or ring outer radius.
    pub radius: f32,
    /// Ring inner radius (0 for spheres).
    pub inner_radius: f32,
    pub emissive: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 24;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl Default for RenderInstance {
    fn default() -> Self {
        Self {
            model: [[0.0; 4]; 4],
            color: [0.0; 3],
            texture: NO_TEXTURE,
            shape: SHAPE_SPHERE,
            radius: 0.0,
            inner_radius: 0.0,
            emissive: 0.0,
        }
    }
}

/// Render buffer containing one instance per visible mesh.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
