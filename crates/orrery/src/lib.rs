pub mod api;
pub mod assets;
pub mod catalog;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;
pub mod ui;

// Re-export key types at crate root for convenience
pub use api::config::SceneConfig;
pub use api::state::SceneState;
pub use api::types::{NodeId, Rgb, TextureId, UiEvent, UI_OVERLAY_HIDE, UI_OVERLAY_SHOW};
pub use assets::textures::{TextureRegistry, TextureRequest, TextureStatus};
pub use catalog::{Catalog, CelestialBodySpec, Surface};
pub use components::mesh::{BodyMesh, Material, Shape};
pub use core::graph::{LocalTransform, Node, NodeKind, SceneGraph};
pub use core::time::FrameClock;
pub use error::{CatalogError, Error};
pub use input::pointer::{PointerState, Viewport};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{CameraUniform, PerspectiveCamera, Ray};
pub use renderer::controls::OrbitControls;
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::animation::{advance, AnimationEntry, MotionState};
pub use systems::builder::{build_system, SolarSystem};
pub use systems::picking::{pick, Hit, Pickable, PickableRegistry};
pub use ui::{OverlayTimer, Tooltip};
