use orrery::{
    Catalog, CameraUniform, InputEvent, SceneConfig, SceneState, TextureId, UiEvent,
};

/// Owns the scene and exposes flat data for the page script.
///
/// Lives in a `thread_local!` in `lib.rs`; wasm-bindgen exports are free
/// functions that borrow it.
pub struct SceneRunner {
    state: SceneState,
    /// Camera uniform, refreshed every frame.
    camera: CameraUniform,
    /// Label of the body behind the overlay, empty while hidden.
    overlay_text: String,
}

impl SceneRunner {
    pub fn new(config: SceneConfig, width: f32, height: f32) -> Self {
        let state = SceneState::new(&Catalog::stock(), config, width, height);
        let camera = state.camera.uniform();
        Self {
            state,
            camera,
            overlay_text: String::new(),
        }
    }

    /// Replace the planets with a catalog parsed from JSON.
    /// The current scene is kept when parsing fails.
    pub fn load_catalog(&mut self, json: &str) -> bool {
        match Catalog::from_json(json) {
            Ok(catalog) => {
                self.state.rebuild(&catalog);
                log::info!("loaded catalog with {} bodies", catalog.len());
                true
            }
            Err(e) => {
                log::error!("failed to parse catalog: {}", e);
                false
            }
        }
    }

    pub fn push_input(&mut self, event: InputEvent, at_ms: f64) {
        self.state.push_input(event, at_ms);
    }

    pub fn frame(&mut self, now_ms: f64) {
        self.state.frame(now_ms);
        self.camera = self.state.camera.uniform();
        self.overlay_text = self
            .state
            .overlay_body()
            .map(|p| p.label())
            .unwrap_or_default();
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.state.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.state.render_buffer.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        bytemuck::bytes_of(&self.camera).as_ptr() as *const f32
    }

    pub fn ui_events_ptr(&self) -> *const f32 {
        self.state.events.as_ptr() as *const f32
    }

    pub fn ui_events_len(&self) -> u32 {
        (self.state.events.len() * UiEvent::FLOATS) as u32
    }

    // ---- Tooltip / overlay ----

    pub fn tooltip_visible(&self) -> bool {
        self.state.tooltip.visible
    }

    pub fn tooltip_text(&self) -> String {
        self.state.tooltip.text.clone()
    }

    pub fn tooltip_x(&self) -> f32 {
        self.state.tooltip.screen_x
    }

    pub fn tooltip_y(&self) -> f32 {
        self.state.tooltip.screen_y
    }

    pub fn overlay_visible(&self) -> bool {
        self.state.overlay.is_visible()
    }

    pub fn overlay_text(&self) -> String {
        self.overlay_text.clone()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    // ---- Textures ----

    /// Pending texture loads as a JSON array of `{ id, url }`.
    pub fn take_texture_requests(&mut self) -> String {
        let requests = self.state.textures.take_requests();
        serde_json::to_string(&requests).unwrap_or_else(|e| {
            log::error!("failed to encode texture requests: {}", e);
            "[]".to_string()
        })
    }

    pub fn texture_loaded(&mut self, id: u32) {
        if !self.state.textures.mark_ready(TextureId(id)) {
            log::warn!("texture_loaded: unknown texture {}", id);
        }
    }

    pub fn texture_failed(&mut self, id: u32) {
        if !self.state.textures.mark_failed(TextureId(id)) {
            log::warn!("texture_failed: unknown texture {}", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_requests_are_handed_out_once() {
        let mut runner = SceneRunner::new(SceneConfig::default(), 800.0, 600.0);
        let first = runner.take_texture_requests();
        assert!(first.contains("textures/earth.jpg"));
        assert_eq!(runner.take_texture_requests(), "[]");
    }

    #[test]
    fn bad_catalog_keeps_scene() {
        let mut runner = SceneRunner::new(SceneConfig::default(), 800.0, 600.0);
        runner.frame(0.0);
        let count = runner.instance_count();
        assert!(!runner.load_catalog("not json"));
        runner.frame(16.0);
        assert_eq!(runner.instance_count(), count);
    }

    #[test]
    fn ui_events_len_counts_floats() {
        let mut runner = SceneRunner::new(SceneConfig::default(), 800.0, 600.0);
        runner.frame(0.0);
        assert_eq!(runner.ui_events_len(), 0);
        assert!(!runner.overlay_visible());
        assert!(runner.overlay_text().is_empty());
    }
}
