use glam::Vec2;

use crate::api::config::SceneConfig;
use crate::api::types::UiEvent;
use crate::assets::textures::TextureRegistry;
use crate::catalog::Catalog;
use crate::core::time::FrameClock;
use crate::input::pointer::{PointerState, Viewport};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::controls::OrbitControls;
use crate::renderer::instance::RenderBuffer;
use crate::systems::animation::{advance, MotionState};
use crate::systems::builder::{build_system, SolarSystem};
use crate::systems::picking::{pick, Hit, Pickable};
use crate::systems::render::build_render_buffer;
use crate::ui::{OverlayTimer, Tooltip};

/// All mutable scene state, owned in one place.
///
/// Input arrives through `push_input` and is applied at the start of the
/// next `frame`, so everything runs on the single frame task.
pub struct SceneState {
    pub config: SceneConfig,
    pub system: SolarSystem,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub viewport: Viewport,
    pub pointer: PointerState,
    pub motion: MotionState,
    pub tooltip: Tooltip,
    pub overlay: OverlayTimer,
    pub textures: TextureRegistry,
    pub render_buffer: RenderBuffer,
    /// UI signals produced during the latest frame.
    pub events: Vec<UiEvent>,
    /// Signals raised outside a frame, delivered with the next one.
    pending_events: Vec<UiEvent>,
    clock: FrameClock,
    input: InputQueue,
}

impl SceneState {
    pub fn new(catalog: &Catalog, config: SceneConfig, width: f32, height: f32) -> Self {
        let viewport = Viewport::new(width, height);
        let mut textures = TextureRegistry::new();
        let system = build_system(catalog, &config, &mut textures);
        let camera = PerspectiveCamera::new(&config.camera, viewport.aspect());
        let controls = OrbitControls::from_camera(&camera, &config.controls);
        let overlay = OverlayTimer::new(config.overlay.duration_ms);

        let mut state = Self {
            config,
            system,
            camera,
            controls,
            viewport,
            pointer: PointerState::default(),
            motion: MotionState::default(),
            tooltip: Tooltip::default(),
            overlay,
            textures,
            render_buffer: RenderBuffer::new(),
            events: Vec::new(),
            pending_events: Vec::new(),
            clock: FrameClock::new(),
            input: InputQueue::new(),
        };
        build_render_buffer(&state.system.graph, &state.textures, &mut state.render_buffer);
        state
    }

    /// Stock planets with default configuration.
    pub fn stock(width: f32, height: f32) -> Self {
        Self::new(&Catalog::stock(), SceneConfig::default(), width, height)
    }

    /// Replace the scene contents with a new catalog. Camera, pause state
    /// and already-requested textures are kept.
    pub fn rebuild(&mut self, catalog: &Catalog) {
        if self.overlay.is_visible() {
            log::debug!("overlay dismissed by catalog rebuild");
            self.pending_events.push(UiEvent::overlay_hide());
        }
        self.system = build_system(catalog, &self.config, &mut self.textures);
        self.overlay = OverlayTimer::new(self.config.overlay.duration_ms);
        self.tooltip = Tooltip::default();
        build_render_buffer(&self.system.graph, &self.textures, &mut self.render_buffer);
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent, at_ms: f64) {
        self.input.push(event, at_ms);
    }

    /// Run one frame: apply queued input, advance orbits, update the
    /// camera, expire the overlay and rebuild the render buffer.
    pub fn frame(&mut self, now_ms: f64) {
        self.events.clear();
        self.events.append(&mut self.pending_events);
        for queued in self.input.drain() {
            self.dispatch(queued.event, queued.at_ms);
        }

        let dt = self.clock.tick(now_ms);
        advance(&mut self.system.graph, &self.system.animations, dt, self.motion.is_paused());
        self.controls.update(&mut self.camera, dt);

        if self.overlay.poll(now_ms) {
            log::debug!("overlay hidden at {} ms", now_ms);
            self.events.push(UiEvent::overlay_hide());
        }

        build_render_buffer(&self.system.graph, &self.textures, &mut self.render_buffer);
    }

    /// Apply one input event immediately.
    pub fn dispatch(&mut self, event: InputEvent, at_ms: f64) {
        match event {
            InputEvent::PointerMove { x, y } => {
                let pos = self.track_pointer(x, y);
                if self.controls.is_dragging() {
                    self.controls.drag_to(pos);
                }
                self.refresh_tooltip();
            }
            InputEvent::PointerDown { x, y } => {
                let pos = self.track_pointer(x, y);
                self.motion = self.motion.on_pointer_down();
                self.controls.begin_drag(pos);
                log::debug!("paused at {} ms", at_ms);
            }
            InputEvent::PointerUp { x, y } => {
                self.track_pointer(x, y);
                self.motion = self.motion.on_pointer_up();
                self.controls.end_drag();
                log::debug!("resumed at {} ms", at_ms);
            }
            InputEvent::Click { x, y } => {
                self.track_pointer(x, y);
                let Some(hit) = self.pick_at_pointer() else { return };
                let is_target = self
                    .system
                    .pickables
                    .get(hit.index)
                    .is_some_and(|p| p.name == self.config.overlay.target);
                if is_target {
                    self.overlay.trigger(at_ms, hit.index);
                    self.events.push(UiEvent::overlay_show(hit.index));
                }
            }
            InputEvent::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
                self.camera.set_viewport(width, height);
            }
            InputEvent::Wheel { delta } => {
                self.controls.zoom(delta);
            }
        }
    }

    pub fn is_paused(&self) -> bool {
        self.motion.is_paused()
    }

    /// The body whose overlay is currently up, if any.
    pub fn overlay_body(&self) -> Option<&Pickable> {
        self.overlay.body().and_then(|i| self.system.pickables.get(i))
    }

    /// Pick against the last known pointer position.
    pub fn pick_at_pointer(&self) -> Option<Hit> {
        pick(&self.pointer, &self.system.pickables, &self.camera, &self.system.graph)
    }

    fn track_pointer(&mut self, x: f32, y: f32) -> Vec2 {
        let pos = Vec2::new(x, y);
        self.pointer = PointerState::from_pixels(pos, &self.viewport);
        pos
    }

    fn refresh_tooltip(&mut self) {
        let offset = Vec2::from_array(self.config.tooltip_offset);
        let label = self
            .pick_at_pointer()
            .and_then(|hit| self.system.pickables.get(hit.index))
            .map(Pickable::label);
        match label {
            Some(text) => self.tooltip.show(text, self.pointer.pixel, offset),
            None => self.tooltip.hide(self.pointer.pixel, offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{UI_OVERLAY_HIDE, UI_OVERLAY_SHOW};

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    /// Pixel position of a named body's centre on screen.
    fn screen_of(state: &SceneState, name: &str) -> (f32, f32) {
        let node = state.system.graph.find_by_tag(name).unwrap();
        let world = state.system.graph.world_position(node).unwrap();
        let ndc = state.camera.world_to_ndc(world);
        ((ndc.x + 1.0) / 2.0 * W, (1.0 - ndc.y) / 2.0 * H)
    }

    fn click(state: &mut SceneState, name: &str, at_ms: f64) {
        let (x, y) = screen_of(state, name);
        state.push_input(InputEvent::Click { x, y }, at_ms);
    }

    fn spins(state: &SceneState) -> Vec<f32> {
        state
            .system
            .animations
            .iter()
            .map(|e| state.system.graph.spin(e.node).unwrap())
            .collect()
    }

    #[test]
    fn hover_shows_and_hides_tooltip() {
        let mut state = SceneState::stock(W, H);
        let (x, y) = screen_of(&state, "Jupiter");
        state.push_input(InputEvent::PointerMove { x, y }, 0.0);
        state.frame(0.0);

        assert!(state.tooltip.visible);
        assert!(state.tooltip.text.starts_with("Jupiter: "));
        assert!((state.tooltip.screen_x - (x + 10.0)).abs() < 1e-3);
        assert!((state.tooltip.screen_y - (y + 10.0)).abs() < 1e-3);

        state.push_input(InputEvent::PointerMove { x: 2.0, y: 2.0 }, 16.0);
        state.frame(16.0);
        assert!(!state.tooltip.visible);
        assert!(state.tooltip.text.is_empty());
        assert_eq!((state.tooltip.screen_x, state.tooltip.screen_y), (12.0, 12.0));
    }

    #[test]
    fn hovering_the_sun_shows_nothing() {
        let mut state = SceneState::stock(W, H);
        let (x, y) = screen_of(&state, "Sun");
        state.push_input(InputEvent::PointerMove { x, y }, 0.0);
        state.frame(0.0);
        assert!(!state.tooltip.visible);
    }

    #[test]
    fn pointer_button_pauses_rotation_only() {
        let mut state = SceneState::stock(W, H);
        state.frame(0.0);
        state.frame(500.0);
        let running = spins(&state);
        assert!(running.iter().any(|&s| s > 0.0));

        state.push_input(InputEvent::PointerDown { x: 5.0, y: 5.0 }, 510.0);
        state.frame(516.0);
        assert!(state.is_paused());
        let paused = spins(&state);
        state.frame(2000.0);
        assert_eq!(spins(&state), paused);
        assert!(state.render_buffer.instance_count() > 0, "still rendering while paused");

        state.push_input(InputEvent::PointerUp { x: 5.0, y: 5.0 }, 2010.0);
        state.frame(2016.0);
        assert!(!state.is_paused());
        state.frame(2500.0);
        assert_ne!(spins(&state), paused);
    }

    #[test]
    fn clicking_mars_shows_overlay() {
        let mut state = SceneState::stock(W, H);
        click(&mut state, "Mars", 0.0);
        state.frame(0.0);

        assert!(state.overlay.is_visible());
        assert_eq!(state.overlay_body().map(|p| p.name.as_str()), Some("Mars"));
        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].kind, UI_OVERLAY_SHOW);
        assert_eq!(state.events[0].a, 3.0);
    }

    #[test]
    fn clicking_other_planets_does_nothing() {
        let mut state = SceneState::stock(W, H);
        click(&mut state, "Jupiter", 0.0);
        state.push_input(InputEvent::Click { x: 1.0, y: 1.0 }, 1.0);
        state.frame(0.0);
        assert!(!state.overlay.is_visible());
        assert!(state.events.is_empty());
    }

    #[test]
    fn overlay_rearms_on_second_click() {
        let mut state = SceneState::stock(W, H);
        click(&mut state, "Mars", 0.0);
        state.frame(0.0);
        state.frame(3000.0);

        click(&mut state, "Mars", 3000.0);
        state.frame(3016.0);
        assert_eq!(state.events.iter().filter(|e| e.kind == UI_OVERLAY_SHOW).count(), 1);

        state.frame(5000.0);
        assert!(state.overlay.is_visible(), "first deadline must be replaced");
        assert!(state.events.is_empty());

        state.frame(7999.0);
        assert!(state.overlay.is_visible());

        state.frame(8000.0);
        assert!(!state.overlay.is_visible());
        assert_eq!(state.events, vec![UiEvent::overlay_hide()]);
        assert_eq!(state.events[0].kind, UI_OVERLAY_HIDE);
    }

    #[test]
    fn resize_updates_camera_aspect() {
        let mut state = SceneState::stock(W, H);
        state.push_input(InputEvent::Resize { width: 1000.0, height: 500.0 }, 0.0);
        state.frame(0.0);
        assert_eq!(state.viewport, Viewport::new(1000.0, 500.0));
        assert!((state.camera.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn wheel_zooms_camera_in() {
        let mut state = SceneState::stock(W, H);
        let before = (state.camera.eye - state.camera.target).length();
        state.push_input(InputEvent::Wheel { delta: 3.0 }, 0.0);
        state.frame(0.0);
        state.frame(1000.0);
        let after = (state.camera.eye - state.camera.target).length();
        assert!(after < before, "{} should be < {}", after, before);
    }

    #[test]
    fn rebuild_hides_a_visible_overlay() {
        let mut state = SceneState::stock(W, H);
        click(&mut state, "Mars", 0.0);
        state.frame(0.0);
        state.rebuild(&Catalog::stock());
        assert!(!state.overlay.is_visible());

        let mut shows = 1;
        let mut hides = 0;
        for now in [1000.0, 5000.0, 6000.0, 20000.0] {
            state.frame(now);
            shows += state.events.iter().filter(|e| e.kind == UI_OVERLAY_SHOW).count();
            hides += state.events.iter().filter(|e| e.kind == UI_OVERLAY_HIDE).count();
        }
        assert_eq!(shows, 1);
        assert_eq!(hides, 1, "every show must be matched by one hide");
    }

    #[test]
    fn rebuild_without_overlay_emits_nothing() {
        let mut state = SceneState::stock(W, H);
        state.frame(0.0);
        state.rebuild(&Catalog::stock());
        state.frame(16.0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn rebuild_replaces_bodies() {
        let mut state = SceneState::stock(W, H);
        let json = r#"{ "bodies": [
            { "name": "Solo", "orbit_radius": 12.0, "body_radius": 1.0,
              "color": { "r": 1.0, "g": 1.0, "b": 1.0 }, "rotation_speed": 0.01 }
        ] }"#;
        state.rebuild(&Catalog::from_json(json).unwrap());
        assert_eq!(state.system.pickables.len(), 1);
        assert_eq!(state.system.animations.len(), 1);
        // Sun + Solo.
        assert_eq!(state.render_buffer.instance_count(), 2);
    }
}
