/// Input events the scene understands, in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// A button was pressed at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A button was released at (x, y).
    PointerUp { x: f32, y: f32 },
    /// A click completed at (x, y).
    Click { x: f32, y: f32 },
    /// The viewport changed size.
    Resize { width: f32, height: f32 },
    /// Wheel notches (positive = zoom in).
    Wheel { delta: f32 },
}

/// An input event with the page timestamp (ms) it arrived at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedInput {
    pub event: InputEvent,
    pub at_ms: f64,
}

/// A queue of input events.
/// JS pushes events as they arrive; the scene drains them at the start of each frame.
pub struct InputQueue {
    events: Vec<TimedInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent, at_ms: f64) {
        self.events.push(TimedInput { event, at_ms });
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<TimedInput> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
