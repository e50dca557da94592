use glam::Vec2;

/// Tooltip contents for the page to draw. Refreshed on every pointer move.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    /// Screen position in CSS pixels.
    pub screen_x: f32,
    pub screen_y: f32,
}

impl Tooltip {
    /// Show `text` next to the pointer.
    pub fn show(&mut self, text: String, pointer: Vec2, offset: Vec2) {
        self.visible = true;
        self.text = text;
        self.place(pointer, offset);
    }

    /// Hide, but keep tracking the pointer so the four values stay current.
    pub fn hide(&mut self, pointer: Vec2, offset: Vec2) {
        self.visible = false;
        self.text.clear();
        self.place(pointer, offset);
    }

    fn place(&mut self, pointer: Vec2, offset: Vec2) {
        let pos = pointer + offset;
        self.screen_x = pos.x;
        self.screen_y = pos.y;
    }
}
