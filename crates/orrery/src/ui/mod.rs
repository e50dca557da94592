//! DOM-adjacent UI state. Rust decides what the tooltip and overlay show;
//! the page script draws them.

pub mod overlay;
pub mod tooltip;

pub use overlay::OverlayTimer;
pub use tooltip::Tooltip;
